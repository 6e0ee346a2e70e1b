//! Fixtures shared by handler tests.

use std::io;
use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use tracing::subscriber::DefaultGuard;

use crate::domain::foundation::{Difficulty, Money, RibbonId};
use crate::domain::pricing::{Segment, Segments};
use crate::domain::recipe::{RecipeDraft, RecipeLayer};
use crate::domain::ribbon::RibbonDraft;

pub fn money(s: &str) -> Money {
    s.parse().unwrap()
}

/// 1.80/yard, so exactly 0.05/inch.
pub fn ribbon_draft(name: &str) -> RibbonDraft {
    RibbonDraft {
        name: name.to_string(),
        ribbon_type: "Grosgrain".to_string(),
        material: "Polyester".to_string(),
        width: Decimal::new(15, 1),
        roll_length: Decimal::from(50),
        colors: vec!["Pink".to_string()],
        pattern: None,
        vendor: Some("Acme".to_string()),
        availability: None,
        cost_per_yard: money("1.80"),
        in_stock: 5,
        min_stock: 2,
        notes: None,
    }
}

/// 2 loops of 6 in and 2 tails of 12 in: 36 in total.
pub fn loops_and_tails() -> Segments {
    Segments {
        loops: vec![Segment::new(2, Decimal::from(6))],
        tails: vec![Segment::new(2, Decimal::from(12))],
        streamers: vec![],
    }
}

pub fn recipe_draft(layers: Vec<(RibbonId, &str)>) -> RecipeDraft {
    RecipeDraft {
        name: "Boutique Stack".to_string(),
        description: "Two-layer boutique bow".to_string(),
        category: "Boutique".to_string(),
        difficulty: Difficulty::Medium,
        time_to_make: Some("20 minutes".to_string()),
        layers: layers
            .into_iter()
            .map(|(ribbon_id, name)| RecipeLayer {
                ribbon_id,
                name: name.to_string(),
                segments: loops_and_tails(),
            })
            .collect(),
        instructions: vec!["Cut loops".to_string(), "Stack and tie".to_string()],
        notes: None,
    }
}

/// In-memory sink for log lines emitted while a test runs.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Routes this thread's events into a buffer until the guard drops.
pub fn capture_logs() -> (DefaultGuard, LogBuffer) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    (tracing::subscriber::set_default(subscriber), buffer)
}
