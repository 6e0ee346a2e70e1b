//! Sales command and query handlers.

mod list_sales;
mod record_sale;

pub use list_sales::{ListSalesHandler, ListSalesQuery, SalesSummaryHandler};
pub use record_sale::{RecordSaleCommand, RecordSaleHandler};
