pub mod quote;

pub use quote::{QuoteData, QuoteRecord, ResultSet, StatsData};
