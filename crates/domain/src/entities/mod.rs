pub mod price_series;

// Re-export for easier access
pub use price_series::{PricePoint, PriceSeries};
