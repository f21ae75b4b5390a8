pub mod geometry;
pub mod patterns;
pub mod price_domain;
pub mod series;
pub mod view_window;

pub use geometry::SurfaceSpan;
pub use patterns::{CandlePattern, PatternHit, detect_patterns};
pub use price_domain::PriceDomain;
pub use series::{DerivedPoint, PricePoint, Trend, derive_series};
pub use view_window::VisibleRange;
