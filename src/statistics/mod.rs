pub mod imp;
pub mod r#trait;

pub use imp::library::ShelfMetric;
pub use r#trait::Statistics;
