pub mod export;
pub mod model;
pub mod seed;
pub mod statistics;

pub use model::*;
pub use seed::*;
pub use statistics::*;
