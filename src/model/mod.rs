pub mod book;
pub mod library;
pub mod placement;
pub mod shelf;


pub use book::*;
pub use library::*;
pub use placement::*;
pub use shelf::*;
