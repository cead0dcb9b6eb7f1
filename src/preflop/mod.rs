pub mod cache;
pub use cache::*;

pub mod class;
pub use class::*;

pub mod exhaustive;
pub use exhaustive::*;

pub mod generator;
pub use generator::*;

pub mod table;
pub use table::*;
