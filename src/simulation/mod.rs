pub mod equity;
pub use equity::*;

pub mod outcome;
pub use outcome::*;

pub mod preset;
pub use preset::*;

pub mod simulation;
pub use simulation::*;

pub mod tally;
pub use tally::*;

pub mod trial;
pub use trial::*;
