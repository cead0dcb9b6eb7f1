pub mod calculator;
pub use calculator::*;

pub mod method;
pub use method::*;

pub mod request;
pub use request::*;

pub mod response;
pub use response::*;
