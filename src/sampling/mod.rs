pub mod entropy;
pub use entropy::*;

pub mod lcg;
pub use lcg::*;

pub mod sampler;
pub use sampler::*;

pub mod source;
pub use source::*;

pub mod uniform;
pub use uniform::*;
