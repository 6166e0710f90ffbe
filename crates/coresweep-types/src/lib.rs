pub mod artifact;
pub mod error;
pub mod status;

pub use artifact::*;
pub use error::*;
pub use status::*;
