pub mod error;
pub mod result;
pub mod security;

pub use error::{DepdiffError, ExitCode};
pub use result::Result;
