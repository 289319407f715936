pub mod error;
pub mod io;
pub mod utils;

pub use crate::error::*;
pub use crate::io::*;
pub use crate::utils::*;
