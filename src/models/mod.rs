pub mod catalog;
pub mod macros;
pub mod time;

pub use catalog::*;
pub use time::*;
