//! Setting handlers for the configuration keys.

pub mod simple;
pub mod string;

pub use simple::*;
pub use string::*;
