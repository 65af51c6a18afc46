pub mod data;
pub mod io;

#[cfg(test)]
pub mod tests;

pub use data::{Config, CustomTheme};
pub use io::ConfigError;
