pub mod term;
pub mod parser;
pub mod config;
pub mod source;
pub mod index;
pub mod facade;

pub use term::*;
pub use config::*;
pub use source::*;
pub use index::*;
pub use facade::*;

#[cfg(test)]
mod tests;
