pub mod display;
pub mod interface;
pub mod prompt;

pub use interface::{MenuChoice, CLI};
