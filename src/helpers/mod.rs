//! Helper functions shared by view models and templates

mod date;
mod text;

pub use date::*;
pub use text::*;
