//! View-model layer between the content API and the templates

mod post;
pub mod richtext;

pub use post::{BlockView, PostView, SummaryView};
