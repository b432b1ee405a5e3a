//! Content API module: wire model and query client

mod client;
mod document;

pub use client::{CmsClient, CmsError};
pub use document::{
    Banner, ContentBlock, DetailData, PostDetail, PostPage, PostSummary, RichTextBlock, Span,
    SpanData, SummaryData,
};
