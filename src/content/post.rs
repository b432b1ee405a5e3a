//! View models handed to the templates

use serde::Serialize;

use super::richtext;
use crate::cms::{PostDetail, PostSummary};
use crate::helpers::{count_words, publication_date, reading_time};

/// Listing entry, with the publication date already formatted
#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub uid: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub date: String,
}

impl From<&PostSummary> for SummaryView {
    fn from(summary: &PostSummary) -> Self {
        Self {
            uid: summary.uid.clone(),
            title: summary.data.title.clone(),
            subtitle: summary.data.subtitle.clone(),
            author: summary.data.author.clone(),
            date: publication_date(summary.first_publication_date.as_deref()),
        }
    }
}

/// One content slice with its body rendered to HTML
#[derive(Debug, Clone, Serialize)]
pub struct BlockView {
    pub heading: Option<String>,
    pub body_html: String,
}

/// Full post, ready to render
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub title: String,
    pub banner_url: Option<String>,
    pub author: String,
    pub date: String,
    pub reading_minutes: usize,
    pub content: Vec<BlockView>,
}

impl From<&PostDetail> for PostView {
    fn from(detail: &PostDetail) -> Self {
        let total_words: usize = detail
            .data
            .content
            .iter()
            .map(|block| {
                let heading_words = block.heading.as_deref().map(count_words).unwrap_or(0);
                let body_words: usize = block
                    .body
                    .iter()
                    .map(|fragment| count_words(&fragment.text))
                    .sum();
                heading_words + body_words
            })
            .sum();

        let content = detail
            .data
            .content
            .iter()
            .map(|block| BlockView {
                heading: block.heading.clone(),
                body_html: richtext::render(&block.body),
            })
            .collect();

        Self {
            title: detail.data.title.clone(),
            banner_url: detail.data.banner.url.clone(),
            author: detail.data.author.clone(),
            date: publication_date(detail.first_publication_date.as_deref()),
            reading_minutes: reading_time(total_words),
            content,
        }
    }
}
