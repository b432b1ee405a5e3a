//! Wire model for documents returned by the content API

use serde::{Deserialize, Serialize};

/// One page of query results plus the cursor for the next page
///
/// `next_page` is an opaque URL; it is absent on the last page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPage {
    #[serde(default)]
    pub next_page: Option<String>,
    pub results: Vec<PostSummary>,
}

/// Listing entry for a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub uid: String,
    #[serde(default)]
    pub first_publication_date: Option<String>,
    #[serde(default)]
    pub data: SummaryData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub author: String,
}

/// Full document for the post page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    pub uid: String,
    #[serde(default)]
    pub first_publication_date: Option<String>,
    pub data: DetailData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub banner: Banner,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Banner {
    #[serde(default)]
    pub url: Option<String>,
}

/// A content slice: optional heading plus rich-text body fragments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub body: Vec<RichTextBlock>,
}

/// One rich-text fragment: a typed block of plain text with inline spans
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichTextBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub spans: Vec<Span>,
}

/// Inline formatting applied to a character range of the fragment text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Option<SpanData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpanData {
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_response() {
        let json = r#"{
            "page": 1,
            "total_pages": 3,
            "next_page": "https://cms.example.com/documents/search?page=2",
            "results": [
                {
                    "uid": "first-post",
                    "first_publication_date": "2021-03-25T19:25:28+0000",
                    "data": {
                        "title": "First post",
                        "subtitle": "A beginning",
                        "author": "Ana"
                    }
                },
                {
                    "uid": "second-post",
                    "first_publication_date": null,
                    "data": {
                        "title": "Second post",
                        "subtitle": "A follow-up",
                        "author": "Bruno"
                    }
                }
            ]
        }"#;

        let page: PostPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 2);
        assert!(page.next_page.is_some());
        assert_eq!(page.results[0].uid, "first-post");
        assert_eq!(page.results[0].data.author, "Ana");
        assert!(page.results[1].first_publication_date.is_none());
    }

    #[test]
    fn test_parse_last_page_has_no_cursor() {
        let json = r#"{ "results": [] }"#;
        let page: PostPage = serde_json::from_str(json).unwrap();
        assert!(page.next_page.is_none());
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_parse_post_detail() {
        let json = r#"{
            "uid": "how-to-travel",
            "first_publication_date": "2021-03-25T19:25:28+0000",
            "data": {
                "title": "How to travel",
                "banner": { "url": "https://images.example.com/banner.png" },
                "author": "Ana",
                "content": [
                    {
                        "heading": "Packing",
                        "body": [
                            {
                                "type": "paragraph",
                                "text": "Bring a towel.",
                                "spans": [
                                    { "start": 8, "end": 13, "type": "strong" }
                                ]
                            }
                        ]
                    }
                ]
            }
        }"#;

        let detail: PostDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.data.content.len(), 1);
        let block = &detail.data.content[0];
        assert_eq!(block.heading.as_deref(), Some("Packing"));
        assert_eq!(block.body[0].kind, "paragraph");
        assert_eq!(block.body[0].spans[0].kind, "strong");
    }
}
