//! Wire models for article content.

use serde::Deserialize;
use serde::Serialize;

/// A knowledge/blog article. Listing endpoints send it without `content`;
/// the single-resource endpoint includes the full body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}
