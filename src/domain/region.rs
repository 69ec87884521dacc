use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the "what to expect" section; identified only by position.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct WhatToExpectItem {
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CtaStat {
    pub label: String,
    pub caption: String,
}

/// Marketing content for one region landing page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: String,
    /// Unique URL-safe slug.
    pub slug: String,
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,

    pub cover_image_path: Option<String>,
    pub hero_image_path: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub what_to_expect_title: String,
    pub what_to_expect_intro: String,
    #[serde(default)]
    pub what_to_expect_items: Option<Vec<WhatToExpectItem>>,

    #[serde(default)]
    pub faq: Option<Vec<FaqItem>>,

    pub quick_links_tip_title: Option<String>,
    pub quick_links_tip_text: Option<String>,

    pub cta_title: Option<String>,
    pub cta_text: Option<String>,
    pub cta_button_label: Option<String>,
    pub cta_button_url: Option<String>,
    #[serde(default)]
    pub cta_stats: Option<Vec<CtaStat>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of region create and update requests.
///
/// The dashboard always submits the full structured content, so the same
/// shape serves `POST /regions` and `PATCH /regions/{id}`.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegionPayload {
    pub name: String,
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,

    pub tags: Vec<String>,

    pub what_to_expect_title: String,
    pub what_to_expect_intro: String,
    pub what_to_expect_items: Vec<WhatToExpectItem>,

    pub faq: Vec<FaqItem>,

    pub quick_links_tip_title: Option<String>,
    pub quick_links_tip_text: Option<String>,

    pub cta_title: Option<String>,
    pub cta_text: Option<String>,
    pub cta_button_label: Option<String>,
    pub cta_button_url: Option<String>,
    pub cta_stats: Vec<CtaStat>,
}

/// Named image attachment point on a region, each with its own endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionImageSlot {
    Cover,
    Hero,
}

impl RegionImageSlot {
    pub fn endpoint_segment(self) -> &'static str {
        match self {
            RegionImageSlot::Cover => "cover-image",
            RegionImageSlot::Hero => "hero-image",
        }
    }
}

/// A file picked for upload: kept in memory until submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// Response of the per-slot upload endpoints; only the stored path comes
/// back, never the updated region record.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UploadedImage {
    pub path: String,
}

/// Splits free tag text on commas, trimming and dropping empty segments.
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`parse_tags`]: joins tags for display in the text input.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}
