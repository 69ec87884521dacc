//! Draft state of the multi-section region editor.
//!
//! One draft owns every scalar field, three ordered sub-lists edited by
//! position, and two image slots whose uploads are deferred until submission.

use validator::Validate;

use crate::domain::region::{
    CtaStat, FaqItem, ImageUpload, Region, RegionPayload, WhatToExpectItem, join_tags, parse_tags,
};
use crate::forms::FormError;

const DEFAULT_WHAT_TO_EXPECT_TITLE: &str = "What to expect";

/// One image attachment point of the form.
///
/// Selecting a file keeps the bytes locally for preview; nothing touches the
/// network until the form is submitted, and an untouched slot leaves the
/// stored path exactly as it was.
#[derive(Clone, Debug, Default)]
pub struct ImageSlot {
    /// Path currently stored on the record, if any.
    pub stored_path: Option<String>,
    selection: Option<ImageUpload>,
}

impl ImageSlot {
    pub fn existing(stored_path: Option<String>) -> Self {
        Self {
            stored_path,
            selection: None,
        }
    }

    pub fn select(&mut self, file_name: impl Into<String>, content: Vec<u8>) {
        self.selection = Some(ImageUpload {
            file_name: file_name.into(),
            content,
        });
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<&ImageUpload> {
        self.selection.as_ref()
    }

    /// Bytes of the locally selected file, for rendering a preview.
    pub fn preview(&self) -> Option<&[u8]> {
        self.selection.as_ref().map(|file| file.content.as_slice())
    }

    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }
}

#[derive(Clone, Debug, Validate)]
pub struct RegionForm {
    /// Set when editing an existing region.
    pub id: Option<String>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "slug is required"))]
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,

    /// Comma-separated tag text as typed; parsed on submit.
    pub tags_text: String,

    pub cover: ImageSlot,
    pub hero: ImageSlot,

    pub what_to_expect_title: String,
    pub what_to_expect_intro: String,
    pub what_to_expect_items: Vec<WhatToExpectItem>,

    pub faq_items: Vec<FaqItem>,

    pub quick_links_tip_title: String,
    pub quick_links_tip_text: String,

    pub cta_title: String,
    pub cta_text: String,
    pub cta_button_label: String,
    pub cta_button_url: String,
    pub cta_stats: Vec<CtaStat>,
}

impl Default for RegionForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            slug: String::new(),
            title: String::new(),
            subtitle: String::new(),
            description: String::new(),
            tags_text: String::new(),
            cover: ImageSlot::default(),
            hero: ImageSlot::default(),
            what_to_expect_title: DEFAULT_WHAT_TO_EXPECT_TITLE.to_string(),
            what_to_expect_intro: String::new(),
            what_to_expect_items: Vec::new(),
            faq_items: Vec::new(),
            quick_links_tip_title: String::new(),
            quick_links_tip_text: String::new(),
            cta_title: String::new(),
            cta_text: String::new(),
            cta_button_label: String::new(),
            cta_button_url: String::new(),
            cta_stats: Vec::new(),
        }
    }
}

impl RegionForm {
    /// Seeds the editor from an existing region.
    pub fn from_region(region: &Region) -> Self {
        Self {
            id: Some(region.id.clone()),
            name: region.name.clone(),
            slug: region.slug.clone(),
            title: region.title.clone(),
            subtitle: region.subtitle.clone(),
            description: region.description.clone(),
            tags_text: join_tags(&region.tags),
            cover: ImageSlot::existing(region.cover_image_path.clone()),
            hero: ImageSlot::existing(region.hero_image_path.clone()),
            what_to_expect_title: region.what_to_expect_title.clone(),
            what_to_expect_intro: region.what_to_expect_intro.clone(),
            what_to_expect_items: region.what_to_expect_items.clone().unwrap_or_default(),
            faq_items: region.faq.clone().unwrap_or_default(),
            quick_links_tip_title: region.quick_links_tip_title.clone().unwrap_or_default(),
            quick_links_tip_text: region.quick_links_tip_text.clone().unwrap_or_default(),
            cta_title: region.cta_title.clone().unwrap_or_default(),
            cta_text: region.cta_text.clone().unwrap_or_default(),
            cta_button_label: region.cta_button_label.clone().unwrap_or_default(),
            cta_button_url: region.cta_button_url.clone().unwrap_or_default(),
            cta_stats: region.cta_stats.clone().unwrap_or_default(),
        }
    }

    pub fn add_what_to_expect_item(&mut self) {
        self.what_to_expect_items.push(WhatToExpectItem::default());
    }

    /// Removes by position; later elements shift up. Out-of-range is a no-op.
    pub fn remove_what_to_expect_item(&mut self, index: usize) {
        if index < self.what_to_expect_items.len() {
            self.what_to_expect_items.remove(index);
        }
    }

    pub fn add_faq_item(&mut self) {
        self.faq_items.push(FaqItem::default());
    }

    pub fn remove_faq_item(&mut self, index: usize) {
        if index < self.faq_items.len() {
            self.faq_items.remove(index);
        }
    }

    pub fn add_cta_stat(&mut self) {
        self.cta_stats.push(CtaStat::default());
    }

    pub fn remove_cta_stat(&mut self, index: usize) {
        if index < self.cta_stats.len() {
            self.cta_stats.remove(index);
        }
    }

    /// Parsed tags as they would be submitted.
    pub fn tags(&self) -> Vec<String> {
        parse_tags(&self.tags_text)
    }

    /// Builds the request body: scalars trimmed, `title` falling back to
    /// `name`, blank optional sections mapped to `null`.
    pub fn to_payload(&self) -> Result<RegionPayload, FormError> {
        self.validate()?;

        let name = self.name.trim().to_string();
        let title = if self.title.trim().is_empty() {
            name.clone()
        } else {
            self.title.trim().to_string()
        };
        let what_to_expect_title = if self.what_to_expect_title.trim().is_empty() {
            DEFAULT_WHAT_TO_EXPECT_TITLE.to_string()
        } else {
            self.what_to_expect_title.trim().to_string()
        };

        Ok(RegionPayload {
            name,
            slug: self.slug.trim().to_string(),
            title,
            subtitle: self.subtitle.trim().to_string(),
            description: self.description.trim().to_string(),
            tags: self.tags(),
            what_to_expect_title,
            what_to_expect_intro: self.what_to_expect_intro.trim().to_string(),
            what_to_expect_items: self.what_to_expect_items.clone(),
            faq: self.faq_items.clone(),
            quick_links_tip_title: optional(&self.quick_links_tip_title),
            quick_links_tip_text: optional(&self.quick_links_tip_text),
            cta_title: optional(&self.cta_title),
            cta_text: optional(&self.cta_text),
            cta_button_label: optional(&self.cta_button_label),
            cta_button_url: optional(&self.cta_button_url),
            cta_stats: self.cta_stats.clone(),
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
