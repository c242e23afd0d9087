// src/models/selectors.rs

//! CSS selectors for scraping the broadcast listing page.

use serde::{Deserialize, Serialize};

/// CSS selectors for scraping the broadcast listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingSelectors {
    /// Selector for each broadcast entry in the list
    #[serde(default = "default_row")]
    pub row_selector: String,

    /// Selector for the title link within an entry
    #[serde(default = "default_title")]
    pub title_selector: String,

    /// Selector for the metadata ("note") node within an entry
    #[serde(default = "default_note")]
    pub note_selector: String,

    /// Selector for the sport logo image within an entry
    #[serde(default = "default_logo", skip_serializing_if = "Option::is_none")]
    pub logo_selector: Option<String>,

    /// HTML attribute name for extracting the stream link (usually "href")
    #[serde(default = "default_attr_name")]
    pub attr_name: String,
}

fn default_row() -> String {
    "li".to_string()
}

fn default_title() -> String {
    "a".to_string()
}

fn default_note() -> String {
    ".note".to_string()
}

fn default_logo() -> Option<String> {
    Some("img".to_string())
}

fn default_attr_name() -> String {
    "href".to_string()
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            row_selector: default_row(),
            title_selector: default_title(),
            note_selector: default_note(),
            logo_selector: default_logo(),
            attr_name: default_attr_name(),
        }
    }
}

impl ListingSelectors {
    /// All selector strings that must compile, paired with their field name.
    pub fn all(&self) -> Vec<(&'static str, &str)> {
        let mut list = vec![
            ("row_selector", self.row_selector.as_str()),
            ("title_selector", self.title_selector.as_str()),
            ("note_selector", self.note_selector.as_str()),
        ];
        if let Some(logo) = &self.logo_selector {
            list.push(("logo_selector", logo.as_str()));
        }
        list
    }
}
