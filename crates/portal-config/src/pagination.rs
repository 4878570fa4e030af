//! Listing/pagination policy.

use portal_core::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use serde::{Deserialize, Serialize};

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

const fn default_max_page_size() -> u32 {
    MAX_PAGE_SIZE
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationConfig {
    /// Page size used when a request omits `page_size`.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Largest `page_size` a request may ask for. Never above 100.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,

    /// Answer empty listings with 404 instead of an empty page.
    #[serde(default)]
    pub empty_page_not_found: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            empty_page_not_found: false,
        }
    }
}
