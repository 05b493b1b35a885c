use serde::{Deserialize, Serialize};

use crate::pagination::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationConfig {
    /// Page size used when a list request omits `page_size`
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}
