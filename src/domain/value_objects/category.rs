//! Content categories that carry image references
//!
//! One reference provider exists per category.

use serde::{Deserialize, Serialize};

/// A kind of persisted content record with image fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    /// Company profile (logo, licence scans)
    Company,
    /// Content category (banner, icon)
    ContentSort,
    /// Content item (thumbnail, gallery)
    Content,
    /// Friendly link (logo)
    Link,
    /// Member (avatar)
    Member,
    /// Site settings (logo)
    Site,
    /// Slide (picture)
    Slide,
}

impl ContentCategory {
    /// Every category, in aggregation order
    pub const ALL: [ContentCategory; 7] = [
        ContentCategory::Company,
        ContentCategory::ContentSort,
        ContentCategory::Content,
        ContentCategory::Link,
        ContentCategory::Member,
        ContentCategory::Site,
        ContentCategory::Slide,
    ];

    /// Stable identifier, also used as the export file stem
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentCategory::Company => "company",
            ContentCategory::ContentSort => "content_sort",
            ContentCategory::Content => "content",
            ContentCategory::Link => "link",
            ContentCategory::Member => "member",
            ContentCategory::Site => "site",
            ContentCategory::Slide => "slide",
        }
    }

    /// File name of the JSON export for this category
    pub fn export_file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl std::fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
