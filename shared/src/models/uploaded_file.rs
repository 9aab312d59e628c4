//! Uploaded File Models

use serde::{Deserialize, Serialize};

/// Bucket for files without a category
pub const UNCATEGORIZED: &str = "Uncategorized";
/// Category always listed after the regular ones
pub const FINAL_SURVEY_REPORT: &str = "Final Survey Report";

/// A file attached to a claim, as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Storage path including file name and extension
    pub path: String,
    #[serde(default)]
    pub category_name: Option<String>,
}

impl UploadedFile {
    pub fn new(path: impl Into<String>, category_name: Option<&str>) -> Self {
        Self {
            path: path.into(),
            category_name: category_name.map(str::to_string),
        }
    }

    /// Last path segment (either `/` or `\` separated)
    pub fn file_name(&self) -> &str {
        self.path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.path.as_str())
    }

    /// Lower-cased extension without the dot, if any
    pub fn extension(&self) -> Option<String> {
        let name = self.file_name();
        match name.rfind('.') {
            Some(idx) if idx > 0 && idx + 1 < name.len() => {
                Some(name[idx + 1..].to_ascii_lowercase())
            }
            _ => None,
        }
    }
}

/// Files sharing one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub category: String,
    pub files: Vec<UploadedFile>,
}
