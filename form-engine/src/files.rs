//! Claim document grouping
//!
//! Uploaded files are shown per category. Regular categories are listed
//! alphabetically; "Uncategorized" and then "Final Survey Report" always
//! come last.

use shared::models::{CategoryGroup, FINAL_SURVEY_REPORT, UNCATEGORIZED, UploadedFile};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Category bucket of a file; blank or missing names are uncategorized
fn category_of(file: &UploadedFile) -> &str {
    file.category_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(UNCATEGORIZED)
}

/// Position class of a group: regular groups first, then the two trailing ones
fn sort_rank(category: &str) -> u8 {
    match category {
        UNCATEGORIZED => 1,
        FINAL_SURVEY_REPORT => 2,
        _ => 0,
    }
}

fn compare_groups(a: &CategoryGroup, b: &CategoryGroup) -> Ordering {
    sort_rank(&a.category)
        .cmp(&sort_rank(&b.category))
        .then_with(|| {
            a.category
                .to_lowercase()
                .cmp(&b.category.to_lowercase())
        })
        .then_with(|| a.category.cmp(&b.category))
}

/// Group files by category
///
/// Files keep their input order inside each group. The input slice is
/// left untouched; every file appears in exactly one group.
pub fn group_by_category(files: &[UploadedFile]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for file in files {
        let category = category_of(file);
        let slot = *index.entry(category).or_insert_with(|| {
            groups.push(CategoryGroup {
                category: category.to_string(),
                files: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].files.push(file.clone());
    }

    groups.sort_by(compare_groups);
    groups
}
