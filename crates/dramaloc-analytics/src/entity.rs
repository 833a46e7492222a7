//! Drama / language / translator matchers
//!
//! Each dimension may be populated under more than one field name, so a
//! record matches when any of its aliases equals the filter value.

use dramaloc_core::FilterRecord;

/// Filter value that disables a dimension
const ALL: &str = "all";

fn active_filter(filter: Option<&str>) -> Option<&str> {
    filter.filter(|f| !f.is_empty() && *f != ALL)
}

fn any_alias_equals(aliases: &[&Option<String>], filter: &str) -> bool {
    aliases
        .iter()
        .any(|field| field.as_deref() == Some(filter))
}

/// Match by `drama_id`, `drama_name` or `drama`
pub fn matches_drama(item: &FilterRecord, filter: Option<&str>) -> bool {
    match active_filter(filter) {
        None => true,
        Some(f) => any_alias_equals(&[&item.drama_id, &item.drama_name, &item.drama], f),
    }
}

/// Match by `language_code` or `language`
pub fn matches_language(item: &FilterRecord, filter: Option<&str>) -> bool {
    match active_filter(filter) {
        None => true,
        Some(f) => any_alias_equals(&[&item.language_code, &item.language], f),
    }
}

/// Match by `translator` or `name`
pub fn matches_translator(item: &FilterRecord, filter: Option<&str>) -> bool {
    match active_filter(filter) {
        None => true,
        Some(f) => any_alias_equals(&[&item.translator, &item.name], f),
    }
}
