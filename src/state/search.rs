// Element lookup for the header search box.

use crate::model::ElementData;

/// Elements matching `query`, in table order. An empty query matches nothing.
///
/// English names and symbols match case-insensitively by substring, Chinese
/// names by verbatim substring, atomic numbers only when equal to the query.
pub fn search<'a>(elements: &'a [ElementData], query: &str) -> Vec<&'a ElementData> {
    if query.is_empty() {
        return Vec::new();
    }
    let lower = query.to_lowercase();
    elements
        .iter()
        .filter(|e| {
            e.name_en.to_lowercase().contains(&lower)
                || e.name_cn.contains(query)
                || e.symbol.to_lowercase().contains(&lower)
                || e.number.to_string() == query
        })
        .collect()
}
