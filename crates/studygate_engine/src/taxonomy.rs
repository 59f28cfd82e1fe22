//! Response shaping for the categorization API.

use serde_json::Value;

use crate::CategorizeError;

const CATEGORY_MARKER: &str = "Category name:";
const CATEGORY_PREFIX: &str = "Category name: ";
const PATH_SEPARATOR: &str = " > ";

const BLOCKED_CATEGORIES: &[&str] = &["Adult"];

/// Returns `filtering_taxonomy[0]`, which must be an array of strings.
pub fn filtering_taxonomy(response: &Value) -> Result<Vec<String>, CategorizeError> {
    let first = response
        .get("filtering_taxonomy")
        .and_then(Value::as_array)
        .and_then(|outer| outer.first())
        .and_then(Value::as_array)
        .ok_or(CategorizeError::InvalidResponseShape)?;

    first
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(ToOwned::to_owned)
                .ok_or(CategorizeError::InvalidResponseShape)
        })
        .collect()
}

/// Returns the blocked category named by the first taxonomy entry, if any.
pub fn blocked_category(taxonomy: &[String]) -> Option<&'static str> {
    let first = taxonomy.first()?;
    BLOCKED_CATEGORIES
        .iter()
        .copied()
        .find(|category| first.contains(&format!("{CATEGORY_PREFIX}{category}")))
}

/// Most specific segment of the first `Category name: A > B > C` entry under
/// `response[field_key][0]`.
pub fn extract_leaf(response: &Value, field_key: &str) -> Option<String> {
    let entries = response
        .get(field_key)?
        .as_array()?
        .first()?
        .as_array()?;

    let entry = entries
        .iter()
        .filter_map(Value::as_str)
        .find(|entry| entry.contains(CATEGORY_MARKER))?;

    let (_, path) = entry.split_once(CATEGORY_PREFIX)?;
    path.split(PATH_SEPARATOR).last().map(ToOwned::to_owned)
}
