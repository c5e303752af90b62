//! Paginated list response.

use serde::{Deserialize, Deserializer, Serialize};

use super::Subject;

/// One page of subjects plus the total number of stored subjects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// Rows of the requested page, in backend order.
    pub subjects: Vec<Subject>,
    /// Total number of subjects across all pages.
    #[serde(deserialize_with = "count_from_number_or_string")]
    pub total: u64,
}

/// SQL `COUNT(*)` results often arrive as strings from PHP backends.
fn count_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCount {
        Number(u64),
        Text(String),
    }

    match RawCount::deserialize(deserializer)? {
        RawCount::Number(n) => Ok(n),
        RawCount::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
