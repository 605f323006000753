//! Search parameter model

use serde::{Deserialize, Serialize};

/// The last search a team ran
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub terms: String,
    pub is_or_search: bool,
    /// No more pages are available
    pub is_end: bool,
}
