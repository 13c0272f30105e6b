//! The scraped item type.

use serde::{Deserialize, Serialize};

/// One extracted item: a category label and the anecdote body.
///
/// Records have no identity beyond structural equality; duplicates across
/// pages are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anecdote {
    pub category: String,
    pub body: String,
}

impl Anecdote {
    pub fn new(category: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            body: body.into(),
        }
    }
}
