//! Book model and related request types

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// Sentinel title used when the bibliographic service has no title
pub const UNKNOWN_TITLE: &str = "Unknown Title";
/// Sentinel author used when no author name could be resolved
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// A catalog entry. Two books are the same entry iff their normalized
/// identifiers are equal; title and author carry no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Normalized ISBN: no hyphens, no whitespace
    pub isbn: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} (ISBN: {})", self.title, self.author, self.isbn)
    }
}

/// Add-by-ISBN request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    /// ISBN-10 or ISBN-13; hyphens and spaces are allowed
    #[validate(length(min = 10, max = 17, message = "ISBN must be between 10 and 17 characters"))]
    pub isbn: String,
}

/// Manual add request, for records the caller already has metadata for
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookManual {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be empty"))]
    pub author: String,
    #[validate(length(min = 10, max = 17, message = "ISBN must be between 10 and 17 characters"))]
    pub isbn: String,
}

/// Strip hyphens and whitespace from a raw identifier. The result is the
/// canonical catalog key; an empty result means the input was unusable.
pub fn normalize_isbn(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}
