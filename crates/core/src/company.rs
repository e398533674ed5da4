//! Company reference normalization for relational writes.
//!
//! A contact or lead payload may carry a free-text company name, an
//! explicit company id, or neither. [`CompanyRef::from_payload`] collapses
//! those into one of three cases so the write path resolves the reference
//! exactly once, before anything is persisted.

use crate::types::DbId;

/// A normalized company reference extracted from a write payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyRef {
    /// A non-empty, trimmed company name. Resolved by exact, case-sensitive
    /// match against `companies.name`; a new company row is created when no
    /// row matches.
    Name(String),
    /// An explicit company id. Must reference an existing row.
    Id(DbId),
    /// No company association.
    None,
}

impl CompanyRef {
    /// Normalize the raw payload fields into a [`CompanyRef`].
    ///
    /// A name that is non-empty after trimming takes precedence over an id.
    /// Only leading/trailing whitespace is stripped; casing and punctuation
    /// are preserved, so names differing only in case resolve to distinct
    /// companies.
    pub fn from_payload(company_id: Option<DbId>, company_name: Option<&str>) -> Self {
        if let Some(name) = company_name {
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                return Self::Name(trimmed.to_string());
            }
        }
        match company_id {
            Some(id) => Self::Id(id),
            None => Self::None,
        }
    }
}
