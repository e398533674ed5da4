//! Domain logic for the Vantage CRM backend.
//!
//! This crate contains no database or HTTP dependencies. It holds the
//! shared id/timestamp types, the domain error enum, the lead pipeline
//! vocabulary and follow-up classification, company reference
//! normalization, write-path validation, the capability-set permission
//! model, and PII masking.

pub mod company;
pub mod error;
pub mod lead;
pub mod masking;
pub mod permissions;
pub mod roles;
pub mod types;
pub mod validation;
