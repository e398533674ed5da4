//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for updates
//!
//! Contact and lead updates are full replacements of the writer-managed
//! nullable columns (the client submits the whole form state), so their
//! update DTOs mirror the create DTOs instead of being all-`Option`
//! patches.

pub mod company;
pub mod contact;
pub mod lead;
pub mod lead_source;
pub mod role;
pub mod task;
pub mod user;
