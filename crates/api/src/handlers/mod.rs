pub mod auth;
pub mod company;
pub mod contact;
pub mod lead;
pub mod lead_source;
pub mod task;
