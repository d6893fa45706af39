//! Shared contracts of the store admin: entity records, form drafts with
//! their validation schema, list columns and REST paths.

pub mod domain;
pub mod shared;
