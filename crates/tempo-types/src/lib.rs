//! Foundation types for the tempo temporal record store.
//!
//! This crate provides the data model shared by every other tempo crate.
//!
//! # Key Types
//!
//! - [`RecordId`] — Positive integer identity of a logical record
//! - [`FieldDef`] / [`MUTABLE_FIELDS`] — Static schema table of mutable attributes
//! - [`FieldSet`] — Fully-materialized attribute map for one version
//! - [`Version`] — Immutable snapshot of a record at a point in time
//! - [`parse_timestamp`] — RFC3339 boundary parsing

pub mod error;
pub mod fields;
pub mod id;
pub mod schema;
pub mod time;
pub mod version;

pub use error::TypeError;
pub use fields::FieldSet;
pub use id::RecordId;
pub use schema::{field_def, FieldDef, FieldKind, MUTABLE_FIELDS};
pub use time::parse_timestamp;
pub use version::Version;
