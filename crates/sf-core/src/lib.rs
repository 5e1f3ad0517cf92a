//! # sf-core
//!
//! Core types shared across the schemaform crates.
//!
//! This crate provides:
//! - `SchemaNode`: a tagged-union view of a JSON-Schema-like document
//!   (object nodes with named properties vs. leaf nodes)
//! - `ValueTree` and the emptiness/truthiness predicates the form pipeline
//!   relies on
//! - CLI-facing response documents (`PreparedForm`, `Submission`)
//! - Cross-cutting error types

pub mod errors;
pub mod responses;
pub mod schema;
pub mod value;

pub use errors::CoreError;
pub use schema::{LeafSchema, ObjectSchema, SchemaNode};
pub use value::ValueTree;
