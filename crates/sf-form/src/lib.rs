//! # sf-form
//!
//! The flat form value pipeline.
//!
//! This crate provides:
//! - Default extraction from a schema ([`extract_defaults`])
//! - Stripping of empty password-like attributes before save
//!   ([`filter_empty_password_like_attributes`])
//! - Placeholder detection, read-only marking and revert-on-save
//!   ([`placeholder`])
//! - `FlatFormSession`: the load/save orchestration a form view drives
//!
//! ## Architecture
//!
//! Every transformation is a pure function over `sf-core` trees: inputs are
//! borrowed, a new tree is returned. `FlatFormSession` caches what is derived
//! once per schema (defaults, password attribute set, placeholder flag) and
//! hands the final values to a caller-supplied [`FormPersistence`].

pub mod defaults;
pub mod password;
pub mod placeholder;
pub mod session;
pub mod validate;

mod error;

pub use defaults::{DefaultPolicy, apply_defaults, extract_defaults, extract_defaults_with};
pub use error::FormError;
pub use password::{filter_empty_password_like_attributes, password_attributes};
pub use placeholder::{
    contains_placeholder, flatten_placeholders, revert_placeholders_to_original,
    schema_to_read_only_where_placeholder,
};
pub use session::{FlatFormSession, FormOptions, FormPersistence};
