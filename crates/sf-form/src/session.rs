//! Load/save orchestration for a single flat form.
//!
//! ```text
//! load(schema, original) ─► initial_values / display_schema
//!        (user edits)
//! submit(edited) ─► drop empty passwords ─► [validate] ─► revert placeholders
//!                ─► persistence
//! ```
//!
//! A session owns its inputs and the values derived from them once. It has
//! no interior mutability; every method takes `&self` and returns new trees.

use std::collections::BTreeSet;

use sf_config::SchemaformConfig;
use sf_core::responses::{PreparedForm, Submission};
use sf_core::{SchemaNode, ValueTree};

use crate::defaults::{DefaultPolicy, apply_defaults, extract_defaults_with};
use crate::error::FormError;
use crate::password::{filter_empty_password_like_attributes, password_attributes};
use crate::placeholder::{
    flatten_placeholders, reconcile, schema_to_read_only_where_placeholder,
    tree_contains_placeholder,
};
use crate::validate::validate_values;

/// The collaborator that persists saved values, typically a REST update.
pub trait FormPersistence {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist `values`. Called once per successful submit.
    ///
    /// # Errors
    ///
    /// Whatever the backing store reports.
    fn update(&mut self, values: &ValueTree) -> Result<(), Self::Error>;
}

/// Knobs for a form session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOptions {
    pub password_format: String,
    pub default_policy: DefaultPolicy,
    pub placeholders: bool,
    pub validate_on_save: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self::from(&SchemaformConfig::default())
    }
}

impl From<&SchemaformConfig> for FormOptions {
    fn from(config: &SchemaformConfig) -> Self {
        Self {
            password_format: config.form.password_format.clone(),
            default_policy: if config.form.keep_falsy_defaults {
                DefaultPolicy::Declared
            } else {
                DefaultPolicy::Truthy
            },
            placeholders: config.placeholders.enabled,
            validate_on_save: config.form.validate_on_save,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FlatFormSession {
    schema: SchemaNode,
    original: ValueTree,
    display_schema: SchemaNode,
    defaults: ValueTree,
    flattened: ValueTree,
    password_attributes: BTreeSet<String>,
    has_placeholders: bool,
    options: FormOptions,
}

impl FlatFormSession {
    /// Derive everything the form needs from the fetched schema and values.
    #[must_use]
    pub fn load(schema: SchemaNode, original: ValueTree, options: FormOptions) -> Self {
        let defaults = extract_defaults_with(&schema, options.default_policy);
        let password_attributes = password_attributes(&schema, &options.password_format);

        let (display_schema, flattened, has_placeholders) = if options.placeholders {
            let flattened = flatten_placeholders(&original);
            let has_placeholders = tree_contains_placeholder(&flattened);
            let display_schema = if has_placeholders {
                schema_to_read_only_where_placeholder(&original, &schema)
            } else {
                schema.clone()
            };
            (display_schema, flattened, has_placeholders)
        } else {
            (schema.clone(), original.clone(), false)
        };

        tracing::debug!(
            defaults = defaults.len(),
            password_attributes = password_attributes.len(),
            has_placeholders,
            "form session loaded"
        );

        Self {
            schema,
            original,
            display_schema,
            defaults,
            flattened,
            password_attributes,
            has_placeholders,
            options,
        }
    }

    /// The schema as fetched.
    #[must_use]
    pub const fn schema(&self) -> &SchemaNode {
        &self.schema
    }

    /// The schema to render, with placeholder fields read-only.
    #[must_use]
    pub const fn display_schema(&self) -> &SchemaNode {
        &self.display_schema
    }

    #[must_use]
    pub const fn original_values(&self) -> &ValueTree {
        &self.original
    }

    #[must_use]
    pub const fn defaults(&self) -> &ValueTree {
        &self.defaults
    }

    #[must_use]
    pub const fn password_attributes(&self) -> &BTreeSet<String> {
        &self.password_attributes
    }

    #[must_use]
    pub const fn has_placeholders(&self) -> bool {
        self.has_placeholders
    }

    #[must_use]
    pub const fn options(&self) -> &FormOptions {
        &self.options
    }

    /// Values to populate the form with: server values (placeholders
    /// flattened) over schema defaults.
    #[must_use]
    pub fn initial_values(&self) -> ValueTree {
        apply_defaults(&self.defaults, &self.flattened)
    }

    /// Everything the view needs to render, as one document.
    #[must_use]
    pub fn prepared(&self) -> PreparedForm {
        PreparedForm {
            schema: self.display_schema.clone().into(),
            defaults: self.defaults.clone(),
            values: self.initial_values(),
            password_attributes: self.password_attributes.iter().cloned().collect(),
            has_placeholders: self.has_placeholders,
        }
    }

    /// Turn edited values into what should be persisted.
    ///
    /// # Errors
    ///
    /// Only when `validate_on_save` is set: `FormError::Schema` or
    /// `FormError::ValidationFailed`.
    pub fn prepare_submission(&self, edited: &ValueTree) -> Result<Submission, FormError> {
        let filtered = filter_empty_password_like_attributes(edited, &self.password_attributes);
        let dropped_password_attributes: Vec<String> = edited
            .keys()
            .filter(|key| !filtered.contains_key(key.as_str()))
            .cloned()
            .collect();

        if self.options.validate_on_save {
            validate_values(&self.display_schema, &filtered)?;
        }

        let (values, reverted_placeholders) = if self.has_placeholders {
            let reconciliation = reconcile(&filtered, &self.schema, &self.original);
            (reconciliation.values, reconciliation.reverted)
        } else {
            (filtered, Vec::new())
        };

        tracing::debug!(
            dropped = dropped_password_attributes.len(),
            reverted = reverted_placeholders.len(),
            "form submission prepared"
        );

        Ok(Submission {
            values,
            dropped_password_attributes,
            reverted_placeholders,
        })
    }

    /// Prepare the submission and hand its values to `persistence`.
    ///
    /// # Errors
    ///
    /// Everything [`Self::prepare_submission`] returns, plus
    /// `FormError::Persistence` when the update fails.
    pub fn submit<P: FormPersistence>(
        &self,
        edited: &ValueTree,
        persistence: &mut P,
    ) -> Result<Submission, FormError> {
        let submission = self.prepare_submission(edited)?;
        persistence
            .update(&submission.values)
            .map_err(|e| FormError::Persistence(Box::new(e)))?;
        Ok(submission)
    }
}
