use lamella_model::{
    entry::VariantTag,
    field::{Field, FieldError},
    registry::CollectionId,
    types::SourceKind,
};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

///
/// CollectionError
///
/// Raised by raw collection operations before the validation pipeline
/// runs. The mutation guard restores the touched state before any of
/// these reach a caller.
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum CollectionError {
    #[error("'{collection}' already has an entry named '{name}'")]
    DuplicateName {
        collection: CollectionId,
        name: String,
    },

    #[error("'{collection}' entries must have a non-empty name")]
    EmptyName { collection: CollectionId },

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("index {index} is out of range for '{collection}' (len {len})")]
    IndexOutOfRange {
        collection: CollectionId,
        index: usize,
        len: usize,
    },

    #[error("'{collection}' holds '{expected}' entries, got '{found}'")]
    ShapeMismatch {
        collection: CollectionId,
        expected: VariantTag,
        found: VariantTag,
    },

    #[error("'{collection}' has no entry named '{name}'")]
    UnknownName {
        collection: CollectionId,
        name: String,
    },
}

///
/// ValidationError
///
/// Raised by pipeline passes. Always follows a full rollback of the
/// mutation that produced it; pass order guarantees the most informative
/// failure surfaces first.
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum ValidationError {
    #[error("contrast '{name}': the model field {rule}, got {len}")]
    ModelLengthViolation {
        name: String,
        rule: ModelLengthRule,
        len: usize,
    },

    #[error(
        "the values '{}' in the 'model' field of '{collection}' must be defined in '{target}'",
        values.join(", ")
    )]
    ModelValuesViolation {
        collection: CollectionId,
        values: Vec<String>,
        target: CollectionId,
    },

    #[error(
        "cannot delete protected entries from '{collection}': {}",
        names.join(", ")
    )]
    ProtectedRemoved {
        collection: CollectionId,
        names: Vec<String>,
    },

    #[error(
        "the value '{value}' in the '{field}' field of '{collection}' must be defined in '{target}'"
    )]
    ReferenceViolation {
        collection: CollectionId,
        field: Field,
        value: String,
        target: CollectionId,
    },

    #[error("'{kind}' kind {collection} are not yet supported (entry '{name}')")]
    UnsupportedKind {
        collection: CollectionId,
        name: String,
        kind: SourceKind,
    },
}

///
/// ModelLengthRule
///
/// The mode-dependent bound on a contrast model list.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModelLengthRule {
    AtMostOne,
    ExactlyTwo,
}

impl fmt::Display for ModelLengthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AtMostOne => "cannot contain more than one value",
            Self::ExactlyTwo => "must contain exactly two values",
        };
        f.write_str(label)
    }
}
