//! Model definitions for lamella: the entry variants held by each project
//! collection, the field/value vocabulary used for generic field access, and
//! the static tables (reference targets, rename uses, bootstrap defaults)
//! the runtime graph consumes.

pub mod entry;
pub mod field;
pub mod registry;
pub mod types;

/// Number of reference slots on a background or resolution entry.
pub const SOURCE_VALUE_SLOTS: usize = 5;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        entry::{
            AbsorptionLayer, Background, Contrast, ContrastWithRatio, CustomFile, Data,
            DomainContrast, Entry, Layer, Parameter, Resolution, VariantTag,
        },
        field::{Field, FieldError, Value},
        registry::CollectionId,
        types::{
            BackgroundAction, Calculation, Geometry, HydrateWith, Language, LayerModel, Prior,
            SourceKind,
        },
    };
}
