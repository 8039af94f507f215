//! Runtime for the lamella project graph: ordered collections of typed
//! entries, mode-driven shape resolution, the staged validation pipeline,
//! and the transactional mutation guard that keeps every edit atomic.

pub mod collection;
pub mod convert;
pub mod error;
pub mod project;
pub mod resolver;

pub(crate) mod validate;

pub use lamella_model as model;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        collection::{Collection, Selector},
        error::{CollectionError, Error, ModelLengthRule, ValidationError},
        project::{Project, ProjectState},
        resolver::ModeFlags,
    };
    pub use lamella_model::prelude::*;
}
