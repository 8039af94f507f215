use crate::{entry::VariantTag, types::UnknownKeyword};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Field
///
/// Every editable field name across all entry variants. Generic field
/// access (`Entry::get` / `Entry::set`) and the static reference tables
/// speak this vocabulary; each variant declares the subset it owns.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Field {
    Background,
    BackgroundAction,
    BulkIn,
    BulkOut,
    Data,
    DataRange,
    DomainRatio,
    Filename,
    Fit,
    HydrateWith,
    Hydration,
    Kind,
    Language,
    Max,
    Min,
    Model,
    Mu,
    Name,
    Path,
    Prior,
    Resolution,
    Roughness,
    Scalefactor,
    Sigma,
    SimulationRange,
    Sld,
    SldImaginary,
    SldReal,
    Thickness,
    Value,
    Value1,
    Value2,
    Value3,
    Value4,
    Value5,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::BackgroundAction => "background_action",
            Self::BulkIn => "bulk_in",
            Self::BulkOut => "bulk_out",
            Self::Data => "data",
            Self::DataRange => "data_range",
            Self::DomainRatio => "domain_ratio",
            Self::Filename => "filename",
            Self::Fit => "fit",
            Self::HydrateWith => "hydrate_with",
            Self::Hydration => "hydration",
            Self::Kind => "kind",
            Self::Language => "language",
            Self::Max => "max",
            Self::Min => "min",
            Self::Model => "model",
            Self::Mu => "mu",
            Self::Name => "name",
            Self::Path => "path",
            Self::Prior => "prior",
            Self::Resolution => "resolution",
            Self::Roughness => "roughness",
            Self::Scalefactor => "scalefactor",
            Self::Sigma => "sigma",
            Self::SimulationRange => "simulation_range",
            Self::Sld => "sld",
            Self::SldImaginary => "sld_imaginary",
            Self::SldReal => "sld_real",
            Self::Thickness => "thickness",
            Self::Value => "value",
            Self::Value1 => "value_1",
            Self::Value2 => "value_2",
            Self::Value3 => "value_3",
            Self::Value4 => "value_4",
            Self::Value5 => "value_5",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// Value
///
/// The value union carried by field patches and returned by generic field
/// reads. Enum-typed fields travel as text and parse through the option
/// keywords in `types`.
///

#[remain::sorted]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Number(f64),
    NumberList(Vec<f64>),
    Text(String),
    TextList(Vec<String>),
}

impl Value {
    /// Shorthand for a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Shorthand for a list of text values.
    pub fn text_list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::TextList(values.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::NumberList(values) => {
                let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
                write!(f, "{}", rendered.join(", "))
            }
            Self::Text(value) => f.write_str(value),
            Self::TextList(values) => write!(f, "{}", values.join(", ")),
        }
    }
}

///
/// FieldError
///
/// Raised by generic field writes. Never observed outside a failed raw
/// operation; the mutation guard restores the touched collection first.
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum FieldError {
    #[error(transparent)]
    Keyword(#[from] UnknownKeyword),

    #[error("field '{field}' expects {expected}")]
    TypeMismatch { field: Field, expected: &'static str },

    #[error("field '{field}' does not exist on variant '{variant}'")]
    Unknown { variant: VariantTag, field: Field },
}

impl FieldError {
    #[must_use]
    pub const fn type_mismatch(field: Field, expected: &'static str) -> Self {
        Self::TypeMismatch { field, expected }
    }

    #[must_use]
    pub const fn unknown(variant: VariantTag, field: Field) -> Self {
        Self::Unknown { variant, field }
    }
}
