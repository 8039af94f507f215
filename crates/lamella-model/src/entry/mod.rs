mod background;
mod contrast;
mod custom_file;
mod data;
mod domain_contrast;
mod layer;
mod parameter;
mod resolution;


pub use background::Background;
pub use contrast::{Contrast, ContrastWithRatio};
pub use custom_file::CustomFile;
pub use data::Data;
pub use domain_contrast::DomainContrast;
pub use layer::{AbsorptionLayer, Layer};
pub use parameter::Parameter;
pub use resolution::Resolution;

use crate::{
    field::{Field, FieldError, Value},
    types::UnknownKeyword,
};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

///
/// VariantTag
///
/// The concrete shape an entry takes. Each collection accepts exactly one
/// tag at a time, chosen by the mode resolver.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantTag {
    #[display("parameter")]
    Parameter,
    #[display("background")]
    Background,
    #[display("resolution")]
    Resolution,
    #[display("custom file")]
    CustomFile,
    #[display("data")]
    Data,
    #[display("layer")]
    Layer,
    #[display("absorption layer")]
    AbsorptionLayer,
    #[display("domain contrast")]
    DomainContrast,
    #[display("contrast")]
    Contrast,
    #[display("contrast with ratio")]
    ContrastWithRatio,
}

///
/// Entry
///
/// The tagged union over every entry shape a collection can hold.
///

#[derive(Clone, Debug, Deserialize, From, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum Entry {
    Parameter(Parameter),
    Background(Background),
    Resolution(Resolution),
    CustomFile(CustomFile),
    Data(Data),
    Layer(Layer),
    AbsorptionLayer(AbsorptionLayer),
    DomainContrast(DomainContrast),
    Contrast(Contrast),
    ContrastWithRatio(ContrastWithRatio),
}

impl Entry {
    #[must_use]
    pub const fn tag(&self) -> VariantTag {
        match self {
            Self::Parameter(_) => VariantTag::Parameter,
            Self::Background(_) => VariantTag::Background,
            Self::Resolution(_) => VariantTag::Resolution,
            Self::CustomFile(_) => VariantTag::CustomFile,
            Self::Data(_) => VariantTag::Data,
            Self::Layer(_) => VariantTag::Layer,
            Self::AbsorptionLayer(_) => VariantTag::AbsorptionLayer,
            Self::DomainContrast(_) => VariantTag::DomainContrast,
            Self::Contrast(_) => VariantTag::Contrast,
            Self::ContrastWithRatio(_) => VariantTag::ContrastWithRatio,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Parameter(entry) => &entry.name,
            Self::Background(entry) => &entry.name,
            Self::Resolution(entry) => &entry.name,
            Self::CustomFile(entry) => &entry.name,
            Self::Data(entry) => &entry.name,
            Self::Layer(entry) => &entry.name,
            Self::AbsorptionLayer(entry) => &entry.name,
            Self::DomainContrast(entry) => &entry.name,
            Self::Contrast(entry) => &entry.name,
            Self::ContrastWithRatio(entry) => &entry.name,
        }
    }

    /// Whether the entry carries the protected bootstrap marker.
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        match self {
            Self::Parameter(entry) => entry.protected,
            Self::Data(entry) => entry.protected,
            _ => false,
        }
    }

    /// The editable field vocabulary of this entry's variant.
    #[must_use]
    pub const fn fields(&self) -> &'static [Field] {
        match self {
            Self::Parameter(_) => Parameter::FIELDS,
            Self::Background(_) => Background::FIELDS,
            Self::Resolution(_) => Resolution::FIELDS,
            Self::CustomFile(_) => CustomFile::FIELDS,
            Self::Data(_) => Data::FIELDS,
            Self::Layer(_) => Layer::FIELDS,
            Self::AbsorptionLayer(_) => AbsorptionLayer::FIELDS,
            Self::DomainContrast(_) => DomainContrast::FIELDS,
            Self::Contrast(_) => Contrast::FIELDS,
            Self::ContrastWithRatio(_) => ContrastWithRatio::FIELDS,
        }
    }

    /// Read a field generically. Returns None for fields the variant does
    /// not own.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<Value> {
        match self {
            Self::Parameter(entry) => entry.get(field),
            Self::Background(entry) => entry.get(field),
            Self::Resolution(entry) => entry.get(field),
            Self::CustomFile(entry) => entry.get(field),
            Self::Data(entry) => entry.get(field),
            Self::Layer(entry) => entry.get(field),
            Self::AbsorptionLayer(entry) => entry.get(field),
            Self::DomainContrast(entry) => entry.get(field),
            Self::Contrast(entry) => entry.get(field),
            Self::ContrastWithRatio(entry) => entry.get(field),
        }
    }

    /// Write a field generically, parsing option keywords from text.
    pub fn set(&mut self, field: Field, value: Value) -> Result<(), FieldError> {
        match self {
            Self::Parameter(entry) => entry.set(field, value),
            Self::Background(entry) => entry.set(field, value),
            Self::Resolution(entry) => entry.set(field, value),
            Self::CustomFile(entry) => entry.set(field, value),
            Self::Data(entry) => entry.set(field, value),
            Self::Layer(entry) => entry.set(field, value),
            Self::AbsorptionLayer(entry) => entry.set(field, value),
            Self::DomainContrast(entry) => entry.set(field, value),
            Self::Contrast(entry) => entry.set(field, value),
            Self::ContrastWithRatio(entry) => entry.set(field, value),
        }
    }
}

// ---- field write helpers ----------------------------------------------

pub(crate) fn take_text(field: Field, value: Value) -> Result<String, FieldError> {
    match value {
        Value::Text(text) => Ok(text),
        _ => Err(FieldError::type_mismatch(field, "text")),
    }
}

pub(crate) fn take_number(field: Field, value: Value) -> Result<f64, FieldError> {
    match value {
        Value::Number(number) => Ok(number),
        _ => Err(FieldError::type_mismatch(field, "a number")),
    }
}

pub(crate) fn take_bool(field: Field, value: Value) -> Result<bool, FieldError> {
    match value {
        Value::Bool(flag) => Ok(flag),
        _ => Err(FieldError::type_mismatch(field, "a bool")),
    }
}

pub(crate) fn take_text_list(field: Field, value: Value) -> Result<Vec<String>, FieldError> {
    match value {
        Value::TextList(values) => Ok(values),
        _ => Err(FieldError::type_mismatch(field, "a list of names")),
    }
}

pub(crate) fn take_number_list(field: Field, value: Value) -> Result<Vec<f64>, FieldError> {
    match value {
        Value::NumberList(values) => Ok(values),
        _ => Err(FieldError::type_mismatch(field, "a list of numbers")),
    }
}

pub(crate) fn parse_keyword<T>(field: Field, value: Value) -> Result<T, FieldError>
where
    T: FromStr<Err = UnknownKeyword>,
{
    Ok(take_text(field, value)?.parse()?)
}

// serde helper for marker fields
pub(crate) const fn is_false(flag: &bool) -> bool {
    !*flag
}
