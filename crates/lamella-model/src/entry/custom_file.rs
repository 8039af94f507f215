use crate::{
    entry::{VariantTag, parse_keyword, take_text},
    field::{Field, FieldError, Value},
    types::Language,
};
use serde::{Deserialize, Serialize};

///
/// CustomFile
///
/// A user-supplied model function on disk. Contrast model lists reference
/// these by name when the layer model is a custom kind.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CustomFile {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub filename: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
}

impl CustomFile {
    pub const FIELDS: &'static [Field] =
        &[Field::Name, Field::Filename, Field::Language, Field::Path];

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filename: String::new(),
            language: Language::Python,
            path: String::new(),
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<Value> {
        match field {
            Field::Name => Some(Value::text(&self.name)),
            Field::Filename => Some(Value::text(&self.filename)),
            Field::Language => Some(Value::text(self.language.to_string())),
            Field::Path => Some(Value::text(&self.path)),
            _ => None,
        }
    }

    pub fn set(&mut self, field: Field, value: Value) -> Result<(), FieldError> {
        match field {
            Field::Name => self.name = take_text(field, value)?,
            Field::Filename => self.filename = take_text(field, value)?,
            Field::Language => self.language = parse_keyword(field, value)?,
            Field::Path => self.path = take_text(field, value)?,
            _ => return Err(FieldError::unknown(VariantTag::CustomFile, field)),
        }

        Ok(())
    }
}
