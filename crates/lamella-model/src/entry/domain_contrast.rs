use crate::{
    entry::{VariantTag, take_text, take_text_list},
    field::{Field, FieldError, Value},
};
use serde::{Deserialize, Serialize};

///
/// DomainContrast
///
/// A layer stack usable as one side of a domains contrast. The model list
/// references layer names.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DomainContrast {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub model: Vec<String>,
}

impl DomainContrast {
    pub const FIELDS: &'static [Field] = &[Field::Name, Field::Model];

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: Vec::new(),
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<Value> {
        match field {
            Field::Name => Some(Value::text(&self.name)),
            Field::Model => Some(Value::TextList(self.model.clone())),
            _ => None,
        }
    }

    pub fn set(&mut self, field: Field, value: Value) -> Result<(), FieldError> {
        match field {
            Field::Name => self.name = take_text(field, value)?,
            Field::Model => self.model = take_text_list(field, value)?,
            _ => return Err(FieldError::unknown(VariantTag::DomainContrast, field)),
        }

        Ok(())
    }
}
