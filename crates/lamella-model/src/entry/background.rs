use crate::{
    entry::{VariantTag, parse_keyword, take_text},
    field::{Field, FieldError, Value},
    types::SourceKind,
};
use serde::{Deserialize, Serialize};

///
/// Background
///
/// A background signal. The `kind` selects which collection the reference
/// slots resolve against: constant backgrounds draw from
/// `background_parameters`, data backgrounds from `data`.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Background {
    pub name: String,

    #[serde(default)]
    pub kind: SourceKind,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value_1: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value_2: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value_3: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value_4: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value_5: String,
}

impl Background {
    pub const FIELDS: &'static [Field] = &[
        Field::Name,
        Field::Kind,
        Field::Value1,
        Field::Value2,
        Field::Value3,
        Field::Value4,
        Field::Value5,
    ];

    pub fn new(name: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value_1: String::new(),
            value_2: String::new(),
            value_3: String::new(),
            value_4: String::new(),
            value_5: String::new(),
        }
    }

    /// A constant background whose first slot references a background
    /// parameter.
    pub fn constant(name: impl Into<String>, source: impl Into<String>) -> Self {
        let mut background = Self::new(name, SourceKind::Constant);
        background.value_1 = source.into();
        background
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<Value> {
        match field {
            Field::Name => Some(Value::text(&self.name)),
            Field::Kind => Some(Value::text(self.kind.to_string())),
            Field::Value1 => Some(Value::text(&self.value_1)),
            Field::Value2 => Some(Value::text(&self.value_2)),
            Field::Value3 => Some(Value::text(&self.value_3)),
            Field::Value4 => Some(Value::text(&self.value_4)),
            Field::Value5 => Some(Value::text(&self.value_5)),
            _ => None,
        }
    }

    pub fn set(&mut self, field: Field, value: Value) -> Result<(), FieldError> {
        match field {
            Field::Name => self.name = take_text(field, value)?,
            Field::Kind => self.kind = parse_keyword(field, value)?,
            Field::Value1 => self.value_1 = take_text(field, value)?,
            Field::Value2 => self.value_2 = take_text(field, value)?,
            Field::Value3 => self.value_3 = take_text(field, value)?,
            Field::Value4 => self.value_4 = take_text(field, value)?,
            Field::Value5 => self.value_5 = take_text(field, value)?,
            _ => return Err(FieldError::unknown(VariantTag::Background, field)),
        }

        Ok(())
    }
}
