use crate::{
    entry::{VariantTag, parse_keyword, take_text, take_text_list},
    field::{Field, FieldError, Value},
    types::BackgroundAction,
};
use serde::{Deserialize, Serialize};

///
/// Contrast
///
/// One measured condition: references into data, backgrounds, bulk media,
/// scalefactors and resolutions, plus the ordered model list whose target
/// collection depends on the layer-model and calculation flags.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Contrast {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub data: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub background: String,
    #[serde(default)]
    pub background_action: BackgroundAction,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bulk_in: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bulk_out: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub scalefactor: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resolution: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub model: Vec<String>,
}

impl Contrast {
    pub const FIELDS: &'static [Field] = &[
        Field::Name,
        Field::Data,
        Field::Background,
        Field::BackgroundAction,
        Field::BulkIn,
        Field::BulkOut,
        Field::Scalefactor,
        Field::Resolution,
        Field::Model,
    ];

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: String::new(),
            background: String::new(),
            background_action: BackgroundAction::Add,
            bulk_in: String::new(),
            bulk_out: String::new(),
            scalefactor: String::new(),
            resolution: String::new(),
            model: Vec::new(),
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<Value> {
        match field {
            Field::Name => Some(Value::text(&self.name)),
            Field::Data => Some(Value::text(&self.data)),
            Field::Background => Some(Value::text(&self.background)),
            Field::BackgroundAction => Some(Value::text(self.background_action.to_string())),
            Field::BulkIn => Some(Value::text(&self.bulk_in)),
            Field::BulkOut => Some(Value::text(&self.bulk_out)),
            Field::Scalefactor => Some(Value::text(&self.scalefactor)),
            Field::Resolution => Some(Value::text(&self.resolution)),
            Field::Model => Some(Value::TextList(self.model.clone())),
            _ => None,
        }
    }

    pub fn set(&mut self, field: Field, value: Value) -> Result<(), FieldError> {
        match field {
            Field::Name => self.name = take_text(field, value)?,
            Field::Data => self.data = take_text(field, value)?,
            Field::Background => self.background = take_text(field, value)?,
            Field::BackgroundAction => self.background_action = parse_keyword(field, value)?,
            Field::BulkIn => self.bulk_in = take_text(field, value)?,
            Field::BulkOut => self.bulk_out = take_text(field, value)?,
            Field::Scalefactor => self.scalefactor = take_text(field, value)?,
            Field::Resolution => self.resolution = take_text(field, value)?,
            Field::Model => self.model = take_text_list(field, value)?,
            _ => return Err(FieldError::unknown(VariantTag::Contrast, field)),
        }

        Ok(())
    }
}

///
/// ContrastWithRatio
///
/// Contrast variant active for domains calculations; adds the domain
/// ratio reference.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ContrastWithRatio {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub data: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub background: String,
    #[serde(default)]
    pub background_action: BackgroundAction,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bulk_in: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bulk_out: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub scalefactor: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resolution: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub domain_ratio: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub model: Vec<String>,
}

impl ContrastWithRatio {
    pub const FIELDS: &'static [Field] = &[
        Field::Name,
        Field::Data,
        Field::Background,
        Field::BackgroundAction,
        Field::BulkIn,
        Field::BulkOut,
        Field::Scalefactor,
        Field::Resolution,
        Field::DomainRatio,
        Field::Model,
    ];

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: String::new(),
            background: String::new(),
            background_action: BackgroundAction::Add,
            bulk_in: String::new(),
            bulk_out: String::new(),
            scalefactor: String::new(),
            resolution: String::new(),
            domain_ratio: String::new(),
            model: Vec::new(),
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<Value> {
        match field {
            Field::Name => Some(Value::text(&self.name)),
            Field::Data => Some(Value::text(&self.data)),
            Field::Background => Some(Value::text(&self.background)),
            Field::BackgroundAction => Some(Value::text(self.background_action.to_string())),
            Field::BulkIn => Some(Value::text(&self.bulk_in)),
            Field::BulkOut => Some(Value::text(&self.bulk_out)),
            Field::Scalefactor => Some(Value::text(&self.scalefactor)),
            Field::Resolution => Some(Value::text(&self.resolution)),
            Field::DomainRatio => Some(Value::text(&self.domain_ratio)),
            Field::Model => Some(Value::TextList(self.model.clone())),
            _ => None,
        }
    }

    pub fn set(&mut self, field: Field, value: Value) -> Result<(), FieldError> {
        match field {
            Field::Name => self.name = take_text(field, value)?,
            Field::Data => self.data = take_text(field, value)?,
            Field::Background => self.background = take_text(field, value)?,
            Field::BackgroundAction => self.background_action = parse_keyword(field, value)?,
            Field::BulkIn => self.bulk_in = take_text(field, value)?,
            Field::BulkOut => self.bulk_out = take_text(field, value)?,
            Field::Scalefactor => self.scalefactor = take_text(field, value)?,
            Field::Resolution => self.resolution = take_text(field, value)?,
            Field::DomainRatio => self.domain_ratio = take_text(field, value)?,
            Field::Model => self.model = take_text_list(field, value)?,
            _ => return Err(FieldError::unknown(VariantTag::ContrastWithRatio, field)),
        }

        Ok(())
    }
}
