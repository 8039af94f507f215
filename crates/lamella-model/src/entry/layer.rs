use crate::{
    entry::{VariantTag, parse_keyword, take_text},
    field::{Field, FieldError, Value},
    types::HydrateWith,
};
use serde::{Deserialize, Serialize};

///
/// Layer
///
/// A slab in a standard-layers stack. Thickness, SLD and roughness are
/// references into `parameters`; hydration optionally references a
/// parameter as well.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Layer {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub thickness: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sld: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub roughness: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hydration: String,
    #[serde(default)]
    pub hydrate_with: HydrateWith,
}

impl Layer {
    pub const FIELDS: &'static [Field] = &[
        Field::Name,
        Field::Thickness,
        Field::Sld,
        Field::Roughness,
        Field::Hydration,
        Field::HydrateWith,
    ];

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            thickness: String::new(),
            sld: String::new(),
            roughness: String::new(),
            hydration: String::new(),
            hydrate_with: HydrateWith::BulkOut,
        }
    }

    #[must_use]
    pub fn with_refs(
        mut self,
        thickness: impl Into<String>,
        sld: impl Into<String>,
        roughness: impl Into<String>,
    ) -> Self {
        self.thickness = thickness.into();
        self.sld = sld.into();
        self.roughness = roughness.into();
        self
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<Value> {
        match field {
            Field::Name => Some(Value::text(&self.name)),
            Field::Thickness => Some(Value::text(&self.thickness)),
            Field::Sld => Some(Value::text(&self.sld)),
            Field::Roughness => Some(Value::text(&self.roughness)),
            Field::Hydration => Some(Value::text(&self.hydration)),
            Field::HydrateWith => Some(Value::text(self.hydrate_with.to_string())),
            _ => None,
        }
    }

    pub fn set(&mut self, field: Field, value: Value) -> Result<(), FieldError> {
        match field {
            Field::Name => self.name = take_text(field, value)?,
            Field::Thickness => self.thickness = take_text(field, value)?,
            Field::Sld => self.sld = take_text(field, value)?,
            Field::Roughness => self.roughness = take_text(field, value)?,
            Field::Hydration => self.hydration = take_text(field, value)?,
            Field::HydrateWith => self.hydrate_with = parse_keyword(field, value)?,
            _ => return Err(FieldError::unknown(VariantTag::Layer, field)),
        }

        Ok(())
    }
}

///
/// AbsorptionLayer
///
/// Layer variant active while absorption is enabled; the SLD splits into
/// real and imaginary parameter references.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AbsorptionLayer {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub thickness: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sld_real: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sld_imaginary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub roughness: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hydration: String,
    #[serde(default)]
    pub hydrate_with: HydrateWith,
}

impl AbsorptionLayer {
    pub const FIELDS: &'static [Field] = &[
        Field::Name,
        Field::Thickness,
        Field::SldReal,
        Field::SldImaginary,
        Field::Roughness,
        Field::Hydration,
        Field::HydrateWith,
    ];

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            thickness: String::new(),
            sld_real: String::new(),
            sld_imaginary: String::new(),
            roughness: String::new(),
            hydration: String::new(),
            hydrate_with: HydrateWith::BulkOut,
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<Value> {
        match field {
            Field::Name => Some(Value::text(&self.name)),
            Field::Thickness => Some(Value::text(&self.thickness)),
            Field::SldReal => Some(Value::text(&self.sld_real)),
            Field::SldImaginary => Some(Value::text(&self.sld_imaginary)),
            Field::Roughness => Some(Value::text(&self.roughness)),
            Field::Hydration => Some(Value::text(&self.hydration)),
            Field::HydrateWith => Some(Value::text(self.hydrate_with.to_string())),
            _ => None,
        }
    }

    pub fn set(&mut self, field: Field, value: Value) -> Result<(), FieldError> {
        match field {
            Field::Name => self.name = take_text(field, value)?,
            Field::Thickness => self.thickness = take_text(field, value)?,
            Field::SldReal => self.sld_real = take_text(field, value)?,
            Field::SldImaginary => self.sld_imaginary = take_text(field, value)?,
            Field::Roughness => self.roughness = take_text(field, value)?,
            Field::Hydration => self.hydration = take_text(field, value)?,
            Field::HydrateWith => self.hydrate_with = parse_keyword(field, value)?,
            _ => return Err(FieldError::unknown(VariantTag::AbsorptionLayer, field)),
        }

        Ok(())
    }
}
