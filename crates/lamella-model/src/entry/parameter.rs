use crate::{
    entry::{is_false, parse_keyword, take_bool, take_number, take_text},
    field::{Field, FieldError, Value},
    types::{Prior, maybe_inf},
};
use serde::{Deserialize, Serialize};

const fn default_sigma() -> f64 {
    f64::INFINITY
}

///
/// Parameter
///
/// A named fittable quantity with prior bounds. All seven parameter-like
/// collections hold this shape. The `protected` marker is set only on
/// bootstrap entries and is not part of the editable field vocabulary.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,

    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub max: f64,
    #[serde(default)]
    pub fit: bool,
    #[serde(default)]
    pub prior: Prior,
    #[serde(default)]
    pub mu: f64,
    #[serde(default = "default_sigma", with = "maybe_inf")]
    pub sigma: f64,

    #[serde(default, skip_serializing_if = "is_false")]
    pub protected: bool,
}

impl Parameter {
    pub const FIELDS: &'static [Field] = &[
        Field::Name,
        Field::Min,
        Field::Value,
        Field::Max,
        Field::Fit,
        Field::Prior,
        Field::Mu,
        Field::Sigma,
    ];

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min: 0.0,
            value: 0.0,
            max: 0.0,
            fit: false,
            prior: Prior::Uniform,
            mu: 0.0,
            sigma: f64::INFINITY,
            protected: false,
        }
    }

    #[must_use]
    pub const fn with_range(mut self, min: f64, value: f64, max: f64) -> Self {
        self.min = min;
        self.value = value;
        self.max = max;
        self
    }

    #[must_use]
    pub const fn with_fit(mut self, fit: bool) -> Self {
        self.fit = fit;
        self
    }

    #[must_use]
    pub const fn into_protected(mut self) -> Self {
        self.protected = true;
        self
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<Value> {
        match field {
            Field::Name => Some(Value::text(&self.name)),
            Field::Min => Some(Value::Number(self.min)),
            Field::Value => Some(Value::Number(self.value)),
            Field::Max => Some(Value::Number(self.max)),
            Field::Fit => Some(Value::Bool(self.fit)),
            Field::Prior => Some(Value::text(self.prior.to_string())),
            Field::Mu => Some(Value::Number(self.mu)),
            Field::Sigma => Some(Value::Number(self.sigma)),
            _ => None,
        }
    }

    pub fn set(&mut self, field: Field, value: Value) -> Result<(), FieldError> {
        match field {
            Field::Name => self.name = take_text(field, value)?,
            Field::Min => self.min = take_number(field, value)?,
            Field::Value => self.value = take_number(field, value)?,
            Field::Max => self.max = take_number(field, value)?,
            Field::Fit => self.fit = take_bool(field, value)?,
            Field::Prior => self.prior = parse_keyword(field, value)?,
            Field::Mu => self.mu = take_number(field, value)?,
            Field::Sigma => self.sigma = take_number(field, value)?,
            _ => return Err(FieldError::unknown(crate::entry::VariantTag::Parameter, field)),
        }

        Ok(())
    }
}
