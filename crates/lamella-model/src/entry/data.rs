use crate::{
    entry::{VariantTag, is_false, take_number_list, take_text},
    field::{Field, FieldError, Value},
};
use serde::{Deserialize, Serialize};

///
/// Data
///
/// A named measurement range holder. The numeric point arrays live with
/// the engine-input adapter; the graph only tracks the ranges needed to
/// validate references against data names.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Data {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_range: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub simulation_range: Vec<f64>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub protected: bool,
}

impl Data {
    pub const FIELDS: &'static [Field] = &[Field::Name, Field::DataRange, Field::SimulationRange];

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_range: Vec::new(),
            simulation_range: Vec::new(),
            protected: false,
        }
    }

    #[must_use]
    pub fn with_simulation_range(mut self, range: Vec<f64>) -> Self {
        self.simulation_range = range;
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
            Field::DataRange => Some(Value::NumberList(self.data_range.clone())),
            Field::SimulationRange => Some(Value::NumberList(self.simulation_range.clone())),
            _ => None,
        }
    }

    pub fn set(&mut self, field: Field, value: Value) -> Result<(), FieldError> {
        match field {
            Field::Name => self.name = take_text(field, value)?,
            Field::DataRange => self.data_range = take_number_list(field, value)?,
            Field::SimulationRange => self.simulation_range = take_number_list(field, value)?,
            _ => return Err(FieldError::unknown(VariantTag::Data, field)),
        }

        Ok(())
    }
}
