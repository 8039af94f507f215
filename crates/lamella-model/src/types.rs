use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error as ThisError;

///
/// UnknownKeyword
///
/// Raised when free text cannot be parsed into one of the option enums
/// below. The `what` label names the enum for error messages.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown {what} keyword: '{value}'")]
pub struct UnknownKeyword {
    pub what: &'static str,
    pub value: String,
}

impl UnknownKeyword {
    fn new(what: &'static str, value: &str) -> Self {
        Self {
            what,
            value: value.to_string(),
        }
    }
}

///
/// Calculation
///
/// The calculation kind drives the contrast variant and whether the domain
/// collections are allowed to hold entries.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Calculation {
    #[default]
    #[display("non polarised")]
    NonPolarised,
    #[display("domains")]
    Domains,
}

impl FromStr for Calculation {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "non polarised" | "non_polarised" => Ok(Self::NonPolarised),
            "domains" => Ok(Self::Domains),
            _ => Err(UnknownKeyword::new("calculation", s)),
        }
    }
}

///
/// LayerModel
///
/// The layer-model kind. Anything other than standard layers forces the
/// `layers` collection empty and sources contrast models from custom files.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LayerModel {
    #[default]
    #[display("standard layers")]
    StandardLayers,
    #[display("custom xy")]
    CustomXy,
    #[display("custom files")]
    CustomFiles,
}

impl FromStr for LayerModel {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard layers" | "standard_layers" => Ok(Self::StandardLayers),
            "custom xy" | "custom_xy" => Ok(Self::CustomXy),
            "custom files" | "custom_files" => Ok(Self::CustomFiles),
            _ => Err(UnknownKeyword::new("layer model", s)),
        }
    }
}

///
/// Geometry
///
/// Carried project state with no structural effect on the graph.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Geometry {
    #[default]
    #[display("air/substrate")]
    AirSubstrate,
    #[display("substrate/liquid")]
    SubstrateLiquid,
}

///
/// Prior
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Prior {
    #[default]
    #[display("uniform")]
    Uniform,
    #[display("gaussian")]
    Gaussian,
    #[display("jeffreys")]
    Jeffreys,
}

impl FromStr for Prior {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uniform" => Ok(Self::Uniform),
            "gaussian" => Ok(Self::Gaussian),
            "jeffreys" => Ok(Self::Jeffreys),
            _ => Err(UnknownKeyword::new("prior", s)),
        }
    }
}

///
/// SourceKind
///
/// How a background or resolution sources its signal. The kind selects
/// which collection its reference slots must resolve against.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    #[display("constant")]
    Constant,
    #[display("data")]
    Data,
    #[display("function")]
    Function,
}

impl FromStr for SourceKind {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "constant" => Ok(Self::Constant),
            "data" => Ok(Self::Data),
            "function" => Ok(Self::Function),
            _ => Err(UnknownKeyword::new("source kind", s)),
        }
    }
}

///
/// BackgroundAction
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundAction {
    #[default]
    #[display("add")]
    Add,
    #[display("subtract")]
    Subtract,
}

impl FromStr for BackgroundAction {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            _ => Err(UnknownKeyword::new("background action", s)),
        }
    }
}

///
/// HydrateWith
///
/// Which bulk medium a layer's hydration displaces.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HydrateWith {
    #[default]
    #[display("bulk out")]
    BulkOut,
    #[display("bulk in")]
    BulkIn,
}

impl FromStr for HydrateWith {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bulk out" | "bulk_out" => Ok(Self::BulkOut),
            "bulk in" | "bulk_in" => Ok(Self::BulkIn),
            _ => Err(UnknownKeyword::new("hydrate with", s)),
        }
    }
}

///
/// Language
///
/// Source language of a custom file entry.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    #[display("python")]
    Python,
    #[display("matlab")]
    Matlab,
    #[display("cpp")]
    Cpp,
}

impl FromStr for Language {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "python" => Ok(Self::Python),
            "matlab" => Ok(Self::Matlab),
            "cpp" | "c++" => Ok(Self::Cpp),
            _ => Err(UnknownKeyword::new("language", s)),
        }
    }
}

///
/// maybe_inf
///
/// Serde helpers for prior widths that may be unbounded. JSON has no
/// infinity literal, so non-finite values serialize as the string "inf"
/// (or "-inf") and parse back from either form.
///

pub mod maybe_inf {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize, Serialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            Repr::Number(*value).serialize(serializer)
        } else if *value > 0.0 {
            Repr::Text("inf".to_string()).serialize(serializer)
        } else {
            Repr::Text("-inf".to_string()).serialize(serializer)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.trim() {
                "inf" | "+inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(serde::de::Error::custom(format!(
                    "expected a number, 'inf' or '-inf', got '{other}'"
                ))),
            },
        }
    }
}
