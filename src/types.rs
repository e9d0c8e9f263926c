//! Core domain types: soil types, target properties, and the sensor
//! feature vector.
//!
//! The soil type and target enumerations are closed: dispatch logic matches
//! exhaustively over them, and arbitrary strings from the HTTP boundary are
//! validated into the typed domain before any model is touched.

use crate::error::PedonError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of sensor readings in a feature vector.
pub const FEATURE_COUNT: usize = 7;

/// Categorical soil classification used to select the applicable model set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Sand,
    Silt,
}

impl SoilType {
    /// Every supported soil type.
    pub const ALL: [SoilType; 3] = [SoilType::Clay, SoilType::Sand, SoilType::Silt];

    /// Wire/storage name of the soil type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::Sand => "sand",
            SoilType::Silt => "silt",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoilType {
    type Err = PedonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clay" => Ok(SoilType::Clay),
            "sand" => Ok(SoilType::Sand),
            "silt" => Ok(SoilType::Silt),
            other => Err(PedonError::InvalidInput(format!(
                "unknown soil type: {}",
                other
            ))),
        }
    }
}

/// Lab-measured soil chemistry value that a model predicts from sensor
/// features. The `ALL` order is the response key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetProperty {
    #[serde(rename = "lab_pH")]
    Ph,
    #[serde(rename = "lab_N")]
    Nitrogen,
    #[serde(rename = "lab_P")]
    Phosphorus,
    #[serde(rename = "lab_K")]
    Potassium,
    #[serde(rename = "lab_EC")]
    Conductivity,
}

impl TargetProperty {
    /// Every target property, in dispatch/response order.
    pub const ALL: [TargetProperty; 5] = [
        TargetProperty::Ph,
        TargetProperty::Nitrogen,
        TargetProperty::Phosphorus,
        TargetProperty::Potassium,
        TargetProperty::Conductivity,
    ];

    /// Wire/storage name of the target property.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetProperty::Ph => "lab_pH",
            TargetProperty::Nitrogen => "lab_N",
            TargetProperty::Phosphorus => "lab_P",
            TargetProperty::Potassium => "lab_K",
            TargetProperty::Conductivity => "lab_EC",
        }
    }
}

impl fmt::Display for TargetProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered sensor readings submitted for one prediction request.
///
/// The field order is the feature order every model was trained against:
/// temperature, humidity, pH, nitrogen, phosphorus, potassium, electrical
/// conductivity. No range validation is applied; any finite reading is
/// passed to the models as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub conductivity: f64,
}

impl FeatureVector {
    /// The readings in model input order.
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.temperature,
            self.humidity,
            self.ph,
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.conductivity,
        ]
    }
}
