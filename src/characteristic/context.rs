//! Parse context
//!
//! Options and cross-characteristic state handed to every decode call.

use super::body::{BodyCompositionFeature, WeightScaleFeature};
use super::health::TemperatureType;
use super::{CharacteristicValue, Decoded, SpecialValue};
use crate::address::BluetoothAddress;
use crate::error::CodecError;
use alloc::string::String;

/// What to do when a sentinel is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpecialValuePolicy {
    /// Return the sentinel as [`Decoded::Special`]
    #[default]
    Report,
    /// Fail with [`CodecError::SpecialValue`]
    Raise,
}

/// Information about the device a payload came from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceContext {
    /// Device address, if known
    pub address: Option<BluetoothAddress>,
    /// Advertised or GAP device name
    pub name: Option<String>,
    /// GAP appearance value
    pub appearance: Option<u16>,
}

/// Values of other characteristics of the same device that affect decoding
///
/// Only the fields some codec actually reads are tracked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiblingValues {
    /// Weight Scale Feature, supplies weight and height resolution
    pub weight_scale_feature: Option<WeightScaleFeature>,
    /// Body Composition Feature, supplies mass and height resolution
    pub body_composition_feature: Option<BodyCompositionFeature>,
    /// Sequence number of the latest Glucose Measurement
    pub glucose_sequence_number: Option<u16>,
    /// Static Temperature Type of a Health Thermometer
    pub temperature_type: Option<TemperatureType>,
}

impl SiblingValues {
    /// Remember a decoded value if any codec depends on it
    pub fn record(&mut self, value: &CharacteristicValue) {
        match value {
            CharacteristicValue::WeightScaleFeature(feature) => {
                self.weight_scale_feature = Some(*feature);
            }
            CharacteristicValue::BodyCompositionFeature(feature) => {
                self.body_composition_feature = Some(*feature);
            }
            CharacteristicValue::GlucoseMeasurement(measurement) => {
                self.glucose_sequence_number = Some(measurement.sequence_number);
            }
            CharacteristicValue::TemperatureType(kind) => {
                self.temperature_type = Some(*kind);
            }
            _ => {}
        }
    }
}

/// Options and context for one decode call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseContext<'a> {
    /// Check ranges and reserved codes, and recognize sentinels
    ///
    /// When `false`, raw values are returned as-is. Length checks still apply.
    pub validate: bool,
    /// Handling of decoded sentinels
    pub special_values: SpecialValuePolicy,
    /// Device the payload came from
    pub device: Option<&'a DeviceContext>,
    /// Already decoded characteristics of the same device
    pub siblings: SiblingValues,
}

impl Default for ParseContext<'_> {
    fn default() -> Self {
        Self {
            validate: true,
            special_values: SpecialValuePolicy::Report,
            device: None,
            siblings: SiblingValues::default(),
        }
    }
}

impl<'a> ParseContext<'a> {
    /// Default context: validation on, sentinels reported
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn validation on or off
    #[must_use]
    pub const fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Choose how sentinels are surfaced
    #[must_use]
    pub const fn with_special_values(mut self, policy: SpecialValuePolicy) -> Self {
        self.special_values = policy;
        self
    }

    /// Attach device information
    #[must_use]
    pub const fn with_device(mut self, device: &'a DeviceContext) -> Self {
        self.device = Some(device);
        self
    }

    /// Attach sibling values
    #[must_use]
    pub const fn with_siblings(mut self, siblings: SiblingValues) -> Self {
        self.siblings = siblings;
        self
    }

    /// Surface a decoded sentinel according to [`Self::special_values`]
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SpecialValue`] under [`SpecialValuePolicy::Raise`].
    pub fn apply_special_policy<T>(&self, special: SpecialValue) -> Result<Decoded<T>, CodecError> {
        match self.special_values {
            SpecialValuePolicy::Report => Ok(Decoded::Special(special)),
            SpecialValuePolicy::Raise => Err(CodecError::SpecialValue(special)),
        }
    }
}
