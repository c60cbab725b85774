//! Range descriptors
//!
//! Each bound uses the wire format of the characteristic the descriptor is
//! attached to, which the descriptor itself does not name. The payload is
//! split into equally sized fields and kept raw; the typed accessors
//! interpret a field once the caller knows its format.

use super::{Descriptor, DescriptorInfo};
use crate::characteristic::{LengthRule, ValueType};
use crate::codec::{Resolution, decode_signed, decode_unsigned};
use crate::error::CodecError;
use alloc::vec::Vec;

/// A little-endian field in the format of the owning characteristic
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct RawBound(pub Vec<u8>);

impl RawBound {
    /// Interpret the field as an unsigned integer
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidLength`] for an empty field or one wider than 8 bytes.
    pub fn as_unsigned(&self) -> Result<u64, CodecError> {
        Self::check_width(self.0.len())?;
        decode_unsigned(&self.0, 0, self.0.len())
    }

    /// Interpret the field as a sign-extended integer
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidLength`] for an empty field or one wider than 8 bytes.
    pub fn as_signed(&self) -> Result<i64, CodecError> {
        Self::check_width(self.0.len())?;
        decode_signed(&self.0, 0, self.0.len())
    }

    /// Interpret the field as a scaled integer
    ///
    /// # Errors
    ///
    /// Same as [`Self::as_signed`] / [`Self::as_unsigned`].
    #[allow(clippy::cast_possible_wrap)]
    pub fn scaled(&self, resolution: Resolution, signed: bool) -> Result<f64, CodecError> {
        let raw = if signed {
            self.as_signed()?
        } else {
            self.as_unsigned()? as i64
        };
        Ok(resolution.apply(raw))
    }

    fn check_width(width: usize) -> Result<(), CodecError> {
        if (1..=8).contains(&width) {
            Ok(())
        } else {
            Err(CodecError::InvalidLength {
                rule: LengthRule::Between(1, 8),
                actual: width,
            })
        }
    }
}

impl From<&[u8]> for RawBound {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

/// A lower and an upper bound
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Bounds {
    /// Lower bound
    pub lower: RawBound,
    /// Upper bound
    pub upper: RawBound,
}

impl Bounds {
    fn split(data: &[u8]) -> Self {
        let (lower, upper) = data.split_at(data.len() / 2);
        Self {
            lower: lower.into(),
            upper: upper.into(),
        }
    }

    fn join(&self, attribute: &'static str) -> Result<Vec<u8>, CodecError> {
        if self.lower.0.len() != self.upper.0.len() || self.lower.0.is_empty() {
            return Err(CodecError::ValueTypeMismatch { attribute });
        }
        Ok([self.lower.0.as_slice(), self.upper.0.as_slice()].concat())
    }

    /// Whether a value decoded with the same format lies within the bounds
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying accessor.
    pub fn contains_signed(&self, value: i64) -> Result<bool, CodecError> {
        Ok(value >= self.lower.as_signed()? && value <= self.upper.as_signed()?)
    }

    /// Unsigned counterpart of [`Self::contains_signed`]
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying accessor.
    pub fn contains_unsigned(&self, value: u64) -> Result<bool, CodecError> {
        Ok(value >= self.lower.as_unsigned()? && value <= self.upper.as_unsigned()?)
    }
}

macro_rules! bounds_descriptor {
    ($(#[$meta:meta])* $name:ident($uuid:literal, $display:literal, $id:literal)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl Descriptor for $name {
            type Value = Bounds;
            const INFO: DescriptorInfo =
                DescriptorInfo::new($uuid, $display, $id, None, ValueType::Struct);
            const LENGTH: LengthRule = LengthRule::Multiple { base: 2, step: 2 };

            fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError> {
                Ok(Bounds::split(data))
            }

            fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
                value.join($display)
            }
        }
    };
}

bounds_descriptor!(
    /// Valid Range (0x2906)
    ValidRangeDescriptor(0x2906, "Valid Range", "org.bluetooth.descriptor.valid_range")
);

bounds_descriptor!(
    /// Manufacturer Limits (0x2913)
    ManufacturerLimitsDescriptor(
        0x2913,
        "Manufacturer Limits",
        "org.bluetooth.descriptor.manufacturer_limits"
    )
);

bounds_descriptor!(
    /// Process Tolerances (0x2914)
    ProcessTolerancesDescriptor(
        0x2914,
        "Process Tolerances",
        "org.bluetooth.descriptor.process_tolerances"
    )
);

/// Valid Range and Accuracy value
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct RangeAndAccuracy {
    /// Permitted range
    pub range: Bounds,
    /// Accuracy of the measured value
    pub accuracy: RawBound,
}

/// Valid Range and Accuracy (0x2911)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidRangeAndAccuracyDescriptor;

impl Descriptor for ValidRangeAndAccuracyDescriptor {
    type Value = RangeAndAccuracy;
    const INFO: DescriptorInfo = DescriptorInfo::new(
        0x2911,
        "Valid Range and Accuracy",
        "org.bluetooth.descriptor.valid_range_and_accuracy",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Multiple { base: 3, step: 3 };

    fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError> {
        let width = data.len() / 3;
        let (range, accuracy) = data.split_at(2 * width);
        Ok(RangeAndAccuracy {
            range: Bounds::split(range),
            accuracy: accuracy.into(),
        })
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut out = value.range.join("Valid Range and Accuracy")?;
        if value.accuracy.0.len() != value.range.lower.0.len() {
            return Err(CodecError::ValueTypeMismatch {
                attribute: "Valid Range and Accuracy",
            });
        }
        out.extend_from_slice(&value.accuracy.0);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range_sint16() {
        // -40.00 .. 85.00 °C as sint16 with resolution 0.01
        let bytes = [0x60, 0xF0, 0x34, 0x21];
        let range = ValidRangeDescriptor::decode(&bytes).unwrap();
        assert_eq!(range.lower.as_signed().unwrap(), -4000);
        assert_eq!(range.upper.as_signed().unwrap(), 8500);
        let lower = range.lower.scaled(Resolution::decimal(-2), true).unwrap();
        assert!((lower + 40.0).abs() < 1e-9);
        assert!(range.contains_signed(2150).unwrap());
        assert!(!range.contains_signed(9000).unwrap());
        assert_eq!(ValidRangeDescriptor::encode(&range).unwrap(), bytes);
    }

    #[test]
    fn test_valid_range_lengths() {
        assert!(ValidRangeDescriptor::decode(&[0x00]).is_err());
        assert!(ValidRangeDescriptor::decode(&[0x00, 0x01, 0x02]).is_err());
        let range = ValidRangeDescriptor::decode(&[0x00, 0x64]).unwrap();
        assert_eq!(range.upper.as_unsigned().unwrap(), 100);
        assert!(range.contains_unsigned(50).unwrap());
    }

    #[test]
    fn test_mismatched_bounds_rejected() {
        let bounds = Bounds {
            lower: RawBound(alloc::vec![0x00]),
            upper: RawBound(alloc::vec![0x00, 0x01]),
        };
        assert!(ManufacturerLimitsDescriptor::encode(&bounds).is_err());
    }

    #[test]
    fn test_valid_range_and_accuracy() {
        let bytes = [0x00, 0x00, 0x10, 0x27, 0x32, 0x00];
        let value = ValidRangeAndAccuracyDescriptor::decode(&bytes).unwrap();
        assert_eq!(value.range.upper.as_unsigned().unwrap(), 10_000);
        assert_eq!(value.accuracy.as_unsigned().unwrap(), 50);
        assert_eq!(ValidRangeAndAccuracyDescriptor::encode(&value).unwrap(), bytes);
        assert!(ValidRangeAndAccuracyDescriptor::decode(&[0x00, 0x01]).is_err());
    }
}
