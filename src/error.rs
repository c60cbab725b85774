//! Error types
//!
//! Every codec failure is reported through [`CodecError`]. Registry mutations
//! fail with [`RegistryError`]. Advertising interpreters report through
//! [`AdvertisingParseError`](crate::advertising::AdvertisingParseError).

use crate::characteristic::{LengthRule, SpecialValue};
use crate::uuid::BluetoothUuid;
use alloc::string::String;
use core::fmt;

/// Errors raised while decoding or encoding attribute values
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// The buffer ended before a field could be read
    InsufficientData {
        /// Number of bytes the read needed in total
        required: usize,
        /// Number of bytes that were available
        actual: usize,
    },
    /// The payload length does not satisfy the attribute's length rule
    InvalidLength {
        /// Rule the payload was checked against
        rule: LengthRule,
        /// Length of the payload
        actual: usize,
    },
    /// A string field is not valid UTF-8
    InvalidUtf8 {
        /// Offset of the first invalid byte inside the string field
        position: usize,
    },
    /// A textual input (UUID, address, identifier) could not be parsed
    InvalidFormat {
        /// The rejected input
        input: String,
        /// Human readable description of the accepted format
        expected: &'static str,
    },
    /// A numeric value lies outside its permitted range
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
    /// An enumerated field carries a value reserved for future use
    Reserved {
        /// Name of the offending field
        field: &'static str,
        /// The raw reserved value
        value: u32,
    },
    /// A sentinel was decoded while the context asked for sentinels to be raised
    SpecialValue(SpecialValue),
    /// The value passed to an encoder belongs to a different attribute
    ValueTypeMismatch {
        /// Name of the attribute whose encoder was invoked
        attribute: &'static str,
    },
    /// The payload contradicts a value decoded earlier from a sibling attribute
    InconsistentContext(String),
    /// No codec is known for the UUID, or the codec cannot perform the operation
    Unsupported(BluetoothUuid),
}

impl CodecError {
    /// Shorthand for [`CodecError::InsufficientData`]
    #[must_use]
    pub const fn insufficient(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Check an inclusive range and build [`CodecError::OutOfRange`] on failure
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OutOfRange`] when `value` is outside `min..=max` or is NaN.
    pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), Self> {
        if value >= min && value <= max {
            Ok(())
        } else {
            Err(Self::OutOfRange {
                field,
                value,
                min,
                max,
            })
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData { required, actual } => {
                write!(f, "Insufficient data: need {required} bytes, got {actual}")
            }
            Self::InvalidLength { rule, actual } => match rule {
                LengthRule::Exact(n) => {
                    write!(f, "Invalid length: need {n} bytes, got {actual}")
                }
                LengthRule::AtLeast(n) => {
                    write!(f, "Invalid length: need at least {n} bytes, got {actual}")
                }
                LengthRule::Between(min, max) => write!(
                    f,
                    "Invalid length: need between {min} and {max} bytes, got {actual}"
                ),
                LengthRule::Multiple { base, step } => write!(
                    f,
                    "Invalid length: need {base} + k*{step} bytes, got {actual}"
                ),
                LengthRule::Any => write!(f, "Invalid length: got {actual}"),
            },
            Self::InvalidUtf8 { position } => {
                write!(f, "Invalid UTF-8 sequence at byte {position}")
            }
            Self::InvalidFormat { input, expected } => {
                write!(f, "Invalid format '{input}': expected {expected}")
            }
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} out of range: {value} not in [{min}, {max}]"),
            Self::Reserved { field, value } => {
                write!(f, "{field} uses reserved value 0x{value:02X}")
            }
            Self::SpecialValue(special) => write!(f, "Special value: {special}"),
            Self::ValueTypeMismatch { attribute } => {
                write!(f, "Value does not belong to {attribute}")
            }
            Self::InconsistentContext(message) => write!(f, "Inconsistent context: {message}"),
            Self::Unsupported(uuid) => write!(f, "Unsupported attribute {uuid}"),
        }
    }
}

impl core::error::Error for CodecError {}

/// Errors raised by registry mutations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// A codec is already mapped to this UUID and `override` was not requested
    AlreadyRegistered(BluetoothUuid),
    /// No custom codec is mapped to this UUID
    NotRegistered(BluetoothUuid),
    /// Built-in SIG entries cannot be removed
    SigEntryProtected(BluetoothUuid),
    /// The registry holds its maximum number of custom entries
    Full(BluetoothUuid),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRegistered(uuid) => write!(
                f,
                "{uuid} is already registered; pass override to replace it"
            ),
            Self::NotRegistered(uuid) => write!(f, "{uuid} has no custom registration"),
            Self::SigEntryProtected(uuid) => {
                write!(f, "{uuid} is a built-in SIG entry and cannot be unregistered")
            }
            Self::Full(uuid) => write!(f, "no room left to register {uuid}"),
        }
    }
}

impl core::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_insufficient_data_message() {
        let err = CodecError::insufficient(2, 1);
        assert!(err.to_string().contains("need 2 bytes, got 1"));
    }

    #[test]
    fn test_invalid_length_messages() {
        let exact = CodecError::InvalidLength {
            rule: LengthRule::Exact(2),
            actual: 1,
        };
        assert!(exact.to_string().contains("need 2 bytes, got 1"));

        let at_least = CodecError::InvalidLength {
            rule: LengthRule::AtLeast(7),
            actual: 3,
        };
        assert!(at_least.to_string().contains("need at least 7 bytes, got 3"));
    }

    #[test]
    fn test_check_range() {
        assert!(CodecError::check_range("level", 50.0, 0.0, 100.0).is_ok());
        assert!(CodecError::check_range("level", 101.0, 0.0, 100.0).is_err());
        assert!(CodecError::check_range("level", f64::NAN, 0.0, 100.0).is_err());
    }

    #[test]
    fn test_registry_error_display() {
        let uuid = BluetoothUuid::from_u16(0x2A19);
        let text = RegistryError::AlreadyRegistered(uuid).to_string();
        assert!(text.contains("already registered"));
    }
}
