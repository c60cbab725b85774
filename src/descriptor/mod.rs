//! GATT Descriptor Codecs
//!
//! Descriptors follow the same shape as characteristics: one zero-sized type
//! per SIG descriptor implementing [`Descriptor`], the closed
//! [`DescriptorKind`] / [`DescriptorValue`] pair for dynamic dispatch, and the
//! object-safe [`DescriptorCodec`] for descriptors registered at runtime.
//!
//! Descriptors carry no sentinels, so decoding yields the value directly.
//! Bounds and trigger operands of descriptors such as Valid Range take the
//! format of the characteristic they belong to; those are kept as raw
//! little-endian fields with typed accessors.

pub mod environmental;
pub mod gatt;
pub mod range;
pub mod report;
pub mod trigger;

use crate::characteristic::{AttributeInfo, CustomValue, LengthRule};
use crate::error::CodecError;
use crate::uuid::BluetoothUuid;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

/// Metadata of a descriptor
pub type DescriptorInfo = AttributeInfo;

/// A statically known GATT descriptor codec
pub trait Descriptor {
    /// Decoded representation
    type Value: Clone + PartialEq + fmt::Debug;

    /// Static metadata
    const INFO: DescriptorInfo;

    /// Permitted payload lengths
    const LENGTH: LengthRule;

    /// Parse a payload whose length already passed [`Self::LENGTH`]
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] describing the malformed field.
    fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError>;

    /// Serialize a value without validating it
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] when a field does not fit its wire width.
    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError>;

    /// Check reserved codes and field consistency
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Reserved`] or [`CodecError::OutOfRange`].
    fn validate(_value: &Self::Value) -> Result<(), CodecError> {
        Ok(())
    }

    /// Length check, field decode, then validation
    ///
    /// # Errors
    ///
    /// Returns the first [`CodecError`] encountered.
    fn decode(data: &[u8]) -> Result<Self::Value, CodecError> {
        Self::LENGTH.check(data.len())?;
        let value = Self::decode_value(data)?;
        Self::validate(&value)?;
        Ok(value)
    }

    /// Validate then serialize
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] when the value is invalid or does not fit.
    fn encode(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Self::validate(value)?;
        Self::encode_value(value)
    }
}

/// Outcome of parsing one descriptor value
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorParseResult {
    /// Metadata of the codec that produced the result
    pub info: DescriptorInfo,
    /// The payload that was parsed
    pub raw: Vec<u8>,
    /// Decoded value or error
    pub outcome: Result<DescriptorValue, CodecError>,
}

impl DescriptorParseResult {
    /// Build a result from a decode outcome
    #[must_use]
    pub fn new(
        info: DescriptorInfo,
        raw: &[u8],
        outcome: Result<DescriptorValue, CodecError>,
    ) -> Self {
        Self {
            info,
            raw: raw.to_vec(),
            outcome,
        }
    }

    /// Whether decoding succeeded
    #[must_use]
    pub const fn parse_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The decoded value
    #[must_use]
    pub fn value(&self) -> Option<&DescriptorValue> {
        self.outcome.as_ref().ok()
    }

    /// The decode error, if any
    #[must_use]
    pub fn error(&self) -> Option<&CodecError> {
        self.outcome.as_ref().err()
    }

    /// Human readable error message, present exactly when parsing failed
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }
}

macro_rules! sig_descriptors {
    ($($variant:ident($uuid:literal) => $ty:ty),* $(,)?) => {
        /// Every built-in descriptor codec
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum DescriptorKind {
            $(
                #[doc = concat!("Codec for `", stringify!($ty), "`")]
                $variant,
            )*
        }

        /// A decoded value of any known descriptor
        #[derive(Debug, Clone, PartialEq)]
        pub enum DescriptorValue {
            $(
                #[doc = concat!("Value decoded by `", stringify!($ty), "`")]
                $variant(<$ty as Descriptor>::Value),
            )*
            /// Value produced by a runtime-registered codec
            Custom(CustomValue),
        }

        $(
            const _: () = assert!(
                <$ty as Descriptor>::INFO.uuid.as_u128()
                    == BluetoothUuid::from_u16($uuid).as_u128()
            );
        )*

        impl DescriptorKind {
            /// All built-in codecs in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Look up a codec by its 16-bit UUID
            #[must_use]
            pub const fn from_u16(uuid: u16) -> Option<Self> {
                match uuid {
                    $($uuid => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Static metadata of the codec
            #[must_use]
            pub const fn info(self) -> DescriptorInfo {
                match self {
                    $(Self::$variant => <$ty as Descriptor>::INFO,)*
                }
            }

            /// Permitted payload lengths
            #[must_use]
            pub const fn length(self) -> LengthRule {
                match self {
                    $(Self::$variant => <$ty as Descriptor>::LENGTH,)*
                }
            }

            /// Decode a payload
            ///
            /// # Errors
            ///
            /// Returns the [`CodecError`] raised by the codec.
            pub fn decode(self, data: &[u8]) -> Result<DescriptorValue, CodecError> {
                match self {
                    $(Self::$variant => <$ty as Descriptor>::decode(data)
                        .map(DescriptorValue::$variant),)*
                }
            }

            /// Validate and encode a value
            ///
            /// # Errors
            ///
            /// Returns [`CodecError::ValueTypeMismatch`] if `value` belongs to
            /// another descriptor, or the codec's own error.
            pub fn encode(self, value: &DescriptorValue) -> Result<Vec<u8>, CodecError> {
                match (self, value) {
                    $((Self::$variant, DescriptorValue::$variant(v)) => {
                        <$ty as Descriptor>::encode(v)
                    })*
                    _ => Err(CodecError::ValueTypeMismatch {
                        attribute: self.info().name,
                    }),
                }
            }
        }

        impl DescriptorValue {
            /// The built-in codec that produced this value, `None` for custom values
            #[must_use]
            pub const fn kind(&self) -> Option<DescriptorKind> {
                match self {
                    $(Self::$variant(_) => Some(DescriptorKind::$variant),)*
                    Self::Custom(_) => None,
                }
            }
        }
    };
}

sig_descriptors! {
    CharacteristicExtendedProperties(0x2900) => gatt::ExtendedPropertiesDescriptor,
    CharacteristicUserDescription(0x2901) => gatt::UserDescriptionDescriptor,
    ClientCharacteristicConfiguration(0x2902) => gatt::ClientConfigurationDescriptor,
    ServerCharacteristicConfiguration(0x2903) => gatt::ServerConfigurationDescriptor,
    CharacteristicPresentationFormat(0x2904) => gatt::PresentationFormatDescriptor,
    CharacteristicAggregateFormat(0x2905) => gatt::AggregateFormatDescriptor,
    ValidRange(0x2906) => range::ValidRangeDescriptor,
    ExternalReportReference(0x2907) => report::ExternalReportReferenceDescriptor,
    ReportReference(0x2908) => report::ReportReferenceDescriptor,
    NumberOfDigitals(0x2909) => report::NumberOfDigitalsDescriptor,
    ValueTriggerSetting(0x290A) => trigger::ValueTriggerSettingDescriptor,
    EnvironmentalSensingConfiguration(0x290B) => environmental::EsConfigurationDescriptor,
    EnvironmentalSensingMeasurement(0x290C) => environmental::EsMeasurementDescriptor,
    EnvironmentalSensingTriggerSetting(0x290D) => trigger::EsTriggerSettingDescriptor,
    TimeTriggerSetting(0x290E) => trigger::TimeTriggerSettingDescriptor,
    CompleteBrEdrTransportBlockData(0x290F) => report::TransportBlockDataDescriptor,
    ValidRangeAndAccuracy(0x2911) => range::ValidRangeAndAccuracyDescriptor,
    MeasurementDescription(0x2912) => environmental::MeasurementDescriptionDescriptor,
    ManufacturerLimits(0x2913) => range::ManufacturerLimitsDescriptor,
    ProcessTolerances(0x2914) => range::ProcessTolerancesDescriptor,
}

impl DescriptorKind {
    /// Look up a codec by UUID
    #[must_use]
    pub const fn from_uuid(uuid: &BluetoothUuid) -> Option<Self> {
        match uuid.to_u16() {
            Some(short) => Self::from_u16(short),
            None => None,
        }
    }

    /// Decode a payload, capturing any failure in the returned result
    #[must_use]
    pub fn parse_value(self, data: &[u8]) -> DescriptorParseResult {
        DescriptorParseResult::new(self.info(), data, self.decode(data))
    }
}

/// Object-safe codec for descriptors registered at runtime
pub trait DescriptorCodec: Send + Sync {
    /// Metadata of the descriptor
    fn info(&self) -> DescriptorInfo;

    /// Permitted payload lengths, checked before [`Self::decode`]
    fn length(&self) -> LengthRule {
        LengthRule::Any
    }

    /// Decode a payload
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] describing the malformed field.
    fn decode(&self, data: &[u8]) -> Result<CustomValue, CodecError>;

    /// Encode a value
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if the value cannot be represented.
    fn encode(&self, value: &CustomValue) -> Result<Vec<u8>, CodecError>;
}

/// Constructor stored in registries for custom descriptor codecs
pub type DescriptorFactory = fn() -> Arc<dyn DescriptorCodec>;

/// What a descriptor registry maps a UUID to
#[derive(Clone, Copy)]
pub enum DescriptorClass {
    /// A built-in codec
    Sig(DescriptorKind),
    /// A runtime-registered codec constructor
    Custom(DescriptorFactory),
}

impl fmt::Debug for DescriptorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sig(kind) => f.debug_tuple("Sig").field(kind).finish(),
            Self::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// A ready-to-use descriptor codec
#[derive(Clone)]
pub enum DescriptorHandle {
    /// A built-in codec
    Sig(DescriptorKind),
    /// A cached custom codec instance
    Custom(Arc<dyn DescriptorCodec>),
}

impl fmt::Debug for DescriptorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sig(kind) => f.debug_tuple("Sig").field(kind).finish(),
            Self::Custom(codec) => f.debug_tuple("Custom").field(&codec.info().name).finish(),
        }
    }
}

impl DescriptorHandle {
    /// Metadata of the codec
    #[must_use]
    pub fn info(&self) -> DescriptorInfo {
        match self {
            Self::Sig(kind) => kind.info(),
            Self::Custom(codec) => codec.info(),
        }
    }

    /// Decode a payload
    ///
    /// # Errors
    ///
    /// Returns the [`CodecError`] raised by the codec.
    pub fn decode(&self, data: &[u8]) -> Result<DescriptorValue, CodecError> {
        match self {
            Self::Sig(kind) => kind.decode(data),
            Self::Custom(codec) => {
                codec.length().check(data.len())?;
                codec.decode(data).map(DescriptorValue::Custom)
            }
        }
    }

    /// Encode a value
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::ValueTypeMismatch`] if the value does not belong
    /// to this codec, or the codec's own error.
    pub fn encode(&self, value: &DescriptorValue) -> Result<Vec<u8>, CodecError> {
        match (self, value) {
            (Self::Sig(kind), _) => kind.encode(value),
            (Self::Custom(codec), DescriptorValue::Custom(custom)) => codec.encode(custom),
            (Self::Custom(codec), _) => Err(CodecError::ValueTypeMismatch {
                attribute: codec.info().name,
            }),
        }
    }

    /// Decode a payload, capturing any failure in the returned result
    #[must_use]
    pub fn parse_value(&self, data: &[u8]) -> DescriptorParseResult {
        DescriptorParseResult::new(self.info(), data, self.decode(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata;

    #[test]
    fn test_every_descriptor_has_metadata() {
        for kind in DescriptorKind::ALL {
            let info = kind.info();
            let short = info.uuid.to_u16().unwrap();
            let entry = metadata::descriptor(short)
                .unwrap_or_else(|| panic!("{} has no metadata entry", info.name));
            assert_eq!(entry.name, info.name, "{short:04X}");
            assert_eq!(entry.identifier, info.identifier, "{short:04X}");
            assert_eq!(DescriptorKind::from_uuid(&info.uuid), Some(*kind));
        }
    }

    #[test]
    fn test_cccd_parse_result() {
        let ok = DescriptorKind::ClientCharacteristicConfiguration.parse_value(&[0x03, 0x00]);
        assert!(ok.parse_success());
        let Some(DescriptorValue::ClientCharacteristicConfiguration(config)) = ok.value() else {
            panic!("unexpected value {:?}", ok.value());
        };
        assert!(config.notifications_enabled);
        assert!(config.indications_enabled);

        let failed = DescriptorKind::ClientCharacteristicConfiguration.parse_value(&[0x01]);
        assert!(!failed.parse_success());
        assert!(failed.value().is_none());
        assert!(failed.error_message().unwrap().contains("need 2 bytes, got 1"));
    }

    #[test]
    fn test_encode_rejects_foreign_value() {
        let err = DescriptorKind::NumberOfDigitals
            .encode(&DescriptorValue::CharacteristicUserDescription("x".into()))
            .unwrap_err();
        assert!(matches!(err, CodecError::ValueTypeMismatch { .. }));
    }

    #[test]
    fn test_every_descriptor_rejects_wrong_length() {
        for kind in DescriptorKind::ALL {
            let rule = kind.length();
            let Some((len, bound)) = rule.rejected() else {
                continue;
            };
            let err = kind.decode(&vec![0; len]).unwrap_err();
            assert_eq!(err, CodecError::InvalidLength { rule, actual: len }, "{kind:?}");
            let message = err.to_string();
            assert!(message.contains(&format!("got {len}")), "{kind:?}: {message}");
            assert!(message.contains(&format!("{bound}")), "{kind:?}: {message}");
        }
    }

    #[test]
    fn test_every_descriptor_round_trips_decoded_values() {
        let mut checked = 0;
        for kind in DescriptorKind::ALL {
            let Ok(value) = kind.decode(&vec![0; kind.length().shortest()]) else {
                continue;
            };
            let encoded = kind
                .encode(&value)
                .unwrap_or_else(|e| panic!("{kind:?} failed to encode {value:?}: {e}"));
            assert_eq!(kind.decode(&encoded), Ok(value), "{kind:?}");
            checked += 1;
        }
        assert!(checked > 0);
    }
}
