//! GATT Characteristic Codecs
//!
//! Each SIG characteristic is a zero-sized type implementing [`Characteristic`],
//! which ties together its metadata, its length rule and a pair of
//! decode/encode functions over a strongly typed `Value`.
//!
//! For dynamic dispatch every built-in codec is also reachable through the
//! closed [`CharacteristicKind`] enum, whose decoded values are wrapped in
//! [`CharacteristicValue`]. Codecs registered at runtime implement the
//! object-safe [`CharacteristicCodec`] trait instead.
//!
//! ## Decoding pipeline
//!
//! 1. The payload length is checked against [`Characteristic::LENGTH`]. This
//!    check always runs, even with validation turned off.
//! 2. [`Characteristic::decode_value`] parses the fields. Sentinel patterns
//!    (e.g. `0x8000` for an unknown temperature) come back as
//!    [`Decoded::Special`] when validation is on.
//! 3. With validation on, [`Characteristic::validate`] checks ranges and
//!    reserved codes.

#[macro_use]
mod macros;

pub mod air_quality;
pub mod alert;
pub mod battery;
pub mod body;
mod context;
mod custom;
pub mod device_info;
pub mod electrical;
pub mod environmental;
pub mod fitness;
pub mod gap;
pub mod glucose;
pub mod health;
pub mod hid;
pub mod location;
pub mod pulse_oximeter;
pub mod time;

pub use context::{DeviceContext, ParseContext, SiblingValues, SpecialValuePolicy};
pub use custom::{CharacteristicCodec, CodecClass, CodecFactory, CodecHandle, CustomValue};

use crate::error::CodecError;
use crate::uuid::BluetoothUuid;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

pub(crate) use macros::{RawField, check_reserved};

/// Broad shape of a decoded value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValueType {
    /// Integer quantity
    Int,
    /// Real quantity
    Float,
    /// UTF-8 text
    String,
    /// Boolean flag
    Bool,
    /// Opaque bytes
    Bytes,
    /// Enumerated code
    Enum,
    /// Set of flags
    BitField,
    /// Multi-field structure
    Struct,
    /// Calendar date and/or time
    DateTime,
}

/// Static metadata describing a characteristic or descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AttributeInfo {
    /// Normalized UUID
    pub uuid: BluetoothUuid,
    /// Human readable name, e.g. `"Battery Level"`
    pub name: &'static str,
    /// SIG identifier, e.g. `"org.bluetooth.characteristic.battery_level"`
    pub identifier: &'static str,
    /// Unit symbol of the primary value, if any
    pub unit: Option<&'static str>,
    /// Shape of the decoded value
    pub value_type: ValueType,
}

/// Metadata of a characteristic
pub type CharacteristicInfo = AttributeInfo;

impl AttributeInfo {
    /// Metadata for a 16-bit SIG attribute
    #[must_use]
    pub const fn new(
        uuid: u16,
        name: &'static str,
        identifier: &'static str,
        unit: Option<&'static str>,
        value_type: ValueType,
    ) -> Self {
        Self {
            uuid: BluetoothUuid::from_u16(uuid),
            name,
            identifier,
            unit,
            value_type,
        }
    }

    /// Placeholder metadata for a UUID without a known codec
    #[must_use]
    pub const fn unknown(uuid: BluetoothUuid) -> Self {
        Self {
            uuid,
            name: "Unknown",
            identifier: "",
            unit: None,
            value_type: ValueType::Bytes,
        }
    }
}

/// Permitted payload lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LengthRule {
    /// Any length, including empty
    Any,
    /// Exactly `n` bytes
    Exact(usize),
    /// At least `n` bytes
    AtLeast(usize),
    /// Between `min` and `max` bytes inclusive
    Between(usize, usize),
    /// `base + k * step` bytes for some `k >= 0`
    Multiple {
        /// Fixed prefix length
        base: usize,
        /// Repeated element length
        step: usize,
    },
}

impl LengthRule {
    /// Whether `len` satisfies the rule
    #[must_use]
    pub const fn accepts(self, len: usize) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(n) => len == n,
            Self::AtLeast(n) => len >= n,
            Self::Between(min, max) => len >= min && len <= max,
            Self::Multiple { base, step } => len >= base && (len - base) % step == 0,
        }
    }

    /// Check `len` against the rule
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidLength`] when the rule is not satisfied.
    pub fn check(self, len: usize) -> Result<(), CodecError> {
        if self.accepts(len) {
            Ok(())
        } else {
            Err(CodecError::InvalidLength {
                rule: self,
                actual: len,
            })
        }
    }
}

#[cfg(test)]
impl LengthRule {
    /// Smallest accepted length
    pub(crate) const fn shortest(self) -> usize {
        match self {
            Self::Any => 0,
            Self::Exact(n) | Self::AtLeast(n) | Self::Between(n, _) => n,
            Self::Multiple { base, .. } => base,
        }
    }

    /// A length the rule refuses, with the bound quoted in its error message
    pub(crate) const fn rejected(self) -> Option<(usize, usize)> {
        match self {
            Self::Any | Self::AtLeast(0) => None,
            Self::Exact(n) => Some((n + 1, n)),
            Self::AtLeast(n) => Some((n - 1, n)),
            Self::Between(_, max) => Some((max + 1, max)),
            Self::Multiple { base, .. } if base > 0 => Some((base - 1, base)),
            Self::Multiple { base, step } if step > 1 => Some((base + 1, base)),
            Self::Multiple { .. } => None,
        }
    }
}

/// Meaning of a sentinel bit pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpecialValueKind {
    /// Value is not known
    NotKnown,
    /// Value is not valid
    NotValid,
    /// The measurement was unsuccessful
    MeasurementUnsuccessful,
    /// Value is at or above the largest representable value
    AtOrAboveMaximum,
    /// Value is at or below the smallest representable value
    AtOrBelowMinimum,
    /// IEEE-11073 Not a Number
    NaN,
    /// IEEE-11073 Not at this Resolution
    NotAtThisResolution,
    /// IEEE-11073 positive infinity
    PositiveInfinity,
    /// IEEE-11073 negative infinity
    NegativeInfinity,
    /// Reserved for future use
    Reserved,
}

impl SpecialValueKind {
    /// Human readable meaning
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NotKnown => "value is not known",
            Self::NotValid => "value is not valid",
            Self::MeasurementUnsuccessful => "measurement unsuccessful",
            Self::AtOrAboveMaximum => "value is at or above the maximum",
            Self::AtOrBelowMinimum => "value is at or below the minimum",
            Self::NaN => "not a number",
            Self::NotAtThisResolution => "not at this resolution",
            Self::PositiveInfinity => "positive infinity",
            Self::NegativeInfinity => "negative infinity",
            Self::Reserved => "reserved for future use",
        }
    }
}

/// A sentinel decoded in place of a measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpecialValue {
    /// What the sentinel means
    pub kind: SpecialValueKind,
    /// Raw bit pattern as read from the wire
    pub raw: u32,
}

impl SpecialValue {
    /// Create a new special value
    #[must_use]
    pub const fn new(kind: SpecialValueKind, raw: u32) -> Self {
        Self { kind, raw }
    }
}

impl fmt::Display for SpecialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (raw 0x{:X})", self.kind.description(), self.raw)
    }
}

/// Either a decoded value or a sentinel
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    /// A regular value
    Value(T),
    /// A sentinel such as "value is not known"
    Special(SpecialValue),
}

impl<T> Decoded<T> {
    /// Map the regular value, keeping sentinels untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        match self {
            Self::Value(v) => Decoded::Value(f(v)),
            Self::Special(s) => Decoded::Special(s),
        }
    }

    /// Borrow the regular value
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Special(_) => None,
        }
    }

    /// Take the regular value
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Special(_) => None,
        }
    }

    /// The sentinel, if any
    #[must_use]
    pub const fn special(&self) -> Option<SpecialValue> {
        match self {
            Self::Value(_) => None,
            Self::Special(s) => Some(*s),
        }
    }

    /// Whether this is a sentinel
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(self, Self::Special(_))
    }
}

/// A statically known GATT characteristic codec
pub trait Characteristic {
    /// Decoded representation
    type Value: Clone + PartialEq + fmt::Debug;

    /// Static metadata
    const INFO: CharacteristicInfo;

    /// Permitted payload lengths
    const LENGTH: LengthRule;

    /// Parse the fields of a payload whose length already passed [`Self::LENGTH`]
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] describing the malformed field.
    fn decode_value(
        data: &[u8],
        ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError>;

    /// Serialize a value without validating it
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] when a field does not fit its wire width.
    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError>;

    /// Check ranges and reserved codes
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OutOfRange`] or [`CodecError::Reserved`].
    fn validate(_value: &Self::Value) -> Result<(), CodecError> {
        Ok(())
    }

    /// Serialize a sentinel back to its bit pattern
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Unsupported`] if the characteristic has no such sentinel.
    fn encode_special(_special: SpecialValue) -> Result<Vec<u8>, CodecError> {
        Err(CodecError::Unsupported(Self::INFO.uuid))
    }

    /// Length check, field decode, then validation per `ctx`
    ///
    /// # Errors
    ///
    /// Returns the first [`CodecError`] encountered. With
    /// [`SpecialValuePolicy::Raise`] sentinels become [`CodecError::SpecialValue`].
    fn decode(data: &[u8], ctx: &ParseContext<'_>) -> Result<Decoded<Self::Value>, CodecError> {
        Self::LENGTH.check(data.len())?;
        match Self::decode_value(data, ctx)? {
            Decoded::Value(value) => {
                if ctx.validate {
                    Self::validate(&value)?;
                }
                Ok(Decoded::Value(value))
            }
            Decoded::Special(special) => ctx.apply_special_policy(special),
        }
    }

    /// Validate then serialize
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] when the value is out of range or does not fit.
    fn encode(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Self::validate(value)?;
        Self::encode_value(value)
    }
}

/// Outcome of parsing one characteristic value
///
/// Failures are captured rather than propagated: `parse_success()` is true
/// exactly when `outcome` is `Ok`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Metadata of the codec that produced the result
    pub info: CharacteristicInfo,
    /// The payload that was parsed
    pub raw: Vec<u8>,
    /// Decoded value, sentinel or error
    pub outcome: Result<Decoded<CharacteristicValue>, CodecError>,
}

impl ParseResult {
    /// Build a result from a decode outcome
    #[must_use]
    pub fn new(
        info: CharacteristicInfo,
        raw: &[u8],
        outcome: Result<Decoded<CharacteristicValue>, CodecError>,
    ) -> Self {
        Self {
            info,
            raw: raw.to_vec(),
            outcome,
        }
    }

    /// Whether decoding succeeded (a reported sentinel counts as success)
    #[must_use]
    pub const fn parse_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The decoded value, if decoding produced one
    #[must_use]
    pub fn value(&self) -> Option<&CharacteristicValue> {
        self.outcome.as_ref().ok().and_then(Decoded::value)
    }

    /// The reported sentinel, if any
    #[must_use]
    pub fn special(&self) -> Option<SpecialValue> {
        self.outcome.as_ref().ok().and_then(Decoded::special)
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

macro_rules! sig_characteristics {
    ($($variant:ident($uuid:literal) => $ty:ty),* $(,)?) => {
        /// Every built-in characteristic codec
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum CharacteristicKind {
            $(
                #[doc = concat!("Codec for `", stringify!($ty), "`")]
                $variant,
            )*
        }

        /// A decoded value of any known characteristic
        #[derive(Debug, Clone, PartialEq)]
        pub enum CharacteristicValue {
            $(
                #[doc = concat!("Value decoded by `", stringify!($ty), "`")]
                $variant(<$ty as Characteristic>::Value),
            )*
            /// Value produced by a runtime-registered codec
            Custom(CustomValue),
        }

        $(
            const _: () = assert!(
                <$ty as Characteristic>::INFO.uuid.as_u128()
                    == BluetoothUuid::from_u16($uuid).as_u128()
            );
        )*

        impl CharacteristicKind {
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
            pub const fn info(self) -> CharacteristicInfo {
                match self {
                    $(Self::$variant => <$ty as Characteristic>::INFO,)*
                }
            }

            /// Permitted payload lengths
            #[must_use]
            pub const fn length(self) -> LengthRule {
                match self {
                    $(Self::$variant => <$ty as Characteristic>::LENGTH,)*
                }
            }

            /// Decode a payload
            ///
            /// # Errors
            ///
            /// Returns the [`CodecError`] raised by the codec.
            pub fn decode(
                self,
                data: &[u8],
                ctx: &ParseContext<'_>,
            ) -> Result<Decoded<CharacteristicValue>, CodecError> {
                match self {
                    $(Self::$variant => <$ty as Characteristic>::decode(data, ctx)
                        .map(|d| d.map(CharacteristicValue::$variant)),)*
                }
            }

            /// Validate and encode a value
            ///
            /// # Errors
            ///
            /// Returns [`CodecError::ValueTypeMismatch`] if `value` belongs to
            /// another characteristic, or the codec's own error.
            pub fn encode(self, value: &CharacteristicValue) -> Result<Vec<u8>, CodecError> {
                match (self, value) {
                    $((Self::$variant, CharacteristicValue::$variant(v)) => {
                        <$ty as Characteristic>::encode(v)
                    })*
                    _ => Err(CodecError::ValueTypeMismatch {
                        attribute: self.info().name,
                    }),
                }
            }

            /// Encode a sentinel back to its bit pattern
            ///
            /// # Errors
            ///
            /// Returns [`CodecError::Unsupported`] if the codec has no such sentinel.
            pub fn encode_special(self, special: SpecialValue) -> Result<Vec<u8>, CodecError> {
                match self {
                    $(Self::$variant => <$ty as Characteristic>::encode_special(special),)*
                }
            }
        }

        impl CharacteristicValue {
            /// The built-in codec that produced this value, `None` for custom values
            #[must_use]
            pub const fn kind(&self) -> Option<CharacteristicKind> {
                match self {
                    $(Self::$variant(_) => Some(CharacteristicKind::$variant),)*
                    Self::Custom(_) => None,
                }
            }
        }
    };
}

sig_characteristics! {
    // GAP / GATT
    DeviceName(0x2A00) => gap::DeviceNameCharacteristic,
    Appearance(0x2A01) => gap::AppearanceCharacteristic,
    PeripheralPreferredConnectionParameters(0x2A04) => gap::PeripheralPreferredConnectionParametersCharacteristic,
    ServiceChanged(0x2A05) => gap::ServiceChangedCharacteristic,
    CentralAddressResolution(0x2AA6) => gap::CentralAddressResolutionCharacteristic,
    DatabaseHash(0x2B2A) => gap::DatabaseHashCharacteristic,

    // Alerts
    AlertLevel(0x2A06) => alert::AlertLevelCharacteristic,
    TxPowerLevel(0x2A07) => alert::TxPowerLevelCharacteristic,
    AlertStatus(0x2A3F) => alert::AlertStatusCharacteristic,
    RingerControlPoint(0x2A40) => alert::RingerControlPointCharacteristic,
    RingerSetting(0x2A41) => alert::RingerSettingCharacteristic,
    AlertCategoryIdBitMask(0x2A42) => alert::AlertCategoryIdBitMaskCharacteristic,
    AlertCategoryId(0x2A43) => alert::AlertCategoryIdCharacteristic,
    AlertNotificationControlPoint(0x2A44) => alert::AlertNotificationControlPointCharacteristic,
    UnreadAlertStatus(0x2A45) => alert::UnreadAlertStatusCharacteristic,
    NewAlert(0x2A46) => alert::NewAlertCharacteristic,
    SupportedNewAlertCategory(0x2A47) => alert::SupportedNewAlertCategoryCharacteristic,
    SupportedUnreadAlertCategory(0x2A48) => alert::SupportedUnreadAlertCategoryCharacteristic,

    // Time
    DateTime(0x2A08) => time::DateTimeCharacteristic,
    DayOfWeek(0x2A09) => time::DayOfWeekCharacteristic,
    DayDateTime(0x2A0A) => time::DayDateTimeCharacteristic,
    ExactTime256(0x2A0C) => time::ExactTime256Characteristic,
    DstOffset(0x2A0D) => time::DstOffsetCharacteristic,
    TimeZone(0x2A0E) => time::TimeZoneCharacteristic,
    LocalTimeInformation(0x2A0F) => time::LocalTimeInformationCharacteristic,
    TimeAccuracy(0x2A12) => time::TimeAccuracyCharacteristic,
    TimeSource(0x2A13) => time::TimeSourceCharacteristic,
    ReferenceTimeInformation(0x2A14) => time::ReferenceTimeInformationCharacteristic,
    CurrentTime(0x2A2B) => time::CurrentTimeCharacteristic,

    // Battery
    BatteryLevel(0x2A19) => battery::BatteryLevelCharacteristic,
    BatteryPowerState(0x2A1A) => battery::BatteryPowerStateCharacteristic,

    // Health
    TemperatureMeasurement(0x2A1C) => health::TemperatureMeasurementCharacteristic,
    TemperatureType(0x2A1D) => health::TemperatureTypeCharacteristic,
    IntermediateTemperature(0x2A1E) => health::IntermediateTemperatureCharacteristic,
    MeasurementInterval(0x2A21) => health::MeasurementIntervalCharacteristic,
    BloodPressureMeasurement(0x2A35) => health::BloodPressureMeasurementCharacteristic,
    IntermediateCuffPressure(0x2A36) => health::IntermediateCuffPressureCharacteristic,
    HeartRateMeasurement(0x2A37) => health::HeartRateMeasurementCharacteristic,
    BodySensorLocation(0x2A38) => health::BodySensorLocationCharacteristic,
    HeartRateControlPoint(0x2A39) => health::HeartRateControlPointCharacteristic,
    BloodPressureFeature(0x2A49) => health::BloodPressureFeatureCharacteristic,

    // Glucose
    GlucoseMeasurement(0x2A18) => glucose::GlucoseMeasurementCharacteristic,
    GlucoseMeasurementContext(0x2A34) => glucose::GlucoseMeasurementContextCharacteristic,
    GlucoseFeature(0x2A51) => glucose::GlucoseFeatureCharacteristic,

    // Device Information
    SystemId(0x2A23) => device_info::SystemIdCharacteristic,
    ModelNumberString(0x2A24) => device_info::ModelNumberStringCharacteristic,
    SerialNumberString(0x2A25) => device_info::SerialNumberStringCharacteristic,
    FirmwareRevisionString(0x2A26) => device_info::FirmwareRevisionStringCharacteristic,
    HardwareRevisionString(0x2A27) => device_info::HardwareRevisionStringCharacteristic,
    SoftwareRevisionString(0x2A28) => device_info::SoftwareRevisionStringCharacteristic,
    ManufacturerNameString(0x2A29) => device_info::ManufacturerNameStringCharacteristic,
    PnpId(0x2A50) => device_info::PnpIdCharacteristic,

    // HID
    HidInformation(0x2A4A) => hid::HidInformationCharacteristic,
    HidControlPoint(0x2A4C) => hid::HidControlPointCharacteristic,
    ProtocolMode(0x2A4E) => hid::ProtocolModeCharacteristic,

    // Fitness
    RscMeasurement(0x2A53) => fitness::RscMeasurementCharacteristic,
    RscFeature(0x2A54) => fitness::RscFeatureCharacteristic,
    CscMeasurement(0x2A5B) => fitness::CscMeasurementCharacteristic,
    CscFeature(0x2A5C) => fitness::CscFeatureCharacteristic,
    SensorLocation(0x2A5D) => fitness::SensorLocationCharacteristic,
    CyclingPowerMeasurement(0x2A63) => fitness::CyclingPowerMeasurementCharacteristic,
    CyclingPowerFeature(0x2A65) => fitness::CyclingPowerFeatureCharacteristic,

    // Pulse oximetry
    PlxSpotCheckMeasurement(0x2A5E) => pulse_oximeter::PlxSpotCheckMeasurementCharacteristic,
    PlxContinuousMeasurement(0x2A5F) => pulse_oximeter::PlxContinuousMeasurementCharacteristic,
    PlxFeatures(0x2A60) => pulse_oximeter::PlxFeaturesCharacteristic,

    // Location and navigation
    LocationAndSpeed(0x2A67) => location::LocationAndSpeedCharacteristic,
    LnFeature(0x2A6A) => location::LnFeatureCharacteristic,

    // Environmental sensing
    MagneticDeclination(0x2A2C) => environmental::MagneticDeclinationCharacteristic,
    Elevation(0x2A6C) => environmental::ElevationCharacteristic,
    Pressure(0x2A6D) => environmental::PressureCharacteristic,
    Temperature(0x2A6E) => environmental::TemperatureCharacteristic,
    Humidity(0x2A6F) => environmental::HumidityCharacteristic,
    TrueWindSpeed(0x2A70) => environmental::TrueWindSpeedCharacteristic,
    TrueWindDirection(0x2A71) => environmental::TrueWindDirectionCharacteristic,
    ApparentWindSpeed(0x2A72) => environmental::ApparentWindSpeedCharacteristic,
    ApparentWindDirection(0x2A73) => environmental::ApparentWindDirectionCharacteristic,
    GustFactor(0x2A74) => environmental::GustFactorCharacteristic,
    PollenConcentration(0x2A75) => environmental::PollenConcentrationCharacteristic,
    UvIndex(0x2A76) => environmental::UvIndexCharacteristic,
    Irradiance(0x2A77) => environmental::IrradianceCharacteristic,
    Rainfall(0x2A78) => environmental::RainfallCharacteristic,
    WindChill(0x2A79) => environmental::WindChillCharacteristic,
    HeatIndex(0x2A7A) => environmental::HeatIndexCharacteristic,
    DewPoint(0x2A7B) => environmental::DewPointCharacteristic,
    TemperatureCelsius(0x2A1F) => environmental::TemperatureCelsiusCharacteristic,
    TemperatureFahrenheit(0x2A20) => environmental::TemperatureFahrenheitCharacteristic,
    MagneticFluxDensity2D(0x2AA0) => environmental::MagneticFluxDensity2DCharacteristic,
    MagneticFluxDensity3D(0x2AA1) => environmental::MagneticFluxDensity3DCharacteristic,
    BarometricPressureTrend(0x2AA3) => environmental::BarometricPressureTrendCharacteristic,

    // Body
    BodyCompositionFeature(0x2A9B) => body::BodyCompositionFeatureCharacteristic,
    BodyCompositionMeasurement(0x2A9C) => body::BodyCompositionMeasurementCharacteristic,
    WeightMeasurement(0x2A9D) => body::WeightMeasurementCharacteristic,
    WeightScaleFeature(0x2A9E) => body::WeightScaleFeatureCharacteristic,

    // Electrical, lighting and generic quantities
    AverageCurrent(0x2AE0) => electrical::AverageCurrentCharacteristic,
    AverageVoltage(0x2AE1) => electrical::AverageVoltageCharacteristic,
    Boolean(0x2AE2) => electrical::BooleanCharacteristic,
    ChromaticityCoordinates(0x2AE4) => electrical::ChromaticityCoordinatesCharacteristic,
    ColorRenderingIndex(0x2AE7) => electrical::ColorRenderingIndexCharacteristic,
    Coefficient(0x2AE8) => electrical::CoefficientCharacteristic,
    CorrelatedColorTemperature(0x2AE9) => electrical::CorrelatedColorTemperatureCharacteristic,
    Count16(0x2AEA) => electrical::Count16Characteristic,
    Count24(0x2AEB) => electrical::Count24Characteristic,
    CountryCode(0x2AEC) => electrical::CountryCodeCharacteristic,
    DateUtc(0x2AED) => electrical::DateUtcCharacteristic,
    ElectricCurrent(0x2AEE) => electrical::ElectricCurrentCharacteristic,
    ElectricCurrentRange(0x2AEF) => electrical::ElectricCurrentRangeCharacteristic,
    ElectricCurrentSpecification(0x2AF0) => electrical::ElectricCurrentSpecificationCharacteristic,
    ElectricCurrentStatistics(0x2AF1) => electrical::ElectricCurrentStatisticsCharacteristic,
    Energy(0x2AF2) => electrical::EnergyCharacteristic,
    FixedString16(0x2AF5) => electrical::FixedString16Characteristic,
    FixedString24(0x2AF6) => electrical::FixedString24Characteristic,
    FixedString36(0x2AF7) => electrical::FixedString36Characteristic,
    FixedString8(0x2AF8) => electrical::FixedString8Characteristic,
    GenericLevel(0x2AF9) => electrical::GenericLevelCharacteristic,
    GlobalTradeItemNumber(0x2AFA) => electrical::GlobalTradeItemNumberCharacteristic,
    Illuminance(0x2AFB) => electrical::IlluminanceCharacteristic,
    LuminousEfficacy(0x2AFC) => electrical::LuminousEfficacyCharacteristic,
    LuminousEnergy(0x2AFD) => electrical::LuminousEnergyCharacteristic,
    LuminousExposure(0x2AFE) => electrical::LuminousExposureCharacteristic,
    LuminousFlux(0x2AFF) => electrical::LuminousFluxCharacteristic,
    LuminousIntensity(0x2B01) => electrical::LuminousIntensityCharacteristic,
    MassFlow(0x2B02) => electrical::MassFlowCharacteristic,
    PerceivedLightness(0x2B03) => electrical::PerceivedLightnessCharacteristic,
    Percentage8(0x2B04) => electrical::Percentage8Characteristic,
    Power(0x2B05) => electrical::PowerCharacteristic,
    Voltage(0x2B18) => electrical::VoltageCharacteristic,
    VoltageSpecification(0x2B19) => electrical::VoltageSpecificationCharacteristic,
    VoltageStatistics(0x2B1A) => electrical::VoltageStatisticsCharacteristic,
    VolumeFlow(0x2B1B) => electrical::VolumeFlowCharacteristic,

    // Air quality
    Co2Concentration(0x2B8C) => air_quality::Co2ConcentrationCharacteristic,
    AmmoniaConcentration(0x2BCF) => air_quality::AmmoniaConcentrationCharacteristic,
    CarbonMonoxideConcentration(0x2BD0) => air_quality::CarbonMonoxideConcentrationCharacteristic,
    MethaneConcentration(0x2BD1) => air_quality::MethaneConcentrationCharacteristic,
    NitrogenDioxideConcentration(0x2BD2) => air_quality::NitrogenDioxideConcentrationCharacteristic,
    NonMethaneVocConcentration(0x2BD3) => air_quality::NonMethaneVocConcentrationCharacteristic,
    OzoneConcentration(0x2BD4) => air_quality::OzoneConcentrationCharacteristic,
    Pm1Concentration(0x2BD5) => air_quality::Pm1ConcentrationCharacteristic,
    Pm25Concentration(0x2BD6) => air_quality::Pm25ConcentrationCharacteristic,
    Pm10Concentration(0x2BD7) => air_quality::Pm10ConcentrationCharacteristic,
    SulfurDioxideConcentration(0x2BD8) => air_quality::SulfurDioxideConcentrationCharacteristic,
    SulfurHexafluorideConcentration(0x2BD9) => air_quality::SulfurHexafluorideConcentrationCharacteristic,
    VocConcentration(0x2BE7) => air_quality::VocConcentrationCharacteristic,
}

impl CharacteristicKind {
    /// Look up a codec by UUID
    #[must_use]
    pub const fn from_uuid(uuid: &BluetoothUuid) -> Option<Self> {
        match uuid.to_u16() {
            Some(short) => Self::from_u16(short),
            None => None,
        }
    }

    /// Whether decoded values of this kind feed [`SiblingValues`]
    ///
    /// Batch parsing decodes these first so that dependent characteristics
    /// see them regardless of input order.
    #[must_use]
    pub const fn is_context_provider(self) -> bool {
        matches!(
            self,
            Self::WeightScaleFeature
                | Self::BodyCompositionFeature
                | Self::GlucoseMeasurement
                | Self::TemperatureType
        )
    }

    /// Decode a payload, capturing any failure in the returned [`ParseResult`]
    #[must_use]
    pub fn parse_value(self, data: &[u8], ctx: &ParseContext<'_>) -> ParseResult {
        ParseResult::new(self.info(), data, self.decode(data, ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata;

    #[test]
    fn test_length_rules() {
        assert!(LengthRule::Exact(2).accepts(2));
        assert!(!LengthRule::Exact(2).accepts(1));
        assert!(LengthRule::AtLeast(3).accepts(10));
        assert!(LengthRule::Between(1, 2).accepts(2));
        assert!(!LengthRule::Between(1, 2).accepts(3));
        assert!(LengthRule::Multiple { base: 1, step: 2 }.accepts(5));
        assert!(!LengthRule::Multiple { base: 1, step: 2 }.accepts(4));
    }

    #[test]
    fn test_kind_lookup_matches_info() {
        for kind in CharacteristicKind::ALL {
            let info = kind.info();
            assert_eq!(CharacteristicKind::from_uuid(&info.uuid), Some(*kind));
        }
    }

    #[test]
    fn test_every_codec_has_metadata() {
        for kind in CharacteristicKind::ALL {
            let info = kind.info();
            let short = info.uuid.to_u16().unwrap();
            let entry = metadata::characteristic(short)
                .unwrap_or_else(|| panic!("{} has no metadata entry", info.name));
            assert_eq!(entry.name, info.name, "{short:04X}");
            assert_eq!(entry.identifier, info.identifier, "{short:04X}");
        }
    }

    #[test]
    fn test_parse_result_invariant() {
        let ctx = ParseContext::default();
        let ok = CharacteristicKind::BatteryLevel.parse_value(&[0x64], &ctx);
        assert!(ok.parse_success());
        assert_eq!(ok.value(), Some(&CharacteristicValue::BatteryLevel(100)));
        assert!(ok.error_message().is_none());

        let failed = CharacteristicKind::BatteryLevel.parse_value(&[], &ctx);
        assert!(!failed.parse_success());
        assert!(failed.value().is_none());
        assert!(failed.error_message().is_some());
    }

    #[test]
    fn test_encode_rejects_foreign_value() {
        let err = CharacteristicKind::Humidity
            .encode(&CharacteristicValue::BatteryLevel(10))
            .unwrap_err();
        assert!(matches!(err, CodecError::ValueTypeMismatch { .. }));
    }

    #[test]
    fn test_special_value_display() {
        let special = SpecialValue::new(SpecialValueKind::NotKnown, 0x8000);
        assert_eq!(special.to_string(), "value is not known (raw 0x8000)");
    }

    #[test]
    fn test_every_codec_rejects_wrong_length() {
        let ctx = ParseContext::default();
        for kind in CharacteristicKind::ALL {
            let rule = kind.length();
            let Some((len, bound)) = rule.rejected() else {
                continue;
            };
            let err = kind.decode(&vec![0; len], &ctx).unwrap_err();
            assert_eq!(err, CodecError::InvalidLength { rule, actual: len }, "{kind:?}");
            let message = err.to_string();
            assert!(message.contains(&format!("got {len}")), "{kind:?}: {message}");
            assert!(message.contains(&format!("{bound}")), "{kind:?}: {message}");
        }
    }

    #[test]
    fn test_every_codec_round_trips_decoded_values() {
        let ctx = ParseContext::default();
        let mut checked = 0;
        for kind in CharacteristicKind::ALL {
            let data = vec![0; kind.length().shortest()];
            // zeroed payloads that fail validation or hit a sentinel are skipped
            let Ok(Decoded::Value(value)) = kind.decode(&data, &ctx) else {
                continue;
            };
            let encoded = kind
                .encode(&value)
                .unwrap_or_else(|e| panic!("{kind:?} failed to encode {value:?}: {e}"));
            assert_eq!(
                kind.decode(&encoded, &ctx),
                Ok(Decoded::Value(value)),
                "{kind:?}"
            );
            checked += 1;
        }
        assert!(checked > 0);
    }

    #[test]
    fn test_every_sentinel_round_trips() {
        const KINDS: [SpecialValueKind; 10] = [
            SpecialValueKind::NotKnown,
            SpecialValueKind::NotValid,
            SpecialValueKind::MeasurementUnsuccessful,
            SpecialValueKind::AtOrAboveMaximum,
            SpecialValueKind::AtOrBelowMinimum,
            SpecialValueKind::NaN,
            SpecialValueKind::NotAtThisResolution,
            SpecialValueKind::PositiveInfinity,
            SpecialValueKind::NegativeInfinity,
            SpecialValueKind::Reserved,
        ];
        let ctx = ParseContext::default();
        let mut checked = 0;
        for kind in CharacteristicKind::ALL {
            for special_kind in KINDS {
                // an unused raw pattern forces the lookup by kind
                let Ok(bytes) = kind.encode_special(SpecialValue::new(special_kind, 0x1234_5678))
                else {
                    continue;
                };
                let Ok(Decoded::Special(special)) = kind.decode(&bytes, &ctx) else {
                    panic!("{kind:?} did not decode {special_kind:?} from {bytes:02X?}");
                };
                assert_eq!(special.kind, special_kind, "{kind:?}");
                assert_eq!(kind.encode_special(special), Ok(bytes), "{kind:?}");
                checked += 1;
            }
        }
        assert!(checked > 0);
    }
}
