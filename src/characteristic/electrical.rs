//! Electrical, lighting and generic quantity characteristics
//!
//! These come from the GATT Specification Supplement and are mostly a single
//! scaled integer whose all-ones pattern means "value is not known". The
//! grouped ones (ranges, specifications, statistics) repeat one scaled
//! field several times, and each occurrence may independently be unknown.

use super::{
    Characteristic, CharacteristicInfo, Decoded, LengthRule, ParseContext, ValueType,
};
use crate::codec::{ByteReader, ByteWriter, DateTime, Resolution, TimeExponential};
use crate::error::CodecError;
use alloc::vec::Vec;

const NOT_KNOWN_U16: u16 = 0xFFFF;
const CURRENT: Resolution = Resolution::decimal(-2);
const VOLTAGE: Resolution = Resolution::binary(-6);

/// Read a `uint16` field, mapping the all-ones pattern to `None` when validating
fn read_optional(
    reader: &mut ByteReader<'_>,
    resolution: Resolution,
    validate: bool,
) -> Result<Option<f64>, CodecError> {
    let raw = reader.read_u16()?;
    if raw == NOT_KNOWN_U16 && validate {
        Ok(None)
    } else {
        Ok(Some(resolution.apply(i64::from(raw))))
    }
}

fn write_optional(
    writer: &mut ByteWriter,
    field: &'static str,
    resolution: Resolution,
    value: Option<f64>,
) -> Result<(), CodecError> {
    let raw = match value {
        Some(value) => crate::codec::narrow(field, resolution.unapply(field, value)?)?,
        None => NOT_KNOWN_U16,
    };
    writer.write_u16(raw);
    Ok(())
}

fn check_optional(
    field: &'static str,
    value: Option<f64>,
    resolution: Resolution,
) -> Result<(), CodecError> {
    match value {
        Some(value) => {
            CodecError::check_range(field, value, 0.0, resolution.apply(i64::from(NOT_KNOWN_U16 - 1)))
        }
        None => Ok(()),
    }
}

fn check_order(
    field: &'static str,
    lower: Option<f64>,
    upper: Option<f64>,
) -> Result<(), CodecError> {
    match (lower, upper) {
        (Some(lower), Some(upper)) if lower > upper => Err(CodecError::OutOfRange {
            field,
            value: lower,
            min: 0.0,
            max: upper,
        }),
        _ => Ok(()),
    }
}

/// A value made of repeated scaled `uint16` fields
pub trait ScaledGroup: Sized {
    /// Encoded size
    const LEN: usize;

    /// Read all fields
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] on a short buffer.
    fn read(
        reader: &mut ByteReader<'_>,
        resolution: Resolution,
        validate: bool,
    ) -> Result<Self, CodecError>;

    /// Append all fields
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OutOfRange`] when a field does not fit.
    fn write(&self, writer: &mut ByteWriter, resolution: Resolution) -> Result<(), CodecError>;

    /// Check field ranges and ordering
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OutOfRange`].
    fn check(&self, resolution: Resolution) -> Result<(), CodecError>;
}

/// Scaled value averaged over a sensing duration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AverageValue {
    /// Average, `None` if not known
    pub value: Option<f64>,
    /// Duration the average was taken over
    pub sensing_duration: TimeExponential,
}

impl ScaledGroup for AverageValue {
    const LEN: usize = 3;

    fn read(
        reader: &mut ByteReader<'_>,
        resolution: Resolution,
        validate: bool,
    ) -> Result<Self, CodecError> {
        Ok(Self {
            value: read_optional(reader, resolution, validate)?,
            sensing_duration: TimeExponential::from_raw(reader.read_u8()?),
        })
    }

    fn write(&self, writer: &mut ByteWriter, resolution: Resolution) -> Result<(), CodecError> {
        write_optional(writer, "average", resolution, self.value)?;
        writer.write_u8(self.sensing_duration.to_raw());
        Ok(())
    }

    fn check(&self, resolution: Resolution) -> Result<(), CodecError> {
        check_optional("average", self.value, resolution)
    }
}

/// Minimum and maximum
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValueRange {
    /// Lower bound, `None` if not known
    pub minimum: Option<f64>,
    /// Upper bound, `None` if not known
    pub maximum: Option<f64>,
}

impl ScaledGroup for ValueRange {
    const LEN: usize = 4;

    fn read(
        reader: &mut ByteReader<'_>,
        resolution: Resolution,
        validate: bool,
    ) -> Result<Self, CodecError> {
        Ok(Self {
            minimum: read_optional(reader, resolution, validate)?,
            maximum: read_optional(reader, resolution, validate)?,
        })
    }

    fn write(&self, writer: &mut ByteWriter, resolution: Resolution) -> Result<(), CodecError> {
        write_optional(writer, "minimum", resolution, self.minimum)?;
        write_optional(writer, "maximum", resolution, self.maximum)
    }

    fn check(&self, resolution: Resolution) -> Result<(), CodecError> {
        check_optional("minimum", self.minimum, resolution)?;
        check_optional("maximum", self.maximum, resolution)?;
        check_order("minimum", self.minimum, self.maximum)
    }
}

/// Minimum, typical and maximum
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValueSpecification {
    /// Lower bound, `None` if not known
    pub minimum: Option<f64>,
    /// Typical value, `None` if not known
    pub typical: Option<f64>,
    /// Upper bound, `None` if not known
    pub maximum: Option<f64>,
}

impl ScaledGroup for ValueSpecification {
    const LEN: usize = 6;

    fn read(
        reader: &mut ByteReader<'_>,
        resolution: Resolution,
        validate: bool,
    ) -> Result<Self, CodecError> {
        Ok(Self {
            minimum: read_optional(reader, resolution, validate)?,
            typical: read_optional(reader, resolution, validate)?,
            maximum: read_optional(reader, resolution, validate)?,
        })
    }

    fn write(&self, writer: &mut ByteWriter, resolution: Resolution) -> Result<(), CodecError> {
        write_optional(writer, "minimum", resolution, self.minimum)?;
        write_optional(writer, "typical", resolution, self.typical)?;
        write_optional(writer, "maximum", resolution, self.maximum)
    }

    fn check(&self, resolution: Resolution) -> Result<(), CodecError> {
        check_optional("minimum", self.minimum, resolution)?;
        check_optional("typical", self.typical, resolution)?;
        check_optional("maximum", self.maximum, resolution)?;
        check_order("minimum", self.minimum, self.typical)?;
        check_order("typical", self.typical, self.maximum)?;
        check_order("minimum", self.minimum, self.maximum)
    }
}

/// Average, deviation and extremes over a sensing duration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValueStatistics {
    /// Average, `None` if not known
    pub average: Option<f64>,
    /// Standard deviation, `None` if not known
    pub standard_deviation: Option<f64>,
    /// Smallest sample, `None` if not known
    pub minimum: Option<f64>,
    /// Largest sample, `None` if not known
    pub maximum: Option<f64>,
    /// Duration the statistics cover
    pub sensing_duration: TimeExponential,
}

impl ScaledGroup for ValueStatistics {
    const LEN: usize = 9;

    fn read(
        reader: &mut ByteReader<'_>,
        resolution: Resolution,
        validate: bool,
    ) -> Result<Self, CodecError> {
        Ok(Self {
            average: read_optional(reader, resolution, validate)?,
            standard_deviation: read_optional(reader, resolution, validate)?,
            minimum: read_optional(reader, resolution, validate)?,
            maximum: read_optional(reader, resolution, validate)?,
            sensing_duration: TimeExponential::from_raw(reader.read_u8()?),
        })
    }

    fn write(&self, writer: &mut ByteWriter, resolution: Resolution) -> Result<(), CodecError> {
        write_optional(writer, "average", resolution, self.average)?;
        write_optional(writer, "standard deviation", resolution, self.standard_deviation)?;
        write_optional(writer, "minimum", resolution, self.minimum)?;
        write_optional(writer, "maximum", resolution, self.maximum)?;
        writer.write_u8(self.sensing_duration.to_raw());
        Ok(())
    }

    fn check(&self, resolution: Resolution) -> Result<(), CodecError> {
        check_optional("average", self.average, resolution)?;
        check_optional("standard deviation", self.standard_deviation, resolution)?;
        check_optional("minimum", self.minimum, resolution)?;
        check_optional("maximum", self.maximum, resolution)?;
        check_order("minimum", self.minimum, self.maximum)
    }
}

/// Characteristic whose value is a [`ScaledGroup`]
macro_rules! group_characteristic {
    (
        $(#[$meta:meta])*
        $name:ident => $value:ty {
            uuid: $uuid:literal,
            name: $display:literal,
            id: $id:literal,
            unit: $unit:expr,
            resolution: $res:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl $name {
            /// Fixed-point resolution of every field
            pub const RESOLUTION: Resolution = $res;
        }

        impl Characteristic for $name {
            type Value = $value;
            const INFO: CharacteristicInfo =
                CharacteristicInfo::new($uuid, $display, $id, $unit, ValueType::Struct);
            const LENGTH: LengthRule = LengthRule::Exact(<$value as ScaledGroup>::LEN);

            fn decode_value(
                data: &[u8],
                ctx: &ParseContext<'_>,
            ) -> Result<Decoded<Self::Value>, CodecError> {
                let mut reader = ByteReader::new(data);
                <$value>::read(&mut reader, Self::RESOLUTION, ctx.validate).map(Decoded::Value)
            }

            fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
                let mut writer = ByteWriter::with_capacity(<$value as ScaledGroup>::LEN);
                value.write(&mut writer, Self::RESOLUTION)?;
                Ok(writer.into_vec())
            }

            fn validate(value: &Self::Value) -> Result<(), CodecError> {
                value.check(Self::RESOLUTION)
            }
        }
    };
}

group_characteristic! {
    /// Average Current (0x2AE0)
    AverageCurrentCharacteristic => AverageValue {
        uuid: 0x2AE0,
        name: "Average Current",
        id: "org.bluetooth.characteristic.average_current",
        unit: Some("A"),
        resolution: CURRENT,
    }
}

group_characteristic! {
    /// Average Voltage (0x2AE1)
    AverageVoltageCharacteristic => AverageValue {
        uuid: 0x2AE1,
        name: "Average Voltage",
        id: "org.bluetooth.characteristic.average_voltage",
        unit: Some("V"),
        resolution: VOLTAGE,
    }
}

/// Boolean (0x2AE2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BooleanCharacteristic;

impl Characteristic for BooleanCharacteristic {
    type Value = bool;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2AE2,
        "Boolean",
        "org.bluetooth.characteristic.boolean",
        None,
        ValueType::Bool,
    );
    const LENGTH: LengthRule = LengthRule::Exact(1);

    fn decode_value(
        data: &[u8],
        ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        match data[0] {
            0 => Ok(Decoded::Value(false)),
            1 => Ok(Decoded::Value(true)),
            raw if ctx.validate => Err(CodecError::Reserved {
                field: "Boolean",
                value: u32::from(raw),
            }),
            _ => Ok(Decoded::Value(true)),
        }
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Ok(alloc::vec![u8::from(*value)])
    }
}

/// Chromaticity coordinates in the CIE 1931 colour space
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Chromaticity {
    /// x coordinate, 0..1
    pub x: f64,
    /// y coordinate, 0..1
    pub y: f64,
}

/// Chromaticity Coordinates (0x2AE4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromaticityCoordinatesCharacteristic;

impl ChromaticityCoordinatesCharacteristic {
    /// Resolution of each coordinate, 2^-16
    pub const RESOLUTION: Resolution = Resolution::binary(-16);
}

impl Characteristic for ChromaticityCoordinatesCharacteristic {
    type Value = Chromaticity;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2AE4,
        "Chromaticity Coordinates",
        "org.bluetooth.characteristic.chromaticity_coordinates",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Exact(4);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        Ok(Decoded::Value(Chromaticity {
            x: Self::RESOLUTION.apply(i64::from(reader.read_u16()?)),
            y: Self::RESOLUTION.apply(i64::from(reader.read_u16()?)),
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        use crate::codec::narrow;

        let x = narrow("x", Self::RESOLUTION.unapply("x", value.x)?)?;
        let y = narrow("y", Self::RESOLUTION.unapply("y", value.y)?)?;
        let mut writer = ByteWriter::with_capacity(4);
        writer.write_u16(x).write_u16(y);
        Ok(writer.into_vec())
    }
}

integer_characteristic! {
    /// Color Rendering Index (0x2AE7)
    ColorRenderingIndexCharacteristic {
        uuid: 0x2AE7,
        name: "Color Rendering Index",
        id: "org.bluetooth.characteristic.color_rendering_index",
        unit: None,
        value: i8,
        width: 1,
        signed: true,
        range: -128.0 => 100.0,
        special: [],
    }
}

/// Coefficient (0x2AE8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoefficientCharacteristic;

impl Characteristic for CoefficientCharacteristic {
    type Value = f32;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2AE8,
        "Coefficient",
        "org.bluetooth.characteristic.coefficient",
        None,
        ValueType::Float,
    );
    const LENGTH: LengthRule = LengthRule::Exact(4);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        ByteReader::new(data).read_f32().map(Decoded::Value)
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Ok(value.to_le_bytes().to_vec())
    }
}

integer_characteristic! {
    /// Correlated Color Temperature (0x2AE9)
    CorrelatedColorTemperatureCharacteristic {
        uuid: 0x2AE9,
        name: "Correlated Color Temperature",
        id: "org.bluetooth.characteristic.correlated_color_temperature",
        unit: Some("K"),
        value: u16,
        width: 2,
        signed: false,
        range: 800.0 => 65534.0,
        special: [0xFFFF => NotKnown],
    }
}

integer_characteristic! {
    /// Count 16 (0x2AEA)
    Count16Characteristic {
        uuid: 0x2AEA,
        name: "Count 16",
        id: "org.bluetooth.characteristic.count_16",
        unit: None,
        value: u16,
        width: 2,
        signed: false,
        range: 0.0 => 65534.0,
        special: [0xFFFF => NotKnown],
    }
}

integer_characteristic! {
    /// Count 24 (0x2AEB)
    Count24Characteristic {
        uuid: 0x2AEB,
        name: "Count 24",
        id: "org.bluetooth.characteristic.count_24",
        unit: None,
        value: u32,
        width: 3,
        signed: false,
        range: 0.0 => 16_777_214.0,
        special: [0xFF_FFFF => NotKnown],
    }
}

integer_characteristic! {
    /// Country Code (0x2AEC), ISO 3166-1 numeric
    CountryCodeCharacteristic {
        uuid: 0x2AEC,
        name: "Country Code",
        id: "org.bluetooth.characteristic.country_code",
        unit: None,
        value: u16,
        width: 2,
        signed: false,
        range: 0.0 => 999.0,
        special: [0xFFFF => NotKnown],
    }
}

/// Days since 1970-01-01
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateUtc {
    /// Day count, 1..=16777214
    pub days: u32,
}

impl DateUtc {
    /// Calendar date at midnight UTC
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_date_time(self) -> DateTime {
        // days-from-civil inverse over 400-year eras
        let z = i64::from(self.days) + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + i64::from(month <= 2);
        DateTime::new(year as u16, month as u8, day as u8, 0, 0, 0)
    }
}

/// Date UTC (0x2AED)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateUtcCharacteristic;

impl DateUtcCharacteristic {
    const FIELD: super::RawField = super::RawField::new(3, false);
}

impl Characteristic for DateUtcCharacteristic {
    type Value = DateUtc;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2AED,
        "Date UTC",
        "org.bluetooth.characteristic.date_utc",
        None,
        ValueType::DateTime,
    );
    const LENGTH: LengthRule = LengthRule::Exact(3);

    #[allow(clippy::cast_possible_truncation)]
    fn decode_value(
        data: &[u8],
        ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let (bits, _) = Self::FIELD.read(data)?;
        if bits == 0 && ctx.validate {
            return Ok(Decoded::Special(super::SpecialValue::new(
                super::SpecialValueKind::NotKnown,
                0,
            )));
        }
        Ok(Decoded::Value(DateUtc { days: bits as u32 }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Self::FIELD.write("Date UTC", i64::from(value.days))
    }

    fn encode_special(special: super::SpecialValue) -> Result<Vec<u8>, CodecError> {
        if special.kind == super::SpecialValueKind::NotKnown {
            Ok(alloc::vec![0, 0, 0])
        } else {
            Err(CodecError::Unsupported(Self::INFO.uuid))
        }
    }
}

scaled_characteristic! {
    /// Electric Current (0x2AEE)
    ElectricCurrentCharacteristic {
        uuid: 0x2AEE,
        name: "Electric Current",
        id: "org.bluetooth.characteristic.electric_current",
        unit: Some("A"),
        width: 2,
        signed: false,
        resolution: CURRENT,
        range: 0.0 => 655.34,
        special: [0xFFFF => NotKnown],
    }
}

group_characteristic! {
    /// Electric Current Range (0x2AEF)
    ElectricCurrentRangeCharacteristic => ValueRange {
        uuid: 0x2AEF,
        name: "Electric Current Range",
        id: "org.bluetooth.characteristic.electric_current_range",
        unit: Some("A"),
        resolution: CURRENT,
    }
}

group_characteristic! {
    /// Electric Current Specification (0x2AF0)
    ElectricCurrentSpecificationCharacteristic => ValueSpecification {
        uuid: 0x2AF0,
        name: "Electric Current Specification",
        id: "org.bluetooth.characteristic.electric_current_specification",
        unit: Some("A"),
        resolution: CURRENT,
    }
}

group_characteristic! {
    /// Electric Current Statistics (0x2AF1)
    ElectricCurrentStatisticsCharacteristic => ValueStatistics {
        uuid: 0x2AF1,
        name: "Electric Current Statistics",
        id: "org.bluetooth.characteristic.electric_current_statistics",
        unit: Some("A"),
        resolution: CURRENT,
    }
}

integer_characteristic! {
    /// Energy (0x2AF2)
    EnergyCharacteristic {
        uuid: 0x2AF2,
        name: "Energy",
        id: "org.bluetooth.characteristic.energy",
        unit: Some("kWh"),
        value: u32,
        width: 3,
        signed: false,
        range: 0.0 => 16_777_214.0,
        special: [0xFF_FFFF => NotKnown],
    }
}

utf8_characteristic! {
    /// Fixed String 16 (0x2AF5)
    FixedString16Characteristic {
        uuid: 0x2AF5,
        name: "Fixed String 16",
        id: "org.bluetooth.characteristic.fixed_string_16",
        length: LengthRule::Exact(16),
    }
}

utf8_characteristic! {
    /// Fixed String 24 (0x2AF6)
    FixedString24Characteristic {
        uuid: 0x2AF6,
        name: "Fixed String 24",
        id: "org.bluetooth.characteristic.fixed_string_24",
        length: LengthRule::Exact(24),
    }
}

utf8_characteristic! {
    /// Fixed String 36 (0x2AF7)
    FixedString36Characteristic {
        uuid: 0x2AF7,
        name: "Fixed String 36",
        id: "org.bluetooth.characteristic.fixed_string_36",
        length: LengthRule::Exact(36),
    }
}

utf8_characteristic! {
    /// Fixed String 8 (0x2AF8)
    FixedString8Characteristic {
        uuid: 0x2AF8,
        name: "Fixed String 8",
        id: "org.bluetooth.characteristic.fixed_string_8",
        length: LengthRule::Exact(8),
    }
}

integer_characteristic! {
    /// Generic Level (0x2AF9)
    GenericLevelCharacteristic {
        uuid: 0x2AF9,
        name: "Generic Level",
        id: "org.bluetooth.characteristic.generic_level",
        unit: None,
        value: u16,
        width: 2,
        signed: false,
        range: 0.0 => 65535.0,
        special: [],
    }
}

/// Global Trade Item Number (0x2AFA)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlobalTradeItemNumberCharacteristic;

impl Characteristic for GlobalTradeItemNumberCharacteristic {
    type Value = u64;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2AFA,
        "Global Trade Item Number",
        "org.bluetooth.characteristic.global_trade_item_number",
        None,
        ValueType::Int,
    );
    const LENGTH: LengthRule = LengthRule::Exact(6);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        ByteReader::new(data).read_u48().map(Decoded::Value)
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut writer = ByteWriter::with_capacity(6);
        writer.write_u48(*value)?;
        Ok(writer.into_vec())
    }
}

scaled_characteristic! {
    /// Illuminance (0x2AFB)
    IlluminanceCharacteristic {
        uuid: 0x2AFB,
        name: "Illuminance",
        id: "org.bluetooth.characteristic.illuminance",
        unit: Some("lx"),
        width: 3,
        signed: false,
        resolution: Resolution::decimal(-2),
        range: 0.0 => 167_772.14,
        special: [0xFF_FFFF => NotKnown],
    }
}

scaled_characteristic! {
    /// Luminous Efficacy (0x2AFC)
    LuminousEfficacyCharacteristic {
        uuid: 0x2AFC,
        name: "Luminous Efficacy",
        id: "org.bluetooth.characteristic.luminous_efficacy",
        unit: Some("lm/W"),
        width: 2,
        signed: false,
        resolution: Resolution::decimal(-1),
        range: 0.0 => 1800.0,
        special: [0xFFFF => NotKnown],
    }
}

scaled_characteristic! {
    /// Luminous Energy (0x2AFD)
    LuminousEnergyCharacteristic {
        uuid: 0x2AFD,
        name: "Luminous Energy",
        id: "org.bluetooth.characteristic.luminous_energy",
        unit: Some("lm·h"),
        width: 3,
        signed: false,
        resolution: Resolution::decimal(3),
        range: 0.0 => 16_777_214_000.0,
        special: [0xFF_FFFF => NotKnown],
    }
}

scaled_characteristic! {
    /// Luminous Exposure (0x2AFE)
    LuminousExposureCharacteristic {
        uuid: 0x2AFE,
        name: "Luminous Exposure",
        id: "org.bluetooth.characteristic.luminous_exposure",
        unit: Some("lx·h"),
        width: 3,
        signed: false,
        resolution: Resolution::decimal(3),
        range: 0.0 => 16_777_214_000.0,
        special: [0xFF_FFFF => NotKnown],
    }
}

integer_characteristic! {
    /// Luminous Flux (0x2AFF)
    LuminousFluxCharacteristic {
        uuid: 0x2AFF,
        name: "Luminous Flux",
        id: "org.bluetooth.characteristic.luminous_flux",
        unit: Some("lm"),
        value: u16,
        width: 2,
        signed: false,
        range: 0.0 => 65534.0,
        special: [0xFFFF => NotKnown],
    }
}

integer_characteristic! {
    /// Luminous Intensity (0x2B01)
    LuminousIntensityCharacteristic {
        uuid: 0x2B01,
        name: "Luminous Intensity",
        id: "org.bluetooth.characteristic.luminous_intensity",
        unit: Some("cd"),
        value: u16,
        width: 2,
        signed: false,
        range: 0.0 => 65534.0,
        special: [0xFFFF => NotKnown],
    }
}

integer_characteristic! {
    /// Mass Flow (0x2B02)
    MassFlowCharacteristic {
        uuid: 0x2B02,
        name: "Mass Flow",
        id: "org.bluetooth.characteristic.mass_flow",
        unit: Some("g/s"),
        value: u16,
        width: 2,
        signed: false,
        range: 0.0 => 65534.0,
        special: [0xFFFF => NotKnown],
    }
}

integer_characteristic! {
    /// Perceived Lightness (0x2B03)
    PerceivedLightnessCharacteristic {
        uuid: 0x2B03,
        name: "Perceived Lightness",
        id: "org.bluetooth.characteristic.perceived_lightness",
        unit: None,
        value: u16,
        width: 2,
        signed: false,
        range: 0.0 => 65535.0,
        special: [],
    }
}

scaled_characteristic! {
    /// Percentage 8 (0x2B04)
    Percentage8Characteristic {
        uuid: 0x2B04,
        name: "Percentage 8",
        id: "org.bluetooth.characteristic.percentage_8",
        unit: Some("%"),
        width: 1,
        signed: false,
        resolution: Resolution::binary(-1),
        range: 0.0 => 100.0,
        special: [0xFF => NotKnown],
    }
}

scaled_characteristic! {
    /// Power (0x2B05)
    PowerCharacteristic {
        uuid: 0x2B05,
        name: "Power",
        id: "org.bluetooth.characteristic.power",
        unit: Some("W"),
        width: 3,
        signed: false,
        resolution: Resolution::decimal(-1),
        range: 0.0 => 1_677_721.4,
        special: [0xFF_FFFF => NotKnown],
    }
}

scaled_characteristic! {
    /// Voltage (0x2B18)
    VoltageCharacteristic {
        uuid: 0x2B18,
        name: "Voltage",
        id: "org.bluetooth.characteristic.voltage",
        unit: Some("V"),
        width: 2,
        signed: false,
        resolution: VOLTAGE,
        range: 0.0 => 1022.0,
        special: [0xFFFF => NotKnown],
    }
}

group_characteristic! {
    /// Voltage Specification (0x2B19)
    VoltageSpecificationCharacteristic => ValueSpecification {
        uuid: 0x2B19,
        name: "Voltage Specification",
        id: "org.bluetooth.characteristic.voltage_specification",
        unit: Some("V"),
        resolution: VOLTAGE,
    }
}

group_characteristic! {
    /// Voltage Statistics (0x2B1A)
    VoltageStatisticsCharacteristic => ValueStatistics {
        uuid: 0x2B1A,
        name: "Voltage Statistics",
        id: "org.bluetooth.characteristic.voltage_statistics",
        unit: Some("V"),
        resolution: VOLTAGE,
    }
}

scaled_characteristic! {
    /// Volume Flow (0x2B1B)
    VolumeFlowCharacteristic {
        uuid: 0x2B1B,
        name: "Volume Flow",
        id: "org.bluetooth.characteristic.volume_flow",
        unit: Some("L/s"),
        width: 2,
        signed: false,
        resolution: Resolution::decimal(-3),
        range: 0.0 => 65.534,
        special: [0xFFFF => NotKnown],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristic::SpecialValueKind;

    #[test]
    fn test_voltage() {
        let ctx = ParseContext::default();
        // 3.3 V at 1/64 V resolution is 211.2, nearest raw 211
        assert_eq!(
            VoltageCharacteristic::decode(&[0xD3, 0x00], &ctx).unwrap(),
            Decoded::Value(3.296_875)
        );
        assert_eq!(VoltageCharacteristic::encode(&3.3).unwrap(), [0xD3, 0x00]);
        assert_eq!(
            VoltageCharacteristic::decode(&[0xFF, 0xFF], &ctx)
                .unwrap()
                .special()
                .map(|s| s.kind),
            Some(SpecialValueKind::NotKnown)
        );
    }

    #[test]
    fn test_electric_current_statistics() {
        let ctx = ParseContext::default();
        let bytes = [
            0xF4, 0x01, 0x0A, 0x00, 0xFF, 0xFF, 0xE8, 0x03, 0x40,
        ];
        let stats = ElectricCurrentStatisticsCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(stats.average, Some(5.0));
        assert_eq!(stats.standard_deviation, Some(0.1));
        assert_eq!(stats.minimum, None);
        assert_eq!(stats.maximum, Some(10.0));
        assert_eq!(stats.sensing_duration, TimeExponential::Seconds(1.0));
        assert_eq!(
            ElectricCurrentStatisticsCharacteristic::encode(&stats).unwrap(),
            bytes
        );

        let raw = ElectricCurrentStatisticsCharacteristic::decode(&bytes, &ctx.with_validation(false))
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(raw.minimum, Some(655.35));
    }

    #[test]
    fn test_current_range_order() {
        let range = ValueRange {
            minimum: Some(2.0),
            maximum: Some(1.0),
        };
        assert!(ElectricCurrentRangeCharacteristic::encode(&range).is_err());
    }

    #[test]
    fn test_average_voltage() {
        let ctx = ParseContext::default();
        let average = AverageVoltageCharacteristic::decode(&[0x80, 0x00, 0xFF], &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(average.value, Some(2.0));
        assert_eq!(average.sensing_duration, TimeExponential::Unknown);
    }

    #[test]
    fn test_boolean() {
        let ctx = ParseContext::default();
        assert_eq!(
            BooleanCharacteristic::decode(&[0x01], &ctx).unwrap(),
            Decoded::Value(true)
        );
        assert!(BooleanCharacteristic::decode(&[0x02], &ctx).is_err());
        assert_eq!(
            BooleanCharacteristic::decode(&[0x02], &ctx.with_validation(false)).unwrap(),
            Decoded::Value(true)
        );
    }

    #[test]
    fn test_date_utc() {
        let ctx = ParseContext::default();
        // 19723 days after the epoch
        let date = DateUtcCharacteristic::decode(&[0x0B, 0x4D, 0x00], &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(date.to_date_time(), DateTime::new(2024, 1, 1, 0, 0, 0));
        assert!(
            DateUtcCharacteristic::decode(&[0, 0, 0], &ctx)
                .unwrap()
                .is_special()
        );
    }

    #[test]
    fn test_fixed_string() {
        let ctx = ParseContext::default();
        assert_eq!(
            FixedString8Characteristic::encode(&"lamp".into()).unwrap(),
            b"lamp\0\0\0\0"
        );
        assert_eq!(
            FixedString8Characteristic::decode(b"lamp\0\0\0\0", &ctx).unwrap(),
            Decoded::Value("lamp".into())
        );
        assert!(FixedString8Characteristic::decode(b"lamp", &ctx).is_err());
    }

    #[test]
    fn test_gtin_and_chromaticity() {
        let ctx = ParseContext::default();
        let gtin = [0x15, 0xCD, 0x5B, 0x07, 0x00, 0x00];
        assert_eq!(
            GlobalTradeItemNumberCharacteristic::decode(&gtin, &ctx).unwrap(),
            Decoded::Value(123_456_789)
        );
        let xy = ChromaticityCoordinatesCharacteristic::decode(&[0x00, 0x80, 0x00, 0x40], &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(xy, Chromaticity { x: 0.5, y: 0.25 });
    }

    #[test]
    fn test_percentage_8() {
        let ctx = ParseContext::default();
        assert_eq!(
            Percentage8Characteristic::decode(&[0x91], &ctx).unwrap(),
            Decoded::Value(72.5)
        );
        assert!(Percentage8Characteristic::decode(&[0xC9], &ctx).is_err());
    }
}
