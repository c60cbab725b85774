//! Heart Rate, Health Thermometer and Blood Pressure characteristics
//!
//! These are flag-prefixed records: the first byte says which optional
//! fields follow, and the fields appear in a fixed order after it.

use super::{
    Characteristic, CharacteristicInfo, Decoded, LengthRule, ParseContext, ValueType,
};
use crate::codec::{ByteReader, ByteWriter, DateTime, MedFloat32, SFloat};
use crate::error::CodecError;
use alloc::vec::Vec;

/// Sensor contact state reported in Heart Rate Measurement flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorContact {
    /// Contact detection is not supported
    NotSupported,
    /// Supported, but no contact detected
    NotDetected,
    /// Supported and contact detected
    Detected,
}

/// Heart Rate Measurement value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartRateMeasurement {
    /// Beats per minute
    pub heart_rate: u16,
    /// Skin contact state
    pub sensor_contact: SensorContact,
    /// Accumulated energy in kilojoules
    pub energy_expended: Option<u16>,
    /// RR intervals in 1/1024 second units, oldest first
    pub rr_intervals: Vec<u16>,
}

impl HeartRateMeasurement {
    /// RR intervals in seconds
    pub fn rr_interval_seconds(&self) -> impl Iterator<Item = f64> + '_ {
        self.rr_intervals.iter().map(|&rr| f64::from(rr) / 1024.0)
    }
}

/// Heart Rate Measurement (0x2A37)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeartRateMeasurementCharacteristic;

impl HeartRateMeasurementCharacteristic {
    const FLAG_VALUE_U16: u8 = 0x01;
    const FLAG_CONTACT_SUPPORTED: u8 = 0x04;
    const FLAG_CONTACT_DETECTED: u8 = 0x02;
    const FLAG_ENERGY: u8 = 0x08;
    const FLAG_RR: u8 = 0x10;
}

impl Characteristic for HeartRateMeasurementCharacteristic {
    type Value = HeartRateMeasurement;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A37,
        "Heart Rate Measurement",
        "org.bluetooth.characteristic.heart_rate_measurement",
        Some("bpm"),
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::AtLeast(2);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        let flags = reader.read_u8()?;
        let heart_rate = if flags & Self::FLAG_VALUE_U16 != 0 {
            reader.read_u16()?
        } else {
            u16::from(reader.read_u8()?)
        };
        let sensor_contact = if flags & Self::FLAG_CONTACT_SUPPORTED == 0 {
            SensorContact::NotSupported
        } else if flags & Self::FLAG_CONTACT_DETECTED != 0 {
            SensorContact::Detected
        } else {
            SensorContact::NotDetected
        };
        let energy_expended = if flags & Self::FLAG_ENERGY != 0 {
            Some(reader.read_u16()?)
        } else {
            None
        };
        let mut rr_intervals = Vec::new();
        if flags & Self::FLAG_RR != 0 {
            while !reader.is_empty() {
                rr_intervals.push(reader.read_u16()?);
            }
        }
        Ok(Decoded::Value(HeartRateMeasurement {
            heart_rate,
            sensor_contact,
            energy_expended,
            rr_intervals,
        }))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut flags = match value.sensor_contact {
            SensorContact::NotSupported => 0,
            SensorContact::NotDetected => Self::FLAG_CONTACT_SUPPORTED,
            SensorContact::Detected => Self::FLAG_CONTACT_SUPPORTED | Self::FLAG_CONTACT_DETECTED,
        };
        if value.heart_rate > u16::from(u8::MAX) {
            flags |= Self::FLAG_VALUE_U16;
        }
        if value.energy_expended.is_some() {
            flags |= Self::FLAG_ENERGY;
        }
        if !value.rr_intervals.is_empty() {
            flags |= Self::FLAG_RR;
        }

        let mut writer = ByteWriter::with_capacity(4 + 2 * value.rr_intervals.len());
        writer.write_u8(flags);
        if flags & Self::FLAG_VALUE_U16 != 0 {
            writer.write_u16(value.heart_rate);
        } else {
            writer.write_u8(value.heart_rate as u8);
        }
        if let Some(energy) = value.energy_expended {
            writer.write_u16(energy);
        }
        for rr in &value.rr_intervals {
            writer.write_u16(*rr);
        }
        Ok(writer.into_vec())
    }
}

sig_enum! {
    /// Location of a body-worn sensor
    pub enum BodySensorLocation: u8 {
        /// Other
        Other = 0,
        /// Chest
        Chest = 1,
        /// Wrist
        Wrist = 2,
        /// Finger
        Finger = 3,
        /// Hand
        Hand = 4,
        /// Ear lobe
        EarLobe = 5,
        /// Foot
        Foot = 6,
    }
}

enum_characteristic! {
    /// Body Sensor Location (0x2A38)
    BodySensorLocationCharacteristic => BodySensorLocation {
        uuid: 0x2A38,
        name: "Body Sensor Location",
        id: "org.bluetooth.characteristic.body_sensor_location",
    }
}

sig_enum! {
    /// Heart Rate control point command
    pub enum HeartRateCommand: u8 {
        /// Reset the accumulated energy expended
        ResetEnergyExpended = 1,
    }
}

enum_characteristic! {
    /// Heart Rate Control Point (0x2A39)
    HeartRateControlPointCharacteristic => HeartRateCommand {
        uuid: 0x2A39,
        name: "Heart Rate Control Point",
        id: "org.bluetooth.characteristic.heart_rate_control_point",
    }
}

sig_enum! {
    /// Where a body temperature was taken
    pub enum TemperatureType: u8 {
        /// Armpit
        Armpit = 1,
        /// Body (general)
        Body = 2,
        /// Ear (usually earlobe)
        Ear = 3,
        /// Finger
        Finger = 4,
        /// Gastro-intestinal tract
        GastroIntestinalTract = 5,
        /// Mouth
        Mouth = 6,
        /// Rectum
        Rectum = 7,
        /// Toe
        Toe = 8,
        /// Tympanum (ear drum)
        Tympanum = 9,
    }
}

enum_characteristic! {
    /// Temperature Type (0x2A1D)
    TemperatureTypeCharacteristic => TemperatureType {
        uuid: 0x2A1D,
        name: "Temperature Type",
        id: "org.bluetooth.characteristic.temperature_type",
    }
}

/// Temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureUnit {
    /// Degrees Celsius
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

/// Temperature Measurement and Intermediate Temperature value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureMeasurement {
    /// Measured temperature
    pub temperature: f64,
    /// Scale of `temperature`
    pub unit: TemperatureUnit,
    /// When the measurement was taken
    pub timestamp: Option<DateTime>,
    /// Measurement site, from the payload or the Temperature Type characteristic
    pub temperature_type: Option<TemperatureType>,
}

const TEMPERATURE_FLAG_FAHRENHEIT: u8 = 0x01;
const TEMPERATURE_FLAG_TIMESTAMP: u8 = 0x02;
const TEMPERATURE_FLAG_TYPE: u8 = 0x04;

fn decode_temperature(
    data: &[u8],
    ctx: &ParseContext<'_>,
) -> Result<Decoded<TemperatureMeasurement>, CodecError> {
    let mut reader = ByteReader::new(data);
    let flags = reader.read_u8()?;
    let temperature = reader.read_float()?;
    if let Some(special) = temperature.special().filter(|_| ctx.validate) {
        return Ok(Decoded::Special(special));
    }
    let timestamp = if flags & TEMPERATURE_FLAG_TIMESTAMP != 0 {
        Some(reader.read_date_time()?)
    } else {
        None
    };
    let temperature_type = if flags & TEMPERATURE_FLAG_TYPE != 0 {
        Some(TemperatureType::from_raw(reader.read_u8()?))
    } else {
        ctx.siblings.temperature_type
    };
    Ok(Decoded::Value(TemperatureMeasurement {
        temperature: temperature.to_f64(),
        unit: if flags & TEMPERATURE_FLAG_FAHRENHEIT != 0 {
            TemperatureUnit::Fahrenheit
        } else {
            TemperatureUnit::Celsius
        },
        timestamp,
        temperature_type,
    }))
}

fn encode_temperature(value: &TemperatureMeasurement) -> Result<Vec<u8>, CodecError> {
    let mut flags = 0;
    if value.unit == TemperatureUnit::Fahrenheit {
        flags |= TEMPERATURE_FLAG_FAHRENHEIT;
    }
    if value.timestamp.is_some() {
        flags |= TEMPERATURE_FLAG_TIMESTAMP;
    }
    if value.temperature_type.is_some() {
        flags |= TEMPERATURE_FLAG_TYPE;
    }
    let mut writer = ByteWriter::with_capacity(13);
    writer
        .write_u8(flags)
        .write_float(MedFloat32::from_f64(value.temperature));
    if let Some(timestamp) = &value.timestamp {
        writer.write_date_time(timestamp)?;
    }
    if let Some(kind) = value.temperature_type {
        writer.write_u8(kind.to_raw());
    }
    Ok(writer.into_vec())
}

fn validate_temperature(value: &TemperatureMeasurement) -> Result<(), CodecError> {
    if let Some(timestamp) = &value.timestamp {
        timestamp.validate()?;
    }
    match value.temperature_type {
        Some(kind) => super::check_reserved(
            "temperature type",
            kind.is_reserved(),
            u32::from(kind.to_raw()),
        ),
        None => Ok(()),
    }
}

macro_rules! temperature_characteristic {
    ($(#[$meta:meta])* $name:ident, $uuid:literal, $display:literal, $id:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl Characteristic for $name {
            type Value = TemperatureMeasurement;
            const INFO: CharacteristicInfo =
                CharacteristicInfo::new($uuid, $display, $id, Some("°C"), ValueType::Struct);
            const LENGTH: LengthRule = LengthRule::Between(5, 13);

            fn decode_value(
                data: &[u8],
                ctx: &ParseContext<'_>,
            ) -> Result<Decoded<Self::Value>, CodecError> {
                decode_temperature(data, ctx)
            }

            fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
                encode_temperature(value)
            }

            fn validate(value: &Self::Value) -> Result<(), CodecError> {
                validate_temperature(value)
            }
        }
    };
}

temperature_characteristic!(
    /// Temperature Measurement (0x2A1C)
    TemperatureMeasurementCharacteristic,
    0x2A1C,
    "Temperature Measurement",
    "org.bluetooth.characteristic.temperature_measurement"
);
temperature_characteristic!(
    /// Intermediate Temperature (0x2A1E)
    IntermediateTemperatureCharacteristic,
    0x2A1E,
    "Intermediate Temperature",
    "org.bluetooth.characteristic.intermediate_temperature"
);

integer_characteristic! {
    /// Measurement Interval (0x2A21), 0 means no periodic measurement
    MeasurementIntervalCharacteristic {
        uuid: 0x2A21,
        name: "Measurement Interval",
        id: "org.bluetooth.characteristic.measurement_interval",
        unit: Some("s"),
        value: u16,
        width: 2,
        signed: false,
        range: 0.0 => 65535.0,
        special: [],
    }
}

/// Blood pressure scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressureUnit {
    /// Millimetres of mercury
    #[default]
    MmHg,
    /// Kilopascal
    KPa,
}

/// Measurement Status flags of a blood pressure record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BloodPressureStatus {
    /// Raw status bits
    pub bits: u16,
}

impl BloodPressureStatus {
    /// Body movement detected during measurement
    #[must_use]
    pub const fn body_movement(&self) -> bool {
        self.bits & 0x0001 != 0
    }

    /// Cuff too loose
    #[must_use]
    pub const fn cuff_too_loose(&self) -> bool {
        self.bits & 0x0002 != 0
    }

    /// Irregular pulse detected
    #[must_use]
    pub const fn irregular_pulse(&self) -> bool {
        self.bits & 0x0004 != 0
    }

    /// Pulse rate range: 0 within range, 1 exceeds upper limit, 2 below lower limit
    #[must_use]
    pub const fn pulse_rate_range(&self) -> u8 {
        ((self.bits >> 3) & 0x03) as u8
    }

    /// Improper measurement position
    #[must_use]
    pub const fn improper_position(&self) -> bool {
        self.bits & 0x0020 != 0
    }
}

/// Blood Pressure Measurement and Intermediate Cuff Pressure value
///
/// Intermediate Cuff Pressure carries the current cuff pressure in
/// `systolic`; its diastolic and mean fields are NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BloodPressureMeasurement {
    /// Scale of the pressure fields
    pub unit: PressureUnit,
    /// Systolic pressure
    pub systolic: f64,
    /// Diastolic pressure
    pub diastolic: f64,
    /// Mean arterial pressure
    pub mean_arterial_pressure: f64,
    /// When the measurement was taken
    pub timestamp: Option<DateTime>,
    /// Pulse rate in beats per minute
    pub pulse_rate: Option<f64>,
    /// User index
    pub user_id: Option<u8>,
    /// Measurement status
    pub status: Option<BloodPressureStatus>,
}

const BP_FLAG_KPA: u8 = 0x01;
const BP_FLAG_TIMESTAMP: u8 = 0x02;
const BP_FLAG_PULSE: u8 = 0x04;
const BP_FLAG_USER: u8 = 0x08;
const BP_FLAG_STATUS: u8 = 0x10;

fn decode_blood_pressure(data: &[u8]) -> Result<BloodPressureMeasurement, CodecError> {
    let mut reader = ByteReader::new(data);
    let flags = reader.read_u8()?;
    let systolic = reader.read_sfloat()?.to_f64();
    let diastolic = reader.read_sfloat()?.to_f64();
    let mean_arterial_pressure = reader.read_sfloat()?.to_f64();
    let timestamp = if flags & BP_FLAG_TIMESTAMP != 0 {
        Some(reader.read_date_time()?)
    } else {
        None
    };
    let pulse_rate = if flags & BP_FLAG_PULSE != 0 {
        Some(reader.read_sfloat()?.to_f64())
    } else {
        None
    };
    let user_id = if flags & BP_FLAG_USER != 0 {
        Some(reader.read_u8()?)
    } else {
        None
    };
    let status = if flags & BP_FLAG_STATUS != 0 {
        Some(BloodPressureStatus {
            bits: reader.read_u16()?,
        })
    } else {
        None
    };
    Ok(BloodPressureMeasurement {
        unit: if flags & BP_FLAG_KPA != 0 {
            PressureUnit::KPa
        } else {
            PressureUnit::MmHg
        },
        systolic,
        diastolic,
        mean_arterial_pressure,
        timestamp,
        pulse_rate,
        user_id,
        status,
    })
}

fn encode_blood_pressure(value: &BloodPressureMeasurement) -> Result<Vec<u8>, CodecError> {
    let mut flags = 0;
    if value.unit == PressureUnit::KPa {
        flags |= BP_FLAG_KPA;
    }
    if value.timestamp.is_some() {
        flags |= BP_FLAG_TIMESTAMP;
    }
    if value.pulse_rate.is_some() {
        flags |= BP_FLAG_PULSE;
    }
    if value.user_id.is_some() {
        flags |= BP_FLAG_USER;
    }
    if value.status.is_some() {
        flags |= BP_FLAG_STATUS;
    }
    let mut writer = ByteWriter::with_capacity(19);
    writer
        .write_u8(flags)
        .write_sfloat(SFloat::from_f64(value.systolic))
        .write_sfloat(SFloat::from_f64(value.diastolic))
        .write_sfloat(SFloat::from_f64(value.mean_arterial_pressure));
    if let Some(timestamp) = &value.timestamp {
        writer.write_date_time(timestamp)?;
    }
    if let Some(pulse) = value.pulse_rate {
        writer.write_sfloat(SFloat::from_f64(pulse));
    }
    if let Some(user) = value.user_id {
        writer.write_u8(user);
    }
    if let Some(status) = value.status {
        writer.write_u16(status.bits);
    }
    Ok(writer.into_vec())
}

macro_rules! blood_pressure_characteristic {
    ($(#[$meta:meta])* $name:ident, $uuid:literal, $display:literal, $id:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl Characteristic for $name {
            type Value = BloodPressureMeasurement;
            const INFO: CharacteristicInfo =
                CharacteristicInfo::new($uuid, $display, $id, Some("mmHg"), ValueType::Struct);
            const LENGTH: LengthRule = LengthRule::Between(7, 19);

            fn decode_value(
                data: &[u8],
                _ctx: &ParseContext<'_>,
            ) -> Result<Decoded<Self::Value>, CodecError> {
                decode_blood_pressure(data).map(Decoded::Value)
            }

            fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
                encode_blood_pressure(value)
            }

            fn validate(value: &Self::Value) -> Result<(), CodecError> {
                match &value.timestamp {
                    Some(timestamp) => timestamp.validate(),
                    None => Ok(()),
                }
            }
        }
    };
}

blood_pressure_characteristic!(
    /// Blood Pressure Measurement (0x2A35)
    BloodPressureMeasurementCharacteristic,
    0x2A35,
    "Blood Pressure Measurement",
    "org.bluetooth.characteristic.blood_pressure_measurement"
);
blood_pressure_characteristic!(
    /// Intermediate Cuff Pressure (0x2A36)
    IntermediateCuffPressureCharacteristic,
    0x2A36,
    "Intermediate Cuff Pressure",
    "org.bluetooth.characteristic.intermediate_cuff_pressure"
);

bitfield_characteristic! {
    /// Blood Pressure Feature (0x2A49)
    BloodPressureFeatureCharacteristic =>
    /// Supported blood pressure features
    BloodPressureFeature {
        uuid: 0x2A49,
        name: "Blood Pressure Feature",
        id: "org.bluetooth.characteristic.blood_pressure_feature",
        width: 2,
        bits: {
            /// Body movement detection
            body_movement_detection = 0,
            /// Cuff fit detection
            cuff_fit_detection = 1,
            /// Irregular pulse detection
            irregular_pulse_detection = 2,
            /// Pulse rate range detection
            pulse_rate_range_detection = 3,
            /// Measurement position detection
            measurement_position_detection = 4,
            /// Multiple bonds
            multiple_bond = 5,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristic::{SiblingValues, SpecialValueKind};

    #[test]
    fn test_heart_rate_u8() {
        let ctx = ParseContext::default();
        let hr = HeartRateMeasurementCharacteristic::decode(&[0x06, 0x48], &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(hr.heart_rate, 72);
        assert_eq!(hr.sensor_contact, SensorContact::Detected);
        assert_eq!(hr.energy_expended, None);
        assert!(hr.rr_intervals.is_empty());
        assert_eq!(
            HeartRateMeasurementCharacteristic::encode(&hr).unwrap(),
            [0x06, 0x48]
        );
    }

    #[test]
    fn test_heart_rate_full() {
        let ctx = ParseContext::default();
        let bytes = [0x19, 0x2C, 0x01, 0x10, 0x00, 0x00, 0x04, 0x00, 0x02];
        let hr = HeartRateMeasurementCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(hr.heart_rate, 300);
        assert_eq!(hr.sensor_contact, SensorContact::NotSupported);
        assert_eq!(hr.energy_expended, Some(16));
        assert_eq!(hr.rr_intervals, [1024, 512]);
        assert_eq!(hr.rr_interval_seconds().collect::<Vec<_>>(), [1.0, 0.5]);
        assert_eq!(
            HeartRateMeasurementCharacteristic::encode(&hr).unwrap(),
            bytes
        );
    }

    #[test]
    fn test_heart_rate_truncated() {
        let ctx = ParseContext::default();
        assert!(matches!(
            HeartRateMeasurementCharacteristic::decode(&[0x01, 0x48], &ctx),
            Err(CodecError::InsufficientData {
                required: 3,
                actual: 2
            })
        ));
        assert!(HeartRateMeasurementCharacteristic::decode(&[0x10, 0x48, 0x00], &ctx).is_err());
    }

    #[test]
    fn test_temperature_measurement() {
        let ctx = ParseContext::default();
        let bytes = [0x06, 0x6D, 0x01, 0x00, 0xFF, 0xE8, 0x07, 0x03, 0x0F, 0x0E, 0x1E, 0x2D, 0x02];
        let measurement = TemperatureMeasurementCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(measurement.temperature, 36.5);
        assert_eq!(measurement.unit, TemperatureUnit::Celsius);
        assert_eq!(
            measurement.timestamp,
            Some(DateTime::new(2024, 3, 15, 14, 30, 45))
        );
        assert_eq!(measurement.temperature_type, Some(TemperatureType::Body));
        assert_eq!(
            TemperatureMeasurementCharacteristic::encode(&measurement).unwrap(),
            bytes
        );
    }

    #[test]
    fn test_temperature_type_from_sibling() {
        let siblings = SiblingValues {
            temperature_type: Some(TemperatureType::Ear),
            ..SiblingValues::default()
        };
        let ctx = ParseContext::default().with_siblings(siblings);
        let measurement = IntermediateTemperatureCharacteristic::decode(
            &[0x01, 0x6D, 0x01, 0x00, 0xFF],
            &ctx,
        )
        .unwrap()
        .into_value()
        .unwrap();
        assert_eq!(measurement.unit, TemperatureUnit::Fahrenheit);
        assert_eq!(measurement.temperature_type, Some(TemperatureType::Ear));
    }

    #[test]
    fn test_temperature_nan() {
        let ctx = ParseContext::default();
        let special = TemperatureMeasurementCharacteristic::decode(
            &[0x00, 0xFF, 0xFF, 0x7F, 0x00],
            &ctx,
        )
        .unwrap()
        .special()
        .unwrap();
        assert_eq!(special.kind, SpecialValueKind::NaN);
    }

    #[test]
    fn test_blood_pressure() {
        let ctx = ParseContext::default();
        let bytes = [
            0x1E, 0x78, 0x00, 0x50, 0x00, 0x5D, 0x00, 0xE8, 0x07, 0x03, 0x0F, 0x0E, 0x1E, 0x2D,
            0x48, 0x00, 0x01, 0x04, 0x00,
        ];
        let bp = BloodPressureMeasurementCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(bp.unit, PressureUnit::MmHg);
        assert_eq!(bp.systolic, 120.0);
        assert_eq!(bp.diastolic, 80.0);
        assert_eq!(bp.mean_arterial_pressure, 93.0);
        assert_eq!(bp.pulse_rate, Some(72.0));
        assert_eq!(bp.user_id, Some(1));
        assert!(bp.status.unwrap().irregular_pulse());
        assert_eq!(
            BloodPressureMeasurementCharacteristic::encode(&bp).unwrap(),
            bytes
        );
    }

    #[test]
    fn test_intermediate_cuff_pressure() {
        let ctx = ParseContext::default();
        let bytes = [0x01, 0x10, 0x00, 0xFF, 0x07, 0xFF, 0x07];
        let cuff = IntermediateCuffPressureCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(cuff.unit, PressureUnit::KPa);
        assert_eq!(cuff.systolic, 16.0);
        assert!(cuff.diastolic.is_nan());
        assert_eq!(
            IntermediateCuffPressureCharacteristic::encode(&cuff).unwrap(),
            bytes
        );
    }

    #[test]
    fn test_sensor_locations() {
        let ctx = ParseContext::default();
        assert_eq!(
            BodySensorLocationCharacteristic::decode(&[0x01], &ctx).unwrap(),
            Decoded::Value(BodySensorLocation::Chest)
        );
        assert!(TemperatureTypeCharacteristic::decode(&[0x00], &ctx).is_err());
    }
}
