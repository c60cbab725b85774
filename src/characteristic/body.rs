//! Weight Scale and Body Composition characteristics
//!
//! Measurements carry mass and height at a fixed wire resolution. The
//! matching feature characteristic advertises the resolution the scale
//! actually achieves; when it was decoded earlier for the same device the
//! measurement is annotated with it.

use super::{
    Characteristic, CharacteristicInfo, Decoded, LengthRule, ParseContext, SpecialValue,
    SpecialValueKind, ValueType,
};
use crate::codec::{ByteReader, ByteWriter, DateTime, Resolution};
use crate::error::CodecError;
use alloc::vec::Vec;

/// Unit system of a body measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeasurementSystem {
    /// Kilograms and metres
    #[default]
    Metric,
    /// Pounds and inches
    Imperial,
}

impl MeasurementSystem {
    const fn mass_resolution(self) -> Resolution {
        match self {
            Self::Metric => Resolution::scaled(5, -3),
            Self::Imperial => Resolution::decimal(-2),
        }
    }

    const fn height_resolution(self) -> Resolution {
        match self {
            Self::Metric => Resolution::decimal(-3),
            Self::Imperial => Resolution::decimal(-1),
        }
    }
}

const UNSUCCESSFUL: u16 = 0xFFFF;
const BMI_RESOLUTION: Resolution = Resolution::decimal(-1);
const PERCENT_RESOLUTION: Resolution = Resolution::decimal(-1);

fn mass_step(index: u32, system: MeasurementSystem) -> Option<f64> {
    let (kg, lb) = match index {
        1 => (0.5, 1.0),
        2 => (0.2, 0.5),
        3 => (0.1, 0.2),
        4 => (0.05, 0.1),
        5 => (0.02, 0.05),
        6 => (0.01, 0.02),
        7 => (0.005, 0.01),
        _ => return None,
    };
    Some(match system {
        MeasurementSystem::Metric => kg,
        MeasurementSystem::Imperial => lb,
    })
}

fn height_step(index: u32, system: MeasurementSystem) -> Option<f64> {
    let (m, inch) = match index {
        1 => (0.01, 1.0),
        2 => (0.005, 0.5),
        3 => (0.001, 0.1),
        _ => return None,
    };
    Some(match system {
        MeasurementSystem::Metric => m,
        MeasurementSystem::Imperial => inch,
    })
}

fn encode_scaled(
    writer: &mut ByteWriter,
    field: &'static str,
    resolution: Resolution,
    value: f64,
) -> Result<(), CodecError> {
    let raw = resolution.unapply(field, value)?;
    writer.write_u16(crate::codec::narrow(field, raw)?);
    Ok(())
}

fn mass_value(raw: u16, system: MeasurementSystem) -> f64 {
    system.mass_resolution().apply(i64::from(raw))
}

/// Resolution of a mass field in the given unit system; `None` when not specified
fn annotate(
    index: Option<u32>,
    system: MeasurementSystem,
    step: fn(u32, MeasurementSystem) -> Option<f64>,
) -> Option<f64> {
    index.and_then(|index| step(index, system))
}

bitfield_characteristic! {
    /// Weight Scale Feature (0x2A9E)
    WeightScaleFeatureCharacteristic =>
    /// Supported weight scale features and resolutions
    WeightScaleFeature {
        uuid: 0x2A9E,
        name: "Weight Scale Feature",
        id: "org.bluetooth.characteristic.weight_scale_feature",
        width: 4,
        bits: {
            /// Time stamp supported
            timestamp_supported = 0,
            /// Multiple users supported
            multiple_users_supported = 1,
            /// BMI supported
            bmi_supported = 2,
        },
    }
}

impl WeightScaleFeature {
    /// Weight resolution index, bits 3..=6
    #[must_use]
    pub const fn weight_resolution_index(&self) -> u32 {
        (self.bits >> 3) & 0x0F
    }

    /// Height resolution index, bits 7..=9
    #[must_use]
    pub const fn height_resolution_index(&self) -> u32 {
        (self.bits >> 7) & 0x07
    }

    /// Weight resolution in kg or lb, `None` when not specified
    #[must_use]
    pub fn weight_resolution(&self, system: MeasurementSystem) -> Option<f64> {
        mass_step(self.weight_resolution_index(), system)
    }

    /// Height resolution in m or in, `None` when not specified
    #[must_use]
    pub fn height_resolution(&self, system: MeasurementSystem) -> Option<f64> {
        height_step(self.height_resolution_index(), system)
    }
}

/// Weight Measurement value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeightMeasurement {
    /// Unit system of all fields
    pub system: MeasurementSystem,
    /// Weight in kg or lb
    pub weight: f64,
    /// When the measurement was taken
    pub timestamp: Option<DateTime>,
    /// User index
    pub user_id: Option<u8>,
    /// Body mass index
    pub bmi: Option<f64>,
    /// Height in m or in
    pub height: Option<f64>,
    /// Weight resolution announced by the Weight Scale Feature
    pub weight_resolution: Option<f64>,
    /// Height resolution announced by the Weight Scale Feature
    pub height_resolution: Option<f64>,
}

/// Weight Measurement (0x2A9D)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeightMeasurementCharacteristic;

impl WeightMeasurementCharacteristic {
    const FLAG_IMPERIAL: u8 = 0x01;
    const FLAG_TIMESTAMP: u8 = 0x02;
    const FLAG_USER: u8 = 0x04;
    const FLAG_BMI_HEIGHT: u8 = 0x08;
}

impl Characteristic for WeightMeasurementCharacteristic {
    type Value = WeightMeasurement;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A9D,
        "Weight Measurement",
        "org.bluetooth.characteristic.weight_measurement",
        Some("kg"),
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Between(3, 15);

    fn decode_value(
        data: &[u8],
        ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        let flags = reader.read_u8()?;
        let system = if flags & Self::FLAG_IMPERIAL != 0 {
            MeasurementSystem::Imperial
        } else {
            MeasurementSystem::Metric
        };
        let raw_weight = reader.read_u16()?;
        if raw_weight == UNSUCCESSFUL && ctx.validate {
            return Ok(Decoded::Special(SpecialValue::new(
                SpecialValueKind::MeasurementUnsuccessful,
                u32::from(UNSUCCESSFUL),
            )));
        }
        let timestamp = if flags & Self::FLAG_TIMESTAMP != 0 {
            Some(reader.read_date_time()?)
        } else {
            None
        };
        let user_id = if flags & Self::FLAG_USER != 0 {
            Some(reader.read_u8()?)
        } else {
            None
        };
        let (bmi, height) = if flags & Self::FLAG_BMI_HEIGHT != 0 {
            let bmi = BMI_RESOLUTION.apply(i64::from(reader.read_u16()?));
            let height = system.height_resolution().apply(i64::from(reader.read_u16()?));
            (Some(bmi), Some(height))
        } else {
            (None, None)
        };
        let feature = ctx.siblings.weight_scale_feature;
        Ok(Decoded::Value(WeightMeasurement {
            system,
            weight: mass_value(raw_weight, system),
            timestamp,
            user_id,
            bmi,
            height,
            weight_resolution: annotate(
                feature.map(|f| f.weight_resolution_index()),
                system,
                mass_step,
            ),
            height_resolution: annotate(
                feature.map(|f| f.height_resolution_index()),
                system,
                height_step,
            ),
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut flags = 0;
        if value.system == MeasurementSystem::Imperial {
            flags |= Self::FLAG_IMPERIAL;
        }
        if value.timestamp.is_some() {
            flags |= Self::FLAG_TIMESTAMP;
        }
        if value.user_id.is_some() {
            flags |= Self::FLAG_USER;
        }
        if value.bmi.is_some() || value.height.is_some() {
            flags |= Self::FLAG_BMI_HEIGHT;
        }

        let mut writer = ByteWriter::with_capacity(15);
        writer.write_u8(flags);
        encode_scaled(
            &mut writer,
            "weight",
            value.system.mass_resolution(),
            value.weight,
        )?;
        if let Some(timestamp) = &value.timestamp {
            writer.write_date_time(timestamp)?;
        }
        if let Some(user) = value.user_id {
            writer.write_u8(user);
        }
        if flags & Self::FLAG_BMI_HEIGHT != 0 {
            encode_scaled(&mut writer, "BMI", BMI_RESOLUTION, value.bmi.unwrap_or(0.0))?;
            encode_scaled(
                &mut writer,
                "height",
                value.system.height_resolution(),
                value.height.unwrap_or(0.0),
            )?;
        }
        Ok(writer.into_vec())
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        CodecError::check_range("weight", value.weight, 0.0, mass_value(0xFFFE, value.system))?;
        match &value.timestamp {
            Some(timestamp) => timestamp.validate(),
            None => Ok(()),
        }
    }

    fn encode_special(special: SpecialValue) -> Result<Vec<u8>, CodecError> {
        if special.kind == SpecialValueKind::MeasurementUnsuccessful {
            let [low, high] = UNSUCCESSFUL.to_le_bytes();
            Ok(alloc::vec![0x00, low, high])
        } else {
            Err(CodecError::Unsupported(Self::INFO.uuid))
        }
    }
}

bitfield_characteristic! {
    /// Body Composition Feature (0x2A9B)
    BodyCompositionFeatureCharacteristic =>
    /// Supported body composition fields and resolutions
    BodyCompositionFeature {
        uuid: 0x2A9B,
        name: "Body Composition Feature",
        id: "org.bluetooth.characteristic.body_composition_feature",
        width: 4,
        bits: {
            /// Time stamp supported
            timestamp_supported = 0,
            /// Multiple users supported
            multiple_users_supported = 1,
            /// Basal metabolism supported
            basal_metabolism_supported = 2,
            /// Muscle percentage supported
            muscle_percentage_supported = 3,
            /// Muscle mass supported
            muscle_mass_supported = 4,
            /// Fat free mass supported
            fat_free_mass_supported = 5,
            /// Soft lean mass supported
            soft_lean_mass_supported = 6,
            /// Body water mass supported
            body_water_mass_supported = 7,
            /// Impedance supported
            impedance_supported = 8,
            /// Weight supported
            weight_supported = 9,
            /// Height supported
            height_supported = 10,
        },
    }
}

impl BodyCompositionFeature {
    /// Mass resolution index, bits 11..=14
    #[must_use]
    pub const fn mass_resolution_index(&self) -> u32 {
        (self.bits >> 11) & 0x0F
    }

    /// Height resolution index, bits 15..=17
    #[must_use]
    pub const fn height_resolution_index(&self) -> u32 {
        (self.bits >> 15) & 0x07
    }

    /// Mass resolution in kg or lb, `None` when not specified
    #[must_use]
    pub fn mass_resolution(&self, system: MeasurementSystem) -> Option<f64> {
        mass_step(self.mass_resolution_index(), system)
    }

    /// Height resolution in m or in, `None` when not specified
    #[must_use]
    pub fn height_resolution(&self, system: MeasurementSystem) -> Option<f64> {
        height_step(self.height_resolution_index(), system)
    }
}

/// Body Composition Measurement value
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BodyCompositionMeasurement {
    /// Unit system of mass and height fields
    pub system: MeasurementSystem,
    /// Body fat percentage
    pub body_fat_percentage: f64,
    /// When the measurement was taken
    pub timestamp: Option<DateTime>,
    /// User index
    pub user_id: Option<u8>,
    /// Basal metabolism in kJ
    pub basal_metabolism: Option<u16>,
    /// Muscle percentage
    pub muscle_percentage: Option<f64>,
    /// Muscle mass in kg or lb
    pub muscle_mass: Option<f64>,
    /// Fat free mass in kg or lb
    pub fat_free_mass: Option<f64>,
    /// Soft lean mass in kg or lb
    pub soft_lean_mass: Option<f64>,
    /// Body water mass in kg or lb
    pub body_water_mass: Option<f64>,
    /// Impedance in ohms
    pub impedance: Option<f64>,
    /// Weight in kg or lb
    pub weight: Option<f64>,
    /// Height in m or in
    pub height: Option<f64>,
    /// More packets follow for this measurement
    pub multiple_packet: bool,
    /// Mass resolution announced by the Body Composition Feature
    pub mass_resolution: Option<f64>,
    /// Height resolution announced by the Body Composition Feature
    pub height_resolution: Option<f64>,
}

/// Body Composition Measurement (0x2A9C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BodyCompositionMeasurementCharacteristic;

impl BodyCompositionMeasurementCharacteristic {
    const FLAG_IMPERIAL: u16 = 1 << 0;
    const FLAG_TIMESTAMP: u16 = 1 << 1;
    const FLAG_USER: u16 = 1 << 2;
    const FLAG_BASAL_METABOLISM: u16 = 1 << 3;
    const FLAG_MUSCLE_PERCENTAGE: u16 = 1 << 4;
    const FLAG_MUSCLE_MASS: u16 = 1 << 5;
    const FLAG_FAT_FREE_MASS: u16 = 1 << 6;
    const FLAG_SOFT_LEAN_MASS: u16 = 1 << 7;
    const FLAG_BODY_WATER_MASS: u16 = 1 << 8;
    const FLAG_IMPEDANCE: u16 = 1 << 9;
    const FLAG_WEIGHT: u16 = 1 << 10;
    const FLAG_HEIGHT: u16 = 1 << 11;
    const FLAG_MULTIPLE_PACKET: u16 = 1 << 12;
}

impl Characteristic for BodyCompositionMeasurementCharacteristic {
    type Value = BodyCompositionMeasurement;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A9C,
        "Body Composition Measurement",
        "org.bluetooth.characteristic.body_composition_measurement",
        Some("%"),
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Between(4, 30);

    fn decode_value(
        data: &[u8],
        ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        let flags = reader.read_u16()?;
        let system = if flags & Self::FLAG_IMPERIAL != 0 {
            MeasurementSystem::Imperial
        } else {
            MeasurementSystem::Metric
        };
        let raw_fat = reader.read_u16()?;
        if raw_fat == UNSUCCESSFUL && ctx.validate {
            return Ok(Decoded::Special(SpecialValue::new(
                SpecialValueKind::MeasurementUnsuccessful,
                u32::from(UNSUCCESSFUL),
            )));
        }

        let mut value = BodyCompositionMeasurement {
            system,
            body_fat_percentage: PERCENT_RESOLUTION.apply(i64::from(raw_fat)),
            multiple_packet: flags & Self::FLAG_MULTIPLE_PACKET != 0,
            ..BodyCompositionMeasurement::default()
        };
        if flags & Self::FLAG_TIMESTAMP != 0 {
            value.timestamp = Some(reader.read_date_time()?);
        }
        if flags & Self::FLAG_USER != 0 {
            value.user_id = Some(reader.read_u8()?);
        }
        if flags & Self::FLAG_BASAL_METABOLISM != 0 {
            value.basal_metabolism = Some(reader.read_u16()?);
        }
        if flags & Self::FLAG_MUSCLE_PERCENTAGE != 0 {
            value.muscle_percentage = Some(PERCENT_RESOLUTION.apply(i64::from(reader.read_u16()?)));
        }
        let mut mass = |present: u16| -> Result<Option<f64>, CodecError> {
            if flags & present != 0 {
                Ok(Some(mass_value(reader.read_u16()?, system)))
            } else {
                Ok(None)
            }
        };
        value.muscle_mass = mass(Self::FLAG_MUSCLE_MASS)?;
        value.fat_free_mass = mass(Self::FLAG_FAT_FREE_MASS)?;
        value.soft_lean_mass = mass(Self::FLAG_SOFT_LEAN_MASS)?;
        value.body_water_mass = mass(Self::FLAG_BODY_WATER_MASS)?;
        if flags & Self::FLAG_IMPEDANCE != 0 {
            value.impedance = Some(Resolution::decimal(-1).apply(i64::from(reader.read_u16()?)));
        }
        if flags & Self::FLAG_WEIGHT != 0 {
            value.weight = Some(mass_value(reader.read_u16()?, system));
        }
        if flags & Self::FLAG_HEIGHT != 0 {
            value.height = Some(system.height_resolution().apply(i64::from(reader.read_u16()?)));
        }

        let feature = ctx.siblings.body_composition_feature;
        value.mass_resolution = annotate(
            feature.map(|f| f.mass_resolution_index()),
            system,
            mass_step,
        );
        value.height_resolution = annotate(
            feature.map(|f| f.height_resolution_index()),
            system,
            height_step,
        );
        Ok(Decoded::Value(value))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let optional: [(u16, bool); 11] = [
            (Self::FLAG_TIMESTAMP, value.timestamp.is_some()),
            (Self::FLAG_USER, value.user_id.is_some()),
            (Self::FLAG_BASAL_METABOLISM, value.basal_metabolism.is_some()),
            (Self::FLAG_MUSCLE_PERCENTAGE, value.muscle_percentage.is_some()),
            (Self::FLAG_MUSCLE_MASS, value.muscle_mass.is_some()),
            (Self::FLAG_FAT_FREE_MASS, value.fat_free_mass.is_some()),
            (Self::FLAG_SOFT_LEAN_MASS, value.soft_lean_mass.is_some()),
            (Self::FLAG_BODY_WATER_MASS, value.body_water_mass.is_some()),
            (Self::FLAG_IMPEDANCE, value.impedance.is_some()),
            (Self::FLAG_WEIGHT, value.weight.is_some()),
            (Self::FLAG_HEIGHT, value.height.is_some()),
        ];
        let mut flags = optional
            .iter()
            .filter(|(_, present)| *present)
            .fold(0u16, |acc, (flag, _)| acc | *flag);
        if value.system == MeasurementSystem::Imperial {
            flags |= Self::FLAG_IMPERIAL;
        }
        if value.multiple_packet {
            flags |= Self::FLAG_MULTIPLE_PACKET;
        }

        let mass_resolution = value.system.mass_resolution();
        let mut writer = ByteWriter::with_capacity(30);
        writer.write_u16(flags);
        encode_scaled(
            &mut writer,
            "body fat percentage",
            PERCENT_RESOLUTION,
            value.body_fat_percentage,
        )?;
        if let Some(timestamp) = &value.timestamp {
            writer.write_date_time(timestamp)?;
        }
        if let Some(user) = value.user_id {
            writer.write_u8(user);
        }
        if let Some(basal) = value.basal_metabolism {
            writer.write_u16(basal);
        }
        if let Some(percentage) = value.muscle_percentage {
            encode_scaled(&mut writer, "muscle percentage", PERCENT_RESOLUTION, percentage)?;
        }
        for (field, mass) in [
            ("muscle mass", value.muscle_mass),
            ("fat free mass", value.fat_free_mass),
            ("soft lean mass", value.soft_lean_mass),
            ("body water mass", value.body_water_mass),
        ] {
            if let Some(mass) = mass {
                encode_scaled(&mut writer, field, mass_resolution, mass)?;
            }
        }
        if let Some(impedance) = value.impedance {
            encode_scaled(&mut writer, "impedance", Resolution::decimal(-1), impedance)?;
        }
        if let Some(weight) = value.weight {
            encode_scaled(&mut writer, "weight", mass_resolution, weight)?;
        }
        if let Some(height) = value.height {
            encode_scaled(&mut writer, "height", value.system.height_resolution(), height)?;
        }
        Ok(writer.into_vec())
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        CodecError::check_range("body fat percentage", value.body_fat_percentage, 0.0, 100.0)?;
        if let Some(percentage) = value.muscle_percentage {
            CodecError::check_range("muscle percentage", percentage, 0.0, 100.0)?;
        }
        match &value.timestamp {
            Some(timestamp) => timestamp.validate(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristic::SiblingValues;

    #[test]
    fn test_weight_measurement_metric() {
        let ctx = ParseContext::default();
        let bytes = [0x0C, 0x60, 0x36, 0x01, 0xFD, 0x00, 0xB8, 0x06];
        let measurement = WeightMeasurementCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(measurement.system, MeasurementSystem::Metric);
        assert_eq!(measurement.weight, 69.6);
        assert_eq!(measurement.user_id, Some(1));
        assert_eq!(measurement.bmi, Some(25.3));
        assert_eq!(measurement.height, Some(1.72));
        assert_eq!(measurement.weight_resolution, None);
        assert_eq!(
            WeightMeasurementCharacteristic::encode(&measurement).unwrap(),
            bytes
        );
    }

    #[test]
    fn test_weight_measurement_imperial() {
        let ctx = ParseContext::default();
        let measurement = WeightMeasurementCharacteristic::decode(&[0x01, 0x10, 0x27], &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(measurement.system, MeasurementSystem::Imperial);
        assert_eq!(measurement.weight, 100.0);
    }

    #[test]
    fn test_weight_unsuccessful() {
        let ctx = ParseContext::default();
        let special = WeightMeasurementCharacteristic::decode(&[0x00, 0xFF, 0xFF], &ctx)
            .unwrap()
            .special()
            .unwrap();
        assert_eq!(special.kind, SpecialValueKind::MeasurementUnsuccessful);
        assert_eq!(
            WeightMeasurementCharacteristic::encode_special(special).unwrap(),
            [0x00, 0xFF, 0xFF]
        );
    }

    #[test]
    fn test_weight_resolution_from_feature() {
        // timestamp + BMI, weight index 4 (0.05 kg), height index 2 (0.005 m)
        let feature = WeightScaleFeature::from_bits(0x0000_0125);
        assert!(feature.timestamp_supported());
        assert!(feature.bmi_supported());
        assert_eq!(feature.weight_resolution_index(), 4);
        assert_eq!(feature.height_resolution_index(), 2);

        let ctx = ParseContext::default().with_siblings(SiblingValues {
            weight_scale_feature: Some(feature),
            ..SiblingValues::default()
        });
        let measurement = WeightMeasurementCharacteristic::decode(&[0x00, 0x60, 0x36], &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(measurement.weight_resolution, Some(0.05));
        assert_eq!(measurement.height_resolution, Some(0.005));
    }

    #[test]
    fn test_body_composition() {
        let ctx = ParseContext::default();
        let bytes = [0x10, 0x04, 0xC8, 0x00, 0x2C, 0x01, 0x60, 0x36];
        let measurement = BodyCompositionMeasurementCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(measurement.body_fat_percentage, 20.0);
        assert_eq!(measurement.muscle_percentage, Some(30.0));
        assert_eq!(measurement.weight, Some(69.6));
        assert_eq!(measurement.muscle_mass, None);
        assert_eq!(
            BodyCompositionMeasurementCharacteristic::encode(&measurement).unwrap(),
            bytes
        );
    }

    #[test]
    fn test_body_composition_timestamp_checked() {
        // timestamp flag, 20 % fat, then month 13
        let bytes = [0x02, 0x00, 0xC8, 0x00, 0xE8, 0x07, 13, 1, 0, 0, 0];
        let err = BodyCompositionMeasurementCharacteristic::decode(&bytes, &ParseContext::default())
            .unwrap_err();
        assert!(matches!(err, CodecError::OutOfRange { field: "month", .. }));

        let mut valid = bytes;
        valid[6] = 12;
        let measurement =
            BodyCompositionMeasurementCharacteristic::decode(&valid, &ParseContext::default())
                .unwrap()
                .into_value()
                .unwrap();
        assert_eq!(
            BodyCompositionMeasurementCharacteristic::encode(&measurement).unwrap(),
            valid
        );
    }

    #[test]
    fn test_body_composition_feature_resolution() {
        let feature = BodyCompositionFeature::from_bits((7 << 11) | (3 << 15));
        assert_eq!(feature.mass_resolution(MeasurementSystem::Metric), Some(0.005));
        assert_eq!(feature.height_resolution(MeasurementSystem::Imperial), Some(0.1));

        let ctx = ParseContext::default().with_siblings(SiblingValues {
            body_composition_feature: Some(feature),
            ..SiblingValues::default()
        });
        let measurement =
            BodyCompositionMeasurementCharacteristic::decode(&[0x00, 0x00, 0xC8, 0x00], &ctx)
                .unwrap()
                .into_value()
                .unwrap();
        assert_eq!(measurement.mass_resolution, Some(0.005));
    }
}
