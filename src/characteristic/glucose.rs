//! Glucose Service characteristics

use super::{
    Characteristic, CharacteristicInfo, Decoded, LengthRule, ParseContext, ValueType,
};
use crate::codec::{ByteReader, ByteWriter, DateTime, SFloat};
use crate::error::CodecError;
use alloc::format;
use alloc::vec::Vec;

sig_enum! {
    /// Glucose sample type
    pub enum GlucoseSampleType: u8 {
        /// Capillary whole blood
        CapillaryWholeBlood = 1,
        /// Capillary plasma
        CapillaryPlasma = 2,
        /// Venous whole blood
        VenousWholeBlood = 3,
        /// Venous plasma
        VenousPlasma = 4,
        /// Arterial whole blood
        ArterialWholeBlood = 5,
        /// Arterial plasma
        ArterialPlasma = 6,
        /// Undetermined whole blood
        UndeterminedWholeBlood = 7,
        /// Undetermined plasma
        UndeterminedPlasma = 8,
        /// Interstitial fluid
        InterstitialFluid = 9,
        /// Control solution
        ControlSolution = 10,
    }
}

sig_enum! {
    /// Glucose sample location
    pub enum SampleLocation: u8 {
        /// Finger
        Finger = 1,
        /// Alternate site test
        AlternateSiteTest = 2,
        /// Earlobe
        Earlobe = 3,
        /// Control solution
        ControlSolution = 4,
        /// Sample location value not available
        NotAvailable = 15,
    }
}

/// Unit of a glucose concentration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConcentrationUnit {
    /// Kilograms per litre
    #[default]
    KilogramPerLitre,
    /// Moles per litre
    MolePerLitre,
}

/// Glucose concentration with its sample description
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlucoseConcentration {
    /// Concentration in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: ConcentrationUnit,
    /// Sample type
    pub sample_type: GlucoseSampleType,
    /// Sample location
    pub sample_location: SampleLocation,
}

/// Glucose Measurement value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlucoseMeasurement {
    /// Record sequence number
    pub sequence_number: u16,
    /// Base time of the record
    pub base_time: DateTime,
    /// Offset from the base time in minutes
    pub time_offset: Option<i16>,
    /// Concentration, type and location
    pub concentration: Option<GlucoseConcentration>,
    /// Sensor status annunciation bits
    pub sensor_status: Option<u16>,
    /// A Glucose Measurement Context record with the same sequence number follows
    pub context_information_follows: bool,
}

/// Glucose Measurement (0x2A18)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlucoseMeasurementCharacteristic;

impl GlucoseMeasurementCharacteristic {
    const FLAG_TIME_OFFSET: u8 = 0x01;
    const FLAG_CONCENTRATION: u8 = 0x02;
    const FLAG_MOL_PER_LITRE: u8 = 0x04;
    const FLAG_STATUS: u8 = 0x08;
    const FLAG_CONTEXT_FOLLOWS: u8 = 0x10;
}

impl Characteristic for GlucoseMeasurementCharacteristic {
    type Value = GlucoseMeasurement;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A18,
        "Glucose Measurement",
        "org.bluetooth.characteristic.glucose_measurement",
        Some("kg/L"),
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Between(10, 17);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        let flags = reader.read_u8()?;
        let sequence_number = reader.read_u16()?;
        let base_time = reader.read_date_time()?;
        let time_offset = if flags & Self::FLAG_TIME_OFFSET != 0 {
            Some(reader.read_i16()?)
        } else {
            None
        };
        let concentration = if flags & Self::FLAG_CONCENTRATION != 0 {
            let value = reader.read_sfloat()?.to_f64();
            let type_location = reader.read_u8()?;
            Some(GlucoseConcentration {
                value,
                unit: if flags & Self::FLAG_MOL_PER_LITRE != 0 {
                    ConcentrationUnit::MolePerLitre
                } else {
                    ConcentrationUnit::KilogramPerLitre
                },
                sample_type: GlucoseSampleType::from_raw(type_location & 0x0F),
                sample_location: SampleLocation::from_raw(type_location >> 4),
            })
        } else {
            None
        };
        let sensor_status = if flags & Self::FLAG_STATUS != 0 {
            Some(reader.read_u16()?)
        } else {
            None
        };
        Ok(Decoded::Value(GlucoseMeasurement {
            sequence_number,
            base_time,
            time_offset,
            concentration,
            sensor_status,
            context_information_follows: flags & Self::FLAG_CONTEXT_FOLLOWS != 0,
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut flags = 0;
        if value.time_offset.is_some() {
            flags |= Self::FLAG_TIME_OFFSET;
        }
        if let Some(concentration) = &value.concentration {
            flags |= Self::FLAG_CONCENTRATION;
            if concentration.unit == ConcentrationUnit::MolePerLitre {
                flags |= Self::FLAG_MOL_PER_LITRE;
            }
        }
        if value.sensor_status.is_some() {
            flags |= Self::FLAG_STATUS;
        }
        if value.context_information_follows {
            flags |= Self::FLAG_CONTEXT_FOLLOWS;
        }

        let mut writer = ByteWriter::with_capacity(17);
        writer.write_u8(flags).write_u16(value.sequence_number);
        writer.write_date_time(&value.base_time)?;
        if let Some(offset) = value.time_offset {
            writer.write_i16(offset);
        }
        if let Some(concentration) = &value.concentration {
            writer
                .write_sfloat(SFloat::from_f64(concentration.value))
                .write_u8(
                    (concentration.sample_type.to_raw() & 0x0F)
                        | (concentration.sample_location.to_raw() << 4),
                );
        }
        if let Some(status) = value.sensor_status {
            writer.write_u16(status);
        }
        Ok(writer.into_vec())
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        value.base_time.validate()?;
        if let Some(concentration) = &value.concentration {
            super::check_reserved(
                "sample type",
                concentration.sample_type.is_reserved(),
                u32::from(concentration.sample_type.to_raw()),
            )?;
            super::check_reserved(
                "sample location",
                concentration.sample_location.is_reserved(),
                u32::from(concentration.sample_location.to_raw()),
            )?;
        }
        Ok(())
    }
}

sig_enum! {
    /// Carbohydrate intake
    pub enum CarbohydrateId: u8 {
        /// Breakfast
        Breakfast = 1,
        /// Lunch
        Lunch = 2,
        /// Dinner
        Dinner = 3,
        /// Snack
        Snack = 4,
        /// Drink
        Drink = 5,
        /// Supper
        Supper = 6,
        /// Brunch
        Brunch = 7,
    }
}

sig_enum! {
    /// Meal relation of a measurement
    pub enum Meal: u8 {
        /// Before a meal
        Preprandial = 1,
        /// After a meal
        Postprandial = 2,
        /// Fasting
        Fasting = 3,
        /// Casual, snacks or drinks
        Casual = 4,
        /// Bedtime
        Bedtime = 5,
    }
}

sig_enum! {
    /// Who performed the test
    pub enum Tester: u8 {
        /// Self
        SelfTest = 1,
        /// Health care professional
        HealthCareProfessional = 2,
        /// Lab test
        LabTest = 3,
        /// Tester value not available
        NotAvailable = 15,
    }
}

sig_enum! {
    /// Health condition of the patient
    pub enum Health: u8 {
        /// Minor health issues
        MinorIssues = 1,
        /// Major health issues
        MajorIssues = 2,
        /// During menses
        DuringMenses = 3,
        /// Under stress
        UnderStress = 4,
        /// No health issues
        NoIssues = 5,
        /// Health value not available
        NotAvailable = 15,
    }
}

sig_enum! {
    /// Medication kind
    pub enum MedicationId: u8 {
        /// Rapid acting insulin
        RapidActingInsulin = 1,
        /// Short acting insulin
        ShortActingInsulin = 2,
        /// Intermediate acting insulin
        IntermediateActingInsulin = 3,
        /// Long acting insulin
        LongActingInsulin = 4,
        /// Pre-mixed insulin
        PreMixedInsulin = 5,
    }
}

/// Carbohydrate intake record
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Carbohydrate {
    /// Kind of intake
    pub id: CarbohydrateId,
    /// Amount in kilograms
    pub amount: f64,
}

/// Exercise record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Exercise {
    /// Duration in seconds, 65535 means overrun
    pub duration: u16,
    /// Intensity in percent
    pub intensity: u8,
}

/// Medication record
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Medication {
    /// Kind of medication
    pub id: MedicationId,
    /// Amount, in kilograms or litres per `in_litres`
    pub amount: f64,
    /// Whether `amount` is in litres rather than kilograms
    pub in_litres: bool,
}

/// Glucose Measurement Context value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlucoseMeasurementContext {
    /// Sequence number of the measurement this context belongs to
    pub sequence_number: u16,
    /// Extended flags, reserved for future use
    pub extended_flags: Option<u8>,
    /// Carbohydrate intake
    pub carbohydrate: Option<Carbohydrate>,
    /// Meal relation
    pub meal: Option<Meal>,
    /// Tester and health condition
    pub tester_health: Option<(Tester, Health)>,
    /// Exercise
    pub exercise: Option<Exercise>,
    /// Medication
    pub medication: Option<Medication>,
    /// HbA1c in percent
    pub hba1c: Option<f64>,
}

/// Glucose Measurement Context (0x2A34)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlucoseMeasurementContextCharacteristic;

impl GlucoseMeasurementContextCharacteristic {
    const FLAG_CARBOHYDRATE: u8 = 0x01;
    const FLAG_MEAL: u8 = 0x02;
    const FLAG_TESTER_HEALTH: u8 = 0x04;
    const FLAG_EXERCISE: u8 = 0x08;
    const FLAG_MEDICATION: u8 = 0x10;
    const FLAG_MEDICATION_LITRES: u8 = 0x20;
    const FLAG_HBA1C: u8 = 0x40;
    const FLAG_EXTENDED: u8 = 0x80;
}

impl Characteristic for GlucoseMeasurementContextCharacteristic {
    type Value = GlucoseMeasurementContext;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A34,
        "Glucose Measurement Context",
        "org.bluetooth.characteristic.glucose_measurement_context",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Between(3, 17);

    fn decode_value(
        data: &[u8],
        ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        let flags = reader.read_u8()?;
        let sequence_number = reader.read_u16()?;
        if let Some(expected) = ctx.siblings.glucose_sequence_number.filter(|_| ctx.validate) {
            if expected != sequence_number {
                return Err(CodecError::InconsistentContext(format!(
                    "context sequence number {sequence_number} does not match measurement {expected}"
                )));
            }
        }
        let extended_flags = if flags & Self::FLAG_EXTENDED != 0 {
            Some(reader.read_u8()?)
        } else {
            None
        };
        let carbohydrate = if flags & Self::FLAG_CARBOHYDRATE != 0 {
            Some(Carbohydrate {
                id: CarbohydrateId::from_raw(reader.read_u8()?),
                amount: reader.read_sfloat()?.to_f64(),
            })
        } else {
            None
        };
        let meal = if flags & Self::FLAG_MEAL != 0 {
            Some(Meal::from_raw(reader.read_u8()?))
        } else {
            None
        };
        let tester_health = if flags & Self::FLAG_TESTER_HEALTH != 0 {
            let raw = reader.read_u8()?;
            Some((Tester::from_raw(raw & 0x0F), Health::from_raw(raw >> 4)))
        } else {
            None
        };
        let exercise = if flags & Self::FLAG_EXERCISE != 0 {
            Some(Exercise {
                duration: reader.read_u16()?,
                intensity: reader.read_u8()?,
            })
        } else {
            None
        };
        let medication = if flags & Self::FLAG_MEDICATION != 0 {
            Some(Medication {
                id: MedicationId::from_raw(reader.read_u8()?),
                amount: reader.read_sfloat()?.to_f64(),
                in_litres: flags & Self::FLAG_MEDICATION_LITRES != 0,
            })
        } else {
            None
        };
        let hba1c = if flags & Self::FLAG_HBA1C != 0 {
            Some(reader.read_sfloat()?.to_f64())
        } else {
            None
        };
        Ok(Decoded::Value(GlucoseMeasurementContext {
            sequence_number,
            extended_flags,
            carbohydrate,
            meal,
            tester_health,
            exercise,
            medication,
            hba1c,
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut flags = 0;
        if value.carbohydrate.is_some() {
            flags |= Self::FLAG_CARBOHYDRATE;
        }
        if value.meal.is_some() {
            flags |= Self::FLAG_MEAL;
        }
        if value.tester_health.is_some() {
            flags |= Self::FLAG_TESTER_HEALTH;
        }
        if value.exercise.is_some() {
            flags |= Self::FLAG_EXERCISE;
        }
        if let Some(medication) = &value.medication {
            flags |= Self::FLAG_MEDICATION;
            if medication.in_litres {
                flags |= Self::FLAG_MEDICATION_LITRES;
            }
        }
        if value.hba1c.is_some() {
            flags |= Self::FLAG_HBA1C;
        }
        if value.extended_flags.is_some() {
            flags |= Self::FLAG_EXTENDED;
        }

        let mut writer = ByteWriter::with_capacity(17);
        writer.write_u8(flags).write_u16(value.sequence_number);
        if let Some(extended) = value.extended_flags {
            writer.write_u8(extended);
        }
        if let Some(carbohydrate) = &value.carbohydrate {
            writer
                .write_u8(carbohydrate.id.to_raw())
                .write_sfloat(SFloat::from_f64(carbohydrate.amount));
        }
        if let Some(meal) = value.meal {
            writer.write_u8(meal.to_raw());
        }
        if let Some((tester, health)) = value.tester_health {
            writer.write_u8((tester.to_raw() & 0x0F) | (health.to_raw() << 4));
        }
        if let Some(exercise) = &value.exercise {
            writer
                .write_u16(exercise.duration)
                .write_u8(exercise.intensity);
        }
        if let Some(medication) = &value.medication {
            writer
                .write_u8(medication.id.to_raw())
                .write_sfloat(SFloat::from_f64(medication.amount));
        }
        if let Some(hba1c) = value.hba1c {
            writer.write_sfloat(SFloat::from_f64(hba1c));
        }
        Ok(writer.into_vec())
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        if let Some(exercise) = &value.exercise {
            CodecError::check_range(
                "exercise intensity",
                f64::from(exercise.intensity),
                0.0,
                100.0,
            )?;
        }
        if let Some(meal) = value.meal {
            super::check_reserved("meal", meal.is_reserved(), u32::from(meal.to_raw()))?;
        }
        Ok(())
    }
}

bitfield_characteristic! {
    /// Glucose Feature (0x2A51)
    GlucoseFeatureCharacteristic =>
    /// Supported glucose meter features
    GlucoseFeature {
        uuid: 0x2A51,
        name: "Glucose Feature",
        id: "org.bluetooth.characteristic.glucose_feature",
        width: 2,
        bits: {
            /// Low battery detection during measurement
            low_battery_detection = 0,
            /// Sensor malfunction detection
            sensor_malfunction_detection = 1,
            /// Sensor sample size
            sensor_sample_size = 2,
            /// Sensor strip insertion error detection
            sensor_strip_insertion_error_detection = 3,
            /// Sensor strip type error detection
            sensor_strip_type_error_detection = 4,
            /// Sensor result high-low detection
            sensor_result_high_low_detection = 5,
            /// Sensor temperature high-low detection
            sensor_temperature_high_low_detection = 6,
            /// Sensor read interrupt detection
            sensor_read_interrupt_detection = 7,
            /// General device fault
            general_device_fault = 8,
            /// Time fault
            time_fault = 9,
            /// Multiple bonds
            multiple_bond = 10,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristic::SiblingValues;

    const MEASUREMENT: [u8; 17] = [
        0x1B, 0x07, 0x00, 0xE8, 0x07, 0x03, 0x0F, 0x0E, 0x1E, 0x2D, 0xF6, 0xFF, 0x09, 0xC0,
        0x11, 0x01, 0x00,
    ];

    #[test]
    fn test_glucose_measurement() {
        let ctx = ParseContext::default();
        let measurement = GlucoseMeasurementCharacteristic::decode(&MEASUREMENT, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(measurement.sequence_number, 7);
        assert_eq!(measurement.base_time, DateTime::new(2024, 3, 15, 14, 30, 45));
        assert_eq!(measurement.time_offset, Some(-10));
        let concentration = measurement.concentration.unwrap();
        assert!((concentration.value - 0.00090).abs() < 1e-12);
        assert_eq!(concentration.unit, ConcentrationUnit::KilogramPerLitre);
        assert_eq!(concentration.sample_type, GlucoseSampleType::CapillaryWholeBlood);
        assert_eq!(concentration.sample_location, SampleLocation::Finger);
        assert_eq!(measurement.sensor_status, Some(1));
        assert!(measurement.context_information_follows);
        assert_eq!(
            GlucoseMeasurementCharacteristic::encode(&measurement).unwrap(),
            MEASUREMENT
        );
    }

    #[test]
    fn test_glucose_measurement_minimal() {
        let ctx = ParseContext::default();
        let bytes = [0x00, 0x01, 0x00, 0xE8, 0x07, 0x03, 0x0F, 0x0E, 0x1E, 0x2D];
        let measurement = GlucoseMeasurementCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(measurement.concentration, None);
        assert!(GlucoseMeasurementCharacteristic::decode(&bytes[..9], &ctx).is_err());
    }

    #[test]
    fn test_context_sequence_consistency() {
        let bytes = [0x02, 0x07, 0x00, 0x01];
        let matching = ParseContext::default().with_siblings(SiblingValues {
            glucose_sequence_number: Some(7),
            ..SiblingValues::default()
        });
        let context = GlucoseMeasurementContextCharacteristic::decode(&bytes, &matching)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(context.meal, Some(Meal::Preprandial));
        assert_eq!(
            GlucoseMeasurementContextCharacteristic::encode(&context).unwrap(),
            bytes
        );

        let mismatched = ParseContext::default().with_siblings(SiblingValues {
            glucose_sequence_number: Some(8),
            ..SiblingValues::default()
        });
        assert!(matches!(
            GlucoseMeasurementContextCharacteristic::decode(&bytes, &mismatched),
            Err(CodecError::InconsistentContext(_))
        ));
        assert!(
            GlucoseMeasurementContextCharacteristic::decode(
                &bytes,
                &mismatched.with_validation(false)
            )
            .is_ok()
        );
    }

    #[test]
    fn test_context_all_fields() {
        let ctx = ParseContext::default();
        let bytes = [
            0x5F, 0x02, 0x00, 0x01, 0x05, 0xE0, 0x03, 0x51, 0x2C, 0x01, 0x32, 0x01, 0x01, 0xE0,
            0x41, 0xF0,
        ];
        let context = GlucoseMeasurementContextCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        let carbohydrate = context.carbohydrate.unwrap();
        assert_eq!(carbohydrate.id, CarbohydrateId::Breakfast);
        assert!((carbohydrate.amount - 0.05).abs() < 1e-12);
        assert_eq!(context.meal, Some(Meal::Fasting));
        assert_eq!(
            context.tester_health,
            Some((Tester::SelfTest, Health::NoIssues))
        );
        assert_eq!(
            context.exercise,
            Some(Exercise {
                duration: 300,
                intensity: 50
            })
        );
        let medication = context.medication.unwrap();
        assert_eq!(medication.id, MedicationId::RapidActingInsulin);
        assert!(!medication.in_litres);
        assert_eq!(context.hba1c, Some(6.5));
        assert_eq!(
            GlucoseMeasurementContextCharacteristic::encode(&context).unwrap(),
            bytes
        );
    }

    #[test]
    fn test_glucose_feature() {
        let ctx = ParseContext::default();
        let feature = GlucoseFeatureCharacteristic::decode(&[0x03, 0x04], &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert!(feature.low_battery_detection());
        assert!(feature.sensor_malfunction_detection());
        assert!(feature.multiple_bond());
        assert!(!feature.time_fault());
    }
}
