//! Environmental Sensing descriptors

use super::{Descriptor, DescriptorInfo};
use crate::characteristic::{LengthRule, ValueType, check_reserved};
use crate::codec::{ByteReader, ByteWriter, decode_utf8};
use crate::error::CodecError;
use alloc::string::String;
use alloc::vec::Vec;

sig_enum! {
    /// How multiple ES Trigger Setting descriptors combine
    pub enum TriggerLogic: u8 {
        /// All triggers must fire
        BooleanAnd = 0,
        /// Any trigger fires
        BooleanOr = 1,
    }
}

/// Environmental Sensing Configuration (0x290B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EsConfigurationDescriptor;

impl Descriptor for EsConfigurationDescriptor {
    type Value = TriggerLogic;
    const INFO: DescriptorInfo = DescriptorInfo::new(
        0x290B,
        "Environmental Sensing Configuration",
        "org.bluetooth.descriptor.es_configuration",
        None,
        ValueType::Enum,
    );
    const LENGTH: LengthRule = LengthRule::Exact(1);

    fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError> {
        Ok(TriggerLogic::from_raw(data[0]))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Ok(alloc::vec![value.to_raw()])
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        check_reserved(
            "Trigger Logic",
            value.is_reserved(),
            u32::from(value.to_raw()),
        )
    }
}

sig_enum! {
    /// Sampling function applied to the measured values
    pub enum SamplingFunction: u8 {
        /// Unspecified
        Unspecified = 0,
        /// Instantaneous
        Instantaneous = 1,
        /// Arithmetic mean
        ArithmeticMean = 2,
        /// Root mean square
        Rms = 3,
        /// Maximum
        Maximum = 4,
        /// Minimum
        Minimum = 5,
        /// Accumulated
        Accumulated = 6,
        /// Count
        Count = 7,
    }
}

sig_enum! {
    /// Where the sensor is applied
    pub enum MeasurementApplication: u8 {
        /// Unspecified
        Unspecified = 0x00,
        /// Air
        Air = 0x01,
        /// Water
        Water = 0x02,
        /// Barometric
        Barometric = 0x03,
        /// Soil
        Soil = 0x04,
        /// Infrared
        Infrared = 0x05,
        /// Map database
        MapDatabase = 0x06,
        /// Barometric elevation source
        BarometricElevationSource = 0x07,
        /// GPS only elevation source
        GpsOnlyElevationSource = 0x08,
        /// GPS and map database elevation source
        GpsAndMapDatabaseElevationSource = 0x09,
        /// Vertical datum elevation source
        VerticalDatumElevationSource = 0x0A,
        /// Onshore
        Onshore = 0x0B,
        /// Onboard vessel or vehicle
        OnboardVesselOrVehicle = 0x0C,
        /// Front
        Front = 0x0D,
        /// Back or rear
        BackRear = 0x0E,
        /// Upper
        Upper = 0x0F,
        /// Lower
        Lower = 0x10,
        /// Primary
        Primary = 0x11,
        /// Secondary
        Secondary = 0x12,
        /// Outdoor
        Outdoor = 0x13,
        /// Indoor
        Indoor = 0x14,
        /// Top
        Top = 0x15,
        /// Bottom
        Bottom = 0x16,
        /// Main
        Main = 0x17,
        /// Backup
        Backup = 0x18,
        /// Auxiliary
        Auxiliary = 0x19,
        /// Supplementary
        Supplementary = 0x1A,
        /// Inside
        Inside = 0x1B,
        /// Outside
        Outside = 0x1C,
        /// Left
        Left = 0x1D,
        /// Right
        Right = 0x1E,
        /// Internal
        Internal = 0x1F,
        /// External
        External = 0x20,
        /// Solar
        Solar = 0x21,
    }
}

/// Environmental Sensing Measurement value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EsMeasurement {
    /// Reserved flags, zero on current devices
    pub flags: u16,
    /// Sampling function
    pub sampling_function: SamplingFunction,
    /// Period the sampling function covers in seconds, `0` if not in use
    pub measurement_period: u32,
    /// Seconds between internal updates, `0` if not in use
    pub update_interval: u32,
    /// Sensor application
    pub application: MeasurementApplication,
    /// Uncertainty in units of 0.5 %, `0xFF` for not available
    pub uncertainty: u8,
}

impl EsMeasurement {
    const UNCERTAINTY_UNAVAILABLE: u8 = 0xFF;

    /// Measurement uncertainty in percent
    #[must_use]
    pub fn uncertainty_percent(&self) -> Option<f64> {
        (self.uncertainty != Self::UNCERTAINTY_UNAVAILABLE)
            .then(|| f64::from(self.uncertainty) * 0.5)
    }
}

/// Environmental Sensing Measurement (0x290C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EsMeasurementDescriptor;

impl Descriptor for EsMeasurementDescriptor {
    type Value = EsMeasurement;
    const INFO: DescriptorInfo = DescriptorInfo::new(
        0x290C,
        "Environmental Sensing Measurement",
        "org.bluetooth.descriptor.es_measurement",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Exact(11);

    fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError> {
        let mut reader = ByteReader::new(data);
        Ok(EsMeasurement {
            flags: reader.read_u16()?,
            sampling_function: SamplingFunction::from_raw(reader.read_u8()?),
            measurement_period: reader.read_u24()?,
            update_interval: reader.read_u24()?,
            application: MeasurementApplication::from_raw(reader.read_u8()?),
            uncertainty: reader.read_u8()?,
        })
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut writer = ByteWriter::with_capacity(11);
        writer
            .write_u16(value.flags)
            .write_u8(value.sampling_function.to_raw())
            .write_u24(value.measurement_period)?
            .write_u24(value.update_interval)?
            .write_u8(value.application.to_raw())
            .write_u8(value.uncertainty);
        Ok(writer.into_vec())
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        check_reserved(
            "Sampling Function",
            value.sampling_function.is_reserved(),
            u32::from(value.sampling_function.to_raw()),
        )?;
        check_reserved(
            "Application",
            value.application.is_reserved(),
            u32::from(value.application.to_raw()),
        )?;
        if value.uncertainty != EsMeasurement::UNCERTAINTY_UNAVAILABLE {
            CodecError::check_range(
                "Measurement Uncertainty",
                f64::from(value.uncertainty),
                0.0,
                200.0,
            )?;
        }
        Ok(())
    }
}

/// Measurement Description (0x2912)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeasurementDescriptionDescriptor;

impl Descriptor for MeasurementDescriptionDescriptor {
    type Value = String;
    const INFO: DescriptorInfo = DescriptorInfo::new(
        0x2912,
        "Measurement Description",
        "org.bluetooth.descriptor.measurement_description",
        None,
        ValueType::String,
    );
    const LENGTH: LengthRule = LengthRule::Any;

    fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError> {
        decode_utf8(data)
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Ok(value.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_es_configuration() {
        assert_eq!(
            EsConfigurationDescriptor::decode(&[0x01]).unwrap(),
            TriggerLogic::BooleanOr
        );
        assert!(EsConfigurationDescriptor::decode(&[0x02]).is_err());
    }

    #[test]
    fn test_es_measurement() {
        let bytes = [
            0x00, 0x00, // flags
            0x02, // arithmetic mean
            0x3C, 0x00, 0x00, // 60 s period
            0x0A, 0x00, 0x00, // 10 s update interval
            0x13, // outdoor
            0x04, // 2 %
        ];
        let measurement = EsMeasurementDescriptor::decode(&bytes).unwrap();
        assert_eq!(measurement.sampling_function, SamplingFunction::ArithmeticMean);
        assert_eq!(measurement.measurement_period, 60);
        assert_eq!(measurement.update_interval, 10);
        assert_eq!(measurement.application, MeasurementApplication::Outdoor);
        assert_eq!(measurement.uncertainty_percent(), Some(2.0));
        assert_eq!(EsMeasurementDescriptor::encode(&measurement).unwrap(), bytes);

        let mut unavailable = bytes;
        unavailable[10] = 0xFF;
        let measurement = EsMeasurementDescriptor::decode(&unavailable).unwrap();
        assert_eq!(measurement.uncertainty_percent(), None);

        let mut too_uncertain = bytes;
        too_uncertain[10] = 0xC9;
        assert!(EsMeasurementDescriptor::decode(&too_uncertain).is_err());
    }

    #[test]
    fn test_measurement_description() {
        assert_eq!(
            MeasurementDescriptionDescriptor::decode(b"Greenhouse air").unwrap(),
            "Greenhouse air"
        );
    }
}
