//! Pulse Oximeter characteristics
//!
//! Saturation, pulse rate and perfusion index are IEEE-11073 `SFLOAT`s and
//! are kept as [`SFloat`] so that per-field sentinels survive decoding.

use super::{
    Characteristic, CharacteristicInfo, Decoded, LengthRule, ParseContext, ValueType,
};
use crate::codec::{ByteReader, ByteWriter, DateTime, SFloat};
use crate::error::CodecError;
use alloc::vec::Vec;

/// PLX measurement status flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeasurementStatus {
    /// Raw flag bits
    pub bits: u16,
}

impl MeasurementStatus {
    /// Measurement is ongoing
    #[must_use]
    pub const fn measurement_ongoing(&self) -> bool {
        self.bits & (1 << 5) != 0
    }

    /// Early estimated data
    #[must_use]
    pub const fn early_estimate(&self) -> bool {
        self.bits & (1 << 6) != 0
    }

    /// Validated data
    #[must_use]
    pub const fn validated(&self) -> bool {
        self.bits & (1 << 7) != 0
    }

    /// Fully qualified data
    #[must_use]
    pub const fn fully_qualified(&self) -> bool {
        self.bits & (1 << 8) != 0
    }

    /// Data comes from measurement storage
    #[must_use]
    pub const fn from_storage(&self) -> bool {
        self.bits & (1 << 9) != 0
    }

    /// Data is for demonstration
    #[must_use]
    pub const fn demonstration(&self) -> bool {
        self.bits & (1 << 10) != 0
    }

    /// Data is for testing
    #[must_use]
    pub const fn testing(&self) -> bool {
        self.bits & (1 << 11) != 0
    }

    /// Calibration is ongoing
    #[must_use]
    pub const fn calibration_ongoing(&self) -> bool {
        self.bits & (1 << 12) != 0
    }

    /// Measurement unavailable
    #[must_use]
    pub const fn unavailable(&self) -> bool {
        self.bits & (1 << 13) != 0
    }

    /// Questionable measurement detected
    #[must_use]
    pub const fn questionable(&self) -> bool {
        self.bits & (1 << 14) != 0
    }

    /// Invalid measurement detected
    #[must_use]
    pub const fn invalid(&self) -> bool {
        self.bits & (1 << 15) != 0
    }
}

/// PLX device and sensor status flags, 24 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceSensorStatus {
    /// Raw flag bits
    pub bits: u32,
}

impl DeviceSensorStatus {
    /// Equipment malfunction detected
    #[must_use]
    pub const fn equipment_malfunction(&self) -> bool {
        self.bits & (1 << 1) != 0
    }

    /// Inadequate signal detected
    #[must_use]
    pub const fn inadequate_signal(&self) -> bool {
        self.bits & (1 << 3) != 0
    }

    /// Low perfusion detected
    #[must_use]
    pub const fn low_perfusion(&self) -> bool {
        self.bits & (1 << 5) != 0
    }

    /// Sensor is not connected
    #[must_use]
    pub const fn sensor_unconnected(&self) -> bool {
        self.bits & (1 << 11) != 0
    }

    /// Sensor displaced
    #[must_use]
    pub const fn sensor_displaced(&self) -> bool {
        self.bits & (1 << 13) != 0
    }

    /// Sensor disconnected
    #[must_use]
    pub const fn sensor_disconnected(&self) -> bool {
        self.bits & (1 << 15) != 0
    }
}

/// Oxygen saturation and pulse rate pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpO2PulseRate {
    /// SpO2 in percent
    pub spo2: SFloat,
    /// Pulse rate in beats per minute
    pub pulse_rate: SFloat,
}

impl SpO2PulseRate {
    fn read(reader: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            spo2: reader.read_sfloat()?,
            pulse_rate: reader.read_sfloat()?,
        })
    }

    fn write(&self, writer: &mut ByteWriter) {
        writer.write_sfloat(self.spo2).write_sfloat(self.pulse_rate);
    }

    fn validate(&self) -> Result<(), CodecError> {
        if self.spo2.is_value() {
            CodecError::check_range("SpO2", self.spo2.to_f64(), 0.0, 100.0)?;
        }
        Ok(())
    }
}

/// PLX Spot-check Measurement value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlxSpotCheckMeasurement {
    /// SpO2 and pulse rate
    pub reading: SpO2PulseRate,
    /// When the measurement was taken
    pub timestamp: Option<DateTime>,
    /// Measurement status
    pub measurement_status: Option<MeasurementStatus>,
    /// Device and sensor status
    pub device_status: Option<DeviceSensorStatus>,
    /// Pulse amplitude index in percent
    pub pulse_amplitude_index: Option<SFloat>,
    /// The device clock is not set
    pub clock_not_set: bool,
}

/// PLX Spot-check Measurement (0x2A5E)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlxSpotCheckMeasurementCharacteristic;

impl PlxSpotCheckMeasurementCharacteristic {
    const FLAG_TIMESTAMP: u8 = 0x01;
    const FLAG_MEASUREMENT_STATUS: u8 = 0x02;
    const FLAG_DEVICE_STATUS: u8 = 0x04;
    const FLAG_PAI: u8 = 0x08;
    const FLAG_CLOCK_NOT_SET: u8 = 0x10;
}

impl Characteristic for PlxSpotCheckMeasurementCharacteristic {
    type Value = PlxSpotCheckMeasurement;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A5E,
        "PLX Spot-Check Measurement",
        "org.bluetooth.characteristic.plx_spot_check_measurement",
        Some("%"),
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Between(5, 19);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        let flags = reader.read_u8()?;
        let reading = SpO2PulseRate::read(&mut reader)?;
        let timestamp = if flags & Self::FLAG_TIMESTAMP != 0 {
            Some(reader.read_date_time()?)
        } else {
            None
        };
        let measurement_status = if flags & Self::FLAG_MEASUREMENT_STATUS != 0 {
            Some(MeasurementStatus {
                bits: reader.read_u16()?,
            })
        } else {
            None
        };
        let device_status = if flags & Self::FLAG_DEVICE_STATUS != 0 {
            Some(DeviceSensorStatus {
                bits: reader.read_u24()?,
            })
        } else {
            None
        };
        let pulse_amplitude_index = if flags & Self::FLAG_PAI != 0 {
            Some(reader.read_sfloat()?)
        } else {
            None
        };
        Ok(Decoded::Value(PlxSpotCheckMeasurement {
            reading,
            timestamp,
            measurement_status,
            device_status,
            pulse_amplitude_index,
            clock_not_set: flags & Self::FLAG_CLOCK_NOT_SET != 0,
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut flags = 0;
        if value.timestamp.is_some() {
            flags |= Self::FLAG_TIMESTAMP;
        }
        if value.measurement_status.is_some() {
            flags |= Self::FLAG_MEASUREMENT_STATUS;
        }
        if value.device_status.is_some() {
            flags |= Self::FLAG_DEVICE_STATUS;
        }
        if value.pulse_amplitude_index.is_some() {
            flags |= Self::FLAG_PAI;
        }
        if value.clock_not_set {
            flags |= Self::FLAG_CLOCK_NOT_SET;
        }

        let mut writer = ByteWriter::with_capacity(19);
        writer.write_u8(flags);
        value.reading.write(&mut writer);
        if let Some(timestamp) = &value.timestamp {
            writer.write_date_time(timestamp)?;
        }
        if let Some(status) = value.measurement_status {
            writer.write_u16(status.bits);
        }
        if let Some(status) = value.device_status {
            writer.write_u24(status.bits)?;
        }
        if let Some(pai) = value.pulse_amplitude_index {
            writer.write_sfloat(pai);
        }
        Ok(writer.into_vec())
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        value.reading.validate()?;
        match &value.timestamp {
            Some(timestamp) => timestamp.validate(),
            None => Ok(()),
        }
    }
}

/// PLX Continuous Measurement value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlxContinuousMeasurement {
    /// Normal averaging
    pub normal: SpO2PulseRate,
    /// Fast averaging
    pub fast: Option<SpO2PulseRate>,
    /// Slow averaging
    pub slow: Option<SpO2PulseRate>,
    /// Measurement status
    pub measurement_status: Option<MeasurementStatus>,
    /// Device and sensor status
    pub device_status: Option<DeviceSensorStatus>,
    /// Pulse amplitude index in percent
    pub pulse_amplitude_index: Option<SFloat>,
}

/// PLX Continuous Measurement (0x2A5F)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlxContinuousMeasurementCharacteristic;

impl PlxContinuousMeasurementCharacteristic {
    const FLAG_FAST: u8 = 0x01;
    const FLAG_SLOW: u8 = 0x02;
    const FLAG_MEASUREMENT_STATUS: u8 = 0x04;
    const FLAG_DEVICE_STATUS: u8 = 0x08;
    const FLAG_PAI: u8 = 0x10;
}

impl Characteristic for PlxContinuousMeasurementCharacteristic {
    type Value = PlxContinuousMeasurement;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A5F,
        "PLX Continuous Measurement",
        "org.bluetooth.characteristic.plx_continuous_measurement",
        Some("%"),
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Between(5, 20);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        let flags = reader.read_u8()?;
        let normal = SpO2PulseRate::read(&mut reader)?;
        let fast = if flags & Self::FLAG_FAST != 0 {
            Some(SpO2PulseRate::read(&mut reader)?)
        } else {
            None
        };
        let slow = if flags & Self::FLAG_SLOW != 0 {
            Some(SpO2PulseRate::read(&mut reader)?)
        } else {
            None
        };
        let measurement_status = if flags & Self::FLAG_MEASUREMENT_STATUS != 0 {
            Some(MeasurementStatus {
                bits: reader.read_u16()?,
            })
        } else {
            None
        };
        let device_status = if flags & Self::FLAG_DEVICE_STATUS != 0 {
            Some(DeviceSensorStatus {
                bits: reader.read_u24()?,
            })
        } else {
            None
        };
        let pulse_amplitude_index = if flags & Self::FLAG_PAI != 0 {
            Some(reader.read_sfloat()?)
        } else {
            None
        };
        Ok(Decoded::Value(PlxContinuousMeasurement {
            normal,
            fast,
            slow,
            measurement_status,
            device_status,
            pulse_amplitude_index,
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut flags = 0;
        if value.fast.is_some() {
            flags |= Self::FLAG_FAST;
        }
        if value.slow.is_some() {
            flags |= Self::FLAG_SLOW;
        }
        if value.measurement_status.is_some() {
            flags |= Self::FLAG_MEASUREMENT_STATUS;
        }
        if value.device_status.is_some() {
            flags |= Self::FLAG_DEVICE_STATUS;
        }
        if value.pulse_amplitude_index.is_some() {
            flags |= Self::FLAG_PAI;
        }

        let mut writer = ByteWriter::with_capacity(20);
        writer.write_u8(flags);
        value.normal.write(&mut writer);
        for reading in [&value.fast, &value.slow].into_iter().flatten() {
            reading.write(&mut writer);
        }
        if let Some(status) = value.measurement_status {
            writer.write_u16(status.bits);
        }
        if let Some(status) = value.device_status {
            writer.write_u24(status.bits)?;
        }
        if let Some(pai) = value.pulse_amplitude_index {
            writer.write_sfloat(pai);
        }
        Ok(writer.into_vec())
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        value.normal.validate()?;
        for reading in [&value.fast, &value.slow].into_iter().flatten() {
            reading.validate()?;
        }
        Ok(())
    }
}

/// PLX Features value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlxFeatures {
    /// Supported features flags
    pub supported: u16,
    /// Measurement status bits the sensor can report
    pub measurement_status_support: Option<MeasurementStatus>,
    /// Device and sensor status bits the sensor can report
    pub device_status_support: Option<DeviceSensorStatus>,
}

impl PlxFeatures {
    const MEASUREMENT_STATUS_PRESENT: u16 = 1 << 0;
    const DEVICE_STATUS_PRESENT: u16 = 1 << 1;

    /// Spot-check measurements can be stored
    #[must_use]
    pub const fn measurement_storage_supported(&self) -> bool {
        self.supported & (1 << 2) != 0
    }

    /// Spot-check measurements carry a timestamp
    #[must_use]
    pub const fn timestamp_supported(&self) -> bool {
        self.supported & (1 << 3) != 0
    }

    /// SpO2PR-Fast metric supported
    #[must_use]
    pub const fn fast_supported(&self) -> bool {
        self.supported & (1 << 4) != 0
    }

    /// SpO2PR-Slow metric supported
    #[must_use]
    pub const fn slow_supported(&self) -> bool {
        self.supported & (1 << 5) != 0
    }

    /// Pulse amplitude index supported
    #[must_use]
    pub const fn pulse_amplitude_index_supported(&self) -> bool {
        self.supported & (1 << 6) != 0
    }

    /// Multiple bonds supported
    #[must_use]
    pub const fn multiple_bonds_supported(&self) -> bool {
        self.supported & (1 << 7) != 0
    }
}

/// PLX Features (0x2A60)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlxFeaturesCharacteristic;

impl Characteristic for PlxFeaturesCharacteristic {
    type Value = PlxFeatures;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A60,
        "PLX Features",
        "org.bluetooth.characteristic.plx_features",
        None,
        ValueType::BitField,
    );
    const LENGTH: LengthRule = LengthRule::Between(2, 7);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        let supported = reader.read_u16()?;
        let measurement_status_support = if supported & PlxFeatures::MEASUREMENT_STATUS_PRESENT != 0 {
            Some(MeasurementStatus {
                bits: reader.read_u16()?,
            })
        } else {
            None
        };
        let device_status_support = if supported & PlxFeatures::DEVICE_STATUS_PRESENT != 0 {
            Some(DeviceSensorStatus {
                bits: reader.read_u24()?,
            })
        } else {
            None
        };
        Ok(Decoded::Value(PlxFeatures {
            supported,
            measurement_status_support,
            device_status_support,
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut supported = value.supported
            & !(PlxFeatures::MEASUREMENT_STATUS_PRESENT | PlxFeatures::DEVICE_STATUS_PRESENT);
        if value.measurement_status_support.is_some() {
            supported |= PlxFeatures::MEASUREMENT_STATUS_PRESENT;
        }
        if value.device_status_support.is_some() {
            supported |= PlxFeatures::DEVICE_STATUS_PRESENT;
        }

        let mut writer = ByteWriter::with_capacity(7);
        writer.write_u16(supported);
        if let Some(status) = value.measurement_status_support {
            writer.write_u16(status.bits);
        }
        if let Some(status) = value.device_status_support {
            writer.write_u24(status.bits)?;
        }
        Ok(writer.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_check() {
        let ctx = ParseContext::default();
        // SpO2 98, PR 72, measurement status with validated data
        let bytes = [0x02, 0x62, 0x00, 0x48, 0x00, 0x80, 0x00];
        let spot = PlxSpotCheckMeasurementCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(spot.reading.spo2.to_f64(), 98.0);
        assert_eq!(spot.reading.pulse_rate.to_f64(), 72.0);
        assert!(spot.measurement_status.unwrap().validated());
        assert!(spot.timestamp.is_none());
        assert!(!spot.clock_not_set);
        assert_eq!(
            PlxSpotCheckMeasurementCharacteristic::encode(&spot).unwrap(),
            bytes
        );
    }

    #[test]
    fn test_spot_check_nan_survives() {
        let ctx = ParseContext::default();
        let spot = PlxSpotCheckMeasurementCharacteristic::decode(
            &[0x00, 0xFF, 0x07, 0x48, 0x00],
            &ctx,
        )
        .unwrap()
        .into_value()
        .unwrap();
        assert_eq!(spot.reading.spo2, SFloat::NaN);
    }

    #[test]
    fn test_spot_check_range() {
        let ctx = ParseContext::default();
        // SpO2 120
        let bytes = [0x00, 0x78, 0x00, 0x48, 0x00];
        assert!(matches!(
            PlxSpotCheckMeasurementCharacteristic::decode(&bytes, &ctx),
            Err(CodecError::OutOfRange { field: "SpO2", .. })
        ));
        assert!(
            PlxSpotCheckMeasurementCharacteristic::decode(&bytes, &ctx.with_validation(false))
                .is_ok()
        );
    }

    #[test]
    fn test_continuous() {
        let ctx = ParseContext::default();
        let bytes = [
            0x11, 0x61, 0x00, 0x46, 0x00, 0x60, 0x00, 0x47, 0x00, 0x2C, 0xF0,
        ];
        let continuous = PlxContinuousMeasurementCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(continuous.normal.spo2.to_f64(), 97.0);
        assert_eq!(continuous.fast.unwrap().spo2.to_f64(), 96.0);
        assert!(continuous.slow.is_none());
        assert_eq!(continuous.pulse_amplitude_index.unwrap().to_f64(), 4.4);
        assert_eq!(
            PlxContinuousMeasurementCharacteristic::encode(&continuous).unwrap(),
            bytes
        );
    }

    #[test]
    fn test_features() {
        let ctx = ParseContext::default();
        let bytes = [0x1B, 0x00, 0xE0, 0x00, 0x08, 0x08, 0x00];
        let features = PlxFeaturesCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert!(features.timestamp_supported());
        assert!(features.fast_supported());
        assert!(!features.slow_supported());
        assert!(features.measurement_status_support.unwrap().validated());
        assert!(features.device_status_support.unwrap().inadequate_signal());
        assert_eq!(PlxFeaturesCharacteristic::encode(&features).unwrap(), bytes);

        assert!(PlxFeaturesCharacteristic::decode(&[0x01, 0x00], &ctx).is_err());
    }
}
