//! Generic Access and Generic Attribute characteristics

use super::{
    Characteristic, CharacteristicInfo, Decoded, LengthRule, ParseContext, ValueType,
};
use crate::codec::{ByteReader, ByteWriter};
use crate::error::CodecError;
use alloc::vec;
use alloc::vec::Vec;

utf8_characteristic! {
    /// Device Name (0x2A00)
    DeviceNameCharacteristic {
        uuid: 0x2A00,
        name: "Device Name",
        id: "org.bluetooth.characteristic.gap.device_name",
        length: LengthRule::Between(0, 248),
    }
}

/// GAP appearance: category in bits 6..=15, subcategory in bits 0..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Appearance(pub u16);

impl Appearance {
    /// Category number
    #[must_use]
    pub const fn category(self) -> u16 {
        self.0 >> 6
    }

    /// Subcategory number within the category
    #[must_use]
    pub const fn subcategory(self) -> u8 {
        (self.0 & 0x3F) as u8
    }

    /// Human readable category, if assigned
    #[must_use]
    pub fn category_name(self) -> Option<&'static str> {
        crate::metadata::appearance_category(self.category())
    }
}

/// Appearance (0x2A01)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppearanceCharacteristic;

impl Characteristic for AppearanceCharacteristic {
    type Value = Appearance;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A01,
        "Appearance",
        "org.bluetooth.characteristic.gap.appearance",
        None,
        ValueType::Int,
    );
    const LENGTH: LengthRule = LengthRule::Exact(2);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        Ok(Decoded::Value(Appearance(u16::from_le_bytes([
            data[0], data[1],
        ]))))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Ok(value.0.to_le_bytes().to_vec())
    }
}

/// Peripheral Preferred Connection Parameters value, in controller units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConnectionParameters {
    /// Minimum connection interval, 1.25 ms units
    pub min_interval: u16,
    /// Maximum connection interval, 1.25 ms units
    pub max_interval: u16,
    /// Peripheral latency in connection events
    pub peripheral_latency: u16,
    /// Supervision timeout, 10 ms units
    pub supervision_timeout: u16,
}

impl ConnectionParameters {
    /// Raw value meaning "no specific preference"
    pub const NO_PREFERENCE: u16 = 0xFFFF;

    /// Minimum connection interval in milliseconds
    #[must_use]
    pub fn min_interval_ms(&self) -> f64 {
        f64::from(self.min_interval) * 1.25
    }

    /// Maximum connection interval in milliseconds
    #[must_use]
    pub fn max_interval_ms(&self) -> f64 {
        f64::from(self.max_interval) * 1.25
    }

    /// Supervision timeout in milliseconds
    #[must_use]
    pub fn supervision_timeout_ms(&self) -> u32 {
        u32::from(self.supervision_timeout) * 10
    }
}

/// Peripheral Preferred Connection Parameters (0x2A04)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeripheralPreferredConnectionParametersCharacteristic;

impl Characteristic for PeripheralPreferredConnectionParametersCharacteristic {
    type Value = ConnectionParameters;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A04,
        "Peripheral Preferred Connection Parameters",
        "org.bluetooth.characteristic.gap.peripheral_preferred_connection_parameters",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Exact(8);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        Ok(Decoded::Value(ConnectionParameters {
            min_interval: reader.read_u16()?,
            max_interval: reader.read_u16()?,
            peripheral_latency: reader.read_u16()?,
            supervision_timeout: reader.read_u16()?,
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut writer = ByteWriter::with_capacity(8);
        writer
            .write_u16(value.min_interval)
            .write_u16(value.max_interval)
            .write_u16(value.peripheral_latency)
            .write_u16(value.supervision_timeout);
        Ok(writer.into_vec())
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        let check = |field: &'static str, raw: u16, min: f64, max: f64| {
            if raw == ConnectionParameters::NO_PREFERENCE {
                Ok(())
            } else {
                CodecError::check_range(field, f64::from(raw), min, max)
            }
        };
        check("minimum connection interval", value.min_interval, 6.0, 3200.0)?;
        check("maximum connection interval", value.max_interval, 6.0, 3200.0)?;
        CodecError::check_range(
            "peripheral latency",
            f64::from(value.peripheral_latency),
            0.0,
            499.0,
        )?;
        check("supervision timeout", value.supervision_timeout, 10.0, 3200.0)?;
        if value.min_interval != ConnectionParameters::NO_PREFERENCE
            && value.max_interval != ConnectionParameters::NO_PREFERENCE
            && value.max_interval < value.min_interval
        {
            return CodecError::check_range(
                "maximum connection interval",
                f64::from(value.max_interval),
                f64::from(value.min_interval),
                3200.0,
            );
        }
        Ok(())
    }
}

/// Service Changed value: the affected attribute handle range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandleRange {
    /// First affected handle
    pub start: u16,
    /// Last affected handle
    pub end: u16,
}

/// Service Changed (0x2A05)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceChangedCharacteristic;

impl Characteristic for ServiceChangedCharacteristic {
    type Value = HandleRange;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A05,
        "Service Changed",
        "org.bluetooth.characteristic.gatt.service_changed",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Exact(4);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        Ok(Decoded::Value(HandleRange {
            start: reader.read_u16()?,
            end: reader.read_u16()?,
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut writer = ByteWriter::with_capacity(4);
        writer.write_u16(value.start).write_u16(value.end);
        Ok(writer.into_vec())
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        CodecError::check_range("start handle", f64::from(value.start), 1.0, 65535.0)?;
        CodecError::check_range(
            "end handle",
            f64::from(value.end),
            f64::from(value.start),
            65535.0,
        )
    }
}

/// Central Address Resolution (0x2AA6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CentralAddressResolutionCharacteristic;

impl Characteristic for CentralAddressResolutionCharacteristic {
    type Value = bool;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2AA6,
        "Central Address Resolution",
        "org.bluetooth.characteristic.gap.central_address_resolution",
        None,
        ValueType::Bool,
    );
    const LENGTH: LengthRule = LengthRule::Exact(1);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        Ok(Decoded::Value(data[0] != 0))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Ok(vec![u8::from(*value)])
    }
}

/// Database Hash (0x2B2A), AES-CMAC over the GATT database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatabaseHashCharacteristic;

impl Characteristic for DatabaseHashCharacteristic {
    type Value = [u8; 16];
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2B2A,
        "Database Hash",
        "org.bluetooth.characteristic.database_hash",
        None,
        ValueType::Bytes,
    );
    const LENGTH: LengthRule = LengthRule::Exact(16);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        ByteReader::new(data).read_array().map(Decoded::Value)
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Ok(value.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_name() {
        let ctx = ParseContext::default();
        assert_eq!(
            DeviceNameCharacteristic::decode(b"Thermo-1\0", &ctx).unwrap(),
            Decoded::Value("Thermo-1".into())
        );
        assert!(matches!(
            DeviceNameCharacteristic::decode(&[0x41, 0xC3], &ctx),
            Err(CodecError::InvalidUtf8 { position: 1 })
        ));
    }

    #[test]
    fn test_appearance() {
        let ctx = ParseContext::default();
        let appearance = AppearanceCharacteristic::decode(&[0x41, 0x03], &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(appearance.category(), 13);
        assert_eq!(appearance.subcategory(), 1);
        assert_eq!(appearance.category_name(), Some("Heart Rate Sensor"));
    }

    #[test]
    fn test_connection_parameters() {
        let ctx = ParseContext::default();
        let bytes = [0x18, 0x00, 0x28, 0x00, 0x00, 0x00, 0xC8, 0x00];
        let params = PeripheralPreferredConnectionParametersCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(params.min_interval_ms(), 30.0);
        assert_eq!(params.max_interval_ms(), 50.0);
        assert_eq!(params.supervision_timeout_ms(), 2000);
        assert_eq!(
            PeripheralPreferredConnectionParametersCharacteristic::encode(&params).unwrap(),
            bytes
        );

        let inverted = [0x28, 0x00, 0x18, 0x00, 0x00, 0x00, 0xC8, 0x00];
        assert!(
            PeripheralPreferredConnectionParametersCharacteristic::decode(&inverted, &ctx).is_err()
        );
    }

    #[test]
    fn test_service_changed() {
        let ctx = ParseContext::default();
        let range = ServiceChangedCharacteristic::decode(&[0x01, 0x00, 0xFF, 0xFF], &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(range, HandleRange { start: 1, end: 0xFFFF });
        assert!(ServiceChangedCharacteristic::decode(&[0x10, 0x00, 0x01, 0x00], &ctx).is_err());
    }

    #[test]
    fn test_database_hash() {
        let ctx = ParseContext::default();
        let hash = [0xAB; 16];
        assert_eq!(
            DatabaseHashCharacteristic::decode(&hash, &ctx).unwrap(),
            Decoded::Value(hash)
        );
        assert!(DatabaseHashCharacteristic::decode(&hash[..15], &ctx).is_err());
    }
}
