//! Battery Service characteristics

use super::{
    Characteristic, CharacteristicInfo, Decoded, LengthRule, ParseContext, ValueType,
};
use crate::error::CodecError;
use alloc::vec;
use alloc::vec::Vec;

integer_characteristic! {
    /// Battery Level (0x2A19), percent of full charge
    BatteryLevelCharacteristic {
        uuid: 0x2A19,
        name: "Battery Level",
        id: "org.bluetooth.characteristic.battery_level",
        unit: Some("%"),
        value: u8,
        width: 1,
        signed: false,
        range: 0.0 => 100.0,
        special: [],
    }
}

/// State of one 2-bit field of Battery Power State
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerStateBits {
    /// Unknown
    #[default]
    Unknown,
    /// Not supported by the device
    NotSupported,
    /// Not present, not discharging, not charging or good level
    Inactive,
    /// Present, discharging, charging or critically low level
    Active,
}

impl PowerStateBits {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Unknown,
            1 => Self::NotSupported,
            2 => Self::Inactive,
            _ => Self::Active,
        }
    }

    const fn to_bits(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::NotSupported => 1,
            Self::Inactive => 2,
            Self::Active => 3,
        }
    }
}

/// Battery Power State value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryPowerState {
    /// Battery present
    pub present: PowerStateBits,
    /// Battery discharging
    pub discharging: PowerStateBits,
    /// Battery charging
    pub charging: PowerStateBits,
    /// `Active` means the level is critically low
    pub level_critical: PowerStateBits,
}

/// Battery Power State (0x2A1A)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatteryPowerStateCharacteristic;

impl Characteristic for BatteryPowerStateCharacteristic {
    type Value = BatteryPowerState;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A1A,
        "Battery Power State",
        "org.bluetooth.characteristic.battery_power_state",
        None,
        ValueType::BitField,
    );
    const LENGTH: LengthRule = LengthRule::Exact(1);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let raw = data[0];
        Ok(Decoded::Value(BatteryPowerState {
            present: PowerStateBits::from_bits(raw),
            discharging: PowerStateBits::from_bits(raw >> 2),
            charging: PowerStateBits::from_bits(raw >> 4),
            level_critical: PowerStateBits::from_bits(raw >> 6),
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Ok(vec![
            value.present.to_bits()
                | value.discharging.to_bits() << 2
                | value.charging.to_bits() << 4
                | value.level_critical.to_bits() << 6,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battery_level() {
        let ctx = ParseContext::default();
        let level = BatteryLevelCharacteristic::decode(&[0x64], &ctx).unwrap();
        assert_eq!(level, Decoded::Value(100));
        assert_eq!(BatteryLevelCharacteristic::encode(&100).unwrap(), [0x64]);
    }

    #[test]
    fn test_battery_level_range() {
        let ctx = ParseContext::default();
        assert!(matches!(
            BatteryLevelCharacteristic::decode(&[0x65], &ctx),
            Err(CodecError::OutOfRange { .. })
        ));
        let raw = BatteryLevelCharacteristic::decode(&[0x65], &ctx.with_validation(false));
        assert_eq!(raw.unwrap(), Decoded::Value(101));
        assert!(BatteryLevelCharacteristic::encode(&101).is_err());
    }

    #[test]
    fn test_battery_level_length() {
        let ctx = ParseContext::default();
        let err = BatteryLevelCharacteristic::decode(&[0x64, 0x00], &ctx).unwrap_err();
        assert_eq!(err.to_string(), "Invalid length: need 1 bytes, got 2");
    }

    #[test]
    fn test_battery_power_state() {
        let ctx = ParseContext::default();
        let state = BatteryPowerStateCharacteristic::decode(&[0b1011_0111], &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(state.present, PowerStateBits::Active);
        assert_eq!(state.discharging, PowerStateBits::NotSupported);
        assert_eq!(state.charging, PowerStateBits::Active);
        assert_eq!(state.level_critical, PowerStateBits::Inactive);
        assert_eq!(
            BatteryPowerStateCharacteristic::encode(&state).unwrap(),
            [0b1011_0111]
        );
    }
}
