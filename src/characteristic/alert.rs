//! Alerting characteristics: Immediate Alert, Link Loss, Tx Power, Phone Alert
//! Status and Alert Notification services

use super::{
    Characteristic, CharacteristicInfo, Decoded, LengthRule, ParseContext, ValueType,
};
use crate::codec::{ByteReader, ByteWriter};
use crate::error::CodecError;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

sig_enum! {
    /// Alert level
    pub enum AlertLevel: u8 {
        /// No alert
        NoAlert = 0,
        /// Mild alert
        MildAlert = 1,
        /// High alert
        HighAlert = 2,
    }
}

enum_characteristic! {
    /// Alert Level (0x2A06)
    AlertLevelCharacteristic => AlertLevel {
        uuid: 0x2A06,
        name: "Alert Level",
        id: "org.bluetooth.characteristic.alert_level",
    }
}

integer_characteristic! {
    /// Tx Power Level (0x2A07)
    TxPowerLevelCharacteristic {
        uuid: 0x2A07,
        name: "Tx Power Level",
        id: "org.bluetooth.characteristic.tx_power_level",
        unit: Some("dBm"),
        value: i8,
        width: 1,
        signed: true,
        range: -100.0 => 20.0,
        special: [],
    }
}

bitfield_characteristic! {
    /// Alert Status (0x2A3F)
    AlertStatusCharacteristic =>
    /// Phone alert state flags
    AlertStatus {
        uuid: 0x2A3F,
        name: "Alert Status",
        id: "org.bluetooth.characteristic.alert_status",
        width: 1,
        bits: {
            /// Ringer is active
            ringer_active = 0,
            /// Vibration is active
            vibrate_active = 1,
            /// Display alert is active
            display_alert_active = 2,
        },
    }
}

sig_enum! {
    /// Ringer control command
    pub enum RingerCommand: u8 {
        /// Silence the ringer
        SilentMode = 1,
        /// Mute once
        MuteOnce = 2,
        /// Leave silent mode
        CancelSilentMode = 3,
    }
}

enum_characteristic! {
    /// Ringer Control point (0x2A40)
    RingerControlPointCharacteristic => RingerCommand {
        uuid: 0x2A40,
        name: "Ringer Control point",
        id: "org.bluetooth.characteristic.ringer_control_point",
    }
}

sig_enum! {
    /// Ringer setting
    pub enum RingerSetting: u8 {
        /// Ringer silent
        Silent = 0,
        /// Ringer normal
        Normal = 1,
    }
}

enum_characteristic! {
    /// Ringer Setting (0x2A41)
    RingerSettingCharacteristic => RingerSetting {
        uuid: 0x2A41,
        name: "Ringer Setting",
        id: "org.bluetooth.characteristic.ringer_setting",
    }
}

sig_enum! {
    /// Alert category
    pub enum AlertCategory: u8 {
        /// Simple alert
        SimpleAlert = 0,
        /// Email
        Email = 1,
        /// News
        News = 2,
        /// Incoming call
        Call = 3,
        /// Missed call
        MissedCall = 4,
        /// SMS or MMS
        SmsMms = 5,
        /// Voice mail
        VoiceMail = 6,
        /// Schedule
        Schedule = 7,
        /// High prioritized alert
        HighPrioritizedAlert = 8,
        /// Instant message
        InstantMessage = 9,
        /// All categories, used by the control point
        AllCategories = 0xFF,
    }
}

enum_characteristic! {
    /// Alert Category ID (0x2A43)
    AlertCategoryIdCharacteristic => AlertCategory {
        uuid: 0x2A43,
        name: "Alert Category ID",
        id: "org.bluetooth.characteristic.alert_category_id",
    }
}

/// Set of alert categories, one bit per [`AlertCategory`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertCategoryMask {
    /// Raw mask bits
    pub bits: u16,
}

impl AlertCategoryMask {
    /// Whether `category` is in the set
    #[must_use]
    pub const fn contains(&self, category: AlertCategory) -> bool {
        let raw = category.to_raw();
        raw < 16 && self.bits & (1 << raw) != 0
    }

    fn decode(data: &[u8]) -> Self {
        let high = data.get(1).copied().unwrap_or(0);
        Self {
            bits: u16::from_le_bytes([data[0], high]),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn encode(self) -> Vec<u8> {
        if self.bits > 0xFF {
            self.bits.to_le_bytes().to_vec()
        } else {
            vec![self.bits as u8]
        }
    }
}

macro_rules! category_mask_characteristic {
    ($(#[$meta:meta])* $name:ident, $uuid:literal, $display:literal, $id:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl Characteristic for $name {
            type Value = AlertCategoryMask;
            const INFO: CharacteristicInfo =
                CharacteristicInfo::new($uuid, $display, $id, None, ValueType::BitField);
            const LENGTH: LengthRule = LengthRule::Between(1, 2);

            fn decode_value(
                data: &[u8],
                _ctx: &ParseContext<'_>,
            ) -> Result<Decoded<Self::Value>, CodecError> {
                Ok(Decoded::Value(AlertCategoryMask::decode(data)))
            }

            fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
                Ok(value.encode())
            }
        }
    };
}

category_mask_characteristic!(
    /// Alert Category ID Bit Mask (0x2A42)
    AlertCategoryIdBitMaskCharacteristic,
    0x2A42,
    "Alert Category ID Bit Mask",
    "org.bluetooth.characteristic.alert_category_id_bit_mask"
);
category_mask_characteristic!(
    /// Supported New Alert Category (0x2A47)
    SupportedNewAlertCategoryCharacteristic,
    0x2A47,
    "Supported New Alert Category",
    "org.bluetooth.characteristic.supported_new_alert_category"
);
category_mask_characteristic!(
    /// Supported Unread Alert Category (0x2A48)
    SupportedUnreadAlertCategoryCharacteristic,
    0x2A48,
    "Supported Unread Alert Category",
    "org.bluetooth.characteristic.supported_unread_alert_category"
);

sig_enum! {
    /// Alert Notification control point command
    pub enum AlertNotificationCommand: u8 {
        /// Enable new incoming alert notification
        EnableNewAlert = 0,
        /// Enable unread category status notification
        EnableUnreadStatus = 1,
        /// Disable new incoming alert notification
        DisableNewAlert = 2,
        /// Disable unread category status notification
        DisableUnreadStatus = 3,
        /// Notify new incoming alert immediately
        NotifyNewAlertImmediately = 4,
        /// Notify unread category status immediately
        NotifyUnreadStatusImmediately = 5,
    }
}

/// Alert Notification Control Point value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertNotificationControl {
    /// Command
    pub command: AlertNotificationCommand,
    /// Category the command applies to
    pub category: AlertCategory,
}

/// Alert Notification Control Point (0x2A44)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertNotificationControlPointCharacteristic;

impl Characteristic for AlertNotificationControlPointCharacteristic {
    type Value = AlertNotificationControl;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A44,
        "Alert Notification Control Point",
        "org.bluetooth.characteristic.alert_notification_control_point",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Exact(2);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        Ok(Decoded::Value(AlertNotificationControl {
            command: AlertNotificationCommand::from_raw(data[0]),
            category: AlertCategory::from_raw(data[1]),
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Ok(vec![value.command.to_raw(), value.category.to_raw()])
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        super::check_reserved(
            "command",
            value.command.is_reserved(),
            u32::from(value.command.to_raw()),
        )?;
        super::check_reserved(
            "category",
            value.category.is_reserved(),
            u32::from(value.category.to_raw()),
        )
    }
}

/// Unread Alert Status value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnreadAlertStatus {
    /// Category
    pub category: AlertCategory,
    /// Number of unread alerts, 255 means more than 254
    pub unread_count: u8,
}

/// Unread Alert Status (0x2A45)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnreadAlertStatusCharacteristic;

impl Characteristic for UnreadAlertStatusCharacteristic {
    type Value = UnreadAlertStatus;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A45,
        "Unread Alert Status",
        "org.bluetooth.characteristic.unread_alert_status",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Exact(2);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        Ok(Decoded::Value(UnreadAlertStatus {
            category: AlertCategory::from_raw(data[0]),
            unread_count: data[1],
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Ok(vec![value.category.to_raw(), value.unread_count])
    }
}

/// New Alert value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAlert {
    /// Category
    pub category: AlertCategory,
    /// Number of new alerts
    pub new_alert_count: u8,
    /// Brief text, at most 18 bytes of UTF-8
    pub text: String,
}

/// New Alert (0x2A46)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NewAlertCharacteristic;

impl NewAlertCharacteristic {
    /// Longest text in bytes
    pub const MAX_TEXT_LEN: usize = 18;
}

impl Characteristic for NewAlertCharacteristic {
    type Value = NewAlert;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A46,
        "New Alert",
        "org.bluetooth.characteristic.new_alert",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Between(2, 2 + Self::MAX_TEXT_LEN);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        Ok(Decoded::Value(NewAlert {
            category: AlertCategory::from_raw(reader.read_u8()?),
            new_alert_count: reader.read_u8()?,
            text: reader.read_utf8_rest()?,
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        if value.text.len() > Self::MAX_TEXT_LEN {
            return Err(CodecError::InvalidLength {
                rule: Self::LENGTH,
                actual: 2 + value.text.len(),
            });
        }
        let mut writer = ByteWriter::with_capacity(2 + value.text.len());
        writer
            .write_u8(value.category.to_raw())
            .write_u8(value.new_alert_count)
            .write_bytes(value.text.as_bytes());
        Ok(writer.into_vec())
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        super::check_reserved(
            "category",
            value.category.is_reserved(),
            u32::from(value.category.to_raw()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_level() {
        let ctx = ParseContext::default();
        assert_eq!(
            AlertLevelCharacteristic::decode(&[0x02], &ctx).unwrap(),
            Decoded::Value(AlertLevel::HighAlert)
        );
        assert!(AlertLevelCharacteristic::decode(&[0x03], &ctx).is_err());
        assert!(AlertLevelCharacteristic::encode(&AlertLevel::Reserved(7)).is_err());
    }

    #[test]
    fn test_tx_power_level() {
        let ctx = ParseContext::default();
        assert_eq!(
            TxPowerLevelCharacteristic::decode(&[0xF4], &ctx).unwrap(),
            Decoded::Value(-12)
        );
        assert!(TxPowerLevelCharacteristic::decode(&[0x80], &ctx).is_err());
    }

    #[test]
    fn test_alert_status() {
        let ctx = ParseContext::default();
        let status = AlertStatusCharacteristic::decode(&[0x05], &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert!(status.ringer_active());
        assert!(!status.vibrate_active());
        assert!(status.display_alert_active());
    }

    #[test]
    fn test_category_mask_lengths() {
        let ctx = ParseContext::default();
        let short = SupportedNewAlertCategoryCharacteristic::decode(&[0x0A], &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert!(short.contains(AlertCategory::Email));
        assert!(short.contains(AlertCategory::Call));
        assert_eq!(
            SupportedNewAlertCategoryCharacteristic::encode(&short).unwrap(),
            [0x0A]
        );

        let long = AlertCategoryIdBitMaskCharacteristic::decode(&[0x00, 0x02], &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert!(long.contains(AlertCategory::InstantMessage));
        assert_eq!(
            AlertCategoryIdBitMaskCharacteristic::encode(&long).unwrap(),
            [0x00, 0x02]
        );
        assert!(AlertCategoryIdBitMaskCharacteristic::decode(&[], &ctx).is_err());
    }

    #[test]
    fn test_new_alert() {
        let ctx = ParseContext::default();
        let alert = NewAlertCharacteristic::decode(b"\x01\x03Hello", &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(alert.category, AlertCategory::Email);
        assert_eq!(alert.new_alert_count, 3);
        assert_eq!(alert.text, "Hello");
        assert_eq!(
            NewAlertCharacteristic::encode(&alert).unwrap(),
            b"\x01\x03Hello"
        );

        let too_long = NewAlert {
            text: "a very long alert text".into(),
            ..alert
        };
        assert!(NewAlertCharacteristic::encode(&too_long).is_err());
    }

    #[test]
    fn test_alert_notification_control_point() {
        let ctx = ParseContext::default();
        let control = AlertNotificationControlPointCharacteristic::decode(&[0x00, 0xFF], &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(control.command, AlertNotificationCommand::EnableNewAlert);
        assert_eq!(control.category, AlertCategory::AllCategories);
        assert!(AlertNotificationControlPointCharacteristic::decode(&[0x06, 0x00], &ctx).is_err());
    }
}
