//! HID over GATT characteristics

use super::{
    Characteristic, CharacteristicInfo, Decoded, LengthRule, ParseContext, ValueType,
};
use crate::codec::{ByteReader, ByteWriter};
use crate::error::CodecError;
use alloc::vec::Vec;

/// HID Information value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HidInformation {
    /// HID specification release, binary coded decimal (`0x0111` is 1.11)
    pub bcd_hid: u16,
    /// Hardware target country
    pub country_code: u8,
    /// Device can wake the host
    pub remote_wake: bool,
    /// Device advertises when bonded but disconnected
    pub normally_connectable: bool,
}

impl HidInformation {
    const FLAG_REMOTE_WAKE: u8 = 0x01;
    const FLAG_NORMALLY_CONNECTABLE: u8 = 0x02;

    /// Release as `(major, minor)`
    #[must_use]
    pub const fn version(&self) -> (u8, u8) {
        let [minor, major] = self.bcd_hid.to_le_bytes();
        (
            (major >> 4) * 10 + (major & 0x0F),
            (minor >> 4) * 10 + (minor & 0x0F),
        )
    }
}

/// HID Information (0x2A4A)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HidInformationCharacteristic;

impl Characteristic for HidInformationCharacteristic {
    type Value = HidInformation;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A4A,
        "HID Information",
        "org.bluetooth.characteristic.hid_information",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Exact(4);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        let bcd_hid = reader.read_u16()?;
        let country_code = reader.read_u8()?;
        let flags = reader.read_u8()?;
        Ok(Decoded::Value(HidInformation {
            bcd_hid,
            country_code,
            remote_wake: flags & HidInformation::FLAG_REMOTE_WAKE != 0,
            normally_connectable: flags & HidInformation::FLAG_NORMALLY_CONNECTABLE != 0,
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut flags = 0;
        if value.remote_wake {
            flags |= HidInformation::FLAG_REMOTE_WAKE;
        }
        if value.normally_connectable {
            flags |= HidInformation::FLAG_NORMALLY_CONNECTABLE;
        }
        let mut writer = ByteWriter::with_capacity(4);
        writer
            .write_u16(value.bcd_hid)
            .write_u8(value.country_code)
            .write_u8(flags);
        Ok(writer.into_vec())
    }
}

sig_enum! {
    /// HID Control Point command
    pub enum HidCommand: u8 {
        /// Host is entering suspend
        Suspend = 0,
        /// Host is leaving suspend
        ExitSuspend = 1,
    }
}

enum_characteristic! {
    /// HID Control Point (0x2A4C)
    HidControlPointCharacteristic => HidCommand {
        uuid: 0x2A4C,
        name: "HID Control Point",
        id: "org.bluetooth.characteristic.hid_control_point",
    }
}

sig_enum! {
    /// HID protocol in use
    pub enum ProtocolMode: u8 {
        /// Boot protocol
        Boot = 0,
        /// Report protocol
        Report = 1,
    }
}

enum_characteristic! {
    /// Protocol Mode (0x2A4E)
    ProtocolModeCharacteristic => ProtocolMode {
        uuid: 0x2A4E,
        name: "Protocol Mode",
        id: "org.bluetooth.characteristic.protocol_mode",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hid_information() {
        let ctx = ParseContext::default();
        let bytes = [0x11, 0x01, 0x00, 0x02];
        let info = HidInformationCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(info.version(), (1, 11));
        assert!(!info.remote_wake);
        assert!(info.normally_connectable);
        assert_eq!(HidInformationCharacteristic::encode(&info).unwrap(), bytes);
    }

    #[test]
    fn test_protocol_mode() {
        let ctx = ParseContext::default();
        assert_eq!(
            ProtocolModeCharacteristic::decode(&[0x01], &ctx).unwrap(),
            Decoded::Value(ProtocolMode::Report)
        );
        assert!(ProtocolModeCharacteristic::decode(&[0x02], &ctx).is_err());
        assert_eq!(
            HidControlPointCharacteristic::encode(&HidCommand::ExitSuspend).unwrap(),
            [0x01]
        );
    }
}
