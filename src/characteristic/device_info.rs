//! Device Information Service characteristics

use super::{
    Characteristic, CharacteristicInfo, Decoded, LengthRule, ParseContext, ValueType,
};
use crate::codec::{ByteReader, ByteWriter};
use crate::error::CodecError;
use alloc::vec::Vec;

/// System ID value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SystemId {
    /// Manufacturer defined identifier, 40 bits
    pub manufacturer_identifier: u64,
    /// IEEE organizationally unique identifier, 24 bits
    pub organizationally_unique_identifier: u32,
}

/// System ID (0x2A23)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystemIdCharacteristic;

impl Characteristic for SystemIdCharacteristic {
    type Value = SystemId;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A23,
        "System ID",
        "org.bluetooth.characteristic.system_id",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Exact(8);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        Ok(Decoded::Value(SystemId {
            manufacturer_identifier: reader.read_u40()?,
            organizationally_unique_identifier: reader.read_u24()?,
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut writer = ByteWriter::with_capacity(8);
        writer
            .write_u40(value.manufacturer_identifier)?
            .write_u24(value.organizationally_unique_identifier)?;
        Ok(writer.into_vec())
    }
}

utf8_characteristic! {
    /// Model Number String (0x2A24)
    ModelNumberStringCharacteristic {
        uuid: 0x2A24,
        name: "Model Number String",
        id: "org.bluetooth.characteristic.model_number_string",
    }
}

utf8_characteristic! {
    /// Serial Number String (0x2A25)
    SerialNumberStringCharacteristic {
        uuid: 0x2A25,
        name: "Serial Number String",
        id: "org.bluetooth.characteristic.serial_number_string",
    }
}

utf8_characteristic! {
    /// Firmware Revision String (0x2A26)
    FirmwareRevisionStringCharacteristic {
        uuid: 0x2A26,
        name: "Firmware Revision String",
        id: "org.bluetooth.characteristic.firmware_revision_string",
    }
}

utf8_characteristic! {
    /// Hardware Revision String (0x2A27)
    HardwareRevisionStringCharacteristic {
        uuid: 0x2A27,
        name: "Hardware Revision String",
        id: "org.bluetooth.characteristic.hardware_revision_string",
    }
}

utf8_characteristic! {
    /// Software Revision String (0x2A28)
    SoftwareRevisionStringCharacteristic {
        uuid: 0x2A28,
        name: "Software Revision String",
        id: "org.bluetooth.characteristic.software_revision_string",
    }
}

utf8_characteristic! {
    /// Manufacturer Name String (0x2A29)
    ManufacturerNameStringCharacteristic {
        uuid: 0x2A29,
        name: "Manufacturer Name String",
        id: "org.bluetooth.characteristic.manufacturer_name_string",
    }
}

sig_enum! {
    /// Namespace of the PnP ID vendor identifier
    pub enum VendorIdSource: u8 {
        /// Bluetooth SIG assigned company identifier
        BluetoothSig = 1,
        /// USB Implementer's Forum vendor ID
        UsbImplementersForum = 2,
    }
}

/// PnP ID value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PnpId {
    /// Namespace of `vendor_id`
    pub vendor_id_source: VendorIdSource,
    /// Vendor identifier
    pub vendor_id: u16,
    /// Product identifier, vendor managed
    pub product_id: u16,
    /// Product version, `0xJJMN` for version JJ.M.N
    pub product_version: u16,
}

impl PnpId {
    /// Company name when the vendor is identified by a SIG company ID
    #[must_use]
    pub fn vendor_name(&self) -> Option<&'static str> {
        match self.vendor_id_source {
            VendorIdSource::BluetoothSig => crate::metadata::company(self.vendor_id),
            _ => None,
        }
    }
}

/// PnP ID (0x2A50)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PnpIdCharacteristic;

impl Characteristic for PnpIdCharacteristic {
    type Value = PnpId;
    const INFO: CharacteristicInfo = CharacteristicInfo::new(
        0x2A50,
        "PnP ID",
        "org.bluetooth.characteristic.pnp_id",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Exact(7);

    fn decode_value(
        data: &[u8],
        _ctx: &ParseContext<'_>,
    ) -> Result<Decoded<Self::Value>, CodecError> {
        let mut reader = ByteReader::new(data);
        Ok(Decoded::Value(PnpId {
            vendor_id_source: VendorIdSource::from_raw(reader.read_u8()?),
            vendor_id: reader.read_u16()?,
            product_id: reader.read_u16()?,
            product_version: reader.read_u16()?,
        }))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut writer = ByteWriter::with_capacity(7);
        writer
            .write_u8(value.vendor_id_source.to_raw())
            .write_u16(value.vendor_id)
            .write_u16(value.product_id)
            .write_u16(value.product_version);
        Ok(writer.into_vec())
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        super::check_reserved(
            "vendor ID source",
            value.vendor_id_source.is_reserved(),
            u32::from(value.vendor_id_source.to_raw()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings() {
        let ctx = ParseContext::default();
        assert_eq!(
            ManufacturerNameStringCharacteristic::decode(b"Nordic Semiconductor", &ctx).unwrap(),
            Decoded::Value("Nordic Semiconductor".into())
        );
        assert_eq!(
            FirmwareRevisionStringCharacteristic::decode(b"", &ctx).unwrap(),
            Decoded::Value(alloc::string::String::new())
        );
        assert_eq!(
            ModelNumberStringCharacteristic::encode(&"nRF52840".into()).unwrap(),
            b"nRF52840"
        );
    }

    #[test]
    fn test_system_id() {
        let ctx = ParseContext::default();
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0xAA, 0xBB, 0xCC];
        let id = SystemIdCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(id.manufacturer_identifier, 0x05_0403_0201);
        assert_eq!(id.organizationally_unique_identifier, 0xCC_BBAA);
        assert_eq!(SystemIdCharacteristic::encode(&id).unwrap(), bytes);
    }

    #[test]
    fn test_pnp_id() {
        let ctx = ParseContext::default();
        let bytes = [0x01, 0x59, 0x00, 0x34, 0x12, 0x00, 0x01];
        let pnp = PnpIdCharacteristic::decode(&bytes, &ctx)
            .unwrap()
            .into_value()
            .unwrap();
        assert_eq!(pnp.vendor_id_source, VendorIdSource::BluetoothSig);
        assert_eq!(pnp.vendor_id, 0x0059);
        assert_eq!(pnp.vendor_name(), Some("Nordic Semiconductor ASA"));
        assert_eq!(pnp.product_id, 0x1234);
        assert_eq!(PnpIdCharacteristic::encode(&pnp).unwrap(), bytes);

        assert!(PnpIdCharacteristic::decode(&[0x03, 0, 0, 0, 0, 0, 0], &ctx).is_err());
    }
}
