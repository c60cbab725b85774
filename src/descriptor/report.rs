//! HID and transport descriptors

use super::{Descriptor, DescriptorInfo};
use crate::advertising::ad::{AdStructure, parse_ad_structures};
use crate::characteristic::{LengthRule, ValueType, check_reserved};
use crate::error::CodecError;
use crate::uuid::BluetoothUuid;
use alloc::vec::Vec;

/// External Report Reference (0x2907)
///
/// Names the characteristic, typically from another service, that a HID
/// Report Map entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExternalReportReferenceDescriptor;

impl Descriptor for ExternalReportReferenceDescriptor {
    type Value = BluetoothUuid;
    const INFO: DescriptorInfo = DescriptorInfo::new(
        0x2907,
        "External Report Reference",
        "org.bluetooth.descriptor.external_report_reference",
        None,
        ValueType::Bytes,
    );
    const LENGTH: LengthRule = LengthRule::Between(2, 16);

    fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError> {
        BluetoothUuid::from_le_slice(data)
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        // 32-bit aliases are not permitted here
        Ok(match value.to_u16() {
            Some(short) => short.to_le_bytes().to_vec(),
            None => value.as_u128().to_le_bytes().to_vec(),
        })
    }
}

sig_enum! {
    /// Kind of a HID report
    pub enum ReportType: u8 {
        /// Input report
        Input = 1,
        /// Output report
        Output = 2,
        /// Feature report
        Feature = 3,
    }
}

/// Report Reference value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReportReference {
    /// Report ID, `0` when reports carry no ID
    pub report_id: u8,
    /// Report kind
    pub report_type: ReportType,
}

/// Report Reference (0x2908)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportReferenceDescriptor;

impl Descriptor for ReportReferenceDescriptor {
    type Value = ReportReference;
    const INFO: DescriptorInfo = DescriptorInfo::new(
        0x2908,
        "Report Reference",
        "org.bluetooth.descriptor.report_reference",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Exact(2);

    fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError> {
        Ok(ReportReference {
            report_id: data[0],
            report_type: ReportType::from_raw(data[1]),
        })
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Ok(alloc::vec![value.report_id, value.report_type.to_raw()])
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        check_reserved(
            "Report Type",
            value.report_type.is_reserved(),
            u32::from(value.report_type.to_raw()),
        )
    }
}

/// Number of Digitals (0x2909)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberOfDigitalsDescriptor;

impl Descriptor for NumberOfDigitalsDescriptor {
    type Value = u8;
    const INFO: DescriptorInfo = DescriptorInfo::new(
        0x2909,
        "Number of Digitals",
        "org.bluetooth.descriptor.number_of_digitals",
        None,
        ValueType::Int,
    );
    const LENGTH: LengthRule = LengthRule::Exact(1);

    fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError> {
        Ok(data[0])
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        Ok(alloc::vec![*value])
    }
}

/// Complete BR-EDR Transport Block Data (0x290F)
///
/// The payload is extended inquiry response data, laid out like an
/// advertising payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransportBlockDataDescriptor;

impl Descriptor for TransportBlockDataDescriptor {
    type Value = Vec<AdStructure>;
    const INFO: DescriptorInfo = DescriptorInfo::new(
        0x290F,
        "Complete BR-EDR Transport Block Data",
        "org.bluetooth.descriptor.complete_br_edr_transport_block_data",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Any;

    fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError> {
        Ok(parse_ad_structures(data))
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        for structure in value {
            out.extend_from_slice(&structure.encode()?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_report_reference() {
        let uuid = ExternalReportReferenceDescriptor::decode(&[0x19, 0x2A]).unwrap();
        assert_eq!(uuid, BluetoothUuid::from_u16(0x2A19));
        assert_eq!(
            ExternalReportReferenceDescriptor::encode(&uuid).unwrap(),
            [0x19, 0x2A]
        );
        assert!(ExternalReportReferenceDescriptor::decode(&[0x19, 0x2A, 0x00]).is_err());
    }

    #[test]
    fn test_report_reference() {
        let reference = ReportReferenceDescriptor::decode(&[0x01, 0x01]).unwrap();
        assert_eq!(reference.report_id, 1);
        assert_eq!(reference.report_type, ReportType::Input);
        assert!(matches!(
            ReportReferenceDescriptor::decode(&[0x01, 0x04]),
            Err(CodecError::Reserved { field: "Report Type", value: 4 })
        ));
    }

    #[test]
    fn test_transport_block_data() {
        let bytes = [0x05, 0x09, b'P', b'h', b'o', b'n', 0x02, 0x0A, 0xF8];
        let blocks = TransportBlockDataDescriptor::decode(&bytes).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].ad_type, 0x09);
        assert_eq!(blocks[1].data, [0xF8]);
        assert_eq!(TransportBlockDataDescriptor::encode(&blocks).unwrap(), bytes);
    }
}
