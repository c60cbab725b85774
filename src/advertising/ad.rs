//! AD structures
//!
//! An advertising or scan response payload is a sequence of
//! `(length, type, data)` entries where `length` counts the type byte and
//! the data. A zero length byte marks the end of the significant part.

use crate::error::CodecError;
use crate::metadata;
use alloc::vec::Vec;

/// Assigned AD type codes
pub mod ad_type {
    /// Flags
    pub const FLAGS: u8 = 0x01;
    /// Incomplete List of 16-bit Service UUIDs
    pub const INCOMPLETE_UUIDS_16: u8 = 0x02;
    /// Complete List of 16-bit Service UUIDs
    pub const COMPLETE_UUIDS_16: u8 = 0x03;
    /// Incomplete List of 32-bit Service UUIDs
    pub const INCOMPLETE_UUIDS_32: u8 = 0x04;
    /// Complete List of 32-bit Service UUIDs
    pub const COMPLETE_UUIDS_32: u8 = 0x05;
    /// Incomplete List of 128-bit Service UUIDs
    pub const INCOMPLETE_UUIDS_128: u8 = 0x06;
    /// Complete List of 128-bit Service UUIDs
    pub const COMPLETE_UUIDS_128: u8 = 0x07;
    /// Shortened Local Name
    pub const SHORTENED_LOCAL_NAME: u8 = 0x08;
    /// Complete Local Name
    pub const COMPLETE_LOCAL_NAME: u8 = 0x09;
    /// Tx Power Level
    pub const TX_POWER_LEVEL: u8 = 0x0A;
    /// Class of Device
    pub const CLASS_OF_DEVICE: u8 = 0x0D;
    /// Peripheral Connection Interval Range
    pub const PERIPHERAL_CONNECTION_INTERVAL_RANGE: u8 = 0x12;
    /// List of 16-bit Service Solicitation UUIDs
    pub const SOLICITATION_UUIDS_16: u8 = 0x14;
    /// List of 128-bit Service Solicitation UUIDs
    pub const SOLICITATION_UUIDS_128: u8 = 0x15;
    /// Service Data - 16-bit UUID
    pub const SERVICE_DATA_16: u8 = 0x16;
    /// Public Target Address
    pub const PUBLIC_TARGET_ADDRESS: u8 = 0x17;
    /// Random Target Address
    pub const RANDOM_TARGET_ADDRESS: u8 = 0x18;
    /// Appearance
    pub const APPEARANCE: u8 = 0x19;
    /// Advertising Interval
    pub const ADVERTISING_INTERVAL: u8 = 0x1A;
    /// LE Bluetooth Device Address
    pub const LE_DEVICE_ADDRESS: u8 = 0x1B;
    /// LE Role
    pub const LE_ROLE: u8 = 0x1C;
    /// List of 32-bit Service Solicitation UUIDs
    pub const SOLICITATION_UUIDS_32: u8 = 0x1F;
    /// Service Data - 32-bit UUID
    pub const SERVICE_DATA_32: u8 = 0x20;
    /// Service Data - 128-bit UUID
    pub const SERVICE_DATA_128: u8 = 0x21;
    /// URI
    pub const URI: u8 = 0x24;
    /// Transport Discovery Data
    pub const TRANSPORT_DISCOVERY_DATA: u8 = 0x26;
    /// Channel Map Update Indication
    pub const CHANNEL_MAP_UPDATE_INDICATION: u8 = 0x28;
    /// Advertising Interval - long
    pub const ADVERTISING_INTERVAL_LONG: u8 = 0x2F;
    /// Broadcast Name
    pub const BROADCAST_NAME: u8 = 0x30;
    /// 3D Information Data
    pub const THREE_D_INFORMATION: u8 = 0x3D;
    /// Manufacturer Specific Data
    pub const MANUFACTURER_SPECIFIC_DATA: u8 = 0xFF;
}

/// Largest data part an AD structure can carry
pub const MAX_AD_DATA_LEN: usize = 254;

/// One `(type, data)` entry of an advertising payload
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdStructure {
    /// AD type code
    pub ad_type: u8,
    /// Data following the type byte
    pub data: Vec<u8>,
}

impl AdStructure {
    /// Build a structure from its type and data
    #[must_use]
    pub fn new(ad_type: u8, data: impl Into<Vec<u8>>) -> Self {
        Self {
            ad_type,
            data: data.into(),
        }
    }

    /// Assigned name of the AD type
    #[must_use]
    pub fn type_name(&self) -> Option<&'static str> {
        metadata::ad_type_name(self.ad_type)
    }

    /// Serialize as `length, type, data`
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OutOfRange`] when the data exceeds [`MAX_AD_DATA_LEN`].
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        if self.data.len() > MAX_AD_DATA_LEN {
            return Err(CodecError::OutOfRange {
                field: "AD structure length",
                value: self.data.len() as f64,
                min: 0.0,
                max: MAX_AD_DATA_LEN as f64,
            });
        }
        let mut out = Vec::with_capacity(self.data.len() + 2);
        out.push(self.data.len() as u8 + 1);
        out.push(self.ad_type);
        out.extend_from_slice(&self.data);
        Ok(out)
    }
}

/// Split a payload into AD structures
///
/// Parsing stops at a zero length byte. A trailing entry whose declared
/// length runs past the buffer is dropped.
#[must_use]
pub fn parse_ad_structures(data: &[u8]) -> Vec<AdStructure> {
    let mut structures = Vec::new();
    let mut offset = 0;
    while offset < data.len() {
        let len = usize::from(data[offset]);
        if len == 0 {
            break;
        }
        let end = offset + 1 + len;
        if end > data.len() {
            warn!(
                "dropping truncated AD structure at offset {}: declared {} bytes, {} available",
                offset,
                len,
                data.len() - offset - 1
            );
            break;
        }
        structures.push(AdStructure::new(data[offset + 1], &data[offset + 2..end]));
        offset = end;
    }
    trace!("parsed {} AD structures", structures.len());
    structures
}

/// Serialize a sequence of AD structures
///
/// # Errors
///
/// Returns the error of the first structure that cannot be encoded.
pub fn encode_ad_structures(structures: &[AdStructure]) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    for structure in structures {
        out.extend_from_slice(&structure.encode()?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_structures() {
        let bytes = [0x02, 0x01, 0x06, 0x03, 0xFF, 0x4C, 0x00];
        let structures = parse_ad_structures(&bytes);
        assert_eq!(
            structures,
            [
                AdStructure::new(ad_type::FLAGS, [0x06]),
                AdStructure::new(ad_type::MANUFACTURER_SPECIFIC_DATA, [0x4C, 0x00]),
            ]
        );
        assert_eq!(structures[0].type_name(), Some("Flags"));
        assert_eq!(encode_ad_structures(&structures).unwrap(), bytes);
    }

    #[test]
    fn test_zero_length_terminates() {
        let bytes = [0x02, 0x01, 0x06, 0x00, 0x03, 0x19, 0x00, 0x00];
        assert_eq!(parse_ad_structures(&bytes).len(), 1);
    }

    #[test]
    fn test_truncated_entry_dropped() {
        let bytes = [0x02, 0x01, 0x06, 0x05, 0x09, b'a', b'b'];
        let structures = parse_ad_structures(&bytes);
        assert_eq!(structures, [AdStructure::new(ad_type::FLAGS, [0x06])]);
    }

    #[test]
    fn test_oversized_structure_rejected() {
        let structure = AdStructure::new(ad_type::MANUFACTURER_SPECIFIC_DATA, [0u8; 255]);
        assert!(structure.encode().is_err());
        let largest = AdStructure::new(ad_type::MANUFACTURER_SPECIFIC_DATA, [0u8; 254]);
        assert_eq!(largest.encode().unwrap()[0], 0xFF);
    }
}
