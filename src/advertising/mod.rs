//! Advertising payloads
//!
//! [`AdvertisingPdu`] splits a link layer PDU into addresses, extended
//! header and AdvData. [`AdvertisingData`] sorts the AD structures of the
//! AdvData into typed fields. Interpreters registered in an
//! [`InterpreterRegistry`] turn service data into decoded values and report
//! state changes as a [`StateDelta`] the caller applies to its own
//! [`DeviceAdvertisingState`].

pub mod ad;
pub mod bthome;
pub mod class_of_device;
pub mod interpreter;
pub mod pdu;
pub mod service_data;
pub mod sig;
pub mod state;

pub use ad::{AdStructure, ad_type, encode_ad_structures, parse_ad_structures};
pub use bthome::{
    BTHOME_UUID, BtHomeInterpreter, BtHomePacket, DecryptionRequest, Measurement,
    MeasurementValue, PayloadDecryptor,
};
pub use class_of_device::{ClassOfDevice, MajorDeviceClass};
pub use interpreter::{InterpreterOptions, InterpreterRegistry, PayloadInterpreter};
pub use pdu::{AdvertisingPdu, ExtendedHeader, PduHeader, PduType};
pub use service_data::ServiceDataParser;
pub use sig::SigCharacteristicInterpreter;
pub use state::{
    DeviceAdvertisingState, EncryptionState, InterpretationResult, InterpretationStatus,
    InterpretedPayload, PacketState, StateDelta,
};

use crate::address::BluetoothAddress;
use crate::codec::ByteReader;
use crate::error::CodecError;
use crate::metadata;
use crate::uuid::BluetoothUuid;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Contents of the Flags AD structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdFlags(pub u8);

impl AdFlags {
    /// LE Limited Discoverable Mode
    #[must_use]
    pub const fn le_limited_discoverable(self) -> bool {
        self.0 & 0x01 != 0
    }

    /// LE General Discoverable Mode
    #[must_use]
    pub const fn le_general_discoverable(self) -> bool {
        self.0 & 0x02 != 0
    }

    /// BR/EDR Not Supported
    #[must_use]
    pub const fn br_edr_not_supported(self) -> bool {
        self.0 & 0x04 != 0
    }

    /// Simultaneous LE and BR/EDR to the same device (controller)
    #[must_use]
    pub const fn simultaneous_controller(self) -> bool {
        self.0 & 0x08 != 0
    }
}

sig_enum! {
    /// Supported LE roles
    pub enum LeRole: u8 {
        /// Only Peripheral role supported
        PeripheralOnly = 0x00,
        /// Only Central role supported
        CentralOnly = 0x01,
        /// Both supported, Peripheral preferred for connection establishment
        PeripheralPreferred = 0x02,
        /// Both supported, Central preferred for connection establishment
        CentralPreferred = 0x03,
    }
}

/// Address carried by the LE Bluetooth Device Address AD structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LeDeviceAddress {
    /// The address
    pub address: BluetoothAddress,
    /// Random rather than public address
    pub random: bool,
}

/// Preferred connection interval range in 1.25 ms units
///
/// `None` means no specific bound (wire value `0xFFFF`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConnectionIntervalRange {
    /// Minimum connection interval
    pub min: Option<u16>,
    /// Maximum connection interval
    pub max: Option<u16>,
}

/// 3D Information Data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThreeDInformation {
    /// Association, battery and factory test flags
    pub flags: u8,
    /// Path loss threshold in dB
    pub path_loss_threshold: u8,
}

impl ThreeDInformation {
    /// The device supports association notification
    #[must_use]
    pub const fn association_notification(self) -> bool {
        self.flags & 0x01 != 0
    }

    /// The device reports its battery level
    #[must_use]
    pub const fn battery_level_reporting(self) -> bool {
        self.flags & 0x02 != 0
    }
}

/// One block of Transport Discovery Data
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransportBlock {
    /// Organization that defined the transport data
    pub organization_id: u8,
    /// Role and state flags
    pub flags: u8,
    /// Organization specific data
    pub data: Vec<u8>,
}

/// Channel Map Update Indication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelMapUpdate {
    /// New channel map (37 bits)
    pub channel_map: [u8; 5],
    /// Connection event at which the map applies
    pub instant: u16,
}

/// Everything decoded from one advertisement
///
/// Fields with no matching AD structure stay `None` or empty. Every parsed
/// structure is kept in [`Self::structures`]; those that were not
/// classified, or were malformed, are also listed in [`Self::unknown`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvertisingData {
    /// Input bytes
    pub raw: Vec<u8>,
    /// PDU header, when parsed from a full PDU
    pub pdu: Option<PduHeader>,
    /// AdvA
    pub advertiser_address: Option<BluetoothAddress>,
    /// TargetA
    pub target_address: Option<BluetoothAddress>,
    /// Extended header of `ADV_EXT_IND`
    pub extended_header: Option<ExtendedHeader>,
    /// All AD structures in payload order
    pub structures: Vec<AdStructure>,
    /// Flags
    pub flags: Option<AdFlags>,
    /// Local name
    pub local_name: Option<String>,
    /// Whether [`Self::local_name`] came from a Complete Local Name structure
    pub name_is_complete: bool,
    /// Advertised service UUIDs
    pub service_uuids: Vec<BluetoothUuid>,
    /// Whether every UUID list was marked complete
    pub service_uuids_complete: bool,
    /// Solicited service UUIDs
    pub solicited_service_uuids: Vec<BluetoothUuid>,
    /// Manufacturer specific data by company identifier
    pub manufacturer_data: BTreeMap<u16, Vec<u8>>,
    /// Service data by service UUID
    pub service_data: BTreeMap<BluetoothUuid, Vec<u8>>,
    /// Tx Power Level in dBm
    pub tx_power: Option<i8>,
    /// GAP appearance
    pub appearance: Option<u16>,
    /// Advertising interval in 0.625 ms units
    pub advertising_interval: Option<u16>,
    /// Advertising interval (long form) in 0.625 ms units
    pub advertising_interval_long: Option<u32>,
    /// URI with its scheme expanded
    pub uri: Option<String>,
    /// Class of Device
    pub class_of_device: Option<ClassOfDevice>,
    /// Peripheral Connection Interval Range
    pub peripheral_connection_interval: Option<ConnectionIntervalRange>,
    /// LE Role
    pub le_role: Option<LeRole>,
    /// LE Bluetooth Device Address
    pub le_device_address: Option<LeDeviceAddress>,
    /// Public Target Addresses
    pub public_target_addresses: Vec<BluetoothAddress>,
    /// Random Target Addresses
    pub random_target_addresses: Vec<BluetoothAddress>,
    /// 3D Information Data
    pub three_d_information: Option<ThreeDInformation>,
    /// Transport Discovery Data blocks
    pub transport_discovery: Vec<TransportBlock>,
    /// Channel Map Update Indication
    pub channel_map_update: Option<ChannelMapUpdate>,
    /// Broadcast Name
    pub broadcast_name: Option<String>,
    /// Structures that were not classified
    pub unknown: Vec<AdStructure>,
    /// Received signal strength in dBm, supplied by the caller
    pub rssi: Option<i8>,
    /// Reception time, supplied by the caller
    pub timestamp: Option<u64>,
}

impl AdvertisingData {
    /// Classify the AD structures of an AdvData or scan response payload
    #[must_use]
    pub fn from_ad_bytes(bytes: &[u8]) -> Self {
        let mut data = Self {
            raw: bytes.to_vec(),
            service_uuids_complete: true,
            ..Self::default()
        };
        data.add_structures(parse_ad_structures(bytes));
        data
    }

    /// Decode a full advertising channel PDU
    ///
    /// The AdvData of PDUs that carry one is classified as in
    /// [`Self::from_ad_bytes`].
    ///
    /// # Errors
    ///
    /// Returns the [`CodecError`] of [`AdvertisingPdu::parse`].
    pub fn from_pdu(raw: &[u8]) -> Result<Self, CodecError> {
        let pdu = AdvertisingPdu::parse(raw)?;
        let mut data = Self {
            raw: raw.to_vec(),
            pdu: Some(pdu.header),
            advertiser_address: pdu.advertiser_address,
            target_address: pdu.target_address,
            service_uuids_complete: true,
            ..Self::default()
        };
        if pdu.carries_ad_data() {
            data.add_structures(parse_ad_structures(&pdu.payload));
        }
        data.extended_header = pdu.extended_header;
        Ok(data)
    }

    /// Attach the received signal strength
    #[must_use]
    pub const fn with_rssi(mut self, rssi: i8) -> Self {
        self.rssi = Some(rssi);
        self
    }

    /// Attach the reception time
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Name of the appearance category
    #[must_use]
    pub fn appearance_category(&self) -> Option<&'static str> {
        self.appearance
            .and_then(|appearance| metadata::appearance_category(appearance >> 6))
    }

    /// Manufacturer data keyed by company name where the identifier is assigned
    pub fn manufacturers(&self) -> impl Iterator<Item = (u16, Option<&'static str>, &[u8])> {
        self.manufacturer_data
            .iter()
            .map(|(id, data)| (*id, metadata::company(*id), data.as_slice()))
    }

    /// Service data in packet order
    ///
    /// Malformed service-data structures are skipped. A UUID repeated in
    /// the packet is yielded once per structure.
    pub fn service_data_in_order(&self) -> impl Iterator<Item = (BluetoothUuid, &[u8])> {
        self.structures.iter().filter_map(|structure| {
            let width = match structure.ad_type {
                ad_type::SERVICE_DATA_16 => 2,
                ad_type::SERVICE_DATA_32 => 4,
                ad_type::SERVICE_DATA_128 => 16,
                _ => return None,
            };
            if structure.data.len() < width {
                return None;
            }
            let (uuid, payload) = structure.data.split_at(width);
            BluetoothUuid::from_le_slice(uuid)
                .ok()
                .map(|uuid| (uuid, payload))
        })
    }

    /// Classify and store structures, in order
    pub fn add_structures(&mut self, structures: impl IntoIterator<Item = AdStructure>) {
        for structure in structures {
            match self.classify(&structure) {
                Ok(true) => {}
                Ok(false) => self.unknown.push(structure.clone()),
                Err(_) => {
                    warn!(
                        "malformed AD structure of type {} ({} bytes), kept raw",
                        structure.ad_type,
                        structure.data.len()
                    );
                    self.unknown.push(structure.clone());
                }
            }
            self.structures.push(structure);
        }
    }

    /// Store one structure in its field; `Ok(false)` for unclassified types
    fn classify(&mut self, structure: &AdStructure) -> Result<bool, CodecError> {
        let data = structure.data.as_slice();
        let mut reader = ByteReader::new(data);
        match structure.ad_type {
            ad_type::FLAGS => self.flags = Some(AdFlags(reader.read_u8()?)),
            ad_type::INCOMPLETE_UUIDS_16 | ad_type::COMPLETE_UUIDS_16 => {
                self.add_service_uuids(structure.ad_type, data, 2)?;
            }
            ad_type::INCOMPLETE_UUIDS_32 | ad_type::COMPLETE_UUIDS_32 => {
                self.add_service_uuids(structure.ad_type, data, 4)?;
            }
            ad_type::INCOMPLETE_UUIDS_128 | ad_type::COMPLETE_UUIDS_128 => {
                self.add_service_uuids(structure.ad_type, data, 16)?;
            }
            ad_type::SHORTENED_LOCAL_NAME => {
                if self.local_name.is_none() {
                    self.local_name = Some(String::from_utf8_lossy(data).into_owned());
                }
            }
            ad_type::COMPLETE_LOCAL_NAME => {
                self.local_name = Some(String::from_utf8_lossy(data).into_owned());
                self.name_is_complete = true;
            }
            ad_type::TX_POWER_LEVEL => self.tx_power = Some(reader.read_i8()?),
            ad_type::CLASS_OF_DEVICE => {
                self.class_of_device = Some(ClassOfDevice::from_le_slice(data)?);
            }
            ad_type::PERIPHERAL_CONNECTION_INTERVAL_RANGE => {
                let bound = |raw: u16| (raw != 0xFFFF).then_some(raw);
                let min = reader.read_u16()?;
                let max = reader.read_u16()?;
                self.peripheral_connection_interval = Some(ConnectionIntervalRange {
                    min: bound(min),
                    max: bound(max),
                });
            }
            ad_type::SOLICITATION_UUIDS_16 => {
                self.solicited_service_uuids.extend(uuid_list(data, 2)?);
            }
            ad_type::SOLICITATION_UUIDS_32 => {
                self.solicited_service_uuids.extend(uuid_list(data, 4)?);
            }
            ad_type::SOLICITATION_UUIDS_128 => {
                self.solicited_service_uuids.extend(uuid_list(data, 16)?);
            }
            ad_type::SERVICE_DATA_16 => self.add_service_data(data, 2)?,
            ad_type::SERVICE_DATA_32 => self.add_service_data(data, 4)?,
            ad_type::SERVICE_DATA_128 => self.add_service_data(data, 16)?,
            ad_type::PUBLIC_TARGET_ADDRESS => {
                self.public_target_addresses.extend(address_list(data)?);
            }
            ad_type::RANDOM_TARGET_ADDRESS => {
                self.random_target_addresses.extend(address_list(data)?);
            }
            ad_type::APPEARANCE => self.appearance = Some(reader.read_u16()?),
            ad_type::ADVERTISING_INTERVAL => {
                self.advertising_interval = Some(reader.read_u16()?);
            }
            ad_type::ADVERTISING_INTERVAL_LONG => {
                self.advertising_interval_long = Some(match data.len() {
                    3 => reader.read_u24()?,
                    _ => reader.read_u32()?,
                });
            }
            ad_type::LE_DEVICE_ADDRESS => {
                let address = BluetoothAddress::from_le_bytes(reader.read_array()?);
                let kind = reader.read_u8()?;
                self.le_device_address = Some(LeDeviceAddress {
                    address,
                    random: kind & 0x01 != 0,
                });
            }
            ad_type::LE_ROLE => self.le_role = Some(LeRole::from_raw(reader.read_u8()?)),
            ad_type::URI => self.uri = Some(expand_uri(data)?),
            ad_type::TRANSPORT_DISCOVERY_DATA => {
                let mut blocks = Vec::new();
                while !reader.is_empty() {
                    let organization_id = reader.read_u8()?;
                    let flags = reader.read_u8()?;
                    let len = usize::from(reader.read_u8()?);
                    blocks.push(TransportBlock {
                        organization_id,
                        flags,
                        data: reader.read_bytes(len)?.to_vec(),
                    });
                }
                self.transport_discovery.extend(blocks);
            }
            ad_type::CHANNEL_MAP_UPDATE_INDICATION => {
                self.channel_map_update = Some(ChannelMapUpdate {
                    channel_map: reader.read_array()?,
                    instant: reader.read_u16()?,
                });
            }
            ad_type::BROADCAST_NAME => {
                self.broadcast_name = Some(String::from_utf8_lossy(data).into_owned());
            }
            ad_type::THREE_D_INFORMATION => {
                self.three_d_information = Some(ThreeDInformation {
                    flags: reader.read_u8()?,
                    path_loss_threshold: reader.read_u8()?,
                });
            }
            ad_type::MANUFACTURER_SPECIFIC_DATA => {
                let company = reader.read_u16()?;
                self.manufacturer_data
                    .insert(company, reader.read_rest().to_vec());
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn add_service_uuids(
        &mut self,
        ad_type: u8,
        data: &[u8],
        width: usize,
    ) -> Result<(), CodecError> {
        let uuids = uuid_list(data, width)?;
        let complete = matches!(
            ad_type,
            ad_type::COMPLETE_UUIDS_16 | ad_type::COMPLETE_UUIDS_32 | ad_type::COMPLETE_UUIDS_128
        );
        self.service_uuids_complete &= complete;
        for uuid in uuids {
            if !self.service_uuids.contains(&uuid) {
                self.service_uuids.push(uuid);
            }
        }
        Ok(())
    }

    fn add_service_data(&mut self, data: &[u8], width: usize) -> Result<(), CodecError> {
        if data.len() < width {
            return Err(CodecError::insufficient(width, data.len()));
        }
        let (uuid, payload) = data.split_at(width);
        self.service_data
            .insert(BluetoothUuid::from_le_slice(uuid)?, payload.to_vec());
        Ok(())
    }
}

fn uuid_list(data: &[u8], width: usize) -> Result<Vec<BluetoothUuid>, CodecError> {
    let chunks = data.chunks_exact(width);
    if !chunks.remainder().is_empty() {
        return Err(CodecError::insufficient(
            data.len() + width - chunks.remainder().len(),
            data.len(),
        ));
    }
    chunks.map(BluetoothUuid::from_le_slice).collect()
}

fn address_list(data: &[u8]) -> Result<Vec<BluetoothAddress>, CodecError> {
    let chunks = data.chunks_exact(6);
    if !chunks.remainder().is_empty() {
        return Err(CodecError::insufficient(
            data.len() + 6 - chunks.remainder().len(),
            data.len(),
        ));
    }
    Ok(chunks
        .map(|chunk| {
            let mut le = [0u8; 6];
            le.copy_from_slice(chunk);
            BluetoothAddress::from_le_bytes(le)
        })
        .collect())
}

fn expand_uri(data: &[u8]) -> Result<String, CodecError> {
    let Some((&scheme, rest)) = data.split_first() else {
        return Err(CodecError::insufficient(1, 0));
    };
    let prefix = metadata::uri_scheme(scheme).ok_or(CodecError::Reserved {
        field: "URI scheme",
        value: u32::from(scheme),
    })?;
    let mut uri = String::from(prefix);
    uri.push_str(&crate::codec::decode_utf8(rest)?);
    Ok(uri)
}

/// Decode the AD structures of an AdvData or scan response payload
#[must_use]
pub fn parse_advertising_data(bytes: &[u8]) -> AdvertisingData {
    AdvertisingData::from_ad_bytes(bytes)
}

/// Decode a full advertising channel PDU
///
/// # Errors
///
/// Returns [`CodecError::InsufficientData`] when the PDU is truncated and
/// [`CodecError::Reserved`] for a reserved PDU type.
pub fn parse_advertising_payloads(raw: &[u8]) -> Result<AdvertisingData, CodecError> {
    AdvertisingData::from_pdu(raw)
}

/// Why an interpreter could not produce a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseErrorKind {
    /// The payload is encrypted and no bindkey is available
    EncryptionRequired,
    /// The bindkey did not authenticate the payload
    DecryptionFailed,
    /// The encryption counter did not advance
    ReplayDetected,
    /// The packet repeats the previous one
    DuplicatePacket,
    /// The payload is malformed
    ParseError,
    /// The payload uses a format version the interpreter does not know
    UnsupportedVersion,
}

impl ParseErrorKind {
    /// Status reported for this failure
    #[must_use]
    pub const fn status(self) -> InterpretationStatus {
        match self {
            Self::EncryptionRequired => InterpretationStatus::EncryptionRequired,
            Self::DecryptionFailed => InterpretationStatus::DecryptionFailed,
            Self::ReplayDetected => InterpretationStatus::ReplayDetected,
            Self::DuplicatePacket => InterpretationStatus::DuplicatePacket,
            Self::ParseError => InterpretationStatus::ParseError,
            Self::UnsupportedVersion => InterpretationStatus::UnsupportedVersion,
        }
    }
}

/// Failure reported by a payload interpreter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertisingParseError {
    /// Failure category
    pub kind: ParseErrorKind,
    /// Human readable description
    pub message: String,
    /// Name of the characteristic being decoded, if any
    pub characteristic: Option<&'static str>,
    /// The payload that failed
    pub payload: Vec<u8>,
}

impl AdvertisingParseError {
    /// Build an error without characteristic or payload
    #[must_use]
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            characteristic: None,
            payload: Vec::new(),
        }
    }

    /// Attach the failing payload
    #[must_use]
    pub fn with_payload(mut self, payload: &[u8]) -> Self {
        self.payload = payload.to_vec();
        self
    }
}

impl fmt::Display for AdvertisingParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.characteristic {
            Some(name) => write!(f, "{}: {}", name, self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl core::error::Error for AdvertisingParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_manufacturer_data_by_company() {
        let bytes = [
            0x02, 0x01, 0x06, // flags
            0x05, 0xFF, 0x4C, 0x00, 0x01, 0x02, // Apple
            0x04, 0xFF, 0x06, 0x00, 0x03, // Microsoft
        ];
        let data = parse_advertising_data(&bytes);
        assert_eq!(data.manufacturer_data.len(), 2);
        assert_eq!(data.manufacturer_data[&0x004C], [0x01, 0x02]);
        assert_eq!(data.manufacturer_data[&0x0006], [0x03]);
        assert_eq!(data.structures.len(), 3);
        assert!(data.flags.unwrap().le_general_discoverable());
        assert!(data.flags.unwrap().br_edr_not_supported());
    }

    #[test]
    fn test_repeated_company_keeps_last_block() {
        let bytes = [0x04, 0xFF, 0x4C, 0x00, 0x01, 0x04, 0xFF, 0x4C, 0x00, 0x02];
        let data = parse_advertising_data(&bytes);
        assert_eq!(data.manufacturer_data.len(), 1);
        assert_eq!(data.manufacturer_data[&0x004C], [0x02]);
        assert_eq!(data.structures.len(), 2);
    }

    #[test]
    fn test_names_uuids_and_service_data() {
        let bytes = [
            0x05, 0x03, 0x0F, 0x18, 0x0D, 0x18, // complete 16-bit UUIDs
            0x05, 0x09, b'T', b'h', b'e', b'r', // complete name
            0x04, 0x16, 0x0F, 0x18, 0x5A, // service data: Battery 90
            0x02, 0x0A, 0xF4, // tx power -12
            0x03, 0x19, 0xC1, 0x03, // appearance: keyboard
        ];
        let data = parse_advertising_data(&bytes);
        assert_eq!(
            data.service_uuids,
            [BluetoothUuid::from_u16(0x180F), BluetoothUuid::from_u16(0x180D)]
        );
        assert!(data.service_uuids_complete);
        assert_eq!(data.local_name.as_deref(), Some("Ther"));
        assert!(data.name_is_complete);
        assert_eq!(data.service_data[&BluetoothUuid::from_u16(0x180F)], [0x5A]);
        assert_eq!(data.tx_power, Some(-12));
        assert_eq!(data.appearance, Some(0x03C1));
        assert!(data.unknown.is_empty());
    }

    #[test]
    fn test_incomplete_list_clears_completeness() {
        let bytes = [0x03, 0x02, 0x0F, 0x18, 0x03, 0x03, 0x0D, 0x18];
        let data = parse_advertising_data(&bytes);
        assert_eq!(data.service_uuids.len(), 2);
        assert!(!data.service_uuids_complete);
    }

    #[test]
    fn test_uri_scheme_expanded() {
        let mut bytes = alloc::vec![0x0D, ad_type::URI, 0x17];
        bytes.extend_from_slice(b"example.org");
        let data = parse_advertising_data(&bytes);
        assert_eq!(data.uri.as_deref(), Some("https:example.org"));
    }

    #[test]
    fn test_malformed_and_unknown_kept_raw() {
        let bytes = [
            0x03, 0x03, 0x0F, 0x18, // valid UUID list
            0x02, 0x19, 0x01, // appearance with one byte
            0x02, 0x42, 0x00, // unassigned type
        ];
        let data = parse_advertising_data(&bytes);
        assert_eq!(data.appearance, None);
        assert_eq!(
            data.unknown,
            [AdStructure::new(0x19, [0x01]), AdStructure::new(0x42, [0x00])]
        );
        assert_eq!(data.structures.len(), 3);
    }

    #[test]
    fn test_connection_interval_and_le_address() {
        let bytes = [
            0x05, 0x12, 0x06, 0x00, 0xFF, 0xFF, // 7.5 ms .. unspecified
            0x08, 0x1B, 0x66, 0x55, 0x44, 0x33, 0x22, 0xC1, 0x01, // random address
            0x02, 0x1C, 0x02, // LE role
        ];
        let data = parse_advertising_data(&bytes);
        assert_eq!(
            data.peripheral_connection_interval,
            Some(ConnectionIntervalRange {
                min: Some(6),
                max: None
            })
        );
        let le = data.le_device_address.unwrap();
        assert!(le.random);
        assert_eq!(le.address.to_string(), "C1:22:33:44:55:66");
        assert_eq!(data.le_role, Some(LeRole::PeripheralPreferred));
    }

    #[test]
    fn test_transport_discovery_blocks() {
        let bytes = [0x08, 0x26, 0x01, 0x02, 0x01, 0xAA, 0x02, 0x00, 0x00];
        let data = parse_advertising_data(&bytes);
        assert_eq!(
            data.transport_discovery,
            [
                TransportBlock {
                    organization_id: 0x01,
                    flags: 0x02,
                    data: alloc::vec![0xAA],
                },
                TransportBlock {
                    organization_id: 0x02,
                    flags: 0x00,
                    data: Vec::new(),
                },
            ]
        );
    }

    #[test]
    fn test_truncated_transport_block_leaves_nothing_behind() {
        // second block claims 5 bytes of data but carries none
        let bytes = [0x08, 0x26, 0x01, 0x02, 0x01, 0xAA, 0x02, 0x00, 0x05];
        let data = parse_advertising_data(&bytes);
        assert!(data.transport_discovery.is_empty());
        assert_eq!(
            data.unknown,
            [AdStructure::new(0x26, [0x01, 0x02, 0x01, 0xAA, 0x02, 0x00, 0x05])]
        );
    }

    #[test]
    fn test_service_data_in_packet_order() {
        let bytes = [
            0x05, 0x16, 0x6E, 0x2A, 0x64, 0x09, // Temperature
            0x04, 0x16, 0x19, 0x2A, 0x50, // Battery Level
            0x02, 0x16, 0x0F, // too short for a UUID
        ];
        let data = parse_advertising_data(&bytes);
        let ordered: Vec<_> = data.service_data_in_order().collect();
        assert_eq!(
            ordered,
            [
                (BluetoothUuid::from_u16(0x2A6E), &[0x64, 0x09][..]),
                (BluetoothUuid::from_u16(0x2A19), &[0x50][..]),
            ]
        );
    }

    #[test]
    fn test_full_pdu() {
        let mut raw = alloc::vec![0x42, 13];
        raw.extend_from_slice(&[0x66, 0x55, 0x44, 0x33, 0x22, 0x11]);
        raw.extend_from_slice(&[0x02, 0x01, 0x06, 0x03, 0x08, b'h', b'i']);
        let data = parse_advertising_payloads(&raw).unwrap();
        assert_eq!(data.pdu.unwrap().pdu_type, PduType::AdvNonconnInd);
        assert_eq!(data.advertiser_address.unwrap().to_string(), "11:22:33:44:55:66");
        assert_eq!(data.local_name.as_deref(), Some("hi"));
        assert!(!data.name_is_complete);
        assert_eq!(data.raw, raw);
    }

    #[test]
    fn test_error_display() {
        let mut err = AdvertisingParseError::new(ParseErrorKind::ParseError, "too short");
        assert_eq!(err.to_string(), "too short");
        err.characteristic = Some("Battery Level");
        assert_eq!(err.to_string(), "Battery Level: too short");
        assert_eq!(err.kind.status(), InterpretationStatus::ParseError);
    }
}
