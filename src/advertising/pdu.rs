//! Link layer advertising PDUs
//!
//! A PDU starts with a 2-byte header: the PDU type in bits 0-3, ChSel in
//! bit 5, TxAdd in bit 6, RxAdd in bit 7, then the payload length. The
//! layout of the payload depends on the PDU type. `ADV_EXT_IND` carries the
//! Common Extended Advertising Payload, whose extended header fields are
//! each present only when their flag bit is set.

use crate::address::BluetoothAddress;
use crate::codec::ByteReader;
use crate::error::CodecError;
use alloc::vec::Vec;

sig_enum! {
    /// Advertising channel PDU type
    pub enum PduType: u8 {
        /// Connectable and scannable undirected
        AdvInd = 0,
        /// Connectable directed
        AdvDirectInd = 1,
        /// Non-connectable and non-scannable undirected
        AdvNonconnInd = 2,
        /// Scan request
        ScanReq = 3,
        /// Scan response
        ScanRsp = 4,
        /// Connection request
        ConnectInd = 5,
        /// Scannable undirected
        AdvScanInd = 6,
        /// Extended advertising indication
        AdvExtInd = 7,
    }
}

sig_enum! {
    /// Advertising mode of an extended advertising PDU
    pub enum AdvMode: u8 {
        /// Neither connectable nor scannable
        NonConnectableNonScannable = 0,
        /// Connectable
        Connectable = 1,
        /// Scannable
        Scannable = 2,
    }
}

/// The 2-byte PDU header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PduHeader {
    /// PDU type
    pub pdu_type: PduType,
    /// Channel selection algorithm #2 supported
    pub ch_sel: bool,
    /// Advertiser (or scanner/initiator) address is random
    pub tx_add: bool,
    /// Target address is random
    pub rx_add: bool,
    /// Payload length
    pub length: u8,
}

impl PduHeader {
    /// Decode the header bytes
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self {
            pdu_type: PduType::from_raw(bytes[0] & 0x0F),
            ch_sel: bytes[0] & 0x20 != 0,
            tx_add: bytes[0] & 0x40 != 0,
            rx_add: bytes[0] & 0x80 != 0,
            length: bytes[1],
        }
    }
}

/// Advertising Data Info
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Adi {
    /// Advertising Data ID (12 bits)
    pub did: u16,
    /// Advertising Set ID (4 bits)
    pub sid: u8,
}

/// Constant Tone Extension info
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CteInfo {
    /// CTE length in 8 µs units
    pub time: u8,
    /// CTE type (AoA, AoD 1 µs, AoD 2 µs)
    pub cte_type: u8,
}

/// Pointer to the auxiliary PDU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AuxPtr {
    /// Channel index of the auxiliary packet
    pub channel_index: u8,
    /// Clock accuracy: `true` for 0-50 ppm, `false` for 51-500 ppm
    pub clock_accuracy_50ppm: bool,
    /// Offset unit is 300 µs instead of 30 µs
    pub offset_units_300us: bool,
    /// Offset in offset units (13 bits)
    pub aux_offset: u16,
    /// PHY of the auxiliary packet (0 = 1M, 1 = 2M, 2 = Coded)
    pub aux_phy: u8,
}

impl AuxPtr {
    /// Offset of the auxiliary packet in microseconds
    #[must_use]
    pub const fn offset_us(&self) -> u32 {
        let unit = if self.offset_units_300us { 300 } else { 30 };
        self.aux_offset as u32 * unit
    }
}

/// Periodic advertising synchronization info
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SyncInfo {
    /// Offset to the periodic packet in offset units (13 bits)
    pub offset: u16,
    /// Offset unit is 300 µs instead of 30 µs
    pub offset_units_300us: bool,
    /// Add 2.4576 s to the offset
    pub offset_adjust: bool,
    /// Periodic advertising interval in 1.25 ms units
    pub interval: u16,
    /// Used data channels (37 bits)
    pub channel_map: [u8; 5],
    /// Sleep clock accuracy code (3 bits)
    pub sleep_clock_accuracy: u8,
    /// Access address of the periodic train
    pub access_address: u32,
    /// CRC initialization value
    pub crc_init: [u8; 3],
    /// Periodic event counter
    pub event_counter: u16,
}

impl SyncInfo {
    fn parse(reader: &mut ByteReader<'_>) -> Result<Self, CodecError> {
        let offset_field = reader.read_u16()?;
        let interval = reader.read_u16()?;
        let mut channel_map: [u8; 5] = reader.read_array()?;
        let sleep_clock_accuracy = channel_map[4] >> 5;
        channel_map[4] &= 0x1F;
        Ok(Self {
            offset: offset_field & 0x1FFF,
            offset_units_300us: offset_field & 0x2000 != 0,
            offset_adjust: offset_field & 0x4000 != 0,
            interval,
            channel_map,
            sleep_clock_accuracy,
            access_address: reader.read_u32()?,
            crc_init: reader.read_array()?,
            event_counter: reader.read_u16()?,
        })
    }
}

/// Extended header of an `ADV_EXT_IND` PDU
///
/// Every optional field is `None` when its flag bit is clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedHeader {
    /// Advertising mode
    pub adv_mode: AdvMode,
    /// AdvA
    pub advertiser_address: Option<BluetoothAddress>,
    /// TargetA
    pub target_address: Option<BluetoothAddress>,
    /// CTEInfo
    pub cte_info: Option<CteInfo>,
    /// ADI
    pub adi: Option<Adi>,
    /// AuxPtr
    pub aux_ptr: Option<AuxPtr>,
    /// SyncInfo
    pub sync_info: Option<SyncInfo>,
    /// TxPower in dBm
    pub tx_power: Option<i8>,
    /// Additional Controller Advertising Data
    pub acad: Vec<u8>,
}

mod flag {
    pub const ADV_A: u8 = 0x01;
    pub const TARGET_A: u8 = 0x02;
    pub const CTE_INFO: u8 = 0x04;
    pub const ADI: u8 = 0x08;
    pub const AUX_PTR: u8 = 0x10;
    pub const SYNC_INFO: u8 = 0x20;
    pub const TX_POWER: u8 = 0x40;
}

impl ExtendedHeader {
    /// Split a Common Extended Advertising Payload into header and AdvData
    fn parse(payload: &[u8]) -> Result<(Self, &[u8]), CodecError> {
        let mut reader = ByteReader::new(payload);
        let first = reader.read_u8()?;
        let header_len = usize::from(first & 0x3F);
        let mut header = Self {
            adv_mode: AdvMode::from_raw(first >> 6),
            advertiser_address: None,
            target_address: None,
            cte_info: None,
            adi: None,
            aux_ptr: None,
            sync_info: None,
            tx_power: None,
            acad: Vec::new(),
        };
        let fields = reader.read_bytes(header_len)?;
        let adv_data = reader.read_rest();
        if fields.is_empty() {
            return Ok((header, adv_data));
        }

        let mut fields = ByteReader::new(fields);
        let flags = fields.read_u8()?;
        if flags & flag::ADV_A != 0 {
            header.advertiser_address = Some(BluetoothAddress::from_le_bytes(fields.read_array()?));
        }
        if flags & flag::TARGET_A != 0 {
            header.target_address = Some(BluetoothAddress::from_le_bytes(fields.read_array()?));
        }
        if flags & flag::CTE_INFO != 0 {
            let cte = fields.read_u8()?;
            header.cte_info = Some(CteInfo {
                time: cte & 0x1F,
                cte_type: cte >> 6,
            });
        }
        if flags & flag::ADI != 0 {
            let adi = fields.read_u16()?;
            header.adi = Some(Adi {
                did: adi & 0x0FFF,
                sid: (adi >> 12).to_le_bytes()[0],
            });
        }
        if flags & flag::AUX_PTR != 0 {
            let channel = fields.read_u8()?;
            let offset = fields.read_u16()?;
            header.aux_ptr = Some(AuxPtr {
                channel_index: channel & 0x3F,
                clock_accuracy_50ppm: channel & 0x40 != 0,
                offset_units_300us: channel & 0x80 != 0,
                aux_offset: offset & 0x1FFF,
                aux_phy: (offset >> 13).to_le_bytes()[0],
            });
        }
        if flags & flag::SYNC_INFO != 0 {
            header.sync_info = Some(SyncInfo::parse(&mut fields)?);
        }
        if flags & flag::TX_POWER != 0 {
            header.tx_power = Some(fields.read_i8()?);
        }
        header.acad = fields.read_rest().to_vec();
        Ok((header, adv_data))
    }
}

/// A decoded advertising channel PDU
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertisingPdu {
    /// Header
    pub header: PduHeader,
    /// AdvA (the advertiser, for `SCAN_REQ` and `CONNECT_IND` the addressed advertiser)
    pub advertiser_address: Option<BluetoothAddress>,
    /// TargetA, ScanA or InitA depending on the PDU type
    pub target_address: Option<BluetoothAddress>,
    /// Extended header of `ADV_EXT_IND`
    pub extended_header: Option<ExtendedHeader>,
    /// AdvData for advertising PDUs, LLData for `CONNECT_IND`, empty otherwise
    pub payload: Vec<u8>,
}

impl AdvertisingPdu {
    /// Decode a PDU starting at the header
    ///
    /// Bytes beyond the declared length (e.g. a trailing CRC) are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] when the buffer is shorter
    /// than the header, the declared length or a mandatory field, and
    /// [`CodecError::Reserved`] for a reserved PDU type.
    pub fn parse(raw: &[u8]) -> Result<Self, CodecError> {
        let mut reader = ByteReader::new(raw);
        let header = PduHeader::from_bytes(reader.read_array()?);
        let payload = reader.read_bytes(usize::from(header.length))?;
        let mut fields = ByteReader::new(payload);
        let mut pdu = Self {
            header,
            advertiser_address: None,
            target_address: None,
            extended_header: None,
            payload: Vec::new(),
        };

        match header.pdu_type {
            PduType::AdvInd | PduType::AdvNonconnInd | PduType::AdvScanInd | PduType::ScanRsp => {
                pdu.advertiser_address = Some(read_address(&mut fields)?);
                pdu.payload = fields.read_rest().to_vec();
            }
            PduType::AdvDirectInd => {
                pdu.advertiser_address = Some(read_address(&mut fields)?);
                pdu.target_address = Some(read_address(&mut fields)?);
            }
            PduType::ScanReq => {
                pdu.target_address = Some(read_address(&mut fields)?);
                pdu.advertiser_address = Some(read_address(&mut fields)?);
            }
            PduType::ConnectInd => {
                pdu.target_address = Some(read_address(&mut fields)?);
                pdu.advertiser_address = Some(read_address(&mut fields)?);
                pdu.payload = fields.read_bytes(22)?.to_vec();
            }
            PduType::AdvExtInd => {
                let (extended, adv_data) = ExtendedHeader::parse(payload)?;
                pdu.advertiser_address = extended.advertiser_address;
                pdu.target_address = extended.target_address;
                pdu.extended_header = Some(extended);
                pdu.payload = adv_data.to_vec();
            }
            PduType::Reserved(raw_type) => {
                return Err(CodecError::Reserved {
                    field: "PDU Type",
                    value: u32::from(raw_type),
                });
            }
        }
        trace!("parsed advertising PDU with {} payload bytes", pdu.payload.len());
        Ok(pdu)
    }

    /// Whether [`Self::payload`] holds AD structures
    #[must_use]
    pub const fn carries_ad_data(&self) -> bool {
        matches!(
            self.header.pdu_type,
            PduType::AdvInd
                | PduType::AdvNonconnInd
                | PduType::AdvScanInd
                | PduType::ScanRsp
                | PduType::AdvExtInd
        )
    }
}

fn read_address(reader: &mut ByteReader<'_>) -> Result<BluetoothAddress, CodecError> {
    Ok(BluetoothAddress::from_le_bytes(reader.read_array()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS_LE: [u8; 6] = [0x66, 0x55, 0x44, 0x33, 0x22, 0x11];

    #[test]
    fn test_adv_ind() {
        let mut raw = alloc::vec![0x40, 9];
        raw.extend_from_slice(&ADDRESS_LE);
        raw.extend_from_slice(&[0x02, 0x01, 0x06]);
        let pdu = AdvertisingPdu::parse(&raw).unwrap();
        assert_eq!(pdu.header.pdu_type, PduType::AdvInd);
        assert!(pdu.header.tx_add);
        assert_eq!(
            pdu.advertiser_address,
            Some(BluetoothAddress::new([0x11, 0x22, 0x33, 0x44, 0x55, 0x66]))
        );
        assert_eq!(pdu.payload, [0x02, 0x01, 0x06]);
        assert!(pdu.carries_ad_data());
    }

    #[test]
    fn test_declared_length_exceeds_buffer() {
        assert_eq!(
            AdvertisingPdu::parse(&[0x00, 9, 0x01, 0x02]),
            Err(CodecError::insufficient(11, 4))
        );
        assert!(AdvertisingPdu::parse(&[0x00]).is_err());
    }

    #[test]
    fn test_direct_ind() {
        let mut raw = alloc::vec![0x01, 12];
        raw.extend_from_slice(&ADDRESS_LE);
        raw.extend_from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
        let pdu = AdvertisingPdu::parse(&raw).unwrap();
        assert_eq!(
            pdu.target_address,
            Some(BluetoothAddress::new([0x06, 0x05, 0x04, 0x03, 0x02, 0x01]))
        );
        assert!(pdu.payload.is_empty());
        assert!(!pdu.carries_ad_data());
    }

    #[test]
    fn test_extended_header_fields_follow_flags() {
        // AdvA, ADI and TxPower present; TargetA, CTEInfo, AuxPtr, SyncInfo absent
        let mut payload = alloc::vec![0x4A, 0x49];
        payload.extend_from_slice(&ADDRESS_LE);
        payload.extend_from_slice(&[0x34, 0x52, 0xF6]);
        payload.extend_from_slice(&[0x02, 0x01, 0x06]);
        let mut raw = alloc::vec![0x07];
        raw.push(u8::try_from(payload.len()).unwrap());
        raw.extend_from_slice(&payload);

        let pdu = AdvertisingPdu::parse(&raw).unwrap();
        let header = pdu.extended_header.unwrap();
        assert_eq!(header.adv_mode, AdvMode::Connectable);
        assert!(header.advertiser_address.is_some());
        assert_eq!(header.target_address, None);
        assert_eq!(header.cte_info, None);
        assert_eq!(header.adi, Some(Adi { did: 0x234, sid: 5 }));
        assert_eq!(header.aux_ptr, None);
        assert_eq!(header.sync_info, None);
        assert_eq!(header.tx_power, Some(-10));
        assert!(header.acad.is_empty());
        assert_eq!(pdu.payload, [0x02, 0x01, 0x06]);
    }

    #[test]
    fn test_aux_pointer() {
        // header length 4: flags + AuxPtr
        let raw = [0x07, 0x05, 0x04, 0x10, 0x85, 0x64, 0x20];
        let pdu = AdvertisingPdu::parse(&raw).unwrap();
        let header = pdu.extended_header.unwrap();
        assert_eq!(header.adv_mode, AdvMode::NonConnectableNonScannable);
        let aux = header.aux_ptr.unwrap();
        assert_eq!(aux.channel_index, 5);
        assert!(aux.offset_units_300us);
        assert_eq!(aux.aux_offset, 100);
        assert_eq!(aux.aux_phy, 1);
        assert_eq!(aux.offset_us(), 30_000);
        assert!(pdu.payload.is_empty());
    }

    #[test]
    fn test_reserved_pdu_type() {
        assert!(matches!(
            AdvertisingPdu::parse(&[0x0F, 0x00]),
            Err(CodecError::Reserved { field: "PDU Type", value: 0x0F })
        ));
    }
}
