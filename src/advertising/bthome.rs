//! BTHome v2 service data
//!
//! Layout of the service data under UUID `0xFCD2`:
//! - device information byte: bit 0 encryption, bit 2 trigger based,
//!   bits 5-7 format version
//! - objects, each an object id followed by a value whose size the id fixes
//!
//! Encrypted payloads end with a 4-byte counter and a 4-byte MIC. The AES-CCM
//! decryption itself is left to a [`PayloadDecryptor`].

use super::interpreter::PayloadInterpreter;
use super::state::{DeviceAdvertisingState, InterpretationResult, InterpretedPayload, StateDelta};
use super::{AdvertisingData, AdvertisingParseError, ParseErrorKind};
use crate::codec::{ByteReader, decode_utf8};
use crate::error::CodecError;
use crate::uuid::BluetoothUuid;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Service data UUID of BTHome
pub const BTHOME_UUID: BluetoothUuid = BluetoothUuid::from_u16(0xFCD2);

const SUPPORTED_VERSION: u8 = 2;
const COUNTER_LEN: usize = 4;
const MIC_LEN: usize = 4;
const PACKET_ID: u8 = 0x00;

/// Value of one measurement
#[derive(Debug, Clone, PartialEq)]
pub enum MeasurementValue {
    /// Scaled sensor reading
    Number(f64),
    /// Binary sensor state
    Bool(bool),
    /// Text object
    Text(String),
    /// Raw object or event bytes
    Raw(Vec<u8>),
}

/// One decoded object
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Object id
    pub object_id: u8,
    /// Object name
    pub name: &'static str,
    /// Decoded value
    pub value: MeasurementValue,
    /// Unit symbol
    pub unit: Option<&'static str>,
}

/// A decoded BTHome packet
#[derive(Debug, Clone, PartialEq)]
pub struct BtHomePacket {
    /// The payload was encrypted
    pub encrypted: bool,
    /// The device sends on events rather than periodically
    pub trigger_based: bool,
    /// Packet id object, if present
    pub packet_id: Option<u8>,
    /// Objects in payload order, the packet id excluded
    pub measurements: Vec<Measurement>,
}

/// Inputs of one AES-CCM decryption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecryptionRequest<'a> {
    /// Device bindkey
    pub bindkey: &'a [u8; 16],
    /// Address (6 bytes, most significant first), UUID, device info, counter
    pub nonce: [u8; 13],
    /// Encrypted objects
    pub ciphertext: &'a [u8],
    /// Message integrity check
    pub mic: [u8; 4],
}

/// AES-CCM provider for encrypted payloads
pub trait PayloadDecryptor {
    /// Decrypt and authenticate; `None` when the MIC does not verify
    fn decrypt(&self, request: &DecryptionRequest<'_>) -> Option<Vec<u8>>;
}

#[derive(Debug, Clone, Copy)]
enum Encoding {
    Unsigned(usize),
    Signed(usize),
    Binary,
    Text,
    Raw,
    Fixed(usize),
}

#[derive(Debug, Clone, Copy)]
enum Scale {
    Divide(f64),
    Multiply(f64),
}

#[derive(Debug, Clone, Copy)]
struct ObjectSpec {
    id: u8,
    name: &'static str,
    encoding: Encoding,
    scale: Scale,
    unit: Option<&'static str>,
}

const fn uint(
    id: u8,
    name: &'static str,
    width: usize,
    divisor: f64,
    unit: &'static str,
) -> ObjectSpec {
    ObjectSpec {
        id,
        name,
        encoding: Encoding::Unsigned(width),
        scale: Scale::Divide(divisor),
        unit: if unit.is_empty() { None } else { Some(unit) },
    }
}

const fn sint(
    id: u8,
    name: &'static str,
    width: usize,
    divisor: f64,
    unit: &'static str,
) -> ObjectSpec {
    ObjectSpec {
        encoding: Encoding::Signed(width),
        ..uint(id, name, width, divisor, unit)
    }
}

const fn binary(id: u8, name: &'static str) -> ObjectSpec {
    ObjectSpec {
        encoding: Encoding::Binary,
        ..uint(id, name, 1, 1.0, "")
    }
}

const fn bytes(id: u8, name: &'static str, encoding: Encoding) -> ObjectSpec {
    ObjectSpec {
        encoding,
        ..uint(id, name, 0, 1.0, "")
    }
}

/// Object table, sorted by id
static OBJECTS: &[ObjectSpec] = &[
    uint(0x00, "packet id", 1, 1.0, ""),
    uint(0x01, "battery", 1, 1.0, "%"),
    sint(0x02, "temperature", 2, 100.0, "°C"),
    uint(0x03, "humidity", 2, 100.0, "%"),
    uint(0x04, "pressure", 3, 100.0, "hPa"),
    uint(0x05, "illuminance", 3, 100.0, "lx"),
    uint(0x06, "mass", 2, 100.0, "kg"),
    uint(0x07, "mass", 2, 100.0, "lb"),
    sint(0x08, "dew point", 2, 100.0, "°C"),
    uint(0x09, "count", 1, 1.0, ""),
    uint(0x0A, "energy", 3, 1000.0, "kWh"),
    uint(0x0B, "power", 3, 100.0, "W"),
    uint(0x0C, "voltage", 2, 1000.0, "V"),
    uint(0x0D, "pm2.5", 2, 1.0, "µg/m³"),
    uint(0x0E, "pm10", 2, 1.0, "µg/m³"),
    binary(0x0F, "generic boolean"),
    binary(0x10, "power"),
    binary(0x11, "opening"),
    uint(0x12, "co2", 2, 1.0, "ppm"),
    uint(0x13, "tvoc", 2, 1.0, "µg/m³"),
    uint(0x14, "moisture", 2, 100.0, "%"),
    binary(0x15, "battery"),
    binary(0x16, "battery charging"),
    binary(0x17, "carbon monoxide"),
    binary(0x18, "cold"),
    binary(0x19, "connectivity"),
    binary(0x1A, "door"),
    binary(0x1B, "garage door"),
    binary(0x1C, "gas"),
    binary(0x1D, "heat"),
    binary(0x1E, "light"),
    binary(0x1F, "lock"),
    binary(0x20, "moisture"),
    binary(0x21, "motion"),
    binary(0x22, "moving"),
    binary(0x23, "occupancy"),
    binary(0x24, "plug"),
    binary(0x25, "presence"),
    binary(0x26, "problem"),
    binary(0x27, "running"),
    binary(0x28, "safety"),
    binary(0x29, "smoke"),
    binary(0x2A, "sound"),
    binary(0x2B, "tamper"),
    binary(0x2C, "vibration"),
    binary(0x2D, "window"),
    uint(0x2E, "humidity", 1, 1.0, "%"),
    uint(0x2F, "moisture", 1, 1.0, "%"),
    bytes(0x3A, "button", Encoding::Fixed(1)),
    bytes(0x3C, "dimmer", Encoding::Fixed(2)),
    uint(0x3D, "count", 2, 1.0, ""),
    uint(0x3E, "count", 4, 1.0, ""),
    sint(0x3F, "rotation", 2, 10.0, "°"),
    uint(0x40, "distance", 2, 1.0, "mm"),
    uint(0x41, "distance", 2, 10.0, "m"),
    uint(0x42, "duration", 3, 1000.0, "s"),
    uint(0x43, "current", 2, 1000.0, "A"),
    uint(0x44, "speed", 2, 100.0, "m/s"),
    sint(0x45, "temperature", 2, 10.0, "°C"),
    uint(0x46, "uv index", 1, 10.0, ""),
    uint(0x47, "volume", 2, 10.0, "L"),
    uint(0x48, "volume", 2, 1.0, "mL"),
    uint(0x49, "volume flow rate", 2, 1000.0, "m³/h"),
    uint(0x4A, "voltage", 2, 10.0, "V"),
    uint(0x4B, "gas", 3, 1000.0, "m³"),
    uint(0x4C, "gas", 4, 1000.0, "m³"),
    uint(0x4D, "energy", 4, 1000.0, "kWh"),
    uint(0x4E, "volume", 4, 1000.0, "L"),
    uint(0x4F, "water", 4, 1000.0, "L"),
    uint(0x50, "timestamp", 4, 1.0, "s"),
    uint(0x51, "acceleration", 2, 1000.0, "m/s²"),
    uint(0x52, "gyroscope", 2, 1000.0, "°/s"),
    bytes(0x53, "text", Encoding::Text),
    bytes(0x54, "raw", Encoding::Raw),
    uint(0x55, "volume storage", 4, 1000.0, "L"),
    uint(0x56, "conductivity", 2, 1.0, "µS/cm"),
    sint(0x57, "temperature", 1, 1.0, "°C"),
    ObjectSpec {
        scale: Scale::Multiply(0.35),
        ..sint(0x58, "temperature", 1, 1.0, "°C")
    },
    sint(0x59, "count", 1, 1.0, ""),
    sint(0x5A, "count", 2, 1.0, ""),
    sint(0x5B, "count", 4, 1.0, ""),
    sint(0x5C, "power", 4, 100.0, "W"),
    sint(0x5D, "current", 2, 1000.0, "A"),
    uint(0x5E, "direction", 2, 100.0, "°"),
    uint(0x5F, "precipitation", 2, 10.0, "mm"),
    uint(0x60, "channel", 1, 1.0, ""),
    uint(0xF0, "device type id", 2, 1.0, ""),
    uint(0xF1, "firmware version", 4, 1.0, ""),
    uint(0xF2, "firmware version", 3, 1.0, ""),
];

fn object_spec(id: u8) -> Option<&'static ObjectSpec> {
    OBJECTS
        .binary_search_by_key(&id, |spec| spec.id)
        .ok()
        .map(|index| &OBJECTS[index])
}

#[allow(clippy::cast_precision_loss)]
fn read_object(
    reader: &mut ByteReader<'_>,
    spec: &ObjectSpec,
) -> Result<MeasurementValue, CodecError> {
    let raw = match spec.encoding {
        Encoding::Unsigned(width) => {
            crate::codec::decode_unsigned(reader.read_bytes(width)?, 0, width)? as f64
        }
        Encoding::Signed(width) => {
            crate::codec::decode_signed(reader.read_bytes(width)?, 0, width)? as f64
        }
        Encoding::Binary => return Ok(MeasurementValue::Bool(reader.read_u8()? != 0)),
        Encoding::Text => {
            let len = usize::from(reader.read_u8()?);
            return Ok(MeasurementValue::Text(decode_utf8(reader.read_bytes(len)?)?));
        }
        Encoding::Raw => {
            let len = usize::from(reader.read_u8()?);
            return Ok(MeasurementValue::Raw(reader.read_bytes(len)?.to_vec()));
        }
        Encoding::Fixed(len) => {
            return Ok(MeasurementValue::Raw(reader.read_bytes(len)?.to_vec()));
        }
    };
    Ok(MeasurementValue::Number(match spec.scale {
        Scale::Divide(divisor) => raw / divisor,
        Scale::Multiply(factor) => raw * factor,
    }))
}

/// Decode a sequence of objects
///
/// # Errors
///
/// Returns [`CodecError::Reserved`] for an unknown object id, whose size
/// cannot be known, and [`CodecError::InsufficientData`] for a truncated object.
pub fn parse_objects(data: &[u8]) -> Result<(Option<u8>, Vec<Measurement>), CodecError> {
    let mut reader = ByteReader::new(data);
    let mut packet_id = None;
    let mut measurements = Vec::new();
    while !reader.is_empty() {
        let object_id = reader.read_u8()?;
        let spec = object_spec(object_id).ok_or(CodecError::Reserved {
            field: "BTHome object id",
            value: u32::from(object_id),
        })?;
        let value = read_object(&mut reader, spec)?;
        if object_id == PACKET_ID {
            if let MeasurementValue::Number(id) = value {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let id = id as u8;
                packet_id = Some(id);
            }
            continue;
        }
        measurements.push(Measurement {
            object_id,
            name: spec.name,
            value,
            unit: spec.unit,
        });
    }
    Ok((packet_id, measurements))
}

/// Interpreter for BTHome v2 advertisements
#[derive(Default)]
pub struct BtHomeInterpreter<'d> {
    decryptor: Option<&'d dyn PayloadDecryptor>,
}

impl<'d> BtHomeInterpreter<'d> {
    /// Interpreter for unencrypted payloads
    #[must_use]
    pub const fn new() -> Self {
        Self { decryptor: None }
    }

    /// Interpreter that decrypts through `decryptor`
    #[must_use]
    pub const fn with_decryptor(decryptor: &'d dyn PayloadDecryptor) -> Self {
        Self {
            decryptor: Some(decryptor),
        }
    }
}

fn failure(
    kind: ParseErrorKind,
    message: impl Into<String>,
    payload: &[u8],
    updated: StateDelta,
) -> InterpretationResult {
    InterpretationResult::failure(
        AdvertisingParseError::new(kind, message).with_payload(payload),
        updated,
    )
}

impl PayloadInterpreter for BtHomeInterpreter<'_> {
    fn name(&self) -> &'static str {
        "BTHome"
    }

    fn supports(&self, data: &AdvertisingData) -> bool {
        data.service_data.contains_key(&BTHOME_UUID)
    }

    fn interpret(
        &self,
        data: &AdvertisingData,
        state: &DeviceAdvertisingState,
    ) -> InterpretationResult {
        let payload = data
            .service_data
            .get(&BTHOME_UUID)
            .map_or(&[][..], Vec::as_slice);
        let Some((&device_info, body)) = payload.split_first() else {
            return failure(
                ParseErrorKind::ParseError,
                "no BTHome service data",
                payload,
                StateDelta::default(),
            );
        };

        let version = device_info >> 5;
        if version != SUPPORTED_VERSION {
            return failure(
                ParseErrorKind::UnsupportedVersion,
                format!("BTHome version {version} is not supported"),
                payload,
                StateDelta::default(),
            );
        }
        let encrypted = device_info & 0x01 != 0;
        let trigger_based = device_info & 0x04 != 0;

        let mut updated = StateDelta::default();
        let decrypted;
        let objects = if encrypted {
            let Some(bindkey) = state.encryption.bindkey.as_ref() else {
                return failure(
                    ParseErrorKind::EncryptionRequired,
                    "encrypted payload without bindkey",
                    payload,
                    StateDelta::default(),
                );
            };
            let Some(decryptor) = self.decryptor else {
                return failure(
                    ParseErrorKind::EncryptionRequired,
                    "encrypted payload but no decryptor is configured",
                    payload,
                    StateDelta::default(),
                );
            };
            if body.len() < COUNTER_LEN + MIC_LEN {
                return failure(
                    ParseErrorKind::ParseError,
                    CodecError::insufficient(1 + COUNTER_LEN + MIC_LEN, payload.len()).to_string(),
                    payload,
                    StateDelta::default(),
                );
            }
            let Some(address) = data.advertiser_address.or(state.address) else {
                return failure(
                    ParseErrorKind::ParseError,
                    "advertiser address needed to decrypt",
                    payload,
                    StateDelta::default(),
                );
            };

            let (ciphertext, trailer) = body.split_at(body.len() - COUNTER_LEN - MIC_LEN);
            let mut counter_bytes = [0u8; COUNTER_LEN];
            counter_bytes.copy_from_slice(&trailer[..COUNTER_LEN]);
            let counter = u32::from_le_bytes(counter_bytes);
            if let Some(last) = state.encryption.encryption_counter {
                if counter <= last {
                    return failure(
                        ParseErrorKind::ReplayDetected,
                        format!("counter {counter} does not advance past {last}"),
                        payload,
                        StateDelta::default(),
                    );
                }
            }

            let mut nonce = [0u8; 13];
            nonce[..6].copy_from_slice(address.as_bytes());
            nonce[6..8].copy_from_slice(&0xFCD2u16.to_le_bytes());
            nonce[8] = device_info;
            nonce[9..].copy_from_slice(&counter_bytes);
            let mut mic = [0u8; MIC_LEN];
            mic.copy_from_slice(&trailer[COUNTER_LEN..]);

            let request = DecryptionRequest {
                bindkey,
                nonce,
                ciphertext,
                mic,
            };
            let Some(plain) = decryptor.decrypt(&request) else {
                warn!("BTHome payload of {} failed to authenticate", address);
                return failure(
                    ParseErrorKind::DecryptionFailed,
                    "bindkey did not authenticate the payload",
                    payload,
                    StateDelta {
                        bindkey_verified: Some(false),
                        last_decryption_failed: Some(true),
                        ..StateDelta::default()
                    },
                );
            };
            updated.encryption_counter = Some(counter);
            updated.bindkey_verified = Some(true);
            updated.last_decryption_failed = Some(false);
            decrypted = plain;
            decrypted.as_slice()
        } else {
            body
        };

        let (packet_id, measurements) = match parse_objects(objects) {
            Ok(parsed) => parsed,
            Err(err) => {
                return failure(ParseErrorKind::ParseError, err.to_string(), payload, updated);
            }
        };
        if let Some(id) = packet_id {
            if state.packet.last_packet_id == Some(id) {
                return failure(
                    ParseErrorKind::DuplicatePacket,
                    format!("packet id {id} already seen"),
                    payload,
                    updated,
                );
            }
            updated.last_packet_id = Some(id);
        }
        updated.last_seen = data.timestamp;
        trace!("decoded {} BTHome objects", measurements.len());

        InterpretationResult::success(
            InterpretedPayload::BtHome(BtHomePacket {
                encrypted,
                trigger_based,
                packet_id,
                measurements,
            }),
            updated,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::BluetoothAddress;
    use crate::advertising::InterpretationStatus;

    fn advertisement(service_data: &[u8]) -> AdvertisingData {
        let len = u8::try_from(service_data.len() + 3).unwrap();
        let mut bytes = alloc::vec![len, 0x16, 0xD2, 0xFC];
        bytes.extend_from_slice(service_data);
        AdvertisingData::from_ad_bytes(&bytes)
    }

    fn packet(result: &InterpretationResult) -> &BtHomePacket {
        match &result.payload {
            Some(InterpretedPayload::BtHome(packet)) => packet,
            other => panic!("unexpected payload {other:?}"),
        }
    }

    /// XORs with the first key byte and accepts when the MIC equals the counter
    struct XorDecryptor;

    impl PayloadDecryptor for XorDecryptor {
        fn decrypt(&self, request: &DecryptionRequest<'_>) -> Option<Vec<u8>> {
            (request.mic == request.nonce[9..13]).then(|| {
                request
                    .ciphertext
                    .iter()
                    .map(|byte| byte ^ request.bindkey[0])
                    .collect()
            })
        }
    }

    #[test]
    fn test_object_table_sorted() {
        for pair in OBJECTS.windows(2) {
            assert!(pair[0].id < pair[1].id, "0x{:02X} out of order", pair[1].id);
        }
        assert_eq!(object_spec(0x02).map(|spec| spec.name), Some("temperature"));
        assert!(object_spec(0x70).is_none());
    }

    #[test]
    fn test_plain_measurements() {
        // packet id 9, battery 97 %, temperature 23.45 °C, door open
        let data = advertisement(&[0x40, 0x00, 0x09, 0x01, 0x61, 0x02, 0x29, 0x09, 0x1A, 0x01]);
        let interpreter = BtHomeInterpreter::new();
        assert!(interpreter.supports(&data));

        let result = interpreter.interpret(&data, &DeviceAdvertisingState::default());
        assert!(result.is_success());
        let packet = packet(&result);
        assert!(!packet.encrypted);
        assert_eq!(packet.packet_id, Some(9));
        assert_eq!(packet.measurements.len(), 3);
        assert_eq!(packet.measurements[0].value, MeasurementValue::Number(97.0));
        assert_eq!(packet.measurements[0].unit, Some("%"));
        assert_eq!(packet.measurements[1].value, MeasurementValue::Number(23.45));
        assert_eq!(packet.measurements[2].name, "door");
        assert_eq!(packet.measurements[2].value, MeasurementValue::Bool(true));
        assert_eq!(result.updated.last_packet_id, Some(9));
    }

    #[test]
    fn test_duplicate_packet_id() {
        let data = advertisement(&[0x40, 0x00, 0x09, 0x01, 0x61]);
        let mut state = DeviceAdvertisingState::default();
        state.packet.last_packet_id = Some(9);
        let result = BtHomeInterpreter::new().interpret(&data, &state);
        assert_eq!(result.status, InterpretationStatus::DuplicatePacket);
    }

    #[test]
    fn test_unsupported_version() {
        let data = advertisement(&[0x20, 0x01, 0x61]);
        let result = BtHomeInterpreter::new().interpret(&data, &DeviceAdvertisingState::default());
        assert_eq!(result.status, InterpretationStatus::UnsupportedVersion);
    }

    #[test]
    fn test_unknown_object_is_parse_error() {
        let data = advertisement(&[0x40, 0x01, 0x61, 0x70, 0x00]);
        let result = BtHomeInterpreter::new().interpret(&data, &DeviceAdvertisingState::default());
        assert_eq!(result.status, InterpretationStatus::ParseError);
    }

    #[test]
    fn test_encryption_required() {
        let data = advertisement(&[0x41, 0xAA, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]);
        let result = BtHomeInterpreter::with_decryptor(&XorDecryptor)
            .interpret(&data, &DeviceAdvertisingState::default());
        assert_eq!(result.status, InterpretationStatus::EncryptionRequired);
        assert!(result.error.unwrap().message.contains("without bindkey"));
    }

    #[test]
    fn test_encryption_without_decryptor() {
        let data = advertisement(&[0x41, 0xAA, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00]);
        let state = DeviceAdvertisingState::default().with_bindkey([0x0F; 16]);
        let result = BtHomeInterpreter::new().interpret(&data, &state);
        assert_eq!(result.status, InterpretationStatus::EncryptionRequired);
        let message = result.error.unwrap().message;
        assert!(message.contains("no decryptor"), "{message}");
        assert!(!message.contains("bindkey"));
        assert!(result.updated.is_empty());
    }

    #[test]
    fn test_encrypted_flow() {
        let decryptor = XorDecryptor;
        let interpreter = BtHomeInterpreter::with_decryptor(&decryptor);
        let address = BluetoothAddress::new([0xA4, 0xC1, 0x38, 0x00, 0x00, 0x01]);
        let mut state = DeviceAdvertisingState::new(address).with_bindkey([0x0F; 16]);
        state.encryption.encryption_counter = Some(5);

        // battery 0x61 encrypted as 0x01 ^ 0x0F, 0x61 ^ 0x0F; counter 6
        let valid = [0x41, 0x0E, 0x6E, 0x06, 0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00];
        let result = interpreter.interpret(&advertisement(&valid), &state);
        assert!(result.is_success());
        assert!(packet(&result).encrypted);
        assert_eq!(packet(&result).measurements[0].value, MeasurementValue::Number(97.0));
        assert_eq!(result.updated.encryption_counter, Some(6));
        assert_eq!(result.updated.bindkey_verified, Some(true));
        result.apply_to_state(&mut state);
        assert_eq!(state.encryption.encryption_counter, Some(6));

        let replay = interpreter.interpret(&advertisement(&valid), &state);
        assert_eq!(replay.status, InterpretationStatus::ReplayDetected);

        let forged = [0x41, 0x0E, 0x6E, 0x07, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00];
        let failed = interpreter.interpret(&advertisement(&forged), &state);
        assert_eq!(failed.status, InterpretationStatus::DecryptionFailed);
        assert_eq!(failed.updated.last_decryption_failed, Some(true));
        assert_eq!(failed.updated.bindkey_verified, Some(false));
        assert_eq!(failed.updated.encryption_counter, None);
    }
}
