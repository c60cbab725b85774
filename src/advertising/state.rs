//! Caller-owned device state and interpreter results
//!
//! Interpreters never keep state between calls. They read a
//! [`DeviceAdvertisingState`] and describe the changes they want in a
//! [`StateDelta`]; only the fields set to `Some` are written back.

use super::AdvertisingParseError;
use super::bthome::BtHomePacket;
use crate::address::BluetoothAddress;
use crate::characteristic::{CharacteristicInfo, CharacteristicValue, CustomValue, Decoded};
use crate::uuid::BluetoothUuid;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Encryption bookkeeping of one device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncryptionState {
    /// Pre-shared key for encrypted payloads
    pub bindkey: Option<[u8; 16]>,
    /// The bindkey authenticated at least one payload
    pub bindkey_verified: bool,
    /// Last accepted encryption counter
    pub encryption_counter: Option<u32>,
    /// The latest decryption attempt failed
    pub last_decryption_failed: bool,
}

/// Packet bookkeeping of one device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PacketState {
    /// Packet id of the last accepted packet
    pub last_packet_id: Option<u8>,
    /// Timestamp of the last accepted packet
    pub last_seen: Option<u64>,
    /// Hash of the last accepted service data
    pub last_service_data_hash: Option<u32>,
}

/// Everything an interpreter may consult about a device
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceAdvertisingState {
    /// Device address
    pub address: Option<BluetoothAddress>,
    /// Encryption bookkeeping
    pub encryption: EncryptionState,
    /// Packet bookkeeping
    pub packet: PacketState,
}

impl DeviceAdvertisingState {
    /// Fresh state for a device
    #[must_use]
    pub fn new(address: BluetoothAddress) -> Self {
        Self {
            address: Some(address),
            ..Self::default()
        }
    }

    /// Provide the bindkey for encrypted payloads
    #[must_use]
    pub const fn with_bindkey(mut self, bindkey: [u8; 16]) -> Self {
        self.encryption.bindkey = Some(bindkey);
        self
    }
}

/// Changes an interpreter asks the caller to make
///
/// `None` leaves the corresponding field untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StateDelta {
    /// New value of [`EncryptionState::bindkey_verified`]
    pub bindkey_verified: Option<bool>,
    /// New value of [`EncryptionState::encryption_counter`]
    pub encryption_counter: Option<u32>,
    /// New value of [`EncryptionState::last_decryption_failed`]
    pub last_decryption_failed: Option<bool>,
    /// New value of [`PacketState::last_packet_id`]
    pub last_packet_id: Option<u8>,
    /// New value of [`PacketState::last_seen`]
    pub last_seen: Option<u64>,
    /// New value of [`PacketState::last_service_data_hash`]
    pub last_service_data_hash: Option<u32>,
}

impl StateDelta {
    /// Whether the delta changes nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Write the `Some` fields into `state`
    pub fn apply(&self, state: &mut DeviceAdvertisingState) {
        if let Some(verified) = self.bindkey_verified {
            state.encryption.bindkey_verified = verified;
        }
        if let Some(counter) = self.encryption_counter {
            state.encryption.encryption_counter = Some(counter);
        }
        if let Some(failed) = self.last_decryption_failed {
            state.encryption.last_decryption_failed = failed;
        }
        if let Some(id) = self.last_packet_id {
            state.packet.last_packet_id = Some(id);
        }
        if let Some(seen) = self.last_seen {
            state.packet.last_seen = Some(seen);
        }
        if let Some(hash) = self.last_service_data_hash {
            state.packet.last_service_data_hash = Some(hash);
        }
    }
}

/// Outcome category of an interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterpretationStatus {
    /// A payload was produced
    Success,
    /// Encrypted payload, no bindkey
    EncryptionRequired,
    /// The bindkey did not authenticate the payload
    DecryptionFailed,
    /// The encryption counter did not advance
    ReplayDetected,
    /// Same packet as last time
    DuplicatePacket,
    /// Malformed payload
    ParseError,
    /// Unknown format version
    UnsupportedVersion,
}

/// Data produced by an interpreter
#[derive(Debug, Clone, PartialEq)]
pub enum InterpretedPayload {
    /// A SIG or registered characteristic carried as service data
    Characteristic {
        /// Service data UUID
        uuid: BluetoothUuid,
        /// Metadata of the codec
        info: CharacteristicInfo,
        /// Decoded value
        value: Decoded<CharacteristicValue>,
    },
    /// A BTHome v2 packet
    BtHome(BtHomePacket),
    /// Output of an application interpreter
    Custom(CustomValue),
}

/// Result of one interpreter run
///
/// `payload` is set exactly when `status` is [`InterpretationStatus::Success`]
/// and `error` exactly when it is not.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpretationResult {
    /// Outcome category
    pub status: InterpretationStatus,
    /// Decoded payload
    pub payload: Option<InterpretedPayload>,
    /// State changes to apply
    pub updated: StateDelta,
    /// Failure details
    pub error: Option<AdvertisingParseError>,
    /// Non-fatal remarks
    pub warnings: Vec<String>,
}

impl InterpretationResult {
    /// A successful run
    #[must_use]
    pub const fn success(payload: InterpretedPayload, updated: StateDelta) -> Self {
        Self {
            status: InterpretationStatus::Success,
            payload: Some(payload),
            updated,
            error: None,
            warnings: Vec::new(),
        }
    }

    /// A failed run; the status follows the error kind
    #[must_use]
    pub const fn failure(error: AdvertisingParseError, updated: StateDelta) -> Self {
        Self {
            status: error.kind.status(),
            payload: None,
            updated,
            error: Some(error),
            warnings: Vec::new(),
        }
    }

    /// Add a non-fatal remark
    #[must_use]
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Whether a payload was produced
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, InterpretationStatus::Success)
    }

    /// Apply [`Self::updated`] to the caller's state
    pub fn apply_to_state(&self, state: &mut DeviceAdvertisingState) {
        self.updated.apply(state);
    }

    /// Failure description
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advertising::ParseErrorKind;

    #[test]
    fn test_apply_touches_only_set_fields() {
        let mut state = DeviceAdvertisingState::default().with_bindkey([0x11; 16]);
        state.encryption.encryption_counter = Some(7);
        state.packet.last_packet_id = Some(3);

        let delta = StateDelta {
            bindkey_verified: Some(true),
            last_seen: Some(1000),
            ..StateDelta::default()
        };
        delta.apply(&mut state);

        assert!(state.encryption.bindkey_verified);
        assert_eq!(state.encryption.bindkey, Some([0x11; 16]));
        assert_eq!(state.encryption.encryption_counter, Some(7));
        assert_eq!(state.packet.last_packet_id, Some(3));
        assert_eq!(state.packet.last_seen, Some(1000));
        assert_eq!(state.packet.last_service_data_hash, None);
    }

    #[test]
    fn test_empty_delta_is_noop() {
        let mut state = DeviceAdvertisingState::default();
        state.packet.last_seen = Some(5);
        let before = state;
        let delta = StateDelta::default();
        assert!(delta.is_empty());
        delta.apply(&mut state);
        assert_eq!(state, before);
    }

    #[test]
    fn test_failure_status_follows_kind() {
        let result = InterpretationResult::failure(
            AdvertisingParseError::new(ParseErrorKind::ReplayDetected, "counter 4 <= 9"),
            StateDelta::default(),
        );
        assert_eq!(result.status, InterpretationStatus::ReplayDetected);
        assert!(!result.is_success());
        assert!(result.payload.is_none());
        assert_eq!(result.error_message().as_deref(), Some("counter 4 <= 9"));
    }
}
