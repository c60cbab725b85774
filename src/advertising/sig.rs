//! Characteristic values broadcast as service data

use super::interpreter::{InterpreterOptions, PayloadInterpreter};
use super::state::{DeviceAdvertisingState, InterpretationResult, InterpretedPayload, StateDelta};
use super::{AdvertisingData, AdvertisingParseError, ParseErrorKind};
use crate::characteristic::ParseContext;
use crate::registry::CharacteristicRegistry;
use crate::uuid::BluetoothUuid;
use alloc::string::ToString;
use core::hash::Hasher as _;
use hash32::Hasher as _;

/// Decodes service data whose UUID has a characteristic codec
///
/// The first resolving UUID in packet order is decoded with validation
/// off. Failures are not retried with other UUIDs.
pub struct SigCharacteristicInterpreter<'r> {
    registry: &'r CharacteristicRegistry,
    options: InterpreterOptions,
}

impl<'r> SigCharacteristicInterpreter<'r> {
    /// Interpreter resolving UUIDs through `registry`
    #[must_use]
    pub const fn new(registry: &'r CharacteristicRegistry, options: InterpreterOptions) -> Self {
        Self { registry, options }
    }
}

/// FNV-1a over the UUID and the payload
fn service_data_hash(uuid: &BluetoothUuid, payload: &[u8]) -> u32 {
    let mut hasher = hash32::FnvHasher::default();
    hasher.write(&uuid.as_u128().to_le_bytes());
    hasher.write(payload);
    hasher.finish32()
}

impl PayloadInterpreter for SigCharacteristicInterpreter<'_> {
    fn name(&self) -> &'static str {
        "SIG characteristic"
    }

    fn supports(&self, data: &AdvertisingData) -> bool {
        data.service_data_in_order()
            .any(|(uuid, _)| self.registry.is_registered(&uuid))
    }

    fn interpret(
        &self,
        data: &AdvertisingData,
        state: &DeviceAdvertisingState,
    ) -> InterpretationResult {
        let Some((uuid, payload, handle)) =
            data.service_data_in_order().find_map(|(uuid, payload)| {
                self.registry
                    .instance(&uuid)
                    .map(|handle| (uuid, payload, handle))
            })
        else {
            return InterpretationResult::failure(
                AdvertisingParseError::new(
                    ParseErrorKind::ParseError,
                    "no service data UUID maps to a characteristic",
                ),
                StateDelta::default(),
            );
        };

        let info = handle.info();
        let hash = service_data_hash(&uuid, payload);
        if self.options.detect_duplicates && state.packet.last_service_data_hash == Some(hash) {
            return InterpretationResult::failure(
                AdvertisingParseError::new(
                    ParseErrorKind::DuplicatePacket,
                    "service data unchanged",
                )
                .with_payload(payload),
                StateDelta {
                    last_seen: data.timestamp,
                    ..StateDelta::default()
                },
            );
        }

        let ctx = ParseContext::default().with_validation(false);
        match handle.decode(payload, &ctx) {
            Ok(value) => InterpretationResult::success(
                InterpretedPayload::Characteristic { uuid, info, value },
                StateDelta {
                    last_seen: data.timestamp,
                    last_service_data_hash: Some(hash),
                    ..StateDelta::default()
                },
            ),
            Err(err) => {
                warn!("{} in service data {} failed to decode", info.name, uuid);
                InterpretationResult::failure(
                    AdvertisingParseError {
                        kind: ParseErrorKind::ParseError,
                        message: err.to_string(),
                        characteristic: Some(info.name),
                        payload: payload.to_vec(),
                    },
                    StateDelta::default(),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advertising::InterpretationStatus;
    use crate::characteristic::{CharacteristicValue, Decoded};

    fn battery_advertisement(level: u8) -> AdvertisingData {
        AdvertisingData::from_ad_bytes(&[0x04, 0x16, 0x19, 0x2A, level]).with_timestamp(42)
    }

    #[test]
    fn test_decodes_battery_level() {
        let registry = CharacteristicRegistry::new();
        let interpreter =
            SigCharacteristicInterpreter::new(&registry, InterpreterOptions::default());
        let data = battery_advertisement(80);
        assert!(interpreter.supports(&data));

        let result = interpreter.interpret(&data, &DeviceAdvertisingState::default());
        assert!(result.is_success());
        match result.payload {
            Some(InterpretedPayload::Characteristic { uuid, info, value }) => {
                assert_eq!(uuid, BluetoothUuid::from_u16(0x2A19));
                assert_eq!(info.name, "Battery Level");
                assert_eq!(value, Decoded::Value(CharacteristicValue::BatteryLevel(80)));
            }
            other => panic!("unexpected payload {other:?}"),
        }
        assert_eq!(result.updated.last_seen, Some(42));
        assert!(result.updated.last_service_data_hash.is_some());
    }

    #[test]
    fn test_first_uuid_in_packet_wins() {
        let registry = CharacteristicRegistry::new();
        let interpreter =
            SigCharacteristicInterpreter::new(&registry, InterpreterOptions::default());
        // Temperature precedes Battery Level although 0x2A19 sorts first
        let data = AdvertisingData::from_ad_bytes(&[
            0x05, 0x16, 0x6E, 0x2A, 0x64, 0x09, 0x04, 0x16, 0x19, 0x2A, 0x50,
        ]);

        let result = interpreter.interpret(&data, &DeviceAdvertisingState::default());
        match result.payload {
            Some(InterpretedPayload::Characteristic { uuid, value, .. }) => {
                assert_eq!(uuid, BluetoothUuid::from_u16(0x2A6E));
                assert_eq!(value, Decoded::Value(CharacteristicValue::Temperature(24.04)));
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_decode_error_carries_characteristic() {
        let registry = CharacteristicRegistry::new();
        let interpreter =
            SigCharacteristicInterpreter::new(&registry, InterpreterOptions::default());
        let data = AdvertisingData::from_ad_bytes(&[0x03, 0x16, 0x19, 0x2A]);

        let result = interpreter.interpret(&data, &DeviceAdvertisingState::default());
        assert_eq!(result.status, InterpretationStatus::ParseError);
        let error = result.error.unwrap();
        assert_eq!(error.characteristic, Some("Battery Level"));
        assert!(error.payload.is_empty());
        assert!(result.updated.is_empty());
    }

    #[test]
    fn test_duplicate_detection() {
        let registry = CharacteristicRegistry::new();
        let options = InterpreterOptions {
            detect_duplicates: true,
        };
        let interpreter = SigCharacteristicInterpreter::new(&registry, options);
        let mut state = DeviceAdvertisingState::default();

        let first = interpreter.interpret(&battery_advertisement(80), &state);
        assert!(first.is_success());
        first.apply_to_state(&mut state);

        let repeat = interpreter.interpret(&battery_advertisement(80), &state);
        assert_eq!(repeat.status, InterpretationStatus::DuplicatePacket);

        let changed = interpreter.interpret(&battery_advertisement(79), &state);
        assert!(changed.is_success());
    }
}
