//! Payload interpreter framework
//!
//! A [`PayloadInterpreter`] recognizes one advertising format. The
//! [`InterpreterRegistry`] keeps interpreters in registration order and
//! hands an advertisement to the first one that supports it.

use super::bthome::BtHomeInterpreter;
use super::sig::SigCharacteristicInterpreter;
use super::AdvertisingData;
use super::state::{DeviceAdvertisingState, InterpretationResult};
use crate::registry::CharacteristicRegistry;
use alloc::boxed::Box;
use alloc::vec::Vec;

/// Decoder for one advertising payload format
pub trait PayloadInterpreter {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Whether the advertisement carries this format
    fn supports(&self, data: &AdvertisingData) -> bool;

    /// Decode the advertisement
    ///
    /// Only called when [`Self::supports`] returned `true`. The state is
    /// read-only; changes are returned in [`InterpretationResult::updated`].
    fn interpret(
        &self,
        data: &AdvertisingData,
        state: &DeviceAdvertisingState,
    ) -> InterpretationResult;
}

/// Options shared by the built-in interpreters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterpreterOptions {
    /// Report service data identical to the last accepted one as
    /// [`InterpretationStatus::DuplicatePacket`](super::InterpretationStatus::DuplicatePacket)
    pub detect_duplicates: bool,
}

/// Ordered list of interpreters
///
/// When several interpreters support the same advertisement, the one
/// registered first wins.
#[derive(Default)]
pub struct InterpreterRegistry<'r> {
    interpreters: Vec<Box<dyn PayloadInterpreter + 'r>>,
}

impl<'r> InterpreterRegistry<'r> {
    /// An empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            interpreters: Vec::new(),
        }
    }

    /// The SIG characteristic interpreter followed by BTHome without decryption
    #[must_use]
    pub fn with_defaults(
        characteristics: &'r CharacteristicRegistry,
        options: InterpreterOptions,
    ) -> Self {
        let mut registry = Self::new();
        registry.register(SigCharacteristicInterpreter::new(characteristics, options));
        registry.register(BtHomeInterpreter::new());
        registry
    }

    /// Append an interpreter
    pub fn register(&mut self, interpreter: impl PayloadInterpreter + 'r) {
        debug!("registered payload interpreter {}", interpreter.name());
        self.interpreters.push(Box::new(interpreter));
    }

    /// The first interpreter supporting the advertisement
    #[must_use]
    pub fn find(&self, data: &AdvertisingData) -> Option<&(dyn PayloadInterpreter + 'r)> {
        self.interpreters
            .iter()
            .find(|interpreter| interpreter.supports(data))
            .map(|interpreter| &**interpreter)
    }

    /// Run the first supporting interpreter
    ///
    /// Returns `None` when no interpreter supports the advertisement.
    #[must_use]
    pub fn interpret(
        &self,
        data: &AdvertisingData,
        state: &DeviceAdvertisingState,
    ) -> Option<InterpretationResult> {
        let interpreter = self.find(data)?;
        let result = interpreter.interpret(data, state);
        if !result.is_success() {
            debug!("{} interpretation failed: {}", interpreter.name(), result.status);
        }
        Some(result)
    }

    /// Names in registration order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.interpreters.iter().map(|interpreter| interpreter.name()).collect()
    }

    /// Number of registered interpreters
    #[must_use]
    pub fn len(&self) -> usize {
        self.interpreters.len()
    }

    /// Whether no interpreter is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interpreters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advertising::AdStructure;
    use crate::advertising::state::{InterpretedPayload, StateDelta};
    use crate::characteristic::CustomValue;
    use crate::uuid::BluetoothUuid;

    struct Tagged {
        name: &'static str,
        company: u16,
    }

    impl PayloadInterpreter for Tagged {
        fn name(&self) -> &'static str {
            self.name
        }

        fn supports(&self, data: &AdvertisingData) -> bool {
            data.manufacturer_data.contains_key(&self.company)
        }

        fn interpret(
            &self,
            _data: &AdvertisingData,
            _state: &DeviceAdvertisingState,
        ) -> InterpretationResult {
            InterpretationResult::success(
                InterpretedPayload::Custom(CustomValue::Text(self.name.into())),
                StateDelta::default(),
            )
        }
    }

    fn apple_advertisement() -> AdvertisingData {
        AdvertisingData::from_ad_bytes(&[0x04, 0xFF, 0x4C, 0x00, 0x01])
    }

    #[test]
    fn test_registration_order_breaks_ties() {
        let mut registry = InterpreterRegistry::new();
        registry.register(Tagged {
            name: "first",
            company: 0x004C,
        });
        registry.register(Tagged {
            name: "second",
            company: 0x004C,
        });
        assert_eq!(registry.names(), ["first", "second"]);

        let data = apple_advertisement();
        assert_eq!(registry.find(&data).map(|i| i.name()), Some("first"));
        let result = registry
            .interpret(&data, &DeviceAdvertisingState::default())
            .unwrap();
        assert_eq!(
            result.payload,
            Some(InterpretedPayload::Custom(CustomValue::Text("first".into())))
        );
    }

    #[test]
    fn test_unsupported_advertisement() {
        let characteristics = CharacteristicRegistry::new();
        let registry =
            InterpreterRegistry::with_defaults(&characteristics, InterpreterOptions::default());
        assert_eq!(registry.len(), 2);
        assert!(registry
            .interpret(&apple_advertisement(), &DeviceAdvertisingState::default())
            .is_none());

        let mut data = apple_advertisement();
        data.add_structures([AdStructure::new(0x16, [0x19, 0x2A, 0x50])]);
        assert!(data.service_data.contains_key(&BluetoothUuid::from_u16(0x2A19)));
        assert_eq!(
            registry.find(&data).map(|i| i.name()),
            Some("SIG characteristic")
        );
    }
}
