use super::{CustomEntries, Named};
use crate::characteristic::{
    AttributeInfo, CharacteristicCodec, CharacteristicInfo, CharacteristicKind, CodecClass,
    CodecFactory, CodecHandle, ParseContext, ParseResult,
};
use crate::error::{CodecError, RegistryError};
use crate::uuid::BluetoothUuid;
use alloc::sync::Arc;
use alloc::vec::Vec;

struct CustomCodec {
    factory: CodecFactory,
    instance: Option<Arc<dyn CharacteristicCodec>>,
}

impl CustomCodec {
    fn instance(&mut self) -> Arc<dyn CharacteristicCodec> {
        let factory = self.factory;
        Arc::clone(self.instance.get_or_insert_with(factory))
    }
}

impl Named for CustomCodec {
    fn names(&mut self) -> (&'static str, &'static str) {
        let info = self.instance().info();
        (info.name, info.identifier)
    }
}

/// UUID → characteristic codec registry
///
/// Factories run inside the registry's critical section and must not call
/// back into the registry.
pub struct CharacteristicRegistry {
    custom: CustomEntries<CustomCodec>,
}

static GLOBAL: CharacteristicRegistry = CharacteristicRegistry::new();

impl Default for CharacteristicRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacteristicRegistry {
    /// An independent registry holding only the SIG codecs
    #[must_use]
    pub const fn new() -> Self {
        Self {
            custom: CustomEntries::new(),
        }
    }

    /// The process-wide registry
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// What the UUID maps to, custom entries first
    #[must_use]
    pub fn class_by_uuid(&self, uuid: &BluetoothUuid) -> Option<CodecClass> {
        self.custom
            .get(uuid, |entry| CodecClass::Custom(entry.factory))
            .or_else(|| CharacteristicKind::from_uuid(uuid).map(CodecClass::Sig))
    }

    /// A codec instance for the UUID
    ///
    /// Custom factories run once per UUID; later calls share the cached instance.
    #[must_use]
    pub fn instance(&self, uuid: &BluetoothUuid) -> Option<CodecHandle> {
        self.custom
            .get(uuid, |entry| CodecHandle::Custom(entry.instance()))
            .or_else(|| CharacteristicKind::from_uuid(uuid).map(CodecHandle::Sig))
    }

    /// Whether any codec handles the UUID
    #[must_use]
    pub fn is_registered(&self, uuid: &BluetoothUuid) -> bool {
        self.custom.contains(uuid) || CharacteristicKind::from_uuid(uuid).is_some()
    }

    /// Whether the UUID is handled by a runtime-registered codec
    #[must_use]
    pub fn is_custom(&self, uuid: &BluetoothUuid) -> bool {
        self.custom.contains(uuid)
    }

    /// Map a UUID to a custom codec
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyRegistered`] if the UUID already has a
    /// codec (custom or SIG) and `allow_override` is false, and
    /// [`RegistryError::Full`] when no slot is left.
    pub fn register(
        &self,
        uuid: BluetoothUuid,
        factory: CodecFactory,
        allow_override: bool,
    ) -> Result<(), RegistryError> {
        let sig = CharacteristicKind::from_uuid(&uuid).is_some();
        self.custom.insert(
            uuid,
            CustomCodec {
                factory,
                instance: None,
            },
            sig,
            allow_override,
        )?;
        debug!("registered custom characteristic {}", uuid);
        Ok(())
    }

    /// Remove a custom codec; a SIG codec it shadowed becomes visible again
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SigEntryProtected`] for a built-in UUID without
    /// a custom codec, [`RegistryError::NotRegistered`] otherwise.
    pub fn unregister(&self, uuid: &BluetoothUuid) -> Result<(), RegistryError> {
        let sig = CharacteristicKind::from_uuid(uuid).is_some();
        self.custom.remove(uuid, sig)?;
        debug!("unregistered custom characteristic {}", uuid);
        Ok(())
    }

    /// Metadata of the codec handling the UUID
    #[must_use]
    pub fn info(&self, uuid: &BluetoothUuid) -> Option<CharacteristicInfo> {
        self.instance(uuid).map(|handle| handle.info())
    }

    /// Resolve a name (`"Battery Level"`), identifier
    /// (`"org.bluetooth.characteristic.battery_level"`) or identifier suffix
    /// (`"battery_level"`), ignoring ASCII case
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<BluetoothUuid> {
        self.custom.find_name(name, || {
            CharacteristicKind::ALL.iter().map(|kind| {
                let info = kind.info();
                (info.uuid, info.name, info.identifier)
            })
        })
    }

    /// Metadata of every codec, SIG codecs in declaration order followed by custom ones
    ///
    /// A SIG codec shadowed by a custom one is listed once, with the custom metadata.
    #[must_use]
    pub fn supported(&self) -> Vec<CharacteristicInfo> {
        let custom: Vec<CharacteristicInfo> =
            self.custom.collect(|_, entry| entry.instance().info());
        CharacteristicKind::ALL
            .iter()
            .map(|kind| kind.info())
            .filter(|info| !custom.iter().any(|c| c.uuid == info.uuid))
            .chain(custom.iter().copied())
            .collect()
    }

    /// Decode a payload with whatever codec handles the UUID
    ///
    /// An unknown UUID yields a failed result carrying [`CodecError::Unsupported`].
    #[must_use]
    pub fn parse(&self, uuid: &BluetoothUuid, data: &[u8], ctx: &ParseContext<'_>) -> ParseResult {
        match self.instance(uuid) {
            Some(handle) => handle.parse_value(data, ctx),
            None => ParseResult::new(
                AttributeInfo::unknown(*uuid),
                data,
                Err(CodecError::Unsupported(*uuid)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristic::{CharacteristicValue, CustomValue, Decoded, LengthRule, ValueType};
    use core::sync::atomic::{AtomicUsize, Ordering};

    const VENDOR: BluetoothUuid =
        BluetoothUuid::from_u128(0x1234_5678_0000_1000_8000_0080_5f9b_34fb);

    struct VendorCounter;

    impl CharacteristicCodec for VendorCounter {
        fn info(&self) -> CharacteristicInfo {
            AttributeInfo {
                uuid: VENDOR,
                name: "Vendor Counter",
                identifier: "com.example.vendor_counter",
                unit: None,
                value_type: ValueType::Int,
            }
        }

        fn length(&self) -> LengthRule {
            LengthRule::Exact(2)
        }

        fn decode(
            &self,
            data: &[u8],
            _ctx: &ParseContext<'_>,
        ) -> Result<Decoded<CustomValue>, CodecError> {
            Ok(Decoded::Value(CustomValue::Unsigned(u64::from(u16::from_le_bytes([
                data[0], data[1],
            ])))))
        }

        fn encode(&self, value: &CustomValue) -> Result<Vec<u8>, CodecError> {
            match value {
                CustomValue::Unsigned(v) => Ok(u16::try_from(*v)
                    .map_err(|_| CodecError::OutOfRange {
                        field: "counter",
                        value: *v as f64,
                        min: 0.0,
                        max: 65535.0,
                    })?
                    .to_le_bytes()
                    .to_vec()),
                _ => Err(CodecError::ValueTypeMismatch {
                    attribute: "Vendor Counter",
                }),
            }
        }
    }

    static CREATED: AtomicUsize = AtomicUsize::new(0);

    fn counting_factory() -> Arc<dyn CharacteristicCodec> {
        CREATED.fetch_add(1, Ordering::SeqCst);
        Arc::new(VendorCounter)
    }

    fn vendor_factory() -> Arc<dyn CharacteristicCodec> {
        Arc::new(VendorCounter)
    }

    #[test]
    fn test_sig_lookup() {
        let registry = CharacteristicRegistry::new();
        let battery = BluetoothUuid::from_u16(0x2A19);
        assert!(matches!(
            registry.class_by_uuid(&battery),
            Some(CodecClass::Sig(CharacteristicKind::BatteryLevel))
        ));
        assert!(registry.instance(&BluetoothUuid::from_u16(0xFFFE)).is_none());
        assert_eq!(registry.find_by_name("Battery Level"), Some(battery));
        assert_eq!(registry.find_by_name("battery_level"), Some(battery));
        assert_eq!(registry.find_by_name("no such thing"), None);
    }

    #[test]
    fn test_register_and_cache() {
        let registry = CharacteristicRegistry::new();
        registry.register(VENDOR, counting_factory, false).unwrap();
        assert!(registry.is_custom(&VENDOR));
        let before = CREATED.load(Ordering::SeqCst);
        let first = registry.parse(&VENDOR, &[0x2A, 0x00], &ParseContext::default());
        let second = registry.parse(&VENDOR, &[0x2B, 0x00], &ParseContext::default());
        assert_eq!(CREATED.load(Ordering::SeqCst), before + 1);
        assert_eq!(
            first.value(),
            Some(&CharacteristicValue::Custom(CustomValue::Unsigned(42)))
        );
        assert!(second.parse_success());
        assert!(!registry.parse(&VENDOR, &[0x01], &ParseContext::default()).parse_success());
        assert_eq!(registry.find_by_name("vendor_counter"), Some(VENDOR));
    }

    #[test]
    fn test_duplicate_registration() {
        let registry = CharacteristicRegistry::new();
        registry.register(VENDOR, vendor_factory, false).unwrap();
        assert_eq!(
            registry.register(VENDOR, vendor_factory, false),
            Err(RegistryError::AlreadyRegistered(VENDOR))
        );
        assert!(registry.register(VENDOR, vendor_factory, true).is_ok());
    }

    #[test]
    fn test_sig_override_and_unregister() {
        let registry = CharacteristicRegistry::new();
        let battery = BluetoothUuid::from_u16(0x2A19);
        assert_eq!(
            registry.register(battery, vendor_factory, false),
            Err(RegistryError::AlreadyRegistered(battery))
        );
        registry.register(battery, vendor_factory, true).unwrap();
        assert!(matches!(registry.class_by_uuid(&battery), Some(CodecClass::Custom(_))));
        assert_eq!(
            registry.supported().iter().filter(|info| info.uuid == battery).count(),
            1
        );

        registry.unregister(&battery).unwrap();
        assert!(matches!(registry.class_by_uuid(&battery), Some(CodecClass::Sig(_))));
        assert_eq!(
            registry.unregister(&battery),
            Err(RegistryError::SigEntryProtected(battery))
        );
        assert_eq!(
            registry.unregister(&VENDOR),
            Err(RegistryError::NotRegistered(VENDOR))
        );
    }

    #[test]
    fn test_unknown_uuid_parse_fails() {
        let registry = CharacteristicRegistry::new();
        let result = registry.parse(&VENDOR, &[0x00], &ParseContext::default());
        assert!(!result.parse_success());
        assert_eq!(result.error(), Some(&CodecError::Unsupported(VENDOR)));
    }

    #[test]
    fn test_supported_lists_sig_codecs() {
        let registry = CharacteristicRegistry::new();
        assert_eq!(registry.supported().len(), CharacteristicKind::ALL.len());
    }
}
