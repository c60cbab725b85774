use super::{CustomEntries, Named};
use crate::characteristic::AttributeInfo;
use crate::descriptor::{
    DescriptorClass, DescriptorCodec, DescriptorFactory, DescriptorHandle, DescriptorInfo,
    DescriptorKind, DescriptorParseResult,
};
use crate::error::{CodecError, RegistryError};
use crate::uuid::BluetoothUuid;
use alloc::sync::Arc;
use alloc::vec::Vec;

struct CustomDescriptor {
    factory: DescriptorFactory,
    instance: Option<Arc<dyn DescriptorCodec>>,
}

impl CustomDescriptor {
    fn instance(&mut self) -> Arc<dyn DescriptorCodec> {
        let factory = self.factory;
        Arc::clone(self.instance.get_or_insert_with(factory))
    }
}

impl Named for CustomDescriptor {
    fn names(&mut self) -> (&'static str, &'static str) {
        let info = self.instance().info();
        (info.name, info.identifier)
    }
}

/// UUID → descriptor codec registry
///
/// Same rules as [`CharacteristicRegistry`](super::CharacteristicRegistry).
pub struct DescriptorRegistry {
    custom: CustomEntries<CustomDescriptor>,
}

static GLOBAL: DescriptorRegistry = DescriptorRegistry::new();

impl Default for DescriptorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorRegistry {
    /// An independent registry holding only the SIG descriptors
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
    pub fn class_by_uuid(&self, uuid: &BluetoothUuid) -> Option<DescriptorClass> {
        self.custom
            .get(uuid, |entry| DescriptorClass::Custom(entry.factory))
            .or_else(|| DescriptorKind::from_uuid(uuid).map(DescriptorClass::Sig))
    }

    /// A codec instance for the UUID, custom instances cached per UUID
    #[must_use]
    pub fn instance(&self, uuid: &BluetoothUuid) -> Option<DescriptorHandle> {
        self.custom
            .get(uuid, |entry| DescriptorHandle::Custom(entry.instance()))
            .or_else(|| DescriptorKind::from_uuid(uuid).map(DescriptorHandle::Sig))
    }

    /// Whether any codec handles the UUID
    #[must_use]
    pub fn is_registered(&self, uuid: &BluetoothUuid) -> bool {
        self.custom.contains(uuid) || DescriptorKind::from_uuid(uuid).is_some()
    }

    /// Map a UUID to a custom descriptor codec
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyRegistered`] if the UUID already has a
    /// codec and `allow_override` is false, and [`RegistryError::Full`] when
    /// no slot is left.
    pub fn register(
        &self,
        uuid: BluetoothUuid,
        factory: DescriptorFactory,
        allow_override: bool,
    ) -> Result<(), RegistryError> {
        let sig = DescriptorKind::from_uuid(&uuid).is_some();
        self.custom.insert(
            uuid,
            CustomDescriptor {
                factory,
                instance: None,
            },
            sig,
            allow_override,
        )?;
        debug!("registered custom descriptor {}", uuid);
        Ok(())
    }

    /// Remove a custom descriptor codec
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SigEntryProtected`] for a built-in UUID without
    /// a custom codec, [`RegistryError::NotRegistered`] otherwise.
    pub fn unregister(&self, uuid: &BluetoothUuid) -> Result<(), RegistryError> {
        let sig = DescriptorKind::from_uuid(uuid).is_some();
        self.custom.remove(uuid, sig)?;
        debug!("unregistered custom descriptor {}", uuid);
        Ok(())
    }

    /// Metadata of the codec handling the UUID
    #[must_use]
    pub fn info(&self, uuid: &BluetoothUuid) -> Option<DescriptorInfo> {
        self.instance(uuid).map(|handle| handle.info())
    }

    /// Resolve a descriptor name or identifier, ignoring ASCII case
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<BluetoothUuid> {
        self.custom.find_name(name, || {
            DescriptorKind::ALL.iter().map(|kind| {
                let info = kind.info();
                (info.uuid, info.name, info.identifier)
            })
        })
    }

    /// Metadata of every descriptor codec, SIG first
    #[must_use]
    pub fn supported(&self) -> Vec<DescriptorInfo> {
        let custom: Vec<DescriptorInfo> = self.custom.collect(|_, entry| entry.instance().info());
        DescriptorKind::ALL
            .iter()
            .map(|kind| kind.info())
            .filter(|info| !custom.iter().any(|c| c.uuid == info.uuid))
            .chain(custom.iter().copied())
            .collect()
    }

    /// Decode a descriptor payload
    ///
    /// An unknown UUID yields a failed result carrying [`CodecError::Unsupported`].
    #[must_use]
    pub fn parse(&self, uuid: &BluetoothUuid, data: &[u8]) -> DescriptorParseResult {
        match self.instance(uuid) {
            Some(handle) => handle.parse_value(data),
            None => DescriptorParseResult::new(
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
    use crate::characteristic::{CustomValue, ValueType};
    use crate::descriptor::DescriptorValue;
    use crate::descriptor::gatt::ClientConfiguration;

    const SENSOR_NOTE: BluetoothUuid =
        BluetoothUuid::from_u128(0xA1B2_C3D4_0000_4000_8000_1234_5678_9ABC);

    struct SensorNote;

    impl DescriptorCodec for SensorNote {
        fn info(&self) -> DescriptorInfo {
            AttributeInfo {
                uuid: SENSOR_NOTE,
                name: "Sensor Note",
                identifier: "com.example.sensor_note",
                unit: None,
                value_type: ValueType::Bytes,
            }
        }

        fn decode(&self, data: &[u8]) -> Result<CustomValue, CodecError> {
            Ok(CustomValue::Bytes(data.to_vec()))
        }

        fn encode(&self, value: &CustomValue) -> Result<Vec<u8>, CodecError> {
            match value {
                CustomValue::Bytes(bytes) => Ok(bytes.clone()),
                _ => Err(CodecError::ValueTypeMismatch {
                    attribute: "Sensor Note",
                }),
            }
        }
    }

    fn sensor_note() -> Arc<dyn DescriptorCodec> {
        Arc::new(SensorNote)
    }

    #[test]
    fn test_sig_descriptor_parse() {
        let registry = DescriptorRegistry::new();
        let cccd = BluetoothUuid::from_u16(0x2902);
        let result = registry.parse(&cccd, &[0x03, 0x00]);
        assert_eq!(
            result.value(),
            Some(&DescriptorValue::ClientCharacteristicConfiguration(
                ClientConfiguration {
                    notifications_enabled: true,
                    indications_enabled: true,
                }
            ))
        );
        assert_eq!(registry.find_by_name("client_characteristic_configuration"), Some(cccd));
    }

    #[test]
    fn test_custom_descriptor() {
        let registry = DescriptorRegistry::new();
        registry.register(SENSOR_NOTE, sensor_note, false).unwrap();
        let result = registry.parse(&SENSOR_NOTE, &[0x01, 0x02]);
        assert_eq!(
            result.value(),
            Some(&DescriptorValue::Custom(CustomValue::Bytes(alloc::vec![0x01, 0x02])))
        );
        assert_eq!(registry.supported().len(), DescriptorKind::ALL.len() + 1);
        registry.unregister(&SENSOR_NOTE).unwrap();
        assert!(!registry.parse(&SENSOR_NOTE, &[0x01]).parse_success());
    }

    #[test]
    fn test_sig_descriptor_protected() {
        let registry = DescriptorRegistry::new();
        let cccd = BluetoothUuid::from_u16(0x2902);
        assert_eq!(
            registry.unregister(&cccd),
            Err(RegistryError::SigEntryProtected(cccd))
        );
        assert_eq!(
            registry.register(cccd, sensor_note, false),
            Err(RegistryError::AlreadyRegistered(cccd))
        );
    }
}
