use super::{CustomEntries, Named};
use crate::error::RegistryError;
use crate::service::{SIG_SERVICES, ServiceDefinition, ServiceInfo, sig_service};
use crate::uuid::BluetoothUuid;
use alloc::vec::Vec;

impl Named for ServiceDefinition {
    fn names(&mut self) -> (&'static str, &'static str) {
        (self.info.name, self.info.identifier)
    }
}

/// UUID → service definition registry
pub struct ServiceRegistry {
    custom: CustomEntries<ServiceDefinition>,
}

static GLOBAL: ServiceRegistry = ServiceRegistry::new();

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceRegistry {
    /// An independent registry holding only the SIG services
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

    /// Definition of the service, custom entries first
    #[must_use]
    pub fn definition(&self, uuid: &BluetoothUuid) -> Option<ServiceDefinition> {
        self.custom
            .get(uuid, |definition| *definition)
            .or_else(|| sig_service(uuid).copied())
    }

    /// Metadata of the service
    #[must_use]
    pub fn info(&self, uuid: &BluetoothUuid) -> Option<ServiceInfo> {
        self.definition(uuid).map(|definition| definition.info)
    }

    /// Whether the UUID has a definition
    #[must_use]
    pub fn is_registered(&self, uuid: &BluetoothUuid) -> bool {
        self.definition(uuid).is_some()
    }

    /// Add a custom service definition
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyRegistered`] if the UUID already has a
    /// definition and `allow_override` is false, and [`RegistryError::Full`]
    /// when no slot is left.
    pub fn register(
        &self,
        definition: ServiceDefinition,
        allow_override: bool,
    ) -> Result<(), RegistryError> {
        let uuid = definition.info.uuid;
        let sig = sig_service(&uuid).is_some();
        self.custom.insert(uuid, definition, sig, allow_override)?;
        debug!("registered custom service {}", uuid);
        Ok(())
    }

    /// Remove a custom service definition
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SigEntryProtected`] for a built-in service
    /// without a custom definition, [`RegistryError::NotRegistered`] otherwise.
    pub fn unregister(&self, uuid: &BluetoothUuid) -> Result<(), RegistryError> {
        let sig = sig_service(uuid).is_some();
        self.custom.remove(uuid, sig)?;
        debug!("unregistered custom service {}", uuid);
        Ok(())
    }

    /// Resolve a service name or identifier, ignoring ASCII case
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<BluetoothUuid> {
        self.custom.find_name(name, || {
            SIG_SERVICES.iter().map(|definition| {
                let info = definition.info;
                (info.uuid, info.name, info.identifier)
            })
        })
    }

    /// Every definition, SIG services by UUID followed by custom ones
    #[must_use]
    pub fn supported(&self) -> Vec<ServiceDefinition> {
        let custom: Vec<ServiceDefinition> = self.custom.collect(|_, definition| *definition);
        SIG_SERVICES
            .iter()
            .filter(|sig| !custom.iter().any(|c| c.info.uuid == sig.info.uuid))
            .copied()
            .chain(custom.iter().copied())
            .collect()
    }

    /// Services whose definition lists the characteristic
    #[must_use]
    pub fn services_containing(&self, characteristic: &BluetoothUuid) -> Vec<ServiceDefinition> {
        self.supported()
            .into_iter()
            .filter(|definition| definition.contains(characteristic))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{CharacteristicRequirement, Requirement};

    static VENDOR_CHARACTERISTICS: [CharacteristicRequirement; 2] = [
        CharacteristicRequirement {
            uuid: BluetoothUuid::from_u16(0x2A19),
            requirement: Requirement::Mandatory,
        },
        CharacteristicRequirement {
            uuid: BluetoothUuid::from_u128(0xA1B2_C3D4_0000_4000_8000_1234_5678_9ABD),
            requirement: Requirement::Optional,
        },
    ];

    fn vendor_service() -> ServiceDefinition {
        ServiceDefinition {
            info: ServiceInfo {
                uuid: BluetoothUuid::from_u128(0xA1B2_C3D4_0000_4000_8000_1234_5678_9A00),
                name: "Vendor Power",
                identifier: "com.example.service.vendor_power",
            },
            characteristics: &VENDOR_CHARACTERISTICS,
        }
    }

    #[test]
    fn test_sig_services() {
        let registry = ServiceRegistry::new();
        let battery = BluetoothUuid::from_u16(0x180F);
        assert_eq!(registry.info(&battery).unwrap().name, "Battery");
        assert_eq!(registry.find_by_name("battery_service"), Some(battery));
        assert_eq!(registry.supported().len(), SIG_SERVICES.len());
    }

    #[test]
    fn test_services_containing() {
        let registry = ServiceRegistry::new();
        let csc_feature_users: Vec<_> = registry
            .services_containing(&BluetoothUuid::from_u16(0x2A5D))
            .iter()
            .map(|definition| definition.info.name)
            .collect();
        assert_eq!(
            csc_feature_users,
            ["Running Speed and Cadence", "Cycling Speed and Cadence", "Cycling Power"]
        );
    }

    #[test]
    fn test_custom_service() {
        let registry = ServiceRegistry::new();
        let service = vendor_service();
        registry.register(service, false).unwrap();
        assert_eq!(
            registry.register(service, false),
            Err(RegistryError::AlreadyRegistered(service.info.uuid))
        );
        assert_eq!(registry.find_by_name("Vendor Power"), Some(service.info.uuid));
        let battery_users = registry.services_containing(&BluetoothUuid::from_u16(0x2A19));
        assert_eq!(battery_users.len(), 2);
        registry.unregister(&service.info.uuid).unwrap();
        assert!(registry.definition(&service.info.uuid).is_none());
    }
}
