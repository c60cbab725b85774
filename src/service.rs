//! GATT service definitions
//!
//! Which characteristics a SIG service contains and whether each is required.
//! The definitions back [`ServiceRegistry`](crate::registry::ServiceRegistry)
//! and let callers check a discovered service for missing characteristics.

use crate::uuid::BluetoothUuid;
use alloc::vec::Vec;

/// Whether a service must expose a characteristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Requirement {
    /// Always present
    Mandatory,
    /// May be present
    Optional,
    /// Required when a feature it belongs to is supported
    Conditional,
}

/// One characteristic entry of a service definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CharacteristicRequirement {
    /// Characteristic UUID
    pub uuid: BluetoothUuid,
    /// Requirement level
    pub requirement: Requirement,
}

const fn mandatory(uuid: u16) -> CharacteristicRequirement {
    CharacteristicRequirement {
        uuid: BluetoothUuid::from_u16(uuid),
        requirement: Requirement::Mandatory,
    }
}

const fn optional(uuid: u16) -> CharacteristicRequirement {
    CharacteristicRequirement {
        uuid: BluetoothUuid::from_u16(uuid),
        requirement: Requirement::Optional,
    }
}

const fn conditional(uuid: u16) -> CharacteristicRequirement {
    CharacteristicRequirement {
        uuid: BluetoothUuid::from_u16(uuid),
        requirement: Requirement::Conditional,
    }
}

/// Static metadata of a service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServiceInfo {
    /// Normalized UUID
    pub uuid: BluetoothUuid,
    /// Human readable name
    pub name: &'static str,
    /// SIG identifier, e.g. `org.bluetooth.service.battery_service`
    pub identifier: &'static str,
}

impl ServiceInfo {
    /// Metadata for a 16-bit SIG service
    #[must_use]
    pub const fn new(uuid: u16, name: &'static str, identifier: &'static str) -> Self {
        Self {
            uuid: BluetoothUuid::from_u16(uuid),
            name,
            identifier,
        }
    }
}

/// A service and the characteristics it is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDefinition {
    /// Service metadata
    pub info: ServiceInfo,
    /// Characteristics in the order the service specification lists them
    pub characteristics: &'static [CharacteristicRequirement],
}

impl ServiceDefinition {
    /// Requirement level of a characteristic, `None` if the service does not contain it
    #[must_use]
    pub fn requirement(&self, characteristic: &BluetoothUuid) -> Option<Requirement> {
        self.characteristics
            .iter()
            .find(|entry| entry.uuid == *characteristic)
            .map(|entry| entry.requirement)
    }

    /// Whether the service contains the characteristic at any requirement level
    #[must_use]
    pub fn contains(&self, characteristic: &BluetoothUuid) -> bool {
        self.requirement(characteristic).is_some()
    }

    /// UUIDs of the mandatory characteristics
    pub fn mandatory(&self) -> impl Iterator<Item = BluetoothUuid> + '_ {
        self.characteristics
            .iter()
            .filter(|entry| entry.requirement == Requirement::Mandatory)
            .map(|entry| entry.uuid)
    }

    /// Mandatory characteristics absent from `discovered`
    #[must_use]
    pub fn missing_mandatory(&self, discovered: &[BluetoothUuid]) -> Vec<BluetoothUuid> {
        self.mandatory()
            .filter(|uuid| !discovered.contains(uuid))
            .collect()
    }
}

macro_rules! service {
    ($uuid:literal, $name:literal, $id:literal, [$($entry:expr),* $(,)?]) => {
        ServiceDefinition {
            info: ServiceInfo::new($uuid, $name, $id),
            characteristics: &[$($entry),*],
        }
    };
}

/// SIG service definitions, sorted by UUID
pub static SIG_SERVICES: &[ServiceDefinition] = &[
    service!(0x1800, "Generic Access", "org.bluetooth.service.generic_access", [
        mandatory(0x2A00),
        mandatory(0x2A01),
        optional(0x2A04),
        conditional(0x2AA6),
    ]),
    service!(0x1801, "Generic Attribute", "org.bluetooth.service.generic_attribute", [
        optional(0x2A05),
        optional(0x2B29),
        optional(0x2B2A),
        optional(0x2B3A),
    ]),
    service!(0x1802, "Immediate Alert", "org.bluetooth.service.immediate_alert", [
        mandatory(0x2A06),
    ]),
    service!(0x1803, "Link Loss", "org.bluetooth.service.link_loss", [
        mandatory(0x2A06),
    ]),
    service!(0x1804, "Tx Power", "org.bluetooth.service.tx_power", [
        mandatory(0x2A07),
    ]),
    service!(0x1805, "Current Time", "org.bluetooth.service.current_time", [
        mandatory(0x2A2B),
        optional(0x2A0F),
        optional(0x2A14),
    ]),
    service!(0x1808, "Glucose", "org.bluetooth.service.glucose", [
        mandatory(0x2A18),
        optional(0x2A34),
        mandatory(0x2A51),
        mandatory(0x2A52),
    ]),
    service!(0x1809, "Health Thermometer", "org.bluetooth.service.health_thermometer", [
        mandatory(0x2A1C),
        optional(0x2A1D),
        optional(0x2A1E),
        optional(0x2A21),
    ]),
    service!(0x180A, "Device Information", "org.bluetooth.service.device_information", [
        optional(0x2A29),
        optional(0x2A24),
        optional(0x2A25),
        optional(0x2A27),
        optional(0x2A26),
        optional(0x2A28),
        optional(0x2A23),
        optional(0x2A2A),
        optional(0x2A50),
    ]),
    service!(0x180D, "Heart Rate", "org.bluetooth.service.heart_rate", [
        mandatory(0x2A37),
        optional(0x2A38),
        conditional(0x2A39),
    ]),
    service!(0x180E, "Phone Alert Status", "org.bluetooth.service.phone_alert_status", [
        mandatory(0x2A3F),
        mandatory(0x2A41),
        optional(0x2A40),
    ]),
    service!(0x180F, "Battery", "org.bluetooth.service.battery_service", [
        mandatory(0x2A19),
        optional(0x2A1A),
    ]),
    service!(0x1810, "Blood Pressure", "org.bluetooth.service.blood_pressure", [
        mandatory(0x2A35),
        optional(0x2A36),
        mandatory(0x2A49),
    ]),
    service!(0x1811, "Alert Notification", "org.bluetooth.service.alert_notification", [
        mandatory(0x2A47),
        mandatory(0x2A46),
        mandatory(0x2A48),
        mandatory(0x2A45),
        mandatory(0x2A44),
    ]),
    service!(0x1812, "Human Interface Device", "org.bluetooth.service.human_interface_device", [
        conditional(0x2A4E),
        mandatory(0x2A4D),
        mandatory(0x2A4B),
        conditional(0x2A22),
        conditional(0x2A32),
        conditional(0x2A33),
        mandatory(0x2A4A),
        mandatory(0x2A4C),
    ]),
    service!(0x1814, "Running Speed and Cadence", "org.bluetooth.service.running_speed_and_cadence", [
        mandatory(0x2A53),
        mandatory(0x2A54),
        conditional(0x2A5D),
        conditional(0x2A55),
    ]),
    service!(0x1816, "Cycling Speed and Cadence", "org.bluetooth.service.cycling_speed_and_cadence", [
        mandatory(0x2A5B),
        mandatory(0x2A5C),
        conditional(0x2A5D),
        conditional(0x2A55),
    ]),
    service!(0x1818, "Cycling Power", "org.bluetooth.service.cycling_power", [
        mandatory(0x2A63),
        mandatory(0x2A65),
        mandatory(0x2A5D),
        optional(0x2A64),
        conditional(0x2A66),
    ]),
    service!(0x1819, "Location and Navigation", "org.bluetooth.service.location_and_navigation", [
        mandatory(0x2A6A),
        mandatory(0x2A67),
        optional(0x2A69),
        conditional(0x2A6B),
        optional(0x2A68),
    ]),
    service!(0x181A, "Environmental Sensing", "org.bluetooth.service.environmental_sensing", [
        optional(0x2A7D),
        optional(0x2A73),
        optional(0x2A72),
        optional(0x2A7B),
        optional(0x2A6C),
        optional(0x2A74),
        optional(0x2A7A),
        optional(0x2A6F),
        optional(0x2A77),
        optional(0x2A75),
        optional(0x2A78),
        optional(0x2A6D),
        optional(0x2A6E),
        optional(0x2A71),
        optional(0x2A70),
        optional(0x2A76),
        optional(0x2A79),
        optional(0x2AA3),
        optional(0x2A2C),
        optional(0x2AA0),
        optional(0x2AA1),
    ]),
    service!(0x181B, "Body Composition", "org.bluetooth.service.body_composition", [
        mandatory(0x2A9B),
        mandatory(0x2A9C),
    ]),
    service!(0x181D, "Weight Scale", "org.bluetooth.service.weight_scale", [
        mandatory(0x2A9E),
        mandatory(0x2A9D),
    ]),
    service!(0x1822, "Pulse Oximeter", "org.bluetooth.service.pulse_oximeter", [
        conditional(0x2A5E),
        conditional(0x2A5F),
        mandatory(0x2A60),
        conditional(0x2A52),
    ]),
];

/// Definition of a SIG service by UUID
#[must_use]
pub fn sig_service(uuid: &BluetoothUuid) -> Option<&'static ServiceDefinition> {
    SIG_SERVICES
        .binary_search_by(|definition| definition.info.uuid.cmp(uuid))
        .ok()
        .map(|index| &SIG_SERVICES[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata;

    #[test]
    fn test_definitions_sorted_and_named() {
        for pair in SIG_SERVICES.windows(2) {
            assert!(pair[0].info.uuid < pair[1].info.uuid);
        }
        for definition in SIG_SERVICES {
            let short = definition.info.uuid.to_u16().unwrap();
            let record = metadata::service(short).unwrap();
            assert_eq!(record.name, definition.info.name);
            assert_eq!(record.identifier, definition.info.identifier);
        }
    }

    #[test]
    fn test_missing_mandatory() {
        let heart_rate = sig_service(&BluetoothUuid::from_u16(0x180D)).unwrap();
        assert_eq!(
            heart_rate.requirement(&BluetoothUuid::from_u16(0x2A38)),
            Some(Requirement::Optional)
        );
        let missing = heart_rate.missing_mandatory(&[BluetoothUuid::from_u16(0x2A38)]);
        assert_eq!(missing, [BluetoothUuid::from_u16(0x2A37)]);
        assert!(heart_rate.missing_mandatory(&[BluetoothUuid::from_u16(0x2A37)]).is_empty());
    }

    #[test]
    fn test_unknown_service() {
        assert!(sig_service(&BluetoothUuid::from_u16(0x1234)).is_none());
    }
}
