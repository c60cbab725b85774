//! Decoding every service data entry of an advertisement

use crate::characteristic::{ParseContext, ParseResult};
use crate::registry::CharacteristicRegistry;
use crate::uuid::BluetoothUuid;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

/// Decodes service data entries through a characteristic registry
#[derive(Clone, Copy)]
pub struct ServiceDataParser<'r> {
    registry: &'r CharacteristicRegistry,
}

impl Default for ServiceDataParser<'static> {
    fn default() -> Self {
        Self::new(CharacteristicRegistry::global())
    }
}

impl<'r> ServiceDataParser<'r> {
    /// Parser resolving UUIDs through `registry`
    #[must_use]
    pub const fn new(registry: &'r CharacteristicRegistry) -> Self {
        Self { registry }
    }

    /// Decode each entry whose UUID has a codec
    ///
    /// UUIDs without a codec are left out of the result. Decode failures are
    /// kept as failed [`ParseResult`]s.
    #[must_use]
    pub fn parse(
        &self,
        service_data: &BTreeMap<BluetoothUuid, Vec<u8>>,
        ctx: &ParseContext<'_>,
    ) -> BTreeMap<BluetoothUuid, ParseResult> {
        service_data
            .iter()
            .filter_map(|(uuid, payload)| {
                let Some(handle) = self.registry.instance(uuid) else {
                    trace!("no codec for service data {}", uuid);
                    return None;
                };
                Some((*uuid, handle.parse_value(payload, ctx)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristic::CharacteristicValue;

    #[test]
    fn test_unknown_uuid_excluded() {
        let registry = CharacteristicRegistry::new();
        let unknown = BluetoothUuid::parse("12345678-0000-4000-8000-00805F9B34FB").unwrap();
        let battery = BluetoothUuid::from_u16(0x2A19);
        let mut service_data = BTreeMap::new();
        service_data.insert(unknown, alloc::vec![0x01, 0x02]);
        service_data.insert(battery, alloc::vec![0x64]);

        let parsed =
            ServiceDataParser::new(&registry).parse(&service_data, &ParseContext::default());
        assert_eq!(parsed.len(), 1);
        assert_eq!(
            parsed[&battery].value(),
            Some(&CharacteristicValue::BatteryLevel(100))
        );
    }

    #[test]
    fn test_failures_kept() {
        let registry = CharacteristicRegistry::new();
        let battery = BluetoothUuid::from_u16(0x2A19);
        let mut service_data = BTreeMap::new();
        service_data.insert(battery, alloc::vec![0x64, 0x00]);
        let parsed =
            ServiceDataParser::new(&registry).parse(&service_data, &ParseContext::default());
        assert!(!parsed[&battery].parse_success());
    }
}
