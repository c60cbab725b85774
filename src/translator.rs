//! Translator facade
//!
//! [`SigTranslator`] bundles the three registries and the default parse
//! options behind the operations most callers need. The free functions at
//! the crate root use a translator over the process-wide registries.

use crate::advertising::{
    AdvertisingData, InterpreterOptions, InterpreterRegistry, ServiceDataParser,
};
use crate::characteristic::{
    AttributeInfo, CharacteristicInfo, CharacteristicKind, CharacteristicValue, CodecHandle,
    ParseContext, ParseResult, SpecialValue, SpecialValuePolicy,
};
use crate::descriptor::{DescriptorInfo, DescriptorParseResult, DescriptorValue};
use crate::error::CodecError;
use crate::registry::{CharacteristicRegistry, DescriptorRegistry, ServiceRegistry};
use crate::service::{ServiceDefinition, ServiceInfo};
use crate::uuid::BluetoothUuid;
use alloc::collections::BTreeMap;
use alloc::string::ToString;
use alloc::vec::Vec;

/// Configuration of a [`SigTranslator`]
///
/// # Example
///
/// ```rust
/// use bluesig::{BluetoothUuid, SigTranslator, TranslatorOptions};
/// use bluesig::registry::CharacteristicRegistry;
///
/// // Raw values, no range checks, against a private registry
/// let registry = CharacteristicRegistry::new();
/// let translator = SigTranslator::new(TranslatorOptions {
///     validate: false,
///     characteristics: &registry,
///     ..TranslatorOptions::default()
/// });
/// let result = translator.parse_characteristic(&BluetoothUuid::from_u16(0x2A19), &[0x65], None);
/// assert!(result.parse_success());
/// ```
#[derive(Clone, Copy)]
pub struct TranslatorOptions<'r> {
    /// Check ranges and reserved codes, and recognize sentinels
    pub validate: bool,
    /// Handling of decoded sentinels
    pub special_values: SpecialValuePolicy,
    /// Characteristic codecs
    pub characteristics: &'r CharacteristicRegistry,
    /// Descriptor codecs
    pub descriptors: &'r DescriptorRegistry,
    /// Service definitions
    pub services: &'r ServiceRegistry,
}

impl Default for TranslatorOptions<'static> {
    fn default() -> Self {
        Self {
            validate: true,
            special_values: SpecialValuePolicy::Report,
            characteristics: CharacteristicRegistry::global(),
            descriptors: DescriptorRegistry::global(),
            services: ServiceRegistry::global(),
        }
    }
}

/// Entry point for characteristic, descriptor and advertising decoding
#[derive(Clone, Copy)]
pub struct SigTranslator<'r> {
    options: TranslatorOptions<'r>,
}

impl Default for SigTranslator<'static> {
    fn default() -> Self {
        Self::new(TranslatorOptions::default())
    }
}

impl<'r> SigTranslator<'r> {
    /// Translator with the given options
    #[must_use]
    pub const fn new(options: TranslatorOptions<'r>) -> Self {
        Self { options }
    }

    /// The options in use
    #[must_use]
    pub const fn options(&self) -> &TranslatorOptions<'r> {
        &self.options
    }

    /// Parse context built from the options
    #[must_use]
    pub fn default_context(&self) -> ParseContext<'static> {
        ParseContext::default()
            .with_validation(self.options.validate)
            .with_special_values(self.options.special_values)
    }

    /// Resolve a UUID string (`"2A19"`, full form) or a characteristic name
    #[must_use]
    pub fn resolve_characteristic(&self, key: &str) -> Option<BluetoothUuid> {
        BluetoothUuid::parse(key)
            .ok()
            .or_else(|| self.options.characteristics.find_by_name(key))
    }

    /// Decode one characteristic value
    ///
    /// `ctx` defaults to [`Self::default_context`]. An unknown UUID yields a
    /// failed result.
    #[must_use]
    pub fn parse_characteristic(
        &self,
        uuid: &BluetoothUuid,
        data: &[u8],
        ctx: Option<&ParseContext<'_>>,
    ) -> ParseResult {
        match ctx {
            Some(ctx) => self.options.characteristics.parse(uuid, data, ctx),
            None => self
                .options
                .characteristics
                .parse(uuid, data, &self.default_context()),
        }
    }

    /// Decode one characteristic value addressed by UUID string or name
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidFormat`] when the key is neither a UUID
    /// nor a known characteristic name.
    pub fn parse_characteristic_by_key(
        &self,
        key: &str,
        data: &[u8],
        ctx: Option<&ParseContext<'_>>,
    ) -> Result<ParseResult, CodecError> {
        let uuid = self
            .resolve_characteristic(key)
            .ok_or_else(|| CodecError::InvalidFormat {
                input: key.to_string(),
                expected: "a UUID or a characteristic name",
            })?;
        Ok(self.parse_characteristic(&uuid, data, ctx))
    }

    /// Decode the characteristics of one device together
    ///
    /// Values other codecs depend on (features, glucose sequence numbers,
    /// temperature type) are decoded first and fed to the rest through
    /// [`SiblingValues`](crate::characteristic::SiblingValues). Results come
    /// back in input order; a failure only affects its own entry.
    #[must_use]
    pub fn parse_characteristics(
        &self,
        batch: &[(BluetoothUuid, &[u8])],
        ctx: Option<&ParseContext<'_>>,
    ) -> Vec<(BluetoothUuid, ParseResult)> {
        let base = ctx.copied().unwrap_or_else(|| self.default_context());
        let handles: Vec<Option<CodecHandle>> = batch
            .iter()
            .map(|(uuid, _)| self.options.characteristics.instance(uuid))
            .collect();
        let is_provider = |handle: &Option<CodecHandle>| {
            handle
                .as_ref()
                .and_then(CodecHandle::kind)
                .is_some_and(CharacteristicKind::is_context_provider)
        };

        let mut siblings = base.siblings;
        let mut results: Vec<Option<ParseResult>> = batch.iter().map(|_| None).collect();
        for providers in [true, false] {
            for (index, ((uuid, data), handle)) in batch.iter().zip(&handles).enumerate() {
                if is_provider(handle) != providers {
                    continue;
                }
                let ctx = base.with_siblings(siblings);
                let result = match handle {
                    Some(handle) => handle.parse_value(data, &ctx),
                    None => ParseResult::new(
                        AttributeInfo::unknown(*uuid),
                        data,
                        Err(CodecError::Unsupported(*uuid)),
                    ),
                };
                if let Some(value) = result.value() {
                    siblings.record(value);
                }
                results[index] = Some(result);
            }
        }
        debug!("parsed a batch of {} characteristics", batch.len());

        batch
            .iter()
            .zip(results)
            .filter_map(|((uuid, _), result)| result.map(|result| (*uuid, result)))
            .collect()
    }

    /// Encode a characteristic value
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Unsupported`] for an unknown UUID, otherwise the
    /// codec's validation or encoding error.
    pub fn build_value(
        &self,
        uuid: &BluetoothUuid,
        value: &CharacteristicValue,
    ) -> Result<Vec<u8>, CodecError> {
        self.options
            .characteristics
            .instance(uuid)
            .ok_or(CodecError::Unsupported(*uuid))?
            .encode(value)
    }

    /// Encode a sentinel
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Unsupported`] for an unknown UUID or a codec
    /// without that sentinel.
    pub fn build_special(
        &self,
        uuid: &BluetoothUuid,
        special: SpecialValue,
    ) -> Result<Vec<u8>, CodecError> {
        self.options
            .characteristics
            .instance(uuid)
            .ok_or(CodecError::Unsupported(*uuid))?
            .encode_special(special)
    }

    /// Decode a descriptor value
    #[must_use]
    pub fn parse_descriptor(&self, uuid: &BluetoothUuid, data: &[u8]) -> DescriptorParseResult {
        self.options.descriptors.parse(uuid, data)
    }

    /// Encode a descriptor value
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Unsupported`] for an unknown UUID, otherwise the
    /// codec's error.
    pub fn build_descriptor(
        &self,
        uuid: &BluetoothUuid,
        value: &DescriptorValue,
    ) -> Result<Vec<u8>, CodecError> {
        self.options
            .descriptors
            .instance(uuid)
            .ok_or(CodecError::Unsupported(*uuid))?
            .encode(value)
    }

    /// Metadata of a characteristic
    #[must_use]
    pub fn characteristic_info(&self, uuid: &BluetoothUuid) -> Option<CharacteristicInfo> {
        self.options.characteristics.info(uuid)
    }

    /// Metadata of a characteristic addressed by UUID string or name
    #[must_use]
    pub fn characteristic_info_by_key(&self, key: &str) -> Option<CharacteristicInfo> {
        self.resolve_characteristic(key)
            .and_then(|uuid| self.characteristic_info(&uuid))
    }

    /// Metadata of a service
    #[must_use]
    pub fn service_info(&self, uuid: &BluetoothUuid) -> Option<ServiceInfo> {
        self.options.services.info(uuid)
    }

    /// Every characteristic codec
    #[must_use]
    pub fn supported_characteristics(&self) -> Vec<CharacteristicInfo> {
        self.options.characteristics.supported()
    }

    /// Every service definition
    #[must_use]
    pub fn supported_services(&self) -> Vec<ServiceDefinition> {
        self.options.services.supported()
    }

    /// Every descriptor codec
    #[must_use]
    pub fn supported_descriptors(&self) -> Vec<DescriptorInfo> {
        self.options.descriptors.supported()
    }

    /// Decode the service data of an advertisement
    ///
    /// Only UUIDs with a characteristic codec appear in the result.
    #[must_use]
    pub fn parse_service_data(
        &self,
        data: &AdvertisingData,
    ) -> BTreeMap<BluetoothUuid, ParseResult> {
        ServiceDataParser::new(self.options.characteristics)
            .parse(&data.service_data, &self.default_context())
    }

    /// Interpreter registry with the built-in interpreters over this
    /// translator's characteristic registry
    #[must_use]
    pub fn interpreters(&self, options: InterpreterOptions) -> InterpreterRegistry<'r> {
        InterpreterRegistry::with_defaults(self.options.characteristics, options)
    }
}

/// Decode one characteristic value with the process-wide registry
#[must_use]
pub fn parse_characteristic(
    uuid: &BluetoothUuid,
    data: &[u8],
    ctx: &ParseContext<'_>,
) -> ParseResult {
    SigTranslator::default().parse_characteristic(uuid, data, Some(ctx))
}

/// Decode the characteristics of one device with the process-wide registry
///
/// See [`SigTranslator::parse_characteristics`].
#[must_use]
pub fn parse_characteristics(
    batch: &[(BluetoothUuid, &[u8])],
) -> Vec<(BluetoothUuid, ParseResult)> {
    SigTranslator::default().parse_characteristics(batch, None)
}

/// Encode a characteristic value with the process-wide registry
///
/// # Errors
///
/// See [`SigTranslator::build_value`].
pub fn build_value(
    uuid: &BluetoothUuid,
    value: &CharacteristicValue,
) -> Result<Vec<u8>, CodecError> {
    SigTranslator::default().build_value(uuid, value)
}

/// Encode a sentinel with the process-wide registry
///
/// # Errors
///
/// See [`SigTranslator::build_special`].
pub fn build_special(uuid: &BluetoothUuid, special: SpecialValue) -> Result<Vec<u8>, CodecError> {
    SigTranslator::default().build_special(uuid, special)
}

/// Decode a descriptor value with the process-wide registry
#[must_use]
pub fn parse_descriptor(uuid: &BluetoothUuid, data: &[u8]) -> DescriptorParseResult {
    SigTranslator::default().parse_descriptor(uuid, data)
}

/// Encode a descriptor value with the process-wide registry
///
/// # Errors
///
/// See [`SigTranslator::build_descriptor`].
pub fn build_descriptor(
    uuid: &BluetoothUuid,
    value: &DescriptorValue,
) -> Result<Vec<u8>, CodecError> {
    SigTranslator::default().build_descriptor(uuid, value)
}

/// Metadata of a characteristic addressed by UUID string or name
#[must_use]
pub fn characteristic_info(key: &str) -> Option<CharacteristicInfo> {
    SigTranslator::default().characteristic_info_by_key(key)
}

/// Every characteristic codec of the process-wide registry
#[must_use]
pub fn supported_characteristics() -> Vec<CharacteristicInfo> {
    SigTranslator::default().supported_characteristics()
}

/// Every service definition of the process-wide registry
#[must_use]
pub fn supported_services() -> Vec<ServiceDefinition> {
    SigTranslator::default().supported_services()
}

/// Every descriptor codec of the process-wide registry
#[must_use]
pub fn supported_descriptors() -> Vec<DescriptorInfo> {
    SigTranslator::default().supported_descriptors()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristic::body::WeightScaleFeature;
    use crate::characteristic::{SpecialValueKind, ValueType};

    fn translator(registry: &CharacteristicRegistry) -> SigTranslator<'_> {
        SigTranslator::new(TranslatorOptions {
            characteristics: registry,
            ..TranslatorOptions::default()
        })
    }

    #[test]
    fn test_parse_by_key() {
        let registry = CharacteristicRegistry::new();
        let translator = translator(&registry);
        for key in ["2A19", "0x2a19", "Battery Level", "battery_level"] {
            let result = translator
                .parse_characteristic_by_key(key, &[0x64], None)
                .unwrap();
            assert_eq!(result.value(), Some(&CharacteristicValue::BatteryLevel(100)));
        }
        assert!(translator
            .parse_characteristic_by_key("flux capacitor", &[0x00], None)
            .is_err());
    }

    #[test]
    fn test_characteristic_info() {
        let registry = CharacteristicRegistry::new();
        let info = translator(&registry)
            .characteristic_info_by_key("org.bluetooth.characteristic.temperature")
            .unwrap();
        assert_eq!(info.uuid, BluetoothUuid::from_u16(0x2A6E));
        assert_eq!(info.value_type, ValueType::Float);
    }

    #[test]
    fn test_batch_keeps_input_order_and_isolates_failures() {
        let registry = CharacteristicRegistry::new();
        let battery = BluetoothUuid::from_u16(0x2A19);
        let unknown = BluetoothUuid::from_u16(0xFFF0);
        let temperature = BluetoothUuid::from_u16(0x2A6E);
        let batch: [(BluetoothUuid, &[u8]); 3] = [
            (battery, &[0x64, 0x00]),
            (unknown, &[0x01]),
            (temperature, &[0x64, 0x09]),
        ];
        let results = translator(&registry).parse_characteristics(&batch, None);
        let uuids: Vec<_> = results.iter().map(|(uuid, _)| *uuid).collect();
        assert_eq!(uuids, [battery, unknown, temperature]);
        assert!(!results[0].1.parse_success());
        assert!(!results[1].1.parse_success());
        assert!(results[2].1.parse_success());
    }

    #[test]
    fn test_batch_decodes_context_providers_first() {
        let registry = CharacteristicRegistry::new();
        let measurement = BluetoothUuid::from_u16(0x2A9D);
        let feature = BluetoothUuid::from_u16(0x2A9E);
        // weight resolution index 4 (0.05 kg), listed after the measurement
        let feature_bytes = 0x0000_0020u32.to_le_bytes();
        let batch: [(BluetoothUuid, &[u8]); 2] =
            [(measurement, &[0x00, 0x60, 0x36]), (feature, &feature_bytes)];
        let results = translator(&registry).parse_characteristics(&batch, None);
        assert_eq!(results[0].0, measurement);
        let Some(CharacteristicValue::WeightMeasurement(weight)) = results[0].1.value() else {
            panic!("unexpected result {:?}", results[0].1);
        };
        assert_eq!(weight.weight_resolution, Some(0.05));
        assert_eq!(
            results[1].1.value(),
            Some(&CharacteristicValue::WeightScaleFeature(
                WeightScaleFeature::from_bits(0x0000_0020)
            ))
        );
    }

    #[test]
    fn test_build_round_trip() {
        let registry = CharacteristicRegistry::new();
        let translator = translator(&registry);
        let battery = BluetoothUuid::from_u16(0x2A19);
        let bytes = translator
            .build_value(&battery, &CharacteristicValue::BatteryLevel(100))
            .unwrap();
        assert_eq!(bytes, [0x64]);
        let unknown = BluetoothUuid::from_u16(0xFFF0);
        assert_eq!(
            translator.build_value(&unknown, &CharacteristicValue::BatteryLevel(1)),
            Err(CodecError::Unsupported(unknown))
        );

        let temperature = BluetoothUuid::from_u16(0x2A6E);
        let not_known = SpecialValue::new(SpecialValueKind::NotKnown, 0x8000);
        assert_eq!(
            translator.build_special(&temperature, not_known).unwrap(),
            [0x00, 0x80]
        );
    }

    #[test]
    fn test_descriptor_round_trip() {
        let translator = SigTranslator::default();
        let cccd = BluetoothUuid::from_u16(0x2902);
        let parsed = translator.parse_descriptor(&cccd, &[0x01, 0x00]);
        let value = parsed.value().unwrap().clone();
        assert_eq!(translator.build_descriptor(&cccd, &value).unwrap(), [0x01, 0x00]);
    }
}
