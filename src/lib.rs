#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![allow(clippy::too_many_lines)]

extern crate alloc;

#[macro_use]
mod fmt;

mod address;
pub mod codec;
pub mod error;
pub mod metadata;
pub mod uuid;

#[macro_use]
pub mod characteristic;

pub mod advertising;
pub mod descriptor;
pub mod registry;
pub mod service;
pub mod translator;

pub use address::BluetoothAddress;
pub use advertising::{
    AdvertisingData, AdvertisingParseError, DeviceAdvertisingState, InterpretationResult,
    InterpretationStatus, InterpreterRegistry, PayloadInterpreter, parse_advertising_data,
    parse_advertising_payloads,
};
pub use characteristic::{
    CharacteristicInfo, CharacteristicKind, CharacteristicValue, Decoded, ParseContext,
    ParseResult, SpecialValue, SpecialValueKind, SpecialValuePolicy, ValueType,
};
pub use descriptor::{DescriptorInfo, DescriptorParseResult, DescriptorValue};
pub use error::{CodecError, RegistryError};
pub use registry::{CharacteristicRegistry, DescriptorRegistry, ServiceRegistry};
pub use service::{ServiceDefinition, ServiceInfo};
pub use translator::{
    SigTranslator, TranslatorOptions, build_descriptor, build_special, build_value,
    characteristic_info, parse_characteristic, parse_characteristics, parse_descriptor,
    supported_characteristics, supported_descriptors, supported_services,
};
pub use uuid::BluetoothUuid;
