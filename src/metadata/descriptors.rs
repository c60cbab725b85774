//! Descriptor UUID assignments and presentation format types

use super::{FormatTypeRecord, UuidRecord};

pub(super) static DESCRIPTORS: &[UuidRecord] = &[
    UuidRecord::new(0x2900, "Characteristic Extended Properties", "org.bluetooth.descriptor.gatt.characteristic_extended_properties"),
    UuidRecord::new(0x2901, "Characteristic User Description", "org.bluetooth.descriptor.gatt.characteristic_user_description"),
    UuidRecord::new(0x2902, "Client Characteristic Configuration", "org.bluetooth.descriptor.gatt.client_characteristic_configuration"),
    UuidRecord::new(0x2903, "Server Characteristic Configuration", "org.bluetooth.descriptor.gatt.server_characteristic_configuration"),
    UuidRecord::new(0x2904, "Characteristic Presentation Format", "org.bluetooth.descriptor.gatt.characteristic_presentation_format"),
    UuidRecord::new(0x2905, "Characteristic Aggregate Format", "org.bluetooth.descriptor.gatt.characteristic_aggregate_format"),
    UuidRecord::new(0x2906, "Valid Range", "org.bluetooth.descriptor.valid_range"),
    UuidRecord::new(0x2907, "External Report Reference", "org.bluetooth.descriptor.external_report_reference"),
    UuidRecord::new(0x2908, "Report Reference", "org.bluetooth.descriptor.report_reference"),
    UuidRecord::new(0x2909, "Number of Digitals", "org.bluetooth.descriptor.number_of_digitals"),
    UuidRecord::new(0x290A, "Value Trigger Setting", "org.bluetooth.descriptor.value_trigger_setting"),
    UuidRecord::new(0x290B, "Environmental Sensing Configuration", "org.bluetooth.descriptor.es_configuration"),
    UuidRecord::new(0x290C, "Environmental Sensing Measurement", "org.bluetooth.descriptor.es_measurement"),
    UuidRecord::new(0x290D, "Environmental Sensing Trigger Setting", "org.bluetooth.descriptor.es_trigger_setting"),
    UuidRecord::new(0x290E, "Time Trigger Setting", "org.bluetooth.descriptor.time_trigger_setting"),
    UuidRecord::new(0x290F, "Complete BR-EDR Transport Block Data", "org.bluetooth.descriptor.complete_br_edr_transport_block_data"),
    UuidRecord::new(0x2910, "Observation Schedule", "org.bluetooth.descriptor.observation_schedule"),
    UuidRecord::new(0x2911, "Valid Range and Accuracy", "org.bluetooth.descriptor.valid_range_and_accuracy"),
    UuidRecord::new(0x2912, "Measurement Description", "org.bluetooth.descriptor.measurement_description"),
    UuidRecord::new(0x2913, "Manufacturer Limits", "org.bluetooth.descriptor.manufacturer_limits"),
    UuidRecord::new(0x2914, "Process Tolerances", "org.bluetooth.descriptor.process_tolerances"),
    UuidRecord::new(0x2915, "IMD Trigger Setting", "org.bluetooth.descriptor.imd_trigger_setting"),
];

pub(super) static FORMAT_TYPES: &[FormatTypeRecord] = &[
    FormatTypeRecord {
        code: 0x01,
        short_name: "boolean",
        description: "unsigned 1-bit; 0 = false, 1 = true",
        bits: Some(1),
    },
    FormatTypeRecord {
        code: 0x02,
        short_name: "uint2",
        description: "unsigned 2-bit integer",
        bits: Some(2),
    },
    FormatTypeRecord {
        code: 0x03,
        short_name: "uint4",
        description: "unsigned 4-bit integer",
        bits: Some(4),
    },
    FormatTypeRecord {
        code: 0x04,
        short_name: "uint8",
        description: "unsigned 8-bit integer",
        bits: Some(8),
    },
    FormatTypeRecord {
        code: 0x05,
        short_name: "uint12",
        description: "unsigned 12-bit integer",
        bits: Some(12),
    },
    FormatTypeRecord {
        code: 0x06,
        short_name: "uint16",
        description: "unsigned 16-bit integer",
        bits: Some(16),
    },
    FormatTypeRecord {
        code: 0x07,
        short_name: "uint24",
        description: "unsigned 24-bit integer",
        bits: Some(24),
    },
    FormatTypeRecord {
        code: 0x08,
        short_name: "uint32",
        description: "unsigned 32-bit integer",
        bits: Some(32),
    },
    FormatTypeRecord {
        code: 0x09,
        short_name: "uint48",
        description: "unsigned 48-bit integer",
        bits: Some(48),
    },
    FormatTypeRecord {
        code: 0x0A,
        short_name: "uint64",
        description: "unsigned 64-bit integer",
        bits: Some(64),
    },
    FormatTypeRecord {
        code: 0x0B,
        short_name: "uint128",
        description: "unsigned 128-bit integer",
        bits: Some(128),
    },
    FormatTypeRecord {
        code: 0x0C,
        short_name: "sint8",
        description: "signed 8-bit integer",
        bits: Some(8),
    },
    FormatTypeRecord {
        code: 0x0D,
        short_name: "sint12",
        description: "signed 12-bit integer",
        bits: Some(12),
    },
    FormatTypeRecord {
        code: 0x0E,
        short_name: "sint16",
        description: "signed 16-bit integer",
        bits: Some(16),
    },
    FormatTypeRecord {
        code: 0x0F,
        short_name: "sint24",
        description: "signed 24-bit integer",
        bits: Some(24),
    },
    FormatTypeRecord {
        code: 0x10,
        short_name: "sint32",
        description: "signed 32-bit integer",
        bits: Some(32),
    },
    FormatTypeRecord {
        code: 0x11,
        short_name: "sint48",
        description: "signed 48-bit integer",
        bits: Some(48),
    },
    FormatTypeRecord {
        code: 0x12,
        short_name: "sint64",
        description: "signed 64-bit integer",
        bits: Some(64),
    },
    FormatTypeRecord {
        code: 0x13,
        short_name: "sint128",
        description: "signed 128-bit integer",
        bits: Some(128),
    },
    FormatTypeRecord {
        code: 0x14,
        short_name: "float32",
        description: "IEEE-754 32-bit floating point",
        bits: Some(32),
    },
    FormatTypeRecord {
        code: 0x15,
        short_name: "float64",
        description: "IEEE-754 64-bit floating point",
        bits: Some(64),
    },
    FormatTypeRecord {
        code: 0x16,
        short_name: "medfloat16",
        description: "IEEE-11073 16-bit SFLOAT",
        bits: Some(16),
    },
    FormatTypeRecord {
        code: 0x17,
        short_name: "medfloat32",
        description: "IEEE-11073 32-bit FLOAT",
        bits: Some(32),
    },
    FormatTypeRecord {
        code: 0x18,
        short_name: "uint16 [2]",
        description: "IEEE-20601 format",
        bits: Some(32),
    },
    FormatTypeRecord {
        code: 0x19,
        short_name: "utf8s",
        description: "UTF-8 string",
        bits: None,
    },
    FormatTypeRecord {
        code: 0x1A,
        short_name: "utf16s",
        description: "UTF-16 string",
        bits: None,
    },
    FormatTypeRecord {
        code: 0x1B,
        short_name: "struct",
        description: "Opaque structure",
        bits: None,
    },
];
