//! Trigger setting descriptors
//!
//! A condition byte followed by an operand whose presence and width depend on
//! the condition. Operands that compare against the characteristic value are
//! kept raw since they use the characteristic's own format.

use super::range::RawBound;
use super::{Descriptor, DescriptorInfo};
use crate::characteristic::{LengthRule, ValueType};
use crate::codec::{ByteReader, ByteWriter};
use crate::error::CodecError;
use alloc::vec::Vec;

fn expect_operand(field: &'static str, operand: &[u8], width: usize) -> Result<(), CodecError> {
    if operand.len() == width {
        return Ok(());
    }
    debug!("{} operand has {} bytes, expected {}", field, operand.len(), width);
    Err(CodecError::InvalidLength {
        rule: LengthRule::Exact(width + 1),
        actual: operand.len() + 1,
    })
}

fn read_seconds(field: &'static str, operand: &[u8]) -> Result<u32, CodecError> {
    expect_operand(field, operand, 3)?;
    ByteReader::new(operand).read_u24()
}

fn reserved_condition(field: &'static str, condition: u8) -> CodecError {
    CodecError::Reserved {
        field,
        value: u32::from(condition),
    }
}

/// Condition of a Value Trigger Setting
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueTrigger {
    /// Any change of state
    StateChanged,
    /// The value crossed the boundary
    CrossedBoundary(RawBound),
    /// The value is on the boundary
    OnBoundary(RawBound),
    /// The value changed by more than the operand
    ChangedMoreThan(RawBound),
    /// The value masked by the operand changed
    MaskThenCompare(RawBound),
    /// The value entered the range
    InsideBoundary {
        /// Lower bound
        lower: RawBound,
        /// Upper bound
        upper: RawBound,
    },
    /// The value left the range
    OutsideBoundary {
        /// Lower bound
        lower: RawBound,
        /// Upper bound
        upper: RawBound,
    },
    /// Triggering is disabled
    NoTrigger,
}

impl ValueTrigger {
    const FIELD: &'static str = "Value Trigger Setting";

    fn split_pair(operand: &[u8]) -> Result<(RawBound, RawBound), CodecError> {
        if operand.is_empty() || operand.len() % 2 != 0 {
            return Err(CodecError::InvalidLength {
                rule: LengthRule::Multiple { base: 3, step: 2 },
                actual: operand.len() + 1,
            });
        }
        let (lower, upper) = operand.split_at(operand.len() / 2);
        Ok((lower.into(), upper.into()))
    }

    fn single(operand: &[u8]) -> Result<RawBound, CodecError> {
        if operand.is_empty() {
            return Err(CodecError::insufficient(2, 1));
        }
        Ok(operand.into())
    }
}

/// Value Trigger Setting (0x290A)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValueTriggerSettingDescriptor;

impl Descriptor for ValueTriggerSettingDescriptor {
    type Value = ValueTrigger;
    const INFO: DescriptorInfo = DescriptorInfo::new(
        0x290A,
        "Value Trigger Setting",
        "org.bluetooth.descriptor.value_trigger_setting",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::AtLeast(1);

    fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError> {
        let (condition, operand) = (data[0], &data[1..]);
        Ok(match condition {
            0x00 => {
                expect_operand(ValueTrigger::FIELD, operand, 0)?;
                ValueTrigger::StateChanged
            }
            0x01 => ValueTrigger::CrossedBoundary(ValueTrigger::single(operand)?),
            0x02 => ValueTrigger::OnBoundary(ValueTrigger::single(operand)?),
            0x03 => ValueTrigger::ChangedMoreThan(ValueTrigger::single(operand)?),
            0x04 => ValueTrigger::MaskThenCompare(ValueTrigger::single(operand)?),
            0x05 => {
                let (lower, upper) = ValueTrigger::split_pair(operand)?;
                ValueTrigger::InsideBoundary { lower, upper }
            }
            0x06 => {
                let (lower, upper) = ValueTrigger::split_pair(operand)?;
                ValueTrigger::OutsideBoundary { lower, upper }
            }
            0x07 => {
                expect_operand(ValueTrigger::FIELD, operand, 0)?;
                ValueTrigger::NoTrigger
            }
            other => return Err(reserved_condition(ValueTrigger::FIELD, other)),
        })
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let (condition, operand): (u8, Vec<u8>) = match value {
            ValueTrigger::StateChanged => (0x00, Vec::new()),
            ValueTrigger::CrossedBoundary(v) => (0x01, v.0.clone()),
            ValueTrigger::OnBoundary(v) => (0x02, v.0.clone()),
            ValueTrigger::ChangedMoreThan(v) => (0x03, v.0.clone()),
            ValueTrigger::MaskThenCompare(v) => (0x04, v.0.clone()),
            ValueTrigger::InsideBoundary { lower, upper } => {
                (0x05, [lower.0.as_slice(), upper.0.as_slice()].concat())
            }
            ValueTrigger::OutsideBoundary { lower, upper } => {
                (0x06, [lower.0.as_slice(), upper.0.as_slice()].concat())
            }
            ValueTrigger::NoTrigger => (0x07, Vec::new()),
        };
        let mut writer = ByteWriter::with_capacity(1 + operand.len());
        writer.write_u8(condition).write_bytes(&operand);
        Ok(writer.into_vec())
    }

    fn validate(value: &Self::Value) -> Result<(), CodecError> {
        match value {
            ValueTrigger::InsideBoundary { lower, upper }
            | ValueTrigger::OutsideBoundary { lower, upper }
                if lower.0.len() != upper.0.len() =>
            {
                Err(CodecError::ValueTypeMismatch {
                    attribute: ValueTrigger::FIELD,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Condition of an Environmental Sensing Trigger Setting
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EsTrigger {
    /// Trigger inactive
    Inactive,
    /// Notify at a fixed interval, in seconds
    FixedInterval(u32),
    /// Notify no more often than every given number of seconds
    MinimumInterval(u32),
    /// Notify when the value changes
    ValueChanged,
    /// Value is less than the operand
    LessThan(RawBound),
    /// Value is less than or equal to the operand
    LessOrEqual(RawBound),
    /// Value is greater than the operand
    GreaterThan(RawBound),
    /// Value is greater than or equal to the operand
    GreaterOrEqual(RawBound),
    /// Value is equal to the operand
    EqualTo(RawBound),
    /// Value is not equal to the operand
    NotEqualTo(RawBound),
}

impl EsTrigger {
    const FIELD: &'static str = "Environmental Sensing Trigger Setting";
}

/// Environmental Sensing Trigger Setting (0x290D)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EsTriggerSettingDescriptor;

impl Descriptor for EsTriggerSettingDescriptor {
    type Value = EsTrigger;
    const INFO: DescriptorInfo = DescriptorInfo::new(
        0x290D,
        "Environmental Sensing Trigger Setting",
        "org.bluetooth.descriptor.es_trigger_setting",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::AtLeast(1);

    fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError> {
        let (condition, operand) = (data[0], &data[1..]);
        let compare = || -> Result<RawBound, CodecError> {
            if operand.is_empty() {
                Err(CodecError::insufficient(2, 1))
            } else {
                Ok(operand.into())
            }
        };
        Ok(match condition {
            0x00 => {
                expect_operand(EsTrigger::FIELD, operand, 0)?;
                EsTrigger::Inactive
            }
            0x01 => EsTrigger::FixedInterval(read_seconds(EsTrigger::FIELD, operand)?),
            0x02 => EsTrigger::MinimumInterval(read_seconds(EsTrigger::FIELD, operand)?),
            0x03 => {
                expect_operand(EsTrigger::FIELD, operand, 0)?;
                EsTrigger::ValueChanged
            }
            0x04 => EsTrigger::LessThan(compare()?),
            0x05 => EsTrigger::LessOrEqual(compare()?),
            0x06 => EsTrigger::GreaterThan(compare()?),
            0x07 => EsTrigger::GreaterOrEqual(compare()?),
            0x08 => EsTrigger::EqualTo(compare()?),
            0x09 => EsTrigger::NotEqualTo(compare()?),
            other => return Err(reserved_condition(EsTrigger::FIELD, other)),
        })
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut writer = ByteWriter::new();
        match value {
            EsTrigger::Inactive => {
                writer.write_u8(0x00);
            }
            EsTrigger::FixedInterval(seconds) => {
                writer.write_u8(0x01).write_u24(*seconds)?;
            }
            EsTrigger::MinimumInterval(seconds) => {
                writer.write_u8(0x02).write_u24(*seconds)?;
            }
            EsTrigger::ValueChanged => {
                writer.write_u8(0x03);
            }
            EsTrigger::LessThan(v) => {
                writer.write_u8(0x04).write_bytes(&v.0);
            }
            EsTrigger::LessOrEqual(v) => {
                writer.write_u8(0x05).write_bytes(&v.0);
            }
            EsTrigger::GreaterThan(v) => {
                writer.write_u8(0x06).write_bytes(&v.0);
            }
            EsTrigger::GreaterOrEqual(v) => {
                writer.write_u8(0x07).write_bytes(&v.0);
            }
            EsTrigger::EqualTo(v) => {
                writer.write_u8(0x08).write_bytes(&v.0);
            }
            EsTrigger::NotEqualTo(v) => {
                writer.write_u8(0x09).write_bytes(&v.0);
            }
        }
        Ok(writer.into_vec())
    }
}

/// Condition of a Time Trigger Setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeTrigger {
    /// No time-based triggering
    None,
    /// Indicate or notify at a fixed interval, in seconds
    FixedInterval(u32),
    /// Indicate or notify no more often than every given number of seconds
    MinimumInterval(u32),
    /// Indicate or notify after the value changed this many times
    ChangeCount(u16),
}

/// Time Trigger Setting (0x290E)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeTriggerSettingDescriptor;

impl Descriptor for TimeTriggerSettingDescriptor {
    type Value = TimeTrigger;
    const INFO: DescriptorInfo = DescriptorInfo::new(
        0x290E,
        "Time Trigger Setting",
        "org.bluetooth.descriptor.time_trigger_setting",
        None,
        ValueType::Struct,
    );
    const LENGTH: LengthRule = LengthRule::Between(1, 4);

    fn decode_value(data: &[u8]) -> Result<Self::Value, CodecError> {
        const FIELD: &str = "Time Trigger Setting";
        let (condition, operand) = (data[0], &data[1..]);
        Ok(match condition {
            0x00 => {
                expect_operand(FIELD, operand, 0)?;
                TimeTrigger::None
            }
            0x01 => TimeTrigger::FixedInterval(read_seconds(FIELD, operand)?),
            0x02 => TimeTrigger::MinimumInterval(read_seconds(FIELD, operand)?),
            0x03 => {
                expect_operand(FIELD, operand, 2)?;
                TimeTrigger::ChangeCount(ByteReader::new(operand).read_u16()?)
            }
            other => return Err(reserved_condition(FIELD, other)),
        })
    }

    fn encode_value(value: &Self::Value) -> Result<Vec<u8>, CodecError> {
        let mut writer = ByteWriter::with_capacity(4);
        match value {
            TimeTrigger::None => {
                writer.write_u8(0x00);
            }
            TimeTrigger::FixedInterval(seconds) => {
                writer.write_u8(0x01).write_u24(*seconds)?;
            }
            TimeTrigger::MinimumInterval(seconds) => {
                writer.write_u8(0x02).write_u24(*seconds)?;
            }
            TimeTrigger::ChangeCount(count) => {
                writer.write_u8(0x03).write_u16(*count);
            }
        }
        Ok(writer.into_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_trigger_setting() {
        let trigger =
            ValueTriggerSettingDescriptor::decode(&[0x05, 0x0A, 0x00, 0x14, 0x00]).unwrap();
        let ValueTrigger::InsideBoundary { lower, upper } = &trigger else {
            panic!("unexpected trigger {trigger:?}");
        };
        assert_eq!(lower.as_unsigned().unwrap(), 10);
        assert_eq!(upper.as_unsigned().unwrap(), 20);
        assert_eq!(
            ValueTriggerSettingDescriptor::encode(&trigger).unwrap(),
            [0x05, 0x0A, 0x00, 0x14, 0x00]
        );

        assert_eq!(
            ValueTriggerSettingDescriptor::decode(&[0x00]).unwrap(),
            ValueTrigger::StateChanged
        );
        assert!(ValueTriggerSettingDescriptor::decode(&[0x05, 0x0A, 0x00, 0x14]).is_err());
        assert!(ValueTriggerSettingDescriptor::decode(&[0x01]).is_err());
        assert!(matches!(
            ValueTriggerSettingDescriptor::decode(&[0x08]),
            Err(CodecError::Reserved { value: 8, .. })
        ));
    }

    #[test]
    fn test_es_trigger_setting() {
        assert_eq!(
            EsTriggerSettingDescriptor::decode(&[0x01, 0x3C, 0x00, 0x00]).unwrap(),
            EsTrigger::FixedInterval(60)
        );
        let greater = EsTriggerSettingDescriptor::decode(&[0x06, 0xC4, 0x09]).unwrap();
        assert_eq!(greater, EsTrigger::GreaterThan(RawBound(alloc::vec![0xC4, 0x09])));
        assert_eq!(
            EsTriggerSettingDescriptor::encode(&greater).unwrap(),
            [0x06, 0xC4, 0x09]
        );
        assert!(EsTriggerSettingDescriptor::decode(&[0x01, 0x3C]).is_err());
        assert!(EsTriggerSettingDescriptor::decode(&[0x0A]).is_err());
    }

    #[test]
    fn test_time_trigger_setting() {
        assert_eq!(
            TimeTriggerSettingDescriptor::decode(&[0x03, 0x05, 0x00]).unwrap(),
            TimeTrigger::ChangeCount(5)
        );
        assert_eq!(
            TimeTriggerSettingDescriptor::encode(&TimeTrigger::MinimumInterval(3600)).unwrap(),
            [0x02, 0x10, 0x0E, 0x00]
        );
        assert!(
            TimeTriggerSettingDescriptor::encode(&TimeTrigger::FixedInterval(1 << 24)).is_err()
        );
        assert!(TimeTriggerSettingDescriptor::decode(&[0x00, 0x01]).is_err());
    }
}
