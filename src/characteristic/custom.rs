//! Runtime-registered codecs
//!
//! Vendor characteristics that are not part of the SIG set are decoded by
//! trait objects implementing [`CharacteristicCodec`]. Registries store a
//! [`CodecFactory`] and instantiate it lazily, once per UUID.

use super::{
    CharacteristicInfo, CharacteristicKind, CharacteristicValue, Decoded, LengthRule,
    ParseContext, ParseResult, SpecialValue,
};
use crate::error::CodecError;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

/// Value produced by a custom codec
#[derive(Debug, Clone, PartialEq)]
pub enum CustomValue {
    /// Unsigned integer
    Unsigned(u64),
    /// Signed integer
    Signed(i64),
    /// Real number
    Float(f64),
    /// Flag
    Bool(bool),
    /// UTF-8 text
    Text(String),
    /// Opaque bytes
    Bytes(Vec<u8>),
    /// Named fields
    Fields(Vec<(String, CustomValue)>),
}

/// Object-safe codec for characteristics registered at runtime
pub trait CharacteristicCodec: Send + Sync {
    /// Metadata of the characteristic
    fn info(&self) -> CharacteristicInfo;

    /// Permitted payload lengths, checked before [`Self::decode`]
    fn length(&self) -> LengthRule {
        LengthRule::Any
    }

    /// Decode a payload
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] describing the malformed field.
    fn decode(
        &self,
        data: &[u8],
        ctx: &ParseContext<'_>,
    ) -> Result<Decoded<CustomValue>, CodecError>;

    /// Encode a value
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if the value cannot be represented.
    fn encode(&self, value: &CustomValue) -> Result<Vec<u8>, CodecError>;
}

/// Constructor stored in registries for custom codecs
pub type CodecFactory = fn() -> Arc<dyn CharacteristicCodec>;

/// What a registry maps a UUID to
#[derive(Clone, Copy)]
pub enum CodecClass {
    /// A built-in codec
    Sig(CharacteristicKind),
    /// A runtime-registered codec constructor
    Custom(CodecFactory),
}

impl fmt::Debug for CodecClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sig(kind) => f.debug_tuple("Sig").field(kind).finish(),
            Self::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// A ready-to-use codec instance
#[derive(Clone)]
pub enum CodecHandle {
    /// A built-in codec
    Sig(CharacteristicKind),
    /// A cached custom codec instance
    Custom(Arc<dyn CharacteristicCodec>),
}

impl fmt::Debug for CodecHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sig(kind) => f.debug_tuple("Sig").field(kind).finish(),
            Self::Custom(codec) => f.debug_tuple("Custom").field(&codec.info().name).finish(),
        }
    }
}

impl CodecHandle {
    /// Metadata of the codec
    #[must_use]
    pub fn info(&self) -> CharacteristicInfo {
        match self {
            Self::Sig(kind) => kind.info(),
            Self::Custom(codec) => codec.info(),
        }
    }

    /// The built-in kind, if this is a SIG codec
    #[must_use]
    pub const fn kind(&self) -> Option<CharacteristicKind> {
        match self {
            Self::Sig(kind) => Some(*kind),
            Self::Custom(_) => None,
        }
    }

    /// Decode a payload
    ///
    /// # Errors
    ///
    /// Returns the [`CodecError`] raised by the codec.
    pub fn decode(
        &self,
        data: &[u8],
        ctx: &ParseContext<'_>,
    ) -> Result<Decoded<CharacteristicValue>, CodecError> {
        match self {
            Self::Sig(kind) => kind.decode(data, ctx),
            Self::Custom(codec) => {
                codec.length().check(data.len())?;
                match codec.decode(data, ctx)? {
                    Decoded::Value(value) => Ok(Decoded::Value(CharacteristicValue::Custom(value))),
                    Decoded::Special(special) => ctx.apply_special_policy(special),
                }
            }
        }
    }

    /// Encode a value
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::ValueTypeMismatch`] if the value does not belong
    /// to this codec, or the codec's own error.
    pub fn encode(&self, value: &CharacteristicValue) -> Result<Vec<u8>, CodecError> {
        match (self, value) {
            (Self::Sig(kind), _) => kind.encode(value),
            (Self::Custom(codec), CharacteristicValue::Custom(custom)) => codec.encode(custom),
            (Self::Custom(codec), _) => Err(CodecError::ValueTypeMismatch {
                attribute: codec.info().name,
            }),
        }
    }

    /// Encode a sentinel
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Unsupported`] when the codec has no such sentinel.
    pub fn encode_special(&self, special: SpecialValue) -> Result<Vec<u8>, CodecError> {
        match self {
            Self::Sig(kind) => kind.encode_special(special),
            Self::Custom(codec) => Err(CodecError::Unsupported(codec.info().uuid)),
        }
    }

    /// Decode a payload, capturing any failure in the returned [`ParseResult`]
    #[must_use]
    pub fn parse_value(&self, data: &[u8], ctx: &ParseContext<'_>) -> ParseResult {
        ParseResult::new(self.info(), data, self.decode(data, ctx))
    }
}
