//! Wire primitives
//!
//! Little-endian integer access, the SIG `M × 10^d × 2^b` resolution model,
//! IEEE-11073 medical floats and the date/time structures shared by many
//! characteristics. Every multi-byte field on the wire is little-endian.

pub mod ieee11073;
pub mod resolution;
pub mod time;

pub use ieee11073::{MedFloat32, SFloat};
pub use resolution::Resolution;
pub use time::{DateTime, DayDateTime, DayOfWeek, ExactTime256, TimeExponential};

use crate::error::CodecError;
use alloc::string::String;
use alloc::vec::Vec;

/// Read an unsigned little-endian integer of `width` bytes (1..=8) at `offset`
///
/// # Errors
///
/// Returns [`CodecError::InsufficientData`] when the buffer is too short.
///
/// # Panics
///
/// Panics if `width` is 0 or greater than 8.
pub fn decode_unsigned(data: &[u8], offset: usize, width: usize) -> Result<u64, CodecError> {
    assert!((1..=8).contains(&width), "integer width must be 1..=8");
    let end = offset + width;
    if data.len() < end {
        return Err(CodecError::insufficient(end, data.len()));
    }
    let mut raw = [0u8; 8];
    raw[..width].copy_from_slice(&data[offset..end]);
    Ok(u64::from_le_bytes(raw))
}

/// Read a two's complement little-endian integer of `width` bytes (1..=8) at `offset`
///
/// # Errors
///
/// Returns [`CodecError::InsufficientData`] when the buffer is too short.
///
/// # Panics
///
/// Panics if `width` is 0 or greater than 8.
pub fn decode_signed(data: &[u8], offset: usize, width: usize) -> Result<i64, CodecError> {
    let raw = decode_unsigned(data, offset, width)?;
    let shift = 64 - 8 * width as u32;
    #[allow(clippy::cast_possible_wrap)]
    let value = ((raw << shift) as i64) >> shift;
    Ok(value)
}

/// Sequential reader over a payload
///
/// Each read advances the cursor; a short buffer yields
/// [`CodecError::InsufficientData`] with the total length the read needed.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    /// Start reading at the beginning of `data`
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Current offset into the payload
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of unread bytes
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Whether every byte has been consumed
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Take the next `len` bytes
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] if fewer than `len` bytes remain.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        let end = self.position + len;
        if end > self.data.len() {
            return Err(CodecError::insufficient(end, self.data.len()));
        }
        let bytes = &self.data[self.position..end];
        self.position = end;
        Ok(bytes)
    }

    /// Take the next `N` bytes as an array
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] if fewer than `N` bytes remain.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Take every remaining byte
    pub fn read_rest(&mut self) -> &'a [u8] {
        let rest = &self.data[self.position..];
        self.position = self.data.len();
        rest
    }

    fn read_unsigned(&mut self, width: usize) -> Result<u64, CodecError> {
        let value = decode_unsigned(self.data, self.position, width)?;
        self.position += width;
        Ok(value)
    }

    fn read_signed(&mut self, width: usize) -> Result<i64, CodecError> {
        let value = decode_signed(self.data, self.position, width)?;
        self.position += width;
        Ok(value)
    }

    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] on a short buffer.
    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.read_bytes(1)?[0])
    }

    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] on a short buffer.
    pub fn read_i8(&mut self) -> Result<i8, CodecError> {
        Ok(i8::from_le_bytes([self.read_u8()?]))
    }

    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] on a short buffer.
    pub fn read_u16(&mut self) -> Result<u16, CodecError> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] on a short buffer.
    pub fn read_i16(&mut self) -> Result<i16, CodecError> {
        Ok(i16::from_le_bytes(self.read_array()?))
    }

    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] on a short buffer.
    #[allow(clippy::cast_possible_truncation)]
    pub fn read_u24(&mut self) -> Result<u32, CodecError> {
        Ok(self.read_unsigned(3)? as u32)
    }

    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] on a short buffer.
    #[allow(clippy::cast_possible_truncation)]
    pub fn read_i24(&mut self) -> Result<i32, CodecError> {
        Ok(self.read_signed(3)? as i32)
    }

    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] on a short buffer.
    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] on a short buffer.
    pub fn read_i32(&mut self) -> Result<i32, CodecError> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] on a short buffer.
    pub fn read_u40(&mut self) -> Result<u64, CodecError> {
        self.read_unsigned(5)
    }

    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] on a short buffer.
    pub fn read_u48(&mut self) -> Result<u64, CodecError> {
        self.read_unsigned(6)
    }

    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] on a short buffer.
    pub fn read_u64(&mut self) -> Result<u64, CodecError> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] on a short buffer.
    pub fn read_f32(&mut self) -> Result<f32, CodecError> {
        Ok(f32::from_le_bytes(self.read_array()?))
    }

    /// Read an IEEE-11073 16-bit SFLOAT
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] on a short buffer.
    pub fn read_sfloat(&mut self) -> Result<SFloat, CodecError> {
        Ok(SFloat::from_raw(self.read_u16()?))
    }

    /// Read an IEEE-11073 32-bit FLOAT
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] on a short buffer.
    pub fn read_float(&mut self) -> Result<MedFloat32, CodecError> {
        Ok(MedFloat32::from_raw(self.read_u32()?))
    }

    /// Read a 7-byte Date Time structure
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InsufficientData`] on a short buffer.
    pub fn read_date_time(&mut self) -> Result<DateTime, CodecError> {
        DateTime::decode(self.read_bytes(DateTime::LEN)?)
    }

    /// Read the remaining bytes as UTF-8 text
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidUtf8`] when the bytes are not valid UTF-8.
    pub fn read_utf8_rest(&mut self) -> Result<String, CodecError> {
        decode_utf8(self.read_rest())
    }
}

/// Decode UTF-8 text, trimming trailing NUL padding
///
/// # Errors
///
/// Returns [`CodecError::InvalidUtf8`] with the offset of the first invalid byte.
pub fn decode_utf8(data: &[u8]) -> Result<String, CodecError> {
    let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    core::str::from_utf8(&data[..end])
        .map(String::from)
        .map_err(|e| CodecError::InvalidUtf8 {
            position: e.valid_up_to(),
        })
}

/// Builder for encoded payloads
///
/// Writers for odd widths reject values that do not fit rather than wrapping.
#[derive(Debug, Clone, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    /// Create an empty writer
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Create a writer with reserved capacity
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Finish and return the encoded bytes
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    /// Number of bytes written so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Append raw bytes
    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Append a byte
    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    /// Append a signed byte
    pub fn write_i8(&mut self, value: i8) -> &mut Self {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Append a little-endian `u16`
    pub fn write_u16(&mut self, value: u16) -> &mut Self {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Append a little-endian `i16`
    pub fn write_i16(&mut self, value: i16) -> &mut Self {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Append a little-endian 24-bit unsigned integer
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OutOfRange`] if `value` exceeds `0xFFFFFF`.
    pub fn write_u24(&mut self, value: u32) -> Result<&mut Self, CodecError> {
        CodecError::check_range("uint24", f64::from(value), 0.0, f64::from(0x00FF_FFFF))?;
        Ok(self.write_bytes(&value.to_le_bytes()[..3]))
    }

    /// Append a little-endian 24-bit signed integer
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OutOfRange`] if `value` does not fit in 24 bits.
    pub fn write_i24(&mut self, value: i32) -> Result<&mut Self, CodecError> {
        CodecError::check_range(
            "sint24",
            f64::from(value),
            -f64::from(0x0080_0000),
            f64::from(0x007F_FFFF),
        )?;
        Ok(self.write_bytes(&value.to_le_bytes()[..3]))
    }

    /// Append a little-endian `u32`
    pub fn write_u32(&mut self, value: u32) -> &mut Self {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Append a little-endian `i32`
    pub fn write_i32(&mut self, value: i32) -> &mut Self {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Append a little-endian 40-bit unsigned integer
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OutOfRange`] if `value` does not fit in 40 bits.
    pub fn write_u40(&mut self, value: u64) -> Result<&mut Self, CodecError> {
        if value >> 40 != 0 {
            return Err(out_of_range_u64("uint40", value, (1 << 40) - 1));
        }
        Ok(self.write_bytes(&value.to_le_bytes()[..5]))
    }

    /// Append a little-endian 48-bit unsigned integer
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::OutOfRange`] if `value` does not fit in 48 bits.
    pub fn write_u48(&mut self, value: u64) -> Result<&mut Self, CodecError> {
        if value >> 48 != 0 {
            return Err(out_of_range_u64("uint48", value, (1 << 48) - 1));
        }
        Ok(self.write_bytes(&value.to_le_bytes()[..6]))
    }

    /// Append a little-endian `u64`
    pub fn write_u64(&mut self, value: u64) -> &mut Self {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Append a little-endian IEEE-754 `f32`
    pub fn write_f32(&mut self, value: f32) -> &mut Self {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Append an IEEE-11073 SFLOAT
    pub fn write_sfloat(&mut self, value: SFloat) -> &mut Self {
        self.write_u16(value.to_raw())
    }

    /// Append an IEEE-11073 FLOAT
    pub fn write_float(&mut self, value: MedFloat32) -> &mut Self {
        self.write_u32(value.to_raw())
    }

    /// Append a 7-byte Date Time structure
    ///
    /// # Errors
    ///
    /// Propagates validation failures of the date time fields.
    pub fn write_date_time(&mut self, value: &DateTime) -> Result<&mut Self, CodecError> {
        let encoded = value.encode()?;
        Ok(self.write_bytes(&encoded))
    }
}

#[allow(clippy::cast_precision_loss)]
fn out_of_range_u64(field: &'static str, value: u64, max: u64) -> CodecError {
    CodecError::OutOfRange {
        field,
        value: value as f64,
        min: 0.0,
        max: max as f64,
    }
}

/// Narrow an integer to a target type, reporting the field on overflow
///
/// # Errors
///
/// Returns [`CodecError::OutOfRange`] when the value does not fit in `T`.
#[allow(clippy::cast_precision_loss)]
pub fn narrow<T>(field: &'static str, value: i64) -> Result<T, CodecError>
where
    T: TryFrom<i64> + Bounded,
{
    T::try_from(value).map_err(|_| CodecError::OutOfRange {
        field,
        value: value as f64,
        min: T::MIN_F64,
        max: T::MAX_F64,
    })
}

/// Integer types with known bounds, used by [`narrow`]
pub trait Bounded {
    /// Smallest representable value as `f64`
    const MIN_F64: f64;
    /// Largest representable value as `f64`
    const MAX_F64: f64;
}

macro_rules! impl_bounded {
    ($($t:ty),*) => {
        $(
            impl Bounded for $t {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                const MIN_F64: f64 = <$t>::MIN as f64;
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                const MAX_F64: f64 = <$t>::MAX as f64;
            }
        )*
    };
}

impl_bounded!(u8, i8, u16, i16, u32, i32, u64, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_unsigned_widths() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
        assert_eq!(decode_unsigned(&data, 0, 1).unwrap(), 0x01);
        assert_eq!(decode_unsigned(&data, 0, 2).unwrap(), 0x0201);
        assert_eq!(decode_unsigned(&data, 1, 3).unwrap(), 0x04_0302);
        assert_eq!(decode_unsigned(&data, 0, 6).unwrap(), 0x0605_0403_0201);
    }

    #[test]
    fn test_decode_signed_sign_extension() {
        assert_eq!(decode_signed(&[0xFF], 0, 1).unwrap(), -1);
        assert_eq!(decode_signed(&[0x00, 0x80], 0, 2).unwrap(), -32768);
        assert_eq!(decode_signed(&[0xFF, 0xFF, 0x7F], 0, 3).unwrap(), 0x7F_FFFF);
        assert_eq!(decode_signed(&[0x00, 0x00, 0x80], 0, 3).unwrap(), -0x80_0000);
    }

    #[test]
    fn test_decode_short_buffer() {
        let err = decode_unsigned(&[0x01], 0, 2).unwrap_err();
        assert_eq!(err, CodecError::insufficient(2, 1));
    }

    #[test]
    fn test_reader_sequence() {
        let data = [0x10, 0x34, 0x12, 0x56, 0x34, 0x12, b'h', b'i'];
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_u8().unwrap(), 0x10);
        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_u24().unwrap(), 0x12_3456);
        assert_eq!(reader.read_utf8_rest().unwrap(), "hi");
        assert!(reader.is_empty());
        assert!(matches!(
            reader.read_u8(),
            Err(CodecError::InsufficientData {
                required: 9,
                actual: 8
            })
        ));
    }

    #[test]
    fn test_writer_rejects_overflow() {
        let mut writer = ByteWriter::new();
        assert!(writer.write_u24(0x0100_0000).is_err());
        assert!(writer.write_i24(-0x80_0001).is_err());
        writer.write_u24(0x12_3456).unwrap();
        writer.write_i24(-2).unwrap();
        assert_eq!(writer.into_vec(), [0x56, 0x34, 0x12, 0xFE, 0xFF, 0xFF]);
    }

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_utf8(b"Nordic\0\0").unwrap(), "Nordic");
        assert_eq!(
            decode_utf8(&[b'a', 0xFF, b'b']).unwrap_err(),
            CodecError::InvalidUtf8 { position: 1 }
        );
    }

    #[test]
    fn test_narrow() {
        assert_eq!(narrow::<u8>("level", 200).unwrap(), 200);
        assert!(narrow::<u8>("level", 256).is_err());
        assert!(narrow::<i8>("offset", -129).is_err());
    }
}
