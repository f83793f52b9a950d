//! # Raw Attribute Buffers
//!
//! The bytes a getattrlist-family call wrote, plus the header facts needed to
//! walk them.
//!
//! ## Layout
//!
//! ```text
//! +--------------------+-----------------------------+----------------+-------------------+
//! | length: u32        | returned set (20 bytes)     | fixed fields   | reference content |
//! | (includes itself)  | only with returnedAttributes| canonical order| (strings, blobs)  |
//! +--------------------+-----------------------------+----------------+-------------------+
//! ```

use crate::constants::{ATTRIBUTE_SET_SIZE, ATTR_CMN_RETURNED_ATTRS, LENGTH_PREFIX_SIZE};
use crate::decode::cursor::Cursor;
use crate::decode::{self, DecodedAttributes};
use crate::error::{AttributeError, DecodeError, Result};
use crate::request::AttributeSet;

/// An immutable attribute buffer with its header parsed
///
/// The bytes are cut to the length the kernel reported, so nothing past that
/// point is ever decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAttributeBuffer
{
    bytes: Vec<u8>,
    requested: AttributeSet,
    returned: Option<AttributeSet>,
}

impl RawAttributeBuffer
{
    /// Parses the header of `bytes`.
    ///
    /// `requested` is the set that was sent to the kernel. If it contains
    /// `returnedAttributes`, the returned set is read right after the length
    /// prefix.
    ///
    /// ## Errors
    ///
    /// [`AttributeError::MalformedBuffer`] when the buffer is shorter than the
    /// length prefix, the prefix is smaller than itself or larger than the
    /// buffer, or the returned set does not fit.
    pub fn new(mut bytes: Vec<u8>, requested: AttributeSet) -> Result<Self>
    {
        let length = read_length_prefix(&bytes)?;
        bytes.truncate(length);

        let returned = if requested.common & ATTR_CMN_RETURNED_ATTRS != 0 {
            let mut cursor = Cursor::at(&bytes, LENGTH_PREFIX_SIZE);
            Some(read_attribute_set(&mut cursor).map_err(AttributeError::MalformedBuffer)?)
        } else {
            None
        };

        Ok(Self {
            bytes,
            requested,
            returned,
        })
    }

    /// Copies `bytes` and parses the header.
    pub fn from_slice(bytes: &[u8], requested: AttributeSet) -> Result<Self>
    {
        Self::new(bytes.to_vec(), requested)
    }

    /// The buffer contents, length prefix included.
    pub fn bytes(&self) -> &[u8]
    {
        &self.bytes
    }

    /// Length reported by the kernel.
    pub fn len(&self) -> usize
    {
        self.bytes.len()
    }

    /// Always false: a valid buffer holds at least its length prefix.
    pub fn is_empty(&self) -> bool
    {
        self.bytes.is_empty()
    }

    pub fn requested(&self) -> AttributeSet
    {
        self.requested
    }

    /// The kernel's returned set, when it was requested.
    pub fn returned(&self) -> Option<AttributeSet>
    {
        self.returned
    }

    /// The attributes actually in the buffer: the returned set if present,
    /// otherwise the requested set.
    pub fn present(&self) -> AttributeSet
    {
        self.returned.unwrap_or(self.requested)
    }

    /// Position of the first attribute field.
    pub(crate) fn body_offset(&self) -> usize
    {
        if self.returned.is_some() {
            LENGTH_PREFIX_SIZE + ATTRIBUTE_SET_SIZE
        } else {
            LENGTH_PREFIX_SIZE
        }
    }

    /// Decodes every present attribute. See [`decode::decode`].
    pub fn decode(&self) -> Result<DecodedAttributes>
    {
        decode::decode(self)
    }
}

/// Reads and validates the 4-byte length prefix.
pub(crate) fn read_length_prefix(bytes: &[u8]) -> Result<usize>
{
    let advertised = Cursor::new(bytes).read_u32().map_err(AttributeError::MalformedBuffer)?;
    match usize::try_from(advertised) {
        Ok(length) if (LENGTH_PREFIX_SIZE..=bytes.len()).contains(&length) => Ok(length),
        _ => Err(AttributeError::MalformedBuffer(DecodeError::LengthPrefix {
            advertised,
            available: bytes.len(),
        })),
    }
}

/// Reads an `attribute_set_t`, unclamped.
pub(crate) fn read_attribute_set(cursor: &mut Cursor<'_>) -> std::result::Result<AttributeSet, DecodeError>
{
    Ok(AttributeSet {
        common: cursor.read_u32()?,
        volume: cursor.read_u32()?,
        directory: cursor.read_u32()?,
        file: cursor.read_u32()?,
        common_extended: cursor.read_u32()?,
    })
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn with_prefix(body: &[u8], extra: usize) -> Vec<u8>
    {
        let length = u32::try_from(4 + body.len()).unwrap();
        let mut bytes = length.to_ne_bytes().to_vec();
        bytes.extend_from_slice(body);
        bytes.resize(bytes.len() + extra, 0xEE);
        bytes
    }

    #[test]
    fn test_trailing_bytes_are_cut()
    {
        let buffer = RawAttributeBuffer::new(with_prefix(&[1, 2, 3, 4], 8), AttributeSet::default()).unwrap();
        assert_eq!(buffer.len(), 8);
        assert_eq!(buffer.returned(), None);
        assert_eq!(buffer.body_offset(), 4);
    }

    #[test]
    fn test_bad_length_prefix()
    {
        let too_short = RawAttributeBuffer::new(vec![8, 0], AttributeSet::default());
        assert!(matches!(
            too_short,
            Err(AttributeError::MalformedBuffer(DecodeError::Truncated { .. }))
        ));

        let mut overlong = with_prefix(&[0; 4], 0);
        overlong[..4].copy_from_slice(&64u32.to_ne_bytes());
        assert!(matches!(
            RawAttributeBuffer::new(overlong, AttributeSet::default()),
            Err(AttributeError::MalformedBuffer(DecodeError::LengthPrefix {
                advertised: 64,
                available: 8
            }))
        ));

        let zero = 0u32.to_ne_bytes().to_vec();
        assert!(matches!(
            RawAttributeBuffer::new(zero, AttributeSet::default()),
            Err(AttributeError::MalformedBuffer(DecodeError::LengthPrefix { advertised: 0, .. }))
        ));
    }

    #[test]
    fn test_returned_set_is_read_when_requested()
    {
        let mut body = Vec::new();
        for mask in [ATTR_CMN_RETURNED_ATTRS | 0x1, 0, 0, 0, 0] {
            body.extend_from_slice(&mask.to_ne_bytes());
        }
        let requested = AttributeSet {
            common: ATTR_CMN_RETURNED_ATTRS | 0x1 | 0x400,
            ..AttributeSet::default()
        };

        let buffer = RawAttributeBuffer::new(with_prefix(&body, 0), requested).unwrap();
        assert_eq!(buffer.returned().map(|set| set.common), Some(ATTR_CMN_RETURNED_ATTRS | 0x1));
        assert_eq!(buffer.present().common, ATTR_CMN_RETURNED_ATTRS | 0x1);
        assert_eq!(buffer.body_offset(), 24);
    }

    #[test]
    fn test_missing_returned_set_is_malformed()
    {
        let requested = AttributeSet {
            common: ATTR_CMN_RETURNED_ATTRS,
            ..AttributeSet::default()
        };
        assert!(matches!(
            RawAttributeBuffer::new(with_prefix(&[0; 8], 0), requested),
            Err(AttributeError::MalformedBuffer(DecodeError::Truncated {
                offset: 12,
                needed: 4,
                available: 0
            }))
        ));
    }
}
