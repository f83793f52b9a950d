//! Bounds-checked reader over an attribute buffer.

use crate::error::DecodeError;

/// A position in a byte slice
///
/// Every read checks the remaining length first and fails with
/// [`DecodeError::Truncated`] instead of reading past the end. Multi-byte
/// values are read in host byte order, like the kernel writes them.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a>
{
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a>
{
    pub(crate) fn new(bytes: &'a [u8]) -> Self
    {
        Self { bytes, position: 0 }
    }

    /// A cursor starting at `position`.
    pub(crate) fn at(bytes: &'a [u8], position: usize) -> Self
    {
        Self { bytes, position }
    }

    pub(crate) fn position(&self) -> usize
    {
        self.position
    }

    pub(crate) fn remaining(&self) -> usize
    {
        self.bytes.len().saturating_sub(self.position)
    }

    /// The whole underlying slice, independent of the position.
    pub(crate) fn bytes(&self) -> &'a [u8]
    {
        self.bytes
    }

    /// Consumes `len` bytes.
    pub(crate) fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError>
    {
        let bytes: &'a [u8] = self.bytes;
        let start = self.position;
        let slice = start
            .checked_add(len)
            .and_then(|end| bytes.get(start..end))
            .ok_or(DecodeError::Truncated {
                offset: self.position,
                needed: len,
                available: self.remaining(),
            })?;
        self.position += len;
        Ok(slice)
    }

    pub(crate) fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError>
    {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32, DecodeError>
    {
        self.read_array().map(u32::from_ne_bytes)
    }

    pub(crate) fn read_i32(&mut self) -> Result<i32, DecodeError>
    {
        self.read_array().map(i32::from_ne_bytes)
    }

    pub(crate) fn read_u64(&mut self) -> Result<u64, DecodeError>
    {
        self.read_array().map(u64::from_ne_bytes)
    }

    pub(crate) fn read_i64(&mut self) -> Result<i64, DecodeError>
    {
        self.read_array().map(i64::from_ne_bytes)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_reads_advance_position()
    {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&7u32.to_ne_bytes());
        bytes.extend_from_slice(&(-2i64).to_ne_bytes());
        let mut cursor = Cursor::new(&bytes);

        assert_eq!(cursor.read_u32().unwrap(), 7);
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.read_i64().unwrap(), -2);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_short_read_is_truncated_error()
    {
        let bytes = [1u8, 2, 3];
        let mut cursor = Cursor::at(&bytes, 1);

        let err = cursor.read_u32().unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                offset: 1,
                needed: 4,
                available: 2
            }
        );
        // A failed read does not move the cursor
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_position_past_end_has_nothing_remaining()
    {
        let bytes = [0u8; 4];
        let mut cursor = Cursor::at(&bytes, 8);
        assert_eq!(cursor.remaining(), 0);
        assert!(cursor.take(1).is_err());
        assert!(cursor.take(0).is_err());
    }
}
