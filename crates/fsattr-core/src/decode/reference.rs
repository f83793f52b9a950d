//! # Reference Resolution
//!
//! Variable-length attributes are stored as an `attrreference_t` in the fixed
//! area: a signed offset relative to the descriptor itself plus a length. The
//! content lives later in the buffer, usually after every fixed field.
//!
//! ```text
//!   origin                      origin + offset
//!     |                              |
//!     v                              v
//!   [ offset:i32 | length:u32 ] ... [ content (length bytes) ]
//! ```

use super::cursor::Cursor;
use crate::catalog::ReferenceKind;
use crate::constants::ATTR_REFERENCE_SIZE;
use crate::error::DecodeError;
use crate::types::finder::FINDER_INFO_SIZE;
use crate::types::{FinderInfo, ObjectType};
use crate::value::AttributeValue;

/// An `attrreference_t` plus the position it was read from
///
/// Only valid for the buffer it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeReference
{
    /// Buffer position of the descriptor (the offset's origin)
    pub origin: usize,
    /// `attr_dataoffset`, relative to `origin`
    pub offset: i32,
    /// `attr_length`
    pub length: u32,
}

impl AttributeReference
{
    /// Reads a descriptor at the cursor and moves past it (not past the content).
    pub(crate) fn read(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError>
    {
        let origin = cursor.position();
        let raw: [u8; ATTR_REFERENCE_SIZE] = cursor.read_array()?;
        let mut fields = Cursor::new(&raw);
        Ok(Self {
            origin,
            offset: fields.read_i32()?,
            length: fields.read_u32()?,
        })
    }

    /// The referenced bytes.
    ///
    /// ## Errors
    ///
    /// [`DecodeError::ReferenceOutOfBounds`] if `origin + offset` or
    /// `origin + offset + length` falls outside `buffer`.
    pub fn content<'a>(&self, buffer: &'a [u8]) -> Result<&'a [u8], DecodeError>
    {
        let out_of_bounds = || DecodeError::ReferenceOutOfBounds {
            origin: self.origin,
            offset: self.offset,
            length: self.length,
            buffer_len: buffer.len(),
        };

        let start = i64::try_from(self.origin)
            .ok()
            .and_then(|origin| origin.checked_add(i64::from(self.offset)))
            .and_then(|start| usize::try_from(start).ok())
            .ok_or_else(out_of_bounds)?;
        let length = usize::try_from(self.length).map_err(|_| out_of_bounds())?;
        let end = start.checked_add(length).ok_or_else(out_of_bounds)?;

        buffer.get(start..end).ok_or_else(out_of_bounds)
    }

    /// Resolves the reference into an owned value.
    ///
    /// `object_type` is the type decoded earlier from the same buffer, if any;
    /// it selects the file or folder shape of Finder info.
    pub fn resolve(
        &self,
        buffer: &[u8],
        kind: ReferenceKind,
        object_type: Option<ObjectType>,
    ) -> Result<AttributeValue, DecodeError>
    {
        let content = self.content(buffer)?;
        match kind {
            ReferenceKind::Text => resolve_text(content).map(AttributeValue::Text),
            ReferenceKind::Blob => Ok(AttributeValue::Blob(content.to_vec())),
            ReferenceKind::FinderInfo => {
                let directory = object_type.is_some_and(ObjectType::is_directory);
                resolve_finder_info(content, directory).map(AttributeValue::FinderInfo)
            }
        }
    }
}

/// Decodes a NUL-terminated string reference.
///
/// Exactly one trailing NUL is removed. A zero-length reference has no
/// terminator and is rejected.
pub fn resolve_text(content: &[u8]) -> Result<String, DecodeError>
{
    let text = match content.split_last() {
        None => return Err(DecodeError::EmptyString),
        Some((0, rest)) => rest,
        Some(_) => content,
    };
    Ok(String::from_utf8(text.to_vec())?)
}

/// Splits a Finder info reference into its two records.
///
/// The content must be exactly two records long.
pub fn resolve_finder_info(content: &[u8], directory: bool) -> Result<FinderInfo, DecodeError>
{
    let bytes: &[u8; FINDER_INFO_SIZE] = content.try_into().map_err(|_| DecodeError::CompositeLength {
        expected: FINDER_INFO_SIZE,
        actual: content.len(),
    })?;
    Ok(FinderInfo::from_be_bytes(bytes, directory))
}
