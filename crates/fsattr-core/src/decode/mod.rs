//! # Attribute Buffer Decoding
//!
//! Walks a [`RawAttributeBuffer`] and turns every present attribute into an
//! [`AttributeValue`].
//!
//! ## Algorithm
//!
//! 1. Skip the length prefix and, if present, the returned set.
//! 2. For each category in the order Common, Volume, Directory, File,
//!    CommonExtended, and within a category in its canonical order:
//!    - skip attributes not in the present set (and `returnedAttributes`
//!      itself, which was consumed in step 1);
//!    - fixed attributes are read in place and the cursor moves by their size;
//!    - reference attributes read an 8-byte descriptor, the cursor moves past
//!      the descriptor only, and the content is resolved relative to the
//!      descriptor's position.
//!
//! The first failure aborts the whole decode. A field that could not be read
//! leaves every later field at an unknown position, so partial results would
//! be misleading.
//!
//! ## Example
//!
//! ```rust
//! use fsattr_core::buffer::RawAttributeBuffer;
//! use fsattr_core::catalog::CommonAttribute;
//! use fsattr_core::request::AttributeSet;
//!
//! // Length prefix, then the object type (VREG)
//! let mut bytes = 8u32.to_ne_bytes().to_vec();
//! bytes.extend_from_slice(&1u32.to_ne_bytes());
//!
//! let mut requested = AttributeSet::default();
//! requested.insert(CommonAttribute::ObjectType);
//!
//! let decoded = RawAttributeBuffer::new(bytes, requested)?.decode()?;
//! assert_eq!(decoded.common.get(CommonAttribute::ObjectType).unwrap().to_string(), "regular");
//! # Ok::<(), fsattr_core::AttributeError>(())
//! ```

pub(crate) mod cursor;
pub mod reference;

use std::fmt;

use smallvec::SmallVec;
use tracing::trace;

use self::cursor::Cursor;
use self::reference::AttributeReference;
use crate::buffer::{read_attribute_set, RawAttributeBuffer};
use crate::catalog::{
    Attribute, AttributeId, Category, CommonAttribute, CommonExtendedAttribute, DecodeRule, DirectoryAttribute,
    FileAttribute, FixedKind, VolumeAttribute,
};
use crate::constants::{ATTRIBUTE_SET_SIZE, ATTR_CMN_RETURNED_ATTRS, ATTR_VOL_INFO, S_IFMT};
use crate::error::{AttributeError, DecodeError, Result};
use crate::request::AttributeSet;
use crate::types::{
    ExtentDescriptor, FsId, Guid, ObjectId, ObjectType, Timespec, VolumeAttributeInfo, VolumeCapabilities,
};
use crate::value::AttributeValue;

/// Decoded values of one category, in buffer order
///
/// Small and ordered: a request rarely holds more than a handful of
/// attributes per category.
#[derive(Clone, PartialEq, Eq)]
pub struct AttributeMap<A>
{
    entries: SmallVec<[(A, AttributeValue); 8]>,
}

impl<A> Default for AttributeMap<A>
{
    fn default() -> Self
    {
        Self {
            entries: SmallVec::new(),
        }
    }
}

impl<A: Attribute> AttributeMap<A>
{
    pub fn new() -> Self
    {
        Self::default()
    }

    pub(crate) fn insert(&mut self, attribute: A, value: AttributeValue)
    {
        self.entries.push((attribute, value));
    }

    pub fn get(&self, attribute: A) -> Option<&AttributeValue>
    {
        self.entries.iter().find(|(a, _)| *a == attribute).map(|(_, v)| v)
    }

    pub fn contains(&self, attribute: A) -> bool
    {
        self.get(attribute).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (A, &AttributeValue)> + '_
    {
        self.entries.iter().map(|(a, v)| (*a, v))
    }

    /// Attributes in buffer order.
    pub fn keys(&self) -> impl Iterator<Item = A> + '_
    {
        self.entries.iter().map(|(a, _)| *a)
    }

    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }
}

impl<A: Attribute> fmt::Debug for AttributeMap<A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_map().entries(self.entries.iter().map(|(a, v)| (a, v))).finish()
    }
}

/// Everything decoded from one buffer, one map per category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedAttributes
{
    pub common: AttributeMap<CommonAttribute>,
    pub volume: AttributeMap<VolumeAttribute>,
    pub directory: AttributeMap<DirectoryAttribute>,
    pub file: AttributeMap<FileAttribute>,
    pub common_extended: AttributeMap<CommonExtendedAttribute>,
}

impl DecodedAttributes
{
    /// Looks up an attribute of any category.
    pub fn get(&self, attribute: impl Into<AttributeId>) -> Option<&AttributeValue>
    {
        match attribute.into() {
            AttributeId::Common(a) => self.common.get(a),
            AttributeId::Volume(a) => self.volume.get(a),
            AttributeId::Directory(a) => self.directory.get(a),
            AttributeId::File(a) => self.file.get(a),
            AttributeId::CommonExtended(a) => self.common_extended.get(a),
        }
    }

    /// Every value in buffer order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeId, &AttributeValue)> + '_
    {
        self.common
            .iter()
            .map(|(a, v)| (a.id(), v))
            .chain(self.volume.iter().map(|(a, v)| (a.id(), v)))
            .chain(self.directory.iter().map(|(a, v)| (a.id(), v)))
            .chain(self.file.iter().map(|(a, v)| (a.id(), v)))
            .chain(self.common_extended.iter().map(|(a, v)| (a.id(), v)))
    }

    pub fn len(&self) -> usize
    {
        self.common.len() + self.volume.len() + self.directory.len() + self.file.len() + self.common_extended.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// `ATTR_CMN_NAME`, if decoded.
    pub fn name(&self) -> Option<&str>
    {
        self.common.get(CommonAttribute::Name).and_then(AttributeValue::as_str)
    }

    /// `ATTR_CMN_OBJTYPE`, if decoded.
    pub fn object_type(&self) -> Option<ObjectType>
    {
        self.common.get(CommonAttribute::ObjectType).and_then(AttributeValue::as_object_type)
    }

    /// The per-entry errno of a bulk read (`ATTR_CMN_ERROR`), if non-zero.
    pub fn error_code(&self) -> Option<i32>
    {
        self.common
            .get(CommonAttribute::Error)
            .and_then(AttributeValue::as_u32)
            .filter(|code| *code != 0)
            .and_then(|code| i32::try_from(code).ok())
    }
}

/// State carried between fields of one buffer
#[derive(Debug, Default)]
struct DecodeState
{
    /// Object type seen so far; shapes Finder info
    object_type: Option<ObjectType>,
}

/// Decodes every attribute present in `buffer`.
///
/// ## Errors
///
/// - [`AttributeError::UnknownAttributes`] if the present set has bits the
///   catalog does not describe
/// - [`AttributeError::Decode`] if any attribute is truncated, points outside
///   the buffer, or has malformed content
///
/// Attributes that were requested but not returned are simply absent from the
/// result.
pub fn decode(buffer: &RawAttributeBuffer) -> Result<DecodedAttributes>
{
    let present = buffer.present();
    check_known(&present)?;

    let mut cursor = Cursor::at(buffer.bytes(), buffer.body_offset());
    let mut state = DecodeState::default();

    let decoded = DecodedAttributes {
        common: decode_category(&mut cursor, present.common, &mut state)?,
        volume: decode_category(&mut cursor, present.volume, &mut state)?,
        directory: decode_category(&mut cursor, present.directory, &mut state)?,
        file: decode_category(&mut cursor, present.file, &mut state)?,
        common_extended: decode_category(&mut cursor, present.common_extended, &mut state)?,
    };

    trace!(
        attributes = decoded.len(),
        consumed = cursor.position(),
        length = buffer.len(),
        "Decoded attribute buffer"
    );
    Ok(decoded)
}

fn check_known(present: &AttributeSet) -> Result<()>
{
    for category in Category::ALL {
        let mut unknown = present.mask(category) & !category.known_mask();
        if category == Category::Volume {
            unknown &= !ATTR_VOL_INFO;
        }
        if unknown != 0 {
            return Err(AttributeError::UnknownAttributes {
                category,
                bits: unknown,
            });
        }
    }
    Ok(())
}

fn decode_category<A: Attribute>(
    cursor: &mut Cursor<'_>,
    mask: u32,
    state: &mut DecodeState,
) -> Result<AttributeMap<A>>
{
    let mut map = AttributeMap::new();
    if mask == 0 {
        return Ok(map);
    }

    for entry in A::ENTRIES {
        if mask & entry.mask == 0 {
            continue;
        }
        if A::CATEGORY == Category::Common && entry.mask == ATTR_CMN_RETURNED_ATTRS {
            continue;
        }

        let start = cursor.position();
        let value = decode_value(cursor, entry.rule, state).map_err(|source| AttributeError::Decode {
            attribute: entry.attribute.id(),
            source,
        })?;
        trace!(attribute = %entry.attribute.id(), offset = start, "Decoded attribute");

        if let AttributeValue::ObjectType(object_type) = value {
            state.object_type = Some(object_type);
        }
        map.insert(entry.attribute, value);
    }

    Ok(map)
}

fn decode_value(
    cursor: &mut Cursor<'_>,
    rule: DecodeRule,
    state: &DecodeState,
) -> std::result::Result<AttributeValue, DecodeError>
{
    match rule {
        DecodeRule::Fixed(kind) => read_fixed(cursor, kind),
        DecodeRule::Reference(kind) => {
            let reference = AttributeReference::read(cursor)?;
            reference.resolve(cursor.bytes(), kind, state.object_type)
        }
    }
}

fn read_fixed(cursor: &mut Cursor<'_>, kind: FixedKind) -> std::result::Result<AttributeValue, DecodeError>
{
    let value = match kind {
        FixedKind::U32 => AttributeValue::U32(cursor.read_u32()?),
        FixedKind::U64 => AttributeValue::U64(cursor.read_u64()?),
        FixedKind::Offset => AttributeValue::Offset(cursor.read_i64()?),
        FixedKind::Device => AttributeValue::Device(cursor.read_i32()?),
        FixedKind::FsId => AttributeValue::FsId(FsId {
            val: [cursor.read_i32()?, cursor.read_i32()?],
        }),
        FixedKind::ObjectType => AttributeValue::ObjectType(ObjectType::from_raw(cursor.read_u32()?)),
        FixedKind::ObjectId => AttributeValue::ObjectId(ObjectId {
            number: cursor.read_u32()?,
            generation: cursor.read_u32()?,
        }),
        FixedKind::Timespec => AttributeValue::Timespec(Timespec::new(cursor.read_i64()?, cursor.read_i64()?)),
        FixedKind::Guid => AttributeValue::Guid(Guid(cursor.read_array()?)),
        FixedKind::AccessMask => AttributeValue::AccessMask(cursor.read_u32()? & !S_IFMT),
        FixedKind::VolumeCapabilities => {
            let mut capabilities = VolumeCapabilities::default();
            for word in &mut capabilities.capabilities {
                *word = cursor.read_u32()?;
            }
            for word in &mut capabilities.valid {
                *word = cursor.read_u32()?;
            }
            AttributeValue::VolumeCapabilities(capabilities)
        }
        FixedKind::VolumeAttributes => AttributeValue::VolumeAttributes(VolumeAttributeInfo {
            valid: read_attribute_set(cursor)?,
            native: read_attribute_set(cursor)?,
        }),
        FixedKind::ExtentRecord => {
            let mut extents = [ExtentDescriptor::default(); 8];
            for extent in &mut extents {
                extent.start_block = cursor.read_u32()?;
                extent.block_count = cursor.read_u32()?;
            }
            AttributeValue::Extents(extents)
        }
        // Only the buffer header carries a set; kept raw if one is ever listed
        FixedKind::AttributeSet => AttributeValue::Blob(cursor.take(ATTRIBUTE_SET_SIZE)?.to_vec()),
    };
    Ok(value)
}
