//! # Attribute Catalog
//!
//! Static tables describing every attribute `getattrlist` can return.
//!
//! Attributes live in five independent categories, each with its own 32-bit
//! mask space (a volume bit and a file bit may share a position but mean
//! unrelated things):
//!
//! | Category         | `attrlist` field | Enum                          |
//! |------------------|------------------|-------------------------------|
//! | Common           | `commonattr`     | [`CommonAttribute`]           |
//! | Volume           | `volattr`        | [`VolumeAttribute`]           |
//! | Directory        | `dirattr`        | [`DirectoryAttribute`]        |
//! | File             | `fileattr`       | [`FileAttribute`]             |
//! | Extended common  | `forkattr`       | [`CommonExtendedAttribute`]   |
//!
//! ## Canonical order
//!
//! The kernel writes attributes into the buffer in a fixed order per category.
//! That order is **not** the bit order (`ATTR_CMN_ERROR` follows the returned
//! set, `ATTR_VOL_SPACEUSED` follows `ATTR_VOL_SPACEAVAIL`, ...), so each
//! category carries an explicit `ENTRIES` table in that order. Variant
//! discriminants are the table indexes; the catalog tests check that the two
//! never drift apart.
//!
//! ## References
//!
//! - [getattrlist(2) man page](https://developer.apple.com/library/archive/documentation/System/Conceptual/ManPages_iPhoneOS/man2/getattrlist.2.html)
//! - XNU `bsd/sys/attr.h` and `bsd/vfs/vfs_attrlist.c`

mod common;
mod directory;
mod extended;
mod file;
mod volume;

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

pub use common::CommonAttribute;
pub use directory::DirectoryAttribute;
pub use extended::CommonExtendedAttribute;
pub use file::FileAttribute;
use once_cell::sync::Lazy;
pub use volume::VolumeAttribute;

use crate::constants::{
    ATTRIBUTE_SET_SIZE, ATTR_CMNEXT_VALIDMASK, ATTR_CMN_VALIDMASK, ATTR_DIR_VALIDMASK, ATTR_FILE_VALIDMASK,
    ATTR_REFERENCE_SIZE, ATTR_VOL_VALIDMASK,
};

/// One of the five attribute namespaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category
{
    Common,
    Volume,
    Directory,
    File,
    CommonExtended,
}

impl Category
{
    /// All categories, in the order their attributes appear in a buffer.
    pub const ALL: [Category; 5] = [
        Category::Common,
        Category::Volume,
        Category::Directory,
        Category::File,
        Category::CommonExtended,
    ];

    /// Bits the kernel accepts for this category.
    pub const fn valid_mask(self) -> u32
    {
        match self {
            Category::Common => ATTR_CMN_VALIDMASK,
            Category::Volume => ATTR_VOL_VALIDMASK,
            Category::Directory => ATTR_DIR_VALIDMASK,
            Category::File => ATTR_FILE_VALIDMASK,
            Category::CommonExtended => ATTR_CMNEXT_VALIDMASK,
        }
    }

    /// Union of every catalogued bit in this category.
    pub fn known_mask(self) -> u32
    {
        match self {
            Category::Common => CommonAttribute::known_mask(),
            Category::Volume => VolumeAttribute::known_mask(),
            Category::Directory => DirectoryAttribute::known_mask(),
            Category::File => FileAttribute::known_mask(),
            Category::CommonExtended => CommonExtendedAttribute::known_mask(),
        }
    }

    /// Every attribute of this category, in canonical order.
    pub fn attributes(self) -> Vec<AttributeId>
    {
        match self {
            Category::Common => ids::<CommonAttribute>(),
            Category::Volume => ids::<VolumeAttribute>(),
            Category::Directory => ids::<DirectoryAttribute>(),
            Category::File => ids::<FileAttribute>(),
            Category::CommonExtended => ids::<CommonExtendedAttribute>(),
        }
    }
}

fn ids<A: Attribute>() -> Vec<AttributeId>
{
    A::ENTRIES.iter().map(|entry| entry.attribute.id()).collect()
}

impl fmt::Display for Category
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let name = match self {
            Category::Common => "common",
            Category::Volume => "volume",
            Category::Directory => "directory",
            Category::File => "file",
            Category::CommonExtended => "extended",
        };
        f.write_str(name)
    }
}

impl FromStr for Category
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "common" | "cmn" => Ok(Category::Common),
            "volume" | "vol" => Ok(Category::Volume),
            "directory" | "dir" => Ok(Category::Directory),
            "file" => Ok(Category::File),
            "extended" | "cmnext" | "common-extended" => Ok(Category::CommonExtended),
            _ => Err(format!(
                "Unknown attribute category: {s}. Use 'common', 'volume', 'directory', 'file', or 'extended'"
            )),
        }
    }
}

/// How an attribute with a fixed-size value is laid out in the buffer
///
/// Sizes match the Darwin 64-bit struct layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedKind
{
    /// `u_int32_t`, `uid_t`, `gid_t`, `text_encoding_t`, ...
    U32,
    /// `u_int64_t`
    U64,
    /// `off_t`
    Offset,
    /// `dev_t`
    Device,
    /// `fsid_t`
    FsId,
    /// `fsobj_type_t`
    ObjectType,
    /// `fsobj_id_t`
    ObjectId,
    /// `struct timespec`
    Timespec,
    /// `guid_t`
    Guid,
    /// `u_int32_t` mode with the file type bits removed
    AccessMask,
    /// `vol_capabilities_attr_t`
    VolumeCapabilities,
    /// `vol_attributes_attr_t`
    VolumeAttributes,
    /// `extentrecord` (8 HFS extents)
    ExtentRecord,
    /// `attribute_set_t`
    AttributeSet,
}

impl FixedKind
{
    /// Bytes the value occupies in the buffer.
    pub const fn size(self) -> usize
    {
        match self {
            FixedKind::U32 | FixedKind::Device | FixedKind::ObjectType | FixedKind::AccessMask => 4,
            FixedKind::U64 | FixedKind::Offset | FixedKind::FsId | FixedKind::ObjectId => 8,
            FixedKind::Timespec | FixedKind::Guid => 16,
            FixedKind::VolumeCapabilities => 32,
            FixedKind::VolumeAttributes => 2 * ATTRIBUTE_SET_SIZE,
            FixedKind::ExtentRecord => 64,
            FixedKind::AttributeSet => ATTRIBUTE_SET_SIZE,
        }
    }
}

/// What the bytes behind an `attrreference_t` hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind
{
    /// NUL-terminated UTF-8
    Text,
    /// Uninterpreted bytes
    Blob,
    /// Finder info: two 16-byte records back to back
    FinderInfo,
}

/// Decode rule of one attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeRule
{
    /// The value sits inline in the fixed area
    Fixed(FixedKind),
    /// An 8-byte descriptor sits inline, the content lives after the fixed area
    Reference(ReferenceKind),
}

impl DecodeRule
{
    /// Bytes the rule consumes from the fixed area.
    pub const fn inline_size(self) -> usize
    {
        match self {
            DecodeRule::Fixed(kind) => kind.size(),
            DecodeRule::Reference(_) => ATTR_REFERENCE_SIZE,
        }
    }
}

impl fmt::Display for DecodeRule
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            DecodeRule::Fixed(kind) => write!(f, "{kind:?} ({} bytes)", kind.size()),
            DecodeRule::Reference(kind) => write!(f, "reference -> {kind:?}"),
        }
    }
}

/// One row of a category table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry<A: 'static>
{
    /// The attribute this row describes
    pub attribute: A,
    /// Bit in the category mask
    pub mask: u32,
    /// How the value is laid out
    pub rule: DecodeRule,
    /// Name used for display and lookup
    pub name: &'static str,
}

impl<A> CatalogEntry<A>
{
    pub(crate) const fn new(attribute: A, mask: u32, rule: DecodeRule, name: &'static str) -> Self
    {
        Self {
            attribute,
            mask,
            rule,
            name,
        }
    }
}

/// An attribute of one category
///
/// Implemented by the five category enums. Everything is derived from the
/// category's `ENTRIES` table.
pub trait Attribute: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static
{
    /// Category the attribute belongs to
    const CATEGORY: Category;

    /// The category table, in canonical order
    const ENTRIES: &'static [CatalogEntry<Self>];

    /// Position of the attribute in `ENTRIES`
    fn index(self) -> usize;

    /// Wraps the attribute into a category-agnostic id
    fn id(self) -> AttributeId;

    /// The table row of this attribute.
    fn entry(self) -> &'static CatalogEntry<Self>
    {
        &Self::ENTRIES[self.index()]
    }

    /// Bit in the category mask.
    fn mask(self) -> u32
    {
        self.entry().mask
    }

    /// How the value is laid out in the buffer.
    fn rule(self) -> DecodeRule
    {
        self.entry().rule
    }

    /// Display name.
    fn name(self) -> &'static str
    {
        self.entry().name
    }

    /// Union of every catalogued bit of the category.
    fn known_mask() -> u32
    {
        Self::ENTRIES.iter().fold(0, |mask, entry| mask | entry.mask)
    }

    /// Attributes whose bits are set in `mask`, in canonical order.
    fn members(mask: u32) -> Vec<Self>
    {
        Self::ENTRIES
            .iter()
            .filter(|entry| mask & entry.mask != 0)
            .map(|entry| entry.attribute)
            .collect()
    }
}

/// An attribute of any category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeId
{
    Common(CommonAttribute),
    Volume(VolumeAttribute),
    Directory(DirectoryAttribute),
    File(FileAttribute),
    CommonExtended(CommonExtendedAttribute),
}

impl AttributeId
{
    /// The category of the attribute.
    pub const fn category(self) -> Category
    {
        match self {
            AttributeId::Common(_) => Category::Common,
            AttributeId::Volume(_) => Category::Volume,
            AttributeId::Directory(_) => Category::Directory,
            AttributeId::File(_) => Category::File,
            AttributeId::CommonExtended(_) => Category::CommonExtended,
        }
    }

    /// Bit in the category mask.
    pub fn mask(self) -> u32
    {
        match self {
            AttributeId::Common(a) => a.mask(),
            AttributeId::Volume(a) => a.mask(),
            AttributeId::Directory(a) => a.mask(),
            AttributeId::File(a) => a.mask(),
            AttributeId::CommonExtended(a) => a.mask(),
        }
    }

    /// How the value is laid out.
    pub fn rule(self) -> DecodeRule
    {
        match self {
            AttributeId::Common(a) => a.rule(),
            AttributeId::Volume(a) => a.rule(),
            AttributeId::Directory(a) => a.rule(),
            AttributeId::File(a) => a.rule(),
            AttributeId::CommonExtended(a) => a.rule(),
        }
    }

    /// Display name, without the category.
    pub fn name(self) -> &'static str
    {
        match self {
            AttributeId::Common(a) => a.name(),
            AttributeId::Volume(a) => a.name(),
            AttributeId::Directory(a) => a.name(),
            AttributeId::File(a) => a.name(),
            AttributeId::CommonExtended(a) => a.name(),
        }
    }
}

impl fmt::Display for AttributeId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}.{}", self.category(), self.name())
    }
}

static NAME_INDEX: Lazy<HashMap<(Category, String), AttributeId>> = Lazy::new(|| {
    Category::ALL
        .iter()
        .flat_map(|category| category.attributes())
        .map(|id| ((id.category(), id.name().to_lowercase()), id))
        .collect()
});

/// Finds an attribute by category and name (case-insensitive).
///
/// ```rust
/// use fsattr_core::catalog::{self, AttributeId, Category, CommonAttribute};
///
/// let id = catalog::lookup(Category::Common, "modificationTime");
/// assert_eq!(id, Some(AttributeId::Common(CommonAttribute::ModificationTime)));
/// ```
pub fn lookup(category: Category, name: &str) -> Option<AttributeId>
{
    NAME_INDEX.get(&(category, name.to_lowercase())).copied()
}
