//! Extended common attributes (`ATTR_CMNEXT_*`).
//!
//! These travel in the `forkattr` slot of `struct attrlist`, and the kernel
//! only reads them that way when `FSOPT_ATTR_CMN_EXTENDED` is set. The request
//! builder turns that option on whenever this category is non-empty.

use super::{Attribute, AttributeId, CatalogEntry, Category, DecodeRule, FixedKind, ReferenceKind};
use crate::constants::*;

/// An `ATTR_CMNEXT_*` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommonExtendedAttribute
{
    RelativePath = 0,
    PrivateSize = 1,
    LinkId = 2,
    NoFirmlinkPath = 3,
    RealDeviceId = 4,
    RealFilesystemId = 5,
    CloneId = 6,
    ExtendedFlags = 7,
    RecursiveGenerationCount = 8,
    AttributionTag = 9,
    CloneReferenceCount = 10,
}

use CommonExtendedAttribute as X;
use DecodeRule::{Fixed, Reference};

const ENTRIES: [CatalogEntry<CommonExtendedAttribute>; 11] = [
    CatalogEntry::new(X::RelativePath, ATTR_CMNEXT_RELPATH, Reference(ReferenceKind::Text), "relativePath"),
    CatalogEntry::new(X::PrivateSize, ATTR_CMNEXT_PRIVATESIZE, Fixed(FixedKind::Offset), "privateSize"),
    CatalogEntry::new(X::LinkId, ATTR_CMNEXT_LINKID, Fixed(FixedKind::U64), "linkID"),
    CatalogEntry::new(X::NoFirmlinkPath, ATTR_CMNEXT_NOFIRMLINKPATH, Reference(ReferenceKind::Text), "noFirmlinkPath"),
    CatalogEntry::new(X::RealDeviceId, ATTR_CMNEXT_REALDEVID, Fixed(FixedKind::Device), "realDeviceID"),
    CatalogEntry::new(X::RealFilesystemId, ATTR_CMNEXT_REALFSID, Fixed(FixedKind::FsId), "realFilesystemID"),
    CatalogEntry::new(X::CloneId, ATTR_CMNEXT_CLONEID, Fixed(FixedKind::U64), "cloneID"),
    CatalogEntry::new(X::ExtendedFlags, ATTR_CMNEXT_EXT_FLAGS, Fixed(FixedKind::U64), "extendedFlags"),
    CatalogEntry::new(X::RecursiveGenerationCount, ATTR_CMNEXT_RECURSIVE_GENCOUNT, Fixed(FixedKind::U64), "recursiveGenerationCount"),
    CatalogEntry::new(X::AttributionTag, ATTR_CMNEXT_ATTRIBUTION_TAG, Fixed(FixedKind::U64), "attributionTag"),
    CatalogEntry::new(X::CloneReferenceCount, ATTR_CMNEXT_CLONE_REFCNT, Fixed(FixedKind::U32), "cloneReferenceCount"),
];

impl Attribute for CommonExtendedAttribute
{
    const CATEGORY: Category = Category::CommonExtended;
    const ENTRIES: &'static [CatalogEntry<Self>] = &ENTRIES;

    fn index(self) -> usize
    {
        self as usize
    }

    fn id(self) -> AttributeId
    {
        AttributeId::CommonExtended(self)
    }
}

impl From<CommonExtendedAttribute> for AttributeId
{
    fn from(attribute: CommonExtendedAttribute) -> Self
    {
        AttributeId::CommonExtended(attribute)
    }
}
