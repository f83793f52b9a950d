//! Directory attributes (`ATTR_DIR_*`).

use super::{Attribute, AttributeId, CatalogEntry, Category, DecodeRule, FixedKind};
use crate::constants::*;

/// An `ATTR_DIR_*` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DirectoryAttribute
{
    LinkCount = 0,
    EntryCount = 1,
    MountStatus = 2,
    AllocationSize = 3,
    IoBlockSize = 4,
    DataLength = 5,
}

use DecodeRule::Fixed;
use DirectoryAttribute as D;

const ENTRIES: [CatalogEntry<DirectoryAttribute>; 6] = [
    CatalogEntry::new(D::LinkCount, ATTR_DIR_LINKCOUNT, Fixed(FixedKind::U32), "linkCount"),
    CatalogEntry::new(D::EntryCount, ATTR_DIR_ENTRYCOUNT, Fixed(FixedKind::U32), "entryCount"),
    CatalogEntry::new(D::MountStatus, ATTR_DIR_MOUNTSTATUS, Fixed(FixedKind::U32), "mountStatus"),
    CatalogEntry::new(D::AllocationSize, ATTR_DIR_ALLOCSIZE, Fixed(FixedKind::Offset), "physicalSize"),
    CatalogEntry::new(D::IoBlockSize, ATTR_DIR_IOBLOCKSIZE, Fixed(FixedKind::U32), "ioBlockSize"),
    CatalogEntry::new(D::DataLength, ATTR_DIR_DATALENGTH, Fixed(FixedKind::Offset), "logicalSize"),
];

impl Attribute for DirectoryAttribute
{
    const CATEGORY: Category = Category::Directory;
    const ENTRIES: &'static [CatalogEntry<Self>] = &ENTRIES;

    fn index(self) -> usize
    {
        self as usize
    }

    fn id(self) -> AttributeId
    {
        AttributeId::Directory(self)
    }
}

impl From<DirectoryAttribute> for AttributeId
{
    fn from(attribute: DirectoryAttribute) -> Self
    {
        AttributeId::Directory(attribute)
    }
}
