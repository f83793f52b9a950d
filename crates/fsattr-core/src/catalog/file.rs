//! File attributes (`ATTR_FILE_*`).
//!
//! `DataExtents` and `ResourceExtents` are catalogued so old buffers can be
//! described, but current kernels reject them: they are outside
//! `ATTR_FILE_VALIDMASK` and cannot be requested.

use super::{Attribute, AttributeId, CatalogEntry, Category, DecodeRule, FixedKind, ReferenceKind};
use crate::constants::*;

/// An `ATTR_FILE_*` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileAttribute
{
    LinkCount = 0,
    TotalSize = 1,
    AllocationSize = 2,
    IoBlockSize = 3,
    ClumpSize = 4,
    DeviceType = 5,
    FileType = 6,
    ForkCount = 7,
    ForkList = 8,
    DataLength = 9,
    DataAllocationSize = 10,
    DataExtents = 11,
    ResourceLength = 12,
    ResourceAllocationSize = 13,
    ResourceExtents = 14,
}

use DecodeRule::{Fixed, Reference};
use FileAttribute as F;

const ENTRIES: [CatalogEntry<FileAttribute>; 15] = [
    CatalogEntry::new(F::LinkCount, ATTR_FILE_LINKCOUNT, Fixed(FixedKind::U32), "linkCount"),
    CatalogEntry::new(F::TotalSize, ATTR_FILE_TOTALSIZE, Fixed(FixedKind::Offset), "logicalSize"),
    CatalogEntry::new(F::AllocationSize, ATTR_FILE_ALLOCSIZE, Fixed(FixedKind::Offset), "physicalSize"),
    CatalogEntry::new(F::IoBlockSize, ATTR_FILE_IOBLOCKSIZE, Fixed(FixedKind::U32), "ioBlockSize"),
    CatalogEntry::new(F::ClumpSize, ATTR_FILE_CLUMPSIZE, Fixed(FixedKind::U32), "clumpSize"),
    CatalogEntry::new(F::DeviceType, ATTR_FILE_DEVTYPE, Fixed(FixedKind::U32), "deviceType"),
    CatalogEntry::new(F::FileType, ATTR_FILE_FILETYPE, Fixed(FixedKind::U32), "fileType"),
    CatalogEntry::new(F::ForkCount, ATTR_FILE_FORKCOUNT, Fixed(FixedKind::U32), "forkCount"),
    CatalogEntry::new(F::ForkList, ATTR_FILE_FORKLIST, Reference(ReferenceKind::Blob), "forkList"),
    CatalogEntry::new(F::DataLength, ATTR_FILE_DATALENGTH, Fixed(FixedKind::Offset), "dataLength"),
    CatalogEntry::new(F::DataAllocationSize, ATTR_FILE_DATAALLOCSIZE, Fixed(FixedKind::Offset), "dataAllocationSize"),
    CatalogEntry::new(F::DataExtents, ATTR_FILE_DATAEXTENTS, Fixed(FixedKind::ExtentRecord), "dataExtents"),
    CatalogEntry::new(F::ResourceLength, ATTR_FILE_RSRCLENGTH, Fixed(FixedKind::Offset), "resourceLength"),
    CatalogEntry::new(F::ResourceAllocationSize, ATTR_FILE_RSRCALLOCSIZE, Fixed(FixedKind::Offset), "resourceAllocationSize"),
    CatalogEntry::new(F::ResourceExtents, ATTR_FILE_RSRCEXTENTS, Fixed(FixedKind::ExtentRecord), "resourceExtents"),
];

impl Attribute for FileAttribute
{
    const CATEGORY: Category = Category::File;
    const ENTRIES: &'static [CatalogEntry<Self>] = &ENTRIES;

    fn index(self) -> usize
    {
        self as usize
    }

    fn id(self) -> AttributeId
    {
        AttributeId::File(self)
    }
}

impl From<FileAttribute> for AttributeId
{
    fn from(attribute: FileAttribute) -> Self
    {
        AttributeId::File(attribute)
    }
}
