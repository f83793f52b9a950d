//! Volume attributes (`ATTR_VOL_*`).
//!
//! Only meaningful when the target is the root of a mounted volume. The
//! request builder adds `ATTR_VOL_INFO` on its own; it is not listed here
//! because it has no value in the buffer.

use super::{Attribute, AttributeId, CatalogEntry, Category, DecodeRule, FixedKind, ReferenceKind};
use crate::constants::*;

/// An `ATTR_VOL_*` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VolumeAttribute
{
    FileSystemType = 0,
    Signature = 1,
    Size = 2,
    FreeSpace = 3,
    AvailableSpace = 4,
    UsedSpace = 5,
    MinimumAllocationSize = 6,
    AllocationClumpSize = 7,
    IoBlockSize = 8,
    ObjectCount = 9,
    FileCount = 10,
    DirectoryCount = 11,
    MaximumObjectCount = 12,
    MountPoint = 13,
    Name = 14,
    MountFlags = 15,
    MountedDevice = 16,
    EncodingsUsed = 17,
    Capabilities = 18,
    Uuid = 19,
    QuotaSize = 20,
    ReservedSize = 21,
    Attributes = 22,
    FileSystemTypeName = 23,
    FileSystemSubtype = 24,
}

use DecodeRule::{Fixed, Reference};
use VolumeAttribute as V;

const ENTRIES: [CatalogEntry<VolumeAttribute>; 25] = [
    CatalogEntry::new(V::FileSystemType, ATTR_VOL_FSTYPE, Fixed(FixedKind::U32), "fileSystemType"),
    CatalogEntry::new(V::Signature, ATTR_VOL_SIGNATURE, Fixed(FixedKind::U32), "signature"),
    CatalogEntry::new(V::Size, ATTR_VOL_SIZE, Fixed(FixedKind::Offset), "size"),
    CatalogEntry::new(V::FreeSpace, ATTR_VOL_SPACEFREE, Fixed(FixedKind::Offset), "freeSpace"),
    CatalogEntry::new(V::AvailableSpace, ATTR_VOL_SPACEAVAIL, Fixed(FixedKind::Offset), "availableSpace"),
    CatalogEntry::new(V::UsedSpace, ATTR_VOL_SPACEUSED, Fixed(FixedKind::Offset), "usedSpace"),
    CatalogEntry::new(V::MinimumAllocationSize, ATTR_VOL_MINALLOCATION, Fixed(FixedKind::Offset), "minimumAllocationSize"),
    CatalogEntry::new(V::AllocationClumpSize, ATTR_VOL_ALLOCATIONCLUMP, Fixed(FixedKind::Offset), "allocationClumpSize"),
    CatalogEntry::new(V::IoBlockSize, ATTR_VOL_IOBLOCKSIZE, Fixed(FixedKind::U32), "ioBlockSize"),
    CatalogEntry::new(V::ObjectCount, ATTR_VOL_OBJCOUNT, Fixed(FixedKind::U32), "objectCount"),
    CatalogEntry::new(V::FileCount, ATTR_VOL_FILECOUNT, Fixed(FixedKind::U32), "fileCount"),
    CatalogEntry::new(V::DirectoryCount, ATTR_VOL_DIRCOUNT, Fixed(FixedKind::U32), "directoryCount"),
    CatalogEntry::new(V::MaximumObjectCount, ATTR_VOL_MAXOBJCOUNT, Fixed(FixedKind::U32), "maximumObjectCount"),
    CatalogEntry::new(V::MountPoint, ATTR_VOL_MOUNTPOINT, Reference(ReferenceKind::Text), "mountPoint"),
    CatalogEntry::new(V::Name, ATTR_VOL_NAME, Reference(ReferenceKind::Text), "name"),
    CatalogEntry::new(V::MountFlags, ATTR_VOL_MOUNTFLAGS, Fixed(FixedKind::U32), "mountFlags"),
    CatalogEntry::new(V::MountedDevice, ATTR_VOL_MOUNTEDDEVICE, Reference(ReferenceKind::Text), "mountedDevice"),
    CatalogEntry::new(V::EncodingsUsed, ATTR_VOL_ENCODINGSUSED, Fixed(FixedKind::U64), "encodingsUsed"),
    CatalogEntry::new(V::Capabilities, ATTR_VOL_CAPABILITIES, Fixed(FixedKind::VolumeCapabilities), "capabilities"),
    CatalogEntry::new(V::Uuid, ATTR_VOL_UUID, Fixed(FixedKind::Guid), "uuid"),
    CatalogEntry::new(V::QuotaSize, ATTR_VOL_QUOTA_SIZE, Fixed(FixedKind::Offset), "quotaSize"),
    CatalogEntry::new(V::ReservedSize, ATTR_VOL_RESERVED_SIZE, Fixed(FixedKind::Offset), "reservedSize"),
    CatalogEntry::new(V::Attributes, ATTR_VOL_ATTRIBUTES, Fixed(FixedKind::VolumeAttributes), "attributes"),
    CatalogEntry::new(V::FileSystemTypeName, ATTR_VOL_FSTYPENAME, Reference(ReferenceKind::Text), "fileSystemTypeName"),
    CatalogEntry::new(V::FileSystemSubtype, ATTR_VOL_FSSUBTYPE, Fixed(FixedKind::U32), "fileSystemSubtype"),
];

impl Attribute for VolumeAttribute
{
    const CATEGORY: Category = Category::Volume;
    const ENTRIES: &'static [CatalogEntry<Self>] = &ENTRIES;

    fn index(self) -> usize
    {
        self as usize
    }

    fn id(self) -> AttributeId
    {
        AttributeId::Volume(self)
    }
}

impl From<VolumeAttribute> for AttributeId
{
    fn from(attribute: VolumeAttribute) -> Self
    {
        AttributeId::Volume(attribute)
    }
}
