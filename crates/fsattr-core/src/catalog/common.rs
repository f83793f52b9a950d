//! Common attributes (`ATTR_CMN_*`), valid for every object type.

use super::{Attribute, AttributeId, CatalogEntry, Category, DecodeRule, FixedKind, ReferenceKind};
use crate::constants::*;

/// An `ATTR_CMN_*` attribute
///
/// Discriminants are positions in the canonical order. `ReturnedAttributes`
/// and `Error` come first, the rest follow bit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommonAttribute
{
    ReturnedAttributes = 0,
    Error = 1,
    Name = 2,
    DeviceId = 3,
    FilesystemId = 4,
    ObjectType = 5,
    ObjectTag = 6,
    ObjectId = 7,
    ObjectPermanentId = 8,
    ParentObjectId = 9,
    TextEncoding = 10,
    CreationTime = 11,
    ModificationTime = 12,
    ChangeTime = 13,
    AccessTime = 14,
    BackupTime = 15,
    FinderInfo = 16,
    OwnerId = 17,
    GroupId = 18,
    AccessMask = 19,
    Flags = 20,
    GenerationCount = 21,
    DocumentId = 22,
    UserAccess = 23,
    ExtendedSecurity = 24,
    OwnerUuid = 25,
    GroupUuid = 26,
    FileId = 27,
    ParentId = 28,
    FullPath = 29,
    AddedTime = 30,
    DataProtectionClass = 31,
}

use CommonAttribute as C;
use DecodeRule::{Fixed, Reference};

const ENTRIES: [CatalogEntry<CommonAttribute>; 32] = [
    CatalogEntry::new(C::ReturnedAttributes, ATTR_CMN_RETURNED_ATTRS, Fixed(FixedKind::AttributeSet), "returnedAttributes"),
    CatalogEntry::new(C::Error, ATTR_CMN_ERROR, Fixed(FixedKind::U32), "error"),
    CatalogEntry::new(C::Name, ATTR_CMN_NAME, Reference(ReferenceKind::Text), "name"),
    CatalogEntry::new(C::DeviceId, ATTR_CMN_DEVID, Fixed(FixedKind::Device), "deviceID"),
    CatalogEntry::new(C::FilesystemId, ATTR_CMN_FSID, Fixed(FixedKind::FsId), "filesystemID"),
    CatalogEntry::new(C::ObjectType, ATTR_CMN_OBJTYPE, Fixed(FixedKind::ObjectType), "objectType"),
    CatalogEntry::new(C::ObjectTag, ATTR_CMN_OBJTAG, Fixed(FixedKind::U32), "objectTag"),
    CatalogEntry::new(C::ObjectId, ATTR_CMN_OBJID, Fixed(FixedKind::ObjectId), "objectID"),
    CatalogEntry::new(C::ObjectPermanentId, ATTR_CMN_OBJPERMANENTID, Fixed(FixedKind::ObjectId), "objectPermanentID"),
    CatalogEntry::new(C::ParentObjectId, ATTR_CMN_PAROBJID, Fixed(FixedKind::ObjectId), "parentObjectID"),
    CatalogEntry::new(C::TextEncoding, ATTR_CMN_SCRIPT, Fixed(FixedKind::U32), "textEncoding"),
    CatalogEntry::new(C::CreationTime, ATTR_CMN_CRTIME, Fixed(FixedKind::Timespec), "creationTime"),
    CatalogEntry::new(C::ModificationTime, ATTR_CMN_MODTIME, Fixed(FixedKind::Timespec), "modificationTime"),
    CatalogEntry::new(C::ChangeTime, ATTR_CMN_CHGTIME, Fixed(FixedKind::Timespec), "changeTime"),
    CatalogEntry::new(C::AccessTime, ATTR_CMN_ACCTIME, Fixed(FixedKind::Timespec), "accessTime"),
    CatalogEntry::new(C::BackupTime, ATTR_CMN_BKUPTIME, Fixed(FixedKind::Timespec), "backupTime"),
    CatalogEntry::new(C::FinderInfo, ATTR_CMN_FNDRINFO, Reference(ReferenceKind::FinderInfo), "finderInfo"),
    CatalogEntry::new(C::OwnerId, ATTR_CMN_OWNERID, Fixed(FixedKind::U32), "ownerID"),
    CatalogEntry::new(C::GroupId, ATTR_CMN_GRPID, Fixed(FixedKind::U32), "groupID"),
    CatalogEntry::new(C::AccessMask, ATTR_CMN_ACCESSMASK, Fixed(FixedKind::AccessMask), "accessMask"),
    CatalogEntry::new(C::Flags, ATTR_CMN_FLAGS, Fixed(FixedKind::U32), "flags"),
    CatalogEntry::new(C::GenerationCount, ATTR_CMN_GEN_COUNT, Fixed(FixedKind::U32), "generationCount"),
    CatalogEntry::new(C::DocumentId, ATTR_CMN_DOCUMENT_ID, Fixed(FixedKind::U32), "documentID"),
    CatalogEntry::new(C::UserAccess, ATTR_CMN_USERACCESS, Fixed(FixedKind::U32), "userAccess"),
    CatalogEntry::new(C::ExtendedSecurity, ATTR_CMN_EXTENDED_SECURITY, Reference(ReferenceKind::Blob), "extendedSecurity"),
    CatalogEntry::new(C::OwnerUuid, ATTR_CMN_UUID, Fixed(FixedKind::Guid), "ownerUUID"),
    CatalogEntry::new(C::GroupUuid, ATTR_CMN_GRPUUID, Fixed(FixedKind::Guid), "groupUUID"),
    CatalogEntry::new(C::FileId, ATTR_CMN_FILEID, Fixed(FixedKind::U64), "fileID"),
    CatalogEntry::new(C::ParentId, ATTR_CMN_PARENTID, Fixed(FixedKind::U64), "parentID"),
    CatalogEntry::new(C::FullPath, ATTR_CMN_FULLPATH, Reference(ReferenceKind::Text), "fullPath"),
    CatalogEntry::new(C::AddedTime, ATTR_CMN_ADDEDTIME, Fixed(FixedKind::Timespec), "addedTime"),
    CatalogEntry::new(C::DataProtectionClass, ATTR_CMN_DATA_PROTECT_FLAGS, Fixed(FixedKind::U32), "dataProtectionClass"),
];

impl Attribute for CommonAttribute
{
    const CATEGORY: Category = Category::Common;
    const ENTRIES: &'static [CatalogEntry<Self>] = &ENTRIES;

    fn index(self) -> usize
    {
        self as usize
    }

    fn id(self) -> AttributeId
    {
        AttributeId::Common(self)
    }
}

impl From<CommonAttribute> for AttributeId
{
    fn from(attribute: CommonAttribute) -> Self
    {
        AttributeId::Common(attribute)
    }
}
