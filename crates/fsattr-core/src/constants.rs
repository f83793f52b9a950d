//! # Attribute Wire Constants
//!
//! Centralized constants from `<sys/attr.h>` and `<sys/vnode.h>`.
//!
//! The values are part of the kernel ABI and are defined here rather than
//! pulled from `libc` so the codec builds (and is tested) on every host, not
//! just on macOS.
//!
//! ## Organization
//!
//! - Attribute list header
//! - Valid masks per category
//! - Common attribute bits
//! - Volume attribute bits
//! - Directory attribute bits
//! - File attribute bits
//! - Extended common attribute bits
//! - Sizes of the wire structs

// ============================================================================
// Attribute List Header
// ============================================================================

/// Number of bitmaps in `struct attrlist` (`ATTR_BIT_MAP_COUNT`)
pub const ATTR_BIT_MAP_COUNT: u16 = 5;

/// Volume "attribute" that only marks a request as a volume request
///
/// The kernel requires this bit whenever any other volume bit is set. It has
/// no value in the buffer.
pub const ATTR_VOL_INFO: u32 = 0x8000_0000;

// ============================================================================
// Valid Masks
// ============================================================================

/// Every common bit is assigned
pub const ATTR_CMN_VALIDMASK: u32 = 0xFFFF_FFFF;
/// Volume bits the kernel accepts (includes `ATTR_VOL_INFO`)
pub const ATTR_VOL_VALIDMASK: u32 = 0xF0B7_FFFF;
/// Directory bits the kernel accepts
pub const ATTR_DIR_VALIDMASK: u32 = 0x0000_003F;
/// File bits the kernel accepts (the extent records are excluded)
pub const ATTR_FILE_VALIDMASK: u32 = 0x0000_37FF;
/// Extended common bits the kernel accepts
pub const ATTR_CMNEXT_VALIDMASK: u32 = 0x0000_1FFC;

// ============================================================================
// Common Attributes
// ============================================================================

pub const ATTR_CMN_NAME: u32 = 0x0000_0001;
pub const ATTR_CMN_DEVID: u32 = 0x0000_0002;
pub const ATTR_CMN_FSID: u32 = 0x0000_0004;
pub const ATTR_CMN_OBJTYPE: u32 = 0x0000_0008;
pub const ATTR_CMN_OBJTAG: u32 = 0x0000_0010;
pub const ATTR_CMN_OBJID: u32 = 0x0000_0020;
pub const ATTR_CMN_OBJPERMANENTID: u32 = 0x0000_0040;
pub const ATTR_CMN_PAROBJID: u32 = 0x0000_0080;
pub const ATTR_CMN_SCRIPT: u32 = 0x0000_0100;
pub const ATTR_CMN_CRTIME: u32 = 0x0000_0200;
pub const ATTR_CMN_MODTIME: u32 = 0x0000_0400;
pub const ATTR_CMN_CHGTIME: u32 = 0x0000_0800;
pub const ATTR_CMN_ACCTIME: u32 = 0x0000_1000;
pub const ATTR_CMN_BKUPTIME: u32 = 0x0000_2000;
pub const ATTR_CMN_FNDRINFO: u32 = 0x0000_4000;
pub const ATTR_CMN_OWNERID: u32 = 0x0000_8000;
pub const ATTR_CMN_GRPID: u32 = 0x0001_0000;
pub const ATTR_CMN_ACCESSMASK: u32 = 0x0002_0000;
pub const ATTR_CMN_FLAGS: u32 = 0x0004_0000;
pub const ATTR_CMN_GEN_COUNT: u32 = 0x0008_0000;
pub const ATTR_CMN_DOCUMENT_ID: u32 = 0x0010_0000;
pub const ATTR_CMN_USERACCESS: u32 = 0x0020_0000;
pub const ATTR_CMN_EXTENDED_SECURITY: u32 = 0x0040_0000;
pub const ATTR_CMN_UUID: u32 = 0x0080_0000;
pub const ATTR_CMN_GRPUUID: u32 = 0x0100_0000;
pub const ATTR_CMN_FILEID: u32 = 0x0200_0000;
pub const ATTR_CMN_PARENTID: u32 = 0x0400_0000;
pub const ATTR_CMN_FULLPATH: u32 = 0x0800_0000;
pub const ATTR_CMN_ADDEDTIME: u32 = 0x1000_0000;
/// Per-entry errno, only produced by `getattrlistbulk`
pub const ATTR_CMN_ERROR: u32 = 0x2000_0000;
pub const ATTR_CMN_DATA_PROTECT_FLAGS: u32 = 0x4000_0000;
/// Ask the kernel to prepend the set of attributes it actually returned
pub const ATTR_CMN_RETURNED_ATTRS: u32 = 0x8000_0000;

// ============================================================================
// Volume Attributes
// ============================================================================

pub const ATTR_VOL_FSTYPE: u32 = 0x0000_0001;
pub const ATTR_VOL_SIGNATURE: u32 = 0x0000_0002;
pub const ATTR_VOL_SIZE: u32 = 0x0000_0004;
pub const ATTR_VOL_SPACEFREE: u32 = 0x0000_0008;
pub const ATTR_VOL_SPACEAVAIL: u32 = 0x0000_0010;
pub const ATTR_VOL_MINALLOCATION: u32 = 0x0000_0020;
pub const ATTR_VOL_ALLOCATIONCLUMP: u32 = 0x0000_0040;
pub const ATTR_VOL_IOBLOCKSIZE: u32 = 0x0000_0080;
pub const ATTR_VOL_OBJCOUNT: u32 = 0x0000_0100;
pub const ATTR_VOL_FILECOUNT: u32 = 0x0000_0200;
pub const ATTR_VOL_DIRCOUNT: u32 = 0x0000_0400;
pub const ATTR_VOL_MAXOBJCOUNT: u32 = 0x0000_0800;
pub const ATTR_VOL_MOUNTPOINT: u32 = 0x0000_1000;
pub const ATTR_VOL_NAME: u32 = 0x0000_2000;
pub const ATTR_VOL_MOUNTFLAGS: u32 = 0x0000_4000;
pub const ATTR_VOL_MOUNTEDDEVICE: u32 = 0x0000_8000;
pub const ATTR_VOL_ENCODINGSUSED: u32 = 0x0001_0000;
pub const ATTR_VOL_CAPABILITIES: u32 = 0x0002_0000;
pub const ATTR_VOL_UUID: u32 = 0x0004_0000;
pub const ATTR_VOL_FSTYPENAME: u32 = 0x0010_0000;
pub const ATTR_VOL_FSSUBTYPE: u32 = 0x0020_0000;
pub const ATTR_VOL_SPACEUSED: u32 = 0x0080_0000;
pub const ATTR_VOL_QUOTA_SIZE: u32 = 0x1000_0000;
pub const ATTR_VOL_RESERVED_SIZE: u32 = 0x2000_0000;
pub const ATTR_VOL_ATTRIBUTES: u32 = 0x4000_0000;

// ============================================================================
// Directory Attributes
// ============================================================================

pub const ATTR_DIR_LINKCOUNT: u32 = 0x0000_0001;
pub const ATTR_DIR_ENTRYCOUNT: u32 = 0x0000_0002;
pub const ATTR_DIR_MOUNTSTATUS: u32 = 0x0000_0004;
pub const ATTR_DIR_ALLOCSIZE: u32 = 0x0000_0008;
pub const ATTR_DIR_IOBLOCKSIZE: u32 = 0x0000_0010;
pub const ATTR_DIR_DATALENGTH: u32 = 0x0000_0020;

// ============================================================================
// File Attributes
// ============================================================================

pub const ATTR_FILE_LINKCOUNT: u32 = 0x0000_0001;
pub const ATTR_FILE_TOTALSIZE: u32 = 0x0000_0002;
pub const ATTR_FILE_ALLOCSIZE: u32 = 0x0000_0004;
pub const ATTR_FILE_IOBLOCKSIZE: u32 = 0x0000_0008;
pub const ATTR_FILE_CLUMPSIZE: u32 = 0x0000_0010;
pub const ATTR_FILE_DEVTYPE: u32 = 0x0000_0020;
pub const ATTR_FILE_FILETYPE: u32 = 0x0000_0040;
pub const ATTR_FILE_FORKCOUNT: u32 = 0x0000_0080;
pub const ATTR_FILE_FORKLIST: u32 = 0x0000_0100;
pub const ATTR_FILE_DATALENGTH: u32 = 0x0000_0200;
pub const ATTR_FILE_DATAALLOCSIZE: u32 = 0x0000_0400;
pub const ATTR_FILE_DATAEXTENTS: u32 = 0x0000_0800;
pub const ATTR_FILE_RSRCLENGTH: u32 = 0x0000_1000;
pub const ATTR_FILE_RSRCALLOCSIZE: u32 = 0x0000_2000;
pub const ATTR_FILE_RSRCEXTENTS: u32 = 0x0000_4000;

// ============================================================================
// Extended Common Attributes (sent in the `forkattr` slot)
// ============================================================================

pub const ATTR_CMNEXT_RELPATH: u32 = 0x0000_0004;
pub const ATTR_CMNEXT_PRIVATESIZE: u32 = 0x0000_0008;
pub const ATTR_CMNEXT_LINKID: u32 = 0x0000_0010;
pub const ATTR_CMNEXT_NOFIRMLINKPATH: u32 = 0x0000_0020;
pub const ATTR_CMNEXT_REALDEVID: u32 = 0x0000_0040;
pub const ATTR_CMNEXT_REALFSID: u32 = 0x0000_0080;
pub const ATTR_CMNEXT_CLONEID: u32 = 0x0000_0100;
pub const ATTR_CMNEXT_EXT_FLAGS: u32 = 0x0000_0200;
pub const ATTR_CMNEXT_RECURSIVE_GENCOUNT: u32 = 0x0000_0400;
pub const ATTR_CMNEXT_ATTRIBUTION_TAG: u32 = 0x0000_0800;
pub const ATTR_CMNEXT_CLONE_REFCNT: u32 = 0x0000_1000;

// ============================================================================
// Wire Struct Sizes
// ============================================================================

/// `u_int32_t` length prefix at the start of every buffer (and bulk entry)
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// `attribute_set_t`: five `u_int32_t` masks
pub const ATTRIBUTE_SET_SIZE: usize = 20;

/// `attrreference_t`: `int32_t attr_dataoffset` + `u_int32_t attr_length`
pub const ATTR_REFERENCE_SIZE: usize = 8;

/// File type bits of a mode (`S_IFMT`), stripped from `ATTR_CMN_ACCESSMASK`
pub const S_IFMT: u32 = 0o170_000;
