//! # Types
//!
//! Fixed-layout values found in attribute buffers.
//!
//! Each type mirrors one Darwin struct (`struct timespec`, `fsid_t`,
//! `fsobj_id_t`, `guid_t`, `vol_capabilities_attr_t`, ...) field for field, but
//! is decoded explicitly from bytes rather than transmuted, so none of them
//! needs `#[repr(C)]`.

pub mod extent;
pub mod finder;
pub mod ids;
pub mod object;
pub mod time;
pub mod volume;

// Re-export all public types
pub use extent::{ExtentDescriptor, ExtentRecord};
pub use finder::{ExtendedFileInfo, ExtendedFolderInfo, FileInfo, FinderInfo, FolderInfo, Point, Rect};
pub use ids::{FsId, Guid, ObjectId};
pub use object::ObjectType;
pub use time::Timespec;
pub use volume::{VolumeAttributeInfo, VolumeCapabilities};
