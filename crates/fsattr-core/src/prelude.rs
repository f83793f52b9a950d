//! Common module for library exports

pub use crate::buffer::RawAttributeBuffer;
pub use crate::catalog::{
    Attribute, AttributeId, Category, CommonAttribute, CommonExtendedAttribute, DirectoryAttribute, FileAttribute,
    VolumeAttribute,
};
pub use crate::decode::{AttributeMap, DecodedAttributes};
pub use crate::error::{AttributeError, Result};
pub use crate::fetch::{AttributeSyscall, Target};
#[cfg(target_os = "macos")]
pub use crate::platform::macos::*;
pub use crate::request::{AttributeRequest, AttributeSelection, AttributeSet, FsOptions};
pub use crate::types::{FinderInfo, Guid, ObjectType, Timespec};
pub use crate::value::AttributeValue;
