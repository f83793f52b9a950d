//! # Attribute Values
//!
//! The closed set of value shapes an attribute can decode to. Each catalog
//! entry's [`DecodeRule`](crate::catalog::DecodeRule) maps to exactly one
//! variant, so callers can match exhaustively instead of downcasting.

use std::fmt;

use crate::types::{
    ExtentRecord, FinderInfo, FsId, Guid, ObjectId, ObjectType, Timespec, VolumeAttributeInfo, VolumeCapabilities,
};

/// A decoded attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue
{
    /// `u_int32_t` and friends (ids, counts, flags, errno)
    U32(u32),
    /// `u_int64_t`
    U64(u64),
    /// `off_t` (sizes)
    Offset(i64),
    /// `dev_t`
    Device(i32),
    FsId(FsId),
    ObjectType(ObjectType),
    ObjectId(ObjectId),
    Timespec(Timespec),
    Guid(Guid),
    /// Permission bits, file type bits already removed
    AccessMask(u32),
    VolumeCapabilities(VolumeCapabilities),
    VolumeAttributes(VolumeAttributeInfo),
    Extents(ExtentRecord),
    /// A string reference, trailing NUL removed
    Text(String),
    /// An uninterpreted reference
    Blob(Vec<u8>),
    FinderInfo(FinderInfo),
}

impl AttributeValue
{
    pub fn as_u32(&self) -> Option<u32>
    {
        match self {
            AttributeValue::U32(v) | AttributeValue::AccessMask(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64>
    {
        match self {
            AttributeValue::U64(v) => Some(*v),
            AttributeValue::U32(v) => Some(u64::from(*v)),
            _ => None,
        }
    }

    /// Size-like values (`off_t`).
    pub fn as_offset(&self) -> Option<i64>
    {
        match self {
            AttributeValue::Offset(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_device(&self) -> Option<i32>
    {
        match self {
            AttributeValue::Device(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_fsid(&self) -> Option<FsId>
    {
        match self {
            AttributeValue::FsId(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_object_type(&self) -> Option<ObjectType>
    {
        match self {
            AttributeValue::ObjectType(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_object_id(&self) -> Option<ObjectId>
    {
        match self {
            AttributeValue::ObjectId(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_timespec(&self) -> Option<Timespec>
    {
        match self {
            AttributeValue::Timespec(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_guid(&self) -> Option<Guid>
    {
        match self {
            AttributeValue::Guid(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str>
    {
        match self {
            AttributeValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]>
    {
        match self {
            AttributeValue::Blob(v) => Some(v),
            AttributeValue::Text(v) => Some(v.as_bytes()),
            _ => None,
        }
    }

    pub fn as_finder_info(&self) -> Option<&FinderInfo>
    {
        match self {
            AttributeValue::FinderInfo(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_volume_capabilities(&self) -> Option<&VolumeCapabilities>
    {
        match self {
            AttributeValue::VolumeCapabilities(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_volume_attributes(&self) -> Option<&VolumeAttributeInfo>
    {
        match self {
            AttributeValue::VolumeAttributes(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_extents(&self) -> Option<&ExtentRecord>
    {
        match self {
            AttributeValue::Extents(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            AttributeValue::U32(v) => write!(f, "{v}"),
            AttributeValue::U64(v) => write!(f, "{v}"),
            AttributeValue::Offset(v) => write!(f, "{v}"),
            AttributeValue::Device(v) => write!(f, "{:#x}", v),
            AttributeValue::FsId(v) => write!(f, "{v}"),
            AttributeValue::ObjectType(v) => write!(f, "{v}"),
            AttributeValue::ObjectId(v) => write!(f, "{v}"),
            AttributeValue::Timespec(v) => write!(f, "{v}"),
            AttributeValue::Guid(v) => write!(f, "{v}"),
            AttributeValue::AccessMask(v) => write!(f, "{v:04o}"),
            AttributeValue::VolumeCapabilities(v) => write!(f, "{v}"),
            AttributeValue::VolumeAttributes(v) => write!(f, "{v}"),
            AttributeValue::Extents(extents) => {
                let used: Vec<String> = extents
                    .iter()
                    .filter(|e| e.block_count != 0)
                    .map(|e| format!("{}+{}", e.start_block, e.block_count))
                    .collect();
                write!(f, "[{}]", used.join(", "))
            }
            AttributeValue::Text(v) => write!(f, "{v:?}"),
            AttributeValue::Blob(v) => {
                write!(f, "{} bytes", v.len())?;
                if !v.is_empty() {
                    f.write_str(" ")?;
                    for byte in v.iter().take(16) {
                        write!(f, "{byte:02x}")?;
                    }
                    if v.len() > 16 {
                        f.write_str("...")?;
                    }
                }
                Ok(())
            }
            AttributeValue::FinderInfo(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_display_forms()
    {
        assert_eq!(AttributeValue::AccessMask(0o644).to_string(), "0644");
        assert_eq!(AttributeValue::Text("a.txt".into()).to_string(), "\"a.txt\"");
        assert_eq!(AttributeValue::Blob(vec![1, 2]).to_string(), "2 bytes 0102");
        assert_eq!(AttributeValue::Blob(Vec::new()).to_string(), "0 bytes");
        assert_eq!(AttributeValue::Timespec(Timespec::new(5, 7)).to_string(), "5.000000007");
    }

    #[test]
    fn test_accessors_reject_other_shapes()
    {
        let value = AttributeValue::Offset(4096);
        assert_eq!(value.as_offset(), Some(4096));
        assert_eq!(value.as_u32(), None);
        assert_eq!(value.as_str(), None);
        assert_eq!(AttributeValue::U32(3).as_u64(), Some(3));
    }
}
