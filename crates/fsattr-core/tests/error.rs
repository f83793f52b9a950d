//! Tests for error handling

use std::io;

use fsattr_core::catalog::{Category, CommonAttribute, FileAttribute};
use fsattr_core::error::{AttributeError, DecodeError, FetchPhase, Result};

#[test]
fn test_syscall_error_display()
{
    let error = AttributeError::Syscall {
        phase: FetchPhase::Probe,
        target: "/nonexistent".to_string(),
        source: io::Error::from_raw_os_error(libc::ENOENT),
    };
    let message = format!("{}", error);
    assert!(message.contains("probe"));
    assert!(message.contains("/nonexistent"));
}

#[test]
fn test_syscall_error_keeps_errno()
{
    let error = AttributeError::Syscall {
        phase: FetchPhase::Fetch,
        target: "fd 3".to_string(),
        source: io::Error::from_raw_os_error(libc::EACCES),
    };
    assert_eq!(error.raw_os_error(), Some(libc::EACCES));
    assert_eq!(error.attribute(), None);
}

#[test]
fn test_io_error_conversion()
{
    let io_err = io::Error::from_raw_os_error(libc::ENOTDIR);
    let error: AttributeError = io_err.into();

    match &error {
        AttributeError::Io(source) => assert_eq!(source.raw_os_error(), Some(libc::ENOTDIR)),
        other => panic!("Expected Io, got {:?}", other),
    }
    assert_eq!(error.raw_os_error(), Some(libc::ENOTDIR));
}

#[test]
fn test_invalid_attribute_display()
{
    let error = AttributeError::InvalidAttribute {
        attribute: FileAttribute::DataExtents.into(),
    };
    let message = format!("{}", error);
    assert!(message.contains("file.dataExtents"));
    assert_eq!(error.attribute(), Some(FileAttribute::DataExtents.into()));
    assert_eq!(error.raw_os_error(), None);
}

#[test]
fn test_decode_error_display()
{
    let error = AttributeError::Decode {
        attribute: CommonAttribute::Name.into(),
        source: DecodeError::ReferenceOutOfBounds {
            origin: 4,
            offset: 400,
            length: 12,
            buffer_len: 40,
        },
    };
    let message = format!("{}", error);
    assert!(message.contains("common.name"));
    assert!(message.contains("400"));
    assert!(message.contains("40-byte"));
}

#[test]
fn test_unknown_attributes_display()
{
    let error = AttributeError::UnknownAttributes {
        category: Category::Volume,
        bits: 0x0008_0000,
    };
    let message = format!("{}", error);
    assert!(message.contains("volume"));
    assert!(message.contains("0x00080000"));
}

#[test]
fn test_decode_error_variants()
{
    assert!(format!("{}", DecodeError::EmptyString).contains("empty"));
    assert!(format!(
        "{}",
        DecodeError::CompositeLength {
            expected: 32,
            actual: 31
        }
    )
    .contains("expected exactly 32"));
    assert!(format!(
        "{}",
        DecodeError::Truncated {
            offset: 12,
            needed: 8,
            available: 0
        }
    )
    .contains("offset 12"));
}

#[test]
fn test_result_type()
{
    fn returns_ok() -> Result<u32>
    {
        Ok(42)
    }

    fn returns_err() -> Result<u32>
    {
        Err(AttributeError::InvalidArgument("test".to_string()))
    }

    assert_eq!(returns_ok().unwrap(), 42);
    assert!(returns_err().is_err());
}
