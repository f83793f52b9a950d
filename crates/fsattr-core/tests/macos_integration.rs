//! Integration tests against the real getattrlist family
//!
//! These tests require:
//! - Running on macOS (`#[cfg(target_os = "macos")]`)
//! - A writable temporary directory
//!
//! Finder info is not requested here: the kernel hands it back inline rather
//! than through a reference.

#![cfg(target_os = "macos")]

use std::fs;
use std::os::fd::AsRawFd;
use std::path::PathBuf;

use fsattr_core::catalog::{CommonAttribute, CommonExtendedAttribute, DirectoryAttribute, FileAttribute, VolumeAttribute};
use fsattr_core::error::FetchPhase;
use fsattr_core::platform::macos::DarwinSyscall;
use fsattr_core::request::{AttributeSelection, FsOptions};
use fsattr_core::types::ObjectType;
use fsattr_core::{get_attributes, get_attributes_with, read_directory, AttributeError, Target};

/// A scratch directory removed on drop
struct Scratch(PathBuf);

impl Scratch
{
    fn new(name: &str) -> Self
    {
        let path = std::env::temp_dir().join(format!("fsattr-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        Self(path)
    }
}

impl Drop for Scratch
{
    fn drop(&mut self)
    {
        let _ = fs::remove_dir_all(&self.0);
    }
}

#[test]
fn test_file_name_type_and_size()
{
    let scratch = Scratch::new("file");
    let path = scratch.0.join("example.txt");
    fs::write(&path, b"hello, attributes").unwrap();

    let selection = AttributeSelection::new()
        .with(CommonAttribute::Name)
        .with(CommonAttribute::ObjectType)
        .with(CommonAttribute::ModificationTime)
        .with(CommonAttribute::AccessMask)
        .with(FileAttribute::TotalSize);
    let attrs = get_attributes(&Target::Path(path), &selection, FsOptions::empty()).unwrap();

    assert_eq!(attrs.name(), Some("example.txt"));
    assert_eq!(attrs.object_type(), Some(ObjectType::Regular));
    assert_eq!(attrs.get(FileAttribute::TotalSize).and_then(|v| v.as_offset()), Some(17));
    assert!(attrs.get(CommonAttribute::ModificationTime).and_then(|v| v.as_timespec()).unwrap().seconds > 0);
}

#[test]
fn test_directory_entry_count()
{
    let scratch = Scratch::new("dir");
    fs::write(scratch.0.join("one"), b"1").unwrap();
    fs::write(scratch.0.join("two"), b"2").unwrap();

    let selection = AttributeSelection::new()
        .with(CommonAttribute::ObjectType)
        .with(DirectoryAttribute::EntryCount);
    let attrs = get_attributes(&Target::Path(scratch.0.clone()), &selection, FsOptions::empty()).unwrap();

    assert_eq!(attrs.object_type(), Some(ObjectType::Directory));
    assert_eq!(attrs.get(DirectoryAttribute::EntryCount).and_then(|v| v.as_u32()), Some(2));
}

#[test]
fn test_descriptor_target()
{
    let scratch = Scratch::new("fd");
    let path = scratch.0.join("opened");
    fs::write(&path, b"").unwrap();
    let file = fs::File::open(&path).unwrap();

    let selection = AttributeSelection::new().with(CommonAttribute::Name);
    let attrs = get_attributes(&Target::Descriptor(file.as_raw_fd()), &selection, FsOptions::empty()).unwrap();
    assert_eq!(attrs.name(), Some("opened"));
}

#[test]
fn test_volume_attributes()
{
    let selection = AttributeSelection::new()
        .with(VolumeAttribute::Capabilities)
        .with(VolumeAttribute::FileSystemTypeName);
    let attrs = get_attributes(&Target::Path("/".into()), &selection, FsOptions::empty()).unwrap();

    assert!(attrs.get(VolumeAttribute::Capabilities).is_some());
    assert!(!attrs
        .get(VolumeAttribute::FileSystemTypeName)
        .and_then(|v| v.as_str())
        .unwrap()
        .is_empty());
}

#[test]
fn test_extended_attributes_without_option()
{
    let scratch = Scratch::new("ext");
    let path = scratch.0.join("linked");
    fs::write(&path, b"").unwrap();

    // The option is added for the caller
    let selection = AttributeSelection::new().with(CommonExtendedAttribute::LinkId);
    let attrs = get_attributes_with(DarwinSyscall, &Target::Path(path), &selection, FsOptions::empty()).unwrap();
    assert!(attrs.get(CommonExtendedAttribute::LinkId).is_some());
}

#[test]
fn test_missing_path_reports_enoent()
{
    let selection = AttributeSelection::new().with(CommonAttribute::Name);
    let error = get_attributes(
        &Target::Path("/nonexistent/fsattr/path".into()),
        &selection,
        FsOptions::empty(),
    )
    .unwrap_err();

    assert_eq!(error.raw_os_error(), Some(libc::ENOENT));
    assert!(matches!(error, AttributeError::Syscall { phase: FetchPhase::Probe, .. }));
}

#[test]
fn test_read_directory()
{
    let scratch = Scratch::new("bulk");
    fs::write(scratch.0.join("a.txt"), b"a").unwrap();
    fs::create_dir(scratch.0.join("sub")).unwrap();

    let selection = AttributeSelection::new()
        .with(CommonAttribute::Name)
        .with(CommonAttribute::ObjectType);
    let mut entries = read_directory(&scratch.0, &selection, FsOptions::empty()).unwrap();
    entries.sort_by(|a, b| a.name().cmp(&b.name()));

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name(), Some("a.txt"));
    assert_eq!(entries[0].object_type(), Some(ObjectType::Regular));
    assert_eq!(entries[1].name(), Some("sub"));
    assert_eq!(entries[1].object_type(), Some(ObjectType::Directory));
}
