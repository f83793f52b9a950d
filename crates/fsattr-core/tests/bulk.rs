//! Tests for bulk directory reads

mod common;

use common::{set, BufferBuilder, FailingBulk, FakeSyscall};
use fsattr_core::catalog::CommonAttribute;
use fsattr_core::constants::*;
use fsattr_core::error::FetchPhase;
use fsattr_core::request::{AttributeSelection, FsOptions};
use fsattr_core::types::ObjectType;
use fsattr_core::{AttributeError, DecodeError, DirectoryReader};

fn selection() -> AttributeSelection
{
    AttributeSelection::new()
        .with(CommonAttribute::Name)
        .with(CommonAttribute::ObjectType)
}

fn entry(name: &str, object_type: u32) -> Vec<u8>
{
    let returned = set(ATTR_CMN_RETURNED_ATTRS | ATTR_CMN_NAME | ATTR_CMN_OBJTYPE, 0, 0, 0, 0);
    BufferBuilder::new().returned(returned).text(name).u32(object_type).build()
}

fn batch(entries: &[Vec<u8>]) -> (usize, Vec<u8>)
{
    (entries.len(), entries.concat())
}

#[test]
fn test_reads_every_batch()
{
    let syscall = FakeSyscall::with_batches(vec![
        batch(&[entry("a.txt", 1), entry("Photos", 2)]),
        batch(&[entry("link", 5)]),
    ]);

    let entries = DirectoryReader::new(&syscall)
        .read(3, &selection(), FsOptions::empty())
        .unwrap();

    let names: Vec<&str> = entries.iter().filter_map(|entry| entry.name()).collect();
    assert_eq!(names, vec!["a.txt", "Photos", "link"]);
    assert_eq!(entries[1].object_type(), Some(ObjectType::Directory));
    assert_eq!(entries[2].object_type(), Some(ObjectType::Symlink));

    // Two batches, then the zero-count call that ends the read
    assert_eq!(syscall.bulk_calls.borrow().len(), 3);
}

#[test]
fn test_returned_attributes_are_forced()
{
    let syscall = FakeSyscall::with_batches(Vec::new());
    let entries = DirectoryReader::new(&syscall)
        .read(3, &selection(), FsOptions::empty())
        .unwrap();
    assert!(entries.is_empty());

    let calls = syscall.bulk_calls.borrow();
    let (dirfd, list, _) = calls[0];
    assert_eq!(dirfd, 3);
    assert_eq!(list.commonattr, ATTR_CMN_RETURNED_ATTRS | ATTR_CMN_NAME | ATTR_CMN_OBJTYPE);
}

#[test]
fn test_entry_missing_an_attribute()
{
    // The second entry could not supply its object type
    let partial = BufferBuilder::new()
        .returned(set(ATTR_CMN_RETURNED_ATTRS | ATTR_CMN_NAME, 0, 0, 0, 0))
        .text("vanished")
        .build();
    let syscall = FakeSyscall::with_batches(vec![batch(&[entry("a.txt", 1), partial])]);

    let entries = DirectoryReader::new(&syscall)
        .read(3, &selection(), FsOptions::empty())
        .unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].name(), Some("vanished"));
    assert_eq!(entries[1].object_type(), None);
}

#[test]
fn test_malformed_entry_length()
{
    let mut bad = entry("a.txt", 1);
    bad[..4].copy_from_slice(&4096u32.to_ne_bytes());
    let syscall = FakeSyscall::with_batches(vec![batch(&[bad])]);

    let error = DirectoryReader::new(&syscall)
        .with_buffer_size(256)
        .read(3, &selection(), FsOptions::empty())
        .unwrap_err();
    assert!(matches!(
        error,
        AttributeError::MalformedBuffer(DecodeError::LengthPrefix { advertised: 4096, .. })
    ));
}

#[test]
fn test_count_past_the_batch()
{
    // The kernel claims two entries but wrote one
    let one = entry("a.txt", 1);
    let syscall = FakeSyscall::with_batches(vec![(2, one)]);

    let error = DirectoryReader::new(&syscall)
        .with_buffer_size(64)
        .read(3, &selection(), FsOptions::empty())
        .unwrap_err();
    assert!(matches!(error, AttributeError::MalformedBuffer(_)));
}

#[test]
fn test_syscall_error()
{
    let error = DirectoryReader::new(FailingBulk(libc::EBADF))
        .read(42, &selection(), FsOptions::empty())
        .unwrap_err();

    assert_eq!(error.raw_os_error(), Some(libc::EBADF));
    match error {
        AttributeError::Syscall { phase, target, .. } => {
            assert_eq!(phase, FetchPhase::Bulk);
            assert_eq!(target, "fd 42");
        }
        other => panic!("expected Syscall, got {:?}", other),
    }
}

#[test]
fn test_tiny_buffer_is_rejected()
{
    let syscall = FakeSyscall::default();
    let error = DirectoryReader::new(&syscall)
        .with_buffer_size(0)
        .read(3, &selection(), FsOptions::empty())
        .unwrap_err();

    assert!(matches!(error, AttributeError::InvalidArgument(_)));
    assert!(syscall.bulk_calls.borrow().is_empty());
}
