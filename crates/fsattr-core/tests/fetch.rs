//! Tests for the two-phase probe/fetch protocol

mod common;

use std::path::PathBuf;

use common::{set, BufferBuilder, FakeSyscall};
use fsattr_core::catalog::CommonAttribute;
use fsattr_core::constants::*;
use fsattr_core::error::FetchPhase;
use fsattr_core::request::{AttributeRequest, AttributeSelection, FsOptions};
use fsattr_core::{get_attributes_with, AttributeError, BufferFetcher, DecodeError, Target};

fn name_and_time() -> AttributeRequest
{
    let selection = AttributeSelection::new()
        .with(CommonAttribute::Name)
        .with(CommonAttribute::ModificationTime);
    AttributeRequest::build(&selection, FsOptions::NO_FOLLOW).unwrap()
}

fn target() -> Target
{
    Target::Path(PathBuf::from("/tmp/example.txt"))
}

#[test]
fn test_probe_then_fetch()
{
    let response = BufferBuilder::new().text("example.txt").timespec(1_700_000_000, 0).build();
    let syscall = FakeSyscall::responding(response.clone());

    let buffer = BufferFetcher::new(&syscall).fetch(&target(), &name_and_time()).unwrap();
    assert_eq!(buffer.bytes(), &response[..]);

    let calls = syscall.calls.borrow();
    assert_eq!(calls.len(), 2);

    assert_eq!(calls[0].buffer_len, 4);
    assert!(calls[0].options.contains(FsOptions::REPORT_FULL_SIZE));
    assert!(calls[0].options.contains(FsOptions::NO_FOLLOW));

    assert_eq!(calls[1].buffer_len, response.len());
    assert_eq!(calls[1].options, FsOptions::NO_FOLLOW);

    for call in calls.iter() {
        assert_eq!(call.target, target());
        assert_eq!(call.list.commonattr, ATTR_CMN_NAME | ATTR_CMN_MODTIME);
        assert_eq!(call.list.bitmapcount, 5);
    }
}

#[test]
fn test_get_attributes_with_decodes()
{
    let response = BufferBuilder::new().text("example.txt").timespec(1_700_000_000, 0).build();
    let syscall = FakeSyscall::responding(response);
    let selection = AttributeSelection::new()
        .with(CommonAttribute::ModificationTime)
        .with(CommonAttribute::Name);

    let decoded = get_attributes_with(&syscall, &target(), &selection, FsOptions::empty()).unwrap();
    assert_eq!(decoded.name(), Some("example.txt"));
    assert_eq!(
        decoded
            .get(CommonAttribute::ModificationTime)
            .and_then(|value| value.as_timespec())
            .map(|time| time.seconds),
        Some(1_700_000_000)
    );
}

#[test]
fn test_probe_errno_is_preserved()
{
    let syscall = FakeSyscall {
        fail: Some((1, libc::ENOENT)),
        ..FakeSyscall::default()
    };

    let error = BufferFetcher::new(&syscall).fetch(&target(), &name_and_time()).unwrap_err();
    assert_eq!(error.raw_os_error(), Some(libc::ENOENT));
    match &error {
        AttributeError::Syscall { phase, target, .. } => {
            assert_eq!(*phase, FetchPhase::Probe);
            assert_eq!(target, "/tmp/example.txt");
        }
        other => panic!("expected Syscall, got {:?}", other),
    }
    assert_eq!(syscall.calls.borrow().len(), 1);
}

#[test]
fn test_fetch_errno_is_preserved()
{
    let syscall = FakeSyscall {
        response: BufferBuilder::new().text("example.txt").timespec(0, 0).build(),
        fail: Some((2, libc::EACCES)),
        ..FakeSyscall::default()
    };

    let error = BufferFetcher::new(&syscall).fetch(&target(), &name_and_time()).unwrap_err();
    assert_eq!(error.raw_os_error(), Some(libc::EACCES));
    assert!(matches!(error, AttributeError::Syscall { phase: FetchPhase::Fetch, .. }));
}

#[test]
fn test_descriptor_target()
{
    let response = BufferBuilder::new().u32(2).build();
    let syscall = FakeSyscall::responding(response);
    let request = AttributeRequest::from_set(set(ATTR_CMN_OBJTYPE, 0, 0, 0, 0), FsOptions::empty());

    let decoded = BufferFetcher::new(&syscall)
        .fetch(&Target::Descriptor(7), &request)
        .unwrap()
        .decode()
        .unwrap();
    assert!(decoded.object_type().unwrap().is_directory());
    assert_eq!(syscall.calls.borrow()[0].target, Target::Descriptor(7));
    assert_eq!(Target::Descriptor(7).to_string(), "fd 7");
}

#[test]
#[should_panic(expected = "second call")]
fn test_growth_between_calls_panics()
{
    let syscall = FakeSyscall {
        response: BufferBuilder::new().text("example.txt").timespec(0, 0).build(),
        fetch_delta: 8,
        ..FakeSyscall::default()
    };

    let _ = BufferFetcher::new(&syscall).fetch(&target(), &name_and_time());
}

#[test]
fn test_shrink_between_calls_is_accepted()
{
    // The file was renamed to something shorter in between
    let mut response = BufferBuilder::new().text("ex.txt").timespec(0, 0).build();
    let short = response.len();
    response.extend_from_slice(&[0u8; 8]);

    let syscall = FakeSyscall {
        response,
        fetch_delta: -8,
        ..FakeSyscall::default()
    };

    let buffer = BufferFetcher::new(&syscall).fetch(&target(), &name_and_time()).unwrap();
    assert_eq!(buffer.len(), short);
    assert_eq!(buffer.decode().unwrap().name(), Some("ex.txt"));
}

#[test]
fn test_short_probe_length_is_malformed()
{
    let syscall = FakeSyscall::responding(vec![2, 0]);

    let error = BufferFetcher::new(&syscall).fetch(&target(), &name_and_time()).unwrap_err();
    assert!(matches!(
        error,
        AttributeError::MalformedBuffer(DecodeError::LengthPrefix { .. })
    ));
    assert_eq!(syscall.calls.borrow().len(), 1);
}
