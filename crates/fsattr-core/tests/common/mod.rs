//! Shared helpers for the integration tests
//!
//! - [`BufferBuilder`] lays out kernel-shaped attribute buffers
//! - [`FakeSyscall`] plays the kernel for the fetcher and the bulk reader

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use fsattr_core::fetch::{AttributeSyscall, RawFd, Target};
use fsattr_core::request::{AttrList, AttributeSet, FsOptions};

enum Field
{
    Inline(Vec<u8>),
    Reference(Vec<u8>),
    RawReference
    {
        offset: i32,
        length: u32,
    },
}

/// Builds an attribute buffer the way the kernel packs one
///
/// Fields are appended in the order given (the caller is responsible for
/// canonical order). Reference content is placed after all fixed fields,
/// 4-byte aligned, and each descriptor's offset is computed from its own
/// position.
#[derive(Default)]
pub struct BufferBuilder
{
    returned: Option<AttributeSet>,
    fields: Vec<Field>,
}

impl BufferBuilder
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Writes a returned set after the length prefix.
    pub fn returned(mut self, set: AttributeSet) -> Self
    {
        self.returned = Some(set);
        self
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self
    {
        self.fields.push(Field::Inline(bytes.to_vec()));
        self
    }

    pub fn u32(self, value: u32) -> Self
    {
        self.bytes(&value.to_ne_bytes())
    }

    pub fn i32(self, value: i32) -> Self
    {
        self.bytes(&value.to_ne_bytes())
    }

    pub fn u64(self, value: u64) -> Self
    {
        self.bytes(&value.to_ne_bytes())
    }

    pub fn i64(self, value: i64) -> Self
    {
        self.bytes(&value.to_ne_bytes())
    }

    pub fn timespec(self, seconds: i64, nanoseconds: i64) -> Self
    {
        self.i64(seconds).i64(nanoseconds)
    }

    /// A string reference, NUL terminator added.
    pub fn text(self, text: &str) -> Self
    {
        let mut content = text.as_bytes().to_vec();
        content.push(0);
        self.reference(&content)
    }

    /// A reference to exactly `content`.
    pub fn reference(mut self, content: &[u8]) -> Self
    {
        self.fields.push(Field::Reference(content.to_vec()));
        self
    }

    /// A descriptor with arbitrary offset and length and no content.
    pub fn raw_reference(mut self, offset: i32, length: u32) -> Self
    {
        self.fields.push(Field::RawReference { offset, length });
        self
    }

    pub fn build(&self) -> Vec<u8>
    {
        let header = 4 + if self.returned.is_some() { 20 } else { 0 };
        let fixed_len: usize = self
            .fields
            .iter()
            .map(|field| match field {
                Field::Inline(bytes) => bytes.len(),
                Field::Reference(_) | Field::RawReference { .. } => 8,
            })
            .sum();

        let mut fixed = Vec::new();
        let mut content = Vec::new();
        for field in &self.fields {
            let position = header + fixed.len();
            match field {
                Field::Inline(bytes) => fixed.extend_from_slice(bytes),
                Field::Reference(bytes) => {
                    let target = header + fixed_len + content.len();
                    let offset = i32::try_from(target - position).unwrap();
                    fixed.extend_from_slice(&offset.to_ne_bytes());
                    fixed.extend_from_slice(&u32::try_from(bytes.len()).unwrap().to_ne_bytes());
                    content.extend_from_slice(bytes);
                    while content.len() % 4 != 0 {
                        content.push(0);
                    }
                }
                Field::RawReference { offset, length } => {
                    fixed.extend_from_slice(&offset.to_ne_bytes());
                    fixed.extend_from_slice(&length.to_ne_bytes());
                }
            }
        }

        let total = header + fixed.len() + content.len();
        let mut out = u32::try_from(total).unwrap().to_ne_bytes().to_vec();
        if let Some(set) = self.returned {
            for mask in [set.common, set.volume, set.directory, set.file, set.common_extended] {
                out.extend_from_slice(&mask.to_ne_bytes());
            }
        }
        out.extend(fixed);
        out.extend(content);
        out
    }
}

/// Builds a set from masks.
pub fn set(common: u32, volume: u32, directory: u32, file: u32, common_extended: u32) -> AttributeSet
{
    AttributeSet {
        common,
        volume,
        directory,
        file,
        common_extended,
    }
}

/// One recorded `get_attr_list` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call
{
    pub target: Target,
    pub list: AttrList,
    pub options: FsOptions,
    pub buffer_len: usize,
}

/// A scripted kernel
///
/// `get_attr_list` copies `response` into the caller's buffer and writes the
/// length prefix like XNU does: the full length with `FSOPT_REPORT_FULLSIZE`,
/// otherwise the truncated length.
#[derive(Default)]
pub struct FakeSyscall
{
    pub response: Vec<u8>,
    /// Added to the length reported on the second call
    pub fetch_delta: i32,
    /// errno to fail with, and on which call (1-based)
    pub fail: Option<(usize, i32)>,
    pub calls: RefCell<Vec<Call>>,
    /// `(count, bytes)` per bulk call; exhausted batches report zero entries
    pub batches: RefCell<VecDeque<(usize, Vec<u8>)>>,
    pub bulk_calls: RefCell<Vec<(RawFd, AttrList, FsOptions)>>,
}

impl FakeSyscall
{
    pub fn responding(response: Vec<u8>) -> Self
    {
        Self {
            response,
            ..Self::default()
        }
    }

    pub fn with_batches(batches: Vec<(usize, Vec<u8>)>) -> Self
    {
        Self {
            batches: RefCell::new(batches.into()),
            ..Self::default()
        }
    }
}

impl AttributeSyscall for FakeSyscall
{
    fn get_attr_list(&self, target: &Target, list: &AttrList, options: FsOptions, buffer: &mut [u8])
        -> io::Result<()>
    {
        self.calls.borrow_mut().push(Call {
            target: target.clone(),
            list: *list,
            options,
            buffer_len: buffer.len(),
        });
        let call = self.calls.borrow().len();

        if let Some((on_call, errno)) = self.fail {
            if on_call == call {
                return Err(io::Error::from_raw_os_error(errno));
            }
        }

        let copied = buffer.len().min(self.response.len());
        buffer[..copied].copy_from_slice(&self.response[..copied]);

        let full = u32::try_from(self.response.len()).unwrap();
        let mut reported = if options.contains(FsOptions::REPORT_FULL_SIZE) {
            full
        } else {
            u32::try_from(copied).unwrap()
        };
        if call == 2 {
            reported = reported.checked_add_signed(self.fetch_delta).unwrap();
        }
        if buffer.len() >= 4 {
            buffer[..4].copy_from_slice(&reported.to_ne_bytes());
        }
        Ok(())
    }

    fn get_attr_list_bulk(&self, dirfd: RawFd, list: &AttrList, options: FsOptions, buffer: &mut [u8])
        -> io::Result<usize>
    {
        self.bulk_calls.borrow_mut().push((dirfd, *list, options));
        match self.batches.borrow_mut().pop_front() {
            Some((count, bytes)) => {
                buffer[..bytes.len()].copy_from_slice(&bytes);
                Ok(count)
            }
            None => Ok(0),
        }
    }
}

/// A bulk error scripted as `(errno)`
pub struct FailingBulk(pub i32);

impl AttributeSyscall for FailingBulk
{
    fn get_attr_list(&self, _: &Target, _: &AttrList, _: FsOptions, _: &mut [u8]) -> io::Result<()>
    {
        Err(io::Error::from_raw_os_error(self.0))
    }

    fn get_attr_list_bulk(&self, _: RawFd, _: &AttrList, _: FsOptions, _: &mut [u8]) -> io::Result<usize>
    {
        Err(io::Error::from_raw_os_error(self.0))
    }
}
