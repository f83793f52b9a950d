//! # Bulk Directory Reads
//!
//! `getattrlistbulk` returns the attributes of many directory entries per call.
//! Each call fills a caller-sized buffer with `count` packed entries:
//!
//! ```text
//! [ len | returned set | fields... | content ] [ len | returned set | ... ] ...
//! ```
//!
//! Every entry is a complete attribute buffer with its own length prefix, so
//! each one is decoded on its own. The kernel requires `returnedAttributes` in
//! bulk requests (entries may carry different subsets), so it is always added.
//! The directory is exhausted when a call reports zero entries.

use tracing::{debug, trace};

use crate::buffer::{read_length_prefix, RawAttributeBuffer};
use crate::constants::LENGTH_PREFIX_SIZE;
use crate::decode::DecodedAttributes;
use crate::error::{AttributeError, FetchPhase, Result};
use crate::fetch::{syscall_error, AttributeSyscall, RawFd, Target};
use crate::request::{AttributeRequest, AttributeSelection, AttributeSet, FsOptions};

/// Default size of the per-call buffer
pub const DEFAULT_BULK_BUFFER_SIZE: usize = 64 * 1024;

/// Reads all entries of a directory through an [`AttributeSyscall`]
#[derive(Debug, Clone, Copy)]
pub struct DirectoryReader<S>
{
    syscall: S,
    buffer_size: usize,
}

impl<S: AttributeSyscall> DirectoryReader<S>
{
    pub fn new(syscall: S) -> Self
    {
        Self {
            syscall,
            buffer_size: DEFAULT_BULK_BUFFER_SIZE,
        }
    }

    /// Sets the per-call buffer size.
    ///
    /// A larger buffer means fewer calls. An entry larger than the buffer is
    /// never returned by the kernel, which fails the call instead.
    #[must_use]
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self
    {
        self.buffer_size = buffer_size;
        self
    }

    pub fn buffer_size(&self) -> usize
    {
        self.buffer_size
    }

    /// Reads every remaining entry of the open directory `dirfd`.
    ///
    /// The descriptor's position advances; a second call on the same
    /// descriptor continues where the first stopped.
    ///
    /// ## Errors
    ///
    /// - [`AttributeError::InvalidArgument`] if the buffer cannot hold a length prefix
    /// - [`AttributeError::Syscall`] (phase `Bulk`) if a call fails
    /// - [`AttributeError::MalformedBuffer`] if an entry header is inconsistent
    /// - any decode error of an entry
    pub fn read(&self, dirfd: RawFd, selection: &AttributeSelection, options: FsOptions)
        -> Result<Vec<DecodedAttributes>>
    {
        if self.buffer_size < LENGTH_PREFIX_SIZE {
            return Err(AttributeError::InvalidArgument(format!(
                "bulk buffer of {} bytes cannot hold an entry",
                self.buffer_size
            )));
        }

        let request = AttributeRequest::build(selection, options)?.with_returned_attributes();
        let list = request.attr_list();
        let target = Target::Descriptor(dirfd);

        let mut buffer = vec![0u8; self.buffer_size];
        let mut entries = Vec::new();
        loop {
            let count = self
                .syscall
                .get_attr_list_bulk(dirfd, &list, request.options(), &mut buffer)
                .map_err(|source| syscall_error(FetchPhase::Bulk, &target, source))?;
            if count == 0 {
                break;
            }

            trace!(%target, count, "Read bulk batch");
            split_batch(&buffer, count, request.attributes(), &mut entries)?;
        }

        debug!(%target, entries = entries.len(), "Finished bulk directory read");
        Ok(entries)
    }
}

/// Decodes `count` consecutive entries from the start of `batch`.
fn split_batch(batch: &[u8], count: usize, requested: AttributeSet, out: &mut Vec<DecodedAttributes>) -> Result<()>
{
    let mut offset = 0;
    for _ in 0..count {
        let rest = batch.get(offset..).unwrap_or_default();
        let length = read_length_prefix(rest)?;
        let entry = RawAttributeBuffer::from_slice(&rest[..length], requested)?;
        out.push(entry.decode()?);
        offset += length;
    }
    Ok(())
}

/// Opens `path` and reads all of its entries with the Darwin syscalls.
///
/// ## Example
///
/// ```rust,ignore
/// use fsattr_core::bulk::read_directory;
/// use fsattr_core::catalog::CommonAttribute;
/// use fsattr_core::request::{AttributeSelection, FsOptions};
///
/// let selection = AttributeSelection::new().with(CommonAttribute::Name);
/// for entry in read_directory("/tmp", &selection, FsOptions::empty())? {
///     println!("{}", entry.name().unwrap_or("?"));
/// }
/// # Ok::<(), fsattr_core::AttributeError>(())
/// ```
#[cfg(target_os = "macos")]
pub fn read_directory(
    path: impl AsRef<std::path::Path>,
    selection: &AttributeSelection,
    options: FsOptions,
) -> Result<Vec<DecodedAttributes>>
{
    use std::os::fd::AsRawFd;

    let directory = std::fs::File::open(path.as_ref())?;
    DirectoryReader::new(crate::platform::macos::DarwinSyscall).read(directory.as_raw_fd(), selection, options)
}
