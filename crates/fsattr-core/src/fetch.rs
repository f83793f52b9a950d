//! # Buffer Fetching
//!
//! Runs the two-call getattrlist protocol against an [`AttributeSyscall`]
//! implementation and returns a parsed [`RawAttributeBuffer`].
//!
//! ## Protocol
//!
//! `getattrlist` silently truncates its output, so the size of the answer has
//! to be asked for first:
//!
//! 1. **Probe**: call with a 4-byte buffer. Only the length prefix fits. The
//!    probe adds `FSOPT_REPORT_FULLSIZE`, otherwise the kernel would report
//!    `min(buffer size, needed)`.
//! 2. **Fetch**: allocate exactly the probed length and call again.
//! 3. The length of the second answer must not exceed the probed one. A larger
//!    answer means the kernel contradicted itself; the fetcher panics.
//!
//! Syscall errors are returned with the OS error code untouched. Nothing is
//! retried.
//!
//! ## Testing
//!
//! The syscall layer is a trait so the protocol can be exercised with a fake
//! kernel on any host. [`DarwinSyscall`](crate::platform::macos::DarwinSyscall)
//! is the real implementation.

use std::fmt;
use std::io;
use std::path::PathBuf;

use tracing::{debug, error, trace};

use crate::buffer::RawAttributeBuffer;
use crate::constants::LENGTH_PREFIX_SIZE;
use crate::decode::DecodedAttributes;
use crate::error::{AttributeError, DecodeError, FetchPhase, Result};
use crate::request::{AttrList, AttributeRequest, AttributeSelection, FsOptions};

/// A raw file descriptor (`int`)
pub type RawFd = libc::c_int;

/// The object whose attributes are fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target
{
    /// A path, resolved by `getattrlist`
    Path(PathBuf),
    /// An open descriptor, used with `fgetattrlist`
    Descriptor(RawFd),
}

impl fmt::Display for Target
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Target::Path(path) => write!(f, "{}", path.display()),
            Target::Descriptor(fd) => write!(f, "fd {fd}"),
        }
    }
}

impl From<PathBuf> for Target
{
    fn from(path: PathBuf) -> Self
    {
        Target::Path(path)
    }
}

impl From<&std::path::Path> for Target
{
    fn from(path: &std::path::Path) -> Self
    {
        Target::Path(path.to_path_buf())
    }
}

/// The getattrlist family, as seen by the fetcher
///
/// Implementations perform exactly one kernel call per method and report
/// failure with the OS error (`io::Error::last_os_error()` for real calls).
pub trait AttributeSyscall
{
    /// `getattrlist` / `fgetattrlist`: fill `buffer` with the attributes of `target`.
    fn get_attr_list(&self, target: &Target, list: &AttrList, options: FsOptions, buffer: &mut [u8])
        -> io::Result<()>;

    /// `getattrlistbulk`: fill `buffer` with entries of the directory `dirfd`.
    ///
    /// Returns the number of entries written; zero once the directory is exhausted.
    fn get_attr_list_bulk(&self, dirfd: RawFd, list: &AttrList, options: FsOptions, buffer: &mut [u8])
        -> io::Result<usize>;
}

impl<S: AttributeSyscall + ?Sized> AttributeSyscall for &S
{
    fn get_attr_list(&self, target: &Target, list: &AttrList, options: FsOptions, buffer: &mut [u8])
        -> io::Result<()>
    {
        (**self).get_attr_list(target, list, options, buffer)
    }

    fn get_attr_list_bulk(&self, dirfd: RawFd, list: &AttrList, options: FsOptions, buffer: &mut [u8])
        -> io::Result<usize>
    {
        (**self).get_attr_list_bulk(dirfd, list, options, buffer)
    }
}

/// Two-phase fetcher over a syscall implementation
#[derive(Debug, Clone, Copy)]
pub struct BufferFetcher<S>
{
    syscall: S,
}

impl<S: AttributeSyscall> BufferFetcher<S>
{
    pub fn new(syscall: S) -> Self
    {
        Self { syscall }
    }

    /// Fetches the raw buffer for `request`.
    ///
    /// ## Errors
    ///
    /// - [`AttributeError::Syscall`] if either call fails (phase `Probe` or `Fetch`)
    /// - [`AttributeError::MalformedBuffer`] if a reported length is smaller
    ///   than the length prefix itself
    ///
    /// ## Panics
    ///
    /// If the second call reports a longer answer than the probe.
    pub fn fetch(&self, target: &Target, request: &AttributeRequest) -> Result<RawAttributeBuffer>
    {
        let list = request.attr_list();
        let options = request.options();

        let mut probe = [0u8; LENGTH_PREFIX_SIZE];
        self.syscall
            .get_attr_list(target, &list, options | FsOptions::REPORT_FULL_SIZE, &mut probe)
            .map_err(|source| syscall_error(FetchPhase::Probe, target, source))?;
        let first = u32::from_ne_bytes(probe);
        trace!(%target, length = first, "Probed attribute buffer length");

        let first_len = usize::try_from(first).unwrap_or(usize::MAX);
        if first_len < LENGTH_PREFIX_SIZE {
            return Err(AttributeError::MalformedBuffer(DecodeError::LengthPrefix {
                advertised: first,
                available: LENGTH_PREFIX_SIZE,
            }));
        }

        let mut bytes = vec![0u8; first_len];
        self.syscall
            .get_attr_list(target, &list, options, &mut bytes)
            .map_err(|source| syscall_error(FetchPhase::Fetch, target, source))?;
        let second = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);

        if second > first {
            error!(%target, first, second, "Attribute buffer grew between probe and fetch");
            panic!(
                "getattrlist reported {second} bytes on the second call for {target}, but only {first} on the probe"
            );
        }

        debug!(%target, length = second, "Fetched attribute buffer");
        RawAttributeBuffer::new(bytes, request.attributes())
    }

    /// The underlying syscall implementation.
    pub fn syscall(&self) -> &S
    {
        &self.syscall
    }
}

pub(crate) fn syscall_error(phase: FetchPhase, target: impl fmt::Display, source: io::Error) -> AttributeError
{
    debug!(%phase, %target, error = %source, "Attribute syscall failed");
    AttributeError::Syscall {
        phase,
        target: target.to_string(),
        source,
    }
}

/// Builds, fetches and decodes in one step against any syscall implementation.
///
/// ## Errors
///
/// Any error of [`AttributeRequest::build`], [`BufferFetcher::fetch`] or
/// [`decode`](crate::decode::decode).
pub fn get_attributes_with<S: AttributeSyscall>(
    syscall: S,
    target: &Target,
    selection: &AttributeSelection,
    options: FsOptions,
) -> Result<DecodedAttributes>
{
    let request = AttributeRequest::build(selection, options)?;
    BufferFetcher::new(syscall).fetch(target, &request)?.decode()
}

/// Fetches and decodes the selected attributes of `target` with the real
/// Darwin syscalls.
///
/// ## Example
///
/// ```rust,ignore
/// use fsattr_core::catalog::CommonAttribute;
/// use fsattr_core::fetch::{get_attributes, Target};
/// use fsattr_core::request::{AttributeSelection, FsOptions};
///
/// let selection = AttributeSelection::new()
///     .with(CommonAttribute::Name)
///     .with(CommonAttribute::ModificationTime);
/// let attrs = get_attributes(&Target::Path("/tmp".into()), &selection, FsOptions::NO_FOLLOW)?;
/// println!("{:?}", attrs.name());
/// # Ok::<(), fsattr_core::AttributeError>(())
/// ```
#[cfg(target_os = "macos")]
pub fn get_attributes(target: &Target, selection: &AttributeSelection, options: FsOptions) -> Result<DecodedAttributes>
{
    get_attributes_with(crate::platform::macos::DarwinSyscall, target, selection, options)
}
