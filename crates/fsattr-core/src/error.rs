//! # Error Types
//!
//! Error handling for attribute requests, buffer fetches and buffer decoding.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.
//!
//! Two layers exist:
//!
//! - [`DecodeError`] describes what is wrong with a byte range (truncation,
//!   bad offsets, bad UTF-8). It knows nothing about attributes.
//! - [`AttributeError`] is what callers see. Decode failures are wrapped with
//!   the attribute that was being decoded, syscall failures with the phase and
//!   target that failed.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::catalog::{AttributeId, Category};

/// Phase of a fetch in which a syscall failed
///
/// `getattrlist` truncates its output, so a fetch is always two calls: a probe
/// that only reads the length prefix, then the real fetch. Bulk directory reads
/// are a separate phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchPhase
{
    /// First call, 4-byte buffer, reads the total length
    Probe,
    /// Second call with a buffer of the probed length
    Fetch,
    /// `getattrlistbulk` batch read
    Bulk,
}

impl fmt::Display for FetchPhase
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            FetchPhase::Probe => write!(f, "probe"),
            FetchPhase::Fetch => write!(f, "fetch"),
            FetchPhase::Bulk => write!(f, "bulk read"),
        }
    }
}

/// Problems found in a raw attribute buffer
///
/// These are always reported inside [`AttributeError::Decode`] or
/// [`AttributeError::MalformedBuffer`], which add the attribute or the
/// buffer-level context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError
{
    /// A fixed-size read ran past the end of the buffer
    #[error("buffer truncated: needed {needed} bytes at offset {offset}, {available} available")]
    Truncated
    {
        /// Cursor position of the read
        offset: usize,
        /// Bytes the read required
        needed: usize,
        /// Bytes left in the buffer at that position
        available: usize,
    },

    /// A reference descriptor points outside the buffer
    ///
    /// The offset is relative to the descriptor's own position, so `origin`
    /// is reported as well.
    #[error("reference at {origin} (offset {offset}, length {length}) is outside the {buffer_len}-byte buffer")]
    ReferenceOutOfBounds
    {
        /// Position of the reference descriptor
        origin: usize,
        /// Relative offset stored in the descriptor
        offset: i32,
        /// Length stored in the descriptor
        length: u32,
        /// Usable length of the buffer
        buffer_len: usize,
    },

    /// A string reference had no bytes, so there is no NUL terminator to strip
    #[error("string reference is empty (missing NUL terminator)")]
    EmptyString,

    /// A string reference did not contain valid UTF-8
    #[error("string reference is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// A composite record did not have the exact size of its two halves
    #[error("composite record has {actual} bytes, expected exactly {expected}")]
    CompositeLength
    {
        /// Combined size of the two sub-records
        expected: usize,
        /// Length advertised by the reference
        actual: usize,
    },

    /// The 4-byte length prefix disagrees with the bytes we hold
    #[error("length prefix {advertised} is invalid for a {available}-byte buffer")]
    LengthPrefix
    {
        /// Length written by the kernel
        advertised: u32,
        /// Bytes actually present
        available: usize,
    },
}

/// Main error type for attribute operations
///
/// ## Error Categories
///
/// 1. **Request errors**: InvalidAttribute, InvalidArgument
/// 2. **Syscall errors**: Syscall (OS error code preserved untranslated)
/// 3. **Buffer errors**: MalformedBuffer, UnknownAttributes, Decode
/// 4. **I/O errors**: Io (opening directories for bulk reads, etc.)
///
/// A length that grows between the probe and fetch calls is not represented
/// here: it means the kernel broke its own contract, and the fetcher panics.
#[derive(Error, Debug)]
pub enum AttributeError
{
    /// The attribute is known but outside its category's valid mask
    ///
    /// The kernel rejects these with `EINVAL`; we reject them before the call.
    /// The deprecated extent-record file attributes are the usual cause.
    #[error("Attribute {attribute} is not valid in a {} request", attribute.category())]
    InvalidAttribute
    {
        /// The rejected attribute
        attribute: AttributeId,
    },

    /// Invalid argument passed to a fetch function
    ///
    /// Examples:
    /// - A zero-sized bulk buffer
    /// - An attribute name that the catalog does not know
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The getattrlist-family syscall failed
    ///
    /// `source` is built from `errno`, so `raw_os_error()` returns the exact
    /// code (`ENOENT`, `EACCES`, `EINVAL`, ...).
    #[error("{phase} call failed for {target}: {source}")]
    Syscall
    {
        /// Which call of the protocol failed
        phase: FetchPhase,
        /// Printable form of the path or descriptor
        target: String,
        /// The OS error
        #[source]
        source: io::Error,
    },

    /// The buffer header or a bulk entry header is unusable
    #[error("Malformed attribute buffer: {0}")]
    MalformedBuffer(DecodeError),

    /// The returned attribute set contains bits the catalog does not describe
    ///
    /// Their sizes are unknown, so nothing after them can be located.
    #[error("Kernel returned unknown {category} attributes: 0x{bits:08x}")]
    UnknownAttributes
    {
        /// Category of the unknown bits
        category: Category,
        /// The unknown bits
        bits: u32,
    },

    /// Decoding a single attribute failed
    ///
    /// The whole decode is abandoned: a bad field leaves the cursor in an
    /// unknown position for every later field.
    #[error("Failed to decode {attribute}: {source}")]
    Decode
    {
        /// Attribute being decoded
        attribute: AttributeId,
        /// What was wrong with its bytes
        #[source]
        source: DecodeError,
    },

    /// I/O error outside the attribute syscalls
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl AttributeError
{
    /// The untranslated OS error code, when the error came from a syscall.
    pub fn raw_os_error(&self) -> Option<i32>
    {
        match self {
            AttributeError::Syscall { source, .. } | AttributeError::Io(source) => source.raw_os_error(),
            _ => None,
        }
    }

    /// The attribute that failed to decode, if any.
    pub fn attribute(&self) -> Option<AttributeId>
    {
        match self {
            AttributeError::Decode { attribute, .. } | AttributeError::InvalidAttribute { attribute } => {
                Some(*attribute)
            }
            _ => None,
        }
    }
}

/// Convenience type alias for `Result<T, AttributeError>`
///
/// ```rust
/// use fsattr_core::error::Result;
/// fn foo() -> Result<()>
/// {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, AttributeError>;
