//! # fsattr-core
//!
//! Typed access to Darwin filesystem attributes through the getattrlist family.
//!
//! `getattrlist(2)` answers with a densely packed, self-describing buffer whose
//! layout depends on which attributes were requested. This crate provides:
//! - The attribute catalog, with the kernel's buffer order per category
//! - Request building (`struct attrlist` plus `FSOPT_*` flags)
//! - The two-phase probe/fetch protocol
//! - Bounds-checked decoding into typed values
//! - Bulk directory reads (`getattrlistbulk`)
//!
//! ## Data flow
//!
//! ```text
//! AttributeSelection -> AttributeRequest -> BufferFetcher -> RawAttributeBuffer -> decode -> DecodedAttributes
//!                                              |
//!                                       AttributeSyscall (DarwinSyscall, or a fake in tests)
//! ```
//!
//! ## Platform Support
//!
//! - **macOS**: Real syscalls via [`platform::macos::DarwinSyscall`]
//! - **Everything else**: The codec builds and decodes buffers, there is just no
//!   kernel to ask
//!
//! ## Why unsafe code is needed
//!
//! The getattrlist family is called through FFI with raw pointers to the
//! request and the output buffer. The unsafe calls are confined to
//! `platform::macos` and wrapped in a safe [`fetch::AttributeSyscall`]
//! implementation.

#![allow(unsafe_code)] // Required for the getattrlist FFI

pub mod buffer;
pub mod bulk;
pub mod catalog;
pub mod constants;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod platform;
pub mod prelude;
pub mod request;
pub mod types;
pub mod value;

// Re-export commonly used types
pub use buffer::RawAttributeBuffer;
pub use bulk::DirectoryReader;
#[cfg(target_os = "macos")]
pub use bulk::read_directory;
pub use catalog::{
    Attribute, AttributeId, Category, CommonAttribute, CommonExtendedAttribute, DirectoryAttribute, FileAttribute,
    VolumeAttribute,
};
pub use decode::{decode, AttributeMap, DecodedAttributes};
pub use error::{AttributeError, DecodeError, Result};
#[cfg(target_os = "macos")]
pub use fetch::get_attributes;
pub use fetch::{get_attributes_with, AttributeSyscall, BufferFetcher, Target};
pub use request::{AttributeRequest, AttributeSelection, AttributeSet, FsOptions};
pub use value::AttributeValue;
