//! # Platform-Specific Implementations
//!
//! Real implementations of [`AttributeSyscall`](crate::fetch::AttributeSyscall).
//!
//! Only Darwin has the getattrlist family:
//!
//! - **macOS**: `getattrlist`, `fgetattrlist`, `getattrlistbulk`
//!   - See: [getattrlist(2) man page](https://developer.apple.com/library/archive/documentation/System/Conceptual/ManPages_iPhoneOS/man2/getattrlist.2.html)
//!
//! Everything outside this module is portable, so the codec builds and its
//! tests run on any host.

#[cfg(target_os = "macos")]
pub mod macos;
