//! # macOS Attribute Syscalls
//!
//! The Darwin implementation of [`AttributeSyscall`](crate::fetch::AttributeSyscall).
//!
//! ## Key APIs Used
//!
//! - `getattrlist()`: attributes of a path
//! - `fgetattrlist()`: attributes of an open descriptor
//! - `getattrlistbulk()`: attributes of directory entries, many per call
//!
//! ## Dependencies
//!
//! - **libc crate**: C types (`c_int`, `c_void`, `size_t`, ...)
//! - **extern "C"**: the getattrlist family itself, which `libc` does not bind
//!   on every version we support
//!
//! ## References
//!
//! - [getattrlist(2)](https://developer.apple.com/library/archive/documentation/System/Conceptual/ManPages_iPhoneOS/man2/getattrlist.2.html)
//! - [getattrlistbulk(2)](https://developer.apple.com/library/archive/documentation/System/Conceptual/ManPages_iPhoneOS/man2/getattrlistbulk.2.html)

pub mod ffi;
pub mod syscall;

pub use syscall::DarwinSyscall;
