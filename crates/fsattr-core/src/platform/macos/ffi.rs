//! # getattrlist FFI Declarations
//!
//! `extern "C"` declarations for the getattrlist family, as found in
//! `<sys/attr.h>` and `<unistd.h>`.
//!
//! ## Safety Notes
//!
//! All functions in this module are `unsafe` because they:
//! - Write up to `attr_buf_size` bytes through a raw pointer
//! - Read a C string and an `attrlist` through raw pointers
//!
//! They are wrapped by [`DarwinSyscall`](super::DarwinSyscall), which always
//! passes the real length of a Rust slice.
//!
//! ## References
//!
//! - [getattrlist(2) man page](https://developer.apple.com/library/archive/documentation/System/Conceptual/ManPages_iPhoneOS/man2/getattrlist.2.html)

// Allow doc comments in extern blocks - they're useful for developers even if rustdoc doesn't generate docs
#![allow(unused_doc_comments)]

use libc::{c_char, c_int, c_ulong, c_void, size_t, ssize_t};

use crate::request::AttrList;

#[link(name = "c", kind = "dylib")]
extern "C" {
    /// Get the attributes of the object at `path`
    ///
    /// ## Parameters
    ///
    /// - `path`: NUL-terminated path
    /// - `attr_list`: which attributes to return (`struct attrlist *`)
    /// - `attr_buf`: output buffer
    /// - `attr_buf_size`: size of `attr_buf`
    /// - `options`: `FSOPT_*` flags
    ///
    /// ## Returns
    ///
    /// `0` on success, `-1` with `errno` set on failure.
    pub fn getattrlist(
        path: *const c_char,
        attr_list: *mut AttrList,
        attr_buf: *mut c_void,
        attr_buf_size: size_t,
        options: c_ulong,
    ) -> c_int;

    /// Same as `getattrlist` for an open descriptor
    pub fn fgetattrlist(
        fd: c_int,
        attr_list: *mut AttrList,
        attr_buf: *mut c_void,
        attr_buf_size: size_t,
        options: c_ulong,
    ) -> c_int;

    /// Read the attributes of several entries of the directory `dirfd`
    ///
    /// ## Returns
    ///
    /// The number of entries written to `attr_buf`, `0` at the end of the
    /// directory, or `-1` with `errno` set on failure.
    pub fn getattrlistbulk(
        dirfd: c_int,
        attr_list: *mut AttrList,
        attr_buf: *mut c_void,
        attr_buf_size: size_t,
        options: u64,
    ) -> ssize_t;
}
