//! Safe wrappers over the getattrlist family.

use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::{c_ulong, c_void};
use tracing::trace;

use super::ffi;
use crate::fetch::{AttributeSyscall, RawFd, Target};
use crate::request::{AttrList, FsOptions};

/// The real kernel
///
/// Stateless: every call goes straight to the corresponding syscall, and
/// failures carry `errno` via [`io::Error::last_os_error`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DarwinSyscall;

fn c_path(path: &Path) -> io::Result<CString>
{
    CString::new(path.as_os_str().as_bytes()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("path contains an interior NUL byte: {}", path.display()),
        )
    })
}

impl AttributeSyscall for DarwinSyscall
{
    fn get_attr_list(&self, target: &Target, list: &AttrList, options: FsOptions, buffer: &mut [u8])
        -> io::Result<()>
    {
        // The kernel takes a mutable pointer but never writes through it
        let mut list = *list;
        let options = options.bits() as c_ulong;
        trace!(%target, size = buffer.len(), options, "getattrlist");

        let result = match target {
            Target::Path(path) => {
                let path = c_path(path)?;
                // SAFETY: `path` is NUL-terminated, `list` is a valid attrlist and
                // the kernel writes at most `buffer.len()` bytes into `buffer`.
                unsafe {
                    ffi::getattrlist(
                        path.as_ptr(),
                        &mut list,
                        buffer.as_mut_ptr().cast::<c_void>(),
                        buffer.len(),
                        options,
                    )
                }
            }
            Target::Descriptor(fd) => {
                // SAFETY: as above; an invalid descriptor is reported as EBADF.
                unsafe {
                    ffi::fgetattrlist(*fd, &mut list, buffer.as_mut_ptr().cast::<c_void>(), buffer.len(), options)
                }
            }
        };

        if result == 0 {
            Ok(())
        } else {
            Err(io::Error::last_os_error())
        }
    }

    fn get_attr_list_bulk(&self, dirfd: RawFd, list: &AttrList, options: FsOptions, buffer: &mut [u8])
        -> io::Result<usize>
    {
        let mut list = *list;
        trace!(dirfd, size = buffer.len(), options = options.bits(), "getattrlistbulk");

        // SAFETY: `list` is a valid attrlist and the kernel writes at most
        // `buffer.len()` bytes into `buffer`.
        let count = unsafe {
            ffi::getattrlistbulk(
                dirfd,
                &mut list,
                buffer.as_mut_ptr().cast::<c_void>(),
                buffer.len(),
                options.bits(),
            )
        };

        usize::try_from(count).map_err(|_| io::Error::last_os_error())
    }
}
