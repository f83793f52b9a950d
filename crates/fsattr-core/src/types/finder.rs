//! Finder info records (`ATTR_CMN_FNDRINFO`).
//!
//! Finder info is 32 bytes: a 16-byte "user info" record followed by a
//! 16-byte "extended info" record. Which pair of records applies depends on
//! whether the object is a file or a folder. Both are stored big-endian, as on
//! HFS, regardless of host byte order.
//!
//! Layouts from TN1150, [Finder Info](https://developer.apple.com/library/archive/technotes/tn/tn1150.html#FinderInfo).

use std::fmt;

/// Size of one record
pub const FINDER_RECORD_SIZE: usize = 16;

/// Size of the whole Finder info (two records)
pub const FINDER_INFO_SIZE: usize = 2 * FINDER_RECORD_SIZE;

fn be_u16(bytes: &[u8], at: usize) -> u16
{
    u16::from_be_bytes([bytes[at], bytes[at + 1]])
}

fn be_i16(bytes: &[u8], at: usize) -> i16
{
    i16::from_be_bytes([bytes[at], bytes[at + 1]])
}

fn be_u32(bytes: &[u8], at: usize) -> u32
{
    u32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn be_i32(bytes: &[u8], at: usize) -> i32
{
    i32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// An on-screen point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point
{
    pub v: i16,
    pub h: i16,
}

impl Point
{
    fn parse(bytes: &[u8], at: usize) -> Self
    {
        Self {
            v: be_i16(bytes, at),
            h: be_i16(bytes, at + 2),
        }
    }
}

/// An on-screen rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect
{
    pub top: i16,
    pub left: i16,
    pub bottom: i16,
    pub right: i16,
}

/// File user info (`FileInfo`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FileInfo
{
    /// Four-character type code
    pub file_type: u32,
    /// Four-character creator code
    pub file_creator: u32,
    pub finder_flags: u16,
    /// Position in the parent folder window
    pub location: Point,
    pub reserved: u16,
}

impl FileInfo
{
    pub fn from_be_bytes(bytes: &[u8; FINDER_RECORD_SIZE]) -> Self
    {
        Self {
            file_type: be_u32(bytes, 0),
            file_creator: be_u32(bytes, 4),
            finder_flags: be_u16(bytes, 8),
            location: Point::parse(bytes, 10),
            reserved: be_u16(bytes, 14),
        }
    }
}

/// File extended info (`ExtendedFileInfo`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExtendedFileInfo
{
    pub reserved_1: [i16; 4],
    pub extended_finder_flags: u16,
    pub reserved_2: i16,
    pub put_away_folder_id: i32,
}

impl ExtendedFileInfo
{
    pub fn from_be_bytes(bytes: &[u8; FINDER_RECORD_SIZE]) -> Self
    {
        Self {
            reserved_1: [be_i16(bytes, 0), be_i16(bytes, 2), be_i16(bytes, 4), be_i16(bytes, 6)],
            extended_finder_flags: be_u16(bytes, 8),
            reserved_2: be_i16(bytes, 10),
            put_away_folder_id: be_i32(bytes, 12),
        }
    }
}

/// Folder user info (`FolderInfo`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FolderInfo
{
    pub window_bounds: Rect,
    pub finder_flags: u16,
    pub location: Point,
    pub reserved: u16,
}

impl FolderInfo
{
    pub fn from_be_bytes(bytes: &[u8; FINDER_RECORD_SIZE]) -> Self
    {
        Self {
            window_bounds: Rect {
                top: be_i16(bytes, 0),
                left: be_i16(bytes, 2),
                bottom: be_i16(bytes, 4),
                right: be_i16(bytes, 6),
            },
            finder_flags: be_u16(bytes, 8),
            location: Point::parse(bytes, 10),
            reserved: be_u16(bytes, 14),
        }
    }
}

/// Folder extended info (`ExtendedFolderInfo`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExtendedFolderInfo
{
    pub scroll_position: Point,
    pub reserved_1: i32,
    pub extended_finder_flags: u16,
    pub reserved_2: i16,
    pub put_away_folder_id: u32,
}

impl ExtendedFolderInfo
{
    pub fn from_be_bytes(bytes: &[u8; FINDER_RECORD_SIZE]) -> Self
    {
        Self {
            scroll_position: Point::parse(bytes, 0),
            reserved_1: be_i32(bytes, 4),
            extended_finder_flags: be_u16(bytes, 8),
            reserved_2: be_i16(bytes, 10),
            put_away_folder_id: be_u32(bytes, 12),
        }
    }
}

/// Decoded Finder info, shaped by the object type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinderInfo
{
    File
    {
        info: FileInfo,
        extended: ExtendedFileInfo,
    },
    Directory
    {
        info: FolderInfo,
        extended: ExtendedFolderInfo,
    },
}

impl FinderInfo
{
    /// Splits 32 bytes into the two records of the chosen shape.
    pub fn from_be_bytes(bytes: &[u8; FINDER_INFO_SIZE], directory: bool) -> Self
    {
        let mut first = [0u8; FINDER_RECORD_SIZE];
        let mut second = [0u8; FINDER_RECORD_SIZE];
        first.copy_from_slice(&bytes[..FINDER_RECORD_SIZE]);
        second.copy_from_slice(&bytes[FINDER_RECORD_SIZE..]);

        if directory {
            FinderInfo::Directory {
                info: FolderInfo::from_be_bytes(&first),
                extended: ExtendedFolderInfo::from_be_bytes(&second),
            }
        } else {
            FinderInfo::File {
                info: FileInfo::from_be_bytes(&first),
                extended: ExtendedFileInfo::from_be_bytes(&second),
            }
        }
    }

    /// The `finderFlags` word of the user info record.
    pub const fn finder_flags(&self) -> u16
    {
        match self {
            FinderInfo::File { info, .. } => info.finder_flags,
            FinderInfo::Directory { info, .. } => info.finder_flags,
        }
    }

    /// The `extendedFinderFlags` word of the extended record.
    pub const fn extended_finder_flags(&self) -> u16
    {
        match self {
            FinderInfo::File { extended, .. } => extended.extended_finder_flags,
            FinderInfo::Directory { extended, .. } => extended.extended_finder_flags,
        }
    }
}

impl fmt::Display for FinderInfo
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            FinderInfo::File { info, extended } => write!(
                f,
                "file type={} creator={} flags=0x{:04x} xflags=0x{:04x}",
                four_cc(info.file_type),
                four_cc(info.file_creator),
                info.finder_flags,
                extended.extended_finder_flags
            ),
            FinderInfo::Directory { info, extended } => write!(
                f,
                "folder flags=0x{:04x} xflags=0x{:04x} location=({}, {})",
                info.finder_flags, extended.extended_finder_flags, info.location.v, info.location.h
            ),
        }
    }
}

fn four_cc(code: u32) -> String
{
    let bytes = code.to_be_bytes();
    if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
        format!("'{}'", String::from_utf8_lossy(&bytes))
    } else {
        format!("0x{code:08x}")
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_file_info_is_big_endian()
    {
        let mut bytes = [0u8; FINDER_INFO_SIZE];
        bytes[..4].copy_from_slice(b"TEXT");
        bytes[4..8].copy_from_slice(b"ttxt");
        bytes[8..10].copy_from_slice(&0x0100u16.to_be_bytes());
        bytes[24..26].copy_from_slice(&0x8000u16.to_be_bytes());

        let info = FinderInfo::from_be_bytes(&bytes, false);
        let FinderInfo::File { info: user, extended } = info else {
            panic!("expected file-shaped finder info");
        };
        assert_eq!(user.file_type, u32::from_be_bytes(*b"TEXT"));
        assert_eq!(user.file_creator, u32::from_be_bytes(*b"ttxt"));
        assert_eq!(user.finder_flags, 0x0100);
        assert_eq!(extended.extended_finder_flags, 0x8000);
        assert_eq!(info.to_string(), "file type='TEXT' creator='ttxt' flags=0x0100 xflags=0x8000");
    }

    #[test]
    fn test_folder_info_shape()
    {
        let mut bytes = [0u8; FINDER_INFO_SIZE];
        bytes[0..2].copy_from_slice(&10i16.to_be_bytes());
        bytes[6..8].copy_from_slice(&(-3i16).to_be_bytes());
        bytes[10..12].copy_from_slice(&7i16.to_be_bytes());
        bytes[28..32].copy_from_slice(&42u32.to_be_bytes());

        let FinderInfo::Directory { info, extended } = FinderInfo::from_be_bytes(&bytes, true) else {
            panic!("expected directory-shaped finder info");
        };
        assert_eq!(info.window_bounds.top, 10);
        assert_eq!(info.window_bounds.right, -3);
        assert_eq!(info.location.v, 7);
        assert_eq!(extended.put_away_folder_id, 42);
    }
}
