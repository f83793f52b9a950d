//! Vnode types (`fsobj_type_t`, `enum vtype`).

use std::fmt;

/// Type of a filesystem object, as reported by `ATTR_CMN_OBJTYPE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType
{
    /// `VNON`
    None,
    /// `VREG`
    Regular,
    /// `VDIR`
    Directory,
    /// `VBLK`
    BlockDevice,
    /// `VCHR`
    CharacterDevice,
    /// `VLNK`
    Symlink,
    /// `VSOCK`
    Socket,
    /// `VFIFO`
    Fifo,
    /// `VBAD`
    Bad,
    /// `VSTR`
    Stream,
    /// `VCPLX`
    Complex,
    /// A value newer than this table
    Unknown(u32),
}

impl ObjectType
{
    pub const fn from_raw(raw: u32) -> Self
    {
        match raw {
            0 => ObjectType::None,
            1 => ObjectType::Regular,
            2 => ObjectType::Directory,
            3 => ObjectType::BlockDevice,
            4 => ObjectType::CharacterDevice,
            5 => ObjectType::Symlink,
            6 => ObjectType::Socket,
            7 => ObjectType::Fifo,
            8 => ObjectType::Bad,
            9 => ObjectType::Stream,
            10 => ObjectType::Complex,
            other => ObjectType::Unknown(other),
        }
    }

    pub const fn raw(self) -> u32
    {
        match self {
            ObjectType::None => 0,
            ObjectType::Regular => 1,
            ObjectType::Directory => 2,
            ObjectType::BlockDevice => 3,
            ObjectType::CharacterDevice => 4,
            ObjectType::Symlink => 5,
            ObjectType::Socket => 6,
            ObjectType::Fifo => 7,
            ObjectType::Bad => 8,
            ObjectType::Stream => 9,
            ObjectType::Complex => 10,
            ObjectType::Unknown(raw) => raw,
        }
    }

    pub const fn is_directory(self) -> bool
    {
        matches!(self, ObjectType::Directory)
    }
}

impl fmt::Display for ObjectType
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let name = match self {
            ObjectType::None => "none",
            ObjectType::Regular => "regular",
            ObjectType::Directory => "directory",
            ObjectType::BlockDevice => "block-device",
            ObjectType::CharacterDevice => "character-device",
            ObjectType::Symlink => "symlink",
            ObjectType::Socket => "socket",
            ObjectType::Fifo => "fifo",
            ObjectType::Bad => "bad",
            ObjectType::Stream => "stream",
            ObjectType::Complex => "complex",
            ObjectType::Unknown(raw) => return write!(f, "unknown({raw})"),
        };
        f.write_str(name)
    }
}
