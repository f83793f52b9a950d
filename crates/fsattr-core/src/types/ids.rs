//! Identifier structs: `fsid_t`, `fsobj_id_t`, `guid_t`.

use std::fmt;

/// Filesystem id (`fsid_t`, two `int32_t`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FsId
{
    pub val: [i32; 2],
}

impl fmt::Display for FsId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{:#x}:{:#x}", self.val[0], self.val[1])
    }
}

/// Filesystem object id (`fsobj_id_t`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ObjectId
{
    /// Object number (`fid_objno`)
    pub number: u32,
    /// Generation (`fid_generation`)
    pub generation: u32,
}

impl fmt::Display for ObjectId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}/{}", self.number, self.generation)
    }
}

/// A 16-byte UUID (`guid_t`), kept as raw bytes
///
/// ```rust
/// use fsattr_core::types::Guid;
///
/// let guid = Guid([0xAB; 16]);
/// assert_eq!(guid.to_string(), "ABABABAB-ABAB-ABAB-ABAB-ABABABABABAB");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Guid(pub [u8; 16]);

impl Guid
{
    pub const fn bytes(&self) -> &[u8; 16]
    {
        &self.0
    }

    /// Whether every byte is zero (the kernel's "no UUID").
    pub fn is_nil(&self) -> bool
    {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Display for Guid
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        for (i, byte) in self.0.iter().enumerate() {
            if matches!(i, 4 | 6 | 8 | 10) {
                f.write_str("-")?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}
