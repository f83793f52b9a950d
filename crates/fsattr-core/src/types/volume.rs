//! Volume capability and attribute records.

use std::fmt;

use crate::request::AttributeSet;

/// `vol_capabilities_attr_t`
///
/// Two arrays of four `u_int32_t`, indexed by `VOL_CAPABILITIES_FORMAT`,
/// `VOL_CAPABILITIES_INTERFACES` and two reserved slots. A capability is only
/// meaningful if its bit is also set in `valid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VolumeCapabilities
{
    pub capabilities: [u32; 4],
    pub valid: [u32; 4],
}

impl VolumeCapabilities
{
    /// Index of the format capabilities (`VOL_CAPABILITIES_FORMAT`)
    pub const FORMAT: usize = 0;
    /// Index of the interface capabilities (`VOL_CAPABILITIES_INTERFACES`)
    pub const INTERFACES: usize = 1;

    /// `VOL_CAP_FMT_*` bits that are both valid and set.
    pub const fn format(&self) -> u32
    {
        self.capabilities[Self::FORMAT] & self.valid[Self::FORMAT]
    }

    /// `VOL_CAP_INT_*` bits that are both valid and set.
    pub const fn interfaces(&self) -> u32
    {
        self.capabilities[Self::INTERFACES] & self.valid[Self::INTERFACES]
    }

    /// Whether `bit` of the capability word at `index` is valid and set.
    pub fn supports(&self, index: usize, bit: u32) -> bool
    {
        index < 4 && self.capabilities[index] & self.valid[index] & bit == bit
    }
}

impl fmt::Display for VolumeCapabilities
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "format=0x{:08x} interfaces=0x{:08x}", self.format(), self.interfaces())
    }
}

/// `vol_attributes_attr_t`: which attributes the volume supports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VolumeAttributeInfo
{
    /// Attributes the volume knows about (`validattr`)
    pub valid: AttributeSet,
    /// Attributes the volume supports natively (`nativeattr`)
    pub native: AttributeSet,
}

impl fmt::Display for VolumeAttributeInfo
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let set = |s: &AttributeSet| {
            format!(
                "{:08x}/{:08x}/{:08x}/{:08x}/{:08x}",
                s.common, s.volume, s.directory, s.file, s.common_extended
            )
        };
        write!(f, "valid={} native={}", set(&self.valid), set(&self.native))
    }
}
