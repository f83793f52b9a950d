//! HFS extent records (`ATTR_FILE_DATAEXTENTS`, `ATTR_FILE_RSRCEXTENTS`).

/// Start and length (in allocation blocks) of one extent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExtentDescriptor
{
    pub start_block: u32,
    pub block_count: u32,
}

/// The first eight extents of a fork (`extentrecord`, 64 bytes)
pub type ExtentRecord = [ExtentDescriptor; 8];
