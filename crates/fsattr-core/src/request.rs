//! # Attribute Requests
//!
//! Turns a selection of catalog attributes plus option flags into the
//! `struct attrlist` the getattrlist family expects.
//!
//! ## Kernel quirks handled here
//!
//! - Any volume attribute requires `ATTR_VOL_INFO` in the volume mask.
//! - The fifth mask (`forkattr`) means "fork attributes" unless
//!   `FSOPT_ATTR_CMN_EXTENDED` is set, in which case it means "extended common
//!   attributes". Fork attributes are deprecated and not modelled, so whenever
//!   an extended common attribute is selected the option is forced on.
//!
//! ## Example
//!
//! ```rust
//! use fsattr_core::catalog::{CommonAttribute, CommonExtendedAttribute};
//! use fsattr_core::request::{AttributeRequest, AttributeSelection, FsOptions};
//!
//! let selection = AttributeSelection::new()
//!     .with(CommonAttribute::Name)
//!     .with(CommonExtendedAttribute::LinkId);
//! let request = AttributeRequest::build(&selection, FsOptions::NO_FOLLOW)?;
//! assert!(request.options().contains(FsOptions::USE_EXTENDED_COMMON_ATTRIBUTES));
//! # Ok::<(), fsattr_core::AttributeError>(())
//! ```

use bitflags::bitflags;
use tracing::debug;

use crate::catalog::{Attribute, AttributeId, Category};
use crate::constants::{ATTR_BIT_MAP_COUNT, ATTR_CMN_RETURNED_ATTRS, ATTR_VOL_INFO};
use crate::error::{AttributeError, Result};

bitflags! {
    /// `FSOPT_*` option flags
    ///
    /// `getattrlist` takes these as `unsigned long`, `getattrlistbulk` as
    /// `uint64_t`; both are 64 bits wide on every supported target.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FsOptions: u64 {
        /// Do not follow a trailing symlink (`FSOPT_NOFOLLOW`)
        const NO_FOLLOW = 0x0000_0001;
        /// `FSOPT_NOINMEMUPDATE`
        const NO_IN_MEMORY_UPDATE = 0x0000_0002;
        /// Report the full size of truncated references (`FSOPT_REPORT_FULLSIZE`)
        const REPORT_FULL_SIZE = 0x0000_0004;
        /// Keep space for attributes the kernel cannot supply (`FSOPT_PACK_INVAL_ATTRS`)
        const PACK_INVALID_ATTRIBUTES = 0x0000_0008;
        /// `FSOPT_EXCHANGE_DATA_ONLY`
        const EXCHANGE_DATA_ONLY = 0x0000_0010;
        /// The fifth mask carries `ATTR_CMNEXT_*` (`FSOPT_ATTR_CMN_EXTENDED`)
        const USE_EXTENDED_COMMON_ATTRIBUTES = 0x0000_0020;
        /// `FSOPT_LIST_SNAPSHOT`
        const LIST_SNAPSHOT = 0x0000_0040;
        /// `FSOPT_NOFIRMLINKPATH`
        const NO_FIRMLINK_PATH = 0x0000_0080;
        /// `FSOPT_FOLLOW_FIRMLINK`
        const FOLLOW_FIRMLINK = 0x0000_0100;
        /// `FSOPT_RETURN_REALDEV`
        const RETURN_REAL_DEVICE = 0x0000_0200;
        /// `FSOPT_UTIMES_NULL`
        const UTIMES_NULL = 0x0000_0400;
        /// Do not follow symlinks anywhere in the path (`FSOPT_NOFOLLOW_ANY`)
        const NO_FOLLOW_ANY = 0x0000_0800;
    }
}

/// Five category masks (`attribute_set_t`)
///
/// Used for the request masks and for the set the kernel reports back when
/// `returnedAttributes` is requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AttributeSet
{
    pub common: u32,
    pub volume: u32,
    pub directory: u32,
    pub file: u32,
    pub common_extended: u32,
}

impl AttributeSet
{
    /// Builds a set from raw masks, dropping bits outside each valid mask.
    ///
    /// This mirrors the masking the kernel does on input. Typed inserts never
    /// clamp; they are validated by [`AttributeRequest::build`] instead.
    pub fn from_raw(common: u32, volume: u32, directory: u32, file: u32, common_extended: u32) -> Self
    {
        Self {
            common: common & Category::Common.valid_mask(),
            volume: volume & Category::Volume.valid_mask(),
            directory: directory & Category::Directory.valid_mask(),
            file: file & Category::File.valid_mask(),
            common_extended: common_extended & Category::CommonExtended.valid_mask(),
        }
    }

    /// The mask of one category.
    pub const fn mask(&self, category: Category) -> u32
    {
        match category {
            Category::Common => self.common,
            Category::Volume => self.volume,
            Category::Directory => self.directory,
            Category::File => self.file,
            Category::CommonExtended => self.common_extended,
        }
    }

    fn mask_mut(&mut self, category: Category) -> &mut u32
    {
        match category {
            Category::Common => &mut self.common,
            Category::Volume => &mut self.volume,
            Category::Directory => &mut self.directory,
            Category::File => &mut self.file,
            Category::CommonExtended => &mut self.common_extended,
        }
    }

    /// Sets the bit of `attribute`.
    pub fn insert(&mut self, attribute: impl Into<AttributeId>)
    {
        let id = attribute.into();
        *self.mask_mut(id.category()) |= id.mask();
    }

    /// Clears the bit of `attribute`.
    pub fn remove(&mut self, attribute: impl Into<AttributeId>)
    {
        let id = attribute.into();
        *self.mask_mut(id.category()) &= !id.mask();
    }

    /// Whether the bit of `attribute` is set.
    pub fn contains(&self, attribute: impl Into<AttributeId>) -> bool
    {
        let id = attribute.into();
        self.mask(id.category()) & id.mask() != 0
    }

    pub fn is_empty(&self) -> bool
    {
        Category::ALL.iter().all(|category| self.mask(*category) == 0)
    }

    /// Attributes of category `A` present in the set, in canonical order.
    pub fn members<A: Attribute>(&self) -> Vec<A>
    {
        A::members(self.mask(A::CATEGORY))
    }
}

/// The attributes a caller wants, across categories
///
/// Order and duplicates do not matter: the buffer layout only depends on
/// which bits end up set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSelection
{
    ids: Vec<AttributeId>,
}

impl AttributeSelection
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Adds an attribute (builder style).
    #[must_use]
    pub fn with(mut self, attribute: impl Into<AttributeId>) -> Self
    {
        self.insert(attribute);
        self
    }

    /// Adds an attribute.
    pub fn insert(&mut self, attribute: impl Into<AttributeId>)
    {
        let id = attribute.into();
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    /// Adds every attribute of `category` that the kernel accepts.
    pub fn insert_category(&mut self, category: Category)
    {
        let valid = category.valid_mask();
        for id in category.attributes() {
            if id.mask() & valid == id.mask() {
                self.insert(id);
            }
        }
    }

    pub fn contains(&self, attribute: impl Into<AttributeId>) -> bool
    {
        self.ids.contains(&attribute.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = AttributeId> + '_
    {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize
    {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.ids.is_empty()
    }
}

impl<I: Into<AttributeId>> FromIterator<I> for AttributeSelection
{
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self
    {
        let mut selection = Self::new();
        selection.extend(iter);
        selection
    }
}

impl<I: Into<AttributeId>> Extend<I> for AttributeSelection
{
    fn extend<T: IntoIterator<Item = I>>(&mut self, iter: T)
    {
        for id in iter {
            self.insert(id);
        }
    }
}

/// `struct attrlist`, as passed to the kernel
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttrList
{
    /// Always `ATTR_BIT_MAP_COUNT`
    pub bitmapcount: u16,
    pub reserved: u16,
    pub commonattr: u32,
    pub volattr: u32,
    pub dirattr: u32,
    pub fileattr: u32,
    /// Extended common attributes (with `FSOPT_ATTR_CMN_EXTENDED`)
    pub forkattr: u32,
}

/// A validated request: category masks plus option flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeRequest
{
    attributes: AttributeSet,
    options: FsOptions,
}

impl AttributeRequest
{
    /// Folds a selection into per-category masks.
    ///
    /// ## Errors
    ///
    /// Returns [`AttributeError::InvalidAttribute`] if an attribute lies outside
    /// its category's valid mask (the deprecated extent records).
    ///
    /// ## Option coercion
    ///
    /// Selecting any extended common attribute turns on
    /// [`FsOptions::USE_EXTENDED_COMMON_ATTRIBUTES`], whatever the caller passed.
    pub fn build(selection: &AttributeSelection, options: FsOptions) -> Result<Self>
    {
        let mut attributes = AttributeSet::default();
        for id in selection.iter() {
            if id.mask() & id.category().valid_mask() != id.mask() {
                return Err(AttributeError::InvalidAttribute { attribute: id });
            }
            attributes.insert(id);
        }

        Ok(Self::from_set(attributes, options))
    }

    /// Builds a request from masks that are already valid.
    ///
    /// Bits outside the valid masks are dropped.
    pub fn from_set(attributes: AttributeSet, options: FsOptions) -> Self
    {
        let attributes = AttributeSet::from_raw(
            attributes.common,
            attributes.volume,
            attributes.directory,
            attributes.file,
            attributes.common_extended,
        );

        let mut options = options;
        if attributes.common_extended != 0 && !options.contains(FsOptions::USE_EXTENDED_COMMON_ATTRIBUTES) {
            debug!(
                mask = attributes.common_extended,
                "Extended common attributes selected, forcing FSOPT_ATTR_CMN_EXTENDED"
            );
            options |= FsOptions::USE_EXTENDED_COMMON_ATTRIBUTES;
        }

        Self { attributes, options }
    }

    /// Adds the `returnedAttributes` meta-attribute to the request.
    #[must_use]
    pub fn with_returned_attributes(mut self) -> Self
    {
        self.attributes.common |= ATTR_CMN_RETURNED_ATTRS;
        self
    }

    /// Whether the kernel will prepend the returned set to the buffer.
    pub fn returns_attribute_set(&self) -> bool
    {
        self.attributes.common & ATTR_CMN_RETURNED_ATTRS != 0
    }

    /// The requested masks (without `ATTR_VOL_INFO`).
    pub fn attributes(&self) -> AttributeSet
    {
        self.attributes
    }

    /// The effective options, after coercion.
    pub fn options(&self) -> FsOptions
    {
        self.options
    }

    /// Renders the wire struct.
    pub fn attr_list(&self) -> AttrList
    {
        let volattr = if self.attributes.volume != 0 {
            self.attributes.volume | ATTR_VOL_INFO
        } else {
            0
        };

        AttrList {
            bitmapcount: ATTR_BIT_MAP_COUNT,
            reserved: 0,
            commonattr: self.attributes.common,
            volattr,
            dirattr: self.attributes.directory,
            fileattr: self.attributes.file,
            forkattr: self.attributes.common_extended,
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::catalog::{CommonAttribute, VolumeAttribute};

    #[test]
    fn test_options_match_header_values()
    {
        assert_eq!(FsOptions::NO_FOLLOW.bits(), 0x1);
        assert_eq!(FsOptions::PACK_INVALID_ATTRIBUTES.bits(), 0x8);
        assert_eq!(FsOptions::USE_EXTENDED_COMMON_ATTRIBUTES.bits(), 0x20);
        assert_eq!(FsOptions::NO_FOLLOW_ANY.bits(), 0x800);
        assert_eq!(FsOptions::all().bits(), 0xFFF);
    }

    #[test]
    fn test_attr_list_layout()
    {
        assert_eq!(std::mem::size_of::<AttrList>(), 24);
        assert_eq!(std::mem::align_of::<AttrList>(), 4);
    }

    #[test]
    fn test_volume_info_added_only_for_volume_requests()
    {
        let plain = AttributeRequest::build(&AttributeSelection::new().with(CommonAttribute::Name), FsOptions::empty())
            .unwrap();
        assert_eq!(plain.attr_list().volattr, 0);

        let volume = AttributeRequest::build(&AttributeSelection::new().with(VolumeAttribute::Size), FsOptions::empty())
            .unwrap();
        assert_eq!(volume.attr_list().volattr, 0x4 | ATTR_VOL_INFO);
        assert_eq!(volume.attributes().volume, 0x4);
    }

    #[test]
    fn test_set_insert_remove()
    {
        let mut set = AttributeSet::default();
        assert!(set.is_empty());
        set.insert(CommonAttribute::Name);
        set.insert(VolumeAttribute::Name);
        assert!(set.contains(CommonAttribute::Name));
        assert!(set.contains(VolumeAttribute::Name));
        assert!(!set.contains(CommonAttribute::FullPath));
        set.remove(CommonAttribute::Name);
        assert!(!set.contains(CommonAttribute::Name));
        assert_eq!(set.common, 0);
    }
}
