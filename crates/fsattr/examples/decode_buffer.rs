//! Example decoding a hand-built attribute buffer
//!
//! Runs on any platform. The buffer below is laid out the way `getattrlist`
//! answers a request for name, object type and modification time.
//!
//! Run with `RUST_LOG=trace` to see one event per decoded attribute.

use fsattr_core::catalog::CommonAttribute;
use fsattr_core::request::{AttributeRequest, AttributeSelection, FsOptions};
use fsattr_core::RawAttributeBuffer;
use fsattr_utils::{info, init_logging};

fn main() -> Result<(), Box<dyn std::error::Error>>
{
    let _guard = init_logging()?;

    let selection = AttributeSelection::new()
        .with(CommonAttribute::ModificationTime)
        .with(CommonAttribute::ObjectType)
        .with(CommonAttribute::Name);
    let request = AttributeRequest::build(&selection, FsOptions::empty())?;

    // length | name ref (offset, length) | objtype | mtime (sec, nsec) | "hello.txt\0" + padding
    let name = b"hello.txt\0";
    let fixed: usize = 8 + 4 + 16;
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0u32.to_ne_bytes());
    bytes.extend_from_slice(&i32::try_from(fixed)?.to_ne_bytes());
    bytes.extend_from_slice(&u32::try_from(name.len())?.to_ne_bytes());
    bytes.extend_from_slice(&1u32.to_ne_bytes());
    bytes.extend_from_slice(&1_700_000_000i64.to_ne_bytes());
    bytes.extend_from_slice(&250_000_000i64.to_ne_bytes());
    bytes.extend_from_slice(name);
    while bytes.len() % 4 != 0 {
        bytes.push(0);
    }
    let length = u32::try_from(bytes.len())?;
    bytes[..4].copy_from_slice(&length.to_ne_bytes());

    let decoded = RawAttributeBuffer::new(bytes, request.attributes())?.decode()?;
    for (id, value) in decoded.iter() {
        println!("{id} = {value}");
    }

    info!(attributes = decoded.len(), "Decoded example buffer");
    Ok(())
}
