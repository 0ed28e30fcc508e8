use crate::layout::{ItemCount, ItemOffset, TotalSize, U32_LEN};
use crate::types::Ser;
use anyhow::Result;

/// Encodes `n` as 4 bytes, least-significant first.
pub fn ser_uint32(n: u32) -> [u8; U32_LEN] {
    n.to_le_bytes()
}

/// Encodes every item, keeping the per-item buffers separate.
///
/// The first failing item fails the whole call; buffers already produced
/// are discarded. On success the caller picks the arrangement:
/// [`ser_struct`] concatenates the buffers as-is, while [`ser_fixvec`],
/// [`ser_dynvec`] and [`ser_table`] derive their headers from them first.
pub fn ser_array(items: &[&dyn Ser]) -> Result<Vec<Vec<u8>>> {
    let mut bufs = Vec::with_capacity(items.len());
    for item in items {
        bufs.push(item.ser()?);
    }
    Ok(bufs)
}

/// Concatenates pre-encoded fields in declaration order, no header.
pub fn ser_struct(fields: &[Vec<u8>]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(fields.iter().map(Vec::len).sum());
    for field in fields {
        buf.extend_from_slice(field);
    }
    buf
}

/// Encodes a fixvec: item count, then the items back to back.
///
/// An empty fixvec still carries its count and encodes to `[0, 0, 0, 0]`.
pub fn ser_fixvec(items: &[Vec<u8>]) -> Result<Vec<u8>> {
    let count = ItemCount::from_items(items)?;
    let bodies_len: usize = items.iter().map(Vec::len).sum();

    let mut buf = Vec::with_capacity(U32_LEN + bodies_len);
    buf.extend_from_slice(&ser_uint32(*count));
    for item in items {
        buf.extend_from_slice(item);
    }
    Ok(buf)
}

/// Encodes a dynvec: total size, one absolute offset per item, then the
/// items. An empty dynvec is its own 4-byte size, `[4, 0, 0, 0]`.
pub fn ser_dynvec(items: &[Vec<u8>]) -> Result<Vec<u8>> {
    ser_offset_indexed(items)
}

/// Encodes a table: byte-for-byte the dynvec layout.
///
/// The difference is semantic. A table's field count is fixed by its
/// declared shape, and field identity is positional, so the caller must
/// pass the fields in their declared order. Zero declared fields yield the
/// header-only output.
pub fn ser_table(fields: &[Vec<u8>]) -> Result<Vec<u8>> {
    ser_offset_indexed(fields)
}

/// Encodes an option. Absence is zero bytes; presence is the item's own
/// encoding, with no discriminator and no length prefix.
pub fn ser_option(item: Option<&dyn Ser>) -> Result<Vec<u8>> {
    match item {
        None => Ok(vec![]),
        Some(item) => item.ser(),
    }
}

/// The offset-indexed layout shared by dynvec and table.
///
/// Each item's offset is the running end position of everything before it,
/// starting past the header and the offset block. The recorded size covers
/// the entire output, the size field itself included.
fn ser_offset_indexed(items: &[Vec<u8>]) -> Result<Vec<u8>> {
    let mut pos = U32_LEN + U32_LEN * items.len();

    let mut offsets = Vec::with_capacity(items.len());
    for item in items {
        offsets.push(ItemOffset::from_pos(pos)?);
        pos += item.len();
    }
    let size = TotalSize::from_pos(pos)?;

    let mut buf = Vec::with_capacity(pos);
    buf.extend_from_slice(&ser_uint32(*size));
    for offset in offsets {
        buf.extend_from_slice(&ser_uint32(*offset));
    }
    for item in items {
        buf.extend_from_slice(item);
    }
    Ok(buf)
}
