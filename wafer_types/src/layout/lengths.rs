use anyhow::Result;
use derive_more::Deref;
use std::mem;

pub const U32_LEN: usize = mem::size_of::<u32>();

/* Every u32 that crosses the wire is converted through one of these.
Anything that does not fit in 32 bits is rejected, never wrapped. */

/// Item count of a fixvec, carried in its leading u32.
#[derive(Deref, Clone, Copy)]
pub struct ItemCount(u32);
impl ItemCount {
    pub fn from_items(items: &[Vec<u8>]) -> Result<Self> {
        let int = u32::try_from(items.len())?;
        Ok(Self(int))
    }
}

/// Byte size of a whole dynvec/table output, its own header included.
#[derive(Deref, Clone, Copy)]
pub struct TotalSize(u32);
impl TotalSize {
    pub fn from_pos(pos: usize) -> Result<Self> {
        let int = u32::try_from(pos)?;
        Ok(Self(int))
    }
}

/// Absolute position of an item's first byte within its enclosing layout.
#[derive(Deref, Clone, Copy)]
pub struct ItemOffset(u32);
impl ItemOffset {
    pub fn from_pos(pos: usize) -> Result<Self> {
        let int = u32::try_from(pos)?;
        Ok(Self(int))
    }
}
