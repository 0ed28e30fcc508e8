use crate::layout::ser_uint32;
use crate::types::Ser;
use anyhow::Result;
use derive_more::{Deref, From};
use std::mem;

/* Fixed-width scalars. Their sizes are known to both sides, so their
encodings carry no header. */

#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct Uint32(pub u32);

impl Ser for Uint32 {
    fn ser(&self) -> Result<Vec<u8>> {
        Ok(self.0.to_le_bytes().to_vec())
    }
}

#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct Uint64(pub u64);

impl Ser for Uint64 {
    fn ser(&self) -> Result<Vec<u8>> {
        Ok(self.0.to_le_bytes().to_vec())
    }
}

#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct Byte32(pub [u8; 32]);

impl Ser for Byte32 {
    fn ser(&self) -> Result<Vec<u8>> {
        Ok(self.0.to_vec())
    }
}

/// Dynamic-length byte string, laid out as a fixvec of single bytes.
#[derive(From, Deref, PartialEq, Eq, Clone, Debug)]
pub struct Bytes(pub Vec<u8>);

impl Ser for Bytes {
    fn ser(&self) -> Result<Vec<u8>> {
        let count = u32::try_from(self.0.len())?;

        let mut buf = Vec::with_capacity(mem::size_of::<u32>() + self.0.len());
        buf.extend_from_slice(&ser_uint32(count));
        buf.extend_from_slice(&self.0);
        Ok(buf)
    }
}
