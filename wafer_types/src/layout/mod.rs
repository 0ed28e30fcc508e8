//! # Wire format
//!
//! Composite values are encoded by five layout kinds.
//!
//! All multi-byte integers below are unsigned 32-bit, little-endian.
//! Offsets are absolute byte positions, measured from the first byte of the
//! enclosing layout's own output.
//!
//! ```text
//! struct Struct {
//!     field_0:            [u8; size_of(field_0)],
//!     field_1:            [u8; size_of(field_1)],
//!     ...
//! }
//!
//! struct FixVec {
//!     item_count:         u32,
//!     item_0:             [u8; item_size],
//!     item_1:             [u8; item_size],
//!     ...
//! }
//!
//! struct DynVec {
//!     total_size:         u32,
//!     item_offset_0:      u32,
//!     ...
//!     item_offset_N:      u32,
//!     item_0:             [u8; size_of(item_0)],
//!     ...
//!     item_N:             [u8; size_of(item_N)],
//! }
//!
//! struct Table {
//!     // Same bytes as DynVec. The field count is fixed by the table's
//!     // declared shape, and field identity is positional.
//!     total_size:         u32,
//!     field_offset_0:     u32,
//!     ...
//!     field_0:            [u8; size_of(field_0)],
//!     ...
//! }
//!
//! struct Option::None {}
//!
//! struct Option::Some {
//!     item:               [u8; size_of(item)],
//! }
//! ```
//!
//! An empty fixvec is the four zero bytes of its count. An empty dynvec is
//! the four bytes of its own size field, `[4, 0, 0, 0]`; a zero-field table
//! encodes the same way. An absent option is zero bytes: presence is for
//! the enclosing layout or the schema to record, not for the option itself.

mod lengths;
mod ser;

pub use ser::*;
use lengths::*;
