use anyhow::Result;

/// A value that can produce its own encoded byte sequence.
///
/// This is the only thing the layout serializers ask of nested content.
/// An implementation either returns its finished buffer or fails; the
/// failure is propagated verbatim by every enclosing layout.
pub trait Ser {
    fn ser(&self) -> Result<Vec<u8>>;
}
