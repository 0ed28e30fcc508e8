mod serializable;

mod scalar;

pub use serializable::*;

pub use scalar::*;
