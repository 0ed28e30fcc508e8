//! A byte-exact wire format for composite values.
//!
//! Values are encoded bottom-up: leaves produce their own bytes through
//! [`types::Ser`], and the serializers in [`layout`] arrange those buffers
//! into vectors, tables and structs, nested to arbitrary depth.

pub mod layout;
pub mod types;
