//! Stateful decoding of element headers and values
//! over an in-memory buffer.
pub mod decode;
pub mod value;
