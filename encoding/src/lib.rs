//! DICOM decoding primitives.
//!
//! This crate provides the pieces for reading data elements
//! out of an in-memory DICOM data set:
//!
//! - [`cursor`]: a bounds-checked, position-tracking reader over a byte slice;
//! - [`decode`]: data element header decoders
//!   for explicit and implicit VR transfer syntaxes;
//! - [`text`]: character repertoires named by _Specific Character Set_;
//! - [`transfer_syntax`]: the table of known transfer syntaxes.
//!
//! Everything here reads from memory. Streaming from files is out of scope.

pub mod cursor;
pub mod decode;
pub mod text;
pub mod transfer_syntax;

pub use byteordered;
pub use cursor::ByteCursor;
pub use decode::{Decode, DecodedHeader, VrSource};
pub use text::{SpecificCharacterSet, TextCodec};
pub use transfer_syntax::{Endianness, TransferSyntax};
