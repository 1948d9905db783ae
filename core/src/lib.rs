#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]
#![recursion_limit = "60"]

//! This is the core library of the DICOM data set decoder,
//! containing the concepts and data structures shared by the other crates.
//!
//! - [`header`] comprises the data types for DICOM element headers,
//!   including definitions for DICOM tags, value representations and lengths.
//! - [`dictionary`] describes the behavior of DICOM data dictionaries,
//!   which translate attribute tags and keywords into
//!   entries with their VR, VM and retirement status.
//! - [`value`] holds definitions for values in DICOM elements,
//!   with the awareness of multiplicity, representation,
//!   and the possible presence of sequences.
//!
//! [`dictionary`]: ./dictionary/index.html
//! [`header`]: ./header/index.html
//! [`value`]: ./value/index.html

pub mod dictionary;
pub mod header;
pub mod value;

pub use dictionary::{DataDictionary, DataDictionaryEntry};
pub use header::{DataElement, DataElementHeader, Length, Tag, VR};
pub use value::{PrimitiveValue, Value as DicomValue, ValueFlags};

// re-export crates that are part of the public API
pub use chrono;
pub use smallvec;
