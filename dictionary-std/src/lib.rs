//! This crate implements the standard DICOM data element dictionary
//! and tag constants.
//!
//! - [`data_element`]: the standard tag registry,
//!   queried by tag, keyword or tag expression.
//!   Exact tags resolve with a single hash lookup;
//!   repeating group `(ggxx,eeee)` and element `(gggg,eexx)` ranges,
//!   private creators and group lengths resolve afterwards.
//! - [`tags`]: constants mapping an attribute keyword to its DICOM tag
//!   at compile time, without incurring a look-up cost.
//!
//! The records are collected from [DICOM PS3.6].
//! The registry is a singleton behind the unit type [`StandardDataDictionary`],
//! which the decoder receives as an explicit parameter.
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
pub mod data_element;
pub mod tags;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
