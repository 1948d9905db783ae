//! This crate decodes DICOM data set streams held in memory,
//! at two layers of abstraction.
//!
//! - [`dataset::read`] contains the [`DataSetReader`],
//!   an iterator of [`DataToken`]s which follows the structure
//!   of the data set one element header at a time.
//! - [`dataset::mem`] assembles those tokens into an [`InMemDataSet`] tree.
//!
//! Values are interpreted by VR in [`stateful::value`].
//! Decoding never panics on malformed input:
//! fatal conditions are returned as an [`Error`]
//! along with everything decoded before them,
//! and recoverable conditions are recorded as [`Warning`]s.
//!
//! ```
//! use dcmtlv_dictionary_std::StandardDataDictionary;
//! use dcmtlv_parser::{read_dataset, ReadOptions, TransferSyntax};
//!
//! let data: &[u8] = &[
//!     0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x04, 0x00, b'D', b'o', b'e', b' ',
//! ];
//! let outcome = read_dataset(
//!     data,
//!     &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
//!     StandardDataDictionary,
//!     ReadOptions::default(),
//! );
//! let dataset = outcome.into_result()?;
//! let name = dataset.element_by_name("PatientName")?;
//! assert_eq!(name.to_str()?, "Doe");
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

pub mod dataset;
pub mod error;
pub mod stateful;

pub use dataset::mem::{AccessError, InMemDataSet, InMemElement, ReadOutcome};
pub use dataset::read::{DataSetReader, ReadOptions, ReaderState, ValueReadStrategy, Warning};
pub use dataset::DataToken;
pub use dcmtlv_encoding::transfer_syntax::TransferSyntax;
pub use error::{Error, Result};

use dcmtlv_core::dictionary::DataDictionary;
use dcmtlv_encoding::transfer_syntax;
use snafu::OptionExt;

/// Decode a whole data set from a byte buffer
/// encoded with the given transfer syntax.
///
/// `dict` resolves the VR of elements under implicit VR.
/// See [`InMemDataSet::read`].
pub fn read_dataset<D>(
    data: &[u8],
    ts: &TransferSyntax,
    dict: D,
    options: ReadOptions,
) -> ReadOutcome
where
    D: DataDictionary,
{
    InMemDataSet::read(data, ts, dict, options)
}

/// Decode a whole data set from a byte buffer
/// encoded with the transfer syntax of the given UID.
///
/// An unknown UID is reported in the outcome's error,
/// with an empty data set.
pub fn read_dataset_with_ts_uid<D>(
    data: &[u8],
    uid: &str,
    dict: D,
    options: ReadOptions,
) -> ReadOutcome
where
    D: DataDictionary,
{
    let ts = transfer_syntax::lookup(uid).context(error::UnsupportedTransferSyntaxSnafu {
        uid: uid.trim_end_matches(|c: char| c == '\0' || c == ' '),
    });
    match ts {
        Ok(ts) => read_dataset(data, ts, dict, options),
        Err(e) => ReadOutcome {
            dataset: InMemDataSet::default(),
            error: Some(e),
            warnings: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmtlv_dictionary_std::StandardDataDictionary;

    #[test]
    fn unknown_transfer_syntax_uid() {
        let outcome = read_dataset_with_ts_uid(
            &[],
            "1.2.3.4\0",
            StandardDataDictionary,
            ReadOptions::default(),
        );
        assert!(outcome.dataset.is_empty());
        assert!(matches!(
            outcome.error,
            Some(Error::UnsupportedTransferSyntax { ref uid, .. }) if uid == "1.2.3.4"
        ));
    }

    #[test]
    fn known_transfer_syntax_uid() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x28, 0x00, 0x10, 0x00, // (0028,0010) Rows
            0x02, 0x00, 0x00, 0x00,
            0x00, 0x02,
        ];
        let dataset = read_dataset_with_ts_uid(
            data,
            "1.2.840.10008.1.2\0",
            StandardDataDictionary,
            ReadOptions::default(),
        )
        .into_result()
        .unwrap();
        assert_eq!(
            dataset.element_by_name("Rows").unwrap().to_int::<u16>().unwrap(),
            512
        );
    }
}
