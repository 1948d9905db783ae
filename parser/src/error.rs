//! Crate-level error type for data set decoding.
//!
//! Every error names the absolute byte offset in the buffer
//! where decoding stopped.
use crate::dataset::DataToken;
use dcmtlv_core::{Length, Tag, VR};
use dcmtlv_encoding::decode::Error as HeaderError;
use snafu::{Backtrace, Snafu};

/// An error which stops the decoding of a data set.
///
/// Elements decoded before the error are kept
/// (see [`ReadOutcome`](crate::dataset::mem::ReadOutcome)).
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// A read would go past the end of the buffer.
    #[snafu(display("Unexpected end of stream at offset {}", offset))]
    UnexpectedEndOfStream { offset: usize, backtrace: Backtrace },

    /// An element header could not be decoded.
    #[snafu(display("Could not decode element header at offset {}", offset))]
    DecodeHeader {
        offset: usize,
        #[snafu(backtrace)]
        source: HeaderError,
    },

    /// The content of a sequence or item did not end
    /// where its declared length said it would.
    #[snafu(display(
        "Content of {} declared to end at offset {}, but decoding reached offset {}",
        tag,
        expected_end,
        offset
    ))]
    StructuralLengthMismatch {
        tag: Tag,
        offset: usize,
        expected_end: usize,
        backtrace: Backtrace,
    },

    /// An element of a VR which cannot have an undefined length had one.
    #[snafu(display("Undefined length is not supported for {} with VR {}", tag, vr))]
    UnsupportedUndefinedLength {
        tag: Tag,
        vr: VR,
        offset: usize,
        backtrace: Backtrace,
    },

    /// Element tags are not in ascending order.
    #[snafu(display(
        "Element {} at offset {} does not come after {}",
        tag,
        offset,
        previous
    ))]
    TagOrder {
        tag: Tag,
        previous: Tag,
        offset: usize,
        backtrace: Backtrace,
    },

    /// A fixed-width binary value whose length
    /// is not a multiple of the value width.
    #[snafu(display(
        "Length {} of {} is not a multiple of {} bytes as required by VR {}",
        len,
        tag,
        width,
        vr
    ))]
    InvalidValueLength {
        tag: Tag,
        vr: VR,
        len: u32,
        width: usize,
        offset: usize,
        backtrace: Backtrace,
    },

    /// A primitive value could not be interpreted.
    #[snafu(display("Could not interpret value of {} at offset {}", tag, offset))]
    InterpretValue {
        tag: Tag,
        offset: usize,
        #[snafu(backtrace)]
        source: crate::stateful::value::Error,
    },

    /// An item or delimitation item where it is not admitted.
    #[snafu(display("Unexpected {} at offset {}", tag, offset))]
    UnexpectedDelimiter {
        tag: Tag,
        offset: usize,
        backtrace: Backtrace,
    },

    /// An element header where an item was expected.
    #[snafu(display("Expected an item at offset {}, found element {}", offset, tag))]
    ExpectedItem {
        tag: Tag,
        offset: usize,
        backtrace: Backtrace,
    },

    /// A pixel data fragment with undefined length.
    #[snafu(display("Pixel data fragment at offset {} has undefined length", offset))]
    UndefinedItemLength { offset: usize, backtrace: Backtrace },

    /// The offset table item has a length which is not a multiple of 4.
    #[snafu(display("Invalid offset table length {} at offset {}", len, offset))]
    InvalidOffsetTableLength {
        len: Length,
        offset: usize,
        backtrace: Backtrace,
    },

    /// Sequences are nested deeper than allowed.
    #[snafu(display("Sequence nesting exceeds {} levels at offset {}", max, offset))]
    MaxDepthExceeded {
        max: usize,
        offset: usize,
        backtrace: Backtrace,
    },

    /// The transfer syntax cannot be decoded.
    #[snafu(display("Unsupported transfer syntax {}", uid))]
    UnsupportedTransferSyntax { uid: String, backtrace: Backtrace },

    /// The token stream does not form a valid data set.
    #[snafu(display("Unexpected token {}", token))]
    UnexpectedToken {
        token: DataToken,
        backtrace: Backtrace,
    },
}

impl Error {
    /// The absolute buffer offset where decoding stopped, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::UnexpectedEndOfStream { offset, .. }
            | Error::DecodeHeader { offset, .. }
            | Error::StructuralLengthMismatch { offset, .. }
            | Error::UnsupportedUndefinedLength { offset, .. }
            | Error::TagOrder { offset, .. }
            | Error::InvalidValueLength { offset, .. }
            | Error::InterpretValue { offset, .. }
            | Error::UnexpectedDelimiter { offset, .. }
            | Error::ExpectedItem { offset, .. }
            | Error::UndefinedItemLength { offset, .. }
            | Error::InvalidOffsetTableLength { offset, .. }
            | Error::MaxDepthExceeded { offset, .. } => Some(*offset),
            Error::UnsupportedTransferSyntax { .. } | Error::UnexpectedToken { .. } => None,
        }
    }
}

/// Type alias for a result from this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
