//! Interpretation of DICOM data sets as streams of tokens.
//!
//! [`read`] turns a byte buffer into a flat stream of [`DataToken`]s;
//! [`mem`] assembles that stream into a tree of nested data sets.
use dcmtlv_core::header::{DataElementHeader, Length};
use dcmtlv_core::value::{PrimitiveValue, ValueFlags};
use dcmtlv_core::Tag;
use std::fmt;

pub mod mem;
pub mod read;

pub use self::mem::{InMemDataSet, InMemElement, ReadOutcome};
pub use self::read::{DataSetReader, ReadOptions, ValueReadStrategy, Warning};

/// A token of a DICOM data set stream. This is part of the interpretation of a
/// data set as a stream of symbols, which may either represent data headers or
/// actual value data.
#[derive(Debug, Clone)]
pub enum DataToken {
    /// A data header of a primitive value.
    ElementHeader(DataElementHeader),
    /// The beginning of a sequence element.
    SequenceStart { tag: Tag, len: Length },
    /// The beginning of an encapsulated pixel data element.
    PixelSequenceStart(DataElementHeader),
    /// The ending delimiter of a sequence or pixel data element.
    SequenceEnd,
    /// The beginning of a new item in the sequence.
    ItemStart { len: Length },
    /// The ending delimiter of an item.
    ItemEnd,
    /// A primitive data element value,
    /// with the conditions observed while decoding it.
    PrimitiveValue(PrimitiveValue, ValueFlags),
    /// The basic offset table of an encapsulated pixel data element.
    OffsetTable(Vec<u32>),
    /// A pixel data fragment.
    ItemValue(Vec<u8>),
}

impl fmt::Display for DataToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataToken::PrimitiveValue(v, _) => write!(f, "PrimitiveValue({:?})", v.value_type()),
            DataToken::OffsetTable(table) => write!(f, "OffsetTable({} entries)", table.len()),
            DataToken::ItemValue(data) => write!(f, "ItemValue({} bytes)", data.len()),
            other => write!(f, "{:?}", other),
        }
    }
}

/// This implementation treats undefined lengths as equal.
impl PartialEq<Self> for DataToken {
    fn eq(&self, other: &Self) -> bool {
        use DataToken::*;
        match (self, other) {
            (ElementHeader(h1), ElementHeader(h2))
            | (PixelSequenceStart(h1), PixelSequenceStart(h2)) => {
                h1.tag == h2.tag && h1.vr == h2.vr && h1.len.inner_eq(h2.len)
            }
            (SequenceStart { tag: tag1, len: len1 }, SequenceStart { tag: tag2, len: len2 }) => {
                tag1 == tag2 && len1.inner_eq(*len2)
            }
            (ItemStart { len: len1 }, ItemStart { len: len2 }) => len1.inner_eq(*len2),
            (PrimitiveValue(v1, f1), PrimitiveValue(v2, f2)) => v1 == v2 && f1 == f2,
            (OffsetTable(t1), OffsetTable(t2)) => t1 == t2,
            (ItemValue(d1), ItemValue(d2)) => d1 == d2,
            (ItemEnd, ItemEnd) | (SequenceEnd, SequenceEnd) => true,
            _ => false,
        }
    }
}

/// The type of delimiter: sequence or item.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SeqTokenType {
    Sequence,
    Item,
}
