//! This module includes a high level abstraction over a DICOM data element's value.
//!
//! [`Value`] is a closed tagged union over the shapes a decoded value can take:
//! a primitive value, a sequence of nested data sets,
//! or an encapsulated pixel data fragment sequence.

use crate::header::{HasLength, Length, Tag};
use num_traits::NumCast;
use smallvec::SmallVec;
use std::{borrow::Cow, str::FromStr};

pub mod deserialize;
pub mod partial;
mod primitive;

pub use self::deserialize::Error as DeserializeError;
pub use self::partial::{DicomDate, DicomDateTime, DicomTime};
pub use self::primitive::{
    CastValueError, ConvertValueError, InvalidValueReadError, PrimitiveValue, ValueType,
};

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// Type alias for the in-memory pixel data fragment data.
pub type InMemFragment = Vec<u8>;

/// Non-fatal conditions observed while decoding a single value.
///
/// A value with any flag raised is still usable,
/// but may not faithfully represent what the producer intended.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct ValueFlags {
    /// The text could not be decoded with the active character set,
    /// and was decoded with the default repertoire instead.
    pub charset_fallback: bool,
    /// A date, time or date-time value did not follow its grammar
    /// and was kept as raw text.
    pub malformed_temporal: bool,
    /// The value representation was not recognized
    /// and the value was kept as opaque bytes.
    pub unknown_vr: bool,
}

impl ValueFlags {
    /// Whether no condition was raised.
    pub fn is_clean(&self) -> bool {
        *self == ValueFlags::default()
    }
}

/// Representation of a full DICOM value, which may be either primitive or
/// another DICOM object.
///
/// `I` is the complex type for nested data set items.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<I> {
    /// Primitive value.
    Primitive(PrimitiveValue),
    /// A complex sequence of items.
    Sequence(DataSetSequence<I>),
    /// A sequence of encapsulated pixel data fragments.
    PixelSequence(PixelFragmentSequence),
}

impl<I> Value<I> {
    /// Obtain the number of individual values.
    /// In a sequence value, this is the number of items in the sequence.
    /// In an encapsulated pixel data sequence, the output is always 1.
    pub fn multiplicity(&self) -> u32 {
        match self {
            Value::Primitive(v) => v.multiplicity(),
            Value::Sequence(v) => v.multiplicity(),
            Value::PixelSequence(..) => 1,
        }
    }

    /// Gets a reference to the primitive value.
    pub fn primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// Gets a reference to the items of a sequence.
    ///
    /// Returns `None` if the value is not a data set sequence.
    pub fn items(&self) -> Option<&[I]> {
        match self {
            Value::Sequence(v) => Some(v.items()),
            _ => None,
        }
    }

    /// Gets a reference to the fragments of an encapsulated pixel data sequence.
    ///
    /// Returns `None` if the value is not a pixel data fragment sequence.
    pub fn fragments(&self) -> Option<&[InMemFragment]> {
        match self {
            Value::PixelSequence(v) => Some(v.fragments()),
            _ => None,
        }
    }

    /// Gets a reference to the basic offset table of
    /// an encapsulated pixel data sequence.
    pub fn offset_table(&self) -> Option<&[u32]> {
        match self {
            Value::PixelSequence(v) => Some(v.offset_table()),
            _ => None,
        }
    }

    /// Retrieves the primitive value, discarding the rest.
    pub fn into_primitive(self) -> Option<PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// Retrieves the items of a sequence, discarding the rest.
    pub fn into_items(self) -> Option<C<I>> {
        match self {
            Value::Sequence(v) => Some(v.into_items()),
            _ => None,
        }
    }

    fn primitive_or_cast_error(&self, requested: &'static str) -> Result<&PrimitiveValue, CastValueError> {
        match self {
            Value::Primitive(v) => Ok(v),
            Value::Sequence(..) => Err(CastValueError {
                requested,
                got: ValueType::Item,
            }),
            Value::PixelSequence(..) => Err(CastValueError {
                requested,
                got: ValueType::PixelSequence,
            }),
        }
    }

    fn primitive_or_convert_error(
        &self,
        requested: &'static str,
    ) -> Result<&PrimitiveValue, ConvertValueError> {
        self.primitive_or_cast_error(requested)
            .map_err(|e| ConvertValueError {
                requested,
                original: e.got,
                cause: None,
            })
    }

    /// Convert the primitive value into a clean string representation.
    ///
    /// Returns an error if the value is not primitive.
    pub fn to_str(&self) -> Result<Cow<'_, str>, CastValueError> {
        Ok(self.primitive_or_cast_error("string")?.to_str())
    }

    /// Convert the primitive value into a sequence of strings.
    ///
    /// Returns an error if the value is not primitive.
    pub fn to_multi_str(&self) -> Result<Cow<'_, [String]>, CastValueError> {
        Ok(self.primitive_or_cast_error("strings")?.to_multi_str())
    }

    /// Retrieve the primitive value as raw bytes.
    ///
    /// Returns an error if the value is not primitive.
    pub fn to_bytes(&self) -> Result<Cow<'_, [u8]>, CastValueError> {
        Ok(self.primitive_or_cast_error("bytes")?.to_bytes())
    }

    /// Retrieve and convert the primitive value into an integer.
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: NumCast,
        T: FromStr<Err = std::num::ParseIntError>,
    {
        self.primitive_or_convert_error("integer")?.to_int()
    }

    /// Retrieve and convert the primitive value into
    /// a double-precision floating point number.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        self.primitive_or_convert_error("float64")?.to_float64()
    }

    /// Retrieve and convert all primitive values into
    /// double-precision floating point numbers.
    pub fn to_multi_float64(&self) -> Result<Vec<f64>, ConvertValueError> {
        self.primitive_or_convert_error("float64")?
            .to_multi_float64()
    }

    /// Retrieve the first attribute tag of the primitive value.
    pub fn to_tag(&self) -> Result<Tag, CastValueError> {
        self.primitive_or_cast_error("tag")?.to_tag()
    }
}

impl<I> From<PrimitiveValue> for Value<I> {
    fn from(v: PrimitiveValue) -> Self {
        Value::Primitive(v)
    }
}

impl<I> From<DataSetSequence<I>> for Value<I> {
    #[inline]
    fn from(value: DataSetSequence<I>) -> Self {
        Value::Sequence(value)
    }
}

impl<I> From<PixelFragmentSequence> for Value<I> {
    #[inline]
    fn from(value: PixelFragmentSequence) -> Self {
        Value::PixelSequence(value)
    }
}

/// A sequence of complex data set items of type `I`.
#[derive(Debug, Clone)]
pub struct DataSetSequence<I> {
    /// The item sequence.
    items: C<I>,
    /// The sequence length in bytes, as declared in the stream.
    ///
    /// The value may be [`UNDEFINED`](Length::UNDEFINED)
    /// if the length is implicitly defined.
    length: Length,
}

impl<I> DataSetSequence<I> {
    /// Construct a DICOM data sequence
    /// using a sequence of items and a length.
    ///
    /// **Note:** This function does not validate the `length`
    /// against the items.
    #[inline]
    pub fn new(items: impl Into<C<I>>, length: Length) -> Self {
        DataSetSequence {
            items: items.into(),
            length,
        }
    }

    /// Gets a reference to the items of a sequence.
    #[inline]
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Obtain the number of items in the sequence.
    #[inline]
    pub fn multiplicity(&self) -> u32 {
        self.items.len() as u32
    }

    /// Retrieve the sequence of items,
    /// discarding the recorded length information.
    #[inline]
    pub fn into_items(self) -> C<I> {
        self.items
    }
}

impl<I> HasLength for DataSetSequence<I> {
    #[inline]
    fn length(&self) -> Length {
        self.length
    }
}

impl<I> PartialEq<DataSetSequence<I>> for DataSetSequence<I>
where
    I: PartialEq,
{
    /// This implementation only checks for item equality,
    /// disregarding the declared byte length,
    /// so that defined and undefined length encodings compare equal.
    #[inline]
    fn eq(&self, other: &DataSetSequence<I>) -> bool {
        self.items() == other.items()
    }
}

/// A sequence of pixel data fragments.
///
/// Each fragment is an even-lengthed sequence of bytes
/// representing the encoded pixel data.
/// The first item of the sequence in the stream
/// is the basic offset table, which is kept separately.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelFragmentSequence {
    /// The value contents of the basic offset table.
    offset_table: C<u32>,
    /// The sequence of pixel data fragments.
    fragments: C<InMemFragment>,
}

impl PixelFragmentSequence {
    /// Construct a DICOM pixel sequence sequence value
    /// from a basic offset table and a list of fragments.
    ///
    /// **Note:** This function does not validate the offset table
    /// against the given fragments.
    #[inline]
    pub fn new(offset_table: impl Into<C<u32>>, fragments: impl Into<C<InMemFragment>>) -> Self {
        PixelFragmentSequence {
            offset_table: offset_table.into(),
            fragments: fragments.into(),
        }
    }

    /// Gets a reference to the pixel data fragments.
    #[inline]
    pub fn fragments(&self) -> &[InMemFragment] {
        &self.fragments
    }

    /// Gets a reference to the basic offset table.
    #[inline]
    pub fn offset_table(&self) -> &[u32] {
        &self.offset_table
    }

    /// Retrieve the offset table and fragments.
    #[inline]
    pub fn into_parts(self) -> (C<u32>, C<InMemFragment>) {
        (self.offset_table, self.fragments)
    }
}

impl HasLength for PixelFragmentSequence {
    /// Encapsulated pixel data is always of undefined length.
    #[inline]
    fn length(&self) -> Length {
        Length::UNDEFINED
    }
}

/// Construct a [`PrimitiveValue`] of the given variant
/// from a list of elements or a single element.
///
/// ```
/// # use dcmtlv_core::{dicom_value, PrimitiveValue};
/// let value = dicom_value!(Strs, ["DERIVED", "PRIMARY"]);
/// assert_eq!(value.multiplicity(), 2);
/// let value = dicom_value!(U16, 512);
/// assert_eq!(value, PrimitiveValue::from(512_u16));
/// ```
#[macro_export]
macro_rules! dicom_value {
    // Empty value
    () => {
        $crate::value::PrimitiveValue::Empty
    };
    // Multiple strings
    (Strs, [ $($elem: expr),+ $(,)? ]) => {
        $crate::value::PrimitiveValue::Strs($crate::smallvec::smallvec![$($elem.to_owned(),)*])
    };
    ($typ: ident, [ $($elem: expr),+ $(,)? ]) => {
        $crate::value::PrimitiveValue::$typ($crate::smallvec::smallvec![$($elem,)*])
    };
    (Str, $elem: expr) => {
        $crate::value::PrimitiveValue::Str(String::from($elem))
    };
    ($typ: ident, $elem: expr) => {
        $crate::value::PrimitiveValue::$typ($crate::value::C::from_elem($elem, 1))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dicom_value;
    use smallvec::smallvec;

    #[test]
    fn sequence_equality_ignores_length() {
        let a: DataSetSequence<u8> = DataSetSequence::new(smallvec![1, 2], Length(24));
        let b: DataSetSequence<u8> = DataSetSequence::new(smallvec![1, 2], Length::UNDEFINED);
        assert_eq!(a, b);
    }

    #[test]
    fn value_casts() {
        let value: Value<()> = dicom_value!(Strs, ["1.5", "2"]).into();
        assert_eq!(value.to_multi_float64(), Ok(vec![1.5, 2.]));
        assert_eq!(value.multiplicity(), 2);

        let seq: Value<()> = DataSetSequence::new(smallvec![(), ()], Length::UNDEFINED).into();
        assert_eq!(seq.multiplicity(), 2);
        assert_eq!(
            seq.to_str(),
            Err(CastValueError {
                requested: "string",
                got: ValueType::Item,
            })
        );

        let pixels: Value<()> =
            PixelFragmentSequence::new(smallvec![0], smallvec![vec![0xFF, 0xD8]]).into();
        assert_eq!(pixels.offset_table(), Some(&[0][..]));
        assert_eq!(pixels.fragments().map(|f| f.len()), Some(1));
    }

    #[test]
    fn flags_default_to_clean() {
        assert!(ValueFlags::default().is_clean());
        let flags = ValueFlags {
            malformed_temporal: true,
            ..Default::default()
        };
        assert!(!flags.is_clean());
    }
}
