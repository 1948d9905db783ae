//! Declaration and implementation of a DICOM primitive value.
//!
//! See [`PrimitiveValue`](./enum.PrimitiveValue.html).

use super::partial::{DicomDate, DicomDateTime, DicomTime};
use super::C;
use crate::header::Tag;
use itertools::Itertools;
use num_traits::NumCast;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Triggered when a value is requested as a type it is not stored as.
#[derive(Debug, Clone, PartialEq)]
pub struct CastValueError {
    /// The value format requested
    pub requested: &'static str,
    /// The value's actual representation
    pub got: ValueType,
}

impl fmt::Display for CastValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bad value cast: requested {} but value is {:?}",
            self.requested, self.got
        )
    }
}

impl std::error::Error for CastValueError {}

/// The reason a value could not be converted.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum InvalidValueReadError {
    /// The value is empty or has no elements.
    Empty,
    /// A textual integer could not be parsed.
    ParseInteger(std::num::ParseIntError),
    /// A textual floating point number could not be parsed.
    ParseFloat(std::num::ParseFloatError),
    /// The number does not fit in the requested type.
    NarrowConvert(String),
}

impl fmt::Display for InvalidValueReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidValueReadError::Empty => f.write_str("value is empty"),
            InvalidValueReadError::ParseInteger(e) => write!(f, "invalid integer: {}", e),
            InvalidValueReadError::ParseFloat(e) => write!(f, "invalid number: {}", e),
            InvalidValueReadError::NarrowConvert(v) => {
                write!(f, "{} does not fit in the requested type", v)
            }
        }
    }
}

/// Triggered when a value conversion (parsing or narrowing) fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertValueError {
    /// The value format requested
    pub requested: &'static str,
    /// The value's original representation
    pub original: ValueType,
    /// The reason why the conversion was unsuccessful,
    /// or none if a conversion from the given original
    /// representation is not possible
    pub cause: Option<InvalidValueReadError>,
}

impl fmt::Display for ConvertValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not convert {:?} to a {}",
            self.original, self.requested
        )?;
        if let Some(cause) = &self.cause {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConvertValueError {}

/// An enum representing a primitive value from a DICOM element.
/// The result of decoding an element's data value
/// may be one of the enumerated types
/// depending on its content and value representation.
///
/// Multiple elements are contained in a [`smallvec`] vector,
/// conveniently aliased to the type [`C`].
///
/// # Example
///
/// ```
/// # use dcmtlv_core::PrimitiveValue;
/// # use smallvec::smallvec;
/// let value = PrimitiveValue::from("Smith^John");
/// assert_eq!(value, PrimitiveValue::Str("Smith^John".to_string()));
/// assert_eq!(value.multiplicity(), 1);
///
/// let value = PrimitiveValue::from(512_u16);
/// assert_eq!(value, PrimitiveValue::U16(smallvec![512]));
/// ```
///
/// [`smallvec`]: ../../smallvec/index.html
/// [`C`]: ./type.C.html
#[derive(Debug, PartialEq, Clone)]
pub enum PrimitiveValue {
    /// No data. Usually employed for zero-lengthed values.
    Empty,

    /// A sequence of strings.
    /// Used for AE, AS, PN, SH, CS, LO, UI, UC, IS and DS,
    /// and for DA, DT and TM when they are preserved as text.
    Strs(C<String>),

    /// A single string.
    /// Used for ST, LT, UT and UR, which are never multi-valued.
    Str(String),

    /// A sequence of attribute tags.
    /// Used specifically for AT.
    Tags(C<Tag>),

    /// A sequence of bytes.
    /// Used for OB, UN and native pixel data.
    U8(C<u8>),

    /// A sequence of signed 16-bit integers.
    /// Used for SS.
    I16(C<i16>),

    /// A sequence of unsigned 16-bit integers.
    /// Used for US and OW.
    U16(C<u16>),

    /// A sequence of signed 32-bit integers.
    /// Used for SL.
    I32(C<i32>),

    /// A sequence of unsigned 32-bit integers.
    /// Used for UL and OL.
    U32(C<u32>),

    /// A sequence of signed 64-bit integers.
    /// Used for SV.
    I64(C<i64>),

    /// A sequence of unsigned 64-bit integers.
    /// Used for UV and OV.
    U64(C<u64>),

    /// A sequence of 32-bit floating point numbers.
    /// Used for OF and FL.
    F32(C<f32>),

    /// A sequence of 64-bit floating point numbers.
    /// Used for OD and FD.
    F64(C<f64>),

    /// A sequence of dates with partial precision.
    /// Used for the DA representation.
    Date(C<DicomDate>),

    /// A sequence of date-time values with partial precision.
    /// Used for the DT representation.
    DateTime(C<DicomDateTime>),

    /// A sequence of time values with partial precision.
    /// Used for the TM representation.
    Time(C<DicomTime>),
}

/// A utility macro for implementing the conversion from a core type into a
/// DICOM primitive value with a single element.
macro_rules! impl_from_for_primitive {
    ($typ: ty, $variant: ident) => {
        impl From<$typ> for PrimitiveValue {
            fn from(value: $typ) -> Self {
                PrimitiveValue::$variant(C::from_elem(value, 1))
            }
        }
    };
}

impl_from_for_primitive!(u8, U8);
impl_from_for_primitive!(u16, U16);
impl_from_for_primitive!(i16, I16);
impl_from_for_primitive!(u32, U32);
impl_from_for_primitive!(i32, I32);
impl_from_for_primitive!(u64, U64);
impl_from_for_primitive!(i64, I64);
impl_from_for_primitive!(f32, F32);
impl_from_for_primitive!(f64, F64);
impl_from_for_primitive!(Tag, Tags);
impl_from_for_primitive!(DicomDate, Date);
impl_from_for_primitive!(DicomTime, Time);
impl_from_for_primitive!(DicomDateTime, DateTime);

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        PrimitiveValue::Str(value)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::Str(value.to_owned())
    }
}

impl From<Vec<u8>> for PrimitiveValue {
    fn from(value: Vec<u8>) -> Self {
        PrimitiveValue::U8(C::from_vec(value))
    }
}

impl From<&[u8]> for PrimitiveValue {
    fn from(value: &[u8]) -> Self {
        PrimitiveValue::U8(C::from_slice(value))
    }
}

fn seq_to_str<I>(iter: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    iter.into_iter().join("\\")
}

impl PrimitiveValue {
    /// Obtain the number of individual elements. This number may not
    /// match the DICOM value multiplicity in some value representations.
    pub fn multiplicity(&self) -> u32 {
        use PrimitiveValue::*;
        match self {
            Empty => 0,
            Str(_) => 1,
            Strs(c) => c.len() as u32,
            Tags(c) => c.len() as u32,
            U8(c) => c.len() as u32,
            I16(c) => c.len() as u32,
            U16(c) => c.len() as u32,
            I32(c) => c.len() as u32,
            U32(c) => c.len() as u32,
            I64(c) => c.len() as u32,
            U64(c) => c.len() as u32,
            F32(c) => c.len() as u32,
            F64(c) => c.len() as u32,
            Date(c) => c.len() as u32,
            DateTime(c) => c.len() as u32,
            Time(c) => c.len() as u32,
        }
    }

    /// Determine whether this value is empty.
    pub fn is_empty(&self) -> bool {
        self.multiplicity() == 0
    }

    /// Retrieve the specific type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            PrimitiveValue::Empty => ValueType::Empty,
            PrimitiveValue::Date(_) => ValueType::Date,
            PrimitiveValue::DateTime(_) => ValueType::DateTime,
            PrimitiveValue::F32(_) => ValueType::F32,
            PrimitiveValue::F64(_) => ValueType::F64,
            PrimitiveValue::I16(_) => ValueType::I16,
            PrimitiveValue::I32(_) => ValueType::I32,
            PrimitiveValue::I64(_) => ValueType::I64,
            PrimitiveValue::Str(_) => ValueType::Str,
            PrimitiveValue::Strs(_) => ValueType::Strs,
            PrimitiveValue::Tags(_) => ValueType::Tags,
            PrimitiveValue::Time(_) => ValueType::Time,
            PrimitiveValue::U16(_) => ValueType::U16,
            PrimitiveValue::U32(_) => ValueType::U32,
            PrimitiveValue::U64(_) => ValueType::U64,
            PrimitiveValue::U8(_) => ValueType::U8,
        }
    }

    /// Convert the primitive value into a string representation.
    ///
    /// String values already encoded with the `Str` and `Strs` variants
    /// are provided as is, with trailing whitespace removed.
    /// Multiple values are joined together with a backslash (`'\\'`).
    /// Date and time values are written back in DICOM format.
    ///
    /// ```
    /// # use dcmtlv_core::dicom_value;
    /// assert_eq!(
    ///     dicom_value!(Strs, ["ORIGINAL", "PRIMARY", "AXIAL"]).to_str(),
    ///     "ORIGINAL\\PRIMARY\\AXIAL",
    /// );
    /// ```
    pub fn to_str(&self) -> Cow<str> {
        match self {
            PrimitiveValue::Empty => Cow::from(""),
            PrimitiveValue::Str(value) => Cow::from(value.trim_end()),
            PrimitiveValue::Strs(values) if values.len() == 1 => Cow::from(values[0].trim_end()),
            PrimitiveValue::Strs(values) => {
                Cow::from(values.iter().map(|s| s.trim_end()).join("\\"))
            }
            prim => Cow::from(prim.to_string()),
        }
    }

    /// Convert the primitive value into a sequence of strings,
    /// one per individual value.
    pub fn to_multi_str(&self) -> Cow<[String]> {
        match self {
            PrimitiveValue::Strs(values) => Cow::from(&values[..]),
            PrimitiveValue::Empty => Cow::from(&[][..]),
            PrimitiveValue::Str(value) => Cow::Owned(vec![value.clone()]),
            PrimitiveValue::Tags(v) => Cow::Owned(v.iter().map(|t| t.to_string()).collect()),
            PrimitiveValue::U8(v) => Cow::Owned(v.iter().map(|x| x.to_string()).collect()),
            PrimitiveValue::I16(v) => Cow::Owned(v.iter().map(|x| x.to_string()).collect()),
            PrimitiveValue::U16(v) => Cow::Owned(v.iter().map(|x| x.to_string()).collect()),
            PrimitiveValue::I32(v) => Cow::Owned(v.iter().map(|x| x.to_string()).collect()),
            PrimitiveValue::U32(v) => Cow::Owned(v.iter().map(|x| x.to_string()).collect()),
            PrimitiveValue::I64(v) => Cow::Owned(v.iter().map(|x| x.to_string()).collect()),
            PrimitiveValue::U64(v) => Cow::Owned(v.iter().map(|x| x.to_string()).collect()),
            PrimitiveValue::F32(v) => Cow::Owned(v.iter().map(|x| x.to_string()).collect()),
            PrimitiveValue::F64(v) => Cow::Owned(v.iter().map(|x| x.to_string()).collect()),
            PrimitiveValue::Date(v) => Cow::Owned(v.iter().map(|x| x.to_string()).collect()),
            PrimitiveValue::Time(v) => Cow::Owned(v.iter().map(|x| x.to_string()).collect()),
            PrimitiveValue::DateTime(v) => Cow::Owned(v.iter().map(|x| x.to_string()).collect()),
        }
    }

    /// Retrieve this value as raw bytes.
    ///
    /// `U8` provides a straight, zero-copy slice of bytes.
    /// Textual values are provided in UTF-8,
    /// and other values are converted to text first.
    pub fn to_bytes(&self) -> Cow<[u8]> {
        match self {
            PrimitiveValue::Empty => Cow::from(&[][..]),
            PrimitiveValue::U8(values) => Cow::from(&values[..]),
            PrimitiveValue::Str(value) => Cow::from(value.as_bytes()),
            PrimitiveValue::Strs(values) if values.len() == 1 => Cow::from(values[0].as_bytes()),
            prim => match prim.to_str() {
                Cow::Borrowed(string) => Cow::Borrowed(string.as_bytes()),
                Cow::Owned(string) => Cow::Owned(string.into_bytes()),
            },
        }
    }

    /// Retrieve the first value as an attribute tag.
    pub fn to_tag(&self) -> Result<Tag, CastValueError> {
        match self {
            PrimitiveValue::Tags(c) if !c.is_empty() => Ok(c[0]),
            _ => Err(CastValueError {
                requested: "tag",
                got: self.value_type(),
            }),
        }
    }

    /// Retrieve a single integer of type `T` from this value.
    ///
    /// If the value is already represented as an integer,
    /// it is returned after a conversion to the target type.
    /// If the value is a string or sequence of strings,
    /// the first string is parsed to obtain an integer,
    /// after stripping surrounding whitespace.
    ///
    /// ```
    /// # use dcmtlv_core::value::PrimitiveValue;
    /// # use smallvec::smallvec;
    /// assert_eq!(PrimitiveValue::I32(smallvec![1, 2, 5]).to_int::<u32>(), Ok(1_u32));
    /// assert_eq!(PrimitiveValue::from(" 505 ").to_int::<i32>(), Ok(505));
    /// ```
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: NumCast,
        T: FromStr<Err = std::num::ParseIntError>,
    {
        let narrow = |v: String| ConvertValueError {
            requested: "integer",
            original: self.value_type(),
            cause: Some(InvalidValueReadError::NarrowConvert(v)),
        };
        let parse = |s: &str| {
            s.trim().parse().map_err(|err| ConvertValueError {
                requested: "integer",
                original: self.value_type(),
                cause: Some(InvalidValueReadError::ParseInteger(err)),
            })
        };
        match self {
            PrimitiveValue::Str(s) => parse(s),
            PrimitiveValue::Strs(s) if !s.is_empty() => parse(&s[0]),
            PrimitiveValue::U8(c) if !c.is_empty() => {
                T::from(c[0]).ok_or_else(|| narrow(c[0].to_string()))
            }
            PrimitiveValue::I16(c) if !c.is_empty() => {
                T::from(c[0]).ok_or_else(|| narrow(c[0].to_string()))
            }
            PrimitiveValue::U16(c) if !c.is_empty() => {
                T::from(c[0]).ok_or_else(|| narrow(c[0].to_string()))
            }
            PrimitiveValue::I32(c) if !c.is_empty() => {
                T::from(c[0]).ok_or_else(|| narrow(c[0].to_string()))
            }
            PrimitiveValue::U32(c) if !c.is_empty() => {
                T::from(c[0]).ok_or_else(|| narrow(c[0].to_string()))
            }
            PrimitiveValue::I64(c) if !c.is_empty() => {
                T::from(c[0]).ok_or_else(|| narrow(c[0].to_string()))
            }
            PrimitiveValue::U64(c) if !c.is_empty() => {
                T::from(c[0]).ok_or_else(|| narrow(c[0].to_string()))
            }
            _ => Err(ConvertValueError {
                requested: "integer",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve one double-precision floating point number from this value.
    ///
    /// Decimal strings (DS) are parsed after stripping surrounding whitespace.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        self.to_multi_float64()?
            .into_iter()
            .next()
            .ok_or_else(|| ConvertValueError {
                requested: "float64",
                original: self.value_type(),
                cause: Some(InvalidValueReadError::Empty),
            })
    }

    /// Retrieve all values as double-precision floating point numbers.
    ///
    /// ```
    /// # use dcmtlv_core::dicom_value;
    /// let value = dicom_value!(Strs, ["0.5", " 1.25", "-3 "]);
    /// assert_eq!(value.to_multi_float64(), Ok(vec![0.5, 1.25, -3.]));
    /// ```
    pub fn to_multi_float64(&self) -> Result<Vec<f64>, ConvertValueError> {
        let parse = |s: &str| {
            s.trim().parse::<f64>().map_err(|err| ConvertValueError {
                requested: "float64",
                original: self.value_type(),
                cause: Some(InvalidValueReadError::ParseFloat(err)),
            })
        };
        match self {
            PrimitiveValue::Str(s) => Ok(vec![parse(s)?]),
            PrimitiveValue::Strs(s) => s.iter().map(|s| parse(s)).collect(),
            PrimitiveValue::U8(c) => Ok(c.iter().map(|&v| v.into()).collect()),
            PrimitiveValue::I16(c) => Ok(c.iter().map(|&v| v.into()).collect()),
            PrimitiveValue::U16(c) => Ok(c.iter().map(|&v| v.into()).collect()),
            PrimitiveValue::I32(c) => Ok(c.iter().map(|&v| v.into()).collect()),
            PrimitiveValue::U32(c) => Ok(c.iter().map(|&v| v.into()).collect()),
            PrimitiveValue::I64(c) => Ok(c.iter().map(|&v| v as f64).collect()),
            PrimitiveValue::U64(c) => Ok(c.iter().map(|&v| v as f64).collect()),
            PrimitiveValue::F32(c) => Ok(c.iter().map(|&v| v.into()).collect()),
            PrimitiveValue::F64(c) => Ok(c.to_vec()),
            _ => Err(ConvertValueError {
                requested: "float64",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Get a single string value, if the value holds exactly that.
    pub fn string(&self) -> Result<&str, CastValueError> {
        match self {
            PrimitiveValue::Str(s) => Ok(s),
            PrimitiveValue::Strs(c) if c.len() == 1 => Ok(&c[0]),
            _ => Err(CastValueError {
                requested: "string",
                got: self.value_type(),
            }),
        }
    }

    /// Get the sequence of strings, if the value holds textual components.
    pub fn strings(&self) -> Result<&[String], CastValueError> {
        match self {
            PrimitiveValue::Str(s) => Ok(std::slice::from_ref(s)),
            PrimitiveValue::Strs(c) => Ok(c),
            _ => Err(CastValueError {
                requested: "strings",
                got: self.value_type(),
            }),
        }
    }
}

macro_rules! impl_primitive_getters {
    ($name_single: ident, $name_multi: ident, $variant: ident, $ret: ty) => {
        /// Get a single value of the requested type.
        /// If it contains multiple values,
        /// only the first one is returned.
        pub fn $name_single(&self) -> Result<$ret, CastValueError> {
            match self {
                PrimitiveValue::$variant(c) if !c.is_empty() => Ok(c[0].clone()),
                value => Err(CastValueError {
                    requested: stringify!($name_single),
                    got: value.value_type(),
                }),
            }
        }

        /// Get a sequence of values of the requested type without copying.
        pub fn $name_multi(&self) -> Result<&[$ret], CastValueError> {
            match self {
                PrimitiveValue::$variant(c) => Ok(&c),
                value => Err(CastValueError {
                    requested: stringify!($name_multi),
                    got: value.value_type(),
                }),
            }
        }
    };
}

impl PrimitiveValue {
    impl_primitive_getters!(date, dates, Date, DicomDate);
    impl_primitive_getters!(time, times, Time, DicomTime);
    impl_primitive_getters!(datetime, datetimes, DateTime, DicomDateTime);
    impl_primitive_getters!(uint8, uint8_slice, U8, u8);
    impl_primitive_getters!(uint16, uint16_slice, U16, u16);
    impl_primitive_getters!(int16, int16_slice, I16, i16);
    impl_primitive_getters!(uint32, uint32_slice, U32, u32);
    impl_primitive_getters!(int32, int32_slice, I32, i32);
    impl_primitive_getters!(int64, int64_slice, I64, i64);
    impl_primitive_getters!(uint64, uint64_slice, U64, u64);
    impl_primitive_getters!(float32, float32_slice, F32, f32);
    impl_primitive_getters!(float64, float64_slice, F64, f64);
}

/// The output of this method is equivalent to calling [`to_str`],
/// except that trailing whitespace is kept.
///
/// [`to_str`]: #method.to_str
impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PrimitiveValue::Empty => Ok(()),
            PrimitiveValue::Str(value) => f.write_str(value),
            PrimitiveValue::Strs(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::Date(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::Time(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::DateTime(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::U8(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::U16(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::U32(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::I16(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::I32(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::U64(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::I64(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::F32(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::F64(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::Tags(values) => f.write_str(&seq_to_str(values)),
        }
    }
}

/// An enum representing an abstraction of a DICOM element's data value type.
/// This is the equivalent of `PrimitiveValue` without the content,
/// plus the `Item` and `PixelSequence` entries.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValueType {
    /// No data. Used for any value of length 0.
    Empty,
    /// An item. Used for elements in a SQ, regardless of content.
    Item,
    /// Used for the values of encapsulated pixel data.
    PixelSequence,
    /// A sequence of strings.
    Strs,
    /// A single string.
    Str,
    /// A sequence of attribute tags.
    Tags,
    /// A sequence of bytes.
    U8,
    /// A sequence of signed 16-bit integers.
    I16,
    /// A sequence of unsigned 16-bit integers.
    U16,
    /// A sequence of signed 32-bit integers.
    I32,
    /// A sequence of unsigned 32-bit integers.
    U32,
    /// A sequence of signed 64-bit integers.
    I64,
    /// A sequence of unsigned 64-bit integers.
    U64,
    /// A sequence of 32-bit floating point numbers.
    F32,
    /// A sequence of 64-bit floating point numbers.
    F64,
    /// A sequence of dates.
    Date,
    /// A sequence of date-time values.
    DateTime,
    /// A sequence of time values.
    Time,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dicom_value;
    use smallvec::smallvec;

    #[test]
    fn primitive_value_to_str() {
        assert_eq!(PrimitiveValue::Empty.to_str(), "");
        assert_eq!(dicom_value!(Strs, ["Smith^John "]).to_str(), "Smith^John");
        assert_eq!(dicom_value!(U16, [1, 2, 3]).to_str(), "1\\2\\3");
        assert_eq!(
            PrimitiveValue::Tags(smallvec![Tag(0x0010, 0x0010), Tag(0x7FE0, 0x0010)]).to_str(),
            "(0010,0010)\\(7FE0,0010)"
        );
        assert_eq!(
            PrimitiveValue::from(DicomDate::from_ymd(1994, 10, 12).unwrap()).to_str(),
            "19941012"
        );
    }

    #[test]
    fn primitive_value_to_int() {
        assert_eq!(dicom_value!(Strs, ["42 ", "7"]).to_int::<u16>(), Ok(42));
        assert!(matches!(
            PrimitiveValue::from(300_u16).to_int::<u8>(),
            Err(ConvertValueError {
                cause: Some(InvalidValueReadError::NarrowConvert(_)),
                ..
            })
        ));
        assert!(matches!(
            dicom_value!(Strs, ["x"]).to_int::<i32>(),
            Err(ConvertValueError {
                cause: Some(InvalidValueReadError::ParseInteger(_)),
                ..
            })
        ));
        assert!(PrimitiveValue::Empty.to_int::<i32>().is_err());
    }

    #[test]
    fn primitive_value_to_float() {
        assert_eq!(
            dicom_value!(Strs, ["1.5", "2e1"]).to_multi_float64(),
            Ok(vec![1.5, 20.])
        );
        assert_eq!(dicom_value!(F32, [0.25]).to_float64(), Ok(0.25));
        assert!(PrimitiveValue::Empty.to_float64().is_err());
    }

    #[test]
    fn getters() {
        let value = dicom_value!(U16, [256, 0, 16]);
        assert_eq!(value.uint16(), Ok(256));
        assert_eq!(value.uint16_slice(), Ok(&[256, 0, 16][..]));
        assert!(value.float32().is_err());
        assert_eq!(value.multiplicity(), 3);
    }
}
