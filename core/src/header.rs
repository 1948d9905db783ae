//! This module contains the basic types for interpreting DICOM data elements:
//! the attribute tag, the value representation, the element length
//! and the element header, plus the owned data element type.

use crate::value::{CastValueError, ConvertValueError, PrimitiveValue, Value, ValueFlags};
use num_traits::NumCast;
use snafu::{Backtrace, Snafu};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::{from_utf8, FromStr};

/// Error type for issues constructing a sequence item header.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SequenceItemHeaderError {
    /// Unexpected header tag.
    /// Only Item (0xFFFE, 0xE000),
    /// Item Delimiter (0xFFFE, 0xE00D),
    /// or Sequence Delimiter (0xFFFE, 0xE0DD)
    /// are admitted.
    #[snafu(display("Unexpected tag {}", tag))]
    UnexpectedTag { tag: Tag, backtrace: Backtrace },
    /// Unexpected delimiter value length.
    /// Must be zero for item delimiters.
    #[snafu(display("Unexpected delimiter length {}", len))]
    UnexpectedDelimiterLength { len: Length, backtrace: Backtrace },
}

type Result<T, E = SequenceItemHeaderError> = std::result::Result<T, E>;

/// Trait for any DICOM entity (element or item) which may have a length.
pub trait HasLength {
    /// Retrieve the value data's length as specified by the data element or
    /// item, in bytes.
    ///
    /// According to the standard, the concrete value size may be undefined,
    /// which can be the case for sequence elements or encapsulated pixel data.
    fn length(&self) -> Length;

    /// Check whether the value is empty (0 length).
    fn is_empty(&self) -> bool {
        self.length() == Length(0)
    }
}

/// A trait for a data type containing a DICOM header.
#[allow(clippy::len_without_is_empty)]
pub trait Header: HasLength {
    /// Retrieve the element's tag as a `(group, element)` tuple.
    fn tag(&self) -> Tag;

    /// Check whether this is the header of an item.
    fn is_item(&self) -> bool {
        self.tag() == Tag::ITEM
    }

    /// Check whether this is the header of an item delimiter.
    fn is_item_delimiter(&self) -> bool {
        self.tag() == Tag::ITEM_DELIMITER
    }

    /// Check whether this is the header of a sequence delimiter.
    fn is_sequence_delimiter(&self) -> bool {
        self.tag() == Tag::SEQUENCE_DELIMITER
    }

    /// Check whether this is the header of an encapsulated pixel data.
    fn is_encapsulated_pixeldata(&self) -> bool {
        self.tag() == Tag::PIXEL_DATA && self.length().is_undefined()
    }
}

/// A data type that represents and owns a DICOM data element.
///
/// This type is capable of representing any decoded data element,
/// whether it be a primitive value,
/// a nested data set (where each item contains an object of type `I`),
/// or an encapsulated pixel data sequence.
///
/// Alongside the value,
/// the element keeps the [`ValueFlags`] raised while decoding it.
#[derive(Debug, PartialEq, Clone)]
pub struct DataElement<I> {
    header: DataElementHeader,
    value: Value<I>,
    flags: ValueFlags,
}

impl<I> HasLength for DataElement<I> {
    #[inline]
    fn length(&self) -> Length {
        self.header.length()
    }
}

impl<I> Header for DataElement<I> {
    #[inline]
    fn tag(&self) -> Tag {
        self.header.tag()
    }
}

impl<I> DataElement<I> {
    /// Create a data element from its header and value,
    /// with no decoding flags raised.
    pub fn new<T>(header: DataElementHeader, value: T) -> Self
    where
        T: Into<Value<I>>,
    {
        DataElement {
            header,
            value: value.into(),
            flags: ValueFlags::default(),
        }
    }

    /// Create a data element from its header, value and decoding flags.
    pub fn new_with_flags<T>(header: DataElementHeader, value: T, flags: ValueFlags) -> Self
    where
        T: Into<Value<I>>,
    {
        DataElement {
            header,
            value: value.into(),
            flags,
        }
    }

    /// Create an empty data element.
    pub fn empty(tag: Tag, vr: VR) -> Self {
        DataElement {
            header: DataElementHeader::new(tag, vr, Length(0)),
            value: PrimitiveValue::Empty.into(),
            flags: ValueFlags::default(),
        }
    }

    /// Retrieve the element header.
    pub fn header(&self) -> &DataElementHeader {
        &self.header
    }

    /// Retrieve the value representation, which may be unknown.
    pub fn vr(&self) -> VR {
        self.header.vr()
    }

    /// Retrieve the data value.
    pub fn value(&self) -> &Value<I> {
        &self.value
    }

    /// Retrieve the conditions raised while decoding this element.
    pub fn flags(&self) -> ValueFlags {
        self.flags
    }

    /// Move the data value out of the element, discarding the rest.
    pub fn into_value(self) -> Value<I> {
        self.value
    }

    /// Retrieve the element's value as a single clean string,
    /// with no trailing whitespace.
    ///
    /// Returns an error if the value is not primitive.
    pub fn to_str(&self) -> Result<Cow<str>, CastValueError> {
        self.value.to_str()
    }

    /// Convert the full value of the data element into a sequence of strings.
    ///
    /// Returns an error if the value is not primitive.
    pub fn to_multi_str(&self) -> Result<Cow<[String]>, CastValueError> {
        self.value.to_multi_str()
    }

    /// Retrieve the raw bytes of a primitive value.
    ///
    /// Textual values are provided in UTF-8.
    pub fn to_bytes(&self) -> Result<Cow<[u8]>, CastValueError> {
        self.value.to_bytes()
    }

    /// Retrieve and convert the value of the data element into an integer.
    ///
    /// If the value is a primitive,
    /// it will be converted into an integer
    /// as described in [`PrimitiveValue::to_int`].
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: NumCast,
        T: FromStr<Err = std::num::ParseIntError>,
    {
        self.value.to_int()
    }

    /// Retrieve and convert the value of the data element
    /// into a double-precision floating point number.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        self.value.to_float64()
    }

    /// Retrieve and convert all values of the data element
    /// into double-precision floating point numbers.
    pub fn to_multi_float64(&self) -> Result<Vec<f64>, ConvertValueError> {
        self.value.to_multi_float64()
    }
}

/// A data structure for a data element header, containing
/// a tag, value representation and specified length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DataElementHeader {
    /// DICOM tag
    pub tag: Tag,
    /// Value Representation
    pub vr: VR,
    /// Element length
    pub len: Length,
}

impl HasLength for DataElementHeader {
    #[inline]
    fn length(&self) -> Length {
        self.len
    }
}

impl Header for DataElementHeader {
    #[inline]
    fn tag(&self) -> Tag {
        self.tag
    }
}

impl DataElementHeader {
    /// Create a new data element header with the given properties.
    /// This is just a trivial constructor.
    #[inline]
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }

    /// Retrieve the element's value representation, which can be unknown.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Check whether the header suggests the value to be a sequence value:
    /// if the value representation is SQ or the length is undefined.
    #[inline]
    pub fn is_non_primitive(&self) -> bool {
        self.vr == VR::SQ || self.length().is_undefined()
    }
}

impl From<SequenceItemHeader> for DataElementHeader {
    fn from(value: SequenceItemHeader) -> DataElementHeader {
        DataElementHeader {
            tag: value.tag(),
            vr: VR::UN,
            len: value.length(),
        }
    }
}

/// Data type for describing a sequence item data element.
/// If the element represents an item, it will also contain
/// the specified length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SequenceItemHeader {
    /// The cursor contains an item.
    Item {
        /// the length of the item in bytes (can be 0xFFFFFFFF if undefined)
        len: Length,
    },
    /// The cursor read an item delimiter.
    /// The element ends here and should not be read any further.
    ItemDelimiter,
    /// The cursor read a sequence delimiter.
    /// The element ends here and should not be read any further.
    SequenceDelimiter,
}

impl SequenceItemHeader {
    /// Create a sequence item header using the element's raw properties.
    /// An error can be raised if the given properties do not relate to a
    /// sequence item, a sequence item delimiter or a sequence delimiter.
    pub fn new<T: Into<Tag>>(tag: T, len: Length) -> Result<SequenceItemHeader> {
        match tag.into() {
            Tag::ITEM => Ok(SequenceItemHeader::Item { len }),
            Tag::ITEM_DELIMITER => {
                // delimiters should not have a positive length
                if len != Length(0) {
                    UnexpectedDelimiterLengthSnafu { len }.fail()
                } else {
                    Ok(SequenceItemHeader::ItemDelimiter)
                }
            }
            Tag::SEQUENCE_DELIMITER => Ok(SequenceItemHeader::SequenceDelimiter),
            tag => UnexpectedTagSnafu { tag }.fail(),
        }
    }
}

impl HasLength for SequenceItemHeader {
    #[inline]
    fn length(&self) -> Length {
        match *self {
            SequenceItemHeader::Item { len } => len,
            SequenceItemHeader::ItemDelimiter | SequenceItemHeader::SequenceDelimiter => Length(0),
        }
    }
}

impl Header for SequenceItemHeader {
    #[inline]
    fn tag(&self) -> Tag {
        match *self {
            SequenceItemHeader::Item { .. } => Tag::ITEM,
            SequenceItemHeader::ItemDelimiter => Tag::ITEM_DELIMITER,
            SequenceItemHeader::SequenceDelimiter => Tag::SEQUENCE_DELIMITER,
        }
    }
}

/// An enum type for a DICOM value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

/// How the value of an element is shaped,
/// as implied by its value representation.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum VrCategory {
    /// Text split into multiple values on the backslash delimiter.
    MultiText,
    /// Text holding exactly one value, where a backslash is ordinary content.
    SingleText,
    /// Date, time or date-time text, validated against its grammar.
    Temporal,
    /// Array of fixed-width binary numbers.
    Numeric,
    /// Array of attribute tags.
    Tag,
    /// Sequence of items.
    Sequence,
    /// Opaque bytes.
    Binary,
}

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
        }
    }

    /// Retrieve a copy of this VR's byte representation.
    /// The function returns two alphabetic characters in upper case.
    pub fn to_bytes(self) -> [u8; 2] {
        let bytes = self.to_string().as_bytes();
        [bytes[0], bytes[1]]
    }

    /// Whether an explicit VR header with this VR
    /// reserves 2 bytes and then encodes the length in 4 bytes.
    ///
    /// All other value representations use a 2-byte length field.
    pub fn has_long_length(self) -> bool {
        use VR::*;
        matches!(
            self,
            OB | OD | OF | OL | OV | OW | SQ | SV | UC | UN | UR | UT | UV
        )
    }

    /// The byte used to pad odd-length values of this VR to an even length.
    pub fn padding(self) -> u8 {
        use VR::*;
        match self {
            UI | OB | UN => 0,
            _ => b' ',
        }
    }

    /// The width in bytes of each value of a fixed-width binary VR,
    /// or `None` for text, sequence and byte-oriented VRs.
    pub fn value_width(self) -> Option<usize> {
        use VR::*;
        match self {
            SS | US | OW => Some(2),
            SL | UL | FL | OF | OL | AT => Some(4),
            SV | UV | FD | OD | OV => Some(8),
            _ => None,
        }
    }

    /// Whether text of this VR is decoded with the active
    /// specific character set, instead of the default repertoire.
    pub fn is_charset_sensitive(self) -> bool {
        use VR::*;
        matches!(self, SH | LO | ST | LT | UC | UT | PN)
    }

    /// Obtain the general shape of values with this VR.
    pub fn category(self) -> VrCategory {
        use VR::*;
        match self {
            AE | AS | CS | DS | IS | LO | PN | SH | UC | UI => VrCategory::MultiText,
            LT | ST | UR | UT => VrCategory::SingleText,
            DA | DT | TM => VrCategory::Temporal,
            FL | FD | SL | SS | SV | UL | US | UV | OD | OF | OL | OV | OW => VrCategory::Numeric,
            AT => VrCategory::Tag,
            SQ => VrCategory::Sequence,
            OB | UN => VrCategory::Binary,
        }
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> std::result::Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OL" => Ok(OL),
            "OV" => Ok(OV),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "SV" => Ok(SV),
            "TM" => Ok(TM),
            "UC" => Ok(UC),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "UR" => Ok(UR),
            "US" => Ok(US),
            "UT" => Ok(UT),
            "UV" => Ok(UV),
            _ => Err("no such value representation"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// Tags are totally ordered by group, then by element,
/// which is the order in which elements must appear in a data set.
/// Both `(u16, u16)` and `[u16; 2]` can be
/// efficiently converted to this type as well.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Item (FFFE,E000)
    pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
    /// Item Delimitation Item (FFFE,E00D)
    pub const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
    /// Sequence Delimitation Item (FFFE,E0DD)
    pub const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);
    /// Pixel Data (7FE0,0010)
    pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
    /// Specific Character Set (0008,0005)
    pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);

    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Whether this tag belongs to the structural delimitation group
    /// (Item, Item Delimitation Item, Sequence Delimitation Item).
    #[inline]
    pub fn is_delimitation(self) -> bool {
        self.0 == 0xFFFE
    }

    /// Whether this is a group length tag `(gggg,0000)`.
    #[inline]
    pub fn is_group_length(self) -> bool {
        self.1 == 0x0000
    }

    /// Whether the tag lives in a private (odd-numbered) group.
    ///
    /// Groups 0001, 0003, 0005, 0007 and FFFF are not private.
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 % 2 == 1 && self.0 > 0x0008 && self.0 != 0xFFFF
    }

    /// Whether this is a private creator element `(gggg,0010-00FF)`.
    #[inline]
    pub fn is_private_creator(self) -> bool {
        self.is_private() && (0x0010..=0x00FF).contains(&self.1)
    }

    /// For a private data element `(gggg,xxee)`,
    /// the tag of the private creator element `(gggg,00xx)`
    /// which reserves its block.
    pub fn private_creator(self) -> Option<Tag> {
        if !self.is_private() || self.1 < 0x1000 {
            return None;
        }
        Some(Tag(self.0, self.1 >> 8))
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<[u16; 2]> for Tag {
    fn eq(&self, other: &[u16; 2]) -> bool {
        self.0 == other[0] && self.1 == other[1]
    }
}

/// Error returned when parsing a tag from text.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ParseTagError {
    /// expected a tag of the form `(gggg,eeee)` or `ggggeeee`
    Shape { backtrace: Backtrace },
    /// tag component is not a 4-digit hexadecimal number
    Component {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
}

impl FromStr for Tag {
    type Err = ParseTagError;

    /// Parse a tag from `(gggg,eeee)`, `gggg,eeee` or `ggggeeee`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use snafu::ResultExt;

        let s = s
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(s);
        let (group, element) = match s.split_once(',') {
            Some(parts) => parts,
            None if s.len() == 8 && s.is_char_boundary(4) => s.split_at(4),
            None => return ShapeSnafu.fail(),
        };
        snafu::ensure!(group.len() == 4 && element.len() == 4, ShapeSnafu);
        let group = u16::from_str_radix(group, 16).context(ComponentSnafu)?;
        let element = u16::from_str_radix(element, 16).context(ComponentSnafu)?;
        Ok(Tag(group, element))
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

/// A type for representing data set content length, in bytes.
/// An internal value of `0xFFFF_FFFF` represents an undefined
/// (unspecified) length, which would have to be determined
/// with a traversal based on the content's encoding.
///
/// This also means that comparisons do not function
/// the same way as primitive number types:
///
/// Two length of undefined length are not equal.
///
/// ```
/// # use dcmtlv_core::Length;
/// assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
/// ```
///
/// Comparing between at least one undefined length is always `false`.
///
/// ```
/// # use dcmtlv_core::Length;
/// assert!(Length::defined(16) < Length::defined(64));
/// assert!(!(Length::UNDEFINED < Length::defined(64)));
/// assert!(!(Length::UNDEFINED > Length::defined(64)));
/// ```
#[derive(Clone, Copy)]
pub struct Length(pub u32);

const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(UNDEFINED_LEN);

    /// Create a new length value from its internal representation.
    /// This is equivalent to `Length(len)`.
    #[inline]
    pub fn new(len: u32) -> Self {
        Length(len)
    }

    /// Create a new length value with the given number of bytes.
    ///
    /// # Panic
    ///
    /// This function will panic if `len` represents an undefined length.
    #[inline]
    pub fn defined(len: u32) -> Self {
        assert_ne!(len, UNDEFINED_LEN);
        Length(len)
    }

    /// Check whether this length is undefined (unknown).
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == UNDEFINED_LEN
    }

    /// Check whether this length is well defined (not undefined).
    #[inline]
    pub fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    /// Fetch the concrete length value, if available.
    /// Returns `None` if it represents an undefined length.
    #[inline]
    pub fn get(self) -> Option<u32> {
        match self.0 {
            UNDEFINED_LEN => None,
            v => Some(v),
        }
    }

    /// Check whether the length is equally specified as another length.
    /// Unlike the implemented `PartialEq`, two undefined lengths are
    /// considered equivalent by this method.
    #[inline]
    pub fn inner_eq(self, other: Length) -> bool {
        self.0 == other.0
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(o: u32) -> Self {
        Length(o)
    }
}

impl PartialEq<Length> for Length {
    fn eq(&self, rhs: &Length) -> bool {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => false,
            (l1, l2) => l1 == l2,
        }
    }
}

impl PartialOrd<Length> for Length {
    fn partial_cmp(&self, rhs: &Length) -> Option<Ordering> {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => None,
            (l1, l2) => Some(l1.cmp(&l2)),
        }
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("Length(Undefined)"),
            l => f.debug_tuple("Length").field(&l).finish(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("U/L"),
            l => write!(f, "{}", &l),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dicom_value;

    #[test]
    fn tag_from_u16_pair() {
        let t = Tag::from((0x0010u16, 0x0020u16));
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tags_are_ordered_by_group_then_element() {
        assert!(Tag(0x0008, 0xFFFF) < Tag(0x0010, 0x0000));
        assert!(Tag(0x0010, 0x0010) < Tag(0x0010, 0x0020));
        assert_eq!(format!("{}", Tag(0x7FE0, 0x0010)), "(7FE0,0010)");
    }

    #[test]
    fn private_tags() {
        assert!(Tag(0x0009, 0x0010).is_private_creator());
        assert!(!Tag(0x0008, 0x0010).is_private_creator());
        assert!(!Tag(0x0009, 0x1010).is_private_creator());
        assert_eq!(Tag(0x0029, 0x1103).private_creator(), Some(Tag(0x0029, 0x0011)));
        assert_eq!(Tag(0x0029, 0x0010).private_creator(), None);
        assert_eq!(Tag(0x0010, 0x1010).private_creator(), None);
        assert!(!Tag(0xFFFF, 0x1000).is_private());
    }

    #[test]
    fn parse_tag_text() {
        assert_eq!("(7FE0,0010)".parse::<Tag>().unwrap(), Tag::PIXEL_DATA);
        assert_eq!("0010,0010".parse::<Tag>().unwrap(), Tag(0x0010, 0x0010));
        assert_eq!("00280010".parse::<Tag>().unwrap(), Tag(0x0028, 0x0010));
        assert!("PatientName".parse::<Tag>().is_err());
        assert!("(0010,10)".parse::<Tag>().is_err());
        assert!("GGGG,0010".parse::<Tag>().is_err());
    }

    #[test]
    fn vr_length_forms() {
        for vr in [VR::OB, VR::OW, VR::SQ, VR::UN, VR::UT, VR::UC, VR::UR, VR::SV, VR::OV] {
            assert!(vr.has_long_length(), "{} should have a 4-byte length", vr);
        }
        for vr in [VR::AE, VR::CS, VR::DS, VR::PN, VR::UI, VR::US, VR::FD, VR::LT] {
            assert!(!vr.has_long_length(), "{} should have a 2-byte length", vr);
        }
        assert_eq!(VR::UI.padding(), 0);
        assert_eq!(VR::PN.padding(), b' ');
        assert_eq!(VR::from_binary(*b"PN"), Some(VR::PN));
        assert_eq!(VR::from_binary(*b"pn"), None);
        assert_eq!(VR::from_binary([0, 0]), None);
    }

    #[test]
    fn length_semantics() {
        assert!(Length::UNDEFINED.is_undefined());
        assert_eq!(Length(0xFFFF_FFFF).get(), None);
        assert!(Length::UNDEFINED.inner_eq(Length::UNDEFINED));
        assert_eq!(Length(12).get(), Some(12));
    }

    #[test]
    fn sequence_item_header_from_tag() {
        assert_eq!(
            SequenceItemHeader::new(Tag::ITEM, Length(8)).unwrap(),
            SequenceItemHeader::Item { len: Length(8) },
        );
        assert!(matches!(
            SequenceItemHeader::new(Tag::ITEM_DELIMITER, Length(4)),
            Err(SequenceItemHeaderError::UnexpectedDelimiterLength { .. })
        ));
        assert!(matches!(
            SequenceItemHeader::new(Tag(0x0008, 0x0016), Length(4)),
            Err(SequenceItemHeaderError::UnexpectedTag { .. })
        ));
    }

    #[test]
    fn create_data_element_from_primitive() {
        let element: DataElement<()> = DataElement::new(
            DataElementHeader::new(Tag(0x0028, 0x3002), VR::US, Length(6)),
            dicom_value!(U16, [256, 0, 16]),
        );
        assert_eq!(element.to_str().unwrap(), "256\\0\\16");
        assert_eq!(element.to_int::<u16>().unwrap(), 256);
        assert!(element.flags().is_clean());
    }
}
