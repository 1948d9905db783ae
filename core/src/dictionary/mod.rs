//! This module contains the concept of a DICOM data dictionary.
//!
//! A data dictionary (the tag registry) maps a DICOM tag
//! to an entry describing the attribute:
//! its keyword, its typical value representation,
//! its value multiplicity and whether it is retired.
//! Dictionaries are passed explicitly to the decoding routines
//! which need them.
//!
//! The standard dictionary lives in the `dcmtlv-dictionary-std` crate.
//! [`stub::StubDataDictionary`] knows no attributes at all,
//! and [`private::PrivateDataDictionary`]
//! holds creator-keyed registrations for private attributes.

mod data_element;
pub mod private;
pub mod stub;

pub use self::data_element::{
    ParseVmError, TagRange, TagRangeParseError, ValueMultiplicity, VirtualVr,
};
pub use self::private::PrivateDataDictionary;
pub use self::stub::StubDataDictionary;

use crate::header::Tag;

/// Type trait for a dictionary of DICOM attributes.
///
/// The main purpose of an attribute dictionary is
/// to retrieve a record containing additional information about a data element,
/// in one of the following ways:
///
/// - By DICOM tag, via [`by_tag`][1];
/// - By its keyword (also known as alias) via [`by_name`][2];
/// - By an expression which may either be a keyword
///   or a tag printed in one of its standard forms,
///   using [`by_expr`][3].
///
/// These methods return `None`
/// when the tag or name is not recognized by the dictionary.
/// Absence is a normal outcome, not an error.
///
/// [1]: DataDictionary::by_tag
/// [2]: DataDictionary::by_name
/// [3]: DataDictionary::by_expr
pub trait DataDictionary {
    /// The type of the dictionary entry.
    type Entry: DataDictionaryEntry;

    /// Fetch a data element entry by its tag.
    ///
    /// Implementations should resolve exact tags first,
    /// then repeating group and element ranges.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;

    /// Fetch an entry by its usual alias
    /// (e.g. "PatientName" or "SOPInstanceUID").
    /// Aliases are in UpperCamelCase and case sensitive.
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Fetch an entry by its alias or by DICOM tag expression.
    ///
    /// This method accepts a tag descriptor in any of the following formats:
    ///
    /// - `(gggg,eeee)`
    /// - `gggg,eeee`
    /// - `ggggeeee`
    /// - _`KeywordName`_: an exact match by DICOM tag keyword
    fn by_expr(&self, tag: &str) -> Option<&Self::Entry> {
        match tag.parse() {
            Ok(tag) => self.by_tag(tag),
            Err(_) => self.by_name(tag),
        }
    }

    /// Use this data element dictionary to interpret a DICOM tag
    /// from any of the formats accepted by [`by_expr`](DataDictionary::by_expr).
    fn parse_tag(&self, tag: &str) -> Option<Tag> {
        tag.parse()
            .ok()
            .or_else(|| self.by_name(tag).map(|e| e.tag()))
    }
}

impl<D> DataDictionary for &D
where
    D: DataDictionary + ?Sized,
{
    type Entry = D::Entry;

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        (**self).by_tag(tag)
    }

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        (**self).by_name(name)
    }
}

/// The data element dictionary entry type,
/// representing a DICOM attribute.
pub trait DataDictionaryEntry {
    /// The full possible tag range of the attribute,
    /// which this dictionary entry can represent.
    fn tag_range(&self) -> TagRange;

    /// Fetch a single tag applicable to this attribute.
    ///
    /// Note that this is not necessarily
    /// the original tag used as key for this entry.
    fn tag(&self) -> Tag {
        self.tag_range().inner()
    }

    /// The alias of the attribute, with no spaces, usually in UpperCamelCase.
    fn alias(&self) -> &str;

    /// The extended value representation descriptor of the attribute.
    fn vr(&self) -> VirtualVr;

    /// The value multiplicity constraint of the attribute.
    fn vm(&self) -> ValueMultiplicity;

    /// Whether the attribute has been retired from the standard.
    fn retired(&self) -> bool;
}

/// A data type for a dictionary entry with a string slice for its alias.
#[derive(Debug, PartialEq, Clone)]
pub struct DataDictionaryEntryRef<'a> {
    /// The attribute tag or tag range
    pub tag: TagRange,
    /// The alias of the attribute, with no spaces, usually InCapitalizedCamelCase
    pub alias: &'a str,
    /// The extended value representation descriptor of the attribute
    pub vr: VirtualVr,
    /// The value multiplicity
    pub vm: ValueMultiplicity,
    /// Whether the attribute is retired
    pub retired: bool,
}

impl<'a> DataDictionaryEntry for DataDictionaryEntryRef<'a> {
    fn tag_range(&self) -> TagRange {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias
    }
    fn vr(&self) -> VirtualVr {
        self.vr
    }
    fn vm(&self) -> ValueMultiplicity {
        self.vm
    }
    fn retired(&self) -> bool {
        self.retired
    }
}

/// A data type for a dictionary entry with full ownership.
#[derive(Debug, PartialEq, Clone)]
pub struct DataDictionaryEntryBuf {
    /// The attribute tag range
    pub tag: TagRange,
    /// The alias of the attribute
    pub alias: String,
    /// The extended value representation descriptor of the attribute
    pub vr: VirtualVr,
    /// The value multiplicity
    pub vm: ValueMultiplicity,
    /// Whether the attribute is retired
    pub retired: bool,
}

impl DataDictionaryEntry for DataDictionaryEntryBuf {
    fn tag_range(&self) -> TagRange {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias.as_str()
    }
    fn vr(&self) -> VirtualVr {
        self.vr
    }
    fn vm(&self) -> ValueMultiplicity {
        self.vm
    }
    fn retired(&self) -> bool {
        self.retired
    }
}
