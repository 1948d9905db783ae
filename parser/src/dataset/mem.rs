//! In-memory data set trees.
//!
//! An [`InMemDataSet`] is built from the token stream of a
//! [`DataSetReader`], one per root data set and one per sequence item.
//! When the reader fails, every element decoded so far is kept:
//! open items and sequences are closed and attached to their parents,
//! and the error is returned alongside the tree in a [`ReadOutcome`].
use crate::dataset::read::{DataSetReader, ReadOptions, Warning};
use crate::dataset::DataToken;
use crate::error::{Error, Result, UnexpectedTokenSnafu};
use dcmtlv_core::dictionary::DataDictionary;
use dcmtlv_core::header::{DataElement, DataElementHeader, HasLength, Length};
use dcmtlv_core::value::{DataSetSequence, InMemFragment, PixelFragmentSequence, C};
use dcmtlv_core::{Tag, VR};
use dcmtlv_dictionary_std::StandardDataDictionary;
use dcmtlv_encoding::text::SpecificCharacterSet;
use dcmtlv_encoding::transfer_syntax::TransferSyntax;
use snafu::{Backtrace, OptionExt, Snafu};
use std::collections::btree_map::{BTreeMap, Entry};

/// A data element of an in-memory data set.
pub type InMemElement = DataElement<InMemDataSet>;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum AccessError {
    #[snafu(display("No such data element with tag {}", tag))]
    NoSuchDataElementTag { tag: Tag, backtrace: Backtrace },
    #[snafu(display("No such data element {}", name))]
    NoSuchAttributeName { name: String, backtrace: Backtrace },
}

/// A decoded DICOM data set, with its elements in ascending tag order.
///
/// Along with the elements, the data set records
/// the character set and transfer syntax in effect when it was read.
/// These do not take part in equality:
/// two data sets are equal when their elements have the same tags,
/// VRs, values and flags, whatever their declared lengths.
#[derive(Debug, Clone)]
pub struct InMemDataSet {
    entries: BTreeMap<Tag, InMemElement>,
    charset: SpecificCharacterSet,
    transfer_syntax: TransferSyntax,
    len: Length,
}

impl Default for InMemDataSet {
    fn default() -> Self {
        InMemDataSet::with_encoding(
            SpecificCharacterSet::default(),
            TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN,
            Length::UNDEFINED,
        )
    }
}

impl PartialEq for InMemDataSet {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.values().zip(other.entries.values()).all(|(a, b)| {
                a.header().tag == b.header().tag
                    && a.vr() == b.vr()
                    && a.flags() == b.flags()
                    && a.value() == b.value()
            })
    }
}

impl HasLength for InMemDataSet {
    fn length(&self) -> Length {
        self.len
    }
}

impl InMemDataSet {
    fn with_encoding(
        charset: SpecificCharacterSet,
        transfer_syntax: TransferSyntax,
        len: Length,
    ) -> Self {
        InMemDataSet {
            entries: BTreeMap::new(),
            charset,
            transfer_syntax,
            len,
        }
    }

    /// Create a data set from a sequence of elements.
    /// A later element replaces an earlier one with the same tag.
    pub fn from_element_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = InMemElement>,
    {
        let mut dataset = InMemDataSet::default();
        for element in iter {
            dataset.put(element);
        }
        dataset
    }

    /// Decode a whole data set from a byte buffer.
    ///
    /// Decoding stops at the first fatal error,
    /// keeping the elements decoded up to that point.
    pub fn read<D>(
        data: &[u8],
        ts: &TransferSyntax,
        dict: D,
        options: ReadOptions,
    ) -> ReadOutcome
    where
        D: DataDictionary,
    {
        let root = InMemDataSet::with_encoding(options.charset.clone(), *ts, Length::UNDEFINED);
        let mut reader = match DataSetReader::new(data, ts, dict, options) {
            Ok(reader) => reader,
            Err(e) => {
                return ReadOutcome {
                    dataset: root,
                    error: Some(e),
                    warnings: Vec::new(),
                }
            }
        };

        let mut builder = TreeBuilder::new(root);
        let mut error = None;
        while let Some(token) = reader.next() {
            let pushed = token.and_then(|token| {
                builder.push_token(token, reader.charset(), reader.transfer_syntax())
            });
            if let Err(e) = pushed {
                error = Some(e);
                break;
            }
        }

        ReadOutcome {
            dataset: builder.finish(),
            error,
            warnings: reader.take_warnings(),
        }
    }

    /// Retrieve a particular DICOM element by its tag, if present.
    pub fn get(&self, tag: Tag) -> Option<&InMemElement> {
        self.entries.get(&tag)
    }

    /// Retrieve a particular DICOM element by its tag.
    pub fn element(&self, tag: Tag) -> Result<&InMemElement, AccessError> {
        self.entries
            .get(&tag)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    /// Retrieve a particular DICOM element by its keyword
    /// or by a tag expression such as `(0010,0010)`.
    pub fn element_by_name(&self, name: &str) -> Result<&InMemElement, AccessError> {
        let tag = StandardDataDictionary
            .parse_tag(name)
            .context(NoSuchAttributeNameSnafu { name })?;
        self.element(tag)
    }

    /// Iterate over the elements in ascending tag order.
    pub fn iter(&self) -> impl Iterator<Item = &InMemElement> + '_ {
        self.entries.values()
    }

    /// Iterate over the tags of the elements in ascending order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.entries.keys().copied()
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the data set has no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The character set in effect for this data set.
    pub fn charset(&self) -> &SpecificCharacterSet {
        &self.charset
    }

    /// The encoding this data set was read with.
    pub fn transfer_syntax(&self) -> &TransferSyntax {
        &self.transfer_syntax
    }

    fn put(&mut self, element: InMemElement) -> Option<InMemElement> {
        self.entries.insert(element.header().tag, element)
    }

    /// Insert an element unless one with the same tag is already present.
    fn put_first(&mut self, element: InMemElement) -> bool {
        match self.entries.entry(element.header().tag) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(element);
                true
            }
        }
    }
}

impl<'a> IntoIterator for &'a InMemDataSet {
    type Item = &'a InMemElement;
    type IntoIter = std::collections::btree_map::Values<'a, Tag, InMemElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

/// The result of decoding a data set:
/// the tree, the error which stopped decoding if any,
/// and the warnings recorded along the way.
#[derive(Debug)]
pub struct ReadOutcome {
    pub dataset: InMemDataSet,
    pub error: Option<Error>,
    pub warnings: Vec<Warning>,
}

impl ReadOutcome {
    /// Whether the whole buffer was decoded.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Discard partial results and warnings.
    pub fn into_result(self) -> Result<InMemDataSet> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.dataset),
        }
    }
}

#[derive(Debug)]
enum Frame {
    Item(InMemDataSet),
    Sequence {
        tag: Tag,
        len: Length,
        items: C<InMemDataSet>,
    },
    PixelSequence {
        header: DataElementHeader,
        offset_table: C<u32>,
        fragments: C<InMemFragment>,
    },
}

/// Assembles data set tokens into a tree.
#[derive(Debug)]
struct TreeBuilder {
    root: InMemDataSet,
    /// the sequences and items currently open
    frames: Vec<Frame>,
    /// a header waiting for its value
    pending: Option<DataElementHeader>,
}

impl TreeBuilder {
    fn new(root: InMemDataSet) -> Self {
        TreeBuilder {
            root,
            frames: Vec::new(),
            pending: None,
        }
    }

    fn in_item(&self) -> bool {
        matches!(self.frames.last(), None | Some(Frame::Item(_)))
    }

    fn current_item(&mut self) -> Option<&mut InMemDataSet> {
        match self.frames.last_mut() {
            None => Some(&mut self.root),
            Some(Frame::Item(item)) => Some(item),
            Some(_) => None,
        }
    }

    /// Feed the next token.
    /// `charset` and `ts` are the reader's state right after producing it.
    fn push_token(
        &mut self,
        token: DataToken,
        charset: &SpecificCharacterSet,
        ts: &TransferSyntax,
    ) -> Result<()> {
        let ready = self.pending.is_none();
        match token {
            DataToken::ElementHeader(header) if ready && self.in_item() => {
                self.pending = Some(header);
            }
            DataToken::PrimitiveValue(value, flags) if !ready => {
                if let Some(header) = self.pending.take() {
                    if let Some(item) = self.current_item() {
                        let element = DataElement::new_with_flags(header, value, flags);
                        let inserted = item.put_first(element);
                        if inserted && header.tag == Tag::SPECIFIC_CHARACTER_SET {
                            item.charset = charset.clone();
                        }
                    }
                }
            }
            DataToken::SequenceStart { tag, len } if ready && self.in_item() => {
                self.frames.push(Frame::Sequence {
                    tag,
                    len,
                    items: C::new(),
                });
            }
            DataToken::PixelSequenceStart(header) if ready && self.in_item() => {
                self.frames.push(Frame::PixelSequence {
                    header,
                    offset_table: C::new(),
                    fragments: C::new(),
                });
            }
            DataToken::ItemStart { len } if ready => match self.frames.last() {
                Some(Frame::Sequence { .. }) => {
                    let item = InMemDataSet::with_encoding(charset.clone(), *ts, len);
                    self.frames.push(Frame::Item(item));
                }
                // fragments are delivered as separate tokens
                Some(Frame::PixelSequence { .. }) => {}
                _ => {
                    return UnexpectedTokenSnafu {
                        token: DataToken::ItemStart { len },
                    }
                    .fail()
                }
            },
            DataToken::ItemEnd if ready => match self.frames.last() {
                Some(Frame::Item(_)) => self.close_frame(),
                Some(Frame::PixelSequence { .. }) => {}
                _ => {
                    return UnexpectedTokenSnafu {
                        token: DataToken::ItemEnd,
                    }
                    .fail()
                }
            },
            DataToken::SequenceEnd if ready && !self.in_item() => self.close_frame(),
            DataToken::OffsetTable(table) => match self.frames.last_mut() {
                Some(Frame::PixelSequence { offset_table, .. }) => *offset_table = table.into(),
                _ => {
                    return UnexpectedTokenSnafu {
                        token: DataToken::OffsetTable(table),
                    }
                    .fail()
                }
            },
            DataToken::ItemValue(data) => match self.frames.last_mut() {
                Some(Frame::PixelSequence { fragments, .. }) => fragments.push(data),
                _ => {
                    return UnexpectedTokenSnafu {
                        token: DataToken::ItemValue(data),
                    }
                    .fail()
                }
            },
            token => return UnexpectedTokenSnafu { token }.fail(),
        }
        Ok(())
    }

    /// Close the innermost open frame and attach it to its parent.
    fn close_frame(&mut self) {
        let element: InMemElement = match self.frames.pop() {
            Some(Frame::Item(item)) => {
                if let Some(Frame::Sequence { items, .. }) = self.frames.last_mut() {
                    items.push(item);
                }
                return;
            }
            Some(Frame::Sequence { tag, len, items }) => DataElement::new(
                DataElementHeader::new(tag, VR::SQ, len),
                DataSetSequence::new(items, len),
            ),
            Some(Frame::PixelSequence {
                header,
                offset_table,
                fragments,
            }) => DataElement::new(header, PixelFragmentSequence::new(offset_table, fragments)),
            None => return,
        };
        if let Some(item) = self.current_item() {
            item.put_first(element);
        }
    }

    /// Close whatever is still open and return the root data set.
    fn finish(mut self) -> InMemDataSet {
        while !self.frames.is_empty() {
            self.close_frame();
        }
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::read::ReadOptions;
    use dcmtlv_core::dicom_value;
    use dcmtlv_core::value::{PrimitiveValue, ValueFlags};
    use dcmtlv_encoding::text::CharacterSetTerm;
    use pretty_assertions::assert_eq;

    #[rustfmt::skip]
    const NESTED: &[u8] = &[
        0x08, 0x00, 0x05, 0x00, // (0008,0005) SpecificCharacterSet
            b'C', b'S', 0x0A, 0x00,
            b'I', b'S', b'O', b'_', b'I', b'R', b' ', b'1', b'0', b'0',
        0x08, 0x00, 0x15, 0x11, // (0008,1115) ReferencedSeriesSequence
            b'S', b'Q', 0x00, 0x00,
            0xFF, 0xFF, 0xFF, 0xFF,
            0xFE, 0xFF, 0x00, 0xE0, // item
                0x0C, 0x00, 0x00, 0x00, // length: 12
                0x20, 0x00, 0x11, 0x00, // (0020,0011) SeriesNumber
                    b'I', b'S', 0x04, 0x00,
                    b'1', b'\\', b'2', b' ',
            0xFE, 0xFF, 0xDD, 0xE0, // sequence end
                0x00, 0x00, 0x00, 0x00,
        0x10, 0x00, 0x10, 0x00, // (0010,0010) PatientName
            b'P', b'N', 0x04, 0x00,
            b'J', b'o', 0xE3, b'o',
    ];

    #[test]
    fn build_nested_tree() {
        let outcome = InMemDataSet::read(
            NESTED,
            &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
            StandardDataDictionary,
            ReadOptions::default(),
        );
        assert!(outcome.is_complete());
        assert!(outcome.warnings.is_empty());
        let dataset = outcome.dataset;

        assert_eq!(
            dataset.tags().collect::<Vec<_>>(),
            vec![Tag(0x0008, 0x0005), Tag(0x0008, 0x1115), Tag(0x0010, 0x0010)]
        );
        assert_eq!(dataset.charset().initial(), CharacterSetTerm::IsoIr100);

        let seq = dataset.element_by_name("ReferencedSeriesSequence").unwrap();
        assert_eq!(seq.vr(), VR::SQ);
        assert!(seq.header().len.is_undefined());
        let items = seq.value().items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].length(), Length(12));
        // items inherit the character set of their parent
        assert_eq!(items[0].charset().initial(), CharacterSetTerm::IsoIr100);
        assert_eq!(
            items[0].element(Tag(0x0020, 0x0011)).unwrap().value().primitive(),
            Some(&dicom_value!(I32, [1, 2]))
        );

        let name = dataset.element(Tag(0x0010, 0x0010)).unwrap();
        assert_eq!(name.to_str().unwrap(), "João");
    }

    #[test]
    fn keep_elements_before_error() {
        // cut in the middle of the sequence item
        let outcome = InMemDataSet::read(
            &NESTED[..40],
            &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
            StandardDataDictionary,
            ReadOptions::default(),
        );
        assert!(!outcome.is_complete());
        assert!(matches!(
            outcome.error,
            Some(Error::UnexpectedEndOfStream { offset: 40, .. })
        ));

        let dataset = &outcome.dataset;
        assert_eq!(dataset.len(), 2);
        let seq = dataset.element(Tag(0x0008, 0x1115)).unwrap();
        // the open item is kept, without the element being read
        let items = seq.value().items().unwrap();
        assert_eq!(items.len(), 1);
        assert!(items[0].is_empty());
        assert!(dataset.get(Tag(0x0010, 0x0010)).is_none());

        assert!(matches!(outcome.into_result(), Err(Error::UnexpectedEndOfStream { .. })));
    }

    #[test]
    fn missing_elements() {
        let dataset = InMemDataSet::from_element_iter(vec![DataElement::new(
            DataElementHeader::new(Tag(0x0010, 0x0020), VR::LO, Length(2)),
            dicom_value!(Strs, ["42"]),
        )]);
        assert!(dataset.element_by_name("PatientID").is_ok());
        assert!(matches!(
            dataset.element(Tag(0x0010, 0x0010)),
            Err(AccessError::NoSuchDataElementTag { .. })
        ));
        assert!(matches!(
            dataset.element_by_name("NoSuchKeyword"),
            Err(AccessError::NoSuchAttributeName { .. })
        ));
    }

    #[test]
    fn equality_ignores_lengths_and_encoding() {
        let element = |len| {
            DataElement::new_with_flags(
                DataElementHeader::new(Tag(0x0010, 0x0020), VR::LO, len),
                dicom_value!(Strs, ["42"]),
                ValueFlags::default(),
            )
        };
        let a = InMemDataSet::from_element_iter(vec![element(Length(2))]);
        let mut b = InMemDataSet::from_element_iter(vec![element(Length::UNDEFINED)]);
        b.transfer_syntax = TransferSyntax::EXPLICIT_VR_BIG_ENDIAN;
        assert_eq!(a, b);

        let c = InMemDataSet::from_element_iter(vec![DataElement::new_with_flags(
            DataElementHeader::new(Tag(0x0010, 0x0020), VR::LO, Length(2)),
            dicom_value!(Strs, ["42"]),
            ValueFlags {
                charset_fallback: true,
                ..Default::default()
            },
        )]);
        assert_ne!(a, c);
    }

    #[test]
    fn builder_rejects_value_without_header() {
        let mut builder = TreeBuilder::new(InMemDataSet::default());
        let err = builder
            .push_token(
                DataToken::PrimitiveValue(PrimitiveValue::Empty, ValueFlags::default()),
                &SpecificCharacterSet::default(),
                &TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN,
            )
            .unwrap_err();
        assert!(matches!(err, Error::UnexpectedToken { .. }));
    }
}
