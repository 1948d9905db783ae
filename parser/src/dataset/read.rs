//! This module contains a mid-level abstraction for reading DICOM content
//! sequentially.
//!
//! The [`DataSetReader`] walks a fully resident buffer
//! one element header at a time and produces a flat stream of
//! [`DataToken`]s, which can be used to form a syntax tree of a full data set.
//! It keeps a stack of the sequences and items currently open
//! so that both defined and undefined lengths are honored,
//! as well as the character set and private creators
//! in effect for each nested data set.
use crate::error::{
    InterpretValueSnafu, InvalidOffsetTableLengthSnafu, InvalidValueLengthSnafu,
    MaxDepthExceededSnafu, Result, StructuralLengthMismatchSnafu, TagOrderSnafu,
    UndefinedItemLengthSnafu, UnexpectedDelimiterSnafu, UnexpectedEndOfStreamSnafu,
    UnsupportedTransferSyntaxSnafu, UnsupportedUndefinedLengthSnafu,
};
use crate::stateful::decode::StatefulDecoder;
use crate::stateful::value::{interpret, Error as ValueError, Interpreted};
use dcmtlv_core::dictionary::{DataDictionary, DataDictionaryEntry, PrivateDataDictionary};
use dcmtlv_core::header::{DataElementHeader, Length, SequenceItemHeader};
use dcmtlv_core::value::ValueFlags;
use dcmtlv_core::{Tag, VR};
use dcmtlv_encoding::decode::{DecodedHeader, VrSource};
use dcmtlv_encoding::text::{decode_default_lossy, SpecificCharacterSet};
use dcmtlv_encoding::transfer_syntax::{Endianness, TransferSyntax};
use snafu::{ensure, IntoError};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::warn;

use super::{DataToken, SeqTokenType};

/// A reader-specific token representing a sequence or item start.
#[derive(Debug, Copy, Clone, PartialEq)]
struct SeqToken {
    /// Whether it is the start of a sequence or the start of an item.
    typ: SeqTokenType,
    /// The tag of the sequence element, or the item tag.
    tag: Tag,
    /// The length of the value, as indicated by the starting element,
    /// can be unknown.
    len: Length,
    /// Whether this sequence token is part of an encapsulated pixel data.
    pixel_data: bool,
    /// The position of the first byte of the sequence or item value.
    base_offset: usize,
    /// The transfer syntax to restore when this sequence ends.
    restore: Option<TransferSyntax>,
}

/// Decoding state scoped to one data set (the root or an item).
#[derive(Debug, Clone)]
struct Context {
    charset: SpecificCharacterSet,
    last_tag: Option<Tag>,
    /// every tag read so far at this level
    seen: HashSet<Tag>,
    /// private creator identifiers by (group, block)
    creators: HashMap<(u16, u8), String>,
}

impl Context {
    fn new(charset: SpecificCharacterSet) -> Self {
        Context {
            charset,
            last_tag: None,
            seen: HashSet::new(),
            creators: HashMap::new(),
        }
    }
}

/// An element header waiting for its value to be read.
#[derive(Debug, Copy, Clone)]
struct PendingHeader {
    header: DataElementHeader,
    offset: usize,
    flags: ValueFlags,
    /// the tag was already read in this data set
    duplicate: bool,
}

enum Step {
    Token(DataToken),
    Skip,
    End,
}

/// The value reading strategy for the data set reader.
///
/// It defines how the `PrimitiveValue`s in value tokens are constructed.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ValueReadStrategy {
    /// Textual values will be decoded according to their value representation.
    ///
    /// Word-sized binary values are read according to
    /// the expected byte order.
    /// Dates, times, and date-times (DA, DT, TM) are parsed
    /// into their more specific variants,
    /// or kept as text with a flag raised if they are not valid DICOM.
    /// String numbers (IS, DS) are also converted into binary representations.
    Interpreted,
    /// Values will be stored without decoding dates or textual numbers.
    ///
    /// Word-sized binary values are read according to
    /// the expected byte order.
    /// Date-time values and numbers are kept in their original string
    /// representation as string objects.
    Preserved,
    /// All primitive values are fetched as raw byte buffers,
    /// without any form of decoding or interpretation.
    /// Not even byte order conversions are made.
    Raw,
}

impl Default for ValueReadStrategy {
    fn default() -> Self {
        ValueReadStrategy::Interpreted
    }
}

/// The set of options for the data set reader.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct ReadOptions {
    /// the value reading strategy
    pub value_read: ValueReadStrategy,
    /// the character set of the root data set
    /// until a _Specific Character Set_ element says otherwise
    pub charset: SpecificCharacterSet,
    /// registrations for private attributes
    pub private_dictionary: PrivateDataDictionary,
    /// whether an element out of ascending tag order stops decoding
    pub require_ordered_elements: bool,
    /// the maximum number of nested sequences
    pub max_sequence_depth: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            value_read: ValueReadStrategy::default(),
            charset: SpecificCharacterSet::default(),
            private_dictionary: PrivateDataDictionary::default(),
            require_ordered_elements: true,
            max_sequence_depth: 64,
        }
    }
}

impl ReadOptions {
    /// Replace the value reading strategy of the options.
    pub fn value_read(mut self, value_read: ValueReadStrategy) -> Self {
        self.value_read = value_read;
        self
    }

    /// Replace the initial character set of the options.
    pub fn charset(mut self, charset: SpecificCharacterSet) -> Self {
        self.charset = charset;
        self
    }

    /// Replace the private attribute registrations of the options.
    pub fn private_dictionary(mut self, private_dictionary: PrivateDataDictionary) -> Self {
        self.private_dictionary = private_dictionary;
        self
    }

    /// Set whether an element out of order stops decoding.
    /// When `false`, a warning is recorded instead.
    pub fn require_ordered_elements(mut self, require: bool) -> Self {
        self.require_ordered_elements = require;
        self
    }

    /// Replace the maximum sequence nesting depth.
    pub fn max_sequence_depth(mut self, max: usize) -> Self {
        self.max_sequence_depth = max;
        self
    }
}

/// A non-fatal condition met while reading a data set.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Warning {
    /// The VR of an element could not be determined,
    /// so its value was kept as bytes.
    /// `code` holds the VR bytes found in the stream, if any.
    UnknownVr {
        tag: Tag,
        offset: usize,
        code: Option<[u8; 2]>,
    },
    /// Text could not be decoded with the active character set.
    CharsetFallback { tag: Tag, offset: usize },
    /// A date or time did not follow its grammar.
    MalformedTemporal { tag: Tag, offset: usize },
    /// A _Specific Character Set_ term is not supported.
    /// The default repertoire is used instead.
    UnsupportedCharacterSet { term: String, offset: usize },
    /// A delimitation item outside of the structure it would close.
    StrayDelimiter { tag: Tag, offset: usize },
    /// An element of undefined length which is not a sequence
    /// was followed by items, and was read as a sequence.
    RecoveredUndefinedLength { tag: Tag, vr: VR, offset: usize },
    /// An element with the tag of an earlier element in the same data set.
    /// The first element is kept.
    DuplicateElement { tag: Tag, offset: usize },
    /// An element out of ascending tag order.
    TagOrder {
        tag: Tag,
        previous: Tag,
        offset: usize,
    },
}

impl Warning {
    /// The absolute buffer offset of the element concerned.
    pub fn offset(&self) -> usize {
        match self {
            Warning::UnknownVr { offset, .. }
            | Warning::CharsetFallback { offset, .. }
            | Warning::MalformedTemporal { offset, .. }
            | Warning::UnsupportedCharacterSet { offset, .. }
            | Warning::StrayDelimiter { offset, .. }
            | Warning::RecoveredUndefinedLength { offset, .. }
            | Warning::DuplicateElement { offset, .. }
            | Warning::TagOrder { offset, .. } => *offset,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Warning::UnknownVr {
                tag,
                offset,
                code: Some(code),
            } => write!(
                f,
                "Unknown VR {:02X?} for {} at offset {}, value kept as bytes",
                code, tag, offset
            ),
            Warning::UnknownVr { tag, offset, .. } => write!(
                f,
                "No VR known for {} at offset {}, value kept as bytes",
                tag, offset
            ),
            Warning::CharsetFallback { tag, offset } => write!(
                f,
                "Text of {} at offset {} decoded with the default repertoire",
                tag, offset
            ),
            Warning::MalformedTemporal { tag, offset } => write!(
                f,
                "Malformed date or time in {} at offset {}",
                tag, offset
            ),
            Warning::UnsupportedCharacterSet { term, offset } => write!(
                f,
                "Unsupported character set {:?} at offset {}",
                term, offset
            ),
            Warning::StrayDelimiter { tag, offset } => {
                write!(f, "Stray delimiter {} at offset {}", tag, offset)
            }
            Warning::RecoveredUndefinedLength { tag, vr, offset } => write!(
                f,
                "Element {} ({}) at offset {} has undefined length, read as a sequence",
                tag, vr, offset
            ),
            Warning::DuplicateElement { tag, offset } => write!(
                f,
                "Element {} at offset {} repeats an earlier element and was dropped",
                tag, offset
            ),
            Warning::TagOrder {
                tag,
                previous,
                offset,
            } => write!(
                f,
                "Element {} at offset {} does not come after {}",
                tag, offset, previous
            ),
        }
    }
}

/// The state of a data set reader between two tokens.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ReaderState {
    /// Reading the elements of the root data set.
    ReadingElements,
    /// Reading the elements of a sequence item.
    InSequenceItem,
    /// Expecting an item or the end of the current sequence.
    AwaitingItemOrSequenceDelimiter,
}

/// A higher-level reader for retrieving structure in a DICOM data set
/// from a byte buffer.
#[derive(Debug)]
pub struct DataSetReader<'a, D> {
    /// the stateful decoder
    parser: StatefulDecoder<'a, D>,
    /// the options of this reader
    options: ReadOptions,
    /// the encoding currently in effect
    active_ts: TransferSyntax,
    /// whether the reader is expecting an item header next (or a sequence delimiter)
    in_sequence: bool,
    /// whether the reader is expecting the first item value of a pixel sequence next
    /// (offset table)
    offset_table_next: bool,
    /// whether a check for a sequence or item delimitation is pending
    delimiter_check_pending: bool,
    /// a stack of delimiters
    seq_delimiters: Vec<SeqToken>,
    /// state of the data set being read
    context: Context,
    /// state of the enclosing data sets
    outer_contexts: Vec<Context>,
    /// fuse the iteration process if true
    hard_break: bool,
    /// last decoded header
    last_header: Option<PendingHeader>,
    warnings: Vec<Warning>,
}

impl<'a, D> DataSetReader<'a, D>
where
    D: DataDictionary,
{
    /// Create a new reader over the given buffer
    /// encoded with the given transfer syntax.
    ///
    /// `dict` resolves the VR of elements under implicit VR.
    /// Deflated transfer syntaxes are rejected:
    /// the buffer must be inflated first.
    pub fn new(
        data: &'a [u8],
        ts: &TransferSyntax,
        dict: D,
        options: ReadOptions,
    ) -> Result<Self> {
        ensure!(
            !ts.deflated,
            UnsupportedTransferSyntaxSnafu {
                uid: ts.uid.to_string()
            }
        );

        Ok(DataSetReader {
            parser: StatefulDecoder::new(data, ts, dict),
            context: Context::new(options.charset.clone()),
            options,
            active_ts: *ts,
            in_sequence: false,
            offset_table_next: false,
            delimiter_check_pending: false,
            seq_delimiters: Vec::new(),
            outer_contexts: Vec::new(),
            hard_break: false,
            last_header: None,
            warnings: Vec::new(),
        })
    }

    /// The character set in effect for the data set being read.
    pub fn charset(&self) -> &SpecificCharacterSet {
        &self.context.charset
    }

    /// The encoding in effect for the data set being read.
    pub fn transfer_syntax(&self) -> &TransferSyntax {
        &self.active_ts
    }

    /// The warnings recorded so far.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Take the warnings recorded so far.
    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    /// The absolute position of the reader in the buffer.
    pub fn position(&self) -> usize {
        self.parser.position()
    }

    /// The state of the reader.
    pub fn state(&self) -> ReaderState {
        if self.in_sequence {
            ReaderState::AwaitingItemOrSequenceDelimiter
        } else if self.outer_contexts.is_empty() {
            ReaderState::ReadingElements
        } else {
            ReaderState::InSequenceItem
        }
    }
}

impl<'a, D> Iterator for DataSetReader<'a, D>
where
    D: DataDictionary,
{
    type Item = Result<DataToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.hard_break {
            return None;
        }
        loop {
            match self.next_token() {
                Ok(Step::Token(token)) => return Some(Ok(token)),
                Ok(Step::Skip) => continue,
                Ok(Step::End) => {
                    self.hard_break = true;
                    return None;
                }
                Err(e) => {
                    self.hard_break = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<'a, D> DataSetReader<'a, D>
where
    D: DataDictionary,
{
    fn next_token(&mut self) -> Result<Step> {
        // item or sequence delimitation logic for explicit lengths
        if self.delimiter_check_pending {
            if let Some(token) = self.update_seq_delimiters()? {
                return Ok(Step::Token(token));
            }
        }

        if self.in_sequence {
            return self.read_item_header();
        }

        if let Some(&SeqToken {
            typ: SeqTokenType::Item,
            pixel_data: true,
            len,
            base_offset,
            ..
        }) = self.seq_delimiters.last()
        {
            return self.read_fragment(len, base_offset).map(Step::Token);
        }

        if let Some(pending) = self.last_header.take() {
            return self.read_value(pending).map(Step::Token);
        }

        self.read_element_header()
    }

    /// At sequence level, expecting an item header.
    fn read_item_header(&mut self) -> Result<Step> {
        let offset = self.parser.position();
        let pixel_data = self
            .seq_delimiters
            .last()
            .map(|sd| sd.pixel_data)
            .unwrap_or(false);

        match self.parser.decode_item_header()? {
            SequenceItemHeader::Item { len } => {
                ensure!(
                    !(pixel_data && len.is_undefined()),
                    UndefinedItemLengthSnafu { offset }
                );
                self.in_sequence = false;
                self.push_sequence_token(SeqTokenType::Item, Tag::ITEM, len, pixel_data, None);
                if !pixel_data {
                    let inner = Context::new(self.context.charset.clone());
                    self.outer_contexts
                        .push(std::mem::replace(&mut self.context, inner));
                    // items can be empty
                    if len == Length(0) {
                        self.delimiter_check_pending = true;
                    }
                }
                Ok(Step::Token(DataToken::ItemStart { len }))
            }
            SequenceItemHeader::ItemDelimiter => {
                self.record(Warning::StrayDelimiter {
                    tag: Tag::ITEM_DELIMITER,
                    offset,
                });
                Ok(Step::Skip)
            }
            SequenceItemHeader::SequenceDelimiter => {
                self.pop_sequence_token();
                self.in_sequence = false;
                // items can end after a nested sequence ends
                self.delimiter_check_pending = true;
                Ok(Step::Token(DataToken::SequenceEnd))
            }
        }
    }

    /// Read the value of an item in encapsulated pixel data.
    fn read_fragment(&mut self, len: Length, offset: usize) -> Result<DataToken> {
        let len = match len.get() {
            Some(len) => len as usize,
            None => return UndefinedItemLengthSnafu { offset }.fail(),
        };

        // need to pop the item on the next iteration
        self.delimiter_check_pending = true;

        if self.offset_table_next {
            self.offset_table_next = false;
            ensure!(
                len % 4 == 0,
                InvalidOffsetTableLengthSnafu {
                    len: Length(len as u32),
                    offset,
                }
            );
            let table = self.parser.read_u32_table(len)?;
            Ok(DataToken::OffsetTable(table))
        } else {
            let data = self.parser.read_bytes(len)?;
            Ok(DataToken::ItemValue(data.to_vec()))
        }
    }

    /// A plain element header was read, so a value is expected.
    fn read_value(&mut self, pending: PendingHeader) -> Result<DataToken> {
        let PendingHeader {
            header,
            offset,
            flags: header_flags,
            duplicate,
        } = pending;

        let bytes = self.parser.read_bytes(header.len.0 as usize)?;
        let Interpreted { value, mut flags } = interpret(
            &header,
            bytes,
            &self.context.charset,
            self.parser.endianness(),
            self.options.value_read,
        )
        .map_err(|e| value_error(e, &header, offset))?;

        flags.unknown_vr |= header_flags.unknown_vr;
        if flags.charset_fallback {
            self.record(Warning::CharsetFallback {
                tag: header.tag,
                offset,
            });
        }
        if flags.malformed_temporal {
            self.record(Warning::MalformedTemporal {
                tag: header.tag,
                offset,
            });
        }

        if duplicate {
            // the first occurrence stays in effect
        } else if header.tag == Tag::SPECIFIC_CHARACTER_SET {
            self.update_charset(bytes, offset);
        } else if header.tag.is_private_creator() {
            let creator = decode_default_lossy(bytes);
            self.context.creators.insert(
                (header.tag.group(), header.tag.element() as u8),
                creator.trim_matches(|c: char| c == ' ' || c == '\0').to_string(),
            );
        }

        // sequences can end after this token
        self.delimiter_check_pending = true;

        Ok(DataToken::PrimitiveValue(value, flags))
    }

    /// A data element header or delimiter is expected.
    fn read_element_header(&mut self) -> Result<Step> {
        if self.parser.is_at_end() {
            // the data set ends gracefully only at the root level
            if self.seq_delimiters.is_empty() {
                return Ok(Step::End);
            }
            return UnexpectedEndOfStreamSnafu {
                offset: self.parser.position(),
            }
            .fail();
        }

        let DecodedHeader {
            header,
            vr_source,
            offset,
        } = self.parser.decode_header()?;

        if header.tag.is_delimitation() {
            return self.read_delimiter(header.tag, offset);
        }

        let duplicate = self.check_order(header.tag, offset)?;
        let (header, flags) = self.resolve_vr(header, vr_source, offset);

        if header.vr == VR::SQ {
            return self
                .start_sequence(header.tag, header.len, offset, None)
                .map(Step::Token);
        }

        if header.len.is_undefined() {
            return self.read_undefined_length(header, vr_source, offset);
        }

        // save it for the next step
        self.last_header = Some(PendingHeader {
            header,
            offset,
            flags,
            duplicate,
        });
        Ok(Step::Token(DataToken::ElementHeader(header)))
    }

    fn read_delimiter(&mut self, tag: Tag, offset: usize) -> Result<Step> {
        match tag {
            Tag::ITEM_DELIMITER => {
                // only items of undefined length are closed by a delimiter
                let closes_item = matches!(
                    self.seq_delimiters.last(),
                    Some(sd) if sd.typ == SeqTokenType::Item && sd.len.is_undefined()
                );
                if closes_item {
                    self.pop_sequence_token();
                    self.in_sequence = true;
                    // sequences can end after this token
                    self.delimiter_check_pending = true;
                    Ok(Step::Token(DataToken::ItemEnd))
                } else {
                    self.record(Warning::StrayDelimiter { tag, offset });
                    // a defined length item can end right after it
                    self.delimiter_check_pending = true;
                    Ok(Step::Skip)
                }
            }
            Tag::SEQUENCE_DELIMITER if self.seq_delimiters.is_empty() => {
                self.record(Warning::StrayDelimiter { tag, offset });
                Ok(Step::Skip)
            }
            _ => UnexpectedDelimiterSnafu { tag, offset }.fail(),
        }
    }

    fn read_undefined_length(
        &mut self,
        header: DataElementHeader,
        vr_source: VrSource,
        offset: usize,
    ) -> Result<Step> {
        let DataElementHeader { tag, vr, len } = header;

        if tag == Tag::PIXEL_DATA {
            // encapsulated pixel data, expecting offset table
            self.push_sequence_token(SeqTokenType::Sequence, tag, len, true, None);
            self.in_sequence = true;
            self.offset_table_next = true;
            return Ok(Step::Token(DataToken::PixelSequenceStart(header)));
        }

        let token = match (vr, vr_source) {
            (VR::UN, VrSource::Explicit) => {
                // items of an unknown sequence are in implicit VR little endian
                let restore = self.active_ts;
                let token = self.start_sequence(tag, len, offset, Some(restore))?;
                self.parser.set_encoding(false, Endianness::Little);
                self.active_ts = TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN;
                token
            }
            (VR::UN, VrSource::Unresolved) => self.start_sequence(tag, len, offset, None)?,
            (vr, _)
                if matches!(
                    self.parser.peek_tag(),
                    Some(Tag::ITEM) | Some(Tag::SEQUENCE_DELIMITER)
                ) =>
            {
                self.record(Warning::RecoveredUndefinedLength { tag, vr, offset });
                self.start_sequence(tag, len, offset, None)?
            }
            (vr, _) => return UnsupportedUndefinedLengthSnafu { tag, vr, offset }.fail(),
        };
        Ok(Step::Token(token))
    }

    fn start_sequence(
        &mut self,
        tag: Tag,
        len: Length,
        offset: usize,
        restore: Option<TransferSyntax>,
    ) -> Result<DataToken> {
        let depth = self
            .seq_delimiters
            .iter()
            .filter(|sd| sd.typ == SeqTokenType::Sequence)
            .count();
        let max = self.options.max_sequence_depth;
        ensure!(depth < max, MaxDepthExceededSnafu { max, offset });

        self.in_sequence = true;
        self.push_sequence_token(SeqTokenType::Sequence, tag, len, false, restore);

        // sequences can end right after they start
        if len == Length(0) {
            self.delimiter_check_pending = true;
        }

        Ok(DataToken::SequenceStart { tag, len })
    }

    /// Check the tag against the elements before it in the same data set,
    /// returning whether it was already read.
    fn check_order(&mut self, tag: Tag, offset: usize) -> Result<bool> {
        if let Some(previous) = self.context.last_tag {
            if previous >= tag {
                ensure!(
                    !self.options.require_ordered_elements,
                    TagOrderSnafu {
                        tag,
                        previous,
                        offset
                    }
                );
            }
            if previous > tag && !self.context.seen.contains(&tag) {
                self.record(Warning::TagOrder {
                    tag,
                    previous,
                    offset,
                });
            }
        }
        self.context.last_tag = Some(tag);
        let duplicate = !self.context.seen.insert(tag);
        if duplicate {
            self.record(Warning::DuplicateElement { tag, offset });
        }
        Ok(duplicate)
    }

    fn resolve_vr(
        &mut self,
        header: DataElementHeader,
        vr_source: VrSource,
        offset: usize,
    ) -> (DataElementHeader, ValueFlags) {
        let mut flags = ValueFlags::default();
        let code = match vr_source {
            VrSource::Unresolved => {
                if let Some(vr) = self.private_vr(header.tag) {
                    return (DataElementHeader::new(header.tag, vr, header.len), flags);
                }
                None
            }
            VrSource::Malformed(code) => Some(code),
            _ => return (header, flags),
        };
        flags.unknown_vr = true;
        self.record(Warning::UnknownVr {
            tag: header.tag,
            offset,
            code,
        });
        (header, flags)
    }

    /// The VR registered for a private element
    /// whose creator was seen in the current data set.
    fn private_vr(&self, tag: Tag) -> Option<VR> {
        let creator_tag = tag.private_creator()?;
        let creator = self
            .context
            .creators
            .get(&(creator_tag.group(), creator_tag.element() as u8))?;
        self.options
            .private_dictionary
            .get(creator, tag)
            .map(|entry| entry.vr().relaxed())
    }

    fn update_charset(&mut self, bytes: &[u8], offset: usize) {
        let text = decode_default_lossy(bytes);
        let terms: Vec<&str> = text.split('\\').collect();
        match SpecificCharacterSet::from_values(&terms) {
            Ok(charset) => self.context.charset = charset,
            Err(e) => {
                self.record(Warning::UnsupportedCharacterSet {
                    term: e.term,
                    offset,
                });
                self.context.charset = SpecificCharacterSet::default();
            }
        }
    }

    fn update_seq_delimiters(&mut self) -> Result<Option<DataToken>> {
        if let Some(&sd) = self.seq_delimiters.last() {
            if let Some(len) = sd.len.get() {
                let expected_end = sd.base_offset + len as usize;
                let offset = self.parser.position();
                match expected_end.cmp(&offset) {
                    Ordering::Equal => {
                        // end of delimiter, as indicated by the element's length
                        let token = match sd.typ {
                            SeqTokenType::Sequence => {
                                self.in_sequence = false;
                                DataToken::SequenceEnd
                            }
                            SeqTokenType::Item => {
                                self.in_sequence = true;
                                DataToken::ItemEnd
                            }
                        };
                        self.pop_sequence_token();
                        return Ok(Some(token));
                    }
                    Ordering::Less => {
                        return StructuralLengthMismatchSnafu {
                            tag: sd.tag,
                            offset,
                            expected_end,
                        }
                        .fail();
                    }
                    Ordering::Greater => {} // continue normally
                }
            }
        }
        self.delimiter_check_pending = false;
        Ok(None)
    }

    #[inline]
    fn push_sequence_token(
        &mut self,
        typ: SeqTokenType,
        tag: Tag,
        len: Length,
        pixel_data: bool,
        restore: Option<TransferSyntax>,
    ) {
        self.seq_delimiters.push(SeqToken {
            typ,
            tag,
            len,
            pixel_data,
            base_offset: self.parser.position(),
            restore,
        })
    }

    fn pop_sequence_token(&mut self) {
        if let Some(sd) = self.seq_delimiters.pop() {
            if sd.typ == SeqTokenType::Item && !sd.pixel_data {
                if let Some(outer) = self.outer_contexts.pop() {
                    self.context = outer;
                }
            }
            if let Some(ts) = sd.restore {
                self.parser.set_encoding(ts.explicit_vr, ts.endianness);
                self.active_ts = ts;
            }
        }
    }

    fn record(&mut self, warning: Warning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }
}

fn value_error(e: ValueError, header: &DataElementHeader, offset: usize) -> crate::error::Error {
    match e {
        ValueError::InvalidValueLength { vr, width, .. } => InvalidValueLengthSnafu {
            tag: header.tag,
            vr,
            len: header.len.0,
            width,
            offset,
        }
        .build(),
        e => InterpretValueSnafu {
            tag: header.tag,
            offset,
        }
        .into_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::{DataSetReader, DataToken, ReadOptions, ReaderState, Warning};
    use crate::error::Error;
    use dcmtlv_core::dictionary::stub::StubDataDictionary;
    use dcmtlv_core::dictionary::PrivateDataDictionary;
    use dcmtlv_core::header::{DataElementHeader, Length};
    use dcmtlv_core::value::{PrimitiveValue, ValueFlags};
    use dcmtlv_core::{dicom_value, Tag, VR};
    use dcmtlv_dictionary_std::StandardDataDictionary;
    use dcmtlv_encoding::transfer_syntax::TransferSyntax;
    use pretty_assertions::assert_eq;

    fn clean(value: PrimitiveValue) -> DataToken {
        DataToken::PrimitiveValue(value, ValueFlags::default())
    }

    fn header(tag: (u16, u16), vr: VR, len: u32) -> DataToken {
        DataToken::ElementHeader(DataElementHeader::new(tag, vr, Length(len)))
    }

    fn validate_dataset_reader_implicit_vr<I>(data: &[u8], ground_truth: I)
    where
        I: IntoIterator<Item = DataToken>,
    {
        validate_dataset_reader(
            data,
            &TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN,
            ground_truth,
        )
    }

    fn validate_dataset_reader_explicit_vr<I>(data: &[u8], ground_truth: I)
    where
        I: IntoIterator<Item = DataToken>,
    {
        validate_dataset_reader(
            data,
            &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
            ground_truth,
        )
    }

    fn validate_dataset_reader<I>(data: &[u8], ts: &TransferSyntax, ground_truth: I)
    where
        I: IntoIterator<Item = DataToken>,
    {
        let mut dset_reader =
            DataSetReader::new(data, ts, StandardDataDictionary, ReadOptions::default())
                .unwrap();

        let iter = (&mut dset_reader).into_iter();
        let mut ground_truth = ground_truth.into_iter();

        while let Some(gt_token) = ground_truth.next() {
            let token = iter
                .next()
                .expect("expecting more tokens from reader")
                .expect("should fetch the next token without an error");
            assert_eq!(token, gt_token);
        }

        let extra: Vec<_> = iter.collect();
        assert_eq!(
            extra.len(), // we have already read all of them
            0,
            "extraneous tokens remaining: {:?}",
            extra,
        );
        assert_eq!(
            dset_reader.position(),
            data.len(),
            "Decoder position did not match end of data",
        );
        assert_eq!(dset_reader.state(), ReaderState::ReadingElements);
    }

    /// Collect tokens until the first error.
    fn read_until_error(
        data: &[u8],
        ts: &TransferSyntax,
        options: ReadOptions,
    ) -> (Vec<DataToken>, Option<Error>, Vec<Warning>) {
        let mut reader = DataSetReader::new(data, ts, StandardDataDictionary, options).unwrap();
        let mut tokens = Vec::new();
        let mut error = None;
        for token in &mut reader {
            match token {
                Ok(token) => tokens.push(token),
                Err(e) => error = Some(e),
            }
        }
        (tokens, error, reader.take_warnings())
    }

    #[test]
    fn read_sequence_explicit() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x18, 0x00, 0x11, 0x60, // sequence tag: (0018,6011) SequenceOfUltrasoundRegions
            b'S', b'Q', // VR
            0x00, 0x00, // reserved
            0x2e, 0x00, 0x00, 0x00, // length: 28 + 18 = 46 (#= 2)
            // -- 12 --
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x14, 0x00, 0x00, 0x00, // item length: 20 (#= 2)
            // -- 20 --
            0x18, 0x00, 0x12, 0x60, b'U', b'S', 0x02, 0x00, 0x01, 0x00, // (0018,6012) RegionSpatialFormat, len = 2, value = 1
            // -- 30 --
            0x18, 0x00, 0x14, 0x60, b'U', b'S', 0x02, 0x00, 0x02, 0x00, // (0018,6014) RegionDataType, len = 2, value = 2
            // -- 40 --
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x0a, 0x00, 0x00, 0x00, // item length: 10 (#= 1)
            // -- 48 --
            0x18, 0x00, 0x12, 0x60, b'U', b'S', 0x02, 0x00, 0x04, 0x00, // (0018,6012) RegionSpatialFormat, len = 2, value = 4
            // -- 58 --
            0x20, 0x00, 0x00, 0x40, b'L', b'T', 0x04, 0x00, // (0020,4000) ImageComments, len = 4
            b'T', b'E', b'S', b'T', // value = "TEST"
        ];

        let ground_truth = vec![
            DataToken::SequenceStart {
                tag: Tag(0x0018, 0x6011),
                len: Length(46),
            },
            DataToken::ItemStart { len: Length(20) },
            header((0x0018, 0x6012), VR::US, 2),
            clean(dicom_value!(U16, [1])),
            header((0x0018, 0x6014), VR::US, 2),
            clean(dicom_value!(U16, [2])),
            DataToken::ItemEnd,
            DataToken::ItemStart { len: Length(10) },
            header((0x0018, 0x6012), VR::US, 2),
            clean(dicom_value!(U16, [4])),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
            header((0x0020, 0x4000), VR::LT, 4),
            clean(dicom_value!(Str, "TEST")),
        ];

        validate_dataset_reader_explicit_vr(DATA, ground_truth);
    }

    #[test]
    fn read_sequence_implicit_undefined_length() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, // (0008,1115) ReferencedSeriesSequence
            0xFF, 0xFF, 0xFF, 0xFF, // length: undefined
            // -- 8 --
            0xFE, 0xFF, 0x00, 0xE0, // item start tag
            0xFF, 0xFF, 0xFF, 0xFF, // item length: undefined
            // -- 16 --
            0x20, 0x00, 0x0E, 0x00, // (0020,000E) SeriesInstanceUID
            0x04, 0x00, 0x00, 0x00, // length: 4
            b'1', b'.', b'2', 0x00,
            // -- 28 --
            0xFE, 0xFF, 0x0D, 0xE0, // item end
            0x00, 0x00, 0x00, 0x00,
            // -- 36 --
            0xFE, 0xFF, 0x00, 0xE0, // item start tag
            0x00, 0x00, 0x00, 0x00, // item length: 0
            // -- 44 --
            0xFE, 0xFF, 0xDD, 0xE0, // sequence end
            0x00, 0x00, 0x00, 0x00,
            // -- 52 --
            0x20, 0x00, 0x00, 0x40, // (0020,4000) ImageComments
            0x04, 0x00, 0x00, 0x00, // length: 4
            b'T', b'E', b'S', b'T', // value = "TEST"
        ];

        let ground_truth = vec![
            DataToken::SequenceStart {
                tag: Tag(0x0008, 0x1115),
                len: Length::UNDEFINED,
            },
            DataToken::ItemStart {
                len: Length::UNDEFINED,
            },
            header((0x0020, 0x000E), VR::UI, 4),
            clean(dicom_value!(Strs, ["1.2"])),
            DataToken::ItemEnd,
            DataToken::ItemStart { len: Length(0) },
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
            header((0x0020, 0x4000), VR::LT, 4),
            clean(dicom_value!(Str, "TEST")),
        ];

        validate_dataset_reader_implicit_vr(DATA, ground_truth);
    }

    #[test]
    fn read_empty_sequences() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, // (0008,1115) ReferencedSeriesSequence
            b'S', b'Q', 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, // length: 0
            0x08, 0x00, 0x40, 0x11, // (0008,1140) ReferencedImageSequence
            b'S', b'Q', 0x00, 0x00,
            0xFF, 0xFF, 0xFF, 0xFF, // length: undefined
            0xFE, 0xFF, 0xDD, 0xE0, // sequence end
            0x00, 0x00, 0x00, 0x00,
        ];

        let ground_truth = vec![
            DataToken::SequenceStart {
                tag: Tag(0x0008, 0x1115),
                len: Length(0),
            },
            DataToken::SequenceEnd,
            DataToken::SequenceStart {
                tag: Tag(0x0008, 0x1140),
                len: Length::UNDEFINED,
            },
            DataToken::SequenceEnd,
        ];

        validate_dataset_reader_explicit_vr(DATA, ground_truth);
    }

    #[test]
    fn read_encapsulated_pixeldata() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0xe0, 0x7f, 0x10, 0x00, // (7FE0, 0010) PixelData
            b'O', b'B', // VR
            0x00, 0x00, // reserved
            0xff, 0xff, 0xff, 0xff, // length: undefined
            // -- 12 -- Basic offset table
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x08, 0x00, 0x00, 0x00, // item length: 8
            0x00, 0x00, 0x00, 0x00, // first offset
            0x20, 0x00, 0x00, 0x00, // second offset
            // -- 28 -- First fragment of pixel data
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x20, 0x00, 0x00, 0x00, // item length: 32
            0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99,
            0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99,
            0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99,
            0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99,
            // -- 68 -- Second fragment of pixel data
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x04, 0x00, 0x00, 0x00, // item length: 4
            0x66, 0x66, 0x66, 0x66,
            // -- 80 -- End of pixel data
            0xfe, 0xff, 0xdd, 0xe0, // sequence end tag
            0x00, 0x00, 0x00, 0x00,
            // -- 88 -- padding
            0xfc, 0xff, 0xfc, 0xff, // (fffc,fffc) DataSetTrailingPadding
            b'O', b'B', // VR
            0x00, 0x00, // reserved
            0x08, 0x00, 0x00, 0x00, // length: 8
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];

        let ground_truth = vec![
            DataToken::PixelSequenceStart(DataElementHeader::new(
                Tag::PIXEL_DATA,
                VR::OB,
                Length::UNDEFINED,
            )),
            DataToken::ItemStart { len: Length(8) },
            DataToken::OffsetTable(vec![0, 32]),
            DataToken::ItemEnd,
            DataToken::ItemStart { len: Length(32) },
            DataToken::ItemValue(vec![0x99; 32]),
            DataToken::ItemEnd,
            DataToken::ItemStart { len: Length(4) },
            DataToken::ItemValue(vec![0x66; 4]),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
            header((0xFFFC, 0xFFFC), VR::OB, 8),
            clean(PrimitiveValue::U8([0; 8].as_ref().into())),
        ];

        validate_dataset_reader_explicit_vr(DATA, ground_truth);
    }

    #[test]
    fn read_encapsulated_pixeldata_empty_offset_table() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0xe0, 0x7f, 0x10, 0x00, // (7FE0, 0010) PixelData
            b'O', b'B', 0x00, 0x00,
            0xff, 0xff, 0xff, 0xff, // length: undefined
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x00, 0x00, 0x00, 0x00, // item length: 0
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x02, 0x00, 0x00, 0x00, // item length: 2
            0x01, 0x02,
            0xfe, 0xff, 0xdd, 0xe0, // sequence end tag
            0x00, 0x00, 0x00, 0x00,
        ];

        let ground_truth = vec![
            DataToken::PixelSequenceStart(DataElementHeader::new(
                Tag::PIXEL_DATA,
                VR::OB,
                Length::UNDEFINED,
            )),
            DataToken::ItemStart { len: Length(0) },
            DataToken::OffsetTable(vec![]),
            DataToken::ItemEnd,
            DataToken::ItemStart { len: Length(2) },
            DataToken::ItemValue(vec![1, 2]),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
        ];

        validate_dataset_reader_explicit_vr(DATA, ground_truth);
    }

    #[test]
    fn stray_item_delimiter_is_skipped() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x60, 0x00, // (0008,0060) Modality
            b'C', b'S', 0x02, 0x00,
            b'M', b'R',
            0xFE, 0xFF, 0x0D, 0xE0, // item end, outside of any item
            0x00, 0x00, 0x00, 0x00,
            0x10, 0x00, 0x10, 0x00, // (0010,0010) PatientName
            b'P', b'N', 0x04, 0x00,
            b'D', b'o', b'e', b' ',
        ];

        let (tokens, error, warnings) = read_until_error(
            DATA,
            &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
            ReadOptions::default(),
        );
        assert!(error.is_none());
        assert_eq!(tokens.len(), 4);
        assert_eq!(
            warnings,
            vec![Warning::StrayDelimiter {
                tag: Tag::ITEM_DELIMITER,
                offset: 10,
            }]
        );
    }

    #[test]
    fn item_delimiter_does_not_close_defined_length_item() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, // (0008,1115) ReferencedSeriesSequence
            b'S', b'Q', 0x00, 0x00,
            0x1A, 0x00, 0x00, 0x00, // length: 26
            // -- 12 --
            0xFE, 0xFF, 0x00, 0xE0, // item start
            0x12, 0x00, 0x00, 0x00, // length: 18
            // -- 20 --
            0x08, 0x00, 0x60, 0x00, // (0008,0060) Modality
            b'C', b'S', 0x02, 0x00,
            b'M', b'R',
            // -- 30 --
            0xFE, 0xFF, 0x0D, 0xE0, // item end, inside a defined length item
            0x00, 0x00, 0x00, 0x00,
            // -- 38 --
            0x10, 0x00, 0x10, 0x00, // (0010,0010) PatientName
            b'P', b'N', 0x04, 0x00,
            b'D', b'o', b'e', b' ',
        ];

        let (tokens, error, warnings) = read_until_error(
            DATA,
            &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
            ReadOptions::default(),
        );
        assert!(error.is_none());
        assert_eq!(
            warnings,
            vec![Warning::StrayDelimiter {
                tag: Tag::ITEM_DELIMITER,
                offset: 30,
            }]
        );
        assert_eq!(tokens.len(), 8);
        assert_eq!(tokens[4], DataToken::ItemEnd);
        assert_eq!(tokens[5], DataToken::SequenceEnd);
        assert_eq!(
            tokens[6],
            DataToken::ElementHeader(DataElementHeader::new(
                Tag(0x0010, 0x0010),
                VR::PN,
                Length(4)
            ))
        );
    }

    #[rustfmt::skip]
    static UNORDERED: &[u8] = &[
        0x10, 0x00, 0x20, 0x00, // (0010,0020) PatientID
        b'L', b'O', 0x02, 0x00,
        b'4', b'2',
        0x10, 0x00, 0x10, 0x00, // (0010,0010) PatientName
        b'P', b'N', 0x04, 0x00,
        b'D', b'o', b'e', b' ',
    ];

    #[test]
    fn out_of_order_element_stops_reading() {
        let (tokens, error, _) = read_until_error(
            UNORDERED,
            &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
            ReadOptions::default(),
        );
        assert_eq!(tokens.len(), 2);
        assert!(matches!(
            error,
            Some(Error::TagOrder {
                tag: Tag(0x0010, 0x0010),
                previous: Tag(0x0010, 0x0020),
                offset: 10,
                ..
            })
        ));
    }

    #[test]
    fn out_of_order_element_with_lenient_options() {
        let (tokens, error, warnings) = read_until_error(
            UNORDERED,
            &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
            ReadOptions::default().require_ordered_elements(false),
        );
        assert!(error.is_none());
        assert_eq!(tokens.len(), 4);
        assert_eq!(
            warnings,
            vec![Warning::TagOrder {
                tag: Tag(0x0010, 0x0010),
                previous: Tag(0x0010, 0x0020),
                offset: 10,
            }]
        );
    }

    #[test]
    fn read_unknown_sequence_as_implicit_vr() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, // (0008,1115) ReferencedSeriesSequence
            b'U', b'N', 0x00, 0x00, // VR: UN
            0xFF, 0xFF, 0xFF, 0xFF, // length: undefined
            // -- 12 -- implicit VR little endian from here
            0xFE, 0xFF, 0x00, 0xE0, // item start tag
            0xFF, 0xFF, 0xFF, 0xFF, // item length: undefined
            0x20, 0x00, 0x11, 0x00, // (0020,0011) SeriesNumber
            0x02, 0x00, 0x00, 0x00, // length: 2
            b'7', b' ',
            0xFE, 0xFF, 0x0D, 0xE0, // item end
            0x00, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0xDD, 0xE0, // sequence end
            0x00, 0x00, 0x00, 0x00,
            // -- 46 -- back to explicit VR
            0x20, 0x00, 0x00, 0x40, b'L', b'T', 0x04, 0x00, // (0020,4000) ImageComments
            b'T', b'E', b'S', b'T',
        ];

        let ground_truth = vec![
            DataToken::SequenceStart {
                tag: Tag(0x0008, 0x1115),
                len: Length::UNDEFINED,
            },
            DataToken::ItemStart {
                len: Length::UNDEFINED,
            },
            header((0x0020, 0x0011), VR::IS, 2),
            clean(dicom_value!(I32, [7])),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
            header((0x0020, 0x4000), VR::LT, 4),
            clean(dicom_value!(Str, "TEST")),
        ];

        validate_dataset_reader_explicit_vr(DATA, ground_truth);
    }

    #[test]
    fn undefined_length_followed_by_items_is_recovered() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x09, 0x00, 0x10, 0x10, // (0009,1010) private
            b'O', b'B', 0x00, 0x00,
            0xFF, 0xFF, 0xFF, 0xFF, // length: undefined
            0xFE, 0xFF, 0x00, 0xE0, // item start tag
            0x00, 0x00, 0x00, 0x00, // item length: 0
            0xFE, 0xFF, 0xDD, 0xE0, // sequence end
            0x00, 0x00, 0x00, 0x00,
        ];

        let (tokens, error, warnings) = read_until_error(
            DATA,
            &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
            ReadOptions::default(),
        );
        assert!(error.is_none());
        assert_eq!(
            tokens,
            vec![
                DataToken::SequenceStart {
                    tag: Tag(0x0009, 0x1010),
                    len: Length::UNDEFINED,
                },
                DataToken::ItemStart { len: Length(0) },
                DataToken::ItemEnd,
                DataToken::SequenceEnd,
            ]
        );
        assert_eq!(
            warnings,
            vec![Warning::RecoveredUndefinedLength {
                tag: Tag(0x0009, 0x1010),
                vr: VR::OB,
                offset: 0,
            }]
        );
    }

    #[test]
    fn undefined_length_text_is_unsupported() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x60, 0x00, // (0008,0060) Modality
            b'C', b'S', 0x02, 0x00,
            b'M', b'R',
            // -- 10 --
            0x10, 0x00, 0x00, 0x40, // (0010,4000) PatientComments
            b'U', b'T', 0x00, 0x00,
            0xFF, 0xFF, 0xFF, 0xFF, // length: undefined
            b'x', b' ',
        ];

        let (tokens, error, _) = read_until_error(
            DATA,
            &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
            ReadOptions::default(),
        );
        assert_eq!(tokens.len(), 2);
        assert!(matches!(
            error,
            Some(Error::UnsupportedUndefinedLength {
                tag: Tag(0x0010, 0x4000),
                vr: VR::UT,
                offset: 10,
                ..
            })
        ));
    }

    #[test]
    fn truncated_value_reports_buffer_end() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x10, 0x00, 0x10, 0x00, // (0010,0010) PatientName
            b'P', b'N', 0x08, 0x00, // length: 8
            b'D', b'o', b'e',       // cut here
        ];

        let (tokens, error, _) = read_until_error(
            DATA,
            &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
            ReadOptions::default(),
        );
        assert_eq!(tokens, vec![header((0x0010, 0x0010), VR::PN, 8)]);
        let error = error.unwrap();
        assert!(matches!(error, Error::UnexpectedEndOfStream { offset: 11, .. }));
        assert_eq!(error.offset(), Some(11));
    }

    #[test]
    fn unterminated_sequence_reports_buffer_end() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, // (0008,1115) ReferencedSeriesSequence
            b'S', b'Q', 0x00, 0x00,
            0xFF, 0xFF, 0xFF, 0xFF, // length: undefined
            0xFE, 0xFF, 0x00, 0xE0, // item start tag
            0xFF, 0xFF, 0xFF, 0xFF, // item length: undefined
        ];

        let (tokens, error, _) = read_until_error(
            DATA,
            &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
            ReadOptions::default(),
        );
        assert_eq!(tokens.len(), 2);
        assert!(matches!(
            error,
            Some(Error::UnexpectedEndOfStream { offset: 20, .. })
        ));
    }

    #[test]
    fn item_overrunning_its_length_is_a_mismatch() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, // (0008,1115) ReferencedSeriesSequence
            b'S', b'Q', 0x00, 0x00,
            0x16, 0x00, 0x00, 0x00, // length: 22
            // -- 12 --
            0xFE, 0xFF, 0x00, 0xE0, // item start tag
            0x08, 0x00, 0x00, 0x00, // item length: 8, but holds 14 bytes
            // -- 20 --
            0x20, 0x00, 0x11, 0x00, // (0020,0011) SeriesNumber
            b'I', b'S', 0x06, 0x00,
            b'1', b'2', b'3', b'4', b'5', b'6',
            // -- 34 --
        ];

        let (tokens, error, _) = read_until_error(
            DATA,
            &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
            ReadOptions::default(),
        );
        assert_eq!(tokens.len(), 4);
        assert!(matches!(
            error,
            Some(Error::StructuralLengthMismatch {
                tag: Tag::ITEM,
                offset: 34,
                expected_end: 28,
                ..
            })
        ));
    }

    #[test]
    fn nesting_beyond_limit_is_rejected() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, // (0008,1115) ReferencedSeriesSequence
            b'S', b'Q', 0x00, 0x00,
            0xFF, 0xFF, 0xFF, 0xFF,
            0xFE, 0xFF, 0x00, 0xE0, // item start tag
            0xFF, 0xFF, 0xFF, 0xFF,
            // -- 20 --
            0x08, 0x00, 0x40, 0x11, // (0008,1140) ReferencedImageSequence
            b'S', b'Q', 0x00, 0x00,
            0xFF, 0xFF, 0xFF, 0xFF,
        ];

        let (tokens, error, _) = read_until_error(
            DATA,
            &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
            ReadOptions::default().max_sequence_depth(1),
        );
        assert_eq!(tokens.len(), 2);
        assert!(matches!(
            error,
            Some(Error::MaxDepthExceeded {
                max: 1,
                offset: 20,
                ..
            })
        ));
    }

    #[test]
    fn odd_offset_table_length_is_rejected() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0xe0, 0x7f, 0x10, 0x00, // (7FE0, 0010) PixelData
            b'O', b'B', 0x00, 0x00,
            0xff, 0xff, 0xff, 0xff,
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x03, 0x00, 0x00, 0x00, // item length: 3
            0x00, 0x00, 0x00,
        ];

        let (_, error, _) = read_until_error(
            DATA,
            &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
            ReadOptions::default(),
        );
        assert!(matches!(
            error,
            Some(Error::InvalidOffsetTableLength { offset: 20, .. })
        ));
    }

    #[test]
    fn charset_applies_to_item_and_not_to_sibling() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, // (0008,1115) ReferencedSeriesSequence
            b'S', b'Q', 0x00, 0x00,
            0xFF, 0xFF, 0xFF, 0xFF,
            // first item: Latin/Cyrillic
            0xFE, 0xFF, 0x00, 0xE0,
            0xFF, 0xFF, 0xFF, 0xFF,
            0x08, 0x00, 0x05, 0x00, // (0008,0005) SpecificCharacterSet
            b'C', b'S', 0x0A, 0x00,
            b'I', b'S', b'O', b'_', b'I', b'R', b' ', b'1', b'4', b'4',
            0x10, 0x00, 0x10, 0x00, // (0010,0010) PatientName
            b'P', b'N', 0x02, 0x00,
            0xBB, 0xDE,
            0xFE, 0xFF, 0x0D, 0xE0,
            0x00, 0x00, 0x00, 0x00,
            // second item: default repertoire
            0xFE, 0xFF, 0x00, 0xE0,
            0xFF, 0xFF, 0xFF, 0xFF,
            0x10, 0x00, 0x10, 0x00, // (0010,0010) PatientName
            b'P', b'N', 0x02, 0x00,
            b'L', b'o',
            0xFE, 0xFF, 0x0D, 0xE0,
            0x00, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0xDD, 0xE0,
            0x00, 0x00, 0x00, 0x00,
        ];

        let (tokens, error, warnings) = read_until_error(
            DATA,
            &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
            ReadOptions::default(),
        );
        assert!(error.is_none());
        assert!(warnings.is_empty());
        let names: Vec<_> = tokens
            .iter()
            .filter_map(|token| match token {
                DataToken::PrimitiveValue(PrimitiveValue::Strs(v), _) => Some(v[0].clone()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["ISO_IR 144", "Ло", "Lo"]);
    }

    #[test]
    fn private_element_resolved_through_creator() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x09, 0x00, 0x10, 0x00, // (0009,0010) private creator
            0x08, 0x00, 0x00, 0x00,
            b'A', b'C', b'M', b'E', b' ', b'1', b'.', b'0',
            0x09, 0x00, 0x01, 0x10, // (0009,1001) registered as US
            0x02, 0x00, 0x00, 0x00,
            0x2A, 0x00,
            0x09, 0x00, 0x02, 0x10, // (0009,1002) not registered
            0x03, 0x00, 0x00, 0x00,
            0x01, 0x02, 0x03,
        ];

        let private = PrivateDataDictionary::new().with("ACME 1.0", 0x0009, 0x01, VR::US, "AcmeCount");
        let (tokens, error, warnings) = read_until_error(
            DATA,
            &TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN,
            ReadOptions::default().private_dictionary(private),
        );
        assert!(error.is_none());
        assert_eq!(
            tokens,
            vec![
                header((0x0009, 0x0010), VR::LO, 8),
                clean(dicom_value!(Strs, ["ACME 1.0"])),
                header((0x0009, 0x1001), VR::US, 2),
                clean(dicom_value!(U16, [42])),
                header((0x0009, 0x1002), VR::UN, 3),
                DataToken::PrimitiveValue(
                    PrimitiveValue::U8([1, 2, 3].as_ref().into()),
                    ValueFlags {
                        unknown_vr: true,
                        ..Default::default()
                    }
                ),
            ]
        );
        assert_eq!(
            warnings,
            vec![Warning::UnknownVr {
                tag: Tag(0x0009, 0x1002),
                offset: 26,
                code: None,
            }]
        );
    }

    #[test]
    fn stub_dictionary_reads_everything_as_bytes() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x28, 0x00, 0x10, 0x00, // (0028,0010) Rows
            0x02, 0x00, 0x00, 0x00,
            0x00, 0x02,
        ];
        let mut reader = DataSetReader::new(
            DATA,
            &TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN,
            StubDataDictionary,
            ReadOptions::default(),
        )
        .unwrap();
        let tokens: Vec<_> = (&mut reader).collect::<Result<_, _>>().unwrap();
        assert_eq!(
            tokens,
            vec![
                header((0x0028, 0x0010), VR::UN, 2),
                DataToken::PrimitiveValue(
                    PrimitiveValue::U8([0, 2].as_ref().into()),
                    ValueFlags {
                        unknown_vr: true,
                        ..Default::default()
                    }
                ),
            ]
        );
        assert_eq!(reader.warnings().len(), 1);
    }

    #[test]
    fn deflated_transfer_syntax_is_rejected() {
        let err = DataSetReader::new(
            &[],
            &TransferSyntax::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
            StandardDataDictionary,
            ReadOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnsupportedTransferSyntax { .. }));
    }
}
