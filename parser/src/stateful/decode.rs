//! Stateful decoding of element headers and raw values over a byte buffer.
//!
//! The decoder keeps the VR grammar and byte order currently in effect,
//! which may change in the middle of a data set
//! (a `UN` sequence of undefined length is always implicit VR little endian).

use crate::error::{
    DecodeHeaderSnafu, ExpectedItemSnafu, Result, UnexpectedEndOfStreamSnafu,
};
use dcmtlv_core::dictionary::DataDictionary;
use dcmtlv_core::header::{SequenceItemHeader, SequenceItemHeaderError};
use dcmtlv_core::Tag;
use dcmtlv_encoding::cursor::{self, ByteCursor};
use dcmtlv_encoding::decode::{
    explicit, Decode, DecodedHeader, Error as HeaderError, ExplicitVrDecoder, ImplicitVrDecoder,
};
use dcmtlv_encoding::transfer_syntax::{Endianness, TransferSyntax};
use snafu::IntoError;

/// A stateful decoder of data element headers and values.
#[derive(Debug)]
pub struct StatefulDecoder<'a, D> {
    cursor: ByteCursor<'a>,
    explicit_vr: bool,
    dict: D,
}

impl<'a, D> StatefulDecoder<'a, D>
where
    D: DataDictionary,
{
    /// Create a decoder over the given buffer,
    /// starting with the encoding of the given transfer syntax.
    pub fn new(data: &'a [u8], ts: &TransferSyntax, dict: D) -> Self {
        StatefulDecoder {
            cursor: ByteCursor::new(data, ts.endianness),
            explicit_vr: ts.explicit_vr,
            dict,
        }
    }

    /// Decode the next data element header.
    pub fn decode_header(&mut self) -> Result<DecodedHeader> {
        let offset = self.cursor.position();
        let decoded = if self.explicit_vr {
            ExplicitVrDecoder.decode_header(&mut self.cursor)
        } else {
            ImplicitVrDecoder::new(&self.dict).decode_header(&mut self.cursor)
        };
        decoded.map_err(|e| header_error(e, offset))
    }

    /// Decode the next header, which must be an item or a delimiter.
    pub fn decode_item_header(&mut self) -> Result<SequenceItemHeader> {
        let offset = self.cursor.position();
        ExplicitVrDecoder
            .decode_item_header(&mut self.cursor)
            .map_err(|e| match e {
                HeaderError::BadSequenceHeader {
                    source: SequenceItemHeaderError::UnexpectedTag { tag, .. },
                } => ExpectedItemSnafu { tag, offset }.build(),
                e => header_error(e, offset),
            })
    }

    /// Read the next `len` bytes, borrowed from the buffer.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.cursor.read_bytes(len).map_err(end_of_stream)
    }

    /// Read a table of 32-bit unsigned integers
    /// taking `len` bytes, in the current byte order.
    /// The whole table must be in the buffer before any of it is read.
    pub fn read_u32_table(&mut self, len: usize) -> Result<Vec<u32>> {
        let bytes = self.cursor.read_bytes(len).map_err(end_of_stream)?;
        let mut table_cursor = ByteCursor::new(bytes, self.cursor.endianness());
        let mut table = Vec::with_capacity(len / 4);
        for _ in 0..len / 4 {
            table.push(table_cursor.read_u32().map_err(end_of_stream)?);
        }
        Ok(table)
    }

    /// The tag at the current position, without consuming it.
    pub fn peek_tag(&self) -> Option<Tag> {
        explicit::peek_tag(&self.cursor)
    }

    /// The absolute position of the decoder in the buffer.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Whether the whole buffer was consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_empty()
    }

    /// Whether headers are currently read with explicit VR.
    pub fn explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// The byte order currently in effect.
    pub fn endianness(&self) -> Endianness {
        self.cursor.endianness()
    }

    /// Switch the encoding of subsequent headers and values.
    pub fn set_encoding(&mut self, explicit_vr: bool, endianness: Endianness) {
        self.explicit_vr = explicit_vr;
        self.cursor.set_endianness(endianness);
    }
}

fn header_error(e: HeaderError, offset: usize) -> crate::error::Error {
    match e.end_of_stream_offset() {
        Some(offset) => UnexpectedEndOfStreamSnafu { offset }.build(),
        None => DecodeHeaderSnafu { offset }.into_error(e),
    }
}

fn end_of_stream(e: cursor::Error) -> crate::error::Error {
    UnexpectedEndOfStreamSnafu { offset: e.offset() }.build()
}

#[cfg(test)]
mod tests {
    use super::StatefulDecoder;
    use crate::error::Error;
    use dcmtlv_core::dictionary::stub::StubDataDictionary;
    use dcmtlv_core::header::{Length, SequenceItemHeader};
    use dcmtlv_core::{Tag, VR};
    use dcmtlv_encoding::transfer_syntax::{Endianness, TransferSyntax};

    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x08, 0x00, 0x60, 0x00,     // (0008,0060) Modality
            b'C', b'S',             // VR: CS
            0x02, 0x00,             // Length: 2
                b'M', b'R',
        0x08, 0x00, 0x15, 0x11,     // (0008,1115) Referenced Series Sequence
            b'S', b'Q',             // VR: SQ
            0x00, 0x00,             // reserved
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
        0xFE, 0xFF, 0x00, 0xE0,     // Item
            0x00, 0x00, 0x00, 0x00, // Length: 0
        0x10, 0x00, 0x10, 0x00,     // (0010,0010) where an item should be
            0x02, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn decode_headers_and_values() {
        let mut dec =
            StatefulDecoder::new(RAW, &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN, StubDataDictionary);

        let decoded = dec.decode_header().unwrap();
        assert_eq!(decoded.header.tag, Tag(0x0008, 0x0060));
        assert_eq!(decoded.header.vr, VR::CS);
        assert_eq!(dec.read_bytes(2).unwrap(), b"MR");

        let decoded = dec.decode_header().unwrap();
        assert_eq!(decoded.header.vr, VR::SQ);
        assert!(decoded.header.len.is_undefined());
        assert_eq!(dec.peek_tag(), Some(Tag::ITEM));

        let item = dec.decode_item_header().unwrap();
        assert_eq!(item, SequenceItemHeader::Item { len: Length(0) });
        assert_eq!(dec.position(), 30);

        let err = dec.decode_item_header().unwrap_err();
        assert!(matches!(
            err,
            Error::ExpectedItem {
                tag: Tag(0x0010, 0x0010),
                offset: 30,
                ..
            }
        ));
    }

    #[test]
    fn truncated_value_reports_end_of_stream() {
        let mut dec =
            StatefulDecoder::new(&RAW[..9], &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN, StubDataDictionary);
        dec.decode_header().unwrap();
        let err = dec.read_bytes(2).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEndOfStream { offset: 9, .. }));
    }

    #[test]
    fn offset_table_longer_than_buffer() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x00, 0x00, 0x00, 0x00,
            0x10, 0x00, 0x00, 0x00,
        ];
        let mut dec =
            StatefulDecoder::new(raw, &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN, StubDataDictionary);
        let err = dec.read_u32_table(0xFFFF_FFF0).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEndOfStream { offset: 8, .. }));
        assert_eq!(dec.position(), 0);

        assert_eq!(dec.read_u32_table(8).unwrap(), vec![0, 16]);
        assert!(dec.is_at_end());
    }

    #[test]
    fn switch_to_implicit_little_endian() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x00, 0x08, 0x00, 0x60, // (0008,0060) big endian
                b'C', b'S', 0x00, 0x02,
                    b'M', b'R',
            0x10, 0x00, 0x10, 0x00, // (0010,0010) implicit little endian
                0x02, 0x00, 0x00, 0x00,
                    b'X', b' ',
        ];
        let mut dec =
            StatefulDecoder::new(raw, &TransferSyntax::EXPLICIT_VR_BIG_ENDIAN, StubDataDictionary);
        assert_eq!(dec.decode_header().unwrap().header.len, Length(2));
        dec.read_bytes(2).unwrap();

        dec.set_encoding(false, Endianness::Little);
        assert!(!dec.explicit_vr());
        let decoded = dec.decode_header().unwrap();
        assert_eq!(decoded.header.tag, Tag(0x0010, 0x0010));
        assert_eq!(decoded.header.vr, VR::UN);
        assert_eq!(decoded.header.len, Length(2));
        assert_eq!(dec.read_bytes(2).unwrap(), b"X ");
        assert!(dec.is_at_end());
    }
}
