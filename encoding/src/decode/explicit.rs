//! Explicit VR header decoding, in either byte order.

use crate::cursor::ByteCursor;
use crate::decode::{
    decode_delimitation, Decode, DecodedHeader, ReadLengthSnafu, ReadReservedSnafu, ReadVrSnafu,
    Result, VrSource,
};
use dcmtlv_core::header::{DataElementHeader, Length};
use dcmtlv_core::{Tag, VR};
use snafu::ResultExt;
use tracing::debug;

/// A data element header decoder for explicit VR transfer syntaxes.
///
/// The byte order is taken from the cursor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExplicitVrDecoder;

impl Decode for ExplicitVrDecoder {
    fn decode_header(&self, cursor: &mut ByteCursor<'_>) -> Result<DecodedHeader> {
        let offset = cursor.position();
        let tag = self.decode_tag(cursor)?;

        if tag.group() == 0xFFFE {
            // item delimiters do not have VR or reserved field
            return decode_delimitation(tag, offset, cursor);
        }

        let vr_bytes = cursor.read_bytes(2).context(ReadVrSnafu)?;
        let vr_bytes = [vr_bytes[0], vr_bytes[1]];

        let (vr, vr_source, len) = match VR::from_binary(vr_bytes) {
            Some(vr) if vr.has_long_length() => {
                // PS3.5 7.1.2: 2 reserved bytes, then a 32-bit length
                cursor.skip(2).context(ReadReservedSnafu)?;
                let len = cursor.read_u32().context(ReadLengthSnafu)?;
                (vr, VrSource::Explicit, len)
            }
            Some(vr) => {
                let len = cursor.read_u16().context(ReadLengthSnafu)?;
                (vr, VrSource::Explicit, u32::from(len))
            }
            None => {
                // no reserved field is assumed:
                // the 4-byte length starts where a 2-byte length would
                debug!(
                    "Malformed VR {:02X?} for {} at offset {}, reading as UN",
                    vr_bytes, tag, offset
                );
                let len = cursor.read_u32().context(ReadLengthSnafu)?;
                (VR::UN, VrSource::Malformed(vr_bytes), len)
            }
        };

        Ok(DecodedHeader {
            header: DataElementHeader::new(tag, vr, Length(len)),
            vr_source,
            offset,
        })
    }
}

/// Decode the tag in the cursor without moving it.
pub fn peek_tag(cursor: &ByteCursor<'_>) -> Option<Tag> {
    let mut lookahead = cursor.clone();
    ExplicitVrDecoder.decode_tag(&mut lookahead).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::Error;
    use crate::transfer_syntax::Endianness;
    use dcmtlv_core::header::SequenceItemHeader;

    // manually crafting some DICOM data elements
    #[rustfmt::skip]
    const RAW_LE: &[u8] = &[
        0x02, 0x00, 0x10, 0x00,     // (0002,0010) Transfer Syntax UID
            b'U', b'I',             // VR: UI
            0x14, 0x00,             // Length: 20 bytes
                b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0', b'0', b'0', b'8', b'.',
                b'1', b'.', b'2', b'.', b'1',
                0x00,               // Padding to make length even
        0x08, 0x00, 0x15, 0x11,     // (0008,1115) Referenced Series Sequence
            b'S', b'Q',             // VR: SQ
            0x00, 0x00,             // Reserved
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
        0xFE, 0xFF, 0x00, 0xE0,     // (FFFE,E000) Item
            0x0A, 0x00, 0x00, 0x00, // Length: 10
    ];

    #[rustfmt::skip]
    const RAW_BE: &[u8] = &[
        0x00, 0x28, 0x00, 0x10,     // (0028,0010) Rows
            b'U', b'S',             // VR: US
            0x00, 0x02,             // Length: 2
                0x02, 0x00,         // 512
        0x7F, 0xE0, 0x00, 0x10,     // (7FE0,0010) Pixel Data
            b'O', b'W',             // VR: OW
            0x00, 0x00,             // Reserved
            0x00, 0x00, 0x00, 0x08, // Length: 8
    ];

    #[test]
    fn decode_explicit_le() {
        let dec = ExplicitVrDecoder;
        let mut cursor = ByteCursor::new(RAW_LE, Endianness::Little);

        let decoded = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(decoded.header.tag, Tag(0x0002, 0x0010));
        assert_eq!(decoded.header.vr, VR::UI);
        assert_eq!(decoded.header.len, Length(20));
        assert_eq!(decoded.offset, 0);
        assert_eq!(cursor.position(), 8);
        cursor.skip(20).unwrap();

        let decoded = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(decoded.header.tag, Tag(0x0008, 0x1115));
        assert_eq!(decoded.header.vr, VR::SQ);
        assert!(decoded.header.len.is_undefined());
        assert_eq!(decoded.offset, 28);
        assert_eq!(cursor.position(), 40);

        assert_eq!(peek_tag(&cursor), Some(Tag::ITEM));
        let item = dec.decode_item_header(&mut cursor).unwrap();
        assert_eq!(item, SequenceItemHeader::Item { len: Length(10) });
        assert!(cursor.is_empty());
    }

    #[test]
    fn decode_explicit_be() {
        let dec = ExplicitVrDecoder;
        let mut cursor = ByteCursor::new(RAW_BE, Endianness::Big);

        let decoded = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(decoded.header.tag, Tag(0x0028, 0x0010));
        assert_eq!(decoded.header.vr, VR::US);
        assert_eq!(decoded.header.len, Length(2));
        assert_eq!(cursor.read_u16().unwrap(), 512);

        let decoded = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(decoded.header.tag, Tag::PIXEL_DATA);
        assert_eq!(decoded.header.vr, VR::OW);
        assert_eq!(decoded.header.len, Length(8));
    }

    #[test]
    fn malformed_vr_reads_long_length() {
        #[rustfmt::skip]
        const RAW: &[u8] = &[
            0x09, 0x00, 0x10, 0x10,     // (0009,1010)
                b'?', 0x01,             // not a VR
                0x02, 0x00, 0x00, 0x00, // Length: 2
                0xAB, 0xCD,
        ];
        let mut cursor = ByteCursor::new(RAW, Endianness::Little);
        let decoded = ExplicitVrDecoder.decode_header(&mut cursor).unwrap();
        assert_eq!(decoded.header.vr, VR::UN);
        assert_eq!(decoded.vr_source, VrSource::Malformed([b'?', 0x01]));
        assert_eq!(decoded.header.len, Length(2));
        assert_eq!(cursor.read_bytes(2).unwrap(), &[0xAB, 0xCD]);

        // the same header, cut inside the length field
        let mut cursor = ByteCursor::new(&RAW[..8], Endianness::Little);
        let err = ExplicitVrDecoder.decode_header(&mut cursor).unwrap_err();
        assert!(matches!(err, Error::ReadLength { .. }));
        assert_eq!(err.end_of_stream_offset(), Some(8));
    }

    #[test]
    fn delimiters_have_no_vr() {
        #[rustfmt::skip]
        const RAW: &[u8] = &[
            0xFE, 0xFF, 0xDD, 0xE0,     // (FFFE,E0DD) Sequence Delimitation Item
                0x00, 0x00, 0x00, 0x00, // Length: 0
        ];
        let mut cursor = ByteCursor::new(RAW, Endianness::Little);
        let decoded = ExplicitVrDecoder.decode_header(&mut cursor).unwrap();
        assert_eq!(decoded.header.tag, Tag::SEQUENCE_DELIMITER);
        assert_eq!(decoded.vr_source, VrSource::Structural);
        assert_eq!(decoded.header.len, Length(0));
    }
}
