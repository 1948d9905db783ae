//! Implicit VR header decoding.
//!
//! The stream only holds the tag and a 4-byte length,
//! so the VR comes from a data dictionary.

use crate::cursor::ByteCursor;
use crate::decode::{
    decode_delimitation, Decode, DecodedHeader, ReadLengthSnafu, Result, VrSource,
};
use dcmtlv_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dcmtlv_core::header::{DataElementHeader, Length};
use dcmtlv_core::{Tag, VR};
use snafu::ResultExt;

/// A data element header decoder for implicit VR transfer syntaxes.
///
/// Tags missing from the dictionary are given the VR `UN`.
#[derive(Debug, Default, Clone)]
pub struct ImplicitVrDecoder<D> {
    dict: D,
}

impl<D> ImplicitVrDecoder<D>
where
    D: DataDictionary,
{
    /// Create an implicit VR decoder resolving VRs with the given dictionary.
    pub fn new(dict: D) -> Self {
        ImplicitVrDecoder { dict }
    }

    /// Resolve the VR of an element from its tag alone.
    pub fn resolve_vr(&self, tag: Tag) -> Option<VR> {
        // Pixel Data and Overlay Data are always OW in implicit VR
        if tag == Tag::PIXEL_DATA || (tag.group() & 0xFF01 == 0x6000 && tag.element() == 0x3000)
        {
            return Some(VR::OW);
        }
        self.dict.by_tag(tag).map(|entry| entry.vr().relaxed())
    }
}

impl<D> Decode for ImplicitVrDecoder<D>
where
    D: DataDictionary,
{
    fn decode_header(&self, cursor: &mut ByteCursor<'_>) -> Result<DecodedHeader> {
        let offset = cursor.position();
        let tag = self.decode_tag(cursor)?;

        if tag.group() == 0xFFFE {
            return decode_delimitation(tag, offset, cursor);
        }

        let len = cursor.read_u32().context(ReadLengthSnafu)?;
        let (vr, vr_source) = match self.resolve_vr(tag) {
            Some(vr) => (vr, VrSource::Dictionary),
            None => (VR::UN, VrSource::Unresolved),
        };

        Ok(DecodedHeader {
            header: DataElementHeader::new(tag, vr, Length(len)),
            vr_source,
            offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer_syntax::Endianness;
    use dcmtlv_core::dictionary::stub::StubDataDictionary;
    use dcmtlv_dictionary_std::StandardDataDictionary;

    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x28, 0x00, 0x30, 0x00,     // (0028,0030) Pixel Spacing
            0x08, 0x00, 0x00, 0x00, // Length: 8
                b'0', b'.', b'5', b'\\', b'0', b'.', b'5', b' ',
        0x28, 0x00, 0x06, 0x01,     // (0028,0106) Smallest Image Pixel Value
            0x02, 0x00, 0x00, 0x00, // Length: 2
                0x00, 0x00,
        0x09, 0x00, 0x10, 0x10,     // (0009,1010) private
            0x03, 0x00, 0x00, 0x00, // Length: 3
                0x01, 0x02, 0x03,
        0x02, 0x60, 0x00, 0x30,     // (6002,3000) Overlay Data
            0x00, 0x00, 0x00, 0x00, // Length: 0
        0xE0, 0x7F, 0x10, 0x00,     // (7FE0,0010) Pixel Data
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
    ];

    #[test]
    fn resolves_vr_with_dictionary() {
        let dec = ImplicitVrDecoder::new(StandardDataDictionary);
        let mut cursor = ByteCursor::new(RAW, Endianness::Little);

        let decoded = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(decoded.header.tag, Tag(0x0028, 0x0030));
        assert_eq!(decoded.header.vr, VR::DS);
        assert_eq!(decoded.vr_source, VrSource::Dictionary);
        assert_eq!(decoded.header.len, Length(8));
        cursor.skip(8).unwrap();

        // "US or SS" is relaxed to US
        let decoded = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(decoded.header.vr, VR::US);
        cursor.skip(2).unwrap();

        let decoded = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(decoded.header.tag, Tag(0x0009, 0x1010));
        assert_eq!(decoded.header.vr, VR::UN);
        assert_eq!(decoded.vr_source, VrSource::Unresolved);
        assert_eq!(decoded.header.len, Length(3));
        cursor.skip(3).unwrap();

        let decoded = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(decoded.header.vr, VR::OW);

        let decoded = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(decoded.header.tag, Tag::PIXEL_DATA);
        assert_eq!(decoded.header.vr, VR::OW);
        assert!(decoded.header.len.is_undefined());
        assert!(cursor.is_empty());
    }

    #[test]
    fn odd_overlay_group_is_private() {
        let dec = ImplicitVrDecoder::new(StandardDataDictionary);
        assert_eq!(dec.resolve_vr(Tag(0x6000, 0x3000)), Some(VR::OW));
        assert_eq!(dec.resolve_vr(Tag(0x601E, 0x3000)), Some(VR::OW));
        assert_eq!(dec.resolve_vr(Tag(0x6001, 0x3000)), None);
        assert_eq!(dec.resolve_vr(Tag(0x601F, 0x3000)), None);
        // other overlay attributes follow the same rule
        assert_eq!(dec.resolve_vr(Tag(0x6002, 0x0010)), Some(VR::US));
        assert_eq!(dec.resolve_vr(Tag(0x6003, 0x0010)), None);
    }

    #[test]
    fn stub_dictionary_resolves_nothing() {
        let dec = ImplicitVrDecoder::new(StubDataDictionary);
        let mut cursor = ByteCursor::new(RAW, Endianness::Little);
        let decoded = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(decoded.header.vr, VR::UN);
        assert_eq!(decoded.vr_source, VrSource::Unresolved);
        assert_eq!(cursor.position(), 8);
    }
}
