//! This module contains the data element header decoding logic.
//!
//! A header is the tag, the value representation and the value length
//! at the start of every data element.
//! [`explicit`] reads headers whose VR is written in the stream;
//! [`implicit`] resolves the VR through a data dictionary.
//! Both read numbers in the byte order currently set on the [`ByteCursor`].

use crate::cursor::{self, ByteCursor};
use crate::transfer_syntax::TransferSyntax;
use dcmtlv_core::dictionary::DataDictionary;
use dcmtlv_core::header::{DataElementHeader, Length, SequenceItemHeader, SequenceItemHeaderError};
use dcmtlv_core::Tag;
use snafu::{ResultExt, Snafu};

pub mod explicit;
pub mod implicit;

pub use self::explicit::ExplicitVrDecoder;
pub use self::implicit::ImplicitVrDecoder;

/// Module-level error type:
/// for errors which may occur while decoding element headers.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Failed to read the header's tag field"))]
    ReadTag {
        #[snafu(backtrace)]
        source: cursor::Error,
    },
    #[snafu(display("Failed to read the header's value representation"))]
    ReadVr {
        #[snafu(backtrace)]
        source: cursor::Error,
    },
    #[snafu(display("Failed to read the header's reserved bytes"))]
    ReadReserved {
        #[snafu(backtrace)]
        source: cursor::Error,
    },
    #[snafu(display("Failed to read the header's element length field"))]
    ReadLength {
        #[snafu(backtrace)]
        source: cursor::Error,
    },
    #[snafu(display("Bad sequence item header"))]
    BadSequenceHeader {
        #[snafu(backtrace)]
        source: SequenceItemHeaderError,
    },
}

impl Error {
    /// If the header was cut short by the end of the buffer,
    /// the absolute offset at which the data ran out.
    pub fn end_of_stream_offset(&self) -> Option<usize> {
        match self {
            Error::ReadTag { source }
            | Error::ReadVr { source }
            | Error::ReadReserved { source }
            | Error::ReadLength { source } => Some(source.offset()),
            Error::BadSequenceHeader { .. } => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// How the value representation of a decoded header was obtained.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VrSource {
    /// Read from the stream.
    Explicit,
    /// Looked up in the data dictionary.
    Dictionary,
    /// Not found in the data dictionary. The VR is `UN`.
    Unresolved,
    /// The two VR bytes in the stream are not a known VR code.
    /// The VR is `UN` and the length was read as a 4-byte field.
    Malformed([u8; 2]),
    /// Item and delimitation headers carry no VR.
    Structural,
}

/// A data element header along with decoding details.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DecodedHeader {
    /// the header
    pub header: DataElementHeader,
    /// where the VR came from
    pub vr_source: VrSource,
    /// the absolute position of the header's first byte
    pub offset: usize,
}

/// Type trait for reading and decoding DICOM data element headers
/// from a byte cursor.
pub trait Decode {
    /// Fetch and decode the next data element header from the cursor.
    ///
    /// On failure, the cursor position is unspecified.
    fn decode_header(&self, cursor: &mut ByteCursor<'_>) -> Result<DecodedHeader>;

    /// Fetch and decode the next sequence item header from the cursor.
    ///
    /// Item headers have the same layout in every transfer syntax:
    /// a tag followed by a 4-byte length.
    fn decode_item_header(&self, cursor: &mut ByteCursor<'_>) -> Result<SequenceItemHeader> {
        let tag = self.decode_tag(cursor)?;
        let len = cursor.read_u32().context(ReadLengthSnafu)?;
        SequenceItemHeader::new(tag, Length(len)).context(BadSequenceHeaderSnafu)
    }

    /// Decode a DICOM attribute tag from the cursor.
    fn decode_tag(&self, cursor: &mut ByteCursor<'_>) -> Result<Tag> {
        let group = cursor.read_u16().context(ReadTagSnafu)?;
        let element = cursor.read_u16().context(ReadTagSnafu)?;
        Ok(Tag(group, element))
    }
}

impl<T: ?Sized> Decode for &T
where
    T: Decode,
{
    fn decode_header(&self, cursor: &mut ByteCursor<'_>) -> Result<DecodedHeader> {
        (**self).decode_header(cursor)
    }
}

/// Read the header of an item, item delimiter or sequence delimiter,
/// returning it with a structural VR marker.
pub(crate) fn decode_delimitation(
    tag: Tag,
    offset: usize,
    cursor: &mut ByteCursor<'_>,
) -> Result<DecodedHeader> {
    let len = cursor.read_u32().context(ReadLengthSnafu)?;
    Ok(DecodedHeader {
        header: DataElementHeader::new(tag, dcmtlv_core::VR::UN, Length(len)),
        vr_source: VrSource::Structural,
        offset,
    })
}

/// Read the next data element header
/// using the grammar of the given transfer syntax.
///
/// With implicit VR, the VR is resolved through `dict`.
pub fn read_header<D>(
    cursor: &mut ByteCursor<'_>,
    ts: &TransferSyntax,
    dict: &D,
) -> Result<DecodedHeader>
where
    D: DataDictionary + ?Sized,
{
    if ts.explicit_vr {
        ExplicitVrDecoder.decode_header(cursor)
    } else {
        ImplicitVrDecoder::new(dict).decode_header(cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer_syntax::Endianness;
    use dcmtlv_core::dictionary::stub::StubDataDictionary;
    use dcmtlv_core::VR;

    #[rustfmt::skip]
    const IMPLICIT: &[u8] = &[
        0x10, 0x00, 0x10, 0x00, // (0010,0010)
        0x04, 0x00, 0x00, 0x00, // Length: 4
        b'D', b'o', b'e', b' ',
    ];

    #[rustfmt::skip]
    const EXPLICIT: &[u8] = &[
        0x10, 0x00, 0x10, 0x00, // (0010,0010)
        b'P', b'N',             // VR: PN
        0x04, 0x00,             // Length: 4
        b'D', b'o', b'e', b' ',
    ];

    #[test]
    fn read_header_follows_transfer_syntax() {
        let dict = StubDataDictionary;

        let mut cursor = ByteCursor::new(EXPLICIT, Endianness::Little);
        let decoded = read_header(
            &mut cursor,
            &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
            &dict,
        )
        .unwrap();
        assert_eq!(decoded.header.vr, VR::PN);
        assert_eq!(decoded.vr_source, VrSource::Explicit);
        assert_eq!(cursor.position(), 8);

        let mut cursor = ByteCursor::new(IMPLICIT, Endianness::Little);
        let decoded = read_header(
            &mut cursor,
            &TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN,
            &dict,
        )
        .unwrap();
        // the stub dictionary knows nothing
        assert_eq!(decoded.header.vr, VR::UN);
        assert_eq!(decoded.vr_source, VrSource::Unresolved);
        assert_eq!(decoded.header.len, Length(4));
        assert_eq!(cursor.position(), 8);
    }

    #[test]
    fn truncated_header_reports_offset() {
        let mut cursor = ByteCursor::new(&EXPLICIT[..6], Endianness::Little);
        let err = ExplicitVrDecoder.decode_header(&mut cursor).unwrap_err();
        assert!(matches!(err, Error::ReadLength { .. }));
        assert_eq!(err.end_of_stream_offset(), Some(6));
    }
}
