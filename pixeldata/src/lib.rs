//! This crate splits the _Pixel Data_ element of a decoded data set
//! into frames, ready to be handed to a pixel codec.
//!
//! - Native pixel data, of a defined length,
//!   is validated against the [`PixelGeometry`] of the data set
//!   and sliced into frames of equal size.
//! - Encapsulated pixel data, of undefined length,
//!   has its fragments grouped into frames
//!   by the Extended Offset Table, the Basic Offset Table,
//!   or one fragment per frame in the absence of both.
//!
//! Decompression is not done here.
//! See [`codec::PixelCodec`] for the interface expected of codecs.
//!
//! # Example
//!
//! ```
//! # use dcmtlv_core::dicom_value;
//! # use dcmtlv_core::header::{DataElement, DataElementHeader, Length};
//! # use dcmtlv_core::VR;
//! # use dcmtlv_dictionary_std::tags;
//! use dcmtlv_pixeldata::{extract, PixelGeometry};
//!
//! # let pixel_data: dcmtlv_parser::InMemElement = DataElement::new(
//! #     DataElementHeader::new(tags::PIXEL_DATA, VR::OB, Length(8)),
//! #     dicom_value!(U8, [1, 2, 3, 4, 5, 6, 7, 8]),
//! # );
//! let geometry = PixelGeometry::new(2, 2, 1, 8, 2);
//! let payload = extract(&pixel_data, &geometry)?;
//! assert_eq!(payload.number_of_frames(), 2);
//! assert_eq!(&payload.frame(1).unwrap()[..], &[5, 6, 7, 8]);
//! # Ok::<_, dcmtlv_pixeldata::Error>(())
//! ```
use byteorder::{ByteOrder, LittleEndian};
use dcmtlv_core::value::{PrimitiveValue, Value, ValueType};
use dcmtlv_parser::InMemElement;
use snafu::{ensure, Backtrace, Snafu};
use std::borrow::Cow;

pub mod attribute;
pub mod codec;
mod encapsulation;

pub use attribute::{ExtendedOffsetTable, PixelGeometry};
pub use codec::PixelCodec;

#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The length of native pixel data does not match the geometry.
    #[snafu(display(
        "Pixel data has {} bytes, but the image attributes require {}",
        actual,
        expected
    ))]
    PixelGeometryMismatch {
        expected: u64,
        actual: u64,
        backtrace: Backtrace,
    },

    /// Frames of native pixel data do not start on byte boundaries.
    #[snafu(display("Frames of {} bits are not byte aligned", frame_bits))]
    UnalignedFrames { frame_bits: u64, backtrace: Backtrace },

    /// An offset table entry does not point to the start of a fragment.
    #[snafu(display("Offset table entry #{} ({}) does not start a fragment", index, offset))]
    InvalidOffsetTable {
        index: usize,
        offset: u64,
        backtrace: Backtrace,
    },

    /// Without an offset table,
    /// fragments can only be mapped to frames one to one.
    #[snafu(display(
        "Cannot split {} fragments into {} frames without an offset table",
        fragments,
        frames
    ))]
    UnsupportedFragmentation {
        fragments: usize,
        frames: u32,
        backtrace: Backtrace,
    },

    /// The element value is not pixel data.
    #[snafu(display("Invalid pixel data value of type {:?}", value_type))]
    InvalidPixelData {
        value_type: ValueType,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// One frame of encapsulated pixel data, made of one or more fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncapsulatedFrame<'a> {
    fragments: Vec<&'a [u8]>,
}

impl<'a> EncapsulatedFrame<'a> {
    pub fn new(fragments: Vec<&'a [u8]>) -> Self {
        EncapsulatedFrame { fragments }
    }

    pub fn fragments(&self) -> &[&'a [u8]] {
        &self.fragments
    }

    /// The total number of bytes in the frame's fragments.
    pub fn len(&self) -> usize {
        self.fragments.iter().map(|f| f.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The frame as a single buffer.
    /// Fragments are only copied when there is more than one.
    pub fn to_bytes(&self) -> Cow<'a, [u8]> {
        match self.fragments.as_slice() {
            [] => Cow::Borrowed(&[][..]),
            [single] => Cow::Borrowed(*single),
            many => Cow::Owned(many.concat()),
        }
    }
}

/// The frames of a _Pixel Data_ element.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelPayload<'a> {
    /// Native frames, with samples wider than a byte in little endian.
    Native(Vec<Cow<'a, [u8]>>),
    /// Compressed frames.
    Encapsulated(Vec<EncapsulatedFrame<'a>>),
}

impl<'a> PixelPayload<'a> {
    pub fn is_encapsulated(&self) -> bool {
        matches!(self, PixelPayload::Encapsulated(_))
    }

    pub fn number_of_frames(&self) -> usize {
        match self {
            PixelPayload::Native(frames) => frames.len(),
            PixelPayload::Encapsulated(frames) => frames.len(),
        }
    }

    /// The bytes of the frame at the given index.
    pub fn frame(&self, index: usize) -> Option<Cow<'_, [u8]>> {
        match self {
            PixelPayload::Native(frames) => frames.get(index).map(|f| Cow::Borrowed(&f[..])),
            PixelPayload::Encapsulated(frames) => frames.get(index).map(|f| f.to_bytes()),
        }
    }
}

/// Split the value of a _Pixel Data_ element into frames.
///
/// Native pixel data must have exactly the size required by `geometry`,
/// plus at most one padding byte.
/// Frames are only sliced when they start on byte boundaries.
pub fn extract<'a>(element: &'a InMemElement, geometry: &PixelGeometry) -> Result<PixelPayload<'a>> {
    match element.value() {
        Value::PixelSequence(seq) => {
            let frames = encapsulation::group_fragments(
                seq.fragments(),
                seq.offset_table(),
                geometry.extended_offset_table.as_ref(),
                geometry.number_of_frames,
            )?;
            Ok(PixelPayload::Encapsulated(frames))
        }
        Value::Primitive(value) => {
            let data = native_bytes(value)?;
            split_native(data, geometry).map(PixelPayload::Native)
        }
        Value::Sequence(_) => InvalidPixelDataSnafu {
            value_type: ValueType::Item,
        }
        .fail(),
    }
}

/// The bytes of a native pixel data value in little endian.
fn native_bytes(value: &PrimitiveValue) -> Result<Cow<'_, [u8]>> {
    fn to_le<T: Copy>(values: &[T], width: usize, write: fn(&[T], &mut [u8])) -> Cow<'static, [u8]> {
        let mut out = vec![0; values.len() * width];
        write(values, &mut out);
        Cow::Owned(out)
    }

    Ok(match value {
        PrimitiveValue::Empty => Cow::Borrowed(&[][..]),
        PrimitiveValue::U8(v) => Cow::Borrowed(&v[..]),
        PrimitiveValue::U16(v) => to_le(&v[..], 2, LittleEndian::write_u16_into),
        PrimitiveValue::I16(v) => to_le(&v[..], 2, LittleEndian::write_i16_into),
        PrimitiveValue::U32(v) => to_le(&v[..], 4, LittleEndian::write_u32_into),
        PrimitiveValue::F32(v) => to_le(&v[..], 4, LittleEndian::write_f32_into),
        PrimitiveValue::F64(v) => to_le(&v[..], 8, LittleEndian::write_f64_into),
        PrimitiveValue::U64(v) => to_le(&v[..], 8, LittleEndian::write_u64_into),
        other => {
            return InvalidPixelDataSnafu {
                value_type: other.value_type(),
            }
            .fail()
        }
    })
}

fn split_native<'a>(data: Cow<'a, [u8]>, geometry: &PixelGeometry) -> Result<Vec<Cow<'a, [u8]>>> {
    let expected = geometry.total_size();
    let actual = data.len() as u64;
    // odd sizes are padded to even length
    let padded = actual == expected + 1 && expected % 2 == 1;
    ensure!(
        actual == expected || padded,
        PixelGeometryMismatchSnafu { expected, actual }
    );
    let data = trim(data, expected as usize);

    if geometry.number_of_frames == 1 {
        return Ok(vec![data]);
    }
    let frame_size = match geometry.frame_size() {
        Some(size) => size as usize,
        None => {
            return UnalignedFramesSnafu {
                frame_bits: geometry.frame_bits(),
            }
            .fail()
        }
    };
    if frame_size == 0 {
        return Ok(vec![Cow::Borrowed(&[][..]); geometry.number_of_frames as usize]);
    }

    Ok(match data {
        Cow::Borrowed(data) => data.chunks_exact(frame_size).map(Cow::Borrowed).collect(),
        Cow::Owned(data) => data
            .chunks_exact(frame_size)
            .map(|chunk| Cow::Owned(chunk.to_vec()))
            .collect(),
    })
}

fn trim(data: Cow<'_, [u8]>, len: usize) -> Cow<'_, [u8]> {
    match data {
        Cow::Borrowed(data) => Cow::Borrowed(&data[..len]),
        Cow::Owned(mut data) => {
            data.truncate(len);
            Cow::Owned(data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmtlv_core::dicom_value;
    use dcmtlv_core::header::{DataElement, DataElementHeader, Length};
    use dcmtlv_core::value::PixelFragmentSequence;
    use dcmtlv_core::VR;
    use dcmtlv_dictionary_std::tags;
    use rstest::rstest;

    fn native(vr: VR, value: PrimitiveValue) -> InMemElement {
        DataElement::new(DataElementHeader::new(tags::PIXEL_DATA, vr, Length(0)), value)
    }

    fn encapsulated(offset_table: Vec<u32>, fragments: Vec<Vec<u8>>) -> InMemElement {
        DataElement::new(
            DataElementHeader::new(tags::PIXEL_DATA, VR::OB, Length::UNDEFINED),
            PixelFragmentSequence::new(offset_table, fragments),
        )
    }

    #[test]
    fn native_frames_in_order() {
        let element = native(VR::OB, PrimitiveValue::U8((0..12).collect()));
        let geometry = PixelGeometry::new(2, 2, 1, 8, 3);
        let payload = extract(&element, &geometry).unwrap();
        assert!(!payload.is_encapsulated());
        assert_eq!(
            payload,
            PixelPayload::Native(vec![
                Cow::Borrowed(&[0, 1, 2, 3][..]),
                Cow::Borrowed(&[4, 5, 6, 7][..]),
                Cow::Borrowed(&[8, 9, 10, 11][..]),
            ])
        );
    }

    #[test]
    fn native_words_in_little_endian() {
        let element = native(VR::OW, dicom_value!(U16, [0x0102, 0x0304]));
        let geometry = PixelGeometry::new(1, 1, 1, 16, 2);
        let payload = extract(&element, &geometry).unwrap();
        assert_eq!(payload.frame(0).unwrap().as_ref(), &[0x02, 0x01]);
        assert_eq!(payload.frame(1).unwrap().as_ref(), &[0x04, 0x03]);
    }

    #[rstest]
    #[case(PixelGeometry::new(2, 2, 1, 8, 3), 11)]
    #[case(PixelGeometry::new(2, 2, 1, 8, 3), 13)]
    #[case(PixelGeometry::new(2, 2, 3, 8, 1), 4)]
    #[case(PixelGeometry::new(2, 2, 1, 16, 1), 9)]
    fn native_size_mismatch(#[case] geometry: PixelGeometry, #[case] len: u8) {
        let element = native(VR::OB, PrimitiveValue::U8((0..len).collect()));
        let err = extract(&element, &geometry).unwrap_err();
        assert!(matches!(
            err,
            Error::PixelGeometryMismatch { actual, .. } if actual == u64::from(len)
        ));
    }

    #[rstest]
    // 3 x 3 x 1 bit = 9 bits, padded to 2 bytes
    #[case(PixelGeometry::new(3, 3, 1, 1, 1), 2)]
    // 3 x 1 x 3 bytes = 9 bytes, padded to 10
    #[case(PixelGeometry::new(3, 1, 3, 8, 1), 10)]
    fn native_padding_is_dropped(#[case] geometry: PixelGeometry, #[case] len: u8) {
        let element = native(VR::OB, PrimitiveValue::U8((0..len).collect()));
        let payload = extract(&element, &geometry).unwrap();
        assert_eq!(payload.number_of_frames(), 1);
        assert_eq!(payload.frame(0).unwrap().len() as u64, geometry.total_size());
    }

    #[test]
    fn bit_packed_frames_are_not_split() {
        // two frames of 3 x 3 bits
        let element = native(VR::OB, dicom_value!(U8, [0xFF, 0x01, 0x00, 0x00]));
        let geometry = PixelGeometry::new(3, 3, 1, 1, 2);
        let err = extract(&element, &geometry).unwrap_err();
        assert!(matches!(err, Error::UnalignedFrames { frame_bits: 9, .. }));
    }

    #[test]
    fn encapsulated_with_basic_offset_table() {
        // frame 1 is the first fragment, frame 2 the remaining two
        let element = encapsulated(vec![0, 12], vec![vec![1; 4], vec![2; 2], vec![3; 2]]);
        let geometry = PixelGeometry::new(8, 8, 1, 8, 2);
        let payload = extract(&element, &geometry).unwrap();
        assert!(payload.is_encapsulated());
        assert_eq!(payload.number_of_frames(), 2);
        assert_eq!(payload.frame(0).unwrap().as_ref(), &[1, 1, 1, 1]);
        assert_eq!(payload.frame(1).unwrap().as_ref(), &[2, 2, 3, 3]);

        match &payload {
            PixelPayload::Encapsulated(frames) => {
                assert_eq!(frames[1].fragments().len(), 2);
                assert!(matches!(frames[0].to_bytes(), Cow::Borrowed(_)));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn encapsulated_with_empty_offset_table() {
        let element = encapsulated(vec![], vec![vec![1; 4], vec![2; 2]]);
        let payload = extract(&element, &PixelGeometry::new(8, 8, 1, 8, 1)).unwrap();
        assert_eq!(payload.number_of_frames(), 1);
        assert_eq!(payload.frame(0).unwrap().as_ref(), &[1, 1, 1, 1, 2, 2]);

        let payload = extract(&element, &PixelGeometry::new(8, 8, 1, 8, 2)).unwrap();
        assert_eq!(payload.number_of_frames(), 2);
    }

    #[test]
    fn sequence_is_not_pixel_data() {
        use dcmtlv_core::value::DataSetSequence;
        let items: Vec<dcmtlv_parser::InMemDataSet> = Vec::new();
        let element: InMemElement = DataElement::new(
            DataElementHeader::new(tags::PIXEL_DATA, VR::SQ, Length::UNDEFINED),
            DataSetSequence::new(items, Length::UNDEFINED),
        );
        let err = extract(&element, &PixelGeometry::new(1, 1, 1, 8, 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidPixelData { value_type: ValueType::Item, .. }));
    }
}
