//! Utility module for fetching the pixel data geometry from a data set.

use byteorder::{ByteOrder, LittleEndian};
use dcmtlv_core::value::{ConvertValueError, Value};
use dcmtlv_core::Tag;
use dcmtlv_dictionary_std::tags;
use dcmtlv_parser::InMemDataSet;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::str::FromStr;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum GetAttributeError {
    #[snafu(display("Missing required attribute `{}`", name))]
    MissingRequiredField {
        name: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not convert attribute `{}`", name))]
    ConvertValue {
        name: &'static str,
        source: ConvertValueError,
        backtrace: Backtrace,
    },

    #[snafu(display("Semantically invalid value `{}` for attribute `{}`", value, name))]
    InvalidValue {
        name: &'static str,
        value: String,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = GetAttributeError> = std::result::Result<T, E>;

/// The Extended Offset Table of encapsulated pixel data,
/// with the byte offset and length of every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedOffsetTable {
    /// _Extended Offset Table_ (7FE0,0001)
    pub offsets: Vec<u64>,
    /// _Extended Offset Table Lengths_ (7FE0,0002)
    pub lengths: Vec<u64>,
}

/// The attributes which determine how pixel data splits into frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGeometry {
    pub rows: u16,
    pub columns: u16,
    pub samples_per_pixel: u16,
    pub bits_allocated: u16,
    pub number_of_frames: u32,
    /// Takes precedence over the Basic Offset Table when present.
    pub extended_offset_table: Option<ExtendedOffsetTable>,
}

impl PixelGeometry {
    /// Describe frames of the given dimensions,
    /// without an extended offset table.
    pub fn new(
        rows: u16,
        columns: u16,
        samples_per_pixel: u16,
        bits_allocated: u16,
        number_of_frames: u32,
    ) -> Self {
        PixelGeometry {
            rows,
            columns,
            samples_per_pixel,
            bits_allocated,
            number_of_frames,
            extended_offset_table: None,
        }
    }

    /// Fetch the geometry of the pixel data in the given data set.
    ///
    /// _Number of Frames_ defaults to 1 when absent.
    /// The extended offset table is only taken
    /// when both of its attributes are present.
    pub fn from_dataset(dataset: &InMemDataSet) -> Result<Self> {
        let rows: u16 = required_int(dataset, tags::ROWS, "Rows")?;
        let columns: u16 = required_int(dataset, tags::COLUMNS, "Columns")?;
        let samples_per_pixel: u16 =
            required_int(dataset, tags::SAMPLES_PER_PIXEL, "SamplesPerPixel")?;
        let bits_allocated: u16 = required_int(dataset, tags::BITS_ALLOCATED, "BitsAllocated")?;
        ensure!(
            bits_allocated > 0,
            InvalidValueSnafu {
                name: "BitsAllocated",
                value: bits_allocated.to_string(),
            }
        );

        Ok(PixelGeometry {
            rows,
            columns,
            samples_per_pixel,
            bits_allocated,
            number_of_frames: number_of_frames(dataset)?,
            extended_offset_table: extended_offset_table(dataset)?,
        })
    }

    /// The number of bits in one frame.
    pub fn frame_bits(&self) -> u64 {
        u64::from(self.rows)
            * u64::from(self.columns)
            * u64::from(self.samples_per_pixel)
            * u64::from(self.bits_allocated)
    }

    /// The number of bytes in one frame,
    /// if frames start on byte boundaries.
    pub fn frame_size(&self) -> Option<u64> {
        let bits = self.frame_bits();
        if bits % 8 == 0 {
            Some(bits / 8)
        } else {
            None
        }
    }

    /// The number of bytes of all frames together, without padding.
    pub fn total_size(&self) -> u64 {
        (self.frame_bits() * u64::from(self.number_of_frames) + 7) / 8
    }
}

/// Get the NumberOfFrames from the data set,
/// returning 1 if it is not present
fn number_of_frames(dataset: &InMemDataSet) -> Result<u32> {
    let elem = match dataset.get(tags::NUMBER_OF_FRAMES) {
        Some(e) => e,
        None => return Ok(1),
    };

    let integer = elem.to_int::<i32>().context(ConvertValueSnafu {
        name: "NumberOfFrames",
    })?;

    ensure!(
        integer > 0,
        InvalidValueSnafu {
            name: "NumberOfFrames",
            value: integer.to_string(),
        }
    );

    Ok(integer as u32)
}

fn extended_offset_table(dataset: &InMemDataSet) -> Result<Option<ExtendedOffsetTable>> {
    let (offsets, lengths) = match (
        dataset.get(tags::EXTENDED_OFFSET_TABLE),
        dataset.get(tags::EXTENDED_OFFSET_TABLE_LENGTHS),
    ) {
        (Some(offsets), Some(lengths)) => (
            very_long_values(offsets.value(), "ExtendedOffsetTable")?,
            very_long_values(lengths.value(), "ExtendedOffsetTableLengths")?,
        ),
        _ => return Ok(None),
    };

    ensure!(
        offsets.len() == lengths.len(),
        InvalidValueSnafu {
            name: "ExtendedOffsetTableLengths",
            value: format!("{} entries for {} offsets", lengths.len(), offsets.len()),
        }
    );
    Ok(Some(ExtendedOffsetTable { offsets, lengths }))
}

fn very_long_values(value: &Value<InMemDataSet>, name: &'static str) -> Result<Vec<u64>> {
    let primitive = value.primitive().context(MissingRequiredFieldSnafu { name })?;
    match primitive.uint64_slice() {
        Ok(values) => Ok(values.to_vec()),
        // kept as bytes when the VR was not known
        Err(_) => {
            let bytes = primitive.uint8_slice().map_err(|_| {
                InvalidValueSnafu {
                    name,
                    value: primitive.to_str().into_owned(),
                }
                .build()
            })?;
            ensure!(
                bytes.len() % 8 == 0,
                InvalidValueSnafu {
                    name,
                    value: format!("{} bytes", bytes.len()),
                }
            );
            Ok(bytes
                .chunks_exact(8)
                .map(LittleEndian::read_u64)
                .collect())
        }
    }
}

#[inline]
fn required_int<T>(dataset: &InMemDataSet, tag: Tag, name: &'static str) -> Result<T>
where
    T: num_traits::NumCast,
    T: FromStr<Err = std::num::ParseIntError>,
{
    dataset
        .get(tag)
        .context(MissingRequiredFieldSnafu { name })?
        .to_int()
        .context(ConvertValueSnafu { name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmtlv_core::dicom_value;
    use dcmtlv_core::header::{DataElement, DataElementHeader, Length};
    use dcmtlv_core::value::PrimitiveValue;
    use dcmtlv_core::VR;

    fn el(tag: Tag, vr: VR, value: PrimitiveValue) -> dcmtlv_parser::InMemElement {
        DataElement::new(DataElementHeader::new(tag, vr, Length::UNDEFINED), value)
    }

    fn image(extra: Vec<dcmtlv_parser::InMemElement>) -> InMemDataSet {
        let mut elements = vec![
            el(tags::SAMPLES_PER_PIXEL, VR::US, dicom_value!(U16, [3])),
            el(tags::ROWS, VR::US, dicom_value!(U16, [4])),
            el(tags::COLUMNS, VR::US, dicom_value!(U16, [5])),
            el(tags::BITS_ALLOCATED, VR::US, dicom_value!(U16, [8])),
        ];
        elements.extend(extra);
        InMemDataSet::from_element_iter(elements)
    }

    #[test]
    fn geometry_with_defaults() {
        let geometry = PixelGeometry::from_dataset(&image(vec![])).unwrap();
        assert_eq!(geometry, PixelGeometry::new(4, 5, 3, 8, 1));
        assert_eq!(geometry.frame_size(), Some(60));
    }

    #[test]
    fn geometry_with_frames_and_extended_offset_table() {
        let dataset = image(vec![
            el(tags::NUMBER_OF_FRAMES, VR::IS, dicom_value!(I32, [2])),
            el(tags::EXTENDED_OFFSET_TABLE, VR::OV, dicom_value!(U64, [0, 68])),
            // kept as bytes
            el(
                tags::EXTENDED_OFFSET_TABLE_LENGTHS,
                VR::UN,
                PrimitiveValue::U8(
                    [60_u64, 60]
                        .iter()
                        .flat_map(|v| v.to_le_bytes().to_vec())
                        .collect(),
                ),
            ),
        ]);
        let geometry = PixelGeometry::from_dataset(&dataset).unwrap();
        assert_eq!(geometry.number_of_frames, 2);
        assert_eq!(geometry.total_size(), 120);
        assert_eq!(
            geometry.extended_offset_table,
            Some(ExtendedOffsetTable {
                offsets: vec![0, 68],
                lengths: vec![60, 60],
            })
        );
    }

    #[test]
    fn geometry_errors() {
        let dataset = InMemDataSet::from_element_iter(vec![el(
            tags::ROWS,
            VR::US,
            dicom_value!(U16, [4]),
        )]);
        assert!(matches!(
            PixelGeometry::from_dataset(&dataset),
            Err(GetAttributeError::MissingRequiredField { name: "Columns", .. })
        ));

        let dataset = image(vec![el(
            tags::NUMBER_OF_FRAMES,
            VR::IS,
            dicom_value!(I32, [0]),
        )]);
        assert!(matches!(
            PixelGeometry::from_dataset(&dataset),
            Err(GetAttributeError::InvalidValue { name: "NumberOfFrames", .. })
        ));
    }

    #[test]
    fn bit_packed_frames() {
        let geometry = PixelGeometry::new(3, 3, 1, 1, 2);
        assert_eq!(geometry.frame_bits(), 9);
        assert_eq!(geometry.frame_size(), None);
        assert_eq!(geometry.total_size(), 3);
    }
}
