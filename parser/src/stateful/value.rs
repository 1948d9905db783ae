//! Interpretation of raw value bytes according to their value representation.
//!
//! This is the single place where a VR decides the shape of a value.
//! Text which cannot be decoded with the active character set
//! and temporal text which does not follow its grammar
//! are kept, with a flag raised, instead of failing.
//! The only failure is a binary value whose length
//! is not a multiple of its value width.

use crate::dataset::read::ValueReadStrategy;
use dcmtlv_core::header::{DataElementHeader, Tag, VR};
use dcmtlv_core::value::deserialize::{parse_date, parse_datetime, parse_time};
use dcmtlv_core::value::{DeserializeError, PrimitiveValue, ValueFlags, C};
use dcmtlv_encoding::byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use dcmtlv_encoding::text::{decode_default_lossy, SpecificCharacterSet, TextCodec};
use dcmtlv_encoding::transfer_syntax::Endianness;
use snafu::{ensure, Backtrace, Snafu};
use tracing::debug;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The value length is not a multiple of the VR's value width.
    #[snafu(display("Length {} is not a multiple of {} for VR {}", len, width, vr))]
    InvalidValueLength {
        vr: VR,
        len: usize,
        width: usize,
        backtrace: Backtrace,
    },
    /// Sequences are not primitive values.
    #[snafu(display("VR {} does not hold a primitive value", vr))]
    NonPrimitive { vr: VR, backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A primitive value along with the conditions observed while decoding it.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpreted {
    pub value: PrimitiveValue,
    pub flags: ValueFlags,
}

/// Read an array of fixed-width numbers in the given byte order.
macro_rules! numbers {
    ($vr: expr, $bytes: expr, $endianness: expr, $width: expr, $read: ident) => {{
        check_width($vr, $bytes, $width)?;
        match $endianness {
            Endianness::Little => $bytes
                .chunks_exact($width)
                .map(LittleEndian::$read)
                .collect::<C<_>>(),
            Endianness::Big => $bytes
                .chunks_exact($width)
                .map(BigEndian::$read)
                .collect::<C<_>>(),
        }
    }};
}

/// Convert the raw bytes of a primitive element value into a typed value.
///
/// `charset` applies to the character set sensitive VRs
/// (SH, LO, UC, ST, LT, UT and PN);
/// all other text is in the default repertoire.
/// `endianness` applies to the binary numeric VRs.
pub fn interpret(
    header: &DataElementHeader,
    bytes: &[u8],
    charset: &SpecificCharacterSet,
    endianness: Endianness,
    strategy: ValueReadStrategy,
) -> Result<Interpreted> {
    let mut flags = ValueFlags::default();
    let vr = header.vr;

    ensure!(vr != VR::SQ, NonPrimitiveSnafu { vr });

    if bytes.is_empty() {
        return Ok(Interpreted {
            value: PrimitiveValue::Empty,
            flags,
        });
    }

    if strategy == ValueReadStrategy::Raw {
        return Ok(Interpreted {
            value: PrimitiveValue::U8(C::from_slice(bytes)),
            flags,
        });
    }

    let value = match vr {
        VR::SQ => return NonPrimitiveSnafu { vr }.fail(),
        VR::AE | VR::AS | VR::CS => {
            PrimitiveValue::Strs(split_values(&decode_default_lossy(bytes)))
        }
        VR::UI => PrimitiveValue::Strs(split_values(&decode_default_lossy(bytes))),
        VR::SH | VR::LO | VR::UC => {
            let text = decode_text(charset, bytes, false, &mut flags);
            PrimitiveValue::Strs(split_values(&text))
        }
        VR::PN => {
            let text = decode_text(charset, bytes, true, &mut flags);
            PrimitiveValue::Strs(split_values(&text))
        }
        VR::LT | VR::ST | VR::UT => {
            let text = decode_text(charset, bytes, false, &mut flags);
            PrimitiveValue::Str(trim_padding(&text).to_string())
        }
        VR::UR => PrimitiveValue::Str(trim_padding(&decode_default_lossy(bytes)).to_string()),
        VR::DS => {
            let parts = split_values(&decode_default_lossy(bytes));
            match strategy {
                ValueReadStrategy::Interpreted => parse_numbers(parts, PrimitiveValue::F64),
                _ => PrimitiveValue::Strs(parts),
            }
        }
        VR::IS => {
            let parts = split_values(&decode_default_lossy(bytes));
            match strategy {
                ValueReadStrategy::Interpreted => parse_numbers(parts, PrimitiveValue::I32),
                _ => PrimitiveValue::Strs(parts),
            }
        }
        VR::DA => temporal(bytes, strategy, &mut flags, parse_date, PrimitiveValue::Date),
        VR::TM => temporal(bytes, strategy, &mut flags, parse_time, PrimitiveValue::Time),
        VR::DT => temporal(
            bytes,
            strategy,
            &mut flags,
            parse_datetime,
            PrimitiveValue::DateTime,
        ),
        VR::AT => {
            check_width(vr, bytes, 4)?;
            let tags = bytes
                .chunks_exact(4)
                .map(|chunk| match endianness {
                    Endianness::Little => Tag(
                        LittleEndian::read_u16(&chunk[0..2]),
                        LittleEndian::read_u16(&chunk[2..4]),
                    ),
                    Endianness::Big => Tag(
                        BigEndian::read_u16(&chunk[0..2]),
                        BigEndian::read_u16(&chunk[2..4]),
                    ),
                })
                .collect();
            PrimitiveValue::Tags(tags)
        }
        VR::OB | VR::UN => PrimitiveValue::U8(C::from_slice(bytes)),
        VR::US | VR::OW => PrimitiveValue::U16(numbers!(vr, bytes, endianness, 2, read_u16)),
        VR::SS => PrimitiveValue::I16(numbers!(vr, bytes, endianness, 2, read_i16)),
        VR::UL | VR::OL => PrimitiveValue::U32(numbers!(vr, bytes, endianness, 4, read_u32)),
        VR::SL => PrimitiveValue::I32(numbers!(vr, bytes, endianness, 4, read_i32)),
        VR::UV | VR::OV => PrimitiveValue::U64(numbers!(vr, bytes, endianness, 8, read_u64)),
        VR::SV => PrimitiveValue::I64(numbers!(vr, bytes, endianness, 8, read_i64)),
        VR::FL | VR::OF => PrimitiveValue::F32(numbers!(vr, bytes, endianness, 4, read_f32)),
        VR::FD | VR::OD => PrimitiveValue::F64(numbers!(vr, bytes, endianness, 8, read_f64)),
    };

    Ok(Interpreted { value, flags })
}

fn check_width(vr: VR, bytes: &[u8], width: usize) -> Result<()> {
    ensure!(
        bytes.len() % width == 0,
        InvalidValueLengthSnafu {
            vr,
            len: bytes.len(),
            width,
        }
    );
    Ok(())
}

/// Remove trailing spaces and null characters.
fn trim_padding(text: &str) -> &str {
    text.trim_end_matches(|c: char| c == ' ' || c == '\0')
}

fn split_values(text: &str) -> C<String> {
    text.split('\\')
        .map(|part| trim_padding(part).to_string())
        .collect()
}

fn decode_text(
    charset: &SpecificCharacterSet,
    bytes: &[u8],
    person_name: bool,
    flags: &mut ValueFlags,
) -> String {
    let decoded = if person_name {
        charset.decode_person_name(bytes)
    } else {
        charset.decode(bytes)
    };
    decoded.unwrap_or_else(|e| {
        debug!("Text is not valid {}: {}", charset.name(), e);
        flags.charset_fallback = true;
        decode_default_lossy(bytes)
    })
}

/// Parse every textual number, keeping the text if any of them is invalid.
fn parse_numbers<T>(parts: C<String>, wrap: fn(C<T>) -> PrimitiveValue) -> PrimitiveValue
where
    T: std::str::FromStr,
{
    let numbers: Option<C<T>> = parts.iter().map(|p| p.trim().parse().ok()).collect();
    match numbers {
        Some(numbers) => wrap(numbers),
        None => PrimitiveValue::Strs(parts),
    }
}

fn temporal<T>(
    bytes: &[u8],
    strategy: ValueReadStrategy,
    flags: &mut ValueFlags,
    parse: fn(&[u8]) -> Result<T, DeserializeError>,
    wrap: fn(C<T>) -> PrimitiveValue,
) -> PrimitiveValue {
    let parts = split_values(&decode_default_lossy(bytes));
    let parsed: Result<C<T>, DeserializeError> = parts
        .iter()
        .map(|part| parse(part.trim().as_bytes()))
        .collect();
    match parsed {
        Ok(values) if strategy == ValueReadStrategy::Interpreted => wrap(values),
        Ok(_) => PrimitiveValue::Strs(parts),
        Err(e) => {
            debug!("Malformed temporal value {:?}: {}", parts, e);
            flags.malformed_temporal = true;
            PrimitiveValue::Strs(parts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmtlv_core::header::Length;
    use dcmtlv_core::value::{DicomDate, DicomTime};
    use dcmtlv_core::{dicom_value, Tag};
    use dcmtlv_encoding::text::CharacterSetTerm;

    fn header(vr: VR, len: usize) -> DataElementHeader {
        DataElementHeader::new(Tag(0x0009, 0x0010), vr, Length(len as u32))
    }

    fn run(vr: VR, bytes: &[u8]) -> Interpreted {
        interpret(
            &header(vr, bytes.len()),
            bytes,
            &SpecificCharacterSet::default(),
            Endianness::Little,
            ValueReadStrategy::Interpreted,
        )
        .unwrap()
    }

    #[test]
    fn numeric_arrays_follow_byte_order() {
        let bytes = [0x01, 0x02, 0x03, 0x04];
        assert_eq!(run(VR::US, &bytes).value, dicom_value!(U16, [0x0201, 0x0403]));

        let be = interpret(
            &header(VR::US, 4),
            &bytes,
            &SpecificCharacterSet::default(),
            Endianness::Big,
            ValueReadStrategy::Interpreted,
        )
        .unwrap();
        assert_eq!(be.value, dicom_value!(U16, [0x0102, 0x0304]));

        assert_eq!(run(VR::UL, &bytes).value, dicom_value!(U32, [0x0403_0201]));
        assert_eq!(
            run(VR::FD, &1.5_f64.to_le_bytes()).value,
            dicom_value!(F64, [1.5])
        );
        assert_eq!(run(VR::SS, &[0xFF, 0xFF]).value, dicom_value!(I16, [-1]));
    }

    #[test]
    fn numeric_length_must_match_width() {
        let err = interpret(
            &header(VR::UL, 6),
            &[0; 6],
            &SpecificCharacterSet::default(),
            Endianness::Little,
            ValueReadStrategy::Interpreted,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidValueLength {
                vr: VR::UL,
                len: 6,
                width: 4,
                ..
            }
        ));
    }

    #[test]
    fn text_is_split_and_trimmed() {
        let value = run(VR::CS, b"ORIGINAL\\PRIMARY ").value;
        assert_eq!(value, dicom_value!(Strs, ["ORIGINAL", "PRIMARY"]));

        let value = run(VR::UI, b"1.2.840.10008.1.2\0").value;
        assert_eq!(value, dicom_value!(Strs, ["1.2.840.10008.1.2"]));

        // backslash is plain content in single text VRs
        let value = run(VR::LT, b"C:\\dir ").value;
        assert_eq!(value, dicom_value!(Str, "C:\\dir"));
    }

    #[test]
    fn decimal_strings() {
        let value = run(VR::DS, b"0.5\\-1.25e1 ").value;
        assert_eq!(value, dicom_value!(F64, [0.5, -12.5]));

        // invalid numbers are kept as text
        let value = run(VR::DS, b"0.5\\abc ").value;
        assert_eq!(value, dicom_value!(Strs, ["0.5", "abc"]));

        let value = interpret(
            &header(VR::IS, 4),
            b"12\\3",
            &SpecificCharacterSet::default(),
            Endianness::Little,
            ValueReadStrategy::Preserved,
        )
        .unwrap()
        .value;
        assert_eq!(value, dicom_value!(Strs, ["12", "3"]));
        assert_eq!(run(VR::IS, b" -7 ").value, dicom_value!(I32, [-7]));
    }

    #[test]
    fn temporal_values() {
        let out = run(VR::DA, b"20240229");
        assert_eq!(
            out.value,
            PrimitiveValue::Date(C::from_elem(DicomDate::from_ymd(2024, 2, 29).unwrap(), 1))
        );
        assert!(out.flags.is_clean());

        let out = run(VR::TM, b"1015");
        assert_eq!(
            out.value,
            PrimitiveValue::Time(C::from_elem(DicomTime::from_hm(10, 15).unwrap(), 1))
        );

        // 2023 is not a leap year
        let out = run(VR::DA, b"20230229");
        assert_eq!(out.value, dicom_value!(Strs, ["20230229"]));
        assert!(out.flags.malformed_temporal);

        let out = interpret(
            &header(VR::DA, 10),
            b"2024-02-29",
            &SpecificCharacterSet::default(),
            Endianness::Little,
            ValueReadStrategy::Preserved,
        )
        .unwrap();
        assert_eq!(out.value, dicom_value!(Strs, ["2024-02-29"]));
        assert!(out.flags.malformed_temporal);
    }

    #[test]
    fn tags() {
        let value = run(VR::AT, &[0x10, 0x00, 0x10, 0x00, 0x28, 0x00, 0x10, 0x00]).value;
        assert_eq!(
            value,
            dicom_value!(Tags, [Tag(0x0010, 0x0010), Tag(0x0028, 0x0010)])
        );
    }

    #[test]
    fn binary_is_kept() {
        assert_eq!(run(VR::UN, &[1, 2, 3]).value, dicom_value!(U8, [1, 2, 3]));
        let raw = interpret(
            &header(VR::US, 2),
            &[1, 0],
            &SpecificCharacterSet::default(),
            Endianness::Little,
            ValueReadStrategy::Raw,
        )
        .unwrap();
        assert_eq!(raw.value, dicom_value!(U8, [1, 0]));
    }

    #[test]
    fn charset_fallback_is_flagged() {
        let utf8 = SpecificCharacterSet::from(CharacterSetTerm::IsoIr192);
        let out = interpret(
            &header(VR::PN, 6),
            b"Sim\xF5es",
            &utf8,
            Endianness::Little,
            ValueReadStrategy::Interpreted,
        )
        .unwrap();
        assert_eq!(out.value, dicom_value!(Strs, ["Simões"]));
        assert!(out.flags.charset_fallback);

        // not charset sensitive, so no failure
        let out = interpret(
            &header(VR::CS, 2),
            b"\xF5A",
            &utf8,
            Endianness::Little,
            ValueReadStrategy::Interpreted,
        )
        .unwrap();
        assert!(out.flags.is_clean());
    }

    #[test]
    fn sequences_are_rejected() {
        assert!(matches!(
            interpret(
                &header(VR::SQ, 0),
                &[],
                &SpecificCharacterSet::default(),
                Endianness::Little,
                ValueReadStrategy::Interpreted,
            ),
            Err(Error::NonPrimitive { vr: VR::SQ, .. })
        ));
    }
}
