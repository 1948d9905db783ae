//! The same data set decodes to the same tree in every
//! uncompressed transfer syntax.
mod common;

use common::StreamWriter;
use dcmtlv_core::dicom_value;
use dcmtlv_core::header::{DataElement, DataElementHeader, Length};
use dcmtlv_core::value::{DataSetSequence, DicomDate, DicomDateTime, DicomTime, PrimitiveValue};
use dcmtlv_core::{Tag, VR};
use dcmtlv_dictionary_std::tags;
use dcmtlv_dictionary_std::StandardDataDictionary;
use dcmtlv_parser::{read_dataset, InMemDataSet, InMemElement, ReadOptions, TransferSyntax};
use pretty_assertions::assert_eq;

const SYNTAXES: [TransferSyntax; 3] = [
    TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN,
    TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
    TransferSyntax::EXPLICIT_VR_BIG_ENDIAN,
];

fn series_item(ts: TransferSyntax, uid: &str) -> Vec<u8> {
    let mut item = StreamWriter::new(ts);
    item.text(tags::SERIES_INSTANCE_UID, VR::UI, &format!("{}\0", uid));
    item.into_bytes()
}

fn encode(ts: TransferSyntax, undefined_sequences: bool) -> Vec<u8> {
    let items = [series_item(ts, "1.2.3.4"), series_item(ts, "1.2.3.5")];
    let mut w = StreamWriter::new(ts);
    w.text(tags::IMAGE_TYPE, VR::CS, "ORIGINAL\\PRIMARY")
        .text(tags::SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.2\0")
        .text(tags::STUDY_DATE, VR::DA, "20240229")
        .text(tags::ACQUISITION_DATE_TIME, VR::DT, "20240229101530")
        .text(tags::STUDY_TIME, VR::TM, "101530")
        .text(tags::ACCESSION_NUMBER, VR::SH, "A12345")
        .text(tags::RETRIEVE_AE_TITLE, VR::AE, "STORE_SCP")
        .text(tags::INSTITUTION_NAME, VR::LO, "General Hospital")
        .text(tags::INSTITUTION_ADDRESS, VR::ST, "1 Main St\\Springfield")
        .sequence(tags::REFERENCED_SERIES_SEQUENCE, &items, undefined_sequences)
        .text(tags::PATIENT_NAME, VR::PN, "Doe^John")
        .text(tags::PATIENT_AGE, VR::AS, "042Y")
        .text(tags::PATIENT_COMMENTS, VR::LT, "Line one\r\nLine two")
        .header(tags::EXAMINED_BODY_THICKNESS, VR::FL, Some(4))
        .u32(120.5_f32.to_bits())
        .text(tags::SLICE_THICKNESS, VR::DS, "2.5")
        .u32s(tags::REGION_FLAGS, VR::UL, &[7])
        .header(tags::REFERENCE_PIXEL_X0, VR::SL, Some(4))
        .u32(-70_000_i32 as u32)
        .f64s(tags::PHYSICAL_DELTA_X, &[0.125])
        .header(tags::TAG_ANGLE_SECOND_AXIS, VR::SS, Some(2))
        .u16(-3_i16 as u16)
        .text(tags::INSTANCE_NUMBER, VR::IS, "12")
        .tags(tags::FRAME_INCREMENT_POINTER, &[Tag(0x0018, 0x1063)])
        .u16s(tags::ROWS, VR::US, &[2])
        .u16s(tags::COLUMNS, VR::US, &[2])
        .text(tags::PIXEL_SPACING, VR::DS, "0.5\\0.5")
        .u16s(tags::RED_PALETTE_COLOR_LOOKUP_TABLE_DATA, VR::OW, &[0x0102, 0xFFFF])
        .text(tags::TEXT_VALUE, VR::UT, "Findings: none")
        .element(tags::ENCAPSULATED_DOCUMENT, VR::OB, &[1, 2, 3, 4])
        .header(tags::POINT_COORDINATES_DATA, VR::OF, Some(8))
        .u32(1.5_f32.to_bits())
        .u32((-2.25_f32).to_bits())
        .element(tags::SELECTOR_UN_VALUE, VR::UN, &[9, 8, 7, 6])
        .header(tags::SELECTOR_SV_VALUE, VR::SV, Some(16))
        .u64(-5_i64 as u64)
        .u64(1 << 40);
    w.into_bytes()
}

fn el(tag: Tag, vr: VR, value: PrimitiveValue) -> InMemElement {
    DataElement::new(DataElementHeader::new(tag, vr, Length::UNDEFINED), value)
}

fn uid_item(uid: &str) -> InMemDataSet {
    InMemDataSet::from_element_iter(vec![el(
        tags::SERIES_INSTANCE_UID,
        VR::UI,
        dicom_value!(Strs, [uid]),
    )])
}

fn expected() -> InMemDataSet {
    let acquired = DicomDateTime::from_date_and_time(
        DicomDate::from_ymd(2024, 2, 29).unwrap(),
        DicomTime::from_hms(10, 15, 30).unwrap(),
    )
    .unwrap();
    InMemDataSet::from_element_iter(vec![
        el(tags::IMAGE_TYPE, VR::CS, dicom_value!(Strs, ["ORIGINAL", "PRIMARY"])),
        el(
            tags::SOP_CLASS_UID,
            VR::UI,
            dicom_value!(Strs, ["1.2.840.10008.5.1.4.1.1.2"]),
        ),
        el(
            tags::STUDY_DATE,
            VR::DA,
            dicom_value!(Date, DicomDate::from_ymd(2024, 2, 29).unwrap()),
        ),
        el(
            tags::ACQUISITION_DATE_TIME,
            VR::DT,
            PrimitiveValue::DateTime(vec![acquired].into()),
        ),
        el(
            tags::STUDY_TIME,
            VR::TM,
            dicom_value!(Time, DicomTime::from_hms(10, 15, 30).unwrap()),
        ),
        el(tags::ACCESSION_NUMBER, VR::SH, dicom_value!(Strs, ["A12345"])),
        el(tags::RETRIEVE_AE_TITLE, VR::AE, dicom_value!(Strs, ["STORE_SCP"])),
        el(tags::INSTITUTION_NAME, VR::LO, dicom_value!(Strs, ["General Hospital"])),
        // backslash is not a separator in single text values
        el(
            tags::INSTITUTION_ADDRESS,
            VR::ST,
            dicom_value!(Str, "1 Main St\\Springfield"),
        ),
        DataElement::new(
            DataElementHeader::new(tags::REFERENCED_SERIES_SEQUENCE, VR::SQ, Length::UNDEFINED),
            DataSetSequence::new(vec![uid_item("1.2.3.4"), uid_item("1.2.3.5")], Length::UNDEFINED),
        ),
        el(tags::PATIENT_NAME, VR::PN, dicom_value!(Strs, ["Doe^John"])),
        el(tags::PATIENT_AGE, VR::AS, dicom_value!(Strs, ["042Y"])),
        el(
            tags::PATIENT_COMMENTS,
            VR::LT,
            dicom_value!(Str, "Line one\r\nLine two"),
        ),
        el(tags::EXAMINED_BODY_THICKNESS, VR::FL, dicom_value!(F32, [120.5])),
        el(tags::SLICE_THICKNESS, VR::DS, dicom_value!(F64, [2.5])),
        el(tags::REGION_FLAGS, VR::UL, dicom_value!(U32, [7])),
        el(tags::REFERENCE_PIXEL_X0, VR::SL, dicom_value!(I32, [-70_000])),
        el(tags::PHYSICAL_DELTA_X, VR::FD, dicom_value!(F64, [0.125])),
        el(tags::TAG_ANGLE_SECOND_AXIS, VR::SS, dicom_value!(I16, [-3])),
        el(tags::INSTANCE_NUMBER, VR::IS, dicom_value!(I32, [12])),
        el(
            tags::FRAME_INCREMENT_POINTER,
            VR::AT,
            dicom_value!(Tags, [Tag(0x0018, 0x1063)]),
        ),
        el(tags::ROWS, VR::US, dicom_value!(U16, [2])),
        el(tags::COLUMNS, VR::US, dicom_value!(U16, [2])),
        el(tags::PIXEL_SPACING, VR::DS, dicom_value!(F64, [0.5, 0.5])),
        el(
            tags::RED_PALETTE_COLOR_LOOKUP_TABLE_DATA,
            VR::OW,
            dicom_value!(U16, [0x0102, 0xFFFF]),
        ),
        el(tags::TEXT_VALUE, VR::UT, dicom_value!(Str, "Findings: none")),
        el(tags::ENCAPSULATED_DOCUMENT, VR::OB, dicom_value!(U8, [1, 2, 3, 4])),
        el(tags::POINT_COORDINATES_DATA, VR::OF, dicom_value!(F32, [1.5, -2.25])),
        el(tags::SELECTOR_UN_VALUE, VR::UN, dicom_value!(U8, [9, 8, 7, 6])),
        el(tags::SELECTOR_SV_VALUE, VR::SV, dicom_value!(I64, [-5, 1 << 40])),
    ])
}

#[test]
fn same_tree_in_every_transfer_syntax() {
    let expected = expected();
    for ts in SYNTAXES.iter() {
        for &undefined in &[false, true] {
            let data = encode(*ts, undefined);
            let outcome = read_dataset(&data, ts, StandardDataDictionary, ReadOptions::default());
            assert!(outcome.warnings.is_empty(), "{}: {:?}", ts.name, outcome.warnings);
            let dataset = outcome.into_result().unwrap();
            assert_eq!(dataset, expected, "{} (undefined lengths: {})", ts.name, undefined);
            assert_eq!(dataset.transfer_syntax(), ts);
        }
    }
}

#[test]
fn decoding_is_deterministic() {
    let data = encode(TransferSyntax::EXPLICIT_VR_BIG_ENDIAN, true);
    let read = || {
        read_dataset(
            &data,
            &TransferSyntax::EXPLICIT_VR_BIG_ENDIAN,
            StandardDataDictionary,
            ReadOptions::default(),
        )
        .into_result()
        .unwrap()
    };
    assert_eq!(read(), read());
}

#[test]
fn declared_lengths_are_kept() {
    let data = encode(TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN, false);
    let dataset = read_dataset(
        &data,
        &TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN,
        StandardDataDictionary,
        ReadOptions::default(),
    )
    .into_result()
    .unwrap();

    // padded to even length on the wire
    let uid = dataset.element(tags::SOP_CLASS_UID).unwrap();
    assert_eq!(uid.header().len, Length(26));
    let ae = dataset.element(tags::RETRIEVE_AE_TITLE).unwrap();
    assert_eq!(ae.header().len, Length(10));

    // two items of 8 + 16 bytes each
    let seq = dataset.element(tags::REFERENCED_SERIES_SEQUENCE).unwrap();
    assert_eq!(seq.header().len, Length(48));
    assert_eq!(seq.value().items().map(|items| items.len()), Some(2));
}

#[test]
fn sequences_of_any_length_encoding_are_equal() {
    let ts = TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN;
    for count in 0..4 {
        let items: Vec<Vec<u8>> = (0..count)
            .map(|i| series_item(ts, &format!("1.2.{}", i)))
            .collect();

        let read = |undefined| {
            let mut w = StreamWriter::new(ts);
            w.sequence(tags::REFERENCED_SERIES_SEQUENCE, &items, undefined)
                .text(tags::PATIENT_NAME, VR::PN, "Doe");
            let data = w.into_bytes();
            read_dataset(&data, &ts, StandardDataDictionary, ReadOptions::default())
                .into_result()
                .unwrap()
        };

        let defined = read(false);
        let undefined = read(true);
        assert_eq!(defined, undefined, "{} items", count);

        let seq = undefined.element(tags::REFERENCED_SERIES_SEQUENCE).unwrap();
        assert_eq!(seq.value().items().map(|items| items.len()), Some(count));
        assert!(undefined.get(tags::PATIENT_NAME).is_some());
    }
}
