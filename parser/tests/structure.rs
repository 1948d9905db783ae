//! Structural behavior of the data set reader on crafted streams.
mod common;

use common::StreamWriter;
use dcmtlv_core::dicom_value;
use dcmtlv_core::dictionary::PrivateDataDictionary;
use dcmtlv_core::header::Length;
use dcmtlv_core::{Tag, VR};
use dcmtlv_dictionary_std::tags;
use dcmtlv_dictionary_std::StandardDataDictionary;
use dcmtlv_encoding::text::CharacterSetTerm;
use dcmtlv_parser::{read_dataset, Error, InMemDataSet, ReadOptions, TransferSyntax, Warning};
use pretty_assertions::assert_eq;

fn read(data: &[u8], ts: TransferSyntax) -> dcmtlv_parser::ReadOutcome {
    read_dataset(data, &ts, StandardDataDictionary, ReadOptions::default())
}

fn items(dataset: &InMemDataSet, tag: Tag) -> &[InMemDataSet] {
    dataset
        .element(tag)
        .unwrap()
        .value()
        .items()
        .expect("a sequence")
}

#[test]
fn truncation_is_reported_at_the_cut() {
    let _ = tracing_subscriber::fmt::try_init();
    let ts = TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN;

    let mut item = StreamWriter::new(ts);
    item.text(tags::SERIES_INSTANCE_UID, VR::UI, "1.2.3\0");
    let item = item.into_bytes();

    let mut w = StreamWriter::new(ts);
    let mut boundaries = vec![];
    w.text(tags::IMAGE_TYPE, VR::CS, "DERIVED");
    boundaries.push(w.position());
    w.sequence(tags::REFERENCED_STUDY_SEQUENCE, &[item.clone()], false);
    boundaries.push(w.position());
    w.sequence(tags::REFERENCED_SERIES_SEQUENCE, &[item.clone(), item], true);
    boundaries.push(w.position());
    w.u16s(tags::ROWS, VR::US, &[64]);
    let data = w.into_bytes();

    for cut in 1..data.len() {
        let outcome = read(&data[..cut], ts);
        match boundaries.iter().position(|&b| b == cut) {
            Some(i) => {
                assert!(outcome.is_complete(), "cut at {}: {:?}", cut, outcome.error);
                assert_eq!(outcome.dataset.len(), i + 1);
            }
            None => match outcome.error {
                Some(Error::UnexpectedEndOfStream { offset, .. }) => {
                    assert_eq!(offset, cut, "cut at {}", cut)
                }
                e => panic!("cut at {}: expected end of stream, got {:?}", cut, e),
            },
        }
    }
}

#[test]
fn truncated_sequence_keeps_decoded_items() {
    let ts = TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN;
    let mut item = StreamWriter::new(ts);
    item.text(tags::SERIES_INSTANCE_UID, VR::UI, "1.2.3\0");
    let item = item.into_bytes();

    let mut w = StreamWriter::new(ts);
    w.text(tags::IMAGE_TYPE, VR::CS, "DERIVED")
        .sequence(tags::REFERENCED_SERIES_SEQUENCE, &[item.clone(), item], true);
    let data = w.into_bytes();
    // cut in the middle of the second item
    let cut = data.len() - 20;

    let outcome = read(&data[..cut], ts);
    assert_eq!(outcome.error.as_ref().and_then(Error::offset), Some(cut));
    let dataset = &outcome.dataset;
    assert_eq!(
        dataset.element(tags::IMAGE_TYPE).unwrap().value().primitive(),
        Some(&dicom_value!(Strs, ["DERIVED"]))
    );
    let items = items(dataset, tags::REFERENCED_SERIES_SEQUENCE);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].len(), 1);
    assert!(items[1].is_empty());
}

#[test]
fn out_of_order_elements_are_kept_when_lenient() {
    let ts = TransferSyntax::EXPLICIT_VR_BIG_ENDIAN;
    let mut w = StreamWriter::new(ts);
    w.u16s(tags::ROWS, VR::US, &[2])
        .text(tags::PATIENT_NAME, VR::PN, "Doe");
    let data = w.into_bytes();

    let outcome = read(&data, ts);
    assert!(matches!(
        outcome.error,
        Some(Error::TagOrder { offset: 10, .. })
    ));
    assert_eq!(outcome.dataset.len(), 1);

    let options = ReadOptions::default().require_ordered_elements(false);
    let outcome = read_dataset(&data, &ts, StandardDataDictionary, options);
    assert_eq!(
        outcome.warnings,
        vec![Warning::TagOrder {
            tag: tags::PATIENT_NAME,
            previous: tags::ROWS,
            offset: 10,
        }]
    );
    let dataset = outcome.into_result().unwrap();
    assert_eq!(dataset.tags().collect::<Vec<_>>(), vec![tags::PATIENT_NAME, tags::ROWS]);
}

#[test]
fn implicit_vr_resolves_whole_slide_and_segmentation_attributes() {
    let ts = TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN;
    let mut item = StreamWriter::new(ts);
    item.u16s(tags::SEGMENT_NUMBER, VR::US, &[1])
        .text(tags::SEGMENT_LABEL, VR::LO, "Liver");
    let item = item.into_bytes();

    let mut w = StreamWriter::new(ts);
    w.u32s(tags::TOTAL_PIXEL_MATRIX_COLUMNS, VR::UL, &[98304])
        .sequence(tags::SEGMENT_SEQUENCE, &[item], false);
    let data = w.into_bytes();

    let outcome = read(&data, ts);
    assert_eq!(outcome.warnings, vec![]);
    let dataset = outcome.into_result().unwrap();

    let columns = dataset.element(tags::TOTAL_PIXEL_MATRIX_COLUMNS).unwrap();
    assert_eq!(columns.vr(), VR::UL);
    assert_eq!(columns.to_int::<u32>().unwrap(), 98304);

    assert_eq!(dataset.element(tags::SEGMENT_SEQUENCE).unwrap().vr(), VR::SQ);
    let segments = items(&dataset, tags::SEGMENT_SEQUENCE);
    assert_eq!(segments.len(), 1);
    assert_eq!(
        segments[0].element(tags::SEGMENT_NUMBER).unwrap().to_int::<u16>().unwrap(),
        1
    );
    assert_eq!(
        segments[0].element(tags::SEGMENT_LABEL).unwrap().to_str().unwrap(),
        "Liver"
    );
}

#[test]
fn repeated_element_keeps_the_first_when_lenient() {
    let ts = TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN;
    let mut w = StreamWriter::new(ts);
    w.text(tags::PATIENT_NAME, VR::PN, "Doe^A")
        .text(tags::PATIENT_NAME, VR::PN, "Roe^B");
    let data = w.into_bytes();

    let outcome = read(&data, ts);
    assert!(matches!(
        outcome.error,
        Some(Error::TagOrder { offset: 14, .. })
    ));

    let options = ReadOptions::default().require_ordered_elements(false);
    let outcome = read_dataset(&data, &ts, StandardDataDictionary, options);
    assert_eq!(
        outcome.warnings,
        vec![Warning::DuplicateElement {
            tag: tags::PATIENT_NAME,
            offset: 14,
        }]
    );
    let dataset = outcome.into_result().unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(
        dataset.element(tags::PATIENT_NAME).unwrap().to_str().unwrap(),
        "Doe^A"
    );

    // not adjacent, and inside an item
    let mut item = StreamWriter::new(ts);
    item.text(tags::PATIENT_ID, VR::LO, "42")
        .u16s(tags::ROWS, VR::US, &[2])
        .text(tags::PATIENT_ID, VR::LO, "43");
    let item = item.into_bytes();
    let mut w = StreamWriter::new(ts);
    w.sequence(tags::REFERENCED_SERIES_SEQUENCE, &[item], true);
    let data = w.into_bytes();

    let options = ReadOptions::default().require_ordered_elements(false);
    let outcome = read_dataset(&data, &ts, StandardDataDictionary, options);
    // sequence header 12, item header 8, two elements of 10 bytes each
    assert_eq!(
        outcome.warnings,
        vec![Warning::DuplicateElement {
            tag: tags::PATIENT_ID,
            offset: 40,
        }]
    );
    let dataset = outcome.into_result().unwrap();
    let items = items(&dataset, tags::REFERENCED_SERIES_SEQUENCE);
    assert_eq!(items[0].len(), 2);
    assert_eq!(
        items[0].element(tags::PATIENT_ID).unwrap().to_str().unwrap(),
        "42"
    );
}

#[test]
fn unknown_private_element_is_kept_as_bytes() {
    let ts = TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN;
    let mut w = StreamWriter::new(ts);
    w.text(Tag(0x0009, 0x0010), VR::LO, "ACME")
        .element(Tag(0x0009, 0x1010), VR::UN, &[1, 2, 3])
        .text(tags::PATIENT_NAME, VR::PN, "Doe");
    let data = w.into_bytes();

    let outcome = read(&data, ts);
    assert_eq!(
        outcome.warnings,
        vec![Warning::UnknownVr {
            tag: Tag(0x0009, 0x1010),
            offset: 12,
            code: None,
        }]
    );
    let dataset = outcome.into_result().unwrap();
    let private = dataset.element(Tag(0x0009, 0x1010)).unwrap();
    assert_eq!(private.vr(), VR::UN);
    assert_eq!(private.header().len, Length(3));
    assert_eq!(private.value().primitive(), Some(&dicom_value!(U8, [1, 2, 3])));
    assert!(private.flags().unknown_vr);
    assert_eq!(dataset.element_by_name("PatientName").unwrap().to_str().unwrap(), "Doe");

    // once registered, the same element is interpreted
    let dict = PrivateDataDictionary::new().with("ACME", 0x0009, 0x10, VR::OB, "AcmeBlob");
    let options = ReadOptions::default().private_dictionary(dict);
    let outcome = read_dataset(&data, &ts, StandardDataDictionary, options);
    assert!(outcome.warnings.is_empty());
    let dataset = outcome.into_result().unwrap();
    let private = dataset.element(Tag(0x0009, 0x1010)).unwrap();
    assert_eq!(private.vr(), VR::OB);
    assert!(!private.flags().unknown_vr);
}

#[test]
fn unknown_sequence_is_read_in_implicit_little_endian() {
    let ts = TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN;
    let mut item = StreamWriter::new(TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN);
    item.text(tags::PATIENT_NAME, VR::PN, "Doe");
    let item = item.into_bytes();

    let mut w = StreamWriter::new(ts);
    w.text(Tag(0x0009, 0x0010), VR::LO, "ACME")
        .header(Tag(0x0009, 0x1001), VR::UN, None)
        .item_start(None)
        .raw(&item)
        .item_end()
        .sequence_end()
        .text(tags::PATIENT_ID, VR::LO, "X1");
    let data = w.into_bytes();

    let outcome = read(&data, ts);
    assert!(outcome.warnings.is_empty(), "{:?}", outcome.warnings);
    let dataset = outcome.into_result().unwrap();

    let items = items(&dataset, Tag(0x0009, 0x1001));
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].element(tags::PATIENT_NAME).unwrap().value().primitive(),
        Some(&dicom_value!(Strs, ["Doe"]))
    );
    assert_eq!(
        items[0].transfer_syntax(),
        &TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN
    );
    // explicit VR is back after the sequence
    assert_eq!(
        dataset.element(tags::PATIENT_ID).unwrap().to_str().unwrap(),
        "X1"
    );
}

#[test]
fn character_set_applies_to_item_and_nested_content() {
    let ts = TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN;

    let mut latin = StreamWriter::new(ts);
    latin
        .text(tags::SPECIFIC_CHARACTER_SET, VR::CS, "ISO_IR 100")
        .element(tags::PATIENT_NAME, VR::PN, &[b'J', b'o', 0xE3, b'o']);
    let latin = latin.into_bytes();

    let mut inherited = StreamWriter::new(ts);
    inherited.element(tags::PATIENT_NAME, VR::PN, &[0xBB, 0xDE]);
    let inherited = inherited.into_bytes();

    let mut w = StreamWriter::new(ts);
    w.text(tags::SPECIFIC_CHARACTER_SET, VR::CS, "ISO_IR 144")
        .sequence(tags::REFERENCED_SERIES_SEQUENCE, &[latin, inherited], true)
        .element(tags::PATIENT_NAME, VR::PN, &[0xBB, 0xDE]);
    let data = w.into_bytes();

    let dataset = read(&data, ts).into_result().unwrap();
    assert_eq!(dataset.charset().initial(), CharacterSetTerm::IsoIr144);
    assert_eq!(
        dataset.element(tags::PATIENT_NAME).unwrap().to_str().unwrap(),
        "Ло"
    );

    let items = items(&dataset, tags::REFERENCED_SERIES_SEQUENCE);
    assert_eq!(items[0].charset().initial(), CharacterSetTerm::IsoIr100);
    assert_eq!(
        items[0].element(tags::PATIENT_NAME).unwrap().to_str().unwrap(),
        "João"
    );
    assert_eq!(items[1].charset().initial(), CharacterSetTerm::IsoIr144);
    assert_eq!(
        items[1].element(tags::PATIENT_NAME).unwrap().to_str().unwrap(),
        "Ло"
    );
}

#[test]
fn unsupported_character_set_falls_back_to_default() {
    let ts = TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN;
    let mut w = StreamWriter::new(ts);
    w.text(tags::SPECIFIC_CHARACTER_SET, VR::CS, "ISO_IR 999")
        .element(tags::PATIENT_NAME, VR::PN, &[b'A', 0xE9]);
    let data = w.into_bytes();

    let outcome = read(&data, ts);
    assert_eq!(
        outcome.warnings,
        vec![Warning::UnsupportedCharacterSet {
            term: "ISO_IR 999".to_string(),
            offset: 0,
        }]
    );
    let dataset = outcome.into_result().unwrap();
    assert!(dataset.charset().is_default());
    let name = dataset.element(tags::PATIENT_NAME).unwrap();
    assert!(!name.flags().charset_fallback);
    assert_eq!(name.to_str().unwrap(), "A\u{E9}");
}

#[test]
fn undecodable_text_is_flagged() {
    let ts = TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN;
    let mut w = StreamWriter::new(ts);
    w.text(tags::SPECIFIC_CHARACTER_SET, VR::CS, "ISO_IR 192")
        .element(tags::PATIENT_NAME, VR::PN, &[b'A', 0xFF]);
    let data = w.into_bytes();

    let outcome = read(&data, ts);
    assert_eq!(
        outcome.warnings,
        vec![Warning::CharsetFallback {
            tag: tags::PATIENT_NAME,
            offset: 18,
        }]
    );
    let dataset = outcome.into_result().unwrap();
    assert_eq!(dataset.charset().initial(), CharacterSetTerm::IsoIr192);
    let name = dataset.element(tags::PATIENT_NAME).unwrap();
    assert!(name.flags().charset_fallback);
    assert_eq!(name.to_str().unwrap(), "A\u{FF}");
}
