//! Separate test suite for using `dicom_value!` in an isolated context,
//! without direct access to dependency `smallvec`

// empty module makes `smallvec` dependency unreachable,
// as would be typical in dependents of `dcmtlv_core`
// unless they include it themselves
mod smallvec {}

#[test]
fn use_dicom_value() {
    use dcmtlv_core::dicom_value;

    // multiple string literals with variant, no trailing comma
    let value = dicom_value!(Strs, ["BASE", "LIGHT", "DARK"]);
    assert_eq!(
        value.to_multi_str().as_ref(),
        &["BASE".to_owned(), "LIGHT".to_owned(), "DARK".to_owned(),],
    );

    // single string with variant
    let value = dicom_value!(Str, "PALETTE COLOR ");
    assert_eq!(value.to_str(), "PALETTE COLOR");

    // numeric values
    let value = dicom_value!(U16, [1, 2, 5]);
    assert_eq!(value.uint16_slice().unwrap(), &[1, 2, 5]);

    // tag values, trailing comma
    let value = dicom_value!(Tags, [dcmtlv_core::Tag(0x0010, 0x0010),]);
    assert_eq!(value.to_tag().unwrap(), dcmtlv_core::Tag(0x0010, 0x0010));
}
