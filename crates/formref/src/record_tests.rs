use crate::{
    FormId, FormReference, FormSet, LoadOrder, LocalIndex, NAME_CAPACITY, PackageName,
    RECORD_SIZE, RawRecord, RecordError, ResultCode,
};

#[test]
fn record_size() {
    assert_eq!(RECORD_SIZE, 264);
    assert_eq!(std::mem::size_of::<RawRecord>(), 264);
}

#[test]
fn encoded_layout() {
    let r = FormReference::new(
        PackageName::new("Skyrim.esm").unwrap(),
        LocalIndex::new(0x0001_2EB7).unwrap(),
    );

    let bytes = r.to_bytes();

    assert_eq!(bytes.len(), RECORD_SIZE);
    assert_eq!(&bytes[..10], b"Skyrim.esm");
    assert!(bytes[10..NAME_CAPACITY].iter().all(|&b| b == 0));
    assert_eq!(&bytes[NAME_CAPACITY..], &0x0001_2EB7u32.to_ne_bytes());
}

#[test]
fn decode_reverses_encode() {
    let r = FormReference::new(PackageName::runtime(), LocalIndex::new(0x801).unwrap());

    assert_eq!(FormReference::from_bytes(&r.to_bytes()), Ok(r));
}

#[test]
fn all_zero_record_is_null_form() {
    let r = FormReference::from_bytes(&[0u8; RECORD_SIZE]).unwrap();

    assert!(r.is_null());
    assert!(r.package_name().is_empty());
    let none: Option<LoadOrder> = None;
    assert_eq!(r.to_identifier(&none, &FormSet::new()), (ResultCode::NullForm, 0));
}

#[test]
fn garbage_after_terminator_is_ignored() {
    let mut bytes = [0u8; RECORD_SIZE];
    bytes[..6].copy_from_slice(b"A.esp\0");
    bytes[6..NAME_CAPACITY].fill(0xCC);
    bytes[NAME_CAPACITY..].copy_from_slice(&0x10u32.to_ne_bytes());

    let r = FormReference::from_bytes(&bytes).unwrap();

    assert_eq!(r.package_name(), "A.esp");
    assert_eq!(r.local_index().as_u32(), 0x10);
}

#[test]
fn trailing_bytes_are_ignored() {
    let r = FormReference::new(PackageName::new("A.esp").unwrap(), LocalIndex::new(1).unwrap());
    let mut bytes = r.to_bytes().to_vec();
    bytes.extend_from_slice(&[0xFF; 8]);

    assert_eq!(FormReference::from_bytes(&bytes), Ok(r));
}

#[test]
fn short_buffer_is_rejected() {
    let err = FormReference::from_bytes(&[0u8; 100]).unwrap_err();

    assert_eq!(err, RecordError::TooShort(100));
    assert_eq!(err.to_string(), "record too small: 100 bytes (expected 264)");
}

#[test]
fn unterminated_name_is_rejected() {
    let mut bytes = [b'x'; RECORD_SIZE];
    bytes[NAME_CAPACITY..].copy_from_slice(&1u32.to_ne_bytes());

    assert_eq!(
        FormReference::from_bytes(&bytes),
        Err(RecordError::UnterminatedName)
    );
}

#[test]
fn code_page_name_decodes_as_not_loaded() {
    // "Caf\xe9.esp" as written by a Windows-1252 host.
    let mut bytes = [0u8; RECORD_SIZE];
    bytes[..8].copy_from_slice(b"Caf\xe9.esp");
    bytes[NAME_CAPACITY..].copy_from_slice(&0x10u32.to_ne_bytes());

    let r = FormReference::from_bytes(&bytes).unwrap();
    assert!(r.package_name().is_empty());
    assert_eq!(r.local_index().as_u32(), 0x10);

    let packages = LoadOrder::from_names(["Skyrim.esm", "Café.esp"]).unwrap();
    let forms: FormSet = [FormId(0x0100_0010)].into_iter().collect();
    assert_eq!(r.to_identifier(&packages, &forms), (ResultCode::ModNotLoaded, 0));
}

#[test]
fn local_index_above_24_bits_is_rejected() {
    let mut bytes = [0u8; RECORD_SIZE];
    bytes[NAME_CAPACITY..].copy_from_slice(&0x0100_0001u32.to_ne_bytes());

    let err = FormReference::from_bytes(&bytes).unwrap_err();
    assert_eq!(err, RecordError::LocalIndexOutOfRange(0x0100_0001));
    assert_eq!(err.to_string(), "local index 0x01000001 does not fit in 24 bits");
}

#[test]
fn longest_name_fills_buffer_with_terminator() {
    let name = "n".repeat(PackageName::MAX_LEN);
    let r = FormReference::new(PackageName::new(name).unwrap(), LocalIndex::new(2).unwrap());

    let bytes = r.to_bytes();

    assert_eq!(bytes[NAME_CAPACITY - 1], 0);
    assert_eq!(FormReference::from_bytes(&bytes), Ok(r));
}

#[test]
fn saved_record_survives_load_order_change() {
    let before = LoadOrder::from_names(["Skyrim.esm", "Update.esm", "A.esp"]).unwrap();
    let saved = FormReference::from_form_id(FormId(0x0200_0010), &before).to_bytes();

    let after = LoadOrder::from_names(["Skyrim.esm", "A.esp"]).unwrap();
    let forms: FormSet = [FormId(0x0100_0010)].into_iter().collect();
    let loaded = FormReference::from_bytes(&saved).unwrap();

    assert_eq!(loaded.to_identifier(&after, &forms), (ResultCode::Succeeded, 0x0100_0010));
}

#[test]
fn raw_record_roundtrip() {
    let mut raw = RawRecord::default();
    raw.mod_name[..5].copy_from_slice(b"B.esm");
    raw.form_id = 0x00AB_CDEF;

    assert_eq!(RawRecord::from_bytes(&raw.to_bytes()), Ok(raw));
    assert_eq!(raw.name_bytes(), Ok(&b"B.esm"[..]));
}
