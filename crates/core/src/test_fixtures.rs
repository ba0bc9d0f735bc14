//! Minimal little-endian EXIF JPEGs for tests.
//! `crates/cli/tests/cli.rs` carries its own copy of `jpeg_with_date_time_original`.

const TAG_ORIENTATION: u16 = 0x0112;
const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
const TAG_MAKER_NOTE: u16 = 0x927c;
const TYPE_ASCII: u16 = 2;
const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;
const TYPE_UNDEFINED: u16 = 7;

// IFD0 at 8 holds one entry, so the Exif IFD starts at 8 + 2 + 12 + 4.
const EXIF_IFD_OFFSET: u32 = 26;

type Entry = (u16, u16, u32, u32);

pub fn jpeg_with_date_time_original(raw: &str) -> Vec<u8> {
    exif_jpeg(raw, &[])
}

/// A valid DateTimeOriginal next to a maker note that points past the data.
pub fn jpeg_with_truncated_maker_note(raw: &str) -> Vec<u8> {
    exif_jpeg(raw, &[(TAG_MAKER_NOTE, TYPE_UNDEFINED, 64, 4096)])
}

pub fn jpeg_without_date_time_original() -> Vec<u8> {
    let mut tiff = tiff_header();
    push_ifd(&mut tiff, &[(TAG_ORIENTATION, TYPE_SHORT, 1, 1)]);
    wrap_in_jpeg(&tiff)
}

fn exif_jpeg(raw: &str, extra: &[Entry]) -> Vec<u8> {
    let mut value = raw.as_bytes().to_vec();
    value.push(0);
    assert!(value.len() > 4, "value must not fit inline");

    let entry_count = 1 + extra.len() as u32;
    let date_offset = EXIF_IFD_OFFSET + 2 + 12 * entry_count + 4;

    let mut entries = vec![(
        TAG_DATE_TIME_ORIGINAL,
        TYPE_ASCII,
        value.len() as u32,
        date_offset,
    )];
    entries.extend_from_slice(extra);

    let mut tiff = tiff_header();
    push_ifd(&mut tiff, &[(TAG_EXIF_IFD_POINTER, TYPE_LONG, 1, EXIF_IFD_OFFSET)]);
    push_ifd(&mut tiff, &entries);
    tiff.extend_from_slice(&value);
    wrap_in_jpeg(&tiff)
}

fn tiff_header() -> Vec<u8> {
    let mut tiff = b"II".to_vec();
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes());
    tiff
}

fn push_ifd(tiff: &mut Vec<u8>, entries: &[Entry]) {
    tiff.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for &(tag, typ, count, value) in entries {
        tiff.extend_from_slice(&tag.to_le_bytes());
        tiff.extend_from_slice(&typ.to_le_bytes());
        tiff.extend_from_slice(&count.to_le_bytes());
        tiff.extend_from_slice(&value.to_le_bytes());
    }
    tiff.extend_from_slice(&0u32.to_le_bytes());
}

fn wrap_in_jpeg(tiff: &[u8]) -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    let len = (2 + 6 + tiff.len()) as u16;
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(tiff);
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}
