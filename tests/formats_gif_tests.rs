use pixinfo::formats::gif;
use pixinfo::probe::decode_bytes;
use pixinfo::ImageFormat;

fn gif_header(version: &[u8; 6], width: u16, height: u16) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(version);
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    // Packed flags, background color index, pixel aspect ratio.
    data.extend_from_slice(&[0xF7, 0x00, 0x00]);
    data.resize(24, 0x00);
    data
}

#[test]
fn test_decode_gif89a_dimensions() {
    let dims = decode_bytes(&gif_header(b"GIF89a", 320, 200)).unwrap();
    assert_eq!(dims.width, 320);
    assert_eq!(dims.height, 200);
    assert_eq!(dims.format, ImageFormat::Gif);
}

#[test]
fn test_decode_gif87a_dimensions() {
    let dims = decode_bytes(&gif_header(b"GIF87a", 16, 16)).unwrap();
    assert_eq!(dims.width, 16);
    assert_eq!(dims.height, 16);
    assert_eq!(dims.format, ImageFormat::Gif);
}

#[test]
fn test_gif_dimensions_are_little_endian() {
    // 0x0102 stored as 02 01, 0x0304 as 04 03.
    let dims = decode_bytes(&gif_header(b"GIF89a", 0x0102, 0x0304)).unwrap();
    assert_eq!(dims.width, 0x0102);
    assert_eq!(dims.height, 0x0304);
}

#[test]
fn test_gif_signature_sniffing() {
    assert!(gif::matches_signature(b"GIF89a\x40\x01\xF0\x00"));
    assert!(gif::matches_signature(b"GIF87a\x40\x01\xF0\x00"));
    assert!(!gif::matches_signature(b"GIF88a\x40\x01\xF0\x00"));
    assert!(!gif::matches_signature(b"GIF8"));
}
