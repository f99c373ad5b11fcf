//! Builders for synthetic files used by the decoding tests.

use lib_pcx::image::format::MARKER;

pub const HEADER_SIZE: usize = 128;

/// A 128-byte header for an 8-bit single-plane image covering
/// (0,0)..=(xmax,ymax).
pub fn build_header(xmax: u16, ymax: u16, bits_per_pixel: u8, planes: u8) -> [u8; HEADER_SIZE] {
    let mut header = [0u8; HEADER_SIZE];
    header[0] = MARKER;
    header[1] = 5; // version
    header[2] = 1; // RLE encoding
    header[3] = bits_per_pixel;
    header[8..10].copy_from_slice(&xmax.to_le_bytes());
    header[10..12].copy_from_slice(&ymax.to_le_bytes());
    header[65] = planes;
    header[66..68].copy_from_slice(&xmax.wrapping_add(1).to_le_bytes());
    header[68..70].copy_from_slice(&1u16.to_le_bytes());
    header
}

/// A 768-byte palette block, all entries zero except those given.
pub fn build_palette(entries: &[(usize, [u8; 3])]) -> [u8; 768] {
    let mut palette = [0u8; 768];
    for &(index, rgb) in entries {
        palette[index * 3..index * 3 + 3].copy_from_slice(&rgb);
    }
    palette
}

/// Assembles header + compressed region + separator + palette into a
/// complete byte source.
pub fn build_file(header: &[u8; HEADER_SIZE], compressed: &[u8], palette: &[u8; 768]) -> Vec<u8> {
    let mut file = Vec::with_capacity(HEADER_SIZE + compressed.len() + 769);
    file.extend_from_slice(header);
    file.extend_from_slice(compressed);
    file.push(0x0c); // palette separator
    file.extend_from_slice(palette);
    file
}
