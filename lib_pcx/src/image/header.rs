use std::io::{self, Read};

use log::debug;
use thiserror::Error;

use super::format::{Header, HEADER_SIZE};

#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("Header truncated: expected {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Walks a fixed-size buffer field by field. Every read advances the
/// position by the exact byte width of the field, so the declared field
/// order is the single source of truth for the layout.
struct FieldReader<'a> {
    buf: &'a [u8; HEADER_SIZE],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    fn new(buf: &'a [u8; HEADER_SIZE]) -> Self {
        Self { buf, pos: 0 }
    }

    fn u8(&mut self) -> u8 {
        let value = self.buf[self.pos];
        self.pos += 1;
        value
    }

    fn u16_le(&mut self) -> u16 {
        let value = u16::from_le_bytes([self.buf[self.pos], self.buf[self.pos + 1]]);
        self.pos += 2;
        value
    }

    fn bytes<const N: usize>(&mut self) -> [u8; N] {
        let mut block = [0u8; N];
        block.copy_from_slice(&self.buf[self.pos..self.pos + N]);
        self.pos += N;
        block
    }
}

impl Header {
    /// Reads and parses the fixed 128-byte header from the start of `r`,
    /// advancing the source cursor by exactly 128 bytes.
    ///
    /// Performs no semantic validation: marker, version, bit depth and
    /// plane count come back as-is and are the caller's job to check.
    ///
    /// # Errors
    /// - `HeaderError::TruncatedInput` if the source ends before 128 bytes
    /// - `HeaderError::Io` for any other read failure
    pub fn parse(r: &mut impl Read) -> Result<Header, HeaderError> {
        let mut buf = [0u8; HEADER_SIZE];
        let mut filled = 0;
        while filled < HEADER_SIZE {
            match r.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(HeaderError::TruncatedInput {
                        expected: HEADER_SIZE,
                        actual: filled,
                    })
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(HeaderError::Io(e)),
            }
        }

        let mut fields = FieldReader::new(&buf);
        let header = Header {
            marker: fields.u8(),
            version: fields.u8(),
            encoding: fields.u8(),
            bits_per_pixel_per_plane: fields.u8(),
            window_x_min: fields.u16_le(),
            window_y_min: fields.u16_le(),
            window_x_max: fields.u16_le(),
            window_y_max: fields.u16_le(),
            vertical_dpi: fields.u16_le(),
            horizontal_dpi: fields.u16_le(),
            palette16: fields.bytes::<48>(),
            reserved: fields.u8(),
            num_planes: fields.u8(),
            bytes_per_plane_line: fields.u16_le(),
            palette_info: fields.u16_le(),
            horizontal_screen_size: fields.u16_le(),
            vertical_screen_size: fields.u16_le(),
            padding: fields.bytes::<54>(),
        };
        debug_assert_eq!(fields.pos, HEADER_SIZE);
        debug!(
            "Header parsed: version={} encoding={} bpp={} planes={} window=({},{})-({},{})",
            header.version,
            header.encoding,
            header.bits_per_pixel_per_plane,
            header.num_planes,
            header.window_x_min,
            header.window_y_min,
            header.window_x_max,
            header.window_y_max
        );
        Ok(header)
    }
}
