use std::io::{self, Read, Seek, SeekFrom};

use log::{debug, error, info};
use thiserror::Error;

use super::format::{
    Container, Header, Image, HEADER_SIZE, MIN_SOURCE_SIZE, PALETTE_BLOCK_SIZE, PALETTE_SIZE,
};
use super::header::HeaderError;
use crate::compression::{decompress, RleDecompressionError};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Header(#[from] HeaderError),

    #[error("Source is {actual} bytes, minimum well-formed size is {minimum}")]
    SourceTooShort { actual: u64, minimum: u64 },

    #[error("Unsupported format: {field} is {value}, expecting {expected}")]
    UnsupportedFormat {
        field: &'static str,
        value: u8,
        expected: u8,
    },

    #[error("Decompression failed")]
    DecompressionFailed(#[from] RleDecompressionError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Container {
    /// Reads a complete container out of a seekable byte source: the
    /// 128-byte header, the compressed pixel region in the middle, and
    /// the 256-entry palette from the last 768 bytes.
    ///
    /// Parses the layout only; whether the header describes a supported
    /// image is checked by [`decode`].
    ///
    /// # Errors
    /// - `DecodeError::Header` if the header cannot be read
    /// - `DecodeError::SourceTooShort` if the source cannot hold a header
    ///   plus the trailing palette block
    /// - `DecodeError::Io` for any other read failure
    pub fn load<R: Read + Seek>(r: &mut R) -> Result<Container, DecodeError> {
        let header = Header::parse(r)?;

        let total = r.seek(SeekFrom::End(0))?;
        if total < MIN_SOURCE_SIZE {
            error!(
                "Source too short: {} bytes, need at least {}",
                total, MIN_SOURCE_SIZE
            );
            return Err(DecodeError::SourceTooShort {
                actual: total,
                minimum: MIN_SOURCE_SIZE,
            });
        }

        // Compressed pixel region sits between the header and the
        // trailing separator-plus-palette block.
        let data_len = total as usize - HEADER_SIZE - PALETTE_BLOCK_SIZE;
        r.seek(SeekFrom::Start(HEADER_SIZE as u64))?;
        let mut data = vec![0u8; data_len];
        r.read_exact(&mut data)?;
        debug!("Compressed data length: {}", data.len());

        // One separator byte (0x0c on well-formed files, not checked)
        // precedes the palette.
        r.seek(SeekFrom::Current(1))?;
        let mut raw_palette = [0u8; PALETTE_SIZE];
        r.read_exact(&mut raw_palette)?;
        let palette: Vec<[u8; 4]> = raw_palette
            .chunks_exact(3)
            .map(|rgb| [rgb[0], rgb[1], rgb[2], 0xff])
            .collect();
        debug!("Palette read: {} colors", palette.len());

        Ok(Container {
            header,
            data,
            palette,
        })
    }

    /// Decompresses the pixel region and resolves every index through the
    /// palette into a raster-order RGBA grid.
    ///
    /// If decompression yields fewer bytes than width x height, the
    /// remaining cells resolve to palette entry 0 rather than failing;
    /// truncated legacy files are common and a partial image is more
    /// useful than an error.
    pub fn into_image(self) -> Result<Image, DecodeError> {
        let width = self.header.width();
        let height = self.header.height();

        let indices = decompress(&self.data)?;
        debug!(
            "Decompressed {} index bytes for a {}x{} grid",
            indices.len(),
            width,
            height
        );

        let mut rgba_data = vec![0u8; width * height * 4];
        let mut remaining = indices.iter();
        for y in 0..height {
            for x in 0..width {
                let index = remaining.next().copied().unwrap_or(0);
                let color = self.palette[index as usize];
                let offset = (y * width + x) * 4;
                rgba_data[offset..offset + 4].copy_from_slice(&color);
            }
        }

        Ok(Image::new(
            width as u32,
            height as u32,
            self.palette,
            rgba_data,
        ))
    }
}

/// Decodes an 8-bit single-plane 256-color file into an [`Image`].
///
/// The source must be finite and seekable; the palette lives in its last
/// 768 bytes. Headers announcing any other bit depth or plane count are
/// rejected with [`DecodeError::UnsupportedFormat`].
pub fn decode<R: Read + Seek>(r: &mut R) -> Result<Image, DecodeError> {
    let container = Container::load(r)?;

    let bpp = container.header.bits_per_pixel_per_plane;
    if bpp != 8 {
        error!("Header says {} bits per pixel, expecting 8", bpp);
        return Err(DecodeError::UnsupportedFormat {
            field: "bits per pixel per plane",
            value: bpp,
            expected: 8,
        });
    }
    let planes = container.header.num_planes;
    if planes != 1 {
        error!("Header says {} planes, expecting 1", planes);
        return Err(DecodeError::UnsupportedFormat {
            field: "number of planes",
            value: planes,
            expected: 1,
        });
    }

    let image = container.into_image()?;
    info!(
        "Decoded {}x{} image with {} palette entries",
        image.width,
        image.height,
        image.palette.len()
    );
    Ok(image)
}
