/// The first byte of a well-formed file. Parsing does not enforce it;
/// callers that want strict validation check it themselves.
pub const MARKER: u8 = 0x0a;

/// Size of the fixed-layout header at the start of every file.
pub const HEADER_SIZE: usize = 128;

/// Number of entries in the trailing palette.
pub const PALETTE_LEN: usize = 256;

/// Size in bytes of the trailing palette (256 RGB triples).
pub const PALETTE_SIZE: usize = PALETTE_LEN * 3;

/// Size of the trailing block: one separator byte followed by the palette.
pub const PALETTE_BLOCK_SIZE: usize = PALETTE_SIZE + 1;

/// Smallest byte length a source can have: header plus separator plus
/// palette, with a zero-length compressed region in between.
pub const MIN_SOURCE_SIZE: u64 = (HEADER_SIZE + PALETTE_BLOCK_SIZE) as u64;

/// The fixed 128-byte header, field for field.
///
/// All multi-byte integers are little-endian on the wire. The inline
/// 16-color palette and the trailing padding carry no meaning for the
/// 8-bit path but are kept as opaque blocks so the parsed header maps
/// back onto the raw bytes without loss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub marker: u8,
    /// 0, 2, 3, 4, or 5 in practice. Not validated.
    pub version: u8,
    /// 1 on almost every file, rarely 0. Not validated.
    pub encoding: u8,
    pub bits_per_pixel_per_plane: u8,
    /// Image width = xmax - xmin + 1.
    pub window_x_min: u16,
    /// Image height = ymax - ymin + 1.
    pub window_y_min: u16,
    pub window_x_max: u16,
    pub window_y_max: u16,
    /// Unreliable on real files; informational only.
    pub vertical_dpi: u16,
    pub horizontal_dpi: u16,
    /// Inline 16-color palette. Unused by the 8-bit path.
    pub palette16: [u8; 48],
    pub reserved: u8,
    pub num_planes: u8,
    pub bytes_per_plane_line: u16,
    /// 1 = color/monochrome, 2 = grayscale.
    pub palette_info: u16,
    pub horizontal_screen_size: u16,
    pub vertical_screen_size: u16,
    pub padding: [u8; 54],
}

impl Header {
    /// Image width derived from the window bounds.
    pub fn width(&self) -> usize {
        self.window_x_max.saturating_sub(self.window_x_min) as usize + 1
    }

    /// Image height derived from the window bounds.
    pub fn height(&self) -> usize {
        self.window_y_max.saturating_sub(self.window_y_min) as usize + 1
    }
}

/// Raw container contents: the parsed header, the still-compressed pixel
/// region, and the resolved 256-entry palette.
#[derive(Debug)]
pub struct Container {
    pub header: Header,
    pub data: Vec<u8>,
    pub palette: Vec<[u8; 4]>,
}

/// A fully decoded image: raster-order RGBA pixels plus the palette the
/// indices were resolved through.
///
/// Dimensions are `u32`: the window bounds are u16 but the derived extent
/// `max - min + 1` reaches 65536, one past `u16::MAX`.
#[derive(Debug)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub palette: Vec<[u8; 4]>,
    pub rgba_data: Vec<u8>,
}

impl Image {
    pub fn new(width: u32, height: u32, palette: Vec<[u8; 4]>, rgba_data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            palette,
            rgba_data,
        }
    }

    /// RGBA color of the pixel at (x, y), top-left origin.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.rgba_data[offset],
            self.rgba_data[offset + 1],
            self.rgba_data[offset + 2],
            self.rgba_data[offset + 3],
        ]
    }
}
