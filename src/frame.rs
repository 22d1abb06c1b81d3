// Frame reconstruction: RLE-decode a delta, then reverse it against a base.
//
// Frames are stored as `rle(diff(base, frame))`. The producer trims trailing
// zero bytes from a frame before diffing, so a stream may expand to fewer
// bytes than the base. Positions past the decoded prefix carry a zero delta
// and come out equal to the base.
//
// Rebuilt frames are monochrome page-major bitmaps: the bytes run in rows of
// `width` columns, and bit k of the byte at column x in page p is pixel row
// `p * 8 + k`.

use crate::delta::{self, DeltaError};
use crate::rle::decoder::{self, DecodeError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("rle: {0}")]
    Decode(#[from] DecodeError),
    #[error("delta: {0}")]
    Delta(#[from] DeltaError),
    /// Bitmap heights come in whole 8-row pages.
    #[error("bitmap height {height} is not a multiple of 8")]
    BitmapHeight { height: usize },
    /// More bytes than a `width` x `height` bitmap holds.
    #[error("bitmap {width}x{height} holds fewer than {len} bytes")]
    BitmapSize {
        width: usize,
        height: usize,
        len: usize,
    },
}

/// Sizes observed while rebuilding one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// Length of the compressed delta stream.
    pub compressed_len: usize,
    /// Bytes the stream expanded to (at most `frame_len`).
    pub expanded_len: usize,
    /// Length of the rebuilt frame, equal to the base length.
    pub frame_len: usize,
}

impl FrameStats {
    /// Compressed size over frame size; 0.0 for an empty frame.
    pub fn ratio(&self) -> f64 {
        if self.frame_len == 0 {
            0.0
        } else {
            self.compressed_len as f64 / self.frame_len as f64
        }
    }
}

/// Rebuild a frame into `out`, which must be exactly `base.len()` bytes.
pub fn reconstruct_into(
    base: &[u8],
    compressed: &[u8],
    out: &mut [u8],
) -> Result<FrameStats, FrameError> {
    if out.len() != base.len() {
        return Err(DeltaError::LengthMismatch {
            base: base.len(),
            encoded: out.len(),
        }
        .into());
    }

    let expanded_len = decoder::decode_into(compressed, out)?;
    out[expanded_len..].fill(0);
    delta::undiff_in_place(base, out)?;

    let stats = FrameStats {
        compressed_len: compressed.len(),
        expanded_len,
        frame_len: out.len(),
    };
    log::debug!(
        "frame: {} compressed -> {} expanded -> {} bytes",
        stats.compressed_len,
        stats.expanded_len,
        stats.frame_len
    );
    Ok(stats)
}

/// Rebuild a frame, returning it with its stats.
pub fn reconstruct_with_stats(
    base: &[u8],
    compressed: &[u8],
) -> Result<(Vec<u8>, FrameStats), FrameError> {
    let mut out = vec![0u8; base.len()];
    let stats = reconstruct_into(base, compressed, &mut out)?;
    Ok((out, stats))
}

/// Rebuild a frame from `base` and its compressed delta.
pub fn reconstruct(base: &[u8], compressed: &[u8]) -> Result<Vec<u8>, FrameError> {
    reconstruct_with_stats(base, compressed).map(|(frame, _)| frame)
}

// ---------------------------------------------------------------------------
// Bitmap
// ---------------------------------------------------------------------------

/// Rows per page; one bit of each page byte per row.
const PAGE_ROWS: usize = 8;

/// A monochrome frame in page-major layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pages: Vec<u8>,
}

impl Bitmap {
    /// Wrap page-major `bytes` as a `width` x `height` bitmap.
    ///
    /// Frames are stored with trailing zero bytes trimmed, so `bytes` may be
    /// shorter than the full bitmap; the missing tail reads as clear pixels.
    pub fn new(width: usize, height: usize, bytes: &[u8]) -> Result<Self, FrameError> {
        if height % PAGE_ROWS != 0 {
            return Err(FrameError::BitmapHeight { height });
        }
        let full = width
            .checked_mul(height / PAGE_ROWS)
            .filter(|&full| bytes.len() <= full)
            .ok_or(FrameError::BitmapSize {
                width,
                height,
                len: bytes.len(),
            })?;

        let mut pages = bytes.to_vec();
        pages.resize(full, 0);
        Ok(Self {
            width,
            height,
            pages,
        })
    }

    /// Wrap `bytes` as a bitmap `width` columns wide, with as many pages as
    /// the bytes fill (the last one zero-padded).
    pub fn from_pages(width: usize, bytes: &[u8]) -> Result<Self, FrameError> {
        if width == 0 {
            return Self::new(0, 0, bytes);
        }
        Self::new(width, bytes.len().div_ceil(width) * PAGE_ROWS, bytes)
    }

    /// Columns, one byte per column per page.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows, always a whole number of pages.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the pixel at column `x`, row `y` is set. Pixels outside the
    /// bitmap read as clear.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.pages[(y / PAGE_ROWS) * self.width + x];
        (byte >> (y % PAGE_ROWS)) & 1 == 1
    }

    /// Number of set pixels.
    pub fn count_set(&self) -> usize {
        self.pages.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Page-major bytes with trailing zero bytes trimmed, as frames are stored.
    pub fn to_bytes(&self) -> Vec<u8> {
        let end = self
            .pages
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |i| i + 1);
        self.pages[..end].to_vec()
    }
}

/// Two terminal cells per pixel, one line per row.
impl std::fmt::Display for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                f.write_str(if self.pixel(x, y) { "██" } else { "  " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
