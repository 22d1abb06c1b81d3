//! Framerle: bounds-checked decoding of 7-bit run-length streams and
//! byte-wise delta reversal.
//!
//! The crate provides:
//! - The RLE decoder (`rle`)
//! - Wrapping-subtraction delta reversal (`delta`)
//! - Frame reconstruction chaining the two, and page-major bitmap views (`frame`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use framerle::{delta, frame, rle};
//!
//! // REPEAT n=3 of 0, then LITERAL n=2 of [1, 0].
//! let decoded = rle::decode_all(&[3, 0, 0x82, 1, 0]).unwrap();
//! assert_eq!(decoded, [0, 0, 0, 1, 0]);
//!
//! let base = [5, 5, 5, 5, 5];
//! let payload = delta::undiff(&base, &decoded).unwrap();
//! assert_eq!(payload, [5, 5, 5, 4, 5]);
//!
//! assert_eq!(frame::reconstruct(&base, &[3, 0, 0x82, 1, 0]).unwrap(), payload);
//! ```

pub mod delta;
pub mod frame;
pub mod rle;

#[cfg(feature = "cli")]
pub mod cli;

pub use delta::{DeltaError, undiff, undiff_in_place};
pub use frame::{Bitmap, FrameError, FrameStats, reconstruct};
pub use rle::{DecodeError, DecodeOptions, Record, decode_all, decode_into};
