// Run-length format with a packed 7-bit control byte.
//
// # Modules
//
// - `control` - Control byte layout (mode bit + run length)
// - `decoder` - Record parsing and bounds-checked expansion

pub mod control;
pub mod decoder;

pub use control::{ControlByte, MAX_RUN, Mode};
pub use decoder::{
    DecodeError, DecodeOptions, Record, Records, RleDecoder, decode_all, decode_into,
    decode_with, decoded_len, records,
};
