// RLE decoder: record parsing and bounds-checked expansion.
//
// A stream is a flat sequence of records with no header and no terminator.
// Each record is parsed into a `Record` once; its input span and output span
// are both checked before any byte of it is written, so a failing record
// never leaves a partial run behind.

use super::control::{ControlByte, MAX_RUN, Mode};

/// Expansion limit used by `DecodeOptions::default()` (16 MiB).
pub const DEFAULT_MAX_OUTPUT_LEN: usize = 16 * 1024 * 1024;

// ---------------------------------------------------------------------------
// Decoder error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The record starting at `offset` runs past the end of the input.
    #[error(
        "truncated input: record at offset {offset} needs {needed} bytes, only {available} left"
    )]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// The record starting at `offset` would grow the output to `needed`
    /// bytes, past `capacity`.
    #[error(
        "output overflow: record at offset {offset} needs {needed} output bytes, capacity is {capacity}"
    )]
    OutputOverflow {
        offset: usize,
        needed: usize,
        capacity: usize,
    },
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Options for the allocating decode entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Streams expanding past this many bytes are rejected before allocation.
    pub max_output_len: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_output_len: DEFAULT_MAX_OUTPUT_LEN,
        }
    }
}

impl DecodeOptions {
    /// No expansion limit beyond what the input itself can describe.
    pub fn unlimited() -> Self {
        Self {
            max_output_len: usize::MAX,
        }
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One decoded record, borrowing literal data from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record<'a> {
    Repeat { count: u8, value: u8 },
    Literal { bytes: &'a [u8] },
}

impl Record<'_> {
    /// Mode of the control byte that introduced this record.
    pub fn mode(&self) -> Mode {
        match self {
            Record::Repeat { .. } => Mode::Repeat,
            Record::Literal { .. } => Mode::Literal,
        }
    }

    /// Bytes this record produces.
    #[inline]
    pub fn output_len(&self) -> usize {
        match self {
            Record::Repeat { count, .. } => *count as usize,
            Record::Literal { bytes } => bytes.len(),
        }
    }

    /// Bytes this record occupies in the input, control byte included.
    #[inline]
    pub fn input_len(&self) -> usize {
        match self {
            Record::Repeat { .. } => 2,
            Record::Literal { bytes } => 1 + bytes.len(),
        }
    }

    /// The control byte that introduces this record.
    ///
    /// Records yielded by `records()` always have one. A hand-built
    /// `Literal` longer than `MAX_RUN` bytes has no single control byte and
    /// returns `None`.
    pub fn control(&self) -> Option<ControlByte> {
        let count = u8::try_from(self.output_len()).ok()?;
        (count <= MAX_RUN).then(|| ControlByte::new(self.mode(), count))
    }

    /// Write the expanded run into `dst`, which must be exactly
    /// `output_len()` bytes long.
    #[inline]
    fn expand(&self, dst: &mut [u8]) {
        match self {
            Record::Repeat { value, .. } => dst.fill(*value),
            Record::Literal { bytes } => dst.copy_from_slice(bytes),
        }
    }
}

/// Parse the record whose control byte sits at `input[offset]`.
fn parse_record(input: &[u8], offset: usize) -> Result<Record<'_>, DecodeError> {
    let control = ControlByte::from_byte(input[offset]);
    let available = input.len() - offset;
    let needed = control.record_len();
    if needed > available {
        return Err(DecodeError::TruncatedInput {
            offset,
            needed,
            available,
        });
    }

    let body = &input[offset + 1..offset + needed];
    Ok(match control.mode() {
        Mode::Repeat => Record::Repeat {
            count: control.count(),
            value: body[0],
        },
        Mode::Literal => Record::Literal { bytes: body },
    })
}

// ---------------------------------------------------------------------------
// Record iterator
// ---------------------------------------------------------------------------

/// Iterates over the records of an encoded stream, yielding each record with
/// the input offset of its control byte. Stops after the first error.
pub struct Records<'a> {
    input: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> Records<'a> {
    /// Start at the first record of `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            failed: false,
        }
    }

    /// Input offset of the next record.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Result<(usize, Record<'a>), DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.input.len() {
            return None;
        }
        let offset = self.pos;
        match parse_record(self.input, offset) {
            Ok(record) => {
                self.pos += record.input_len();
                Some(Ok((offset, record)))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Iterate over the records of `input`.
pub fn records(input: &[u8]) -> Records<'_> {
    Records::new(input)
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Walk the whole stream without writing, returning the expanded length.
/// Fails with `OutputOverflow` as soon as the running total passes `capacity`.
fn scan(input: &[u8], capacity: usize) -> Result<usize, DecodeError> {
    let mut total = 0usize;
    for item in records(input) {
        let (offset, record) = item?;
        let needed = total + record.output_len();
        if needed > capacity {
            return Err(DecodeError::OutputOverflow {
                offset,
                needed,
                capacity,
            });
        }
        total = needed;
    }
    Ok(total)
}

/// Decode into `output`, returning `(bytes_written, records)`.
fn decode_records(input: &[u8], output: &mut [u8]) -> Result<(usize, u64), DecodeError> {
    let capacity = output.len();
    let mut written = 0usize;
    let mut count = 0u64;

    for item in records(input) {
        let (offset, record) = item?;
        let end = written + record.output_len();
        let dst = output
            .get_mut(written..end)
            .ok_or(DecodeError::OutputOverflow {
                offset,
                needed: end,
                capacity,
            })?;
        log::trace!(
            "record @{offset}: {} n={} -> output {written}..{end}",
            record.mode(),
            record.output_len()
        );
        record.expand(dst);
        written = end;
        count += 1;
    }

    Ok((written, count))
}

fn log_failure<T>(result: Result<T, DecodeError>) -> Result<T, DecodeError> {
    if let Err(ref e) = result {
        log::debug!("rle decode failed: {e}");
    }
    result
}

/// Decode `input` into the caller-owned `output`, starting at offset 0.
///
/// Returns the number of bytes written. Bytes of `output` past that count
/// are left untouched. On error, every record before the failing one has
/// been written and nothing of the failing record has.
pub fn decode_into(input: &[u8], output: &mut [u8]) -> Result<usize, DecodeError> {
    let (written, count) = log_failure(decode_records(input, output))?;
    log::debug!(
        "rle decode: {} input bytes, {count} records, {written} output bytes",
        input.len()
    );
    Ok(written)
}

/// Length `input` expands to, after validating every record.
pub fn decoded_len(input: &[u8]) -> Result<usize, DecodeError> {
    log_failure(scan(input, usize::MAX))
}

/// Decode `input` into a new, exactly sized buffer.
pub fn decode_all(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with(input, &DecodeOptions::unlimited())
}

/// Decode `input` into a new buffer, rejecting streams that expand past
/// `opts.max_output_len` before anything is allocated.
pub fn decode_with(input: &[u8], opts: &DecodeOptions) -> Result<Vec<u8>, DecodeError> {
    let len = log_failure(scan(input, opts.max_output_len))?;
    let mut output = vec![0u8; len];
    decode_into(input, &mut output)?;
    Ok(output)
}

// ---------------------------------------------------------------------------
// Reusable decoder
// ---------------------------------------------------------------------------

/// Decoder that keeps its output buffer across streams and tracks progress.
#[derive(Debug, Default)]
pub struct RleDecoder {
    opts: DecodeOptions,
    buf: Vec<u8>,
    bytes_decoded: u64,
    records_decoded: u64,
    streams_decoded: u64,
}

impl RleDecoder {
    /// Decoder with `DecodeOptions::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoder enforcing `opts` on every stream.
    pub fn with_options(opts: DecodeOptions) -> Self {
        Self {
            opts,
            ..Self::default()
        }
    }

    /// Options this decoder was built with.
    pub fn options(&self) -> &DecodeOptions {
        &self.opts
    }

    /// Decode one stream. The returned slice is valid until the next call.
    pub fn decode(&mut self, input: &[u8]) -> Result<&[u8], DecodeError> {
        let len = log_failure(scan(input, self.opts.max_output_len))?;
        self.buf.clear();
        self.buf.resize(len, 0);

        let (written, count) = log_failure(decode_records(input, &mut self.buf))?;
        self.bytes_decoded += written as u64;
        self.records_decoded += count;
        self.streams_decoded += 1;
        Ok(&self.buf[..written])
    }

    /// Total output bytes produced so far.
    pub fn bytes_decoded(&self) -> u64 {
        self.bytes_decoded
    }

    /// Total records decoded so far.
    pub fn records_decoded(&self) -> u64 {
        self.records_decoded
    }

    /// Number of streams decoded successfully.
    pub fn streams_decoded(&self) -> u64 {
        self.streams_decoded
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
