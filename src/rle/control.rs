// Control byte layout.
//
//   7 6 5 4 3 2 1 0
//   | '-----------'
//   |       n        run length, 0..=127
//   mode             0 = repeat, 1 = literal
//
// A repeat record is followed by one value byte, a literal record by `n`
// verbatim bytes.

/// Bit 7 selects the record mode.
pub const MODE_BIT: u8 = 0b1000_0000;

/// Bits 0..6 hold the run length.
pub const COUNT_MASK: u8 = 0b0111_1111;

/// Largest run a single record can describe.
pub const MAX_RUN: u8 = COUNT_MASK;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// One value byte, written `n` times.
    Repeat,
    /// `n` bytes copied verbatim.
    Literal,
}

impl Mode {
    /// Upper-case name used in logs and `inspect` output.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Repeat => "REPEAT",
            Mode::Literal => "LITERAL",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ControlByte
// ---------------------------------------------------------------------------

/// A parsed control byte. Every `u8` is a valid control byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlByte(u8);

impl ControlByte {
    /// Build a control byte from its fields. `count` is masked to 7 bits.
    #[inline]
    pub const fn new(mode: Mode, count: u8) -> Self {
        let bits = match mode {
            Mode::Repeat => 0,
            Mode::Literal => MODE_BIT,
        };
        Self(bits | (count & COUNT_MASK))
    }

    /// Wrap a raw byte read from the stream.
    #[inline]
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    /// The packed byte as it appears in the stream.
    #[inline]
    pub const fn to_byte(self) -> u8 {
        self.0
    }

    /// Record mode selected by bit 7.
    #[inline]
    pub const fn mode(self) -> Mode {
        if self.0 & MODE_BIT != 0 {
            Mode::Literal
        } else {
            Mode::Repeat
        }
    }

    /// Number of output bytes the record produces.
    #[inline]
    pub const fn count(self) -> u8 {
        self.0 & COUNT_MASK
    }

    /// Number of input bytes the whole record occupies, control byte included.
    #[inline]
    pub const fn record_len(self) -> usize {
        match self.mode() {
            Mode::Repeat => 2,
            Mode::Literal => 1 + self.count() as usize,
        }
    }
}

impl From<u8> for ControlByte {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}

impl From<ControlByte> for u8 {
    fn from(control: ControlByte) -> u8 {
        control.to_byte()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
