use std::fmt;

use anyhow::bail;

use crate::consume::{Consumption, CONSUME};

/// Symbols indexed by kind ordinal. Last entry is the sentinel.
const SYMBOLS: [char; Kind::COUNT + 1] = ['M', 'I', 'D', 'N', 'S', 'H', 'P', '=', 'X', 'B', '?'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
/// Type of a CIGAR operation.
/// * See http://samtools.github.io/hts-specs/SAMv1.pdf
///
/// Discriminants are the ordinals stored in the low 4 bits of a packed [`Op`](crate::op::Op).
pub enum Kind {
    /// Alignment match (can be a sequence match or mismatch).
    Match = 0,
    /// Insertion to the reference.
    Insertion = 1,
    /// Deletion from the reference.
    Deletion = 2,
    /// Skipped region from the reference.
    Skipped = 3,
    /// Soft clipping (clipped sequence present in `SEQ`).
    SoftClipped = 4,
    /// Hard clipping (clipped sequence **not** present in `SEQ`).
    HardClipped = 5,
    /// Padding (silent deletion from padded reference).
    Padded = 6,
    /// Sequence match.
    Equal = 7,
    /// Sequence mismatch.
    Mismatch = 8,
    /// Skip backwards.
    Back = 9,
    /// Any 4-bit value that is not one of the above.
    Unknown = 10,
}

impl Kind {
    /// Number of defined kinds. Excludes [`Kind::Unknown`].
    pub const COUNT: usize = 10;

    /// Defined kinds in ordinal order.
    pub const ALL: [Kind; Kind::COUNT] = [
        Kind::Match,
        Kind::Insertion,
        Kind::Deletion,
        Kind::Skipped,
        Kind::SoftClipped,
        Kind::HardClipped,
        Kind::Padded,
        Kind::Equal,
        Kind::Mismatch,
        Kind::Back,
    ];

    /// Decode a kind from raw bits.
    ///
    /// Only the low 4 bits are looked at. Anything past [`Kind::Back`] is [`Kind::Unknown`].
    ///
    /// ### Example
    /// ```
    /// use rs_cigar::kind::Kind;
    ///
    /// assert_eq!(Kind::from_bits(7), Kind::Equal);
    /// assert_eq!(Kind::from_bits(0x17), Kind::Equal);
    /// assert_eq!(Kind::from_bits(13), Kind::Unknown);
    /// ```
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0xF {
            0 => Kind::Match,
            1 => Kind::Insertion,
            2 => Kind::Deletion,
            3 => Kind::Skipped,
            4 => Kind::SoftClipped,
            5 => Kind::HardClipped,
            6 => Kind::Padded,
            7 => Kind::Equal,
            8 => Kind::Mismatch,
            9 => Kind::Back,
            _ => Kind::Unknown,
        }
    }

    /// Ordinal of kind. [`Kind::Unknown`] is `10`.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Whether kind is one of the 10 defined operations.
    pub const fn is_defined(self) -> bool {
        !matches!(self, Kind::Unknown)
    }

    /// Single character code of kind. `?` for [`Kind::Unknown`].
    ///
    /// ### Example
    /// ```
    /// use rs_cigar::kind::Kind;
    ///
    /// assert_eq!(Kind::SoftClipped.symbol(), 'S');
    /// assert_eq!(Kind::Unknown.symbol(), '?');
    /// ```
    pub const fn symbol(self) -> char {
        SYMBOLS[self as usize]
    }

    /// Look up a defined kind by its symbol.
    ///
    /// # Arguments
    /// * `symbol`: One of `MIDNSHP=XB`.
    ///
    /// # Returns
    /// * Kind, if `symbol` names a defined one. `?` is not accepted.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Kind::ALL.into_iter().find(|kind| kind.symbol() == symbol)
    }

    /// Which coordinate streams an operation of this kind advances.
    pub const fn consumption(self) -> Consumption {
        CONSUME[self as usize]
    }
}

impl From<u8> for Kind {
    fn from(bits: u8) -> Self {
        Kind::from_bits(bits)
    }
}

impl From<Kind> for u8 {
    fn from(kind: Kind) -> Self {
        kind.bits()
    }
}

impl TryFrom<char> for Kind {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        let Some(kind) = Kind::from_symbol(symbol) else {
            bail!("Unknown CIGAR operation symbol: {symbol:?}");
        };
        Ok(kind)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
