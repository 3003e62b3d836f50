use std::{fmt, str::FromStr};

use anyhow::{bail, Context};
use log::debug;

use crate::{config::ParseConfig, consume::Consumption, kind::Kind};

/// Bits of a packed operation holding the kind.
pub const KIND_BITS: u32 = 4;
/// Mask selecting the kind bits.
pub const KIND_MASK: u32 = (1 << KIND_BITS) - 1;
/// Longest run length a packed operation can hold. `2^28 - 1`.
pub const MAX_LEN: u32 = u32::MAX >> KIND_BITS;

/// A single CIGAR operation packed as in BAM records.
///
/// ```text
///  31                             4 3      0
/// +--------------------------------+--------+
/// |             length             |  kind  |
/// +--------------------------------+--------+
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Op(u32);

impl Op {
    /// Pack `kind` and `len` into an operation.
    ///
    /// `len` must not exceed [`MAX_LEN`]. Bits past it are discarded. Use [`Op::try_new`] to
    /// check instead.
    ///
    /// ### Example
    /// ```
    /// use rs_cigar::{kind::Kind, op::Op};
    ///
    /// let op = Op::new(Kind::Match, 10);
    /// assert_eq!(op.into_bits(), 10 << 4);
    /// assert_eq!(op.to_string(), "10M");
    /// ```
    pub const fn new(kind: Kind, len: u32) -> Self {
        Op((len << KIND_BITS) | (kind.bits() as u32 & KIND_MASK))
    }

    /// Pack `kind` and `len`, rejecting [`Kind::Unknown`] and lengths above [`MAX_LEN`].
    pub fn try_new(kind: Kind, len: u32) -> anyhow::Result<Self> {
        if !kind.is_defined() {
            bail!("Cannot build CIGAR operation of unknown kind.");
        }
        if len > MAX_LEN {
            bail!("CIGAR operation length {len} exceeds maximum {MAX_LEN}.");
        }
        Ok(Op::new(kind, len))
    }

    /// Wrap an already packed value.
    pub const fn from_bits(bits: u32) -> Self {
        Op(bits)
    }

    /// Packed value.
    pub const fn into_bits(self) -> u32 {
        self.0
    }

    /// Raw low 4 bits, before mapping to a [`Kind`].
    pub const fn kind_bits(self) -> u8 {
        (self.0 & KIND_MASK) as u8
    }

    /// Kind of operation. Values past [`Kind::Back`] decode to [`Kind::Unknown`].
    pub const fn kind(self) -> Kind {
        Kind::from_bits(self.kind_bits())
    }

    /// Number of positions affected by operation.
    pub const fn len(self) -> u32 {
        self.0 >> KIND_BITS
    }

    /// Whether operation has a run length of zero.
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Which coordinate streams operation advances.
    pub const fn consumption(self) -> Consumption {
        self.kind().consumption()
    }

    /// Read a single operation from text, ex. `15S`.
    ///
    /// # Arguments
    /// * `s`: Decimal length immediately followed by one of `MIDNSHP=XB`.
    /// * `config`: [`ParseConfig`] limits.
    ///
    /// # Returns
    /// * Packed operation.
    ///
    /// ### Example
    /// ```
    /// use rs_cigar::{config::ParseConfig, kind::Kind, op::Op};
    ///
    /// let op = Op::parse("15S", &ParseConfig::default()).unwrap();
    /// assert_eq!(op.kind(), Kind::SoftClipped);
    /// assert_eq!(op.len(), 15);
    ///
    /// assert!(Op::parse("15S3M", &ParseConfig::default()).is_err());
    /// ```
    pub fn parse(s: &str, config: &ParseConfig) -> anyhow::Result<Self> {
        parse_op(s, config).inspect_err(|err| debug!("Rejected CIGAR operation {s:?}: {err:#}"))
    }
}

fn parse_op(s: &str, config: &ParseConfig) -> anyhow::Result<Op> {
    let digits_end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    let (digits, rest) = s.split_at(digits_end);

    if digits.is_empty() {
        bail!("Missing length in CIGAR operation {s:?}.");
    }
    if !config.allow_leading_zeros && digits.len() > 1 && digits.starts_with('0') {
        bail!("Leading zeros in CIGAR operation length {digits:?}.");
    }

    // Wider than u32 so over-long lengths are reported against the limit.
    let len: u64 = digits
        .parse()
        .with_context(|| format!("Invalid CIGAR operation length {digits:?}."))?;
    let limit = config.len_limit();
    if len > u64::from(limit) {
        bail!("CIGAR operation length {len} exceeds maximum {limit}.");
    }

    let mut symbols = rest.chars();
    let Some(symbol) = symbols.next() else {
        bail!("Missing operation symbol in CIGAR operation {s:?}.");
    };
    let kind = Kind::try_from(symbol)?;
    if !symbols.as_str().is_empty() {
        bail!(
            "Trailing characters {:?} after CIGAR operation {s:?}.",
            symbols.as_str()
        );
    }

    Ok(Op::new(kind, u32::try_from(len)?))
}

impl From<u32> for Op {
    fn from(bits: u32) -> Self {
        Op::from_bits(bits)
    }
}

impl From<Op> for u32 {
    fn from(op: Op) -> Self {
        op.into_bits()
    }
}

impl FromStr for Op {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Op::parse(s, &ParseConfig::default())
    }
}

/// Canonical form: length then symbol, ex. `10M`.
impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.len(), self.kind())
    }
}
