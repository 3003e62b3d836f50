use crate::{kind::Kind, op::Op};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
/// Which coordinate streams a CIGAR operation advances.
pub struct Consumption {
    /// Operation advances the query coordinate.
    pub query: bool,
    /// Operation advances the reference coordinate.
    pub reference: bool,
}

impl Consumption {
    /// Advances neither stream.
    pub const NONE: Consumption = Consumption::new(false, false);

    /// New `Consumption` from a `(query, reference)` pair.
    pub const fn new(query: bool, reference: bool) -> Self {
        Consumption { query, reference }
    }

    /// Number of query positions `op` advances.
    ///
    /// ### Example
    /// ```
    /// use rs_cigar::{kind::Kind, op::Op};
    ///
    /// let op = Op::new(Kind::Deletion, 5);
    /// assert_eq!(op.consumption().query_len(op), 5);
    /// assert_eq!(op.consumption().reference_len(op), 0);
    /// ```
    pub const fn query_len(self, op: Op) -> u32 {
        if self.query {
            op.len()
        } else {
            0
        }
    }

    /// Number of reference positions `op` advances.
    pub const fn reference_len(self, op: Op) -> u32 {
        if self.reference {
            op.len()
        } else {
            0
        }
    }
}

impl From<Consumption> for (bool, bool) {
    fn from(consumption: Consumption) -> Self {
        (consumption.query, consumption.reference)
    }
}

/// Consumption indexed by kind ordinal.
///
/// Every ordinal a [`Kind`] can hold has an explicit entry, sentinel included.
pub(crate) const CONSUME: [Consumption; Kind::COUNT + 1] = [
    // Match
    Consumption::new(true, true),
    // Insertion
    Consumption::new(false, true),
    // Deletion
    Consumption::new(true, false),
    // Skipped
    Consumption::new(true, false),
    // SoftClipped
    Consumption::new(false, true),
    // HardClipped
    Consumption::NONE,
    // Padded
    Consumption::NONE,
    // Equal
    Consumption::new(true, true),
    // Mismatch
    Consumption::new(true, true),
    // Back
    Consumption::NONE,
    // Unknown
    Consumption::NONE,
];
