use crate::{kind::Kind, op::Op};

/// Describes which symbols an edit path is written with.
/// * See http://samtools.github.io/hts-specs/SAMv1.pdf
/// * See http://drive5.com/usearch/manual/cigar.html
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CigarFormat {
    #[default]
    /// Match: 'M', Insertion: 'I', Deletion: 'D', Mismatch: 'M'.
    Standard,
    /// Match: '=', Insertion: 'I', Deletion: 'D', Mismatch: 'X'.
    Extended,
}

/// Single step of an edit-distance alignment path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Match
    Match,
    /// Insertion to target = deletion from query.
    ///
    /// ### Example:
    /// * Target: `ATCG`
    /// * Query:  `A-CG`
    Insert,
    /// Deletion from target = insertion to query.
    ///
    /// ### Example:
    /// * Target: `A-CG`
    /// * Query:  `ATCG`
    Delete,
    /// Mismatch
    Mismatch,
}

impl EditOp {
    /// Operation kind written for this step.
    ///
    /// # Arguments
    /// * `format`: [`CigarFormat`] deciding whether matches and mismatches are told apart.
    ///
    /// ### Example
    /// ```
    /// use rs_cigar::{cigar::{CigarFormat, EditOp}, kind::Kind};
    ///
    /// assert_eq!(EditOp::Mismatch.kind(CigarFormat::Standard), Kind::Match);
    /// assert_eq!(EditOp::Mismatch.kind(CigarFormat::Extended), Kind::Mismatch);
    /// ```
    pub const fn kind(self, format: CigarFormat) -> Kind {
        match (self, format) {
            (EditOp::Match | EditOp::Mismatch, CigarFormat::Standard) => Kind::Match,
            (EditOp::Match, CigarFormat::Extended) => Kind::Equal,
            (EditOp::Mismatch, CigarFormat::Extended) => Kind::Mismatch,
            (EditOp::Insert, _) => Kind::Insertion,
            (EditOp::Delete, _) => Kind::Deletion,
        }
    }

    /// Packed operation for a run of `len` identical steps.
    pub const fn op(self, len: u32, format: CigarFormat) -> Op {
        Op::new(self.kind(format), len)
    }
}
