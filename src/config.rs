use crate::op::MAX_LEN;

#[derive(Debug, Clone)]
/// Configuration for reading a textual CIGAR operation, ex. `15M`.
pub struct ParseConfig {
    /// Largest run length accepted.
    /// * Defaults to [`MAX_LEN`], the widest length a packed operation can hold.
    /// * Values above [`MAX_LEN`] are treated as [`MAX_LEN`].
    pub max_len: u32,
    /// Accept lengths written with leading zeros, ex. `007M`.
    /// * A bare `0` is always accepted.
    pub allow_leading_zeros: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            max_len: MAX_LEN,
            allow_leading_zeros: false,
        }
    }
}

impl ParseConfig {
    /// Effective length ceiling.
    pub fn len_limit(&self) -> u32 {
        self.max_len.min(MAX_LEN)
    }
}
