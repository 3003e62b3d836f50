#![warn(missing_docs)]

//! Packed CIGAR operations as stored in SAM/BAM alignment records.
//!
//! An operation is a run length and a [`Kind`](kind::Kind) packed into a `u32`:
//! kind in the low 4 bits, length in the remaining 28.

pub mod cigar;
pub mod config;
pub mod consume;
pub mod kind;
pub mod op;

pub use config::ParseConfig;
pub use consume::Consumption;
pub use kind::Kind;
pub use op::Op;
