#![forbid(unsafe_code)]

//! Bulk sequence mutation: fill and generate over caller-owned slices.
//!
//! # Role in CoreKit
//! `ckit-seq` is the mutation utility for fixed-length sequences. The
//! caller owns the storage (`&mut [T]`); this crate only writes into it,
//! either by repeating one value across the whole slice or a sub-range,
//! or by computing each element from its index.
//!
//! # How it fits in the system
//! The demo showcase drives these operations against concrete sequences
//! and narrates the before/after state. Nothing here allocates, performs
//! I/O, or retains the slice beyond the call.
//!
//! # Concurrency
//! Every operation assumes exclusive access to the slice for the
//! duration of the call, which `&mut [T]` already enforces. Sharing a
//! sequence across threads is the caller's problem to synchronize.

pub mod fill;

pub use fill::{RangeError, fill_all, fill_range, generate, generate_in_place, try_generate};
