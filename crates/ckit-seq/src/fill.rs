#![forbid(unsafe_code)]

//! Fill and generate operations.
//!
//! All operations mutate the slice in place and never change its
//! length. Ranged operations validate bounds before the first write, so
//! a rejected call leaves the slice untouched.

use thiserror::Error;

/// Malformed sub-range bounds passed to [`fill_range`].
///
/// Negative indices are unrepresentable in `usize`, so the only
/// rejectable shapes are an inverted range and an end past the slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// `from > to`: the range is inverted.
    #[error("range start {from} is after range end {to}")]
    StartAfterEnd { from: usize, to: usize },
    /// `to > len`: the range runs past the end of the sequence.
    #[error("range end {to} is out of bounds for sequence of length {len}")]
    EndOutOfBounds { to: usize, len: usize },
}

/// Write `value` into every position of `seq`.
///
/// A zero-length slice is a no-op, not an error.
pub fn fill_all<T: Clone>(seq: &mut [T], value: T) {
    #[cfg(feature = "tracing")]
    tracing::trace!(len = seq.len(), "fill_all");

    seq.fill(value);
}

/// Write `value` into positions `[from, to)` of `seq`.
///
/// Positions outside the range are left untouched. `from == to` touches
/// zero elements and is `Ok`. Bounds are validated before any write, so
/// an `Err` means the slice is exactly as it was before the call.
pub fn fill_range<T: Clone>(
    seq: &mut [T],
    from: usize,
    to: usize,
    value: T,
) -> Result<(), RangeError> {
    if from > to {
        return Err(RangeError::StartAfterEnd { from, to });
    }
    if to > seq.len() {
        return Err(RangeError::EndOutOfBounds { to, len: seq.len() });
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(from, to, len = seq.len(), "fill_range");

    seq[from..to].fill(value);
    Ok(())
}

/// Set `seq[i] = f(i)` for every position, in ascending index order.
///
/// The generator only sees the index; use [`generate_in_place`] when it
/// needs to read the sequence it is rewriting.
pub fn generate<T>(seq: &mut [T], mut f: impl FnMut(usize) -> T) {
    #[cfg(feature = "tracing")]
    tracing::trace!(len = seq.len(), "generate");

    for (i, slot) in seq.iter_mut().enumerate() {
        *slot = f(i);
    }
}

/// Fallible [`generate`]: stops at the first generator error.
///
/// The error is surfaced unchanged. Writes to indices before the
/// failing one have already happened and are retained; nothing is
/// rolled back.
pub fn try_generate<T, E>(
    seq: &mut [T],
    mut f: impl FnMut(usize) -> Result<T, E>,
) -> Result<(), E> {
    for (i, slot) in seq.iter_mut().enumerate() {
        *slot = f(i)?;
    }
    Ok(())
}

/// Self-referential [`generate`]: the generator reads the sequence it
/// is rewriting.
///
/// At index `i` the generator observes positions `< i` already
/// rewritten and positions `>= i` still holding their original values.
/// Evaluation order is strictly ascending, so generators like
/// `|i, s| s[i.saturating_sub(1)] + 1` behave deterministically.
pub fn generate_in_place<T>(seq: &mut [T], mut f: impl FnMut(usize, &[T]) -> T) {
    #[cfg(feature = "tracing")]
    tracing::trace!(len = seq.len(), "generate_in_place");

    for i in 0..seq.len() {
        let value = f(i, &*seq);
        seq[i] = value;
    }
}
