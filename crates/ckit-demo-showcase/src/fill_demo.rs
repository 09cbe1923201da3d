#![forbid(unsafe_code)]

//! Fill vs generate: the bulk sequence-mutation demo.
//!
//! Walks the same concrete sequences through `fill_all`, `fill_range`,
//! `generate` and `generate_in_place`, narrating the before/after state
//! of each step, and finishes by showing a rejected range and a
//! generator failure with its retained prefix.

use ckit_seq::{RangeError, fill_all, fill_range, generate, generate_in_place, try_generate};

/// Build the demo narration.
///
/// Only well-formed ranges are used for the "happy" steps; the rejected
/// range at the end is narrated from its error value.
pub fn narration() -> Result<Vec<String>, RangeError> {
    let mut lines = Vec::new();

    // Whole-slice and ranged constant fills.
    let mut numbers = [1, 2, 2, 3, 4, 5, 6, 7, 8, 9, 9, 1, 0];
    lines.push(format!("original numbers:              {numbers:?}"));

    fill_all(&mut numbers, 12);
    lines.push(format!("after fill_all(12):            {numbers:?}"));

    fill_range(&mut numbers, 3, 8, 33)?;
    lines.push(format!("after fill_range(3, 8, 33):    {numbers:?}"));

    let mut letters = ['e', 'p', 'a', 'm'];
    lines.push(format!("original letters:              {letters:?}"));
    fill_range(&mut letters, 1, 3, 'e')?;
    lines.push(format!("after fill_range(1, 3, 'e'):   {letters:?}"));

    let mut names = vec!["alpha", "beta", "gamma", "delta", "epsilon"];
    lines.push(format!("original names:                {names:?}"));
    fill_range(&mut names, 2, 4, "omega")?;
    lines.push(format!("after fill_range(2, 4, omega): {names:?}"));

    // Index-driven generation.
    let mut tens = [1, 2, 5, 10, 11, 12, 5, 4, 7, 8, 9, 10];
    lines.push(format!("original tens:                 {tens:?}"));
    generate(&mut tens, |i| (i + 1) * 10);
    lines.push(format!("after generate((i + 1) * 10):  {tens:?}"));

    let mut squares = [0u32; 10];
    generate(&mut squares, |i| (i * i) as u32);
    lines.push(format!("generated squares:             {squares:?}"));

    // Self-referential generation: the generator reads the slice it is
    // rewriting, in ascending index order.
    let mut upper = vec!["ada".to_string(), "grace".to_string(), "linus".to_string()];
    lines.push(format!("original words:                {upper:?}"));
    generate_in_place(&mut upper, |i, s| s[i].to_uppercase());
    lines.push(format!("after uppercase in place:      {upper:?}"));

    // A malformed range is rejected before anything is written.
    let mut untouched = [1, 2, 3];
    match fill_range(&mut untouched, 2, 1, 9) {
        Ok(()) => lines.push("inverted range was accepted (unexpected)".to_string()),
        Err(err) => lines.push(format!("inverted range rejected:       {err}")),
    }
    lines.push(format!("sequence left untouched:       {untouched:?}"));

    // A failing generator keeps the prefix it already wrote.
    let mut partial = [0i32; 6];
    match try_generate(&mut partial, |i| {
        if i == 3 {
            Err("generator gave up at index 3")
        } else {
            Ok(i as i32 + 1)
        }
    }) {
        Ok(()) => lines.push("generator finished (unexpected)".to_string()),
        Err(err) => lines.push(format!("generator failed:              {err}")),
    }
    lines.push(format!("prefix retained:               {partial:?}"));

    Ok(lines)
}
