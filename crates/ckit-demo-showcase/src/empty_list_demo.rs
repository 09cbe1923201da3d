#![forbid(unsafe_code)]

//! Shared vs typed empty list: the immutability demo.
//!
//! Compares the two acquisition paths for the canonical empty list,
//! then probes both for mutation and narrates the rejections. The
//! counterpart of each check is an ordinary freshly built `Vec`, to
//! show the paths are behaviorally indistinguishable from any other
//! empty collection.

use ckit_empty::{is_immutable, shared_empty, typed_empty};

/// Build the demo narration.
pub fn narration() -> Vec<String> {
    let mut lines = Vec::new();

    let shared = shared_empty();
    let typed = typed_empty::<i32>();

    lines.push(format!(
        "shared_empty() == typed_empty::<i32>(): {}",
        *shared == typed
    ));
    lines.push(format!(
        "typed_empty::<i32>() == Vec::<i32>::new(): {}",
        typed == Vec::<i32>::new()
    ));
    lines.push(format!(
        "sizes: shared = {}, typed = {}",
        shared.len(),
        typed.len()
    ));

    match typed.try_insert(7) {
        Ok(()) => lines.push("typed path accepted an insert (unexpected)".to_string()),
        Err(err) => lines.push(format!("typed path insert: {err}")),
    }
    match shared.try_remove(0) {
        Ok(_) => lines.push("shared path accepted a remove (unexpected)".to_string()),
        Err(err) => lines.push(format!("shared path remove: {err}")),
    }
    lines.push(format!(
        "sizes after rejected mutations: shared = {}, typed = {}",
        shared.len(),
        typed.len()
    ));
    lines.push(format!(
        "is_immutable(typed_empty::<i32>()): {}",
        is_immutable(typed, 7)
    ));

    // The original's empty list is serializable; here that is the
    // empty-sequence wire form.
    match serde_json::to_string(&typed) {
        Ok(json) => lines.push(format!("serialized form: {json}")),
        Err(err) => lines.push(format!("serialization failed: {err}")),
    }

    lines
}
