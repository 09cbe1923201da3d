#![forbid(unsafe_code)]

//! Canonical immutable empty list.
//!
//! # Role in CoreKit
//! `ckit-empty` provides a reusable, read-only, zero-length list value
//! in two acquisition shapes: a process-wide shared singleton
//! ([`shared_empty`]) and a generic, element-typed path
//! ([`typed_empty`]). Both are behaviorally identical: size 0, equal to
//! each other and to any independently constructed empty collection,
//! and impossible to mutate.
//!
//! # Design
//! Immutability is enforced at the type level: [`EmptyList`] simply has
//! no mutation API, so misuse is a compile error rather than a runtime
//! check. The `try_insert`/`try_remove`/`try_clear` probes exist only so
//! callers can *demonstrate* the rejection (see [`is_immutable`]); they
//! always fail and never alter observable state.
//!
//! # Concurrency
//! `EmptyList<T>` is a zero-sized value that is never written after
//! construction, so it is `Send + Sync` for any `T` and safe to read
//! from any number of threads without synchronization. The shared
//! singleton is initialized at most once.

pub mod list;

pub use list::{
    EmptyList, Erased, MutationKind, UnsupportedMutationError, is_immutable, shared_empty,
    typed_empty,
};
