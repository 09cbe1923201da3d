#![forbid(unsafe_code)]

//! Localization glue for the CoreKit demos.
//!
//! Provides externalized string storage with key-based lookup and a
//! locale fallback chain.
//!
//! # Role in CoreKit
//! The demo binaries take an optional locale from the command line and
//! resolve their narration strings through a [`StringCatalog`]. The
//! core crates (`ckit-seq`, `ckit-empty`) never depend on this crate;
//! its whole contract toward them is "given a key, return a string".
//!
//! # How it fits in the system
//! `ckit-i18n` does not read files or the environment. Catalogs are
//! built in code ([`StringCatalog::builtin`]) or by the caller, which
//! keeps lookup deterministic and testable.

pub mod catalog;
pub mod locale;

pub use catalog::{I18nError, LocaleStrings, MessageKey, StringCatalog};
pub use locale::{Locale, LocaleParseError};
