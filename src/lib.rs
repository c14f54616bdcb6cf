//! `StreetLedger` - a client-side ledger for informal debts
//!
//! This crate provides the core of the Street Ledger application: a local
//! debt ledger persisted to a single on-device storage slot, change
//! notifications so every open view of that slot stays consistent, and typed
//! boundaries to the external collaborators (wallet account, blockchain
//! transaction submitter, off-chain session opener) that the surrounding UI
//! delegates to.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::must_use_candidate,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Wallet account boundary - supplies the current user's address
pub mod account;
/// Move-call payload builders and the transaction submitter boundary
pub mod chain;
/// Application configuration from config.toml and environment overrides
pub mod config;
/// Unified error types and result handling
pub mod errors;
/// The debt ledger itself - record lifecycle and change notifications
pub mod ledger;
/// Record schema and derived statistics
pub mod models;
/// Off-chain session (state channel) boundary
pub mod session;
/// Storage slot abstraction - in-memory and file-backed implementations
pub mod store;

#[cfg(test)]
pub mod test_utils;
