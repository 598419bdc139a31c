//! Purpose: Shared library crate used by the `motifs` CLI and tests.
//! Exports: `core` (pattern demonstrations, errors), `demo`, `notice`.
//! Role: Internal library backing the binary; not a stable public SDK.
//! Invariants: Treat the crate API as internal until a dedicated library release.
//! Invariants: Modules prefer explicit inputs/outputs over hidden global state.
pub mod core;
pub mod demo;
pub mod notice;
