//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep hint/config/report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects, no
//! randomness, no cipher arithmetic.
//!
//! ## Compatibility note
//! `Hint` and `Templates` define the YAML config schema; `HintRecord` and
//! `EncryptReport` define the CSV columns and `--json` output. Keep changes
//! to these structs deliberate.

pub mod models;
