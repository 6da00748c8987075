//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `alphabet.rs` — the 36-symbol A-Z/0-9 bijection and shift arithmetic.
//! - `completer.rs` — fills uncovered key positions with random direct hints.
//! - `resolver.rs` — applies the completed hints, renders clue text.
//! - `config.rs` — YAML config loading.
//! - `report.rs` — clue sheet CSV writer.
//! - `audit.rs` — append-only run log.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod alphabet;
pub mod audit;
pub mod completer;
pub mod config;
pub mod report;
pub mod resolver;
