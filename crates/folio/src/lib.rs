//! Folio application crate: configuration, catalog loading, console
//! adapters for the engine's side-effect and speech traits, and the
//! CLI command implementations. The engine itself lives in
//! `folio-core`.

pub mod ask;
pub mod catalog;
pub mod config;
pub mod host;
pub mod inspect;
pub mod search;
