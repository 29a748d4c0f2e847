//! # Folio Core
//!
//! The deterministic intent engine behind the Folio portfolio
//! assistant: data models, the searchable entity index, an additive
//! relevance scorer, a suggestion generator, an ordered rule-cascade
//! intent dispatcher, and the bounded conversation-context and
//! command-history rings shared by the search, chat, and voice
//! surfaces.
//!
//! This crate performs no I/O. The catalog is handed in already
//! resident, side effects go through the [`host::Host`] trait, and
//! speech capabilities are consumed through the traits in [`speech`].
//! Everything here is synchronous and runs on the caller's (UI event)
//! thread.

pub mod catalog;
pub mod host;
pub mod index;
pub mod intent;
pub mod models;
pub mod search;
pub mod session;
pub mod speech;
pub mod suggest;
