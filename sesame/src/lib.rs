//! Shared storage for an OpenAI API credential and the client built from it.
//!
//! The [`openai::ClientAccessor`] hands out one lazily-constructed
//! `async-openai` client per credential, rebuilding it whenever the
//! credential is replaced. Wire one up at your composition root and pass it
//! to anything that issues API calls.

pub mod config;
pub mod error;
pub mod openai;
