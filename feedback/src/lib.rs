//! Validation and feedback core for the CryptoSecure page script.
//!
//! This crate holds every decision the browser layer makes, expressed over
//! plain Rust values so it can be tested without a document. The `client`
//! crate snapshots DOM elements into these types, forwards events to
//! [`controller::FeedbackController`], and applies the returned
//! [`command::Command`]s to the live page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Event entry points returning declarative commands |
//! | [`command`] | DOM mutations the host applies |
//! | [`upload`] | File size/type checks and human-readable sizes |
//! | [`form`] | Required/password/message rules and per-field resolution |
//! | [`counter`] | Live character counter rendering |
//! | [`strength`] | Password strength scoring |
//! | [`alert`] | Banner bookkeeping with idempotent removal |
//! | [`clipboard`] | Primary/fallback copy strategy |
//! | [`context`] | Page and form intent matching (`encrypt`, `register`) |
//! | [`severity`] | Shared severity/tone vocabulary |
//! | [`markup`] | Class names and fixed markup fragments |
//! | [`config`] | Tunable limits with defaults |

pub mod alert;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod context;
pub mod controller;
pub mod counter;
pub mod form;
pub mod markup;
pub mod severity;
pub mod strength;
pub mod upload;
