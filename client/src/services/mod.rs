//! Browser services shared by the page binding and the markup globals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Services are built once in [`crate::exports`] and passed to whatever needs
//! them; nothing here reaches for a global on its own.

pub mod alerts;
pub mod clipboard;
