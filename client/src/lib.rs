//! # client
//!
//! WebAssembly binding for the CryptoSecure page script.
//!
//! The `feedback` crate decides what should happen for each DOM event; this
//! crate finds the elements, snapshots them, forwards events, and applies the
//! returned commands to the live document. It also owns the browser-only
//! services: alert banners with their timers, the clipboard with its
//! fallback path, and tooltip activation.
//!
//! Everything touching the DOM is gated behind the `hydrate` feature. Without
//! it the crate still builds natively so config loading, logging setup and
//! error types can be tested.

pub mod config;
pub mod error;
pub mod logging;

#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod exports;
#[cfg(feature = "hydrate")]
pub mod page;
#[cfg(feature = "hydrate")]
pub mod services;
#[cfg(feature = "hydrate")]
pub mod tooltips;
