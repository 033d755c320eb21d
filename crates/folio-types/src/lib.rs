//! Foundation types for the folio terminal.
//!
//! This crate contains the host-agnostic types shared by every folio crate:
//! key events, terminal configuration (including the portfolio profile the
//! built-in commands render), and error types.

pub mod config;
pub mod error;
pub mod input;
