//! # dom-cli
//!
//! The `dom` command-line interface over `dom-core` and `dom-forms`.
//!
//! ## Subcommands
//!
//! - `dom check` validates identifiers and contact/calendar fields.
//! - `dom normalize` strips everything but digits.
//! - `dom format` prints the masked canonical form.
//! - `dom password` checks a password read from stdin.
//! - `dom form` validates employee/employer record files.
//!
//! ## Exit Status
//!
//! `0` when everything checked is valid, `2` when anything is invalid,
//! `1` when the command itself failed (bad arguments, unreadable files).

pub mod check;
pub mod config;
pub mod form;

/// Every checked value or record was valid.
pub const EXIT_VALID: u8 = 0;

/// The command ran but something it checked was invalid.
pub const EXIT_INVALID: u8 = 2;

/// The command could not run to completion.
pub const EXIT_FAILURE: u8 = 1;
