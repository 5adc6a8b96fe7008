//! Symbolic Wick's theorem for products of fermionic creation and
//! annihilation operators.
//!
//! Given a product such as `a_{p3} a_{p4} a^{p1} a^{p2}`, the library:
//! - enumerates every complete contraction, pairing each annihilator with a
//!   later creator
//! - signs each contraction by the parity of its crossings
//! - replaces each contracted pair by a Kronecker delta.
//!
//! ## Running
//!
//! A file of `;` separated products can be evaluated using:
//!
//! ```bash
//! cargo run -- <FILENAME>
//! ```
//!
//! or passed in through stdin. For all options see:
//! ```bash
//! cargo run -- --help
//! ```

pub mod command;
pub mod delta;
pub mod error;
pub mod expr;
pub mod op;
pub mod sum;
pub mod text;
pub mod wick;
