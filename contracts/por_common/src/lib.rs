#![no_std]

//! Shared building blocks for the Proof of Reserve example contracts.
//!
//! `pagination` holds the inclusive, end-clamped range arithmetic used by
//! both address list contracts. `feed` holds the reserve feed interface the
//! token contract reads from, and the decimal normalization applied to its
//! answers.

pub mod feed;
pub mod pagination;

pub use feed::{normalize_answer, ReserveFeed, ReserveFeedClient, RoundData};
pub use pagination::{inclusive_bounds, page};
