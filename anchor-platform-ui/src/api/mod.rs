//! Anchor Platform API access

pub mod client;

pub use client::{fetch_fees, fetch_heights};
