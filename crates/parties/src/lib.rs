//! Parties domain module: the customers orders are placed for.

pub mod client;

pub use client::Client;
