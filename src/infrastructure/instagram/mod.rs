//! Instagram listing endpoint adapter.

pub mod client;
pub mod dto;

pub use client::InstagramMediaClient;
