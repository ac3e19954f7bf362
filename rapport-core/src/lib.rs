//! Rapport Core Library
//!
//! Contact relationship and privacy-policy model for the Rapport messaging
//! client. This crate turns the relationship flags maintained by the sync
//! protocol into derived states, enriches contacts into view-models with
//! privacy-aware image redaction, and resolves group rosters against the
//! local contact directory.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

mod api;
pub mod contact;
pub mod group;
pub mod privacy;

pub use api::RapportCore;
