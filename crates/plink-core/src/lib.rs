//! # plink-core — Foundational Types for the Plink Pairing Stack
//!
//! This crate is the bedrock of the Plink workspace. It defines the
//! primitives shared by every other crate: topics, timestamps, and the
//! expiry contract. Every other crate in the workspace depends on
//! `plink-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrapper for topics.** A [`Topic`] is not a bare string.
//!    You cannot pass an arbitrary identifier where a sequence topic is
//!    expected.
//!
//! 2. **UTC-only timestamps.** The [`Timestamp`] type enforces UTC with
//!    seconds precision and renders with a `Z` suffix. Sequence expiry
//!    comparisons never involve local time.
//!
//! 3. **Expiry is a predicate, not a transition.** The [`Expirable`]
//!    trait exposes `is_expired(now)`; nothing in this workspace mutates
//!    a sequence because its deadline passed. Cleanup of expired records
//!    is the owning engine's decision.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `plink-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod expiry;
pub mod temporal;
pub mod topic;

// Re-export primary types for ergonomic imports.
pub use error::PlinkError;
pub use expiry::Expirable;
pub use temporal::Timestamp;
pub use topic::Topic;
