//! Core types and storage contracts for the posts service.
//!
//! This crate holds pure data types and traits only. Anything that talks to
//! the network or a database lives in the `posts` binary crate.

pub mod post;
pub mod storage;
