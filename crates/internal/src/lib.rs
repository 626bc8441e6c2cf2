//! Internal utilities shared across the curvedh workspace
//!
//! Nothing in this crate is a public API commitment; it exists so that the
//! constant-time selection primitives used by the arithmetic and protocol
//! crates live in exactly one place.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;

pub use constant_time::{ct_assign, ct_eq, ct_select};
