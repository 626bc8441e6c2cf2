//! Domain-parameter constants for the curvedh library
//!
//! Raw byte constants only; the typed curve value lives in
//! `curvedh-algorithms`, which builds it from these arrays at compile time.

#![no_std]
#![forbid(unsafe_code)]

pub mod weierstrass;

pub use weierstrass::{
    WeierstrassParams, FIELD_ELEMENT_SIZE, SCALAR_SIZE, SECP256R1, SHARED_SECRET_SIZE,
};
