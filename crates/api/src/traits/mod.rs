//! Trait definitions for the curvedh public API

pub mod agreement;

pub use agreement::KeyAgreement;
