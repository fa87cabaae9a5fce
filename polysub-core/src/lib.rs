//! core functionality for encrypting and decrypting text
//! with classical substitution ciphers
//!
//! # Modules
//!
//! - `cipher`: the shared `Cipher` trait and `Operation` enum
//! - `affine`: Affine cipher (`c = (a*p + b) mod 26`)
//! - `vigenere`: Vigenère running-key cipher
//! - `error`: key validation errors

pub mod affine;
pub mod cipher;
pub mod error;
pub mod vigenere;

// Re-export commonly used items
pub use affine::AffineCipher;
pub use cipher::{Cipher, Operation};
pub use error::KeyError;
pub use vigenere::VigenereCipher;
