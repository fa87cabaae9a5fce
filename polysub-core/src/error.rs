use thiserror::Error;

/// Key validation failures, reported at cipher construction.
///
/// Processing itself never fails: once a constructor has accepted a key,
/// every `process` call succeeds on any input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Affine `a` shares a factor with 26, so no modular inverse exists
    /// and decryption would be ill-defined
    #[error("affine key a={a} is not coprime to 26, decryption is undefined")]
    InvalidAffineKey { a: i32 },

    /// Vigenère key with no characters
    #[error("vigenere key must not be empty")]
    EmptyKey,

    /// Vigenère key containing a character outside A-Z/a-z
    #[error("vigenere key must be alphabetic, found {ch:?}")]
    NonAlphabeticKey { ch: char },
}
