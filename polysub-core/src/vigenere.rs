/// Vigenère cipher: running-key shift over the ASCII alphabet
use crate::cipher::{Cipher, Operation};
use crate::error::KeyError;

const ALPHABET_LEN: u8 = 26;

/// Polyalphabetic shift cipher keyed by a word.
///
/// The key is normalized to uppercase at construction and cycled by the
/// absolute character position in the input: non-alphabetic characters pass
/// through unchanged but still consume a key slot. Historical Vigenère
/// tables skip non-letters when advancing the key; this implementation
/// keeps the position-driven indexing for compatibility with the program
/// it replaces. Positions count characters, not bytes, so a multi-byte
/// character consumes exactly one key slot.
#[derive(Debug, Clone)]
pub struct VigenereCipher {
    /// Uppercase ASCII key bytes
    key: Vec<u8>,
}

impl VigenereCipher {
    /// Build a cipher from a non-empty alphabetic key word
    pub fn new(key: &str) -> Result<Self, KeyError> {
        if key.is_empty() {
            return Err(KeyError::EmptyKey);
        }

        let mut bytes = Vec::with_capacity(key.len());
        for ch in key.chars() {
            if !ch.is_ascii_alphabetic() {
                return Err(KeyError::NonAlphabeticKey { ch });
            }
            bytes.push(ch.to_ascii_uppercase() as u8);
        }

        Ok(Self { key: bytes })
    }

    /// Shift amount for the character at absolute position `i`
    fn offset(&self, i: usize) -> u8 {
        self.key[i % self.key.len()] - b'A'
    }

    fn encrypt(&self, plaintext: &str) -> String {
        plaintext
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                if ch.is_ascii_alphabetic() {
                    let base = if ch.is_ascii_uppercase() { b'A' } else { b'a' };
                    let p = ch as u8 - base;
                    (base + (p + self.offset(i)) % ALPHABET_LEN) as char
                } else {
                    ch
                }
            })
            .collect()
    }

    fn decrypt(&self, ciphertext: &str) -> String {
        ciphertext
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                if ch.is_ascii_alphabetic() {
                    let base = if ch.is_ascii_uppercase() { b'A' } else { b'a' };
                    let c = ch as u8 - base;
                    (base + (c + ALPHABET_LEN - self.offset(i)) % ALPHABET_LEN) as char
                } else {
                    ch
                }
            })
            .collect()
    }
}

impl Cipher for VigenereCipher {
    fn process(&self, text: &str, operation: Operation) -> String {
        match operation {
            Operation::Encrypt => self.encrypt(text),
            Operation::Decrypt => self.decrypt(text),
        }
    }
}
