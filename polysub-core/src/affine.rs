/// Affine cipher: `c = (a*p + b) mod 26` over the ASCII alphabet
use crate::cipher::{Cipher, Operation};
use crate::error::KeyError;

const ALPHABET_LEN: i32 = 26;

/// Monoalphabetic substitution cipher with key pair `(a, b)`.
///
/// `a` must be coprime to 26 for the mapping to be invertible; `new`
/// rejects anything else. Both parameters are reduced into `[0, 26)` at
/// construction and the modular inverse of `a` is precomputed, so the
/// instance is immutable and `process` cannot fail.
#[derive(Debug, Clone)]
pub struct AffineCipher {
    a: i32,
    b: i32,
    /// Modular inverse of `a` mod 26
    a_inv: i32,
}

impl AffineCipher {
    /// Build a cipher from the key pair `(a, b)`
    pub fn new(a: i32, b: i32) -> Result<Self, KeyError> {
        let reduced_a = a.rem_euclid(ALPHABET_LEN);
        let b = b.rem_euclid(ALPHABET_LEN);

        let a_inv = mod_inverse(reduced_a, ALPHABET_LEN)
            .ok_or(KeyError::InvalidAffineKey { a })?;

        Ok(Self {
            a: reduced_a,
            b,
            a_inv,
        })
    }

    fn encrypt(&self, plaintext: &str) -> String {
        plaintext
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphabetic() {
                    let base = if ch.is_ascii_uppercase() { b'A' } else { b'a' };
                    let p = ch as i32 - base as i32;
                    let c = (self.a * p + self.b) % ALPHABET_LEN;
                    (base + c as u8) as char
                } else {
                    ch
                }
            })
            .collect()
    }

    fn decrypt(&self, ciphertext: &str) -> String {
        ciphertext
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphabetic() {
                    let base = if ch.is_ascii_uppercase() { b'A' } else { b'a' };
                    let c = ch as i32 - base as i32;
                    // (c - b) can go negative, normalize before multiplying
                    let p = (self.a_inv * (c - self.b).rem_euclid(ALPHABET_LEN)) % ALPHABET_LEN;
                    (base + p as u8) as char
                } else {
                    ch
                }
            })
            .collect()
    }
}

impl Cipher for AffineCipher {
    fn process(&self, text: &str, operation: Operation) -> String {
        match operation {
            Operation::Encrypt => self.encrypt(text),
            Operation::Decrypt => self.decrypt(text),
        }
    }
}

/// Find `x` in `[1, m)` with `(a * x) % m == 1`, if one exists.
/// The search is bounded by `m` (26 here), not by any input length.
fn mod_inverse(a: i32, m: i32) -> Option<i32> {
    let a = a.rem_euclid(m);
    (1..m).find(|&x| (a * x) % m == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ciphertext() {
        // a=5, b=8: H(7) -> 43 % 26 = 17 -> R, e(4) -> 28 % 26 = 2 -> c, ...
        let cipher = AffineCipher::new(5, 8).unwrap();
        let out = cipher.process("Hello, World!", Operation::Encrypt);
        assert_eq!(out, "Rclla, Oaplx!");

        // cross-check every letter against the formula itself
        for (p, c) in "Hello, World!".chars().zip(out.chars()) {
            if p.is_ascii_alphabetic() {
                let base = if p.is_ascii_uppercase() { b'A' } else { b'a' };
                let expected = (base + ((5 * (p as u8 - base) as i32 + 8) % 26) as u8) as char;
                assert_eq!(c, expected, "wrong mapping for {p}");
            } else {
                assert_eq!(c, p);
            }
        }
    }

    #[test]
    fn test_roundtrip() {
        let cipher = AffineCipher::new(5, 8).unwrap();
        let plain = "Hello, World!";
        let enc = cipher.process(plain, Operation::Encrypt);
        assert_eq!(cipher.process(&enc, Operation::Decrypt), plain);
    }

    #[test]
    fn test_roundtrip_all_valid_a() {
        // every a coprime to 26
        let plain = "The quick brown fox jumps over the lazy dog.";
        for a in [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25] {
            for b in [0, 1, 8, 25] {
                let cipher = AffineCipher::new(a, b).unwrap();
                let enc = cipher.process(plain, Operation::Encrypt);
                assert_eq!(
                    cipher.process(&enc, Operation::Decrypt),
                    plain,
                    "roundtrip failed for a={a} b={b}"
                );
            }
        }
    }

    #[test]
    fn test_invalid_a_rejected() {
        // 2 and 13 share a factor with 26
        assert_eq!(
            AffineCipher::new(2, 8).unwrap_err(),
            KeyError::InvalidAffineKey { a: 2 }
        );
        assert!(AffineCipher::new(13, 0).is_err());
        assert!(AffineCipher::new(0, 5).is_err());
    }

    #[test]
    fn test_params_reduced_mod_26() {
        // 31 ≡ 5 and -18 ≡ 8 (mod 26)
        let reduced = AffineCipher::new(31, -18).unwrap();
        let plain = AffineCipher::new(5, 8).unwrap();
        let text = "Attack at dawn";
        assert_eq!(
            reduced.process(text, Operation::Encrypt),
            plain.process(text, Operation::Encrypt)
        );
    }

    #[test]
    fn test_non_alpha_passthrough_and_length() {
        let cipher = AffineCipher::new(7, 3).unwrap();
        let text = "a1!b2? c3";
        let enc = cipher.process(text, Operation::Encrypt);
        assert_eq!(enc.len(), text.len());
        for (orig, out) in text.chars().zip(enc.chars()) {
            if !orig.is_ascii_alphabetic() {
                assert_eq!(orig, out);
            }
        }
    }

    #[test]
    fn test_case_preserved() {
        let cipher = AffineCipher::new(5, 8).unwrap();
        let enc = cipher.process("AbCd", Operation::Encrypt);
        let cases: Vec<bool> = enc.chars().map(|c| c.is_ascii_uppercase()).collect();
        assert_eq!(cases, [true, false, true, false]);
    }

    #[test]
    fn test_empty_input() {
        let cipher = AffineCipher::new(5, 8).unwrap();
        assert_eq!(cipher.process("", Operation::Encrypt), "");
        assert_eq!(cipher.process("", Operation::Decrypt), "");
    }

    #[test]
    fn test_mod_inverse() {
        assert_eq!(mod_inverse(5, 26), Some(21));
        assert_eq!(mod_inverse(1, 26), Some(1));
        assert_eq!(mod_inverse(25, 26), Some(25));
        assert_eq!(mod_inverse(2, 26), None);
        assert_eq!(mod_inverse(13, 26), None);
    }
}
