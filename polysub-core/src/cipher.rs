/// Shared contract implemented by every cipher in this crate

/// Direction of a `process` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encrypt,
    Decrypt,
}

/// A keyed text transformer.
///
/// Implementors are immutable once constructed: `process` never mutates the
/// instance, so a single cipher can be shared across threads freely. The
/// output is always the same length (in characters) as the input, with
/// non-ASCII-alphabetic characters copied through at their original
/// positions.
pub trait Cipher {
    /// Encrypt or decrypt `text` and return the transformed string
    fn process(&self, text: &str, operation: Operation) -> String;
}
