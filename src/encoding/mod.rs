//! Utilities for percent-encoding.
//!
//! A percent escape is the three-byte sequence `%HH` where `HH` are two
//! hexadecimal digits encoding a single octet. [`decode`] resolves the
//! escapes of one URI element against the set of characters allowed to
//! appear unencoded in it; [`encode`] is its inverse, used by the
//! serializer.

pub mod table;

pub use table::Table;

use std::fmt::Write;

use crate::{Component, Error};

/// A decoder for one percent-encoded octet, fed one hexadecimal digit
/// at a time.
///
/// The high nibble is shifted in first and both digit cases are
/// accepted. Emitting an octet, or failing on a non-hexadecimal input
/// byte, returns the decoder to its initial state, so a single decoder
/// may be reused for any number of escapes.
///
/// # Examples
///
/// ```
/// use lucid_uri::encoding::PctDecoder;
///
/// let mut decoder = PctDecoder::new();
/// assert_eq!(decoder.push(b'4'), Ok(None));
/// assert_eq!(decoder.push(b'1'), Ok(Some(b'A')));
/// assert!(decoder.push(b'x').is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct PctDecoder {
    state: DecoderState,
}

#[derive(Clone, Copy, Debug, Default)]
enum DecoderState {
    /// No digit consumed since the last reset.
    #[default]
    Start,
    /// The high nibble has been shifted in.
    HighNibble(u8),
}

impl PctDecoder {
    /// Creates a decoder in its initial state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DecoderState::Start,
        }
    }

    /// Feeds one hexadecimal digit, returning the decoded octet once
    /// both digits have been consumed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPercentEncoding`] on a byte that is not a
    /// hexadecimal digit.
    pub fn push(&mut self, x: u8) -> Result<Option<u8>, Error> {
        let digit = match (x as char).to_digit(16) {
            Some(digit) => digit as u8,
            None => {
                self.state = DecoderState::Start;
                return Err(Error::InvalidPercentEncoding);
            }
        };
        match self.state {
            DecoderState::Start => {
                self.state = DecoderState::HighNibble(digit << 4);
                Ok(None)
            }
            DecoderState::HighNibble(hi) => {
                self.state = DecoderState::Start;
                Ok(Some(hi | digit))
            }
        }
    }
}

/// Decodes one element of a URI against the set of characters allowed
/// to appear unencoded in it.
///
/// A `%` begins a two-digit percent escape; every other byte must
/// belong to `allowed` and is copied through verbatim.
///
/// # Errors
///
/// Returns [`Error::InvalidPercentEncoding`] on an escape with a
/// non-hexadecimal digit or one cut short by the end of the element,
/// and [`Error::IllegalCharacter`] on an unencoded byte outside
/// `allowed`.
///
/// # Examples
///
/// ```
/// use lucid_uri::{encoding::{self, table}, Component};
///
/// let decoded = encoding::decode("hello,%20w%6Frld", table::PCHAR, Component::Path)?;
/// assert_eq!(decoded, b"hello, world");
/// # Ok::<_, lucid_uri::Error>(())
/// ```
pub fn decode(element: &str, allowed: Table, component: Component) -> Result<Vec<u8>, Error> {
    let mut decoded = Vec::with_capacity(element.len());
    let mut escape = None::<PctDecoder>;
    for x in element.bytes() {
        match &mut escape {
            Some(decoder) => {
                if let Some(octet) = decoder.push(x)? {
                    decoded.push(octet);
                    escape = None;
                }
            }
            None if x == b'%' => escape = Some(PctDecoder::new()),
            None => {
                if allowed.contains(x) {
                    decoded.push(x);
                } else {
                    return Err(Error::IllegalCharacter(component));
                }
            }
        }
    }
    if escape.is_some() {
        // The element ended in the middle of an escape.
        return Err(Error::InvalidPercentEncoding);
    }
    Ok(decoded)
}

/// Percent-encodes every byte of `element` outside `allowed`, with
/// upper-case hexadecimal digits.
///
/// # Examples
///
/// ```
/// use lucid_uri::encoding::{self, table};
///
/// assert_eq!(encoding::encode(b"foo+bar", table::QUERY_WITHOUT_PLUS), "foo%2Bbar");
/// ```
#[must_use]
pub fn encode(element: &[u8], allowed: Table) -> String {
    let mut encoded = String::with_capacity(element.len());
    for &x in element {
        if allowed.contains(x) {
            encoded.push(x as char);
        } else {
            write!(encoded, "%{x:02X}").unwrap();
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoder_good_sequences() {
        let cases: &[([u8; 2], u8)] = &[
            ([b'4', b'1'], b'A'),
            ([b'5', b'A'], b'Z'),
            ([b'6', b'e'], b'n'),
            ([b'e', b'1'], 0xe1),
            ([b'C', b'A'], 0xca),
        ];
        let mut decoder = PctDecoder::new();
        for ([hi, lo], expected) in cases {
            assert_eq!(decoder.push(*hi), Ok(None));
            assert_eq!(decoder.push(*lo), Ok(Some(*expected)));
        }
    }

    #[test]
    fn decoder_rejects_non_hex() {
        for x in [b'G', b'g', b'.', b'z', b'-', b' ', 0xff] {
            let mut decoder = PctDecoder::new();
            assert_eq!(decoder.push(x), Err(Error::InvalidPercentEncoding));
            // A failure resets the decoder.
            assert_eq!(decoder.push(b'4'), Ok(None));
            assert_eq!(decoder.push(b'1'), Ok(Some(b'A')));
        }
    }

    #[test]
    fn decode_truncated_escape() {
        assert_eq!(
            decode("a%4", table::PCHAR, Component::Path),
            Err(Error::InvalidPercentEncoding)
        );
        assert_eq!(
            decode("a%", table::PCHAR, Component::Path),
            Err(Error::InvalidPercentEncoding)
        );
    }

    #[test]
    fn decode_illegal_character() {
        assert_eq!(
            decode("a[b", table::PCHAR, Component::Path),
            Err(Error::IllegalCharacter(Component::Path))
        );
    }

    #[test]
    fn encode_uses_upper_case_hex() {
        assert_eq!(encode(&[0xbc], table::PCHAR), "%BC");
        assert_eq!(encode("ሴ".as_bytes(), table::REG_NAME), "%E1%88%B4");
    }
}
