//! RFC 4648 Base32 encoding and decoding over the `A-Z2-7` alphabet with `=` padding.
//!
//! ```
//! let text = base32_codec::encode(b"foobar");
//! assert_eq!(text, "MZXW6YTBOI======");
//! assert_eq!(base32_codec::decode(&text).unwrap(), b"foobar");
//! ```

mod base32;
mod error;

pub use crate::base32::{ALPHABET, decode, encode, encoded_len};
pub use crate::error::DecodeError;

/// Method-style encoding, e.g. `secret.encode_base32()`.
pub trait Base32Encode {
    fn encode_base32(&self) -> String;
}

impl Base32Encode for [u8] {
    fn encode_base32(&self) -> String {
        encode(self)
    }
}

/// Method-style decoding, e.g. `"MZXW6===".decode_base32()`.
pub trait Base32Decode {
    fn decode_base32(&self) -> Result<Vec<u8>, DecodeError>;
}

impl Base32Decode for str {
    fn decode_base32(&self) -> Result<Vec<u8>, DecodeError> {
        decode(self)
    }
}
