use crate::error::DecodeError;

// Base32 alphabet, indexed by 5-bit value
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

const PAD: u8 = b'=';

fn is_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\r' | ' ' | '\t')
}

fn symbol(bits: u64) -> char {
    ALPHABET[(bits & 0x1f) as usize] as char
}

/// Number of characters `encode` produces for `len` input bytes.
pub fn encoded_len(len: usize) -> usize {
    len.div_ceil(5) * 8
}

/// Encodes `data` as padded Base32. Never fails.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(data.len()));

    let mut groups = data.chunks_exact(5);
    for group in &mut groups {
        let buffer = group.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
        for shift in [35, 30, 25, 20, 15, 10, 5, 0] {
            out.push(symbol(buffer >> shift));
        }
    }

    let tail = groups.remainder();
    let buffer = tail.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));

    // The last chunk of each tail is shifted left so its missing low bits are zero
    let symbols = match tail.len() {
        0 => 0,
        1 => {
            out.push(symbol(buffer >> 3));
            out.push(symbol(buffer << 2));
            2
        }
        2 => {
            for shift in [11, 6, 1] {
                out.push(symbol(buffer >> shift));
            }
            out.push(symbol(buffer << 4));
            4
        }
        3 => {
            for shift in [19, 14, 9, 4] {
                out.push(symbol(buffer >> shift));
            }
            out.push(symbol(buffer << 1));
            5
        }
        _ => {
            for shift in [27, 22, 17, 12, 7, 2] {
                out.push(symbol(buffer >> shift));
            }
            out.push(symbol(buffer << 3));
            7
        }
    };

    if symbols > 0 {
        for _ in symbols..8 {
            out.push(PAD as char);
        }
    }

    log::trace!("base32: encoded {} bytes into {} chars", data.len(), out.len());
    out
}

/// Decodes Base32 `text` into bytes.
///
/// Trailing `=` and whitespace are ignored, and whitespace inside the text is
/// skipped. Any other character outside `A-Z2-7` fails the whole decode, as does
/// a final group of 1, 3 or 6 symbols. The low bits of a partial final group are
/// dropped without checking that they are zero.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let bytes = text.as_bytes();
    let mut limit = bytes.len();
    while limit > 0 {
        match bytes[limit - 1] {
            b'=' | b'\n' | b'\r' | b' ' | b'\t' => limit -= 1,
            _ => break,
        }
    }

    let mut out = Vec::with_capacity(limit * 5 / 8);
    let mut buffer = 0u64;
    let mut count = 0usize;

    for (index, ch) in text[..limit].char_indices() {
        let bits = match ch {
            'A'..='Z' => ch as u64 - 65,
            '2'..='7' => ch as u64 - 24,
            c if is_whitespace(c) => continue,
            _ => {
                log::trace!("base32: rejected {ch:?} at byte {index}");
                return Err(DecodeError::InvalidCharacter { ch, index });
            }
        };

        buffer = (buffer << 5) | bits;
        count += 1;

        // 8 symbols make 40 bits, i.e. 5 whole bytes
        if count % 8 == 0 {
            out.extend_from_slice(&buffer.to_be_bytes()[3..]);
        }
    }

    match count % 8 {
        0 => {}
        2 => out.push((buffer >> 2) as u8),
        4 => out.extend_from_slice(&((buffer >> 4) as u16).to_be_bytes()),
        5 => out.extend_from_slice(&((buffer >> 1) as u32).to_be_bytes()[1..]),
        7 => out.extend_from_slice(&((buffer >> 3) as u32).to_be_bytes()),
        symbols => {
            log::trace!("base32: rejected truncated final group of {symbols} symbols");
            return Err(DecodeError::TruncatedGroup { symbols });
        }
    }

    log::trace!("base32: decoded {count} symbols into {} bytes", out.len());
    Ok(out)
}
