//! Purpose: Random identifier tokens for shared-instance identities.
//! Exports: `make_token`, `ALPHABET`.
//! Invariants: Tokens contain only the 62 alphanumeric symbols.
//! Invariants: Symbols are drawn uniformly (rejection sampling, no modulo bias).

use getrandom::fill as fill_random;

use super::error::{Error, ErrorKind};

pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

// Largest multiple of 62 that fits in a byte; bytes at or above it are
// rejected so every symbol keeps equal probability.
const REJECT_ABOVE: u8 = 248;

pub fn make_token(length: usize) -> Result<String, Error> {
    let mut out = String::with_capacity(length);
    let mut buf = [0u8; 64];
    while out.len() < length {
        fill_random(&mut buf).map_err(|err| {
            Error::new(ErrorKind::RandomSource)
                .with_message(format!("entropy source unavailable: {err}"))
        })?;
        for byte in buf {
            if out.len() == length {
                break;
            }
            if byte >= REJECT_ABOVE {
                continue;
            }
            out.push(ALPHABET[(byte % 62) as usize] as char);
        }
    }
    Ok(out)
}
