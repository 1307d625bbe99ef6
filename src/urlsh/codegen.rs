//! # Short Code Generation
//!
//! Two strategies sit behind the [`CodeGenerator`] trait:
//!
//! - [`RandomCodes`]: draws every character independently from the OS CSPRNG over
//!   [`ALPHABET`], which leaves out characters that are easy to misread
//!   (`0 O 1 l I`). This is the default.
//! - [`HashCodes`]: encodes a SHA-256 digest of the URL in base 62. A fresh
//!   generator always proposes the same first code for the same URL; each further
//!   draw mixes in a counter so collision retries still see new candidates.
//!
//! The assignment engine only sees the trait, so tests swap in scripted
//! generators to force collisions.

use crate::error::{Result, UrlshError};
use rand::rngs::OsRng;
use rand::TryRngCore;
use sha2::{Digest, Sha256};

pub const ALPHABET: &[u8] = b"23456789abcdefghijkmnpqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

const BASE62: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

pub trait CodeGenerator {
    /// Propose a candidate code of exactly `length` characters for `url`.
    fn generate(&mut self, url: &str, length: usize) -> Result<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodes;

impl CodeGenerator for RandomCodes {
    fn generate(&mut self, _url: &str, length: usize) -> Result<String> {
        let mut bytes = vec![0u8; length];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| UrlshError::Entropy(e.to_string()))?;

        // Modulo bias over 56 symbols is acceptable here.
        Ok(bytes
            .iter()
            .map(|b| ALPHABET[*b as usize % ALPHABET.len()] as char)
            .collect())
    }
}

#[derive(Debug, Default, Clone)]
pub struct HashCodes {
    draws: u64,
}

impl HashCodes {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CodeGenerator for HashCodes {
    fn generate(&mut self, url: &str, length: usize) -> Result<String> {
        let mut code = String::with_capacity(length);
        let mut block = 0u32;
        while code.len() < length {
            let mut hasher = Sha256::new();
            hasher.update(url.as_bytes());
            hasher.update(format!(":{}:{}", self.draws, block).as_bytes());
            code.push_str(&base62_digits(&hasher.finalize()));
            block += 1;
        }
        code.truncate(length);
        self.draws += 1;
        Ok(code)
    }
}

/// Base-62 digits of a big-endian number, least significant first.
///
/// The low digits are the evenly distributed ones, so truncating the result
/// keeps them.
fn base62_digits(bytes: &[u8]) -> String {
    let mut number = bytes.to_vec();
    let mut out = String::new();
    while number.iter().any(|&d| d != 0) {
        let mut rem = 0u32;
        for digit in number.iter_mut() {
            let acc = (rem << 8) | u32::from(*digit);
            *digit = (acc / 62) as u8;
            rem = acc % 62;
        }
        out.push(BASE62[rem as usize] as char);
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}
