//! 字母表映射：把原始字节压缩为稠密编码 `1..=k`，`0` 预留给哨兵（$）。

use std::sync::Arc;

use crate::error::{Result, StError};
use crate::util::subseq::SubSeq;

/// Code of the sentinel appended to every mapped sequence.
pub const SENTINEL: u8 = 0;
/// Raw byte reserved as the terminator; it may not appear in input text.
pub const TERMINATOR: u8 = 0;
/// Largest code space representable by a `u8` code next to the sentinel.
pub const MAX_SYMBOLS: usize = u8::MAX as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    /// byte -> code, 0 when the byte is not in the alphabet
    codes: [u8; 256],
    /// code - 1 -> byte
    symbols: Vec<u8>,
}

impl Alphabet {
    /// Alphabet of the distinct bytes in `text`, ordered by byte value.
    pub fn from_text(text: &[u8]) -> Result<Self> {
        Self::with_limit(text, MAX_SYMBOLS)
    }

    /// Like [`Alphabet::from_text`] but rejects more than `max_symbols` distinct bytes.
    pub fn with_limit(text: &[u8], max_symbols: usize) -> Result<Self> {
        let mut seen = [false; 256];
        for &b in text {
            seen[b as usize] = true;
        }
        if seen[TERMINATOR as usize] {
            return Err(StError::AlphabetViolation {
                reason: "input contains the reserved terminator byte 0x00".to_string(),
            });
        }

        let symbols: Vec<u8> = (1..=u8::MAX).filter(|&b| seen[b as usize]).collect();
        let limit = max_symbols.min(MAX_SYMBOLS);
        if symbols.len() > limit {
            return Err(StError::AlphabetViolation {
                reason: format!("{} distinct symbols exceed the code space of {}", symbols.len(), limit),
            });
        }

        let mut codes = [0u8; 256];
        for (i, &b) in symbols.iter().enumerate() {
            codes[b as usize] = (i + 1) as u8;
        }
        Ok(Self { codes, symbols })
    }

    /// Number of real symbols, excluding the sentinel.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Size of the code space including the sentinel.
    pub fn sigma(&self) -> usize {
        self.symbols.len() + 1
    }

    #[inline]
    pub fn code(&self, b: u8) -> Option<u8> {
        match self.codes[b as usize] {
            0 => None,
            c => Some(c),
        }
    }

    #[inline]
    pub fn symbol(&self, code: u8) -> Option<u8> {
        if code == SENTINEL {
            return None;
        }
        self.symbols.get(code as usize - 1).copied()
    }

    /// Encodes `text` without a sentinel. Every byte must belong to the alphabet.
    pub fn encode(&self, text: &[u8]) -> Result<Vec<u8>> {
        text.iter()
            .enumerate()
            .map(|(i, &b)| {
                self.code(b).ok_or_else(|| StError::AlphabetViolation {
                    reason: format!("byte 0x{:02x} at offset {} is not in the alphabet", b, i),
                })
            })
            .collect()
    }

    /// Encodes `text` and appends the sentinel.
    pub fn encode_with_sentinel(&self, text: &[u8]) -> Result<Arc<[u8]>> {
        let mut out = Vec::with_capacity(text.len() + 1);
        out.extend(self.encode(text)?);
        out.push(SENTINEL);
        Ok(out.into())
    }

    /// Encodes a query pattern; `None` if some byte cannot occur in the indexed text.
    pub fn encode_pattern(&self, pattern: &[u8]) -> Option<Vec<u8>> {
        pattern.iter().map(|&b| self.code(b)).collect()
    }

    /// Maps codes back to bytes, rendering the sentinel as `$`.
    pub fn decode(&self, codes: &[u8]) -> Vec<u8> {
        codes.iter().map(|&c| self.symbol(c).unwrap_or(b'$')).collect()
    }
}

/// Builds the alphabet of `text` and returns the sentinel-terminated mapped sequence.
pub fn map_sequence(text: &[u8]) -> Result<(SubSeq<u8>, Alphabet)> {
    map_sequence_with_limit(text, MAX_SYMBOLS)
}

pub fn map_sequence_with_limit(text: &[u8], max_symbols: usize) -> Result<(SubSeq<u8>, Alphabet)> {
    let alpha = Alphabet::with_limit(text, max_symbols)?;
    let mapped = alpha.encode_with_sentinel(text)?;
    Ok((SubSeq::new(mapped), alpha))
}
