//! Reference external memory collaborator.
//!
//! The core treats program storage as an external capability behind
//! [`MemoryPort`]; this module ships the canonical synchronous
//! implementation used by harnesses and enclosing systems: a fixed
//! 16-word program store plus a host-settable input value.

use thiserror::Error;

use crate::api::MemoryPort;
use crate::encoding::NIBBLE_MASK;

/// Fixed instruction address space, in words.
pub const PROGRAM_WORDS: usize = 16;

/// Error raised when a supplied program image cannot fit the address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ProgramImageError {
    /// Image is longer than the 16-word address space.
    #[error("program image of {len} words exceeds the {PROGRAM_WORDS}-word address space")]
    TooLong {
        /// Length of the rejected image, in words.
        len: usize,
    },
}

/// Synchronous 16-word program store with a general-purpose input value.
///
/// Unwritten words read as zero (`NOP`). The input value is masked to
/// 4 bits and returned unchanged on every [`MemoryPort::read_input`]
/// sample until the host sets a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ProgramMemory {
    words: [u8; PROGRAM_WORDS],
    input: u8,
}

impl Default for ProgramMemory {
    fn default() -> Self {
        Self {
            words: [0; PROGRAM_WORDS],
            input: 0,
        }
    }
}

impl ProgramMemory {
    /// Builds a store from a program image of up to 16 instruction words.
    ///
    /// # Errors
    ///
    /// Returns [`ProgramImageError::TooLong`] when the image exceeds the
    /// 16-word address space.
    pub fn from_words(image: &[u8]) -> Result<Self, ProgramImageError> {
        if image.len() > PROGRAM_WORDS {
            return Err(ProgramImageError::TooLong { len: image.len() });
        }

        let mut words = [0; PROGRAM_WORDS];
        words[..image.len()].copy_from_slice(image);
        Ok(Self { words, input: 0 })
    }

    /// Sets the general-purpose input value, masked to 4 bits.
    pub const fn set_input(&mut self, value: u8) {
        self.input = value & NIBBLE_MASK;
    }

    /// Reads back a stored instruction word.
    #[must_use]
    pub fn word(&self, address: u8) -> u8 {
        self.words[usize::from(address & NIBBLE_MASK)]
    }
}

impl MemoryPort for ProgramMemory {
    fn read_instruction(&mut self, address: u8) -> u8 {
        self.words[usize::from(address & NIBBLE_MASK)]
    }

    fn read_input(&mut self) -> u8 {
        self.input
    }
}
