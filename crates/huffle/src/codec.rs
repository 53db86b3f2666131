//! Huffman codec (combined encoder + decoder).

use huffle_core::{Codec, Compressor, Decompressor, OpcodeMode, Result};

use crate::decode;
use crate::encode;

/// Static Huffman codec over 8-bit byte streams.
///
/// The configured [`OpcodeMode`] applies to both directions; an artifact
/// can only be decoded in the mode it was encoded with.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec {
    mode: OpcodeMode,
}

impl HuffmanCodec {
    /// Create a codec using the default packed mode.
    pub fn new() -> Self {
        HuffmanCodec::default()
    }

    /// Create a codec with the given opcode mode.
    pub fn with_mode(mode: OpcodeMode) -> Self {
        HuffmanCodec { mode }
    }
}

impl Compressor for HuffmanCodec {
    fn mode(&self) -> OpcodeMode {
        self.mode
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        encode::encode(input, self.mode)
    }
}

impl Decompressor for HuffmanCodec {
    fn mode(&self) -> OpcodeMode {
        self.mode
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        decode::decode(input, self.mode)
    }
}

impl Codec for HuffmanCodec {}
