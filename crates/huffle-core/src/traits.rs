//! Core traits for encoding and decoding.
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Compressor / Decompressor  (one-shot operations)
//!       ↓
//! Codec  (combined encode + decode)
//! ```

use crate::error::Result;
use crate::types::{CompressionRatio, OpcodeMode};

/// One-shot encoding operations.
pub trait Compressor {
    /// Get the configured opcode mode.
    fn mode(&self) -> OpcodeMode;

    /// Encode data in one shot.
    ///
    /// # Arguments
    /// * `input` - Data to encode
    ///
    /// # Returns
    /// The complete artifact (header plus body) as a vector.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// One-shot decoding operations.
pub trait Decompressor {
    /// Get the configured opcode mode.
    fn mode(&self) -> OpcodeMode;

    /// Decode an artifact in one shot.
    ///
    /// # Arguments
    /// * `input` - Complete artifact bytes
    ///
    /// # Returns
    /// The original data as a vector.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// Combined codec for both encoding and decoding.
pub trait Codec: Compressor + Decompressor {
    /// Round-trip test: encode then decode.
    /// Returns true if data matches.
    fn verify_roundtrip(&self, data: &[u8]) -> Result<bool> {
        let encoded = self.compress(data)?;
        let decoded = self.decompress(&encoded)?;
        Ok(data == decoded.as_slice())
    }

    /// Get compression ratio for given data.
    fn measure_ratio(&self, data: &[u8]) -> Result<CompressionRatio> {
        let encoded = self.compress(data)?;
        Ok(CompressionRatio::new(data.len(), encoded.len()))
    }
}
