//! Core type definitions for codec operations.

/// Opcode body encodings.
///
/// The artifact carries no mode marker; a file produced in one mode can
/// only be decoded in that same mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpcodeMode {
    /// Packed bit stream, little-endian within each byte (default).
    #[default]
    Packed,

    /// ASCII '0'/'1' text body.
    Ascii,
}

impl OpcodeMode {
    /// Get mode name as string.
    pub fn name(self) -> &'static str {
        match self {
            OpcodeMode::Packed => "packed",
            OpcodeMode::Ascii => "ascii",
        }
    }
}

/// Compression ratio metrics.
#[derive(Debug, Clone, Copy)]
pub struct CompressionRatio {
    /// Original uncompressed size in bytes.
    pub original_size: usize,
    /// Encoded artifact size in bytes.
    pub encoded_size: usize,
}

impl CompressionRatio {
    /// Create new ratio from sizes.
    pub fn new(original: usize, encoded: usize) -> Self {
        CompressionRatio {
            original_size: original,
            encoded_size: encoded,
        }
    }

    /// Calculate ratio (original / encoded).
    /// Higher is better (more compression).
    pub fn ratio(&self) -> f64 {
        if self.encoded_size == 0 {
            return 0.0;
        }
        self.original_size as f64 / self.encoded_size as f64
    }

    /// Calculate space savings as percentage (0-100).
    pub fn savings_percent(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (1.0 - (self.encoded_size as f64 / self.original_size as f64)) * 100.0
    }

    /// Check if encoding actually saved space.
    pub fn is_effective(&self) -> bool {
        self.encoded_size < self.original_size
    }
}
