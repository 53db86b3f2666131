//! # Huffle Core
//!
//! Core traits, types, and errors for the Huffle static Huffman codec.
//!
//! ## Design Philosophy
//!
//! - **Exact round-trips**: Every artifact decodes back to the original bytes
//! - **Buffer-oriented**: One-shot operations over in-memory slices
//! - **Explicit layout**: All on-disk integers are little-endian
//!
//! ## Core Traits
//!
//! - [`Compressor`] - One-shot encoding operations
//! - [`Decompressor`] - One-shot decoding operations
//! - [`Codec`] - Combined encode/decode capability
//!
//! ## Example
//!
//! ```ignore
//! use huffle_core::{Codec, OpcodeMode};
//! use huffle::HuffmanCodec;
//!
//! let codec = HuffmanCodec::with_mode(OpcodeMode::Packed);
//! let artifact = codec.compress(data)?;
//! let original = codec.decompress(&artifact)?;
//! ```

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{Codec, Compressor, Decompressor};
pub use types::{CompressionRatio, OpcodeMode};
