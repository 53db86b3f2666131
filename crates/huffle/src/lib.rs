//! # Huffle
//!
//! Static Huffman codec for 8-bit byte streams.
//!
//! An encode pass measures byte frequencies, folds the two cheapest
//! nodes until a single tree survives, and writes an artifact holding
//! the serialized decoding tree plus an opcode stream. The decoder
//! rebuilds the tree from its pre-order form and replays the opcodes one
//! bit at a time, emitting a byte at every leaf.
//!
//! Two opcode encodings are supported and must match between encode and
//! decode: a packed little-endian bit stream (default) and an ASCII
//! '0'/'1' text form.
//!
//! ## Example
//!
//! ```ignore
//! use huffle::HuffmanCodec;
//! use huffle_core::{Compressor, Decompressor};
//!
//! let codec = HuffmanCodec::new();
//! let artifact = codec.compress(data)?;
//! let original = codec.decompress(&artifact)?;
//! assert_eq!(original, data);
//! ```

pub mod bitvec;
pub mod codec;
pub mod decode;
pub mod encode;
pub mod list;
pub mod node;
pub mod tree;

// Re-export main types
pub use bitvec::{BitVector, LenMode};
pub use codec::HuffmanCodec;
pub use node::{Arena, Node, NodeId, INTERNAL_SYMBOL};
pub use tree::{CodeTable, HuffmanTree};
