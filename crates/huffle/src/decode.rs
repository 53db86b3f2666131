//! Decoder pipeline: tree reconstruction, opcode replay, symbol
//! emission.

use tracing::debug;

use huffle_core::{Error, OpcodeMode, Result};

use crate::bitvec::{BitVector, LenMode};
use crate::tree::HuffmanTree;

/// The opcode body of an artifact, unified over both encodings.
enum OpcodeStream<'a> {
    Packed(BitVector),
    Ascii(&'a [u8]),
}

impl OpcodeStream<'_> {
    fn read(artifact: &[u8], offset: usize, mode: OpcodeMode) -> Result<OpcodeStream<'_>> {
        match mode {
            OpcodeMode::Packed => {
                let (bits, _) = BitVector::read_from(artifact, offset)?;
                Ok(OpcodeStream::Packed(bits))
            }
            OpcodeMode::Ascii => Ok(OpcodeStream::Ascii(&artifact[offset..])),
        }
    }

    fn len(&self) -> u64 {
        match self {
            OpcodeStream::Packed(bits) => bits.len(LenMode::Stream),
            OpcodeStream::Ascii(text) => text.len() as u64,
        }
    }

    fn opcode(&self, i: u64) -> Result<u8> {
        match self {
            OpcodeStream::Packed(bits) => bits.get(i),
            OpcodeStream::Ascii(text) => match text[i as usize] {
                b'0' => Ok(0),
                b'1' => Ok(1),
                other => Err(Error::corrupted(format!(
                    "opcode character 0x{:02x} is not '0' or '1'",
                    other
                ))),
            },
        }
    }
}

/// Decode a complete artifact back to the original bytes.
///
/// The mode must match the one used at encode time; the artifact carries
/// no mode marker.
pub fn decode(artifact: &[u8], mode: OpcodeMode) -> Result<Vec<u8>> {
    let (tree, body_offset) = HuffmanTree::deserialize(artifact)?;
    let root = tree
        .root()
        .ok_or_else(|| Error::invalid_state("tree with a root", "empty tree"))?;

    // Deserialization validated every node record, so the body offset is
    // within bounds.
    let stream = OpcodeStream::read(artifact, body_offset, mode)?;
    let opcode_count = stream.len();
    debug!(nodes = tree.count(), opcodes = opcode_count, "artifact parsed");

    let mut output = Vec::with_capacity(opcode_count as usize);

    if tree.node(root).is_leaf {
        // Lone-leaf tree: each occurrence was written as the fixed bit 0.
        let symbol = tree.node(root).symbol;
        for i in 0..opcode_count {
            if stream.opcode(i)? != 0 {
                return Err(Error::corrupted(
                    "nonzero opcode in a single-symbol stream",
                ));
            }
            output.push(symbol);
        }
        return Ok(output);
    }

    let mut current = root;
    for i in 0..opcode_count {
        let (next, emitted) = tree.step(current, stream.opcode(i)?)?;
        if let Some(symbol) = emitted {
            output.push(symbol);
        }
        current = next;
    }

    if current != root {
        return Err(Error::corrupted("opcode stream truncated mid-symbol"));
    }

    Ok(output)
}

/// Render an artifact's opcode body as printable text.
///
/// Packed bodies come out four bits per space-separated cluster; ASCII
/// bodies are passed through as-is.
pub fn render_body(artifact: &[u8], mode: OpcodeMode) -> Result<String> {
    let (_, body_offset) = HuffmanTree::deserialize(artifact)?;
    match mode {
        OpcodeMode::Packed => {
            let (bits, _) = BitVector::read_from(artifact, body_offset)?;
            Ok(bits.to_bit_string(LenMode::Stream))
        }
        OpcodeMode::Ascii => Ok(String::from_utf8_lossy(&artifact[body_offset..]).into_owned()),
    }
}
