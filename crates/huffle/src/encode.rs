//! Encoder pipeline: frequency pass, merge loop, code table, opcode
//! emission.
//!
//! The input is scanned twice: once to measure byte frequencies, once to
//! emit each byte's opcode. Both passes run over the same in-memory
//! slice, so they observe identical bytes in identical order.

use tracing::debug;

use huffle_core::{Error, OpcodeMode, Result};

use crate::bitvec::{BitVector, LenMode};
use crate::list::FreqList;
use crate::node::{Arena, INTERNAL_SYMBOL};
use crate::tree::{CodeTable, HuffmanTree};

/// Encode `input` into a complete artifact: serialized tree header
/// followed by the opcode body in the requested mode.
pub fn encode(input: &[u8], mode: OpcodeMode) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Err(Error::invalid_argument("cannot encode an empty input"));
    }

    let (tree, table) = build_tree(input)?;

    let mut artifact = Vec::with_capacity(input.len() / 2 + 64);
    let header_len = tree.serialize(&mut artifact)?;

    match mode {
        OpcodeMode::Packed => {
            let body = pack_body(input, &table)?;
            body.write_into(&mut artifact, LenMode::Stream);
            debug!(
                header_bytes = header_len,
                body_bits = body.len(LenMode::Stream),
                "packed artifact assembled"
            );
        }
        OpcodeMode::Ascii => {
            let body = text_body(input, &table)?;
            debug!(
                header_bytes = header_len,
                body_bytes = body.len(),
                "ascii artifact assembled"
            );
            artifact.extend_from_slice(&body);
        }
    }

    Ok(artifact)
}

/// Build the decoding tree and code table for `input`.
///
/// Frequencies accumulate one byte at a time; the merge loop then folds
/// the two cheapest nodes under a fresh internal node until a single
/// root survives.
pub fn build_tree(input: &[u8]) -> Result<(HuffmanTree, CodeTable)> {
    let mut arena = Arena::new();
    let mut list = FreqList::new();

    for &byte in input {
        list.add_or_increment(&mut arena, byte, 0);
    }
    debug!(distinct = list.len(), bytes = input.len(), "frequency pass complete");

    while let Ok((first, second)) = list.pop_two_min() {
        let combined = arena[first].frequency + arena[second].frequency;
        let parent = list.add_or_increment(&mut arena, INTERNAL_SYMBOL, combined);
        HuffmanTree::connect(&mut arena, parent, first, second)?;
    }

    let root = list
        .head()
        .ok_or_else(|| Error::invalid_state("a surviving root node", "empty list"))?;

    let mut tree = HuffmanTree::new(arena, root);
    let table = tree.parse()?;
    debug!(nodes = tree.count(), codes = table.len(), "tree parsed");
    Ok((tree, table))
}

/// Emit the packed opcode body: one bit vector per code, appended in
/// full for every input byte.
fn pack_body(input: &[u8], table: &CodeTable) -> Result<BitVector> {
    // Convert each code string once; conversion compacts capacity to the
    // code length, which is what makes Full-mode appends exact.
    let mut code_vectors: Vec<Option<BitVector>> = std::iter::repeat_with(|| None)
        .take(256)
        .collect();
    for (symbol, code) in table.iter() {
        code_vectors[symbol as usize] = Some(BitVector::from_code_text(code)?);
    }

    let mut body = BitVector::new(1)?;
    for &byte in input {
        let vector = code_vectors[byte as usize]
            .as_ref()
            .ok_or_else(|| Error::invalid_state("a code for every input byte", "missing code"))?;
        body.extend_from(vector, LenMode::Full)?;
    }
    Ok(body)
}

/// Emit the ASCII opcode body: the code strings concatenated as raw
/// '0'/'1' characters with no framing.
fn text_body(input: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    let mut body = Vec::with_capacity(input.len() * 4);
    for &byte in input {
        let code = table
            .get(byte)
            .ok_or_else(|| Error::invalid_state("a code for every input byte", "missing code"))?;
        body.extend_from_slice(code.as_bytes());
    }
    Ok(body)
}
