// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/lib.rs - Decoder and parser library for LIF drawing images.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

/*!
 * # `lifimage` Crate
 *
 * A library for decoding the compressed drawing images ("LIF images") that
 * describe fenestration products: window and door elevations, CAD details
 * and their dimensions.
 *
 * This crate provides a full pipeline for reading these files:
 *
 * 1. [decoder]: Removes the outer DEFLATE compression from the file.
 * 2. [parser]: Converts the decompressed body into a [parser::Document].
 *
 * The lower layers are public as well: [cursor] reads the primitive values
 * the format is built from, [tags] holds the single-byte enumerations, and
 * [records] holds the instruction records.
 *
 * ## Usage Example
 *
 * ```no_run
 * use lifimage::parser::Instruction;
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     let raw = std::fs::read("example.bin")?;
 *
 *     // Decode and parse the file
 *     let document = lifimage::decode_document(&raw)?;
 *
 *     // Access the CAD details
 *     for instruction in &document.instructions {
 *         if let Instruction::CadDetail(detail) = instruction {
 *             println!("Detail: {}", detail.name);
 *             for drawing in &detail.drawings {
 *                 println!("  Block: {} from {}", drawing.block, drawing.file);
 *             }
 *         }
 *     }
 *
 *     Ok(())
 * }
 * ```
 */

pub mod cursor;
pub mod decoder;
pub mod error;
pub mod parser;
pub mod records;
pub mod tags;

pub use error::{DecodeError, Result};
pub use parser::{DecodeOptions, Document, Instruction};

/// Decodes a complete drawing image with the default [DecodeOptions].
pub fn decode_document(raw: &[u8]) -> Result<Document> {
    decode_document_with(raw, &DecodeOptions::default())
}

/// Decodes a complete drawing image.
pub fn decode_document_with(raw: &[u8], options: &DecodeOptions) -> Result<Document> {
    let decoded = decoder::DecodedDrawingFile::from_bytes(raw)?;
    Document::from_decoded(&decoded, options)
}
