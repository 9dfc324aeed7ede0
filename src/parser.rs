// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/parser.rs - Document parser for LIF drawing images.
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
 * # `parser` Module
 *
 * This module provides functionality to parse the decompressed body of a
 * drawing image into a [Document].
 *
 * ## Usage Example
 *
 * ```no_run
 * use lifimage::decoder::DecodedDrawingFile;
 * use lifimage::parser::{DecodeOptions, Document};
 *
 * fn main() -> Result<(), Box<dyn std::error::Error>> {
 *     // Decode the file
 *     let decoded = DecodedDrawingFile::from_filename("example.bin")?;
 *
 *     // Parse the decoded body
 *     let document = Document::from_decoded(&decoded, &DecodeOptions::default())?;
 *
 *     // Access parsed data
 *     for instruction in &document.instructions {
 *         println!("Instruction: {:?}", instruction.kind());
 *     }
 *
 *     Ok(())
 * }
 * ```
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace, warn};

use crate::cursor::ByteCursor;
use crate::decoder::DecodedDrawingFile;
use crate::error::{DecodeError, Result};
use crate::records::{DetailInstruction, DimensionInstruction, PathInstruction, Rect};
use crate::tags::InstructionKind;

/// The validation bytes that follow the document version.
pub const MAGIC: [u8; 2] = [2, 3];

/// Oldest supported document version.
pub const MIN_VERSION: i16 = 2;

enum ParserState {
    AwaitHeader,
    AwaitMagic,
    AwaitBoundsAndMaps,
    AwaitInstructions,
    Done,
}

/// Settings controlling how a document is decoded.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Fail with [DecodeError::MagicMismatch] on incorrect validation bytes.
    /// When disabled, the mismatch is logged and decoding continues.
    pub strict_magic: bool,
    /// Checked before each instruction; once set, decoding stops with
    /// [DecodeError::Cancelled].
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strict_magic: true,
            cancel: None,
        }
    }
}

impl DecodeOptions {
    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// A decoded drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    CadDetail(DetailInstruction),
    CadDimension(DimensionInstruction),
    CadPath(PathInstruction),
    CadOperation(PathInstruction),
    /// An instruction kind whose payload is not decoded.
    Unhandled(InstructionKind),
}

impl Instruction {
    pub fn kind(&self) -> InstructionKind {
        match self {
            Self::CadDetail(_) => InstructionKind::CadDetail,
            Self::CadDimension(_) => InstructionKind::CadDimension,
            Self::CadPath(_) => InstructionKind::CadPath,
            Self::CadOperation(_) => InstructionKind::CadOperation,
            Self::Unhandled(kind) => *kind,
        }
    }

    fn decode(cursor: &mut ByteCursor) -> Result<Self> {
        let kind = cursor.read_tag::<InstructionKind>()?;
        trace!(?kind, offset = cursor.position(), "Decoding instruction");

        Ok(match kind {
            InstructionKind::CadDetail => Self::CadDetail(DetailInstruction::decode(cursor)?),
            InstructionKind::CadDimension => {
                Self::CadDimension(DimensionInstruction::decode(cursor)?)
            }
            InstructionKind::CadPath => Self::CadPath(PathInstruction::decode(cursor)?),
            InstructionKind::CadOperation => Self::CadOperation(PathInstruction::decode(cursor)?),
            other => {
                warn!(kind = ?other, "Skipping instruction without a decoder");
                Self::Unhandled(other)
            }
        })
    }
}

/// A fully parsed drawing image.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// The document format version.
    pub version: i16,
    /// The validation bytes as read from the document.
    pub magic: [u8; 2],
    /// The bounding rectangle of the whole drawing.
    pub bounds: Rect,
    /// Named regions of the drawing. Present from version 5.
    pub regions: Option<Vec<(String, Rect)>>,
    /// Present from version 3.
    pub caption: Option<String>,
    /// Named text properties. Present from version 5.
    pub properties: Option<Vec<(String, String)>>,
    /// Drawing instructions, in document order. Always empty before version 4.
    pub instructions: Vec<Instruction>,
}

impl Document {
    /// Parses a decompressed document body.
    pub fn from_bytes(body: &[u8], options: &DecodeOptions) -> Result<Self> {
        let mut cursor = ByteCursor::new(body);
        let mut state = ParserState::AwaitHeader;

        let mut version = 0;
        let mut magic = [0; 2];
        let mut bounds = Rect::default();
        let mut regions = None;
        let mut caption = None;
        let mut properties = None;
        let mut instructions = Vec::new();

        loop {
            state = match state {
                ParserState::AwaitHeader => {
                    version = cursor.read_i16()?;
                    if version < MIN_VERSION {
                        return Err(DecodeError::UnsupportedVersion(version));
                    }
                    ParserState::AwaitMagic
                }
                ParserState::AwaitMagic => {
                    magic = [cursor.read_u8()?, cursor.read_u8()?];
                    if magic != MAGIC {
                        if options.strict_magic {
                            return Err(DecodeError::MagicMismatch { found: magic });
                        }
                        warn!(found = ?magic, "Incorrect magic bytes, continuing");
                    }
                    ParserState::AwaitBoundsAndMaps
                }
                ParserState::AwaitBoundsAndMaps => {
                    bounds = Rect::decode(&mut cursor)?;
                    if version >= 5 {
                        regions =
                            Some(cursor.read_list(|c| Ok((c.read_string()?, Rect::decode(c)?)))?);
                    }
                    if version >= 3 {
                        caption = Some(cursor.read_string()?);
                    }
                    if version >= 5 {
                        properties =
                            Some(cursor.read_list(|c| Ok((c.read_string()?, c.read_string()?)))?);
                    }
                    if version >= 4 {
                        ParserState::AwaitInstructions
                    } else {
                        ParserState::Done
                    }
                }
                ParserState::AwaitInstructions => {
                    let count = cursor.read_count()?;
                    debug!(version, count, "Decoding instructions");
                    for _ in 0..count {
                        if options.is_cancelled() {
                            return Err(DecodeError::Cancelled);
                        }
                        instructions.push(Instruction::decode(&mut cursor)?);
                    }
                    ParserState::Done
                }
                ParserState::Done => break,
            };
        }

        if cursor.remaining() != 0 {
            debug!(remaining = cursor.remaining(), "Trailing bytes after document");
        }

        Ok(Self {
            version,
            magic,
            bounds,
            regions,
            caption,
            properties,
            instructions,
        })
    }

    /// Parses a decoded drawing image.
    pub fn from_decoded(decoded: &DecodedDrawingFile, options: &DecodeOptions) -> Result<Self> {
        Self::from_bytes(decoded.body.as_slice(), options)
    }

    /// Looks up a named region.
    pub fn region(&self, name: &str) -> Option<&Rect> {
        self.regions
            .as_ref()?
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, rect)| rect)
    }

    /// Looks up a named property.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .as_ref()?
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
