// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/error.rs - Error types for LIF drawing image decoding.
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

use std::fmt;

use thiserror::Error;

/// The compression layer a [DecodeError::DecompressionFailure] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLayer {
    /// The raw DEFLATE stream wrapping the whole document body.
    Outer,
    /// The GZIP block carried by a CadDetail instruction.
    Detail,
}

impl fmt::Display for CompressionLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outer => f.write_str("outer deflate"),
            Self::Detail => f.write_str("detail gzip"),
        }
    }
}

/// Errors occurring while decoding a drawing image.
///
/// Offsets are relative to the buffer being read when the error occurred:
/// either the decompressed document body or a CadDetail's decompressed
/// payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Fewer bytes remain than a read requires.
    #[error("Unexpected end of stream at offset {offset} (needed {needed}, {remaining} remaining).")]
    UnexpectedEndOfStream {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    /// The document version predates the oldest supported layout.
    #[error("Unsupported document version ({0}).")]
    UnsupportedVersion(i16),
    /// The validation bytes following the version are not (2, 3).
    #[error("Incorrect magic bytes {found:?}, expected [2, 3].")]
    MagicMismatch { found: [u8; 2] },
    /// The container flag says the body is stored uncompressed.
    #[error("Uncompressed containers are not supported.")]
    UnsupportedContainer,
    /// A compression layer rejected its input.
    #[error("Failed to decompress {layer} block: {source}.")]
    DecompressionFailure {
        layer: CompressionLayer,
        source: std::io::Error,
    },
    /// A tag byte outside the declared variants of an enumeration.
    #[error("Invalid {enumeration} tag ({value}) at offset {offset}.")]
    InvalidEnumTag {
        enumeration: &'static str,
        value: u8,
        offset: usize,
    },
    /// Text bytes that could not be decoded.
    #[error("Invalid text encoding at offset {offset}: {reason}.")]
    InvalidEncoding { offset: usize, reason: &'static str },
    /// A declared variant that has no decoding support.
    #[error("Unsupported {record} variant {variant} at offset {offset}.")]
    UnsupportedRecordVariant {
        record: &'static str,
        variant: &'static str,
        offset: usize,
    },
    /// A negative string length or element count.
    #[error("Invalid length ({value}) at offset {offset}.")]
    InvalidLength { offset: usize, value: i32 },
    /// Decoding was cancelled through [crate::parser::DecodeOptions::cancel].
    #[error("Decoding was cancelled.")]
    Cancelled,
    /// An error reading the input file.
    #[error("I/O error: {0}.")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` type alias using [DecodeError].
pub type Result<T> = std::result::Result<T, DecodeError>;
