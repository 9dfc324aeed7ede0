// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/decoder.rs - Container decoder for LIF drawing images.
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

use std::fs::File;
use std::io::BufReader;
use std::io::prelude::*;
use std::path::Path;

use flate2::read::{DeflateDecoder, GzDecoder};
use tracing::{debug, trace};

use crate::error::{CompressionLayer, DecodeError, Result};

/// Decompresses a raw DEFLATE stream (no zlib or gzip framing).
pub fn inflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = DeflateDecoder::new(data);
    let mut buffer = Vec::new();
    decoder
        .read_to_end(&mut buffer)
        .map_err(|source| DecodeError::DecompressionFailure {
            layer: CompressionLayer::Outer,
            source,
        })?;
    trace!("Inflated {} bytes into {} bytes", data.len(), buffer.len());
    Ok(buffer)
}

/// Decompresses a single GZIP member.
pub fn gunzip(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut buffer = Vec::new();
    decoder
        .read_to_end(&mut buffer)
        .map_err(|source| DecodeError::DecompressionFailure {
            layer: CompressionLayer::Detail,
            source,
        })?;
    trace!("Gunzipped {} bytes into {} bytes", data.len(), buffer.len());
    Ok(buffer)
}

/// A drawing image with its outer compression removed.
#[derive(Debug)]
pub struct DecodedDrawingFile {
    /// The decompressed document body.
    pub body: Vec<u8>,
}

impl DecodedDrawingFile {
    /// Unwraps the container: a boolean "compressed" flag followed by the
    /// DEFLATE-compressed body.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let (&compressed, payload) = data.split_first().ok_or(DecodeError::UnexpectedEndOfStream {
            offset: 0,
            needed: 1,
            remaining: 0,
        })?;

        if compressed == 0 {
            return Err(DecodeError::UnsupportedContainer);
        }

        let body = inflate(payload)?;
        debug!(
            compressed = payload.len(),
            decompressed = body.len(),
            "Unwrapped drawing container"
        );

        Ok(Self { body })
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        Self::from_bytes(&buffer)
    }

    pub fn from_filename(filename: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(filename)?;
        Self::from_reader(BufReader::new(file))
    }
}
