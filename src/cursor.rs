// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/cursor.rs - Bounds-checked primitive reader for LIF drawing images.
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
 * # `cursor` Module
 *
 * A forward-only reader over an in-memory buffer. All multi-byte values are
 * little-endian. Strings are stored as an `i32` byte length followed by
 * either a serialized .NET string record or plain UTF-8 text.
 */

use glam::Vec2;

use crate::error::{DecodeError, Result};
use crate::tags::Tagged;

/// Record type of the serialization header that opens a .NET binary
/// serialization stream.
const NRBF_SERIALIZED_STREAM_HEADER: u8 = 0x00;
const NRBF_BINARY_OBJECT_STRING: u8 = 0x06;
const NRBF_MESSAGE_END: u8 = 0x0B;

/// Sequential reader over a byte slice.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Offset of the next byte to be read.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Reads exactly `n` bytes.
    ///
    /// On failure the position is left unchanged.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .position
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or(DecodeError::UnexpectedEndOfStream {
                offset: self.position,
                needed: n,
                remaining: self.remaining(),
            })?;

        let bytes = &self.data[self.position..end];
        self.position = end;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.read_bytes(N)?);
        Ok(array)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Reads a boolean; any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_le_bytes(self.read_array()?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_le_bytes(self.read_array()?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_le_bytes(self.read_array()?))
    }

    /// Reads a point stored as two `f32` values.
    pub fn read_point(&mut self) -> Result<Vec2> {
        Ok(Vec2::new(self.read_f32()?, self.read_f32()?))
    }

    /// Reads an `i32` length or element count, rejecting negative values.
    pub fn read_count(&mut self) -> Result<usize> {
        let offset = self.position;
        let value = self.read_i32()?;
        usize::try_from(value).map_err(|_| DecodeError::InvalidLength { offset, value })
    }

    /// Reads an `i32` element count followed by that many elements.
    pub fn read_list<T>(&mut self, mut read: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
        let count = self.read_count()?;
        // Every element takes at least one byte, so this bounds the allocation.
        let mut items = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            items.push(read(&mut *self)?);
        }
        Ok(items)
    }

    /// Reads a tag byte and resolves it to a variant of `E`.
    pub fn read_tag<E: Tagged>(&mut self) -> Result<E> {
        let offset = self.position;
        let value = self.read_u8()?;
        E::from_tag(value).ok_or(DecodeError::InvalidEnumTag {
            enumeration: E::NAME,
            value,
            offset,
        })
    }

    /// Reads a length-prefixed string.
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_count()?;
        let offset = self.position;
        let bytes = self.read_bytes(len)?;
        decode_text(bytes, offset)
    }
}

fn decode_text(bytes: &[u8], offset: usize) -> Result<String> {
    if bytes.first() == Some(&NRBF_SERIALIZED_STREAM_HEADER) {
        return decode_serialized_string(bytes, offset);
    }

    String::from_utf8(bytes.to_vec()).map_err(|_| DecodeError::InvalidEncoding {
        offset,
        reason: "text is not valid UTF-8",
    })
}

/// Extracts the value of a .NET binary-serialized string.
///
/// The stream must hold exactly a serialization header, one
/// BinaryObjectString record and the MessageEnd record.
fn decode_serialized_string(bytes: &[u8], offset: usize) -> Result<String> {
    let invalid = |reason| DecodeError::InvalidEncoding { offset, reason };
    let mut cursor = ByteCursor::new(bytes);

    // Header: record type, root id, header id, major and minor version.
    let header = cursor
        .read_bytes(17)
        .map_err(|_| invalid("truncated serialization header"))?;
    let major = i32::from_le_bytes([header[9], header[10], header[11], header[12]]);
    let minor = i32::from_le_bytes([header[13], header[14], header[15], header[16]]);
    if major != 1 || minor != 0 {
        return Err(invalid("unsupported serialization format version"));
    }

    if cursor.read_u8().ok() != Some(NRBF_BINARY_OBJECT_STRING) {
        return Err(invalid("serialized object is not a string"));
    }
    cursor
        .read_i32()
        .map_err(|_| invalid("truncated string record"))?;

    let len = read_7bit_length(&mut cursor).ok_or_else(|| invalid("bad string length"))?;
    let value = cursor
        .read_bytes(len)
        .map_err(|_| invalid("truncated string value"))?;
    let value = std::str::from_utf8(value).map_err(|_| invalid("text is not valid UTF-8"))?;

    if cursor.read_u8().ok() != Some(NRBF_MESSAGE_END) || cursor.remaining() != 0 {
        return Err(invalid("missing end of serialized message"));
    }

    Ok(value.to_string())
}

/// Reads a length encoded seven bits per byte, low group first.
fn read_7bit_length(cursor: &mut ByteCursor<'_>) -> Option<usize> {
    let mut value: u32 = 0;
    for shift in (0..35).step_by(7) {
        let byte = cursor.read_u8().ok()?;
        // The fifth byte carries only the top four bits of a 32-bit length.
        if shift == 28 && byte > 0x07 {
            return None;
        }
        value |= u32::from(byte & 0x7F) << shift;
        if byte & 0x80 == 0 {
            return i32::try_from(value).ok()?.try_into().ok();
        }
    }
    None
}
