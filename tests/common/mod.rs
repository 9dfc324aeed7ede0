// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  tests/common/mod.rs - Fixture builder for LIF drawing image tests.
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

#![allow(dead_code)]

use std::io::Write;

use flate2::Compression;
use flate2::write::{DeflateEncoder, GzEncoder};

/// Little-endian byte stream builder.
#[derive(Debug, Default, Clone)]
pub struct Builder(Vec<u8>);

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn u8(mut self, value: u8) -> Self {
        self.0.push(value);
        self
    }

    pub fn i16(mut self, value: i16) -> Self {
        self.0.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn i32(mut self, value: i32) -> Self {
        self.0.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn f32(mut self, value: f32) -> Self {
        self.0.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn f64(mut self, value: f64) -> Self {
        self.0.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn bytes(mut self, value: &[u8]) -> Self {
        self.0.extend_from_slice(value);
        self
    }

    /// A length-prefixed UTF-8 string.
    pub fn string(self, value: &str) -> Self {
        self.i32(value.len() as i32).bytes(value.as_bytes())
    }

    /// A length-prefixed .NET binary-serialized string.
    pub fn serialized_string(self, value: &str) -> Self {
        let mut record = Builder::new()
            .u8(0x00)
            .i32(1)
            .i32(-1)
            .i32(1)
            .i32(0)
            .u8(0x06)
            .i32(1);
        let mut len = value.len();
        while len >= 0x80 {
            record = record.u8((len as u8 & 0x7F) | 0x80);
            len >>= 7;
        }
        let record = record.u8(len as u8).bytes(value.as_bytes()).u8(0x0B).finish();
        self.i32(record.len() as i32).bytes(&record)
    }

    pub fn point(self, x: f32, y: f32) -> Self {
        self.f32(x).f32(y)
    }

    pub fn rect(self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.f32(x).f32(y).f32(width).f32(height)
    }

    pub fn finish(self) -> Vec<u8> {
        self.0
    }
}

pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Wraps a document body in the compressed container.
pub fn container(body: &[u8]) -> Vec<u8> {
    let mut encoder = DeflateEncoder::new(vec![0x01], Compression::default());
    encoder.write_all(body).unwrap();
    encoder.finish().unwrap()
}

/// A document header for `version` with the bounds (0, 0, 100, 100) and,
/// where the version has them, an empty caption and empty maps. The
/// instruction count is left for the caller.
pub fn header(version: i16) -> Builder {
    let mut body = Builder::new().i16(version).u8(2).u8(3).rect(0.0, 0.0, 100.0, 100.0);
    if version >= 5 {
        body = body.i32(0);
    }
    if version >= 3 {
        body = body.string("");
    }
    if version >= 5 {
        body = body.i32(0);
    }
    body
}

/// A detail dimension as written by record version `version`.
pub fn detail_dimension(body: Builder, version: i32, label: &str, orientation: u8) -> Builder {
    let mut body = body.string(label).f64(0.5).f64(36.0);
    if version > 2 {
        body = body.f64(1.25);
    }
    body = body.u8(orientation);
    if version > 3 {
        body = body.u8(3);
    }
    body
}

/// A drawing with one component, one dimension and one dimension line.
pub fn drawing(body: Builder, version: i32) -> Builder {
    let mut body = body
        .string("C:\\details\\sill.dwg")
        .string("SILL-01")
        .f64(0.0)
        .f64(0.0)
        .f64(90.0)
        .f64(1.0)
        .f64(2.0)
        .f64(0.0)
        .f64(1.0)
        .f64(1.0)
        .f64(1.0);
    if version > 5 {
        body = body.string("PMU/sill");
    }
    body = body.i32(1).string("Sill Nosing");
    body = detail_dimension(body.i32(1), version, "A", 0);
    detail_dimension(body.i32(1), version, "B", 1)
}

/// A CadDetail instruction (tag included) for record version `version`.
pub fn detail_instruction(body: Builder, version: i32, drawings: usize) -> Builder {
    let mut inner = Builder::new()
        .string("Head Detail")
        .f64(1.0)
        .f64(2.0)
        .f64(3.0)
        .f64(4.0);
    if version > 4 {
        inner = inner.f64(1.5);
    }
    if version > 1 {
        inner = inner.i32(7);
    }
    if version > 5 {
        inner = inner.string("PMU/head");
    }
    inner = inner.i32(drawings as i32);
    for _ in 0..drawings {
        inner = drawing(inner, version);
    }

    let payload = gzip(&inner.finish());
    body.u8(11)
        .i32(version)
        .i32(payload.len() as i32)
        .bytes(&payload)
}

/// A CadDimension instruction (tag included).
pub fn dimension_instruction(
    body: Builder,
    orientation: u8,
    level: u8,
    location: u8,
    measure: u8,
) -> Builder {
    body.u8(13)
        .i32(1)
        .point(10.0, 20.0)
        .u8(orientation)
        .f64(4.0)
        .string("35 1/2\"")
        .u8(level)
        .u8(location)
        .u8(measure)
        .f32(35.5)
        .point(0.0, 0.0)
        .point(1.0, 1.0)
}

/// A CadPath (tag 12) or CadOperation (tag 15) instruction with a point and
/// an arc.
pub fn path_instruction(body: Builder, tag: u8) -> Builder {
    body.u8(tag)
        .i32(1)
        .i32(2)
        .u8(0)
        .point(1.0, 2.0)
        .u8(1)
        .rect(0.0, 0.0, 10.0, 10.0)
        .f32(0.0)
        .f32(180.0)
        .string("Frame")
        .string("Outer frame outline")
        .u8(1)
        .i32(2)
        .f64(0.25)
        .f64(0.75)
}
