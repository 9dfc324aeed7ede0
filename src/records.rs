// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/records.rs - Record decoders for LIF drawing image instructions.
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
 * # `records` Module
 *
 * Structured records carried by drawing instructions. Each record starts
 * with its own version number, and fields added in later revisions of the
 * format are only present when that version is high enough. Such fields are
 * modeled as `Option`s so an absent field can be told apart from a zero.
 */

use glam::{DVec2, DVec3, Vec2};
use tracing::trace;

use crate::cursor::ByteCursor;
use crate::decoder::gunzip;
use crate::error::{DecodeError, Result};
use crate::tags::{
    DimensionLevel, DimensionLocation, DimensionMeasure, DimensionOrientation, PathItemKind,
};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub(crate) fn decode(cursor: &mut ByteCursor) -> Result<Self> {
        Ok(Self::new(
            cursor.read_f32()?,
            cursor.read_f32()?,
            cursor.read_f32()?,
            cursor.read_f32()?,
        ))
    }
}

/// A single element of a path.
#[derive(Debug, Clone, PartialEq)]
pub enum PathItem {
    Point(Vec2),
    Arc {
        /// The rectangle bounding the ellipse the arc lies on.
        bounds: Rect,
        /// Start angle, in degrees.
        start_angle: f32,
        /// Sweep angle, in degrees.
        sweep_angle: f32,
    },
}

impl PathItem {
    pub(crate) fn decode(cursor: &mut ByteCursor) -> Result<Self> {
        let offset = cursor.position();
        match cursor.read_tag::<PathItemKind>()? {
            PathItemKind::Point => Ok(Self::Point(cursor.read_point()?)),
            PathItemKind::Arc => Ok(Self::Arc {
                bounds: Rect::decode(cursor)?,
                start_angle: cursor.read_f32()?,
                sweep_angle: cursor.read_f32()?,
            }),
            PathItemKind::Bezier => Err(DecodeError::UnsupportedRecordVariant {
                record: "PathItem",
                variant: "Bezier",
                offset,
            }),
        }
    }
}

/// A path or operation outline (CadPath and CadOperation instructions).
#[derive(Debug, Clone, PartialEq)]
pub struct PathInstruction {
    pub version: i32,
    pub items: Vec<PathItem>,
    pub name: String,
    pub description: String,
    pub flag: bool,
    pub values: Vec<f64>,
}

impl PathInstruction {
    pub(crate) fn decode(cursor: &mut ByteCursor) -> Result<Self> {
        Ok(Self {
            version: cursor.read_i32()?,
            items: cursor.read_list(PathItem::decode)?,
            name: cursor.read_string()?,
            description: cursor.read_string()?,
            flag: cursor.read_bool()?,
            values: cursor.read_list(ByteCursor::read_f64)?,
        })
    }
}

/// A dimension annotation placed directly on the elevation (CadDimension).
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionInstruction {
    pub version: i32,
    pub point: Vec2,
    pub orientation: DimensionOrientation,
    pub label_offset: f64,
    pub label: String,
    pub level: DimensionLevel,
    pub location: DimensionLocation,
    pub measure: DimensionMeasure,
    pub dimension: f32,
    pub radial_center: Vec2,
    pub radial_end: Vec2,
}

impl DimensionInstruction {
    pub(crate) fn decode(cursor: &mut ByteCursor) -> Result<Self> {
        Ok(Self {
            version: cursor.read_i32()?,
            point: cursor.read_point()?,
            orientation: cursor.read_tag()?,
            label_offset: cursor.read_f64()?,
            label: cursor.read_string()?,
            level: cursor.read_tag()?,
            location: cursor.read_tag()?,
            measure: cursor.read_tag()?,
            dimension: cursor.read_f32()?,
            radial_center: cursor.read_point()?,
            radial_end: cursor.read_point()?,
        })
    }
}

/// A dimension annotation belonging to a detail drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailDimension {
    pub label: String,
    pub label_offset: f64,
    pub dimension: f64,
    /// Present from record version 3.
    pub dimension_offset: Option<f64>,
    pub orientation: DimensionOrientation,
    /// Present from record version 4.
    pub location: Option<DimensionLocation>,
}

impl DetailDimension {
    pub(crate) fn decode(cursor: &mut ByteCursor, version: i32) -> Result<Self> {
        Ok(Self {
            label: cursor.read_string()?,
            label_offset: cursor.read_f64()?,
            dimension: cursor.read_f64()?,
            dimension_offset: (version > 2).then(|| cursor.read_f64()).transpose()?,
            orientation: cursor.read_tag()?,
            location: (version > 3)
                .then(|| cursor.read_tag::<DimensionLocation>())
                .transpose()?,
        })
    }

    /// The dimension offset, or `0.0` for records that predate it.
    pub fn dimension_offset_or_default(&self) -> f64 {
        self.dimension_offset.unwrap_or(0.0)
    }

    /// The location, or [DimensionLocation::Top] for records that predate it.
    pub fn location_or_default(&self) -> DimensionLocation {
        self.location.unwrap_or_default()
    }
}

/// A CAD block placed inside a detail.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    /// Path of the CAD file the block is taken from.
    pub file: String,
    pub block: String,
    pub rotation: DVec3,
    pub translation: DVec3,
    pub scale: DVec3,
    /// Present from record version 6.
    pub path: Option<String>,
    pub components: Vec<String>,
    pub dimensions: Vec<DetailDimension>,
    pub dimension_lines: Vec<DetailDimension>,
}

impl Drawing {
    pub(crate) fn decode(cursor: &mut ByteCursor, version: i32) -> Result<Self> {
        Ok(Self {
            file: cursor.read_string()?,
            block: cursor.read_string()?,
            rotation: read_dvec3(cursor)?,
            translation: read_dvec3(cursor)?,
            scale: read_dvec3(cursor)?,
            path: (version > 5).then(|| cursor.read_string()).transpose()?,
            components: cursor.read_list(ByteCursor::read_string)?,
            dimensions: cursor.read_list(|c| DetailDimension::decode(c, version))?,
            dimension_lines: cursor.read_list(|c| DetailDimension::decode(c, version))?,
        })
    }

    pub fn path_or_empty(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }
}

/// A detail callout (CadDetail), whose body is a separately compressed block.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailInstruction {
    pub version: i32,
    /// Size of the compressed payload as stored in the document.
    pub payload_len: usize,
    pub name: String,
    pub from: DVec2,
    pub to: DVec2,
    /// Present from record version 5.
    pub extension: Option<f64>,
    /// Present from record version 2.
    pub sort: Option<i32>,
    /// Present from record version 6.
    pub path: Option<String>,
    pub drawings: Vec<Drawing>,
}

impl DetailInstruction {
    pub(crate) fn decode(cursor: &mut ByteCursor) -> Result<Self> {
        let version = cursor.read_i32()?;
        let payload_len = cursor.read_count()?;
        let payload = gunzip(cursor.read_bytes(payload_len)?)?;
        trace!(version, payload_len, inflated = payload.len(), "Decoding detail payload");

        let mut inner = ByteCursor::new(&payload);
        let name = inner.read_string()?;
        let from = DVec2::new(inner.read_f64()?, inner.read_f64()?);
        let to = DVec2::new(inner.read_f64()?, inner.read_f64()?);
        let extension = (version > 4).then(|| inner.read_f64()).transpose()?;
        let sort = (version > 1).then(|| inner.read_i32()).transpose()?;
        let path = (version > 5).then(|| inner.read_string()).transpose()?;
        let drawings = inner.read_list(|c| Drawing::decode(c, version))?;

        if inner.remaining() != 0 {
            trace!(remaining = inner.remaining(), "Ignoring trailing detail payload bytes");
        }

        Ok(Self {
            version,
            payload_len,
            name,
            from,
            to,
            extension,
            sort,
            path,
            drawings,
        })
    }
}

fn read_dvec3(cursor: &mut ByteCursor) -> Result<DVec3> {
    Ok(DVec3::new(
        cursor.read_f64()?,
        cursor.read_f64()?,
        cursor.read_f64()?,
    ))
}
