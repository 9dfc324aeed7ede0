// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/tags.rs - Single-byte enumeration tags used by LIF drawing images.
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
 * # `tags` Module
 *
 * Closed enumerations stored as a single tag byte. Each enumeration maps
 * its tag bytes to variants with an exhaustive match; any other byte is
 * rejected by [crate::cursor::ByteCursor::read_tag].
 */

/// An enumeration encoded on the wire as a single tag byte.
pub trait Tagged: Sized + Copy {
    /// Name used when reporting an invalid tag.
    const NAME: &'static str;

    /// Resolves a tag byte, or `None` if no variant carries it.
    fn from_tag(tag: u8) -> Option<Self>;

    /// The tag byte of this variant, or `None` for a variant that is never
    /// read from a tag byte.
    fn tag(self) -> Option<u8>;
}

macro_rules! tagged_enum {
    (@tag $tag:literal) => {
        Some($tag)
    };
    (@tag) => {
        None
    };
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident $(= $tag:literal)?,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl Tagged for $name {
            const NAME: &'static str = stringify!($name);

            fn from_tag(tag: u8) -> Option<Self> {
                match tag {
                    $($($tag => Some(Self::$variant),)?)+
                    _ => None,
                }
            }

            fn tag(self) -> Option<u8> {
                match self {
                    $(Self::$variant => tagged_enum!(@tag $($tag)?),)+
                }
            }
        }
    };
}

tagged_enum! {
    /// The kind of a top-level drawing instruction.
    pub enum InstructionKind {
        Clear = 0,
        DrawPath = 1,
        SetClip = 2,
        ResetClip = 3,
        FillPath = 4,
        DrawLites = 5,
        DrawCasing = 6,
        DrawOperation = 7,
        DrawMulls = 8,
        DrawHanding = 9,
        DrawText = 10,
        CadDetail = 11,
        CadPath = 12,
        CadDimension = 13,
        CadGraphicsPath = 14,
        CadOperation = 15,
        CadPitchTriangle = 16,
        CadElevationComponent = 17,
        LocationLabel = 18,
        HorizontalMullLabel = 19,
        VerticalMullLabel = 20,
        /// Marks the end of the instruction stream. It has no tag byte.
        EndOfFile,
    }
}

tagged_enum! {
    /// The kind of a path item.
    pub enum PathItemKind {
        Point = 0,
        Arc = 1,
        /// Declared by the format, but never decodable.
        Bezier = 2,
    }
}

tagged_enum! {
    /// The direction a dimension is measured in.
    pub enum DimensionOrientation {
        Horizontal = 0,
        Vertical = 1,
        Angled = 2,
    }
}

tagged_enum! {
    /// The assembly level a dimension is attached to.
    pub enum DimensionLevel {
        Springline = 0,
        DaylightOpening = 1,
        Sash = 2,
        Unit = 3,
        Mull = 4,
        Assembly = 5,
        Assembly2 = 6,
    }
}

tagged_enum! {
    /// Where a dimension is placed relative to the drawing.
    #[derive(Default)]
    pub enum DimensionLocation {
        #[default]
        Top = 0,
        Right = 1,
        Left = 2,
        Bottom = 3,
        UpperLeft = 4,
        UpperRight = 5,
    }
}

tagged_enum! {
    /// What a dimension measures.
    pub enum DimensionMeasure {
        MasonryOpening = 0,
        RoughOpening = 1,
        InsideOpening = 2,
        FrameSize = 3,
        SashOpening = 4,
        RoughOpeningSpringLine = 5,
        RoughOpeningRadius = 6,
        Mull = 7,
        InsideOpeningSpringLine = 8,
        InsideOpeningRadius = 9,
        OutsideCasing = 10,
        RoughOpeningPolyExtra = 11,
        InsideOpeningPolyExtra = 12,
        BasicFrame = 13,
        TotalRoughOpening = 14,
        DaylightOpening = 15,
    }
}
