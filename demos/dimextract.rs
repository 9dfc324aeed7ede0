// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  dimextract.rs - Dimension extraction demo for LIF drawing images.
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

use std::path::Path;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use lifimage::parser::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The file to read.
    file: String,

    /// Where to write the CSV file. Defaults to the input path with a `.csv`
    /// extension.
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let raw = match std::fs::read(&args.file) {
        Ok(raw) => raw,
        Err(e) => {
            error!(file = %args.file, error = %e, "Failed to read file");
            return;
        }
    };

    let document = match lifimage::decode_document(&raw) {
        Ok(doc) => doc,
        Err(e) => {
            error!(file = %args.file, error = %e, "Failed to decode file");
            return;
        }
    };

    let output = args.output.clone().unwrap_or_else(|| {
        Path::new(&args.file)
            .with_extension("csv")
            .to_string_lossy()
            .into_owned()
    });

    let mut writer = match csv::Writer::from_path(&output) {
        Ok(w) => w,
        Err(e) => {
            error!(file = %output, error = %e, "Failed to create output file");
            return;
        }
    };

    match write_dimensions(&mut writer, &document) {
        Ok(rows) => info!(file = %output, rows, "Wrote dimensions"),
        Err(e) => error!(file = %output, error = %e, "Failed to write dimensions"),
    }
}

fn write_dimensions<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    document: &Document,
) -> Result<usize, csv::Error> {
    writer.write_record([
        "source",
        "block",
        "label",
        "dimension",
        "label_offset",
        "orientation",
        "location",
    ])?;

    let mut rows = 0;
    for instruction in &document.instructions {
        match instruction {
            Instruction::CadDimension(dim) => {
                writer.write_record([
                    "elevation".to_string(),
                    String::new(),
                    dim.label.clone(),
                    dim.dimension.to_string(),
                    dim.label_offset.to_string(),
                    format!("{:?}", dim.orientation),
                    format!("{:?}", dim.location),
                ])?;
                rows += 1;
            }
            Instruction::CadDetail(detail) => {
                for drawing in &detail.drawings {
                    for dim in drawing.dimensions.iter().chain(&drawing.dimension_lines) {
                        writer.write_record([
                            detail.name.clone(),
                            drawing.block.clone(),
                            dim.label.clone(),
                            dim.dimension.to_string(),
                            dim.label_offset.to_string(),
                            format!("{:?}", dim.orientation),
                            format!("{:?}", dim.location_or_default()),
                        ])?;
                        rows += 1;
                    }
                }
            }
            _ => (),
        }
    }

    writer.flush()?;
    Ok(rows)
}
