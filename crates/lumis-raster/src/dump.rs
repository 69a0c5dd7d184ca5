// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Text writers for pipeline stage dumps and the depth grid.
//!
//! The formats are fixed: downstream tooling diffs these dumps against
//! reference outputs, so the digit counts and separators are part of the
//! contract.

use std::io::{self, Write};

use crate::stage::Triangle;
use crate::zbuffer::Framebuffer;

/// Writes a stage's triangle list as blocks of three `x y z` lines with
/// seven fractional digits, one blank line after each triangle.
pub fn write_stage_dump<W: Write>(writer: &mut W, triangles: &[Triangle]) -> io::Result<()> {
    for triangle in triangles {
        for v in &triangle.vertices {
            writeln!(writer, "{:.7} {:.7} {:.7}", v.x, v.y, v.z)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes the depth grid, row by row: every depth that was updated from
/// `z_rear` is printed with six fractional digits followed by a tab, and
/// each row ends with a newline whether or not it contains any values.
pub fn write_depth_dump<W: Write>(writer: &mut W, framebuffer: &Framebuffer) -> io::Result<()> {
    let height = framebuffer.pixels().height();
    for row in 0..height {
        for &depth in framebuffer.depth_row(row) {
            if depth < framebuffer.z_rear() {
                write!(writer, "{depth:.6}\t")?;
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

// --- Tests ---
