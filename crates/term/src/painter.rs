//! CellPainter: draws and erases single grid cells in a framebuffer.
//!
//! This is the leaf of the rendering stack. A grid cell maps to a block of
//! `cell_w` x `cell_h` terminal characters at
//! `origin + coordinate * cell_size`; occupied cells are drawn with a
//! one-character inset gutter so adjacent cells keep a visible seam, the
//! terminal analogue of a grid line between canvas rectangles.

use crate::fb::{CellStyle, FrameBuffer};
use tui_snake_types::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPainter {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for CellPainter {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl CellPainter {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    pub fn cell_h(&self) -> u16 {
        self.cell_h
    }

    /// Top-left terminal position of a grid cell.
    fn cell_px(&self, origin_x: u16, origin_y: u16, p: Point) -> (u16, u16) {
        (
            origin_x.saturating_add((p.x as u16).saturating_mul(self.cell_w)),
            origin_y.saturating_add((p.y as u16).saturating_mul(self.cell_h)),
        )
    }

    /// Draw an occupied cell, leaving the seam gutter untouched.
    pub fn draw(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        p: Point,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_px(origin_x, origin_y, p);
        let w = if self.cell_w > 1 {
            self.cell_w - 1
        } else {
            self.cell_w
        };
        let h = if self.cell_h > 1 {
            self.cell_h - 1
        } else {
            self.cell_h
        };
        fb.fill_rect(px, py, w, h, ch, style);
    }

    /// Erase a cell: the same fill over the full cell block, in the caller's
    /// empty-cell style.
    pub fn erase(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        p: Point,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_px(origin_x, origin_y, p);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}
