//! Braille-based plotting canvas for the radar presentation.
//!
//! Each terminal character cell represents a 2x4 grid of braille dots,
//! providing 2x horizontal and 4x vertical sub-character resolution.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

/// Braille dot bit positions indexed by [y % 4][x % 2].
///
/// ```text
/// Dot 1 (0x01) | Dot 4 (0x08)
/// Dot 2 (0x02) | Dot 5 (0x10)
/// Dot 3 (0x04) | Dot 6 (0x20)
/// Dot 7 (0x40) | Dot 8 (0x80)
/// ```
pub(super) const BRAILLE_BIT_MAP: [[u8; 2]; 4] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// Coordinates are in "dot space": x ranges 0..width*2, y ranges 0..height*4.
pub(super) struct BrailleCanvas {
    pub(super) cells: Vec<Vec<u8>>,
    pub(super) width: usize,
    pub(super) height: usize,
}

impl BrailleCanvas {
    pub(super) fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![0u8; width]; height],
            width,
            height,
        }
    }

    pub(super) fn dot_width(&self) -> usize {
        self.width * 2
    }

    pub(super) fn dot_height(&self) -> usize {
        self.height * 4
    }

    /// Set a dot; out-of-bounds coordinates are ignored.
    pub(super) fn set(&mut self, x: i64, y: i64) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let col = x / 2;
        let row = y / 4;
        if col >= self.width || row >= self.height {
            return;
        }
        self.cells[row][col] |= BRAILLE_BIT_MAP[y % 4][x % 2];
    }

    /// Bresenham line between two dot-space points, both ends included
    pub(super) fn line(&mut self, from: (i64, i64), to: (i64, i64)) {
        let (mut x0, mut y0) = from;
        let (x1, y1) = to;
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set(x0, y0);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Closed polygon through `points`
    pub(super) fn polygon(&mut self, points: &[(i64, i64)]) {
        for (i, &from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            self.line(from, to);
        }
    }

    /// Render every non-empty cell with `style`
    pub(super) fn render_to_buffer(&self, buf: &mut Buffer, area: Rect, style: Style) {
        for row in 0..self.height {
            let y = area.y + row as u16;
            if y >= area.bottom() {
                break;
            }
            for col in 0..self.width {
                let x = area.x + col as u16;
                if x >= area.right() {
                    break;
                }
                let bits = self.cells[row][col];
                if bits != 0 {
                    let ch = char::from_u32(0x2800 + bits as u32).unwrap_or('\u{2800}');
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_char(ch).set_style(style);
                    }
                }
            }
        }
    }
}
