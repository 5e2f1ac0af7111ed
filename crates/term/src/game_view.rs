//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::painter::CellPainter;
use tui_snake_core::GameSnapshot;
use tui_snake_types::{Phase, Point};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SNAKE_FG: Rgb = Rgb::new(173, 255, 47);
const BAIT_FG: Rgb = Rgb::new(128, 128, 128);

// Banner gradient stops, left to right.
const BANNER_LEFT: Rgb = Rgb::new(255, 0, 255);
const BANNER_MID: Rgb = Rgb::new(0, 0, 255);
const BANNER_RIGHT: Rgb = Rgb::new(255, 0, 0);

/// A lightweight terminal renderer for the Snake game.
pub struct GameView {
    painter: CellPainter,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            painter: CellPainter::default(),
        }
    }
}

impl GameView {
    pub fn new(painter: CellPainter) -> Self {
        Self { painter }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let grid_px_w = (snap.grid.horizontal_cells as u16) * self.painter.cell_w();
        let grid_px_h = (snap.grid.vertical_cells as u16) * self.painter.cell_h();
        let frame_w = grid_px_w + 2;
        let frame_h = grid_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        let origin_x = start_x + 1;
        let origin_y = start_y + 1;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Empty grid: every cell erased to the dotted background.
        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        for y in 0..snap.grid.vertical_cells {
            for x in 0..snap.grid.horizontal_cells {
                self.painter
                    .erase(fb, origin_x, origin_y, Point::new(x, y), '·', empty);
            }
        }

        // Bait, then the body over it (head emphasized).
        let bait = CellStyle::new(BAIT_FG, PLAY_BG);
        self.painter
            .draw(fb, origin_x, origin_y, snap.bait, '█', bait);

        let segment = CellStyle::new(SNAKE_FG, PLAY_BG);
        let head = segment.bold();
        for (i, &cell) in snap.body.iter().enumerate() {
            let style = if i == 0 { head } else { segment };
            self.painter.draw(fb, origin_x, origin_y, cell, '█', style);
        }

        // Stats / controls panel.
        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        // Overlays.
        match snap.phase {
            Phase::Paused => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
            }
            Phase::GameOver => {
                self.draw_banner(fb, start_x, start_y, frame_w, frame_h, "GAME OVER!");
            }
            Phase::Idle | Phase::Running => {}
        }
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 14 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let disabled = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.stats.score), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.stats.length), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{:.1}", snap.stats.speed), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, snap.phase.as_str(), disabled);
        y = y.saturating_add(2);

        let pause_hint = if snap.phase == Phase::Paused {
            "[space] resume"
        } else {
            "[space] pause"
        };
        let controls = [
            ("[enter] start", snap.buttons.start),
            (pause_hint, snap.buttons.pause),
            ("[n] new game", snap.buttons.new_game),
            ("[q] quit", true),
        ];
        for (hint, enabled) in controls {
            if y >= viewport.height {
                break;
            }
            let style = if enabled { value } else { disabled };
            fb.put_str(panel_x, y, hint, style);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }

    /// Game-over banner with a horizontal gradient text fill.
    fn draw_banner(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);

        let last = text_w.saturating_sub(1).max(1);
        for (i, ch) in text.chars().enumerate() {
            let t = i as f64 / f64::from(last);
            let style = CellStyle::new(banner_gradient(t), Rgb::new(0, 0, 0)).bold();
            fb.put_char(x + i as u16, mid_y, ch, style);
        }
    }
}

/// Gradient position `t` in [0, 1] across the banner text.
fn banner_gradient(t: f64) -> Rgb {
    let (from, to, local) = if t < 0.5 {
        (BANNER_LEFT, BANNER_MID, t * 2.0)
    } else {
        (BANNER_MID, BANNER_RIGHT, (t - 0.5) * 2.0)
    };
    Rgb::new(
        lerp(from.r, to.r, local),
        lerp(from.g, to.g, local),
        lerp(from.b, to.b, local),
    )
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_gradient_endpoints() {
        assert_eq!(banner_gradient(0.0), BANNER_LEFT);
        assert_eq!(banner_gradient(0.5), BANNER_MID);
        assert_eq!(banner_gradient(1.0), BANNER_RIGHT);
    }

    #[test]
    fn test_banner_gradient_is_interpolated() {
        let quarter = banner_gradient(0.25);
        assert!(quarter.r > 0 && quarter.r < 255);
        assert_eq!(quarter.b, 255);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0, 255, 0.0), 0);
        assert_eq!(lerp(0, 255, 1.0), 255);
        assert_eq!(lerp(0, 255, 0.5), 128);
    }

    #[test]
    fn test_render_survives_tiny_viewport() {
        let snap = GameSnapshot::default();
        let view = GameView::default();
        // Smaller than the board frame: everything clips, nothing panics.
        let fb = view.render(&snap, Viewport::new(10, 5));
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 5);
    }
}
