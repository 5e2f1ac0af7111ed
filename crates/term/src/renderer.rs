//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Full redraws happen on first present, terminal resize, and explicit
//! invalidation; otherwise only runs of changed cells are rewritten.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next present to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Present a frame, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` and pass it in every frame.
    /// The renderer diffs against the previous frame and then swaps buffers
    /// so the caller can reuse the old one without cloning.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        if self.last.is_none() {
            self.last = Some(FrameBuffer::new(fb.width(), fb.height()));
            self.full_redraw(fb)?;
        } else {
            // Take previous out to avoid borrow conflicts (no cloning).
            let prev = self.last.take().unwrap();
            if prev.width() != fb.width() || prev.height() != fb.height() {
                self.full_redraw(fb)?;
            } else {
                self.diff_redraw(fb, &prev)?;
            }
            self.last = Some(prev);
        }

        // Swap current into the stored buffer so the next frame can diff
        // without cloning.
        let Some(prev) = self.last.as_mut() else {
            return Ok(());
        };
        prev.resize(fb.width(), fb.height());
        std::mem::swap(prev, fb);
        Ok(())
    }

    fn full_redraw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut current_style: Option<CellStyle> = None;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                if current_style != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    current_style = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
            if y + 1 < fb.height() {
                self.stdout.queue(Print("\r\n"))?;
            }
        }

        self.finish_frame()
    }

    fn diff_redraw(&mut self, next: &FrameBuffer, prev: &FrameBuffer) -> Result<()> {
        let mut current_style: Option<CellStyle> = None;

        for y in 0..next.height() {
            let mut x = 0;
            while let Some((start, len)) = next_changed_run(prev, next, y, x) {
                self.stdout.queue(cursor::MoveTo(start, y))?;
                for dx in 0..len {
                    let cell = next.get(start + dx, y).unwrap_or_default();
                    if current_style != Some(cell.style) {
                        self.apply_style(cell.style)?;
                        current_style = Some(cell.style);
                    }
                    self.stdout.queue(Print(cell.ch))?;
                }
                x = start + len;
            }
        }

        self.finish_frame()
    }

    fn finish_frame(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Next run of differing cells in row `y`, starting at or after `from_x`.
///
/// Returns `(start, len)` or None once the rest of the row matches.
fn next_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    y: u16,
    from_x: u16,
) -> Option<(u16, u16)> {
    let w = next.width();
    let mut x = from_x;
    while x < w && prev.get(x, y) == next.get(x, y) {
        x += 1;
    }
    if x >= w {
        return None;
    }
    let start = x;
    while x < w && prev.get(x, y) != next.get(x, y) {
        x += 1;
    }
    Some((start, x - start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn test_changed_run_coalesces_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);

        // Change cells [1..=3] into X.
        for x in 1..=3 {
            b.set(x, 0, Cell { ch: 'X', style });
        }

        assert_eq!(next_changed_run(&a, &b, 0, 0), Some((1, 3)));
        assert_eq!(next_changed_run(&a, &b, 0, 4), None);
    }

    #[test]
    fn test_changed_run_splits_on_matching_gap() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 1);
        let mut b = FrameBuffer::new(6, 1);

        b.set(0, 0, Cell { ch: 'X', style });
        b.set(4, 0, Cell { ch: 'Y', style });

        assert_eq!(next_changed_run(&a, &b, 0, 0), Some((0, 1)));
        assert_eq!(next_changed_run(&a, &b, 0, 1), Some((4, 1)));
        assert_eq!(next_changed_run(&a, &b, 0, 5), None);
    }

    #[test]
    fn test_identical_frames_have_no_runs() {
        let a = FrameBuffer::new(4, 2);
        let b = FrameBuffer::new(4, 2);
        for y in 0..2 {
            assert_eq!(next_changed_run(&a, &b, y, 0), None);
        }
    }

    #[test]
    fn test_rgb_conversion() {
        let rgb = Rgb::new(10, 20, 30);
        assert_eq!(
            rgb_to_color(rgb),
            Color::Rgb {
                r: 10,
                g: 20,
                b: 30
            }
        );
    }
}
