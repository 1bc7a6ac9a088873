//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O) and deterministic: the same snapshot and
//! viewport always produce the same framebuffer, so it can be unit-tested.

use crate::core::GameSnapshot;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GROUND_Y, SCORE_TIERS, TARGET_CENTER_X};

/// Play-area background color, shared by everything drawn inside the frame.
const FIELD_BG: Rgb = Rgb::new(16, 16, 24);

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

/// Projects the percent-space play field onto terminal cells.
pub struct GameView {
    /// Maximum interior field width in terminal columns.
    max_field_w: u16,
    /// Maximum interior field height in terminal rows.
    max_field_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide cells compensate for terminal glyph aspect ratio; 64x20 plus
        // the frame and HUD rows fits a standard 80x24 terminal.
        Self {
            max_field_w: 64,
            max_field_h: 20,
        }
    }
}

impl GameView {
    pub fn new(max_field_w: u16, max_field_h: u16) -> Self {
        Self {
            max_field_w,
            max_field_h,
        }
    }

    /// Render a snapshot into a fresh framebuffer.
    ///
    /// `best_score` is the leaderboard's top score, shown in the HUD.
    pub fn render(&self, snap: &GameSnapshot, best_score: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        // One HUD row above the frame, one help row below it.
        if viewport.width < 12 || viewport.height < 8 {
            return fb;
        }

        let inner_w = self.max_field_w.min(viewport.width - 2);
        let inner_h = self.max_field_h.min(viewport.height - 4);
        let frame_w = inner_w + 2;
        let frame_h = inner_h + 2;

        let start_x = (viewport.width - frame_w) / 2;
        let start_y = 1 + (viewport.height - 2 - frame_h) / 2;

        // Background for the play area.
        let bg = CellStyle::new(Rgb::new(80, 80, 90), FIELD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, inner_w, inner_h, ' ', bg);

        self.draw_hud(&mut fb, snap, best_score, start_x, start_y);
        self.draw_frame(&mut fb, start_x, start_y, frame_w, frame_h);
        self.draw_ground(&mut fb, start_x, start_y, inner_w, inner_h);
        self.draw_ball(&mut fb, snap, start_x, start_y, inner_w, inner_h);

        if snap.game_over {
            self.draw_game_over(&mut fb, snap, start_x, start_y, frame_w, frame_h);
        }

        fb
    }

    fn draw_hud(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        best_score: u32,
        start_x: u16,
        start_y: u16,
    ) {
        let title = CellStyle::new(Rgb::new(0, 255, 255), Rgb::new(0, 0, 0)).bold();
        let text = CellStyle::default();
        let dim = CellStyle::new(Rgb::new(120, 120, 130), Rgb::new(0, 0, 0));

        fb.put_str(start_x, start_y.saturating_sub(1), "DROPSHOT", title);
        let status = format!("SCORE {:>3}   BEST {:>3}", snap.score, best_score);
        fb.put_str(start_x + 12, start_y.saturating_sub(1), &status, text);

        let help = if snap.can_drop() {
            "SPACE drop   Q quit"
        } else if snap.game_over {
            "R new game   Q quit"
        } else {
            "Q quit"
        };
        fb.put_str(start_x, fb.height() - 1, help, dim);
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put_char(x, y, '┌', border);
        fb.put_char(x + w - 1, y, '┐', border);
        fb.put_char(x, y + h - 1, '└', border);
        fb.put_char(x + w - 1, y + h - 1, '┘', border);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', border);
            fb.put_char(x + dx, y + h - 1, '─', border);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', border);
            fb.put_char(x + w - 1, y + dy, '│', border);
        }
    }

    /// Ground line with the target rings banded by scoring tier.
    fn draw_ground(&self, fb: &mut FrameBuffer, x: u16, y: u16, inner_w: u16, inner_h: u16) {
        let ground_row = project(GROUND_Y, inner_h);
        let ground = CellStyle::new(Rgb::new(110, 110, 120), FIELD_BG);

        for col in 0..inner_w {
            let x_pct = unproject(col, inner_w);
            let distance = (x_pct - TARGET_CENTER_X).abs();
            let cell = match ring_for(distance) {
                Some(100) => CellStyle::new(Rgb::new(255, 230, 60), FIELD_BG)
                    .bold()
                    .cell('█'),
                Some(75) => CellStyle::new(Rgb::new(255, 140, 40), FIELD_BG).cell('▓'),
                Some(50) => CellStyle::new(Rgb::new(230, 70, 70), FIELD_BG).cell('▒'),
                Some(_) => CellStyle::new(Rgb::new(150, 50, 70), FIELD_BG).cell('░'),
                None => ground.cell('─'),
            };
            fb.set(x + 1 + col, y + 1 + ground_row, cell);
        }
    }

    fn draw_ball(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        x: u16,
        y: u16,
        inner_w: u16,
        inner_h: u16,
    ) {
        let ball = CellStyle::new(Rgb::new(0, 255, 255), FIELD_BG).bold();
        let col = project(snap.ball_x, inner_w);
        // Once landed the ball can be past the ground threshold; rest it on
        // the ground line instead of drawing below it.
        let row = project(snap.ball_y.min(GROUND_Y), inner_h);
        fb.put_char(x + 1 + col, y + 1 + row, '●', ball);
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        x: u16,
        y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let style = CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(230, 230, 230)).bold();
        let line1 = " GAME OVER ".to_string();
        let line2 = if snap.score > 0 {
            format!(" SCORE {} ", snap.score)
        } else {
            " MISS ".to_string()
        };

        let cy = y + frame_h / 2;
        for (i, line) in [line1, line2].iter().enumerate() {
            let len = line.chars().count() as u16;
            let cx = x + frame_w.saturating_sub(len) / 2;
            fb.put_str(cx, cy + i as u16, line, style);
        }
    }
}

/// Map a percent coordinate onto `[0, cells-1]`.
fn project(pct: f32, cells: u16) -> u16 {
    if cells <= 1 {
        return 0;
    }
    let clamped = pct.clamp(0.0, 100.0);
    (clamped / 100.0 * f32::from(cells - 1)).round() as u16
}

/// Percent coordinate sampled at cell `col`; inverse of [`project`].
fn unproject(col: u16, cells: u16) -> f32 {
    if cells <= 1 {
        return 0.0;
    }
    f32::from(col) / f32::from(cells - 1) * 100.0
}

/// Which scoring tier a ground cell at `distance` belongs to, if any.
fn ring_for(distance: f32) -> Option<u32> {
    for &(max_distance, points) in SCORE_TIERS.iter() {
        if distance <= max_distance {
            return Some(points);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_endpoints() {
        assert_eq!(project(0.0, 64), 0);
        assert_eq!(project(100.0, 64), 63);
        assert_eq!(project(50.0, 65), 32);
    }

    #[test]
    fn test_project_clamps_out_of_range() {
        assert_eq!(project(-5.0, 64), 0);
        assert_eq!(project(130.0, 64), 63);
    }

    #[test]
    fn test_ring_tiers() {
        assert_eq!(ring_for(0.0), Some(100));
        assert_eq!(ring_for(1.5), Some(75));
        assert_eq!(ring_for(4.0), Some(50));
        assert_eq!(ring_for(8.0), Some(25));
        assert_eq!(ring_for(8.1), None);
    }
}
