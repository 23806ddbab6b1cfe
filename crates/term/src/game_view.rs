//! GameView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-tested.

use crate::core::SessionSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

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

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_WIDTH: u16 = 10;

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell compensate for the usual glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into a reusable framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame_w = snap.width.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = snap.height.saturating_add(2);
        let total_w = frame_w.saturating_add(2 + PANEL_WIDTH);
        let origin_x = viewport.width.saturating_sub(total_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for y in 0..snap.height as i32 {
            for x in 0..snap.width as i32 {
                let (ch, style) = if snap.is_active_cell(x, y) {
                    ('█', piece_style(snap.active_kind))
                } else if let Some(kind) = snap.cell(x, y) {
                    ('█', piece_style(kind))
                } else if snap.is_ghost_cell(x, y) {
                    (
                        '░',
                        CellStyle {
                            dim: true,
                            ..CellStyle::new(Rgb::new(140, 140, 140), PLAYFIELD_BG)
                        },
                    )
                } else {
                    ('·', CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG))
                };
                let px = (x as u16)
                    .saturating_mul(self.cell_w)
                    .saturating_add(origin_x + 1);
                let py = (y as u16).saturating_add(origin_y + 1);
                fb.fill_rect(px, py, self.cell_w, 1, ch, style);
            }
        }

        let panel_x = origin_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, snap, panel_x, origin_y);

        if snap.game_over {
            let text = "GAME OVER";
            let x = origin_x + frame_w.saturating_sub(text.len() as u16) / 2;
            let style = CellStyle {
                bold: true,
                ..CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(160, 0, 0))
            };
            fb.put_str(x, origin_y + frame_h / 2, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::default();
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        fb.set(x, y, style.cell('┌'));
        fb.set(right, y, style.cell('┐'));
        fb.set(x, bottom, style.cell('└'));
        fb.set(right, bottom, style.cell('┘'));
        fb.fill_rect(x + 1, y, w - 2, 1, '─', style);
        fb.fill_rect(x + 1, bottom, w - 2, 1, '─', style);
        fb.fill_rect(x, y + 1, 1, h - 2, '│', style);
        fb.fill_rect(right, y + 1, 1, h - 2, '│', style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, x: u16, y: u16) {
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();

        let rows = [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines_cleared),
        ];
        for (i, (name, n)) in rows.iter().enumerate() {
            let row_y = y + i as u16 * 3;
            fb.put_str(x, row_y, name, label);
            fb.put_str(x, row_y + 1, &n.to_string(), value);
        }
    }
}

fn piece_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle {
        bold: true,
        ..CellStyle::new(fg, PLAYFIELD_BG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, GameConfig, SequenceSource, Session};

    fn snapshot() -> SessionSnapshot {
        Session::new(GameConfig::default(), SequenceSource::repeat(PieceKind::O), 0).snapshot()
    }

    fn find(fb: &FrameBuffer, needle: &str) -> Option<(u16, usize)> {
        (0..fb.height()).find_map(|y| fb.row_text(y).find(needle).map(|x| (y, x)))
    }

    #[test]
    fn test_draws_frame_and_panel() {
        let fb = GameView::default().render(&snapshot(), Viewport::new(80, 24));
        assert!(find(&fb, "┌").is_some());
        assert!(find(&fb, "SCORE").is_some());
        assert!(find(&fb, "LINES").is_some());
        assert!(find(&fb, "GAME OVER").is_none());
    }

    #[test]
    fn test_draws_active_and_ghost() {
        let fb = GameView::default().render(&snapshot(), Viewport::new(80, 24));
        let text: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        // O piece is 2x2 cells at 2 columns per cell.
        assert_eq!(text.chars().filter(|&c| c == '█').count(), 8);
        assert_eq!(text.chars().filter(|&c| c == '░').count(), 8);
    }

    #[test]
    fn test_game_over_banner() {
        let mut snap = snapshot();
        snap.game_over = true;
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        assert!(find(&fb, "GAME OVER").is_some());
    }

    #[test]
    fn test_board_wider_than_terminal_is_clipped() {
        let board = Board::new(40_000, 20);
        let snap = Session::with_board(
            GameConfig::default(),
            board,
            SequenceSource::repeat(PieceKind::O),
            0,
        )
        .snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        assert_eq!((fb.width(), fb.height()), (80, 24));
        assert!(find(&fb, "┌").is_some());
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let fb = GameView::default().render(&snapshot(), Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
