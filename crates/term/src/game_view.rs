//! BoardView: maps a `GameState` into a terminal framebuffer.
//!
//! Pure (no I/O), driven only by the state's read-only queries.

use crate::core::{GameState, PieceSource};
use crate::fb::{FrameBuffer, Glyph, DEFAULT_BG, DEFAULT_FG};
use crate::types::Rgb;

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const GRID_FG: Rgb = Rgb::new(70, 70, 80);
const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const GHOST_FG: Rgb = Rgb::new(140, 140, 140);
const PANEL_GAP: u16 = 2;
const MAX_CELL_W: u16 = 4;

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

/// Screen placement of the board well inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    left: u16,
    top: u16,
    frame_w: u16,
    frame_h: u16,
    rows: u16,
}

/// Draws the board well, locked cells, ghost and active piece.
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    /// Terminal columns per board cell.
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2 columns per cell compensates for tall terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl BoardView {
    /// `cell_w` is clamped to `1..=4` columns.
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_W),
        }
    }

    pub fn render<S: PieceSource>(&self, game: &GameState<S>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board = game.board();
        let cols = board.width() as u16;
        let rows = board.height() as u16;
        let frame_w = cols * self.cell_w + 2;
        let frame_h = rows + 2;
        let layout = Layout {
            left: viewport.width.saturating_sub(frame_w) / 2,
            top: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
            rows,
        };

        self.draw_border(&mut fb, layout);

        let empty = Glyph::new('·', GRID_FG, WELL_BG);
        for y in 0..rows {
            for x in 0..cols {
                self.fill_cell(&mut fb, layout, x as i8, y as i8, empty);
            }
        }

        for cell in game.occupied_cells() {
            let glyph = Glyph::new('█', cell.color, WELL_BG);
            self.fill_cell(&mut fb, layout, cell.x, cell.y, glyph);
        }

        if let Some(ghost) = game.ghost_cells() {
            for (x, y) in ghost {
                self.fill_cell(&mut fb, layout, x, y, Glyph::new('░', GHOST_FG, WELL_BG));
            }
        }

        // Drawn after the ghost so overlapping cells show the real piece.
        if let Some(active) = game.active_cells() {
            for cell in active {
                let glyph = Glyph::new('█', cell.color, WELL_BG);
                self.fill_cell(&mut fb, layout, cell.x, cell.y, glyph);
            }
        }

        self.draw_panel(&mut fb, layout, game.lines(), game.pieces());

        if game.is_game_over() {
            let text = "GAME OVER";
            let x = layout.left + layout.frame_w.saturating_sub(text.len() as u16) / 2;
            let y = layout.top + layout.frame_h / 2;
            fb.put_str(x, y, text, Rgb::new(255, 80, 80), DEFAULT_BG);
        }

        fb
    }

    /// Paint one board cell; rows outside the visible board are skipped.
    fn fill_cell(&self, fb: &mut FrameBuffer, layout: Layout, x: i8, y: i8, glyph: Glyph) {
        if x < 0 || y < 0 || y as u16 >= layout.rows {
            return;
        }
        // Board row 0 is the bottom line of the well.
        let screen_y = layout.top + 1 + (layout.rows - 1 - y as u16);
        let screen_x = layout.left + 1 + x as u16 * self.cell_w;
        for dx in 0..self.cell_w {
            fb.put(screen_x + dx, screen_y, glyph);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: Layout) {
        let Layout {
            left,
            top,
            frame_w,
            frame_h,
            ..
        } = layout;
        let right = left + frame_w - 1;
        let bottom = top + frame_h - 1;
        let edge = |ch| Glyph::new(ch, BORDER_FG, DEFAULT_BG);

        for x in left + 1..right {
            fb.put(x, top, edge('─'));
            fb.put(x, bottom, edge('─'));
        }
        for y in top + 1..bottom {
            fb.put(left, y, edge('│'));
            fb.put(right, y, edge('│'));
        }
        fb.put(left, top, edge('┌'));
        fb.put(right, top, edge('┐'));
        fb.put(left, bottom, edge('└'));
        fb.put(right, bottom, edge('┘'));
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, layout: Layout, lines: u32, pieces: u32) {
        let x = layout.left + layout.frame_w + PANEL_GAP;
        if x >= fb.width() {
            return;
        }
        let y = layout.top + 1;
        fb.put_str(x, y, &format!("LINES  {}", lines), DEFAULT_FG, DEFAULT_BG);
        fb.put_str(x, y + 1, &format!("PIECES {}", pieces), DEFAULT_FG, DEFAULT_BG);
        fb.put_str(x, y + 3, "←→ move  ↓ drop", GRID_FG, DEFAULT_BG);
        fb.put_str(x, y + 4, "space rotate", GRID_FG, DEFAULT_BG);
        fb.put_str(x, y + 5, "enter hard drop", GRID_FG, DEFAULT_BG);
        fb.put_str(x, y + 6, "q quit", GRID_FG, DEFAULT_BG);
    }
}
