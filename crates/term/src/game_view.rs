//! GameView: draws a `GameState` into a framebuffer.
//!
//! Pure (no I/O), so every frame can be inspected in tests. The screen is
//! laid out as in the classic layout: hold frame on the left, the well in the
//! middle, the lookahead frames stacked on the right.

use crate::core::{bounding_height, bounding_width, preview_cell, GameState};
use crate::fb::{Cell, FrameBuffer, Rgb, Style};
use crate::types::{PieceKind, BOARD_COLS, BOARD_ROWS, NEXT_QUEUE_LEN};

/// Preview frame interior, in blocks
pub const PREVIEW_COLS: u16 = 6;
pub const PREVIEW_ROWS: u16 = 4;

/// Widest block, in terminal columns; keeps the layout within u16 math
pub const MAX_CELL_W: u16 = 8;

const BLOCK: char = '█';
const EMPTY: char = '·';

const BACKDROP: Rgb = Rgb::new(0, 0, 0);
const WELL_BG: Rgb = Rgb::new(24, 24, 30);
const FOREGROUND: Rgb = Rgb::new(230, 230, 230);
const SETTLED: Rgb = Rgb::new(170, 170, 175);
const GRID: Rgb = Rgb::new(64, 64, 72);

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

/// Screen positions of the three frames (outer top-left corners)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub hold: (u16, u16),
    pub board: (u16, u16),
    pub next: (u16, u16),
    pub width: u16,
    pub height: u16,
}

/// Renders the game with each block `cell_w` columns wide and one row tall.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per block roughly squares a terminal glyph.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// `cell_w` is clamped to `1..=MAX_CELL_W`.
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_W),
        }
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    fn board_outer(&self) -> (u16, u16) {
        (BOARD_COLS as u16 * self.cell_w + 2, BOARD_ROWS as u16 + 2)
    }

    fn preview_outer(&self, frames: u16) -> (u16, u16) {
        (PREVIEW_COLS * self.cell_w + 2, PREVIEW_ROWS * frames + 2)
    }

    /// Smallest viewport that fits the whole layout
    pub fn required_size(&self) -> (u16, u16) {
        let (board_w, board_h) = self.board_outer();
        let (side_w, _) = self.preview_outer(1);
        (side_w * 2 + board_w + self.cell_w * 2, board_h)
    }

    /// Center the layout in `viewport`
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let (width, height) = self.required_size();
        let (board_w, _) = self.board_outer();
        let (side_w, _) = self.preview_outer(1);

        let x = viewport.width.saturating_sub(width) / 2;
        let y = viewport.height.saturating_sub(height) / 2;
        let board_x = x + side_w + self.cell_w;

        // Side frames start one row below the well's top edge; their labels
        // sit on that edge row.
        Layout {
            hold: (x, y + 1),
            board: (board_x, y),
            next: (board_x + board_w + self.cell_w, y + 1),
            width,
            height,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, game: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', Style::new(FOREGROUND, BACKDROP)));

        let (need_w, need_h) = self.required_size();
        if viewport.width < need_w || viewport.height < need_h {
            let msg = format!("terminal too small: need {need_w}x{need_h}");
            fb.put_str(0, 0, &msg, Style::new(FOREGROUND, BACKDROP).bold());
            return;
        }

        let layout = self.layout(viewport);
        self.draw_well(fb, game, layout.board);

        let label = Style::new(FOREGROUND, BACKDROP).bold();
        let frame = Style::new(FOREGROUND, BACKDROP);

        let (hx, hy) = layout.hold;
        let (hold_w, hold_h) = self.preview_outer(1);
        fb.put_str(hx + hold_w - 4, hy - 1, "HOLD", label);
        fb.draw_box(hx, hy, hold_w, hold_h, frame);
        if let Some(kind) = game.hold_slot().kind() {
            self.draw_preview(fb, hx + 1, hy + 1, kind);
        }

        let (nx, ny) = layout.next;
        let (next_w, next_h) = self.preview_outer(NEXT_QUEUE_LEN as u16);
        fb.put_str(nx, ny - 1, "NEXT", label);
        fb.draw_box(nx, ny, next_w, next_h, frame);
        for (i, kind) in game.queue().iter().enumerate() {
            self.draw_preview(fb, nx + 1, ny + 1 + i as u16 * PREVIEW_ROWS, kind);
        }

        if game.paused() {
            let (bx, by) = layout.board;
            let (board_w, board_h) = self.board_outer();
            let text = " PAUSED ";
            let x = bx + (board_w - text.len() as u16) / 2;
            fb.put_str(x, by + board_h / 2, text, Style::new(BACKDROP, FOREGROUND).bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_well(&self, fb: &mut FrameBuffer, game: &GameState, (bx, by): (u16, u16)) {
        let (board_w, board_h) = self.board_outer();
        fb.draw_box(bx, by, board_w, board_h, Style::new(FOREGROUND, BACKDROP));

        let empty = Cell::new(EMPTY, Style::new(GRID, WELL_BG));
        let settled = Cell::new(BLOCK, Style::new(SETTLED, WELL_BG));
        for (row, col, occupied) in game.board().iter_cells() {
            let cell = if occupied { settled } else { empty };
            self.draw_block(fb, bx + 1, by + 1, col as u16, row as u16, cell);
        }

        let active = game.active();
        let falling = Cell::new(BLOCK, Style::new(piece_color(active.kind), WELL_BG).bold());
        for (x, y) in active.board_cells() {
            if let (Ok(col), Ok(row)) = (u16::try_from(x), u16::try_from(y)) {
                if (col as usize) < BOARD_COLS && (row as usize) < BOARD_ROWS {
                    self.draw_block(fb, bx + 1, by + 1, col, row, falling);
                }
            }
        }
    }

    /// Draw `kind` centred in the preview frame whose interior starts at (`x`, `y`)
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let off_x = (PREVIEW_COLS - bounding_width(kind)) * self.cell_w / 2;
        let off_y = (PREVIEW_ROWS - bounding_height(kind)) / 2;
        let cell = Cell::new(BLOCK, Style::new(piece_color(kind), BACKDROP));

        for row in 0..2 {
            for col in 0..4 {
                if preview_cell(kind, col, row) {
                    fb.fill_rect(x + off_x + col * self.cell_w, y + off_y + row, self.cell_w, 1, cell);
                }
            }
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, x: u16, y: u16, col: u16, row: u16, cell: Cell) {
        fb.fill_rect(x + col * self.cell_w, y + row, self.cell_w, 1, cell);
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}
