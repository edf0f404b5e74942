//! GameView: a [`Renderer`] that draws a session into a terminal framebuffer.
//!
//! This module is pure (no I/O). The host flushes the framebuffer with
//! [`crate::TerminalRenderer`] after each tick.
//!
//! Layout: the board sits in a bordered frame, each board cell 2 columns wide
//! and 1 row tall. A side panel to the right shows score, level and the next
//! five pieces when the viewport is wide enough.

use crate::core::{Board, Position, Renderer, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Minimum side panel width for it to be drawn at all.
const PANEL_MIN_WIDTH: u16 = 10;

/// Rows from the panel top to the first preview slot: SCORE, value, gap,
/// LEVEL, value, gap, NEXT.
const PREVIEW_TOP: u16 = 7;

/// Terminal rows per preview slot (two shape rows per terminal row, plus a gap).
const PREVIEW_SLOT_ROWS: u16 = 3;

/// Terminal framebuffer renderer.
#[derive(Debug, Clone)]
pub struct GameView {
    fb: FrameBuffer,
    viewport: Viewport,
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    /// Top-left corner of the board frame (border included).
    origin: (u16, u16),
}

impl GameView {
    pub fn new(viewport: Viewport) -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            fb: FrameBuffer::new(viewport.width, viewport.height),
            viewport,
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
            origin: (0, 0),
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Takes effect at the next `begin_frame`.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Handed to `TerminalRenderer::draw_swap`, which swaps its contents.
    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (BOARD_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Left edge of the side panel, if there is room for one.
    fn panel_x(&self) -> Option<u16> {
        let (frame_w, _) = self.frame_size();
        let x = self.origin.0.saturating_add(frame_w).saturating_add(2);
        if x >= self.viewport.width || self.viewport.width - x < PANEL_MIN_WIDTH {
            return None;
        }
        Some(x)
    }

    fn draw_border(&mut self, style: CellStyle) {
        let (x, y) = self.origin;
        let (w, h) = self.frame_size();
        let fb = &mut self.fb;

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

    /// Fill one board cell; cells outside the board are skipped.
    fn fill_board_cell(&mut self, x: i8, y: i8, ch: char, style: CellStyle) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = self.origin.0 + 1 + (x as u16) * self.cell_w;
        let py = self.origin.1 + 1 + (y as u16) * self.cell_h;
        self.fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

/// Display color for a color id.
pub fn cell_color(cell: Cell) -> Rgb {
    match PieceKind::from_color_id(cell) {
        Some(PieceKind::I) => Rgb::new(80, 220, 220),
        Some(PieceKind::O) => Rgb::new(240, 220, 80),
        Some(PieceKind::T) => Rgb::new(200, 120, 220),
        Some(PieceKind::S) => Rgb::new(100, 220, 120),
        Some(PieceKind::Z) => Rgb::new(220, 80, 80),
        Some(PieceKind::J) => Rgb::new(80, 120, 220),
        Some(PieceKind::L) => Rgb::new(255, 165, 0),
        None => Rgb::new(90, 90, 100),
    }
}

fn block_style(cell: Cell) -> CellStyle {
    CellStyle::new(cell_color(cell), PLAY_BG).bold()
}

impl Renderer for GameView {
    fn begin_frame(&mut self) {
        self.fb.resize(self.viewport.width, self.viewport.height);
        self.fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = self.viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => self.viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        self.origin = (start_x, start_y);

        self.draw_border(CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG));
    }

    fn draw_board(&mut self, board: &Board) {
        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        for (y, row) in board.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == EMPTY {
                    self.fill_board_cell(x as i8, y as i8, '·', empty);
                } else {
                    self.fill_board_cell(x as i8, y as i8, '█', block_style(cell));
                }
            }
        }
    }

    fn draw_piece(&mut self, shape: &Shape, pos: Position, ghost: bool) {
        for (dx, dy, cell) in shape.occupied() {
            let (x, y) = (pos.x + dx, pos.y + dy);
            if ghost {
                let style = CellStyle::new(Rgb::new(140, 140, 140), PLAY_BG).dim();
                self.fill_board_cell(x, y, '░', style);
            } else {
                self.fill_board_cell(x, y, '█', block_style(cell));
            }
        }
    }

    fn draw_preview(&mut self, shape: &Shape, slot: usize) {
        let Some(panel_x) = self.panel_x() else {
            return;
        };
        let top = self.origin.1 + PREVIEW_TOP + (slot as u16) * PREVIEW_SLOT_ROWS;

        // Two shape rows share one terminal row via half blocks.
        for (dx, dy, cell) in shape.occupied() {
            let px = panel_x + (dx as u16) * 2;
            let py = top + (dy as u16) / 2;
            let upper = dy % 2 == 0;
            let existing = self.fb.get(px, py).map(|c| c.ch).unwrap_or(' ');
            let ch = match (existing, upper) {
                ('▄', true) | ('▀', false) => '█',
                (_, true) => '▀',
                (_, false) => '▄',
            };
            let style = CellStyle::new(cell_color(cell), PANEL_BG);
            self.fb.put_char(px, py, ch, style);
            self.fb.put_char(px + 1, py, ch, style);
        }
    }

    fn draw_stats(&mut self, score: u32, level: u32) {
        let Some(x) = self.panel_x() else {
            return;
        };
        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let y = self.origin.1;

        self.fb.put_str(x, y, "SCORE", label);
        self.fb.put_u32(x, y + 1, score, value);
        self.fb.put_str(x, y + 3, "LEVEL", label);
        self.fb.put_u32(x, y + 4, level, value);
        self.fb.put_str(x, y + PREVIEW_TOP - 1, "NEXT", label);
    }

    fn draw_overlay_text(&mut self, text: &str) {
        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.origin;
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let y = start_y.saturating_add(frame_h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        self.fb.put_str(x, y, text, style);
    }
}
