use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use gridpath_core::{CellType, Coord, Grid};
use gridpath_replay::{Notice, Renderer, RevealEvent};

/// Terminal columns used per grid cell.
const CELL_WIDTH: u16 = 2;

/// Background color of each cell type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; 6],
}

impl Palette {
    #[inline]
    pub fn color(&self, cell: CellType) -> Color {
        self.colors[usize::from(cell.code())]
    }

    pub fn with(mut self, cell: CellType, color: Color) -> Self {
        self.colors[usize::from(cell.code())] = color;
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        let rgb = |r, g, b| Color::Rgb { r, g, b };
        Self {
            colors: [
                rgb(255, 255, 255),
                rgb(31, 41, 55),
                rgb(34, 197, 94),
                rgb(239, 68, 68),
                rgb(147, 197, 253),
                rgb(253, 224, 71),
            ],
        }
    }
}

/// Where a grid sits on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub left: u16,
    pub top: u16,
    pub rows: u16,
    pub cols: u16,
}

impl Viewport {
    /// A viewport sized for `grid`, its top-left corner at `(left, top)`.
    pub fn fit(grid: &Grid, left: u16, top: u16) -> Self {
        let clamp = |n: usize| u16::try_from(n).unwrap_or(u16::MAX);
        Self {
            left,
            top,
            rows: clamp(grid.rows()),
            cols: clamp(grid.cols()),
        }
    }

    /// Screen position of the first column of `c`, if it is inside.
    pub fn screen_pos(&self, c: Coord) -> Option<(u16, u16)> {
        let row = u16::try_from(c.row).ok().filter(|&r| r < self.rows)?;
        let col = u16::try_from(c.col).ok().filter(|&k| k < self.cols)?;
        Some((
            self.left.saturating_add(col.saturating_mul(CELL_WIDTH)),
            self.top.saturating_add(row),
        ))
    }

    /// The grid cell under the screen position `(column, row)`.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Coord> {
        let dx = column.checked_sub(self.left)?;
        let dy = row.checked_sub(self.top)?;
        let col = dx / CELL_WIDTH;
        if dy >= self.rows || col >= self.cols {
            return None;
        }
        Some(Coord::new(i32::from(dy), i32::from(col)))
    }

    /// Screen row of the status line, one below the grid.
    pub fn status_row(&self) -> u16 {
        self.top.saturating_add(self.rows).saturating_add(1)
    }
}

/// Draws grids and replay output to a terminal, or any writer.
///
/// [`Renderer`] callbacks cannot fail, so the first I/O error is kept and
/// later output is skipped until [`take_error`](Self::take_error) clears it.
pub struct TerminalRenderer<W: Write> {
    out: W,
    viewport: Viewport,
    palette: Palette,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, viewport: Viewport) -> Self {
        Self {
            out,
            viewport,
            palette: Palette::default(),
            error: None,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Redraw every cell of `grid`.
    pub fn draw_grid(&mut self, grid: &Grid) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        for (c, cell) in grid.iter() {
            self.queue_cell(c, cell)?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Redraw one cell.
    pub fn draw_cell(&mut self, c: Coord, cell: CellType) -> io::Result<()> {
        self.queue_cell(c, cell)?;
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Replace the status line below the grid.
    pub fn status(&mut self, text: &str) -> io::Result<()> {
        self.print_line(self.viewport.status_row(), text)
    }

    /// Replace the line under the status line.
    pub fn info(&mut self, text: &str) -> io::Result<()> {
        self.print_line(self.viewport.status_row().saturating_add(1), text)
    }

    /// The first I/O error hit inside a [`Renderer`] callback, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_line(&mut self, row: u16, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(self.viewport.left, row),
            Clear(ClearType::CurrentLine),
            ResetColor,
            Print(text)
        )?;
        self.out.flush()
    }

    fn queue_cell(&mut self, c: Coord, cell: CellType) -> io::Result<()> {
        let Some((x, y)) = self.viewport.screen_pos(c) else {
            return Ok(());
        };
        queue!(
            self.out,
            MoveTo(x, y),
            SetForegroundColor(Color::Black),
            SetBackgroundColor(self.palette.color(cell)),
            Print("  ")
        )
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            log::warn!("terminal write failed: {e}");
            self.error.get_or_insert(e);
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn reset(&mut self, grid: &Grid) {
        if self.error.is_none() {
            let r = self.draw_grid(grid);
            self.record(r);
        }
    }

    fn reveal(&mut self, event: RevealEvent) {
        if self.error.is_none() {
            let r = self.draw_cell(event.coord, event.cell);
            self.record(r);
        }
    }

    fn notice(&mut self, notice: Notice) {
        if self.error.is_none() {
            let text = match notice {
                Notice::PathFound { moves } => format!("Path found: {moves} moves"),
                Notice::NoPath => "No path found!".to_owned(),
            };
            let r = self.status(&text);
            self.record(r);
        }
    }
}
