//! Crossterm terminal view for pathviz.
//!
//! [`TerminalView`] draws a [`Grid`] as two-column colored cells and turns
//! terminal events into [`Input`]s. It implements [`FrameSink`] by recording
//! which cells changed; [`TerminalView::flush`] redraws only those.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind},
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor},
    terminal::{self, ClearType},
};

use pathviz_anim::FrameSink;
use pathviz_core::{Grid, NodeState, NodeType, Point};
use pathviz_paths::AnimationFrame;

/// Terminal columns used by one grid cell.
pub const CELL_WIDTH: u16 = 2;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Keys the view reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
}

/// A terminal event translated into grid terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    /// Left button pressed or dragged over a cell.
    Paint(Point),
    /// Right button pressed or dragged over a cell.
    Erase(Point),
    Resize { width: u16, height: u16 },
}

/// Grid cell under a terminal position.
pub fn cell_at(column: u16, row: u16) -> Point {
    Point::new(i32::from(column / CELL_WIDTH), i32::from(row))
}

fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// Maps a crossterm [`Event`] to an [`Input`], if it is one we use.
pub fn to_input(ev: Event) -> Option<Input> {
    match ev {
        Event::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
            to_key(code).map(Input::Key)
        }
        Event::Mouse(me) => {
            let p = cell_at(me.column, me.row);
            match me.kind {
                MouseEventKind::Down(MouseButton::Left)
                | MouseEventKind::Drag(MouseButton::Left) => Some(Input::Paint(p)),
                MouseEventKind::Down(MouseButton::Right)
                | MouseEventKind::Drag(MouseButton::Right) => Some(Input::Erase(p)),
                _ => None,
            }
        }
        Event::Resize(width, height) => Some(Input::Resize { width, height }),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// Background color of a cell.
pub fn cell_color(kind: NodeType, state: NodeState) -> CtColor {
    match (kind, state) {
        (NodeType::Wall, _) => CtColor::Rgb { r: 60, g: 60, b: 72 },
        (NodeType::Start, _) => CtColor::Rgb { r: 40, g: 180, b: 80 },
        (NodeType::End, _) => CtColor::Rgb { r: 210, g: 60, b: 60 },
        (NodeType::Empty, NodeState::Path) => CtColor::Rgb { r: 240, g: 200, b: 60 },
        (NodeType::Empty, NodeState::Visited) => CtColor::Rgb { r: 70, g: 130, b: 200 },
        (NodeType::Empty, NodeState::Visiting) => CtColor::Rgb { r: 140, g: 190, b: 240 },
        (NodeType::Empty, NodeState::Unvisited) => CtColor::Reset,
    }
}

// ---------------------------------------------------------------------------
// TerminalView
// ---------------------------------------------------------------------------

/// Full-screen terminal view of a grid.
pub struct TerminalView {
    dirty: Vec<Point>,
    full_redraw: bool,
    completed: bool,
    mouse_enabled: bool,
    active: bool,
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalView {
    /// Create a new view. Nothing is drawn until [`init`](Self::init).
    pub fn new() -> Self {
        Self {
            dirty: Vec::new(),
            full_redraw: true,
            completed: false,
            mouse_enabled: true,
            active: false,
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        self.active = true;
        self.full_redraw = true;
        log::debug!("terminal view initialised");
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }

    /// Wait up to `timeout` for an event we care about.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<Input>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let input = to_input(event::read()?);
        if let Some(Input::Resize { .. }) = input {
            self.full_redraw = true;
        }
        Ok(input)
    }

    /// Schedule a redraw of the whole grid on the next flush.
    pub fn mark_all(&mut self) {
        self.full_redraw = true;
        self.dirty.clear();
    }

    /// Schedule a redraw of one cell.
    pub fn mark(&mut self, p: Point) {
        if !self.full_redraw {
            self.dirty.push(p);
        }
    }

    /// Whether a completion was reported since the last call.
    pub fn take_completed(&mut self) -> bool {
        std::mem::take(&mut self.completed)
    }

    /// Number of cells waiting to be redrawn, or `None` for a full redraw.
    pub fn pending(&self) -> Option<usize> {
        (!self.full_redraw).then_some(self.dirty.len())
    }

    /// Redraw pending cells of `grid` and the status line below it.
    pub fn flush<W: Write>(&mut self, out: &mut W, grid: &Grid, status: &str) -> io::Result<()> {
        if self.full_redraw {
            queue!(out, terminal::Clear(ClearType::All))?;
            for p in grid.bounds() {
                draw_cell(out, grid, p)?;
            }
        } else {
            for &p in &self.dirty {
                draw_cell(out, grid, p)?;
            }
        }
        self.dirty.clear();
        self.full_redraw = false;

        let row = u16::try_from(grid.rows()).unwrap_or(u16::MAX);
        queue!(
            out,
            ResetColor,
            cursor::MoveTo(0, row.saturating_add(1)),
            terminal::Clear(ClearType::CurrentLine),
            Print(status)
        )?;
        out.flush()
    }
}

fn draw_cell<W: Write>(out: &mut W, grid: &Grid, p: Point) -> io::Result<()> {
    let Some(node) = grid.node(p) else {
        return Ok(());
    };
    let (Ok(x), Ok(y)) = (u16::try_from(p.x), u16::try_from(p.y)) else {
        return Ok(());
    };
    queue!(
        out,
        cursor::MoveTo(x.saturating_mul(CELL_WIDTH), y),
        SetBackgroundColor(cell_color(node.kind, node.state)),
        Print("  ")
    )
}

impl FrameSink for TerminalView {
    fn on_frame(&mut self, frame: AnimationFrame) {
        self.mark(frame.pos);
    }

    fn on_complete(&mut self) {
        self.completed = true;
    }
}

impl Drop for TerminalView {
    fn drop(&mut self) {
        self.close();
    }
}
