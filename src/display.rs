/// Rendering layer: all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only projects the
/// logical screen onto the terminal grid and translates entities into
/// terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use robots_vs_dinosaurs::config::ROBOT_MAX_HEALTH;
use robots_vs_dinosaurs::entities::{GameState, GameStatus, LaserOwner, Tier};
use robots_vs_dinosaurs::sprite::Rect;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_ROBOT: Color = Color::White;
const C_DINO_GREEN: Color = Color::Green;
const C_DINO_YELLOW: Color = Color::Yellow;
const C_DINO_RED: Color = Color::Red;
const C_MONSTER: Color = Color::Magenta;
const C_BLOCK: Color = Color::DarkRed;
const C_LASER_ROBOT: Color = Color::Cyan;
const C_LASER_DINO: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;

// ── Projection ────────────────────────────────────────────────────────────────

/// Maps logical screen pixels onto the terminal cells inside the border.
struct Viewport {
    cols: u16,
    rows: u16,
    sx: f32,
    sy: f32,
}

impl Viewport {
    fn new(state: &GameState, width: u16, height: u16) -> Self {
        // One column per side for the walls, HUD + top bar above, bottom bar + hint below.
        let cols = width.saturating_sub(2).max(1);
        let rows = height.saturating_sub(4).max(1);
        Viewport {
            cols,
            rows,
            sx: cols as f32 / state.config.screen_width,
            sy: rows as f32 / state.config.screen_height,
        }
    }

    /// Terminal cell of a logical point, or `None` when it is off the field.
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let col = (x * self.sx).floor();
        let row = (y * self.sy).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.rows as f32 {
            return None;
        }
        Some((col as u16 + 1, row as u16 + 2))
    }

    fn center_cell(&self, rect: &Rect) -> Option<(u16, u16)> {
        let (cx, cy) = rect.center();
        self.cell(cx, cy)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let view = Viewport::new(state, width, height);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, width, height)?;
    draw_hud(out, state, width)?;

    for block in &state.blocks {
        draw_glyph(out, &view, &block.rect, "█", C_BLOCK)?;
    }
    for dinosaur in &state.dinosaurs {
        let color = match dinosaur.tier {
            Tier::Green => C_DINO_GREEN,
            Tier::Yellow => C_DINO_YELLOW,
            Tier::Red => C_DINO_RED,
        };
        draw_sprite(out, &view, &dinosaur.rect, "ᴥ", color)?;
    }
    if let Some(monster) = &state.monster {
        draw_sprite(out, &view, &monster.rect, "◉", C_MONSTER)?;
    }
    for laser in state.robot.lasers.iter().chain(&state.dinosaur_lasers) {
        let (glyph, color) = match laser.owner {
            LaserOwner::Robot => ("║", C_LASER_ROBOT),
            LaserOwner::Dinosaur => ("↓", C_LASER_DINO),
        };
        draw_glyph(out, &view, &laser.rect, glyph, color)?;
    }
    draw_sprite(out, &view, &state.robot.rect, "▲", C_ROBOT)?;

    draw_controls_hint(out, height)?;

    if state.status.is_terminal() {
        draw_game_over(out, state, width, height)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, width: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("score: {}", state.score)))?;

    // The robot on screen is the current life; the HUD shows the spares.
    let spares = "▲ ".repeat(state.lives.saturating_sub(1) as usize);
    let lives_str = format!(
        "HP {:>3}/{}  {}",
        state.robot.current_health.max(0),
        ROBOT_MAX_HEALTH,
        spares.trim_end()
    );
    let rx = width.saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Single glyph at the rect's centre.
fn draw_glyph<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: &Rect,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    if let Some((col, row)) = view.center_cell(rect) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

/// Span the rect's width with `glyph` on its centre row.
fn draw_sprite<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: &Rect,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    let (_, cy) = rect.center();
    let (Some((start, row)), Some((end, _))) = (
        view.cell(rect.left().max(0.0), cy),
        view.cell((rect.right() - 1.0).max(0.0), cy),
    ) else {
        return draw_glyph(out, view, rect, glyph, color);
    };
    out.queue(style::SetForegroundColor(color))?;
    out.queue(cursor::MoveTo(start, row))?;
    out.queue(Print(glyph.repeat((end - start + 1) as usize)))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let (banner, color, score) = match state.status {
        GameStatus::Lost { score } => ("║    GAME  OVER      ║", Color::Red, score),
        GameStatus::Cleared { score } => ("║  FORMATION CLEARED ║", Color::Green, score),
        GameStatus::Ongoing => return Ok(()),
    };
    let lines: [(String, Color); 5] = [
        ("╔════════════════════╗".to_string(), color),
        (banner.to_string(), color),
        ("╚════════════════════╝".to_string(), color),
        (format!("Final Score: {:>6}", score), Color::Yellow),
        ("R - Play Again  Q - Quit".to_string(), Color::White),
    ];

    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}
