use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tracing::debug;

use super::{Buttons, Platform, Tile, Video};
use crate::input::{InputHandler, KeyAction};
use crate::render::{Renderer, Viewport};

/// Platform backed by a raw-mode terminal.
///
/// Key presses are latched until the next [`Platform::read_input`], since a
/// terminal reports presses rather than held buttons. Each frame presents the
/// sprite table, then waits out the rest of the frame period.
pub struct TerminalPlatform {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    video: Video,
    viewport: Viewport,
    renderer: Renderer,
    input_handler: InputHandler,
    frame_duration: Duration,
    next_frame: Instant,
    latched: Buttons,
    frames: u64,
    halted: bool,
    restored: bool,
}

impl TerminalPlatform {
    pub fn new(viewport: Viewport, fps: u32) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // no Self yet, so Drop cannot leave raw mode for us
        let terminal = undo_on_error(setup_terminal(), leave_raw_mode)?;

        let frame_duration = Duration::from_secs(1) / fps.max(1);

        Ok(Self {
            terminal,
            video: Video::new(),
            viewport,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            frame_duration,
            next_frame: Instant::now() + frame_duration,
            latched: Buttons::empty(),
            frames: 0,
            halted: false,
            restored: false,
        })
    }

    /// Leave raw mode and the alternate screen. Safe to call twice.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let Self {
            terminal,
            video,
            viewport,
            renderer,
            frames,
            ..
        } = self;

        terminal
            .draw(|frame| renderer.render(frame, video, viewport, *frames))
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        // Only process key press events, not release
        if key.kind == KeyEventKind::Release {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Press(buttons) => self.latched |= buttons,
            KeyAction::Quit => {
                debug!("quit requested");
                self.halted = true;
            }
            KeyAction::None => {}
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
    let mut stderr = stderr();
    execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

fn leave_raw_mode() {
    let _ = execute!(stderr(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Run `undo` if `result` is an error, then pass `result` through
fn undo_on_error<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

impl Platform for TerminalPlatform {
    fn wait_next_frame(&mut self) -> Result<()> {
        self.present()?;

        loop {
            let timeout = self.next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout).context("Failed to poll terminal events")? {
                break;
            }
            let event = event::read().context("Failed to read terminal event")?;
            self.handle_event(event);
        }

        self.frames += 1;
        self.next_frame += self.frame_duration;
        let now = Instant::now();
        if self.next_frame < now {
            // fell behind; resynchronize instead of bursting frames
            self.next_frame = now + self.frame_duration;
        }
        Ok(())
    }

    fn read_input(&mut self) -> Buttons {
        std::mem::take(&mut self.latched)
    }

    fn set_sprite_tile(&mut self, slot: u8, tile: u8) {
        self.video.sprites.set_tile(slot, tile);
    }

    fn move_sprite(&mut self, slot: u8, px: u16, py: u16) {
        self.video.sprites.move_to(slot, px, py);
    }

    fn upload_tiles(&mut self, first_tile: u8, tiles: &[Tile]) {
        self.video.tiles.load(first_tile, tiles);
    }

    fn enable_sprites(&mut self) {
        self.video.sprites_enabled = true;
    }

    fn enable_display(&mut self) {
        self.video.display_enabled = true;
    }

    fn read_entropy(&mut self) -> u16 {
        rand::random()
    }

    fn halted(&self) -> bool {
        self.halted
    }
}

impl Drop for TerminalPlatform {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_is_undone() {
        let undone = Cell::new(false);
        let result: Result<()> = undo_on_error(Err(anyhow!("Failed to hide cursor")), || {
            undone.set(true)
        });

        assert!(result.is_err());
        assert!(undone.get());
    }

    #[test]
    fn test_successful_setup_is_kept() {
        let undone = Cell::new(false);
        let result = undo_on_error(Ok(7), || undone.set(true));

        assert_eq!(result.unwrap(), 7);
        assert!(!undone.get());
    }
}
