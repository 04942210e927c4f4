use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Grid, GridMapper};
use crate::platform::Video;

/// Which part of sprite pixel space is drawn, and at what cell size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub grid: Grid,
    pub mapper: GridMapper,
}

const TILE_COLORS: [Color; 4] = [Color::Green, Color::Red, Color::Yellow, Color::Cyan];

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Tile id shown in each cell, row-major. Lower slots win overlaps.
    pub fn compose(&self, video: &Video, viewport: &Viewport) -> Vec<Vec<Option<u8>>> {
        let width = viewport.grid.width as usize;
        let mut cells = vec![vec![None; width]; viewport.grid.height as usize];

        if !video.is_showing_sprites() {
            return cells;
        }

        for (_, sprite) in video.sprites.iter().rev() {
            if !video.tiles.is_visible(sprite.tile) {
                continue;
            }
            let Some((gx, gy)) = viewport.mapper.to_grid_position(sprite.x, sprite.y) else {
                continue;
            };
            if let Some(cell) = cells
                .get_mut(gy as usize)
                .and_then(|row| row.get_mut(gx as usize))
            {
                *cell = Some(sprite.tile);
            }
        }

        cells
    }

    pub fn render(&self, frame: &mut Frame, video: &Video, viewport: &Viewport, frames: u64) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Screen
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let cells = self.compose(video, viewport);
        let visible = cells.iter().flatten().filter(|cell| cell.is_some()).count();
        frame.render_widget(self.render_stats(visible, frames), chunks[0]);

        if video.display_enabled {
            frame.render_widget(self.render_screen(cells), chunks[1]);
        } else {
            frame.render_widget(self.render_display_off(), chunks[1]);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_screen(&self, cells: Vec<Vec<Option<u8>>>) -> Paragraph<'_> {
        let lines: Vec<Line> = cells
            .into_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .into_iter()
                    .map(|cell| match cell {
                        Some(tile) => Span::styled(
                            "██",
                            Style::default().fg(TILE_COLORS[tile as usize % TILE_COLORS.len()]),
                        ),
                        None => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, visible: usize, frames: u64) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("Frame: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                frames.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Sprites: ", Style::default().fg(Color::Yellow)),
            Span::styled(visible.to_string(), Style::default().fg(Color::White)),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_display_off(&self) -> Paragraph<'_> {
        Paragraph::new(Line::from(Span::styled(
            "display off",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
