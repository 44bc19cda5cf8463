//! Interactive terminal viewer.
//!
//! Keys:
//! - `w` move the receiver plane away from the lens
//! - `s` move it toward the lens
//! - `q` report the current distance
//! - `Esc` quit
//!
//! The canvas rescales the nominal frame to whatever size the terminal
//! has, so a resize only needs a redraw.

use anyhow::Result;
use caustic::caustic_optics::FRAME_SIZE;
use caustic::Session;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::info;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{DefaultTerminal, Frame};

/// Run the viewer until the user quits.
pub fn run(session: Session) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = Viewer::new(session).run(&mut terminal);
    ratatui::restore();
    result
}

struct Viewer {
    session: Session,
    /// Projected points in canvas orientation (y up).
    coords: Vec<(f64, f64)>,
    status: String,
    quit: bool,
}

impl Viewer {
    fn new(session: Session) -> Self {
        let mut viewer = Self {
            session,
            coords: Vec::new(),
            status: String::new(),
            quit: false,
        };
        viewer.refresh();
        viewer
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.quit {
            terminal.draw(|frame| self.draw(frame))?;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key.code),
                // Resize and everything else just redraw.
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('w') => {
                self.session.step_farther();
                self.refresh();
            }
            KeyCode::Char('s') => {
                self.session.step_closer();
                self.refresh();
            }
            KeyCode::Char('q') => {
                info!("current lens-to-wall distance: {}", self.session.distance());
                self.status = format!(
                    "current lens-to-wall distance: {:.3}",
                    self.session.distance()
                );
            }
            KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Rebuild canvas coordinates from the session's current projection.
    fn refresh(&mut self) {
        let projection = self.session.projection();
        // Nominal frame has y growing downward; the canvas grows upward.
        self.coords = projection
            .points
            .iter()
            .map(|p| (p.x, FRAME_SIZE - p.y))
            .collect();
        self.status = format!(
            "distance {:.3}  |  {}/{} in frame  |  w/s move  q query  esc quit",
            projection.distance,
            projection.in_frame_count(),
            projection.len()
        );
    }

    fn draw(&self, frame: &mut Frame) {
        let [canvas_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        let canvas = Canvas::default()
            .block(Block::bordered().title(" caustic "))
            .marker(Marker::Braille)
            .x_bounds([0.0, FRAME_SIZE])
            .y_bounds([0.0, FRAME_SIZE])
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &self.coords,
                    color: Color::White,
                });
            });
        frame.render_widget(canvas, canvas_area);
        frame.render_widget(Paragraph::new(Line::from(self.status.as_str())), status_area);
    }
}
