//! # Display Management
//!
//! Paints a [`ViewportFrame`] and the status panel with macroquad.

use crate::config::{CELL_HEIGHT, CELL_WIDTH};
use crate::{CellKind, FloorwalkResult, Session, StatusReadout, ViewConfig, ViewportFrame};
use macroquad::prelude::*;

/// Fill colour for a cell category.
pub fn cell_color(kind: CellKind) -> Color {
    match kind {
        CellKind::Void => BLACK,
        CellKind::Obstacle => Color::from_rgba(31, 41, 55, 255),
        CellKind::Player => Color::from_rgba(59, 130, 246, 255),
        CellKind::StairActive => Color::from_rgba(245, 158, 11, 255),
        CellKind::Railing => Color::from_rgba(180, 83, 9, 255),
        CellKind::Outdoor => Color::from_rgba(134, 239, 172, 255),
        CellKind::Indoor => Color::from_rgba(229, 231, 235, 255),
    }
}

/// Macroquad display manager for the walkabout.
pub struct MacroquadDisplay {
    /// Cell width in pixels
    pub cell_width: f32,
    /// Cell height in pixels
    pub cell_height: f32,
    /// Status panel width in pixels
    pub panel_width: f32,
    /// Viewport settings
    pub view: ViewConfig,
    /// Most recent message, shown under the status
    pub message: Option<String>,
}

impl Default for MacroquadDisplay {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl MacroquadDisplay {
    /// Creates a display for the given view.
    pub fn new(view: ViewConfig) -> Self {
        Self {
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            panel_width: 240.0,
            view,
            message: None,
        }
    }

    /// Window size needed to show the whole viewport and the panel.
    pub fn window_size(&self) -> (f32, f32) {
        let size = self.view.size() as f32;
        (
            self.panel_width + size * self.cell_width,
            size * self.cell_height,
        )
    }

    /// Sets the message line.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Renders the complete screen for the session.
    pub fn render_session(&self, session: &Session) -> FloorwalkResult<()> {
        let frame = session.render(&self.view)?;
        let status = session.status()?;

        clear_background(WHITE);
        self.render_status(&status);
        self.render_frame(&frame);
        Ok(())
    }

    fn render_frame(&self, frame: &ViewportFrame) {
        for (row, cells) in frame.rows().enumerate() {
            for (col, kind) in cells.iter().enumerate() {
                draw_rectangle(
                    self.panel_width + col as f32 * self.cell_width,
                    row as f32 * self.cell_height,
                    self.cell_width,
                    self.cell_height,
                    cell_color(*kind),
                );
            }
        }
    }

    fn render_status(&self, status: &StatusReadout) {
        let x = 12.0;
        let mut line_y = 28.0;
        let line_height = 22.0;

        draw_text(&status.floor_label, x, line_y, 24.0, DARKGRAY);
        line_y += line_height * 1.5;

        draw_text("WASD / arrows: move", x, line_y, 18.0, GRAY);
        line_y += line_height;
        draw_text("ESC: quit", x, line_y, 18.0, GRAY);
        line_y += line_height * 1.5;

        draw_text(&status.coordinates(), x, line_y, 18.0, DARKGRAY);
        line_y += line_height;

        if let Some(message) = &self.message {
            draw_text(message, x, line_y, 16.0, DARKBLUE);
        }
    }
}
