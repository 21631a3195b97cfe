use chrono::Timelike;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Points};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::ClockApp;
use crate::kernel::dial;

const FIELD_WIDTH: u16 = 9;
const FACE_RADIUS: f64 = 0.92;
const MINUTE_HAND_LEN: f64 = 0.58;
const SECOND_HAND_LEN: f64 = 0.78;
const HOUR_MARK_INNER: f64 = 0.8;
const HOUR_MARK_OUTER: f64 = 0.89;

pub(super) fn render(app: &mut ClockApp, frame: &mut Frame) {
    let [face_row, field_row, status_row] = Layout::vertical([
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let face = face_area(face_row);
    app.last_face_area = Some(face);
    render_face(app, frame, face);

    let field = field_area(field_row);
    app.last_field_area = Some(field);
    render_field(app, frame, field);

    render_status(app, frame, status_row);
}

/// A terminal cell is roughly twice as tall as wide, so a 2:1 rect keeps
/// the face round on screen.
fn face_area(row: Rect) -> Rect {
    let side = (row.width / 2).min(row.height).max(1);
    let width = side * 2;
    let height = side;
    Rect {
        x: row.x + (row.width.saturating_sub(width)) / 2,
        y: row.y + (row.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

fn field_area(row: Rect) -> Rect {
    let width = FIELD_WIDTH.min(row.width);
    Rect {
        x: row.x + (row.width.saturating_sub(width)) / 2,
        y: row.y,
        width,
        height: row.height,
    }
}

fn render_face(app: &ClockApp, frame: &mut Frame, area: Rect) {
    let state = app.store.state();
    let theme = &app.theme;

    let minute_rad = dial::unit_angle_deg(state.current.minute()).to_radians();
    let second_rad = dial::unit_angle_deg(state.current.second()).to_radians();

    let canvas = Canvas::default()
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: FACE_RADIUS,
                color: theme.face,
            });

            if theme.show_hour_marks {
                for hour in 0..12u16 {
                    let rad = f64::from(hour * 30).to_radians();
                    let (sin, cos) = rad.sin_cos();
                    ctx.draw(&CanvasLine {
                        x1: sin * HOUR_MARK_INNER,
                        y1: cos * HOUR_MARK_INNER,
                        x2: sin * HOUR_MARK_OUTER,
                        y2: cos * HOUR_MARK_OUTER,
                        color: theme.face,
                    });
                }
            }

            // Dial angles are clockwise from 12; canvas y points up, so a
            // hand at angle a ends at (sin a, cos a).
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: 0.0,
                x2: minute_rad.sin() * MINUTE_HAND_LEN,
                y2: minute_rad.cos() * MINUTE_HAND_LEN,
                color: theme.minute_hand,
            });
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: 0.0,
                x2: second_rad.sin() * SECOND_HAND_LEN,
                y2: second_rad.cos() * SECOND_HAND_LEN,
                color: theme.second_hand,
            });

            ctx.draw(&Points {
                coords: &[(0.0, 0.0)],
                color: theme.face,
            });
        });

    frame.render_widget(canvas, area);
}

fn render_field(app: &ClockApp, frame: &mut Frame, area: Rect) {
    let state = app.store.state();
    let (text, style) = if state.field.editing {
        (
            format!("{}_", state.field.buffer),
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
    } else {
        (state.display_time(), Style::default())
    };

    frame.render_widget(Paragraph::new(text).style(style).centered(), area);
}

fn render_status(app: &ClockApp, frame: &mut Frame, area: Rect) {
    let state = app.store.state();
    let status = if state.running {
        "● running"
    } else {
        "○ paused"
    };
    let line = format!(
        "{status}  |  click face: pause/resume  ·  drag a hand  ·  click field: edit MM:SS  ·  q: quit"
    );

    frame.render_widget(
        Paragraph::new(line)
            .style(Style::default().add_modifier(Modifier::DIM))
            .centered(),
        area,
    );
}
