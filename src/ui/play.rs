use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Screen};
use crate::game::session::Session;
use crate::game::{
    BLOCK_WIDTH, FIELD_HEIGHT, FIELD_WIDTH, PADDLE_BOTTOM_MARGIN,
};

const FIELD_BG: Color = Color::Rgb(10, 10, 20);

const ROW_COLORS: [Color; 6] = [
    Color::Rgb(220, 50, 50),  // Red
    Color::Rgb(220, 130, 30), // Orange
    Color::Rgb(220, 200, 30), // Yellow
    Color::Rgb(50, 200, 50),  // Green
    Color::Rgb(50, 130, 220), // Blue
    Color::Rgb(150, 50, 220), // Purple
];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(220, 80, 80)))
        .title(" 🧱 Brickfall ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(255, 100, 100))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(inner);

    render_status(frame, chunks[0], app);

    let fw = chunks[1].width as usize;
    let fh = chunks[1].height as usize;
    let lines = render_field(app.session.as_ref(), fw, fh);
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    render_help(frame, chunks[2], app);

    if app.screen == Screen::Countdown {
        if let Some(digit) = app.countdown.digit() {
            render_countdown(frame, area, digit);
        }
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = match app.session.as_ref() {
        Some(session) => Line::from(vec![
            Span::styled(" 🧱 ", Style::default()),
            Span::styled(
                format!("Score: {} ", session.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("Lives: {} ", "♥ ".repeat(session.lives as usize)),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!(
                    "Blocks: {}/{} ",
                    session.grid.remaining(),
                    session.grid.len()
                ),
                Style::default().fg(Color::Green),
            ),
        ]),
        None => {
            let label = app.difficulty.map(|d| d.name()).unwrap_or("?");
            Line::from(vec![
                Span::styled(" 🧱 ", Style::default()),
                Span::styled(
                    format!("Difficulty: {label} "),
                    Style::default().fg(Color::Rgb(140, 140, 160)),
                ),
            ])
        }
    };
    frame.render_widget(Paragraph::new(status), area);
}

fn render_help(frame: &mut Frame, area: Rect, app: &App) {
    let help = if app.screen == Screen::Countdown {
        Line::from(Span::styled(
            " Get ready… ",
            Style::default()
                .fg(Color::Rgb(255, 220, 80))
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::styled(" ←/→ Move paddle ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("Ctrl+C Quit", Style::default().fg(Color::DarkGray)),
        ])
    };
    frame.render_widget(Paragraph::new(help), area);
}

/// Scales the 700x400 logical field down to the terminal rect, one styled
/// char per cell. An empty field renders during the countdown.
fn render_field(session: Option<&Session>, width: usize, height: usize) -> Vec<Line<'static>> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut grid: Vec<Vec<(char, Style)>> =
        vec![vec![(' ', Style::default().bg(FIELD_BG)); width]; height];

    let sx = width as f32 / FIELD_WIDTH;
    let sy = height as f32 / FIELD_HEIGHT;

    if let Some(session) = session {
        // Blocks, one color per grid row. Wide grids overhang the field
        // edges in the simulation; the display clips them to the field.
        for (i, block) in session.grid.iter().enumerate() {
            if block.hit {
                continue;
            }
            let row = i / session.grid.columns;
            let color = ROW_COLORS[row % ROW_COLORS.len()];
            let bx_start = (block.x.max(0.0) * sx) as usize;
            let bx_end = (((block.x + BLOCK_WIDTH).min(FIELD_WIDTH)) * sx) as usize;
            let by = (block.y * sy) as usize;
            if by >= height {
                continue;
            }
            for bx in bx_start..bx_end.min(width) {
                let ch = if bx == bx_start {
                    '▐'
                } else if bx + 1 >= bx_end.min(width) {
                    '▌'
                } else {
                    '█'
                };
                grid[by][bx] = (ch, Style::default().fg(color).bg(FIELD_BG));
            }
        }

        // Paddle
        let paddle = &session.paddle;
        let py = ((FIELD_HEIGHT - paddle.height - PADDLE_BOTTOM_MARGIN) * sy) as usize;
        let px_start = (paddle.x.max(0.0) * sx) as usize;
        let px_end = ((paddle.x + paddle.width) * sx) as usize;
        if py < height {
            for px in px_start..px_end.min(width) {
                grid[py][px] = (
                    '═',
                    Style::default()
                        .fg(Color::Rgb(180, 200, 255))
                        .bg(Color::Rgb(30, 50, 120))
                        .add_modifier(Modifier::BOLD),
                );
            }
        }

        // Ball; skipped while it sits outside the field for a frame
        let bx = (session.ball.pos.x * sx) as usize;
        let by = (session.ball.pos.y * sy) as usize;
        if bx < width && by < height {
            grid[by][bx] = (
                '●',
                Style::default()
                    .fg(Color::Rgb(255, 255, 255))
                    .bg(FIELD_BG)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_countdown(frame: &mut Frame, area: Rect, digit: u8) {
    let overlay_w = 9u16.min(area.width);
    let overlay_h = 3u16.min(area.height);
    let x = area.x + (area.width.saturating_sub(overlay_w)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_h)) / 2;
    let overlay_area = Rect::new(x, y, overlay_w, overlay_h);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(255, 220, 80)))
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let p = Paragraph::new(Line::from(Span::styled(
        digit.to_string(),
        Style::default()
            .fg(Color::Rgb(255, 220, 80))
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(p, inner);
}
