use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::config::Difficulty;

const BANNER: &str = r#"
██████╗ ██████╗ ██╗ ██████╗██╗  ██╗███████╗ █████╗ ██╗     ██╗
██╔══██╗██╔══██╗██║██╔════╝██║ ██╔╝██╔════╝██╔══██╗██║     ██║
██████╔╝██████╔╝██║██║     █████╔╝ █████╗  ███████║██║     ██║
██╔══██╗██╔══██╗██║██║     ██╔═██╗ ██╔══╝  ██╔══██║██║     ██║
██████╔╝██║  ██║██║╚██████╗██║  ██╗██║     ██║  ██║███████╗███████╗
╚═════╝ ╚═╝  ╚═╝╚═╝ ╚═════╝╚═╝  ╚═╝╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝"#;

fn tile_colors(difficulty: Difficulty) -> (Color, Color) {
    match difficulty {
        Difficulty::Easy => (Color::Rgb(80, 220, 80), Color::Rgb(40, 120, 40)),
        Difficulty::Normal => (Color::Rgb(220, 200, 30), Color::Rgb(120, 110, 20)),
        Difficulty::Hard => (Color::Rgb(220, 80, 80), Color::Rgb(120, 40, 40)),
    }
}

fn tile_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy",
        Difficulty::Normal => "Normal",
        Difficulty::Hard => "Hard",
    }
}

fn render_tile(frame: &mut Frame, area: Rect, difficulty: Difficulty, key: char, selected: bool) {
    let (color, border_color) = tile_colors(difficulty);
    let border_color = if selected {
        Color::Rgb(255, 220, 80)
    } else {
        border_color
    };
    let border_type = if selected {
        BorderType::Double
    } else {
        BorderType::Rounded
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let cfg = difficulty.config();
    let name_color = if selected {
        Color::Rgb(255, 255, 255)
    } else {
        color
    };
    let desc_color = if selected {
        Color::Rgb(180, 180, 200)
    } else {
        Color::Rgb(120, 120, 140)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] ", key),
                Style::default()
                    .fg(Color::Rgb(255, 220, 80))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                tile_label(difficulty),
                Style::default().fg(name_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("Paddle {}  Lives {}", cfg.paddle_width as u32, cfg.lives),
            Style::default().fg(desc_color),
        )),
        Line::from(Span::styled(
            format!("{} x {} blocks", cfg.rows, cfg.columns),
            Style::default().fg(desc_color),
        )),
    ];

    if selected {
        lines.push(Line::from(Span::styled(
            "▶ Enter to play",
            Style::default()
                .fg(Color::Rgb(255, 220, 80))
                .add_modifier(Modifier::BOLD),
        )));
    }

    let p = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(p, inner);
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Banner
            Constraint::Length(2), // Subtitle
            Constraint::Length(7), // Difficulty tiles
            Constraint::Min(0),
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let banner = Paragraph::new(BANNER)
        .style(Style::default().fg(Color::Rgb(255, 120, 60)))
        .alignment(Alignment::Center);
    frame.render_widget(banner, chunks[0]);

    let subtitle = Paragraph::new(Line::from(Span::styled(
        "Pick a difficulty to start",
        Style::default().fg(Color::Rgb(140, 140, 160)),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[1]);

    // Three tiles centered in a row
    let tile_width = 24u16.min(chunks[2].width / 3);
    let total = tile_width * 3;
    let left = chunks[2].width.saturating_sub(total) / 2;
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(left),
            Constraint::Length(tile_width),
            Constraint::Length(tile_width),
            Constraint::Length(tile_width),
            Constraint::Min(0),
        ])
        .split(chunks[2]);

    for (i, &difficulty) in Difficulty::all().iter().enumerate() {
        let key = char::from(b'1' + i as u8);
        render_tile(frame, row[i + 1], difficulty, key, app.selected == i);
    }

    let help = Paragraph::new(Line::from(vec![
        Span::styled("←/→ ", Style::default().fg(Color::Rgb(80, 200, 255))),
        Span::styled("Select  ", Style::default().fg(Color::Rgb(140, 140, 140))),
        Span::styled("Enter ", Style::default().fg(Color::Rgb(80, 200, 255))),
        Span::styled("Start  ", Style::default().fg(Color::Rgb(140, 140, 140))),
        Span::styled("Q ", Style::default().fg(Color::Rgb(80, 200, 255))),
        Span::styled("Quit", Style::default().fg(Color::Rgb(140, 140, 140))),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}
