use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::session::Outcome;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let Some(outcome) = session.outcome() else {
        return;
    };

    let overlay_w = 48u16.min(area.width.saturating_sub(4));
    let overlay_h = 9u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(overlay_w)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_h)) / 2;
    let overlay_area = Rect::new(x, y, overlay_w, overlay_h);

    frame.render_widget(Clear, overlay_area);

    let (title, title_color) = match outcome {
        Outcome::GameOver => (" 💀 GAME OVER ", Color::Rgb(220, 80, 80)),
        Outcome::Cleared => (" 🎉 GAME CLEAR ", Color::Rgb(80, 220, 80)),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(title_color))
        .title(title)
        .title_style(Style::default().fg(title_color).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Final score: {}", session.score),
            Style::default()
                .fg(Color::Rgb(255, 215, 0))
                .add_modifier(Modifier::BOLD),
        )),
    ];

    if outcome == Outcome::Cleared {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Congratulations! You cleared the game!",
            Style::default().fg(Color::Rgb(80, 220, 80)),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Rgb(80, 200, 255))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " back to title  ",
            Style::default().fg(Color::Rgb(100, 100, 130)),
        ),
        Span::styled(
            "Ctrl+C",
            Style::default()
                .fg(Color::Rgb(80, 200, 255))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" quit", Style::default().fg(Color::Rgb(100, 100, 130))),
    ]));

    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    frame.render_widget(p, inner);
}
