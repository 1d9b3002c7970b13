//! Live reel scene: the water column, the catch bar, the fish, and the
//! progress meter, plus the end-of-session overlay.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{BAR_HEIGHT, FISH_HEIGHT};
use crate::minigame::types::{Phase, ReelState};
use crate::session::ReelSession;

const FISH_GLYPH: &str = "><((°>";

pub fn draw(frame: &mut Frame, session: &ReelSession) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" On the line: {} ", session.profile().name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // water column
            Constraint::Length(9),  // progress meter
            Constraint::Min(24),    // info panel
        ])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(h_chunks[0]);

    draw_water_column(frame, v_chunks[0], session.state());
    draw_status_bar(frame, v_chunks[1], session.state());
    draw_progress_meter(frame, h_chunks[1], session.state());
    draw_info_panel(frame, h_chunks[2], session);

    if session.phase() != Phase::Fishing {
        draw_result_overlay(frame, area, session);
    }
}

/// The track, top row = 100, bottom row = 0. Each display row covers a
/// band of track units; the bar and fish paint every row their spans
/// touch.
fn draw_water_column(frame: &mut Frame, area: Rect, state: &ReelState) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let band = 100.0 / height as f64;
    let bar_color = if state.catching {
        Color::Green
    } else {
        Color::DarkGray
    };

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let y_top = (height - row) as f64 * band;
        let y_bottom = (height - row - 1) as f64 * band;

        let in_bar = state.bar_pos < y_top && state.bar_pos + BAR_HEIGHT > y_bottom;
        let in_fish = state.fish_pos < y_top && state.fish_pos + FISH_HEIGHT > y_bottom;
        let fish_center = state.fish_pos + FISH_HEIGHT / 2.0;
        let center_row = in_fish && fish_center >= y_bottom && fish_center < y_top;

        lines.push(if center_row {
            fish_row(width, in_bar, bar_color)
        } else if in_bar {
            Line::from(Span::styled(
                "█".repeat(width),
                Style::default().fg(bar_color),
            ))
        } else {
            Line::from(Span::styled(
                "~".repeat(width),
                Style::default().fg(Color::Blue).add_modifier(Modifier::DIM),
            ))
        });
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// The row carrying the fish glyph, drawn over water or over the bar.
fn fish_row(width: usize, in_bar: bool, bar_color: Color) -> Line<'static> {
    let glyph_width = FISH_GLYPH.chars().count().min(width);
    let left = (width - glyph_width) / 2;
    let right = width - glyph_width - left;

    let (pad, pad_style) = if in_bar {
        ("█", Style::default().fg(bar_color))
    } else {
        ("~", Style::default().fg(Color::Blue).add_modifier(Modifier::DIM))
    };

    Line::from(vec![
        Span::styled(pad.repeat(left), pad_style),
        Span::styled(
            FISH_GLYPH.chars().take(glyph_width).collect::<String>(),
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(pad.repeat(right), pad_style),
    ])
}

fn draw_status_bar(frame: &mut Frame, area: Rect, state: &ReelState) {
    if area.height < 1 {
        return;
    }

    let (text, color) = if state.catching {
        ("Hooked! Keep it there!", Color::Green)
    } else {
        ("Chase the fish!", Color::Yellow)
    };
    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 {
        let controls = Paragraph::new(Line::from(vec![
            Span::styled("[Space]", Style::default().fg(Color::White)),
            Span::styled(" Lift  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Esc]", Style::default().fg(Color::White)),
            Span::styled(" Cut line", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Center);
        let controls_area = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        frame.render_widget(controls, controls_area);
    }
}

/// Vertical catch meter, filled from the bottom. Green when nearly
/// landed, red when nearly lost — same thresholds as the bar coloring.
fn draw_progress_meter(frame: &mut Frame, area: Rect, state: &ReelState) {
    let block = Block::default()
        .title(" Line ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let height = inner.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let filled = (state.progress / 100.0 * height as f64).round() as usize;
    let fill_color = if state.progress > 70.0 {
        Color::Green
    } else if state.progress > 30.0 {
        Color::Yellow
    } else {
        Color::Red
    };

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        if row == 0 && state.perfect {
            // Perfect-catch indicator: survives only while every tick so
            // far has been on the fish.
            let left = (width.saturating_sub(1)) / 2;
            let right = width.saturating_sub(1) - left;
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(left)),
                Span::styled("◆", Style::default().fg(Color::Magenta)),
                Span::raw(" ".repeat(right)),
            ]));
            continue;
        }
        let (glyph, style) = if height - row <= filled {
            ("█", Style::default().fg(fill_color))
        } else {
            ("░", Style::default().fg(Color::DarkGray))
        };
        lines.push(Line::from(Span::styled(glyph.repeat(width), style)));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_info_panel(frame: &mut Frame, area: Rect, session: &ReelSession) {
    let block = Block::default()
        .title(" Catch ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let state = session.state();
    let profile = session.profile();

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", profile.name),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", profile.behavior.label()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Progress: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:>3.0}%", state.progress),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Thrust:   ", Style::default().fg(Color::DarkGray)),
            if state.thrust_engaged {
                Span::styled("engaged", Style::default().fg(Color::Green))
            } else {
                Span::styled("idle", Style::default().fg(Color::DarkGray))
            },
        ]),
    ];

    if state.perfect {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " ◆ Perfect so far",
            Style::default().fg(Color::Magenta),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_result_overlay(frame: &mut Frame, area: Rect, session: &ReelSession) {
    let won = session.phase() == Phase::Won;
    let (title, border, message) = if won {
        (
            "CAUGHT!",
            Color::Green,
            format!("You landed the {}!", session.profile().name),
        )
    } else {
        (
            "ESCAPED...",
            Color::Red,
            String::from("The line went slack."),
        )
    };

    let overlay = centered_rect(area, 44, 9);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default().fg(border).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(message)),
    ];
    if won && session.state().perfect {
        lines.push(Line::from(Span::styled(
            "★ PERFECT! ★",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::White)),
        Span::styled(" Fish again", Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
