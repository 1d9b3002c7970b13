//! Species selection scene: pick a target, cast the line.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::species::Species;

/// Screen state for the species menu.
pub struct SpeciesMenu {
    pub selected: usize,
    /// Outcome of the previous session, if any (`true` = landed).
    pub last_result: Option<bool>,
}

impl SpeciesMenu {
    pub fn new() -> Self {
        Self {
            selected: 0,
            last_result: None,
        }
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % Species::ALL.len();
    }

    pub fn previous(&mut self) {
        self.selected = (self.selected + Species::ALL.len() - 1) % Species::ALL.len();
    }

    pub fn selected_species(&self) -> Species {
        Species::ALL[self.selected]
    }
}

impl Default for SpeciesMenu {
    fn default() -> Self {
        Self::new()
    }
}

pub fn draw(frame: &mut Frame, menu: &SpeciesMenu) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Species list + details
            Constraint::Length(2), // Previous result
            Constraint::Length(2), // Controls
        ])
        .split(area);

    let title = Paragraph::new("Select Your Target")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    draw_species_list(frame, main_chunks[0], menu);
    draw_species_details(frame, main_chunks[1], menu);

    if let Some(won) = menu.last_result {
        let (text, color) = if won {
            ("Previous cast: LANDED", Color::Green)
        } else {
            ("Previous cast: ESCAPED", Color::Red)
        };
        let result = Paragraph::new(text)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center);
        frame.render_widget(result, chunks[2]);
    }

    let controls = Paragraph::new(Line::from(vec![
        Span::styled("[↑/↓]", Style::default().fg(Color::White)),
        Span::styled(" Choose  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Enter]", Style::default().fg(Color::White)),
        Span::styled(" Cast line  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[q]", Style::default().fg(Color::White)),
        Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[3]);
}

fn draw_species_list(frame: &mut Frame, area: Rect, menu: &SpeciesMenu) {
    let block = Block::default()
        .title(" Species ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::with_capacity(Species::ALL.len());
    for (i, species) in Species::ALL.iter().enumerate() {
        let selected = i == menu.selected;
        let marker = if selected { "▶ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", species.name()),
            style,
        )));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_species_details(frame: &mut Frame, area: Rect, menu: &SpeciesMenu) {
    let block = Block::default()
        .title(" Profile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let profile = menu.selected_species().profile();
    // Speed pips: 0.4 (carp) through 3.6 (legend) mapped onto five dots.
    let pips = ((profile.base_speed / 4.0 * 5.0).ceil() as usize).clamp(1, 5);
    let speed_bar = format!("{}{}", "●".repeat(pips), "○".repeat(5 - pips));

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", profile.name),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Temperament: ", Style::default().fg(Color::DarkGray)),
            Span::styled(profile.behavior.label(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled(" Speed:       ", Style::default().fg(Color::DarkGray)),
            Span::styled(speed_bar, Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled(" Restlessness: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}%", (profile.move_chance * 100.0).round() as u32),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Reaction:    ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}ms", profile.change_interval_ms),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " Hold Space or the mouse button to lift",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            " the bar; keep it on the fish to reel in.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
