use std::collections::HashSet;

use playback::PlayerState;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::App;

pub fn render(frame: &mut Frame, app: &App) {
    let [header_area, body_area, timeline_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, app, header_area);
    render_transcript(frame, app, body_area);
    render_timeline(frame, app, timeline_area);
    render_hints(frame, hint_area);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let status = match app.player.state() {
        PlayerState::Playing => "▶ PLAYING",
        PlayerState::Ended => "■ ENDED",
        PlayerState::Idle => "⏸ PAUSED",
        PlayerState::Unbound => "· UNBOUND",
    };
    let scrub = if app.player.is_scrubbing() {
        " | SCRUB"
    } else {
        ""
    };
    let text = format!(" {} | {}{} ", app.title, status, scrub);
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_transcript(frame: &mut Frame, app: &App, area: Rect) {
    let playback = app.player.frame();

    let spoken: HashSet<usize> = playback.spoken.iter().map(|s| s.segment_index()).collect();
    let unspoken: HashSet<usize> = playback
        .unspoken
        .iter()
        .map(|s| s.segment_index())
        .collect();
    let current = playback.current_word.as_ref().map(|w| w.segment_index);

    let mut spans: Vec<Span> = Vec::new();
    for segment in &playback.segments {
        let index = segment.segment_index();
        let style = if current == Some(index) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if spoken.contains(&index) {
            Style::default().fg(Color::DarkGray)
        } else if unspoken.contains(&index) {
            Style::default().fg(Color::White)
        } else {
            // Straddling a scrub position: in neither partition.
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC)
        };
        spans.push(Span::styled(segment.text().to_string(), style));
        if segment.is_word() {
            spans.push(Span::raw(" "));
        }
    }

    frame.render_widget(
        Paragraph::new(vec![Line::from(spans)]).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_timeline(frame: &mut Frame, app: &App, area: Rect) {
    let duration = app.player.duration();
    let ratio = if duration <= 0.0 {
        0.0
    } else {
        (app.player.current_time() / duration).clamp(0.0, 1.0)
    };
    let label = format!(
        "{:.1}s/{:.1}s",
        app.player.current_time(),
        app.player.duration()
    );
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::White).bg(Color::DarkGray))
        .ratio(ratio)
        .label(label);
    frame.render_widget(gauge, area);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(" [Space] play/pause  [←/→] seek  [s] scrub  [Home/End] jump  [q] quit ")
            .style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
