//! Now-playing bar: current queue entry and position within the queue

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::model::PlaybackQueue;
use super::utils::format_elapsed;

pub fn render_now_playing(frame: &mut Frame, area: Rect, playback: &PlaybackQueue) {
    let Some(now) = playback.now_playing() else {
        let idle = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Nothing playing "))
            .gauge_style(Style::default().fg(Color::DarkGray))
            .ratio(0.0)
            .label("");
        frame.render_widget(idle, area);
        return;
    };

    let title = format!(" ▶ {} | {} ({}) ", now.entry.title, now.artist, now.album);
    let position = playback.position() + 1;
    let ratio = (position as f64 / playback.len().max(1) as f64).clamp(0.0, 1.0);
    let queue_info = format!(" Track {}/{} | Ctrl+N next, Ctrl+P previous ", position, playback.len());

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_bottom(Line::from(queue_info).right_aligned()),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(ratio)
        .label(format_elapsed(playback.elapsed_secs()));

    frame.render_widget(gauge, area);
}
