//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.
//! `draw` only reads the `App`; all state changes happen in the runtime.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, DiscReading, Phase};
use crate::chooser::DirChooser;
use crate::config::UiSettings;
use crate::disc::format_percent;

const MAIN_CONTROLS: &str = "[b/enter] browse | [q/esc] quit";
const CHOOSER_CONTROLS: &str =
    "[j/k] move | [l/enter] open | [h/backspace] up | [space/c] use this folder | [esc] cancel";
const DIALOG_CONTROLS: &str = "[enter/esc] OK";

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn padded() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

fn disc_gauge(reading: &DiscReading) -> Gauge<'static> {
    let color = if reading.percent > 100.0 {
        Color::Red
    } else {
        Color::Cyan
    };
    Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", reading.text())))
        .gauge_style(Style::default().fg(color))
        .ratio(reading.ratio())
        .label(format_percent(reading.percent))
}

fn footer_text(app: &App) -> &'static str {
    if app.error_dialog.is_some() {
        DIALOG_CONTROLS
    } else if app.phase == Phase::Selecting {
        CHOOSER_CONTROLS
    } else {
        MAIN_CONTROLS
    }
}

fn draw_chooser(frame: &mut Frame, chooser: &DirChooser, area: Rect) {
    let popup = centered_rect_sized(70, 20, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" select a folder ")
        .title_alignment(Alignment::Center);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(chooser.cwd.display().to_string())
            .style(Style::default().add_modifier(Modifier::BOLD)),
        rows[0],
    );

    let items: Vec<ListItem> = chooser
        .entries
        .iter()
        .map(|e| ListItem::new(format!("{}/", e.name)))
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if !chooser.entries.is_empty() {
        state.select(Some(chooser.selected));
    }
    frame.render_stateful_widget(list, rows[1], &mut state);

    if let Some(msg) = &chooser.message {
        frame.render_widget(
            Paragraph::new(msg.as_str()).style(Style::default().fg(Color::Red)),
            rows[2],
        );
    }
}

fn draw_error(frame: &mut Frame, message: &str, area: Rect) {
    let popup = centered_rect_sized(50, 7, area);
    frame.render_widget(Clear, popup);

    let dialog = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Error ")
                .title_alignment(Alignment::Center)
                .padding(Padding::uniform(1)),
        );
    frame.render_widget(dialog, popup);
}

/// Render the entire UI into the provided `frame` using `app` state.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let display = &app.display;

    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(4),
    ];
    constraints.extend(display.discs.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" mdfit ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let folder = display
        .folder
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let folder_par = Paragraph::new(folder).block(
        Block::bordered()
            .padding(padded())
            .title(" select a folder "),
    );
    frame.render_widget(folder_par, chunks[1]);

    let result = format!("Total Duration: {}\n{}", display.duration, display.status);
    let result_par = Paragraph::new(result)
        .block(Block::bordered().padding(padded()).title(" result "))
        .wrap(Wrap { trim: true });
    frame.render_widget(result_par, chunks[2]);

    for (i, reading) in display.discs.iter().enumerate() {
        frame.render_widget(disc_gauge(reading), chunks[3 + i]);
    }

    let footer = Paragraph::new(footer_text(app))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(padded()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[chunks.len() - 1]);

    let area = frame.area();
    if let Some(chooser) = &app.chooser {
        draw_chooser(frame, chooser, area);
    }

    // The dialog sits above everything else.
    if let Some(message) = &app.error_dialog {
        draw_error(frame, message, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::DiscCapacity;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw(f, app, &UiSettings::default()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn idle_screen_shows_zeroed_readings() {
        let app = App::new(DiscCapacity::defaults(), ".mp3", None);
        let screen = render(&app);

        assert!(screen.contains("Total Duration: 00:00"));
        assert!(screen.contains("Status: Waiting for input..."));
        assert!(screen.contains("74-minute disc usage: 0.00%"));
        assert!(screen.contains("80-minute disc usage: 0.00%"));
        assert!(screen.contains("[b/enter] browse"));
    }

    #[test]
    fn error_dialog_is_rendered_on_top() {
        let mut app = App::new(DiscCapacity::defaults(), ".mp3", None);
        app.error_dialog = Some("No MP3 files found in the selected folder.".to_string());
        let screen = render(&app);

        assert!(screen.contains(" Error "));
        assert!(screen.contains("No MP3 files found"));
        assert!(screen.contains("[enter/esc] OK"));
    }

    #[test]
    fn reading_text_and_ratio_drive_the_gauge() {
        let reading = DiscReading {
            label: "74-minute".to_string(),
            percent: 150.0,
        };
        // Building the widget with an out-of-range percent must not panic.
        let _ = disc_gauge(&reading);
        assert_eq!(reading.ratio(), 1.0);
    }
}
