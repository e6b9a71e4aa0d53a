//! Keystroke Visualizer - focus-only keystroke recorder
//!
//! Records key presses while the terminal window has input focus and shows
//! them in a scrolling log, with CSV export and typing-speed statistics.

use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io::stdout;

use keystroke_visualizer::{
    config::Config,
    ui::{App, AppState, DialogBox, LogView, Mode, SavePromptBox, StatusBar, ThemeColors, Toolbar},
};

const COMMANDS: &[(&str, &str)] = &[
    ("^L", "Clear"),
    ("^S", "Save CSV"),
    ("^T", "Stats"),
    ("^Q", "Quit"),
];

const INSTRUCTIONS: &str = "Focus this window and type... (captures only while this app is focused)";

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::load().unwrap_or_default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone());
    let tick_rate = config.refresh_interval();

    // Main loop: one event at a time, handlers run to completion
    loop {
        terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key, Local::now());
            }
        }

        if app.state == AppState::Quitting {
            break;
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn draw(frame: &mut Frame, app: &App) {
    let colors = ThemeColors::from_theme(app.config.ui.theme);
    let size = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(colors.bg)), size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Toolbar
            Constraint::Length(1), // Instruction label
            Constraint::Min(5),    // Log view
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    frame.render_widget(Toolbar::new(COMMANDS, colors), chunks[0]);

    let instructions = ratatui::widgets::Paragraph::new(format!(" {}", INSTRUCTIONS))
        .style(Style::default().fg(colors.dim).bg(colors.bg));
    frame.render_widget(instructions, chunks[1]);

    frame.render_widget(LogView::new(app.log.records(), colors), chunks[2]);

    frame.render_widget(
        StatusBar::new(&app.status_message, app.log.len(), colors),
        chunks[3],
    );

    // Modal overlays
    match &app.mode {
        Mode::SavePrompt(prompt) => {
            frame.render_widget(SavePromptBox::new(prompt, colors), size);
        }
        Mode::Dialog(dialog) => {
            frame.render_widget(DialogBox::new(dialog, colors), size);
        }
        Mode::Capture => {}
    }
}
