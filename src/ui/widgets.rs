//! Custom TUI widgets

use super::app::{Dialog, SavePrompt};
use super::theme::ThemeColors;
use crate::capture::KeyRecord;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

/// Toolbar line naming the available commands
pub struct Toolbar<'a> {
    commands: &'a [(&'a str, &'a str)],
    colors: ThemeColors,
}

impl<'a> Toolbar<'a> {
    pub fn new(commands: &'a [(&'a str, &'a str)], colors: ThemeColors) -> Self {
        Self { commands, colors }
    }
}

impl<'a> Widget for Toolbar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg_style = Style::default().bg(self.colors.toolbar_bg).fg(self.colors.fg);
        for x in area.x..area.x + area.width {
            buf.set_string(x, area.y, " ", bg_style);
        }

        let mut x = area.x + 1;
        for (i, (chord, label)) in self.commands.iter().enumerate() {
            let entry = format!("{} {}", chord, label);
            if x + entry.len() as u16 > area.x + area.width {
                break;
            }
            buf.set_string(
                x,
                area.y,
                *chord,
                bg_style.fg(self.colors.accent).add_modifier(Modifier::BOLD),
            );
            x += chord.len() as u16 + 1;
            buf.set_string(x, area.y, *label, bg_style);
            x += label.len() as u16;

            if i < self.commands.len() - 1 && x + 3 <= area.x + area.width {
                buf.set_string(x, area.y, " | ", bg_style.fg(self.colors.dim));
                x += 3;
            }
        }
    }
}

/// Scrolling view of the keystroke log, pinned to the newest entry
pub struct LogView<'a> {
    records: &'a [KeyRecord],
    colors: ThemeColors,
}

impl<'a> LogView<'a> {
    pub fn new(records: &'a [KeyRecord], colors: ThemeColors) -> Self {
        Self { records, colors }
    }
}

impl<'a> Widget for LogView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Keystrokes ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.colors.border))
            .style(Style::default().bg(self.colors.log_bg));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        // Auto-scroll: show the newest records that fit
        let visible = inner.height as usize;
        let skip = self.records.len().saturating_sub(visible);
        let line_style = Style::default().fg(self.colors.fg).bg(self.colors.log_bg);

        for (i, record) in self.records.iter().skip(skip).enumerate() {
            let y = inner.y + i as u16;
            buf.set_string(inner.x, y, record.display_line(), line_style);
        }
    }
}

/// Status bar: status message on the left, key count on the right
pub struct StatusBar<'a> {
    message: &'a str,
    key_count: usize,
    colors: ThemeColors,
}

impl<'a> StatusBar<'a> {
    pub fn new(message: &'a str, key_count: usize, colors: ThemeColors) -> Self {
        Self {
            message,
            key_count,
            colors,
        }
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg_style = Style::default().bg(self.colors.toolbar_bg).fg(self.colors.fg);
        for x in area.x..area.x + area.width {
            buf.set_string(x, area.y, " ", bg_style);
        }

        let left = format!(" {}", self.message);
        buf.set_string(area.x, area.y, &left, bg_style);

        let right = format!(" Keys: {} ", self.key_count);
        let right_x = area.x + area.width.saturating_sub(right.len() as u16);
        buf.set_string(right_x, area.y, &right, bg_style.fg(self.colors.dim));
    }
}

/// Centered modal dialog, dismissed by any key
pub struct DialogBox<'a> {
    dialog: &'a Dialog,
    colors: ThemeColors,
}

impl<'a> DialogBox<'a> {
    pub fn new(dialog: &'a Dialog, colors: ThemeColors) -> Self {
        Self { dialog, colors }
    }
}

impl<'a> Widget for DialogBox<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<&str> = self.dialog.body.lines().collect();
        let widest = lines
            .iter()
            .map(|l| l.len())
            .chain(std::iter::once(self.dialog.title.len() + 2))
            .max()
            .unwrap_or(0) as u16;

        let box_area = centered_rect(widest + 6, lines.len() as u16 + 4, area);
        clear_area(box_area, buf, self.colors.bg);

        let block = Block::default()
            .title(format!(" {} ", self.dialog.title))
            .title_style(Style::default().fg(self.colors.accent).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.colors.border))
            .style(Style::default().bg(self.colors.bg));

        let inner = block.inner(box_area);
        block.render(box_area, buf);

        let text_style = Style::default().fg(self.colors.fg).bg(self.colors.bg);
        for (i, line) in lines.iter().enumerate() {
            let y = inner.y + 1 + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            buf.set_string(inner.x + 2, y, line, text_style);
        }

        // Dismissal hint on the bottom border
        let hint = " press any key ";
        let hint_x = box_area.x + (box_area.width / 2).saturating_sub(hint.len() as u16 / 2);
        buf.set_string(
            hint_x,
            box_area.y + box_area.height - 1,
            hint,
            Style::default().fg(self.colors.dim).bg(self.colors.bg),
        );
    }
}

/// Centered filename prompt for the CSV export
pub struct SavePromptBox<'a> {
    prompt: &'a SavePrompt,
    colors: ThemeColors,
}

impl<'a> SavePromptBox<'a> {
    pub fn new(prompt: &'a SavePrompt, colors: ThemeColors) -> Self {
        Self { prompt, colors }
    }
}

impl<'a> Widget for SavePromptBox<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (self.prompt.input.len() as u16 + 10).max(44).min(area.width);
        let box_area = centered_rect(width, 5, area);
        clear_area(box_area, buf, self.colors.bg);

        let block = Block::default()
            .title(" Save CSV ")
            .title_style(Style::default().fg(self.colors.accent).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.colors.border))
            .style(Style::default().bg(self.colors.bg));

        let inner = block.inner(box_area);
        block.render(box_area, buf);

        let input = format!(" {}_", self.prompt.input);
        buf.set_string(
            inner.x + 1,
            inner.y,
            &input,
            Style::default().fg(self.colors.fg).bg(self.colors.bg),
        );

        let hint = " Enter: save | Esc: cancel ";
        let hint_x = box_area.x + (box_area.width / 2).saturating_sub(hint.len() as u16 / 2);
        buf.set_string(
            hint_x,
            box_area.y + box_area.height - 1,
            hint,
            Style::default().fg(self.colors.dim).bg(self.colors.bg),
        );
    }
}

/// A `width` x `height` rect centered inside `area`, clamped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn clear_area(area: Rect, buf: &mut Buffer, bg: ratatui::style::Color) {
    let style = Style::default().bg(bg);
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            buf.set_string(x, y, " ", style);
        }
    }
}
