//! Rendering for the project picker popup.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::candidates::Candidate;
use crate::config::DialogConfig;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BODY_TEXT, HINT_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
};

use super::state::PickerState;

const DIALOG_WIDTH: u16 = 60;

const KEY_HINTS: &str = " ↑↓ select · Enter confirm · Esc cancel · Ctrl+U clear";

/// Borders (2) + name field (3) + status line (1) + key hints (1).
const CHROME_HEIGHT: u16 = 7;

/// Render the picker if it is open. Closed states draw nothing.
pub fn render_picker(frame: &mut Frame, state: &PickerState, config: &DialogConfig) {
    let PickerState::Open {
        candidates,
        text,
        selected,
        scroll_offset,
        visible_rows,
        invalid,
    } = state
    else {
        return;
    };

    let list_rows = u16::try_from(candidates.len().clamp(1, *visible_rows)).unwrap_or(u16::MAX);
    let area = centered_rect(
        DIALOG_WIDTH,
        CHROME_HEIGHT.saturating_add(list_rows),
        frame.area(),
    );

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", config.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [field_area, status_area, list_area, hints_area] = sections(inner);

    render_field(frame, field_area, text, *invalid);
    render_status(frame, status_area, state, *invalid, config);
    render_list(
        frame,
        list_area,
        candidates,
        *selected,
        *scroll_offset,
        *visible_rows,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            KEY_HINTS,
            Style::default().fg(HINT_TEXT).add_modifier(Modifier::DIM),
        ))),
        hints_area,
    );
}

fn sections(inner: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

fn render_field(frame: &mut Frame, area: Rect, text: &str, invalid: bool) {
    let border = if invalid { STATUS_ERROR } else { POPUP_BORDER };
    let block = Block::default()
        .title(" Project name ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);

    let visible = tail(text, inner.width.saturating_sub(1) as usize);
    let cursor_x = inner.x.saturating_add(u16::try_from(visible.width()).unwrap_or(u16::MAX));

    frame.render_widget(
        Paragraph::new(Span::styled(visible, Style::default().fg(BODY_TEXT))).block(block),
        area,
    );
    if inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

fn render_status(
    frame: &mut Frame,
    area: Rect,
    state: &PickerState,
    invalid: bool,
    config: &DialogConfig,
) {
    let line = if invalid {
        Line::from(Span::styled(
            format!(" {}", config.error_tooltip),
            Style::default().fg(STATUS_ERROR),
        ))
    } else if let Some(candidate) = state.selected_candidate() {
        Line::from(Span::styled(
            format!(" Existing project #{}", candidate.id),
            Style::default().fg(STATUS_OK),
        ))
    } else if state.text().is_some_and(|t| !t.is_empty()) {
        Line::from(Span::styled(
            " New project",
            Style::default().fg(HINT_TEXT),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    candidates: &[Candidate],
    selected: Option<usize>,
    scroll_offset: usize,
    visible_rows: usize,
) {
    if candidates.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                " (no existing projects)",
                Style::default().fg(HINT_TEXT),
            )),
            area,
        );
        return;
    }

    // A short terminal can leave fewer rows than configured; keep the
    // selection inside what is actually drawn.
    let rows = visible_rows.min(area.height as usize).max(1);
    let start = match selected {
        Some(index) if index < scroll_offset => index,
        Some(index) if index >= scroll_offset + rows => index + 1 - rows,
        _ => scroll_offset,
    };

    let lines: Vec<Line> = candidates
        .iter()
        .enumerate()
        .skip(start)
        .take(rows)
        .map(|(index, candidate)| {
            if selected == Some(index) {
                Line::from(Span::styled(
                    format!(" › {}", candidate.name),
                    Style::default()
                        .fg(BODY_TEXT)
                        .bg(ACTIVE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("   {}", candidate.name),
                    Style::default().fg(BODY_TEXT),
                ))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Longest suffix of `text` at most `max_width` columns wide, so the cursor
/// end stays visible.
fn tail(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }
    let mut width = 0;
    let mut start = text.len();
    for (offset, ch) in text.char_indices().rev() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = offset;
    }
    &text[start..]
}
