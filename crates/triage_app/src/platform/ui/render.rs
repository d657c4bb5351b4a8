use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use triage_core::{AppViewModel, FileRowView, FileStatus, PROCESS_ALL_LABEL};

use super::constants::*;
use super::layout::{split, split_actions};
use super::{InputMode, UiState};

pub fn render(f: &mut Frame, view: &AppViewModel, ui: &mut UiState) {
    let regions = split(f.area());

    render_header(f, regions.header);
    render_folder(f, regions.folder, view, &ui.mode);
    render_model(f, regions.model, view);
    render_files(f, regions.files, view, ui);
    render_actions(f, regions.actions, view);
    render_status(f, regions.status, ui);
}

fn render_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                TAB_TRIAGE,
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::raw("  "),
            Span::raw(TAB_INFORMATION),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_folder(f: &mut Frame, area: Rect, view: &AppViewModel, mode: &InputMode) {
    let block = Block::default().borders(Borders::ALL).title(UPLOAD_HEADING);
    let line = match mode {
        InputMode::FolderPrompt { input } => Line::from(vec![
            Span::styled(
                format!("{FOLDER_PROMPT}: "),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(input.as_str()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
        InputMode::Browse => Line::from(vec![
            Span::styled(
                format!("[o] {CHOOSE_FOLDER}"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(view.folder_label.as_str(), Style::default().fg(Color::Gray)),
        ]),
    };
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_model(f: &mut Frame, area: Rect, view: &AppViewModel) {
    let block = Block::default().borders(Borders::ALL).title("Model");
    let line = Line::from(vec![
        Span::raw("[m] "),
        Span::styled(
            view.model.label(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_files(f: &mut Frame, area: Rect, view: &AppViewModel, ui: &mut UiState) {
    if !view.show_file_list {
        f.render_widget(Block::default(), area);
        return;
    }

    let title = Line::from(vec![
        Span::styled(FILES_HEADING, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled(format!("[a] {SELECT_ALL}"), Style::default().fg(Color::Blue)),
        Span::raw(" "),
        Span::styled(format!("[d] {DESELECT_ALL}"), Style::default().fg(Color::Blue)),
    ]);
    let items: Vec<ListItem> = view.files.iter().map(file_row).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray));
    f.render_stateful_widget(list, area, &mut ui.list);
}

fn file_row(row: &FileRowView) -> ListItem<'static> {
    let checkbox = if row.selected { CHECKED } else { UNCHECKED };
    let mut spans = vec![
        Span::raw(format!("{checkbox} ")),
        Span::styled(row.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(row.size_label.clone(), Style::default().fg(Color::Gray)),
    ];
    if let Some(indicator) = status_indicator(row.status) {
        spans.push(Span::raw("  "));
        spans.push(indicator);
    }
    ListItem::new(Line::from(spans))
}

// Pending has no indicator.
fn status_indicator(status: FileStatus) -> Option<Span<'static>> {
    match status {
        FileStatus::Pending => None,
        FileStatus::Processing => Some(Span::styled(
            STATUS_PROCESSING,
            Style::default().fg(Color::Yellow),
        )),
        FileStatus::Completed => Some(Span::styled(
            STATUS_COMPLETED,
            Style::default().fg(Color::Green),
        )),
        FileStatus::Error => Some(Span::styled(
            STATUS_ERROR,
            Style::default().fg(Color::Red),
        )),
    }
}

fn render_actions(f: &mut Frame, area: Rect, view: &AppViewModel) {
    let (left, right) = split_actions(area);
    f.render_widget(
        button(&format!("[p] {PROCESS_ALL_LABEL}"), view.process_all_enabled),
        left,
    );
    f.render_widget(
        button(
            &format!("[s] {}", view.process_selected_label),
            view.process_selected_enabled,
        ),
        right,
    );
}

fn button(label: &str, enabled: bool) -> Paragraph<'static> {
    let style = if enabled {
        Style::default().fg(Color::Blue)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };
    Paragraph::new(Line::from(Span::styled(label.to_string(), style)))
        .block(Block::default().borders(Borders::ALL).border_style(style))
}

fn render_status(f: &mut Frame, area: Rect, ui: &UiState) {
    let line = match &ui.notice {
        Some(notice) => Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(HELP_BROWSE, Style::default().fg(Color::Gray))),
    };
    f.render_widget(Paragraph::new(line), area);
}
