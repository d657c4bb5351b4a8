use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub folder: Rect,
    pub model: Rect,
    pub files: Rect,
    pub actions: Rect,
    pub status: Rect,
}

pub fn split(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // title, subtitle, tabs
            Constraint::Length(3), // folder picker
            Constraint::Length(3), // model selector
            Constraint::Min(3),    // file list
            Constraint::Length(3), // action bar
            Constraint::Length(1), // status line
        ])
        .split(area);

    Regions {
        header: chunks[0],
        folder: chunks[1],
        model: chunks[2],
        files: chunks[3],
        actions: chunks[4],
        status: chunks[5],
    }
}

/// Two equal halves for the action buttons.
pub fn split_actions(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (chunks[0], chunks[1])
}
