use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use triage_core::{update, AppState, AppViewModel, ModelChoice, Msg, PickedFile};
use triage_engine::{pick_folder, ListedFile, PickerSettings, Processor};
use triage_logging::{triage_debug, triage_info, triage_warn};

use super::effects::{EffectRunner, RunnerEvent};
use super::ui::{self, input::Action, InputMode, UiState};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Owns the state machine and everything needed to drive it from the UI.
pub struct Controller {
    state: AppState,
    view: AppViewModel,
    runner: EffectRunner,
    picker: PickerSettings,
    pub ui: UiState,
}

impl Controller {
    pub fn new(model: ModelChoice, picker: PickerSettings, processor: Arc<dyn Processor>) -> Self {
        let state = AppState::with_model(model);
        let view = state.view();
        Self {
            state,
            view,
            runner: EffectRunner::new(processor),
            picker,
            ui: UiState::default(),
        }
    }

    pub fn view(&self) -> &AppViewModel {
        &self.view
    }

    pub fn dispatch_msg(&mut self, msg: Msg) {
        if let Some(kind) = msg_kind(&msg) {
            triage_debug!("dispatch {}", kind);
        }
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
            self.ui.clamp_cursor(self.view.files.len());
        }
        self.state = state;
        self.runner.enqueue(effects);
    }

    pub fn process_pending_messages(&mut self) {
        for event in self.runner.drain() {
            match event {
                RunnerEvent::Msg(msg) => self.dispatch_msg(msg),
                RunnerEvent::Notice(text) => self.ui.notice = Some(text),
            }
        }
    }

    /// Lists `root` and feeds the result to the state machine.
    ///
    /// A failed or empty pick keeps the previous listing.
    pub fn pick(&mut self, root: &Path) {
        match pick_folder(root, &self.picker) {
            Ok(files) if files.is_empty() => {
                triage_info!("Picked folder {:?} has no files", root);
                self.ui.notice = Some(format!("{} contains no files", root.display()));
                self.dispatch_msg(Msg::FolderPicked(Vec::new()));
            }
            Ok(files) => {
                self.ui.notice = None;
                let picked = files.into_iter().map(to_picked).collect();
                self.dispatch_msg(Msg::FolderPicked(picked));
            }
            Err(err) => {
                triage_warn!("Folder pick failed: {}", err);
                self.ui.notice = Some(err.to_string());
            }
        }
    }

    /// Handles one key action. Any notice from earlier is dropped first.
    pub fn apply(&mut self, action: Action) {
        self.ui.notice = None;
        match action {
            Action::Quit => self.ui.should_quit = true,
            Action::OpenFolderPrompt => {
                self.ui.mode = InputMode::FolderPrompt {
                    input: String::new(),
                };
            }
            Action::CursorUp => self.ui.move_cursor(-1, self.view.files.len()),
            Action::CursorDown => self.ui.move_cursor(1, self.view.files.len()),
            Action::ToggleAtCursor => {
                let name = self
                    .ui
                    .cursor()
                    .and_then(|idx| self.view.files.get(idx))
                    .map(|row| row.name.clone());
                if let Some(name) = name {
                    self.dispatch_msg(Msg::FileToggled(name));
                }
            }
            Action::SelectAll => self.dispatch_msg(Msg::SelectAllClicked),
            Action::DeselectAll => self.dispatch_msg(Msg::DeselectAllClicked),
            Action::CycleModel => self.dispatch_msg(Msg::ModelSelected(self.view.model.next())),
            Action::ProcessAll => self.dispatch_msg(Msg::ProcessAllClicked),
            Action::ProcessSelected => self.dispatch_msg(Msg::ProcessSelectedClicked),
            Action::PromptChar(c) => {
                if let InputMode::FolderPrompt { input } = &mut self.ui.mode {
                    input.push(c);
                }
            }
            Action::PromptBackspace => {
                if let InputMode::FolderPrompt { input } = &mut self.ui.mode {
                    input.pop();
                }
            }
            Action::PromptCancel => self.ui.mode = InputMode::Browse,
            Action::PromptSubmit => {
                let mode = std::mem::take(&mut self.ui.mode);
                if let InputMode::FolderPrompt { input } = mode {
                    let trimmed = input.trim();
                    if !trimmed.is_empty() {
                        self.pick(&PathBuf::from(trimmed));
                    }
                }
            }
        }
    }
}

fn to_picked(file: ListedFile) -> PickedFile {
    PickedFile {
        name: file.name,
        relative_path: file.relative_path,
        size: file.size,
        mime_type: file.mime_type,
    }
}

// Folder listings can be large; log only the variant. Ticks are not logged.
fn msg_kind(msg: &Msg) -> Option<&'static str> {
    let kind = match msg {
        Msg::FolderPicked(_) => "FolderPicked",
        Msg::FileToggled(_) => "FileToggled",
        Msg::SelectAllClicked => "SelectAllClicked",
        Msg::DeselectAllClicked => "DeselectAllClicked",
        Msg::ModelSelected(_) => "ModelSelected",
        Msg::ProcessAllClicked => "ProcessAllClicked",
        Msg::ProcessSelectedClicked => "ProcessSelectedClicked",
        Msg::FileStatusChanged { .. } => "FileStatusChanged",
        Msg::Tick => return None,
    };
    Some(kind)
}

/// Runs the interactive terminal UI until the user quits.
pub fn run_app(mut controller: Controller) -> Result<()> {
    let mut terminal = setup_terminal().context("failed to initialise terminal")?;
    let result = event_loop(&mut terminal, &mut controller);
    restore_terminal(&mut terminal).context("failed to restore terminal")?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    controller: &mut Controller,
) -> Result<()> {
    while !controller.ui.should_quit {
        controller.process_pending_messages();
        let view = controller.view().clone();
        terminal.draw(|f| ui::render::render(f, &view, &mut controller.ui))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                let prompt_open = matches!(controller.ui.mode, InputMode::FolderPrompt { .. });
                if let Some(action) = ui::input::map_key(key, prompt_open) {
                    controller.apply(action);
                }
            }
        } else {
            controller.dispatch_msg(Msg::Tick);
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Prints the listing for `root` without starting the UI.
pub fn print_listing(controller: &mut Controller, root: &Path) -> Result<()> {
    let files = pick_folder(root, &controller.picker)
        .with_context(|| format!("failed to list {}", root.display()))?;
    controller.dispatch_msg(Msg::FolderPicked(files.into_iter().map(to_picked).collect()));

    let view = controller.view();
    println!("Folder: {}", view.folder_label);
    println!("Model:  {}", view.model.label());
    for row in &view.files {
        println!("{}\t{}", row.path, row.size_label);
    }
    println!("{} file(s)", view.files.len());
    Ok(())
}
