use crate::{AppState, Effect, Msg, ProcessScope};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FolderPicked(files) => {
            // An empty pick keeps the previous folder and selection.
            state.choose_folder(files);
            Vec::new()
        }
        Msg::FileToggled(name) => {
            state.toggle(&name);
            Vec::new()
        }
        Msg::SelectAllClicked => {
            state.select_all();
            Vec::new()
        }
        Msg::DeselectAllClicked => {
            state.deselect_all();
            Vec::new()
        }
        Msg::ModelSelected(model) => {
            state.set_model(model);
            Vec::new()
        }
        Msg::ProcessAllClicked => process(&state, ProcessScope::All),
        Msg::ProcessSelectedClicked => process(&state, ProcessScope::Selected),
        Msg::FileStatusChanged { path, status } => {
            state.set_status(&path, status);
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}

// Disabled buttons produce no effect.
fn process(state: &AppState, scope: ProcessScope) -> Vec<Effect> {
    state
        .process_request(scope)
        .map(Effect::Process)
        .into_iter()
        .collect()
}
