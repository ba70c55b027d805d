use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{nav::NavMsg, reveal::RevealMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::route::Route,
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Only the reveal consumes time, and only while it runs.
        RawMsg::Tick if state.reveal.is_animating() => {
            vec![Msg::Reveal(RevealMsg::Tick(state.reveal.step))]
        }
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Ctrl-C always quits, whatever the bindings say.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    let Some(action) = state.config.config.keybindings.action_for(&key) else {
        return vec![];
    };

    if state.nav.menu.open {
        translate_menu_action(action)
    } else {
        translate_action_to_msg(action, state)
    }
}

/// While the menu is open, movement keys drive the menu cursor.
fn translate_menu_action(action: Action) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::Up | Action::SelectPrev => vec![Msg::Nav(NavMsg::MenuUp)],
        Action::Down | Action::SelectNext => vec![Msg::Nav(NavMsg::MenuDown)],
        Action::Confirm => vec![Msg::Nav(NavMsg::MenuSelect)],
        Action::ToggleMenu | Action::CloseMenu => vec![Msg::Nav(NavMsg::CloseMenu)],
        _ => vec![],
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::NextPage => vec![Msg::Nav(NavMsg::NextPage)],
        Action::PrevPage => vec![Msg::Nav(NavMsg::PrevPage)],
        Action::GoHome => vec![Msg::Nav(NavMsg::Navigate(Route::Home))],
        Action::GoSolar => vec![Msg::Nav(NavMsg::Navigate(Route::Solar))],
        Action::GoWind => vec![Msg::Nav(NavMsg::Navigate(Route::Wind))],
        Action::GoDmfc => vec![Msg::Nav(NavMsg::Navigate(Route::Dmfc))],
        Action::ToggleMenu => vec![Msg::Nav(NavMsg::ToggleMenu)],
        // Esc outside the menu dismisses the status message.
        Action::CloseMenu if state.system.status_message.is_some() => {
            vec![Msg::System(SystemMsg::ClearStatusMessage)]
        }
        Action::CloseMenu => vec![],
        Action::Up => vec![Msg::Nav(NavMsg::ScrollUp)],
        Action::Down => vec![Msg::Nav(NavMsg::ScrollDown)],
        Action::SelectNext => vec![Msg::Nav(NavMsg::SelectNext)],
        Action::SelectPrev => vec![Msg::Nav(NavMsg::SelectPrev)],
        Action::Confirm => translate_confirm(state),
        Action::SkipReveal => vec![Msg::Reveal(RevealMsg::Skip)],
        Action::ReplayReveal => vec![Msg::Reveal(RevealMsg::Replay)],
    }
}

/// On the home page, Enter opens the page of the highlighted alternative.
fn translate_confirm(state: &AppState) -> Vec<Msg> {
    if state.nav.route != Route::Home {
        return vec![];
    }
    state
        .dataset
        .alternatives
        .get(state.nav.selected)
        .and_then(|alt| {
            Route::technologies()
                .into_iter()
                .find(|route| route.alternative_id() == Some(alt.id.as_str()))
        })
        .map(|route| vec![Msg::Nav(NavMsg::Navigate(route))])
        .unwrap_or_default()
}
