use crate::{
    core::cmd::Cmd,
    core::msg::{nav::NavMsg, Msg},
    core::state::AppState,
    presentation::pages,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            clamp_scroll(&mut state);
            (state, commands)
        }

        // Navigation messages (delegated to NavState)
        Msg::Nav(nav_msg) => {
            let previous = state.nav.route;
            let is_scroll = matches!(nav_msg, NavMsg::ScrollDown);
            let commands = state.nav.update(nav_msg);
            if state.nav.route != previous {
                state.reveal.restart(state.nav.route);
            }
            if is_scroll {
                clamp_scroll(&mut state);
            }
            (state, commands)
        }

        // Reveal messages (delegated to RevealState)
        Msg::Reveal(reveal_msg) => {
            let commands = state.reveal.update(reveal_msg, state.nav.route);
            (state, commands)
        }
    }
}

fn clamp_scroll(state: &mut AppState) {
    let (width, height) = state.system.viewport;
    if width == 0 || height == 0 {
        return;
    }
    let max = pages::max_scroll(state.nav.route, &state.dataset, width, height);
    state.nav.scroll = state.nav.scroll.min(max);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::{
        core::msg::{reveal::RevealMsg, system::SystemMsg},
        domain::{
            dataset::{fixtures::dataset, Dataset},
            reveal::Section,
            route::Route,
        },
        infrastructure::config::Config,
    };

    #[fixture]
    fn state(dataset: Dataset) -> AppState {
        AppState::new(Arc::new(dataset), Config::default(), Route::Home, 10.0)
    }

    #[rstest]
    fn test_quit(state: AppState) {
        let (state, cmds) = update(Msg::System(SystemMsg::Quit), state);
        assert!(state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[rstest]
    fn test_navigation_restarts_reveal(state: AppState) {
        let (state, _) = update(Msg::Reveal(RevealMsg::Skip), state);
        assert!(!state.reveal.is_animating());

        let (state, cmds) = update(Msg::Nav(NavMsg::Navigate(Route::Solar)), state);
        assert_eq!(state.nav.route, Route::Solar);
        assert!(state.reveal.is_animating());
        assert_eq!(state.reveal.progress(Section::Header), 0.0);
        assert_eq!(cmds, vec![Cmd::log_info("navigated to /solar")]);
    }

    #[rstest]
    fn test_same_route_keeps_reveal(state: AppState) {
        let (state, _) = update(Msg::Reveal(RevealMsg::Tick(Duration::from_millis(500))), state);
        let (state, cmds) = update(Msg::Nav(NavMsg::Navigate(Route::Home)), state);
        assert!(cmds.is_empty());
        assert_eq!(state.reveal.clock.elapsed(), Duration::from_millis(500));
    }

    #[rstest]
    fn test_menu_choice_navigates_and_closes(state: AppState) {
        let (state, _) = update(Msg::Nav(NavMsg::ToggleMenu), state);
        let (state, _) = update(Msg::Nav(NavMsg::MenuDown), state);
        let (state, _) = update(Msg::Nav(NavMsg::MenuSelect), state);
        assert_eq!(state.nav.route, Route::Wind);
        assert!(!state.nav.menu.open);
    }

    #[rstest]
    fn test_scroll_is_clamped_to_page(state: AppState) {
        let (mut state, _) = update(Msg::System(SystemMsg::Resize(200, 400)), state);
        for _ in 0..10 {
            state = update(Msg::Nav(NavMsg::ScrollDown), state).0;
        }
        assert_eq!(state.nav.scroll, 0);
    }
}
