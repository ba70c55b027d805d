use crate::{
    core::{cmd::Cmd, msg::nav::NavMsg},
    domain::route::Route,
};

/// Rows moved per scroll step.
pub const SCROLL_STEP: u16 = 3;

/// The technology menu. Open/closed and the cursor are its only state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
    pub cursor: usize,
}

impl MenuState {
    /// Entries of the menu, in display order.
    pub fn entries() -> [Route; 3] {
        Route::technologies()
    }

    pub fn highlighted(&self) -> Route {
        let entries = Self::entries();
        entries[self.cursor % entries.len()]
    }
}

/// Navigation state: current page, menu, highlighted alternative and scroll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    pub route: Route,
    pub menu: MenuState,
    /// Index into the dataset's alternatives, shown in the chart detail line.
    pub selected: usize,
    pub scroll: u16,
    alternative_count: usize,
}

impl NavState {
    pub fn new(route: Route, alternative_count: usize) -> Self {
        Self {
            route,
            alternative_count,
            ..Default::default()
        }
    }

    pub fn update(&mut self, msg: NavMsg) -> Vec<Cmd> {
        match msg {
            NavMsg::Navigate(route) => self.go(route),
            NavMsg::NextPage => self.go(self.route.next()),
            NavMsg::PrevPage => self.go(self.route.prev()),

            NavMsg::ToggleMenu => {
                if self.menu.open {
                    self.menu.open = false;
                } else {
                    self.menu = MenuState {
                        open: true,
                        cursor: MenuState::entries()
                            .iter()
                            .position(|r| *r == self.route)
                            .unwrap_or(0),
                    };
                }
                vec![]
            }
            NavMsg::CloseMenu => {
                self.menu.open = false;
                vec![]
            }
            NavMsg::MenuUp if self.menu.open => {
                let n = MenuState::entries().len();
                self.menu.cursor = (self.menu.cursor + n - 1) % n;
                vec![]
            }
            NavMsg::MenuDown if self.menu.open => {
                let n = MenuState::entries().len();
                self.menu.cursor = (self.menu.cursor + 1) % n;
                vec![]
            }
            NavMsg::MenuSelect if self.menu.open => {
                let route = self.menu.highlighted();
                self.menu.open = false;
                self.go(route)
            }
            NavMsg::MenuUp | NavMsg::MenuDown | NavMsg::MenuSelect => vec![],

            NavMsg::SelectNext => {
                if self.alternative_count > 0 {
                    self.selected = (self.selected + 1) % self.alternative_count;
                }
                vec![]
            }
            NavMsg::SelectPrev => {
                if self.alternative_count > 0 {
                    self.selected =
                        (self.selected + self.alternative_count - 1) % self.alternative_count;
                }
                vec![]
            }

            NavMsg::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(SCROLL_STEP);
                vec![]
            }
            NavMsg::ScrollDown => {
                self.scroll = self.scroll.saturating_add(SCROLL_STEP);
                vec![]
            }
            NavMsg::ScrollToTop => {
                self.scroll = 0;
                vec![]
            }
        }
    }

    fn go(&mut self, route: Route) -> Vec<Cmd> {
        if route == self.route {
            return vec![];
        }
        self.route = route;
        self.menu.open = false;
        self.scroll = 0;
        vec![Cmd::log_info(format!("navigated to {}", route.path()))]
    }
}
