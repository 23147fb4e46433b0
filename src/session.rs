//! Session Module — tab bookkeeping and the click dispatch boundary.
//!
//! Responsibilities:
//! - Tab list with one active tab (sequential ids, never recycled)
//! - Liveness query for the stale-click check
//! - Click dispatch: invoke a button's action exactly once, or silently
//!   drop it when the owning tab is no longer active

use std::rc::Rc;

use crate::types::Viewport;
use crate::width::WidthOracle;

pub type TabId = u32;

/// A display tab: anything that can render itself into a viewport.
pub trait Tab {
    fn title(&self) -> &str;

    fn render(&self, viewport: Viewport, oracle: &dyn WidthOracle) -> Result<String, String>;

    /// The click action of the tab's `index`-th button, if any.
    /// Tabs without buttons keep the default.
    fn button_action(&self, _index: usize) -> Option<Rc<dyn ButtonAction>> {
        None
    }
}

/// A button's reaction to a click. Receives the session so it can replace
/// tabs or otherwise mutate display state.
pub trait ButtonAction {
    fn on_click(&self, session: &mut Session);
}

/// Replaces the active tab with a newly constructed one.
pub struct LaunchTabAction {
    factory: Box<dyn Fn() -> Box<dyn Tab>>,
}

impl LaunchTabAction {
    pub fn new(factory: impl Fn() -> Box<dyn Tab> + 'static) -> Self {
        Self {
            factory: Box::new(factory),
        }
    }
}

impl ButtonAction for LaunchTabAction {
    fn on_click(&self, session: &mut Session) {
        let old = session.active_id();
        session.add_tab((self.factory)(), true);
        if let Some(old) = old {
            session.remove_tab(old);
        }
    }
}

/// One display session: the tabs it owns and which one is showing.
pub struct Session {
    tabs: Vec<(TabId, Box<dyn Tab>)>,
    active: Option<TabId>,
    next_id: TabId,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
            next_id: 1,
        }
    }

    pub fn add_tab(&mut self, tab: Box<dyn Tab>, activate: bool) -> TabId {
        let id = self.next_id;
        self.next_id += 1;
        self.tabs.push((id, tab));
        if activate || self.active.is_none() {
            self.active = Some(id);
        }
        id
    }

    /// Remove a tab. Removing the active tab leaves no tab active.
    pub fn remove_tab(&mut self, id: TabId) {
        self.tabs.retain(|(tab_id, _)| *tab_id != id);
        if self.active == Some(id) {
            self.active = None;
        }
    }

    pub fn tab(&self, id: TabId) -> Option<&dyn Tab> {
        self.tabs
            .iter()
            .find(|(tab_id, _)| *tab_id == id)
            .map(|(_, tab)| tab.as_ref())
    }

    pub fn active_id(&self) -> Option<TabId> {
        self.active
    }

    pub fn active_tab(&self) -> Option<&dyn Tab> {
        self.active.and_then(|id| self.tab(id))
    }

    pub fn is_active(&self, id: TabId) -> bool {
        self.active == Some(id)
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Dispatch a click on button `index` of tab `owner`.
    ///
    /// A click for a tab that is no longer the active one is an expired
    /// link: it is dropped without effect. A live click invokes the
    /// button's action exactly once.
    pub fn click(&mut self, owner: TabId, index: usize) {
        if !self.is_active(owner) {
            return; // Expired link
        }
        let action = match self.tab(owner).and_then(|tab| tab.button_action(index)) {
            Some(action) => action,
            None => return,
        };
        action.on_click(self);
    }
}
