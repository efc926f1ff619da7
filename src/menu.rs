//! Mobile menu toggle and the page scroll lock it holds while open.

/// Something that can suspend and restore page scrolling.
pub trait ScrollAffordance {
    fn set_scroll_enabled(&self, enabled: bool);
}

/// Scrolling stays disabled for as long as the lock is alive.
#[must_use = "scrolling is restored as soon as the lock is dropped"]
pub struct ScrollLock<A: ScrollAffordance> {
    affordance: A,
}

impl<A: ScrollAffordance> ScrollLock<A> {
    pub fn acquire(affordance: A) -> Self {
        affordance.set_scroll_enabled(false);
        Self { affordance }
    }
}

impl<A: ScrollAffordance> Drop for ScrollLock<A> {
    fn drop(&mut self) {
        self.affordance.set_scroll_enabled(true);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }

    /// Lock page scrolling if the menu is open.
    pub fn scroll_lock<A: ScrollAffordance>(self, affordance: A) -> Option<ScrollLock<A>> {
        self.open.then(|| ScrollLock::acquire(affordance))
    }

    pub fn toggle_label(self) -> &'static str {
        if self.open {
            "Close navigation menu"
        } else {
            "Open navigation menu"
        }
    }

    pub fn icon(self) -> &'static str {
        if self.open {
            "✕"
        } else {
            "☰"
        }
    }
}
