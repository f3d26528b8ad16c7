//! Transient layout state: mobile menu and the header's "scrolled" look.

use std::time::Duration;

/// Scroll offset past which the header switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 10.0;

/// Quiet period the scroll listener waits before sampling `scrollY`.
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub left: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    pub fn top(behavior: ScrollBehavior) -> Self {
        Self {
            top: 0.0,
            left: 0.0,
            behavior,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ShellState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl ShellState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > SCROLL_THRESHOLD;
    }

    /// Navigation closes the menu and jumps to the top without animation.
    pub fn on_route_change(&mut self) -> ScrollRequest {
        self.close_menu();
        ScrollRequest::top(ScrollBehavior::Instant)
    }

    pub fn back_to_top(&self) -> ScrollRequest {
        ScrollRequest::top(ScrollBehavior::Smooth)
    }
}

/// Whether a nav link pointing at `target` is highlighted on `pathname`.
/// The home link only matches exactly, every other link matches its subtree.
pub fn is_active(target: &str, pathname: &str) -> bool {
    if target == "/" {
        pathname == "/"
    } else {
        pathname.starts_with(target)
    }
}

/// Navigation entries shown in the header, in display order.
pub static NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        path: "/",
        label: "Home",
        icon: "fas fa-home",
    },
    NavItem {
        path: "/about",
        label: "About",
        icon: "fas fa-user",
    },
    NavItem {
        path: "/projects",
        label: "Projects",
        icon: "fas fa-code",
    },
    NavItem {
        path: "/contact",
        label: "Contact",
        icon: "fas fa-envelope",
    },
];

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active_home_is_exact() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/about"));
    }

    #[test]
    fn test_is_active_prefix() {
        assert!(is_active("/projects", "/projects"));
        assert!(is_active("/projects", "/projects/salemate"));
        assert!(!is_active("/projects", "/contact"));
    }
}
