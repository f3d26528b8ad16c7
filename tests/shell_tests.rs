#[cfg(test)]
pub mod shell_tests {
    use portfolio::services::shell::*;

    #[test]
    fn test_route_change_closes_menu_and_scrolls_instantly() {
        let mut shell = ShellState::default();
        shell.toggle_menu();
        assert!(shell.menu_open);

        let request = shell.on_route_change();

        assert!(!shell.menu_open);
        assert_eq!(request, ScrollRequest::top(ScrollBehavior::Instant));
        assert_eq!(request.top, 0.0);
    }

    #[test]
    fn test_route_change_with_closed_menu() {
        let mut shell = ShellState::default();
        let request = shell.on_route_change();
        assert!(!shell.menu_open);
        assert_eq!(request.behavior, ScrollBehavior::Instant);
    }

    #[test]
    fn test_back_to_top_is_smooth() {
        let shell = ShellState::default();
        assert_eq!(shell.back_to_top().behavior, ScrollBehavior::Smooth);
    }

    #[test]
    fn test_scrolled_threshold() {
        let mut shell = ShellState::default();

        shell.on_scroll(SCROLL_THRESHOLD);
        assert!(!shell.scrolled);

        shell.on_scroll(11.0);
        assert!(shell.scrolled);

        shell.on_scroll(0.0);
        assert!(!shell.scrolled);
    }

    #[test]
    fn test_scroll_does_not_touch_menu() {
        let mut shell = ShellState::default();
        shell.toggle_menu();
        shell.on_scroll(500.0);
        assert!(shell.menu_open);
    }

    #[test]
    fn test_nav_items_order() {
        let paths: Vec<_> = NAV_ITEMS.iter().map(|item| item.path).collect();
        assert_eq!(paths, vec!["/", "/about", "/projects", "/contact"]);
    }
}
