use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Bumped after every successful mutation; list loaders track it
    pub data_version: RwSignal<u64>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            data_version: RwSignal::new(0),
            left_open: RwSignal::new(true),
        }
    }

    /// Re-fetch server data on the current page
    pub fn refresh(&self) {
        self.data_version.update(|v| *v = v.wrapping_add(1));
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_bumps_version() {
        let ctx = AppGlobalContext::new();
        ctx.refresh();
        ctx.refresh();
        assert_eq!(ctx.data_version.get_untracked(), 2);
    }

    #[test]
    fn test_toggle_left() {
        let ctx = AppGlobalContext::new();
        ctx.toggle_left();
        assert!(!ctx.left_open.get_untracked());
    }
}
