use crate::color::Theme;

/// Handle returned by [`ThemeSignal::subscribe`], used to tear the subscription down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type ThemeHandler = Box<dyn FnMut(Theme)>;

/// Watches the external "dark mode active" marker and notifies subscribers when it flips.
///
/// The marker is owned by whoever toggles it (egui's theme preference in this app).
/// This type only reads it.
pub struct ThemeSignal {
    current: Option<Theme>,
    handlers: Vec<(SubscriptionId, ThemeHandler)>,
    next_id: u64,
}

impl std::fmt::Debug for ThemeSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeSignal")
            .field("current", &self.current)
            .field("handlers", &format!("<{} handlers>", self.handlers.len()))
            .finish()
    }
}

impl Default for ThemeSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeSignal {
    pub fn new() -> Self {
        Self {
            current: None,
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Last observed theme, `None` before the first observation.
    pub fn current(&self) -> Option<Theme> {
        self.current
    }

    pub fn subscribe(&mut self, handler: impl FnMut(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }

    /// Feeds the marker's current value.
    ///
    /// Returns the derived theme on the first observation and on every change,
    /// notifying subscribers in both cases. Returns `None` when nothing changed.
    pub fn observe(&mut self, is_dark: bool) -> Option<Theme> {
        let theme = Theme::from_dark_mode(is_dark);
        if self.current == Some(theme) {
            return None;
        }

        self.current = Some(theme);
        for (_, handler) in &mut self.handlers {
            handler(theme);
        }
        Some(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_first_observation_reports() {
        let mut signal = ThemeSignal::new();
        assert_eq!(signal.current(), None);
        assert_eq!(signal.observe(false), Some(Theme::Light));
        assert_eq!(signal.observe(false), None);
        assert_eq!(signal.observe(true), Some(Theme::Dark));
        assert_eq!(signal.current(), Some(Theme::Dark));
    }

    #[test]
    fn test_subscribers_see_changes_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut signal = ThemeSignal::new();
        let sink = seen.clone();
        signal.subscribe(move |theme| sink.borrow_mut().push(theme));

        signal.observe(true);
        signal.observe(true);
        signal.observe(false);

        assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut signal = ThemeSignal::new();
        let sink = count.clone();
        let id = signal.subscribe(move |_| *sink.borrow_mut() += 1);

        signal.observe(true);
        assert!(signal.unsubscribe(id));
        assert!(!signal.unsubscribe(id));
        signal.observe(false);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(signal.subscriber_count(), 0);
    }
}
