//! Transient notifications shown in the corner of the page.

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Success,
}

impl ToastVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastVariant::Default => "toast",
            ToastVariant::Success => "toast toast-success",
        }
    }
}

/// What to show: title, optional description and severity
#[derive(Clone, PartialEq, Debug)]
pub struct ToastSpec {
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub spec: ToastSpec,
}

#[derive(Clone, Debug)]
pub enum ToastAction {
    Show(ToastSpec),
    Dismiss(u64),
    DismissAll,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
    limit: usize,
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ToastState {
    pub fn new(limit: usize) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            limit: limit.max(1),
        }
    }

    /// Show a toast, newest first, dropping the oldest past the limit.
    /// Returns the id used to dismiss it later.
    pub fn push(&mut self, spec: ToastSpec) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.insert(0, Toast { id, spec });
        self.toasts.truncate(self.limit);
        id
    }

    /// Returns false when the toast was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn reduce_in_place(&mut self, action: ToastAction) {
        match action {
            ToastAction::Show(spec) => {
                self.push(spec);
            }
            ToastAction::Dismiss(id) => {
                self.dismiss(id);
            }
            ToastAction::DismissAll => self.toasts.clear(),
        }
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(title: &str) -> ToastSpec {
        ToastSpec {
            title: title.to_string(),
            description: None,
            variant: ToastVariant::Default,
        }
    }

    #[test]
    fn test_new_toast_replaces_previous_at_limit_one() {
        let mut state = ToastState::new(1);
        state.push(spec("first"));
        let second = state.push(spec("second"));

        assert_eq!(state.visible().len(), 1);
        assert_eq!(state.visible()[0].id, second);
        assert_eq!(state.visible()[0].spec.title, "second");
    }

    #[test]
    fn test_newest_first_with_larger_limit() {
        let mut state = ToastState::new(3);
        for title in ["a", "b", "c", "d"] {
            state.push(spec(title));
        }
        let titles: Vec<&str> = state.visible().iter().map(|t| t.spec.title.as_str()).collect();
        assert_eq!(titles, vec!["d", "c", "b"]);
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut state = ToastState::new(2);
        let first = state.push(spec("first"));
        let second = state.push(spec("second"));

        assert!(state.dismiss(first));
        assert!(!state.dismiss(first));
        assert_eq!(state.visible().len(), 1);
        assert_eq!(state.visible()[0].id, second);

        state.reduce_in_place(ToastAction::DismissAll);
        assert!(state.visible().is_empty());
    }

    #[test]
    fn test_variant_classes() {
        assert_eq!(ToastVariant::default().css_class(), "toast");
        assert_eq!(ToastVariant::Success.css_class(), "toast toast-success");
    }

    #[test]
    fn test_zero_limit_is_raised_to_one() {
        let mut state = ToastState::new(0);
        state.reduce_in_place(ToastAction::Show(spec("only")));
        assert_eq!(state.visible().len(), 1);
    }
}
