//! UI side effects triggered by form operations.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// Everything a form does to its surroundings besides the network call
pub trait FormEffects: Send + Sync {
    /// Reload data shown by the current view
    fn refresh(&self);

    /// Move to another admin view
    fn navigate(&self, path: &str);

    fn toast(&self, toast: Toast);

    fn copy_text(&self, text: &str);
}
