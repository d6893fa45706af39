use leptos::prelude::*;

use crate::shared::form_controller::{Toast, ToastKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

/// Stack of transient notifications, newest last.
#[derive(Clone, Copy)]
pub struct ToastService {
    entries: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
    limit: usize,
    timeout_ms: u32,
}

impl ToastService {
    pub fn new(limit: usize, timeout_ms: u32) -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
            limit: limit.max(1),
            timeout_ms,
        }
    }

    /// Add a toast, dropping the oldest ones past the limit
    pub fn push(&self, toast: Toast) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        let limit = self.limit;
        self.entries.update(|entries| {
            entries.push(ToastEntry { id, toast });
            while entries.len() > limit {
                entries.remove(0);
            }
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.entries.update(|entries| entries.retain(|entry| entry.id != id));
    }

    pub fn entries(&self) -> Vec<ToastEntry> {
        self.entries.get()
    }

    /// Push and schedule auto-dismiss
    pub fn show(&self, toast: Toast) {
        let id = self.push(toast);
        let this = *self;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(this.timeout_ms).await;
            this.dismiss(id);
        });
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div class="toaster">
            <For
                each=move || toasts.entries()
                key=|entry| entry.id
                children=move |entry: ToastEntry| {
                    let id = entry.id;
                    let class = match entry.toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| toasts.dismiss(id)>
                            {entry.toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_drops_oldest() {
        let toasts = ToastService::new(2, 1000);
        toasts.push(Toast::success("um"));
        toasts.push(Toast::success("dois"));
        toasts.push(Toast::error("três"));

        let messages: Vec<String> = toasts
            .entries
            .get_untracked()
            .into_iter()
            .map(|entry| entry.toast.message)
            .collect();
        assert_eq!(messages, vec!["dois".to_string(), "três".to_string()]);
    }

    #[test]
    fn test_dismiss() {
        let toasts = ToastService::new(3, 1000);
        let first = toasts.push(Toast::success("um"));
        let second = toasts.push(Toast::success("dois"));
        toasts.dismiss(first);

        let ids: Vec<u64> = toasts
            .entries
            .get_untracked()
            .iter()
            .map(|entry| entry.id)
            .collect();
        assert_eq!(ids, vec![second]);
    }
}
