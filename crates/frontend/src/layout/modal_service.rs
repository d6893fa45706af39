use leptos::prelude::*;

/// Visibility of the store picker shown on the setup page.
///
/// The setup page keeps it open; closing it is only possible once a store is
/// chosen, which navigates away.
#[derive(Clone, Copy)]
pub struct StoreModal {
    is_visible: RwSignal<bool>,
}

impl StoreModal {
    pub fn new() -> Self {
        Self {
            is_visible: RwSignal::new(false),
        }
    }

    pub fn open(&self) {
        self.is_visible.set(true);
    }

    pub fn close(&self) {
        self.is_visible.set(false);
    }

    pub fn is_open(&self) -> bool {
        self.is_visible.get()
    }
}

impl Default for StoreModal {
    fn default() -> Self {
        Self::new()
    }
}

/// Overlay rendered while the `StoreModal` from context is open
#[component]
pub fn Modal(#[prop(into)] title: String, children: ChildrenFn) -> impl IntoView {
    let modal = use_context::<StoreModal>().expect("StoreModal not provided in context");

    view! {
        {move || {
            if modal.is_open() {
                view! {
                    <div class="modal-overlay">
                        <div class="modal-content" on:click=|e| e.stop_propagation()>
                            <h2 class="modal-title">{title.clone()}</h2>
                            {children()}
                        </div>
                    </div>
                }
                .into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let modal = StoreModal::new();
        assert!(!modal.is_visible.get_untracked());
        modal.open();
        assert!(modal.is_visible.get_untracked());
        modal.close();
        assert!(!modal.is_visible.get_untracked());
    }
}
