use std::sync::Arc;

use contracts::domain::common::{EntityCollection, FormMessages, ResourcePaths};
use leptos::prelude::*;

use super::effects::{FormEffects, Toast};
use super::view_model::{run_delete, DeleteOutcome};
use crate::shared::resource_api::ResourceApi;

/// Actions menu of a list row: copy id, edit, delete with confirmation.
///
/// One instance serves the whole table; `pending` holds the row awaiting
/// delete confirmation.
#[derive(Clone)]
pub struct RowActions {
    store_id: String,
    collection: EntityCollection,
    messages: FormMessages,
    pub pending: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub confirm_open: RwSignal<bool>,
    api: Arc<dyn ResourceApi>,
    effects: Arc<dyn FormEffects>,
}

impl RowActions {
    pub fn new(
        store_id: impl Into<String>,
        collection: EntityCollection,
        messages: FormMessages,
        api: Arc<dyn ResourceApi>,
        effects: Arc<dyn FormEffects>,
    ) -> Self {
        Self {
            store_id: store_id.into(),
            collection,
            messages,
            pending: RwSignal::new(None),
            loading: RwSignal::new(false),
            confirm_open: RwSignal::new(false),
            api,
            effects,
        }
    }

    fn paths(&self) -> ResourcePaths<'_> {
        ResourcePaths::new(&self.store_id, self.collection)
    }

    pub fn copy_id(&self, id: &str) {
        self.effects.copy_text(id);
        self.effects.toast(Toast::success(self.messages.id_copied));
    }

    pub fn edit(&self, id: &str) {
        self.effects.navigate(&self.paths().edit_view(id));
    }

    pub fn request_delete(&self, id: &str) -> bool {
        if self.loading.get_untracked() {
            return false;
        }
        self.pending.set(Some(id.to_string()));
        self.confirm_open.set(true);
        true
    }

    pub fn cancel_delete(&self) {
        if self.loading.get_untracked() {
            return;
        }
        self.confirm_open.set(false);
        self.pending.set(None);
    }

    /// DELETE the pending row and refresh the table in place
    pub async fn confirm_delete(&self) -> DeleteOutcome {
        if self.loading.get_untracked() {
            return DeleteOutcome::Busy;
        }
        let Some(id) = self.pending.get_untracked() else {
            return DeleteOutcome::NotConfirmed;
        };
        if !self.confirm_open.get_untracked() {
            return DeleteOutcome::NotConfirmed;
        }

        self.loading.set(true);
        let result = run_delete(
            self.api.as_ref(),
            self.effects.as_ref(),
            &self.paths().entity(&id),
            &self.messages,
            None,
        )
        .await;
        self.loading.set(false);
        self.confirm_open.set(false);
        self.pending.set(None);

        match result {
            Ok(()) => DeleteOutcome::Deleted,
            Err(e) => DeleteOutcome::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form_controller::testing::{MockApi, RecordingEffects, SideEffect};
    use crate::shared::resource_api::ApiError;
    use contracts::domain::a005_product::aggregate::ProductDto;
    use contracts::domain::common::EntityDraft;

    fn product_actions() -> (RowActions, Arc<MockApi>, Arc<RecordingEffects>) {
        let api = Arc::new(MockApi::new());
        let effects = Arc::new(RecordingEffects::default());
        let actions = RowActions::new(
            "s1",
            EntityCollection::Products,
            ProductDto::MESSAGES,
            api.clone() as Arc<dyn ResourceApi>,
            effects.clone() as Arc<dyn FormEffects>,
        );
        (actions, api, effects)
    }

    #[test]
    fn test_copy_and_edit() {
        let (actions, api, effects) = product_actions();
        actions.copy_id("p1");
        actions.edit("p1");
        assert!(api.calls().is_empty());
        assert_eq!(
            effects.recorded(),
            vec![
                SideEffect::Copy("p1".into()),
                SideEffect::Toast(Toast::success("ID do produto copiado")),
                SideEffect::Navigate("/s1/products/p1".into()),
            ]
        );
    }

    #[tokio::test]
    async fn test_row_delete_refreshes_without_navigation() {
        let (actions, api, effects) = product_actions();
        assert!(actions.request_delete("p1"));

        assert_eq!(actions.confirm_delete().await, DeleteOutcome::Deleted);

        assert_eq!(api.calls()[0].path, "/api/s1/products/p1");
        assert_eq!(
            effects.recorded(),
            vec![
                SideEffect::Refresh,
                SideEffect::Toast(Toast::success("Produto deletado")),
            ]
        );
        assert_eq!(actions.pending.get_untracked(), None);
        assert!(!actions.confirm_open.get_untracked());
        assert!(!actions.loading.get_untracked());
    }

    #[tokio::test]
    async fn test_row_delete_failure_resets_flags() {
        let (actions, api, effects) = product_actions();
        api.respond_with(Err(ApiError::Transport("offline".into())));
        actions.request_delete("p1");

        assert_eq!(
            actions.confirm_delete().await,
            DeleteOutcome::Failed(ApiError::Transport("offline".into()))
        );
        assert_eq!(effects.toasts(), vec![Toast::error("Ocorreu um erro")]);
        assert!(!actions.confirm_open.get_untracked());
        assert!(!actions.loading.get_untracked());
    }

    #[tokio::test]
    async fn test_cancel_clears_pending_row() {
        let (actions, api, _effects) = product_actions();
        actions.request_delete("p1");
        actions.cancel_delete();
        assert_eq!(actions.pending.get_untracked(), None);
        assert_eq!(actions.confirm_delete().await, DeleteOutcome::NotConfirmed);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_dialog_dismiss_keeps_pending_row_while_deleting() {
        use crate::shared::components::alert_modal::close_through;

        let (actions, api, _effects) = product_actions();
        actions.request_delete("p1");
        let release = api.hold_next_call();
        let dismiss = close_through(Callback::new({
            let actions = actions.clone();
            move |_: ()| actions.cancel_delete()
        }));

        let (outcome, ()) = tokio::join!(actions.confirm_delete(), async {
            dismiss.set(false);
            assert!(actions.confirm_open.get_untracked());
            assert_eq!(actions.pending.get_untracked(), Some("p1".to_string()));
            let _ = release.send(());
        });

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(api.calls().len(), 1);
        assert_eq!(actions.pending.get_untracked(), None);
    }
}
