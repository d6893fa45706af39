use std::sync::Arc;

use contracts::domain::common::{
    EntityDraft, EntityRecord, FormMessages, FormMode, ResourcePaths, GENERIC_FAILURE,
};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use super::effects::{FormEffects, Toast};
use super::state::FormPhase;
use crate::shared::resource_api::{ApiError, ResourceApi};

/// Result of Validate-and-Submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    /// Draft failed validation; no request was sent
    Invalid,
    Failed(ApiError),
    /// Another operation of this form is in flight
    Busy,
}

/// Result of Confirm-Delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed(ApiError),
    /// No open confirmation or no entity to delete
    NotConfirmed,
    Busy,
}

/// ViewModel shared by every entity details form.
///
/// Holds the draft and the two UI flags as signals so views can bind to them,
/// and drives create/update/delete through a [`ResourceApi`].
pub struct EntityFormController<D: EntityDraft> {
    store_id: String,
    initial_data: Option<D::Record>,
    pub form: RwSignal<D>,
    pub errors: RwSignal<FieldErrors>,
    pub loading: RwSignal<bool>,
    pub confirm_open: RwSignal<bool>,
    api: Arc<dyn ResourceApi>,
    effects: Arc<dyn FormEffects>,
}

impl<D: EntityDraft> Clone for EntityFormController<D> {
    fn clone(&self) -> Self {
        Self {
            store_id: self.store_id.clone(),
            initial_data: self.initial_data.clone(),
            form: self.form,
            errors: self.errors,
            loading: self.loading,
            confirm_open: self.confirm_open,
            api: Arc::clone(&self.api),
            effects: Arc::clone(&self.effects),
        }
    }
}

impl<D: EntityDraft> EntityFormController<D> {
    /// Edit mode when `initial_data` is present, create mode otherwise
    pub fn new(
        store_id: impl Into<String>,
        initial_data: Option<D::Record>,
        api: Arc<dyn ResourceApi>,
        effects: Arc<dyn FormEffects>,
    ) -> Self {
        let draft = initial_data
            .as_ref()
            .map(D::from_record)
            .unwrap_or_default();

        Self {
            store_id: store_id.into(),
            initial_data,
            form: RwSignal::new(draft),
            errors: RwSignal::new(FieldErrors::new()),
            loading: RwSignal::new(false),
            confirm_open: RwSignal::new(false),
            api,
            effects,
        }
    }

    pub fn mode(&self) -> FormMode {
        if self.initial_data.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.initial_data.as_ref().map(|record| record.id())
    }

    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    pub fn messages(&self) -> &'static FormMessages {
        &D::MESSAGES
    }

    pub fn title(&self) -> &'static str {
        D::MESSAGES.title(self.mode())
    }

    pub fn description(&self) -> &'static str {
        D::MESSAGES.description(self.mode())
    }

    pub fn action_label(&self) -> &'static str {
        D::MESSAGES.action(self.mode())
    }

    /// Delete is offered only for existing entities
    pub fn can_delete(&self) -> bool {
        self.mode() == FormMode::Edit
    }

    pub fn phase(&self) -> FormPhase {
        FormPhase::from_flags(self.loading.get_untracked(), self.confirm_open.get_untracked())
    }

    fn paths(&self) -> ResourcePaths<'_> {
        ResourcePaths::new(&self.store_id, D::COLLECTION)
    }

    /// Field error for binding next to an input
    pub fn field_error(&self, field: &str) -> Option<String> {
        self.errors.with(|errors| errors.get(field).map(str::to_string))
    }

    /// Validate the current draft and publish the field errors
    pub fn validate(&self) -> bool {
        let errors = self.form.with_untracked(|draft| draft.validate());
        let valid = errors.is_empty();
        self.errors.set(errors);
        valid
    }

    /// Edit the draft. Once errors are shown they are recomputed on every edit.
    pub fn update(&self, edit: impl FnOnce(&mut D)) {
        self.form.update(edit);
        if !self.errors.with_untracked(FieldErrors::is_empty) {
            self.validate();
        }
    }

    /// Validate-and-Submit: PATCH in edit mode, POST in create mode
    pub async fn submit(&self) -> SubmitOutcome {
        if self.phase() != FormPhase::Idle {
            log::debug!("Submit ignored: {} form is busy", D::COLLECTION);
            return SubmitOutcome::Busy;
        }

        if !self.validate() {
            log::debug!(
                "Submit blocked: {} form has invalid fields {:?}",
                D::COLLECTION,
                self.errors.with_untracked(|e| e.fields().collect::<Vec<_>>())
            );
            return SubmitOutcome::Invalid;
        }

        let body = match self.form.with_untracked(|draft| serde_json::to_value(draft)) {
            Ok(body) => body,
            Err(e) => {
                let error = ApiError::Encode(e.to_string());
                log::warn!("Submit of {} form failed: {}", D::COLLECTION, error);
                self.effects.toast(Toast::error(GENERIC_FAILURE));
                return SubmitOutcome::Failed(error);
            }
        };

        let mode = self.mode();
        let paths = self.paths();

        self.loading.set(true);
        let result = match self.entity_id() {
            Some(id) => {
                let path = paths.entity(id);
                log::debug!("PATCH {}", path);
                self.api.update(&path, &body).await
            }
            None => {
                let path = paths.collection();
                log::debug!("POST {}", path);
                self.api.create(&path, &body).await
            }
        };

        let outcome = match result {
            Ok(()) => {
                log::info!("Saved {} in store {}", D::COLLECTION, self.store_id);
                self.effects.refresh();
                self.effects.navigate(&paths.list_view());
                self.effects.toast(Toast::success(D::MESSAGES.saved(mode)));
                SubmitOutcome::Saved
            }
            Err(e) => {
                log::warn!("Submit of {} form failed: {}", D::COLLECTION, e);
                self.effects.toast(Toast::error(GENERIC_FAILURE));
                SubmitOutcome::Failed(e)
            }
        };
        self.loading.set(false);
        outcome
    }

    /// Request-Delete: opens the confirmation prompt (edit mode only)
    pub fn request_delete(&self) -> bool {
        if !self.can_delete() || self.loading.get_untracked() {
            return false;
        }
        self.confirm_open.set(true);
        true
    }

    /// Cancel-Delete: closes the prompt. Ignored while the delete is running.
    pub fn cancel_delete(&self) {
        if self.loading.get_untracked() {
            return;
        }
        self.confirm_open.set(false);
    }

    /// Confirm-Delete: DELETE the entity, then leave for the list view
    pub async fn confirm_delete(&self) -> DeleteOutcome {
        if self.loading.get_untracked() {
            log::debug!("Delete ignored: {} form is busy", D::COLLECTION);
            return DeleteOutcome::Busy;
        }
        let Some(id) = self.entity_id() else {
            return DeleteOutcome::NotConfirmed;
        };
        if !self.confirm_open.get_untracked() {
            return DeleteOutcome::NotConfirmed;
        }

        let paths = self.paths();
        self.loading.set(true);
        let result = run_delete(
            self.api.as_ref(),
            self.effects.as_ref(),
            &paths.entity(id),
            &D::MESSAGES,
            Some(&paths.list_view()),
        )
        .await;
        self.loading.set(false);
        self.confirm_open.set(false);

        match result {
            Ok(()) => DeleteOutcome::Deleted,
            Err(e) => DeleteOutcome::Failed(e),
        }
    }
}

/// DELETE `path` and report the outcome; navigates to `list_view` on success when given
pub(crate) async fn run_delete(
    api: &dyn ResourceApi,
    effects: &dyn FormEffects,
    path: &str,
    messages: &FormMessages,
    list_view: Option<&str>,
) -> Result<(), ApiError> {
    log::debug!("DELETE {}", path);
    match api.delete(path).await {
        Ok(()) => {
            log::info!("Deleted {}", path);
            effects.refresh();
            if let Some(list_view) = list_view {
                effects.navigate(list_view);
            }
            effects.toast(Toast::success(messages.deleted));
            Ok(())
        }
        Err(e) => {
            log::warn!("Delete {} failed: {}", path, e);
            effects.toast(Toast::error(messages.delete_failed));
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form_controller::testing::{ApiCall, MockApi, RecordingEffects, SideEffect};
    use contracts::domain::a001_billboard::aggregate::{Billboard, BillboardDto};
    use contracts::domain::a002_category::aggregate::CategoryDto;
    use contracts::domain::a003_size::aggregate::SizeDto;
    use contracts::domain::a004_color::aggregate::ColorDto;
    use contracts::domain::a005_product::aggregate::{ProductDto, ProductImageDto};
    use serde_json::json;

    fn billboard_b1() -> Billboard {
        serde_json::from_value(json!({
            "id": "b1",
            "storeId": "s1",
            "label": "Verão",
            "imageUrl": "https://cdn/verao.png",
            "createdAt": "2024-03-15T14:02:26Z",
            "updatedAt": "2024-03-15T14:02:26Z"
        }))
        .unwrap()
    }

    fn make_controller<D: EntityDraft>(
        initial: Option<D::Record>,
    ) -> (EntityFormController<D>, Arc<MockApi>, Arc<RecordingEffects>) {
        let api = Arc::new(MockApi::new());
        let effects = Arc::new(RecordingEffects::default());
        let controller = EntityFormController::<D>::new(
            "s1",
            initial,
            api.clone() as Arc<dyn ResourceApi>,
            effects.clone() as Arc<dyn FormEffects>,
        );
        api.probe_loading(controller.loading);
        (controller, api, effects)
    }

    async fn assert_empty_draft_blocked<D: EntityDraft>(field: &str) {
        let (controller, api, effects) = make_controller::<D>(None);
        assert_eq!(controller.submit().await, SubmitOutcome::Invalid);
        assert!(api.calls().is_empty());
        assert!(effects.recorded().is_empty());
        assert!(controller.field_error(field).is_some());
        assert!(!controller.loading.get_untracked());
    }

    #[tokio::test]
    async fn test_empty_required_fields_block_submit_for_every_entity() {
        assert_empty_draft_blocked::<BillboardDto>("label").await;
        assert_empty_draft_blocked::<CategoryDto>("billboardId").await;
        assert_empty_draft_blocked::<SizeDto>("value").await;
        assert_empty_draft_blocked::<ColorDto>("value").await;
        assert_empty_draft_blocked::<ProductDto>("sizeId").await;
    }

    #[tokio::test]
    async fn test_product_create_posts_draft_and_navigates() {
        let (controller, api, effects) = make_controller::<ProductDto>(None);
        controller.update(|draft| {
            draft.name = "Shirt".into();
            draft.price = 19.99;
            draft.category_id = "c1".into();
            draft.color_id = "co1".into();
            draft.size_id = "sz1".into();
            draft.images = vec![ProductImageDto { url: "x".into() }];
        });

        assert_eq!(controller.submit().await, SubmitOutcome::Saved);

        assert_eq!(
            api.calls(),
            vec![ApiCall {
                method: "POST",
                path: "/api/s1/products".into(),
                body: Some(json!({
                    "name": "Shirt",
                    "images": [{ "url": "x" }],
                    "price": 19.99,
                    "categoryId": "c1",
                    "colorId": "co1",
                    "sizeId": "sz1",
                    "isFeatured": false,
                    "isArchived": false
                })),
            }]
        );
        assert_eq!(api.loading_seen(), vec![true]);
        assert!(!controller.loading.get_untracked());
        assert_eq!(
            effects.recorded(),
            vec![
                SideEffect::Refresh,
                SideEffect::Navigate("/s1/products".into()),
                SideEffect::Toast(Toast::success("Produto criado")),
            ]
        );
    }

    #[tokio::test]
    async fn test_billboard_update_patches_entity() {
        let (controller, api, effects) = make_controller::<BillboardDto>(Some(billboard_b1()));
        assert_eq!(controller.mode(), FormMode::Edit);
        assert_eq!(controller.title(), "Editar destaque");
        assert_eq!(controller.action_label(), "Salvar alterações");

        controller.update(|draft| draft.label = "Inverno".into());
        assert_eq!(controller.submit().await, SubmitOutcome::Saved);

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "PATCH");
        assert_eq!(calls[0].path, "/api/s1/billboards/b1");
        assert_eq!(
            calls[0].body,
            Some(json!({ "label": "Inverno", "imageUrl": "https://cdn/verao.png" }))
        );
        assert_eq!(effects.navigations(), vec!["/s1/billboards".to_string()]);
        assert_eq!(
            effects.toasts(),
            vec![Toast::success("Destaque atualizado.")]
        );
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_draft() {
        let (controller, api, effects) = make_controller::<SizeDto>(None);
        api.respond_with(Err(ApiError::Status(500)));
        controller.update(|draft| {
            draft.name = "Pequeno".into();
            draft.value = "P".into();
        });
        let before = controller.form.get_untracked();

        assert_eq!(
            controller.submit().await,
            SubmitOutcome::Failed(ApiError::Status(500))
        );

        assert_eq!(controller.form.get_untracked(), before);
        assert!(!controller.loading.get_untracked());
        assert_eq!(api.loading_seen(), vec![true]);
        assert_eq!(
            effects.recorded(),
            vec![SideEffect::Toast(Toast::error("Ocorreu um erro"))]
        );
    }

    #[tokio::test]
    async fn test_submit_while_in_flight_is_rejected() {
        let (controller, api, _effects) = make_controller::<ColorDto>(None);
        controller.update(|draft| {
            draft.name = "Preto".into();
            draft.value = "#000".into();
        });
        let release = api.hold_next_call();

        let (first, second) = tokio::join!(controller.submit(), async {
            let outcome = controller.submit().await;
            let _ = release.send(());
            outcome
        });

        assert_eq!(first, SubmitOutcome::Saved);
        assert_eq!(second, SubmitOutcome::Busy);
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_in_flight_rejects_delete_and_submit() {
        let (controller, api, _effects) = make_controller::<BillboardDto>(Some(billboard_b1()));
        controller.request_delete();
        let release = api.hold_next_call();

        let (first, second, submit) = tokio::join!(
            controller.confirm_delete(),
            controller.confirm_delete(),
            async {
                let outcome = controller.submit().await;
                let _ = release.send(());
                outcome
            }
        );

        assert_eq!(first, DeleteOutcome::Deleted);
        assert_eq!(second, DeleteOutcome::Busy);
        assert_eq!(submit, SubmitOutcome::Busy);
        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "DELETE");
    }

    #[tokio::test]
    async fn test_dialog_dismiss_ignored_while_deleting() {
        use crate::shared::components::alert_modal::close_through;

        let (controller, api, _effects) = make_controller::<BillboardDto>(Some(billboard_b1()));
        controller.request_delete();
        let release = api.hold_next_call();
        let dismiss = close_through(Callback::new({
            let controller = controller.clone();
            move |_: ()| controller.cancel_delete()
        }));

        let (outcome, ()) = tokio::join!(controller.confirm_delete(), async {
            dismiss.set(false);
            assert!(controller.confirm_open.get_untracked());
            assert_eq!(controller.phase(), FormPhase::Deleting);
            let _ = release.send(());
        });

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert!(!controller.confirm_open.get_untracked());
    }

    #[tokio::test]
    async fn test_request_and_cancel_delete_make_no_calls() {
        let (controller, api, effects) = make_controller::<BillboardDto>(Some(billboard_b1()));

        assert!(controller.request_delete());
        assert!(controller.confirm_open.get_untracked());
        assert_eq!(controller.phase(), FormPhase::ConfirmingDelete);

        controller.cancel_delete();
        assert!(!controller.confirm_open.get_untracked());
        assert_eq!(controller.phase(), FormPhase::Idle);

        assert!(api.calls().is_empty());
        assert!(effects.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unavailable_in_create_mode() {
        let (controller, api, _effects) = make_controller::<CategoryDto>(None);
        assert!(!controller.can_delete());
        assert!(!controller.request_delete());
        assert!(!controller.confirm_open.get_untracked());
        assert_eq!(controller.confirm_delete().await, DeleteOutcome::NotConfirmed);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_confirm_delete_without_prompt_is_ignored() {
        let (controller, api, _effects) = make_controller::<BillboardDto>(Some(billboard_b1()));
        assert_eq!(controller.confirm_delete().await, DeleteOutcome::NotConfirmed);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_billboard_delete_success() {
        let (controller, api, effects) = make_controller::<BillboardDto>(Some(billboard_b1()));
        controller.request_delete();

        assert_eq!(controller.confirm_delete().await, DeleteOutcome::Deleted);

        assert_eq!(
            api.calls(),
            vec![ApiCall {
                method: "DELETE",
                path: "/api/s1/billboards/b1".into(),
                body: None,
            }]
        );
        assert_eq!(api.loading_seen(), vec![true]);
        assert_eq!(
            effects.recorded(),
            vec![
                SideEffect::Refresh,
                SideEffect::Navigate("/s1/billboards".into()),
                SideEffect::Toast(Toast::success("Destaque deletado")),
            ]
        );
        assert!(!controller.loading.get_untracked());
        assert!(!controller.confirm_open.get_untracked());
    }

    #[tokio::test]
    async fn test_billboard_delete_blocked_by_dependents() {
        let (controller, api, effects) = make_controller::<BillboardDto>(Some(billboard_b1()));
        api.respond_with(Err(ApiError::Status(400)));
        controller.request_delete();
        let before = controller.form.get_untracked();

        assert_eq!(
            controller.confirm_delete().await,
            DeleteOutcome::Failed(ApiError::Status(400))
        );

        assert_eq!(api.calls()[0].path, "/api/s1/billboards/b1");
        assert_eq!(
            effects.recorded(),
            vec![SideEffect::Toast(Toast::error(
                "Confira se você removeu todas as categorias deste destaque."
            ))]
        );
        assert_eq!(controller.form.get_untracked(), before);
        assert!(!controller.loading.get_untracked());
        assert!(!controller.confirm_open.get_untracked());
    }

    #[tokio::test]
    async fn test_errors_clear_as_fields_are_fixed() {
        let (controller, _api, _effects) = make_controller::<BillboardDto>(None);
        assert_eq!(controller.submit().await, SubmitOutcome::Invalid);
        assert!(controller.field_error("label").is_some());

        controller.update(|draft| draft.label = "Verão".into());
        assert!(controller.field_error("label").is_none());
        assert!(controller.field_error("imageUrl").is_some());
    }

    #[test]
    fn test_create_mode_copy() {
        let (controller, _api, _effects) = make_controller::<ColorDto>(None);
        assert_eq!(controller.mode(), FormMode::Create);
        assert_eq!(controller.entity_id(), None);
        assert_eq!(controller.title(), "Criar cor");
        assert_eq!(controller.description(), "Adicionar nova cor");
        assert_eq!(controller.action_label(), "Criar cor");
        assert_eq!(controller.form.get_untracked(), ColorDto::default());
    }
}
