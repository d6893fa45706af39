//! Reactive GET helpers used by list and edit pages.

use contracts::domain::common::{EntityCollection, EntityRecord, ResourcePaths};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use super::http::fetch_json;
use crate::layout::global_context::AppGlobalContext;

/// Collection fetched from `/api/{store}/{collection}`
pub struct ListState<R: Send + Sync + 'static> {
    pub items: RwSignal<Vec<R>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<R: Send + Sync + 'static> Clone for ListState<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for ListState<R> {}

/// Load a collection and reload it whenever the app data version changes
pub fn use_entity_list<R: EntityRecord>(
    store_id: &str,
    collection: EntityCollection,
) -> ListState<R> {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let state = ListState {
        items: RwSignal::new(Vec::new()),
        loading: RwSignal::new(true),
        error: RwSignal::new(None),
    };
    let path = ResourcePaths::new(store_id, collection).collection();

    Effect::new(move |_| {
        let version = ctx.data_version.get();
        let path = path.clone();
        state.loading.set(true);
        spawn_local(async move {
            match fetch_json::<Vec<R>>(&path).await {
                Ok(items) => {
                    log::debug!("loaded {} rows from {} (v{})", items.len(), path, version);
                    state.items.set(items);
                    state.error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load {}: {}", path, e);
                    state.error.set(Some(format!("Erro ao carregar: {}", e)));
                }
            }
            state.loading.set(false);
        });
    });

    state
}

/// Single record for an edit page; `loaded` flips once the fetch settles
pub struct RecordState<R: Send + Sync + 'static> {
    pub record: RwSignal<Option<R>>,
    pub loaded: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<R: Send + Sync + 'static> Clone for RecordState<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for RecordState<R> {}

/// Load the record behind an `{entityId}` route param.
///
/// `None` (the "new" segment) resolves immediately with no record, which puts
/// the form in create mode.
pub fn use_entity_record<R: EntityRecord>(
    store_id: &str,
    collection: EntityCollection,
    entity_id: Option<String>,
) -> RecordState<R> {
    let state = RecordState {
        record: RwSignal::new(None),
        loaded: RwSignal::new(entity_id.is_none()),
        error: RwSignal::new(None),
    };

    if let Some(id) = entity_id {
        let path = ResourcePaths::new(store_id, collection).entity(&id);
        spawn_local(async move {
            match fetch_json::<Option<R>>(&path).await {
                Ok(record) => state.record.set(record),
                Err(e) => {
                    log::error!("failed to load {}: {}", path, e);
                    state.error.set(Some(format!("Erro ao carregar: {}", e)));
                }
            }
            state.loaded.set(true);
        });
    }

    state
}

/// Route segment to entity id; the "new" segment means create mode
pub fn entity_id_param(segment: Option<String>) -> Option<String> {
    use contracts::domain::common::NEW_ENTITY_SEGMENT;

    segment.filter(|s| !s.is_empty() && s != NEW_ENTITY_SEGMENT)
}

/// `(store_id, entity_id)` of the current `/:store_id/{collection}/:entity_id` route
pub fn use_route_ids() -> (String, Option<String>) {
    let params = use_params_map();
    params.with_untracked(|p| {
        (
            p.get("store_id").unwrap_or_default(),
            entity_id_param(p.get("entity_id")),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_segment_means_create() {
        assert_eq!(entity_id_param(Some("new".into())), None);
        assert_eq!(entity_id_param(None), None);
        assert_eq!(entity_id_param(Some("b1".into())), Some("b1".to_string()));
    }
}
