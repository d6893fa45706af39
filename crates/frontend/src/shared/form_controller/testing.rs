//! Recording doubles of `ResourceApi` and `FormEffects` for controller tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use leptos::prelude::*;
use tokio::sync::oneshot;

use super::effects::{FormEffects, Toast};
use crate::shared::resource_api::{ApiError, ResourceApi};

#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

#[derive(Default)]
pub struct MockApi {
    calls: Mutex<Vec<ApiCall>>,
    responses: Mutex<VecDeque<Result<(), ApiError>>>,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
    loading_probe: Mutex<Option<RwSignal<bool>>>,
    loading_seen: Mutex<Vec<bool>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next call; unqueued calls succeed
    pub fn respond_with(&self, result: Result<(), ApiError>) {
        self.responses.lock().unwrap().push_back(result);
    }

    /// Keep the next call pending until the returned sender fires
    pub fn hold_next_call(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.lock().unwrap() = Some(rx);
        tx
    }

    /// Record the value of `loading` at the moment each call is issued
    pub fn probe_loading(&self, loading: RwSignal<bool>) {
        *self.loading_probe.lock().unwrap() = Some(loading);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn loading_seen(&self) -> Vec<bool> {
        self.loading_seen.lock().unwrap().clone()
    }

    async fn record(&self, call: ApiCall) -> Result<(), ApiError> {
        let probe = *self.loading_probe.lock().unwrap();
        if let Some(loading) = probe {
            self.loading_seen.lock().unwrap().push(loading.get_untracked());
        }
        self.calls.lock().unwrap().push(call);

        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.responses.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

#[async_trait(?Send)]
impl ResourceApi for MockApi {
    async fn create(&self, path: &str, body: &serde_json::Value) -> Result<(), ApiError> {
        self.record(ApiCall {
            method: "POST",
            path: path.to_string(),
            body: Some(body.clone()),
        })
        .await
    }

    async fn update(&self, path: &str, body: &serde_json::Value) -> Result<(), ApiError> {
        self.record(ApiCall {
            method: "PATCH",
            path: path.to_string(),
            body: Some(body.clone()),
        })
        .await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.record(ApiCall {
            method: "DELETE",
            path: path.to_string(),
            body: None,
        })
        .await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    Refresh,
    Navigate(String),
    Toast(Toast),
    Copy(String),
}

#[derive(Default)]
pub struct RecordingEffects {
    recorded: Mutex<Vec<SideEffect>>,
}

impl RecordingEffects {
    pub fn recorded(&self) -> Vec<SideEffect> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.recorded()
            .into_iter()
            .filter_map(|effect| match effect {
                SideEffect::Navigate(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.recorded()
            .into_iter()
            .filter_map(|effect| match effect {
                SideEffect::Toast(toast) => Some(toast),
                _ => None,
            })
            .collect()
    }

    fn push(&self, effect: SideEffect) {
        self.recorded.lock().unwrap().push(effect);
    }
}

impl FormEffects for RecordingEffects {
    fn refresh(&self) {
        self.push(SideEffect::Refresh);
    }

    fn navigate(&self, path: &str) {
        self.push(SideEffect::Navigate(path.to_string()));
    }

    fn toast(&self, toast: Toast) {
        self.push(SideEffect::Toast(toast));
    }

    fn copy_text(&self, text: &str) {
        self.push(SideEffect::Copy(text.to_string()));
    }
}
