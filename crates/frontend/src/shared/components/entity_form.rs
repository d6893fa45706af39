use contracts::domain::common::EntityDraft;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::alert_modal::AlertModal;
use super::heading::Heading;
use crate::shared::form_controller::EntityFormController;
use crate::shared::icons::icon;

/// Frame of every details form: heading, delete button with confirmation,
/// the entity fields (children) and the submit button.
#[component]
pub fn EntityForm<D: EntityDraft>(controller: EntityFormController<D>, children: Children) -> impl IntoView {
    let loading = controller.loading;
    let confirm_open = controller.confirm_open;

    let delete_button = controller.can_delete().then(|| {
        let controller = controller.clone();
        view! {
            <button
                type="button"
                class="btn btn-danger"
                title="Deletar"
                disabled=move || loading.get()
                on:click=move |_| {
                    controller.request_delete();
                }
            >
                {icon("trash")}
            </button>
        }
    });

    let on_confirm = {
        let controller = controller.clone();
        Callback::new(move |_: ()| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.confirm_delete().await;
            });
        })
    };
    let on_close = {
        let controller = controller.clone();
        Callback::new(move |_: ()| controller.cancel_delete())
    };
    let on_submit = {
        let controller = controller.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let controller = controller.clone();
            spawn_local(async move {
                controller.submit().await;
            });
        }
    };

    view! {
        <AlertModal open=confirm_open loading=loading on_confirm=on_confirm on_close=on_close />
        <div class="details-container">
            <div class="details-header">
                <Heading
                    title=controller.title().to_string()
                    description=controller.description()
                />
                {delete_button}
            </div>
            <hr class="separator" />
            <form class="details-form" on:submit=on_submit>
                {children()}
                <div class="details-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                        {controller.action_label()}
                    </button>
                </div>
            </form>
        </div>
    }
}
