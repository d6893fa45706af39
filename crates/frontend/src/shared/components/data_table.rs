use contracts::domain::common::{filter_rows, ColumnDef, ColumnKind, TableRow};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::shared::form_controller::RowActions;
use crate::shared::icons::icon;

/// Searchable table of preformatted rows.
///
/// The search box filters on `search_key` only. Rows get copy/edit/delete
/// buttons when `actions` is set.
#[component]
pub fn DataTable<R: TableRow>(
    #[prop(into)] rows: Signal<Vec<R>>,
    columns: &'static [ColumnDef],
    search_key: &'static str,
    #[prop(optional_no_strip)] actions: Option<RowActions>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let filtered = Signal::derive(move || rows.with(|rows| filter_rows(rows, search_key, &query.get())));
    let has_actions = actions.is_some();

    let search_header = columns
        .iter()
        .find(|column| column.key == search_key)
        .map(|column| column.header.to_lowercase())
        .unwrap_or_default();

    view! {
        <div class="table-toolbar">
            <input
                class="form__input table-toolbar__search"
                type="search"
                placeholder=format!("Pesquisar por {}...", search_header)
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        {columns
                            .iter()
                            .map(|column| view! { <th class="table__header-cell">{column.header}</th> })
                            .collect_view()}
                        {has_actions.then(|| view! { <th class="table__header-cell table__header-cell--actions"></th> })}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || filtered.get()
                        key=|row| row.row_id().to_string()
                        children=move |row: R| {
                            let cells = columns
                                .iter()
                                .map(|column| render_cell(column, row.cell(column.key)))
                                .collect_view();
                            let row_actions = actions
                                .clone()
                                .map(|actions| view! { <RowActionButtons actions=actions id=row.row_id().to_string() /> });
                            view! {
                                <tr class="table__row">
                                    {cells}
                                    {row_actions}
                                </tr>
                            }
                        }
                    />
                    {move || filtered.with(Vec::is_empty).then(|| view! {
                        <tr class="table__row">
                            <td class="table__cell table__cell--empty" colspan=(columns.len() + usize::from(has_actions)).to_string()>
                                "Nenhum resultado."
                            </td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

fn render_cell(column: &ColumnDef, value: String) -> AnyView {
    match column.kind {
        ColumnKind::Text => view! { <td class="table__cell">{value}</td> }.into_any(),
        ColumnKind::Swatch => {
            let style = format!("background-color: {}", value);
            view! {
                <td class="table__cell">
                    <div class="swatch-cell">
                        {value}
                        <span class="swatch-cell__color" style=style></span>
                    </div>
                </td>
            }
            .into_any()
        }
    }
}

#[component]
fn RowActionButtons(actions: RowActions, id: String) -> impl IntoView {
    let copy = {
        let (actions, id) = (actions.clone(), id.clone());
        move |_: MouseEvent| actions.copy_id(&id)
    };
    let edit = {
        let (actions, id) = (actions.clone(), id.clone());
        move |_: MouseEvent| actions.edit(&id)
    };
    let loading = actions.loading;
    let delete = move |_: MouseEvent| {
        actions.request_delete(&id);
    };

    view! {
        <td class="table__cell table__cell--actions">
            <button type="button" class="btn btn-ghost" title="Copiar ID" on:click=copy>
                {icon("copy")}
            </button>
            <button type="button" class="btn btn-ghost" title="Atualizar" on:click=edit>
                {icon("edit")}
            </button>
            <button
                type="button"
                class="btn btn-ghost"
                title="Deletar"
                disabled=move || loading.get()
                on:click=delete
            >
                {icon("trash")}
            </button>
        </td>
    }
}
