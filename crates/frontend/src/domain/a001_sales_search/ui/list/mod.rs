mod row;
mod state;

pub use row::AccountRow;
pub use state::SalesSearchState;

use self::state::create_state;
use crate::domain::a001_sales_search::api::search_accounts;
use crate::shared::api_utils::ApiContext;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::components::ui::{Button, Checkbox, Input, Select};
use crate::shared::config::SalesConfig;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::notice::NoticeService;
use contracts::domain::a001_account::AccountId;
use contracts::domain::a002_service::{Duration, ServiceId, ServiceOption};
use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};
use wasm_bindgen_futures::spawn_local;

const COPY_NOTICE: &str = "Claves copiadas al portapapeles";
const NO_MATCHES: &str = "No se encontraron resultados";

/// Duration select entries; the "not chosen" entry is always first
fn duration_choices(durations: &[ServiceOption]) -> Vec<(String, String)> {
    let mut choices: Vec<(String, String)> = durations
        .iter()
        .map(|o| (o.value.clone(), o.label.clone()))
        .collect();
    if let Some(pos) = choices.iter().position(|(v, _)| v == Duration::UNSET) {
        let unset = choices.remove(pos);
        choices.insert(0, unset);
    } else {
        choices.insert(0, (Duration::UNSET.to_string(), "---------".to_string()));
    }
    choices
}

/// Service/duration pickers, the result table and its paging.
///
/// Every change of the checked rows is reported through
/// `on_selection_change` with the ids of the checked rendered rows.
#[component]
pub fn SalesSearchPage(
    services: Vec<ServiceOption>,
    durations: Vec<ServiceOption>,
    on_selection_change: Callback<Vec<AccountId>>,
) -> impl IntoView {
    let config = use_context::<SalesConfig>().expect("SalesConfig not provided in context");
    let api = StoredValue::new(use_context::<ApiContext>().expect("ApiContext not provided in context"));
    let notice = use_context::<NoticeService>().expect("NoticeService not provided in context");

    let state = create_state(config.page_size);
    let page_size_options = config.page_size_options.clone();
    let redeem = config
        .redeem_preset()
        .map(|(service, duration)| (ServiceId::new(service), Duration::new(duration)));
    let config = StoredValue::new(config);

    let (end_date, set_end_date) = signal(String::new());

    let publish_selection = move || {
        on_selection_change.run(state.with_untracked(|s| s.selection()));
    };

    let run_search = move |page: u32| {
        let Some((token, request)) = state.try_update(|s| s.begin_search(page)).flatten() else {
            publish_selection();
            return;
        };
        let ctx = api.get_value();

        spawn_local(async move {
            match search_accounts(&ctx, &request).await {
                Ok(response) => {
                    let applied = state
                        .try_update(|s| s.apply_search(token, response))
                        .unwrap_or(false);
                    if applied {
                        publish_selection();
                    } else {
                        log::debug!("discarding stale search response");
                    }
                }
                Err(e) => {
                    log::error!("sales search failed: {}", e);
                    state.update(|s| s.fail_search(token));
                }
            }
        });
    };

    // Redeem page: search the preset criteria once at mount
    if let Some((service, duration)) = redeem {
        log::info!("redeem search for service {:?}", service);
        state.update(|s| s.apply_preset(service, duration));
        run_search(1);
    }

    let rows = Memo::new(move |_| config.with_value(|c| state.with(|s| s.rows(c))));
    let filter = Memo::new(move |_| state.with(|s| s.filter.clone()));

    let service_checkboxes = services
        .into_iter()
        .map(|option| {
            let id = ServiceId::new(option.value.clone());
            let checked_id = id.clone();
            let checked = Signal::derive(move || {
                state.with(|s| s.selected_services.contains(&checked_id))
            });
            view! {
                <Checkbox
                    label=option.label
                    name="serv"
                    value=option.value
                    checked=checked
                    on_change=Callback::new(move |on: bool| {
                        state.update(|s| s.set_service(id.clone(), on));
                        run_search(1);
                    })
                />
            }
        })
        .collect_view();

    let duration_options = duration_choices(&durations);

    view! {
        <div class="sales-search">
            <div class="sales-search__criteria">
                <fieldset class="sales-search__services">
                    <legend>"Servicios"</legend>
                    {service_checkboxes}
                </fieldset>
                <Select
                    label="Duración"
                    name="duration"
                    value=Signal::derive(move || state.with(|s| s.duration.as_str().to_string()))
                    options=Signal::stored(duration_options)
                    on_change=Callback::new(move |value: String| {
                        state.update(|s| s.set_duration(Duration::new(value)));
                        run_search(1);
                    })
                />
                <Input
                    label="Fecha de término"
                    name="end"
                    input_type="date"
                    value=end_date
                    on_input=Callback::new(move |v: String| set_end_date.set(v))
                    disabled=Signal::derive(move || !state.with(|s| s.end_date_enabled()))
                />
            </div>

            {move || state.with(|s| s.message.clone()).map(|message| view! {
                <p class="sales-search__message"><b>{message}</b></p>
            })}

            <Show when=move || state.with(|s| s.results_visible)>
                <div class="sales-search__accounts">
                    <div class="sales-search__toolbar">
                        <SearchInput
                            value=Signal::derive(move || filter.get())
                            on_change=move |value: String| {
                                state.update(|s| s.set_filter(value));
                                publish_selection();
                            }
                        />
                        <Show when=move || state.with(|s| s.filter_is_page_local())>
                            <span class="sales-search__hint">
                                "El filtro solo busca en la página cargada"
                            </span>
                        </Show>
                        <Show when=move || state.with(|s| s.loading)>
                            <Spinner size=SpinnerSize::Small />
                        </Show>
                    </div>

                    <div class="table-container">
                        <table class="table" id="sales-results">
                            <thead>
                                <tr>
                                    <th></th>
                                    <th></th>
                                    <th>"Servicio"</th>
                                    <th>"E-Mail"</th>
                                    <th>"Contraseña"</th>
                                    <th>"Vencimiento"</th>
                                    <th>"Perfil"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let rows = rows.get();
                                    if rows.is_empty() {
                                        return view! {
                                            <tr>
                                                <td colspan="8" class="table__cell table__cell--empty">
                                                    {NO_MATCHES}
                                                </td>
                                            </tr>
                                        }.into_any();
                                    }

                                    let needle = filter.get_untracked();
                                    rows.into_iter().map(|row| {
                                        let id = row.id;
                                        let credentials = row.credentials.clone();
                                        let row_class = if row.highlighted {
                                            "table__row table__row--highlighted"
                                        } else {
                                            "table__row"
                                        };
                                        view! {
                                            <tr class=row_class>
                                                <TableCheckbox
                                                    name="accounts"
                                                    value=row.checkbox_value
                                                    checked=Signal::derive(move || state.with(|s| s.is_selected(id)))
                                                    on_change=Callback::new(move |checked: bool| {
                                                        state.update(|s| s.set_selected(id, checked));
                                                        publish_selection();
                                                    })
                                                />
                                                <td class="table__cell">
                                                    <img src=row.logo_url width="20" alt="" />
                                                </td>
                                                <td class="table__cell">{row.service}</td>
                                                <td class="table__cell">{highlight_matches(&row.email, &needle)}</td>
                                                <td class="table__cell">{row.password}</td>
                                                <td class="table__cell">{row.expiration}</td>
                                                <td class="table__cell">{row.profile}</td>
                                                <td class="table__cell">
                                                    <Button
                                                        variant="ghost"
                                                        size="sm"
                                                        on_click=Callback::new(move |_| {
                                                            copy_to_clipboard_with_callback(&credentials, move || {
                                                                notice.show(COPY_NOTICE)
                                                            });
                                                        })
                                                    >
                                                        {icon("copy")}
                                                    </Button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view().into_any()
                                }}
                            </tbody>
                        </table>
                    </div>

                    <div class="sales-search__footer">
                        <p class="sales-search__summary">{move || state.with(|s| s.summary())}</p>
                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.page))
                            total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                            total_count=Signal::derive(move || state.with(|s| s.total_count))
                            page_size=Signal::derive(move || state.with(|s| s.page_size))
                            on_page_change=Callback::new(move |page: u32| run_search(page))
                            on_page_size_change=Callback::new(move |size: u32| {
                                state.update(|s| s.set_page_size(size));
                                run_search(1);
                            })
                            page_size_options=page_size_options.clone()
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}
