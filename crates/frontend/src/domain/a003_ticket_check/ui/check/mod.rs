mod dialog;
mod state;

pub use dialog::{TicketAction, TicketDialog};
pub use state::TicketCheckState;

use crate::domain::a003_ticket_check::api::check_ticket;
use crate::shared::api_utils::ApiContext;
use crate::shared::components::ui::{Button, Input};
use crate::shared::modal::Modal;
use leptos::prelude::*;

/// Ticket (payment receipt) input of the sale form.
///
/// On change the ticket is looked up; prior uses open a warning dialog.
#[component]
pub fn TicketCheckField() -> impl IntoView {
    let api = StoredValue::new(use_context::<ApiContext>().expect("ApiContext not provided in context"));

    let (ticket, set_ticket) = signal(String::new());
    let lookup = RwSignal::new(TicketCheckState::new());
    let dialog = Memo::new(move |_| lookup.with(|s| s.dialog.clone()));

    let on_ticket_change = Callback::new(move |value: String| {
        set_ticket.set(value.clone());
        let Some((token, request)) = lookup.try_update(|s| s.begin(&value)).flatten() else {
            return;
        };
        let ctx = api.get_value();

        wasm_bindgen_futures::spawn_local(async move {
            match check_ticket(&ctx, &request).await {
                Ok(response) => {
                    let applied = lookup
                        .try_update(|s| s.apply(token, &value, &response))
                        .unwrap_or(false);
                    if !applied {
                        log::debug!("discarding stale ticket check for {:?}", value);
                    } else if !response.prior_uses().is_empty() {
                        log::info!("ticket {:?} already used {} time(s)", value, response.prior_uses().len());
                    }
                }
                Err(e) => log::error!("ticket check failed: {}", e),
            }
        });
    });

    let run_action = move |action: TicketAction| {
        set_ticket.update(|t| *t = action.apply(t));
        lookup.update(|s| s.close());
    };

    view! {
        <Input
            label="Comprobante"
            name="comp"
            value=ticket
            on_input=Callback::new(move |v: String| set_ticket.set(v))
            on_change=on_ticket_change
        />

        {move || dialog.get().map(|found| {
            let uses = found.uses.clone();
            view! {
                <Modal
                    title=found.title.clone()
                    on_close=Callback::new(move |_| lookup.update(|s| s.close()))
                    footer=ViewFn::from(move || {
                        TicketAction::ALL
                            .into_iter()
                            .map(|action| view! {
                                <Button
                                    variant=action.variant()
                                    on_click=Callback::new(move |_| run_action(action))
                                >
                                    {action.label()}
                                </Button>
                            })
                            .collect_view()
                    })
                >
                    {uses.into_iter().map(|u| view! {
                        <p>
                            <b>"E-Mail: "</b>{u.email}
                            " - " <b>"Cliente: "</b>{u.customer}
                            " - " <b>"Fecha: "</b>{u.date}
                        </p>
                    }).collect_view()}
                </Modal>
            }
        })}
    }
}
