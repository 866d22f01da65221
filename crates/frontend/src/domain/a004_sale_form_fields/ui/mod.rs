use super::rules::{FieldEntry, FieldRule};
use crate::shared::components::ui::{Button, Input};
use crate::shared::modal::Modal;
use contracts::shared::allow_list::AllowList;
use leptos::prelude::*;

/// Free-text sale form field backed by a server-rendered `<datalist>`.
///
/// A committed value missing from the list opens an error dialog; leaving
/// it by any path clears the field.
#[component]
pub fn AllowListField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    /// Id of the `<datalist>` offering suggestions
    #[prop(into)]
    list_id: String,
    allowed: AllowList,
    rule: FieldRule,
) -> impl IntoView {
    let allowed = StoredValue::new(allowed);
    let entry = RwSignal::new(FieldEntry::default());
    let value = Signal::derive(move || entry.with(|e| e.value.clone()));

    let on_commit = Callback::new(move |committed: String| {
        let rejected = allowed.with_value(|list| {
            entry
                .try_update(|e| e.commit(&rule, list, committed.clone()))
                .unwrap_or(false)
        });
        if rejected {
            log::warn!("{:?} is not an accepted value", committed);
        }
    });

    let dismiss = Callback::new(move |_: ()| entry.update(|e| e.dismiss()));

    view! {
        <Input
            label=label
            name=name
            list=list_id
            value=value
            on_input=Callback::new(move |v: String| entry.update(|e| e.input(v)))
            on_change=on_commit
        />

        <Show when=move || entry.with(|e| e.invalid)>
            <Modal
                title="Error"
                on_close=dismiss
                footer=ViewFn::from(move || view! {
                    <Button on_click=Callback::new(move |_| dismiss.run(()))>
                        {rule.fix_label}
                    </Button>
                })
            >
                <p>{rule.message}</p>
            </Modal>
        </Show>
    }
}
