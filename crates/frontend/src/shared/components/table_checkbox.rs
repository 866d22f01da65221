use leptos::prelude::*;

/// Row selection checkbox rendered as its own `<td>`.
///
/// The input keeps `name`/`value` so it takes part in the surrounding sale
/// form submit; clicks do not reach the row.
#[component]
pub fn TableCheckbox(
    #[prop(into)]
    name: String,
    /// Submitted value, the record id
    #[prop(into)]
    value: String,
    checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox details"
                name=name
                value=value
                prop:checked=checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}
