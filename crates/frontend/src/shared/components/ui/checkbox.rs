use leptos::prelude::*;

/// Labelled checkbox that is also a named form field
#[component]
pub fn Checkbox(
    #[prop(into)]
    label: String,
    #[prop(into)]
    name: String,
    #[prop(into)]
    value: String,
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = format!("{}-{}", name, value);
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("form__checkbox-wrapper {}", additional_class())>
            <input
                id=checkbox_id.clone()
                type="checkbox"
                class="form__checkbox"
                name=name
                value=value
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=checkbox_id>
                {label}
            </label>
        </div>
    }
}
