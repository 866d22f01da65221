use leptos::prelude::*;

/// Text input with label support.
///
/// `on_change` fires on commit (blur / enter / datalist pick), which is
/// when the sale form fields are checked against the backend.
#[component]
pub fn Input(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "date", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Used as both `id` and form field name
    #[prop(into)]
    name: String,
    /// Id of a `<datalist>` offering suggestions
    #[prop(optional, into)]
    list: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();
    let input_id = name.clone();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id.clone()>
                    {l}
                </label>
            })}
            <input
                id=name.clone()
                name=name
                class=move || format!("form__input {}", additional_class())
                type=input_t
                list=move || list.get()
                autocomplete="off"
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
