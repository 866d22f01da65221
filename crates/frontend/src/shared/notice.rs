use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const NOTICE_MS: u32 = 3_000;

/// Short-lived confirmation message ("Claves copiadas al portapapeles").
///
/// Only the latest message is shown; its timer hides it unless a newer
/// message replaced it meanwhile.
#[derive(Clone, Copy)]
pub struct NoticeService {
    message: RwSignal<Option<String>>,
    generation: RwSignal<u64>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    pub fn show(&self, message: impl Into<String>) {
        let svc = *self;
        let generation = svc.generation.get_untracked() + 1;
        svc.generation.set(generation);
        svc.message.set(Some(message.into()));

        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MS).await;
            if svc.generation.get_untracked() == generation {
                svc.message.set(None);
            }
        });
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NoticeHost() -> impl IntoView {
    let svc = use_context::<NoticeService>().expect("NoticeService not provided in context");

    view! {
        {move || svc.message.get().map(|text| view! {
            <div class="notice" role="status">{text}</div>
        })}
    }
}
