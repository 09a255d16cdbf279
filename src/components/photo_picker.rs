//! Photo Picker Component
//!
//! Passport photo box with a file input. The preview is a data-URL read
//! in the browser, nothing is uploaded until the form is submitted.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::commands::{self, data_url_mime};
use crate::store::{use_form_store, FormStateStoreFields};

#[component]
pub fn PhotoPicker() -> impl IntoView {
    let store = use_form_store();
    let file_input = NodeRef::<html::Input>::new();

    // Clear the selection on reset so picking the same file fires `change` again
    Effect::new(move |prev: Option<u32>| {
        let resets = store.resets().get();
        if prev.is_some_and(|p| p != resets) {
            if let Some(input) = file_input.get_untracked() {
                input.set_value("");
            }
        }
        resets
    });

    let on_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let Some(file) = file else {
            store.write().clear_photo();
            return;
        };

        let ticket = store.write().begin_photo_read();
        spawn_local(async move {
            match commands::read_as_data_url(&file).await {
                Ok(data_url) => {
                    log::debug!(
                        "[PHOTO] read {} ({} chars)",
                        data_url_mime(&data_url).unwrap_or("unknown type"),
                        data_url.len()
                    );
                    if !store.write().complete_photo_read(ticket, data_url) {
                        log::debug!("[PHOTO] superseded read discarded");
                    }
                }
                Err(e) => log::warn!("[PHOTO] {}", e),
            }
        });
    };

    view! {
        <div class="form-field">
            <label class="field-label">"Latest Passport Size Colour Photograph of The Student"</label>
            <div class="photo-row">
                <div class="photo-box">
                    {move || match store.record().with(|r| r.photo_data_url.clone()) {
                        Some(src) => view! { <img src=src alt="Student photo" class="photo-preview" /> }.into_any(),
                        None => view! { <span class="photo-placeholder">"Photo"</span> }.into_any(),
                    }}
                </div>
                <input type="file" accept="image/*" class="file-input no-print" node_ref=file_input on:change=on_change />
            </div>
        </div>
    }
}
