//! Form Actions Component
//!
//! Submit / Reset / Print buttons and the status message.

use leptos::prelude::*;

use crate::commands;
use crate::store::{use_form_store, FormStateStoreFields};

#[component]
pub fn FormActions() -> impl IntoView {
    let store = use_form_store();
    let submitting = move || store.submitting().get();

    let reset = move |_| {
        store.write().reset();
        log::info!("[FORM] reset to empty");
    };

    let print = move |_| {
        if let Err(e) = commands::print_page() {
            log::warn!("[FORM] print failed: {}", e);
        }
    };

    view! {
        <div class="form-actions no-print">
            <button type="submit" class="btn btn-primary" disabled=submitting>
                {move || if submitting() { "Submitting..." } else { "Submit" }}
            </button>
            <button type="button" class="btn" on:click=reset>"Reset"</button>
            <button type="button" class="btn" on:click=print>"Print"</button>
        </div>

        {move || store.message().get().map(|message| view! {
            <div class=if message.is_error() { "form-message error" } else { "form-message success" }>
                {message.text().to_string()}
            </div>
        })}
    }
}
