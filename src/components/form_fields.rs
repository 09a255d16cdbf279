//! Form Field Components
//!
//! Inputs bound to one record field through the form store.

use leptos::prelude::*;

use crate::fields::{DocumentFlag, TextField};
use crate::store::{store_set_document, store_set_text, use_form_store, FormStateStoreFields};

/// Single-line input bound to `field`
#[component]
pub fn TextInput(
    field: TextField,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    /// Display hint only, never enforced before submit
    #[prop(optional)]
    pattern: Option<&'static str>,
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] inputmode: Option<&'static str>,
    #[prop(optional)] class: Option<&'static str>,
) -> impl IntoView {
    let store = use_form_store();

    view! {
        <input
            type=input_type.unwrap_or("text")
            class=class.unwrap_or("form-input")
            name=field.wire_name()
            placeholder=placeholder
            pattern=pattern
            title=title
            inputmode=inputmode
            prop:value=move || store.record().with(|r| r.text(field).to_string())
            on:input=move |ev| store_set_text(&store, field, event_target_value(&ev))
        />
    }
}

/// Label above a single-line input
#[component]
pub fn LabeledInput(
    field: TextField,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="field-label">{field.label()}</label>
            <TextInput field=field input_type=input_type.unwrap_or("text") />
        </div>
    }
}

/// Multi-line input with label
#[component]
pub fn LabeledTextArea(field: TextField, rows: u32) -> impl IntoView {
    let store = use_form_store();

    view! {
        <div class="form-field">
            <label class="field-label">{field.label()}</label>
            <textarea
                class="form-input"
                name=field.wire_name()
                rows=rows
                prop:value=move || store.record().with(|r| r.text(field).to_string())
                on:input=move |ev| store_set_text(&store, field, event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// Select with fixed (value, label) options
#[component]
pub fn LabeledSelect(field: TextField, options: &'static [(&'static str, &'static str)]) -> impl IntoView {
    let store = use_form_store();

    view! {
        <div class="form-field">
            <label class="field-label">{field.label()}</label>
            <select
                class="form-input"
                name=field.wire_name()
                prop:value=move || store.record().with(|r| r.text(field).to_string())
                on:change=move |ev| store_set_text(&store, field, event_target_value(&ev))
            >
                {options.iter().map(|(value, label)| view! {
                    <option value=*value>{*label}</option>
                }).collect_view()}
            </select>
        </div>
    }
}

/// Radio buttons writing their value into `field`
#[component]
pub fn RadioGroup(field: TextField, options: &'static [&'static str]) -> impl IntoView {
    let store = use_form_store();

    view! {
        <div class="form-field">
            <label class="field-label">{field.label()}</label>
            <div class="radio-row">
                {options.iter().map(|&option| {
                    view! {
                        <label class="radio-option">
                            <input
                                type="radio"
                                name=field.wire_name()
                                value=option
                                prop:checked=move || store.record().with(|r| r.text(field) == option)
                                on:change=move |_| store_set_text(&store, field, option.to_string())
                            />
                            {option}
                        </label>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Checklist entry for one document
#[component]
pub fn DocumentCheckbox(flag: DocumentFlag) -> impl IntoView {
    let store = use_form_store();

    view! {
        <label class="document-option">
            <input
                type="checkbox"
                name=flag.wire_name()
                prop:checked=move || store.record().with(|r| r.document(flag))
                on:change=move |ev| store_set_document(&store, flag, event_target_checked(&ev))
            />
            {flag.label()}
        </label>
    }
}
