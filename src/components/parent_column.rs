//! Parent Column Component
//!
//! Father or mother details, one placeholder-labelled input per field.

use leptos::prelude::*;

use crate::components::form_fields::TextInput;
use crate::fields::{Parent, ParentField, TextField};

const DOB_PATTERN: &str = r"\d{2}/\d{2}/\d{4}";

#[component]
pub fn ParentColumn(parent: Parent) -> impl IntoView {
    view! {
        <div class="parent-column">
            <h4 class="parent-title">{parent.title()}</h4>
            <div class="parent-fields">
                {ParentField::ALL.into_iter().map(|field| {
                    let key = TextField::parent(parent, field);
                    match field {
                        // Free text with a dd/mm/yyyy hint
                        ParentField::Dob => view! {
                            <TextInput
                                field=key
                                placeholder=field.placeholder()
                                inputmode="numeric"
                                pattern=DOB_PATTERN
                                title="Enter date as dd/mm/yyyy"
                            />
                        }.into_any(),
                        _ => view! {
                            <TextInput field=key placeholder=field.placeholder() />
                        }.into_any(),
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
