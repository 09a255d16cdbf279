//! Previous School Table
//!
//! One-row table for the last school attended.

use leptos::prelude::*;

use crate::components::form_fields::TextInput;
use crate::fields::PREVIOUS_SCHOOL_COLUMNS;

#[component]
pub fn PreviousSchoolTable() -> impl IntoView {
    view! {
        <div class="table-wrap">
            <table class="previous-school">
                <thead>
                    <tr>
                        {PREVIOUS_SCHOOL_COLUMNS.into_iter().map(|field| view! {
                            <th>{field.label()}</th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        {PREVIOUS_SCHOOL_COLUMNS.into_iter().map(|field| view! {
                            <td><TextInput field=field class="cell-input" /></td>
                        }).collect_view()}
                    </tr>
                </tbody>
            </table>
        </div>
    }
}
