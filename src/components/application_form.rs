//! Application Form Component
//!
//! Printable admission form. Owns the form store for as long as it is mounted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use web_sys::SubmitEvent;

use crate::commands::{self, FetchApplyApi};
use crate::components::form_actions::FormActions;
use crate::components::form_fields::{
    DocumentCheckbox, LabeledInput, LabeledSelect, LabeledTextArea, RadioGroup,
};
use crate::components::parent_column::ParentColumn;
use crate::components::photo_picker::PhotoPicker;
use crate::components::previous_school_table::PreviousSchoolTable;
use crate::context::use_site_context;
use crate::fields::{DocumentFlag, Parent, TextField, CASTE_OPTIONS, GENDER_OPTIONS};
use crate::store::{FormState, SubmitStart};

#[component]
pub fn ApplicationForm() -> impl IntoView {
    let ctx = use_site_context();
    let store = Store::new(FormState::default());
    provide_context(store);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let start = store.write().begin_submit();
        match start {
            SubmitStart::Busy => log::debug!("[FORM] submit ignored, request in flight"),
            SubmitStart::Rejected(e) => log::info!("[FORM] rejected: {}", e),
            SubmitStart::Ready(body) => {
                let endpoint = ctx.apply_endpoint();
                log::info!("[FORM] submitting to {}", endpoint);
                spawn_local(async move {
                    let api = FetchApplyApi::new(endpoint);
                    let outcome = commands::submit_application(&api, &body).await;
                    match &outcome {
                        Ok(()) => log::info!("[FORM] application accepted"),
                        Err(e) => log::warn!("[FORM] {}", e),
                    }
                    store.write().finish_submit(outcome);
                });
            }
        }
    };

    view! {
        <div class="form-page">
            <form class="application-form printable" novalidate=true on:submit=on_submit>
                <header class="form-header">
                    <div class="school-block">
                        <div class="school-title">
                            <img src=ctx.logo_path() alt="School Logo" class="school-logo" />
                            <h2 class="school-name">{ctx.school_name()}</h2>
                        </div>
                        <div class="school-address">{ctx.school_address()}</div>
                    </div>

                    <section class="office-use">
                        <h4>"For Office Use"</h4>
                        <LabeledInput field=TextField::RegistrationNo />
                        <LabeledInput field=TextField::AdmFileNo />
                        <LabeledInput field=TextField::TcFileNo />
                        <LabeledInput field=TextField::DateOfAdmission input_type="date" />
                    </section>
                </header>

                <div class="form-title">
                    <h1>"APPLICATION FORM"</h1>
                    <h3 class="form-note">"Note: Please fill all the details in BLOCK letters only"</h3>
                </div>

                <section class="grid cols-3">
                    <LabeledInput field=TextField::SchoolLocation />
                    <LabeledInput field=TextField::ClassName />
                    <LabeledInput field=TextField::Curriculum />
                </section>

                <h3 class="section-title">"STUDENT INFORMATION"</h3>

                <section class="grid cols-3">
                    <LabeledInput field=TextField::FirstName />
                    <LabeledInput field=TextField::MiddleName />
                    <LabeledInput field=TextField::LastName />
                </section>

                <section class="grid cols-2">
                    <LabeledInput field=TextField::Dob input_type="date" />
                    <LabeledInput field=TextField::PlaceOfBirth />
                </section>

                <section class="grid cols-3">
                    <LabeledSelect field=TextField::Gender options=GENDER_OPTIONS />
                    <LabeledInput field=TextField::Religion />
                    <LabeledInput field=TextField::Nationality />
                </section>

                <section>
                    <RadioGroup field=TextField::Caste options=CASTE_OPTIONS />
                </section>

                <section>
                    <LabeledTextArea field=TextField::Address rows=3 />
                </section>

                <section class="grid cols-2">
                    <LabeledInput field=TextField::Telephone />
                    <PhotoPicker />
                </section>

                <hr class="page-break" />

                <h3 class="section-title">"PARENT DETAILS"</h3>
                <section class="grid cols-2">
                    <ParentColumn parent=Parent::Father />
                    <ParentColumn parent=Parent::Mother />
                </section>

                <h3 class="section-title">"PLEASE FILL IN THE FOLLOWING"</h3>
                <section>
                    <PreviousSchoolTable />
                </section>

                <section>
                    <LabeledTextArea field=TextField::HealthInfo rows=2 />
                </section>

                <h3 class="section-title">"DOCUMENTS TO BE SUBMITTED (Recommended)"</h3>
                <section class="grid cols-2 documents">
                    {DocumentFlag::ALL.into_iter().map(|flag| view! {
                        <DocumentCheckbox flag=flag />
                    }).collect_view()}
                </section>

                <h4 class="section-title">"EMERGENCY CONTACT"</h4>
                <section class="grid cols-2">
                    <LabeledInput field=TextField::EmergencyName />
                    <LabeledInput field=TextField::EmergencyRelationship />
                    <LabeledInput field=TextField::EmergencyContact />
                    <LabeledTextArea field=TextField::EmergencyAddress rows=2 />
                </section>

                <FormActions />
            </form>
        </div>
    }
}
