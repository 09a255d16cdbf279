//! Home and Not Found Pages

use leptos::prelude::*;

use crate::context::use_site_context;
use crate::route::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_site_context();

    view! {
        <main class="home-page">
            <h1>{ctx.school_name()}</h1>
            <p class="home-address">{ctx.school_address()}</p>
            <div class="home-links">
                <a href=Route::ApplyForm.href() class="home-card">
                    <h2>"Admissions"</h2>
                    <p>"Fill in and print the application form"</p>
                </a>
                <a href=Route::News.href() class="home-card">
                    <h2>"Latest News"</h2>
                    <p>"Events and highlights from the school"</p>
                </a>
            </div>
        </main>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1>"Page not found"</h1>
            <a href=Route::Home.href() class="btn btn-secondary">"Back Home"</a>
        </main>
    }
}
