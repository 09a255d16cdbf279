//! School Site App
//!
//! Root component: shared header plus the page chosen by the URL.

use leptos::prelude::*;

use crate::components::{ApplicationForm, HomePage, NewsPage, NotFound, SiteHeader};
use crate::config::SiteConfig;
use crate::context::SiteContext;
use crate::route::Route;

#[component]
pub fn App(config: SiteConfig, route: Route) -> impl IntoView {
    provide_context(SiteContext::new(config, route));

    let page = match route {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::ApplyForm => view! { <ApplicationForm /> }.into_any(),
        Route::News => view! { <NewsPage /> }.into_any(),
        Route::NotFound => view! { <NotFound /> }.into_any(),
    };

    view! {
        <div class="site-layout">
            <SiteHeader />
            {page}
        </div>
    }
}
