//! Site Header Component
//!
//! Logo, school name and navigation. Hidden when printing.

use leptos::prelude::*;

use crate::context::use_site_context;
use crate::route::Route;

const NAV_LINKS: &[(Route, &str)] = &[
    (Route::Home, "Home"),
    (Route::ApplyForm, "Admissions"),
    (Route::News, "News"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_site_context();

    view! {
        <nav class="site-header no-print">
            <a href=Route::Home.href() class="site-brand">
                <img src=ctx.logo_path() alt="" class="site-logo" />
                <span>{ctx.school_name()}</span>
            </a>
            <div class="site-nav">
                {NAV_LINKS.iter().map(|(route, label)| view! {
                    <a
                        href=route.href()
                        class=if *route == ctx.route { "nav-link active" } else { "nav-link" }
                    >
                        {*label}
                    </a>
                }).collect_view()}
            </div>
        </nav>
    }
}
