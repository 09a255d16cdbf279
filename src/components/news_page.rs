//! News Page Component
//!
//! Grid of news highlights; clicking an image opens it in the lightbox.

use leptos::prelude::*;
use leptos_lightbox::{Lightbox, LightboxState};

use crate::news::{NewsItem, NEWS_ITEMS};
use crate::route::Route;

#[component]
fn NewsCard(item: &'static NewsItem, lightbox: RwSignal<LightboxState>) -> impl IntoView {
    let open = move |_| {
        log::debug!("[NEWS] open image {}", item.id);
        lightbox.update(|state| state.open(item.image));
    };

    view! {
        <article class="news-card">
            <div class="news-image-wrap">
                <img src=item.image alt=item.alt_text() class="news-image" on:click=open />
            </div>
            <div class="news-body">
                <p class="news-caption">{item.desc}</p>
            </div>
        </article>
    }
}

#[component]
pub fn NewsPage() -> impl IntoView {
    let lightbox = RwSignal::new(LightboxState::default());

    view! {
        <main class="news-page">
            <div class="news-heading">
                <h1>"Latest News"</h1>
                <p>"All news and event highlights"</p>
            </div>

            <div class="news-grid">
                {NEWS_ITEMS.iter().map(|item| view! {
                    <NewsCard item=item lightbox=lightbox />
                }).collect_view()}
            </div>

            <div class="news-footer">
                <a href=Route::Home.href() class="btn btn-secondary">"Back Home"</a>
            </div>

            <Lightbox state=lightbox alt="Enlarged news" />
        </main>
    }
}
