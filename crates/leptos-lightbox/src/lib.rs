//! Leptos Lightbox
//!
//! Overlay that shows one image enlarged above the page until dismissed.
//! Dismissal paths: overlay click, close button, Escape key.

use leptos::ev;
use leptos::prelude::*;
use web_sys::{KeyboardEvent, MouseEvent};

/// Open/closed state plus the enlarged image
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxState {
    open: bool,
    image_src: String,
}

impl LightboxState {
    pub fn open(&mut self, src: impl Into<String>) {
        self.image_src = src.into();
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.image_src.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Enlarged image, `None` while closed
    pub fn image_src(&self) -> Option<&str> {
        self.open.then_some(self.image_src.as_str())
    }
}

/// Keys that dismiss an open lightbox
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Close the lightbox on Escape for as long as the calling component is mounted
pub fn bind_escape_to_close(state: RwSignal<LightboxState>) {
    let handle = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
        if is_dismiss_key(&ev.key()) && state.with_untracked(LightboxState::is_open) {
            state.update(LightboxState::close);
        }
    });
    on_cleanup(move || handle.remove());
}

/// Lightbox overlay bound to `state`
#[component]
pub fn Lightbox(
    state: RwSignal<LightboxState>,
    /// Alt text of the enlarged image
    #[prop(optional)]
    alt: Option<&'static str>,
) -> impl IntoView {
    let alt = alt.unwrap_or("Enlarged image");
    bind_escape_to_close(state);

    let close = move |_: MouseEvent| state.update(LightboxState::close);

    view! {
        <Show when=move || state.with(LightboxState::is_open)>
            <div role="dialog" aria-modal="true" class="lightbox-overlay" on:click=close>
                // Clicks on the frame and the image must not reach the overlay
                <div class="lightbox-frame" on:click=|ev: MouseEvent| ev.stop_propagation()>
                    <button class="lightbox-close" aria-label="Close image" on:click=close>
                        "✕"
                    </button>
                    <img
                        class="lightbox-image"
                        src=move || state.with(|s| s.image_src().unwrap_or_default().to_string())
                        alt=alt
                    />
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_sets_exact_path() {
        let mut state = LightboxState::default();
        state.open("/asset/news/img-3.jpeg");
        assert!(state.is_open());
        assert_eq!(state.image_src(), Some("/asset/news/img-3.jpeg"));
    }

    #[test]
    fn test_close_resets_to_default() {
        let mut state = LightboxState::default();
        state.open("/asset/news/img-3.jpeg");
        state.close();
        assert_eq!(state, LightboxState::default());
        assert_eq!(state.image_src(), None);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut state = LightboxState::default();
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn test_reopen_replaces_image() {
        let mut state = LightboxState::default();
        state.open("/asset/news/img-1.jpeg");
        state.open("/asset/news/img-2.jpeg");
        assert_eq!(state.image_src(), Some("/asset/news/img-2.jpeg"));
    }

    #[test]
    fn test_only_escape_dismisses() {
        assert!(is_dismiss_key("Escape"));
        assert!(!is_dismiss_key("Esc"));
        assert!(!is_dismiss_key("Enter"));
        assert!(!is_dismiss_key(" "));
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use leptos::mount::mount_to;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    const IMAGE: &str = "/asset/news/img-3.jpeg";

    /// Let the reactive scheduler render pending changes
    async fn tick() {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            web_sys::window()
                .expect("window")
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
                .expect("timeout");
        });
        wasm_bindgen_futures::JsFuture::from(promise).await.expect("tick");
    }

    fn open_state() -> RwSignal<LightboxState> {
        let mut state = LightboxState::default();
        state.open(IMAGE);
        RwSignal::new(state)
    }

    fn container() -> HtmlElement {
        let document = web_sys::window().expect("window").document().expect("document");
        let root = document
            .create_element("div")
            .expect("div")
            .unchecked_into::<HtmlElement>();
        document.body().expect("body").append_child(&root).expect("append");
        root
    }

    fn click(root: &HtmlElement, selector: &str) {
        root.query_selector(selector)
            .expect("query")
            .expect(selector)
            .unchecked_into::<HtmlElement>()
            .click();
    }

    fn press_escape() {
        let init = KeyboardEventInit::new();
        init.set_key("Escape");
        let ev = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("event");
        web_sys::window()
            .expect("window")
            .dispatch_event(&ev)
            .expect("dispatch");
    }

    fn assert_closed(state: RwSignal<LightboxState>) {
        let current = state.get_untracked();
        assert!(!current.is_open());
        assert_eq!(current.image_src(), None);
        assert_eq!(current, LightboxState::default());
    }

    #[wasm_bindgen_test]
    async fn wasm_image_click_keeps_open() {
        let state = open_state();
        let root = container();
        let _handle = mount_to(root.clone(), move || view! { <Lightbox state=state /> });
        tick().await;

        click(&root, ".lightbox-image");
        assert!(state.with_untracked(LightboxState::is_open));
        assert_eq!(state.with_untracked(|s| s.image_src().map(str::to_string)), Some(IMAGE.to_string()));
    }

    #[wasm_bindgen_test]
    async fn wasm_close_button_closes() {
        let state = open_state();
        let root = container();
        let _handle = mount_to(root.clone(), move || view! { <Lightbox state=state /> });
        tick().await;

        click(&root, ".lightbox-close");
        assert_closed(state);
    }

    #[wasm_bindgen_test]
    async fn wasm_overlay_click_closes() {
        let state = open_state();
        let root = container();
        let _handle = mount_to(root.clone(), move || view! { <Lightbox state=state /> });
        tick().await;

        click(&root, ".lightbox-overlay");
        assert_closed(state);
    }

    #[wasm_bindgen_test]
    async fn wasm_escape_closes() {
        let state = open_state();
        let root = container();
        let _handle = mount_to(root.clone(), move || view! { <Lightbox state=state /> });
        tick().await;

        press_escape();
        assert_closed(state);
    }

    #[wasm_bindgen_test]
    async fn wasm_escape_ignored_after_unmount() {
        let state = open_state();
        let root = container();
        let handle = mount_to(root.clone(), move || view! { <Lightbox state=state /> });
        tick().await;

        drop(handle);
        press_escape();
        assert!(state.with_untracked(LightboxState::is_open));
        assert_eq!(state.with_untracked(|s| s.image_src().map(str::to_string)), Some(IMAGE.to_string()));
    }
}
