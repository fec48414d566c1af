//! Document-title side effect for routed pages.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes;

/// Keep `document.title` in step with the matched route's title.
pub fn install_title_sync() {
    let location = use_location();
    Effect::new(move || {
        if let Some(title) = routes::page_title(&location.pathname.get()) {
            apply(&format!("{title} · Seqrview"));
        }
    });
}

/// Set the document title. Requires a browser environment.
pub fn apply(title: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = title;
    }
}
