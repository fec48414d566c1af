//! Role-scoped exam dashboard reached by `EXAM_ADMIN` accounts after login.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn ExamDashboardPage() -> impl IntoView {
    let params = use_params_map();
    let code = Memo::new(move |_| params.read().get("code").unwrap_or_default());
    view! {
        <section class="page">
            <h1 class="page__heading">{move || format!("Exam {}", code.get())}</h1>
            <p class="page__hint">"Exam-day overview."</p>
        </section>
    }
}
