//! Exam-operations screens: the exam list and the per-exam shift, center,
//! and assignment views nested under `/operations/exams/:code`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// The `:code` segment of the current location, if the route carries one.
fn exam_code() -> Memo<String> {
    let params = use_params_map();
    Memo::new(move |_| params.read().get("code").unwrap_or_default())
}

#[component]
pub fn ExamsPage() -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__heading">"Exams"</h1>
            <p class="page__hint">"No exams loaded."</p>
        </section>
    }
}

#[component]
pub fn ExamShiftsPage() -> impl IntoView {
    let code = exam_code();
    view! {
        <section class="page">
            <h1 class="page__heading">"Exam Shifts"</h1>
            <p class="page__hint">{move || format!("Shifts for exam {}", code.get())}</p>
        </section>
    }
}

#[component]
pub fn ExamCentersPage() -> impl IntoView {
    let code = exam_code();
    view! {
        <section class="page">
            <h1 class="page__heading">"Exam Centers"</h1>
            <p class="page__hint">{move || format!("Centers for exam {}", code.get())}</p>
        </section>
    }
}

#[component]
pub fn ShiftAssignmentsPage() -> impl IntoView {
    let code = exam_code();
    view! {
        <section class="page">
            <h1 class="page__heading">"Shift Assignments"</h1>
            <p class="page__hint">{move || format!("Assignments for exam {}", code.get())}</p>
        </section>
    }
}
