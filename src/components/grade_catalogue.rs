//! Grade Catalogue Page
//!
//! Landing page: every grade, linking to its subjects.

use leptos::prelude::*;
use learnhub_content::{ContentLoader, Grade, GradeCatalogue, LoadState};

use super::{EmptyState, ErrorPanel, LoadingSkeleton};
use crate::page_load::use_page_load;
use crate::route::Route;

#[component]
pub fn GradeCataloguePage() -> impl IntoView {
    // Single page, no id
    let key = Signal::derive(|| Some(String::new()));
    let load = use_page_load(key, |loader: ContentLoader, _: String| async move {
        loader.grade_catalogue().await
    });

    move || match load.state() {
        LoadState::Idle | LoadState::Loading => view! { <LoadingSkeleton /> }.into_any(),
        LoadState::Error(failure) => view! {
            <ErrorPanel title="Error Loading Grades" failure=failure on_retry=load.retry() />
        }
        .into_any(),
        LoadState::Ready(catalogue) => view! { <Catalogue catalogue=catalogue /> }.into_any(),
    }
}

#[component]
fn Catalogue(catalogue: GradeCatalogue) -> impl IntoView {
    let body = if catalogue.grades.is_empty() {
        view! {
            <EmptyState
                title="No Grades Available"
                message="Grades will appear here once they are added."
            />
        }
        .into_any()
    } else {
        view! {
            <div class="card-grid">
                {catalogue
                    .grades
                    .into_iter()
                    .map(|grade| view! { <GradeCard grade=grade /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"All Grades"</h1>
                <p>"Pick your grade to see the subjects on offer"</p>
            </header>
            {body}
        </div>
    }
}

#[component]
fn GradeCard(grade: Grade) -> impl IntoView {
    let href = Route::Subjects { grade_id: grade.id.clone() }.href();

    view! {
        <a class="card grade-card" href=href>
            <h3>{grade.name}</h3>
            <p class="card-description">{grade.description}</p>
        </a>
    }
}
