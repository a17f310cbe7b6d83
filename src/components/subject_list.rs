//! Grade Subjects Page
//!
//! `#/grades/{gradeId}/subjects`: the grade plus its subject cards.

use leptos::prelude::*;
use learnhub_content::{ContentLoader, GradeSubjects, LoadState, SubjectSummary};

use super::{Breadcrumbs, Crumb, EmptyState, ErrorPanel, LoadingSkeleton};
use crate::page_load::use_page_load;
use crate::route::Route;

/// Card accents cycle by position
const ACCENTS: [&str; 3] = ["accent-blue", "accent-green", "accent-purple"];

#[component]
pub fn GradeSubjectsPage(#[prop(into)] grade_id: Signal<Option<String>>) -> impl IntoView {
    let load = use_page_load(grade_id, |loader: ContentLoader, id: String| async move {
        loader.grade_subjects(&id).await
    });

    move || match load.state() {
        LoadState::Idle | LoadState::Loading => view! { <LoadingSkeleton /> }.into_any(),
        LoadState::Error(failure) => view! {
            <ErrorPanel title="Error Loading Subjects" failure=failure on_retry=load.retry() />
        }
        .into_any(),
        LoadState::Ready(listing) => view! { <SubjectListing listing=listing /> }.into_any(),
    }
}

#[component]
fn SubjectListing(listing: GradeSubjects) -> impl IntoView {
    let heading = format!("{} Subjects", listing.grade.name);
    let crumbs = vec![
        Crumb::link("All Grades", Route::Catalogue.href()),
        Crumb::current(heading.clone()),
    ];

    let body = if listing.subjects.is_empty() {
        view! {
            <EmptyState
                title="No Subjects Available"
                message=format!("Subjects will appear here once they are added to {}.", listing.grade.name)
            />
        }
        .into_any()
    } else {
        view! {
            <div class="card-grid">
                {listing
                    .subjects
                    .into_iter()
                    .enumerate()
                    .map(|(index, subject)| view! { <SubjectCard subject=subject index=index /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="page">
            <Breadcrumbs crumbs=crumbs />
            <header class="page-header">
                <h1>{heading}</h1>
                <p>"Choose a subject to explore topics and learning materials designed for your grade level"</p>
            </header>
            {body}
        </div>
    }
}

#[component]
fn SubjectCard(subject: SubjectSummary, index: usize) -> impl IntoView {
    let href = Route::Topics { subject_id: subject.subject.id.clone() }.href();
    let class = format!("card subject-card {}", ACCENTS[index % ACCENTS.len()]);

    view! {
        <a class=class href=href>
            <h3>{subject.subject.name}</h3>
            <p class="card-description">{subject.subject.description}</p>
            <div class="card-meta">
                <span class="topic-count">{format!("{} topics", subject.topic_count)}</span>
                <span class="hours">{format!("{}h", subject.estimated_hours)}</span>
            </div>
        </a>
    }
}
