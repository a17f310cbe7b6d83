//! Subject Topics Page
//!
//! `#/subjects/{subjectId}/topics`: the subject (with its grade) plus topic cards.

use leptos::prelude::*;
use learnhub_content::{ContentLoader, LoadState, SubjectTopics, TopicSummary};

use super::{Breadcrumbs, Crumb, EmptyState, ErrorPanel, LoadingSkeleton};
use crate::page_load::use_page_load;
use crate::route::Route;

#[component]
pub fn SubjectTopicsPage(#[prop(into)] subject_id: Signal<Option<String>>) -> impl IntoView {
    let load = use_page_load(subject_id, |loader: ContentLoader, id: String| async move {
        loader.subject_topics(&id).await
    });

    move || match load.state() {
        LoadState::Idle | LoadState::Loading => view! { <LoadingSkeleton /> }.into_any(),
        LoadState::Error(failure) => view! {
            <ErrorPanel title="Error Loading Topics" failure=failure on_retry=load.retry() />
        }
        .into_any(),
        LoadState::Ready(listing) => view! { <TopicListing listing=listing /> }.into_any(),
    }
}

#[component]
fn TopicListing(listing: SubjectTopics) -> impl IntoView {
    let SubjectTopics { subject, grade, topics } = listing;
    let heading = format!("{} Topics", subject.name);
    let crumbs = vec![
        Crumb::link("All Grades", Route::Catalogue.href()),
        Crumb::link(
            format!("{} Subjects", grade.name),
            Route::Subjects { grade_id: grade.id }.href(),
        ),
        Crumb::current(heading.clone()),
    ];

    let body = if topics.is_empty() {
        view! {
            <EmptyState
                title="No Topics Available"
                message=format!("Topics for {} will appear here once they are added.", subject.name)
            />
        }
        .into_any()
    } else {
        view! {
            <div class="card-grid">
                {topics
                    .into_iter()
                    .map(|topic| view! { <TopicCard topic=topic /> })
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
                <p>{subject.description}</p>
            </header>
            {body}
        </div>
    }
}

#[component]
fn TopicCard(topic: TopicSummary) -> impl IntoView {
    let href = Route::Videos { topic_id: topic.topic.id.clone() }.href();

    view! {
        <a class="card topic-card" href=href>
            <h3>{topic.topic.name}</h3>
            <p class="card-description">{topic.topic.description}</p>
            <div class="card-meta">
                <span class="video-count">{format!("{} videos", topic.video_count)}</span>
                <span class="duration">{topic.duration}</span>
            </div>
        </a>
    }
}
