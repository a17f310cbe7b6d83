//! Topic Videos Page
//!
//! `#/topics/{topicId}/videos`: lessons for one topic, with an inline player.

use leptos::prelude::*;
use learnhub_content::{ContentLoader, LoadState, TopicVideos, VideoEntry};

use super::{Breadcrumbs, Crumb, EmptyState, ErrorPanel, LoadingSkeleton, VideoPlayer};
use crate::page_load::use_page_load;
use crate::route::Route;

#[component]
pub fn TopicVideosPage(#[prop(into)] topic_id: Signal<Option<String>>) -> impl IntoView {
    let load = use_page_load(topic_id, |loader: ContentLoader, id: String| async move {
        loader.topic_videos(&id).await
    });
    let (watching, set_watching) = signal::<Option<VideoEntry>>(None);

    // Close the player when moving to another topic
    Effect::new(move |_| {
        topic_id.track();
        set_watching.set(None);
    });

    let on_watch = Callback::new(move |video: VideoEntry| set_watching.set(Some(video)));
    let on_close = Callback::new(move |_: ()| set_watching.set(None));

    view! {
        {move || {
            watching
                .get()
                .map(|video| view! { <VideoPlayer video=video on_close=on_close /> })
        }}
        {move || match load.state() {
            LoadState::Idle | LoadState::Loading => view! { <LoadingSkeleton cards=2 /> }.into_any(),
            LoadState::Error(failure) => view! {
                <ErrorPanel title="Error Loading Videos" failure=failure on_retry=load.retry() />
            }
            .into_any(),
            LoadState::Ready(listing) => view! { <VideoListing listing=listing on_watch=on_watch /> }.into_any(),
        }}
    }
}

#[component]
fn VideoListing(listing: TopicVideos, on_watch: Callback<VideoEntry>) -> impl IntoView {
    let TopicVideos { topic, subject, videos } = listing;
    let heading = format!("{} Videos", topic.name);
    let crumbs = vec![
        Crumb::link("All Grades", Route::Catalogue.href()),
        Crumb::link(
            format!("{} Subjects", subject.grade.name),
            Route::Subjects { grade_id: subject.grade.id.clone() }.href(),
        ),
        Crumb::link(
            format!("{} Topics", subject.name),
            Route::Topics { subject_id: subject.id.clone() }.href(),
        ),
        Crumb::current(heading.clone()),
    ];

    let body = if videos.is_empty() {
        view! {
            <EmptyState
                title="No Videos Available"
                message=format!("Videos for {} will appear here once they are added.", topic.name)
            />
        }
        .into_any()
    } else {
        view! {
            <div class="video-list">
                {videos
                    .into_iter()
                    .map(|video| view! { <VideoCard video=video on_watch=on_watch /> })
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
                <p>{format!("Watch comprehensive video lessons to master {}", topic.name.to_lowercase())}</p>
            </header>
            {body}
        </div>
    }
}

#[component]
fn VideoCard(video: VideoEntry, on_watch: Callback<VideoEntry>) -> impl IntoView {
    let completed = video.completed;
    let watch_label = if completed { "Watch Again" } else { "Watch Now" };
    let from_thumbnail = video.clone();
    let from_button = video.clone();

    view! {
        <article class="video-card" class:completed=completed>
            <div class="video-thumbnail" on:click=move |_| on_watch.run(from_thumbnail.clone())>
                <img src=video.thumbnail alt=video.title.clone() />
                <span class="duration-badge">{video.duration.clone()}</span>
                {completed.then(|| view! { <span class="completed-badge">"✓"</span> })}
            </div>
            <div class="video-info">
                <div class="video-tags">
                    <span class="lesson-tag">{format!("Lesson #{}", video.lesson)}</span>
                    {completed.then(|| view! { <span class="completed-tag">"Completed"</span> })}
                </div>
                <h3>{video.title}</h3>
                <p class="card-description">{video.description}</p>
                <div class="video-meta">
                    <span class="duration">{video.duration}</span>
                    <button class="watch-btn" on:click=move |_| on_watch.run(from_button.clone())>
                        {watch_label}
                    </button>
                </div>
            </div>
        </article>
    }
}
