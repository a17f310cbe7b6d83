//! Video Player
//!
//! Inline lesson player for the selected video.

use leptos::prelude::*;
use learnhub_content::VideoEntry;

#[component]
pub fn VideoPlayer(video: VideoEntry, on_close: Callback<()>) -> impl IntoView {
    view! {
        <section class="video-player">
            <div class="player-header">
                <h2>{format!("Lesson #{}: {}", video.lesson, video.title)}</h2>
                <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
            </div>
            <video
                class="player"
                src=video.url
                poster=video.thumbnail
                controls=true
                autoplay=true
            ></video>
            <p class="player-description">{video.description}</p>
        </section>
    }
}
