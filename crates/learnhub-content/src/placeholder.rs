//! Placeholder Metrics
//!
//! Values the backend does not store (estimated hours, durations, completion)
//! are synthesized here. They are display filler, not data.
//!
//! Each value is seeded from the BLAKE3 hash of `"{kind}:{id}"`, so a given
//! entity shows the same filler on every load.

/// Derive the seed words for one entity
fn seed(kind: &str, id: &str) -> [u32; 8] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(kind.as_bytes());
    hasher.update(b":");
    hasher.update(id.as_bytes());
    let bytes = hasher.finalize();
    let bytes = bytes.as_bytes();

    let mut words = [0u32; 8];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}

/// Map a seed word onto [0, 1)
fn unit(word: u32) -> f64 {
    f64::from(word) / (f64::from(u32::MAX) + 1.0)
}

/// Estimated study hours for a subject, 20..=59
pub fn estimated_hours(subject_id: &str) -> u32 {
    let words = seed("subject", subject_id);
    20 + words[0] % 40
}

/// Topic duration label, "{1..=3}.{0..=8} hours"
pub fn topic_duration(topic_id: &str) -> String {
    let words = seed("topic", topic_id);
    format!("{}.{} hours", 1 + words[0] % 3, words[1] % 9)
}

/// Video duration label, "{5..=19}:{00..=59}"
pub fn video_duration(video_id: &str) -> String {
    let words = seed("video", video_id);
    format!("{}:{:02}", 5 + words[0] % 15, words[1] % 60)
}

/// Roughly three in ten videos show as completed
pub fn video_completed(video_id: &str) -> bool {
    let words = seed("video", video_id);
    unit(words[2]) > 0.7
}

/// Placeholder thumbnail for the video at `index` within its topic
pub fn video_thumbnail(index: usize) -> String {
    format!("/placeholder.svg?height=180&width=320&text=Video+{}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_per_entity() {
        assert_eq!(estimated_hours("abc"), estimated_hours("abc"));
        assert_eq!(topic_duration("t-9"), topic_duration("t-9"));
        assert_eq!(video_duration("v-3"), video_duration("v-3"));
        assert_eq!(video_completed("v-3"), video_completed("v-3"));
    }

    #[test]
    fn test_kind_separates_seeds() {
        // Same id at two levels must not be forced onto the same seed
        assert_ne!(seed("subject", "1"), seed("topic", "1"));
    }

    #[test]
    fn test_ranges() {
        for n in 0..500 {
            let id = format!("id-{}", n);

            let hours = estimated_hours(&id);
            assert!((20..=59).contains(&hours), "hours {}", hours);

            let topic = topic_duration(&id);
            let (whole, rest) = topic.split_once('.').unwrap();
            let tenth = rest.strip_suffix(" hours").unwrap();
            assert!((1..=3).contains(&whole.parse::<u32>().unwrap()));
            assert!((0..=8).contains(&tenth.parse::<u32>().unwrap()));

            let video = video_duration(&id);
            let (minutes, seconds) = video.split_once(':').unwrap();
            assert!((5..=19).contains(&minutes.parse::<u32>().unwrap()));
            assert_eq!(seconds.len(), 2);
            assert!(seconds.parse::<u32>().unwrap() < 60);
        }
    }

    #[test]
    fn test_completion_ratio() {
        let completed = (0..2000)
            .filter(|n| video_completed(&format!("video-{}", n)))
            .count();
        // Expect ~600 of 2000
        assert!((450..750).contains(&completed), "completed {}", completed);
    }

    #[test]
    fn test_thumbnail() {
        assert_eq!(
            video_thumbnail(0),
            "/placeholder.svg?height=180&width=320&text=Video+1"
        );
        assert!(video_thumbnail(4).ends_with("Video+5"));
    }
}
