use foundation::time::TimeSpan;

use crate::error::Result;

/// Kind of a playback source URL.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// An adaptive-streaming manifest (`.m3u8`).
    HlsManifest,
    /// A plain media file the element can play directly.
    Direct,
}

impl SourceKind {
    pub fn from_url(url: &str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        if path.to_ascii_lowercase().ends_with(".m3u8") {
            Self::HlsManifest
        } else {
            Self::Direct
        }
    }
}

/// The media element consumed by the playback core.
///
/// Implementations wrap the host's native playback primitives. The core only
/// reads and writes through this surface; it never owns decoding.
pub trait MediaSurface {
    /// Current playback position (seconds).
    fn current_time(&self) -> f64;

    /// Explicit seek. May move the position non-monotonically.
    fn set_current_time(&mut self, seconds: f64);

    /// Total duration, once the host knows it.
    fn duration(&self) -> Option<f64>;

    /// Buffered ranges, ordered by start and disjoint. Re-read every frame,
    /// never cached across frames.
    fn buffered(&self) -> Vec<TimeSpan>;

    /// Starts playback. Hosts may reject without a user gesture.
    fn play(&mut self) -> Result<()>;

    fn pause(&mut self);

    fn is_paused(&self) -> bool;

    /// Whether the element can play `kind` without a streaming engine.
    fn can_play_natively(&self, kind: SourceKind) -> bool;

    /// Direct source assignment, bypassing any streaming engine.
    fn set_source(&mut self, url: &str);
}

#[cfg(test)]
mod tests {
    use super::SourceKind;

    #[test]
    fn classifies_source_urls() {
        assert_eq!(
            SourceKind::from_url("assets/video360.m3u8"),
            SourceKind::HlsManifest
        );
        assert_eq!(
            SourceKind::from_url("https://cdn.example/v.M3U8?token=x"),
            SourceKind::HlsManifest
        );
        assert_eq!(
            SourceKind::from_url("assets/video360.mp4"),
            SourceKind::Direct
        );
    }
}
