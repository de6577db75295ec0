#![forbid(unsafe_code)]

//! The song collection the board browses.
//!
//! The board never owns songs. It reads counts and items through
//! [`SongCollection`] once per command and asks the collection to switch
//! categories. [`SongLibrary`] is a plain in-memory implementation used by
//! hosts without their own song database, and by tests.

/// Metadata of one song as shown on a tile and in the preview panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SongInfo {
    /// Performing artist.
    pub artist: String,
    /// Song title.
    pub title: String,
    /// Reference to the cover image (path or texture key).
    pub cover: String,
    /// Playback start in seconds.
    pub start: f32,
    /// Playback end in seconds; `0.0` means "end of the audio file".
    pub finish: f32,
    /// Length of the audio file in seconds, when known.
    pub audio_length: Option<f32>,
    /// Song has parts for two singers.
    pub is_duet: bool,
    /// Song has a background video.
    pub has_video: bool,
}

impl SongInfo {
    /// Create a song with an artist and a title.
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the cover reference.
    #[must_use]
    pub fn cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = cover.into();
        self
    }

    /// Set the playback window in seconds.
    #[must_use]
    pub fn bounds(mut self, start: f32, finish: f32) -> Self {
        self.start = start;
        self.finish = finish;
        self
    }

    /// Set the audio file length in seconds.
    #[must_use]
    pub fn audio_length(mut self, seconds: f32) -> Self {
        self.audio_length = Some(seconds);
        self
    }

    /// Mark the song as a duet.
    #[must_use]
    pub fn duet(mut self) -> Self {
        self.is_duet = true;
        self
    }

    /// Mark the song as having a video.
    #[must_use]
    pub fn video(mut self) -> Self {
        self.has_video = true;
        self
    }

    /// Playable length in seconds: `finish - start`, where a zero `finish`
    /// falls back to the audio length.
    pub fn playable_length(&self) -> f32 {
        let end = if self.finish != 0.0 {
            self.finish
        } else {
            self.audio_length.unwrap_or(0.0)
        };
        (end - self.start).max(0.0)
    }
}

/// A top-level category (folder, language, decade, ...).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryInfo {
    /// Display name.
    pub name: String,
    /// Reference to the category cover image.
    pub cover: String,
}

impl CategoryInfo {
    /// Create a category with a name and a cover reference.
    pub fn new(name: impl Into<String>, cover: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cover: cover.into(),
        }
    }
}

/// Read access to the song database plus category switching.
///
/// Indices are positions in the full (unpaged) category list, or in the
/// visible (filtered) song list of the active category.
pub trait SongCollection {
    /// Number of categories.
    fn category_count(&self) -> usize;

    /// Category at an index.
    fn category(&self, index: usize) -> Option<&CategoryInfo>;

    /// Number of songs in a category, ignoring the search filter.
    fn songs_in_category(&self, index: usize) -> usize;

    /// The category being browsed, or `None` while the category list is shown.
    fn active_category(&self) -> Option<usize>;

    /// Number of songs in the active category that pass the search filter.
    fn visible_song_count(&self) -> usize;

    /// Visible song at an index.
    fn visible_song(&self, index: usize) -> Option<&SongInfo>;

    /// Whether the category level ("tabs") is enabled.
    fn tabs_enabled(&self) -> bool;

    /// Current search filter text (empty when not filtering).
    fn search_filter(&self) -> &str;

    /// Start browsing a category.
    fn enter_category(&mut self, index: usize);

    /// Leave the active category and show the category list.
    fn show_categories(&mut self);

    /// Advance the active category.
    fn next_category(&mut self);

    /// Retreat the active category.
    fn prev_category(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
struct Category {
    info: CategoryInfo,
    songs: Vec<SongInfo>,
}

/// In-memory [`SongCollection`] with a case-insensitive search filter.
#[derive(Debug, Clone, PartialEq)]
pub struct SongLibrary {
    categories: Vec<Category>,
    tabs: bool,
    active: Option<usize>,
    filter: String,
    /// Indices into the active category's songs that pass the filter.
    visible: Vec<usize>,
}

impl Default for SongLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl SongLibrary {
    /// Create an empty library with tabs enabled.
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            tabs: true,
            active: None,
            filter: String::new(),
            visible: Vec::new(),
        }
    }

    /// Append a category with its songs.
    #[must_use]
    pub fn with_category(mut self, info: CategoryInfo, songs: Vec<SongInfo>) -> Self {
        self.categories.push(Category { info, songs });
        self
    }

    /// Enable or disable the category level.
    #[must_use]
    pub fn tabs(mut self, enabled: bool) -> Self {
        self.tabs = enabled;
        self
    }

    /// Replace the search filter and recompute the visible songs.
    pub fn set_search_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.rebuild_visible();
    }

    fn rebuild_visible(&mut self) {
        self.visible.clear();
        let Some(category) = self.active.and_then(|i| self.categories.get(i)) else {
            return;
        };
        let needle = self.filter.to_lowercase();
        self.visible.extend(
            category
                .songs
                .iter()
                .enumerate()
                .filter(|(_, song)| {
                    needle.is_empty()
                        || song.artist.to_lowercase().contains(&needle)
                        || song.title.to_lowercase().contains(&needle)
                })
                .map(|(i, _)| i),
        );
    }

    fn step_category(&mut self, forward: bool) {
        let count = self.categories.len();
        let Some(current) = self.active else {
            return;
        };
        if count == 0 {
            return;
        }
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.active = Some(next);
        self.rebuild_visible();
    }
}

impl SongCollection for SongLibrary {
    fn category_count(&self) -> usize {
        self.categories.len()
    }

    fn category(&self, index: usize) -> Option<&CategoryInfo> {
        self.categories.get(index).map(|c| &c.info)
    }

    fn songs_in_category(&self, index: usize) -> usize {
        self.categories.get(index).map_or(0, |c| c.songs.len())
    }

    fn active_category(&self) -> Option<usize> {
        self.active
    }

    fn visible_song_count(&self) -> usize {
        self.visible.len()
    }

    fn visible_song(&self, index: usize) -> Option<&SongInfo> {
        let category = self.categories.get(self.active?)?;
        category.songs.get(*self.visible.get(index)?)
    }

    fn tabs_enabled(&self) -> bool {
        self.tabs
    }

    fn search_filter(&self) -> &str {
        &self.filter
    }

    fn enter_category(&mut self, index: usize) {
        if index < self.categories.len() {
            self.active = Some(index);
            self.rebuild_visible();
        }
    }

    fn show_categories(&mut self) {
        self.active = None;
        self.visible.clear();
    }

    fn next_category(&mut self) {
        self.step_category(true);
    }

    fn prev_category(&mut self) {
        self.step_category(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> SongLibrary {
        SongLibrary::new()
            .with_category(
                CategoryInfo::new("Rock", "rock.png"),
                vec![
                    SongInfo::new("Queen", "Bohemian Rhapsody"),
                    SongInfo::new("Europe", "The Final Countdown"),
                    SongInfo::new("Queen", "Don't Stop Me Now"),
                ],
            )
            .with_category(
                CategoryInfo::new("Pop", "pop.png"),
                vec![SongInfo::new("ABBA", "Waterloo")],
            )
    }

    #[test]
    fn starts_on_category_list() {
        let lib = library();
        assert_eq!(lib.active_category(), None);
        assert_eq!(lib.category_count(), 2);
        assert_eq!(lib.visible_song_count(), 0);
        assert_eq!(lib.songs_in_category(0), 3);
        assert_eq!(lib.songs_in_category(9), 0);
    }

    #[test]
    fn enter_and_leave_category() {
        let mut lib = library();
        lib.enter_category(0);
        assert_eq!(lib.active_category(), Some(0));
        assert_eq!(lib.visible_song_count(), 3);
        assert_eq!(
            lib.visible_song(1).map(|s| s.title.as_str()),
            Some("The Final Countdown")
        );
        lib.show_categories();
        assert_eq!(lib.active_category(), None);
        assert!(lib.visible_song(0).is_none());
    }

    #[test]
    fn enter_out_of_range_is_ignored() {
        let mut lib = library();
        lib.enter_category(7);
        assert_eq!(lib.active_category(), None);
    }

    #[test]
    fn search_filter_is_case_insensitive() {
        let mut lib = library();
        lib.enter_category(0);
        lib.set_search_filter("queen");
        assert_eq!(lib.visible_song_count(), 2);
        assert_eq!(
            lib.visible_song(1).map(|s| s.title.as_str()),
            Some("Don't Stop Me Now")
        );
        lib.set_search_filter("nothing matches");
        assert_eq!(lib.visible_song_count(), 0);
        assert_eq!(lib.search_filter(), "nothing matches");
    }

    #[test]
    fn category_stepping_wraps() {
        let mut lib = library();
        lib.next_category();
        assert_eq!(lib.active_category(), None, "no stepping from the list");
        lib.enter_category(1);
        lib.next_category();
        assert_eq!(lib.active_category(), Some(0));
        lib.prev_category();
        assert_eq!(lib.active_category(), Some(1));
        assert_eq!(lib.visible_song_count(), 1);
    }

    #[test]
    fn playable_length_prefers_finish() {
        let song = SongInfo::new("A", "B").bounds(10.0, 190.0).audio_length(240.0);
        assert_eq!(song.playable_length(), 180.0);
        let song = SongInfo::new("A", "B").bounds(10.0, 0.0).audio_length(240.0);
        assert_eq!(song.playable_length(), 230.0);
        let song = SongInfo::new("A", "B").bounds(30.0, 0.0);
        assert_eq!(song.playable_length(), 0.0);
    }
}
