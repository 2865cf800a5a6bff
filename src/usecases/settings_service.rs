//! Settings resolution: raw options -> validated, immutable `Settings`.
//!
//! - Resolves the four colors, both exclusion sets and the resolution, in that order
//! - Fail-fast: the first failing step aborts and its error is surfaced unchanged
//! - Runs once per `SettingsProvider`; the outcome is cached for all readers

use crate::domain::{Brush, ColoringOptions, DomainError, Options, Pen, Resolution, Settings};
use crate::ports::{SettingsPort, WordListSource};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Settings provider. Resolves options eagerly on construction and serves the
/// cached outcome afterwards.
#[derive(Debug)]
pub struct SettingsProvider {
    settings: Result<Settings, DomainError>,
}

impl SettingsProvider {
    /// Resolve `options` using `word_lists` for the exclusion files.
    ///
    /// Never panics on bad input; failures are kept and returned by
    /// [`SettingsPort::settings`].
    pub fn new(options: &Options, word_lists: &dyn WordListSource) -> Self {
        let settings = resolve_settings(options, word_lists);
        match &settings {
            Ok(s) => info!(
                input = %s.input_path(),
                output = %s.output_path(),
                resolution = %s.resolution(),
                font = %s.font_name(),
                excluded_words = s.excluded_words().len(),
                excluded_parts_of_speech = s.excluded_parts_of_speech().len(),
                "settings resolved"
            ),
            Err(e) => warn!(error = %e, "settings resolution failed"),
        }
        Self { settings }
    }

    /// Take the terminal outcome by value.
    pub fn into_settings(self) -> Result<Settings, DomainError> {
        self.settings
    }
}

impl SettingsPort for SettingsProvider {
    fn settings(&self) -> Result<&Settings, &DomainError> {
        self.settings.as_ref()
    }
}

/// Run the whole pipeline once. Returns the first error encountered.
pub fn resolve_settings(
    options: &Options,
    word_lists: &dyn WordListSource,
) -> Result<Settings, DomainError> {
    let coloring_options = resolve_coloring_options(options)?;
    let excluded_words = load_exclusion_set(&options.excluded_words_path, word_lists)?;
    let excluded_parts_of_speech =
        load_exclusion_set(&options.excluded_parts_of_speech_path, word_lists)?;
    let resolution = Resolution::parse(&options.resolution)?;
    debug!(%resolution, "resolution parsed");

    Ok(Settings::new(
        options.input_path.clone(),
        options.output_path.clone(),
        coloring_options,
        excluded_words,
        excluded_parts_of_speech,
        resolution,
        options.font_name.clone(),
    ))
}

/// Resolve rectangle fill, background fill, border pen and text brush.
pub fn resolve_coloring_options(options: &Options) -> Result<ColoringOptions, DomainError> {
    let coloring = ColoringOptions {
        rectangle_fill: Brush::from_color_name(&options.rectangle_color)?,
        background_fill: Brush::from_color_name(&options.background_color)?,
        rectangle_border: Pen::from_color_name(&options.rectangle_border_color)?,
        text: Brush::from_color_name(&options.font_color)?,
    };
    debug!(
        rectangle = %coloring.rectangle_fill.color,
        background = %coloring.background_fill.color,
        border = %coloring.rectangle_border.color,
        text = %coloring.text.color,
        "colors resolved"
    );
    Ok(coloring)
}

/// Load the word list at `path` and collapse duplicates.
pub fn load_exclusion_set(
    path: &str,
    word_lists: &dyn WordListSource,
) -> Result<BTreeSet<String>, DomainError> {
    let words = word_lists.parse_file(path)?;
    let total = words.len();
    let set: BTreeSet<String> = words.into_iter().collect();
    debug!(path, total, unique = set.len(), "exclusion list loaded");
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::InMemoryWordListSource;
    use crate::domain::Color;

    const WORDS: &str = "words.txt";
    const POS: &str = "pos.txt";

    fn options() -> Options {
        Options {
            input_path: "input.txt".to_string(),
            output_path: "cloud.png".to_string(),
            rectangle_color: "Red".to_string(),
            background_color: "White".to_string(),
            rectangle_border_color: "Black".to_string(),
            font_color: "Black".to_string(),
            resolution: "1024x768".to_string(),
            font_name: "Arial".to_string(),
            excluded_words_path: WORDS.to_string(),
            excluded_parts_of_speech_path: POS.to_string(),
        }
    }

    fn source(words: &[&str], pos: &[&str]) -> InMemoryWordListSource {
        InMemoryWordListSource::new()
            .with_list(WORDS, words.iter().copied())
            .with_list(POS, pos.iter().copied())
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_scenario() {
        let provider = SettingsProvider::new(&options(), &source(&["the", "a"], &[]));

        let settings = provider.settings().unwrap();
        assert_eq!(settings.resolution().as_u32_tuple(), (1024, 768));
        assert_eq!(settings.excluded_words(), &set(&["the", "a"]));
        assert!(settings.excluded_parts_of_speech().is_empty());
        assert_eq!(settings.input_path(), "input.txt");
        assert_eq!(settings.output_path(), "cloud.png");
        assert_eq!(settings.font_name(), "Arial");

        let coloring = provider.coloring_options().unwrap();
        assert_eq!(coloring.rectangle_fill, Brush::solid(Color::from_rgb(255, 0, 0)));
        assert_eq!(coloring.background_fill, Brush::solid(Color::from_rgb(255, 255, 255)));
        assert_eq!(coloring.rectangle_border, Pen::new(Color::from_rgb(0, 0, 0)));
        assert_eq!(coloring.text, Brush::solid(Color::from_rgb(0, 0, 0)));
    }

    #[test]
    fn test_resolve_calls_each_collaborator_once_per_file() {
        let words = source(&["x"], &["y"]);
        let provider = SettingsProvider::new(&options(), &words);
        assert!(provider.is_resolved());
        assert_eq!(words.call_count(), 2);

        // reads do not re-resolve
        let _ = provider.settings();
        let _ = provider.coloring_options();
        assert_eq!(words.call_count(), 2);
    }

    #[test]
    fn test_resolve_idempotent_reads() {
        let provider = SettingsProvider::new(&options(), &source(&["a"], &["b"]));
        assert_eq!(provider.settings(), provider.settings());

        let mut bad = options();
        bad.resolution = "800600".to_string();
        let failed = SettingsProvider::new(&bad, &source(&[], &[]));
        assert_eq!(failed.settings(), failed.settings());
    }

    #[test]
    fn test_resolve_deduplicates_words() {
        let provider = SettingsProvider::new(&options(), &source(&["a", "b", "a"], &[]));
        let words = provider.settings().unwrap().excluded_words();
        assert_eq!(words.len(), 2);
        assert_eq!(words, &set(&["a", "b"]));
    }

    #[test]
    fn test_resolve_bad_resolution_separator() {
        for raw in ["800600", "8x00x600"] {
            let mut opts = options();
            opts.resolution = raw.to_string();
            let provider = SettingsProvider::new(&opts, &source(&[], &[]));
            assert!(
                matches!(provider.settings(), Err(DomainError::Resolution(_))),
                "{raw} should fail"
            );
        }
    }

    #[test]
    fn test_resolve_bad_resolution_integer() {
        let mut opts = options();
        opts.resolution = "800xabc".to_string();
        let provider = SettingsProvider::new(&opts, &source(&[], &[]));
        let err = provider.settings().unwrap_err();
        assert!(err.to_string().contains("800xabc"));
    }

    #[test]
    fn test_resolve_non_positive_resolution() {
        let mut opts = options();
        opts.resolution = "0x768".to_string();
        assert!(resolve_settings(&opts, &source(&[], &[])).is_err());
    }

    #[test]
    fn test_resolve_unknown_color_fails_fast() {
        let mut opts = options();
        opts.rectangle_color = "notacolor".to_string();
        let words = source(&["a"], &[]);
        let provider = SettingsProvider::new(&opts, &words);

        assert_eq!(
            provider.settings().unwrap_err(),
            &DomainError::UnknownColor("notacolor".to_string())
        );
        assert!(provider.coloring_options().is_err());
        // colors come first: no word list was read
        assert_eq!(words.call_count(), 0);
    }

    #[test]
    fn test_resolve_each_color_role_checked() {
        for field in 0..4 {
            let mut opts = options();
            let slot = match field {
                0 => &mut opts.rectangle_color,
                1 => &mut opts.background_color,
                2 => &mut opts.rectangle_border_color,
                _ => &mut opts.font_color,
            };
            *slot = "Reddish".to_string();
            assert_eq!(
                resolve_settings(&opts, &source(&[], &[])),
                Err(DomainError::UnknownColor("Reddish".to_string()))
            );
        }
    }

    #[test]
    fn test_resolve_missing_word_list() {
        let mut opts = options();
        opts.excluded_parts_of_speech_path = "missing.txt".to_string();
        let words = source(&["a"], &[]);
        let err = SettingsProvider::new(&opts, &words)
            .into_settings()
            .unwrap_err();

        assert!(matches!(err, DomainError::WordList(ref msg) if msg.contains("missing.txt")));
        assert_eq!(words.call_count(), 2);
    }

    #[test]
    fn test_resolve_first_error_wins() {
        let mut opts = options();
        opts.excluded_words_path = "missing.txt".to_string();
        opts.resolution = "bad".to_string();
        let err = resolve_settings(&opts, &source(&[], &[])).unwrap_err();
        assert!(matches!(err, DomainError::WordList(_)));
    }

    #[test]
    fn test_resolve_with_files() {
        use crate::adapters::persistence::FsWordListSource;
        use std::fs;

        let dir = tempfile::tempdir().unwrap();
        let words_path = dir.path().join("words.txt");
        let pos_path = dir.path().join("pos.txt");
        fs::write(&words_path, "the\na\nthe\n").unwrap();
        fs::write(&pos_path, "PREP CONJ\n").unwrap();

        let mut opts = options();
        opts.excluded_words_path = words_path.to_str().unwrap().to_string();
        opts.excluded_parts_of_speech_path = pos_path.to_str().unwrap().to_string();

        let settings = SettingsProvider::new(&opts, &FsWordListSource::new())
            .into_settings()
            .unwrap();
        assert_eq!(settings.excluded_words(), &set(&["a", "the"]));
        assert_eq!(settings.excluded_parts_of_speech(), &set(&["CONJ", "PREP"]));
    }

    #[test]
    fn test_resolve_deterministic() {
        let a = resolve_settings(&options(), &source(&["b", "a", "c"], &["noun"])).unwrap();
        let b = resolve_settings(&options(), &source(&["c", "a", "b"], &["noun"])).unwrap();
        assert_eq!(format!("{a:?}"), format!("{b:?}"));
    }
}
