//! Application configuration. Option defaults from env / config file.

use serde::Deserialize;

pub const DEFAULT_INPUT_PATH: &str = "input.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "cloud.png";
pub const DEFAULT_RECTANGLE_COLOR: &str = "LightSteelBlue";
pub const DEFAULT_BACKGROUND_COLOR: &str = "White";
pub const DEFAULT_BORDER_COLOR: &str = "Black";
pub const DEFAULT_FONT_COLOR: &str = "Black";
pub const DEFAULT_RESOLUTION: &str = "800x600";
pub const DEFAULT_FONT_NAME: &str = "Arial";
pub const DEFAULT_EXCLUDED_WORDS_PATH: &str = "excluded_words.txt";
pub const DEFAULT_EXCLUDED_PARTS_OF_SPEECH_PATH: &str = "excluded_parts_of_speech.txt";

/// Every field is optional; unset fields fall back to the `DEFAULT_*` constants.
/// Values are untyped strings and are validated only by the settings pipeline.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Read from TAGCLOUD_INPUT_PATH.
    #[serde(default)]
    pub input_path: Option<String>,

    /// Read from TAGCLOUD_OUTPUT_PATH.
    #[serde(default)]
    pub output_path: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Colors
    // ─────────────────────────────────────────────────────────────────────────
    /// Read from TAGCLOUD_RECTANGLE_COLOR.
    #[serde(default)]
    pub rectangle_color: Option<String>,

    /// Read from TAGCLOUD_BACKGROUND_COLOR.
    #[serde(default)]
    pub background_color: Option<String>,

    /// Read from TAGCLOUD_BORDER_COLOR.
    #[serde(default)]
    pub border_color: Option<String>,

    /// Read from TAGCLOUD_FONT_COLOR.
    #[serde(default)]
    pub font_color: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────────────────────
    /// `<width>x<height>`. Read from TAGCLOUD_RESOLUTION.
    #[serde(default)]
    pub resolution: Option<String>,

    /// Read from TAGCLOUD_FONT_NAME.
    #[serde(default)]
    pub font_name: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Exclusions
    // ─────────────────────────────────────────────────────────────────────────
    /// Read from TAGCLOUD_EXCLUDED_WORDS_PATH.
    #[serde(default)]
    pub excluded_words_path: Option<String>,

    /// Read from TAGCLOUD_EXCLUDED_PARTS_OF_SPEECH_PATH.
    #[serde(default)]
    pub excluded_parts_of_speech_path: Option<String>,
}

impl AppConfig {
    /// Load from `TAGCLOUD_*` environment variables and, when `TAGCLOUD_CONFIG`
    /// names a file, from that file (toml/yaml/json by extension).
    ///
    /// `.env` must already be loaded by the caller.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("TAGCLOUD_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        // env overrides file
        c = c.add_source(config::Environment::with_prefix("TAGCLOUD"));
        c.build()?.try_deserialize()
    }

    fn or_default(value: &Option<String>, default: &str) -> String {
        value.clone().unwrap_or_else(|| default.to_string())
    }

    pub fn input_path_or_default(&self) -> String {
        Self::or_default(&self.input_path, DEFAULT_INPUT_PATH)
    }

    pub fn output_path_or_default(&self) -> String {
        Self::or_default(&self.output_path, DEFAULT_OUTPUT_PATH)
    }

    pub fn rectangle_color_or_default(&self) -> String {
        Self::or_default(&self.rectangle_color, DEFAULT_RECTANGLE_COLOR)
    }

    pub fn background_color_or_default(&self) -> String {
        Self::or_default(&self.background_color, DEFAULT_BACKGROUND_COLOR)
    }

    pub fn border_color_or_default(&self) -> String {
        Self::or_default(&self.border_color, DEFAULT_BORDER_COLOR)
    }

    pub fn font_color_or_default(&self) -> String {
        Self::or_default(&self.font_color, DEFAULT_FONT_COLOR)
    }

    /// Returns the resolution string. Defaults to "800x600".
    pub fn resolution_or_default(&self) -> String {
        Self::or_default(&self.resolution, DEFAULT_RESOLUTION)
    }

    pub fn font_name_or_default(&self) -> String {
        Self::or_default(&self.font_name, DEFAULT_FONT_NAME)
    }

    pub fn excluded_words_path_or_default(&self) -> String {
        Self::or_default(&self.excluded_words_path, DEFAULT_EXCLUDED_WORDS_PATH)
    }

    pub fn excluded_parts_of_speech_path_or_default(&self) -> String {
        Self::or_default(
            &self.excluded_parts_of_speech_path,
            DEFAULT_EXCLUDED_PARTS_OF_SPEECH_PATH,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.resolution_or_default(), DEFAULT_RESOLUTION);
        assert_eq!(cfg.rectangle_color_or_default(), DEFAULT_RECTANGLE_COLOR);
        assert_eq!(
            cfg.excluded_parts_of_speech_path_or_default(),
            DEFAULT_EXCLUDED_PARTS_OF_SPEECH_PATH
        );
    }

    #[test]
    fn test_deserialize_from_file_source() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "resolution = \"1920x1080\"\nfont_color = \"Navy\"").unwrap();

        let cfg: AppConfig = config::Config::builder()
            .add_source(config::File::from(file.path()))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.resolution_or_default(), "1920x1080");
        assert_eq!(cfg.font_color_or_default(), "Navy");
        assert_eq!(cfg.font_name_or_default(), DEFAULT_FONT_NAME);
    }
}
