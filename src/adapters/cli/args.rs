//! Command-line surface. Maps process arguments onto a flat `Options` record.
//!
//! Values missing on the command line fall back to `AppConfig` (env / config file),
//! then to built-in defaults.

use crate::domain::Options;
use crate::shared::config::AppConfig;
use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "tags-cloud", version, about = "Tag cloud generator")]
pub struct CliArgs {
    /// Text file with the words to lay out
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output image path; the extension selects the format
    #[arg(short, long)]
    pub output: Option<String>,

    /// Rectangle fill color (name or #RRGGBB)
    #[arg(long)]
    pub rectangle_color: Option<String>,

    /// Background fill color
    #[arg(long)]
    pub background_color: Option<String>,

    /// Rectangle border color
    #[arg(long)]
    pub border_color: Option<String>,

    /// Text color
    #[arg(long)]
    pub font_color: Option<String>,

    /// Image size as <width>x<height>, e.g. 800x600
    #[arg(short, long)]
    pub resolution: Option<String>,

    /// Font family name
    #[arg(short, long)]
    pub font: Option<String>,

    /// File with words to exclude
    #[arg(long)]
    pub excluded_words: Option<String>,

    /// File with parts of speech to exclude
    #[arg(long = "excluded-pos")]
    pub excluded_parts_of_speech: Option<String>,

    /// Validate settings and print them as JSON without writing an image
    #[arg(long)]
    pub check: bool,
}

impl CliArgs {
    /// Merge with `cfg`: command line wins, then config, then defaults.
    pub fn into_options(self, cfg: &AppConfig) -> Options {
        Options {
            input_path: self.input.unwrap_or_else(|| cfg.input_path_or_default()),
            output_path: self.output.unwrap_or_else(|| cfg.output_path_or_default()),
            rectangle_color: self
                .rectangle_color
                .unwrap_or_else(|| cfg.rectangle_color_or_default()),
            background_color: self
                .background_color
                .unwrap_or_else(|| cfg.background_color_or_default()),
            rectangle_border_color: self
                .border_color
                .unwrap_or_else(|| cfg.border_color_or_default()),
            font_color: self.font_color.unwrap_or_else(|| cfg.font_color_or_default()),
            resolution: self.resolution.unwrap_or_else(|| cfg.resolution_or_default()),
            font_name: self.font.unwrap_or_else(|| cfg.font_name_or_default()),
            excluded_words_path: self
                .excluded_words
                .unwrap_or_else(|| cfg.excluded_words_path_or_default()),
            excluded_parts_of_speech_path: self
                .excluded_parts_of_speech
                .unwrap_or_else(|| cfg.excluded_parts_of_speech_path_or_default()),
        }
    }
}
