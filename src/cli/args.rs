//! CLI argument parsing with clap.

use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::Config;
use crate::RenderOptions;

/// Parse and validate the output width (must be > 0)
fn parse_width(s: &str) -> Result<u32, String> {
    let width: i64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid width", s))?;
    if width <= 0 {
        return Err(format!("Width must be > 0, got {}", width));
    }
    u32::try_from(width).map_err(|_| format!("Width {} is too large", width))
}

/// Parse and validate the character aspect ratio (finite, > 0)
fn parse_char_aspect(s: &str) -> Result<f32, String> {
    let aspect: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !aspect.is_finite() || aspect <= 0.0 {
        return Err(format!("Character aspect must be > 0, got {}", aspect));
    }
    Ok(aspect)
}

/// Render an image as ASCII art in the terminal
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about = "Render JPEG and PNG images as ASCII art", long_about = None)]
#[command(after_help = "EXAMPLES:
    # 80 columns, dark glyphs for dark pixels
    asciify -f photo.jpg -w 80

    # Light-on-dark terminal, truecolor
    asciify --file photo.png --width 120 --invert --color")]
pub struct Args {
    /// Image file to convert (JPEG or PNG)
    #[arg(short, long, value_name = "PATH")]
    pub file: PathBuf,

    /// Output width in characters
    #[arg(short, long, value_parser = parse_width)]
    pub width: u32,

    /// Invert brightness mapping (for dark terminals)
    #[arg(short, long)]
    pub invert: bool,

    /// Use 24-bit ANSI color output
    #[arg(short, long)]
    pub color: bool,

    /// Terminal character height/width ratio [default: 2.0]
    #[arg(long, value_parser = parse_char_aspect)]
    pub char_aspect: Option<f32>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Silence all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Log level selected by `-v` / `-q`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Merge flags over config values. Flags win.
    pub fn render_options(&self, config: &Config) -> RenderOptions {
        RenderOptions {
            columns: self.width,
            invert: self.invert || config.render.invert,
            color: self.color || config.render.color,
            char_aspect: self.char_aspect.unwrap_or_else(|| config.char_aspect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::DEFAULT_CHAR_ASPECT_RATIO;
    use crate::config::RenderConfig;

    #[test]
    fn test_args_required_only() {
        let args = Args::parse_from(["asciify", "--file", "a.png", "--width", "80"]);
        assert_eq!(args.file, PathBuf::from("a.png"));
        assert_eq!(args.width, 80);
        assert!(!args.invert);
        assert!(!args.color);
        assert!(args.char_aspect.is_none());
        assert!(args.config.is_none());
        assert_eq!(args.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["asciify", "-f", "a.jpg", "-w", "10", "-i", "-c"]);
        assert_eq!(args.width, 10);
        assert!(args.invert);
        assert!(args.color);
    }

    #[test]
    fn test_args_missing_file_rejected() {
        assert!(Args::try_parse_from(["asciify", "-w", "10"]).is_err());
    }

    #[test]
    fn test_args_missing_width_rejected() {
        assert!(Args::try_parse_from(["asciify", "-f", "a.png"]).is_err());
    }

    #[test]
    fn test_args_non_positive_width_rejected() {
        assert!(Args::try_parse_from(["asciify", "-f", "a.png", "-w", "0"]).is_err());
        assert!(Args::try_parse_from(["asciify", "-f", "a.png", "--width=-3"]).is_err());
        assert!(Args::try_parse_from(["asciify", "-f", "a.png", "-w", "wide"]).is_err());
    }

    #[test]
    fn test_parse_width_messages() {
        assert_eq!(parse_width("12"), Ok(12));
        assert_eq!(parse_width("0"), Err("Width must be > 0, got 0".to_string()));
        assert!(parse_width("99999999999").is_err());
    }

    #[test]
    fn test_args_char_aspect() {
        let args = Args::parse_from(["asciify", "-f", "a.png", "-w", "8", "--char-aspect", "2.5"]);
        assert_eq!(args.char_aspect, Some(2.5));
        assert!(Args::try_parse_from(["asciify", "-f", "a.png", "-w", "8", "--char-aspect", "0"]).is_err());
    }

    #[test]
    fn test_args_verbosity() {
        let args = Args::parse_from(["asciify", "-f", "a.png", "-w", "8", "-vv"]);
        assert_eq!(args.log_level(), LevelFilter::Debug);

        let args = Args::parse_from(["asciify", "-f", "a.png", "-w", "8", "-q"]);
        assert_eq!(args.log_level(), LevelFilter::Off);

        assert!(Args::try_parse_from(["asciify", "-f", "a.png", "-w", "8", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_render_options_defaults() {
        let args = Args::parse_from(["asciify", "-f", "a.png", "-w", "8"]);
        let options = args.render_options(&Config::default());
        assert_eq!(options, RenderOptions::new(8));
        assert_eq!(options.char_aspect, DEFAULT_CHAR_ASPECT_RATIO);
    }

    #[test]
    fn test_render_options_config_and_flags_merge() {
        let config = Config {
            render: RenderConfig {
                invert: true,
                color: false,
                char_aspect: Some(1.5),
            },
        };

        let args = Args::parse_from(["asciify", "-f", "a.png", "-w", "8", "-c"]);
        let options = args.render_options(&config);
        assert!(options.invert);
        assert!(options.color);
        assert_eq!(options.char_aspect, 1.5);

        let args = Args::parse_from(["asciify", "-f", "a.png", "-w", "8", "--char-aspect", "3"]);
        assert_eq!(args.render_options(&config).char_aspect, 3.0);
    }
}
