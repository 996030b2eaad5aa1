//! `mention_hashtag` - print text with mentions and hashtags highlighted
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin mention_hashtag -- "ping @someone about #rust"
//! echo "hello @world" | cargo run --bin mention_hashtag -- --min-mention 3
//! cargo run --bin mention_hashtag -- --extract "cc @alice #news"
//! ```

use mention_hashtag_text::extract::{extract_tokens, unique};
use mention_hashtag_text::{
    Color, ColorMode, Error, LengthMethod, MentionHashtagConfig, Result, Style, render_ansi,
};
use std::ffi::OsString;
use std::io::{self, IsTerminal, Read, Write};

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "mention_hashtag - highlight @mentions and #hashtags in text

USAGE:
    mention_hashtag [OPTIONS] [TEXT]...

Words of TEXT are joined with spaces. Without TEXT, stdin is read.

OPTIONS:
    -h, --help                Print this help message and exit
    --min-mention <N>         Mentions longer than N are highlighted (default: 5)
    --min-hashtag <N>         Hashtags longer than N are highlighted (default: 1)
    --mention-color <HEX>     Mention color, #RGB or #RRGGBB (default: #1d9bf0)
    --hashtag-color <HEX>     Hashtag color, #RGB or #RRGGBB (default: #17bf63)
    --length-method <NAME>    How token length is counted: utf16, chars,
                              graphemes (default: utf16)
    --color-mode <NAME>       truecolor, 256, 16, none (default: detect)
    --no-space                Do not append a space after each word
    --disabled                Mark tokens inert; they keep their colors
    --extract                 Print each distinct mention or hashtag once,
                              in input order, one per line

EXAMPLES:
    mention_hashtag \"hi @everyone\"              # Highlight one mention
    mention_hashtag --min-mention 0 \"@a @b\"     # Highlight every mention
    cat notes.txt | mention_hashtag --color-mode 256
";

const DEFAULT_MENTION_COLOR: Color = Color::rgb(0x1d, 0x9b, 0xf0);
const DEFAULT_HASHTAG_COLOR: Color = Color::rgb(0x17, 0xbf, 0x63);

/// Options parsed from command-line arguments.
#[derive(Clone, Debug)]
#[allow(clippy::struct_excessive_bools)] // Flags map one to one onto switches
pub struct Config {
    pub min_mention: i32,
    pub min_hashtag: i32,
    pub mention_color: Color,
    pub hashtag_color: Color,
    pub length_method: LengthMethod,
    /// `None` detects from the environment.
    pub color_mode: Option<ColorMode>,
    pub with_space: bool,
    pub disabled: bool,
    pub extract: bool,
    /// Positional words; empty means read stdin.
    pub words: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let defaults = MentionHashtagConfig::default();
        Self {
            min_mention: defaults.min_mention_length,
            min_hashtag: defaults.min_hashtag_length,
            mention_color: DEFAULT_MENTION_COLOR,
            hashtag_color: DEFAULT_HASHTAG_COLOR,
            length_method: defaults.length_method,
            color_mode: None,
            with_space: defaults.with_space,
            disabled: defaults.disabled,
            extract: false,
            words: Vec::new(),
        }
    }
}

/// Result of CLI parsing.
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error.
    Error(Error),
}

fn next_value<I>(args: &mut I, flag: &str) -> Result<String>
where
    I: Iterator<Item = OsString>,
{
    args.next()
        .map(|v| v.to_string_lossy().into_owned())
        .ok_or_else(|| Error::MissingValue(flag.to_string()))
}

fn parse_with<T>(flag: &str, value: String, parse: impl FnOnce(&str) -> Option<T>) -> Result<T> {
    parse(&value).ok_or_else(|| Error::InvalidArgument {
        flag: flag.to_string(),
        value,
    })
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        match Self::try_from_args(args) {
            Ok(Some(config)) => ParseResult::Config(config),
            Ok(None) => ParseResult::Help,
            Err(err) => ParseResult::Error(err),
        }
    }

    fn try_from_args<I>(args: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        let mut positional_only = false;

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy().into_owned();
            if positional_only {
                config.words.push(arg_str);
                continue;
            }

            match arg_str.as_str() {
                "-h" | "--help" => return Ok(None),
                "--" => positional_only = true,

                "--min-mention" | "--min-hashtag" => {
                    let value = next_value(&mut args, &arg_str)?;
                    let n = parse_with(&arg_str, value, |v| v.parse::<i32>().ok())?;
                    if arg_str == "--min-mention" {
                        config.min_mention = n;
                    } else {
                        config.min_hashtag = n;
                    }
                }

                "--mention-color" => {
                    let value = next_value(&mut args, &arg_str)?;
                    config.mention_color = Color::parse_hex(&value)?;
                }
                "--hashtag-color" => {
                    let value = next_value(&mut args, &arg_str)?;
                    config.hashtag_color = Color::parse_hex(&value)?;
                }

                "--length-method" => {
                    let value = next_value(&mut args, &arg_str)?;
                    config.length_method = parse_with(&arg_str, value, LengthMethod::from_name)?;
                }
                "--color-mode" => {
                    let value = next_value(&mut args, &arg_str)?;
                    if value.eq_ignore_ascii_case("auto") {
                        config.color_mode = None;
                    } else {
                        config.color_mode =
                            Some(parse_with(&arg_str, value, ColorMode::from_name)?);
                    }
                }

                "--no-space" => config.with_space = false,
                "--disabled" => config.disabled = true,
                "--extract" => config.extract = true,

                other if other.starts_with("--") => {
                    return Err(Error::InvalidArgument {
                        flag: "option".to_string(),
                        value: other.to_string(),
                    });
                }
                _ => config.words.push(arg_str),
            }
        }

        Ok(Some(config))
    }

    /// Library configuration for a render call.
    #[must_use]
    pub fn render_config(&self) -> MentionHashtagConfig {
        MentionHashtagConfig::default()
            .min_mention_length(self.min_mention)
            .min_hashtag_length(self.min_hashtag)
            .mention_style(Style::fg(self.mention_color).with_bold())
            .hashtag_style(Style::fg(self.hashtag_color))
            .length_method(self.length_method)
            .with_space(self.with_space)
            .disabled(self.disabled)
    }

    /// Color mode to write with; explicit choice wins over detection.
    #[must_use]
    pub fn resolved_color_mode(&self, is_tty: bool) -> ColorMode {
        match self.color_mode {
            Some(mode) => mode,
            None if is_tty => ColorMode::detect(),
            None => ColorMode::NoColor,
        }
    }
}

fn main() {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => {
            if let Err(err) = run(&config) {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        }
        ParseResult::Help => print!("{HELP_TEXT}"),
        ParseResult::Error(err) => {
            eprintln!("Error: {err}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(2);
        }
    }
}

/// One line per distinct pressable token, first occurrence order.
fn write_extracted(
    out: &mut impl Write,
    input: &str,
    config: &MentionHashtagConfig,
) -> io::Result<()> {
    for token in unique(extract_tokens(input, config)) {
        writeln!(out, "{token}")?;
    }
    Ok(())
}

fn run(config: &Config) -> Result<()> {
    let input = if config.words.is_empty() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        // Keep inner line breaks but not the final newline from `echo`.
        if buf.ends_with('\n') {
            buf.pop();
        }
        buf
    } else {
        config.words.join(" ")
    };

    let render_config = config.render_config();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if config.extract {
        write_extracted(&mut out, &input, &render_config)?;
        out.flush()?;
        return Ok(());
    }

    let mode = config.resolved_color_mode(io::stdout().is_terminal());
    let mut out = render_ansi(Some(input.as_str()), &render_config, mode, out)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
