//! Command-line argument parsing for `tinct`.
//!
//! Parses args manually and layers `TINCT_*` environment overrides under
//! explicit flags: flags > environment > defaults.

use std::env;
use std::path::PathBuf;
use std::process;

use tinct_color::{TextSize, WcagLevel};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
tinct: accessible colors and design tokens

USAGE:
    tinct <COMMAND> [ARGS] [OPTIONS]

COMMANDS:
    contrast FG BG         Contrast ratio and WCAG compliance of FG on BG
    adjust FG BG           Adjust FG until it meets --level/--size on BG
    variations BASE BG     Accessible base, light, dark, and text colors
    convert HEX            Show a color as hex, RGB, HSL, and OKLCH
    palette BASE           Palette plus default type/space/shadow tokens
    gradient C1 C2 [C..]   OKLCH gradient through two or more stops

OPTIONS:
    --level=LEVEL        WCAG level: 'AA' or 'AAA' (default: AA)
    --size=SIZE          Text size: 'normal' or 'large' (default: normal)
    --format=FORMAT      'text', 'css', or 'json' (default: text for reports,
                         css for palette/gradient)
    --prefix=PREFIX      CSS custom property prefix (default: tinct)
    --out=PATH           Write output to PATH instead of stdout
    --steps=N            Gradient colors to sample (default: 5)
    --angle=DEG          Gradient angle in degrees (default: 90)
    --verbose, -v        Log debug output to stderr
    --help, -h           Show this help message
    --version, -V        Show version

Colors are #RGB or #RRGGBB; quote them so the shell does not treat '#' as a
comment.

ENVIRONMENT VARIABLES:
    TINCT_LEVEL     Override --level default
    TINCT_SIZE      Override --size default
    TINCT_FORMAT    Override --format default
    TINCT_PREFIX    Override --prefix default
    TINCT_OUT       Override --out default
    TINCT_LOG       Tracing filter (e.g. 'tinct_color=trace'; default: warn)";

const DEFAULT_PREFIX: &str = "tinct";
const DEFAULT_STEPS: usize = 5;
const DEFAULT_ANGLE: f64 = 90.0;

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Css,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "css" => Some(Self::Css),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Css => "css",
            Self::Json => "json",
        }
    }
}

/// A subcommand and its positional operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Contrast {
        foreground: String,
        background: String,
    },
    Adjust {
        foreground: String,
        background: String,
    },
    Variations {
        base: String,
        background: String,
    },
    Convert {
        color: String,
    },
    Palette {
        base: String,
    },
    Gradient {
        stops: Vec<String>,
    },
}

impl Command {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Contrast { .. } => "contrast",
            Self::Adjust { .. } => "adjust",
            Self::Variations { .. } => "variations",
            Self::Convert { .. } => "convert",
            Self::Palette { .. } => "palette",
            Self::Gradient { .. } => "gradient",
        }
    }

    fn from_operands(name: &str, operands: Vec<String>) -> Result<Self, ParseError> {
        let mut operands = operands.into_iter();
        let mut next = |label: &'static str| operands.next().ok_or(ParseError::MissingArg(label));

        let command = match name {
            "contrast" => Self::Contrast {
                foreground: next("FG")?,
                background: next("BG")?,
            },
            "adjust" => Self::Adjust {
                foreground: next("FG")?,
                background: next("BG")?,
            },
            "variations" => Self::Variations {
                base: next("BASE")?,
                background: next("BG")?,
            },
            "convert" => Self::Convert {
                color: next("HEX")?,
            },
            "palette" => Self::Palette {
                base: next("BASE")?,
            },
            "gradient" => {
                let mut stops = vec![next("C1")?, next("C2")?];
                stops.extend(operands);
                return Ok(Self::Gradient { stops });
            }
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };

        match operands.next() {
            Some(extra) => Err(ParseError::UnknownArg(extra)),
            None => Ok(command),
        }
    }
}

/// Parsed command-line options.
#[derive(Debug, Clone)]
pub struct Opts {
    pub command: Command,
    /// WCAG level for `adjust`.
    pub level: WcagLevel,
    /// Text size for `contrast` and `adjust`.
    pub size: TextSize,
    /// `None` lets the command pick its natural format.
    pub format: Option<OutputFormat>,
    /// CSS custom property prefix.
    pub prefix: String,
    /// Output file; stdout when `None`.
    pub out: Option<PathBuf>,
    /// Gradient sample count.
    pub steps: usize,
    /// Gradient angle in degrees.
    pub angle: f64,
    pub verbose: bool,
    /// Tracing filter directives from `TINCT_LOG`.
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Help,
    Version,
    MissingArg(&'static str),
    InvalidValue { flag: &'static str, value: String },
    UnknownArg(String),
    UnknownCommand(String),
}

fn parse_level(value: &str) -> Option<WcagLevel> {
    match value.trim().to_ascii_uppercase().as_str() {
        "AA" => Some(WcagLevel::Aa),
        "AAA" => Some(WcagLevel::Aaa),
        _ => None,
    }
}

fn parse_size(value: &str) -> Option<TextSize> {
    match value.trim().to_ascii_lowercase().as_str() {
        "normal" => Some(TextSize::Normal),
        "large" => Some(TextSize::Large),
        _ => None,
    }
}

fn invalid(flag: &'static str, value: &str) -> ParseError {
    ParseError::InvalidValue {
        flag,
        value: value.to_string(),
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseError::Version) => {
                println!("tinct {VERSION}");
                process::exit(0);
            }
            Err(ParseError::MissingArg(name)) => {
                eprintln!("Missing argument: {name}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
            Err(ParseError::InvalidValue { flag, value }) => {
                eprintln!("Invalid {flag} value: {value}");
                process::exit(1);
            }
            Err(ParseError::UnknownArg(arg)) => {
                eprintln!("Unknown argument: {arg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
            Err(ParseError::UnknownCommand(name)) => {
                eprintln!("Unknown command: {name}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse with an injectable environment lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for help/version requests and for any
    /// malformed, missing, or unknown argument. Malformed environment values
    /// are ignored.
    pub fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut level = WcagLevel::default();
        let mut size = TextSize::default();
        let mut format = None;
        let mut prefix = DEFAULT_PREFIX.to_string();
        let mut out = None;
        let mut steps = DEFAULT_STEPS;
        let mut angle = DEFAULT_ANGLE;
        let mut verbose = false;

        // Apply environment variable defaults first
        if let Some(val) = get_env("TINCT_LEVEL")
            && let Some(parsed) = parse_level(&val)
        {
            level = parsed;
        }
        if let Some(val) = get_env("TINCT_SIZE")
            && let Some(parsed) = parse_size(&val)
        {
            size = parsed;
        }
        if let Some(val) = get_env("TINCT_FORMAT")
            && let Some(parsed) = OutputFormat::parse(&val)
        {
            format = Some(parsed);
        }
        if let Some(val) = get_env("TINCT_PREFIX") {
            prefix = val.trim().to_string();
        }
        if let Some(val) = get_env("TINCT_OUT")
            && !val.trim().is_empty()
        {
            out = Some(PathBuf::from(val));
        }
        let log_filter = get_env("TINCT_LOG").filter(|val| !val.trim().is_empty());

        // Parse command-line args (override env vars)
        let mut positionals = Vec::new();
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Err(ParseError::Help),
                "--version" | "-V" => return Err(ParseError::Version),
                "--verbose" | "-v" => verbose = true,
                other => {
                    if let Some(val) = other.strip_prefix("--level=") {
                        level = parse_level(val).ok_or_else(|| invalid("--level", val))?;
                    } else if let Some(val) = other.strip_prefix("--size=") {
                        size = parse_size(val).ok_or_else(|| invalid("--size", val))?;
                    } else if let Some(val) = other.strip_prefix("--format=") {
                        format = Some(
                            OutputFormat::parse(val).ok_or_else(|| invalid("--format", val))?,
                        );
                    } else if let Some(val) = other.strip_prefix("--prefix=") {
                        prefix = val.to_string();
                    } else if let Some(val) = other.strip_prefix("--out=") {
                        if val.is_empty() {
                            return Err(invalid("--out", val));
                        }
                        out = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--steps=") {
                        steps = match val.parse() {
                            Ok(n) if n >= 2 => n,
                            _ => return Err(invalid("--steps", val)),
                        };
                    } else if let Some(val) = other.strip_prefix("--angle=") {
                        angle = match val.parse::<f64>() {
                            Ok(deg) if deg.is_finite() => deg,
                            _ => return Err(invalid("--angle", val)),
                        };
                    } else if other.starts_with('-') && other.len() > 1 {
                        return Err(ParseError::UnknownArg(other.to_string()));
                    } else {
                        positionals.push(other.to_string());
                    }
                }
            }
        }

        if positionals.is_empty() {
            return Err(ParseError::MissingArg("COMMAND"));
        }
        let name = positionals.remove(0);
        let command = Command::from_operands(&name, positionals)?;

        Ok(Self {
            command,
            level,
            size,
            format,
            prefix,
            out,
            steps,
            angle,
            verbose,
            log_filter,
        })
    }
}
