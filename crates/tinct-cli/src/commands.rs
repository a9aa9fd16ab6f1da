//! Command execution. Each command renders to a `String`; [`write_output`]
//! sends it to stdout or `--out`.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write as _};
use std::path::Path;

use serde::Serialize;
use tinct_color::{
    AdjustmentResult, ColorVariations, Hsl, Oklch, Rgb, TextSize, WcagCompliance,
    adjust_color_for_contrast, calculate_contrast, generate_accessible_variations, hex_to_rgb,
    rgb_to_hex, rgb_to_hsl, rgb_to_oklch, wcag_compliance,
};
use tinct_tokens::{TokenSet, generate_gradient};
use tracing::{debug, info};

use crate::cli::{Command, Opts, OutputFormat};
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct ContrastReport<'a> {
    foreground: &'a str,
    background: &'a str,
    size: TextSize,
    #[serde(flatten)]
    compliance: WcagCompliance,
}

#[derive(Debug, Serialize)]
struct ConvertReport {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
    oklch: Oklch,
}

fn pass(ok: bool) -> &'static str {
    if ok { "pass" } else { "fail" }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Reports render as text unless JSON was asked for.
fn report_format(opts: &Opts) -> Result<OutputFormat, CliError> {
    match opts.format {
        None | Some(OutputFormat::Text) => Ok(OutputFormat::Text),
        Some(OutputFormat::Json) => Ok(OutputFormat::Json),
        Some(OutputFormat::Css) => Err(CliError::Unsupported {
            command: opts.command.name(),
            flag: "--format=css".to_string(),
        }),
    }
}

/// Token documents render as CSS unless JSON was asked for.
fn token_format(opts: &Opts) -> OutputFormat {
    match opts.format {
        Some(OutputFormat::Json) => OutputFormat::Json,
        _ => OutputFormat::Css,
    }
}

fn contrast(opts: &Opts, foreground: &str, background: &str) -> Result<String, CliError> {
    let ratio = calculate_contrast(foreground, background)?;
    let compliance = wcag_compliance(ratio, opts.size);

    if report_format(opts)? == OutputFormat::Json {
        return to_json(&ContrastReport {
            foreground,
            background,
            size: opts.size,
            compliance,
        });
    }

    let mut out = String::new();
    let _ = writeln!(out, "contrast: {ratio:.2}:1");
    let _ = writeln!(out, "AA:       {}", pass(compliance.aa));
    let _ = writeln!(out, "AAA:      {}", pass(compliance.aaa));
    let _ = writeln!(out, "level:    {} ({} text)", compliance.level, opts.size);
    Ok(out)
}

fn adjust(opts: &Opts, foreground: &str, background: &str) -> Result<String, CliError> {
    let result: AdjustmentResult =
        adjust_color_for_contrast(foreground, background, opts.level, opts.size)?;

    if report_format(opts)? == OutputFormat::Json {
        return to_json(&result);
    }

    let mut out = String::new();
    let _ = writeln!(out, "original:   {}", result.original);
    let _ = writeln!(out, "adjusted:   {}", result.adjusted);
    let _ = writeln!(
        out,
        "ratio:      {:.2}:1 (target {} {}: {}:1)",
        result.ratio,
        opts.level,
        opts.size,
        opts.level.min_ratio(opts.size)
    );
    let _ = writeln!(out, "strategy:   {}", result.strategy);
    let _ = writeln!(out, "iterations: {}", result.iterations);
    Ok(out)
}

fn variations(opts: &Opts, base: &str, background: &str) -> Result<String, CliError> {
    let variations: ColorVariations = generate_accessible_variations(base, background)?;

    if report_format(opts)? == OutputFormat::Json {
        return to_json(&variations);
    }

    let mut out = String::new();
    let _ = writeln!(out, "base:  {}", variations.base);
    let _ = writeln!(out, "light: {}", variations.light);
    let _ = writeln!(out, "dark:  {}", variations.dark);
    let _ = writeln!(out, "text:  {}", variations.text);
    Ok(out)
}

fn convert(opts: &Opts, color: &str) -> Result<String, CliError> {
    let rgb = hex_to_rgb(color)?;
    let report = ConvertReport {
        hex: rgb_to_hex(rgb),
        rgb,
        hsl: rgb_to_hsl(rgb),
        oklch: rgb_to_oklch(rgb),
    };

    if report_format(opts)? == OutputFormat::Json {
        return to_json(&report);
    }

    let ConvertReport {
        hex,
        rgb,
        hsl,
        oklch,
    } = report;
    let mut out = String::new();
    let _ = writeln!(out, "hex:   {hex}");
    let _ = writeln!(out, "rgb:   rgb({}, {}, {})", rgb.r, rgb.g, rgb.b);
    let _ = writeln!(out, "hsl:   hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l);
    let _ = writeln!(
        out,
        "oklch: oklch({:.4} {:.4} {:.2})",
        oklch.l, oklch.c, oklch.h
    );
    Ok(out)
}

fn render_tokens(opts: &Opts, tokens: &TokenSet) -> Result<String, CliError> {
    match token_format(opts) {
        OutputFormat::Json => Ok(tokens.to_json()?),
        _ => Ok(tokens.to_css(&opts.prefix)),
    }
}

fn palette(opts: &Opts, base: &str) -> Result<String, CliError> {
    let tokens = TokenSet::from_base(base)?;
    render_tokens(opts, &tokens)
}

fn gradient(opts: &Opts, stops: &[String]) -> Result<String, CliError> {
    let stops: Vec<&str> = stops.iter().map(String::as_str).collect();
    let gradient = generate_gradient(&stops, opts.steps)?;
    let mut tokens = TokenSet::new();
    tokens.add_gradient("main", &gradient, opts.angle);
    render_tokens(opts, &tokens)
}

/// Run the parsed command and return its rendered output.
///
/// # Errors
///
/// Returns a [`CliError`] for malformed colors, invalid generator input, or a
/// format the command does not support.
pub fn run(opts: &Opts) -> Result<String, CliError> {
    debug!(command = opts.command.name(), "running command");
    match &opts.command {
        Command::Contrast {
            foreground,
            background,
        } => contrast(opts, foreground, background),
        Command::Adjust {
            foreground,
            background,
        } => adjust(opts, foreground, background),
        Command::Variations { base, background } => variations(opts, base, background),
        Command::Convert { color } => convert(opts, color),
        Command::Palette { base } => palette(opts, base),
        Command::Gradient { stops } => gradient(opts, stops),
    }
}

/// Write `output` to `path`, or to stdout when `path` is `None`.
///
/// # Errors
///
/// Returns [`CliError::Write`] if the file or stdout cannot be written.
pub fn write_output(path: Option<&Path>, output: &str) -> Result<(), CliError> {
    match path {
        Some(path) => {
            fs::write(path, output).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), bytes = output.len(), "wrote output");
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| CliError::Write {
                    path: "<stdout>".into(),
                    source,
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(args: &[&str]) -> Opts {
        Opts::parse_from_env_and_args(args, |_| None).expect("valid args")
    }

    #[test]
    fn contrast_text_report() {
        let out = run(&opts(&["contrast", "#000", "#fff"])).unwrap();
        assert_eq!(
            out,
            "contrast: 21.00:1\nAA:       pass\nAAA:      pass\nlevel:    AAA (normal text)\n"
        );
    }

    #[test]
    fn contrast_json_report() {
        let out = run(&opts(&["contrast", "#767676", "#ffffff", "--format=json"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["foreground"], "#767676");
        assert_eq!(value["size"], "normal");
        assert_eq!(value["AA"], true);
        assert_eq!(value["AAA"], false);
        assert_eq!(value["level"], "AA");
    }

    #[test]
    fn css_format_is_rejected_for_reports() {
        let err = run(&opts(&["contrast", "#000", "#fff", "--format=css"])).unwrap_err();
        assert!(matches!(err, CliError::Unsupported { command: "contrast", .. }));
        assert_eq!(err.to_string(), "--format=css is not supported by `contrast`");
    }

    #[test]
    fn adjust_text_report() {
        let out = run(&opts(&["adjust", "#000000", "#ffffff"])).unwrap();
        assert!(out.starts_with("original:   #000000\nadjusted:   #000000\n"));
        assert!(out.contains("(target AA normal: 4.5:1)"));
        assert!(out.contains("strategy:   lightness\n"));
        assert!(out.ends_with("iterations: 0\n"));
    }

    #[test]
    fn adjust_json_report() {
        let out = run(&opts(&["adjust", "#87CEEB", "#FFFFFF", "--format=json"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["original"], "#87CEEB");
        assert!(value["ratio"].as_f64().unwrap() >= 4.5);
        assert_eq!(value["strategy"], "lightness");
    }

    #[test]
    fn convert_text_report() {
        let out = run(&opts(&["convert", "#F00"])).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "hex:   #ff0000");
        assert_eq!(lines[1], "rgb:   rgb(255, 0, 0)");
        assert_eq!(lines[2], "hsl:   hsl(0, 100%, 50%)");
        assert!(lines[3].starts_with("oklch: oklch(0.62"));
    }

    #[test]
    fn variations_report_has_four_lines() {
        let out = run(&opts(&["variations", "#336699", "#ffffff"])).unwrap();
        assert_eq!(out.lines().count(), 4);
        assert!(out.starts_with("base:  #336699\n"));
        assert!(out.ends_with("text:  #ffffff\n"));
    }

    #[test]
    fn palette_defaults_to_css() {
        let out = run(&opts(&["palette", "#3366cc"])).unwrap();
        assert!(out.starts_with(":root {\n  --tinct-color-primary: #3366cc;\n"));
    }

    #[test]
    fn palette_json() {
        let out = run(&opts(&["palette", "#3366cc", "--format=json"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["color"]["primary"], "#3366cc");
    }

    #[test]
    fn gradient_css() {
        let out = run(&opts(&["gradient", "#000", "#fff", "--steps=2", "--prefix=ui"])).unwrap();
        assert_eq!(
            out,
            ":root {\n  --ui-gradient-main: linear-gradient(90deg, #000000 0%, #ffffff 100%);\n}\n"
        );
    }

    #[test]
    fn invalid_color_is_an_error() {
        let err = run(&opts(&["convert", "#12345"])).unwrap_err();
        assert!(matches!(err, CliError::Color(_)));
    }
}
