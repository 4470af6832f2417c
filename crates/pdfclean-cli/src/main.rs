mod commands;
mod output;

use clap::error::ErrorKind;
use clap::Parser;
use pdfclean_core::ExtractOptions;
use std::path::PathBuf;

/// Usage and argument errors.
const EXIT_USAGE: i32 = 1;
/// Any failure while reading or extracting the PDF.
const EXIT_FAILURE: i32 = 2;

#[derive(Parser)]
#[command(
    name = "pdfclean",
    version,
    about = "Extract cleaned, paginated plain text from a PDF as JSON"
)]
struct Cli {
    /// Path to the PDF file
    pdf_path: PathBuf,

    /// Drop words whose top edge is closer than this to the top of the page (points)
    #[arg(long, default_value_t = 50.0, value_parser = parse_non_negative)]
    header_margin: f64,

    /// Drop words whose top edge is closer than this to the bottom of the page (points)
    #[arg(long, default_value_t = 50.0, value_parser = parse_non_negative)]
    footer_margin: f64,

    /// Horizontal gap up to which touching glyph runs are joined into one word
    #[arg(long, default_value_t = 1.0, value_parser = parse_non_negative)]
    x_tolerance: f64,

    /// Vertical offset up to which glyph runs count as the same row
    #[arg(long, default_value_t = 1.0, value_parser = parse_non_negative)]
    y_tolerance: f64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn options(&self) -> ExtractOptions {
        ExtractOptions {
            header_margin: self.header_margin,
            footer_margin: self.footer_margin,
            x_tolerance: self.x_tolerance,
            y_tolerance: self.y_tolerance,
        }
    }
}

fn parse_non_negative(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("'{s}' must be a non-negative number"))
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // clap renders the usage line along with the error.
            let _ = e.print();
            std::process::exit(EXIT_USAGE);
        }
    };

    log::debug!("extracting {}", cli.pdf_path.display());

    if let Err(e) = commands::extract::run(&cli.pdf_path, &cli.options(), cli.pretty) {
        eprintln!("Error: {e}");
        std::process::exit(EXIT_FAILURE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_core_options() {
        let cli = Cli::try_parse_from(["pdfclean", "report.pdf"]).unwrap();
        assert_eq!(cli.pdf_path, PathBuf::from("report.pdf"));
        assert_eq!(cli.options(), ExtractOptions::default());
        assert!(!cli.pretty);
    }

    #[test]
    fn test_margin_flags() {
        let cli = Cli::try_parse_from([
            "pdfclean",
            "report.pdf",
            "--header-margin",
            "72",
            "--footer-margin",
            "0",
        ])
        .unwrap();
        assert_eq!(cli.options().header_margin, 72.0);
        assert_eq!(cli.options().footer_margin, 0.0);
    }

    #[test]
    fn test_missing_path_is_usage_error() {
        let err = Cli::try_parse_from(["pdfclean"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("Usage"));
    }

    #[test]
    fn test_negative_margin_rejected() {
        let result = Cli::try_parse_from(["pdfclean", "report.pdf", "--footer-margin=-5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(parse_non_negative("12.5"), Ok(12.5));
        assert!(parse_non_negative("-1").is_err());
        assert!(parse_non_negative("NaN").is_err());
        assert!(parse_non_negative("wide").is_err());
    }
}
