use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use datestamp_core::{
    parse_extensions, run_renames, RenameConfig, DEFAULT_EXTENSIONS, DEFAULT_SEPARATOR,
};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "datestamp", version)]
#[command(
    about = "Prepends the EXIF capture time to image file names so that name order matches time order"
)]
struct Cli {
    /// Directory with images
    #[arg(short = 'i', long = "imagedir")]
    imagedir: PathBuf,

    /// Do a dry run without changing any files
    #[arg(short = 'd', long = "dryrun", value_name = "y", value_parser = parse_yes)]
    dryrun: Option<bool>,

    /// File extensions to process (a space-separated string)
    #[arg(short = 'e', long = "extensions", default_value = DEFAULT_EXTENSIONS)]
    extensions: String,

    /// Process directory recursively
    #[arg(short = 'r', long = "recursive", value_name = "y", value_parser = parse_yes)]
    recursive: Option<bool>,

    /// Separator between the timestamp and the file name
    #[arg(
        short = 's',
        long = "separator",
        default_value = DEFAULT_SEPARATOR,
        allow_hyphen_values = true
    )]
    separator: String,

    /// Strip the timestamp prefix instead of adding it
    #[arg(short = 'u', long = "undo", value_name = "y", value_parser = parse_yes)]
    undo: Option<bool>,

    /// Log and skip files that fail to read or rename instead of aborting
    #[arg(long, default_value_t = false)]
    keep_going: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Only the literal `y` switches an option on.
fn parse_yes(value: &str) -> Result<bool, String> {
    Ok(value == "y")
}

impl Cli {
    fn to_config(&self) -> RenameConfig {
        RenameConfig {
            image_dir: self.imagedir.clone(),
            recursive: self.recursive.unwrap_or(false),
            dry_run: self.dryrun.unwrap_or(false),
            undo: self.undo.unwrap_or(false),
            extensions: parse_extensions(&self.extensions),
            separator: self.separator.clone(),
            keep_going: self.keep_going,
            report_files: self.output == OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.to_config();

    match cli.output {
        OutputFormat::Table => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let report = run_renames(&config, &mut out)
                .with_context(|| format!("processing {}", config.image_dir.display()))?;
            writeln!(out, "{}", report.summary_line())?;
        }
        OutputFormat::Json => {
            let report = run_renames(&config, &mut io::sink())
                .with_context(|| format!("processing {}", config.image_dir.display()))?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Cli, OutputFormat};
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("datestamp").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn defaults_when_only_imagedir_is_given() {
        let cli = parse(&["-i", "/photos"]);
        let config = cli.to_config();
        assert_eq!(config.image_dir, std::path::PathBuf::from("/photos"));
        assert!(!config.dry_run);
        assert!(!config.recursive);
        assert!(!config.undo);
        assert!(!config.keep_going);
        assert_eq!(config.separator, "__");
        assert_eq!(config.extensions.len(), 5);
        assert_eq!(cli.output, OutputFormat::Table);
        assert!(!config.report_files);
    }

    #[test]
    fn only_literal_y_enables_flags() {
        let config = parse(&["-i", "/p", "-d", "y", "-r", "y", "-u", "y"]).to_config();
        assert!(config.dry_run && config.recursive && config.undo);

        let config = parse(&[
            "--imagedir",
            "/p",
            "--dryrun",
            "Y",
            "--recursive",
            "yes",
            "--undo",
            "true",
        ])
        .to_config();
        assert!(!config.dry_run && !config.recursive && !config.undo);
    }

    #[test]
    fn extensions_are_lowercased_and_split() {
        let config = parse(&["-i", "/p", "-e", "JPG Heic"]).to_config();
        assert_eq!(
            config.extensions.into_iter().collect::<Vec<_>>(),
            vec!["heic".to_string(), "jpg".to_string()]
        );
    }

    #[test]
    fn json_output_keeps_file_outcomes() {
        assert!(parse(&["-i", "/p", "--output", "json"]).to_config().report_files);
    }

    #[test]
    fn imagedir_is_required() {
        assert!(Cli::try_parse_from(["datestamp", "-d", "y"]).is_err());
    }
}
