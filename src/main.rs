use std::path::{Path, PathBuf};
use std::process;

use gradle_depdiff::adapters::outbound::console::StderrProgressReporter;
use gradle_depdiff::adapters::outbound::filesystem::FileSystemReader;
use gradle_depdiff::application::dto::{DiffRequest, OutputFormat};
use gradle_depdiff::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use gradle_depdiff::application::read_models::{DiffReadModelBuilder, ViewOptions};
use gradle_depdiff::application::use_cases::DiffReportsUseCase;
use gradle_depdiff::cli::Args;
use gradle_depdiff::config::{discover_config, load_config_from_path, ConfigFile};
use gradle_depdiff::ports::inbound::TreeDiffPort;
use gradle_depdiff::shared::{ExitCode, Result};

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load configuration (an explicit path wins over discovery)
    let config = load_config(&args)?;

    // Resolve effective settings (CLI arguments win over config values)
    let settings = resolve_settings(&args, config.as_ref());

    // Create adapters (Dependency Injection)
    let report_reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = DiffReportsUseCase::new(report_reader, progress_reporter);

    // Validate report paths before reading
    use_case.validate_report_path(&args.new_report)?;
    if let Some(ref old) = args.old {
        use_case.validate_report_path(old)?;
    }

    // Execute use case
    let request = DiffRequest::new(
        args.new_report.clone(),
        args.old.clone(),
        settings.exclude.clone(),
    );
    let response = use_case.diff_reports(request)?;

    // Build the presentation read model
    let options = ViewOptions {
        filter: settings.filter.clone(),
        changes_only: settings.changes_only,
    };
    let model = DiffReadModelBuilder::build(&response, &options);

    // Display progress message
    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    // Create formatter using factory
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&model)?;

    // Present output
    let presenter_type = match settings.output {
        Some(ref path) => PresenterType::File(path.clone()),
        None => PresenterType::Stdout,
    };
    let presenter = PresenterFactory::create(presenter_type);
    presenter.present(&formatted_output)?;

    if settings.fail_on_forced && !response.scan.is_empty() {
        eprintln!(
            "\n⚠️  Detected {} forced update(s); exiting with a failure status as requested.",
            response.scan.forced_coordinate_count()
        );
        return Ok(ExitCode::ForcedUpdatesDetected);
    }

    Ok(ExitCode::Success)
}

/// Effective run settings after merging CLI arguments with config values.
#[derive(Debug)]
struct Settings {
    format: OutputFormat,
    output: Option<PathBuf>,
    exclude: Vec<String>,
    filter: Option<String>,
    changes_only: bool,
    fail_on_forced: bool,
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config {
        Some(ref path) => load_config_from_path(path).map(Some),
        None => discover_config(Path::new(".")),
    }
}

fn resolve_settings(args: &Args, config: Option<&ConfigFile>) -> Settings {
    let config_format = config
        .and_then(|c| c.format.as_deref())
        .and_then(|value| value.parse::<OutputFormat>().ok());
    let config_output = config.and_then(|c| c.output.as_ref()).map(PathBuf::from);
    let config_exclude = config.and_then(|c| c.exclude_coordinates.clone());
    let config_filter = config.and_then(|c| c.filter.clone());

    Settings {
        format: args.format.or(config_format).unwrap_or(OutputFormat::Text),
        output: args.output.clone().or(config_output),
        exclude: if args.exclude.is_empty() {
            config_exclude.unwrap_or_default()
        } else {
            args.exclude.clone()
        },
        filter: args.filter.clone().or(config_filter),
        changes_only: args.changes_only || config.and_then(|c| c.changes_only).unwrap_or(false),
        fail_on_forced: args.fail_on_forced
            || config.and_then(|c| c.fail_on_forced).unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args_from(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    fn full_config() -> ConfigFile {
        ConfigFile {
            format: Some("markdown".to_string()),
            output: Some("report.md".to_string()),
            exclude_coordinates: Some(vec!["org.example:*".to_string()]),
            filter: Some("kotlin".to_string()),
            changes_only: Some(true),
            fail_on_forced: Some(true),
            unknown_fields: Default::default(),
        }
    }

    #[test]
    fn test_resolve_settings_defaults() {
        let args = args_from(&["gradle-depdiff", "deps.txt"]);

        let settings = resolve_settings(&args, None);

        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.output.is_none());
        assert!(settings.exclude.is_empty());
        assert!(settings.filter.is_none());
        assert!(!settings.changes_only);
        assert!(!settings.fail_on_forced);
    }

    #[test]
    fn test_resolve_settings_takes_config_values() {
        let args = args_from(&["gradle-depdiff", "deps.txt"]);
        let config = full_config();

        let settings = resolve_settings(&args, Some(&config));

        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.output, Some(PathBuf::from("report.md")));
        assert_eq!(settings.exclude, vec!["org.example:*".to_string()]);
        assert_eq!(settings.filter.as_deref(), Some("kotlin"));
        assert!(settings.changes_only);
        assert!(settings.fail_on_forced);
    }

    #[test]
    fn test_resolve_settings_cli_wins_over_config() {
        let args = args_from(&[
            "gradle-depdiff",
            "deps.txt",
            "-f",
            "json",
            "--output",
            "out.json",
            "-e",
            "com.other:*",
            "--filter",
            "okio",
        ]);
        let config = full_config();

        let settings = resolve_settings(&args, Some(&config));

        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.output, Some(PathBuf::from("out.json")));
        assert_eq!(settings.exclude, vec!["com.other:*".to_string()]);
        assert_eq!(settings.filter.as_deref(), Some("okio"));
        // Boolean flags stay on when enabled by either side
        assert!(settings.changes_only);
        assert!(settings.fail_on_forced);
    }

    #[test]
    fn test_load_config_explicit_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        fs::write(&config_path, "format: json\n").unwrap();

        let args = args_from(&[
            "gradle-depdiff",
            "deps.txt",
            "--config",
            config_path.to_str().unwrap(),
        ]);

        let config = load_config(&args).unwrap();
        assert!(config.is_some());
        assert_eq!(config.unwrap().format.as_deref(), Some("json"));
    }

    #[test]
    fn test_load_config_explicit_path_missing() {
        let args = args_from(&[
            "gradle-depdiff",
            "deps.txt",
            "--config",
            "/nonexistent/custom.yml",
        ]);

        let result = load_config(&args);
        assert!(result.is_err());
    }
}
