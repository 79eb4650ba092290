// SPDX-License-Identifier: PMPL-1.0-or-later

//! arbgen: generate Flutter localization accessors from ARB string files
//!
//! Reads the `strings_<tag>.arb` files of a Flutter project and rewrites
//! `lib/generated/i18n.dart` with a base class, one class per locale and a
//! localizations delegate.

use anyhow::{bail, Result};
use arbgen::config::GeneratorConfig;
use arbgen::generate::{Generator, RunMode, EMPTY_RESOURCE};
use arbgen::host::{FsHost, Host};
use arbgen::iso639::is_known_language;
use arbgen::loader::RESOURCE_PREFIX;
use arbgen::report::{self, Outcome};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "arbgen")]
#[command(version)]
#[command(about = "Generate Flutter localization accessors from ARB string files")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the localization unit from the resource files
    Generate {
        /// Project root (defaults to the current directory)
        #[arg(value_name = "PROJECT", default_value = ".")]
        project: PathBuf,

        /// Config file (defaults to arbgen.yaml / arbgen.yml / arbgen.json in PROJECT)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Generated file, relative to PROJECT
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Folder holding the resource files, relative to PROJECT
        #[arg(long)]
        values_dir: Option<PathBuf>,

        /// Locale whose strings define the base class
        #[arg(long)]
        default_locale: Option<String>,

        /// Fail on malformed resource files instead of skipping them
        #[arg(long)]
        strict: bool,

        /// Classify locales on a single thread
        #[arg(long)]
        sequential: bool,

        /// Fail if the generated file is out of date; write nothing
        #[arg(long, conflicts_with = "stdout")]
        check: bool,

        /// Print the generated unit instead of writing it
        #[arg(long)]
        stdout: bool,

        /// Save the run report (JSON or YAML, by extension)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Suppress the summary table
        #[arg(short, long)]
        quiet: bool,
    },

    /// Add an empty resource file for a locale
    AddLocale {
        /// Locale tag, e.g. `de` or `pt_BR`
        #[arg(value_name = "TAG")]
        tag: String,

        /// Project root (defaults to the current directory)
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        /// Config file (defaults to arbgen.yaml / arbgen.yml / arbgen.json in PROJECT)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Accept a language code that is not ISO 639-1
        #[arg(long)]
        force: bool,
    },
}

fn load_config(project: &Path, explicit: Option<&Path>) -> Result<GeneratorConfig> {
    match explicit {
        Some(path) => GeneratorConfig::load(path),
        None => GeneratorConfig::discover(project),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            project,
            config,
            output,
            values_dir,
            default_locale,
            strict,
            sequential,
            check,
            stdout,
            report: report_path,
            quiet,
        } => {
            let mut config = load_config(&project, config.as_deref())?;
            if let Some(output) = output {
                config.output = output;
            }
            if let Some(values_dir) = values_dir {
                config.values_dir = values_dir;
            }
            if let Some(locale) = default_locale {
                config.default_locale = locale;
            }
            config.strict |= strict;
            if sequential {
                config.parallel = false;
            }
            config.validate()?;

            let mode = if check {
                RunMode::Check
            } else if stdout {
                RunMode::DryRun
            } else {
                RunMode::Write
            };

            let host = FsHost::with_formatter(config.formatter.clone());
            let generation = Generator::new(&host, config).verbose(!quiet).run(&project, mode)?;

            if stdout {
                print!("{}", generation.text);
            } else {
                report::print_summary(&generation.report, quiet);
            }

            if let Some(path) = report_path {
                report::write_report(&generation.report, &path)?;
                if !quiet && !stdout {
                    println!("Report saved to: {}", path.display());
                }
            }

            if generation.report.outcome == Outcome::Stale {
                bail!(
                    "{} is out of date; run `arbgen generate` to refresh it",
                    generation.report.output.display()
                );
            }
        }

        Commands::AddLocale {
            tag,
            project,
            config,
            force,
        } => {
            if tag.is_empty() || tag.contains(['/', '\\', '.']) {
                bail!("invalid locale tag `{}`", tag);
            }
            let language = tag.split('_').next().unwrap_or("");
            if !force && !is_known_language(language) {
                bail!(
                    "`{}` is not an ISO 639-1 language code (use --force to add it anyway)",
                    language
                );
            }
            let config = load_config(&project, config.as_deref())?;
            let host = FsHost::new();
            let folder = host.values_folder(&project, &config.values_dir, true)?;
            let file = folder.join(format!("{}{}.{}", RESOURCE_PREFIX, tag, config.extension));
            if file.exists() {
                println!("{} already exists", file.display());
            } else {
                host.create_file(&file, EMPTY_RESOURCE)?;
                println!("{} {}", "Created".green(), file.display());
            }
        }
    }

    Ok(())
}
