//! unform CLI - application form extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unform::batch::{discover_sources, process_sources_with_progress};
use unform::config::DEFAULT_CONFIG_PATH;
use unform::render::{self, JsonFormat, RecordWriter};
use unform::{clean_tables, extract_tables, parse_file, BatchOptions, Config, ExtractedRow};

#[derive(Parser)]
#[command(name = "unform")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract application form fields from Word tables", long_about = None)]
struct Cli {
    /// Verbose logging and human-readable stage output
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump the block structure of a document as JSON
    Structure {
        /// Input docx file, extracted folder or document.xml
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Dump the normalized tables of a document as JSON
    Tables {
        /// Input docx file, extracted folder or document.xml
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Clean every table of a document into records
    Clean {
        /// Input docx file, extracted folder or document.xml
        #[arg(value_name = "FILE", required_unless_present = "tables_json")]
        input: Option<PathBuf>,

        /// Clean a tables dump produced by `unform tables` instead
        #[arg(long, value_name = "JSON", conflicts_with = "input")]
        tables_json: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Extract one row per document from a folder of forms
    Batch {
        /// Input folder (overrides the saved setting)
        #[arg(short, long, value_name = "DIR")]
        input: Option<PathBuf>,

        /// Output file (overrides the saved setting)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "csv")]
        format: OutputFormat,

        /// Process documents one at a time
        #[arg(long)]
        sequential: bool,

        /// Ignore .zip archives in the input folder
        #[arg(long)]
        no_archives: bool,

        /// Settings file
        #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Show or change the saved batch settings
    Config {
        /// New input folder
        #[arg(short, long, value_name = "DIR")]
        input: Option<PathBuf>,

        /// New output file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Settings file
        #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Comma-separated values with a UTF-8 BOM
    Csv,
    /// `{"entries": [...]}` JSON
    Json,
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Some(Commands::Structure {
            input,
            output,
            compact,
        }) => cmd_structure(&input, output.as_deref(), compact),
        Some(Commands::Tables {
            input,
            output,
            compact,
        }) => cmd_tables(&input, output.as_deref(), compact, cli.debug),
        Some(Commands::Clean {
            input,
            tables_json,
            output,
            compact,
        }) => cmd_clean(
            input.as_deref(),
            tables_json.as_deref(),
            output.as_deref(),
            compact,
            cli.debug,
        ),
        Some(Commands::Batch {
            input,
            output,
            format,
            sequential,
            no_archives,
            config,
        }) => {
            let options = BatchOptions::new().with_archives(!no_archives);
            let options = if sequential {
                options.sequential()
            } else {
                options
            };
            cmd_batch(&config, input, output, format, &options)
        }
        Some(Commands::Config {
            input,
            output,
            config,
        }) => cmd_config(&config, input, output),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: unform <COMMAND>".yellow());
            println!("       unform --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_structure(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let json = render::structure_to_json(&doc, json_format(compact))?;
    write_output(output, &json)
}

fn cmd_tables(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    debug: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let tables = extract_tables(&doc);

    if debug {
        eprintln!("{}", render::render_tables(&tables).dimmed());
    }

    let json = render::tables_to_json(&tables, json_format(compact))?;
    write_output(output, &json)
}

fn cmd_clean(
    input: Option<&Path>,
    tables_json: Option<&Path>,
    output: Option<&Path>,
    compact: bool,
    debug: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tables = match (input, tables_json) {
        (_, Some(dump)) => render::tables_from_json(&fs::read_to_string(dump)?)?,
        (Some(path), None) => extract_tables(&parse_file(path)?),
        (None, None) => return Err("an input file or --tables-json is required".into()),
    };
    let records = clean_tables(&tables);

    if debug {
        eprintln!("{}", render::render_records(&records).dimmed());
    }

    let json = render::entries_to_json(&records, json_format(compact))?;
    write_output(output, &json)
}

fn cmd_batch(
    config_path: &Path,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: OutputFormat,
    options: &BatchOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(config_path);
    let input = input.unwrap_or(config.input_folder);
    let output = output.unwrap_or_else(|| match format {
        OutputFormat::Csv => config.output_file.clone(),
        OutputFormat::Json => config.output_file.with_extension("json"),
    });

    log::debug!("Batch {} -> {}", input.display(), output.display());

    let sources = discover_sources(&input, options)?;
    if sources.is_empty() {
        println!(
            "{} {}",
            "No .docx documents found in".yellow(),
            input.display()
        );
        return Ok(());
    }

    let pb = ProgressBar::new(sources.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message("Extracting...");

    let rows = process_sources_with_progress(&sources, options, |row: &ExtractedRow| {
        if let Some(ref error) = row.error {
            pb.println(format!("{} {}: {}", "Failed".red(), row.file_name, error));
        }
        pb.inc(1);
    });
    pb.finish_with_message("Done!");

    match format {
        OutputFormat::Csv => RecordWriter::new().write_to_path(&rows, &output)?,
        OutputFormat::Json => {
            let json = render::entries_to_json(&rows, JsonFormat::Pretty)?;
            fs::write(&output, json)?;
        }
    }

    let failed = rows.iter().filter(|row| row.is_failed()).count();
    println!();
    println!("{}: {}", "Documents".bold(), rows.len());
    println!("{}: {}", "Extracted".bold(), rows.len() - failed);
    if failed > 0 {
        println!("{}: {}", "Failed".bold(), failed.to_string().red());
    }
    println!("{} {}", "Saved to".green(), output.display());

    Ok(())
}

fn cmd_config(
    config_path: &Path,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load(config_path);
    let changed = input.is_some() || output.is_some();

    if let Some(folder) = input {
        config = config.with_input_folder(folder);
    }
    if let Some(file) = output {
        config = config.with_output_file(file);
    }
    if changed {
        config.save(config_path)?;
        println!("{} {}", "Saved to".green(), config_path.display());
    }

    println!("{}", "Batch Settings".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Input folder".bold(), config.input_folder.display());
    println!("{}: {}", "Output file".bold(), config.output_file.display());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unform".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Application form extraction tool");
    println!();
    println!("License: MIT");
}
