//! richdoc CLI - rich-text document tool

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use richdoc::render::{self, HtmlOptions};
use richdoc::{
    from_engine_state, get_available_fonts, normalize_fonts, parse_file, parse_reader,
    strip_null_font_ids, to_engine_state, validate, DocNode, DocumentStats, FontConfig, JsonFormat,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "richdoc")]
#[command(version)]
#[command(about = "Render, validate and normalize rich-text JSON documents", long_about = None)]
struct Cli {
    /// Font configuration file (JSON with allFonts, allowedFonts, defaultFontId)
    #[arg(long, global = true, value_name = "FILE", env = "RICHDOC_FONTS")]
    fonts: Option<PathBuf>,

    /// Use the built-in font table when no configuration file is given
    #[arg(long, global = true)]
    builtin_fonts: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document to HTML
    Html {
        /// Input JSON document ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit a complete HTML page with a font stylesheet
        #[arg(short, long)]
        standalone: bool,

        /// Page title for standalone output
        #[arg(long)]
        title: Option<String>,

        /// Clamp heading levels into 1-6
        #[arg(long)]
        clamp_headings: bool,
    },

    /// Re-emit a document as JSON
    Json {
        /// Input JSON document ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Extract plain text
    Text {
        /// Input JSON document ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Clamp font ids onto the font configuration and drop null font ids
    Normalize {
        /// Input JSON document ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check a document's structure
    Validate {
        /// Input JSON document ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Also build an editor state from the document
        #[arg(long)]
        engine: bool,
    },

    /// Send a document through the editor engine and back
    #[command(alias = "rt")]
    Roundtrip {
        /// Input JSON document ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// List the fonts documents may use
    Fonts {
        /// Print the effective configuration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show document statistics
    Info {
        /// Input JSON document ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = load_fonts(cli.fonts.as_deref(), cli.builtin_fonts).and_then(|fonts| {
        match cli.command {
            Some(Commands::Html {
                input,
                output,
                standalone,
                title,
                clamp_headings,
            }) => {
                let mut options = HtmlOptions::new()
                    .with_optional_fonts(fonts)
                    .with_standalone(standalone)
                    .with_clamped_headings(clamp_headings);
                if let Some(title) = title {
                    options = options.with_title(title);
                }
                cmd_html(&input, output.as_deref(), &options)
            }
            Some(Commands::Json {
                input,
                output,
                compact,
            }) => cmd_json(&input, output.as_deref(), compact),
            Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
            Some(Commands::Normalize {
                input,
                output,
                compact,
            }) => cmd_normalize(&input, output.as_deref(), fonts.as_ref(), compact),
            Some(Commands::Validate { input, engine }) => {
                cmd_validate(&input, engine, fonts.as_ref())
            }
            Some(Commands::Roundtrip {
                input,
                output,
                compact,
            }) => cmd_roundtrip(&input, output.as_deref(), fonts.as_ref(), compact),
            Some(Commands::Fonts { json }) => cmd_fonts(fonts, json),
            Some(Commands::Info { input }) => cmd_info(&input),
            Some(Commands::Version) => {
                cmd_version();
                Ok(())
            }
            None => {
                println!("{}", "Usage: richdoc <COMMAND> <FILE>".yellow());
                println!("       richdoc --help for more information");
                Ok(())
            }
        }
    });

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Resolve the font configuration from the command line.
fn load_fonts(path: Option<&Path>, builtin: bool) -> CliResult<Option<FontConfig>> {
    match path {
        Some(path) => {
            log::debug!("loading font configuration from {}", path.display());
            Ok(Some(FontConfig::from_file(path)?))
        }
        None if builtin => Ok(Some(FontConfig::builtin())),
        None => Ok(None),
    }
}

/// Read a document from a file, or from stdin for "-".
fn load_document(input: &Path) -> CliResult<DocNode> {
    if input == Path::new("-") {
        Ok(parse_reader(io::stdin().lock())?)
    } else {
        Ok(parse_file(input)?)
    }
}

/// Write to a file, or print to stdout.
fn write_output(output: Option<&Path>, content: &str) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_html(input: &Path, output: Option<&Path>, options: &HtmlOptions) -> CliResult<()> {
    let doc = load_document(input)?;
    let html = render::to_html(&doc, options);
    write_output(output, &html)
}

fn cmd_json(input: &Path, output: Option<&Path>, compact: bool) -> CliResult<()> {
    let doc = load_document(input)?;
    let json = render::to_json(&doc, json_format(compact))?;
    write_output(output, &json)
}

fn cmd_text(input: &Path, output: Option<&Path>) -> CliResult<()> {
    let doc = load_document(input)?;
    write_output(output, &render::to_text(&doc))
}

fn normalize_document(doc: &DocNode, fonts: Option<&FontConfig>) -> DocNode {
    match fonts {
        Some(fonts) => normalize_fonts(doc, fonts),
        None => strip_null_font_ids(doc),
    }
}

fn cmd_normalize(
    input: &Path,
    output: Option<&Path>,
    fonts: Option<&FontConfig>,
    compact: bool,
) -> CliResult<()> {
    if fonts.is_none() {
        eprintln!(
            "{} no font configuration given, only null font ids are removed",
            "Note:".yellow()
        );
    }
    let doc = load_document(input)?;
    let normalized = normalize_document(&doc, fonts);
    let json = render::to_json(&normalized, json_format(compact))?;
    write_output(output, &json)
}

fn cmd_validate(input: &Path, engine: bool, fonts: Option<&FontConfig>) -> CliResult<()> {
    let doc = load_document(input)?;
    let issues = validate(&doc);

    for issue in &issues {
        println!("{} {}", "✗".red(), issue);
    }

    if engine {
        match to_engine_state(&doc, fonts) {
            Ok(state) => println!(
                "{} editor state built ({} nodes)",
                "✓".green(),
                state.doc().node_count()
            ),
            Err(e) => {
                println!("{} editor rejected document: {}", "✗".red(), e);
                return Err("document does not fit the editor schema".into());
            }
        }
    }

    if issues.is_empty() {
        println!("{} {}", "✓".green(), "Document is valid".green().bold());
        Ok(())
    } else {
        Err(format!("{} issue(s) found", issues.len()).into())
    }
}

fn cmd_roundtrip(
    input: &Path,
    output: Option<&Path>,
    fonts: Option<&FontConfig>,
    compact: bool,
) -> CliResult<()> {
    let doc = load_document(input)?;
    let state = to_engine_state(&doc, fonts)?;
    let back = from_engine_state(&state)?;

    if back == normalize_document(&doc, fonts) {
        eprintln!("{} document survived the round trip", "✓".green());
    } else {
        eprintln!("{} document changed in the round trip", "!".yellow());
    }

    let json = render::to_json(&back, json_format(compact))?;
    write_output(output, &json)
}

fn cmd_fonts(fonts: Option<FontConfig>, json: bool) -> CliResult<()> {
    let config = fonts.unwrap_or_default();

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "Available Fonts".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for font in get_available_fonts(&config) {
        let marker = if font.id == config.default_font_id {
            "*".green().bold().to_string()
        } else {
            " ".to_string()
        };
        let category = font
            .category
            .map(|c| format!("{:?}", c).to_lowercase())
            .unwrap_or_default();
        println!("{} {:<20} {:<24} {}", marker, font.id.bold(), font.label, category.dimmed());
    }
    println!();
    println!("{} default: {}", "*".green().bold(), config.default_font_id);
    Ok(())
}

fn cmd_info(input: &Path) -> CliResult<()> {
    let doc = load_document(input)?;
    let stats = DocumentStats::collect(&doc);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Nodes".bold(), stats.node_count);
    println!("{}: {}", "Depth".bold(), stats.max_depth);
    println!("{}: {}", "Issues".bold(), validate(&doc).len());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Lists".bold(), stats.list_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Images".bold(), stats.image_count);
    println!("{}: {}", "Links".bold(), stats.link_count);
    println!("{}: {}", "Code blocks".bold(), stats.code_block_count);
    println!("{}: {}", "Marks".bold(), stats.mark_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);
    if stats.unknown_count > 0 {
        println!("{}: {}", "Unknown nodes".yellow(), stats.unknown_count);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "richdoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Rich-text document tool");
    println!();
    println!("License: MIT");
}
