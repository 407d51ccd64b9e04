//! Sheet Stencil CLI - spreadsheet template rendering tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use sheet_stencil::prelude::*;
use sheet_stencil::{inspect, TemplateSummary};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "stencil")]
#[command(author, version, about = "Render spreadsheet templates from JSON data")]
struct Cli {
    /// Increase log output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a template with a JSON payload
    Render {
        /// Template file (JSON snapshot), or a template code with --template-dir
        template: PathBuf,

        /// Look the template up by code in this directory
        #[arg(long)]
        template_dir: Option<PathBuf>,

        /// Payload file, or "-" for stdin
        #[arg(short, long)]
        data: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render only this sheet (default: all sheets)
        #[arg(short, long)]
        sheet: Option<String>,
    },

    /// List the templates in a directory
    List {
        /// Template directory
        dir: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the placeholders a template declares
    Inspect {
        /// Template file (JSON snapshot)
        template: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            template,
            template_dir,
            data,
            output,
            sheet,
        } => {
            let template = resolve_template(&template, template_dir.as_deref())?;
            render(&template, &data, output.as_deref(), sheet)
        }
        Commands::List { dir, json } => list_templates(&dir, json),
        Commands::Inspect { template, json } => show_placeholders(&template, json),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn render(template: &Path, data: &Path, output: Option<&Path>, sheet: Option<String>) -> Result<()> {
    let payload = read_payload(data)?;
    let bytes = std::fs::read(template)
        .with_context(|| format!("Failed to read '{}'", template.display()))?;

    let codec = JsonSnapshotCodec::pretty();
    let mut workbook = codec
        .load(&bytes)
        .with_context(|| format!("Failed to open '{}'", template.display()))?;
    log::debug!(
        "loaded '{}' ({} sheet(s)), payload has {} key(s)",
        template.display(),
        workbook.sheet_count(),
        payload.len()
    );

    let options = RenderOptions {
        sheets: sheet.map_or(SheetSelection::All, SheetSelection::Named),
    };
    let stats = Renderer::with_options(options)
        .render_workbook(&mut workbook, &payload)
        .with_context(|| format!("Failed to render '{}'", template.display()))?;

    let rendered = codec.save(&workbook).context("Failed to serialize output")?;

    if let Some(output_path) = output {
        std::fs::write(output_path, &rendered)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
    } else {
        io::stdout()
            .write_all(&rendered)
            .context("Failed to write to stdout")?;
    }

    eprintln!(
        "Rendered {} sheet(s): {} substitution(s), {} table(s) expanded, {} skipped, {} row(s) inserted, {} record(s) written",
        stats.sheets_rendered,
        stats.cells_substituted,
        stats.tables_expanded,
        stats.tables_skipped,
        stats.rows_inserted,
        stats.records_written
    );
    Ok(())
}

fn resolve_template(template: &Path, template_dir: Option<&Path>) -> Result<PathBuf> {
    let Some(dir) = template_dir else {
        return Ok(template.to_path_buf());
    };

    let code = template.to_string_lossy();
    let path = TemplateCatalog::new(dir).path_for(&code)?;
    if !path.is_file() {
        anyhow::bail!("Template '{}' not found in '{}'", code, dir.display());
    }
    log::debug!("template '{}' resolved to '{}'", code, path.display());
    Ok(path)
}

fn list_templates(dir: &Path, as_json: bool) -> Result<()> {
    let templates = TemplateCatalog::new(dir).list()?;

    if as_json {
        let entries: Vec<serde_json::Value> = templates
            .iter()
            .map(|t| json!({ "name": t.name, "format": t.format }))
            .collect();
        let text = serde_json::to_string_pretty(&json!({ "templates": entries }))
            .context("Failed to format JSON")?;
        println!("{}", text);
        return Ok(());
    }

    if templates.is_empty() {
        println!("No templates in {}", dir.display());
    }
    for template in &templates {
        let format = if template.format.is_empty() {
            "-"
        } else {
            template.format.as_str()
        };
        println!("{:<24} {}", template.name, format);
    }
    Ok(())
}

fn read_payload(data: &Path) -> Result<Payload> {
    let text = if data == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read payload from stdin")?;
        buf
    } else {
        std::fs::read_to_string(data)
            .with_context(|| format!("Failed to read '{}'", data.display()))?
    };

    Payload::from_json_str(&text).with_context(|| format!("Invalid payload in '{}'", data.display()))
}

fn show_placeholders(template: &Path, as_json: bool) -> Result<()> {
    let workbook =
        Workbook::open(template).with_context(|| format!("Failed to open '{}'", template.display()))?;

    let summaries: Vec<(&str, TemplateSummary)> = workbook
        .worksheets()
        .map(|ws| (ws.name(), inspect(ws)))
        .collect();

    if as_json {
        let value = summaries_to_json(&summaries);
        let text = serde_json::to_string_pretty(&value).context("Failed to format JSON")?;
        println!("{}", text);
        return Ok(());
    }

    println!("File: {}", template.display());
    for (name, summary) in &summaries {
        println!();
        println!("Sheet '{}':", name);
        if summary.is_empty() {
            println!("  (no placeholders)");
            continue;
        }
        if !summary.scalars.is_empty() {
            println!("  Scalars: {}", summary.scalars.join(", "));
        }
        for (table, fields) in &summary.tables {
            println!("  Table '{}':", table);
            for (field, addr) in fields {
                println!("    {:<20} {}", field, addr);
            }
        }
    }
    Ok(())
}

fn summaries_to_json(summaries: &[(&str, TemplateSummary)]) -> serde_json::Value {
    let sheets: Vec<serde_json::Value> = summaries
        .iter()
        .map(|(name, summary)| {
            let tables: serde_json::Map<String, serde_json::Value> = summary
                .tables
                .iter()
                .map(|(table, fields)| {
                    let fields: serde_json::Map<String, serde_json::Value> = fields
                        .iter()
                        .map(|(field, addr)| (field.clone(), json!(addr.to_a1_string())))
                        .collect();
                    (table.clone(), serde_json::Value::Object(fields))
                })
                .collect();
            json!({
                "sheet": name,
                "scalars": summary.scalars,
                "tables": tables,
            })
        })
        .collect();
    json!({ "sheets": sheets })
}
