use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use energidataservice::{Client, DEFAULT_BASE_URL, storage};
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "eds",
    version,
    about = "Query the Energi Data Service open-data API (Danish energy market & grid data)"
)]
struct Cli {
    /// API root URL.
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List dataset categories.
    Categories(ListArgs),
    /// List all tags.
    Tags(ListArgs),
    /// Show metadata for one tag.
    TagInfo {
        /// Tag id or name.
        id: String,
    },
    /// List publishing organizations.
    Organizations(ListArgs),
    /// List datasets (packages).
    Packages(ListArgs),
    /// Run a SQL statement against the datastore and print the raw JSON response.
    Sql {
        /// Complete SQL statement, sent verbatim.
        sql: String,
        /// Save the response as JSON instead of printing it.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the hourly CO2 emission prognosis for the next six hours.
    Emissions(EmissionsArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Save results to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(Args, Debug)]
struct EmissionsArgs {
    /// Price area (e.g., DK1). Currently the query always uses DK1.
    #[arg(long, default_value = "DK1")]
    region: String,
    /// Window start (RFC 3339). Defaults to now.
    #[arg(long)]
    from: Option<DateTime<Utc>>,
    /// Window end (RFC 3339). Defaults to six hours after --from.
    #[arg(long)]
    to: Option<DateTime<Utc>>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let client = Client::with_base_url(cli.base_url);
    match cli.cmd {
        Command::Categories(args) => {
            emit_list(client.categories().context("fetch categories")?, "category", args)
        }
        Command::Tags(args) => emit_list(client.tags().context("fetch tags")?, "tag", args),
        Command::Organizations(args) => emit_list(
            client.organizations().context("fetch organizations")?,
            "organization",
            args,
        ),
        Command::Packages(args) => {
            emit_list(client.packages().context("fetch packages")?, "package", args)
        }
        Command::TagInfo { id } => {
            let tag = client
                .tag_info(&id)
                .with_context(|| format!("fetch tag {}", id))?;
            println!("{}", serde_json::to_string_pretty(&tag)?);
            Ok(())
        }
        Command::Sql { sql, out } => {
            let v: Value = client.datastore_sql(&sql).context("datastore sql")?;
            match out {
                Some(path) => {
                    storage::save_json(&v, &path)?;
                    eprintln!("Wrote response to {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&v)?),
            }
            Ok(())
        }
        Command::Emissions(args) => {
            let from = args.from.unwrap_or_else(Utc::now);
            let to = match args.to {
                Some(to) => to,
                None => window_end(from)?,
            };
            client
                .emissions(&args.region, from, to)
                .context("fetch emissions")?;
            Ok(())
        }
    }
}

fn emit_list(items: Vec<String>, column: &str, args: ListArgs) -> Result<()> {
    let Some(path) = args.out.as_ref() else {
        for item in &items {
            println!("{}", item);
        }
        return Ok(());
    };

    let fmt = match args.format {
        Some(OutFormat::Csv) => "csv".to_string(),
        Some(OutFormat::Json) => "json".to_string(),
        None => infer_format(path),
    };
    match fmt.as_str() {
        "csv" => storage::save_list_csv(&items, column, path)?,
        "json" => storage::save_json(&items, path)?,
        other => anyhow::bail!("unsupported format: {}", other),
    }
    eprintln!("Saved {} rows to {}", items.len(), path.display());
    Ok(())
}

/// Six hours after `from`, the default emissions window.
fn window_end(from: DateTime<Utc>) -> Result<DateTime<Utc>> {
    from.checked_add_signed(Duration::hours(6))
        .context("--from is too close to the largest representable date")
}

fn infer_format(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("csv")
        .to_ascii_lowercase()
}
