use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gridstore::{
    frame::Column, ingest, schema, stmt::Value, Connector, Frame, Gateway, Result, SaveMode,
};

#[derive(Parser)]
#[command(name = "gridstore", about = "Tabular persistence for uploaded datasets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upload a CSV or TSV file as a table
    Upload {
        /// Path to the file to upload
        file: PathBuf,

        /// Table name; defaults to the file stem
        #[arg(long)]
        table: Option<String>,

        /// Append to an existing table instead of replacing it
        #[arg(long)]
        append: bool,
    },

    /// List the tables in the public schema
    Tables,

    /// Print the contents of a table
    Show {
        table: String,

        /// Maximum number of rows to print
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Print per-column types and statistics for a table
    Describe { table: String },

    /// Drop a table; succeeds even if it does not exist
    Drop { table: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let gateway = Gateway::new(Connector::from_env()?);

    match cli.command {
        Command::Upload {
            file,
            table,
            append,
        } => {
            let name = match table {
                Some(name) => name,
                None => file
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            };

            let mode = if append {
                SaveMode::Append
            } else {
                SaveMode::Replace
            };

            let frame = ingest::read_path(&file)?;
            let written = gateway.save_table(&frame, &name, mode).await?;
            println!("{written} rows written");
        }
        Command::Tables => {
            for table in gateway.list_tables().await? {
                println!("{table}");
            }
        }
        Command::Show { table, limit } => {
            let frame = gateway.load_table(&table).await?;
            print_frame(&frame, limit);
        }
        Command::Describe { table } => {
            let frame = gateway.load_table(&table).await?;
            describe(&table, &frame);
        }
        Command::Drop { table } => {
            gateway.drop_table(&table).await?;
        }
    }

    Ok(())
}

fn print_frame(frame: &Frame, limit: usize) {
    let header: Vec<&str> = frame.columns().iter().map(Column::name).collect();
    println!("{}", header.join("\t"));

    let shown = usize::min(frame.row_count(), limit);
    for index in 0..shown {
        let row: Vec<String> = frame.row(index).map(render).collect();
        println!("{}", row.join("\t"));
    }

    if frame.row_count() > shown {
        println!("... {} more rows", frame.row_count() - shown);
    }
}

fn describe(name: &str, frame: &Frame) {
    println!(
        "{name}: {} rows, {} columns",
        frame.row_count(),
        frame.column_count()
    );

    for column in frame.columns() {
        let storage = schema::Type::from_app(column.infer_ty());

        match column.summary() {
            Some(summary) => println!(
                "  {} {storage} non_null={} min={} max={} mean={:.3}",
                column.name(),
                summary.count,
                summary.min,
                summary.max,
                summary.mean
            ),
            None => println!(
                "  {} {storage} non_null={}",
                column.name(),
                column.non_null()
            ),
        }
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(value) => value.to_string(),
        Value::I64(value) => value.to_string(),
        Value::F64(value) => value.to_string(),
        Value::Timestamp(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
        Value::String(value) => value.clone(),
    }
}
