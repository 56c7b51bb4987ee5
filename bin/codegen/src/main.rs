//! `cuba-codegen` — generate C# entity and enum classes from a CUBA
//! platform's REST metadata.
//!
//! Reads `cuba-codegen.toml`, connects to the configured endpoint, writes
//! one `<out>/<PascalPrefix>.cs` per entity prefix plus `<out>/Enums.cs`.
//! A failed batch is reported and the remaining batches still run.

mod config;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use cuba_client::CubaClient;
use cuba_codegen_lib::{generate_entities, generate_enums, naming, Catalog, MetadataSource};
use tracing::info;

use config::{GeneratorConfig, ProjectConfig};

/// CUBA REST code generator.
#[derive(Parser, Debug)]
#[command(name = "cuba-codegen", about = "Generate C# classes from CUBA REST metadata")]
struct Cli {
    /// Path to the generator configuration file.
    #[arg(short, long, default_value = "cuba-codegen.toml")]
    config: PathBuf,

    /// Output directory (overrides the configured one).
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = GeneratorConfig::load(&cli.config)?;

    let conn = &config.connection;
    let client = CubaClient::connect(
        &conn.endpoint,
        &conn.client_id,
        &conn.client_secret,
        &conn.username,
        &conn.password,
    )
    .context("could not connect to the CUBA REST API")?;
    info!(endpoint = %conn.endpoint, "CUBA REST API connected");

    let out = cli
        .out
        .unwrap_or_else(|| PathBuf::from(&config.project.output_dir));
    std::fs::create_dir_all(&out)
        .with_context(|| format!("cannot create output directory {}", out.display()))?;

    if run_generation(&client, &config.project, &out) {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

/// Run every configured batch against `source`, writing artifacts under
/// `out`. Returns true when all batches succeeded. A failed batch never
/// stops the following ones.
fn run_generation(source: &dyn MetadataSource, project: &ProjectConfig, out: &Path) -> bool {
    let catalog = Catalog::default();
    let mut all_ok = true;

    for prefix in &project.entity_prefixes {
        print!("Generating classes for {}...", prefix);
        let _ = std::io::stdout().flush();
        match generate_entities(source, prefix, &project.namespace, &catalog) {
            Ok(code) => {
                let path = out.join(format!("{}.cs", naming::pascal_case(prefix)));
                match std::fs::write(&path, code) {
                    Ok(()) => println!("ok"),
                    Err(e) => {
                        println!("error: cannot write {}: {}", path.display(), e);
                        all_ok = false;
                    }
                }
            }
            Err(e) => {
                println!("error: {}", e);
                all_ok = false;
            }
        }
    }

    print!("Generating enums...");
    let _ = std::io::stdout().flush();
    match generate_enums(source, &project.enum_prefix, &project.namespace) {
        Ok(code) => {
            let path = out.join("Enums.cs");
            match std::fs::write(&path, code) {
                Ok(()) => println!("ok"),
                Err(e) => {
                    println!("error: cannot write {}: {}", path.display(), e);
                    all_ok = false;
                }
            }
        }
        Err(e) => {
            println!("error: {}", e);
            all_ok = false;
        }
    }

    all_ok
}
