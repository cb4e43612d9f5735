use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use facematch::extractor::{Extractor, JsonDescriptor};
use facematch::{config, matcher, storage, Embedding, Matcher, Threshold};
use log::{info, warn};

#[derive(Parser)]
#[command(name = "facematch")]
#[command(version, about = "Match a face descriptor against an enrolled gallery")]
struct Cli {
    /// Config file (defaults to the system config path)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Gallery collection to operate on
    #[arg(short, long, global = true, default_value = storage::DEFAULT_COLLECTION)]
    collection: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enroll a face descriptor under a label
    Enroll {
        /// Display label for the enrolled face
        #[arg(short, long)]
        label: String,
        /// Descriptor file produced by the face detector
        descriptor: PathBuf,
    },
    /// Find the enrolled face closest to a descriptor
    Match {
        /// Descriptor file produced by the face detector
        descriptor: PathBuf,
        /// Override the configured distance threshold
        #[arg(short, long)]
        threshold: Option<f64>,
    },
    /// List enrolled faces
    List,
    /// Remove one enrolled face by id
    Remove {
        /// Record id as printed by `enroll` or `list`
        id: String,
    },
    /// Remove all enrolled faces in the collection
    Purge,
    /// Open config file in editor
    Config,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp(None)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(cli.config.as_deref())?;

    // One extractor handle for the whole process
    let mut extractor = JsonDescriptor;

    match cli.command {
        Commands::Enroll { label, descriptor } => {
            enroll(&cfg, &mut extractor, &cli.collection, &label, &descriptor)
        }
        Commands::Match {
            descriptor,
            threshold,
        } => {
            let threshold = match threshold {
                Some(t) => config::threshold_from(t),
                None => cfg.threshold(),
            };
            identify(&cfg, &mut extractor, &cli.collection, threshold, &descriptor)
        }
        Commands::List => list(&cfg, &cli.collection),
        Commands::Remove { id } => remove(&cfg, &cli.collection, &id),
        Commands::Purge => purge(&cfg, &cli.collection),
        Commands::Config => open_config(cli.config.as_deref()),
    }
}

fn read_probe(extractor: &mut impl Extractor, path: &Path) -> Result<Embedding> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    match extractor.extract(&bytes)? {
        Some(embedding) => Ok(embedding),
        None => anyhow::bail!(
            "No face detected in {}. Please retake the photo.",
            path.display()
        ),
    }
}

fn enroll(
    cfg: &config::Config,
    extractor: &mut impl Extractor,
    collection: &str,
    label: &str,
    descriptor: &Path,
) -> Result<()> {
    info!("Enrolling {} into collection {}", label, collection);

    let embedding = read_probe(extractor, descriptor)?;
    let record = storage::FaceRecord {
        id: uuid::Uuid::new_v4().to_string(),
        label: label.to_string(),
        embedding: embedding.to_vec(),
    };
    let id = record.id.clone();

    storage::save_record(&cfg.store_dir, collection, record)
        .context("Failed to save face record")?;

    info!("✓ Enrolled {} as {} ({} dims)", label, id, embedding.dim());
    println!("{id}");
    Ok(())
}

fn identify(
    cfg: &config::Config,
    extractor: &mut impl Extractor,
    collection: &str,
    threshold: Threshold,
    descriptor: &Path,
) -> Result<()> {
    let probe = read_probe(extractor, descriptor)?;

    let records = storage::load_records(&cfg.store_dir, collection)
        .context("Failed to load face records")?;
    if records.is_empty() {
        warn!("No enrolled faces in collection {}", collection);
    } else {
        info!("Found {} enrolled face(s)", records.len());
    }

    let engine = Matcher::new(threshold);
    let response = match matcher::best_match(&engine, &records, &probe) {
        Some(profile) => {
            info!(
                "Match: {} (distance {:.3}, threshold {:.3})",
                profile.label,
                profile.distance,
                threshold.value()
            );
            serde_json::json!({ "success": true, "profile": profile })
        }
        None => serde_json::json!({ "success": false, "message": "No matching profile found" }),
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn list(cfg: &config::Config, collection: &str) -> Result<()> {
    let records = storage::load_records(&cfg.store_dir, collection)
        .context("Failed to load face records")?;

    if records.is_empty() {
        info!("No enrolled faces in collection {}", collection);
        return Ok(());
    }

    for r in &records {
        println!("{}\t{}\t{} dims", r.id, r.label, r.embedding.len());
    }
    Ok(())
}

fn remove(cfg: &config::Config, collection: &str, id: &str) -> Result<()> {
    if storage::remove_record(&cfg.store_dir, collection, id)? {
        info!("✓ Removed {}", id);
        Ok(())
    } else {
        anyhow::bail!("No enrolled face with id {} in collection {}", id, collection)
    }
}

fn purge(cfg: &config::Config, collection: &str) -> Result<()> {
    info!("Purging collection: {}", collection);

    storage::purge(&cfg.store_dir, collection).context("Failed to purge face records")?;

    info!("✓ All faces purged from collection: {}", collection);
    Ok(())
}

fn open_config(path: Option<&Path>) -> Result<()> {
    let config_path = path.unwrap_or(&config::CONFIG_PATH);
    if !config_path.exists() {
        config::save_config(&config::Config::default(), Some(config_path))
            .context("Failed to write default config")?;
    }
    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    info!("Opening config file: {:?}", config_path);

    let status = std::process::Command::new(editor)
        .arg(config_path)
        .status()
        .context("Failed to open editor")?;

    if !status.success() {
        anyhow::bail!("Editor exited with non-zero status");
    }

    Ok(())
}
