use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rail_atlas::engine::compute_all_pairs;
use rail_atlas::export::RouteDocument;
use rail_atlas::import::import;

/// Default location of the hand-authored network description.
const DEFAULT_NETWORK_PATH: &str = "json/network.json";

/// Default directory for the generated route tables.
const DEFAULT_OUTPUT_DIR: &str = "gen";

/// The two route tables generated per run: display label, output file
/// name, and whether interdimensional transfers are excluded.
const VARIANTS: [(&str, &str, bool); 2] = [
    ("standard", "routes.json", false),
    ("no Nether", "routes_no_nether.json", true),
];

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let network_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| DEFAULT_NETWORK_PATH.into());
    let output_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.into());

    let text = match std::fs::read_to_string(&network_path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read {}: {err}", network_path.display());
            return ExitCode::FAILURE;
        }
    };
    let data: Value = match serde_json::from_str(&text) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("{} is not valid JSON: {err}", network_path.display());
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = std::fs::create_dir_all(&output_dir) {
        eprintln!("cannot create {}: {err}", output_dir.display());
        return ExitCode::FAILURE;
    }

    for (label, filename, exclude) in VARIANTS {
        if let Err(code) = generate(&data, exclude, label, &output_dir.join(filename)) {
            return code;
        }
    }
    ExitCode::SUCCESS
}

/// Run the full pipeline for one variant and write its route table.
fn generate(
    data: &Value,
    exclude_interdimensional: bool,
    label: &str,
    path: &Path,
) -> Result<(), ExitCode> {
    info!("parsing network data ({label})");
    let (network, version) = match import(data, exclude_interdimensional) {
        Ok(imported) => imported,
        Err(err) => {
            eprintln!("import failed: {err}");
            return Err(ExitCode::FAILURE);
        }
    };

    info!(stations = network.stations.len(), "generating routes ({label})");
    let started = Instant::now();
    let routes = match compute_all_pairs(&network) {
        Ok(routes) => routes,
        Err(err) => {
            eprintln!("route computation failed: {err}");
            return Err(ExitCode::FAILURE);
        }
    };
    info!(
        routes = routes.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "finished generating routes ({label})"
    );

    let document = RouteDocument::build(&routes, &version);
    if let Err(err) = document.write_to(path) {
        eprintln!("cannot write {}: {err}", path.display());
        return Err(ExitCode::FAILURE);
    }
    info!("exported routes to {}", path.display());
    Ok(())
}
