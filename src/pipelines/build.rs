use anyhow::{Context, Result};
use colored::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::artifact::{self, ArtifactKind};
use crate::config;

use super::common::{ensure_dependencies, open_runner};

/// Execute standard build pipeline
///
/// Flow:
/// 1. Load config and instantiate the task runner
/// 2. Install dependencies when missing
/// 3. Compile and collect the wasm binary
/// 4. Inspect the artifact
/// 5. Load build metadata
/// 6. Write the artifact to the output directory
pub fn execute_build_pipeline(root: &Path, debug: bool) -> Result<()> {
    let start_time = Instant::now();

    // --- 1. Initialize Config ---
    let config = config::load(root)?;
    let script_name = config.script_name(root);
    let language = config.language();

    println!(
        "{} Building script: {} [{}]",
        "[SCRIPT]".green().bold(),
        script_name,
        language
    );

    let runner = open_runner(root, &config)?;

    // --- 2. Dependencies ---
    ensure_dependencies(runner.as_ref(), debug)?;

    // --- 3. Compilation Stage ---
    println!("{} Running npm build scripts...", "[INFO]".cyan());
    let wasm = runner.build().context("Script build failed")?;

    // --- 4. Artifact Inspection ---
    match artifact::inspect(&wasm) {
        ArtifactKind::CoreModule if debug => {
            println!("{} Artifact is a core wasm module", "[DEBUG]".dimmed())
        }
        ArtifactKind::Component if debug => {
            println!("{} Artifact is a wasm component", "[DEBUG]".dimmed())
        }
        ArtifactKind::Unknown => println!(
            "{} Build output does not start with a WebAssembly header",
            "[WARN]".yellow()
        ),
        _ => {}
    }

    // --- 5. Metadata ---
    let metadata = runner
        .load_metadata()
        .context("Failed to load build metadata")?;
    for (schema, version) in &metadata.schema_versions {
        println!(
            "{} Schema {} v{}.{}",
            "[INFO]".cyan(),
            schema,
            version.major,
            version.minor
        );
    }
    if debug {
        println!(
            "{} use_msgpack={}",
            "[DEBUG]".dimmed(),
            metadata.flags.use_msgpack
        );
    }

    // --- 6. Output ---
    let out_path: PathBuf = root
        .join(config.output_dir())
        .join(format!("{script_name}.wasm"));
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&out_path, &wasm)
        .with_context(|| format!("Failed to write artifact: {}", out_path.display()))?;

    let duration = start_time.elapsed();
    println!(
        "{} Build completed in {:.2}s -> {} ({} bytes)",
        "[DONE]".green().bold(),
        duration.as_secs_f64(),
        out_path.display(),
        wasm.len()
    );

    Ok(())
}
