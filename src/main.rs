use ljsim::{output_path, run, write_run, RunConfig, Scenario};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "run_01_lj_damped_cube.yaml")]
    file_name: String,

    /// Recompute even if the destination CSV already exists
    #[arg(long)]
    force: bool,
}

// load here to keep main clean
fn load_run_from_yaml(file_name: &str) -> Result<RunConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("runs")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let run_cfg: RunConfig = serde_yaml::from_reader(reader)?;

    Ok(run_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let run_cfg = load_run_from_yaml(&args.file_name)?;

    let data_dir = PathBuf::from(
        run_cfg
            .output
            .data_dir
            .clone()
            .unwrap_or_else(|| "data".to_string()),
    );

    let scenario = Scenario::build_scenario(run_cfg)?;
    let path = output_path(&data_dir, scenario.run_number, &scenario.name);

    if path.exists() && !args.force {
        log::info!(
            "run {:02}_{} already computed, pass --force to rerun",
            scenario.run_number,
            scenario.name
        );
        return Ok(());
    }

    log::info!("simulating run {:02}_{}...", scenario.run_number, scenario.name);
    let recorded = run(&scenario)?;

    log::info!("saving {} snapshots to {}", recorded.len(), path.display());
    write_run(&path, &recorded, args.force)?;

    Ok(())
}
