//! Snapshot serialization to flat delimited text
//!
//! One header row `time,p1_x,p1_y,p1_z,p1_dx,p1_dy,p1_dz,p2_x,...`
//! (one sextuple of columns per particle, in index order), then one
//! data row per recorded snapshot. Values use Rust's default `f64`
//! rendering, the shortest string that parses back to the same double;
//! `parse_states` reads the format back under that contract.
//!
//! Also owns the run-file bookkeeping: destination naming
//! (`calculations_{NN}_{name}.csv`) and the skip-if-exists policy.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, ensure, Context, Result};

use crate::simulation::states::{NVec3, Particle, SystemState};

/// Render the recorded snapshot sequence as CSV text
pub fn states_to_csv(states: &[SystemState]) -> String {
    let num_particles = states.first().map_or(0, |s| s.particles.len());

    let mut headers = vec!["time".to_string()];
    for i in 1..=num_particles {
        headers.push(format!("p{}_x", i));
        headers.push(format!("p{}_y", i));
        headers.push(format!("p{}_z", i));
        headers.push(format!("p{}_dx", i));
        headers.push(format!("p{}_dy", i));
        headers.push(format!("p{}_dz", i));
    }

    let mut lines = Vec::with_capacity(states.len() + 1);
    lines.push(headers.join(","));

    for state in states {
        let mut fields = Vec::with_capacity(1 + 6 * num_particles);
        fields.push(format!("{}", state.time));

        for p in &state.particles {
            fields.push(format!("{}", p.x.x));
            fields.push(format!("{}", p.x.y));
            fields.push(format!("{}", p.x.z));
            fields.push(format!("{}", p.v.x));
            fields.push(format!("{}", p.v.y));
            fields.push(format!("{}", p.v.z));
        }

        lines.push(fields.join(","));
    }

    lines.join("\n")
}

/// Parse CSV text produced by [`states_to_csv`] back into snapshots
pub fn parse_states(text: &str) -> Result<Vec<SystemState>> {
    let mut lines = text.lines();

    let header = lines.next().context("empty CSV input")?;
    let num_columns = header.split(',').count();
    ensure!(
        num_columns >= 1 && (num_columns - 1) % 6 == 0,
        "malformed header: {} columns, expected 1 + 6 per particle",
        num_columns
    );
    let num_particles = (num_columns - 1) / 6;

    let mut states = Vec::new();
    for (row, line) in lines.enumerate() {
        let fields: Result<Vec<f64>> = line
            .split(',')
            .map(|f| {
                f.parse::<f64>()
                    .with_context(|| format!("bad numeric field {:?} in row {}", f, row + 1))
            })
            .collect();
        let fields = fields?;
        if fields.len() != num_columns {
            bail!(
                "row {} has {} fields, expected {}",
                row + 1,
                fields.len(),
                num_columns
            );
        }

        let particles = (0..num_particles)
            .map(|i| {
                let c = &fields[1 + 6 * i..1 + 6 * (i + 1)];
                Particle::new(
                    NVec3::new(c[0], c[1], c[2]),
                    NVec3::new(c[3], c[4], c[5]),
                )
            })
            .collect();
        states.push(SystemState::new(fields[0], particles));
    }

    Ok(states)
}

/// Destination file for a run: `{data_dir}/calculations_{NN}_{name}.csv`
/// with the run number zero-padded to two digits
pub fn output_path(data_dir: &Path, run_number: u64, name: &str) -> PathBuf {
    data_dir.join(format!("calculations_{:02}_{}.csv", run_number, name))
}

/// Write the recorded states to `path`
///
/// If the destination already exists the write is skipped (the run's
/// output is assumed current) unless `force` is set. Returns whether
/// anything was written. The parent directory is created as needed.
pub fn write_run(path: &Path, states: &[SystemState], force: bool) -> Result<bool> {
    if path.exists() && !force {
        log::info!("skipping write, {} already exists", path.display());
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    fs::write(path, states_to_csv(states))
        .with_context(|| format!("writing {}", path.display()))?;

    Ok(true)
}
