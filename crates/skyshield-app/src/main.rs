use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use skyshield_app::autopilot::Autopilot;
use skyshield_app::game_loop::TICK_DURATION;
use skyshield_app::logging;
use skyshield_app::state::AppState;
use skyshield_core::commands::PlayerCommand;
use skyshield_core::enums::GameStatus;
use skyshield_sim::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "skyshield")]
#[command(about = "Headless missile-defense simulation driven by an autopilot")]
struct Cli {
    /// RNG seed; overrides the seed in the config file
    #[arg(long)]
    seed: Option<u64>,
    /// JSON file with a SimConfig (seed and tuning)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Wall-clock seconds to run before stopping
    #[arg(long, default_value_t = 60.0)]
    seconds: f64,
    /// Ticks between autopilot shots
    #[arg(long, default_value_t = 15)]
    fire_every: u32,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// The instant `seconds` from `now`. Negative and NaN durations mean zero.
fn deadline_after(now: Instant, seconds: f64) -> Result<Instant> {
    let run_for = Duration::try_from_secs_f64(seconds.max(0.0)).context("--seconds out of range")?;
    now.checked_add(run_for).context("--seconds out of range")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.tuning.validate().context("invalid tuning")?;

    let deadline = deadline_after(Instant::now(), cli.seconds)?;

    let state = AppState::new();
    state.start_simulation(config)?;
    state.send_command(PlayerCommand::Start)?;

    let mut autopilot = Autopilot::new(cli.fire_every);
    let mut last_tick = None;

    while Instant::now() < deadline {
        if let Some(snapshot) = state.latest_snapshot()? {
            if last_tick != Some(snapshot.time.tick) {
                last_tick = Some(snapshot.time.tick);
                if matches!(snapshot.status, GameStatus::Lost | GameStatus::Won) {
                    info!("session ended at tick {}", snapshot.time.tick);
                    break;
                }
                if let Some(command) = autopilot.next_command(&snapshot) {
                    state.send_command(command)?;
                }
            }
        }
        thread::sleep(TICK_DURATION / 2);
    }

    let Some(last) = state.shutdown()? else {
        warn!("no snapshot was produced");
        return Ok(());
    };
    let stats = &last.stats;
    info!(
        "final: {:?} after {:.1}s, score {}, destroyed {}/{} spawned, {} impacts, {} interceptors, {} pickups",
        last.status,
        last.time.elapsed_secs,
        last.score,
        stats.projectiles_destroyed,
        stats.projectiles_spawned,
        stats.impacts,
        stats.interceptors_launched,
        stats.pickups_collected,
    );
    info!(
        "structures standing {}/{}, emplacements active {}/{}",
        last.structures.iter().filter(|s| s.active).count(),
        last.structures.len(),
        last.emplacements.iter().filter(|e| e.active).count(),
        last.emplacements.len(),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_rejects_unrepresentable_durations() {
        let now = Instant::now();
        assert!(deadline_after(now, 1e19).is_err());
        assert!(deadline_after(now, f64::INFINITY).is_err());
    }

    #[test]
    fn deadline_clamps_negative_and_nan() {
        let now = Instant::now();
        assert_eq!(deadline_after(now, -5.0).unwrap(), now);
        assert_eq!(deadline_after(now, f64::NAN).unwrap(), now);
        assert_eq!(
            deadline_after(now, 2.5).unwrap(),
            now + Duration::from_millis(2500)
        );
    }
}
