//! Water Drop headless runner
//!
//! Plays a full session on simulated time with a simple autoplay player and
//! logs every cue. Useful for balancing profiles without a browser.
//!
//! Usage: `water-drop [difficulty] [--seed N] [--config FILE] [--list]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;
    native::run(native::Args::parse())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser entry point is `web::wasm_start`
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use water_drop::Settings;
    use water_drop::sim::{Cue, DropKind, GamePhase, Session, profiles};

    /// Frame step for the simulated clock (ms)
    const FRAME_MS: u64 = 16;
    /// Chance per frame that the player reacts to a visible drop
    const REACTION_CHANCE: f64 = 0.08;

    #[derive(Parser, Debug)]
    #[command(name = "water-drop", about = "Play a Water Drop session on simulated time")]
    pub struct Args {
        /// Difficulty profile (easy, normal, hard, extreme)
        #[arg(default_value = "normal")]
        pub difficulty: String,

        /// Seed for drop placement (overrides the config file)
        #[arg(long)]
        pub seed: Option<u64>,

        /// Settings JSON file
        #[arg(long)]
        pub config: Option<PathBuf>,

        /// Print the difficulty profiles and exit
        #[arg(long)]
        pub list: bool,
    }

    pub fn run(args: Args) -> anyhow::Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        if args.list {
            for p in profiles() {
                println!("{:<8} {}", p.name, p.description);
            }
            return Ok(());
        }

        let mut settings = match &args.config {
            Some(path) => {
                Settings::load(path).with_context(|| format!("loading {}", path.display()))?
            }
            None => Settings::default(),
        };
        if let Some(seed) = args.seed {
            settings.seed = seed;
        }
        log::info!("Water Drop starting (seed {})", settings.seed);

        let surface_height = settings.surface_height;
        // The player gets its own RNG so autoplay doesn't perturb spawns
        let mut player = Pcg32::seed_from_u64(settings.seed ^ 0x5eed);
        let mut session = Session::new(settings)?;
        session.start(&args.difficulty)?;

        let mut now = 0;
        while session.phase() == GamePhase::Running {
            now += FRAME_MS;
            session.advance_to(now);

            let target = session
                .drops()
                .iter()
                .find(|d| {
                    !d.collected
                        && d.kind == DropKind::Beneficial
                        && (0.0..surface_height).contains(&d.pos.y)
                })
                .map(|d| d.id);
            if let Some(id) = target {
                if player.random_bool(REACTION_CHANCE) {
                    session.collect_drop(id);
                }
            }

            for cue in session.drain_cues() {
                log_cue(&cue);
            }
        }

        println!("Final score: {}", session.score());
        Ok(())
    }

    fn log_cue(cue: &Cue) {
        match cue {
            Cue::DropAdvanced { .. } => {}
            Cue::DropSpawned { .. } | Cue::DropRemoved { .. } | Cue::ScorePopup { .. } => {
                log::debug!("{cue:?}");
            }
            _ => log::info!("{cue:?}"),
        }
    }

}
