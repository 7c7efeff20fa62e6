//! Drift Asteroids entry point
//!
//! Runs a headless session driven by a simple built-in pilot. Score and
//! lives changes are logged; the final score goes to the score store.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use clap::Parser;

    use drift_asteroids::platform::{Action, FixedStep, KeyEdge};
    use drift_asteroids::sim::GameEvent;
    use drift_asteroids::{GameObserver, HighScores, Scoreboard, Session, Settings};

    #[derive(Parser)]
    #[command(name = "drift-asteroids")]
    #[command(about = "Play a headless round of wrap-around Asteroids")]
    struct Args {
        /// Settings file (JSON); defaults are used when it does not exist
        #[arg(long, default_value = "gamedata/settings.json")]
        settings: PathBuf,

        /// Stop after this many ticks even if the game is not over
        #[arg(long, default_value_t = 3600)]
        ticks: u64,

        /// Override the RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Override the player name written to the score store
        #[arg(long)]
        name: Option<String>,

        /// Pace ticks against the wall clock instead of running flat out
        #[arg(long)]
        real_time: bool,

        /// Do not append the final score
        #[arg(long)]
        no_save: bool,

        /// Print the final snapshot as JSON
        #[arg(long)]
        dump_snapshot: bool,
    }

    /// Scripted inputs: thrust in bursts, turn steadily, fire twice a second
    struct Pilot {
        fps: u64,
    }

    impl Pilot {
        fn steer(&self, session: &mut Session, tick: u64) {
            let second = tick % self.fps;
            let edge = |on: bool| if on { KeyEdge::Pressed } else { KeyEdge::Released };

            session.handle(Action::RotateRight, edge(true));
            session.handle(Action::Thrust, edge(second < self.fps / 4));
            session.handle(Action::Shoot, edge(second % (self.fps / 2).max(2) == 0));
            session.handle(Action::Hyperspace, edge(tick > 0 && tick % (self.fps * 10) == 0));
        }
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        let mut settings = Settings::load(&args.settings)
            .with_context(|| format!("loading settings from {}", args.settings.display()))?;
        if args.seed.is_some() {
            settings.seed = args.seed;
        }
        if let Some(name) = args.name {
            settings.player_name = name;
        }

        let high_scores = HighScores::load(&settings.score_file)
            .with_context(|| format!("reading {}", settings.score_file.display()))?;

        let mut session = Session::new(&settings).context("starting session")?;
        log::info!(
            "Drift Asteroids starting: {}x{} at {} fps, seed {}",
            settings.width,
            settings.height,
            settings.frames_per_second,
            session.state().seed
        );

        let board = Rc::new(RefCell::new(Scoreboard::new(session.lives(), &high_scores)));
        let shared = board.clone();
        session.subscribe(move |event: &GameEvent| {
            let mut board = shared.borrow_mut();
            board.notify(event);
            log::info!("{}", board.status_line());
        });

        let pilot = Pilot {
            fps: u64::from(settings.frames_per_second),
        };
        let mut clock = FixedStep::new(settings.frames_per_second)?;
        let mut last = Instant::now();
        let mut ticks = 0;

        while ticks < args.ticks && !session.is_over() {
            let due = if args.real_time {
                std::thread::sleep(clock.step_duration());
                let now = Instant::now();
                let due = clock.advance(now - last);
                last = now;
                due
            } else {
                1
            };

            for _ in 0..due {
                if ticks >= args.ticks || session.is_over() {
                    break;
                }
                pilot.steer(&mut session, ticks);
                session.frame();
                ticks += 1;
            }
        }

        let score = session.score();
        if session.is_over() {
            log::info!("Game over after {} ticks with score {}", ticks, score);
        } else {
            log::info!("Stopped after {} ticks with score {}", ticks, score);
        }
        println!("{}", board.borrow().status_line());

        if !args.no_save {
            HighScores::append(&settings.score_file, &settings.player_name, score)
                .context("saving score")?;
        }

        if args.dump_snapshot {
            let json = serde_json::to_string_pretty(&session.snapshot())
                .context("serializing snapshot")?;
            println!("{json}");
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Only the library builds for the web; there is no browser shell
}
