use std::io::IsTerminal;
use std::path::PathBuf;

use eyre::{Context, Result};
use quarterturn_core::{Cube, Shuffler, format_moves, make_move, parse_moves};
use quarterturn_prefs::Preferences;

use crate::net::format_net;
use crate::session::Session;

/// Quarterturn command-line interface
///
/// Plays moves on a simulated 3x3x3 cube and prints the result. Set
/// `RUST_LOG=info` to see each animation as it plays.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file to load instead of the default one.
    #[arg(long, global = true, value_name = "FILE")]
    pub prefs: Option<PathBuf>,
    /// Print the cube without colors.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Play moves through the move queue, with animation timing.
    Play {
        /// Moves in standard notation (such as `R U R' U'`), or typed keys
        /// with `--keys`.
        #[arg(required = true)]
        text: Vec<String>,
        /// Simulated milliseconds per frame.
        #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u32).range(1..))]
        frame_ms: u32,
        /// Treat the text as keypresses, one per frame: a lowercase letter
        /// turns clockwise and an uppercase letter turns counterclockwise.
        #[arg(short, long)]
        keys: bool,
    },
    /// Shuffle a solved cube.
    Shuffle {
        /// Seed for the random number generator.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply moves immediately, without animation.
    Apply {
        /// Moves in standard notation.
        #[arg(required = true)]
        notation: Vec<String>,
    },
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs = Preferences::load(args.prefs.as_deref());
    let config = prefs.engine_config();
    let max_animations = prefs.animation.max_animations;
    let colored = !args.no_color && std::io::stdout().is_terminal();

    match args.subcommand {
        Subcommand::Play {
            text,
            frame_ms,
            keys,
        } => {
            let text = text.join(" ");
            let mut session = Session::new(&config, Shuffler::new(), max_animations, frame_ms);
            if keys {
                let dropped = session.play_keys(&text)?;
                if dropped > 0 {
                    println!("dropped {dropped} moves because the queue was full");
                }
            } else {
                let moves = parse_moves(&text).wrap_err("invalid notation")?;
                session.play_moves(moves)?;
            }
            log::debug!(
                "{} cube updates, {} recent animations, {} ms per move",
                session.renderer.cube_updates(),
                session.renderer.animations().iter().count(),
                session.renderer.turn_time(),
            );
            println!("{}", format_net(&session.cube, colored));
            println!("finished at t={} ms", session.now());
            Ok(())
        }

        Subcommand::Shuffle { seed } => {
            let shuffler = match seed {
                Some(seed) => Shuffler::with_seed(seed),
                None => Shuffler::new(),
            };
            let frame_ms = 1;
            let mut session = Session::new(&config, shuffler, max_animations, frame_ms);
            if let Some(moves) = session.shuffle()? {
                println!("{}", format_moves(&moves));
            }
            println!("{}", format_net(&session.cube, colored));
            Ok(())
        }

        Subcommand::Apply { notation } => {
            let moves = parse_moves(&notation.join(" ")).wrap_err("invalid notation")?;
            let mut cube = Cube::new();
            let stickers = moves
                .into_iter()
                .fold(0, |stickers, mv| stickers | make_move(&mut cube, mv).stickers);
            println!("{}", format_net(&cube, colored));
            println!("moved {} stickers: {stickers:#018x}", stickers.count_ones());
            if cube.is_solved() {
                println!("solved");
            }
            Ok(())
        }
    }
}
