//! Headless 3x3x3 twisty puzzle player.

mod cli;
mod keys;
mod net;
mod renderer;
mod session;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    color_eyre::install()?;
    env_logger::builder().init();

    let args = cli::Args::parse();
    cli::exec(args)
}
