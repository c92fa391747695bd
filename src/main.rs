mod app;
mod cli;
mod ui;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    app::run(&args)
}
