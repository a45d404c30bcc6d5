mod cli;
mod commands;
mod logging;
mod stdin;

fn main() -> anyhow::Result<()> {
    crate::cli::run()
}
