use crate::args::{Cli, Commands};
use crate::config::Config;
use crate::handlers;
use anyhow::Result;
use calitrack_engine::SessionLog;
use calitrack_store::{SessionStore, resolve_data_path};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_path(cli.data_dir.as_deref())?;
    let store = SessionStore::new(&data_dir);
    let config = Config::load_from(&data_dir.join("config.toml"))?;
    let mut log = SessionLog::from_sessions(store.load()?);

    let Some(command) = cli.command else {
        return handlers::overview::handle(&log);
    };

    match command {
        Commands::Log {
            date,
            split,
            entries,
            replace,
        } => handlers::log::handle(&mut log, &store, &config, date, split, entries, replace),

        Commands::Sessions { split, range } => {
            handlers::sessions::handle(&log, split, range, cli.format)
        }

        Commands::Exercises { split } => handlers::exercises::handle(&log, split, cli.format),

        Commands::Last { split, exercise } => {
            handlers::last::handle(&log, split, &exercise, cli.format)
        }

        Commands::Progress {
            split,
            range,
            exercises,
        } => handlers::progress::handle(&log, &config, split, range, exercises, cli.format),

        Commands::Summary { date, split } => {
            handlers::summary::handle(&log, date, split, cli.format)
        }

        Commands::Export { output } => handlers::export::handle(&log, output),

        Commands::Timer { seconds } => handlers::timer::handle(seconds, &config),
    }
}
