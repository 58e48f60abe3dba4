use crate::config::Config;
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// Rest countdown between sets. Independent of the session log: it ticks
/// down once a second until done or Ctrl-C.
pub fn handle(seconds: Option<u64>, config: &Config) -> Result<()> {
    let total = seconds
        .or_else(|| config.rest_presets.first().copied())
        .unwrap_or(60);

    let cancelled = Arc::new(AtomicBool::new(false));
    let handler_flag = cancelled.clone();
    ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst))?;

    let mut stdout = std::io::stdout();
    for remaining in (1..=total).rev() {
        if cancelled.load(Ordering::SeqCst) {
            println!();
            println!("Rest cancelled.");
            return Ok(());
        }
        print!("\r  {:>4}s remaining ", remaining);
        stdout.flush()?;
        thread::sleep(Duration::from_secs(1));
    }

    println!("\r  Rest over. Go again!");
    Ok(())
}
