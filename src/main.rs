use anyhow::Context;
use country_rights::{RecordStore, CLI};
use tracing::Level;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so they never interleave with the menu on stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .init();

    let store = RecordStore::open_default()
        .with_context(|| format!("failed to open country store at {}", RecordStore::DEFAULT_PATH))?;

    let mut cli = CLI::new(store);
    cli.run().context("console I/O failed")?;
    Ok(())
}
