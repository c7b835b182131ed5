use addonstub_core::registry;
use anyhow::{bail, Context};

/// Initialize one add-on from a directory and print what the registry
/// parsed out of it, as JSON.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(path) => path,
        None => bail!("usage: addonstub <addon-dir> [profile-dir]"),
    };
    let profile = args.next().unwrap_or_else(|| format!("{}/profile", path));

    let id = registry::init_addon(&path, &profile, true)?;
    let summary = registry::summary(&id).context("add-on missing from registry after init")?;

    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
