use anyhow::Result;
use clap::Parser;
use icon_resize::{icon_gen, icon_set::IconSet};

/// Reads `../assets/icon/icon.png` and writes `icon16.png`, `icon32.png` and
/// `icon64.png` next to it.
#[derive(Debug, Parser)]
#[clap(
    name = "icon-resize",
    version,
    about = "Render the application icon at 16, 32 and 64 pixels"
)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    let set = IconSet::builtin()?;
    icon_gen::generate_icons(&set)?;

    Ok(())
}
