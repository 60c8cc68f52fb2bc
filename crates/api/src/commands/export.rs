use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use super::write_json;
use crate::AppContext;

#[derive(Args, Debug)]
pub struct Command {
    /// Directory to write into (defaults to `export.directory`)
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,
}

pub async fn handle<W: Write>(
    command: Command,
    context: &AppContext,
    out: &mut W,
    json: bool,
) -> anyhow::Result<()> {
    let path = match command.dir {
        Some(dir) => context.exporter_to(dir).export().await?,
        None => context.exporter.export().await?,
    };

    if json {
        return write_json(out, &json!({ "path": path }));
    }

    writeln!(out, "Exported favorites to {}", path.display())?;
    Ok(())
}
