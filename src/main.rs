use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::catalog::Catalog;
use crate::cli::{Cli, Command, ServeArgs};
use crate::server::build_schema;

mod catalog;
mod cli;
mod datamodel;
mod error;
mod logging;
mod server;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command.unwrap_or_else(|| Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => {
            let catalog = Catalog::seeded();
            info!(
                authors = catalog.authors().len(),
                books = catalog.books().len(),
                "seeded catalog"
            );
            server::serve(args.addr(), catalog)
                .await
                .context("GraphQL server failed")?;
        }
        Command::Schema { output } => {
            let sdl = build_schema(Catalog::default()).sdl();
            match output {
                Some(path) => std::fs::write(&path, sdl)
                    .with_context(|| format!("Failed to write schema to {}", path.display()))?,
                None => print!("{sdl}"),
            }
        }
    }
    Ok(())
}
