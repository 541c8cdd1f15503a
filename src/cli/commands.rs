//! Command dispatch and handlers

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::domain::builder::TreeBuilder;
use crate::domain::node::Node;
use crate::infrastructure::{reader, sink};
use crate::report;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Build { input, output }) => build(input, output),
        Some(Commands::Stats { file }) => stats(file),
        Some(Commands::Tree { file }) => tree(file),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

#[instrument]
fn build(input: &Path, output: &Path) -> CliResult<()> {
    debug!("input: {:?}, output: {:?}", input, output);

    let rows = reader::read_rows(input)?;
    let nodes = TreeBuilder::new().build(&rows);
    sink::write_nodes(output, &nodes)?;

    output::action(
        "Written",
        &format!("{} nodes to {}", nodes.len(), output.display()),
    );
    print_summary(&nodes);
    Ok(())
}

#[instrument]
fn stats(file: &Path) -> CliResult<()> {
    let nodes = sink::read_nodes(file)?;
    print_summary(&nodes);
    Ok(())
}

#[instrument]
fn tree(file: &Path) -> CliResult<()> {
    let nodes = sink::read_nodes(file)?;
    for tree in report::render_trees(&nodes) {
        output::info(&tree);
    }
    Ok(())
}

fn print_summary(nodes: &[Node]) {
    output::header("Nodes per level");
    for (level, count) in report::level_counts(nodes) {
        output::detail(&format!("{:<20} {}", level.column_name(), count));
    }

    let duplicates = report::duplicate_titles(nodes);
    if !duplicates.is_empty() {
        output::header("Titles on more than one node");
        for (title, count) in duplicates {
            output::detail(&format!("{:<40} {}", title, count));
        }
    }
}
