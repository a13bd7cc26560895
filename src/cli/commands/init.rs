use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::dataset::Dataset;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes the configuration file (not in test mode) and checks that the
/// configured dataset, if any, loads cleanly.
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rfidattend…");

    let cfg = Config::init_all(cli.data.clone(), cli.test)?;

    let dataset = Dataset::resolve(cfg.data_path().as_deref())?;
    match cfg.data_path() {
        Some(p) => info(format!("Dataset     : {}", p.display())),
        None => info("Dataset     : built-in demo data"),
    }
    info(format!(
        "{} classes, {} students, {} readers",
        dataset.classes.len(),
        dataset.students.len(),
        dataset.readers.len()
    ));

    success("rfidattend initialization completed!");
    Ok(())
}
