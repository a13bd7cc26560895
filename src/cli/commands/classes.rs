use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dataset::Dataset;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_slot;
use crate::utils::table::{Column, Table};
use crate::utils::time::parse_optional_time;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Classes { at } = cmd {
        let dataset = Dataset::resolve(cfg.data_path().as_deref())?;
        let t = parse_optional_time(at.as_ref())?.unwrap_or_else(|| Local::now().time());

        header(format!("Today's classes ({})", t.format("%H:%M")));

        if dataset.classes.is_empty() {
            info("No classes scheduled.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID"),
            Column::new("Time"),
            Column::new("Course"),
            Column::new("Section"),
            Column::new("Room"),
            Column::new("State"),
        ])
        .with_separator(cfg.separator());

        let mut classes: Vec<_> = dataset.classes.iter().collect();
        classes.sort_by_key(|c| c.start);

        for c in classes {
            table.add_row(vec![
                c.id.to_string(),
                c.time_range(),
                c.course.clone(),
                c.section.clone(),
                c.room.clone(),
                colorize_slot(c.state_at(t)),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
