use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dataset::Dataset;
use crate::core::notify::{ConsoleNotifier, Notifier};
use crate::core::session::{AttendanceSession, Clock, SessionRunner, SystemClock, VirtualClock};
use crate::core::source::SimulatedFeed;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::models::arrival::TagRead;
use crate::models::class::ClassSlot;
use crate::models::status::AttendanceStatus;
use crate::models::student::StudentId;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_rate, colorize_optional, colorize_status};
use crate::utils::formatting::{bold, progress_bar};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_offset, parse_date, parse_optional_time, parse_time, today};
use chrono::{Local, NaiveTime};

/// A `--scan` argument before it is stamped with the session clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanArg {
    pub tag: String,
    pub at: Option<NaiveTime>,
}

/// Parse "TAG" or "TAG@HH:MM".
pub fn parse_scan(raw: &str) -> AppResult<ScanArg> {
    let (tag, at) = match raw.split_once('@') {
        Some((tag, t)) => (
            tag,
            Some(parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?),
        ),
        None => (raw, None),
    };
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(AppError::InvalidScan(raw.to_string()));
    }
    Ok(ScanArg {
        tag: tag.to_string(),
        at,
    })
}

/// Parse "ID=STATUS".
pub fn parse_mark(raw: &str) -> AppResult<(StudentId, AttendanceStatus)> {
    let (id, status) = raw
        .split_once('=')
        .ok_or_else(|| AppError::InvalidMark(raw.to_string()))?;
    let id: StudentId = id
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidMark(raw.to_string()))?;
    let status =
        AttendanceStatus::from_code(status).ok_or_else(|| AppError::InvalidStatus(status.to_string()))?;
    Ok((id, status))
}

struct Plan<'a> {
    ticks: usize,
    seed: Option<u64>,
    scans: Vec<ScanArg>,
    reader: Option<String>,
    marks: Vec<(StudentId, AttendanceStatus)>,
    export: Option<&'a str>,
    format: ExportFormat,
    force: bool,
    log: bool,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session {
        class,
        date,
        start,
        ticks,
        seed,
        realtime,
        scans,
        reader,
        marks,
        export,
        format,
        force,
        log,
    } = cmd
    {
        let dataset = Dataset::resolve(cfg.data_path().as_deref())?;
        let date = match date {
            Some(d) => parse_date(d)?,
            None => today(),
        };
        let start = parse_optional_time(start.as_ref())?;

        let slot = resolve_class(&dataset, *class, start)?;

        // validate everything before the session opens
        if let Some(r) = reader {
            dataset.reader(r)?;
        }
        let plan = Plan {
            ticks: *ticks,
            seed: *seed,
            scans: scans.iter().map(|s| parse_scan(s)).collect::<AppResult<_>>()?,
            reader: reader.clone(),
            marks: marks.iter().map(|m| parse_mark(m)).collect::<AppResult<_>>()?,
            export: export.as_deref(),
            format: *format,
            force: *force,
            log: *log,
        };

        let roster = dataset.roster_for(date)?;
        let session = AttendanceSession::open(
            slot.clone(),
            date,
            roster,
            cfg.grace_period_minutes,
            ConsoleNotifier,
        );

        info(format!(
            "Attendance open: {} ({}) {} {} on {}",
            slot.course,
            slot.section,
            slot.time_range(),
            slot.room,
            date
        ));

        if *realtime {
            let runner = SessionRunner::new(SystemClock, cfg.tick_interval());
            return drive(session, runner, plan, cfg);
        }

        let from = date.and_time(start.unwrap_or(slot.start));
        let runner = SessionRunner::new(VirtualClock::starting_at(from), cfg.tick_interval());
        return drive(session, runner, plan, cfg);
    }
    Ok(())
}

fn resolve_class(
    dataset: &Dataset,
    class: Option<u32>,
    start: Option<NaiveTime>,
) -> AppResult<ClassSlot> {
    match class {
        Some(id) => Ok(dataset.class(id)?.clone()),
        None => {
            let t = start.unwrap_or_else(|| Local::now().time());
            dataset.current_class(t).cloned().ok_or_else(|| {
                AppError::UnknownClass(format!("no class running at {}", t.format("%H:%M")))
            })
        }
    }
}

/// Feed ticks, then tag reads, then overrides; report; close.
fn drive<C: Clock>(
    mut session: AttendanceSession<ConsoleNotifier>,
    mut runner: SessionRunner<C>,
    plan: Plan<'_>,
    cfg: &Config,
) -> AppResult<()> {
    if plan.ticks > 0 {
        let mut feed = match plan.seed {
            Some(seed) => SimulatedFeed::seeded(seed, cfg.arrival_probability),
            None => SimulatedFeed::from_entropy(cfg.arrival_probability),
        };
        let applied = runner.run(&mut session, &mut feed, plan.ticks);
        info(format!(
            "RFID feed: {} ticks, {} check-ins (until {})",
            plan.ticks,
            applied.len(),
            runner.now().format("%H:%M:%S")
        ));
    }

    for scan in &plan.scans {
        let timestamp = match scan.at {
            Some(t) => session.date().and_time(t),
            None => runner.now(),
        };
        session.scan(&TagRead {
            rfid_tag: scan.tag.clone(),
            reader_id: plan.reader.clone(),
            timestamp,
        });
    }

    for (id, status) in &plan.marks {
        if session.mark(*id, *status, runner.now()).is_none() {
            info(format!("No student with id {id} in this roster"));
        }
    }

    print_roster(&session, cfg);
    print_live_arrivals(&session, cfg);
    print_summary(&session);

    if let Some(file) = plan.export {
        ExportLogic::export(&mut session, plan.format, file, plan.force)?;
    }

    session.close();

    if plan.log {
        println!();
        session.log().print();
    }
    Ok(())
}

fn print_roster<N: Notifier>(session: &AttendanceSession<N>, cfg: &Config) {
    header(format!("Student Roster, {}", session.class().course));

    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("Name"),
        Column::new("Roll"),
        Column::new("RFID"),
        Column::new("Status"),
        Column::new("Check-in"),
        Column::new("Offset"),
    ])
    .with_separator(cfg.separator());

    let start = session.policy().class_start;
    for r in session.records() {
        let offset = r
            .check_in()
            .map(|t| format_offset((t - start).num_minutes()))
            .unwrap_or_default();
        table.add_row(vec![
            r.id.to_string(),
            r.name.clone(),
            r.roll_number.clone(),
            r.rfid_tag.clone(),
            colorize_status(r.status()),
            colorize_optional(&r.check_in_str()),
            offset,
        ]);
    }
    print!("{}", table.render());
}

fn print_live_arrivals<N: Notifier>(session: &AttendanceSession<N>, cfg: &Config) {
    header("Live RFID Arrivals");

    let arrivals = session.live_arrivals(cfg.live_feed_limit);
    if arrivals.is_empty() {
        println!("No arrivals yet.");
        return;
    }
    for r in arrivals {
        println!(
            "{:<3} {:<20} {:<10} {} {}",
            r.initials(),
            r.name,
            r.roll_number,
            r.check_in_str(),
            colorize_status(r.status())
        );
    }
}

fn print_summary<N: Notifier>(session: &AttendanceSession<N>) {
    header("Class Summary");
    let s = session.summary();
    println!("Total Students: {}", bold(&s.total.to_string()));
    println!(
        "Present: {} | Late: {} | Absent: {}",
        s.present, s.late, s.absent
    );
    println!(
        "Attendance rate: {}{}%{} {}",
        color_for_rate(s.rate),
        s.rate,
        RESET,
        progress_bar(s.rate, 20)
    );
}
