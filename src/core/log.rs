use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;
use chrono::Local;

const OP_WIDTH_MAX: usize = 60;

/// ANSI colour for each logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "arrival" => Colour::Green,
        "override" => Colour::Yellow,
        "scan" => Colour::Cyan,
        "dropped" => Colour::Red,
        "export" => Colour::Blue,
        "open" | "close" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: usize,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Internal log of one attendance session. Lives and dies with the session.
#[derive(Debug, Default)]
pub struct SessionLog {
    entries: Vec<LogEntry>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line stamped with the local time (RFC 3339).
    pub fn record(&mut self, operation: &str, target: &str, message: &str) {
        let id = self.entries.len() + 1;
        self.entries.push(LogEntry {
            id,
            date: Local::now().format("%FT%T%:z").to_string(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn operations(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.operation.as_str()).collect()
    }

    /// Render every entry as one coloured line.
    pub fn render(&self) -> Vec<String> {
        if self.entries.is_empty() {
            return Vec::new();
        }

        let op_targets: Vec<String> = self
            .entries
            .iter()
            .map(|e| {
                if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                }
            })
            .collect();

        let op_w = op_targets
            .iter()
            .map(|s| s.len())
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_MAX);
        let id_w = self.entries.len().to_string().len();
        let date_w = self.entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        self.entries
            .iter()
            .zip(op_targets)
            .map(|(e, op_target)| {
                let color = color_for_operation(&e.operation);

                // truncate on visible chars, then recolour only the operation word
                let visible = if op_target.chars().count() > OP_WIDTH_MAX {
                    let mut s: String = op_target.chars().take(OP_WIDTH_MAX - 3).collect();
                    s.push_str("...");
                    s
                } else {
                    op_target
                };

                let recolored = match visible.split_once(' ') {
                    Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                    None => color.paint(visible.as_str()).to_string(),
                };

                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&recolored).len()));

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    e.id,
                    e.date,
                    recolored,
                    padding,
                    e.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }

    pub fn print(&self) {
        println!("📜 Session log:\n");
        for line in self.render() {
            println!("{line}");
        }
    }
}
