use crate::db::log::{LogRow, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));
    re.replace_all(s, "").into_owned()
}

/// ANSI colour for each logged operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// "operation (target)", with only the operation coloured, truncated to
/// `MAX_OP_WIDTH` visible characters.
fn render_op_target(row: &LogRow) -> String {
    let color = color_for_operation(&row.operation);

    let visible = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };

    let truncated = if visible.chars().count() > MAX_OP_WIDTH {
        let mut s: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    match truncated.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rendered: Vec<(String, String)> = entries
            .iter()
            .map(|r| {
                let date = chrono::DateTime::parse_from_rfc3339(&r.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| r.date.clone());
                (date, render_op_target(r))
            })
            .collect();

        let id_w = entries
            .iter()
            .map(|r| r.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rendered.iter().map(|(d, _)| d.len()).max().unwrap_or(10);
        let op_w = rendered
            .iter()
            .map(|(_, op)| strip_ansi(op).chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (row, (date, op)) in entries.iter().zip(rendered) {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op).chars().count()));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id,
                date,
                op,
                padding,
                row.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
