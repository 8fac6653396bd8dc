use crate::db::pool::DbPool;
use crate::db::queries::{count_events, load_all_events};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL EVENTS
    //
    let count = count_events(&pool.conn)?;
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DATE RANGE (local days)
    //
    let events = load_all_events(&pool.conn)?;
    let first = events.iter().min_by_key(|e| e.chrono_key());
    let last = events.iter().max_by_key(|e| e.chrono_key());

    let fmt = |e: Option<&crate::models::event::SleepEvent>| match e {
        Some(ev) => ev.local_timestamp().format("%Y-%m-%d %H:%M").to_string(),
        None => format!("{GREY}--{RESET}"),
    };

    println!("{}• Range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    println!();
    Ok(())
}
