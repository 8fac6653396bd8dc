use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::day_bucket::DayBucket;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::formatting::{event_row, format_day};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { day, json } = cmd {
        let store = EntryStore::open(&cfg.database)?;
        let mut buckets = store.day_buckets()?;

        if let Some(d) = day {
            let wanted = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
            buckets.retain(|b| b.day == wanted);
        }

        if *json {
            let out = serde_json::to_string_pretty(&buckets)
                .map_err(|e| AppError::Other(format!("JSON serialization failed: {e}")))?;
            println!("{out}");
            return Ok(());
        }

        if buckets.is_empty() {
            let next = store.next_action()?;
            info(format!("No entries to show. Next: {}", next.label()));
            return Ok(());
        }

        print_buckets(&buckets, cfg);
    }

    Ok(())
}

fn print_buckets(buckets: &[DayBucket], cfg: &Config) {
    let id_width = buckets
        .iter()
        .flat_map(|b| b.events.iter())
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);

    for bucket in buckets {
        header(format_day(&bucket.day, &cfg.date_format));
        for ev in &bucket.events {
            println!("{}", event_row(ev, &cfg.time_format, id_width));
        }
    }
}
