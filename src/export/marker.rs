use std::path::Path;

use chrono::NaiveDate;

use crate::{Res, utils, warning};

/// Finds the date marker in `content` and parses its date.
///
/// The marker is the first line whose first word, without its leading
/// character, is `date` (`%date 2024-03-01`). Only that line is considered:
/// when its second word is missing or not a `YYYY-MM-DD` date, the result is
/// `None` even if a later line would have matched.
pub fn parse_date_marker(content: &str) -> Option<NaiveDate> {
    let line = content.lines().find(|line| {
        line.split_whitespace()
            .next()
            .map(|word| word.chars().skip(1).collect::<String>() == "date")
            .unwrap_or(false)
    });

    let Some(line) = line else {
        warning!("Date could not be found");
        return None;
    };

    let Some(date_str) = line.split_whitespace().nth(1) else {
        warning!("Date marker has no date");
        return None;
    };

    match NaiveDate::parse_from_str(date_str, utils::DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            warning!("Date format is invalid: {}", date_str);
            None
        }
    }
}

/// Reads the date marker of a previously exported file.
///
/// A file without a usable marker gives `Ok(None)`; only failing to read the
/// file is an error.
pub async fn read_date(path: &Path) -> Res<Option<NaiveDate>> {
    let content = async_fs::read_to_string(path).await?;
    Ok(parse_date_marker(&content))
}
