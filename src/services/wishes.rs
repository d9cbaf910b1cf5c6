use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;

use crate::models::wish::WishView;
use crate::services::wish_selector::select_wish_index;
use crate::utils::error::{AppError, AppResult};
use crate::utils::helpers::{format_display_date, format_iso_date};

const WISHES: &str = include_str!("../data/wishes.txt");

static CATALOG: Lazy<Vec<&'static str>> = Lazy::new(|| parse_wishes(WISHES));

fn parse_wishes(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn all() -> &'static [&'static str] {
    CATALOG.as_slice()
}

pub fn len() -> usize {
    CATALOG.len()
}

pub fn get(index: usize) -> Option<&'static str> {
    CATALOG.get(index).copied()
}

pub fn wish_for(fid: i64, date: NaiveDate, today: NaiveDate) -> AppResult<WishView> {
    wish_from(all(), fid, date, today)
}

fn wish_from(wishes: &[&str], fid: i64, date: NaiveDate, today: NaiveDate) -> AppResult<WishView> {
    let instant = date.and_time(NaiveTime::MIN).and_utc();
    let count = i64::try_from(wishes.len())
        .map_err(|e| AppError::Internal(format!("Wish catalog too large: {}", e)))?;
    let index = select_wish_index(fid, &instant, count)?;

    let message = wishes
        .get(index)
        .ok_or_else(|| AppError::Internal(format!("Wish index {} out of range", index)))?;

    let next_date = date
        .succ_opt()
        .ok_or_else(|| AppError::BadRequest("Date is out of range".to_string()))?;

    tracing::debug!("Selected wish {} for fid {} on {}", index, fid, date);

    Ok(WishView {
        fid,
        date: format_iso_date(date),
        next_date: format_iso_date(next_date),
        display_date: format_display_date(date),
        is_today: date == today,
        index,
        message: message.to_string(),
    })
}
