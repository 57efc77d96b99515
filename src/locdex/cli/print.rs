use colored::*;
use locdex::api::{CmdMessage, CmdResult, MessageLevel};
use locdex::index::DisplayLocation;
use locdex::model::Counts;
use locdex::selection::SelectionState;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 22;
const STREET_WIDTH: usize = 32;
const CITY_WIDTH: usize = 16;
const STATE_WIDTH: usize = 14;
const ZIP_WIDTH: usize = 11;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// Rows, then the counters and the selection summary.
pub fn print_listing(result: &CmdResult) {
    for dp in &result.listed_locations {
        println!("{}", format_row(dp));
    }
    if let Some(counts) = result.counts {
        println!();
        println!("{}", format_counts(counts));
    }
    if result.selected_count > 0 {
        print_selection(result);
    }
}

pub fn print_selection(result: &CmdResult) {
    let state = result.selection_state.unwrap_or(SelectionState::None);
    println!(
        "{}",
        format!("{} selected ({})", result.selected_count, state_label(state)).cyan()
    );
}

fn format_row(dp: &DisplayLocation) -> String {
    let loc = &dp.location;
    let marker = if dp.selected { "[x]" } else { "[ ]" };
    let badge = if loc.status {
        loc.status_label().green()
    } else {
        loc.status_label().red()
    };

    format!(
        "{} {:>3}. {} {} {} {} {} {}",
        marker,
        dp.index,
        pad(&loc.name, NAME_WIDTH).bold(),
        pad(&loc.street_address, STREET_WIDTH),
        pad(&loc.city, CITY_WIDTH),
        pad(&loc.state, STATE_WIDTH),
        pad(&loc.zip_code, ZIP_WIDTH).dimmed(),
        badge
    )
}

pub fn format_counts(counts: Counts) -> String {
    format!(
        "Total: {} • Enabled: {} • Disabled: {}",
        counts.total.to_string().bold(),
        counts.enabled,
        counts.disabled
    )
}

fn state_label(state: SelectionState) -> &'static str {
    match state {
        SelectionState::None => "none visible",
        SelectionState::Some => "some visible",
        SelectionState::All => "all visible",
    }
}

/// Truncate to `width` columns (with an ellipsis) and pad with spaces.
fn pad(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width);
    let used = out.width();
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_padded() {
        assert_eq!(pad("abc", 5), "abc  ");
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let out = pad("1111 W 35th St. 5th Floor", 10);
        assert_eq!(out.width(), 10);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn exact_width_is_untouched() {
        assert_eq!(truncate_to_width("12345", 5), "12345");
    }
}
