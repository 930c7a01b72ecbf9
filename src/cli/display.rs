// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for search results.
//!
//! OneDark colors on dark terminals, One Light on light ones. Detection
//! tries `MIZAN_THEME` first, then `COLORFGBG`, then defaults to dark.
//! Respects `NO_COLOR` and drops colors when stdout is not a TTY.

use std::fmt::Write;
use std::sync::OnceLock;

use mizan::ScoredResult;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("MIZAN_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; bg 7+ (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// (dark, light) pairs
const BLUE: ((u8, u8, u8), (u8, u8, u8)) = ((97, 175, 239), (64, 120, 242));
const GREEN: ((u8, u8, u8), (u8, u8, u8)) = ((152, 195, 121), (80, 161, 79));
const GRAY: ((u8, u8, u8), (u8, u8, u8)) = ((92, 99, 112), (160, 161, 167));

fn themed(pair: ((u8, u8, u8), (u8, u8, u8))) -> String {
    match theme() {
        Theme::Dark => rgb(pair.0),
        Theme::Light => rgb(pair.1),
    }
}

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn paint(enabled: bool, code: &str, text: &str) -> String {
    if enabled {
        format!("{}{}{}", code, text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT LISTING
// ═══════════════════════════════════════════════════════════════════════════

/// Render results the way the search page lays them out: title, then
/// `[collection] score:N.N`, then the snippet.
pub fn render_results(results: &[ScoredResult<'_>], colored: bool) -> String {
    let mut out = String::new();
    let header = format!("Search results ({})", results.len());
    let _ = writeln!(out, "{}", paint(colored, BOLD, &header));

    for result in results {
        let link = format!(
            "/{}/{}  {}",
            result.collection_type,
            result.record.id,
            result.record.display_title()
        );
        let meta = format!(
            "[{}] score:{:.1}",
            result.collection_type,
            result.display_score()
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", paint(colored, &themed(BLUE), &link));
        let _ = writeln!(out, "  {}", paint(colored, &themed(GREEN), &meta));
        if let Some(snippet) = result.snippet.as_deref().filter(|s| !s.is_empty()) {
            let _ = writeln!(out, "  {}", paint(colored, &themed(GRAY), snippet));
        }
    }
    out
}
