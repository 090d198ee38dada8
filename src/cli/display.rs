// Copyright 2025-present PaperHub Nepal contributors
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the paperhub CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Listings print as
//! boxed cards with badges for exam type, job kind, and pay. Respects
//! `NO_COLOR` and drops color entirely when stdout isn't a TTY.
//!
//! # Theme detection order
//!
//! 1. `PAPERHUB_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use paperhub::{
    ExamType, FacetGroup, FacetSelection, JobKind, JobRecord, PaperRecord, ValidationErrors,
};
use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("PAPERHUB_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
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
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

fn border(color_fn: fn() -> String) -> (String, &'static str) {
    if use_colors() {
        (color_fn(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut plain text to `max` characters, ending in `…` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let (color, reset) = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{color}│{reset}{content}{}{color}│{reset}", " ".repeat(pad));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (color, reset) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{color}┌{reset}{label_part}{color}{}┐{reset}", "─".repeat(remaining));
}

/// └──────────────────┘
pub fn section_bot() {
    let (color, reset) = border(GRAY);
    println!("{color}└{}┘{reset}", "─".repeat(BOX_WIDTH));
}

/// ╔══ centered title ══╗ on one line
pub fn title(text: &str) {
    let (color, reset) = border(BLUE);
    let colored = themed(BRIGHT_CYAN, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    println!("{color}╔{}╗{reset}", "═".repeat(BOX_WIDTH));
    println!(
        "{color}║{reset}{}{colored}{}{color}║{reset}",
        " ".repeat(left_pad),
        " ".repeat(total_pad - left_pad)
    );
    println!("{color}╚{}╝{reset}", "═".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn exam_type_badge(exam_type: ExamType) -> String {
    let label = format!("[{}]", exam_type);
    match exam_type {
        ExamType::Final => themed(GREEN, &[BOLD], &label),
        ExamType::Internal => themed(YELLOW, &[BOLD], &label),
    }
}

pub fn job_kind_badge(kind: JobKind) -> String {
    match kind {
        JobKind::Internship => themed(MAGENTA, &[BOLD], "[Internship]"),
        JobKind::Job => themed(BLUE, &[BOLD], "[Job]"),
    }
}

pub fn paid_badge(is_paid: bool) -> String {
    if is_paid {
        themed(GREEN, &[], "Paid")
    } else {
        themed(RED, &[], "Unpaid")
    }
}

/// "Showing 3 papers" with the count emphasized.
pub fn summary_line(shown: usize, total: usize, noun: &str) -> String {
    format!(
        " Showing {} of {} {}",
        themed(BRIGHT_CYAN, &[BOLD], &shown.to_string()),
        total,
        noun
    )
}

/// One-line description of the active query and facets.
pub fn describe_filters(query: &str, selection: &FacetSelection) -> String {
    let mut parts = Vec::new();
    if !query.is_empty() {
        parts.push(format!("query {:?}", query));
    }
    for (group, values) in selection.active_groups() {
        let values: Vec<&str> = values.iter().map(String::as_str).collect();
        parts.push(format!("{}: {}", group, values.join(", ")));
    }
    if parts.is_empty() {
        "no filters".to_string()
    } else {
        parts.join(" · ")
    }
}

pub fn paper_line(paper: &PaperRecord) -> String {
    format!(
        " {} {}  {}",
        exam_type_badge(paper.exam_type),
        themed(BRIGHT_CYAN, &[BOLD], &truncate(&paper.subject, 40)),
        themed(GRAY, &[], &format!("{} · {} · {}", paper.faculty, paper.semester, paper.year)),
    )
}

pub fn job_line(job: &JobRecord) -> String {
    format!(
        " {} {} @ {}  {} · due {} · {}",
        job_kind_badge(job.kind),
        themed(BRIGHT_CYAN, &[BOLD], &truncate(&job.role, 30)),
        truncate(&job.company, 20),
        themed(GRAY, &[], &job.location),
        job.deadline,
        paid_badge(job.is_paid),
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// VIEWS
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_papers(
    results: &[&PaperRecord],
    total: usize,
    query: &str,
    selection: &FacetSelection,
) {
    title("Past Exam Papers");
    section_top("FILTERS");
    row(&format!(" {}", describe_filters(query, selection)));
    row(&summary_line(results.len(), total, "papers"));
    section_bot();

    if results.is_empty() {
        section_top("NO PAPERS FOUND");
        row(" Try adjusting your search or filters");
        section_bot();
        return;
    }

    section_top("RESULTS");
    for paper in results {
        row(&paper_line(paper));
    }
    section_bot();
}

pub fn print_jobs(results: &[&JobRecord], total: usize, query: &str, selection: &FacetSelection) {
    title("Internships & Jobs");
    section_top("FILTERS");
    row(&format!(" {}", describe_filters(query, selection)));
    row(&summary_line(results.len(), total, "opportunities"));
    section_bot();

    if results.is_empty() {
        section_top("NO OPPORTUNITIES FOUND");
        row(" Try adjusting your search or filters");
        section_bot();
        return;
    }

    section_top("RESULTS");
    for job in results {
        row(&job_line(job));
    }
    section_bot();
}

pub fn print_facet_groups(heading: &str, groups: &[FacetGroup]) {
    title(heading);
    for group in groups {
        section_top(&group.title);
        for option in &group.options {
            row(&format!(
                " {:<16} {}",
                option.label,
                themed(GRAY, &[DIM], &format!("--facet {}={}", group.title, option.value))
            ));
        }
        section_bot();
    }
}

pub fn print_validation(result: &Result<(), ValidationErrors>) {
    match result {
        Ok(()) => println!("{}", themed(GREEN, &[BOLD], "✓ registration form is valid")),
        Err(errors) => {
            section_top("INVALID REGISTRATION");
            for error in &errors.errors {
                row(&format!(" {} {}", themed(RED, &[BOLD], error.field), error.message));
            }
            section_bot();
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
