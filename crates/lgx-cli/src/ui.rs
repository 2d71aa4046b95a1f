use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub toast_color: bool,
    pub quiet: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let no_color = std::env::var_os("NO_COLOR").is_some();
    let table_color = match flags.color {
        ColorMode::Always => flags.format == OutputFormat::Table,
        ColorMode::Never => false,
        ColorMode::Auto => {
            std::io::stdout().is_terminal()
                && flags.format == OutputFormat::Table
                && !flags.quiet
                && !no_color
        }
    };
    let toast_color = match flags.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stderr().is_terminal() && !no_color,
    };

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        table_color,
        toast_color,
        quiet: flags.quiet,
        term_width,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        toast_color: false,
        quiet: false,
        term_width: None,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

/// One-line operator notification on stderr, mirrored to tracing.
///
/// Success and info toasts are suppressed by `--quiet`; errors never are.
pub fn toast(kind: ToastKind, message: &str) {
    tracing::debug!(toast = ?kind, "{message}");
    let prefs = prefs();
    if prefs.quiet && kind != ToastKind::Error {
        return;
    }
    eprintln!("{}", format_toast(kind, message, prefs.toast_color));
}

pub fn toast_success(message: &str) {
    toast(ToastKind::Success, message);
}

pub fn toast_info(message: &str) {
    toast(ToastKind::Info, message);
}

pub fn toast_error(message: &str) {
    toast(ToastKind::Error, message);
}

fn format_toast(kind: ToastKind, message: &str, color: bool) -> String {
    let (symbol, code) = match kind {
        ToastKind::Success => ("✔", "32"),
        ToastKind::Info => ("•", "36"),
        ToastKind::Error => ("✖", "31"),
    };
    if color {
        format!("\u{1b}[{code}m{symbol}\u{1b}[0m {message}")
    } else {
        format!("{symbol} {message}")
    }
}
