//! Command-line surface: argument parsing and console rendering.

use crate::i18n::LanguageCatalog;
use crate::processor::{CheckReport, LanguageStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronize every configured language
    All,
    /// Synchronize one language
    Language(String),
    /// Show configured languages and whether their files exist
    List,
    /// Report missing keys for one language without writing
    Check(String),
    /// Print usage, optionally after a hint about what went wrong
    Usage { error: Option<String> },
}

impl Command {
    /// Parse the arguments that follow the program name.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();

        let Some(first) = args.first() else {
            return Command::All;
        };

        match first.as_str() {
            "--list" | "-l" => Command::List,
            "--check" | "-c" => match args.get(1) {
                Some(code) => Command::Check(code.clone()),
                None => Command::Usage {
                    error: Some("--check needs a language code, e.g. --check vi".to_string()),
                },
            },
            "--help" | "-h" => Command::Usage { error: None },
            code => Command::Language(code.to_string()),
        }
    }
}

pub fn usage(catalog: &LanguageCatalog) -> String {
    let mut out = String::new();
    out.push_str("Usage: locale-sync [LANGUAGE | --list | --check LANGUAGE | --help]\n\n");
    out.push_str("  (no arguments)      synchronize every configured language\n");
    out.push_str("  LANGUAGE            synchronize one language, e.g. vi\n");
    out.push_str("  -l, --list          list languages and whether their files exist\n");
    out.push_str("  -c, --check LANG    show keys LANG is missing, without writing\n");
    out.push_str("  -h, --help          show this help\n\n");
    out.push_str(&format!("Available languages: {}", catalog.codes().join(", ")));
    out
}

pub fn render_list(statuses: &[LanguageStatus]) -> String {
    let mut lines = vec!["Configured languages:".to_string()];
    for status in statuses {
        let marker = if status.file_exists { "exists" } else { "missing" };
        lines.push(format!(
            "  {:<8} {:<24} [{}]",
            status.language.code(),
            status.language.name(),
            marker
        ));
    }
    lines.join("\n")
}

pub fn render_check(report: &CheckReport) -> String {
    let mut lines = vec![
        format!("Check for {}", report.language),
        format!("  source keys:  {}", report.source_keys),
        format!("  target keys:  {}", report.target_keys),
        format!("  missing keys: {}", report.missing.len()),
    ];
    if report.missing.is_empty() {
        lines.push("  Up to date.".to_string());
    } else {
        lines.push(String::new());
        lines.extend(report.missing.iter().map(|key| format!("  - {}", key)));
    }
    lines.join("\n")
}
