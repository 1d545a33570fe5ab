use aether::api::{CmdMessage, MessageLevel};
use aether::config::AetherConfig;
use aether::graph::GraphProjection;
use aether::index::DisplayNote;
use aether::model::{plain_text, Note, NoteKind};
use chrono::{DateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const KIND_WIDTH: usize = 8;
const ACTIVE_MARKER: &str = "▸";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_full_notes(notes: &[DisplayNote]) {
    for (i, dn) in notes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {} {}",
            dn.index.to_string().yellow(),
            dn.note.title.bold(),
            format!("({})", dn.note.kind).dimmed()
        );
        println!("--------------------------------");
        println!("{}", dn.note.content);
        if !dn.note.links().is_empty() {
            println!("--------------------------------");
            println!("{} {}", "links:".dimmed(), dn.note.links().len());
        }
    }
}

pub(super) fn print_notes(notes: &[DisplayNote]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    for dn in notes {
        let idx_str = format!("{}. ", dn.index);
        let left_prefix = if dn.is_active {
            format!("  {} ", ACTIVE_MARKER)
        } else {
            "    ".to_string()
        };
        let kind_str = format!("{:<width$}", dn.note.kind.as_str(), width = KIND_WIDTH);

        let preview = preview(&dn.note);
        let title_content = if preview.is_empty() {
            dn.note.title.clone()
        } else {
            format!("{} {}", dn.note.title, preview)
        };

        let fixed_width = left_prefix.width() + idx_str.width() + KIND_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        let idx_colored = if dn.is_active {
            idx_str.yellow()
        } else {
            idx_str.normal()
        };

        println!(
            "{}{}{}{}{}{}",
            left_prefix,
            idx_colored,
            kind_str.cyan(),
            title_display,
            " ".repeat(padding),
            format_time_ago(dn.note.updated_at).dimmed()
        );
    }
}

pub(super) fn print_graph_summary(graph: &GraphProjection) {
    for node in &graph.nodes {
        let targets: Vec<&str> = graph
            .edges
            .iter()
            .filter(|e| e.from == node.id)
            .filter_map(|e| graph.node(&e.to))
            .map(|n| n.title.as_str())
            .collect();
        let degrees = format!(
            "(out {}, in {})",
            graph.out_degree(&node.id),
            graph.in_degree(&node.id)
        );
        if targets.is_empty() {
            println!("{} {}", node.title.bold(), degrees.dimmed());
        } else {
            println!(
                "{} {} {} {}",
                node.title.bold(),
                degrees.dimmed(),
                "->".dimmed(),
                targets.join(", ")
            );
        }
    }
}

pub(super) fn print_config(config: &AetherConfig) {
    for key in aether::config::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn preview(note: &Note) -> String {
    let raw = match note.kind {
        NoteKind::Text => plain_text(&note.content),
        NoteKind::Audio => note.content.clone(),
        NoteKind::Sketch if note.content.is_empty() => String::new(),
        NoteKind::Sketch => "[image]".to_string(),
    };
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(50)
        .collect()
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
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
