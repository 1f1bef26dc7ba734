use addrbook::api::{CmdMessage, MessageLevel};
use addrbook::error::{AddrbookError, Result};
use addrbook::index::DisplayContact;
use addrbook::model::{Contact, ContactField};
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const INDEX_WIDTH: usize = 5;
const NAME_WIDTH: usize = 30;
const PHONE_WIDTH: usize = 18;
const PICTURE_MARKER: &str = "▣";

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

/// Same as [`print_messages`] but on stderr, for notices that must not mix
/// into listings (e.g. JSON output).
pub(super) fn eprint_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_contacts(contacts: &[DisplayContact]) {
    if contacts.is_empty() {
        println!("No contacts found.");
        return;
    }

    for dc in contacts {
        let idx = format!("{:>width$}. ", dc.index, width = INDEX_WIDTH - 2);
        let name = pad_to_width(
            &truncate_to_width(&dc.contact.display_name(), NAME_WIDTH),
            NAME_WIDTH,
        );
        let phone = pad_to_width(
            &truncate_to_width(&dc.contact.fields.mobile_number, PHONE_WIDTH),
            PHONE_WIDTH,
        );
        let marker = if dc.contact.has_picture() {
            PICTURE_MARKER
        } else {
            " "
        };

        let used = INDEX_WIDTH + NAME_WIDTH + PHONE_WIDTH + 4;
        let email = truncate_to_width(
            &dc.contact.fields.email_address,
            LINE_WIDTH.saturating_sub(used),
        );

        println!(
            "{}{} {} {} {}",
            idx.yellow(),
            name.bold(),
            phone,
            marker.dimmed(),
            email.dimmed()
        );
    }
}

pub(super) fn print_saved_footer(saved: Option<DateTime<Utc>>) {
    if let Some(at) = saved {
        println!();
        println!("{}", format!("saved {}", format_time_ago(at)).dimmed());
    }
}

pub(super) fn print_full_contacts(contacts: &[DisplayContact]) {
    for (i, dc) in contacts.iter().enumerate() {
        if i > 0 {
            println!("\n--------------------------------\n");
        }
        println!(
            "{} {}",
            format!("{}.", dc.index).yellow(),
            dc.contact.display_name().bold()
        );
        for (label, value) in detail_lines(&dc.contact) {
            println!("  {} {}", format!("{:<18}", label).dimmed(), value);
        }
    }
}

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).map_err(AddrbookError::Serialization)?;
    println!("{}", out);
    Ok(())
}

/// Label/value rows for the detail view. Empty fields are left out, except
/// the picture, which always says whether there is one.
fn detail_lines(contact: &Contact) -> Vec<(&'static str, String)> {
    let mut lines: Vec<(&'static str, String)> = ContactField::ALL
        .iter()
        .filter(|f| **f != ContactField::PicturePath)
        .filter_map(|f| {
            let value = contact.fields.get(*f);
            (!value.is_empty()).then(|| (f.label(), value.to_string()))
        })
        .collect();

    let picture = if contact.has_picture() {
        contact.fields.picture_path.clone()
    } else {
        "(none)".to_string()
    };
    lines.push((ContactField::PicturePath.label(), picture));
    lines
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

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
