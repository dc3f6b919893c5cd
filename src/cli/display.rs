// src/cli/display.rs

use crate::domain::bookmark::Bookmarks;
use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

/// Width of the name column in the bookmark list.
const NAME_WIDTH: usize = 20;

/// Width of the command column in the usage text.
const USAGE_WIDTH: usize = 26;

fn bold(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color)).set_bold(true);
    spec
}

/// Writes `text` in bold `color` and resets afterwards.
pub fn paint(out: &mut impl WriteColor, color: Color, text: &str) -> io::Result<()> {
    out.set_color(&bold(color))?;
    write!(out, "{}", text)?;
    out.reset()
}

pub fn print_warning(out: &mut impl WriteColor, message: &str) -> io::Result<()> {
    paint(out, Color::Red, &format!("WARNING: {}", message))?;
    writeln!(out)
}

pub fn print_error(out: &mut impl WriteColor, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message)
}

/// Argument placeholder of a usage row.
enum Placeholder {
    Required(&'static str),
    Optional(&'static str),
}

struct UsageRow {
    flags: Option<(&'static str, &'static str)>,
    arg: Option<Placeholder>,
    action: &'static str,
    on_bookmark: bool,
}

const fn row(
    flags: Option<(&'static str, &'static str)>,
    arg: Option<Placeholder>,
    action: &'static str,
    on_bookmark: bool,
) -> UsageRow {
    UsageRow {
        flags,
        arg,
        action,
        on_bookmark,
    }
}

const BOOKMARK: Option<Placeholder> = Some(Placeholder::Required("bookmark"));

const COMMAND_ROWS: &[UsageRow] = &[
    row(None, BOOKMARK, "Go to directory", true),
    row(Some(("-a", "--add")), BOOKMARK, "Add bookmark", true),
    row(Some(("-g", "--go")), BOOKMARK, "Go to directory", true),
    row(Some(("-p", "--print")), BOOKMARK, "Show directory", true),
    row(Some(("-d", "--delete")), BOOKMARK, "Delete bookmark", true),
    row(Some(("-l", "--list")), None, "Show available bookmarks", false),
];

const INFO_ROWS: &[UsageRow] = &[
    row(Some(("-h", "--help")), None, "Show usage information", false),
    row(Some(("-v", "--version")), None, "Show version", false),
    row(
        Some(("-c", "--completion")),
        Some(Placeholder::Optional("path")),
        "Generate bash completion script",
        false,
    ),
];

fn print_row(out: &mut impl WriteColor, row: &UsageRow) -> io::Result<()> {
    let mut plain_len = 2;
    paint(out, Color::Red, "bm")?;
    if let Some((short, long)) = row.flags {
        write!(out, " ")?;
        paint(out, Color::Green, short)?;
        write!(out, ",")?;
        paint(out, Color::Green, long)?;
        plain_len += 2 + short.len() + long.len();
    }
    if let Some(arg) = &row.arg {
        let (open, name, close) = match arg {
            Placeholder::Required(name) => ("<", *name, ">"),
            Placeholder::Optional(name) => ("[", *name, "]"),
        };
        write!(out, " {}", open)?;
        paint(out, Color::Yellow, name)?;
        write!(out, "{}", close)?;
        plain_len += 3 + name.len();
    }
    write!(out, "{:pad$}- ", "", pad = USAGE_WIDTH.saturating_sub(plain_len))?;
    paint(out, Color::Blue, row.action)?;
    if row.on_bookmark {
        write!(out, " '")?;
        paint(out, Color::Yellow, "bookmark")?;
        write!(out, "'")?;
    }
    writeln!(out)
}

pub fn print_usage(out: &mut impl WriteColor) -> io::Result<()> {
    write!(out, "Usage: ")?;
    paint(out, Color::Red, "bm")?;
    write!(out, " [")?;
    paint(out, Color::Green, "option")?;
    write!(out, "] <")?;
    paint(out, Color::Yellow, "bookmark")?;
    writeln!(out, ">")?;
    writeln!(out, " ")?;
    writeln!(out, "Quick access to saved directories")?;
    writeln!(out, " ")?;
    for r in COMMAND_ROWS {
        print_row(out, r)?;
    }
    writeln!(out, " ")?;
    for r in INFO_ROWS {
        print_row(out, r)?;
    }
    writeln!(out, " ")
}

/// `major.minor` only, the patch level is not shown.
pub fn short_version() -> String {
    format!(
        "{}.{}",
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR")
    )
}

pub fn print_version(out: &mut impl WriteColor) -> io::Result<()> {
    writeln!(out, "bm v{}", short_version())?;
    let authors = env!("CARGO_PKG_AUTHORS");
    for author in authors.split(':') {
        match author.split_once(" <") {
            Some((name, email)) => {
                writeln!(out, "by {}", name)?;
                writeln!(out, "{}", email.trim_end_matches('>'))?;
            }
            None => writeln!(out, "by {}", author)?,
        }
    }
    Ok(())
}

pub fn print_bookmarks(out: &mut impl WriteColor, bookmarks: &Bookmarks) -> io::Result<()> {
    write!(out, "     ")?;
    paint(out, Color::Green, "Saved bookmarks")?;
    writeln!(out, ":")?;
    writeln!(out, " ")?;
    for bookmark in bookmarks {
        paint(out, Color::Yellow, &format!("{:<width$}", bookmark.name, width = NAME_WIDTH))?;
        writeln!(out, " {}", bookmark.path.display())?;
    }
    Ok(())
}
