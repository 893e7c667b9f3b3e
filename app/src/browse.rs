//! Line-oriented browsing session: each input line becomes a gallery message.

use crate::render;
use gallery::{CategorySelection, Gallery, Message, ViewMode};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Update(Message),
    LikeCurrent,
    List,
    Status,
    Help,
    Quit,
}

pub fn help() -> String {
    format!(
        "commands: search <text>, category <key|all>, event <name>, clear-event, clear, \
view [{}], open <id>, next, prev, close, like [id], list, status, help, quit",
        ViewMode::choices()
    )
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<BrowseCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (cmd, arg) = match line.split_once(char::is_whitespace) {
        Some((c, rest)) => (c, rest.trim()),
        None => (line, ""),
    };
    let require = |what: &str| -> Result<String, String> {
        if arg.is_empty() {
            Err(format!("{} requires {}", cmd, what))
        } else {
            Ok(arg.to_string())
        }
    };
    let command = match cmd {
        "search" => BrowseCommand::Update(Message::SearchChanged(arg.to_string())),
        "category" => BrowseCommand::Update(Message::CategorySelected(CategorySelection::from(
            require("a category key")?.as_str(),
        ))),
        "event" => BrowseCommand::Update(Message::SelectEvent(require("an event name")?)),
        "clear-event" => BrowseCommand::Update(Message::ClearEventFilter),
        "clear" => BrowseCommand::Update(Message::ClearFilters),
        "view" if arg.is_empty() => BrowseCommand::Update(Message::ToggleViewMode),
        "view" => {
            let mode: ViewMode = arg
                .parse()
                .map_err(|e| format!("{}, expected one of {}", e, ViewMode::choices()))?;
            BrowseCommand::Update(Message::ViewModeChanged(mode))
        }
        "open" => BrowseCommand::Update(Message::OpenPhoto(require("a photo id")?)),
        "next" => BrowseCommand::Update(Message::NextPhoto),
        "prev" => BrowseCommand::Update(Message::PrevPhoto),
        "close" | "esc" => BrowseCommand::Update(Message::EscapePressed),
        "like" if arg.is_empty() => BrowseCommand::LikeCurrent,
        "like" => BrowseCommand::Update(Message::ToggleLike(arg.to_string())),
        "list" => BrowseCommand::List,
        "status" => BrowseCommand::Status,
        "help" => BrowseCommand::Help,
        "quit" | "exit" => BrowseCommand::Quit,
        other => return Err(format!("Unknown command: {}", other)),
    };
    Ok(Some(command))
}

fn print_visible<W: Write>(gallery: &Gallery<'_>, out: &mut W, limit: usize) -> std::io::Result<()> {
    let visible = gallery.visible();
    for photo in visible.iter().take(limit) {
        writeln!(out, "{}", render::photo_line(gallery, photo))?;
    }
    writeln!(out, "{}", render::found_line(visible.len()))
}

pub fn run<R: BufRead, W: Write>(
    gallery: &mut Gallery<'_>,
    input: R,
    out: &mut W,
    limit: usize,
) -> std::io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(c)) => c,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => writeln!(out, "{}", help())?,
            BrowseCommand::List => print_visible(gallery, out, limit)?,
            BrowseCommand::Status => {
                for l in render::status_lines(gallery) {
                    writeln!(out, "{}", l)?;
                }
            }
            BrowseCommand::LikeCurrent => match gallery.current_photo() {
                Some(photo) => {
                    gallery.update(Message::ToggleLike(photo.id.clone()));
                    writeln!(out, "{}", render::lightbox_line(gallery))?;
                }
                None => writeln!(out, "No photo open")?,
            },
            BrowseCommand::Update(message) => {
                let filter_change = matches!(
                    message,
                    Message::SearchChanged(_)
                        | Message::CategorySelected(_)
                        | Message::SelectEvent(_)
                        | Message::ClearEventFilter
                        | Message::ClearFilters
                );
                let liked_id = match &message {
                    Message::ToggleLike(id) => Some(id.clone()),
                    _ => None,
                };
                gallery.update(message);
                if filter_change {
                    writeln!(out, "{}", render::found_line(gallery.visible().len()))?;
                } else if let Some(id) = liked_id {
                    let state = if gallery.is_liked(&id) { "liked" } else { "unliked" };
                    writeln!(out, "{} {}", id, state)?;
                } else if gallery.lightbox().is_open() {
                    writeln!(out, "{}", render::lightbox_line(gallery))?;
                } else {
                    writeln!(out, "view: {}, lightbox: closed", gallery.view_mode())?;
                }
            }
        }
    }
    Ok(())
}
