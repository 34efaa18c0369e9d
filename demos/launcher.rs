//! Launcher Example - browse launchable files
//!
//! This example demonstrates:
//! - Side-by-side layout with `hstack` and percentage widths
//! - Select actions that update shared state as focus moves
//! - Dynamic text inside a centred border
//!
//! Entries are collected from the directory given as the first argument,
//! `TAD_LAUNCHER_DIR`, or the current directory. Unreadable entries are
//! skipped without complaint.
//!
//! Run with: cargo run --example launcher -- /usr/share/applications

use std::cell::Cell;
use std::env;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tad::{border, button, hstack, text, vstack, App, Bounds, Color, Navigator, Text, Width};
use walkdir::WalkDir;

/// How deep below the root the walk descends.
const MAX_DEPTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Shortcut,
    Executable,
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    path: PathBuf,
    kind: Kind,
}

fn kind_of(path: &Path) -> Option<Kind> {
    let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("lnk" | "desktop") => return Some(Kind::Shortcut),
        Some("exe") => return Some(Kind::Executable),
        _ => {}
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let meta = path.metadata().ok()?;
        if meta.is_file() && meta.permissions().mode() & 0o111 != 0 {
            return Some(Kind::Executable);
        }
    }
    None
}

/// Launchable files under `root`, best effort.
fn list_entries(root: &Path) -> Vec<Entry> {
    let mut entries: Vec<Entry> = WalkDir::new(root)
        .max_depth(MAX_DEPTH)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let kind = kind_of(e.path())?;
            let name = e.path().file_stem()?.to_string_lossy().into_owned();
            Some(Entry {
                name,
                path: e.into_path(),
                kind,
            })
        })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

fn main() -> tad::Result<()> {
    let root = env::args_os()
        .nth(1)
        .or_else(|| env::var_os("TAD_LAUNCHER_DIR"))
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    let entries = Rc::new(list_entries(&root));
    let selection = Rc::new(Cell::new(0usize));

    let mut nav = Navigator::new();
    let mut list = vstack().width(Width::Percent(50)).center();
    if entries.is_empty() {
        list = list.add(text(format!("nothing launchable in {}", root.display())).color(Color::Gray));
    }
    let buttons = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let selection = selection.clone();
            button(entry.name.as_str())
                .at((index as i32, 0))
                .on_select(&mut nav, move |_| selection.set(index))
        })
        .collect::<tad::Result<Vec<_>>>()?;
    list = list.extend(buttons);

    let details = {
        let entries = entries.clone();
        let selection = selection.clone();
        Text::dynamic(move || match entries.get(selection.get()) {
            Some(entry) => vec![
                entry.path.display().to_string(),
                format!("{:?}", entry.kind).to_lowercase(),
            ],
            None => vec![String::new()],
        })
    };

    let footer = vstack().bg(Color::Blue).center().add(text(format!("{} entries  ·  Ctrl+C quits", entries.len())));

    let ui = vstack()
        .add(hstack().add(list).add(border().center().width(Width::Percent(50)).child(details)))
        .add(footer);

    let last_row = (entries.len() as i32 - 1).max(0);
    App::new(nav)
        .title("App launcher")
        .bound(Bounds::new(0..=last_row, 0..=0))
        .root(ui)
        .run()
}
