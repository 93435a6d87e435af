//! Tree rendering of a finished project.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

/// Render `root` as a tree: directories before files, each group sorted by
/// name, files annotated with their size.
pub fn render_tree(root: &Path) -> io::Result<String> {
    fs::metadata(root)?;
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());

    let mut out = format!("📂 {}/\n", name);
    render_children(root, "", &mut out)?;
    Ok(out)
}

fn render_children(dir: &Path, prefix: &str, out: &mut String) -> io::Result<()> {
    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by(dirs_first)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    let last = entries.len().saturating_sub(1);
    for (i, entry) in entries.iter().enumerate() {
        let (branch, indent) = if i == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        let name = entry.file_name().to_string_lossy();

        if entry.file_type().is_dir() {
            out.push_str(&format!("{}{}📂 {}\n", prefix, branch, name));
            render_children(entry.path(), &format!("{}{}", prefix, indent), out)?;
        } else {
            let size = entry.metadata()?.len();
            out.push_str(&format!(
                "{}{}{} {} ({})\n",
                prefix,
                branch,
                file_icon(entry.path()),
                name,
                decimal_size(size)
            ));
        }
    }
    Ok(())
}

fn dirs_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.file_type()
        .is_dir()
        .cmp(&a.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn file_icon(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("py") => "🐍",
        Some("rs") => "🦀",
        _ => "📄",
    }
}

/// Format a byte count with decimal (base 1000) units.
pub fn decimal_size(size: u64) -> String {
    match size {
        1 => return "1 byte".to_string(),
        0..=999 => return format!("{} bytes", size),
        _ => {}
    }

    let mut unit = 1000f64;
    let mut suffix = "kB";
    for s in ["kB", "MB", "GB", "TB", "PB", "EB"] {
        suffix = s;
        if (size as f64) < unit * 1000.0 {
            break;
        }
        unit *= 1000.0;
    }
    format!("{} {}", group_thousands(&format!("{:.1}", size as f64 / unit)), suffix)
}

/// Insert `,` separators into the integer part of a formatted number.
fn group_thousands(number: &str) -> String {
    let (int, frac) = number.split_once('.').unwrap_or((number, ""));
    let mut grouped = String::new();
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if !frac.is_empty() {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
