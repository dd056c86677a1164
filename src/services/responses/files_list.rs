//! Directory Listing
//!
//! Renders a recursive file listing relative to a root directory. Entries are
//! sorted so each directory is immediately followed by its children, which
//! keeps a truncated listing readable from the top down.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

use prompt_modes_core::{IgnoreChecker, ProtectionChecker, LOCK_TEXT_SYMBOL, SHIELD_TEXT_SYMBOL};

use crate::utils::paths::{relative_posix, resolve_relative};

const TRUNCATED_SUFFIX: &str =
    "\n\n(File list truncated. Use list_files on specific subdirectories if you need to explore further.)";
const NO_FILES: &str = "No files found.";

/// Format `files` (absolute paths, directories ending in `/`) for the model.
///
/// With an ignore checker, ignored entries are dropped unless
/// `show_ignored` is set, in which case they are marked with a lock.
/// Write-protected entries are marked with a shield. Checkers are only
/// consulted when an ignore checker is supplied.
pub fn format_files_list(
    root: &Path,
    files: &[String],
    did_hit_limit: bool,
    ignore: Option<&dyn IgnoreChecker>,
    show_ignored: bool,
    protection: Option<&dyn ProtectionChecker>,
) -> String {
    let mut sorted: Vec<String> = files
        .iter()
        .map(|file| {
            let relative = relative_posix(root, Path::new(file));
            if file.ends_with('/') || file.ends_with('\\') {
                format!("{}/", relative)
            } else {
                relative
            }
        })
        .collect();
    sorted.sort_by(|a, b| compare_listing_paths(a, b));

    let lines: Vec<String> = match ignore {
        Some(ignore) => sorted
            .into_iter()
            .filter_map(|entry| {
                let absolute = resolve_relative(root, &entry);
                if !ignore.validate_access(&absolute) {
                    return show_ignored.then(|| format!("{} {}", LOCK_TEXT_SYMBOL, entry));
                }
                let protected = protection
                    .map(|p| p.is_write_protected(&absolute))
                    .unwrap_or(false);
                if protected {
                    Some(format!("{} {}", SHIELD_TEXT_SYMBOL, entry))
                } else {
                    Some(entry)
                }
            })
            .collect(),
        None => sorted,
    };

    if did_hit_limit {
        format!("{}{}", lines.join("\n"), TRUNCATED_SUFFIX)
    } else if lines.is_empty() || (lines.len() == 1 && lines[0].is_empty()) {
        NO_FILES.to_string()
    } else {
        lines.join("\n")
    }
}

/// Listing order: segment by segment, a path ending at the first differing
/// segment sorts before one that continues; otherwise segments compare
/// naturally. A path that is a prefix of the other sorts first.
pub(crate) fn compare_listing_paths(a: &str, b: &str) -> Ordering {
    let a_parts: Vec<&str> = a.split('/').collect();
    let b_parts: Vec<&str> = b.split('/').collect();

    for (i, (a_part, b_part)) in a_parts.iter().zip(b_parts.iter()).enumerate() {
        if a_part == b_part {
            continue;
        }
        if i + 1 == a_parts.len() && i + 1 < b_parts.len() {
            return Ordering::Less;
        }
        if i + 1 == b_parts.len() && i + 1 < a_parts.len() {
            return Ordering::Greater;
        }
        return natural_cmp(a_part, b_part);
    }

    a_parts.len().cmp(&b_parts.len())
}

/// Character classes in collation order: punctuation and symbols first,
/// then digit runs, then letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Other,
    Digit,
    Letter,
}

fn char_class(ch: char) -> CharClass {
    if ch.is_ascii_digit() {
        CharClass::Digit
    } else if ch.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Other
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(ch) = chars.next_if(char::is_ascii_digit) {
        run.push(ch);
    }
    run
}

fn compare_digits(a: &str, b: &str) -> Ordering {
    let a_trim = a.trim_start_matches('0');
    let b_trim = b.trim_start_matches('0');
    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
}

/// Numeric-aware, case-insensitive comparison with a byte-order tiebreak.
///
/// Walks both names a character at a time. Digit runs compare by value,
/// letters compare without case, and a name that runs out first sorts first.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a_chars = a.chars().peekable();
    let mut b_chars = b.chars().peekable();

    loop {
        let (a_ch, b_ch) = match (a_chars.peek().copied(), b_chars.peek().copied()) {
            (None, None) => break,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => (x, y),
        };

        let (a_class, b_class) = (char_class(a_ch), char_class(b_ch));
        if a_class != b_class {
            return a_class.cmp(&b_class);
        }

        let ord = if a_class == CharClass::Digit {
            compare_digits(&take_digits(&mut a_chars), &take_digits(&mut b_chars))
        } else {
            a_chars.next();
            b_chars.next();
            a_ch.to_lowercase().cmp(b_ch.to_lowercase())
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    a.cmp(b)
}
