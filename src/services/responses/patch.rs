//! Pretty Patch
//!
//! Unified diff of two file versions reduced to hunk content, for showing a
//! proposed edit to the user.

use similar::{ChangeTag, TextDiff};
use tracing::trace;

use crate::utils::paths::to_posix;

const CONTEXT_LINES: usize = 4;

/// Hunk start as printed in a header: 1-based, or the 0-based position
/// before the hunk when the range is empty.
fn header_start(start: usize, count: usize) -> usize {
    if count == 0 {
        start
    } else {
        start + 1
    }
}

/// Render the diff between `old` and `new` without the file header lines.
///
/// Missing content is treated as empty. Returns an empty string when the
/// two versions are identical.
pub fn create_pretty_patch(filename: &str, old: Option<&str>, new: Option<&str>) -> String {
    let old = old.unwrap_or_default();
    let new = new.unwrap_or_default();
    let diff = TextDiff::from_lines(old, new);

    let mut output = String::new();

    for group in diff.grouped_ops(CONTEXT_LINES) {
        let (old_start, old_count, new_start, new_count) = group.iter().fold(
            (usize::MAX, 0usize, usize::MAX, 0usize),
            |(os, oc, ns, nc), op| {
                let old_range = op.old_range();
                let new_range = op.new_range();
                (
                    os.min(old_range.start),
                    oc + old_range.len(),
                    ns.min(new_range.start),
                    nc + new_range.len(),
                )
            },
        );

        output.push_str(&format!(
            "@@ -{},{} +{},{} @@\n",
            header_start(old_start, old_count),
            old_count,
            header_start(new_start, new_count),
            new_count
        ));

        for op in &group {
            for change in diff.iter_changes(op) {
                let prefix = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };

                output.push_str(prefix);
                output.push_str(change.value());
                if change.missing_newline() {
                    output.push_str("\n\\ No newline at end of file\n");
                }
            }
        }
    }

    trace!(file = %to_posix(filename), bytes = output.len(), "rendered patch");
    output
}
