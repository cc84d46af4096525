use crate::TextRange;

/// Finds the first occurrence of `tag` at or after `from` and expands it to its full line.
///
/// The returned range starts right after the previous `'\n'` (or at 0) and ends at the next
/// `'\n'` after the tag (or at the end of the buffer). The terminator itself is excluded.
///
/// Returns `None` when the tag does not occur (or `from` is past the end of the buffer).
pub fn find_next_tag(buffer: &str, tag: &str, from: usize) -> Option<TextRange> {
	let tail = buffer.get(from..)?;
	let tag_idx = from + tail.find(tag)?;
	let after_tag = tag_idx + tag.len();

	let end = buffer[after_tag..].find('\n').map(|i| after_tag + i).unwrap_or(buffer.len());
	let begin = buffer[..tag_idx].rfind('\n').map(|i| i + 1).unwrap_or(0);

	Some(TextRange::new(begin, end))
}

/// Returns the free text following `tag` on its line, trimmed.
///
/// `line` must be a range returned by `find_next_tag` for this same `tag`.
pub(crate) fn tag_line_label<'a>(buffer: &'a str, line: TextRange, tag: &str) -> &'a str {
	let line_text = line.slice(buffer);
	match line_text.find(tag) {
		Some(idx) => line_text[idx + tag.len()..].trim(),
		None => "",
	}
}

// region:    --- Tests


// endregion: --- Tests
