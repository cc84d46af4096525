use crate::tag_scanner::{find_next_tag, tag_line_label};
use crate::{LostCode, TextRange};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tracing::{debug, warn};

/// A named user code region. `range` covers the payload strictly between the begin tag line
/// and the end tag line (it starts with the newline closing the begin tag line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedRegion {
	pub name: String,
	pub range: TextRange,
}

/// Scans `buffer` once, pairing each begin tag line with the next end tag line.
///
/// Regions are returned in buffer order. A begin tag with no end tag after it stops the scan
/// (trailing content is treated as untagged).
pub fn scan_regions(buffer: &str, begin_tag: &str, end_tag: &str) -> Vec<TaggedRegion> {
	let mut regions = Vec::new();
	if begin_tag.is_empty() || end_tag.is_empty() {
		return regions;
	}

	let mut cursor = 0;
	while let Some(begin_line) = find_next_tag(buffer, begin_tag, cursor) {
		let Some(end_line) = find_next_tag(buffer, end_tag, begin_line.end) else {
			break;
		};
		if end_line.begin < begin_line.end {
			break;
		}

		regions.push(TaggedRegion {
			name: tag_line_label(buffer, begin_line, begin_tag).to_string(),
			range: TextRange::new(begin_line.end, end_line.begin),
		});

		cursor = end_line.end;
	}

	regions
}

// region:    --- OldTagIndex

/// Name keyed index of the previously generated buffer.
///
/// Only the first region of a given name is indexed. Later ones go to the lost code
/// record as duplicates.
#[derive(Debug, Clone, Default)]
pub struct OldTagIndex {
	regions: BTreeMap<String, TextRange>,
}

impl OldTagIndex {
	pub fn build(buffer: &str, begin_tag: &str, end_tag: &str, lost: &mut LostCode) -> Self {
		let mut regions = BTreeMap::new();

		for region in scan_regions(buffer, begin_tag, end_tag) {
			match regions.entry(region.name) {
				Entry::Vacant(entry) => {
					entry.insert(region.range);
				}
				Entry::Occupied(entry) => {
					warn!(name = entry.key().as_str(), "duplicate user code tag");
					lost.push_duplicate(entry.key(), region.range.slice(buffer));
				}
			}
		}

		debug!(regions = regions.len(), "old buffer indexed");
		Self { regions }
	}

	/// Marks `name` as consumed.
	pub fn take(&mut self, name: &str) -> Option<TextRange> {
		self.regions.remove(name)
	}

	/// Consumes the index, yielding the remaining regions in buffer order.
	pub fn into_leftovers(self) -> Vec<TaggedRegion> {
		let mut leftovers: Vec<TaggedRegion> = self
			.regions
			.into_iter()
			.map(|(name, range)| TaggedRegion { name, range })
			.collect();
		leftovers.sort_by_key(|r| r.range);
		leftovers
	}
}

// endregion: --- OldTagIndex

// region:    --- NewTagIndex

/// Regions of the freshly generated buffer, ordered by descending start offset.
///
/// Walking it front to back visits regions right to left, so replacing one region's
/// content never moves a region that is still to be visited.
#[derive(Debug, Clone, Default)]
pub struct NewTagIndex {
	regions: Vec<TaggedRegion>,
}

impl NewTagIndex {
	pub fn build(buffer: &str, begin_tag: &str, end_tag: &str) -> Self {
		let mut regions = scan_regions(buffer, begin_tag, end_tag);
		regions.sort_by(|a, b| b.range.cmp(&a.range));

		debug!(regions = regions.len(), "new buffer indexed");
		Self { regions }
	}

	pub fn iter(&self) -> std::slice::Iter<'_, TaggedRegion> {
		self.regions.iter()
	}

}

impl<'a> IntoIterator for &'a NewTagIndex {
	type Item = &'a TaggedRegion;
	type IntoIter = std::slice::Iter<'a, TaggedRegion>;

	fn into_iter(self) -> Self::IntoIter {
		self.regions.iter()
	}
}

// endregion: --- NewTagIndex

// region:    --- Tests


// endregion: --- Tests
