use simple_fs::SPath;

/// Logical identity of the file being regenerated.
///
/// The merge only uses it to pick an overdone code strategy (by extension) and to skip that
/// hook for files that do not exist yet.
#[derive(Debug, Clone)]
pub struct MergeTarget {
	path: SPath,
	exists: bool,
}

impl MergeTarget {
	/// Checks the file system for existence.
	pub fn new(path: impl Into<SPath>) -> Self {
		let path = path.into();
		let exists = path.exists();
		Self { path, exists }
	}

	/// For in-memory callers that already know whether a previous generation exists.
	pub fn new_with_exists(path: impl Into<SPath>, exists: bool) -> Self {
		Self {
			path: path.into(),
			exists,
		}
	}

	pub fn path(&self) -> &SPath {
		&self.path
	}

	pub fn exists(&self) -> bool {
		self.exists
	}

	/// Strategy lookup key, the file extension without the dot (empty when none).
	pub fn discriminator(&self) -> &str {
		self.path.extension().unwrap_or_default()
	}
}

// region:    --- Tests


// endregion: --- Tests
