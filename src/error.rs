use derive_more::Display;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display)]
pub enum Error {
	// -- Config
	#[display("Invalid user code tags (begin: '{begin}', end: '{end}'): {reason}")]
	InvalidTags {
		begin: String,
		end: String,
		reason: &'static str,
	},

	#[display("Invalid fuzzy threshold {_0}, must be within [0, 1]")]
	InvalidThreshold(f64),

	// -- Strategies
	#[display("Cannot load overdone code strategies: {_0}")]
	StrategyLoad(String),
}

// region:    --- Constructors

impl Error {
	pub fn invalid_tags(begin: impl Into<String>, end: impl Into<String>, reason: &'static str) -> Self {
		Self::InvalidTags {
			begin: begin.into(),
			end: end.into(),
			reason,
		}
	}

	pub fn strategy_load(cause: impl std::fmt::Display) -> Self {
		Self::StrategyLoad(cause.to_string())
	}
}

// endregion: --- Constructors

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
