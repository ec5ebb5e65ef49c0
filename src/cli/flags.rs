use passgen::Separator;

use crate::settings::Kind;

/// Toggles that can also switch a saved setting back on are `Option`s:
/// `None` leaves the saved value alone.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub no_copy: Option<bool>,
    pub save: bool,
    pub reset: bool,
    /// Set by a leading `-` or `_` argument.
    pub quick: Option<Separator>,
    pub kind: Option<Kind>,
    pub length: Option<usize>,
    pub count: Option<usize>,
    pub no_upper: Option<bool>,
    pub no_lower: Option<bool>,
    pub no_digits: Option<bool>,
    pub no_symbols: Option<bool>,
    pub exclude: Option<String>,
    pub segments: Option<usize>,
    pub seg_length: Option<usize>,
    pub separator: Option<Separator>,
    pub words: Option<usize>,
    pub capitalize: Option<bool>,
    pub add_number: Option<bool>,
    pub include: Vec<String>,
}

impl CliFlags {
    /// Flags that select or shape what gets generated.
    pub fn has_generation_args(&self) -> bool {
        self.kind.is_some()
            || self.length.is_some()
            || self.count.is_some()
            || self.no_upper.is_some()
            || self.no_lower.is_some()
            || self.no_digits.is_some()
            || self.no_symbols.is_some()
            || self.exclude.is_some()
            || self.segments.is_some()
            || self.seg_length.is_some()
            || self.separator.is_some()
            || self.words.is_some()
            || self.capitalize.is_some()
            || self.add_number.is_some()
            || !self.include.is_empty()
    }
}
