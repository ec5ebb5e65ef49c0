//! Batch generation shared by flag mode and the interactive session.

use passgen::{Exclusion, Generator, Result, Separator};
use zeroize::Zeroizing;

use crate::settings::{Kind, Settings};

/// Generate `settings.count` secrets of `settings.kind`, in order.
/// The first failure aborts the batch.
pub fn generate_batch(settings: &Settings) -> Result<Vec<Zeroizing<String>>> {
    tracing::debug!(kind = %settings.kind, count = settings.count, "generating");

    let mut generator = Generator::new();
    match settings.kind {
        Kind::Random => {
            let cfg = settings.random_config();
            repeat(settings.count, || generator.random(&cfg))
        }
        Kind::Segment => {
            let cfg = settings.segment_config();
            repeat(settings.count, || generator.segmented(&cfg))
        }
        Kind::Passphrase => {
            let cfg = settings.passphrase_config();
            repeat(settings.count, || generator.passphrase(&cfg))
        }
    }
}

fn repeat(
    count: usize,
    mut draw: impl FnMut() -> Result<String>,
) -> Result<Vec<Zeroizing<String>>> {
    (0..count).map(|_| draw().map(Zeroizing::new)).collect()
}

/// First numeric setting below 1 for the selected kind, as a flag name.
pub fn invalid_setting(settings: &Settings) -> Option<&'static str> {
    let mut checks = vec![("count", settings.count)];
    match settings.kind {
        Kind::Random => checks.push(("length", settings.length)),
        Kind::Segment => {
            checks.push(("segments", settings.segments));
            checks.push(("seg-length", settings.seg_length));
        }
        Kind::Passphrase => checks.push(("words", settings.words)),
    }
    checks
        .into_iter()
        .find(|&(_, value)| value < 1)
        .map(|(name, _)| name)
}

/// The separator, when the selected kind joins with one and the exclusions
/// forbid it. Separators are never filtered, so such a request cannot be met.
pub fn excluded_separator(settings: &Settings) -> Option<Separator> {
    match settings.kind {
        Kind::Random => None,
        Kind::Segment | Kind::Passphrase => {
            let exclude = Exclusion::new(&settings.exclude);
            (!exclude.allows(settings.separator.as_str())).then_some(settings.separator)
        }
    }
}
