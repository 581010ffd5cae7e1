//! Order-preserving removal of repeated colors.

use crate::color::Rgb;
use std::collections::HashSet;
use tracing::debug;

/// Returns each distinct color once, in order of first occurrence.
///
/// Colors are equal only when all three channels match exactly.
pub fn deduplicate(colors: &[Rgb]) -> Vec<Rgb> {
    let mut seen = HashSet::with_capacity(colors.len());
    let unique: Vec<Rgb> = colors
        .iter()
        .copied()
        .filter(|color| seen.insert(*color))
        .collect();

    if unique.len() != colors.len() {
        debug!(
            "Removed {} duplicate colors ({} remain)",
            colors.len() - unique.len(),
            unique.len()
        );
    }
    unique
}
