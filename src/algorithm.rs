//! Named selection of one of the sort algorithms.

use crate::error::Result;
use crate::{cocktail_sort, gnome_sort, quick_sort, selection_sort};
use std::fmt;
use std::str::FromStr;

/// The comparison sorts provided by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Selection,
    Gnome,
    Cocktail,
    Quick,
}

impl Algorithm {
    /// Every algorithm, in the order they are usually reported.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Selection,
        Algorithm::Gnome,
        Algorithm::Cocktail,
        Algorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Selection => "selection",
            Algorithm::Gnome => "gnome",
            Algorithm::Cocktail => "cocktail",
            Algorithm::Quick => "quick",
        }
    }

    /// Sort `input` with this algorithm.
    pub fn sort(self, input: Option<&[i32]>) -> Result<Vec<i32>> {
        match self {
            Algorithm::Selection => selection_sort::sort_selection(input),
            Algorithm::Gnome => gnome_sort::sort_gnome(input),
            Algorithm::Cocktail => cocktail_sort::sort_cocktail(input),
            Algorithm::Quick => quick_sort::sort_quick(input),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown algorithm '{}', expected one of: selection, gnome, cocktail, quick",
                    s
                )
            })
    }
}
