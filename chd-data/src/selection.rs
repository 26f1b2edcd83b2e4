//! Cross-view selection state.
//!
//! A county is highlighted iff it is in the union of the clicked and brushed
//! sets, unless that union is empty, in which case every county is
//! highlighted. Map paths, scatter points and histogram bars all derive
//! their styling from [`Selection::emphasis`].

use chd_core::Fips;
use std::collections::BTreeSet;

/// How a mark should be drawn for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Nothing is selected; every mark is drawn normally.
    Normal,
    /// The mark is part of the selection and is raised to the front.
    Selected,
    /// Something else is selected; the mark is dimmed.
    Faded,
}

impl Emphasis {
    /// Opacity used for this emphasis on map paths and points.
    pub fn opacity(self) -> f64 {
        match self {
            Emphasis::Normal | Emphasis::Selected => 1.0,
            Emphasis::Faded => 0.25,
        }
    }

    pub fn is_raised(self) -> bool {
        self == Emphasis::Selected
    }
}

/// The clicked and brushed county sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    clicked: BTreeSet<Fips>,
    brushed: BTreeSet<Fips>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clicked(&self) -> &BTreeSet<Fips> {
        &self.clicked
    }

    pub fn brushed(&self) -> &BTreeSet<Fips> {
        &self.brushed
    }

    /// Add `fips` to the clicked set, or remove it if already there.
    /// Returns whether it is clicked afterwards.
    pub fn toggle_clicked(&mut self, fips: &Fips) -> bool {
        if self.clicked.remove(fips) {
            false
        } else {
            self.clicked.insert(fips.clone());
            true
        }
    }

    /// Replace the brushed set.
    pub fn set_brushed<I: IntoIterator<Item = Fips>>(&mut self, ids: I) {
        self.brushed = ids.into_iter().collect();
    }

    pub fn clear_brushed(&mut self) {
        self.brushed.clear();
    }

    /// Whether a histogram bin is toggled on: it has members and all of
    /// them are clicked.
    pub fn bin_selected(&self, members: &[Fips]) -> bool {
        !members.is_empty() && members.iter().all(|f| self.clicked.contains(f))
    }

    /// Toggle a histogram bin: unselect all members if the bin is selected,
    /// otherwise click them all. Returns whether the bin is selected afterwards.
    pub fn toggle_bin(&mut self, members: &[Fips]) -> bool {
        if self.bin_selected(members) {
            for f in members {
                self.clicked.remove(f);
            }
            false
        } else {
            self.clicked.extend(members.iter().cloned());
            !members.is_empty()
        }
    }

    /// Empty both sets.
    pub fn clear(&mut self) {
        self.clicked.clear();
        self.brushed.clear();
    }

    /// Union of the clicked and brushed sets.
    pub fn union(&self) -> BTreeSet<Fips> {
        self.clicked.union(&self.brushed).cloned().collect()
    }

    /// Size of the union.
    pub fn len(&self) -> usize {
        self.clicked.len() + self.brushed.difference(&self.clicked).count()
    }

    pub fn is_empty(&self) -> bool {
        self.clicked.is_empty() && self.brushed.is_empty()
    }

    /// Whether `fips` is in the union.
    pub fn is_selected(&self, fips: &Fips) -> bool {
        self.clicked.contains(fips) || self.brushed.contains(fips)
    }

    /// Whether `fips` should be drawn at full strength.
    pub fn is_highlighted(&self, fips: &Fips) -> bool {
        self.is_empty() || self.is_selected(fips)
    }

    pub fn emphasis(&self, fips: &Fips) -> Emphasis {
        if self.is_empty() {
            Emphasis::Normal
        } else if self.is_selected(fips) {
            Emphasis::Selected
        } else {
            Emphasis::Faded
        }
    }
}

/// Reorder `items` so raised (selected) marks come last and paint on top.
pub fn raise_selected<T, F>(items: &mut [T], selection: &Selection, fips_of: F)
where
    F: Fn(&T) -> &Fips,
{
    items.sort_by_key(|item| selection.is_selected(fips_of(item)));
}
