use crate::product::{CategoryId, LocationId};

/// Hierarchical facet selection: one top-level id plus optional sub-selection.
///
/// Sub-selections come in two forms kept side by side: the legacy single
/// `sub` and the newer `multi` set. When both are present the multi set wins
/// for request purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeSelection {
    pub top: u64,
    pub sub: Option<u64>,
    pub multi: Vec<u64>,
}

impl TreeSelection {
    pub fn top_only(top: u64) -> Self {
        Self {
            top,
            sub: None,
            multi: Vec::new(),
        }
    }

    /// The id string emitted on the wire: multi set (deduplicated, ascending,
    /// comma-joined) over single sub over the top-level id.
    pub fn param_value(&self) -> String {
        if !self.multi.is_empty() {
            let mut ids = self.multi.clone();
            ids.sort_unstable();
            ids.dedup();
            return ids
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(",");
        }
        match self.sub {
            Some(sub) => sub.to_string(),
            None => self.top.to_string(),
        }
    }
}

/// The filter facets a user can layer on top of a search or vendor session.
///
/// Price bounds are not validated against each other client-side; the server
/// decides what an inverted range means.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSet {
    pub price_from: Option<u32>,
    pub price_to: Option<u32>,
    pub on_sale: bool,
    pub restricted: bool,
    pub category: Option<TreeSelection>,
    pub location: Option<TreeSelection>,
}

impl FilterSet {
    /// Selects a top-level category. Switching to a different top-level id
    /// drops any sub-selection made under the previous one.
    pub fn select_category(&mut self, top: CategoryId) {
        select_top(&mut self.category, top);
    }

    /// Selects a single sub-category under the current top-level category.
    /// Ignored when no top-level category is selected.
    pub fn select_sub_category(&mut self, sub: CategoryId) {
        if let Some(selection) = self.category.as_mut() {
            selection.sub = Some(sub);
        }
    }

    /// Replaces the multi-select sub-category set under the current top-level
    /// category. Ignored when no top-level category is selected.
    pub fn set_sub_categories(&mut self, subs: Vec<CategoryId>) {
        if let Some(selection) = self.category.as_mut() {
            selection.multi = subs;
        }
    }

    pub fn clear_category(&mut self) {
        self.category = None;
    }

    /// Selects a top-level location. Switching to a different top-level id
    /// drops any sub-selection made under the previous one.
    pub fn select_location(&mut self, top: LocationId) {
        select_top(&mut self.location, top);
    }

    /// Selects a single sub-location under the current top-level location.
    /// Ignored when no top-level location is selected.
    pub fn select_sub_location(&mut self, sub: LocationId) {
        if let Some(selection) = self.location.as_mut() {
            selection.sub = Some(sub);
        }
    }

    /// Replaces the multi-select sub-location set under the current top-level
    /// location. Ignored when no top-level location is selected.
    pub fn set_sub_locations(&mut self, subs: Vec<LocationId>) {
        if let Some(selection) = self.location.as_mut() {
            selection.multi = subs;
        }
    }

    pub fn clear_location(&mut self) {
        self.location = None;
    }

    /// Number of active facets, for the filter badge in the UI.
    pub fn active_count(&self) -> usize {
        usize::from(self.price_from.is_some())
            + usize::from(self.price_to.is_some())
            + usize::from(self.on_sale)
            + usize::from(self.restricted)
            + usize::from(self.category.is_some())
            + usize::from(self.location.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

fn select_top(slot: &mut Option<TreeSelection>, top: u64) {
    match slot {
        // Re-selecting the current top keeps its sub-selection.
        Some(selection) if selection.top == top => {}
        _ => *slot = Some(TreeSelection::top_only(top)),
    }
}
