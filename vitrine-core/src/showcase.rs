//! Showcase page state: carousel position, quantity, and the loading gate

use crate::Catalog;

/// UI state owned by the showcase page.
///
/// Navigation is gated while an asset load is in flight, which prevents
/// index changes from firing while a prior render session's teardown and
/// construction are mid-flight. Quantity adjustment is deliberately ungated;
/// it is irrelevant to asset loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseState {
    active_index: usize,
    quantity: u32,
    is_loading: bool,
}

impl ShowcaseState {
    /// State as of mount: first product selected, its asset loading.
    pub fn new() -> Self {
        Self {
            active_index: 0,
            quantity: 1,
            is_loading: true,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Advance to the next product. Clamped at the end of the catalog, no
    /// wraparound. Returns true when the selection actually moved.
    pub fn next(&mut self, catalog: &Catalog) -> bool {
        self.select(self.active_index + 1, catalog)
    }

    /// Step back to the previous product. Clamped at index 0.
    pub fn prev(&mut self, catalog: &Catalog) -> bool {
        self.select(self.active_index.saturating_sub(1), catalog)
    }

    /// Jump directly to a catalog index (dot indicator). Ignored while a
    /// load is in flight; the index is clamped to catalog bounds. A press
    /// that clamps back to the current index changes nothing and does not
    /// enter the loading state.
    pub fn select(&mut self, index: usize, catalog: &Catalog) -> bool {
        if self.is_loading {
            return false;
        }
        let index = catalog.clamp_index(index);
        if index == self.active_index {
            return false;
        }
        self.active_index = index;
        self.is_loading = true;
        true
    }

    /// Unbounded upward.
    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Floored at 1.
    pub fn decrement_quantity(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    /// Clear the loading flag. Fired by the viewer's loaded signal or by the
    /// overlay fallback timer, whichever comes first.
    pub fn clear_loading(&mut self) {
        self.is_loading = false;
    }

    /// Re-enter the loading state for the current index (retry after a
    /// failed load).
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
    }
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Product;
    use std::path::PathBuf;

    fn catalog(len: u32) -> Catalog {
        let products = (0..len)
            .map(|i| Product {
                id: i + 1,
                title: format!("Product {i}"),
                description: String::new(),
                price: "$1.00".to_string(),
                model_path: PathBuf::from(format!("{i}.gltf")),
            })
            .collect();
        Catalog::new(products).unwrap()
    }

    fn loaded_state() -> ShowcaseState {
        let mut state = ShowcaseState::new();
        state.clear_loading();
        state
    }

    #[test]
    fn starts_at_first_product_loading() {
        let state = ShowcaseState::new();
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.quantity(), 1);
        assert!(state.is_loading());
    }

    #[test]
    fn prev_at_zero_stays_at_zero() {
        let catalog = catalog(3);
        let mut state = loaded_state();
        assert!(!state.prev(&catalog));
        assert_eq!(state.active_index(), 0);
        assert!(!state.is_loading());
    }

    #[test]
    fn next_clamps_at_end() {
        let catalog = catalog(2);
        let mut state = loaded_state();
        assert!(state.next(&catalog));
        assert_eq!(state.active_index(), 1);

        state.clear_loading();
        assert!(!state.next(&catalog));
        assert_eq!(state.active_index(), 1);
        assert!(!state.is_loading());
    }

    #[test]
    fn navigation_is_ignored_while_loading() {
        let catalog = catalog(3);
        let mut state = ShowcaseState::new();
        assert!(state.is_loading());
        assert!(!state.next(&catalog));
        assert!(!state.prev(&catalog));
        assert!(!state.select(2, &catalog));
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn select_jumps_and_clamps() {
        let catalog = catalog(3);
        let mut state = loaded_state();
        assert!(state.select(2, &catalog));
        assert_eq!(state.active_index(), 2);
        assert!(state.is_loading());

        state.clear_loading();
        assert!(!state.select(99, &catalog));
        assert_eq!(state.active_index(), 2);
    }

    #[test]
    fn index_stays_in_bounds_for_any_sequence() {
        let catalog = catalog(3);
        let mut state = loaded_state();
        for step in 0..50 {
            if step % 3 == 0 {
                state.prev(&catalog);
            } else {
                state.next(&catalog);
            }
            state.clear_loading();
            assert!(state.active_index() < catalog.len());
        }
    }

    #[test]
    fn quantity_floors_at_one() {
        let mut state = ShowcaseState::new();
        state.decrement_quantity();
        assert_eq!(state.quantity(), 1);
        state.increment_quantity();
        state.increment_quantity();
        state.decrement_quantity();
        assert_eq!(state.quantity(), 2);
    }

    #[test]
    fn quantity_is_unbounded_upward_and_ungated() {
        let mut state = ShowcaseState::new();
        assert!(state.is_loading());
        for _ in 0..50 {
            state.increment_quantity();
        }
        assert_eq!(state.quantity(), 51);
    }
}
