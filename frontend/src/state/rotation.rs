/// Index cycler over an ordered collection. The index is `None` exactly when
/// the collection is empty and otherwise always points at an item.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotation<T> {
    items: Vec<T>,
    index: Option<usize>,
}

impl<T> Default for Rotation<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: None,
        }
    }
}

impl<T> Rotation<T> {
    pub fn new(items: Vec<T>) -> Self {
        let index = (!items.is_empty()).then_some(0);
        Self { items, index }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current_index(&self) -> Option<usize> {
        self.index
    }

    pub fn current(&self) -> Option<&T> {
        self.index.and_then(|i| self.items.get(i))
    }

    /// A single item never moves, so no timer is worth running.
    pub fn needs_timer(&self) -> bool {
        self.items.len() > 1
    }

    pub fn advance(&mut self) {
        if let Some(i) = self.index {
            self.index = Some((i + 1) % self.items.len());
        }
    }

    pub fn retreat(&mut self) {
        if let Some(i) = self.index {
            let len = self.items.len();
            self.index = Some((i + len - 1) % len);
        }
    }

    /// Out-of-range requests are ignored. Returns whether the index moved.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.items.len() || self.index == Some(index) {
            return false;
        }
        self.index = Some(index);
        true
    }

    /// Swaps the collection, keeping the index when it is still valid and
    /// resetting to the first item (or `None`) otherwise.
    pub fn update_items(&mut self, items: Vec<T>) {
        self.index = match self.index {
            _ if items.is_empty() => None,
            Some(i) if i < items.len() => Some(i),
            _ => Some(0),
        };
        self.items = items;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Rotation<&'static str> {
        Rotation::new(vec!["A", "B", "C"])
    }

    #[test]
    fn three_advances_return_to_start() {
        let mut rotation = abc();
        let seen: Vec<_> = (0..3)
            .map(|_| {
                rotation.advance();
                rotation.current().copied()
            })
            .collect();
        assert_eq!(seen, vec![Some("B"), Some("C"), Some("A")]);
        assert_eq!(rotation.current_index(), Some(0));
    }

    #[test]
    fn retreat_wraps_to_last() {
        let mut rotation = abc();
        rotation.retreat();
        assert_eq!(rotation.current(), Some(&"C"));
    }

    #[test]
    fn advance_and_retreat_cancel_out() {
        for len in 2..6 {
            let mut rotation = Rotation::new((0..len).collect::<Vec<_>>());
            for start in 0..len {
                rotation.jump_to(start);
                rotation.advance();
                rotation.retreat();
                assert_eq!(rotation.current_index(), Some(start));
                rotation.retreat();
                rotation.advance();
                assert_eq!(rotation.current_index(), Some(start));
            }
        }
    }

    #[test]
    fn empty_rotation_never_yields_an_index() {
        let mut rotation: Rotation<u8> = Rotation::new(Vec::new());
        rotation.advance();
        rotation.retreat();
        assert!(!rotation.jump_to(0));
        assert_eq!(rotation.current_index(), None);
        assert!(rotation.current().is_none());
        assert!(!rotation.needs_timer());
    }

    #[test]
    fn single_item_stays_put() {
        let mut rotation = Rotation::new(vec!["only"]);
        rotation.advance();
        rotation.retreat();
        assert_eq!(rotation.current_index(), Some(0));
        assert!(!rotation.needs_timer());
    }

    #[test]
    fn jump_to_out_of_range_is_ignored() {
        let mut rotation = abc();
        rotation.advance();
        assert!(!rotation.jump_to(5));
        assert_eq!(rotation.current_index(), Some(1));
        assert!(rotation.jump_to(2));
        assert_eq!(rotation.current(), Some(&"C"));
    }

    #[test]
    fn update_items_resets_when_index_falls_off() {
        let mut rotation = abc();
        rotation.jump_to(2);
        rotation.update_items(vec!["X", "Y"]);
        assert_eq!(rotation.current_index(), Some(0));

        rotation.jump_to(1);
        rotation.update_items(vec!["P", "Q", "R"]);
        assert_eq!(rotation.current(), Some(&"Q"));

        rotation.jump_to(2);
        rotation.update_items(Vec::new());
        assert_eq!(rotation.current_index(), None);

        rotation.update_items(vec!["Z"]);
        assert_eq!(rotation.current_index(), Some(0));
    }

    #[test]
    fn index_stays_in_bounds_over_mixed_operations() {
        let mut rotation = Rotation::new(vec![1u32, 2, 3, 4]);
        let mut seed: u32 = 7;
        for step in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            match seed % 5 {
                0 => rotation.advance(),
                1 => rotation.retreat(),
                2 => {
                    rotation.jump_to((seed % 7) as usize);
                }
                3 => rotation.update_items((0..(seed % 6)).collect()),
                _ => rotation.update_items(vec![step; 3]),
            }
            match rotation.current_index() {
                Some(i) => assert!(i < rotation.len()),
                None => assert!(rotation.is_empty()),
            }
        }
    }
}
