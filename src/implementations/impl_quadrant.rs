//! Methods for quadrant containers.
use crate::types::quadrant::Quadrant;

impl<T, const DIM: usize> Quadrant<T, DIM> {
    /// Slot index of a boolean coordinate key. A key of the wrong length is a
    /// precondition violation and aborts.
    fn slot(indexes: &[bool]) -> usize {
        assert_eq!(
            indexes.len(),
            DIM,
            "accessing a quadrant in {} dimensions with coordinates in {} dimensions",
            DIM,
            indexes.len()
        );
        let mut index = 0;
        for i in (0..indexes.len()).rev() {
            index = 2 * index + usize::from(indexes[i]);
        }
        index
    }

    /// Borrow the value stored at a boolean coordinate key.
    pub fn get(&self, indexes: &[bool]) -> &T {
        &self.values[Self::slot(indexes)]
    }

    /// Mutably borrow the value stored at a boolean coordinate key.
    pub fn get_mut(&mut self, indexes: &[bool]) -> &mut T {
        &mut self.values[Self::slot(indexes)]
    }

    /// Replace the value stored at a boolean coordinate key.
    pub fn set(&mut self, indexes: &[bool], value: T) {
        self.values[Self::slot(indexes)] = value;
    }
}

impl<T: Default, const DIM: usize> Quadrant<T, DIM> {
    /// Create a quadrant with every slot default initialised.
    pub fn new() -> Self {
        Quadrant {
            values: (0..1usize << DIM).map(|_| T::default()).collect(),
        }
    }
}

impl<T: Default, const DIM: usize> Default for Quadrant<T, DIM> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_set_then_get_round_trip() {
        let mut quadrant = Quadrant::<u32, 2>::new();
        let keys = [[false, false], [true, false], [false, true], [true, true]];
        for (value, key) in keys.iter().enumerate() {
            quadrant.set(key, value as u32);
        }
        for (value, key) in keys.iter().enumerate() {
            assert_eq!(*quadrant.get(key), value as u32);
        }
    }

    #[test]
    fn test_keys_address_distinct_slots() {
        let mut quadrant = Quadrant::<u32, 2>::new();
        quadrant.set(&[true, false], 7);
        assert_eq!(*quadrant.get(&[false, false]), 0);
        assert_eq!(*quadrant.get(&[false, true]), 0);
        assert_eq!(*quadrant.get(&[true, true]), 0);
    }

    #[test]
    fn test_index_order_matches_iteration_order() {
        let mut quadrant = Quadrant::<u32, 2>::new();
        quadrant.set(&[false, false], 0);
        quadrant.set(&[true, false], 1);
        quadrant.set(&[false, true], 2);
        quadrant.set(&[true, true], 3);
        assert_eq!(quadrant.values, vec![0, 1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn test_wrong_key_length_aborts() {
        let quadrant = Quadrant::<u32, 2>::new();
        quadrant.get(&[true, false, true]);
    }

    #[test]
    fn test_three_dimensional_addressing() {
        let mut octant = Quadrant::<u32, 3>::new();
        assert_eq!(octant.values.len(), 8);
        octant.set(&[true, true, true], 9);
        assert_eq!(*octant.get(&[true, true, true]), 9);
        assert_eq!(*octant.get(&[false, true, true]), 0);
    }
}
