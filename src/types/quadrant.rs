//! A fixed-size container addressed by one direction bit per axis.

/// Values in a multidimensional space with two directions per dimension. The `2^DIM`
/// slots are addressed by `DIM` boolean coordinates with slot
/// `index = sum_i key[i] << i`, so in two dimensions `index = 2 * bit_y + bit_x` for
/// `key = [bit_x, bit_y]`. The same order is used for indexing and iteration over
/// `values`.
#[derive(Clone, Debug)]
pub struct Quadrant<T, const DIM: usize> {
    /// Backing storage of `2^DIM` slots, in index order.
    pub values: Vec<T>,
}
