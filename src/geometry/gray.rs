//! Reflected binary Gray code
//!
//! Map rows and columns are laid out in Gray order, so neighbouring cells
//! (including the last and first) differ in exactly one variable.

/// The Gray code at `index`
///
/// # Examples
///
/// ```
/// use kmap_logic::gray_code;
///
/// let order: Vec<u32> = (0..4).map(gray_code).collect();
/// assert_eq!(order, vec![0b00, 0b01, 0b11, 0b10]);
/// ```
pub fn gray_code(index: u32) -> u32 {
    index ^ (index >> 1)
}

/// Index of `code` in Gray order (inverse of [`gray_code`])
pub fn gray_rank(code: u32) -> u32 {
    let mut rank = code;
    let mut shifted = code >> 1;
    while shifted != 0 {
        rank ^= shifted;
        shifted >>= 1;
    }
    rank
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_inverts_code() {
        for i in 0..32 {
            assert_eq!(gray_rank(gray_code(i)), i);
        }
    }

    #[test]
    fn test_cyclic_neighbours_differ_in_one_bit() {
        for bits in 1..=3 {
            let size = 1u32 << bits;
            for i in 0..size {
                let next = (i + 1) % size;
                assert_eq!((gray_code(i) ^ gray_code(next)).count_ones(), 1);
            }
        }
    }
}
