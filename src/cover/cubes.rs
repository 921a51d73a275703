//! Cube (implicant) type used by the Quine-McCluskey engine
//!
//! A [`Cube`] pairs a ternary input pattern with the set of truth table
//! positions it covers:
//! - `Some(false)` - the variable must be 0
//! - `Some(true)` - the variable must be 1
//! - `None` - the variable is not constrained (printed as `-`)

use crate::truth_table::Position;
use std::fmt;
use std::sync::Arc;

/// An implicant over `num_vars` variables
///
/// Input index `i` corresponds to variable `x_i`, which is bit `num_vars - 1 - i`
/// of a position (most-significant bit first).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    pub(crate) inputs: Arc<[Option<bool>]>,
    pub(crate) positions: Arc<[Position]>,
}

impl Cube {
    /// Create the fully constrained cube for a single position
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::Cube;
    ///
    /// let cube = Cube::minterm(3, 5);
    /// assert_eq!(cube.pattern(), "101");
    /// assert_eq!(cube.positions(), &[5]);
    /// ```
    pub fn minterm(num_vars: usize, position: Position) -> Self {
        let inputs: Vec<Option<bool>> = (0..num_vars)
            .map(|i| Some((position >> (num_vars - 1 - i)) & 1 == 1))
            .collect();
        Cube {
            inputs: inputs.into(),
            positions: Arc::from(vec![position]),
        }
    }

    /// Create the cube that leaves every variable unconstrained
    pub fn universe(num_vars: usize) -> Self {
        let inputs = vec![None; num_vars];
        let positions: Vec<Position> = (0..1u32 << num_vars).collect();
        Cube {
            inputs: inputs.into(),
            positions: positions.into(),
        }
    }

    /// Get the inputs of this cube
    pub fn inputs(&self) -> &[Option<bool>] {
        &self.inputs
    }

    /// Positions covered by this cube, in ascending order
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of variables
    pub fn num_vars(&self) -> usize {
        self.inputs.len()
    }

    /// Number of inputs fixed to 1, used to bucket cubes for combination
    pub fn ones(&self) -> usize {
        self.inputs.iter().filter(|&&v| v == Some(true)).count()
    }

    /// Number of constrained inputs (literals in the rendered term)
    pub fn num_literals(&self) -> usize {
        self.inputs.iter().filter(|v| v.is_some()).count()
    }

    /// True when no variable is constrained
    pub fn is_universe(&self) -> bool {
        self.inputs.iter().all(Option::is_none)
    }

    /// Check whether `position` lies in this cube
    pub fn covers(&self, position: Position) -> bool {
        self.positions.binary_search(&position).is_ok()
    }

    /// The cube as a string over `{0, 1, -}`
    pub fn pattern(&self) -> String {
        self.inputs
            .iter()
            .map(|v| match v {
                Some(false) => '0',
                Some(true) => '1',
                None => '-',
            })
            .collect()
    }

    /// Merge two cubes that differ in exactly one constrained input
    ///
    /// Returns `None` when the cubes disagree anywhere else (including on
    /// which inputs are unconstrained). The merged cube covers the union of
    /// both position sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::Cube;
    ///
    /// let merged = Cube::minterm(2, 1).combine(&Cube::minterm(2, 3)).unwrap();
    /// assert_eq!(merged.pattern(), "-1");
    /// assert_eq!(merged.positions(), &[1, 3]);
    ///
    /// assert!(Cube::minterm(2, 0).combine(&Cube::minterm(2, 3)).is_none());
    /// ```
    pub fn combine(&self, other: &Cube) -> Option<Cube> {
        if self.inputs.len() != other.inputs.len() {
            return None;
        }

        let mut differing = None;
        for (i, (a, b)) in self.inputs.iter().zip(other.inputs.iter()).enumerate() {
            match (a, b) {
                (Some(x), Some(y)) if x != y => {
                    if differing.is_some() {
                        return None;
                    }
                    differing = Some(i);
                }
                (x, y) if x == y => {}
                _ => return None,
            }
        }

        let index = differing?;
        let mut inputs = self.inputs.to_vec();
        inputs[index] = None;

        Some(Cube {
            inputs: inputs.into(),
            positions: merge_sorted(&self.positions, &other.positions).into(),
        })
    }
}

/// Union of two ascending position lists
fn merge_sorted(a: &[Position], b: &[Position]) -> Vec<Position> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                merged.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                merged.push(b[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                merged.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cube({} {:?})", self.pattern(), self.positions)
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern())
    }
}
