//! Reading single-output PLA descriptions into a [`TruthTable`]
//!
//! Supported directives are `.i`, `.o` (must be 1), `.e`; `.p`, `.type`,
//! `.ilb` and `.ob` are accepted and ignored. Each cube line holds the input
//! part over `0`, `1`, `-` followed by one output character:
//! `1` (ON-set), `-`/`2` (don't-care) or `0`/`~` (OFF-set, nothing to record).
//! ON-set cubes take precedence over overlapping don't-care cubes.

use super::error::{PlaError, PlaReadError};
use super::{CellValue, Position, TruthTable};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

impl TruthTable {
    /// Parse a truth table from a PLA format reader
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::TruthTable;
    ///
    /// let pla = ".i 3\n.o 1\n1-1 1\n000 -\n.e\n";
    /// let table = TruthTable::from_pla_str(pla).unwrap();
    /// assert_eq!(table.true_set(), vec![5, 7]);
    /// assert_eq!(table.dont_care_set(), vec![0]);
    /// ```
    pub fn from_pla_reader<R: BufRead>(reader: R) -> Result<Self, PlaReadError> {
        let mut num_inputs: Option<usize> = None;
        let mut on_cubes: Vec<Vec<Option<bool>>> = Vec::new();
        let mut dc_cubes: Vec<Vec<Option<bool>>> = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('.') {
                let parts: Vec<&str> = line.split_whitespace().collect();
                let value = parts.get(1).copied().unwrap_or("");
                match parts.first().copied() {
                    Some(".i") => {
                        let n: usize =
                            value
                                .parse()
                                .map_err(|_| PlaError::InvalidInputDirective {
                                    value: Arc::from(value),
                                })?;
                        super::check_variable_count(n)?;
                        num_inputs = Some(n);
                    }
                    Some(".o") => {
                        if value != "1" {
                            return Err(PlaError::UnsupportedOutputCount {
                                value: Arc::from(value),
                            }
                            .into());
                        }
                    }
                    Some(".e") | Some(".end") => break,
                    _ => {}
                }
                continue;
            }

            let num_inputs = num_inputs.ok_or(PlaError::MissingInputDirective)?;
            let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
            if compact.chars().count() != num_inputs + 1 {
                return Err(PlaError::CubeDimensionMismatch {
                    line: line_number,
                    expected_inputs: num_inputs,
                    actual_inputs: compact.chars().count().saturating_sub(1),
                }
                .into());
            }

            let mut chars = compact.chars();
            let inputs = chars
                .by_ref()
                .take(num_inputs)
                .enumerate()
                .map(|(position, character)| match character {
                    '0' => Ok(Some(false)),
                    '1' => Ok(Some(true)),
                    '-' | '2' => Ok(None),
                    _ => Err(PlaError::InvalidInputCharacter {
                        character,
                        line: line_number,
                        position,
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;

            match chars.next() {
                Some('1') => on_cubes.push(inputs),
                Some('-') | Some('2') => dc_cubes.push(inputs),
                Some('0') | Some('~') => {}
                Some(character) => {
                    return Err(PlaError::InvalidOutputCharacter {
                        character,
                        line: line_number,
                    }
                    .into())
                }
                None => unreachable!("cube width checked above"),
            }
        }

        let num_vars = num_inputs.ok_or(PlaError::MissingInputDirective)?;
        debug!(
            "PLA: {} inputs, {} ON cubes, {} don't-care cubes",
            num_vars,
            on_cubes.len(),
            dc_cubes.len()
        );

        let mut table = TruthTable::new(num_vars)?;
        for cube in &dc_cubes {
            for position in expand_cube(cube) {
                table.set(position, CellValue::DontCare)?;
            }
        }
        for cube in &on_cubes {
            for position in expand_cube(cube) {
                table.set(position, CellValue::True)?;
            }
        }
        Ok(table)
    }

    /// Parse a truth table from a PLA format string
    pub fn from_pla_str(s: &str) -> Result<Self, PlaReadError> {
        Self::from_pla_reader(Cursor::new(s.as_bytes()))
    }

    /// Load a truth table from a PLA format file
    pub fn from_pla_file<P: AsRef<Path>>(path: P) -> Result<Self, PlaReadError> {
        let file = File::open(path)?;
        Self::from_pla_reader(BufReader::new(file))
    }
}

/// All positions matched by a ternary input pattern, ascending
fn expand_cube(inputs: &[Option<bool>]) -> Vec<Position> {
    inputs.iter().fold(vec![0], |acc, input| {
        acc.into_iter()
            .flat_map(|prefix| {
                let base = prefix << 1;
                match input {
                    Some(false) => vec![base],
                    Some(true) => vec![base | 1],
                    None => vec![base, base | 1],
                }
            })
            .collect()
    })
}
