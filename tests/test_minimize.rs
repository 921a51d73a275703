//! End-to-end tests of the minimizer through the public API

use kmap_logic::{
    minimize, minimize_with_config, CellValue, Expression, Form, MinimizeConfig, Position,
    TieBreak, TruthTable,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

#[test]
fn test_two_variable_sop() {
    let result = minimize(2, &[1, 3], &[], Form::Sop);
    assert_eq!(result.expression().to_string(), "x_1");
    assert_eq!(result.groups(), vec![vec![1, 3]]);
}

#[test]
fn test_two_variable_pos() {
    let result = minimize(2, &[1, 3], &[], Form::Pos);
    assert_eq!(result.expression().to_string(), "(x_1)");
    assert_eq!(result.groups(), vec![vec![0, 2]]);
}

#[test]
fn test_full_space_is_one() {
    let all: Vec<Position> = (0..8).collect();
    let result = minimize(3, &all, &[], Form::Sop);
    assert_eq!(result.expression().to_string(), "1");
    assert_eq!(result.groups(), vec![all]);
}

#[test]
fn test_empty_function_is_zero() {
    for num_vars in 2..=5 {
        let result = minimize(num_vars, &[], &[], Form::Sop);
        assert_eq!(result.expression().to_string(), "0");
        assert!(result.groups().is_empty());
    }
}

#[test]
fn test_five_variables_across_maps() {
    // x_4 = 1 on both maps
    let ones: Vec<Position> = (0..32).filter(|p| p & 1 == 1).collect();
    let result = minimize(5, &ones, &[], Form::Sop);
    assert_eq!(result.expression().to_string(), "x_4");
    assert_eq!(result.groups(), vec![ones]);
}

#[test]
fn test_essentials_lead_the_cover() {
    // m(0, 1, 2, 3, 7): 0-- and -11 are both essential
    let result = minimize(3, &[0, 1, 2, 3, 7], &[], Form::Sop);
    assert_eq!(result.essentials().len(), 2);
    assert_eq!(result.cubes().len(), 2);
    assert_eq!(result.expression().to_string(), "x_0' + x_1x_2");
}

#[test]
fn test_tie_break_only_changes_choice() {
    let ones = [0, 1, 2, 5, 6, 7];
    let config = MinimizeConfig::new().with_tie_break(TieBreak::Lexicographic);
    let a = minimize(3, &ones, &[], Form::Sop);
    let b = minimize_with_config(3, &ones, &[], Form::Sop, &config);
    assert_ne!(a, b);
    for position in 0..8 {
        assert_eq!(
            a.expression().evaluate(position, 3),
            b.expression().evaluate(position, 3)
        );
    }
}

#[test]
fn test_expression_parses_back() {
    let result = minimize(4, &[0, 1, 2, 5, 8, 9, 10], &[], Form::Pos);
    let text = result.expression().to_string();
    let parsed: Expression = text.parse().unwrap();
    assert_eq!(&parsed, result.expression());
}

/// A random function: variable count plus one cell value per position
fn truth_tables() -> impl Strategy<Value = TruthTable> {
    (2usize..=5).prop_flat_map(|num_vars| {
        prop::collection::vec(0u8..3, 1 << num_vars).prop_map(move |cells| {
            let mut table = TruthTable::new(num_vars).unwrap();
            for (position, value) in cells.into_iter().enumerate() {
                let value = CellValue::try_from(value).unwrap();
                table.set(position as Position, value).unwrap();
            }
            table
        })
    })
}

fn forms() -> impl Strategy<Value = Form> {
    prop_oneof![Just(Form::Sop), Just(Form::Pos)]
}

fn tie_breaks() -> impl Strategy<Value = TieBreak> {
    prop_oneof![Just(TieBreak::GenerationOrder), Just(TieBreak::Lexicographic)]
}

/// Prime implicants of `allowed` by exhaustive search over all `0/1/-` patterns
fn brute_force_primes(
    num_vars: usize,
    allowed: &BTreeSet<Position>,
) -> Vec<(String, Vec<Position>)> {
    let covered = |pattern: &[u8]| -> Vec<Position> {
        (0..1u32 << num_vars)
            .filter(|p| {
                pattern.iter().enumerate().all(|(i, &c)| {
                    c == 2 || (p >> (num_vars - 1 - i)) & 1 == u32::from(c)
                })
            })
            .collect()
    };
    let is_implicant = |pattern: &[u8]| covered(pattern).iter().all(|p| allowed.contains(p));

    let patterns = (0..num_vars).fold(vec![Vec::new()], |acc, _| {
        acc.into_iter()
            .flat_map(|prefix: Vec<u8>| {
                (0..3u8).map(move |c| {
                    let mut next = prefix.clone();
                    next.push(c);
                    next
                })
            })
            .collect()
    });

    patterns
        .into_iter()
        .filter(|pattern| is_implicant(&pattern[..]))
        .filter(|pattern| {
            (0..num_vars).filter(|&i| pattern[i] != 2).all(|i| {
                let mut wider = pattern.clone();
                wider[i] = 2;
                !is_implicant(&wider[..])
            })
        })
        .map(|pattern| {
            let text = pattern
                .iter()
                .map(|&c| match c {
                    0 => '0',
                    1 => '1',
                    _ => '-',
                })
                .collect();
            (text, covered(&pattern[..]))
        })
        .collect()
}

proptest! {
    #[test]
    fn proptest_soundness(table in truth_tables(), form in forms(), tie_break in tie_breaks()) {
        let config = MinimizeConfig::new().with_tie_break(tie_break);
        let result = table.minimize_with_config(form, &config);
        let expression = result.expression();
        for (position, value) in table.iter() {
            let got = expression.evaluate(position, table.num_vars());
            match value {
                CellValue::True => prop_assert!(got, "position {} must be true", position),
                CellValue::False => prop_assert!(!got, "position {} must be false", position),
                CellValue::DontCare => {}
            }
        }
    }

    #[test]
    fn proptest_coverage(table in truth_tables(), form in forms()) {
        let result = table.minimize(form);
        let required: BTreeSet<Position> = match form {
            Form::Sop => table.true_set().into_iter().collect(),
            Form::Pos => table.false_set().into_iter().collect(),
        };
        let allowed: BTreeSet<Position> = required
            .iter()
            .copied()
            .chain(table.dont_care_set())
            .collect();
        let covered: BTreeSet<Position> = result.groups().into_iter().flatten().collect();

        prop_assert!(required.is_subset(&covered), "every required position is covered");
        prop_assert!(covered.is_subset(&allowed), "groups never cover the other value");
        for group in result.groups() {
            prop_assert!(group.len().is_power_of_two());
            prop_assert!(group.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn proptest_essential_primes_are_chosen(table in truth_tables(), form in forms()) {
        let result = table.minimize(form);
        let required: BTreeSet<Position> = match form {
            Form::Sop => table.true_set().into_iter().collect(),
            Form::Pos => table.false_set().into_iter().collect(),
        };
        let allowed: BTreeSet<Position> = required
            .iter()
            .copied()
            .chain(table.dont_care_set())
            .collect();
        let primes = brute_force_primes(table.num_vars(), &allowed);
        let chosen: BTreeSet<String> = result.cubes().iter().map(|c| c.pattern()).collect();

        for position in &required {
            let covering: Vec<&String> = primes
                .iter()
                .filter(|(_, covered)| covered.contains(position))
                .map(|(pattern, _)| pattern)
                .collect();
            if let [only] = covering.as_slice() {
                prop_assert!(
                    chosen.contains(*only),
                    "essential prime {} for position {} missing from {:?}",
                    only,
                    position,
                    chosen
                );
            }
        }
    }

    #[test]
    fn proptest_idempotence(table in truth_tables(), form in forms()) {
        let first = table.minimize(form);
        let second = table.minimize(form);
        prop_assert_eq!(first.expression().to_string(), second.expression().to_string());
        prop_assert_eq!(first.groups(), second.groups());
    }

    #[test]
    fn proptest_rendered_expression_round_trips(table in truth_tables(), form in forms()) {
        let result = table.minimize(form);
        let parsed = Expression::parse(&result.expression().to_string()).unwrap();
        prop_assert_eq!(&parsed, result.expression());
        prop_assert_eq!(
            parsed.on_set(table.num_vars()),
            result.expression().on_set(table.num_vars())
        );
    }
}
