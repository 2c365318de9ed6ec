//! Condition Law Tests
//!
//! Checks, over every pair drawn from a small ordered domain:
//! - each operator agrees with the mathematical relation
//! - `>`/`<=`, `<`/`>=` and `=`/`!=` are exact complements
//! - ties never satisfy strict relations
//! - conditions evaluate concurrently without coordination

use relcond::condition::{Condition, ConditionErrorCode, Operand, Relation};
use relcond::table::{Column, Row, RowTuple, Table, ValueOrdering};

// =============================================================================
// Helper Functions
// =============================================================================

const DOMAIN: [&str; 5] = ["", "a", "ab", "b", "ba"];

fn tables() -> Vec<Table> {
    vec![
        Table::new("left", ["x"]).unwrap(),
        Table::new("right", ["y"]).unwrap(),
    ]
}

fn column(name: &str) -> Column {
    Column::resolve(name, &tables(), ValueOrdering::Lexical).unwrap()
}

/// `x OP 'b'` evaluated against a single-row tuple with `x = a`
fn test_literal(a: &str, op: &str, b: &str) -> bool {
    let cond = Condition::with_literal(column("x"), op, b).unwrap();
    let row = Row::new([a]);
    cond.test(&RowTuple::single("left", &row)).unwrap()
}

/// `x OP y` evaluated against a joined tuple with `x = a`, `y = b`
fn test_columns(a: &str, op: &str, b: &str) -> bool {
    let cond = Condition::with_column(column("x"), op, column("y")).unwrap();
    let left = Row::new([a]);
    let right = Row::new([b]);
    let mut tuple = RowTuple::new();
    tuple.push("left", &left);
    tuple.push("right", &right);
    cond.test(&tuple).unwrap()
}

fn expected(a: &str, op: &str, b: &str) -> bool {
    match op {
        "<" => a < b,
        "<=" => a <= b,
        ">" => a > b,
        ">=" => a >= b,
        "=" => a == b,
        "!=" => a != b,
        other => panic!("not an operator: {}", other),
    }
}

// =============================================================================
// Truth Table Tests
// =============================================================================

/// Every operator matches the mathematical relation on literals.
#[test]
fn test_literal_operands_match_relation() {
    for a in DOMAIN {
        for b in DOMAIN {
            for rel in Relation::ALL {
                let op = rel.as_str();
                assert_eq!(
                    test_literal(a, op, b),
                    expected(a, op, b),
                    "{:?} {} {:?}",
                    a,
                    op,
                    b
                );
            }
        }
    }
}

/// Every operator matches the mathematical relation on columns.
#[test]
fn test_column_operands_match_relation() {
    for a in DOMAIN {
        for b in DOMAIN {
            for rel in Relation::ALL {
                let op = rel.as_str();
                assert_eq!(test_columns(a, op, b), expected(a, op, b));
            }
        }
    }
}

// =============================================================================
// Complement and Tie Tests
// =============================================================================

/// Paired operators are exact complements, ties included.
#[test]
fn test_complement_law() {
    for a in DOMAIN {
        for b in DOMAIN {
            assert_eq!(test_literal(a, ">", b), !test_literal(a, "<=", b));
            assert_eq!(test_literal(a, "<", b), !test_literal(a, ">=", b));
            assert_eq!(test_literal(a, "=", b), !test_literal(a, "!=", b));
        }
    }
}

/// Equal values satisfy only the equality-inclusive relations.
#[test]
fn test_ties() {
    for v in DOMAIN {
        assert!(!test_literal(v, "<", v));
        assert!(!test_literal(v, ">", v));
        assert!(test_literal(v, "<=", v));
        assert!(test_literal(v, ">=", v));
        assert!(test_literal(v, "=", v));
        assert!(!test_literal(v, "!=", v));
    }
}

/// Ties under numeric ordering follow the same law.
#[test]
fn test_numeric_ties() {
    let x = Column::resolve("x", &tables(), ValueOrdering::Numeric).unwrap();
    let row = Row::new(["2.0"]);
    let tuple = RowTuple::single("left", &row);

    for (op, want) in [("<", false), (">", false), ("<=", true), (">=", true), ("=", true), ("!=", false)] {
        let cond = Condition::with_literal(x.clone(), op, "2").unwrap();
        assert_eq!(cond.test(&tuple).unwrap(), want, "2.0 {} 2", op);
    }
}

// =============================================================================
// Construction Tests
// =============================================================================

/// Tokens outside the six relations fail at construction.
#[test]
fn test_unrecognized_operators() {
    for token in ["<>", "==", "!", "=<", "LIKE"] {
        let err = Condition::new(column("x"), token, Operand::Literal("a".into())).unwrap_err();
        assert_eq!(err.code(), ConditionErrorCode::UnrecognizedOperator);
    }
}

// =============================================================================
// Concurrency Tests
// =============================================================================

/// One set of conditions is shared across threads testing different tuples.
#[test]
fn test_concurrent_evaluation() {
    let conditions = vec![
        Condition::with_literal(column("x"), ">=", "b").unwrap(),
        Condition::with_literal(column("x"), "!=", "ba").unwrap(),
    ];
    let rows: Vec<Row> = DOMAIN.iter().map(|v| Row::new([*v])).collect();

    let results: Vec<bool> = std::thread::scope(|s| {
        let handles: Vec<_> = rows
            .iter()
            .map(|row| {
                let conditions = &conditions;
                s.spawn(move || {
                    let tuple = RowTuple::single("left", row);
                    Condition::test_all(Some(conditions.as_slice()), &tuple).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, vec![false, false, false, true, false]);
}
