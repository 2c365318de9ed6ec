//! Conjunctions of conditions

use super::comparator::Condition;
use super::errors::ConditionResult;
use crate::table::RowTuple;

impl Condition {
    /// True iff `tuple` satisfies every condition in order
    ///
    /// An absent or empty list is vacuously true. Evaluation stops at the
    /// first failing condition; later ones are never evaluated.
    pub fn test_all(conditions: Option<&[Condition]>, tuple: &RowTuple<'_>) -> ConditionResult<bool> {
        let Some(conditions) = conditions else {
            return Ok(true);
        };
        for cond in conditions {
            if !cond.test(tuple)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ConditionErrorCode;
    use crate::table::{Column, Row, Table, ValueOrdering};

    fn col(name: &str) -> Column {
        let tables = vec![Table::new("people", ["name", "age"]).unwrap()];
        Column::resolve(name, &tables, ValueOrdering::Lexical).unwrap()
    }

    /// A condition reading from a table no tuple here contains
    fn out_of_scope() -> Condition {
        let ghost = Column::new("age", "ghosts", 0, ValueOrdering::Lexical);
        Condition::with_literal(ghost, "=", "x").unwrap()
    }

    #[test]
    fn test_absent_and_empty_are_true() {
        let row = Row::new(["Alice", "30"]);
        let tuple = RowTuple::single("people", &row);

        assert!(Condition::test_all(None, &tuple).unwrap());
        assert!(Condition::test_all(Some(&[][..]), &tuple).unwrap());
        assert!(Condition::test_all(None, &RowTuple::new()).unwrap());
    }

    #[test]
    fn test_all_must_pass() {
        let row = Row::new(["Alice", "30"]);
        let tuple = RowTuple::single("people", &row);

        let conds = vec![
            Condition::with_literal(col("age"), ">=", "18").unwrap(),
            Condition::with_literal(col("name"), "=", "Alice").unwrap(),
        ];
        assert!(Condition::test_all(Some(conds.as_slice()), &tuple).unwrap());

        let conds = vec![
            Condition::with_literal(col("age"), ">=", "18").unwrap(),
            Condition::with_literal(col("name"), "=", "Bob").unwrap(),
        ];
        assert!(!Condition::test_all(Some(conds.as_slice()), &tuple).unwrap());
    }

    #[test]
    fn test_short_circuits_on_first_failure() {
        let row = Row::new(["Alice", "30"]);
        let tuple = RowTuple::single("people", &row);

        // The second condition would fail fatally if it were evaluated
        let conds = vec![
            Condition::with_literal(col("name"), "=", "Bob").unwrap(),
            out_of_scope(),
        ];
        assert!(!Condition::test_all(Some(conds.as_slice()), &tuple).unwrap());
    }

    #[test]
    fn test_error_propagates_when_reached() {
        let row = Row::new(["Alice", "30"]);
        let tuple = RowTuple::single("people", &row);

        let conds = vec![
            Condition::with_literal(col("name"), "=", "Alice").unwrap(),
            out_of_scope(),
        ];
        let err = Condition::test_all(Some(conds.as_slice()), &tuple).unwrap_err();
        assert_eq!(err.code(), ConditionErrorCode::ColumnNotInScope);
    }
}
