use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitAnd, BitOr};

use super::{Field, Selectable, Value};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl CompareOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
        }
    }

    fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Le => ordering != Ordering::Greater,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Ge => ordering != Ordering::Less,
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Ne => ordering != Ordering::Equal,
        }
    }
}

/// A boolean predicate over objects of type `T`.
///
/// Expressions are immutable trees; evaluation borrows both the expression
/// and the object.
pub enum Expr<T> {
    Compare {
        field: Field<T>,
        op: CompareOp,
        value: Value,
    },
    Null {
        field: Field<T>,
        negated: bool,
    },
    Membership {
        field: Field<T>,
        values: Vec<Value>,
        negated: bool,
    },
    And(Box<Expr<T>>, Box<Expr<T>>),
    Or(Box<Expr<T>>, Box<Expr<T>>),
}

impl<T> Expr<T> {
    pub fn and(self, other: Expr<T>) -> Expr<T> {
        Expr::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Expr<T>) -> Expr<T> {
        Expr::Or(Box::new(self), Box::new(other))
    }
}

impl<T: Selectable> Expr<T> {
    /// Evaluates the predicate against `object`.
    ///
    /// Both sides of `And`/`Or` are always evaluated, so an unknown attribute
    /// anywhere in the tree is reported even when the other side would
    /// decide the result.
    pub fn evaluate(&self, object: &T) -> Result<bool> {
        match self {
            Expr::Compare { field, op, value } => {
                let Some(actual) = object.value(field.name())? else {
                    return Ok(false);
                };
                compare(field.name(), &actual, *op, value)
            }
            Expr::Null { field, negated } => {
                let is_null = object.value(field.name())?.is_none();
                Ok(is_null != *negated)
            }
            Expr::Membership {
                field,
                values,
                negated,
            } => {
                let Some(actual) = object.value(field.name())? else {
                    return Ok(false);
                };
                let member = values.iter().any(|v| actual.matches(v));
                Ok(member != *negated)
            }
            Expr::And(lhs, rhs) => {
                let left = lhs.evaluate(object)?;
                let right = rhs.evaluate(object)?;
                Ok(left && right)
            }
            Expr::Or(lhs, rhs) => {
                let left = lhs.evaluate(object)?;
                let right = rhs.evaluate(object)?;
                Ok(left || right)
            }
        }
    }
}

fn compare(attribute: &str, actual: &Value, op: CompareOp, expected: &Value) -> Result<bool> {
    match op {
        CompareOp::Eq => return Ok(actual.matches(expected)),
        CompareOp::Ne => return Ok(!actual.matches(expected)),
        _ => {}
    }
    match actual.order(expected) {
        Ok(Some(ordering)) => Ok(op.accepts(ordering)),
        Ok(None) => Ok(false),
        Err(()) => Err(Error::TypeMismatch {
            attribute: attribute.to_string(),
            message: format!(
                "{} value cannot be compared with {} using {}",
                actual.kind(),
                expected.kind(),
                op.symbol()
            ),
        }),
    }
}

/// True when every expression holds for `object`. All expressions are
/// evaluated; an empty list holds for everything.
pub fn evaluate_all<T: Selectable>(exprs: &[Expr<T>], object: &T) -> Result<bool> {
    let mut all = true;
    for expr in exprs {
        all &= expr.evaluate(object)?;
    }
    Ok(all)
}

/// Objects for which every expression holds, in input order.
pub fn find<T, I>(objects: I, exprs: &[Expr<T>]) -> Result<Vec<T>>
where
    T: Selectable,
    I: IntoIterator<Item = T>,
{
    let mut found = Vec::new();
    for object in objects {
        if evaluate_all(exprs, &object)? {
            found.push(object);
        }
    }
    Ok(found)
}

impl<T> BitAnd for Expr<T> {
    type Output = Expr<T>;

    fn bitand(self, rhs: Expr<T>) -> Expr<T> {
        self.and(rhs)
    }
}

impl<T> BitOr for Expr<T> {
    type Output = Expr<T>;

    fn bitor(self, rhs: Expr<T>) -> Expr<T> {
        self.or(rhs)
    }
}

impl<T> Clone for Expr<T> {
    fn clone(&self) -> Self {
        match self {
            Expr::Compare { field, op, value } => Expr::Compare {
                field: field.clone(),
                op: *op,
                value: value.clone(),
            },
            Expr::Null { field, negated } => Expr::Null {
                field: field.clone(),
                negated: *negated,
            },
            Expr::Membership {
                field,
                values,
                negated,
            } => Expr::Membership {
                field: field.clone(),
                values: values.clone(),
                negated: *negated,
            },
            Expr::And(l, r) => Expr::And(l.clone(), r.clone()),
            Expr::Or(l, r) => Expr::Or(l.clone(), r.clone()),
        }
    }
}

impl<T> fmt::Debug for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<T> fmt::Display for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Compare { field, op, value } => write!(f, "{field} {} {value}", op.symbol()),
            Expr::Null { field, negated } => {
                let suffix = if *negated { "is not null" } else { "is null" };
                write!(f, "{field} {suffix}")
            }
            Expr::Membership {
                field,
                values,
                negated,
            } => {
                let op = if *negated { "not in" } else { "in" };
                write!(f, "{field} {op} [")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Expr::And(l, r) => write!(f, "({l} & {r})"),
            Expr::Or(l, r) => write!(f, "({l} | {r})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dso, DsoType, Star};

    fn fakestar() -> Star {
        Star {
            name: Some("fakestar".to_string()),
            hip: None,
            ra: 2.0,
            dec: 20.0,
            magnitude: 4.0,
            bv: Some(2.12),
        }
    }

    fn dso(magnitude: Option<f64>) -> Dso {
        Dso {
            name: "NGC2244".to_string(),
            dso_type: DsoType::OpenCluster,
            ra: 6.5,
            dec: 4.9,
            magnitude,
            maj_ax: Some(24.0),
            min_ax: None,
            angle: None,
            size: Some(0.12),
            geometry: None,
        }
    }

    #[test]
    fn star_true_expressions() {
        let star = fakestar();
        let expressions = vec![
            Star::attr("ra").lt(24),
            Star::attr("dec").gt(5),
            Star::attr("ra").le(2),
            Star::attr("hip").is_null(),
            Star::attr("name").is_in(["stuff", "sirius", "fakestar"]),
            Star::attr("name").equals("wrong") | Star::attr("name").equals("fakestar"),
            Star::attr("name").not_equals("noname"),
            Star::attr("name").equals("bellatrix")
                | (Star::attr("name").equals("fakestar") & Star::attr("magnitude").lt(5)),
        ];
        for e in &expressions {
            assert!(e.evaluate(&star).unwrap(), "expected true: {e}");
        }
    }

    #[test]
    fn star_false_expressions() {
        let star = fakestar();
        let expressions = vec![
            Star::attr("ra").gt(4),
            Star::attr("dec").lt(5),
            Star::attr("hip").is_not_null(),
            Star::attr("name").is_not_in(["stuff", "sirius", "fakestar"]),
            Star::attr("name").equals("wrong") | Star::attr("name").not_equals("fakestar"),
        ];
        for e in &expressions {
            assert!(!e.evaluate(&star).unwrap(), "expected false: {e}");
        }
    }

    #[test]
    fn and_or_match_boolean_semantics() {
        let star = fakestar();
        let atoms = [
            Star::attr("magnitude").lt(5.0),
            Star::attr("magnitude").gt(5.0),
            Star::attr("hip").is_null(),
            Star::attr("hip").ge(10),
        ];
        for a in &atoms {
            for b in &atoms {
                let ea = a.evaluate(&star).unwrap();
                let eb = b.evaluate(&star).unwrap();
                assert_eq!((a.clone() & b.clone()).evaluate(&star).unwrap(), ea && eb);
                assert_eq!((a.clone() | b.clone()).evaluate(&star).unwrap(), ea || eb);
            }
        }
    }

    #[test]
    fn null_and_not_null_are_complements() {
        for magnitude in [None, Some(3.0)] {
            let d = dso(magnitude);
            let is_null = Dso::attr("magnitude").is_null().evaluate(&d).unwrap();
            let is_not_null = Dso::attr("magnitude").is_not_null().evaluate(&d).unwrap();
            assert_eq!(is_null, !is_not_null);
        }
    }

    #[test]
    fn comparisons_on_null_are_false() {
        let d = dso(None);
        for op in [
            Dso::attr("magnitude").lt(10),
            Dso::attr("magnitude").le(10),
            Dso::attr("magnitude").gt(10),
            Dso::attr("magnitude").ge(10),
            Dso::attr("magnitude").equals(10),
            Dso::attr("magnitude").not_equals(10),
        ] {
            assert!(!op.evaluate(&d).unwrap(), "{op} should be false on null");
        }
    }

    #[test]
    fn membership_on_null_is_false_for_any_set() {
        let d = dso(None);
        assert!(!Dso::attr("magnitude").is_in([1.0, 2.0]).evaluate(&d).unwrap());
        assert!(!Dso::attr("magnitude")
            .is_in(Vec::<f64>::new())
            .evaluate(&d)
            .unwrap());
        assert!(!Dso::attr("magnitude").is_not_in([1.0]).evaluate(&d).unwrap());
    }

    #[test]
    fn membership_uses_numeric_coercion() {
        let d = dso(Some(6.0));
        assert!(Dso::attr("magnitude").is_in([5, 6, 7]).evaluate(&d).unwrap());
        assert!(Dso::attr("magnitude").is_not_in([5, 7]).evaluate(&d).unwrap());
    }

    #[test]
    fn unknown_attribute_fails_loudly() {
        let d = dso(Some(6.0));
        let err = Dso::attr("colour").equals("red").evaluate(&d).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownAttribute { kind: "DSO", ref attribute } if attribute == "colour"
        ));
    }

    #[test]
    fn unknown_attribute_is_reported_even_when_other_side_decides() {
        let d = dso(Some(6.0));
        let expr = Dso::attr("magnitude").lt(10) | Dso::attr("bogus").is_null();
        assert!(expr.evaluate(&d).is_err());
    }

    #[test]
    fn ordering_text_against_number_is_type_mismatch() {
        let d = dso(Some(6.0));
        let err = Dso::attr("name").lt(5).evaluate(&d).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
        assert!(!Dso::attr("name").equals(5).evaluate(&d).unwrap());
        assert!(Dso::attr("name").not_equals(5).evaluate(&d).unwrap());
    }

    #[test]
    fn evaluation_is_repeatable() {
        let d = dso(Some(7.5));
        let expr = Dso::attr("magnitude").is_null() | Dso::attr("magnitude").le(8);
        let first = expr.evaluate(&d).unwrap();
        let second = expr.evaluate(&d).unwrap();
        assert_eq!(first, second);
        assert_eq!(d.magnitude, Some(7.5));
    }

    #[test]
    fn evaluate_all_is_conjunction_and_empty_is_true() {
        let d = dso(Some(7.5));
        assert!(evaluate_all::<Dso>(&[], &d).unwrap());
        let exprs = vec![Dso::attr("magnitude").le(8), Dso::attr("size").gt(0.1)];
        assert!(evaluate_all(&exprs, &d).unwrap());
        let exprs = vec![Dso::attr("magnitude").le(8), Dso::attr("size").gt(1.0)];
        assert!(!evaluate_all(&exprs, &d).unwrap());
    }

    #[test]
    fn find_keeps_input_order() {
        let stars = vec![
            Star::new("Sirius", -1.46, 6.75, -16.7),
            Star::new("Vega", 0.03, 18.6, 38.8),
            Star::new("Castor", 1.58, 7.58, 31.9),
            Star::new("Polaris", 1.98, 2.53, 89.3),
        ];
        let found = find(
            stars,
            &[Star::attr("name").is_in(["Castor", "Sirius", "Vega"])],
        )
        .unwrap();
        let names: Vec<_> = found.iter().filter_map(|s| s.name.as_deref()).collect();
        assert_eq!(names, vec!["Sirius", "Vega", "Castor"]);
    }

    #[test]
    fn display_renders_tree() {
        let expr = Dso::attr("magnitude").is_null() | Dso::attr("magnitude").le(8.0);
        assert_eq!(expr.to_string(), "(magnitude is null | magnitude <= 8)");
    }
}
