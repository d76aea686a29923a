use std::cmp::Ordering;
use std::fmt;

/// A recorded evaluation result.
///
/// Plain evaluation produces a [`Value::Scalar`]. Constrained evaluation
/// produces a [`Value::Constrained`] pair of the objective and the constraint
/// indicator, compared lexicographically.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Objective value of an unconstrained evaluation.
    Scalar(f64),

    /// Objective and constraint values of a constrained evaluation.
    Constrained { objective: f64, constraint: f64 },
}

impl Value {
    /// Returns the objective component.
    #[must_use]
    pub fn objective(&self) -> f64 {
        match *self {
            Self::Scalar(v) => v,
            Self::Constrained { objective, .. } => objective,
        }
    }

    /// Returns the constraint component, if this is a constrained value.
    #[must_use]
    pub fn constraint(&self) -> Option<f64> {
        match *self {
            Self::Scalar(_) => None,
            Self::Constrained { constraint, .. } => Some(constraint),
        }
    }

    /// Returns a copy with the objective component replaced.
    ///
    /// The constraint component, if any, is kept as is.
    #[must_use]
    pub fn with_objective(self, objective: f64) -> Self {
        match self {
            Self::Scalar(_) => Self::Scalar(objective),
            Self::Constrained { constraint, .. } => Self::Constrained {
                objective,
                constraint,
            },
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<[f64; 2]> for Value {
    fn from([objective, constraint]: [f64; 2]) -> Self {
        Self::Constrained {
            objective,
            constraint,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => a.partial_cmp(b),
            (
                Self::Constrained {
                    objective: a,
                    constraint: ac,
                },
                Self::Constrained {
                    objective: b,
                    constraint: bc,
                },
            ) => match a.partial_cmp(b)? {
                Ordering::Equal => ac.partial_cmp(bc),
                ord => Some(ord),
            },
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(v) => write!(f, "{v}"),
            Self::Constrained {
                objective,
                constraint,
            } => write!(f, "[{objective}, {constraint}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_compare_numerically() {
        assert!(Value::Scalar(1.0) < Value::Scalar(2.0));
        assert!(Value::Scalar(f64::NAN).partial_cmp(&Value::Scalar(0.0)).is_none());
    }

    #[test]
    fn pairs_compare_lexicographically() {
        let a = Value::from([1.0, 5.0]);
        let b = Value::from([1.0, 6.0]);
        let c = Value::from([0.5, 9.0]);

        assert!(a < b);
        assert!(c < a);
    }

    #[test]
    fn scalar_and_pair_are_incomparable() {
        let scalar = Value::Scalar(0.0);
        let pair = Value::from([1.0, 1.0]);

        assert!(scalar.partial_cmp(&pair).is_none());
        assert!(!scalar.lt(&pair));
        assert!(!pair.lt(&scalar));
    }

    #[test]
    fn with_objective_keeps_constraint() {
        let pair = Value::from([3.0, -1.0]).with_objective(2.0);
        assert_eq!(pair, Value::from([2.0, -1.0]));
        assert_eq!(Value::Scalar(3.0).with_objective(2.0), Value::Scalar(2.0));
    }

    #[test]
    fn displays_like_a_number_or_pair() {
        assert_eq!(Value::Scalar(3.0).to_string(), "3");
        assert_eq!(Value::Scalar(0.5).to_string(), "0.5");
        assert_eq!(Value::from([3.0, 1.5]).to_string(), "[3, 1.5]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_variant_tags() {
        let json = serde_json::to_string(&Value::Scalar(1.5)).unwrap();
        assert_eq!(json, r#"{"Scalar":1.5}"#);

        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Value::Scalar(1.5));
    }
}
