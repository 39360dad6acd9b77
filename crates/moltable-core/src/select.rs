//! Predicate helpers for building atom index selections.
//!
//! Editor layers filter atoms by per-atom attribute arrays (tags,
//! residue numbers, element symbols, ...) and feed the matching indices
//! into the `subset` operations. The comparison vocabulary lives here as
//! plain enums and closures rather than stateful condition objects.

/// Comparison applied to numeric per-atom attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl NumericOp {
    pub fn matches(self, value: i64, rhs: i64) -> bool {
        match self {
            Self::Eq => value == rhs,
            Self::Ne => value != rhs,
            Self::Gt => value > rhs,
            Self::Ge => value >= rhs,
            Self::Lt => value < rhs,
            Self::Le => value <= rhs,
        }
    }
}

/// Comparison applied to textual per-atom attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextOp {
    Eq,
    Ne,
    /// Substring containment, e.g. matching "C" against "CA".
    Contains,
}

impl TextOp {
    pub fn matches(self, value: &str, rhs: &str) -> bool {
        match self {
            Self::Eq => value == rhs,
            Self::Ne => value != rhs,
            Self::Contains => value.contains(rhs),
        }
    }
}

/// Collects the indices of all values satisfying the predicate, in
/// order, ready to be handed to a `subset` call.
pub fn matching_indices<T>(values: &[T], predicate: impl Fn(&T) -> bool) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, value)| predicate(value))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ops_compare_as_named() {
        assert!(NumericOp::Eq.matches(3, 3));
        assert!(NumericOp::Ne.matches(3, 4));
        assert!(NumericOp::Gt.matches(4, 3));
        assert!(!NumericOp::Gt.matches(3, 3));
        assert!(NumericOp::Ge.matches(3, 3));
        assert!(NumericOp::Lt.matches(-1, 0));
        assert!(NumericOp::Le.matches(0, 0));
    }

    #[test]
    fn text_ops_compare_as_named() {
        assert!(TextOp::Eq.matches("CA", "CA"));
        assert!(TextOp::Ne.matches("CA", "CB"));
        assert!(TextOp::Contains.matches("CA", "C"));
        assert!(!TextOp::Contains.matches("N", "C"));
    }

    #[test]
    fn matching_indices_collects_in_order() {
        let tags = [0, 2, 1, 2, 2];
        let selected = matching_indices(&tags, |&tag| NumericOp::Eq.matches(tag, 2));
        assert_eq!(selected, vec![1, 3, 4]);
    }

    #[test]
    fn matching_indices_on_names() {
        let elements = ["C", "H", "C", "N"];
        let carbons = matching_indices(&elements, |name| TextOp::Eq.matches(name, "C"));
        assert_eq!(carbons, vec![0, 2]);
    }

    #[test]
    fn matching_indices_with_no_hits_is_empty() {
        let tags: [i64; 3] = [1, 2, 3];
        assert!(matching_indices(&tags, |&t| NumericOp::Gt.matches(t, 10)).is_empty());
    }
}
