/// Flattening of arbitrarily nested lists
use serde_json::Value;

use crate::error::{Result, UtilError};

/// A value or a list of nested values
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn is_list(&self) -> bool {
        matches!(self, Nested::List(_))
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Nested::List(items)
    }
}

/// Build a `Vec<Nested<T>>` from a bracketed literal.
///
/// `nested![1, [2, [-3]], 4 * 2]` nests the inner brackets as lists; any other
/// expression is a leaf. A leaf that is itself an array expression must be
/// wrapped in parentheses, e.g. `nested![([1, 2])]`.
#[macro_export]
macro_rules! nested {
    (@acc [$($out:expr),*]) => {
        vec![$($out),*]
    };
    (@acc [$($out:expr),*] [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::nested!(@acc [
            $($out,)*
            $crate::utils::flatten::Nested::List($crate::nested![$($inner)*])
        ] $($($rest)*)?)
    };
    (@acc [$($out:expr),*] $leaf:expr $(, $($rest:tt)*)?) => {
        $crate::nested!(@acc [
            $($out,)*
            $crate::utils::flatten::Nested::Leaf($leaf)
        ] $($($rest)*)?)
    };
    ($($tokens:tt)*) => {
        $crate::nested!(@acc [] $($tokens)*)
    };
}

/// Flatten with an explicit work list, in left-to-right depth-first order
pub fn flatten<T>(items: Vec<Nested<T>>) -> Vec<T> {
    let mut result = Vec::new();
    let mut pending = vec![items.into_iter()];

    while let Some(level) = pending.last_mut() {
        match level.next() {
            Some(Nested::Leaf(value)) => result.push(value),
            Some(Nested::List(inner)) => pending.push(inner.into_iter()),
            None => {
                pending.pop();
            }
        }
    }

    result
}

/// Flatten by descending recursively and concatenating the results
pub fn flatten_recursive<T>(items: Vec<Nested<T>>) -> Vec<T> {
    items.into_iter().fold(Vec::new(), |mut acc, item| {
        match item {
            Nested::Leaf(value) => acc.push(value),
            Nested::List(inner) => acc.extend(flatten_recursive(inner)),
        }
        acc
    })
}

/// Flatten by expanding one nesting level per pass until none remain
pub fn flatten_by_levels<T>(mut items: Vec<Nested<T>>) -> Vec<T> {
    while items.iter().any(Nested::is_list) {
        items = items
            .into_iter()
            .flat_map(|item| match item {
                Nested::List(inner) => inner,
                leaf => vec![leaf],
            })
            .collect();
    }

    items
        .into_iter()
        .filter_map(|item| match item {
            Nested::Leaf(value) => Some(value),
            Nested::List(_) => None,
        })
        .collect()
}

/// Flatten a JSON array, treating every nested array as a list
pub fn flatten_value(value: &Value) -> Result<Vec<Value>> {
    let Value::Array(items) = value else {
        return Err(UtilError::InvalidArgument(format!(
            "expected an array to flatten, got {}",
            crate::error::json_type_name(value)
        )));
    };

    let mut result = Vec::new();
    let mut pending = vec![items.iter()];

    while let Some(level) = pending.last_mut() {
        match level.next() {
            Some(Value::Array(inner)) => pending.push(inner.iter()),
            Some(leaf) => result.push(leaf.clone()),
            None => {
                pending.pop();
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    type Strategy = fn(Vec<Nested<i32>>) -> Vec<i32>;

    fn strategies() -> [Strategy; 3] {
        [flatten, flatten_recursive, flatten_by_levels]
    }

    #[test]
    fn test_nested_macro() {
        let items: Vec<Nested<i32>> = nested![1, [2, [3]]];

        assert_eq!(
            items,
            vec![
                Nested::Leaf(1),
                Nested::List(vec![Nested::Leaf(2), Nested::List(vec![Nested::Leaf(3)])]),
            ]
        );
    }

    #[test]
    fn test_nested_macro_expression_leaves() {
        let items: Vec<Nested<i32>> = nested![-1, [2 + 3, [-4]], (6), 7,];

        assert_eq!(
            items,
            vec![
                Nested::Leaf(-1),
                Nested::List(vec![Nested::Leaf(5), Nested::List(vec![Nested::Leaf(-4)])]),
                Nested::Leaf(6),
                Nested::Leaf(7),
            ]
        );
        assert_eq!(flatten(items), vec![-1, 5, -4, 6, 7]);
    }

    #[test]
    fn test_nested_macro_array_leaf() {
        let items: Vec<Nested<[i32; 2]>> = nested![([1, 2]), [([3, 4])]];

        assert_eq!(flatten(items), vec![[1, 2], [3, 4]]);
    }

    #[test]
    fn test_flatten_scenario() {
        for strategy in strategies() {
            assert_eq!(strategy(nested![1, [2, [3, [4]], 5]]), vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_flatten_empty() {
        for strategy in strategies() {
            assert_eq!(strategy(vec![]), Vec::<i32>::new());
            assert_eq!(strategy(nested![[], [[]], [[], []]]), Vec::<i32>::new());
        }
    }

    #[test]
    fn test_flatten_already_flat() {
        for strategy in strategies() {
            assert_eq!(strategy(nested![1, 2, 3]), vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_flatten_deep_leading_nesting() {
        for strategy in strategies() {
            assert_eq!(strategy(nested![[[[[1]]], 2], [], 3]), vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let once = flatten(nested![1, [2, [3, [4]], 5], [[6]]]);
        let twice = flatten(once.iter().copied().map(Nested::Leaf).collect());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_flatten_value() {
        let flat = flatten_value(&json!([1, [2, [3, [4]], 5]])).unwrap();
        assert_eq!(flat, vec![json!(1), json!(2), json!(3), json!(4), json!(5)]);
    }

    #[test]
    fn test_flatten_value_keeps_objects_as_leaves() {
        let flat = flatten_value(&json!([{"a": [1, 2]}, ["x", []], null])).unwrap();

        assert_eq!(flat, vec![json!({"a": [1, 2]}), json!("x"), json!(null)]);
        assert!(!flat.iter().any(Value::is_array));
    }

    #[test]
    fn test_flatten_value_is_idempotent() {
        let once = flatten_value(&json!([[1, [2]], [[3]]])).unwrap();
        let twice = flatten_value(&Value::Array(once.clone())).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_flatten_value_rejects_non_array() {
        assert!(matches!(
            flatten_value(&json!({"a": 1})),
            Err(UtilError::InvalidArgument(_))
        ));
    }
}
