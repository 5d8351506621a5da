/// Round-robin value sources
use crate::error::{Result, UtilError};

/// Yields a fixed list of values in order, wrapping back to the first forever
#[derive(Debug, Clone)]
pub struct Cycle<T> {
    values: Vec<T>,
    cursor: usize,
}

impl<T> Cycle<T> {
    /// Create a cycle over `values`, which must not be empty
    pub fn new(values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            tracing::debug!("Rejected cycle with no values");
            return Err(UtilError::InvalidArgument(
                "cycle requires at least one value".to_string(),
            ));
        }

        Ok(Self { values, cursor: 0 })
    }

    /// Return the current value and advance the cursor
    pub fn next_value(&mut self) -> &T {
        let index = self.cursor;
        self.cursor = (self.cursor + 1) % self.values.len();
        &self.values[index]
    }

    /// Index of the value the next call will return
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of distinct positions in the cycle
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: a cycle cannot be built without values
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Rewind to the first value
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl<T: Clone> Iterator for Cycle<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.next_value().clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Build a zero-argument generator that returns `values` round-robin
pub fn cycle<T: Clone>(values: Vec<T>) -> Result<impl FnMut() -> T> {
    let mut source = Cycle::new(values)?;
    Ok(move || source.next_value().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        let mut hello = cycle(vec!["hello"]).unwrap();

        assert_eq!(hello(), "hello");
        assert_eq!(hello(), "hello");
    }

    #[test]
    fn test_two_values() {
        let mut on_off = cycle(vec!["on", "off"]).unwrap();

        assert_eq!(on_off(), "on");
        assert_eq!(on_off(), "off");
        assert_eq!(on_off(), "on");
    }

    #[test]
    fn test_empty_is_rejected() {
        assert!(matches!(
            Cycle::<i32>::new(vec![]),
            Err(UtilError::InvalidArgument(_))
        ));
        assert!(cycle::<i32>(vec![]).is_err());
    }

    #[test]
    fn test_wraps_modulo_length() {
        let values = vec![10, 20, 30];

        for k in 0..4 {
            for j in 0..values.len() {
                let mut source = Cycle::new(values.clone()).unwrap();
                let calls = values.len() * k + j + 1;
                let last = (0..calls).map(|_| *source.next_value()).last();

                assert_eq!(last, Some(values[j]));
            }
        }
    }

    #[test]
    fn test_position_and_reset() {
        let mut source = Cycle::new(vec!['a', 'b', 'c']).unwrap();
        assert_eq!(source.position(), 0);
        assert_eq!(source.len(), 3);

        source.next_value();
        source.next_value();
        assert_eq!(source.position(), 2);

        source.next_value();
        assert_eq!(source.position(), 0);

        source.next_value();
        source.reset();
        assert_eq!(source.next_value(), &'a');
    }

    #[test]
    fn test_iterator() {
        let source = Cycle::new(vec![1, 2]).unwrap();
        let taken: Vec<i32> = source.take(5).collect();

        assert_eq!(taken, vec![1, 2, 1, 2, 1]);
    }
}
