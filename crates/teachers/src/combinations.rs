/// Lexicographic `K`-combinations of `0..n`.
///
/// Yields the same order as `K` nested ascending loops, so strict-`<`
/// selection keeps the lowest combination on ties.
pub(crate) struct Combinations<const K: usize> {
    n: usize,
    next: Option<[usize; K]>,
}

impl<const K: usize> Combinations<K> {
    pub(crate) fn new(n: usize) -> Self {
        let next = (K <= n).then(|| std::array::from_fn(|i| i));
        Self { n, next }
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<[usize; K]> {
        let current = self.next?;

        // Rightmost position that can still move right.
        let pivot = (0..K).rev().find(|&i| current[i] < self.n - K + i);
        self.next = pivot.map(|i| {
            let mut advanced = current;
            advanced[i] += 1;
            for j in i + 1..K {
                advanced[j] = advanced[j - 1] + 1;
            }
            advanced
        });

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_in_nested_loop_order() {
        let pairs: Vec<[usize; 2]> = Combinations::new(4).collect();
        assert_eq!(
            pairs,
            vec![[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]]
        );
    }

    #[test]
    fn counts_triples() {
        assert_eq!(Combinations::<3>::new(6).count(), 20);
    }

    #[test]
    fn too_few_items_yield_nothing() {
        assert_eq!(Combinations::<3>::new(2).count(), 0);
        assert_eq!(Combinations::<2>::new(2).count(), 1);
    }
}
