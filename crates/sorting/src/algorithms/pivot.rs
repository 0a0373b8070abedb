use super::common;

/// How quicksort chooses the partitioning element of `[lo, hi]`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum PivotStrategy {
    /// `lo`.
    #[default]
    First,
    /// `floor((lo + hi) / 2)`.
    Average,
    /// Median of the keys at `lo`, `hi` and the midpoint; each key comparison
    /// counts as an operation.
    MedianOfThree,
}

pub const ALL_PIVOTS: [PivotStrategy; 3] = [
    PivotStrategy::First,
    PivotStrategy::Average,
    PivotStrategy::MedianOfThree,
];

pub fn pivot_name(pivot: PivotStrategy) -> &'static str {
    match pivot {
        PivotStrategy::First => "first",
        PivotStrategy::Average => "average",
        PivotStrategy::MedianOfThree => "median3",
    }
}

impl PivotStrategy {
    /// Returns the pivot index and the operations spent choosing it.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or `hi` is out of bounds.
    pub fn select(self, data: &[i32], lo: usize, hi: usize) -> (usize, u64) {
        common::assert_range(data, lo, hi);
        match self {
            PivotStrategy::First => (lo, 0),
            PivotStrategy::Average => (lo + (hi - lo) / 2, 0),
            PivotStrategy::MedianOfThree => median_of_three(data, lo, hi),
        }
    }
}

fn median_of_three(data: &[i32], lo: usize, hi: usize) -> (usize, u64) {
    let mid = lo + (hi - lo) / 2;
    let (e1, e2, e3) = (data[lo], data[hi], data[mid]);

    if e1 < e2 {
        if e2 <= e3 {
            (hi, 2)
        } else if e1 < e3 {
            (mid, 3)
        } else {
            (lo, 3)
        }
    } else if e2 >= e3 {
        (hi, 2)
    } else if e1 > e3 {
        (mid, 3)
    } else {
        (lo, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_average_are_free() {
        let data = [4, 8, 1, 9, 3];
        assert_eq!(PivotStrategy::First.select(&data, 1, 4), (1, 0));
        assert_eq!(PivotStrategy::Average.select(&data, 0, 4), (2, 0));
        assert_eq!(PivotStrategy::Average.select(&data, 1, 4), (2, 0));
        assert_eq!(PivotStrategy::Average.select(&data, 3, 3), (3, 0));
    }

    #[test]
    fn median_of_three_decision_table() {
        // Layout is [lo, mid, hi] so e1 = data[0], e3 = data[1], e2 = data[2].
        let cases = [
            // e1 < e2
            ([1, 5, 3], (2, 2)), // e2 <= e3
            ([1, 3, 3], (2, 2)), // e2 == e3 picks hi
            ([1, 2, 3], (1, 3)), // e1 < e3 < e2
            ([2, 1, 3], (0, 3)), // e3 <= e1
            ([2, 2, 3], (0, 3)), // e3 == e1 picks lo
            // e1 >= e2
            ([3, 1, 2], (2, 2)), // e2 >= e3
            ([3, 2, 2], (2, 2)), // e2 == e3 picks hi
            ([3, 2, 1], (1, 3)), // e1 > e3 > e2
            ([2, 3, 1], (0, 3)), // e3 >= e1
            ([2, 2, 2], (2, 2)), // all equal
        ];
        for (data, expected) in cases {
            assert_eq!(
                PivotStrategy::MedianOfThree.select(&data, 0, 2),
                expected,
                "data={data:?}"
            );
        }
    }

    #[test]
    fn median_of_three_on_two_elements() {
        // mid == lo, so e3 == e1 and distinct keys always fall through to lo.
        let data = [5, 1];
        assert_eq!(PivotStrategy::MedianOfThree.select(&data, 0, 1), (0, 3));
        let data = [1, 5];
        assert_eq!(PivotStrategy::MedianOfThree.select(&data, 0, 1), (0, 3));
        let data = [4, 4];
        assert_eq!(PivotStrategy::MedianOfThree.select(&data, 0, 1), (1, 2));
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = ALL_PIVOTS.iter().map(|&p| pivot_name(p)).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL_PIVOTS.len());
    }
}
