/// Accumulated rating per candidate, indexed like the candidate slice.
///
/// Rebuilt for every decision; never shared between decisions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ratings {
    values: Vec<i64>,
}

impl Ratings {
    pub fn new(len: usize) -> Self {
        Self {
            values: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> i64 {
        self.values[index]
    }

    pub fn credit(&mut self, index: usize, weight: u32) {
        self.values[index] += i64::from(weight);
    }

    pub fn debit(&mut self, index: usize, weight: u32) {
        self.values[index] -= i64::from(weight);
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<i64> {
        self.values
    }

    /// Indices of every candidate sharing the maximum rating, in input order.
    pub fn best_options(&self) -> Vec<usize> {
        let Some(max) = self.values.iter().copied().max() else {
            return Vec::new();
        };

        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &rating)| rating == max)
            .map(|(index, _)| index)
            .collect()
    }
}
