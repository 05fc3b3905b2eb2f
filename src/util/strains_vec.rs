use std::{iter::Copied, slice::Iter};

/// Per-section strain peaks of a skill.
#[derive(Clone, Debug, Default)]
pub struct StrainsVec {
    inner: Vec<f64>,
}

impl StrainsVec {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn push(&mut self, value: f64) {
        self.inner.push(value);
    }

    pub fn sort_desc(&mut self) {
        self.inner.sort_by(|a, b| b.total_cmp(a));
    }

    pub fn retain_non_zero(&mut self) {
        self.inner.retain(|&a| a > 0.0);
    }

    pub fn retain_non_zero_and_sort(&mut self) {
        self.retain_non_zero();
        self.sort_desc();
    }

    pub fn iter(&self) -> Copied<Iter<'_, f64>> {
        self.inner.iter().copied()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.inner
    }
}

impl From<Vec<f64>> for StrainsVec {
    fn from(inner: Vec<f64>) -> Self {
        Self { inner }
    }
}
