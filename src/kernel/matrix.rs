//! Kernel matrix assembly.
//!
//! Only the upper triangle (including the diagonal) is evaluated; the lower
//! triangle is mirrored from it, so the result is exactly symmetric. The
//! diagonal is evaluated like any other entry, because noise can perturb a
//! self-comparison too.
//!
//! Every pair `(i, j)` with `i <= j` gets its own RNG seeded with
//! `base_seed ^ (i * m + j)`. Pair results therefore do not depend on
//! evaluation order, which is what lets the `parallel` feature fan the pairs
//! out over a thread pool without changing a single value.

use super::backend::Simulator;
use super::evaluator::{Evaluation, KernelEvaluator};
use crate::error::{KernelError, Result};
use crate::stats::StatsTracker;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::ops::Index;
use tracing::info;

/// Square, row-major matrix of kernel values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KernelMatrix {
    size: usize,
    values: Vec<f64>,
}

impl KernelMatrix {
    /// An all-zero `size x size` matrix.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    fn set_symmetric(&mut self, i: usize, j: usize, value: f64) {
        self.values[i * self.size + j] = value;
        self.values[j * self.size + i] = value;
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Flat row-major view.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.size).map(|i| self.get(i, i)).collect()
    }

    /// Nested rows, for callers that want a 2D array.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.size).map(|i| self.row(i).to_vec()).collect()
    }

    /// Largest |m[i][j] - m[j][i]|.
    pub fn max_asymmetry(&self) -> f64 {
        let mut worst = 0.0f64;
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                worst = worst.max((self.get(i, j) - self.get(j, i)).abs());
            }
        }
        worst
    }

    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        self.max_asymmetry() <= tolerance
    }
}

impl Index<(usize, usize)> for KernelMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.values[i * self.size + j]
    }
}

/// Seed for pair `(i, j)` of an `m`-row dataset.
pub fn pair_seed(base_seed: u64, i: usize, j: usize, m: usize) -> u64 {
    base_seed ^ (i * m + j) as u64
}

/// Pairs `(i, j)` with `i <= j`, row by row.
fn upper_triangle(m: usize) -> Vec<(usize, usize)> {
    (0..m).flat_map(|i| (i..m).map(move |j| (i, j))).collect()
}

/// Builds kernel matrices with a borrowed evaluator.
pub struct KernelMatrixBuilder<'a, S: Simulator> {
    evaluator: &'a KernelEvaluator<S>,
}

impl<'a, S: Simulator> KernelMatrixBuilder<'a, S> {
    pub fn new(evaluator: &'a KernelEvaluator<S>) -> Self {
        Self { evaluator }
    }

    fn check_rows<V: AsRef<[f64]>>(&self, data: &[V]) -> Result<()> {
        let expected = self.evaluator.n_qubits();
        for row in data {
            let got = row.as_ref().len();
            if got != expected {
                return Err(KernelError::DimensionMismatch { expected, got });
            }
        }
        Ok(())
    }

    fn evaluate_pair<V: AsRef<[f64]>>(
        &self,
        data: &[V],
        (i, j): (usize, usize),
        base_seed: u64,
    ) -> Result<Evaluation> {
        let mut rng = ChaCha8Rng::seed_from_u64(pair_seed(base_seed, i, j, data.len()));
        self.evaluator
            .evaluate_detached(data[i].as_ref(), data[j].as_ref(), &mut rng)
    }

    /// Assemble the matrix and commit all outcomes to `stats`.
    ///
    /// Rows are checked before anything runs. If any pair fails, the error is
    /// returned and `stats` is left exactly as it was.
    pub fn build<V>(&self, data: &[V], base_seed: u64, stats: &mut StatsTracker) -> Result<KernelMatrix>
    where
        V: AsRef<[f64]> + Sync,
    {
        self.check_rows(data)?;
        let pairs = upper_triangle(data.len());
        let evaluations = self.evaluate_all(data, &pairs, base_seed)?;
        Ok(Self::assemble(data.len(), &pairs, evaluations, stats))
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_all<V>(&self, data: &[V], pairs: &[(usize, usize)], base_seed: u64) -> Result<Vec<Evaluation>>
    where
        V: AsRef<[f64]> + Sync,
    {
        pairs
            .iter()
            .map(|&pair| self.evaluate_pair(data, pair, base_seed))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn evaluate_all<V>(&self, data: &[V], pairs: &[(usize, usize)], base_seed: u64) -> Result<Vec<Evaluation>>
    where
        V: AsRef<[f64]> + Sync,
    {
        use rayon::prelude::*;

        pairs
            .par_iter()
            .map(|&pair| self.evaluate_pair(data, pair, base_seed))
            .collect()
    }

    fn assemble(
        m: usize,
        pairs: &[(usize, usize)],
        evaluations: Vec<Evaluation>,
        stats: &mut StatsTracker,
    ) -> KernelMatrix {
        let mut matrix = KernelMatrix::zeros(m);
        for (&(i, j), evaluation) in pairs.iter().zip(evaluations) {
            matrix.set_symmetric(i, j, evaluation.value);
            stats.record_evaluation(evaluation.outcomes);
        }
        info!(
            rows = m,
            pairs = pairs.len(),
            max_asymmetry = matrix.max_asymmetry(),
            "kernel matrix built"
        );
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KernelConfig;

    fn evaluator(n: usize, error_rate: f64) -> KernelEvaluator {
        KernelEvaluator::new(&KernelConfig::new(n, error_rate, 0.15)).unwrap()
    }

    fn dataset(m: usize, n: usize) -> Vec<Vec<f64>> {
        (0..m)
            .map(|i| (0..n).map(|k| ((i * n + k) as f64 * 0.37).sin() * 3.0).collect())
            .collect()
    }

    #[test]
    fn test_pair_seed_distinct() {
        let seeds: Vec<u64> = upper_triangle(4)
            .into_iter()
            .map(|(i, j)| pair_seed(42, i, j, 4))
            .collect();
        let mut unique = seeds.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), seeds.len());
        assert_eq!(pair_seed(42, 0, 0, 4), 42);
    }

    #[test]
    fn test_noiseless_matrix() {
        let ev = evaluator(4, 0.0);
        let mut stats = StatsTracker::new(4);
        let data = dataset(5, 4);
        let m = KernelMatrixBuilder::new(&ev).build(&data, 7, &mut stats).unwrap();
        assert_eq!(m.size(), 5);
        for d in m.diagonal() {
            assert!((d - 1.0).abs() < 1e-9);
        }
        assert_eq!(m.max_asymmetry(), 0.0);
        assert!(m.as_slice().iter().all(|v| (-1.0..=1.0).contains(v)));
        assert_eq!(stats.evaluations(), 15);
        assert_eq!(stats.summary().corrections_attempted, 0);
    }

    #[test]
    fn test_noisy_matrix_exactly_symmetric() {
        let ev = evaluator(6, 0.1);
        let mut stats = StatsTracker::new(6);
        let data = dataset(6, 6);
        let m = KernelMatrixBuilder::new(&ev).build(&data, 99, &mut stats).unwrap();
        for i in 0..6 {
            for j in 0..6 {
                assert_eq!(m[(i, j)], m[(j, i)]);
            }
        }
    }

    #[test]
    fn test_same_seed_same_matrix() {
        let ev = evaluator(4, 0.1);
        let data = dataset(4, 4);
        let builder = KernelMatrixBuilder::new(&ev);
        let a = builder.build(&data, 5, &mut StatsTracker::new(4)).unwrap();
        let b = builder.build(&data, 5, &mut StatsTracker::new(4)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_bad_row_rejected_before_evaluation() {
        let ev = evaluator(4, 0.1);
        let mut stats = StatsTracker::new(4);
        let mut data = dataset(3, 4);
        data[2].push(0.0);
        let err = KernelMatrixBuilder::new(&ev).build(&data, 1, &mut stats).unwrap_err();
        assert!(matches!(err, KernelError::DimensionMismatch { expected: 4, got: 5 }));
        assert!(stats.history().is_empty());
    }

    #[test]
    fn test_empty_dataset() {
        let ev = evaluator(2, 0.1);
        let data: Vec<Vec<f64>> = Vec::new();
        let m = KernelMatrixBuilder::new(&ev)
            .build(&data, 1, &mut StatsTracker::new(2))
            .unwrap();
        assert_eq!(m.size(), 0);
        assert!(m.to_rows().is_empty());
    }
}
