use crate::*;

/// Exact row reduction for linear indifference systems.
///
/// Linear systems arise whenever at most two players mix. The reduced
/// row echelon form either exposes an inconsistent row (no solution) or
/// expresses every pivot unknown through the free unknowns, which are
/// returned as themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gaussian;

impl Solve for Gaussian {
    fn solve(&self, system: &System) -> anyhow::Result<Vec<Solution>> {
        anyhow::ensure!(
            system.degree() <= 1,
            "row reduction needs a linear system, got degree {}",
            system.degree()
        );
        let n = system.n();
        let rows = system
            .equations()
            .iter()
            .map(|e| {
                let mut row = vec![0.; n];
                for (monomial, c) in e.monomials() {
                    if let [i] = monomial {
                        row[*i] += c;
                    }
                }
                (row, -e.constant())
            })
            .collect::<Vec<_>>();
        let (a, b): (Vec<Vec<f64>>, Vec<f64>) = rows.into_iter().unzip();
        let reduced = Reduced::from((a, b));
        if reduced.inconsistent {
            log::trace!("inconsistent linear system over {:?}", system.vars());
            return Ok(vec![]);
        }
        Ok(vec![reduced.solution(system.vars())])
    }
}

/// Reduced row echelon form of `a · x = b` with partial pivoting.
#[derive(Debug, Clone)]
pub struct Reduced {
    pub a: Vec<Vec<f64>>,
    pub b: Vec<f64>,
    pub pivots: Vec<(usize, usize)>,
    pub inconsistent: bool,
    epsilon: f64,
}

impl From<(Vec<Vec<f64>>, Vec<f64>)> for Reduced {
    fn from((mut a, mut b): (Vec<Vec<f64>>, Vec<f64>)) -> Self {
        let m = a.len();
        let n = a.first().map(Vec::len).unwrap_or_default();
        let scale = a
            .iter()
            .flatten()
            .chain(b.iter())
            .fold(1f64, |s, x| s.max(x.abs()));
        let epsilon = PIVOT_EPSILON * scale;
        let mut pivots = Vec::new();
        let mut r = 0;
        for c in 0..n {
            if r == m {
                break;
            }
            let best = (r..m)
                .max_by(|i, j| a[*i][c].abs().total_cmp(&a[*j][c].abs()))
                .unwrap_or(r);
            if a[best][c].abs() < epsilon {
                (r..m).for_each(|i| a[i][c] = 0.);
                continue;
            }
            a.swap(r, best);
            b.swap(r, best);
            let pivot = a[r][c];
            a[r].iter_mut().for_each(|x| *x /= pivot);
            b[r] /= pivot;
            for i in (0..m).filter(|i| *i != r) {
                let factor = a[i][c];
                if factor == 0. {
                    continue;
                }
                for j in 0..n {
                    a[i][j] -= factor * a[r][j];
                }
                b[i] -= factor * b[r];
                a[i][c] = 0.;
            }
            pivots.push((r, c));
            r += 1;
        }
        let inconsistent = (r..m).any(|i| b[i].abs() > epsilon);
        Self {
            a,
            b,
            pivots,
            inconsistent,
            epsilon,
        }
    }
}

impl Reduced {
    /// Rank of the coefficient matrix.
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }
    /// Columns without a pivot.
    pub fn free(&self) -> impl Iterator<Item = usize> + '_ {
        let n = self.a.first().map(Vec::len).unwrap_or_default();
        (0..n).filter(|c| self.pivots.iter().all(|(_, p)| p != c))
    }
    /// Pivot unknowns as expressions in the free unknowns, which map to
    /// themselves. Coefficients below the pivot threshold are dropped.
    pub fn solution(&self, vars: &[Var]) -> Solution {
        let mut solution = Solution::new();
        for &(row, col) in self.pivots.iter() {
            let terms = self
                .free()
                .map(|f| (vars[f], -self.a[row][f]))
                .filter(|(_, c)| c.abs() > self.epsilon);
            solution.insert(vars[col], Affine::new(self.b[row], terms));
        }
        for f in self.free() {
            solution.insert(vars[f], Affine::from(vars[f]));
        }
        solution
    }
    /// Unique solution of a full-rank square system.
    pub fn unique(&self) -> Option<Vec<f64>> {
        let n = self.a.first().map(Vec::len).unwrap_or_default();
        if self.inconsistent || self.rank() < n {
            return None;
        }
        let mut x = vec![0.; n];
        for &(row, col) in self.pivots.iter() {
            x[col] = self.b[row];
        }
        Some(x)
    }
}
