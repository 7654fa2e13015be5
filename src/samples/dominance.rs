use super::at_least;
use super::exactly;
use crate::*;

const TADELIS: [[[Utility; 2]; 3]; 3] = [
    [[4., 3.], [5., 1.], [6., 2.]],
    [[2., 1.], [8., 4.], [3., 6.]],
    [[3., 0.], [9., 6.], [2., 8.]],
];

const COMBO: [[[Utility; 2]; 3]; 3] = [
    [[5., 1.], [1., 4.], [1., 0.]],
    [[3., 2.], [0., 0.], [3., 5.]],
    [[4., 3.], [4., 4.], [0., 3.]],
];

/// A 3×3 game that iterated single dominance solves, extended with players
/// who have two actions and strictly prefer action 0.
pub fn reducible(n: usize) -> anyhow::Result<Payoffs> {
    at_least("reducible", n, 2)?;
    let actions = [3, 3].into_iter().chain(std::iter::repeat_n(2, n - 2)).collect();
    Payoffs::from_fn(actions, |a| {
        let head = TADELIS[a[0]][a[1]];
        head.into_iter()
            .chain(a[2..].iter().map(|x| (*x == 0) as usize as Utility))
            .collect()
    })
}

/// A 3×3 game where one column is dominated only by a mix of the other two.
pub fn combo_reducible(n: usize) -> anyhow::Result<Payoffs> {
    exactly("combo reducible", n, 2)?;
    Payoffs::from_fn(vec![3, 3], |a| COMBO[a[0]][a[1]].to_vec())
}

/// A zero-sum game where the row player's last action is dominated only by
/// a mix of all `m` others.
pub fn mixed_dom(n: usize, m: usize) -> anyhow::Result<Payoffs> {
    exactly("mixed domination", n, 2)?;
    anyhow::ensure!(m > 0, "mixed domination needs m > 0");
    let big = (m + 1) as Utility;
    Payoffs::from_fn(vec![m + 1, m], |a| match (a[0], a[1]) {
        (r, c) if r == c => vec![big, -big],
        (r, _) if r == m => vec![1., -1.],
        _ => vec![0., 0.],
    })
}

/// Action 0 cooperates, action 1 defects. Universal cooperation pays −1
/// each; a lone defector takes 0; several defectors take −3; cooperators
/// facing any defection take −5.
pub fn prisoners_dilemma(n: usize) -> anyhow::Result<Payoffs> {
    at_least("prisoner's dilemma", n, 2)?;
    Payoffs::from_fn(vec![2; n], |a| {
        let defectors = a.iter().sum::<usize>();
        a.iter()
            .map(|x| match (defectors, *x) {
                (0, _) => -1.,
                (1, 1) => 0.,
                (_, 1) => -3.,
                (_, _) => -5.,
            })
            .collect()
    })
}
