/// Every nonempty subset of `0..n`, by size then lexicographically.
pub fn subsets(n: usize) -> Vec<Vec<usize>> {
    (1..=n).flat_map(|k| combinations(n, k)).collect()
}

/// Every `k`-element subset of `0..n` in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut all = Vec::new();
    let mut pick = (0..k).collect::<Vec<usize>>();
    loop {
        all.push(pick.clone());
        match (0..k).rev().find(|&i| pick[i] < n - k + i) {
            None => break,
            Some(i) => {
                pick[i] += 1;
                for j in i + 1..k {
                    pick[j] = pick[j - 1] + 1;
                }
            }
        }
    }
    all
}
