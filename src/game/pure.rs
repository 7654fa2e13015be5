use crate::*;

impl Game {
    /// Every pure action profile that is a Nash equilibrium.
    ///
    /// Exhaustive over the full action space; dominated actions are not
    /// pruned.
    pub fn find_pure(&self) -> Vec<Vec<usize>> {
        self.shape()
            .indices()
            .filter(|actions| self.stable(&Profile::pure(actions, self.shape())))
            .inspect(|actions| log::debug!("pure equilibrium {:?}", actions))
            .collect()
    }
}
