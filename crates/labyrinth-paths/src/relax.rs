use labyrinth_core::{Grid, MazeError, Point};

use crate::potential::{Potential, PotentialField};

impl PotentialField {
    /// Compute the field by sweeping the whole grid until a full pass
    /// changes nothing.
    ///
    /// Every labelled cell offers `d + 1` to its open axis neighbours, which
    /// keep the smaller of that and their current label. This is the
    /// reference for [`PotentialField::new`] and costs `O(V)` per pass.
    ///
    /// `max_passes` bounds the number of sweeps; `None` allows one per cell,
    /// which is always enough. Exceeding it yields
    /// [`MazeError::BudgetExhausted`].
    pub fn relax_full_scan(
        grid: &Grid,
        target: Point,
        max_passes: Option<u64>,
    ) -> Result<Self, MazeError> {
        let mut field = Self::seeded(grid, target)?;
        let budget = max_passes.unwrap_or(field.values.len() as u64 + 1);
        let mut passes = 0u64;

        loop {
            if passes >= budget {
                log::warn!("relaxation toward {target} did not settle in {passes} passes");
                return Err(MazeError::BudgetExhausted { steps: passes });
            }
            passes += 1;
            if !field.sweep() {
                break;
            }
        }

        log::debug!("relaxation toward {target} settled after {passes} passes");
        Ok(field)
    }

    /// One row-major pass. Returns whether any label changed.
    fn sweep(&mut self) -> bool {
        let mut changed = false;
        for i in 0..self.values.len() {
            let Potential::Distance(d) = self.values[i] else {
                continue;
            };
            let offer = d + 1;
            for n in self.point(i).neighbors_4() {
                let Some(ni) = self.idx(n) else {
                    continue;
                };
                let better = match self.values[ni] {
                    Potential::Wall => false,
                    Potential::Unvisited => true,
                    Potential::Distance(e) => e > offer,
                };
                if better {
                    self.values[ni] = Potential::Distance(offer);
                    changed = true;
                }
            }
        }
        changed
    }
}
