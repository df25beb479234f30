/// Conditional probability that the next draw hits a target card, for every
/// (successes, failures) state reachable within `max_draws` draws from a deck
/// holding `targets` target cards.
///
/// States that cannot occur (more successes than targets, more failures than
/// non-targets, or an exhausted deck) are stored as `None`, never as a number.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawChanceTable {
    deck_size: usize,
    targets: usize,
    max_draws: usize,
    chances: Vec<Option<f64>>,
}

impl DrawChanceTable {
    /// # Examples
    ///
    /// ```
    /// use carddraw_engine::draw_chance::DrawChanceTable;
    ///
    /// let table = DrawChanceTable::build(60, 4, 7);
    /// assert_eq!(table.chance(0, 0), Some(4.0 / 60.0));
    /// assert_eq!(table.chance(5, 0), None);
    /// ```
    pub fn build(deck_size: usize, targets: usize, max_draws: usize) -> Self {
        let side = max_draws + 1;
        let mut chances = Vec::with_capacity(side * side);
        for successes in 0..side {
            for failures in 0..side {
                chances.push(instantaneous_chance(
                    deck_size, targets, successes, failures,
                ));
            }
        }
        Self {
            deck_size,
            targets,
            max_draws,
            chances,
        }
    }

    /// Chance of a success on the next draw, `None` if the state is unreachable
    /// or lies outside the tabulated range.
    pub fn chance(&self, successes: usize, failures: usize) -> Option<f64> {
        if successes > self.max_draws || failures > self.max_draws {
            return None;
        }
        self.chances[successes * (self.max_draws + 1) + failures]
    }

    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    pub fn targets(&self) -> usize {
        self.targets
    }

    pub fn max_draws(&self) -> usize {
        self.max_draws
    }
}

fn instantaneous_chance(
    deck_size: usize,
    targets: usize,
    successes: usize,
    failures: usize,
) -> Option<f64> {
    if successes > targets || failures > deck_size.saturating_sub(targets) {
        return None;
    }
    let remaining = deck_size - successes - failures;
    if remaining == 0 {
        return None;
    }
    Some((targets - successes) as f64 / remaining as f64)
}
