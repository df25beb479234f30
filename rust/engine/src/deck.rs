use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// A card is either one of the tracked targets or anything else.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Card {
    Target,
    Other,
}

/// A deck of `size` cards, `targets` of them tracked, with a seeded shuffle.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    targets: usize,
    position: usize,
    rng: ChaCha20Rng,
}

fn fresh_cards(size: usize, targets: usize) -> Vec<Card> {
    let mut cards = vec![Card::Other; size];
    for card in cards.iter_mut().take(targets) {
        *card = Card::Target;
    }
    cards
}

impl Deck {
    /// Targets are clamped to the deck size.
    pub fn new_with_seed(size: usize, targets: usize, seed: u64) -> Self {
        let targets = targets.min(size);
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: fresh_cards(size, targets),
            targets,
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(card)
    }

    /// Draws `n` cards and counts the targets among them.
    pub fn draw_targets(&mut self, n: usize) -> usize {
        (0..n)
            .filter_map(|_| self.draw())
            .filter(|c| *c == Card::Target)
            .count()
    }

    pub fn reset(&mut self) {
        self.cards = fresh_cards(self.cards.len(), self.targets);
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn targets(&self) -> usize {
        self.targets
    }
}
