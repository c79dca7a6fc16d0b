// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use std::fmt;

#[cfg(feature = "parallel")]
mod parallel;

/// A Poker card.
///
/// A card is a (rank, suit) pair, two cards are equal if they have the same
/// rank and suit.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Card rank.
///
/// The enum value is the poker rank value, from 2 for a deuce to 14 for an ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank numeric value.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// Suits have no poker ordering, the enum value is only used for indexing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Clubs suit.
    Clubs = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Diamonds suit.
    Diamonds = 3,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds].into_iter()
    }

    /// The suit index in `0..Suit::COUNT`.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a full deck without the given cards.
    pub fn without(cards: &[Card]) -> Self {
        let mut deck = Self::default();
        deck.cards.retain(|c| !cards.contains(c));
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The cards in the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for `samples` random k-cards hands.
    ///
    /// Each hand is drawn uniformly without replacement from the deck cards,
    /// see [Deck::sample_with_rng].
    pub fn sample<F>(&self, samples: usize, k: usize, f: F)
    where
        F: FnMut(&[Card]),
    {
        self.sample_with_rng(&mut rand::rng(), samples, k, f);
    }

    /// Calls the `f` closure for `samples` random k-cards hands using `rng`.
    ///
    /// The cards in a hand are distinct and all come from this deck, hands are
    /// independent from each other. Does nothing if k is greater than the
    /// number of cards in the deck.
    pub fn sample_with_rng<R, F>(&self, rng: &mut R, samples: usize, k: usize, mut f: F)
    where
        R: Rng + ?Sized,
        F: FnMut(&[Card]),
    {
        if k > self.cards.len() {
            return;
        }

        let mut h = Vec::with_capacity(k);
        for _ in 0..samples {
            h.clear();
            h.extend(self.cards.choose_multiple(rng, k).copied());
            f(&h);
        }
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        // Indices of the current k-subset in lexicographic order.
        let n = self.cards.len();
        let mut idx = (0..k).collect::<Vec<_>>();
        let mut h = idx.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&h);

            // Find the rightmost index that can still be moved forward.
            let Some(i) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
                break;
            };

            idx[i] += 1;
            h[i] = self.cards[idx[i]];
            for j in (i + 1)..k {
                idx[j] = idx[j - 1] + 1;
                h[j] = self.cards[idx[j]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::SmallRng;

    #[test]
    fn deck_cards() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            assert!((2..=14).contains(&card.rank().value()));
            assert!(card.suit().index() < Suit::COUNT);
            cards.insert(card);
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
        assert!(deck.is_empty());
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
        assert_eq!(format!("{c:?}"), "Card(AH)");
    }

    #[test]
    fn deck_without() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let kd = Card::new(Rank::King, Suit::Diamonds);

        let deck = Deck::without(&[ah, kd]);
        assert_eq!(deck.count(), 50);
        assert!(!deck.contains(ah));
        assert!(!deck.contains(kd));
        assert!(deck.contains(Card::new(Rank::Ace, Suit::Diamonds)));

        // Duplicated cards are removed once.
        let deck = Deck::without(&[ah, ah]);
        assert_eq!(deck.count(), 51);
    }

    #[test]
    fn deck_sample() {
        let hole = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Deuce, Suit::Clubs),
        ];
        let deck = Deck::without(&hole);
        let mut rng = SmallRng::seed_from_u64(101);

        let mut count = 0;
        deck.sample_with_rng(&mut rng, 10_000, 5, |board| {
            assert_eq!(board.len(), 5);

            let unique = board.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), 5);
            assert!(board.iter().all(|c| !hole.contains(c)));
            count += 1;
        });

        assert_eq!(count, 10_000);
    }

    #[test]
    fn deck_sample_uniform() {
        // Each card should appear in about 5/50 of the boards.
        let deck = Deck::without(&[
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
        ]);

        let mut rng = SmallRng::seed_from_u64(7);
        let mut counts = [0usize; 4 * 15];
        deck.sample_with_rng(&mut rng, 100_000, 5, |board| {
            for c in board {
                counts[c.suit().index() * 15 + c.rank().value() as usize] += 1;
            }
        });

        for c in deck.cards() {
            let n = counts[c.suit().index() * 15 + c.rank().value() as usize];
            assert!((9_000..11_000).contains(&n), "card {c} count {n}");
        }
    }

    #[test]
    fn deck_sample_too_many() {
        let deck = Deck::without(&Deck::default().cards()[..48]);
        assert_eq!(deck.count(), 4);

        let mut count = 0;
        deck.sample(10, 5, |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    // This takes a while to run in debug mode as it goes through 133M hands.
    #[test]
    #[ignore]
    fn deck_for_each_7cards() {
        let deck = Deck::default();

        let mut count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 133_784_560);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_118_760);
    }
}
