//! Property tests for hand scoring and card conservation.

use hitstand::{Card, GameOptions, GameState, Hand, Phase, Rank, Suit};
use proptest::prelude::*;

fn any_card() -> impl Strategy<Value = Card> {
    (1u8..=13, 0usize..4).prop_map(|(ordinal, suit)| {
        let rank = Rank::from_ordinal(ordinal).unwrap_or(Rank::Ace);
        Card::new(rank, Suit::ALL[suit])
    })
}

fn non_ace_card() -> impl Strategy<Value = Card> {
    any_card().prop_filter("no aces", |card| !card.is_ace())
}

proptest! {
    #[test]
    fn hand_without_aces_scores_its_minimum(cards in prop::collection::vec(non_ace_card(), 0..8)) {
        let hand: Hand = cards.into_iter().collect();
        prop_assert_eq!(hand.score(), hand.min_score());
        prop_assert!(!hand.is_soft());
    }

    #[test]
    fn single_ace_is_promoted_when_it_fits(
        rest in prop::collection::vec(non_ace_card(), 0..4),
        position in 0usize..4,
    ) {
        let rest_total: u8 = rest.iter().map(|card| card.rank.min_value()).sum();
        prop_assume!(rest_total <= 10);

        let mut cards = rest;
        let position = position.min(cards.len());
        cards.insert(position, Card::new(Rank::Ace, Suit::Spades));

        let hand: Hand = cards.into_iter().collect();
        prop_assert_eq!(hand.score(), hand.min_score() + 10);
        prop_assert!(hand.score() <= 21);
    }

    #[test]
    fn high_minimum_is_never_promoted(cards in prop::collection::vec(any_card(), 2..10)) {
        let hand: Hand = cards.into_iter().collect();
        prop_assume!(hand.min_score() > 11);
        prop_assert_eq!(hand.score(), hand.min_score());
    }

    #[test]
    fn at_most_one_ace_is_promoted(cards in prop::collection::vec(any_card(), 0..10)) {
        let hand: Hand = cards.into_iter().collect();
        let promoted = hand.score() - hand.min_score();
        prop_assert!(promoted == 0 || promoted == 10);
    }

    #[test]
    fn dealt_hands_conserve_cards(seed in any::<u64>(), hits in 0usize..6) {
        let shuffled = GameState::new(GameOptions::default(), seed).shuffle();
        let total = shuffled.cards_remaining();

        let mut game = shuffled.deal().unwrap();
        prop_assert_eq!(game.player().len(), 2);
        prop_assert_eq!(game.dealer().len(), 2);
        prop_assert_eq!(game.phase(), Phase::PlayerTurn);

        for _ in 0..hits {
            if game.phase() != Phase::PlayerTurn {
                break;
            }
            game = game.hit().unwrap();
        }

        let in_play = game.cards_remaining() + game.player().len() + game.dealer().len();
        prop_assert_eq!(in_play, total);
    }
}
