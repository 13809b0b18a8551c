//! Rule engine, deck and opponent policy tests.

use std::collections::HashSet;

use crazy_eights::{
    Card, CardId, DECK_SIZE, DealError, Hand, Rank, Suit, WILD_RANK, build_shuffled_deck,
    choose_move, choose_wild_suit, deal, has_legal_play, is_legal_play, is_standard_deck,
    legal_plays, standard_deck, target_suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn shuffled_deck_has_every_card_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let deck = build_shuffled_deck(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);
    let pairs: HashSet<(Suit, Rank)> = deck.iter().map(|c| (c.suit, c.rank)).collect();
    assert_eq!(pairs.len(), DECK_SIZE);
    let ids: HashSet<u8> = deck.iter().map(|c| c.id.0).collect();
    assert_eq!(ids.len(), DECK_SIZE);
    assert!(ids.iter().all(|&id| usize::from(id) < DECK_SIZE));
}

#[test]
fn shuffle_reorders_the_deck() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    assert_ne!(build_shuffled_deck(&mut rng), standard_deck());
}

#[test]
fn deal_splits_hands_in_order() {
    let deck = standard_deck();
    let dealt = deal(deck.clone(), 7).unwrap();

    assert_eq!(dealt.player_hand.cards(), &deck[..7]);
    assert_eq!(dealt.opponent_hand.cards(), &deck[7..14]);
    assert_eq!(dealt.starting_card, card(Suit::Diamonds, Rank::Two));
    assert_eq!(dealt.stub.len(), DECK_SIZE - 15);
    assert!(!dealt.stub.contains(&dealt.starting_card));
}

#[test]
fn deal_starts_on_first_card_after_hands() {
    let dealt = deal(standard_deck(), 3).unwrap();
    // Ace..Six of hearts go to the hands.
    assert_eq!(dealt.starting_card, card(Suit::Hearts, Rank::Seven));
    assert_eq!(dealt.stub[0], card(Suit::Hearts, Rank::Eight));
}

#[test]
fn deal_needs_two_hands_and_a_starting_card() {
    let short: Vec<Card> = standard_deck().into_iter().take(4).collect();
    assert_eq!(
        deal(short, 2).unwrap_err(),
        DealError::NotEnoughCards {
            hand_size: 2,
            available: 4,
        }
    );

    let only_eights_left = vec![
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Clubs, Rank::Two),
        card(Suit::Clubs, Rank::Three),
        card(Suit::Hearts, Rank::Eight),
        card(Suit::Spades, Rank::Eight),
    ];
    assert_eq!(deal(only_eights_left, 2).unwrap_err(), DealError::NoStartingCard);
}

#[test]
fn standard_deck_check() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    assert!(is_standard_deck(&standard_deck()));
    assert!(is_standard_deck(&build_shuffled_deck(&mut rng)));

    let mut short = standard_deck();
    short.pop();
    assert!(!is_standard_deck(&short));

    let mut doubled = standard_deck();
    doubled[1] = doubled[0];
    assert!(!is_standard_deck(&doubled));

    let mut forged_id = standard_deck();
    forged_id[3].id = CardId(200);
    assert!(!is_standard_deck(&forged_id));

    let mut swapped_face = standard_deck();
    swapped_face[0].rank = Rank::King;
    assert!(!is_standard_deck(&swapped_face));
}

#[test]
fn wild_cards_are_always_legal() {
    for top in standard_deck() {
        for suit in Suit::ALL {
            let eight = card(suit, WILD_RANK);
            assert!(is_legal_play(&eight, &top, None));
            for wild in Suit::ALL {
                assert!(is_legal_play(&eight, &top, Some(wild)));
            }
        }
    }
}

#[test]
fn plain_cards_match_suit_or_rank() {
    for top in standard_deck() {
        for candidate in standard_deck().into_iter().filter(|c| !c.is_wild()) {
            let expected = candidate.suit == top.suit || candidate.rank == top.rank;
            assert_eq!(is_legal_play(&candidate, &top, None), expected);
        }
    }
}

#[test]
fn wild_suit_replaces_top_suit() {
    let top = card(Suit::Hearts, Rank::Eight);
    for candidate in standard_deck().into_iter().filter(|c| !c.is_wild()) {
        let expected = candidate.suit == Suit::Clubs;
        assert_eq!(is_legal_play(&candidate, &top, Some(Suit::Clubs)), expected);
    }
    assert_eq!(target_suit(&top, Some(Suit::Clubs)), Suit::Clubs);
    assert_eq!(target_suit(&top, None), Suit::Hearts);
}

#[test]
fn rank_match_scenario() {
    let top = card(Suit::Hearts, Rank::Five);
    assert!(is_legal_play(&card(Suit::Clubs, Rank::Five), &top, None));
    assert!(!is_legal_play(&card(Suit::Diamonds, Rank::Nine), &top, None));
}

#[test]
fn rank_match_beats_wild_suit() {
    let top = card(Suit::Hearts, Rank::Three);
    let three = card(Suit::Diamonds, Rank::Three);
    assert!(is_legal_play(&three, &top, Some(Suit::Spades)));
    assert!(!is_legal_play(&card(Suit::Hearts, Rank::Four), &top, Some(Suit::Spades)));
    assert!(is_legal_play(&card(Suit::Spades, Rank::Four), &top, Some(Suit::Spades)));
}

#[test]
fn legal_plays_keep_hand_order() {
    let hand = [
        card(Suit::Spades, Rank::Two),
        card(Suit::Hearts, Rank::King),
        card(Suit::Clubs, Rank::Eight),
        card(Suit::Clubs, Rank::Five),
    ];
    let top = card(Suit::Hearts, Rank::Five);

    let legal: Vec<Card> = legal_plays(&hand, &top, None).copied().collect();
    assert_eq!(legal, vec![hand[1], hand[2], hand[3]]);
    assert!(has_legal_play(&hand, &top, None));
    assert!(!has_legal_play(&hand[..1], &top, None));
    assert!(!has_legal_play(&[], &top, None));
}

#[test]
fn opponent_prefers_plain_cards() {
    let hand = [card(Suit::Hearts, Rank::Eight), card(Suit::Clubs, Rank::Five)];
    let top = card(Suit::Diamonds, Rank::Five);
    assert_eq!(choose_move(&hand, &top, None), Some(card(Suit::Clubs, Rank::Five)));
}

#[test]
fn opponent_falls_back_to_an_eight() {
    let hand = [card(Suit::Hearts, Rank::Eight)];
    for top in standard_deck() {
        assert_eq!(choose_move(&hand, &top, None), Some(hand[0]));
        assert_eq!(choose_move(&hand, &top, Some(Suit::Clubs)), Some(hand[0]));
    }
}

#[test]
fn opponent_skips_without_a_legal_card() {
    let hand = [card(Suit::Hearts, Rank::Nine)];
    let top = card(Suit::Clubs, Rank::Two);
    assert_eq!(choose_move(&hand, &top, None), None);
    assert_eq!(choose_move(&[], &top, None), None);
}

#[test]
fn opponent_takes_the_first_match_and_respects_wild_suit() {
    let hand = [
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::Jack),
        card(Suit::Spades, Rank::Queen),
    ];
    let top = card(Suit::Hearts, Rank::Eight);

    assert_eq!(choose_move(&hand, &top, None), Some(hand[0]));
    assert_eq!(choose_move(&hand, &top, Some(Suit::Spades)), Some(hand[1]));
    assert_eq!(choose_move(&hand, &top, Some(Suit::Clubs)), None);
}

#[test]
fn wild_suit_choice_counts_plain_cards() {
    let hand = Hand::from_cards(vec![
        card(Suit::Clubs, Rank::Two),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Clubs, Rank::King),
        card(Suit::Diamonds, Rank::Four),
    ]);
    assert_eq!(choose_wild_suit(&hand), Suit::Clubs);
    assert_eq!(hand.count_suit(Suit::Spades), 0);
    assert_eq!(hand.suit_counts(), [0, 1, 2, 0]);
}

#[test]
fn wild_suit_ties_go_to_enumeration_order() {
    assert_eq!(choose_wild_suit(&Hand::new()), Suit::Hearts);

    let all_suits = Hand::from_cards(
        Suit::ALL
            .into_iter()
            .map(|suit| card(suit, Rank::Queen))
            .collect(),
    );
    assert_eq!(choose_wild_suit(&all_suits), Suit::Hearts);
    assert_eq!(choose_wild_suit(&all_suits), choose_wild_suit(&all_suits.clone()));

    let clubs_and_spades = Hand::from_cards(vec![
        card(Suit::Spades, Rank::Ace),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Hearts, Rank::Eight),
    ]);
    assert_eq!(choose_wild_suit(&clubs_and_spades), Suit::Clubs);
}

#[test]
fn hand_removes_by_id() {
    let mut hand = Hand::from_cards(vec![
        card(Suit::Clubs, Rank::Two),
        card(Suit::Hearts, Rank::Ten),
    ]);
    let ten = card(Suit::Hearts, Rank::Ten);

    assert!(hand.contains(ten.id));
    assert_eq!(hand.remove(ten.id), Some(ten));
    assert_eq!(hand.remove(ten.id), None);
    assert_eq!(hand.len(), 1);
    assert!(!hand.is_empty());
}
