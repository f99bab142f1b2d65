//! Hand classification integration tests.

use pokerfreq::{Card, Deck, Hand, HandCategory, HandError, Rank, Suit, classify};

fn hand(notation: &str) -> Hand {
    notation.parse().unwrap()
}

fn category(notation: &str) -> HandCategory {
    hand(notation).category()
}

#[test]
fn ace_low_straight_flush() {
    assert_eq!(category("AH 2H 3H 4H 5H"), HandCategory::StraightFlush);
}

#[test]
fn ace_high_straight_flush() {
    assert_eq!(category("10C JC QC KC AC"), HandCategory::StraightFlush);
}

#[test]
fn no_wraparound_through_both_ends() {
    let wrap = hand("QH KH AH 2H 3H");
    assert!(!wrap.is_straight());
    assert!(wrap.is_flush());
    assert_eq!(wrap.category(), HandCategory::Flush);

    assert_eq!(category("QH KD AC 2S 3H"), HandCategory::HighCard);
    assert_eq!(category("KH AD 2C 3S 4H"), HandCategory::HighCard);
}

#[test]
fn fixture_categories() {
    assert_eq!(category("7H 7D 7C 2S 2H"), HandCategory::FullHouse);
    assert_eq!(category("9H 9D 5C 5S 2H"), HandCategory::TwoPair);
    assert_eq!(category("2H 2D 2C 2S 9H"), HandCategory::FourOfAKind);
    assert_eq!(category("3H 5D 9C JS KH"), HandCategory::HighCard);
    assert_eq!(category("8S 8D KC 4H 2C"), HandCategory::Pair);
    assert_eq!(category("QS QD QC 4H 2C"), HandCategory::ThreeOfAKind);
    assert_eq!(category("2S 4S 7S 9S KS"), HandCategory::Flush);
    assert_eq!(category("5D 6C 7H 8S 9D"), HandCategory::Straight);
    assert_eq!(category("AD 2C 3H 4S 5D"), HandCategory::Straight);
    assert_eq!(category("TD JC QH KS AD"), HandCategory::Straight);
    assert_eq!(category("9S TS JS QS KS"), HandCategory::StraightFlush);
}

#[test]
fn straight_flush_is_not_reported_as_weaker_category() {
    let hand = hand("6D 7D 8D 9D TD");
    assert!(hand.is_flush());
    assert!(hand.is_straight());
    assert_eq!(hand.category(), HandCategory::StraightFlush);
}

#[test]
fn order_does_not_matter() {
    let cards = *hand("9H 9D 5C 5S 2H").cards();
    let expected = classify(&cards).unwrap();

    let mut permuted = cards;
    for _ in 0..cards.len() {
        permuted.rotate_left(1);
        assert_eq!(classify(&permuted).unwrap(), expected);
        permuted.reverse();
        assert_eq!(classify(&permuted).unwrap(), expected);
        permuted.swap(0, 3);
        assert_eq!(classify(&permuted).unwrap(), expected);
    }
}

#[test]
fn rank_profiles() {
    assert_eq!(hand("2H 2D 2C 2S 9H").rank_profile().counts(), [1, 4]);
    assert_eq!(hand("7H 7D 7C 2S 2H").rank_profile().counts(), [2, 3]);
    assert_eq!(hand("QS QD QC 4H 2C").rank_profile().counts(), [1, 1, 3]);
    assert_eq!(hand("8S 8D KC 4H 2C").rank_profile().counts(), [1, 1, 1, 2]);
}

#[test]
fn wrong_size_is_rejected() {
    let cards = *hand("AH 2H 3H 4H 5H").cards();

    assert_eq!(
        classify(&cards[..4]).unwrap_err(),
        HandError::InvalidSize { len: 4 }
    );
    assert_eq!(classify(&[]).unwrap_err(), HandError::InvalidSize { len: 0 });

    let mut six = cards.to_vec();
    six.push(Card::new(Rank::Six, Suit::Hearts));
    assert_eq!(
        classify(&six).unwrap_err(),
        HandError::InvalidSize { len: 6 }
    );
}

#[test]
fn duplicate_card_is_rejected() {
    let ace = Card::new(Rank::Ace, Suit::Spades);
    let cards = [
        ace,
        Card::new(Rank::King, Suit::Spades),
        ace,
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::Three, Suit::Hearts),
    ];
    assert_eq!(classify(&cards).unwrap_err(), HandError::DuplicateCard(ace));
}

#[test]
fn every_dealt_hand_gets_one_category() {
    let mut deck = Deck::new(11);
    for _ in 0..200 {
        deck.shuffle();
        while let Ok(hand) = deck.deal_hand() {
            let category = hand.category();
            assert!(HandCategory::ALL.contains(&category));
            assert_eq!(classify(hand.cards()), Ok(category));
        }
    }
}

#[test]
fn sorted_puts_ace_last() {
    let sorted = hand("AH 3D KC 3S 7H").sorted();
    let ranks = sorted.map(Card::rank);
    assert_eq!(
        ranks,
        [Rank::Three, Rank::Three, Rank::Seven, Rank::King, Rank::Ace]
    );
}

#[test]
fn hand_display_lists_cards() {
    assert_eq!(
        hand("AH 10C JS QD 2H").to_string(),
        "Ace of Hearts\n10 of Clubs\nJack of Spades\nQueen of Diamonds\n2 of Hearts\n"
    );
}

#[test]
fn category_order_and_names() {
    assert!(HandCategory::HighCard < HandCategory::Pair);
    assert!(HandCategory::Straight < HandCategory::Flush);
    assert!(HandCategory::FourOfAKind < HandCategory::StraightFlush);
    assert!(HandCategory::ALL.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(HandCategory::ThreeOfAKind.to_string(), "three of a kind");
    assert_eq!(HandCategory::StraightFlush.index(), 8);
}
