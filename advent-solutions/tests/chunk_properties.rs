//! Property-based tests for the bracket-chunk validator

use advent_solutions::utils::chunks::{Delimiter, Outcome, Token, classify, completion_closers};
use proptest::prelude::*;

fn delimiter() -> impl Strategy<Value = Delimiter> {
    prop_oneof![
        Just(Delimiter::Paren),
        Just(Delimiter::Square),
        Just(Delimiter::Brace),
        Just(Delimiter::Angle),
    ]
}

fn token() -> impl Strategy<Value = Token> {
    (delimiter(), any::<bool>()).prop_map(|(d, open)| {
        if open { Token::Open(d) } else { Token::Close(d) }
    })
}

/// Fully matched, arbitrarily nested bracket sequences
fn balanced() -> impl Strategy<Value = Vec<Token>> {
    let leaf = Just(Vec::new());
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop::collection::vec((delimiter(), inner), 1..4).prop_map(|groups| {
            groups
                .into_iter()
                .flat_map(|(d, body)| {
                    std::iter::once(Token::Open(d))
                        .chain(body)
                        .chain(std::iter::once(Token::Close(d)))
                })
                .collect()
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_global_rejects: 65536,
        ..ProptestConfig::default()
    })]

    /// Perfectly nested, fully matched sequences are always Valid.
    #[test]
    fn balanced_sequences_are_valid(tokens in balanced()) {
        prop_assert_eq!(classify(&tokens), Outcome::Valid);
    }

    /// Unmatched leading openers surface as Incomplete, in push order.
    #[test]
    fn leading_openers_make_balanced_sequences_incomplete(
        openers in prop::collection::vec(delimiter(), 1..8),
        body in balanced(),
    ) {
        let tokens: Vec<Token> = openers
            .iter()
            .map(|&d| Token::Open(d))
            .chain(body)
            .collect();

        prop_assert_eq!(
            classify(&tokens),
            Outcome::Incomplete { pending: openers }
        );
    }

    /// Appending the completion closers turns any incomplete line into a valid one.
    #[test]
    fn completing_an_incomplete_line_makes_it_valid(
        tokens in prop::collection::vec(token(), 0..32),
    ) {
        let outcome = classify(&tokens);
        prop_assume!(outcome.is_incomplete());
        let Outcome::Incomplete { pending } = outcome else { unreachable!() };

        let completed: Vec<Token> = tokens
            .iter()
            .copied()
            .chain(completion_closers(&pending))
            .collect();

        prop_assert_eq!(classify(&completed), Outcome::Valid);
    }

    /// Replacing one closer of a balanced sequence with a different closer
    /// produces Corrupt at exactly that index.
    #[test]
    fn single_wrong_closer_is_caught_at_its_index(
        tokens in balanced(),
        pick in any::<prop::sample::Index>(),
        replacement in delimiter(),
    ) {
        let closer_positions: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| matches!(t, Token::Close(_)))
            .map(|(i, _)| i)
            .collect();
        prop_assume!(!closer_positions.is_empty());

        let index = closer_positions[pick.index(closer_positions.len())];
        let Token::Close(original) = tokens[index] else { unreachable!() };
        prop_assume!(original != replacement);

        let mut corrupted = tokens.clone();
        corrupted[index] = Token::Close(replacement);

        prop_assert_eq!(
            classify(&corrupted),
            Outcome::Corrupt {
                index,
                found: Token::Close(replacement),
            }
        );
    }

    /// Classification is a pure function of the token sequence.
    #[test]
    fn classification_is_idempotent(tokens in prop::collection::vec(token(), 0..64)) {
        prop_assert_eq!(classify(&tokens), classify(&tokens));
    }
}
