//! A Crazy Eights game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a two-player table: a human
//! against a scripted opponent. It covers dealing, play legality, the wild
//! eight and its declared suit, turn skipping and the win check. Rendering is
//! left to the caller, which reads [`Game::snapshot`] and forwards the human's
//! choices.
//!
//! # Example
//!
//! ```
//! use crazy_eights::{Game, GameOptions, GameStatus, Player};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.start().expect("a standard deck always deals");
//!
//! let table = game.snapshot();
//! assert_eq!(table.status, GameStatus::InProgress);
//! assert_eq!(table.turn, Player::Human);
//! assert_eq!(table.player_hand.len(), 7);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod opponent;
pub mod options;
pub mod pace;
pub mod rules;
mod sync;

// Re-export main types
pub use card::{Card, CardId, DECK_SIZE, INITIAL_HAND_SIZE, Rank, Suit, WILD_RANK};
pub use deck::{Deal, build_shuffled_deck, deal, is_standard_deck, standard_deck};
pub use error::DealError;
pub use event::TurnEvent;
pub use game::{Game, GameSnapshot, GameStatus, Player};
pub use hand::Hand;
pub use opponent::{choose_move, choose_wild_suit};
pub use options::GameOptions;
#[cfg(feature = "std")]
pub use pace::ThreadSleep;
pub use pace::{NoPause, Pacer};
pub use rules::{has_legal_play, is_legal_play, legal_plays, target_suit};
