use crazy_eights::{
    Card, Game, GameOptions, GameSnapshot, GameStatus, Player, Rank, Suit, TurnEvent,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Browser-facing table. The page owns the opponent's "thinking" delay: when
/// `opponent_turn_pending()` is true it waits, then calls `opponent_turn()`.
#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(options(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(options(), seed as u64);
    }

    pub fn start(&self) -> Result<JsValue, JsValue> {
        let events = self.game.start().map_err(js_err)?;
        events_to_js(&events)
    }

    /// Plays the human's card with the given id.
    pub fn play_card(&self, card_id: u8) -> Result<JsValue, JsValue> {
        let hand = self.game.hand(Player::Human);
        let Some(card) = hand.cards().iter().find(|c| c.id.0 == card_id).copied() else {
            return events_to_js(&[]);
        };
        events_to_js(&self.game.play_card(Player::Human, card))
    }

    pub fn choose_wild_suit(&self, suit: &str) -> Result<JsValue, JsValue> {
        let suit = suit_from_str(suit).ok_or_else(|| JsValue::from_str("unknown suit"))?;
        events_to_js(&self.game.choose_wild_suit(suit))
    }

    pub fn skip_turn(&self) -> Result<JsValue, JsValue> {
        events_to_js(&self.game.skip_turn(Player::Human))
    }

    pub fn opponent_turn_pending(&self) -> bool {
        self.game.opponent_turn_pending()
    }

    pub fn opponent_turn(&self) -> Result<JsValue, JsValue> {
        events_to_js(&self.game.play_opponent_turn())
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let table = self.game.snapshot();
        to_js_value(&Snapshot::from_table(&table))
    }
}

fn options() -> GameOptions {
    GameOptions::default().with_auto_opponent(false)
}

#[derive(Serialize)]
struct Snapshot {
    status: &'static str,
    turn: &'static str,
    winner: Option<&'static str>,
    player_hand: Vec<JsCard>,
    opponent_cards: u32,
    top_card: Option<JsCard>,
    wild_suit: Option<&'static str>,
    stub_cards: u32,
    player_can_play: bool,
}

impl Snapshot {
    fn from_table(table: &GameSnapshot) -> Self {
        let top = table.top_card().copied();
        let player_hand = table
            .player_hand
            .iter()
            .map(|card| {
                let playable = table.status == GameStatus::InProgress
                    && table.turn == Player::Human
                    && top.is_some_and(|top| {
                        crazy_eights::is_legal_play(card, &top, table.wild_suit)
                    });
                JsCard::new(*card, playable)
            })
            .collect();

        Self {
            status: status_to_str(table.status),
            turn: player_to_str(table.turn),
            winner: table.winner.map(player_to_str),
            player_hand,
            opponent_cards: table.opponent_hand.len() as u32,
            top_card: top.map(|card| JsCard::new(card, false)),
            wild_suit: table.wild_suit.map(suit_to_str),
            stub_cards: table.stub.len() as u32,
            player_can_play: table.player_can_play,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    id: u8,
    suit: &'static str,
    rank: &'static str,
    playable: bool,
}

impl JsCard {
    fn new(card: Card, playable: bool) -> Self {
        Self {
            id: card.id.0,
            suit: suit_to_str(card.suit),
            rank: rank_to_str(card.rank),
            playable,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsEvent {
    SessionStarted { starting_card: JsCard },
    CardPlayed { player: &'static str, card: JsCard },
    WildSuitRequested,
    WildSuitChosen { player: &'static str, suit: &'static str },
    TurnSkipped { player: &'static str },
    GameWon { winner: &'static str },
}

impl From<TurnEvent> for JsEvent {
    fn from(event: TurnEvent) -> Self {
        match event {
            TurnEvent::SessionStarted { starting_card } => Self::SessionStarted {
                starting_card: JsCard::new(starting_card, false),
            },
            TurnEvent::CardPlayed { player, card } => Self::CardPlayed {
                player: player_to_str(player),
                card: JsCard::new(card, false),
            },
            TurnEvent::WildSuitRequested => Self::WildSuitRequested,
            TurnEvent::WildSuitChosen { player, suit } => Self::WildSuitChosen {
                player: player_to_str(player),
                suit: suit_to_str(suit),
            },
            TurnEvent::TurnSkipped { player } => Self::TurnSkipped {
                player: player_to_str(player),
            },
            TurnEvent::GameWon { winner } => Self::GameWon {
                winner: player_to_str(winner),
            },
        }
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "hearts",
        Suit::Diamonds => "diamonds",
        Suit::Clubs => "clubs",
        Suit::Spades => "spades",
    }
}

fn suit_from_str(suit: &str) -> Option<Suit> {
    Suit::ALL.into_iter().find(|s| suit_to_str(*s) == suit)
}

fn rank_to_str(rank: Rank) -> &'static str {
    rank.label()
}

fn player_to_str(player: Player) -> &'static str {
    match player {
        Player::Human => "player",
        Player::Opponent => "ai",
    }
}

fn status_to_str(status: GameStatus) -> &'static str {
    match status {
        GameStatus::NotStarted => "waiting",
        GameStatus::InProgress => "playing",
        GameStatus::AwaitingWildSuit => "selecting-suit",
        GameStatus::Finished => "game-over",
    }
}

fn events_to_js(events: &[TurnEvent]) -> Result<JsValue, JsValue> {
    let events: Vec<JsEvent> = events.iter().copied().map(JsEvent::from).collect();
    to_js_value(&events)
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
