//! # deckbattle
//!
//! A deterministic turn-based deck battle engine.
//!
//! A player and an enemy alternate turns, play cards drawn from shuffled
//! decks, deal damage scaled by an elemental affinity table and stack
//! status effects that resolve at the start of each turn.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness flows through an injected
//!    `RandomSource`. Same seed, same battle.
//!
//! 2. **No ambient state**: The controller, decks and effect engine take
//!    every dependency (data, config, RNG) through their constructors.
//!
//! 3. **Headless**: The engine emits events and snapshots; rendering,
//!    pacing and input belong to the caller.
//!
//! ## Modules
//!
//! - `core`: Instance ids, RNG, configuration, errors
//! - `cards`: Card definitions, instances and registry
//! - `affinity`: Elements and the damage multiplier table
//! - `deck`: Draw pile, hand and discard pile
//! - `effects`: Status effects and their resolution engine
//! - `battle`: Combatants, phase machine, controller, events
//! - `adversary`: Enemy behavior profiles and card selection
//! - `rewards`: Reward rolls and player progression
//! - `data`: Static data provider and the starter catalog
//!
//! ## Example
//!
//! ```
//! use deckbattle::{AutoPilot, BattleConfig, BattleController, BattleRng, EnemyTier, GameData, PlayerProgress};
//!
//! let data = GameData::starter();
//! let mut hero = PlayerProgress::starter("Hero");
//! let config = BattleConfig::default();
//!
//! let mut battle = BattleController::for_encounter(
//!     &data,
//!     &hero,
//!     EnemyTier::Normal,
//!     Some("forest"),
//!     config.clone(),
//!     BattleRng::new(42),
//! )
//! .unwrap();
//!
//! if let Some(outcome) = AutoPilot::new().run(&mut battle).unwrap() {
//!     if let Some(rewards) = &outcome.rewards {
//!         hero.apply_rewards(rewards, &config);
//!     }
//! }
//! ```

pub mod core;
pub mod cards;
pub mod affinity;
pub mod deck;
pub mod effects;
pub mod battle;
pub mod adversary;
pub mod rewards;
pub mod data;

// Re-export commonly used types
pub use crate::core::{
    InstanceId, InstanceAllocator,
    RandomSource, BattleRng, BattleRngState, ScriptedRng,
    BattleConfig, RarityThresholds,
    ActionError, BattleError,
};

pub use crate::cards::{CardCategory, CardDefinition, CardId, CardInstance, CardRegistry, Rarity};

pub use crate::affinity::{AffinityTable, Element, ElementRelation};

pub use crate::deck::{Deck, DeckCounts};

pub use crate::effects::{
    ActiveEffect, Effect, EffectKind, EffectSpec,
    Application, InstantOutcome, ShieldResult, StatusEngine, TurnResolution,
};

pub use crate::battle::{
    AutoPilot, BattleController, BattleEvent, BattleObserver, BattleOutcome, BattleResult,
    BattleSnapshot, Combatant, Phase, PlayOutcome, Side,
};

pub use crate::adversary::{AdversaryPolicy, AiBehavior, DecisionContext, EnemyTier, FirstCardPolicy, HeuristicPolicy};

pub use crate::rewards::{PlayerProgress, RewardResolver, Rewards};

pub use crate::data::{EncounterTable, EnemyDefinition, EnemyId, EnemyRegistry, GameData};
