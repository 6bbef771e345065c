//! The battle turn loop.
//!
//! `BattleController` owns both combatants, both decks and the random
//! source for one battle, and drives the phase machine:
//!
//! ```text
//! start_battle -> player turn -> (play_card)* -> end_player_turn
//!              -> enemy turn  -> player turn  -> ...  -> victory | defeat
//! ```
//!
//! Each turn starts by resolving the active combatant's status effects.
//! The enemy's whole turn resolves synchronously inside `end_player_turn`,
//! so callers only ever wait on the player. Every call hands control back
//! after at most one enemy turn: a player turn lost to frozen or stunned
//! still lands in `PlayerTurn`, with `can_act()` false, and the caller
//! ends it like any other.

use std::sync::Arc;

use im::Vector;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::combatant::{Combatant, Side};
use super::event::{BattleEvent, BattleObserver, BattleResult};
use super::phase::Phase;
use super::snapshot::BattleSnapshot;
use crate::adversary::{AdversaryPolicy, DecisionContext, EnemyTier, HeuristicPolicy};
use crate::affinity::AffinityTable;
use crate::cards::{CardId, CardInstance, CardRegistry};
use crate::core::{ActionError, BattleConfig, BattleError, BattleRng, InstanceAllocator, InstanceId, RandomSource};
use crate::data::{EnemyDefinition, EnemyId, GameData};
use crate::deck::{Deck, DeckCounts};
use crate::effects::{Application, Effect, EffectSpec, InstantOutcome, StatusEngine};
use crate::rewards::{PlayerProgress, RewardResolver, Rewards};

/// Result of a card play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub card: CardId,
    /// hp the target lost.
    pub damage: i32,
    /// Damage soaked by the target's shield.
    pub absorbed: i32,
    /// Set if this play ended the battle.
    pub result: Option<BattleResult>,
}

/// Final result handed back to the application layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub result: BattleResult,
    pub turns: u32,
    /// Present on victory.
    pub rewards: Option<Rewards>,
}

/// How a turn's opening went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TurnFlow {
    Act,
    Skip,
    Over,
}

/// Which turn the loop runs next.
#[derive(Clone, Copy, Debug)]
enum NextTurn {
    Player,
    Enemy,
}

/// One battle between the player and an enemy.
///
/// ```
/// use deckbattle::battle::{BattleController, Phase};
/// use deckbattle::core::{BattleConfig, BattleRng};
/// use deckbattle::data::{EnemyId, GameData};
/// use deckbattle::rewards::PlayerProgress;
///
/// let data = GameData::starter();
/// let hero = PlayerProgress::starter("Hero");
/// let mut battle = BattleController::from_progress(
///     &data,
///     &hero,
///     &EnemyId::new("slime"),
///     BattleConfig::default(),
///     BattleRng::new(42),
/// )
/// .unwrap();
///
/// battle.start_battle().unwrap();
/// assert_eq!(battle.phase(), Phase::PlayerTurn);
/// assert_eq!(battle.turn(), 1);
/// assert_eq!(battle.hand().len(), 5);
/// ```
pub struct BattleController<R: RandomSource = BattleRng> {
    config: BattleConfig,
    affinity: AffinityTable,
    drop_pool: CardRegistry,
    enemy_definition: EnemyDefinition,
    rng: R,
    player: Combatant,
    enemy: Combatant,
    player_deck: Deck,
    enemy_deck: Deck,
    phase: Phase,
    turn: u32,
    player_can_act: bool,
    rewards: Option<Rewards>,
    events: Vec<BattleEvent>,
    policy: Box<dyn AdversaryPolicy>,
    observer: Option<Box<dyn BattleObserver>>,
}

impl<R: RandomSource> BattleController<R> {
    /// Set up a battle. Both decks are built and shuffled here, so unknown
    /// ids and empty decks are reported before any turn runs.
    pub fn new(
        data: &GameData,
        player: Combatant,
        player_cards: &[CardId],
        enemy: &EnemyId,
        config: BattleConfig,
        mut rng: R,
    ) -> Result<Self, BattleError> {
        let enemy_definition = data.enemies.require(enemy)?.clone();
        if player_cards.is_empty() {
            return Err(BattleError::EmptyDeck {
                owner: player.name.clone(),
            });
        }
        if enemy_definition.deck.is_empty() {
            return Err(BattleError::EmptyDeck {
                owner: enemy_definition.id.to_string(),
            });
        }

        let mut ids = InstanceAllocator::new();
        let player_instances = data.cards.instantiate(player_cards, &mut ids)?;
        let enemy_instances = data.cards.instantiate(&enemy_definition.deck, &mut ids)?;
        let player_deck = Deck::new(player_instances, &config, &mut rng);
        let enemy_deck = Deck::new(enemy_instances, &config, &mut rng);

        Ok(Self {
            affinity: data.affinity.clone(),
            drop_pool: data.cards.clone(),
            enemy: Combatant::enemy(&enemy_definition),
            enemy_definition,
            config,
            rng,
            player,
            player_deck,
            enemy_deck,
            phase: Phase::Idle,
            turn: 0,
            player_can_act: true,
            rewards: None,
            events: Vec::new(),
            policy: Box::new(HeuristicPolicy),
            observer: None,
        })
    }

    /// Set up a battle from the player's persistent record.
    pub fn from_progress(
        data: &GameData,
        progress: &PlayerProgress,
        enemy: &EnemyId,
        config: BattleConfig,
        rng: R,
    ) -> Result<Self, BattleError> {
        Self::new(data, progress.combatant(), &progress.deck, enemy, config, rng)
    }

    /// Set up a battle against a random enemy of `tier`, drawn from `area`'s
    /// encounter list when one is given. The pick uses the battle's own rng.
    pub fn for_encounter(
        data: &GameData,
        progress: &PlayerProgress,
        tier: EnemyTier,
        area: Option<&str>,
        config: BattleConfig,
        mut rng: R,
    ) -> Result<Self, BattleError> {
        let enemy = data
            .enemies
            .random_enemy(tier, area, &mut rng)
            .map(|e| e.id.clone())
            .ok_or_else(|| BattleError::NoEncounter {
                tier,
                area: area.map(str::to_owned),
            })?;
        info!("encounter picked {enemy} ({tier:?})");
        Self::from_progress(data, progress, &enemy, config, rng)
    }

    /// Replace the adversary's decision module.
    #[must_use]
    pub fn with_policy(mut self, policy: impl AdversaryPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Receive every event as it is emitted.
    #[must_use]
    pub fn with_observer(mut self, observer: impl BattleObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    // === Phase machine ===

    /// Reset both combatants and open the first player turn.
    pub fn start_battle(&mut self) -> Result<(), BattleError> {
        if self.phase != Phase::Idle {
            return Err(self.illegal(Phase::PlayerTurn));
        }

        self.player.reset();
        self.enemy.reset();
        self.turn = 0;
        info!("battle started: {} vs {}", self.player.name, self.enemy.name);
        self.emit(BattleEvent::BattleStarted {
            player: self.player.name.clone(),
            enemy: self.enemy.name.clone(),
        });

        self.drive(NextTurn::Player);
        Ok(())
    }

    /// Open the player's turn from `Idle` or `EnemyTurn`.
    ///
    /// Normally reached through `start_battle` and `end_player_turn`. If the
    /// player cannot act this turn, the enemy takes its turn and the next
    /// player turn is opened before control returns.
    pub fn start_player_turn(&mut self) -> Result<(), BattleError> {
        self.check_transition(Phase::PlayerTurn)?;
        self.drive(NextTurn::Player);
        Ok(())
    }

    /// Run the enemy's turn from `PlayerTurn`, then open the next player turn.
    pub fn start_enemy_turn(&mut self) -> Result<(), BattleError> {
        self.check_transition(Phase::EnemyTurn)?;
        self.drive(NextTurn::Enemy);
        Ok(())
    }

    /// End the player's turn. The hand is kept.
    ///
    /// Runs one enemy turn and opens the next player turn, unless the battle
    /// ends first. That turn may be one the player cannot act in.
    pub fn end_player_turn(&mut self) -> Result<(), ActionError> {
        self.require_phase(Phase::PlayerTurn)?;
        debug!("{} ends turn {}", self.player.name, self.turn);
        self.drive(NextTurn::Enemy);
        Ok(())
    }

    /// Play a card from the player's hand.
    ///
    /// Rejected actions leave the battle untouched.
    pub fn play_card(&mut self, id: InstanceId) -> Result<PlayOutcome, ActionError> {
        self.require_phase(Phase::PlayerTurn)?;

        if !self.player_can_act {
            return Err(reject(ActionError::CannotAct));
        }
        let Some(card) = self.player_deck.find_in_hand(id).cloned() else {
            return Err(reject(ActionError::CardNotInHand(id)));
        };
        let cost = card.mana_cost();
        if !self.player.spend_mana(cost) {
            return Err(reject(ActionError::InsufficientMana {
                required: cost,
                available: self.player.mana(),
            }));
        }
        self.mana_changed(Side::Player);
        self.player_deck.play(id);

        let mut outcome = self.resolve_card(Side::Player, &card);
        outcome.result = self.check_terminal();
        Ok(outcome)
    }

    /// Mark a hand card as selected for display. Returns false if absent.
    pub fn select_card(&mut self, id: InstanceId) -> bool {
        self.player_deck.select(id)
    }

    /// Advance to the next player turn, running at most one enemy turn.
    ///
    /// A skipped player turn opened here is left for the caller to end.
    fn drive(&mut self, next: NextTurn) {
        if let NextTurn::Player = next {
            if self.open_player_turn() != TurnFlow::Skip {
                return;
            }
        }
        if self.run_enemy_turn() == TurnFlow::Over {
            return;
        }
        self.open_player_turn();
    }

    fn open_player_turn(&mut self) -> TurnFlow {
        self.enter(Phase::PlayerTurn);
        self.turn += 1;
        info!("turn {}", self.turn);
        self.emit(BattleEvent::TurnStarted {
            side: Side::Player,
            turn: self.turn,
        });

        let resolution = StatusEngine::process_start_of_turn(&mut self.player);
        self.emit(BattleEvent::EffectsResolved {
            side: Side::Player,
            resolution,
        });
        if self.player.is_defeated() {
            self.finish(BattleResult::Defeat);
            return TurnFlow::Over;
        }

        self.player.regenerate_mana();
        self.mana_changed(Side::Player);

        self.player_can_act = resolution.can_act;
        if !resolution.can_act {
            info!("{} cannot act this turn", self.player.name);
            return TurnFlow::Skip;
        }

        let drawn = if self.turn == 1 {
            self.player_deck.draw_starting_hand(&mut self.rng)
        } else {
            self.player_deck.draw(&mut self.rng).into_iter().collect()
        };
        self.record_draws(Side::Player, drawn);
        TurnFlow::Act
    }

    fn run_enemy_turn(&mut self) -> TurnFlow {
        self.enter(Phase::EnemyTurn);
        self.emit(BattleEvent::TurnStarted {
            side: Side::Enemy,
            turn: self.turn,
        });

        let resolution = StatusEngine::process_start_of_turn(&mut self.enemy);
        self.emit(BattleEvent::EffectsResolved {
            side: Side::Enemy,
            resolution,
        });
        if self.enemy.is_defeated() {
            self.finish(BattleResult::Victory);
            return TurnFlow::Over;
        }
        if !resolution.can_act {
            info!("{} cannot act this turn", self.enemy.name);
            return TurnFlow::Skip;
        }

        self.draw_cards(Side::Enemy, 1);

        let choice = {
            let ctx = DecisionContext {
                behavior: self.enemy.behavior.unwrap_or_default(),
                hand: self.enemy_deck.hand(),
                enemy: &self.enemy,
                player: &self.player,
            };
            self.policy.select(&ctx, &mut self.rng)
        };
        let Some(card) = choice.and_then(|id| self.enemy_deck.play(id)) else {
            debug!("{} has no cards and passes", self.enemy.name);
            return TurnFlow::Act;
        };

        debug!("{} plays {}", self.enemy.name, card.name());
        self.resolve_card(Side::Enemy, &card);

        if self.check_terminal().is_some() {
            TurnFlow::Over
        } else {
            TurnFlow::Act
        }
    }

    // === Card resolution ===

    /// Resolve a card already moved to its owner's discard pile.
    ///
    /// Damage first (affinity and strength modifiers, then the target's
    /// shield), then the card's defense as a shield on the caster, then each
    /// declared effect routed by kind.
    fn resolve_card(&mut self, caster: Side, card: &CardInstance) -> PlayOutcome {
        let definition = Arc::clone(&card.definition);
        let target = caster.opponent();

        let mut damage = 0;
        let mut absorbed = 0;
        if definition.deals_damage() {
            let raw = {
                let attacker = self.combatant(caster);
                let defender = self.combatant(target);
                card.calculate_damage(
                    defender.element,
                    StatusEngine::damage_modifier(attacker),
                    &self.affinity,
                )
            };
            let defender = self.combatant_mut(target);
            let shield = StatusEngine::consume_shield(defender, raw);
            absorbed = shield.absorbed;
            damage = defender.take_damage(shield.remaining);
            debug!(
                "{} hits for {} ({} absorbed, {} hp lost)",
                card.name(),
                raw,
                absorbed,
                damage
            );
        }

        self.emit(BattleEvent::CardPlayed {
            side: caster,
            instance: card.instance_id,
            card: definition.id.clone(),
            damage,
            absorbed,
        });

        if definition.base_defense > 0 {
            let duration = i32::try_from(self.config.shield_duration).unwrap_or(i32::MAX);
            let shield = EffectSpec::persistent(
                Effect::Shield {
                    amount: definition.base_defense,
                },
                duration,
            );
            self.apply_effect(caster, &shield);
        }

        for spec in &definition.effects {
            if spec.on_hit && damage == 0 {
                debug!("{:?} from {} needs a hit", spec.kind(), card.name());
                continue;
            }
            if let Some(chance) = spec.chance {
                if !self.rng.gen_bool(chance) {
                    debug!("{:?} from {} missed its roll", spec.kind(), card.name());
                    continue;
                }
            }
            let recipient = if spec.kind().targets_opponent() {
                target
            } else {
                caster
            };
            self.apply_effect(recipient, spec);
        }

        PlayOutcome {
            card: definition.id.clone(),
            damage,
            absorbed,
            result: None,
        }
    }

    /// Apply one effect and carry out whatever instant work it hands back.
    fn apply_effect(&mut self, target: Side, spec: &EffectSpec) {
        let kind = spec.kind();
        match StatusEngine::apply(self.combatant_mut(target), spec) {
            Application::Instant(outcome) => {
                self.emit(BattleEvent::InstantResolved {
                    target,
                    kind,
                    outcome,
                });
                match outcome {
                    InstantOutcome::Draw(count) => self.draw_cards(target, count as usize),
                    InstantOutcome::Discard(count) => self.discard_random(target, count as usize),
                    InstantOutcome::Mana(amount) => {
                        self.combatant_mut(target).gain_mana(amount);
                        self.mana_changed(target);
                    }
                    InstantOutcome::Healed(_) | InstantOutcome::Damaged(_) | InstantOutcome::Ignored => {}
                }
            }
            application => self.emit(BattleEvent::EffectApplied {
                target,
                kind,
                application,
            }),
        }
    }

    fn draw_cards(&mut self, side: Side, count: usize) {
        let drawn = match side {
            Side::Player => self.player_deck.draw_multiple(count, &mut self.rng),
            Side::Enemy => self.enemy_deck.draw_multiple(count, &mut self.rng),
        };
        self.record_draws(side, drawn);
    }

    fn record_draws(&mut self, side: Side, drawn: Vec<CardInstance>) {
        for card in drawn {
            debug!("{side} draws {}", card.name());
            self.emit(BattleEvent::CardDrawn {
                side,
                instance: card.instance_id,
                card: card.card_id().clone(),
            });
        }
        if side == Side::Player {
            self.player_deck.refresh_playable(self.player.mana());
        }
    }

    fn discard_random(&mut self, side: Side, count: usize) {
        let discarded = match side {
            Side::Player => self.player_deck.discard_random(count, &mut self.rng),
            Side::Enemy => self.enemy_deck.discard_random(count, &mut self.rng),
        };
        for card in discarded {
            self.emit(BattleEvent::CardDiscarded {
                side,
                instance: card.instance_id,
                card: card.card_id().clone(),
            });
        }
    }

    fn mana_changed(&mut self, side: Side) {
        if side == Side::Player {
            self.player_deck.refresh_playable(self.player.mana());
        }
        let combatant = self.combatant(side);
        let event = BattleEvent::ManaChanged {
            side,
            mana: combatant.mana(),
            max_mana: combatant.max_mana,
        };
        self.emit(event);
    }

    // === Terminal handling ===

    fn check_terminal(&mut self) -> Option<BattleResult> {
        let result = if self.enemy.is_defeated() {
            BattleResult::Victory
        } else if self.player.is_defeated() {
            BattleResult::Defeat
        } else {
            return None;
        };
        self.finish(result);
        Some(result)
    }

    fn finish(&mut self, result: BattleResult) {
        self.enter(result.phase());
        if result == BattleResult::Victory {
            let rewards = RewardResolver::resolve(
                &self.enemy_definition,
                &self.drop_pool,
                &self.config,
                &mut self.rng,
            );
            info!(
                "{} defeated: {} xp, {} gold, {} cards",
                self.enemy.name,
                rewards.xp,
                rewards.gold,
                rewards.cards.len()
            );
            self.rewards = Some(rewards);
        }
        info!("battle ended in {:?} after {} turns", result, self.turn);
        self.emit(BattleEvent::BattleEnded {
            result,
            turns: self.turn,
        });
    }

    // === Transitions ===

    fn check_transition(&self, to: Phase) -> Result<(), BattleError> {
        if self.phase.can_transition_to(to) {
            Ok(())
        } else {
            Err(self.illegal(to))
        }
    }

    fn illegal(&self, to: Phase) -> BattleError {
        warn!("rejected phase transition {} -> {}", self.phase, to);
        BattleError::IllegalTransition {
            from: self.phase,
            to,
        }
    }

    /// Move along an edge the caller has already validated.
    fn enter(&mut self, to: Phase) {
        debug_assert!(self.phase.can_transition_to(to), "{:?} -> {:?}", self.phase, to);
        let from = self.phase;
        self.phase = to;
        debug!("phase {from} -> {to}");
        self.emit(BattleEvent::PhaseChanged { from, to });
    }

    fn require_phase(&self, expected: Phase) -> Result<(), ActionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(reject(ActionError::WrongPhase {
                expected,
                actual: self.phase,
            }))
        }
    }

    fn emit(&mut self, event: BattleEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&event);
        }
        self.events.push(event);
    }

    fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    #[must_use]
    pub fn player(&self) -> &Combatant {
        &self.player
    }

    #[must_use]
    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    #[must_use]
    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    #[must_use]
    pub fn enemy_definition(&self) -> &EnemyDefinition {
        &self.enemy_definition
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// The player's hand.
    #[must_use]
    pub fn hand(&self) -> &Vector<CardInstance> {
        self.player_deck.hand()
    }

    /// Whether the player may play cards this turn. False for a turn lost
    /// to frozen or stunned.
    #[must_use]
    pub fn can_act(&self) -> bool {
        self.phase == Phase::PlayerTurn && self.player_can_act
    }

    /// Hand cards the player can afford right now. Empty when the player
    /// cannot act.
    pub fn playable_cards(&self) -> impl Iterator<Item = &CardInstance> {
        let mana = self.player.mana();
        let can_act = self.can_act();
        self.player_deck
            .hand()
            .iter()
            .filter(move |c| can_act && c.can_play(mana))
    }

    #[must_use]
    pub fn deck(&self, side: Side) -> &Deck {
        match side {
            Side::Player => &self.player_deck,
            Side::Enemy => &self.enemy_deck,
        }
    }

    /// Pile sizes for one side.
    #[must_use]
    pub fn counts(&self, side: Side) -> DeckCounts {
        self.deck(side).counts()
    }

    #[must_use]
    pub fn rewards(&self) -> Option<&Rewards> {
        self.rewards.as_ref()
    }

    /// The final result, once the battle is over.
    #[must_use]
    pub fn outcome(&self) -> Option<BattleOutcome> {
        let result = match self.phase {
            Phase::Victory => BattleResult::Victory,
            Phase::Defeat => BattleResult::Defeat,
            _ => return None,
        };
        Some(BattleOutcome {
            result,
            turns: self.turn,
            rewards: self.rewards.clone(),
        })
    }

    /// Events emitted since the last drain.
    #[must_use]
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            phase: self.phase,
            turn: self.turn,
            can_act: self.can_act(),
            player: self.player.clone(),
            enemy: self.enemy.clone(),
            hand: self.player_deck.hand().clone(),
            player_counts: self.player_deck.counts(),
            enemy_counts: self.enemy_deck.counts(),
        }
    }
}

fn reject(err: ActionError) -> ActionError {
    warn!("action rejected: {err}");
    err
}
