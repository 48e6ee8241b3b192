use crate::domain::chips::Chips;
use crate::domain::position::Position;
use crate::domain::round::{PositionResult, RoundOutcome, RoundPhase, RoundSummary};
use crate::domain::shoe::Shoe;
use crate::domain::{PositionIndex, RoundId};
use crate::engine::actions::Move;
use crate::engine::errors::EngineError;
use crate::engine::history::{RoundEventKind, RoundHistory};
use crate::engine::RandomSource;

/// Статус раунда для внешнего кода.
#[derive(Debug)]
pub enum RoundStatus {
    Ongoing,
    Finished(RoundSummary),
}

/// Состояние одной игровой сессии: текущий раунд плюс то, что раунды
/// переживает (банкролл, счётчик раундов).
///
/// Никакого глобального состояния: весь движок — свободные функции,
/// принимающие `&mut Game`.
pub struct Game {
    /// Башмак текущего раунда. Пересобирается при каждой ставке.
    pub shoe: Shoe,
    /// Позиции игрока: стартовая рука под индексом 0, рука после
    /// сплита — под индексом 1. Список только растёт внутри раунда.
    pub positions: Vec<Position>,
    /// Позиция дилера.
    pub dealer: Position,
    /// Банкролл игрока. Единственное, что переносится между раундами.
    pub bankroll: Chips,
    /// Фаза раунда (она же — защита от повторного расчёта).
    pub phase: RoundPhase,
    /// Итог последнего рассчитанного раунда.
    pub result: Option<RoundOutcome>,
    /// Номер текущего раунда, с единицы.
    pub round_id: RoundId,
    /// События текущего раунда.
    pub history: RoundHistory,
}

impl Game {
    /// Стартовый банкролл сессии.
    pub const STARTING_BANKROLL: Chips = Chips(1_000);

    pub fn new() -> Self {
        Self {
            shoe: Shoe::standard_52(),
            positions: Vec::new(),
            dealer: Position::dealer(),
            bankroll: Self::STARTING_BANKROLL,
            phase: RoundPhase::AwaitingBet,
            result: None,
            round_id: 0,
            history: RoundHistory::new(),
        }
    }

    /// Раунд рассчитан? Производная от фазы.
    pub fn finished(&self) -> bool {
        matches!(self.phase, RoundPhase::Settled)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Начать новый раунд со ставкой `bet`:
/// - выбросить позиции, итог и историю прошлого раунда;
/// - собрать свежий башмак и перемешать его через `rng`;
/// - раздать стартовые руки.
///
/// Разрешено из любой фазы: повторная ставка бросает текущий раунд.
pub fn place_bet<R: RandomSource>(
    game: &mut Game,
    rng: &mut R,
    bet: Chips,
) -> Result<(), EngineError> {
    let mut shoe = Shoe::standard_52();
    rng.shuffle(&mut shoe.cards);

    game.shoe = shoe;
    game.positions = vec![Position::human(bet)];
    game.dealer = Position::dealer();
    game.result = None;
    game.round_id += 1;
    game.history = RoundHistory::new();
    game.phase = RoundPhase::PlayerTurn;

    game.history.push(RoundEventKind::RoundStarted {
        round_id: game.round_id,
        bet,
    });

    deal_opening_hands(game)
}

/// Стартовая раздача: игроку две открытые карты, затем дилеру — закрытую
/// и открытую. Порядок карт дилера фиксирован и наблюдаем по флагам
/// видимости. Перебор при раздаче не проверяется: оценка руки идёт
/// только после ходов.
fn deal_opening_hands(game: &mut Game) -> Result<(), EngineError> {
    for _ in 0..2 {
        let card = game.shoe.draw(true).ok_or(EngineError::OutOfCards)?;
        game.positions[0].hand.push(card);
        game.history
            .push(RoundEventKind::CardDealt { position: 0, card });
    }

    let hidden = game.shoe.draw(false).ok_or(EngineError::OutOfCards)?;
    game.dealer.hand.push(hidden);
    let shown = game.shoe.draw(true).ok_or(EngineError::OutOfCards)?;
    game.dealer.hand.push(shown);

    game.history.push(RoundEventKind::DealerCardsDealt {
        cards: vec![hidden, shown],
    });

    Ok(())
}

/// Применить ход игрока по внешнему имени (`take_card`, `stay`,
/// `double_bet`, `split_hand`).
///
/// Неизвестное имя — no-op без ошибки; проверка завершения раунда при
/// этом всё равно выполняется, как и после настоящего хода.
pub fn submit_move(
    game: &mut Game,
    position: PositionIndex,
    action_name: &str,
) -> Result<RoundStatus, EngineError> {
    match Move::from_name(action_name) {
        Some(mv) => apply_move(game, position, mv),
        None => {
            ensure_player_turn(game)?;
            ensure_position(game, position)?;
            Ok(evaluate_round(game))
        }
    }
}

/// Применить типизированный ход к адресованной позиции.
///
/// Позиция выбирается только по индексу: флаги `playable`/`bust` ходы не
/// блокируют (остановленная рука всё ещё может взять карту — и перебрать).
/// Раунд заканчивается не запретами, а проверкой завершения после хода.
pub fn apply_move(
    game: &mut Game,
    position: PositionIndex,
    mv: Move,
) -> Result<RoundStatus, EngineError> {
    ensure_player_turn(game)?;
    ensure_position(game, position)?;

    let idx = position as usize;
    match mv {
        Move::TakeCard => {
            // Пустой башмак здесь — «карта не взята», а не ошибка:
            // рука не меняется вообще.
            if let Some(card) = game.shoe.draw(true) {
                let pos = &mut game.positions[idx];
                pos.hand.push(card);
                pos.check_value();
                let value = pos.hand_value();
                game.history.push(RoundEventKind::PlayerActed {
                    position,
                    action: mv,
                    hand_value_after: value,
                });
            }
        }

        Move::Stay => {
            let pos = &mut game.positions[idx];
            pos.playable = false;
            let value = pos.hand_value();
            game.history.push(RoundEventKind::PlayerActed {
                position,
                action: mv,
                hand_value_after: value,
            });
        }

        Move::DoubleBet => {
            let pos = &mut game.positions[idx];
            if let Some(bet) = pos.bet {
                pos.bet = Some(bet.doubled());
            }
            let value = pos.hand_value();
            game.history.push(RoundEventKind::PlayerActed {
                position,
                action: mv,
                hand_value_after: value,
            });
        }

        Move::SplitHand => {
            split_first_hand(game, position);
        }
    }

    Ok(evaluate_round(game))
}

/// Сплит в каноничной ситуации: адресована первая позиция, сплита ещё
/// не было, в руке ровно две карты. Любое другое обращение — no-op:
/// движок не обобщается до повторных сплитов. Совпадение рангов двух
/// карт НЕ требуется.
fn split_first_hand(game: &mut Game, position: PositionIndex) {
    if position != 0 || game.positions.len() != 1 {
        return;
    }
    if game.positions[0].hand.len() != 2 {
        return;
    }

    let bet = game.positions[0].bet_amount();
    let moved = match game.positions[0].hand.cards.pop() {
        Some(card) => card,
        None => return,
    };

    let mut split = Position::human(bet);
    split.hand.push(moved);
    game.positions.push(split);

    game.history.push(RoundEventKind::HandSplit {
        from_position: position,
        new_position: 1,
        moved,
        bet,
    });
}

/// Проверка завершения раунда. Выполняется после каждого обращения:
/// 1. все позиции игрока перебрали — расчёт сразу, дилер НЕ добирает;
/// 2. никто больше не в игре — добор дилера, затем расчёт;
/// 3. иначе раунд продолжается.
fn evaluate_round(game: &mut Game) -> RoundStatus {
    if all_humans_busted(game) {
        return RoundStatus::Finished(settle(game));
    }

    if !any_human_in_play(game) {
        run_dealer_turn(game);
        return RoundStatus::Finished(settle(game));
    }

    RoundStatus::Ongoing
}

fn all_humans_busted(game: &Game) -> bool {
    game.positions.iter().all(|p| p.bust)
}

fn any_human_in_play(game: &Game) -> bool {
    game.positions.iter().any(|p| p.is_in_play())
}

/// Добор дилера. Сюда попадаем только когда хотя бы одна позиция игрока
/// не перебрала; дилер берёт карты, пока `dealer_take_card` сообщает
/// «взял».
fn run_dealer_turn(game: &mut Game) {
    game.phase = RoundPhase::DealerTurn;

    while dealer_take_card(game) {}

    game.history.push(RoundEventKind::DealerStood {
        value: game.dealer.hand_value(),
    });
}

/// Один шаг добора дилера: карта берётся только при сумме < 17, иначе
/// (как и при пустом башмаке) — «карта не взята». Перебор пересчитывается
/// в обоих случаях, чтобы цикл добора мог завершиться честно.
fn dealer_take_card(game: &mut Game) -> bool {
    if game.dealer.hand_value() < 17 {
        if let Some(card) = game.shoe.draw(true) {
            game.dealer.hand.push(card);
            game.dealer.check_value();
            game.history.push(RoundEventKind::DealerDrew {
                card,
                value_after: game.dealer.hand_value(),
            });
            return true;
        }
    }

    game.dealer.check_value();
    false
}

fn ensure_player_turn(game: &Game) -> Result<(), EngineError> {
    match game.phase {
        RoundPhase::PlayerTurn => Ok(()),
        RoundPhase::AwaitingBet => Err(EngineError::NoActiveRound),
        RoundPhase::DealerTurn | RoundPhase::Settled => Err(EngineError::RoundFinished),
    }
}

fn ensure_position(game: &Game, position: PositionIndex) -> Result<(), EngineError> {
    if (position as usize) < game.positions.len() {
        Ok(())
    } else {
        Err(EngineError::InvalidPosition(position))
    }
}

/// Расчёт раунда: ровно одно изменение банкролла и итоговый ярлык.
///
/// Вызывается только из двух путей завершения в `evaluate_round`;
/// повторный вход отрезан фазой `Settled` (любой следующий ход упрётся
/// в `RoundFinished`). Порядок ветвей важен: выигрывает первая
/// подходящая.
fn settle(game: &mut Game) -> RoundSummary {
    let dealer_value = game.dealer.hand_value();
    let dealer_busted = game.dealer.bust;

    let mut results: Vec<PositionResult> = Vec::new();

    let outcome = if all_humans_busted(game) {
        // 1. Перебрали все руки игрока: дилер забирает все ставки.
        for (i, pos) in game.positions.iter().enumerate() {
            let bet = pos.bet_amount();
            game.bankroll -= bet;
            results.push(PositionResult {
                position: i as PositionIndex,
                bet,
                hand_value: pos.hand_value(),
                busted: true,
                is_winner: false,
                net: Chips::ZERO - bet,
            });
        }
        RoundOutcome::DealerWon
    } else if dealer_busted {
        // 2. Дилер перебрал: каждая НЕ перебравшая рука получает свою
        //    ставку. Перебравшая рука сплита в этой ветке не списывается.
        for (i, pos) in game.positions.iter().enumerate() {
            let bet = pos.bet_amount();
            let won = !pos.bust;
            if won {
                game.bankroll += bet;
            }
            results.push(PositionResult {
                position: i as PositionIndex,
                bet,
                hand_value: pos.hand_value(),
                busted: pos.bust,
                is_winner: won,
                net: if won { bet } else { Chips::ZERO },
            });
        }
        RoundOutcome::HumanWon
    } else if game.positions.len() == 1 {
        // 3. Одна рука: простое сравнение. Равенство очков — выигрыш
        //    дилера, правила push здесь нет.
        let pos = &game.positions[0];
        let bet = pos.bet_amount();
        let won = pos.hand_value() > dealer_value;
        if won {
            game.bankroll += bet;
        } else {
            game.bankroll -= bet;
        }
        results.push(PositionResult {
            position: 0,
            bet,
            hand_value: pos.hand_value(),
            busted: false,
            is_winner: won,
            net: if won { bet } else { Chips::ZERO - bet },
        });
        if won {
            RoundOutcome::HumanWon
        } else {
            RoundOutcome::DealerWon
        }
    } else if game.positions.iter().any(|p| p.bust) {
        // 4. Сплит, одна рука перебрала: живая сравнивается с дилером
        //    за свою ставку, ставка перебравшей списывается безусловно.
        let mut live_won = false;
        for (i, pos) in game.positions.iter().enumerate() {
            let bet = pos.bet_amount();
            if pos.bust {
                game.bankroll -= bet;
                results.push(PositionResult {
                    position: i as PositionIndex,
                    bet,
                    hand_value: pos.hand_value(),
                    busted: true,
                    is_winner: false,
                    net: Chips::ZERO - bet,
                });
            } else {
                let won = pos.hand_value() > dealer_value;
                if won {
                    game.bankroll += bet;
                    live_won = true;
                } else {
                    game.bankroll -= bet;
                }
                results.push(PositionResult {
                    position: i as PositionIndex,
                    bet,
                    hand_value: pos.hand_value(),
                    busted: false,
                    is_winner: won,
                    net: if won { bet } else { Chips::ZERO - bet },
                });
            }
        }
        if live_won {
            RoundOutcome::HumanWon
        } else {
            RoundOutcome::DealerWon
        }
    } else {
        // 5. Сплит, обе руки живы: руки идут по убыванию очков
        //    (стабильно при равенстве), каждая сравнивается с дилером
        //    независимо. Ярлык отражает число выигравших рук.
        let mut order: Vec<usize> = (0..game.positions.len()).collect();
        order.sort_by(|&a, &b| {
            game.positions[b]
                .hand_value()
                .cmp(&game.positions[a].hand_value())
        });

        let mut winners = 0u32;
        for &i in &order {
            let pos = &game.positions[i];
            let bet = pos.bet_amount();
            let won = pos.hand_value() > dealer_value;
            if won {
                game.bankroll += bet;
                winners += 1;
            } else {
                game.bankroll -= bet;
            }
            results.push(PositionResult {
                position: i as PositionIndex,
                bet,
                hand_value: pos.hand_value(),
                busted: false,
                is_winner: won,
                net: if won { bet } else { Chips::ZERO - bet },
            });
        }

        match winners {
            2 => RoundOutcome::TwoHumansWon,
            1 => RoundOutcome::OneHumanWon,
            _ => RoundOutcome::DealerWon,
        }
    };

    game.result = Some(outcome);
    game.phase = RoundPhase::Settled;
    game.history.push(RoundEventKind::RoundSettled {
        outcome,
        bankroll_after: game.bankroll,
    });

    RoundSummary {
        round_id: game.round_id,
        outcome,
        dealer_value,
        dealer_busted,
        bankroll_after: game.bankroll,
        results,
    }
}
