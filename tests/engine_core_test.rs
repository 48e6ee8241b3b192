//! Тесты ядра движка: стартовая раздача, диспетчеризация ходов,
//! протокол сплита, добор дилера.

use blackjack_engine::domain::{
    card::Card,
    chips::Chips,
    position::Position,
    round::RoundPhase,
    shoe::Shoe,
};
use blackjack_engine::engine::{
    apply_move, place_bet, submit_move, Game, Move, RandomSource, RoundEventKind, RoundStatus,
};

/// Простой детерминированный RNG для тестов:
/// shuffle ничего не делает => башмак остаётся в стандартном порядке.
#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}

/// Удобный конструктор карты из строки вида "Ah".
fn card(s: &str) -> Card {
    s.parse().expect("card literal")
}

/// Игра, собранная напрямую в фазе хода игрока: рука игрока, рука дилера
/// (первая карта закрыта) и остаток башмака. Башмак выдаёт карты с
/// КОНЦА списка: последний элемент `shoe_rest` — следующая карта.
fn game_in_play(bet: i64, human: &[&str], dealer: &[&str], shoe_rest: &[&str]) -> Game {
    let mut game = Game::new();
    game.phase = RoundPhase::PlayerTurn;
    game.round_id = 1;

    let mut pos = Position::human(Chips::new(bet));
    for c in human {
        pos.hand.push(card(c));
    }
    game.positions = vec![pos];

    game.dealer = Position::dealer();
    for (i, c) in dealer.iter().enumerate() {
        let mut dc = card(c);
        dc.face_up = i != 0;
        game.dealer.hand.push(dc);
    }

    game.shoe = Shoe {
        cards: shoe_rest.iter().map(|s| card(s)).collect(),
    };

    game
}

//
// place_bet: форма стартовой раздачи
//
#[test]
fn place_bet_deals_opening_hands() {
    let mut game = Game::new();
    let mut rng = DummyRng;

    place_bet(&mut game, &mut rng, Chips::new(100)).unwrap();

    assert_eq!(game.phase, RoundPhase::PlayerTurn);
    assert_eq!(game.round_id, 1);
    assert!(!game.finished());
    assert_eq!(game.result, None);

    // Банкролл не трогается до расчёта.
    assert_eq!(game.bankroll, Game::STARTING_BANKROLL);

    // Игроку — две открытые карты.
    assert_eq!(game.positions.len(), 1);
    let human = &game.positions[0];
    assert_eq!(human.hand.len(), 2);
    assert!(human.hand.cards.iter().all(|c| c.face_up));
    assert_eq!(human.bet, Some(Chips::new(100)));

    // Дилеру — закрытая, затем открытая: видимость [false, true].
    assert_eq!(game.dealer.hand.len(), 2);
    assert!(!game.dealer.hand.cards[0].face_up);
    assert!(game.dealer.hand.cards[1].face_up);

    // 52 − 4 карты раздачи.
    assert_eq!(game.shoe.len(), 48);
}

/// Перебор при стартовой раздаче не проверяется: руки раздаются как есть.
#[test]
fn place_bet_does_not_run_bust_checks() {
    let mut game = Game::new();
    place_bet(&mut game, &mut DummyRng, Chips::new(10)).unwrap();

    assert!(!game.positions[0].bust);
    assert!(game.positions[0].playable);
    assert!(!game.dealer.bust);
}

/// Повторная ставка бросает текущий раунд и начинает следующий.
#[test]
fn place_bet_resets_previous_round() {
    let mut game = Game::new();
    let mut rng = DummyRng;

    place_bet(&mut game, &mut rng, Chips::new(100)).unwrap();
    // Раунд доигрывается до конца…
    let _ = submit_move(&mut game, 0, "stay").unwrap();
    assert!(game.finished());
    let bankroll_after_first = game.bankroll;

    // …и следующая ставка собирает всё заново.
    place_bet(&mut game, &mut rng, Chips::new(25)).unwrap();

    assert_eq!(game.round_id, 2);
    assert_eq!(game.phase, RoundPhase::PlayerTurn);
    assert_eq!(game.result, None);
    assert_eq!(game.positions.len(), 1);
    assert_eq!(game.positions[0].hand.len(), 2);
    assert_eq!(game.shoe.len(), 48);
    // Банкролл переживает смену раунда.
    assert_eq!(game.bankroll, bankroll_after_first);

    // История начата заново: первое событие — RoundStarted нового раунда.
    match &game.history.events[0].kind {
        RoundEventKind::RoundStarted { round_id, bet } => {
            assert_eq!(*round_id, 2);
            assert_eq!(*bet, Chips::new(25));
        }
        other => panic!("ожидали RoundStarted, получили {other:?}"),
    }
}

/// История стартовой раздачи: RoundStarted, две карты игроку, карты дилера.
#[test]
fn opening_deal_is_recorded_in_history() {
    let mut game = Game::new();
    place_bet(&mut game, &mut DummyRng, Chips::new(100)).unwrap();

    let kinds = &game.history.events;
    assert_eq!(kinds.len(), 4);
    assert!(matches!(kinds[0].kind, RoundEventKind::RoundStarted { .. }));
    assert!(matches!(kinds[1].kind, RoundEventKind::CardDealt { position: 0, .. }));
    assert!(matches!(kinds[2].kind, RoundEventKind::CardDealt { position: 0, .. }));
    assert!(matches!(kinds[3].kind, RoundEventKind::DealerCardsDealt { .. }));

    // Индексы событий последовательны.
    for (i, ev) in kinds.iter().enumerate() {
        assert_eq!(ev.index, i as u32);
    }
}

//
// Move: разбор внешних имён
//
#[test]
fn move_names_roundtrip() {
    let moves = [Move::TakeCard, Move::Stay, Move::DoubleBet, Move::SplitHand];
    for mv in moves {
        assert_eq!(Move::from_name(mv.name()), Some(mv));
    }

    assert_eq!(Move::from_name("fold"), None);
    assert_eq!(Move::from_name("TAKE_CARD"), None);
    assert_eq!(Move::from_name(""), None);
}

//
// take_card / stay / double_bet
//
#[test]
fn take_card_appends_face_up_and_rechecks() {
    let mut game = game_in_play(100, &["2d", "3d"], &["Tc", "Jh"], &["5s"]);

    let status = apply_move(&mut game, 0, Move::TakeCard).unwrap();
    assert!(matches!(status, RoundStatus::Ongoing));

    let human = &game.positions[0];
    assert_eq!(human.hand.len(), 3);
    assert_eq!(human.hand.cards[2], card("5s"));
    assert!(human.hand.cards[2].face_up);
    assert_eq!(human.hand.value(), 10);
    assert!(!human.bust);
    assert!(game.shoe.is_empty());
}

/// Пустой башмак при take_card — «карта не взята», рука не меняется,
/// раунд продолжается.
#[test]
fn take_card_on_empty_shoe_is_noop() {
    let mut game = game_in_play(100, &["2d", "3d"], &["Tc", "Jh"], &[]);
    let events_before = game.history.events.len();

    let status = apply_move(&mut game, 0, Move::TakeCard).unwrap();

    assert!(matches!(status, RoundStatus::Ongoing));
    assert_eq!(game.positions[0].hand.len(), 2);
    assert!(game.positions[0].is_in_play());
    // No-op в историю не пишется.
    assert_eq!(game.history.events.len(), events_before);
}

#[test]
fn stay_stops_the_position() {
    let mut game = game_in_play(100, &["9d", "9h"], &["Tc", "Jh"], &[]);

    let status = apply_move(&mut game, 0, Move::Stay).unwrap();

    // Единственная позиция остановилась — раунд сразу доигран.
    assert!(matches!(status, RoundStatus::Finished(_)));
    assert!(!game.positions[0].playable);
    assert!(!game.positions[0].bust);
}

/// double_bet удваивает ставку, не берёт карту и не заканчивает ход;
/// повторное удвоение разрешено.
#[test]
fn double_bet_is_repeatable_and_does_not_end_turn() {
    let mut game = game_in_play(250, &["9d", "9h"], &["Tc", "Jh"], &[]);

    let status = apply_move(&mut game, 0, Move::DoubleBet).unwrap();
    assert!(matches!(status, RoundStatus::Ongoing));
    assert_eq!(game.positions[0].bet, Some(Chips::new(500)));
    assert_eq!(game.positions[0].hand.len(), 2);
    assert!(game.positions[0].is_in_play());

    let status = apply_move(&mut game, 0, Move::DoubleBet).unwrap();
    assert!(matches!(status, RoundStatus::Ongoing));
    assert_eq!(game.positions[0].bet, Some(Chips::new(1_000)));
}

//
// Сплит
//
#[test]
fn split_moves_last_card_to_new_position() {
    let mut game = game_in_play(250, &["2d", "2h"], &["Tc", "Jh"], &["5s", "4s"]);

    let status = apply_move(&mut game, 0, Move::SplitHand).unwrap();
    assert!(matches!(status, RoundStatus::Ongoing));

    assert_eq!(game.positions.len(), 2);

    // Оригинал держит [X], новая позиция — [Y].
    assert_eq!(game.positions[0].hand.cards, vec![card("2d")]);
    assert_eq!(game.positions[1].hand.cards, vec![card("2h")]);

    // Обе позиции несут одну и ту же ставку.
    assert_eq!(game.positions[0].bet, Some(Chips::new(250)));
    assert_eq!(game.positions[1].bet, Some(Chips::new(250)));
    assert!(game.positions[1].is_in_play());

    // Сплит записан в историю.
    assert!(game.history.events.iter().any(|e| matches!(
        e.kind,
        RoundEventKind::HandSplit {
            from_position: 0,
            new_position: 1,
            ..
        }
    )));
}

/// Совпадение рангов для сплита НЕ требуется: правило намеренно
/// разрешительное.
#[test]
fn split_does_not_require_matching_ranks() {
    let mut game = game_in_play(100, &["Ah", "7d"], &["Tc", "Jh"], &[]);

    apply_move(&mut game, 0, Move::SplitHand).unwrap();

    assert_eq!(game.positions.len(), 2);
    assert_eq!(game.positions[0].hand.cards, vec![card("Ah")]);
    assert_eq!(game.positions[1].hand.cards, vec![card("7d")]);
}

/// Сплит вне каноничной ситуации — no-op, а не ошибка.
#[test]
fn split_outside_canonical_situation_is_noop() {
    // Рука из трёх карт не делится.
    let mut game = game_in_play(100, &["2d", "2h", "2s"], &["Tc", "Jh"], &[]);
    apply_move(&mut game, 0, Move::SplitHand).unwrap();
    assert_eq!(game.positions.len(), 1);

    // Повторный сплит не делится.
    let mut game = game_in_play(100, &["2d", "2h"], &["Tc", "Jh"], &[]);
    apply_move(&mut game, 0, Move::SplitHand).unwrap();
    assert_eq!(game.positions.len(), 2);
    apply_move(&mut game, 0, Move::SplitHand).unwrap();
    assert_eq!(game.positions.len(), 2);

    // Сплит, адресованный второй позиции, не делится.
    apply_move(&mut game, 1, Move::SplitHand).unwrap();
    assert_eq!(game.positions.len(), 2);
}

/// Ставка сплита копирует ТЕКУЩУЮ ставку, в том числе уже удвоенную.
#[test]
fn split_carries_current_bet() {
    let mut game = game_in_play(100, &["8d", "8h"], &["Tc", "Jh"], &[]);

    apply_move(&mut game, 0, Move::DoubleBet).unwrap();
    apply_move(&mut game, 0, Move::SplitHand).unwrap();

    assert_eq!(game.positions[0].bet, Some(Chips::new(200)));
    assert_eq!(game.positions[1].bet, Some(Chips::new(200)));
}

//
// Добор дилера
//
#[test]
fn dealer_draws_to_17_then_stops() {
    // Дилер 12; башмак (с конца): 2s → 14, 3s → 17, стоп. Kc не берётся.
    let mut game = game_in_play(100, &["Th", "9h"], &["Tc", "2h"], &["Kc", "3s", "2s"]);

    let status = apply_move(&mut game, 0, Move::Stay).unwrap();
    assert!(matches!(status, RoundStatus::Finished(_)));

    assert_eq!(game.dealer.hand.value(), 17);
    assert_eq!(game.dealer.hand.len(), 4);
    assert!(!game.dealer.bust);
    // Kc остался в башмаке: на 17 дилер уже не берёт.
    assert_eq!(game.shoe.len(), 1);

    // Остановка дилера записана.
    assert!(game
        .history
        .events
        .iter()
        .any(|e| matches!(e.kind, RoundEventKind::DealerStood { value: 17 })));
}

/// На 17 и больше дилер не добирает вовсе.
#[test]
fn dealer_never_draws_at_17_or_more() {
    let mut game = game_in_play(100, &["Th", "9h"], &["Tc", "7h"], &["Kc"]);

    apply_move(&mut game, 0, Move::Stay).unwrap();

    assert_eq!(game.dealer.hand.len(), 2);
    assert_eq!(game.shoe.len(), 1);
}

/// Если все позиции игрока перебрали, дилер не добирает совсем.
#[test]
fn dealer_skips_draw_when_all_humans_busted() {
    // Игрок на 20 берёт карту и перебирает.
    let mut game = game_in_play(100, &["Th", "Qh"], &["Tc", "2h"], &["5s", "Kc"]);

    let status = apply_move(&mut game, 0, Move::TakeCard).unwrap();
    assert!(matches!(status, RoundStatus::Finished(_)));

    assert!(game.positions[0].bust);
    // Дилер остался с двумя картами раздачи, несмотря на 12 очков.
    assert_eq!(game.dealer.hand.len(), 2);
    assert!(game.finished());
}

/// Пустой башмак на доборе дилера завершает цикл без паники.
#[test]
fn dealer_draw_tolerates_empty_shoe() {
    let mut game = game_in_play(100, &["Th", "9h"], &["Tc", "2h"], &[]);

    let status = apply_move(&mut game, 0, Move::Stay).unwrap();
    assert!(matches!(status, RoundStatus::Finished(_)));

    assert_eq!(game.dealer.hand.len(), 2);
    assert_eq!(game.dealer.hand.value(), 12);
    assert!(game.finished());
}

//
// submit_move: диспетчеризация по внешнему имени
//
#[test]
fn submit_move_dispatches_by_name() {
    let mut game = game_in_play(100, &["2d", "3d"], &["Tc", "Jh"], &["5s"]);

    let status = submit_move(&mut game, 0, "take_card").unwrap();
    assert!(matches!(status, RoundStatus::Ongoing));
    assert_eq!(game.positions[0].hand.len(), 3);

    let status = submit_move(&mut game, 0, "stay").unwrap();
    assert!(matches!(status, RoundStatus::Finished(_)));
}
