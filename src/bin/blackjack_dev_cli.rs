// src/bin/blackjack_dev_cli.rs

use blackjack_engine::api::{
    build_game_view, execute_for_session, Command, CommandResponse, GameViewDto, PlaceBetCommand,
    PlayerMoveCommand,
};
use blackjack_engine::domain::chips::Chips;
use blackjack_engine::infra::persistence::{GameStorage, SessionId};
use blackjack_engine::infra::{InMemoryGameStorage, SystemRng};

fn main() {
    println!("blackjack_dev_cli: стартуем dev-CLI движка блэкджека…");

    let mut storage = InMemoryGameStorage::new();
    let mut rng = SystemRng::default();
    let session: SessionId = 1;

    // Сценарий 1: простой раунд — ставка, пара карт, stay.
    play_round(
        &mut storage,
        session,
        &mut rng,
        Chips::new(100),
        &[(0, "take_card"), (0, "stay")],
        "BET 100 / TAKE / STAY",
    );

    // Сценарий 2: агрессивный добор до упора (рука почти наверняка переберёт).
    play_round(
        &mut storage,
        session,
        &mut rng,
        Chips::new(50),
        &[
            (0, "take_card"),
            (0, "take_card"),
            (0, "take_card"),
            (0, "take_card"),
        ],
        "BET 50 / TAKE x4",
    );

    // Сценарий 3: удвоение ставки и остановка на стартовой руке.
    play_round(
        &mut storage,
        session,
        &mut rng,
        Chips::new(200),
        &[(0, "double_bet"), (0, "stay")],
        "BET 200 / DOUBLE / STAY",
    );

    // Сценарий 4: сплит стартовой руки, обе позиции добирают по карте.
    play_round(
        &mut storage,
        session,
        &mut rng,
        Chips::new(250),
        &[
            (0, "split_hand"),
            (0, "take_card"),
            (0, "stay"),
            (1, "take_card"),
            (1, "stay"),
        ],
        "BET 250 / SPLIT / PLAY BOTH",
    );

    println!();
    println!("[CLI] Завершение работы dev-CLI.");
}

/// Один раунд по заданному сценарию: ставка и список ходов
/// (индекс позиции, внешнее имя действия). Состояние печатается после
/// каждого шага; хвост сценария после расчёта раунда пропускается.
fn play_round(
    storage: &mut InMemoryGameStorage,
    session: SessionId,
    rng: &mut SystemRng,
    bet: Chips,
    moves: &[(u8, &str)],
    title: &str,
) {
    println!();
    println!("================ ROUND {title} =================");

    let bet_cmd = Command::PlaceBet(PlaceBetCommand { amount: bet });
    match execute_for_session(storage, session, rng, bet_cmd) {
        Ok(CommandResponse::GameState(view)) => {
            println!("[CLI] Ставка {bet} принята, раунд начат.");
            print_game(&view);
        }
        Ok(other) => println!("[CLI] Неожиданный ответ на ставку: {other:?}"),
        Err(e) => {
            println!("[CLI] ОШИБКА при ставке: {e:?}");
            return;
        }
    }

    for &(position, action) in moves {
        println!();
        println!("[CLI] Ход: позиция {position}, действие '{action}'.");

        let cmd = Command::PlayerMove(PlayerMoveCommand {
            position,
            action: action.to_string(),
        });

        match execute_for_session(storage, session, rng, cmd) {
            Ok(CommandResponse::GameState(view)) => print_game(&view),
            Ok(CommandResponse::RoundFinished { game, summary }) => {
                print_game(&game);
                println!(
                    "[CLI] Раунд {} рассчитан: {} | дилер {} (bust={}) | банкролл {}",
                    summary.round_id,
                    summary.outcome,
                    summary.dealer_value,
                    summary.dealer_busted,
                    summary.bankroll_after
                );
                for r in &summary.results {
                    println!(
                        "[CLI]   позиция {}: ставка {}, очки {}, bust={}, win={}, net {}",
                        r.position, r.bet, r.hand_value, r.busted, r.is_winner, r.net
                    );
                }
                break;
            }
            Ok(CommandResponse::Ok) => println!("[CLI] Неожиданный пустой ответ на ход."),
            Err(e) => println!("[CLI] ОШИБКА при ходе: {e:?}"),
        }
    }

    // Финальное состояние сессии — то, что увидит следующий запрос хоста.
    if let Some(snapshot) = storage.load_game(session) {
        let view = build_game_view(&snapshot.into_game());
        println!(
            "[CLI] Сессия после раунда: банкролл {}, раунд №{}, finished={}.",
            view.bankroll, view.round_id, view.finished
        );
    }

    println!("============ END ROUND {title} ============");
}

/// Печать состояния игры в одну «простыню» — достаточно для dev-глаза.
fn print_game(view: &GameViewDto) {
    println!(
        "[CLI] Фаза {:?} | банкролл {} | башмак {} карт",
        view.phase, view.bankroll, view.shoe_remaining
    );

    for pos in &view.positions {
        let cards: Vec<String> = pos.cards.iter().map(card_text).collect();
        println!(
            "[CLI]   рука {}: [{}] = {} | ставка {} | bust={} playable={}",
            pos.position,
            cards.join(" "),
            pos.hand_value,
            pos.bet,
            pos.bust,
            pos.playable
        );
    }

    let dealer_cards: Vec<String> = view.dealer.cards.iter().map(card_text).collect();
    println!(
        "[CLI]   дилер: [{}] = {} (видимые) | bust={}",
        dealer_cards.join(" "),
        view.dealer.visible_value,
        view.dealer.bust
    );

    if let Some(result) = &view.result {
        println!("[CLI]   итог: {result}");
    }
}

fn card_text(card: &blackjack_engine::api::CardDto) -> String {
    match &card.code {
        Some(code) => code.clone(),
        None => "??".to_string(),
    }
}
