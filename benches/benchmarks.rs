criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        shuffling_deck,
        allocating_side_pots,
        validating_transition,
        playing_ten_handed_game,
}

fn shuffling_deck(c: &mut criterion::Criterion) {
    c.bench_function("shuffle a 52-card Deck", |b| {
        b.iter(|| {
            let mut deck = Deck::new();
            deck.shuffle(criterion::black_box(42));
            deck
        })
    });
}

fn allocating_side_pots(c: &mut criterion::Criterion) {
    let contributions = (0..MAX_PLAYERS)
        .map(|i| Contribution {
            player: PlayerId::from(format!("p{i}")),
            chips: (i as Chips + 1) * 7,
            folded: i % 5 == 0,
        })
        .collect::<Vec<_>>();
    c.bench_function("allocate pots for a full table", |b| {
        b.iter(|| Pot::allocate(criterion::black_box(&contributions)))
    });
}

fn validating_transition(c: &mut criterion::Criterion) {
    let state = game(10);
    let action = Action::StartHand;
    c.bench_function("apply and audit one transition", |b| {
        b.iter(|| state.apply(criterion::black_box(&action)))
    });
}

fn playing_ten_handed_game(c: &mut criterion::Criterion) {
    let config = Config {
        max_hands: Some(10),
        ..Config::default()
    };
    c.bench_function("play 10 hands of check-call poker", |b| {
        b.iter(|| {
            let mut dealer = Dealer::from(&config);
            let mut state = game(10);
            while !state.is_over() {
                let action = match dealer.next(&state) {
                    Some(action) => action,
                    None => passive(&state),
                };
                state = state.apply(&action).expect("legal action");
            }
            state
        })
    });
}

fn game(n: usize) -> GameState {
    GameState::with_players((0..n).map(|i| (PlayerId::from(format!("p{i}")), STACK)))
        .expect("buy-ins")
}

fn passive(state: &GameState) -> Action {
    let player = state.actor().cloned().expect("someone to act");
    let options = state.options(&player);
    options
        .iter()
        .find(|a| a.is_check())
        .or_else(|| options.iter().find(|a| matches!(a, Action::PlayerCalls { .. })))
        .cloned()
        .unwrap_or(Action::PlayerFolds { player })
}

use holdem_referee::cards::Deck;
use holdem_referee::config::Config;
use holdem_referee::gameplay::*;
use holdem_referee::gameroom::Dealer;
use holdem_referee::*;
