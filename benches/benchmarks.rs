use holdem_equity::Arbitrary;
use holdem_equity::cards::*;
use holdem_equity::preflop::Exhaustive;
use holdem_equity::preflop::HandClass;
use holdem_equity::sampling::Lcg;
use holdem_equity::sampling::Sampler;
use holdem_equity::simulation::Simulation;

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
        evaluating_river_hand,
        scoring_river_hand,
        drawing_full_table,
        classifying_hole,
        simulating_preflop_equity,
        simulating_flop_equity,
        simulating_flop_equity_parallel,
        enumerating_turn_equity,
}

fn random_river() -> Hand {
    let mut deck = Deck::new();
    let mut sampler = Sampler::from(Lcg::from(rand::random::<u64>()));
    sampler
        .draw(deck.cards_mut(), holdem_equity::SHOWDOWN_SIZE)
        .map(|cards| cards.iter().copied().collect())
        .unwrap_or_default()
}

fn evaluating_river_hand(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card Hand", |b| {
        let hand = random_river();
        b.iter(|| Strength::from(hand))
    });
}

fn scoring_river_hand(c: &mut criterion::Criterion) {
    c.bench_function("score a 7-card Hand through the Oracle", |b| {
        let hand = random_river();
        b.iter(|| Ranker.score(hand))
    });
}

fn drawing_full_table(c: &mut criterion::Criterion) {
    let template = Deck::from(Hand::from(Hole::random()));
    let mut deck = template.clone();
    let mut sampler = Sampler::from(Lcg::from(0));
    c.bench_function("draw 23 cards for a 10-handed runout", |b| {
        b.iter(|| {
            deck.reset(&template);
            sampler.draw(deck.cards_mut(), 23).map(|d| d.len())
        })
    });
}

fn classifying_hole(c: &mut criterion::Criterion) {
    let hole = Hole::random();
    c.bench_function("classify a Hole into a HandClass", |b| {
        b.iter(|| HandClass::from(hole))
    });
}

fn simulating_preflop_equity(c: &mut criterion::Criterion) {
    let input = Input::from(Hole::random());
    let simulation = Simulation::new(6, input).expect("six seats");
    c.bench_function("simulate 10k preflop trials, 6-handed", |b| {
        b.iter(|| simulation.run(10_000, Some(1)))
    });
}

fn simulating_flop_equity(c: &mut criterion::Criterion) {
    let input = Input::parse(&["As", "Kd"], &["7h", "8h", "9h"]).expect("valid input");
    let simulation = Simulation::new(2, input).expect("two seats");
    c.bench_function("simulate 10k flop trials, heads-up", |b| {
        b.iter(|| simulation.run(10_000, Some(1)))
    });
}

fn simulating_flop_equity_parallel(c: &mut criterion::Criterion) {
    let input = Input::parse(&["As", "Kd"], &["7h", "8h", "9h"]).expect("valid input");
    let simulation = Simulation::new(2, input).expect("two seats");
    c.bench_function("simulate 100k flop trials, heads-up, parallel", |b| {
        b.iter(|| simulation.run_parallel(100_000, Some(1), num_cpus::get()))
    });
}

fn enumerating_turn_equity(c: &mut criterion::Criterion) {
    let input = Input::parse(&["As", "Kd"], &["7h", "8h", "9h", "2c"]).expect("valid input");
    let exhaustive = Exhaustive::new(input);
    c.bench_function("enumerate exact turn equity, heads-up", |b| {
        b.iter(|| exhaustive.run())
    });
}
