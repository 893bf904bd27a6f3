use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dice_duel::{score, DiceDuel, DicePair, Die, GameConfig};

fn bench_score_all_pairs(c: &mut Criterion) {
    let pairs: Vec<DicePair> = (1..=6u8)
        .flat_map(|a| (1..=6u8).map(move |b| DicePair::new(Die::new(a), Die::new(b))))
        .collect();

    c.bench_function("score_all_pairs", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for &pair in &pairs {
                total += score(black_box(pair));
            }
            total
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut game = DiceDuel::new(GameConfig::default(), black_box(seed));
            game.reset();
            while game.state().is_active() {
                let _ = game.roll();
            }
            game.result()
        })
    });
}

criterion_group!(benches, bench_score_all_pairs, bench_full_game);
criterion_main!(benches);
