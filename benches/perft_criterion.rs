use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use grid_chess::game_state::chess_types::GameVariant;
use grid_chess::game_state::game::Game;
use grid_chess::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    variant: GameVariant,
    expected_nodes: &'static [u64],
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "standard_start",
        variant: GameVariant::Standard,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "custom_start",
        variant: GameVariant::Custom,
        expected_nodes: &[36],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "standard_start",
        variant: GameVariant::Standard,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "custom_start",
        variant: GameVariant::Custom,
        expected_nodes: &[36],
    },
];

fn suite_is_standard() -> bool {
    matches!(
        std::env::var("GRID_CHESS_BENCH_SUITE"),
        Ok(value) if value.eq_ignore_ascii_case("standard")
    )
}

fn bench_perft(c: &mut Criterion) {
    let (suite_name, cases) = if suite_is_standard() {
        ("standard", CASES_STANDARD)
    } else {
        ("quick", CASES_QUICK)
    };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in cases {
        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;
            let mut game = Game::new(case.variant);

            // Correctness guard before benchmarking.
            let warmup = perft(&mut game, depth);
            assert_eq!(
                warmup as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&mut game), black_box(depth));
                        assert_eq!(count as u64, *expected);
                        black_box(count)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
