use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hotel_management::{BookingRegistry, BookingStrategy, Guest, PolicyKind};
use rand::{thread_rng, Rng};

// Book/checkout cycles against random room ids, a third of them out of range
pub fn registry_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("booking_registry");

    for num_rooms in [10u32, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_rooms),
            num_rooms,
            |b, &num_rooms| {
                let mut rng = thread_rng();
                let room_ids = (0..1000)
                    .map(|_| rng.gen_range(0..=num_rooms + num_rooms / 2))
                    .collect::<Vec<_>>();
                let standard = BookingStrategy::standard();
                let vip = BookingStrategy::from(PolicyKind::VipOnly);

                b.iter(|| {
                    let mut registry = BookingRegistry::new(num_rooms);

                    for (i, &room_id) in room_ids.iter().enumerate() {
                        let guest = Guest::new(format!("VIP-{i}"), 30, "555-0100");
                        let res = if i % 2 == 0 {
                            registry.book_room(room_id, guest, &standard)
                        } else {
                            registry.book_room(room_id, guest, &vip)
                        };
                        let _ = black_box(res);

                        if i % 3 == 0 {
                            let _ = black_box(registry.checkout(room_id));
                        }
                    }

                    black_box(registry.list_available())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, registry_benchmark);
criterion_main!(benches);
