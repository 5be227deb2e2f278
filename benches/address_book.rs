use addressbook::{
    consts::consts::PersonId,
    database::{database::Database, options::DatabaseOptions},
    model::{action::Action, person::PersonPayload},
};
use criterion::{criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    let request_manager = Database::new(DatabaseOptions::default())
        .run()
        .expect("database thread should start");

    c.bench_function("create", |b| {
        b.iter(|| {
            request_manager
                .send_action(Action::Create(PersonPayload::new("Juan")))
                .expect("should not timeout")
        })
    });

    c.bench_function("get", |b| {
        b.iter(|| {
            request_manager
                .send_action(Action::Get(PersonId(1)))
                .expect("should not timeout")
        })
    });

    let seeded = Database::new(
        DatabaseOptions::default().set_seed(vec![PersonPayload::new("Salvador"); 1000]),
    )
    .run()
    .expect("database thread should start");

    c.bench_function("list 1000", |b| {
        b.iter(|| seeded.send_action(Action::List).expect("should not timeout"))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
