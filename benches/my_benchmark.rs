extern crate criterion;
extern crate hornlog;

use criterion::*;
use hornlog::*;

// parent(na, nb). parent(nb, nc). ... plus the recursive ancestor rules.
fn chain_program(length: usize) -> String {
    let mut program = String::from(
        "ancestor(X, Y) :- parent(X, Y).\nancestor(X, Y) :- parent(X, Z), ancestor(Z, Y).\n",
    );
    for i in 0..length {
        program.push_str(&format!("parent({}, {}).\n", node(i), node(i + 1)));
    }
    program
}

// Identifiers are letters only, so encode the index in base 26.
fn node(mut index: usize) -> String {
    let mut name = String::from("n");
    loop {
        name.push((b'a' + (index % 26) as u8) as char);
        index /= 26;
        if index == 0 {
            break;
        }
    }
    name
}

fn my_benchmark(c: &mut Criterion) {
    let source = chain_program(40);

    c.bench_function("parse_chain_40", |b| {
        b.iter(|| parse_rules(black_box(&source)).unwrap())
    });

    let db = Database::from_source(&source).unwrap();
    let goal = parse_query(&format!("ancestor({}, Who)", node(0))).unwrap();

    let mut group = c.benchmark_group("sample-size-example");
    group.sample_size(10);

    group.bench_function("ancestor_all", |b| {
        b.iter(|| db.query(black_box(&goal)).count())
    });

    group.bench_function("ancestor_first", |b| {
        b.iter(|| db.query(black_box(&goal)).next())
    });
    group.finish();
}

criterion_group!(benches, my_benchmark);
criterion_main!(benches);
