use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fuzzy_phrase_replacer::FuzzyReplacerBuilder;

fn benchmark_replace(c: &mut Criterion) {
    let replacer = FuzzyReplacerBuilder::new()
        .threshold(0.8)
        .build_replacer([
            ("GNU General Public License", "GPL"),
            ("GNU Lesser General Public License", "LGPL"),
            ("Free Software Foundation", "FSF"),
            ("licence publique generale", "GPL"),
        ])
        .unwrap();
    let input = "the GNU Generel Public Licence is intended to guarantee your freedom; \
                 we, the Free Sofware Foundation, use the GNU Lesser General Public License \
                 for some software and la licence publique générale for the rest";

    c.bench_function("replace", |b| {
        b.iter(|| {
            let _ = replacer.replace(black_box(input));
        });
    });
}

criterion_group!(benches, benchmark_replace);
criterion_main!(benches);
