#![allow(non_snake_case)]

use rand::thread_rng;

#[macro_use]
extern crate criterion;

use criterion::BatchSize;
use criterion::Criterion;

use p751sidh::constants;
use p751sidh::curve::ProjectivePoint;
use p751sidh::field::ExtensionFieldElement;

mod field_benches {
    use super::*;

    fn mul(c: &mut Criterion) {
        let mut rng = thread_rng();
        let x = ExtensionFieldElement::random(&mut rng);
        let y = ExtensionFieldElement::random(&mut rng);
        c.bench_function("ExtensionFieldElement multiplication", move |b| b.iter(|| &x * &y));
    }

    fn square(c: &mut Criterion) {
        let mut rng = thread_rng();
        let x = ExtensionFieldElement::random(&mut rng);
        c.bench_function("ExtensionFieldElement squaring", move |b| b.iter(|| x.square()));
    }

    fn invert(c: &mut Criterion) {
        let mut rng = thread_rng();
        let x = ExtensionFieldElement::random(&mut rng);
        c.bench_function("ExtensionFieldElement inversion", move |b| b.iter(|| x.invert()));
    }

    fn j_invariant(c: &mut Criterion) {
        let E0 = constants::E0;
        c.bench_function("Curve j-invariant", move |b| b.iter(|| E0.j_invariant()));
    }

    criterion_group! {
        name = field_benches;
        config = Criterion::default();
        targets =
        mul,
        square,
        invert,
        j_invariant,
    }
}

mod isogeny_benches {
    use super::*;

    use p751sidh::isogeny::{FirstFourIsogeny, FourIsogeny, ThreeIsogeny};
    use p751sidh::traits::Isogeny;

    fn random_point() -> ProjectivePoint {
        let mut rng = thread_rng();
        ProjectivePoint {
            X: ExtensionFieldElement::random(&mut rng),
            Z: ExtensionFieldElement::random(&mut rng),
        }
    }

    fn first_four_isogeny(c: &mut Criterion) {
        let a = constants::E0.to_affine();
        c.bench_function("FirstFourIsogeny compute", move |b| {
            b.iter(|| FirstFourIsogeny::compute(&a))
        });

        let (_, phi) = FirstFourIsogeny::compute(&a);
        c.bench_function("FirstFourIsogeny eval", move |b| {
            b.iter_batched(random_point, |xP| phi.eval(&xP), BatchSize::SmallInput)
        });
    }

    fn four_isogeny(c: &mut Criterion) {
        c.bench_function("FourIsogeny compute", |b| {
            b.iter_batched(random_point, |x4| FourIsogeny::compute(&x4), BatchSize::SmallInput)
        });

        let (_, phi) = FourIsogeny::compute(&random_point());
        c.bench_function("FourIsogeny eval", move |b| {
            b.iter_batched(random_point, |xP| phi.eval(&xP), BatchSize::SmallInput)
        });
    }

    fn three_isogeny(c: &mut Criterion) {
        c.bench_function("ThreeIsogeny compute", |b| {
            b.iter_batched(random_point, |x3| ThreeIsogeny::compute(&x3), BatchSize::SmallInput)
        });

        let (_, phi) = ThreeIsogeny::compute(&random_point());
        c.bench_function("ThreeIsogeny eval", move |b| {
            b.iter_batched(random_point, |xP| phi.eval(&xP), BatchSize::SmallInput)
        });
    }

    criterion_group! {
        name = isogeny_benches;
        config = Criterion::default();
        targets =
        first_four_isogeny,
        four_isogeny,
        three_isogeny,
    }
}

criterion_main!(
    field_benches::field_benches,
    isogeny_benches::isogeny_benches,
);
