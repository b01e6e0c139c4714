//! tests

use crate::ctx::Context;
use crate::defs::Scale;
use crate::num::Decimal;
use rand::random;

// random precision and a positive random number which fits in it
fn random_arg(scale_min: Scale, scale_max: Scale) -> (usize, Decimal) {
    let p = random::<usize>() % 60 + 5;
    let digits = random::<usize>() % p + 1;
    let d = Decimal::random_normal(digits, scale_min, scale_max).abs();
    (p, d)
}

// |a - b| is less than `ulps` units in the last place of `b` with precision `p`
fn assert_near(a: &Decimal, b: &Decimal, p: usize, ulps: usize) {
    let tol = Context::new(p).unwrap().tolerance(b);
    let err = (a - b).abs();
    assert!(err < &tol * &Decimal::from_u64(ulps as u64), "{} != {}, p = {}", a, b, p);
}

#[test]
fn test_ln_exp() {
    for _ in 0..200 {
        let (p, d1) = random_arg(-20, 20);
        let ctx = Context::new(p).unwrap();

        let d2 = d1.ln(&ctx).unwrap();
        let d3 = d2.exp(&ctx).unwrap();

        // the error of ln(a) is amplified by the integer digits of ln(a)
        assert_near(&d3, &d1, p, 10000);
    }
}

#[test]
fn test_sqrt_cbrt() {
    for _ in 0..200 {
        let (p, d1) = random_arg(-50, 50);
        let ctx = Context::new(p).unwrap();

        let r = d1.sqrt(&ctx).unwrap();
        assert_near(&(&r * &r), &d1, p, 1000);

        let d1 = d1.neg();
        let r = d1.cbrt(&ctx).unwrap();
        assert_near(&(&(&r * &r) * &r), &d1, p, 1000);
    }
}

#[test]
fn test_div_mul() {
    for _ in 0..1000 {
        let (p, d1) = random_arg(-100, 100);
        let d2 = Decimal::random_normal(random::<usize>() % p + 1, -100, 100);
        let ctx = Context::new(p).unwrap();

        let q = ctx.divide(&d1, &d2).unwrap();
        assert_near(&(&q * &d2), &d1, p, 1);
        assert_eq!(ctx.divide(&d2, &d2).unwrap(), Decimal::one());
    }
}

#[test]
fn test_pow_inverse() {
    for _ in 0..100 {
        let (p, d1) = random_arg(-10, 10);
        let ctx = Context::new(p).unwrap();
        let wctx = ctx.working();

        // (a^3)^(1/3) with the cube root taken through ln and exp
        let cube = d1.powi(3).unwrap();
        let third = wctx.div_num(&Decimal::one(), &Decimal::from_u64(3)).unwrap();
        let r = cube.pow(&third, &ctx).unwrap();

        assert_near(&r, &d1, p, 100);
    }
}

#[test]
fn test_lambert_w() {
    for _ in 0..100 {
        let p = random::<usize>() % 60 + 5;
        let digits = random::<usize>() % p + 1;

        // 1e-6 <= a < 1000
        let e = -(digits as Scale) - 5;
        let a = Decimal::random_normal(digits, e, e + 8).abs();
        let ctx = Context::new(p).unwrap();
        let wctx = ctx.working();

        let w = a.lambert_w(&ctx).unwrap();
        let back = wctx.mul_num(&w, &w.exp(&wctx).unwrap());

        assert_near(&back, &a, p, 1000);
    }
}
