//! This test suite checks identities of the operations on random numbers, domain boundaries, and precision handling.

use astro_decimal::{normalize, precision, set_precision, Context, Decimal, Error, Sign, DEFAULT_P};
use rand::random;

// |a - b| is less than `ulps` units in the last place of `b` with `p` significant digits
fn assert_near(a: &Decimal, b: &Decimal, p: usize, ulps: u64, op: &str) {
    let ulp = normalize(format!("1e{}", b.order() - p as i64)).unwrap();
    let err = (a - b).abs();
    assert!(err < &ulp * &Decimal::from_u64(ulps), "{}: {} != {}, p = {}", op, a, b, p);
}

macro_rules! test_inverse {
    ($ctx:ident, $d:ident, $fwd:ident, $inv:ident, $ulps:literal) => {
        let r = $ctx.$fwd(&$d).unwrap();
        let back = $ctx.$inv(&r).unwrap();
        assert_near(&back, &$d, $ctx.precision(), $ulps, stringify!($fwd));
    };
    ($ctx:ident, $d:ident, $fwd:ident, $n:literal, $ulps:literal) => {
        let r = $ctx.$fwd(&$d).unwrap();
        let back = $ctx.power(&r, $n).unwrap();
        assert_near(&back, &$d, $ctx.precision(), $ulps, stringify!($fwd));
    };
}

#[test]
fn exact_identities() {
    let run_cnt = 1000;

    for _ in 0..run_cnt {
        let p = random::<usize>() % 50 + 1;
        let ctx = Context::new(p).unwrap();

        let a = Decimal::random_normal(random::<usize>() % 80 + 1, -100, 100);
        let b = Decimal::random_normal(random::<usize>() % 80 + 1, -100, 100);

        assert_eq!(ctx.add(&a, &b).unwrap(), ctx.add(&b, &a).unwrap());
        assert_eq!(ctx.multiply(&a, &b).unwrap(), ctx.multiply(&b, &a).unwrap());
        assert_eq!(ctx.multiply(&a, 1).unwrap(), normalize(&a).unwrap());
        assert_eq!(ctx.add(&a, -&b).unwrap(), ctx.subtract(&a, &b).unwrap());
        assert_eq!(ctx.subtract(ctx.add(&a, &b).unwrap(), &b).unwrap(), a);
        assert_eq!(ctx.divide(&a, &a).unwrap(), Decimal::one());
        assert_eq!(ctx.divide_pure(&b, &b).unwrap(), Decimal::one());

        // canonical form is stable
        assert_eq!(a.clone().trim().to_raw_parts(), a.to_raw_parts());
        assert!(!a.mantissa().to_string().ends_with('0'));

        // string round-trip
        let s = a.to_string();
        assert_eq!(normalize(s.as_str()).unwrap().to_string(), s);
        assert_eq!(normalize(&s).unwrap(), a);
    }
}

#[test]
fn convergence() {
    let run_cnt = 100;

    for _ in 0..run_cnt {
        let p = random::<usize>() % 60 + 5;
        let ctx = Context::new(p).unwrap();

        let d = Decimal::random_normal(random::<usize>() % p + 1, -30, 10).abs();

        test_inverse!(ctx, d, ln, exp, 10000);
        test_inverse!(ctx, d, sqrt, 2, 1000);
        test_inverse!(ctx, d, cbrt, 3, 1000);
    }
}

// |a - b| < 10^-p
fn assert_abs_near(a: &Decimal, b: &Decimal, p: usize, op: &str) {
    let bound = normalize(format!("1e-{}", p)).unwrap();
    assert!((a - b).abs() < bound, "{}: {} != {}, p = {}", op, a, b, p);
}

#[test]
fn convergence_below_one() {
    let check = |ctx: &Context, d: &Decimal| {
        let p = ctx.precision();

        let back = ctx.exp(ctx.ln(d).unwrap()).unwrap();
        assert_abs_near(&back, d, p, "ln");

        let r = ctx.sqrt(d).unwrap();
        assert_abs_near(&ctx.multiply(&r, &r).unwrap(), d, p, "sqrt");

        let r = ctx.cbrt(d).unwrap();
        assert_abs_near(&ctx.power(&r, 3).unwrap(), d, p, "cbrt");
    };

    let ctx = Context::new(20).unwrap();
    for s in ["0.7", "0.123456789", "0.9"] {
        check(&ctx, &normalize(s).unwrap());
    }

    // below 0.1 the last digit of the precision is beyond 10^-p
    for _ in 0..100 {
        let p = random::<usize>() % 60 + 5;
        let ctx = Context::new(p).unwrap();

        let digits = random::<usize>() % p + 1;
        let e = -(digits as i64) - 1;
        let d = Decimal::random_normal(digits, e - 30, e).abs();

        check(&ctx, &d);
    }
}

#[test]
fn iteration_limit() {
    let ctx = Context::new(50).unwrap().with_max_iter(Some(1));

    assert_eq!(ctx.sqrt(2).unwrap_err(), Error::NonConvergence("sqrt"));
    assert_eq!(ctx.cbrt(2).unwrap_err(), Error::NonConvergence("cbrt"));
    assert_eq!(ctx.agm(1, 2).unwrap_err(), Error::NonConvergence("agm"));
    assert_eq!(ctx.elliptic_k("0.5").unwrap_err(), Error::NonConvergence("agm"));
    assert_eq!(ctx.lambert_w(10).unwrap_err(), Error::NonConvergence("lambert_w"));
    assert_eq!(ctx.xy("0.5").unwrap_err(), Error::NonConvergence("lambert_w"));

    // exact results need no iterations
    let ctx = ctx.with_max_iter(Some(0));
    assert_eq!(ctx.sqrt(4).unwrap().to_string(), "2");
    assert_eq!(ctx.cbrt(-27).unwrap().to_string(), "-3");
    assert_eq!(ctx.factorial(5).unwrap().to_string(), "120");

    let ctx = ctx.with_max_iter(None);
    assert_eq!(ctx.max_iter(), None);
    assert!(ctx.sqrt(2).is_ok());
}

#[test]
fn domain_boundaries() {
    let ctx = Context::new(20).unwrap();

    let errors = [
        ctx.divide(1, 0),
        ctx.divide_pure("1.5", "0.000"),
        ctx.ln(0),
        ctx.ln(-1),
        ctx.ln1p(-1),
        ctx.log2(0),
        ctx.log10("-1e-10"),
        ctx.power(0, 0),
        ctx.power(-2, "0.5"),
        ctx.sqrt(-1),
        ctx.factorial(-1),
        ctx.factorial("1.5"),
        ctx.double_factorial(-2),
        ctx.super_factorial("0.5"),
        ctx.gamma(0),
        ctx.gamma(-4),
        ctx.agm(-1, 1),
        ctx.elliptic_k(1),
        ctx.lambert_w("-0.3466"),
        ctx.xy(0),
        ctx.xy("1.5"),
        normalize(f64::NAN),
        normalize(f64::INFINITY),
        normalize("1.2.3"),
        normalize(""),
    ];

    for (i, e) in errors.into_iter().enumerate() {
        assert!(e.unwrap_err().is_domain(), "case {}", i);
    }

    // the error carries the offending expression
    match ctx.sqrt(-4).unwrap_err() {
        Error::Domain(e) => {
            assert_eq!(e.expr(), "-4");
            assert_eq!(e.to_string(), "-4 is out of domain, expected numbers greater or equal 0");
        }
        e => panic!("unexpected error {}", e),
    }

    // values just inside the boundaries are fine
    assert!(ctx.lambert_w("-0.3465").is_ok());
    assert!(ctx.elliptic_k("0.99999").is_ok());
    assert!(ctx.xy("1.414").is_ok());
    assert_eq!(ctx.xy("1.4142135623730950488016887242").unwrap().to_string(), "2");
    assert!(ctx.ln1p("-0.999").is_ok());
}

#[test]
fn scenarios() {
    let ctx = Context::new(20).unwrap();

    assert_eq!(ctx.add("1.1", "2.2").unwrap().to_string(), "3.3");
    assert_eq!(ctx.multiply("0.1", "0.2").unwrap().to_string(), "0.02");
    assert_eq!(ctx.divide(1, 3).unwrap().to_string(), format!("0.{}", "3".repeat(31)));
    assert_eq!(ctx.divide_pure(1, 3).unwrap().to_string(), format!("0.{}", "3".repeat(21)));
    assert_eq!(ctx.factorial(10).unwrap().to_string(), "3628800");
    assert_eq!(ctx.sqrt(4).unwrap().to_string(), "2");
    assert_eq!(ctx.gamma(5).unwrap().to_string(), "24");
    assert_eq!(ctx.finalize("2.718281828459045235360287", 0).unwrap().to_string(), "2.7182818284590452354");

    // numbers of different origin compare equal
    assert_eq!(normalize(0.25f64).unwrap(), normalize("0.250").unwrap());
    assert_eq!(normalize(-12i8).unwrap(), normalize("-1.2e1").unwrap());
    assert_eq!(
        normalize(u128::MAX).unwrap().to_string(),
        "340282366920938463463374607431768211455"
    );

    let z = normalize("-0.0").unwrap();
    assert_eq!(z.sign(), Sign::Pos);
    assert_eq!(z.scale(), 0);
    assert!(z.is_zero());
}

#[test]
fn global_precision() {
    assert_eq!(DEFAULT_P, 100);

    let old = precision();
    set_precision(15).unwrap();

    let ctx = Context::default();
    assert_eq!(ctx.precision(), 15);
    assert_eq!(ctx.const_pi().unwrap().to_string(), "3.14159265358979");

    // a context is a snapshot
    set_precision(30).unwrap();
    assert_eq!(ctx.sqrt(2).unwrap().to_string(), "1.4142135623731");
    assert_eq!(Context::default().sqrt(2).unwrap().to_string(), "1.41421356237309504880168872421");

    assert!(set_precision(0).unwrap_err().is_domain());
    assert_eq!(precision(), 30);

    set_precision(old).unwrap();
}
