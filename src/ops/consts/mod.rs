//! Cache of mathematical constants.

mod ln;
mod pi;

use core::cell::RefCell;

use crate::ctx::Context;
use crate::defs::Error;
use crate::defs::WORK_GUARD_DIGITS;
use crate::num::Decimal;

/// Holds the most precise computed value of a constant.
struct ConstCache {
    name: &'static str,
    p: usize,
    val: Decimal,
    compute: fn(usize) -> Result<Decimal, Error>,
}

impl ConstCache {
    fn new(name: &'static str, compute: fn(usize) -> Result<Decimal, Error>) -> Self {
        ConstCache {
            name,
            p: 0,
            val: Decimal::zero(),
            compute,
        }
    }

    // Returns the value with precision `p` if it was computed already.
    fn for_prec(&self, p: usize) -> Option<Decimal> {
        if self.p >= p {
            Some(self.val.clone().round_to_digits(p))
        } else {
            None
        }
    }
}

/// Constants cache contains arbitrary-precision mathematical constants.
struct Consts {
    pi: ConstCache,
    ln2: ConstCache,
    ln3: ConstCache,
    ln10: ConstCache,
}

impl Consts {
    fn new() -> Self {
        Consts {
            pi: ConstCache::new("pi", pi::pi),
            ln2: ConstCache::new("ln2", ln::ln2),
            ln3: ConstCache::new("ln3", ln::ln3),
            ln10: ConstCache::new("ln10", ln::ln10),
        }
    }
}

thread_local! {
    static CONSTS: RefCell<Consts> = RefCell::new(Consts::new());
}

// The cache is not borrowed while the value is being computed.
fn cached(ctx: &Context, sel: fn(&mut Consts) -> &mut ConstCache) -> Result<Decimal, Error> {
    let p = ctx.precision();

    let (name, compute, val) = CONSTS.with(|cc| {
        let mut cc = cc.borrow_mut();
        let c = sel(&mut cc);
        (c.name, c.compute, c.for_prec(p))
    });

    if let Some(val) = val {
        return Ok(val);
    }

    let wp = p + WORK_GUARD_DIGITS;
    tracing::debug!(constant = name, p = wp, "computing constant");
    let val = compute(wp)?;

    CONSTS.with(|cc| {
        let mut cc = cc.borrow_mut();
        let c = sel(&mut cc);
        if c.p < wp {
            c.p = wp;
            c.val = val.clone();
        }
    });

    Ok(val.round_to_digits(p))
}

/// Returns pi with the precision of `ctx`.
pub(crate) fn pi(ctx: &Context) -> Result<Decimal, Error> {
    cached(ctx, |cc| &mut cc.pi)
}

/// Returns ln(2) with the precision of `ctx`.
pub(crate) fn ln2(ctx: &Context) -> Result<Decimal, Error> {
    cached(ctx, |cc| &mut cc.ln2)
}

/// Returns ln(3) with the precision of `ctx`.
pub(crate) fn ln3(ctx: &Context) -> Result<Decimal, Error> {
    cached(ctx, |cc| &mut cc.ln3)
}

/// Returns ln(10) with the precision of `ctx`.
pub(crate) fn ln10(ctx: &Context) -> Result<Decimal, Error> {
    cached(ctx, |cc| &mut cc.ln10)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_consts_cache() {
        let ctx = Context::new(60).unwrap();
        let pi60 = pi(&ctx).unwrap();
        assert_eq!(pi60.digits(), 60);

        // served from the cache computed for a higher precision
        let ctx = Context::new(20).unwrap();
        assert_eq!(pi(&ctx).unwrap().to_string(), "3.1415926535897932385");
        assert_eq!(pi(&ctx).unwrap(), pi60.clone().round_to_digits(20));

        let ctx = Context::new(30).unwrap();
        assert_eq!(ln2(&ctx).unwrap().to_string(), "0.693147180559945309417232121458");
        assert_eq!(ln3(&ctx).unwrap().to_string(), "1.09861228866810969139524523692");
        assert_eq!(ln10(&ctx).unwrap().to_string(), "2.30258509299404568401799145468");

        let ctx = Context::new(1).unwrap();
        assert_eq!(ln10(&ctx).unwrap().to_string(), "2");
    }
}
