//! Auxiliary items shared by iterative algorithms.

use crate::ctx::Context;
use crate::defs::Error;
use crate::num::Decimal;

/// Counts iterations of an iterative algorithm and enforces the iteration limit of the context.
pub(crate) struct Iteration<'a> {
    ctx: &'a Context,
    op: &'static str,
    n: usize,
}

impl<'a> Iteration<'a> {
    pub fn new(ctx: &'a Context, op: &'static str) -> Self {
        Iteration { ctx, op, n: 0 }
    }

    /// Registers the next iteration which changed the iterate by `delta`.
    ///
    /// ## Errors
    ///
    ///  - NonConvergence: the iteration limit is exceeded.
    pub fn step(&mut self, delta: &Decimal) -> Result<(), Error> {
        self.n += 1;

        tracing::trace!(op = self.op, iteration = self.n, delta = %delta);

        if let Some(max_iter) = self.ctx.max_iter() {
            if self.n > max_iter {
                tracing::warn!(op = self.op, max_iter, p = self.ctx.precision(), "iteration limit exceeded");
                return Err(Error::NonConvergence(self.op));
            }
        }

        Ok(())
    }

    /// Logs the number of iterations it took to converge.
    pub fn done(&self) {
        tracing::debug!(op = self.op, iterations = self.n, p = self.ctx.precision(), "converged");
    }

    pub fn count(&self) -> usize {
        self.n
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_iteration() {
        let ctx = Context::new(10).unwrap();
        let mut it = Iteration::new(&ctx, "test");
        for _ in 0..1000 {
            it.step(&Decimal::one()).unwrap();
        }
        it.done();
        assert_eq!(it.count(), 1000);

        let ctx = ctx.with_max_iter(Some(2));
        let mut it = Iteration::new(&ctx, "test");
        it.step(&Decimal::one()).unwrap();
        it.step(&Decimal::one()).unwrap();
        assert_eq!(it.step(&Decimal::one()).unwrap_err(), Error::NonConvergence("test"));
    }
}
