//! Sample processing

use core::marker::PhantomData;

/// Processing block
///
/// Single input, single output.
/// The state advances once per call and blocks are processed sample-major.
pub trait Process<X: Copy, Y = X> {
    /// Update the state with a new input and obtain an output
    fn process(&mut self, x: X) -> Y;

    /// Process a block of inputs into a block of outputs
    ///
    /// Input and output must be of the same size.
    fn block(&mut self, x: &[X], y: &mut [Y]) {
        debug_assert_eq!(x.len(), y.len());
        for (x, y) in x.iter().zip(y) {
            *y = self.process(*x);
        }
    }

    /// Lazily process an input iterator
    fn stream<I>(&mut self, x: I) -> Stream<'_, Self, I::IntoIter, Y>
    where
        I: IntoIterator<Item = X>,
        Self: Sized,
    {
        Stream {
            inner: self,
            x: x.into_iter(),
            _y: PhantomData,
        }
    }
}

impl<X: Copy, Y, T: Process<X, Y>> Process<X, Y> for &mut T {
    fn process(&mut self, x: X) -> Y {
        (*self).process(x)
    }

    fn block(&mut self, x: &[X], y: &mut [Y]) {
        (*self).block(x, y)
    }
}

/// Iterator adapter returned by [`Process::stream()`]
#[derive(Debug)]
pub struct Stream<'a, P, I, Y> {
    inner: &'a mut P,
    x: I,
    _y: PhantomData<fn() -> Y>,
}

impl<X: Copy, Y, P: Process<X, Y>, I: Iterator<Item = X>> Iterator for Stream<'_, P, I, Y> {
    type Item = Y;

    fn next(&mut self) -> Option<Y> {
        self.x.next().map(|x| self.inner.process(x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.x.size_hint()
    }
}
