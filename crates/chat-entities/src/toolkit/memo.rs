//! Memoized selectors
//!
//! A [`Selector`] splits a derivation into an input function, which reads the
//! relevant slices out of the state, and a result function, which derives the
//! value from those inputs. The result is recomputed only when at least one
//! input differs from the previous call, where slices compare by `Arc`
//! identity and plain parameters (ids, flags) compare by value.
//!
//! Selectors parameterized by an id must be built per call site through a
//! `make_*` factory so that every instance keeps its own cache.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Equality used to decide whether a selector's inputs changed
pub trait InputEq {
    fn input_eq(&self, other: &Self) -> bool;
}

impl<T: ?Sized> InputEq for Arc<T> {
    fn input_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl InputEq for () {
    fn input_eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: InputEq> InputEq for Option<T> {
    fn input_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.input_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! value_input_eq {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl InputEq for $ty {
                fn input_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )+
    };
}

value_input_eq!(bool, i64, u64, usize, String, &'static str);

macro_rules! tuple_input_eq {
    ($(($($name:ident : $idx:tt),+)),+ $(,)?) => {
        $(
            impl<$($name: InputEq),+> InputEq for ($($name,)+) {
                fn input_eq(&self, other: &Self) -> bool {
                    $(self.$idx.input_eq(&other.$idx))&&+
                }
            }
        )+
    };
}

tuple_input_eq!(
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
);

type InputFn<S, P, I> = Box<dyn Fn(&S, &P) -> I + Send + Sync>;
type ResultFn<I, O> = Box<dyn Fn(&I) -> O + Send + Sync>;

/// A memoized selector over state `S` with parameters `P`
pub struct Selector<S, P, I, O> {
    inputs: InputFn<S, P, I>,
    result: ResultFn<I, O>,
    last: Mutex<Option<(I, O)>>,
    recomputations: AtomicUsize,
}

impl<S, P, I, O> Selector<S, P, I, O>
where
    I: InputEq,
    O: Clone,
{
    pub fn new<F, G>(inputs: F, result: G) -> Self
    where
        F: Fn(&S, &P) -> I + Send + Sync + 'static,
        G: Fn(&I) -> O + Send + Sync + 'static,
    {
        Self {
            inputs: Box::new(inputs),
            result: Box::new(result),
            last: Mutex::new(None),
            recomputations: AtomicUsize::new(0),
        }
    }

    /// Evaluate the selector for `state` and `params`
    pub fn select_with(&self, state: &S, params: &P) -> O {
        let inputs = (self.inputs)(state, params);

        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((last_inputs, last_output)) = last.as_ref() {
            if last_inputs.input_eq(&inputs) {
                return last_output.clone();
            }
        }

        let output = (self.result)(&inputs);
        self.recomputations.fetch_add(1, Ordering::Relaxed);
        *last = Some((inputs, output.clone()));
        output
    }

    /// How many times the result function has run
    pub fn recomputations(&self) -> usize {
        self.recomputations.load(Ordering::Relaxed)
    }

    /// Drop the cached result so the next call recomputes
    pub fn reset(&self) {
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl<S, I, O> Selector<S, (), I, O>
where
    I: InputEq,
    O: Clone,
{
    /// Evaluate a selector that takes no parameters
    pub fn select(&self, state: &S) -> O {
        self.select_with(state, &())
    }
}

impl<S, P, I, O> std::fmt::Debug for Selector<S, P, I, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selector")
            .field("recomputations", &self.recomputations.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
