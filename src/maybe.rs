use std::future::Future;

use log::trace;

use crate::error::{ContainerError, Result};

/// Container holding zero or one values of `T`.
///
/// A `Maybe` is permanently one variant for its lifetime; every combinator
/// consumes `self` and returns a newly constructed container. Construction
/// goes through the factories ([`Maybe::of`], [`Maybe::empty`],
/// [`Maybe::from_nullable`], [`Maybe::try_of`]) or the `Option` conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// Holds exactly one value.
    Present(T),
    /// Holds nothing.
    Empty,
}

impl<T> Maybe<T> {
    /// Wraps a value that is known to be present.
    ///
    /// The type system makes the present-value contract unconditional here;
    /// the checked sibling for nullable sources is [`Maybe::try_of`].
    pub fn of(value: T) -> Maybe<T> {
        Maybe::Present(value)
    }

    /// Creates a container holding nothing.
    pub fn empty() -> Maybe<T> {
        Maybe::Empty
    }

    /// Fail-fast construction from a nullable source.
    ///
    /// `Some(value)` produces `Present(value)`; `None` is a contract
    /// violation and fails with [`ContainerError::NullValue`]. Use
    /// [`Maybe::from_nullable`] when absence is an expected input.
    pub fn try_of(value: Option<T>) -> Result<Maybe<T>> {
        match value {
            Some(value) => Ok(Maybe::Present(value)),
            None => {
                trace!("Maybe::try_of rejected an absent value");
                Err(ContainerError::NullValue("Maybe::try_of"))
            }
        }
    }

    /// Total construction from a nullable source: `None` becomes `Empty`.
    pub fn from_nullable(value: Option<T>) -> Maybe<T> {
        match value {
            Some(value) => Maybe::Present(value),
            None => Maybe::Empty,
        }
    }

    /// Returns true if this container holds a value.
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns true if this container holds nothing.
    pub fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Applies `mapper` to the held value, if any.
    ///
    /// On `Present(v)` returns `Present(mapper(v))`; on `Empty` returns
    /// `Empty` and `mapper` is never invoked.
    pub fn map<U, F>(self, mapper: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.flat_map(|value| Maybe::Present(mapper(value)))
    }

    /// Applies a container-producing `mapper` to the held value, if any.
    ///
    /// The mapper's container is returned directly, never wrapped a second
    /// time. On `Empty` the mapper is not invoked.
    pub fn flat_map<U, F>(self, mapper: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(value) => mapper(value),
            Maybe::Empty => Maybe::Empty,
        }
    }

    /// Returns the held value, or `None`.
    ///
    /// This is the one place where absence leaves the container vocabulary
    /// and surfaces as a null-like value again.
    pub fn or_null(self) -> Option<T> {
        self.into_option()
    }

    /// Returns the held value, or `alternative` when empty.
    pub fn or_else(self, alternative: T) -> T {
        self.or_else_with(|| alternative)
    }

    /// Returns the held value, or the supplier's result when empty.
    ///
    /// The supplier runs exactly once, and only in the empty case.
    pub fn or_else_with<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Present(value) => value,
            Maybe::Empty => supplier(),
        }
    }

    /// Converts into the platform optional representation, 1:1 with variant.
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Empty => None,
        }
    }

    /// Suspension-capable [`Maybe::map`].
    ///
    /// The mapper's future is awaited before its output is wrapped; on
    /// `Empty` the mapper is never invoked and nothing suspends.
    pub async fn map_async<U, F, Fut>(self, mapper: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        self.flat_map_async(|value| {
            let mapped = mapper(value);
            async move { Maybe::Present(mapped.await) }
        })
        .await
    }

    /// Suspension-capable [`Maybe::flat_map`], same short-circuit rule.
    pub async fn flat_map_async<U, F, Fut>(self, mapper: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self {
            Maybe::Present(value) => mapper(value).await,
            Maybe::Empty => Maybe::Empty,
        }
    }

    /// Suspension-capable [`Maybe::or_else_with`].
    ///
    /// The supplier is awaited at most once, and only in the empty case.
    pub async fn or_else_async<F, Fut>(self, supplier: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Maybe::Present(value) => value,
            Maybe::Empty => supplier().await,
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Collapses one level of nesting: the inner container if present,
    /// otherwise `Empty`.
    pub fn flatten(self) -> Maybe<T> {
        self.or_else(Maybe::Empty)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Maybe<T> {
        Maybe::Empty
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Maybe<T> {
        Maybe::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Option<T> {
        maybe.into_option()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use futures::executor::block_on;
    use futures_timer::Delay;

    use super::Maybe;
    use crate::error::ContainerError;

    #[test]
    fn of_is_present() {
        let maybe = Maybe::of(5);
        assert!(maybe.is_present());
        assert!(!maybe.is_empty());
        assert_eq!(maybe.or_null(), Some(5));
    }

    #[test]
    fn empty_is_empty() {
        let maybe: Maybe<i32> = Maybe::empty();
        assert!(maybe.is_empty());
        assert!(!maybe.is_present());
        assert_eq!(maybe.or_null(), None);
    }

    #[test]
    fn try_of_accepts_present_values() {
        assert_eq!(Maybe::try_of(Some(7)), Ok(Maybe::of(7)));
    }

    #[test]
    fn try_of_rejects_absent_values() {
        let result: Result<Maybe<i32>, _> = Maybe::try_of(None);
        assert_eq!(result, Err(ContainerError::NullValue("Maybe::try_of")));
    }

    #[test]
    fn from_nullable_never_fails() {
        assert_eq!(Maybe::from_nullable(Some(3)), Maybe::of(3));
        assert_eq!(Maybe::<i32>::from_nullable(None), Maybe::empty());
    }

    #[test]
    fn map_transforms_present_values() {
        assert_eq!(Maybe::of(5).map(|n| n * 2).or_null(), Some(10));
    }

    #[test]
    fn map_skips_the_mapper_when_empty() {
        let invocations = Cell::new(0);
        let mapped = Maybe::<i32>::empty().map(|n| {
            invocations.set(invocations.get() + 1);
            n * 2
        });
        assert_eq!(mapped, Maybe::empty());
        assert_eq!(invocations.get(), 0);
    }

    #[test]
    fn map_invokes_the_mapper_exactly_once() {
        let invocations = Cell::new(0);
        Maybe::of(1).map(|n| {
            invocations.set(invocations.get() + 1);
            n
        });
        assert_eq!(invocations.get(), 1);
    }

    #[test]
    fn flat_map_does_not_double_wrap() {
        let mapped = Maybe::of(2).flat_map(|n| Maybe::of(n + 1));
        assert_eq!(mapped, Maybe::of(3));

        let emptied = Maybe::of(2).flat_map(|_| Maybe::<i32>::empty());
        assert_eq!(emptied, Maybe::empty());
    }

    #[test]
    fn flat_map_skips_the_mapper_when_empty() {
        let invocations = Cell::new(0);
        let mapped = Maybe::<i32>::empty().flat_map(|n| {
            invocations.set(invocations.get() + 1);
            Maybe::of(n)
        });
        assert_eq!(mapped, Maybe::empty());
        assert_eq!(invocations.get(), 0);
    }

    #[test]
    fn flatten_collapses_one_level() {
        assert_eq!(Maybe::of(Maybe::of(4)).flatten(), Maybe::of(4));
        assert_eq!(Maybe::of(Maybe::<i32>::empty()).flatten(), Maybe::empty());
        assert_eq!(Maybe::<Maybe<i32>>::empty().flatten(), Maybe::empty());
    }

    #[test]
    fn or_else_prefers_the_held_value() {
        assert_eq!(Maybe::of(9).or_else(1), 9);
        assert_eq!(Maybe::empty().or_else(1), 1);
    }

    #[test]
    fn or_else_with_runs_the_supplier_only_when_empty() {
        let invocations = Cell::new(0);
        let supplier = || {
            invocations.set(invocations.get() + 1);
            42
        };

        assert_eq!(Maybe::of(9).or_else_with(supplier), 9);
        assert_eq!(invocations.get(), 0);

        let invocations = Cell::new(0);
        let supplier = || {
            invocations.set(invocations.get() + 1);
            42
        };
        assert_eq!(Maybe::empty().or_else_with(supplier), 42);
        assert_eq!(invocations.get(), 1);
    }

    #[test]
    fn option_round_trip_is_one_to_one() {
        assert_eq!(Maybe::from(Some(1)).into_option(), Some(1));
        assert_eq!(Maybe::<i32>::from(None).into_option(), None);
        assert_eq!(Option::from(Maybe::of(1)), Some(1));
    }

    #[test]
    fn map_async_matches_map_for_ready_transforms() {
        let mapped = block_on(Maybe::of(5).map_async(|n| async move { n * 2 }));
        assert_eq!(mapped, Maybe::of(5).map(|n| n * 2));
    }

    #[test]
    fn map_async_skips_the_mapper_when_empty() {
        let invocations = Cell::new(0);
        let mapped = block_on(Maybe::<i32>::empty().map_async(|n| {
            invocations.set(invocations.get() + 1);
            async move { n * 2 }
        }));
        assert_eq!(mapped, Maybe::empty());
        assert_eq!(invocations.get(), 0);
    }

    #[test]
    fn map_async_awaits_a_genuinely_suspending_transform() {
        let mapped = block_on(Maybe::of(3).map_async(|n| async move {
            Delay::new(Duration::from_millis(1)).await;
            n + 1
        }));
        assert_eq!(mapped, Maybe::of(4));
    }

    #[test]
    fn flat_map_async_does_not_double_wrap() {
        let mapped = block_on(Maybe::of(2).flat_map_async(|n| async move { Maybe::of(n + 1) }));
        assert_eq!(mapped, Maybe::of(3));
    }

    #[test]
    fn or_else_async_awaits_the_supplier_only_when_empty() {
        let invocations = Cell::new(0);
        let value = block_on(Maybe::of(9).or_else_async(|| {
            invocations.set(invocations.get() + 1);
            async { 42 }
        }));
        assert_eq!(value, 9);
        assert_eq!(invocations.get(), 0);

        let value = block_on(Maybe::<i32>::empty().or_else_async(|| async { 42 }));
        assert_eq!(value, 42);
    }

    #[test]
    fn containers_are_send_and_sync_with_send_sync_payloads() {
        static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Clone);
    }
}
