use std::future::Future;

use log::trace;

use crate::error::{ContainerError, Result};
use crate::maybe::Maybe;

/// Container holding exactly one of two values.
///
/// By convention `Right` is the primary/success side and `Left` the
/// alternate/failure side. An `Either` is permanently one variant; the switch
/// family is the only operation set that produces the other variant, and it
/// does so by constructing a replacement, never by mutating.
///
/// [`Either::fold`] is the single variant dispatch; the per-side maps and the
/// unconditional switches are expressed through it so the branching rules
/// cannot drift apart between combinators, or between the synchronous and
/// suspension-capable forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// The alternate side.
    Left(L),
    /// The primary side.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Wraps a value on the primary side.
    pub fn right(value: R) -> Either<L, R> {
        Either::Right(value)
    }

    /// Wraps a value on the alternate side.
    pub fn left(value: L) -> Either<L, R> {
        Either::Left(value)
    }

    /// Fail-fast construction of the primary side from a nullable source.
    ///
    /// `None` violates the present-value contract and fails with
    /// [`ContainerError::NullValue`], consistent with [`Maybe::try_of`].
    ///
    /// [`Maybe::try_of`]: crate::maybe::Maybe::try_of
    pub fn try_right(value: Option<R>) -> Result<Either<L, R>> {
        match value {
            Some(value) => Ok(Either::Right(value)),
            None => {
                trace!("Either::try_right rejected an absent value");
                Err(ContainerError::NullValue("Either::try_right"))
            }
        }
    }

    /// Fail-fast construction of the alternate side from a nullable source.
    pub fn try_left(value: Option<L>) -> Result<Either<L, R>> {
        match value {
            Some(value) => Ok(Either::Left(value)),
            None => {
                trace!("Either::try_left rejected an absent value");
                Err(ContainerError::NullValue("Either::try_left"))
            }
        }
    }

    /// Returns true if this container holds a `Right` value.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Returns true if this container holds a `Left` value.
    pub fn is_left(&self) -> bool {
        !self.is_right()
    }

    /// Moves the primary-side value into a [`Maybe`]: `Present` when
    /// `Right`, otherwise `Empty`.
    pub fn right_value(self) -> Maybe<R> {
        self.fold(Maybe::of, |_| Maybe::Empty)
    }

    /// Moves the alternate-side value into a [`Maybe`]: `Present` when
    /// `Left`, otherwise `Empty`.
    pub fn left_value(self) -> Maybe<L> {
        self.fold(|_| Maybe::Empty, Maybe::of)
    }

    /// Reduces to a single result by applying the mapper matching the active
    /// variant. Exactly one of the two mappers is invoked.
    pub fn fold<O, FR, FL>(self, right_mapper: FR, left_mapper: FL) -> O
    where
        FR: FnOnce(R) -> O,
        FL: FnOnce(L) -> O,
    {
        match self {
            Either::Right(value) => right_mapper(value),
            Either::Left(value) => left_mapper(value),
        }
    }

    /// Transforms the value only when this is a `Right`; a `Left` passes
    /// through untouched and `mapper` is never invoked.
    pub fn map_right<M, F>(self, mapper: F) -> Either<L, M>
    where
        F: FnOnce(R) -> M,
    {
        self.fold(|value| Either::Right(mapper(value)), Either::Left)
    }

    /// Transforms the value only when this is a `Left`; a `Right` passes
    /// through untouched and `mapper` is never invoked.
    pub fn map_left<M, F>(self, mapper: F) -> Either<M, R>
    where
        F: FnOnce(L) -> M,
    {
        self.fold(Either::Right, |value| Either::Left(mapper(value)))
    }

    /// Switches a `Left` to the primary side; a `Right` is returned
    /// unchanged and `switch` is never invoked.
    pub fn switch_to_right<F>(self, switch: F) -> Either<L, R>
    where
        F: FnOnce(L) -> R,
    {
        self.fold(Either::Right, |value| Either::Right(switch(value)))
    }

    /// Conditional form of [`Either::switch_to_right`].
    ///
    /// A `Right` is returned unchanged before the condition is ever looked
    /// at. On `Left(l)` the condition is evaluated eagerly on a borrow of
    /// `l`; when it holds this delegates to the unconditional switch, and
    /// when it does not the original `Left(l)` is returned with `switch`
    /// uninvoked. Supplying an always-true condition is therefore exactly
    /// the unconditional form.
    pub fn switch_to_right_if<C, F>(self, condition: C, switch: F) -> Either<L, R>
    where
        C: FnOnce(&L) -> bool,
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Left(value) => {
                if condition(&value) {
                    Either::Left(value).switch_to_right(switch)
                } else {
                    trace!("switch_to_right declined by its condition");
                    Either::Left(value)
                }
            }
            right => right,
        }
    }

    /// Switches a `Right` to the alternate side; a `Left` is returned
    /// unchanged and `switch` is never invoked.
    pub fn switch_to_left<F>(self, switch: F) -> Either<L, R>
    where
        F: FnOnce(R) -> L,
    {
        self.fold(|value| Either::Left(switch(value)), Either::Left)
    }

    /// Conditional form of [`Either::switch_to_left`]; exact mirror of
    /// [`Either::switch_to_right_if`].
    pub fn switch_to_left_if<C, F>(self, condition: C, switch: F) -> Either<L, R>
    where
        C: FnOnce(&R) -> bool,
        F: FnOnce(R) -> L,
    {
        match self {
            Either::Right(value) => {
                if condition(&value) {
                    Either::Right(value).switch_to_left(switch)
                } else {
                    trace!("switch_to_left declined by its condition");
                    Either::Right(value)
                }
            }
            left => left,
        }
    }

    /// Converts from the platform result representation: `Ok` is `Right`,
    /// `Err` is `Left`.
    pub fn from_result(result: std::result::Result<R, L>) -> Either<L, R> {
        match result {
            Ok(value) => Either::Right(value),
            Err(value) => Either::Left(value),
        }
    }

    /// Converts into the platform result representation, 1:1 with variant.
    pub fn into_result(self) -> std::result::Result<R, L> {
        self.fold(Ok, Err)
    }

    /// Suspension-capable [`Either::fold`].
    ///
    /// Exactly one mapper is invoked and its future awaited; the other side
    /// never suspends.
    pub async fn fold_async<O, FR, FL, FutR, FutL>(self, right_mapper: FR, left_mapper: FL) -> O
    where
        FR: FnOnce(R) -> FutR,
        FL: FnOnce(L) -> FutL,
        FutR: Future<Output = O>,
        FutL: Future<Output = O>,
    {
        match self {
            Either::Right(value) => right_mapper(value).await,
            Either::Left(value) => left_mapper(value).await,
        }
    }

    /// Suspension-capable [`Either::map_right`], same pass-through rule.
    pub async fn map_right_async<M, F, Fut>(self, mapper: F) -> Either<L, M>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = M>,
    {
        self.fold_async(
            |value| {
                let mapped = mapper(value);
                async move { Either::Right(mapped.await) }
            },
            |value| async move { Either::Left(value) },
        )
        .await
    }

    /// Suspension-capable [`Either::map_left`], same pass-through rule.
    pub async fn map_left_async<M, F, Fut>(self, mapper: F) -> Either<M, R>
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = M>,
    {
        self.fold_async(
            |value| async move { Either::Right(value) },
            |value| {
                let mapped = mapper(value);
                async move { Either::Left(mapped.await) }
            },
        )
        .await
    }

    /// Suspension-capable [`Either::switch_to_right`].
    pub async fn switch_to_right_async<F, Fut>(self, switch: F) -> Either<L, R>
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = R>,
    {
        self.fold_async(
            |value| async move { Either::Right(value) },
            |value| {
                let switched = switch(value);
                async move { Either::Right(switched.await) }
            },
        )
        .await
    }

    /// Suspension-capable [`Either::switch_to_right_if`].
    ///
    /// The condition stays synchronous and is evaluated before any
    /// suspension, so the switch decision cannot race the transform.
    pub async fn switch_to_right_if_async<C, F, Fut>(self, condition: C, switch: F) -> Either<L, R>
    where
        C: FnOnce(&L) -> bool,
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = R>,
    {
        match self {
            Either::Left(value) => {
                if condition(&value) {
                    Either::Left(value).switch_to_right_async(switch).await
                } else {
                    trace!("switch_to_right declined by its condition");
                    Either::Left(value)
                }
            }
            right => right,
        }
    }

    /// Suspension-capable [`Either::switch_to_left`].
    pub async fn switch_to_left_async<F, Fut>(self, switch: F) -> Either<L, R>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = L>,
    {
        self.fold_async(
            |value| {
                let switched = switch(value);
                async move { Either::Left(switched.await) }
            },
            |value| async move { Either::Left(value) },
        )
        .await
    }

    /// Suspension-capable [`Either::switch_to_left_if`]; exact mirror of
    /// [`Either::switch_to_right_if_async`].
    pub async fn switch_to_left_if_async<C, F, Fut>(self, condition: C, switch: F) -> Either<L, R>
    where
        C: FnOnce(&R) -> bool,
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = L>,
    {
        match self {
            Either::Right(value) => {
                if condition(&value) {
                    Either::Right(value).switch_to_left_async(switch).await
                } else {
                    trace!("switch_to_left declined by its condition");
                    Either::Right(value)
                }
            }
            left => left,
        }
    }
}

impl<L, R> From<std::result::Result<R, L>> for Either<L, R> {
    fn from(result: std::result::Result<R, L>) -> Either<L, R> {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for std::result::Result<R, L> {
    fn from(either: Either<L, R>) -> std::result::Result<R, L> {
        either.into_result()
    }
}
