use crate::outcome::core::Outcome;
use crate::types::ErrorVec;

/// Borrowing iterator over the success value of an [`Outcome`].
///
/// Yields at most one item.
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

/// Mutably borrowing iterator over the success value of an [`Outcome`].
pub struct IterMut<'a, T> {
    inner: Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

/// Owning iterator over the success value of an [`Outcome`].
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_success(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Outcome<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, E> Outcome<T, E> {
    /// Iterates over the success value, if any.
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Outcome::Success(value) => Iter { inner: Some(value) },
            Outcome::Failure(_) => Iter { inner: None },
        }
    }

    /// Iterates mutably over the success value, if any.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        match self {
            Outcome::Success(value) => IterMut { inner: Some(value) },
            Outcome::Failure(_) => IterMut { inner: None },
        }
    }
}

/// Collects an iterator of outcomes, stopping at the first `Failure`.
///
/// Items after the first failure are not pulled from the iterator.
///
/// # Examples
///
/// ```
/// use throwless::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all, Outcome::Success(vec![1, 2]));
///
/// let first_bad: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::failure("a"), Outcome::failure("b")]
///         .into_iter()
///         .collect();
/// assert_eq!(first_bad, Outcome::Failure("a"));
/// ```
impl<T, E, C> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        let mut failure = None;
        let collected: C = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect();

        match failure {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(collected),
        }
    }
}

/// Splits outcomes into their success values and their errors, keeping order.
///
/// Unlike collecting into an `Outcome`, every item is consumed and every error is
/// kept.
///
/// # Examples
///
/// ```
/// use throwless::{partition, Outcome};
///
/// let (values, errors) = partition(vec![
///     Outcome::success(1),
///     Outcome::failure("bad"),
///     Outcome::success(3),
/// ]);
/// assert_eq!(values, vec![1, 3]);
/// assert_eq!(errors.as_slice(), &["bad"]);
/// ```
pub fn partition<T, E, I>(outcomes: I) -> (Vec<T>, ErrorVec<E>)
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = ErrorVec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => errors.push(error),
        }
    }
    (values, errors)
}
