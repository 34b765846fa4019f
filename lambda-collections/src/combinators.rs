//! The combinators: each one validates its inputs, picks an output container if it needs
//! one, then drives a [`Zip`] or [`Tails`] sequence through the callback.
//!
//! Callbacks always receive one tuple per step as an array `[E; K]`, so they can
//! destructure it directly: `|[x]| x + 1`, `|[a, b]| a == b`.
use crate::container::{Container, HasKind};
use crate::error::{Error, Result};
use crate::kind::{Kind, Sequence};
use crate::tails::Tails;
use crate::truthy::Truthy;
use crate::zip::Zip;

/// Apply `f` across `inputs` in lock-step, collecting the results into a new container of
/// the same kind as the first input.
///
/// ```rust
/// # use lambda_collections::map;
/// let incremented = map([&vec![1, 2, 3, 4]], |[x]| x + 1).unwrap();
/// assert_eq!(incremented, vec![2, 3, 4, 5]);
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(arity = K))]
pub fn map<C, R, F, const K: usize>(
    inputs: [C; K],
    f: F,
) -> Result<<C::Kind as Kind<R>>::Container>
where
    C: IntoIterator + HasKind,
    C::IntoIter: ExactSizeIterator,
    C::Kind: Kind<R>,
    F: FnMut([C::Item; K]) -> R,
{
    let kind = inputs
        .first()
        .map(HasKind::kind)
        .ok_or(Error::EmptyInputSet)?;
    map_as(kind, inputs, f)
}

/// Like [`map`], but the results go into a new container built from `kind`.
///
/// ```rust
/// # use lambda_collections::{map_as, SortedSet};
/// let words = vec!["pear", "fig", "apple"];
/// let lengths = map_as(SortedSet, [&words], |[w]| w.len()).unwrap();
/// assert_eq!(lengths.into_iter().collect::<Vec<_>>(), vec![3, 4, 5]);
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(arity = K))]
pub fn map_as<D, C, R, F, const K: usize>(kind: D, inputs: [C; K], f: F) -> Result<D::Container>
where
    D: Kind<R>,
    C: IntoIterator,
    C::IntoIter: ExactSizeIterator,
    F: FnMut([C::Item; K]) -> R,
{
    let zip = Zip::new(inputs)?;
    let mut out = kind.instantiate()?;
    collect_into(&mut out, zip, f)?;
    Ok(out)
}

/// Like [`map`], but the results are appended to a caller-supplied container.
#[tracing::instrument(level = "trace", skip_all, fields(arity = K))]
pub fn map_into<D, C, R, F, const K: usize>(dest: &mut D, inputs: [C; K], f: F) -> Result<()>
where
    D: Container<Item = R> + ?Sized,
    C: IntoIterator,
    C::IntoIter: ExactSizeIterator,
    F: FnMut([C::Item; K]) -> R,
{
    collect_into(dest, Zip::new(inputs)?, f)
}

/// Run `f` across `inputs` purely for its side effects; results are discarded.
#[tracing::instrument(level = "trace", skip_all, fields(arity = K))]
pub fn map_c<C, R, F, const K: usize>(inputs: [C; K], mut f: F) -> Result<()>
where
    C: IntoIterator,
    C::IntoIter: ExactSizeIterator,
    F: FnMut([C::Item; K]) -> R,
{
    for tuple in Zip::new(inputs)? {
        f(tuple);
    }
    Ok(())
}

/// Flat-map over parallel containers of containers.
///
/// The outer inputs are zipped first; each outer tuple of inner containers is then zipped in
/// turn and every result is appended to one flat container built from `kind`.
///
/// ```rust
/// # use lambda_collections::{map_can, Sequence};
/// let nested = vec![vec![1, 2], vec![3, 4], vec![5, 6]];
/// let flat = map_can(Sequence, [&nested], |[x]| x + 1).unwrap();
/// assert_eq!(flat, vec![2, 3, 4, 5, 6, 7]);
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(arity = K))]
pub fn map_can<D, O, R, F, const K: usize>(kind: D, inputs: [O; K], f: F) -> Result<D::Container>
where
    D: Kind<R>,
    O: IntoIterator,
    O::IntoIter: ExactSizeIterator,
    O::Item: IntoIterator,
    <O::Item as IntoIterator>::IntoIter: ExactSizeIterator,
    F: FnMut([<O::Item as IntoIterator>::Item; K]) -> R,
{
    let outer = Zip::new(inputs)?;
    let mut out = kind.instantiate()?;
    flatten_into(&mut out, outer, f)?;
    Ok(out)
}

/// Like [`map_can`], but the results are appended to a caller-supplied container.
#[tracing::instrument(level = "trace", skip_all, fields(arity = K))]
pub fn map_can_into<D, O, R, F, const K: usize>(
    dest: &mut D,
    inputs: [O; K],
    f: F,
) -> Result<()>
where
    D: Container<Item = R> + ?Sized,
    O: IntoIterator,
    O::IntoIter: ExactSizeIterator,
    O::Item: IntoIterator,
    <O::Item as IntoIterator>::IntoIter: ExactSizeIterator,
    F: FnMut([<O::Item as IntoIterator>::Item; K]) -> R,
{
    flatten_into(dest, Zip::new(inputs)?, f)
}

/// Apply `f` to each sliding tail of `lists`, collecting into a new `Vec`.
///
/// ```rust
/// # use lambda_collections::map_list;
/// let list = vec![1, 2, 3, 4];
/// let sums = map_list([&list], |[tail]| tail.iter().sum::<i32>()).unwrap();
/// assert_eq!(sums, vec![10, 9, 7, 4]);
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(arity = K))]
pub fn map_list<'a, L, T, R, F, const K: usize>(lists: [&'a L; K], f: F) -> Result<Vec<R>>
where
    L: AsRef<[T]> + ?Sized,
    T: 'a,
    F: FnMut([&'a [T]; K]) -> R,
{
    map_list_as(Sequence, lists, f)
}

/// Like [`map_list`], but the results go into a new container built from `kind`.
#[tracing::instrument(level = "trace", skip_all, fields(arity = K))]
pub fn map_list_as<'a, D, L, T, R, F, const K: usize>(
    kind: D,
    lists: [&'a L; K],
    mut f: F,
) -> Result<D::Container>
where
    D: Kind<R>,
    L: AsRef<[T]> + ?Sized,
    T: 'a,
    F: FnMut([&'a [T]; K]) -> R,
{
    let tails = Tails::new(lists.map(|l| l.as_ref()))?;
    let mut out = kind.instantiate()?;
    for suffixes in tails {
        out.add(f(suffixes))?;
    }
    Ok(out)
}

/// True as soon as `f` returns a satisfied result for some tuple; later tuples are not visited.
///
/// ```rust
/// # use lambda_collections::some;
/// let a = vec![1, 2, 3, 4, 5];
/// let b = vec![5, 4, 3, 2, 1];
/// assert!(some([&a, &b], |[x, y]| x == y).unwrap());
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(arity = K), ret)]
pub fn some<C, S, F, const K: usize>(inputs: [C; K], mut f: F) -> Result<bool>
where
    C: IntoIterator,
    C::IntoIter: ExactSizeIterator,
    F: FnMut([C::Item; K]) -> S,
    S: Truthy,
{
    let mut zip = Zip::new(inputs)?;
    Ok(zip.any(|tuple| f(tuple).is_truthy()))
}

/// False as soon as `f` returns an unsatisfied result for some tuple; later tuples are not
/// visited. Vacuously true when the shortest input is empty.
#[tracing::instrument(level = "trace", skip_all, fields(arity = K), ret)]
pub fn every<C, S, F, const K: usize>(inputs: [C; K], mut f: F) -> Result<bool>
where
    C: IntoIterator,
    C::IntoIter: ExactSizeIterator,
    F: FnMut([C::Item; K]) -> S,
    S: Truthy,
{
    let mut zip = Zip::new(inputs)?;
    Ok(zip.all(|tuple| f(tuple).is_truthy()))
}

fn collect_into<D, I, R, F, const K: usize>(dest: &mut D, zip: Zip<I, K>, mut f: F) -> Result<()>
where
    D: Container<Item = R> + ?Sized,
    I: Iterator,
    F: FnMut([I::Item; K]) -> R,
{
    for tuple in zip {
        dest.add(f(tuple))?;
    }
    Ok(())
}

fn flatten_into<D, I, R, F, const K: usize>(dest: &mut D, outer: Zip<I, K>, mut f: F) -> Result<()>
where
    D: Container<Item = R> + ?Sized,
    I: Iterator,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::IntoIter: ExactSizeIterator,
    F: FnMut([<I::Item as IntoIterator>::Item; K]) -> R,
{
    for inner in outer {
        collect_into(dest, Zip::new(inner)?, &mut f)?;
    }
    Ok(())
}
