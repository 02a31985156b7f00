use core::cmp::Ordering;

/// A three-way comparison over `T`.
///
/// A comparator only has to be a total order over whatever part of `T` it looks at. Two distinct
/// values that compare [`Ordering::Equal`] are duplicates, and a [`SortedList`] keeps them side by
/// side in insertion order.
///
/// Every `Fn(&T, &T) -> Ordering` is a comparator, so most callers never implement this trait by
/// hand:
///
/// ```
/// use navlist::SortedList;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// let list = SortedList::from_vec(vec!["ccc", "a", "bb"], by_len);
/// assert_eq!(list.to_vec(), vec!["a", "bb", "ccc"]);
/// ```
///
/// It is a logic error for a comparator to change its answer for the same pair of values while
/// a collection ordered by it is alive.
///
/// [`SortedList`]: crate::SortedList
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders values by their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the order of the wrapped comparator.
///
/// ```
/// use navlist::{NaturalOrder, Reversed, SortedList};
///
/// let list = SortedList::from_vec(vec![1, 3, 2], Reversed(NaturalOrder));
/// assert_eq!(list.to_vec(), vec![3, 2, 1]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Orders values by a key extracted from them. Values with equal keys are duplicates, whatever
/// the rest of their fields hold.
///
/// ```
/// use navlist::{ByKey, SortedList};
///
/// let mut list = SortedList::with_comparator(ByKey(|entry: &(u32, &str)| entry.0));
/// list.insert((2, "b"));
/// list.insert((1, "a"));
/// list.insert((2, "c"));
/// assert_eq!(list.to_vec(), vec![(1, "a"), (2, "b"), (2, "c")]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: Ord, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn closures_are_comparators() {
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        assert_eq!(by_abs.compare(&-3, &2), Ordering::Greater);
        assert_eq!(by_abs.compare(&-2, &2), Ordering::Equal);
    }

    #[test]
    fn natural_order_works_on_references() {
        let (a, b) = (1, 2);
        assert_eq!(NaturalOrder.compare(&&a, &&b), Ordering::Less);
        assert_eq!(NaturalOrder.compare("b", "a"), Ordering::Greater);
    }

    #[test]
    fn reversed_flips() {
        assert_eq!(Reversed(NaturalOrder).compare(&1, &2), Ordering::Greater);
        assert_eq!(Reversed(NaturalOrder).compare(&2, &2), Ordering::Equal);
    }

    #[test]
    fn by_key_ignores_payload() {
        let cmp = ByKey(|pair: &(u8, char)| pair.0);
        assert_eq!(cmp.compare(&(1, 'z'), &(1, 'a')), Ordering::Equal);
        assert_eq!(cmp.compare(&(0, 'z'), &(1, 'a')), Ordering::Less);
    }
}
