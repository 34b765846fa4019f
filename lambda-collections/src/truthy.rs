use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::bounded::{BoundedDeque, BoundedQueue};

/// Whether a callback result counts as "satisfied" for [`crate::some`] and [`crate::every`].
///
/// `None` and `false` are the only unsatisfied results: `Option` stands in for an absent
/// value and `bool` for an explicit verdict. Every other value is satisfied, including
/// empty collections and zero.
///
/// Scalars, strings, tuples, arrays, slices and the std collections are covered; smart
/// pointers and references defer to what they point at. A caller type opts in with one
/// line:
///
/// ```rust
/// # use lambda_collections::{some, Truthy};
/// struct Hit(u32);
///
/// impl Truthy for Hit {
///     fn is_truthy(&self) -> bool {
///         true
///     }
/// }
///
/// let scores = vec![0, 7, 0];
/// assert!(some([&scores], |[s]| (*s > 0).then(|| Hit(*s))).unwrap());
/// ```
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().map_or(false, Truthy::is_truthy)
    }
}

macro_rules! delegate_truthy {
    ($($ptr:ident),+) => {
        $(
            impl<T: Truthy + ?Sized> Truthy for $ptr<T> {
                fn is_truthy(&self) -> bool {
                    (**self).is_truthy()
                }
            }
        )+
    };
}

delegate_truthy!(Box, Rc, Arc);

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for &mut T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

macro_rules! always_truthy {
    ($($t:ty),+) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    true
                }
            }
        )+
    };
}

always_truthy!(
    (), char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64
);

macro_rules! always_truthy_generic {
    ($(impl<$($param:ident),+> for $t:ty;)+) => {
        $(
            impl<$($param),+> Truthy for $t {
                fn is_truthy(&self) -> bool {
                    true
                }
            }
        )+
    };
}

always_truthy_generic! {
    impl<T> for Vec<T>;
    impl<T> for VecDeque<T>;
    impl<T> for BinaryHeap<T>;
    impl<T> for BTreeSet<T>;
    impl<T, S> for HashSet<T, S>;
    impl<K, V> for BTreeMap<K, V>;
    impl<K, V, S> for HashMap<K, V, S>;
    impl<T> for BoundedQueue<T>;
    impl<T> for BoundedDeque<T>;
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T, const N: usize> Truthy for [T; N] {
    fn is_truthy(&self) -> bool {
        true
    }
}

macro_rules! tuple_truthy {
    ($($name:ident)+) => {
        impl<$($name),+> Truthy for ($($name,)+) {
            fn is_truthy(&self) -> bool {
                true
            }
        }
    };
}

tuple_truthy!(A);
tuple_truthy!(A B);
tuple_truthy!(A B C);
tuple_truthy!(A B C D);
tuple_truthy!(A B C D E);
tuple_truthy!(A B C D E F);
tuple_truthy!(A B C D E F G);
tuple_truthy!(A B C D E F G H);
tuple_truthy!(A B C D E F G H I);
tuple_truthy!(A B C D E F G H I J);
tuple_truthy!(A B C D E F G H I J K);
tuple_truthy!(A B C D E F G H I J K L);
