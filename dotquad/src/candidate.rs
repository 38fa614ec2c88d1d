use crate::Ipv4Str;
use core::any::Any;

/// A value that may or may not be a string.
///
/// Validation accepts anything implementing this trait and treats every
/// value for which [`as_candidate_str`] returns [`None`] as invalid.
/// Values of other types can still be validated through `&dyn Any`, which
/// recognizes the string types of this crate, `core` and `alloc`.
///
/// ```
/// use core::any::Any;
/// use dotquad::Candidate as _;
///
/// struct Host;
///
/// assert_eq!("10.0.0.1".as_candidate_str(), Some("10.0.0.1"));
/// assert_eq!(Some("10.0.0.1").as_candidate_str(), Some("10.0.0.1"));
/// assert_eq!(None::<&str>.as_candidate_str(), None);
/// assert_eq!(42u32.as_candidate_str(), None);
/// assert_eq!((&Host as &dyn Any).as_candidate_str(), None);
/// ```
///
/// [`as_candidate_str`]: Candidate::as_candidate_str
pub trait Candidate {
    fn as_candidate_str(&self) -> Option<&str>;
}

impl Candidate for str {
    #[inline]
    fn as_candidate_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl Candidate for Ipv4Str<'_> {
    #[inline]
    fn as_candidate_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: Candidate> Candidate for Option<T> {
    #[inline]
    fn as_candidate_str(&self) -> Option<&str> {
        self.as_ref().and_then(T::as_candidate_str)
    }
}

macro_rules! impl_for_ptr {
    ($ty:ty) => {
        impl<T: Candidate + ?Sized> Candidate for $ty {
            #[inline]
            fn as_candidate_str(&self) -> Option<&str> {
                T::as_candidate_str(self)
            }
        }
    };
}

impl_for_ptr!(&T);

impl_for_ptr!(&mut T);

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl_for_ptr!(alloc::boxed::Box<T>);

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl_for_ptr!(alloc::rc::Rc<T>);

#[cfg(all(feature = "alloc", target_has_atomic = "ptr"))]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl_for_ptr!(alloc::sync::Arc<T>);

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl Candidate for alloc::string::String {
    #[inline]
    fn as_candidate_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl<B> Candidate for alloc::borrow::Cow<'_, B>
where
    B: Candidate + alloc::borrow::ToOwned + ?Sized,
{
    #[inline]
    fn as_candidate_str(&self) -> Option<&str> {
        B::as_candidate_str(self)
    }
}

macro_rules! impl_not_a_string {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Candidate for $ty {
                #[inline]
                fn as_candidate_str(&self) -> Option<&str> {
                    None
                }
            }
        )+
    };
}

impl_not_a_string!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
);

impl<T> Candidate for [T] {
    #[inline]
    fn as_candidate_str(&self) -> Option<&str> {
        None
    }
}

impl<T, const N: usize> Candidate for [T; N] {
    #[inline]
    fn as_candidate_str(&self) -> Option<&str> {
        None
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl<T> Candidate for alloc::vec::Vec<T> {
    #[inline]
    fn as_candidate_str(&self) -> Option<&str> {
        None
    }
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl<K, V> Candidate for alloc::collections::BTreeMap<K, V> {
    #[inline]
    fn as_candidate_str(&self) -> Option<&str> {
        None
    }
}

/// Downcasts to one of the known string types, bare or behind
/// `&'static`, `Option`, `Box`, `Rc` or `Arc`.
fn downcast_str(any: &dyn Any) -> Option<&str> {
    macro_rules! try_downcast {
        ($($ty:ty),+) => {
            $(
                if let Some(value) = any.downcast_ref::<$ty>() {
                    return value.as_candidate_str();
                }
            )+
        };
    }

    macro_rules! try_downcast_wrapped {
        ($($ty:ty),+) => {
            $(
                try_downcast!($ty, &'static $ty, Option<$ty>);
                #[cfg(feature = "alloc")]
                try_downcast!(
                    alloc::boxed::Box<$ty>,
                    alloc::rc::Rc<$ty>,
                    Option<alloc::boxed::Box<$ty>>
                );
                #[cfg(all(feature = "alloc", target_has_atomic = "ptr"))]
                try_downcast!(alloc::sync::Arc<$ty>);
            )+
        };
    }

    try_downcast_wrapped!(&'static str, Ipv4Str<'static>);

    #[cfg(feature = "alloc")]
    {
        use alloc::{borrow::Cow, boxed::Box, rc::Rc, string::String};
        try_downcast_wrapped!(String, Box<str>, Cow<'static, str>, Rc<str>);
        #[cfg(target_has_atomic = "ptr")]
        try_downcast_wrapped!(alloc::sync::Arc<str>);
    }

    None
}

macro_rules! impl_for_dyn_any {
    ($ty:ty) => {
        impl Candidate for $ty {
            #[inline]
            fn as_candidate_str(&self) -> Option<&str> {
                downcast_str(self)
            }
        }
    };
}

impl_for_dyn_any!(dyn Any);

impl_for_dyn_any!(dyn Any + Send);

impl_for_dyn_any!(dyn Any + Send + Sync);
