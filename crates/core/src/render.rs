//! Textual rendering of pair fields.
//!
//! `Option` has no `Display`, yet absent keys and values still need a printed
//! form. [`Render`] is `Display` plus a `null` token for `None`.

use core::fmt;
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// Token written for an absent field.
pub const NULL_TOKEN: &str = "null";

/// Default textual form of a single pair field.
pub trait Render {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Implement [`Render`] by delegating to the type's `Display`.
///
/// ```
/// use core::fmt;
/// use kvstream_core::{pair, render_via_display};
///
/// struct Topic(&'static str);
///
/// impl fmt::Display for Topic {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "topic:{}", self.0)
///     }
/// }
///
/// render_via_display!(Topic);
///
/// assert_eq!(pair(Topic("orders"), 1).to_string(), "Pair(topic:orders, 1)");
/// ```
#[macro_export]
macro_rules! render_via_display {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::Render for $t {
                fn render(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

render_via_display!(
    bool, char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl Render for Cow<'_, str> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl<T: Render> Render for Option<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(inner) => inner.render(f),
            None => f.write_str(NULL_TOKEN),
        }
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Rc<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Arc<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shown<T>(T);

    impl<T: Render> fmt::Display for Shown<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.render(f)
        }
    }

    #[test]
    fn scalars_render_like_display() {
        assert_eq!(Shown(42u16).to_string(), "42");
        assert_eq!(Shown(-7i64).to_string(), "-7");
        assert_eq!(Shown(true).to_string(), "true");
        assert_eq!(Shown('k').to_string(), "k");
        assert_eq!(Shown("text").to_string(), "text");
    }

    #[test]
    fn none_renders_as_null_token() {
        assert_eq!(Shown(None::<u8>).to_string(), NULL_TOKEN);
        assert_eq!(Shown(Some(None::<u8>)).to_string(), "null");
        assert_eq!(Shown(Some("v")).to_string(), "v");
    }

    #[test]
    fn smart_pointers_render_their_target() {
        assert_eq!(Shown(Box::new(5)).to_string(), "5");
        assert_eq!(Shown(Rc::new(String::from("rc"))).to_string(), "rc");
        assert_eq!(Shown(Arc::<str>::from("arc")).to_string(), "arc");
        assert_eq!(Shown(Cow::Borrowed("cow")).to_string(), "cow");
    }
}
