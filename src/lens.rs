//! Composable get/set focus on part of a value.
//!
//! Every lens here obeys the usual laws: setting then getting yields the
//! value set, setting what was got changes nothing, and a second set
//! overrides the first.

use crate::position::HasPosition;

pub trait Lens<S> {
    type Target;

    fn get<'a>(&self, source: &'a S) -> &'a Self::Target;

    fn get_mut<'a>(&self, source: &'a mut S) -> &'a mut Self::Target;

    fn set(&self, mut source: S, value: Self::Target) -> S {
        *self.get_mut(&mut source) = value;
        source
    }

    fn modify(&self, mut source: S, f: impl FnOnce(&mut Self::Target)) -> S {
        f(self.get_mut(&mut source));
        source
    }
}

/// Focus on the whole value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<S> Lens<S> for Identity {
    type Target = S;

    fn get<'a>(&self, source: &'a S) -> &'a S {
        source
    }

    fn get_mut<'a>(&self, source: &'a mut S) -> &'a mut S {
        source
    }

    fn set(&self, _: S, value: S) -> S {
        value
    }
}

/// Focus through `A`, then through `B`.
///
/// The value `A` focuses on must not borrow, since it is reached through a
/// reference of any lifetime.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compose<A, B>(pub A, pub B);

impl<A, B> Compose<A, B> {
    pub fn then<C>(self, next: C) -> Compose<Self, C> {
        Compose(self, next)
    }
}

impl<S, A, B> Lens<S> for Compose<A, B>
where
    A: Lens<S>,
    A::Target: 'static,
    B: Lens<A::Target>,
{
    type Target = B::Target;

    fn get<'a>(&self, source: &'a S) -> &'a Self::Target {
        self.1.get(self.0.get(source))
    }

    fn get_mut<'a>(&self, source: &'a mut S) -> &'a mut Self::Target {
        self.1.get_mut(self.0.get_mut(source))
    }
}

/// Focus on the field at position `I`.
#[derive(Clone, Copy, Default)]
pub struct Position<const I: usize>;

impl<const I: usize> std::fmt::Debug for Position<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Position<{}>", I)
    }
}

pub fn position<const I: usize>() -> Position<I> {
    Position
}

impl<const I: usize> Position<I> {
    /// Continues the focus into the field's own fields.
    pub fn then<L>(self, next: L) -> Compose<Self, L> {
        Compose(self, next)
    }
}

impl<const I: usize, S: HasPosition<I>> Lens<S> for Position<I> {
    type Target = S::Field;

    fn get<'a>(&self, source: &'a S) -> &'a S::Field {
        source.position()
    }

    fn get_mut<'a>(&self, source: &'a mut S) -> &'a mut S::Field {
        source.position_mut()
    }
}
