use derive_more::Display;
use log::trace;

use crate::error::PositionNotFound;
use crate::shape::{ProductShape, Record};
use crate::BASE_INDEX;

/// Which half of a pair holds the position being searched for.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[display(fmt = "left")]
    Left,
    #[display(fmt = "right")]
    Right,
}

/// Focus on a single field of a record, found by its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor<'a, F> {
    position: usize,
    // innermost step first
    steps: Vec<Direction>,
    field: &'a F,
}

impl<'a, F> Accessor<'a, F> {
    /// Identity focus on a leaf.
    pub fn leaf(position: usize, field: &'a F) -> Self {
        Accessor { position, steps: Vec::new(), field }
    }

    /// Composes this focus with a step into one half of the enclosing pair.
    pub fn under(mut self, direction: Direction) -> Self {
        self.steps.push(direction);
        self
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn field(&self) -> &'a F {
        self.field
    }

    /// Steps from the root of the shape down to the field.
    pub fn path(&self) -> impl Iterator<Item = Direction> + '_ {
        self.steps.iter().rev().copied()
    }

    pub fn depth(&self) -> usize {
        self.steps.len()
    }
}

impl<F> ProductShape<F> {
    /// Picks the half of this pair whose positions contain `target`, given
    /// that the pair's first leaf sits at `offset`.
    pub fn direction(&self, target: usize, offset: usize) -> Option<Direction> {
        match self {
            ProductShape::Leaf(_) => None,
            ProductShape::Pair(pair) => {
                if target < offset {
                    return None;
                }

                // position relative to the pair's first leaf
                let relative = target - offset;

                if relative >= pair.len() {
                    None
                } else if relative < pair.left().len() {
                    Some(Direction::Left)
                } else {
                    Some(Direction::Right)
                }
            }
        }
    }

    pub fn locate(&self, target: usize, offset: usize) -> Option<Accessor<'_, F>> {
        match self {
            ProductShape::Leaf(field) => {
                if target == offset {
                    Some(Accessor::leaf(target, field))
                } else {
                    None
                }
            }
            ProductShape::Pair(pair) => {
                let direction = self.direction(target, offset)?;
                trace!("position {} from offset {}: going {}", target, offset, direction);

                // going right means offset + left.len() <= target
                let found = match direction {
                    Direction::Left => pair.left().locate(target, offset),
                    Direction::Right => pair.right().locate(target, offset + pair.left().len()),
                };

                found.map(|accessor| accessor.under(direction))
            }
        }
    }
}

/// Accessors of every leaf of a shape, in position order.
pub struct Accessors<'a, F> {
    // (subtree, position of its first leaf, steps from the root)
    stack: Vec<(&'a ProductShape<F>, usize, Vec<Direction>)>,
}

impl<'a, F> Iterator for Accessors<'a, F> {
    type Item = Accessor<'a, F>;

    fn next(&mut self) -> Option<Accessor<'a, F>> {
        loop {
            let (shape, offset, path) = self.stack.pop()?;

            match shape {
                ProductShape::Leaf(field) => {
                    let mut steps = path;
                    steps.reverse();
                    return Some(Accessor { position: offset, steps, field });
                }
                ProductShape::Pair(pair) => {
                    let mut right = path.clone();
                    right.push(Direction::Right);
                    self.stack.push((pair.right(), offset + pair.left().len(), right));

                    let mut left = path;
                    left.push(Direction::Left);
                    self.stack.push((pair.left(), offset, left));
                }
            }
        }
    }
}

impl<F> Record<F> {
    pub fn locate(&self, position: usize) -> Result<Accessor<'_, F>, PositionNotFound> {
        self.shape()
            .and_then(|shape| shape.locate(position, BASE_INDEX))
            .ok_or_else(|| PositionNotFound::new(self.name(), position, self.len()))
    }

    /// Accessors for every position of the record, in order.
    pub fn accessors(&self) -> Accessors<'_, F> {
        Accessors {
            stack: self.shape().map(|shape| (shape, BASE_INDEX, Vec::new())).into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::{ConstructorKind, Repr};

    use super::Direction::{Left, Right};

    fn human() -> Record<&'static str> {
        Repr::record("Human", ConstructorKind::Named, vec!["name", "age", "address"]).normalize()
    }

    fn record_of(n: usize) -> Record<usize> {
        Repr::record("R", ConstructorKind::Named, (0..n).collect()).normalize()
    }

    #[test]
    fn finds_each_field_of_human() {
        let human = human();

        let name = human.locate(1).unwrap();
        assert_eq!(*name.field(), "name");
        assert_eq!(name.path().collect::<Vec<_>>(), vec![Left]);

        let age = human.locate(2).unwrap();
        assert_eq!(*age.field(), "age");
        assert_eq!(age.path().collect::<Vec<_>>(), vec![Right, Left]);

        let address = human.locate(3).unwrap();
        assert_eq!(*address.field(), "address");
        assert_eq!(address.path().collect::<Vec<_>>(), vec![Right, Right]);
        assert_eq!(address.position(), 3);
    }

    #[test]
    fn rejects_out_of_range_positions() {
        let human = human();

        assert_eq!(human.locate(0), Err(PositionNotFound::new("Human", 0, 3)));
        assert_eq!(human.locate(4), Err(PositionNotFound::new("Human", 4, 3)));
        assert!(human.locate(usize::MAX).is_err());
    }

    #[test]
    fn single_field_only_at_base() {
        let record = record_of(1);

        let accessor = record.locate(1).unwrap();
        assert_eq!(*accessor.field(), 0);
        assert_eq!(accessor.depth(), 0);

        assert!(record.locate(0).is_err());
        assert!(record.locate(2).is_err());
    }

    #[test]
    fn empty_record_has_no_positions() {
        let record = record_of(0);

        assert!(record.locate(1).is_err());
        assert_eq!(record.accessors().count(), 0);
    }

    #[test]
    fn every_position_reaches_its_field() {
        for n in 1..64 {
            let record = record_of(n);

            for (position, accessor) in record.positions().zip(record.accessors()) {
                assert_eq!(accessor.position(), position);
                assert_eq!(*accessor.field(), position - BASE_INDEX);
            }
            assert_eq!(record.accessors().count(), n);
        }
    }

    #[test]
    fn depth_is_logarithmic_for_balanced_shapes() {
        let record = record_of(1000);

        assert!(record.accessors().all(|accessor| accessor.depth() <= 10));
    }

    #[test]
    fn direction_compares_ranges() {
        let shape = record_of(5);
        let shape = shape.shape().unwrap();

        // left half holds positions 3..5 when searched from offset 3
        assert_eq!(shape.direction(2, 3), None);
        assert_eq!(shape.direction(3, 3), Some(Left));
        assert_eq!(shape.direction(4, 3), Some(Left));
        assert_eq!(shape.direction(5, 3), Some(Right));
        assert_eq!(shape.direction(7, 3), Some(Right));
        assert_eq!(shape.direction(8, 3), None);

        assert_eq!(ProductShape::Leaf(()).direction(1, 1), None);
    }

    #[test]
    fn huge_offsets_do_not_overflow() {
        let record = human();
        let shape = record.shape().unwrap();

        assert_eq!(shape.direction(1, usize::MAX), None);
        assert!(shape.locate(1, usize::MAX).is_none());
        assert!(shape.locate(usize::MAX - 1, usize::MAX).is_none());

        // the last three positions of the address space are still reachable
        assert_eq!(shape.direction(usize::MAX, usize::MAX - 2), Some(Right));
        assert_eq!(*shape.locate(usize::MAX - 2, usize::MAX - 2).unwrap().field(), "name");
        assert_eq!(*shape.locate(usize::MAX, usize::MAX - 2).unwrap().field(), "address");
    }

    #[test]
    fn accessors_agree_with_locate() {
        for n in 0..64 {
            let record = record_of(n);

            for accessor in record.accessors() {
                assert_eq!(record.locate(accessor.position()), Ok(accessor));
            }
        }
    }

    #[test]
    fn directions_display_lowercase() {
        assert_eq!(Left.to_string(), "left");
        assert_eq!(Right.to_string(), "right");
    }
}
