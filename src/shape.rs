use std::ops::Range;

use crate::repr::{ConstructorKind, Repr};
use crate::BASE_INDEX;

/// Normalized shape of a record: a binary tree of fields.
///
/// Leaves appear in declaration order when read left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductShape<F> {
    Leaf(F),
    Pair(Pair<F>),
}

/// Two subtrees and the number of leaves below them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair<F> {
    left: Box<ProductShape<F>>,
    right: Box<ProductShape<F>>,
    len: usize,
}

impl<F> Pair<F> {
    pub fn left(&self) -> &ProductShape<F> {
        &self.left
    }

    pub fn right(&self) -> &ProductShape<F> {
        &self.right
    }

    pub fn len(&self) -> usize {
        self.len
    }
}

impl<F> ProductShape<F> {
    pub fn pair(left: ProductShape<F>, right: ProductShape<F>) -> Self {
        let len = left.len() + right.len();

        ProductShape::Pair(Pair {
            left: Box::new(left),
            right: Box::new(right),
            len,
        })
    }

    /// Number of leaves in this tree.
    pub fn len(&self) -> usize {
        match self {
            ProductShape::Leaf(_) => 1,
            ProductShape::Pair(pair) => pair.len,
        }
    }

    pub fn leaves(&self) -> Leaves<'_, F> {
        Leaves { stack: vec![self] }
    }
}

pub struct Leaves<'a, F> {
    stack: Vec<&'a ProductShape<F>>,
}

impl<'a, F> Iterator for Leaves<'a, F> {
    type Item = &'a F;

    fn next(&mut self) -> Option<&'a F> {
        loop {
            match self.stack.pop()? {
                ProductShape::Leaf(field) => return Some(field),
                ProductShape::Pair(pair) => {
                    self.stack.push(&pair.right);
                    self.stack.push(&pair.left);
                }
            }
        }
    }
}

/// A record whose representation has been normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<F> {
    name: String,
    kind: ConstructorKind,
    shape: Option<ProductShape<F>>,
}

impl<F> Record<F> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ConstructorKind {
        self.kind
    }

    /// `None` when the record has no fields.
    pub fn shape(&self) -> Option<&ProductShape<F>> {
        self.shape.as_ref()
    }

    pub fn len(&self) -> usize {
        self.shape.as_ref().map_or(0, ProductShape::len)
    }

    pub fn is_empty(&self) -> bool {
        self.shape.is_none()
    }

    /// Every valid position of this record.
    pub fn positions(&self) -> Range<usize> {
        BASE_INDEX..BASE_INDEX + self.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &F> {
        self.shape.iter().flat_map(ProductShape::leaves)
    }
}

#[derive(Default)]
struct Metadata {
    name: Option<String>,
    kind: Option<ConstructorKind>,
}

impl<F> Repr<F> {
    /// Strips the metadata wrappers and unit products from this
    /// representation.
    ///
    /// The record takes its name from the outermost `Type` wrapper and its
    /// kind from the outermost `Constructor`.
    pub fn normalize(self) -> Record<F> {
        let mut meta = Metadata::default();
        let shape = self.strip(&mut meta);

        Record {
            name: meta.name.unwrap_or_else(|| "<anonymous>".to_owned()),
            kind: meta.kind.unwrap_or(ConstructorKind::Named),
            shape,
        }
    }

    fn strip(self, meta: &mut Metadata) -> Option<ProductShape<F>> {
        match self {
            Repr::Type { name, inner } => {
                meta.name.get_or_insert(name);
                inner.strip(meta)
            }
            Repr::Constructor { name, kind, inner } => {
                meta.name.get_or_insert(name);
                meta.kind.get_or_insert(kind);
                inner.strip(meta)
            }
            Repr::Product(left, right) => {
                match (left.strip(meta), right.strip(meta)) {
                    (Some(left), Some(right)) => Some(ProductShape::pair(left, right)),
                    (left, right) => left.or(right),
                }
            }
            Repr::Field(field) => Some(ProductShape::Leaf(field)),
            Repr::Unit => None,
        }
    }
}
