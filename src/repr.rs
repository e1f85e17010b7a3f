/// Generic representation of a record, before normalization.
///
/// `Type` and `Constructor` only carry metadata about the record. The
/// fields themselves sit in a tree of `Product`s below them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Repr<F> {
    Type { name: String, inner: Box<Repr<F>> },
    Constructor { name: String, kind: ConstructorKind, inner: Box<Repr<F>> },
    Product(Box<Repr<F>>, Box<Repr<F>>),
    Field(F),
    Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorKind {
    /// `struct Foo { a: A, b: B }`
    Named,
    /// `struct Foo(A, B);`
    Tuple,
    /// `struct Foo;`
    Unit,
}

impl<F> Repr<F> {
    /// Representation of a record with a single constructor holding
    /// `fields` in declaration order.
    pub fn record(name: impl Into<String>, kind: ConstructorKind, fields: Vec<F>) -> Self {
        let name = name.into();

        Repr::Type {
            name: name.clone(),
            inner: Box::new(Repr::Constructor {
                name,
                kind,
                inner: Box::new(Repr::product(fields)),
            }),
        }
    }

    /// Balanced product of `fields`. The left half takes the first
    /// `len / 2` fields.
    pub fn product(mut fields: Vec<F>) -> Self {
        match fields.len() {
            0 => Repr::Unit,
            1 => match fields.pop() {
                Some(field) => Repr::Field(field),
                None => Repr::Unit,
            },
            len => {
                let right = fields.split_off(len / 2);
                Repr::Product(Box::new(Repr::product(fields)), Box::new(Repr::product(right)))
            }
        }
    }
}
