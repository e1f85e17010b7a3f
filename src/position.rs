use log::debug;
use once_cell::sync::OnceCell;

use crate::error::PositionNotFound;
use crate::locate::Accessor;
use crate::repr::Repr;
use crate::shape::Record;

/// Field at position `I` of a record, counting from [`BASE_INDEX`](crate::BASE_INDEX).
///
/// Implemented by `#[derive(Positional)]` once for each field. A position
/// the record does not have simply has no impl, so asking for it fails to
/// compile:
///
/// ```compile_fail,E0277
/// use positional_derive::Positional;
///
/// #[derive(Positional)]
/// struct Human {
///     name: String,
///     age: u32,
///     address: String,
/// }
///
/// fn main() {
///     let human = Human { name: "Tunyasz".into(), age: 50, address: "London".into() };
///     positional::get_position::<4, _>(&human);
/// }
/// ```
///
/// Positions start at one, not zero:
///
/// ```compile_fail,E0277
/// use positional_derive::Positional;
///
/// #[derive(Positional)]
/// struct Wrapper(u8);
///
/// fn main() {
///     positional::get_position::<0, _>(&Wrapper(1));
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no field at position {I}",
    label = "no field at position {I}",
    note = "fields are numbered from 1 in declaration order"
)]
pub trait HasPosition<const I: usize>: Sized {
    type Field;

    fn position(&self) -> &Self::Field;

    fn position_mut(&mut self) -> &mut Self::Field;

    fn with_position(mut self, value: Self::Field) -> Self {
        *self.position_mut() = value;
        self
    }
}

pub fn get_position<const I: usize, R: HasPosition<I>>(record: &R) -> &R::Field {
    record.position()
}

pub fn get_position_mut<const I: usize, R: HasPosition<I>>(record: &mut R) -> &mut R::Field {
    record.position_mut()
}

/// Returns `record` with the field at position `I` replaced by `value`.
pub fn set_position<const I: usize, R: HasPosition<I>>(value: R::Field, record: R) -> R {
    record.with_position(value)
}

/// Fails to compile unless the type has a field at each listed position.
///
/// ```
/// use positional::assert_position;
/// use positional_derive::Positional;
///
/// #[derive(Positional)]
/// struct Point(i32, i32);
///
/// assert_position!(Point: 1, 2);
/// ```
///
/// ```compile_fail,E0277
/// use positional::assert_position;
/// use positional_derive::Positional;
///
/// #[derive(Positional)]
/// struct Point(i32, i32);
///
/// assert_position!(Point: 3);
/// ```
#[macro_export]
macro_rules! assert_position {
    ($ty:ty: $($position:literal),+ $(,)?) => {
        const _: fn() = || {
            fn has_position<const I: usize, R: $crate::HasPosition<I>>() {}
            $(has_position::<$position, $ty>();)+
        };
    };
}

/// Describes one declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    /// `None` for tuple struct fields.
    pub name: Option<&'static str>,
    /// The field's type as written in the declaration.
    pub ty: &'static str,
}

impl FieldInfo {
    pub const fn new(name: Option<&'static str>, ty: &'static str) -> Self {
        FieldInfo { name, ty }
    }
}

/// Static description of a record, implemented by `#[derive(Positional)]`.
pub trait Positional {
    const NAME: &'static str;
    const FIELD_COUNT: usize;

    fn representation() -> Repr<FieldInfo>;

    /// Normalized representation, derived on first use.
    fn record() -> &'static Record<FieldInfo>;
}

pub fn field_count<T: Positional>() -> usize {
    T::FIELD_COUNT
}

/// Finds the field at `position` of `T` at runtime.
pub fn field_at<T: Positional>(position: usize) -> Result<Accessor<'static, FieldInfo>, PositionNotFound> {
    T::record().locate(position)
}

pub fn cached_record(
    cell: &'static OnceCell<Record<FieldInfo>>,
    representation: fn() -> Repr<FieldInfo>,
) -> &'static Record<FieldInfo> {
    cell.get_or_init(|| {
        let record = representation().normalize();
        debug!("derived shape of `{}` with {} fields", record.name(), record.len());
        record
    })
}
