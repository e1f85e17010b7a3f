#![allow(dead_code)]

use std::thread;

use positional::{field_at, field_count, ConstructorKind, Direction, FieldInfo, Positional, PositionNotFound};
use positional_derive::Positional;

#[derive(Positional)]
struct Human {
    name: String,
    age: u32,
    address: String,
}

#[derive(Positional)]
struct Rgb(u8, u8, u8);

#[derive(Positional)]
struct Marker;

#[derive(Positional)]
struct Empty {}

#[derive(Positional)]
struct Boxed<T> {
    inner: Box<T>,
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn describes_record() {
    assert_eq!(Human::NAME, "Human");
    assert_eq!(Human::FIELD_COUNT, 3);
    assert_eq!(field_count::<Rgb>(), 3);

    let record = Human::record();
    assert_eq!(record.name(), "Human");
    assert_eq!(record.kind(), ConstructorKind::Named);
    assert_eq!(
        record.fields().map(|field| field.name).collect::<Vec<_>>(),
        vec![Some("name"), Some("age"), Some("address")],
    );
}

#[test]
fn finds_fields_at_runtime() {
    init_logger();

    let age = field_at::<Human>(2).unwrap();
    assert_eq!(*age.field(), FieldInfo::new(Some("age"), "u32"));
    assert_eq!(age.path().collect::<Vec<_>>(), vec![Direction::Right, Direction::Left]);

    let blue = field_at::<Rgb>(3).unwrap();
    assert_eq!(blue.field().name, None);
    assert_eq!(blue.field().ty, "u8");
}

#[test]
fn reports_missing_positions() {
    init_logger();

    assert_eq!(field_at::<Human>(0).unwrap_err(), PositionNotFound::new("Human", 0, 3));
    assert_eq!(
        field_at::<Human>(4).unwrap_err().to_string(),
        "type `Human` has no field at position 4 (3 fields, numbered from 1)",
    );
}

#[test]
fn fieldless_records_have_no_positions() {
    assert_eq!(Marker::FIELD_COUNT, 0);
    assert_eq!(Marker::record().kind(), ConstructorKind::Unit);
    assert!(Marker::record().is_empty());
    assert!(field_at::<Marker>(1).is_err());

    assert_eq!(Empty::record().kind(), ConstructorKind::Named);
    assert!(field_at::<Empty>(1).is_err());
}

#[test]
fn generic_records_describe_declared_types() {
    let inner = field_at::<Boxed<u8>>(1).unwrap();

    // spacing of the written type depends on the compiler's token printer
    assert_eq!(inner.field().ty.replace(' ', ""), "Box<T>");
    assert!(std::ptr::eq(Boxed::<u8>::record(), Boxed::<String>::record()));
}

#[test]
fn record_is_shared_across_threads() {
    init_logger();

    let handles = (0..8)
        .map(|_| thread::spawn(|| Rgb::record() as *const _ as usize))
        .collect::<Vec<_>>();

    let addresses = handles.into_iter()
        .map(|handle| handle.join().unwrap())
        .collect::<Vec<_>>();

    assert!(addresses.iter().all(|address| *address == addresses[0]));
    assert_eq!(Rgb::representation().normalize(), *Rgb::record());
}
