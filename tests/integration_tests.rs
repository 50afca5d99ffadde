use anyset::{AnySet, SetError, TypeKey};
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

/// Counts how many times values carrying the same counter were dropped
struct Tracked {
    label: &'static str,
    drops: Rc<Cell<usize>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn test_basic_operations() -> Result<(), SetError> {
    let mut set = AnySet::new();

    // Test empty state
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);

    // Insert and retrieve
    set.insert(42i32);
    assert_eq!(set.get::<i32>(), Some(&42));
    assert_eq!(*set.get_ref::<i32>()?, 42);
    assert!(set.contains::<i32>());

    // Update in place
    *set.get_mut_ref::<i32>()? = 100;
    assert_eq!(set.get::<i32>(), Some(&100));

    if let Some(v) = set.get_mut::<i32>() {
        *v += 1;
    }
    assert_eq!(set.get::<i32>(), Some(&101));

    // Remove
    assert!(set.remove::<i32>());
    assert!(!set.contains::<i32>());
    assert!(set.is_empty());

    Ok(())
}

#[test]
fn test_console_scenario() -> Result<(), SetError> {
    let mut set = AnySet::new();
    set.insert(2);
    set.insert(5.5);
    set.insert("hello".to_string());

    assert_eq!(set.get::<i32>(), Some(&2));
    assert_eq!(set.get::<f64>(), Some(&5.5));
    assert_eq!(set.get::<String>().map(String::as_str), Some("hello"));
    assert_eq!(set.get::<bool>(), None);
    assert_eq!(set.len(), 3);

    Ok(())
}

#[test]
fn test_missing_type() {
    let mut set = AnySet::new();
    set.insert(Point { x: 1, y: 2 });

    assert!(set.get::<String>().is_none());

    let err = set.get_ref::<String>().unwrap_err();
    assert_eq!(err, SetError::TypeNotFound(TypeKey::of::<String>()));
    assert!(err.type_name().ends_with("String"));

    let message = format!("{}", err);
    assert!(!message.is_empty());
    assert!(message.contains("String"));

    // Mutable lookup reports the same way
    assert!(matches!(
        set.get_mut_ref::<Vec<u8>>(),
        Err(SetError::TypeNotFound(_))
    ));
}

#[test]
fn test_error_display() {
    let err = SetError::TypeNotFound(TypeKey::of::<u8>());
    assert_eq!(format!("{}", err), "No value of type `u8` found in set");
    assert_eq!(err.key(), TypeKey::of::<u8>());

    // Usable as a boxed std error
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(boxed.to_string(), "No value of type `u8` found in set");

    // Test Debug implementation
    assert!(format!("{:?}", err).contains("TypeNotFound"));
}

#[test]
fn test_overwrite_drops_previous_value() {
    let drops = Rc::new(Cell::new(0));
    let mut set = AnySet::new();

    set.insert(Tracked {
        label: "first",
        drops: Rc::clone(&drops),
    });
    set.insert(Tracked {
        label: "second",
        drops: Rc::clone(&drops),
    });

    // The first value is gone before we even look
    assert_eq!(drops.get(), 1);
    assert_eq!(set.get::<Tracked>().map(|t| t.label), Some("second"));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_similar_types_stay_separate() {
    let mut set = AnySet::new();

    set.insert(1.0f32);
    set.insert(1.0f64);
    set.insert(1u32);
    set.insert(1i32);
    set.insert([1u8; 4]);
    set.insert(u32::from_ne_bytes([1u8; 4]) as u64);

    assert_eq!(set.len(), 6);
    assert_eq!(set.get::<f32>(), Some(&1.0));
    assert_eq!(set.get::<f64>(), Some(&1.0));

    // Overwriting one leaves its look-alikes alone
    set.insert(2.0f32);
    assert_eq!(set.get::<f32>(), Some(&2.0));
    assert_eq!(set.get::<f64>(), Some(&1.0));
    assert_eq!(set.get::<u32>(), Some(&1));
    assert_eq!(set.get::<i32>(), Some(&1));
}

#[test]
fn test_move_only_values() -> Result<(), SetError> {
    struct Handle(Box<u32>);

    let mut set = AnySet::new();
    set.insert(Handle(Box::new(9)));
    set.insert(Box::new(Point { x: 3, y: 4 }));

    assert_eq!(*set.get_ref::<Handle>()?.0, 9);
    assert_eq!(**set.get_ref::<Box<Point>>()?, Point { x: 3, y: 4 });

    let handle = set.take::<Handle>();
    assert_eq!(handle.map(|h| *h.0), Some(9));
    assert!(!set.contains::<Handle>());

    Ok(())
}

#[test]
fn test_raw_pointers_are_not_owned() {
    let drops = Rc::new(Cell::new(0));
    let owned = Box::into_raw(Box::new(Tracked {
        label: "pointee",
        drops: Rc::clone(&drops),
    }));

    let mut set = AnySet::new();
    set.insert(owned);
    assert_eq!(set.get::<*mut Tracked>(), Some(&owned));

    // Dropping the set drops the pointer, not the pointee
    drop(set);
    assert_eq!(drops.get(), 0);

    // SAFETY: `owned` came from Box::into_raw above and was never freed
    drop(unsafe { Box::from_raw(owned) });
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_shared_ownership_is_opaque() {
    let shared = Rc::new(String::from("shared"));
    let mut set = AnySet::new();
    set.insert(Rc::clone(&shared));

    assert_eq!(Rc::strong_count(&shared), 2);
    assert!(set
        .get::<Rc<String>>()
        .is_some_and(|rc| Rc::ptr_eq(rc, &shared)));

    set.clear();
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn test_emplace() -> Result<(), SetError> {
    let mut set = AnySet::new();

    set.emplace::<String, _>("built");
    set.emplace::<Vec<i32>, _>([3, 2, 1]);
    set.emplace_with(|| {
        let mut map = HashMap::new();
        map.insert("key".to_string(), "value".to_string());
        map
    });

    assert_eq!(set.get_ref::<String>()?, "built");
    assert_eq!(set.get_ref::<Vec<i32>>()?, &vec![3, 2, 1]);

    let value = set.with(|m: &HashMap<String, String>| m.get("key").cloned())?;
    assert_eq!(value, Some("value".to_string()));

    // Same replace policy as insert
    set.emplace::<String, _>("rebuilt");
    assert_eq!(set.get_ref::<String>()?, "rebuilt");
    assert_eq!(set.len(), 3);

    Ok(())
}

#[test]
fn test_with_and_with_mut() -> Result<(), SetError> {
    let mut set = AnySet::new();
    set.insert(vec![1, 2, 3]);

    let new_len = set.with_mut(|v: &mut Vec<i32>| {
        v.push(4);
        v.len()
    })?;
    assert_eq!(new_len, 4);

    let sum = set.with(|v: &Vec<i32>| v.iter().sum::<i32>())?;
    assert_eq!(sum, 10);

    // The closure never runs for a missing type
    let result = set.with_mut(|_: &mut String| {
        panic!("Should not reach here");
    });
    assert!(matches!(result, Err(SetError::TypeNotFound(_))));

    Ok(())
}

#[test]
fn test_repeated_get_sees_same_value() {
    let mut set = AnySet::new();
    set.insert(Point { x: 0, y: 0 });

    let first = set.get::<Point>().map(|p| p as *const Point);
    let second = set.get::<Point>().map(|p| p as *const Point);
    assert_eq!(first, second);

    // Inserting other types does not disturb it
    set.insert(0u8);
    set.insert(0u16);
    assert_eq!(set.get::<Point>(), Some(&Point { x: 0, y: 0 }));
}

#[test]
fn test_drop_destroys_every_value() {
    let drops = Rc::new(Cell::new(0));

    struct A(Tracked);
    struct B(Tracked);

    let mut set = AnySet::new();
    set.insert(A(Tracked {
        label: "a",
        drops: Rc::clone(&drops),
    }));
    set.insert(B(Tracked {
        label: "b",
        drops: Rc::clone(&drops),
    }));
    assert_eq!(drops.get(), 0);

    drop(set);
    assert_eq!(drops.get(), 2);
}

#[test]
fn test_default_implementation() {
    let mut set: AnySet = Default::default();
    assert!(set.is_empty());

    set.insert(42);
    assert_eq!(set.get::<i32>(), Some(&42));
}
