use crate::{
    access::{ReadOnly, WriteOnly},
    AccessError, Computed, DynProperty, Property, Stored,
};
use alloc::{boxed::Box, rc::Rc, string::String, vec, vec::Vec};
use core::cell::{Cell, RefCell};

#[test]
fn test_round_trip() {
    let mut stored = Stored::new(0i64);
    for _ in 0..32 {
        let value: i64 = rand::random();
        stored.set(value);
        assert_eq!(stored.get(), value);
        assert_eq!(stored.assign(value), value);
        assert_eq!(stored, value);
    }
}

#[test]
fn test_closure_delegation() {
    let reads = Cell::new(0);
    let writes = RefCell::new(Vec::new());
    let mut p = Computed::new(
        || {
            reads.set(reads.get() + 1);
            17u32
        },
        |v| writes.borrow_mut().push(v),
    );

    assert_eq!(p.get(), 17);
    assert_eq!(reads.get(), 1);
    assert!(writes.borrow().is_empty());

    let value: u32 = rand::random();
    p.set(value);
    assert_eq!(*writes.borrow(), [value]);
    assert_eq!(reads.get(), 1);
}

#[test]
fn test_access() {
    let mut value: i64 = 42;

    // ReadWrite
    let mut read_write = Stored::new(value);
    assert_eq!(read_write.get(), 42);
    read_write.set(50);
    read_write.update(|v| v + 1);
    value = read_write.get();
    assert_eq!(value, 51);

    // ReadOnly and WriteOnly
    let read_only: Stored<_, ReadOnly> = value.into();
    assert_eq!(read_only.get(), 51);
    let mut write_only = Stored::<i64, WriteOnly>::write_only();
    write_only.set(12);

    // the same calls through the erased interface fail instead of compiling
    let mut erased: Vec<Box<dyn DynProperty<i64>>> =
        vec![Box::new(read_write), Box::new(read_only), Box::new(write_only)];
    assert_eq!(erased[0].try_get(), Ok(51));
    assert_eq!(erased[1].try_set(1), Err(AccessError::ReadOnly));
    assert_eq!(erased[1].try_get(), Ok(51));
    assert_eq!(erased[2].try_get(), Err(AccessError::WriteOnly));
    assert_eq!(erased[2].try_set(1), Ok(()));
}

#[test]
fn test_compound_assignment_equivalence() {
    let start: i32 = rand::random::<i16>().into();
    let k: i32 = rand::random::<i16>().into();
    let mut p = Stored::new(start);
    p += k;
    assert_eq!(p.get(), start + k);

    let mut q = Stored::new(start);
    assert_eq!(q.update(|v| v + k), start + k);
    assert_eq!(q, p);
}

#[test]
fn test_increment_semantics() {
    let n: i32 = rand::random::<i16>().into();

    let mut post = Stored::new(n);
    assert_eq!(post.post_increment(), n);
    assert_eq!(post.get(), n + 1);

    let mut pre = Stored::new(n);
    assert_eq!(pre.pre_increment(), n + 1);
    assert_eq!(pre.get(), n + 1);
}

#[test]
fn test_operator_forwarding() {
    let x: i64 = rand::random::<i32>().into();
    let y: i64 = rand::random::<i32>().into();
    let a = Stored::new(x);
    let b = Computed::read_only(move || y);

    assert_eq!(&a + y, x + y);
    assert_eq!(y + &a, y + x);
    assert_eq!(&a + &b, x + y);
    assert_eq!(a == b, x == y);
    assert_eq!(a < b, x < y);
    assert!(a == Computed::read_only(move || x));
}

#[test]
fn test_non_duplication() {
    let mut a = Stored::new(String::from("a"));
    let b = Stored::new(String::from("b"));
    a.assign_from(&b);
    a.set(String::from("changed"));
    assert_eq!(b.get(), "b");
    assert_eq!(a.get(), "changed");
}

#[test]
fn test_struct() {
    struct Account<'a> {
        owner: Stored<String, ReadOnly>,
        balance: Computed<'a, u64>,
        audit: Computed<'a, String, WriteOnly>,
        overdrafts: Stored<u32>,
    }

    let cents = Rc::new(Cell::new(0u64));
    let log = RefCell::new(Vec::new());
    let rejected = Rc::new(Cell::new(0u32));

    let (get_cents, set_cents, rejections) = (cents.clone(), cents.clone(), rejected.clone());
    let mut account = Account {
        owner: String::from("ferris").into(),
        balance: Computed::new(
            move || get_cents.get(),
            move |v| {
                if v > 1_000_000 {
                    rejections.set(rejections.get() + 1);
                } else {
                    set_cents.set(v);
                }
            },
        ),
        audit: Computed::write_only(|entry| log.borrow_mut().push(entry)),
        overdrafts: Stored::default(),
    };

    account.balance += 500u64;
    account.balance *= 3u64;
    account.audit.set(format_entry(&account.owner, account.balance.get()));
    account.balance.set(5_000_000);
    if rejected.get() > 0 {
        account.overdrafts.pre_increment();
    }

    assert_eq!(account.balance, 1500);
    assert_eq!(cents.get(), 1500);
    assert_eq!(account.overdrafts, 1);
    assert_eq!(account.owner.len(), 6);
    drop(account);
    assert_eq!(log.into_inner(), ["ferris: 1500"]);
}

fn format_entry(owner: &str, cents: u64) -> String {
    alloc::format!("{owner}: {cents}")
}
