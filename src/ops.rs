//! Operator impls that let properties stand in for their values.
//!
//! Every impl here reads property operands with [`Property::get`] and then
//! applies the value type's own operator, so the result (including any panic,
//! e.g. on integer division by zero) is exactly that of the plain values.
//! Comparisons involving a [`Stored`] borrow its value instead of copying it.
//! Binary operators are implemented on references, so the properties are not
//! consumed:
//!
//! ```rust
//! use property::{Computed, Stored};
//!
//! let a = Stored::new(6);
//! let b = Computed::read_only(|| 4);
//!
//! assert_eq!(&a + 1, 7); // property OP value
//! assert_eq!(10 - &b, 6); // value OP property
//! assert_eq!(&a * &b, 24); // property OP property
//! assert!(a > b && a == 6 && 4 == b);
//! ```
//!
//! The value-on-the-left form exists for the primitive numeric types, `bool`
//! (for `&`, `|` and `^`) and, for comparisons, `char`.
//!
//! Compound assignment operators are a read followed by a write through the
//! property:
//!
//! ```rust
//! use property::{Property, Stored};
//!
//! let mut flags = Stored::new(0b0101u8);
//! flags |= 0b1000;
//! flags <<= 1;
//! assert_eq!(flags.get(), 0b1_1010);
//! ```
//!
//! Operands whose access mode forbids reading are rejected at compile time:
//!
//! ```compile_fail
//! use property::{Computed, Stored};
//!
//! let write_only = Computed::write_only(|_: i32| {});
//! let sum = &write_only + 1; // -> compile error
//! ```
//!
//! ```compile_fail
//! use property::{access, Stored};
//!
//! let mut read_only = Stored::new_restricted(access::ReadOnly, 1);
//! read_only += 1; // -> compile error
//! ```

use core::{
    cmp::Ordering,
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
        DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
        SubAssign,
    },
};

use crate::{
    access::{Readable, Writable},
    Computed, Property, Stored,
};

/// `&property OP value` and `&property OP &property` for one operator.
macro_rules! forward_binary {
    ($($Op:ident $op:ident),+ $(,)?) => {
        $(
            forward_binary!(@value $Op $op [T: Clone, A: Readable] Stored<T, A>);
            forward_binary!(@value $Op $op ['a, T, A: Readable] Computed<'a, T, A>);

            forward_binary!(
                @pair $Op $op [T: Clone, A: Readable, B: Readable] Stored<T, A>, Stored<T, B>
            );
            forward_binary!(
                @pair $Op $op ['b, T: Clone, A: Readable, B: Readable]
                Stored<T, A>, Computed<'b, T, B>
            );
            forward_binary!(
                @pair $Op $op ['a, T: Clone, A: Readable, B: Readable]
                Computed<'a, T, A>, Stored<T, B>
            );
            forward_binary!(
                @pair $Op $op ['a, 'b, T, A: Readable, B: Readable]
                Computed<'a, T, A>, Computed<'b, T, B>
            );
        )+
    };
    (@value $Op:ident $op:ident [$($gen:tt)*] $Prop:ty) => {
        impl<$($gen)*> $Op<T> for &$Prop
        where
            T: $Op,
        {
            type Output = <T as $Op>::Output;

            #[inline]
            fn $op(self, rhs: T) -> Self::Output {
                $Op::$op(self.get(), rhs)
            }
        }
    };
    (@pair $Op:ident $op:ident [$($gen:tt)*] $Lhs:ty, $Rhs:ty) => {
        impl<$($gen)*> $Op<&$Rhs> for &$Lhs
        where
            T: $Op,
        {
            type Output = <T as $Op>::Output;

            #[inline]
            fn $op(self, rhs: &$Rhs) -> Self::Output {
                $Op::$op(self.get(), rhs.get())
            }
        }
    };
}

forward_binary! {
    Add add,
    Sub sub,
    Mul mul,
    Div div,
    Rem rem,
    Shl shl,
    Shr shr,
    BitAnd bitand,
    BitOr bitor,
    BitXor bitxor,
}

/// `value OP &property` for the listed primitive types.
macro_rules! forward_primitive_lhs {
    (@type $t:ty [$($Op:ident $op:ident),+]) => {
        $(
            impl<A> $Op<&Stored<$t, A>> for $t
            where
                A: Readable,
            {
                type Output = <$t as $Op>::Output;

                #[inline]
                fn $op(self, rhs: &Stored<$t, A>) -> Self::Output {
                    <$t as $Op>::$op(self, rhs.get())
                }
            }

            impl<'a, A> $Op<&Computed<'a, $t, A>> for $t
            where
                A: Readable,
            {
                type Output = <$t as $Op>::Output;

                #[inline]
                fn $op(self, rhs: &Computed<'a, $t, A>) -> Self::Output {
                    <$t as $Op>::$op(self, rhs.get())
                }
            }
        )+
    };
    ($ops:tt $($t:ty),+) => {
        $(
            forward_primitive_lhs!(@type $t $ops);
        )+
    };
}

forward_primitive_lhs! {
    [
        Add add, Sub sub, Mul mul, Div div, Rem rem, Shl shl, Shr shr,
        BitAnd bitand, BitOr bitor, BitXor bitxor
    ]
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
}
forward_primitive_lhs!([Add add, Sub sub, Mul mul, Div div, Rem rem] f32, f64);
forward_primitive_lhs!([BitAnd bitand, BitOr bitor, BitXor bitxor] bool);

/// Runs `f` on the current value, borrowing it when the property owns one.
trait WithValue<T> {
    fn with_value<R>(&self, f: impl FnOnce(&T) -> R) -> R;
}

impl<T, A: Readable> WithValue<T> for Stored<T, A> {
    #[inline]
    fn with_value<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&**self)
    }
}

impl<'a, T, A: Readable> WithValue<T> for Computed<'a, T, A> {
    #[inline]
    fn with_value<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.get())
    }
}

/// `property == value`, `property < value`, and the same between two properties.
macro_rules! forward_cmp {
    (@value [$($gen:tt)*] $Prop:ty) => {
        impl<$($gen)*> PartialEq<T> for $Prop
        where
            T: PartialEq,
        {
            #[inline]
            fn eq(&self, other: &T) -> bool {
                self.with_value(|value| value == other)
            }
        }

        impl<$($gen)*> PartialOrd<T> for $Prop
        where
            T: PartialOrd,
        {
            #[inline]
            fn partial_cmp(&self, other: &T) -> Option<Ordering> {
                self.with_value(|value| value.partial_cmp(other))
            }
        }
    };
    (@pair [$($gen:tt)*] $Lhs:ty, $Rhs:ty) => {
        impl<$($gen)*> PartialEq<$Rhs> for $Lhs
        where
            T: PartialEq,
        {
            #[inline]
            fn eq(&self, other: &$Rhs) -> bool {
                self.with_value(|lhs| other.with_value(|rhs| lhs == rhs))
            }
        }

        impl<$($gen)*> PartialOrd<$Rhs> for $Lhs
        where
            T: PartialOrd,
        {
            #[inline]
            fn partial_cmp(&self, other: &$Rhs) -> Option<Ordering> {
                self.with_value(|lhs| other.with_value(|rhs| lhs.partial_cmp(rhs)))
            }
        }
    };
}

forward_cmp!(@value [T, A: Readable] Stored<T, A>);
forward_cmp!(@value ['a, T, A: Readable] Computed<'a, T, A>);
forward_cmp!(@pair [T, A: Readable, B: Readable] Stored<T, A>, Stored<T, B>);
forward_cmp!(@pair ['b, T, A: Readable, B: Readable] Stored<T, A>, Computed<'b, T, B>);
forward_cmp!(@pair ['a, T, A: Readable, B: Readable] Computed<'a, T, A>, Stored<T, B>);
forward_cmp!(@pair ['a, 'b, T, A: Readable, B: Readable] Computed<'a, T, A>, Computed<'b, T, B>);

/// `value == property` and `value < property` for the listed primitive types.
macro_rules! forward_primitive_cmp {
    ($($t:ty),+) => {
        $(
            impl<A: Readable> PartialEq<Stored<$t, A>> for $t {
                #[inline]
                fn eq(&self, other: &Stored<$t, A>) -> bool {
                    *self == **other
                }
            }

            impl<A: Readable> PartialOrd<Stored<$t, A>> for $t {
                #[inline]
                fn partial_cmp(&self, other: &Stored<$t, A>) -> Option<Ordering> {
                    self.partial_cmp(&**other)
                }
            }

            impl<'a, A: Readable> PartialEq<Computed<'a, $t, A>> for $t {
                #[inline]
                fn eq(&self, other: &Computed<'a, $t, A>) -> bool {
                    *self == other.get()
                }
            }

            impl<'a, A: Readable> PartialOrd<Computed<'a, $t, A>> for $t {
                #[inline]
                fn partial_cmp(&self, other: &Computed<'a, $t, A>) -> Option<Ordering> {
                    self.partial_cmp(&other.get())
                }
            }
        )+
    };
}

forward_primitive_cmp!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char
);

/// `property OP= value`, implemented as `set(get() OP value)`.
macro_rules! forward_assign {
    ($($OpAssign:ident $op_assign:ident $Op:ident $op:ident),+ $(,)?) => {
        $(
            forward_assign!(
                @one $OpAssign $op_assign $Op $op
                [T: Clone, A: Readable + Writable, U] Stored<T, A>
            );
            forward_assign!(
                @one $OpAssign $op_assign $Op $op
                ['a, T, A: Readable + Writable, U] Computed<'a, T, A>
            );
        )+
    };
    (@one $OpAssign:ident $op_assign:ident $Op:ident $op:ident [$($gen:tt)*] $Prop:ty) => {
        impl<$($gen)*> $OpAssign<U> for $Prop
        where
            T: $Op<U, Output = T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: U) {
                let value = $Op::$op(self.get(), rhs);
                self.set(value);
            }
        }
    };
}

forward_assign! {
    AddAssign add_assign Add add,
    SubAssign sub_assign Sub sub,
    MulAssign mul_assign Mul mul,
    DivAssign div_assign Div div,
    RemAssign rem_assign Rem rem,
    ShlAssign shl_assign Shl shl,
    ShrAssign shr_assign Shr shr,
    BitAndAssign bitand_assign BitAnd bitand,
    BitOrAssign bitor_assign BitOr bitor,
    BitXorAssign bitxor_assign BitXor bitxor,
}

/// `-property` and `!property`; the property is only read.
macro_rules! forward_unary {
    ($([$($gen:tt)*] $Prop:ty),+ $(,)?) => {
        $(
            impl<$($gen)*> Neg for &$Prop
            where
                T: Neg,
            {
                type Output = <T as Neg>::Output;

                #[inline]
                fn neg(self) -> Self::Output {
                    -self.get()
                }
            }

            impl<$($gen)*> Not for &$Prop
            where
                T: Not,
            {
                type Output = <T as Not>::Output;

                #[inline]
                fn not(self) -> Self::Output {
                    !self.get()
                }
            }
        )+
    };
}

forward_unary!([T: Clone, A: Readable] Stored<T, A>, ['a, T, A: Readable] Computed<'a, T, A>);

#[cfg(test)]
mod tests {
    use crate::{access::ReadOnly, Computed, Property, Stored};
    use alloc::{rc::Rc, string::String, vec::Vec};
    use core::cell::{Cell, RefCell};

    #[test]
    fn test_property_op_value() {
        let x: i32 = rand::random::<i16>().into();
        let y: i32 = rand::random::<i16>().into();
        let a = Stored::new(x);
        assert_eq!(&a + y, x + y);
        assert_eq!(&a - y, x - y);
        assert_eq!(&a * y, x * y);
        assert_eq!(&a & y, x & y);
        assert_eq!(&a | y, x | y);
        assert_eq!(&a ^ y, x ^ y);
        assert_eq!(&a << 3, x << 3);
        assert_eq!(&a >> 2, x >> 2);
        if y != 0 {
            assert_eq!(&a / y, x / y);
            assert_eq!(&a % y, x % y);
        }
    }

    #[test]
    fn test_value_op_property() {
        let x: u32 = rand::random::<u16>().into();
        let y: u32 = rand::random::<u16>().into();
        let a = Computed::read_only(move || x);
        assert_eq!(y + &a, y + x);
        assert_eq!(y.wrapping_add(1) * &a, y.wrapping_add(1) * x);
        assert_eq!(y ^ &a, y ^ x);
        assert_eq!(1u32 << &Stored::new(4u32), 16);
        assert_eq!(100.0f64 / &Stored::new(8.0), 12.5);
        assert!(true & &Stored::new(true));
        assert!(!(false | &Computed::read_only(|| false)));
    }

    #[test]
    fn test_property_op_property() {
        let a = Stored::new(12i64);
        let b = Computed::read_only(|| 5i64);
        let c = Stored::new_restricted(ReadOnly, 3i64);
        assert_eq!(&a - &b, 7);
        assert_eq!(&b - &a, -7);
        assert_eq!(&a % &b, 2);
        assert_eq!(&a / &c, 4);
        assert_eq!(&b * &Computed::read_only(|| 2i64), 10);
    }

    #[test]
    fn test_non_copy_values() {
        let a = Stored::new(String::from("prop"));
        assert_eq!(a.get() + "erty", "property");
        assert!(a == String::from("prop"));
        assert!(a < String::from("zzz"));
        assert!(Computed::read_only(|| String::from("prop")) == a);
    }

    #[test]
    fn test_stored_compares_in_place() {
        #[derive(Debug, PartialEq, PartialOrd)]
        struct Version(u16, u16);

        let current = Stored::new(Version(1, 4));
        assert!(current == Version(1, 4));
        assert!(current < Version(2, 0));
        assert!(current > Stored::new_restricted(ReadOnly, Version(1, 3)));
    }

    #[test]
    fn test_comparisons() {
        let a = Stored::new(3u8);
        let b = Computed::read_only(|| 7u8);
        assert!(a == 3);
        assert!(a != 4);
        assert!(a < 4 && a <= 3 && a > 2 && a >= 3);
        assert!(3 == a && 7 == b && 2 < a && 8 > b);
        assert!(a < b && b > a && a != b);
        assert!(a == Stored::new_restricted(ReadOnly, 3u8));
        assert!(b == Computed::read_only(|| 7u8));
        assert!(b != Stored::new(3u8));
        assert!('q' == Stored::new('q'));
    }

    #[test]
    fn test_float_comparison_follows_value_type() {
        let nan = Stored::new(f64::NAN);
        assert!(nan != f64::NAN);
        assert!(nan.partial_cmp(&1.0).is_none());
    }

    #[test]
    fn test_compound_assignment() {
        let mut a = Stored::new(10i32);
        a += 5;
        assert_eq!(a.get(), 15);
        a -= 3;
        a *= 2;
        a /= 4;
        assert_eq!(a.get(), 6);
        a %= 4;
        a <<= 3;
        a >>= 1;
        assert_eq!(a.get(), 8);
        a |= 3;
        a &= 0b1010;
        a ^= 1;
        assert_eq!(a.get(), 11);
    }

    #[test]
    fn test_compound_assignment_writes_through() {
        let state = Rc::new(Cell::new(1.5f64));
        let writes = Rc::new(RefCell::new(Vec::new()));
        let (r, w, log) = (state.clone(), state.clone(), writes.clone());
        let mut p = Computed::new(
            move || r.get(),
            move |v| {
                log.borrow_mut().push(v);
                w.set(v);
            },
        );
        p += 1.0;
        p *= 3.0;
        assert_eq!(state.get(), 7.5);
        assert_eq!(*writes.borrow(), [2.5, 7.5]);
    }

    #[test]
    fn test_unary() {
        let a = Stored::new(5i32);
        let flag = Computed::read_only(|| false);
        assert_eq!(-&a, -5);
        assert_eq!(!&a, !5);
        assert!(!&flag);
        assert_eq!(a.get(), 5);
    }

    #[test]
    #[should_panic]
    fn test_division_by_zero_propagates() {
        let a = Stored::new(1i32);
        let zero = Stored::new(0i32);
        let _ = &a / &zero;
    }

    #[test]
    fn test_write_only_participates_in_writes() {
        let total = Cell::new(0);
        let mut sink = Computed::write_only(|v: i32| total.set(total.get() + v));
        let source = Stored::new(4);
        sink.assign_from(&source);
        sink.set(&source * 2);
        drop(sink);
        assert_eq!(total.get(), 12);
    }
}
