use core::cell::Cell;

use approx::assert_relative_eq;
use vexpr_rs::prelude::*;
use vexpr_rs::vector::Sum;

// ============================================================================
// Instrumented Operand
// ============================================================================

/// Expression wrapper counting how many times it is evaluated.
struct Counting<'a> {
    inner: &'a Vector<f64, 4>,
    calls: &'a Cell<usize>,
}

impl VectorExpr<4> for Counting<'_> {
    type Elem = f64;

    fn value_at(&self, index: usize) -> f64 {
        self.calls.set(self.calls.get() + 1);
        self.inner.value_at(index)
    }
}

// ============================================================================
// Elementwise Node Tests
// ============================================================================

#[test]
fn test_sum_is_elementwise() {
    let a = Vector::new([1.0, 2.0, 3.0]);
    let b = Vector::new([4.0, 5.0, 6.0]);
    let expr = &a + &b;
    for i in 0..3 {
        assert_relative_eq!(expr.value_at(i), a.value_at(i) + b.value_at(i));
    }
}

#[test]
fn test_difference_is_elementwise() {
    let a = Vector::new([10.0, 20.0, 30.0]);
    let b = Vector::new([1.0, 2.0, 3.0]);
    let expr = &a - &b;
    for i in 0..3 {
        assert_relative_eq!(expr.value_at(i), a.value_at(i) - b.value_at(i));
    }
}

#[test]
fn test_negation_is_elementwise() {
    let a = Vector::new([1.0, -2.0, 3.0]);
    let expr = -&a;
    for i in 0..3 {
        assert_relative_eq!(expr.value_at(i), -a.value_at(i));
    }
}

#[test]
fn test_double_negation_is_identity() {
    let a = Vector::new([1.0, -2.0, 3.0]);
    let expr = -(-&a);
    for i in 0..3 {
        assert_relative_eq!(expr.value_at(i), a.value_at(i));
    }
}

#[test]
fn test_scale_is_elementwise() {
    let a = Vector::new([1.0, 2.0, 3.0]);
    let expr = &a * 2.5;
    for i in 0..3 {
        assert_relative_eq!(expr.value_at(i), 2.5 * a.value_at(i));
    }
}

#[test]
fn test_scale_composes_multiplicatively() {
    let a = Vector::new([1.0, 2.0, 3.0]);
    // 2 * (3 * a) == (2 * 3) * a
    let nested = (&a * 3.0) * 2.0;
    let flat = &a * 6.0;
    for i in 0..3 {
        assert_relative_eq!(nested.value_at(i), flat.value_at(i));
    }
}

#[test]
fn test_scalar_on_the_left() {
    let a = Vector::new([1.0, 2.0, 3.0]);
    let expr = 2.0f64 * &a;
    assert_eq!(expr.eval(), Vector::new([2.0, 4.0, 6.0]));
}

#[test]
fn test_scale_combinator_on_composed_operand() {
    let a = Vector::new([1.0, 2.0, 3.0]);
    let b = Vector::new([4.0, 5.0, 6.0]);
    let expr = (&a + &b).scale(10.0);
    assert_eq!(expr.eval(), Vector::new([50.0, 70.0, 90.0]));
}

#[test]
fn test_integer_elements() {
    let a = Vector::new([1, 2, 3]);
    let b = Vector::new([10, 20, 30]);
    let expr = (&a + &b) * 2;
    assert_eq!(expr.eval(), Vector::new([22, 44, 66]));
}

// ============================================================================
// Composition Tests
// ============================================================================

#[test]
fn test_nested_composition() {
    let a = Vector::new([1.0, 2.0, 3.0]);
    let b = Vector::new([4.0, 5.0, 6.0]);
    let c = Vector::new([0.5, 0.5, 0.5]);
    // ((a + b) - c) * 2: elementwise
    let expr = ((&a + &b) - &c) * 2.0;
    assert_eq!(expr.eval(), Vector::new([9.0, 13.0, 17.0]));
}

#[test]
fn test_composition_does_not_evaluate() {
    let v = Vector::new([1.0, 2.0, 3.0, 4.0]);
    let calls = Cell::new(0);
    let lhs = Counting {
        inner: &v,
        calls: &calls,
    };
    let rhs = Counting {
        inner: &v,
        calls: &calls,
    };

    let expr = Sum::new(lhs, rhs);
    assert_eq!(calls.get(), 0);

    // A single element pull touches each operand exactly once.
    assert_relative_eq!(expr.value_at(2), 6.0);
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_owned_operands_compose() {
    let a = Vector::new([1.0, 2.0]);
    let b = Vector::new([3.0, 4.0]);
    // By-value composition copies the leaves; the tree has no borrows.
    let expr = a + b;
    assert_eq!(expr.eval(), Vector::new([4.0, 6.0]));
}

// ============================================================================
// Shape Introspection Tests
// ============================================================================

fn assert_shape_dim4_f64<E: VectorExpr<4, Elem = f64>>(expr: &E) -> usize {
    expr.dim()
}

#[test]
fn test_shape_readable_without_evaluation() {
    let v = Vector::new([1.0, 2.0, 3.0, 4.0]);
    let calls = Cell::new(0);
    let expr = Sum::new(
        Counting {
            inner: &v,
            calls: &calls,
        },
        Counting {
            inner: &v,
            calls: &calls,
        },
    );

    // Dimension and element type of the composed tree are type-level facts.
    assert_eq!(assert_shape_dim4_f64(&expr), 4);
    assert_eq!(expr.dim(), 4);
    assert_eq!(calls.get(), 0);
}

// ============================================================================
// Map Tests
// ============================================================================

#[test]
fn test_map_unary_combinator() {
    let a = Vector::new([1.0, 2.0, 3.0]);
    let expr = (&a).map(|x| x * x);
    assert_eq!(expr.eval(), Vector::new([1.0, 4.0, 9.0]));
}

#[test]
fn test_map_binary() {
    let a = Vector::new([1.0, 2.0, 3.0]);
    let b = Vector::new([4.0, 5.0, 6.0]);
    let expr = map(|x: f64, y: f64| x * y, (&a, &b));
    assert_eq!(expr.eval(), Vector::new([4.0, 10.0, 18.0]));
}

#[test]
fn test_map_ternary() {
    let a = Vector::new([1.0, 2.0]);
    let b = Vector::new([10.0, 20.0]);
    let c = Vector::new([100.0, 200.0]);
    let expr = map(|x: f64, y: f64, z: f64| x + y + z, (&a, &b, &c));
    assert_eq!(expr.eval(), Vector::new([111.0, 222.0]));
}

#[test]
fn test_map_with_mixed_element_types() {
    let counts = Vector::new([1i32, 2, 3]);
    let weights = Vector::new([0.5f64, 0.25, 0.125]);
    let expr = map(|n: i32, w: f64| w * (n as f64), (&counts, &weights));
    assert_eq!(expr.eval(), Vector::new([0.5, 0.5, 0.375]));
}

#[test]
fn test_map_over_composed_operand() {
    let a = Vector::new([1.0, 2.0, 3.0]);
    let b = Vector::new([4.0, 5.0, 6.0]);
    let expr = (&a + &b).map(|x| x * 10.0);
    assert_eq!(expr.eval(), Vector::new([50.0, 70.0, 90.0]));
}
