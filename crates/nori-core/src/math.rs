//! Arithmetic and array utilities.

/// The binary math operations the demo dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOp {
    Add,
    Multiply,
    Power,
}

impl MathOp {
    pub fn eval(self, a: f64, b: f64) -> f64 {
        match self {
            MathOp::Add => a + b,
            MathOp::Multiply => a * b,
            MathOp::Power => a.powf(b),
        }
    }
}

/// Area and perimeter of a rectangle, computed together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectMetrics {
    pub area: f64,
    pub perimeter: f64,
    pub is_square: bool,
}

pub fn rect_metrics(length: f64, width: f64) -> RectMetrics {
    RectMetrics {
        area: length * width,
        perimeter: 2.0 * (length + width),
        is_square: length == width,
    }
}

/// Sum of all elements.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean. An empty slice averages to 0.0.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        sum(values) / values.len() as f64
    }
}

/// Largest element, if any.
pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Smallest element, if any.
pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

/// A sorted copy; the input is left untouched.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.total_cmp(b));
    out
}

/// The array operations the demo dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayOp {
    Sum,
    Average,
    Max,
    Min,
    Sort,
}

/// Result of an [`ArrayOp`]: a scalar for the reductions, a list for Sort.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayValue {
    Scalar(f64),
    List(Vec<f64>),
}

impl ArrayOp {
    /// Dispatch to the matching reduction.
    /// Max and Min yield nothing for an empty input.
    pub fn apply(self, values: &[f64]) -> Option<ArrayValue> {
        match self {
            ArrayOp::Sum => Some(ArrayValue::Scalar(sum(values))),
            ArrayOp::Average => Some(ArrayValue::Scalar(average(values))),
            ArrayOp::Max => max(values).map(ArrayValue::Scalar),
            ArrayOp::Min => min(values).map(ArrayValue::Scalar),
            ArrayOp::Sort => Some(ArrayValue::List(sorted(values))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_op_eval() {
        assert_eq!(MathOp::Add.eval(2.0, 3.0), 5.0);
        assert_eq!(MathOp::Multiply.eval(2.0, 3.0), 6.0);
        assert_eq!(MathOp::Power.eval(2.0, 10.0), 1024.0);
    }

    #[test]
    fn test_rect_metrics() {
        let rect = rect_metrics(4.0, 3.0);
        assert_eq!(rect.area, 12.0);
        assert_eq!(rect.perimeter, 14.0);
        assert!(!rect.is_square);
        assert!(rect_metrics(5.0, 5.0).is_square);
    }

    #[test]
    fn test_array_ops() {
        let values = [3.0, 1.0, 2.0];
        assert_eq!(sum(&values), 6.0);
        assert_eq!(average(&values), 2.0);
        assert_eq!(max(&values), Some(3.0));
        assert_eq!(min(&values), Some(1.0));
        assert_eq!(sorted(&values), vec![1.0, 2.0, 3.0]);
        // Input untouched
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_array_op_dispatch() {
        let values = [3.0, 1.0, 2.0];
        assert_eq!(ArrayOp::Sum.apply(&values), Some(ArrayValue::Scalar(6.0)));
        assert_eq!(
            ArrayOp::Average.apply(&values),
            Some(ArrayValue::Scalar(2.0))
        );
        assert_eq!(ArrayOp::Max.apply(&values), Some(ArrayValue::Scalar(3.0)));
        assert_eq!(ArrayOp::Min.apply(&values), Some(ArrayValue::Scalar(1.0)));
        assert_eq!(
            ArrayOp::Sort.apply(&values),
            Some(ArrayValue::List(vec![1.0, 2.0, 3.0]))
        );
    }

    #[test]
    fn test_array_op_on_empty_input() {
        assert_eq!(ArrayOp::Sum.apply(&[]), Some(ArrayValue::Scalar(0.0)));
        assert_eq!(ArrayOp::Average.apply(&[]), Some(ArrayValue::Scalar(0.0)));
        assert_eq!(ArrayOp::Max.apply(&[]), None);
        assert_eq!(ArrayOp::Min.apply(&[]), None);
        assert_eq!(ArrayOp::Sort.apply(&[]), Some(ArrayValue::List(vec![])));
    }

    #[test]
    fn test_empty_arrays() {
        assert_eq!(sum(&[]), 0.0);
        assert_eq!(average(&[]), 0.0);
        assert_eq!(max(&[]), None);
        assert_eq!(min(&[]), None);
        assert!(sorted(&[]).is_empty());
    }
}
