/// Piecewise-linear membership function of one fuzzy set.
///
/// Break points are expected to be ordered (`a <= b <= c <= d`). Nothing
/// checks that; unordered points give degenerate but finite degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Rises from `a` to a single peak at `b`, falls back to zero at `c`
    Triangular { a: f64, b: f64, c: f64 },
    /// Rises from `a` to a plateau on `[b, c]`, falls back to zero at `d`
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
}

impl Shape {
    pub const fn triangular(a: f64, b: f64, c: f64) -> Self {
        Self::Triangular { a, b, c }
    }

    pub const fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::Trapezoidal { a, b, c, d }
    }

    /// Degree of membership of `x`, always within `[0, 1]`.
    ///
    /// The outer break points are exclusive: a shape starting at `a` gives
    /// zero at `x == a` even when `a == b`. NaN never satisfies any of the
    /// comparisons and falls through to zero.
    pub fn degree(&self, x: f64) -> f64 {
        match *self {
            Self::Triangular { a, b, c } => {
                if x <= a || x >= c {
                    0.
                } else if x == b {
                    1.
                } else if x < b {
                    (x - a) / (b - a)
                } else if x > b {
                    (c - x) / (c - b)
                } else {
                    0.
                }
            },
            Self::Trapezoidal { a, b, c, d } => {
                if x <= a || x >= d {
                    0.
                } else if b <= x && x <= c {
                    1.
                } else if x < b {
                    (x - a) / (b - a)
                } else if x > c {
                    (d - x) / (d - c)
                } else {
                    0.
                }
            },
        }
    }

    /// The `[first, last]` break points, outside of which the degree is zero.
    pub fn support(&self) -> (f64, f64) {
        match *self {
            Self::Triangular { a, c, .. } => (a, c),
            Self::Trapezoidal { a, d, .. } => (a, d),
        }
    }
}

/// A named fuzzy set. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FuzzySet {
    name: &'static str,
    shape: Shape,
}

impl FuzzySet {
    pub fn new(name: &'static str, shape: Shape) -> Self {
        Self { name, shape }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn degree(&self, x: f64) -> f64 {
        self.shape.degree(x)
    }
}

#[cfg(test)]
fn samples(from: f64, to: f64, n: usize) -> Vec<f64> {
    crate::linspace::Linspace::new(from, to, n).collect()
}

#[test]
fn test_triangular_degree() {
    let medium = Shape::triangular(0.15, 0.30, 0.45);

    assert_eq!(medium.degree(0.15), 0.);
    assert_eq!(medium.degree(0.45), 0.);
    assert_eq!(medium.degree(-3.), 0.);
    assert_eq!(medium.degree(10.), 0.);
    assert_eq!(medium.degree(0.30), 1.);

    let large = Shape::triangular(6.0, 6.7, 7.4);

    assert_eq!(large.degree(7.2), 0.2857142857142859);
    assert_eq!(large.degree(6.35), 0.4999999999999994);
}

#[test]
fn test_trapezoidal_degree() {
    let near = Shape::trapezoidal(0., 0., 20., 40.);

    // The left shoulder is open even though a == b
    assert_eq!(near.degree(0.), 0.);
    assert_eq!(near.degree(1e-9), 1.);
    assert_eq!(near.degree(20.), 1.);
    assert_eq!(near.degree(30.), 0.5);
    assert_eq!(near.degree(40.), 0.);
    assert_eq!(near.degree(-5.), 0.);

    let thrust = Shape::trapezoidal(0.0, 0.05, 0.1, 0.1);

    assert_eq!(thrust.degree(0.025), 0.5);
    for x in samples(0.05, 0.0999, 50) {
        assert_eq!(thrust.degree(x), 1.);
    }
    assert_eq!(thrust.degree(0.1), 0.);
}

#[test]
fn test_degree_of_nan_is_zero() {
    assert_eq!(Shape::triangular(0., 1., 2.).degree(f64::NAN), 0.);
    assert_eq!(Shape::trapezoidal(0., 1., 2., 3.).degree(f64::NAN), 0.);
    assert_eq!(Shape::trapezoidal(0., 1., 2., 3.).degree(f64::INFINITY), 0.);
}

#[test]
fn test_slopes_are_monotonic() {
    let shapes = [
        Shape::triangular(5.0, 5.7, 6.4),
        Shape::triangular(-0.05, 0.0, 0.05),
        Shape::trapezoidal(4.5, 4.5, 5.0, 5.5),
        Shape::trapezoidal(120., 160., 200., 200.),
    ];

    for shape in shapes {
        let (first, last) = shape.support();
        let (rise_end, fall_start) = match shape {
            Shape::Triangular { b, .. } => (b, b),
            Shape::Trapezoidal { b, c, .. } => (b, c),
        };

        let rising = samples(first, rise_end, 200);
        for pair in rising.windows(2) {
            assert!(shape.degree(pair[0]) <= shape.degree(pair[1]), "{shape:?} at {pair:?}");
        }

        let falling = samples(fall_start, last, 200);
        for pair in falling.windows(2) {
            assert!(shape.degree(pair[0]) >= shape.degree(pair[1]), "{shape:?} at {pair:?}");
        }

        for x in samples(first - 1., last + 1., 500) {
            let degree = shape.degree(x);
            assert!((0. ..=1.).contains(&degree));
        }
    }
}

#[test]
fn test_fuzzy_set() {
    let set = FuzzySet::new("Oblique", Shape::triangular(-0.05, 0.0, 0.05));

    assert_eq!(set.name(), "Oblique");
    assert_eq!(set.degree(0.0), 1.);
    assert_eq!(set.degree(0.025), set.shape().degree(0.025));
}
