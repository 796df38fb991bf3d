use num::Float;

/// `n` evenly spaced samples over `[min, max]`, both ends included.
pub struct Linspace<F> {
    start: F,
    step: F,
    index: usize,
    len: usize,
}

impl<F: Float> Linspace<F> {
    pub fn new(min: F, max: F, n: usize) -> Self {
        let step = match F::from(n.saturating_sub(1)) {
            Some(num_steps) if n > 1 => (max - min) / num_steps,
            _ => F::zero(),
        };

        Linspace {
            start: min,
            step,
            index: 0,
            len: n,
        }
    }

    /// Spacing between two consecutive samples
    pub fn step(&self) -> F {
        self.step
    }
}

impl<F: Float> Iterator for Linspace<F> {
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        if self.index >= self.len {
            return None;
        }

        // Same formula as numpy.linspace, so sample i never accumulates rounding from i - 1
        let i = F::from(self.index)?;
        self.index += 1;

        Some(self.start + self.step * i)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl<F: Float> ExactSizeIterator for Linspace<F> {}

#[test]
fn test_linspace() {
    let samples: Vec<f64> = Linspace::new(0., 0.9, 4).collect();

    assert_eq!(samples, vec![0., 0.3, 0.6, 0.8999999999999999]);

    let single: Vec<f64> = Linspace::new(4.5, 8.5, 1).collect();

    assert_eq!(single, vec![4.5]);
    assert_eq!(Linspace::<f64>::new(0., 1., 0).count(), 0);
}

#[test]
fn test_linspace_step() {
    let linspace = Linspace::new(0.0f64, 0.9, 1001);

    assert_eq!(linspace.step(), 0.9 / 1000.);
    assert_eq!(linspace.len(), 1001);
    assert_eq!(linspace.last(), Some(0.9));
}
