
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Axes {
    pub x: f64,
    pub y: f64,
}

impl Axes {
    pub fn new(x: f64, y: f64) -> Axes {
        Axes { x: x, y: y }
    }

    pub fn zero() -> Axes {
        Axes { x: 0., y: 0. }
    }

    pub fn norm(&self) -> f64 {
        (self.x*self.x + self.y*self.y).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Axes {
    fn from(xy: (f64, f64)) -> Axes {
        Axes { x: xy.0, y: xy.1 }
    }
}

#[cfg(test)]
mod tests {
    use super::Axes;

    #[test]
    fn norm_of_3_4_is_5() {
        assert_eq!(Axes::new(3., 4.).norm(), 5.);
        assert_eq!(Axes::zero().norm(), 0.);
    }

    #[test]
    fn nan_is_not_finite() {
        assert!(Axes::from((1., -2.)).is_finite());
        assert!(!Axes::new(std::f64::NAN, 0.).is_finite());
    }
}
