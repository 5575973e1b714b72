#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Segment {
    pub src: Point,
    pub dst: Point,
}

impl Segment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment {
            src: Point { x: x1, y: y1, },
            dst: Point { x: x2, y: y2, },
        }
    }

    pub fn length(&self) -> f64 {
        let dx = self.dst.x - self.src.x;
        let dy = self.dst.y - self.src.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.src.translate(dx, dy);
        self.dst.translate(dx, dy);
    }

    /// Coordinates in `[x1, y1, x2, y2]` order, as consumed by line primitives.
    pub fn coords(&self) -> [f64; 4] {
        [self.src.x, self.src.y, self.dst.x, self.dst.y]
    }
}

#[cfg(test)]
mod tests {
    use rand::{self, Rng};
    use super::Segment;

    #[test]
    fn length_is_euclidean() {
        assert_eq!(Segment::new(0., 0., 3., 4.).length(), 5.);
        assert_eq!(Segment::new(10., 10., 10., 10.).length(), 0.);
        assert_eq!(Segment::new(0., 0., -300., 0.).length(), 300.);
    }

    #[test]
    fn translate_moves_both_endpoints() {
        let mut segment = Segment::new(1., 2., 3., 4.);
        segment.translate(10., -5.);
        assert_eq!(segment, Segment::new(11., -3., 13., -1.));
    }

    #[test]
    fn translate_keeps_length() {
        let mut segment = Segment::new(0., 0., 150., 0.);
        segment.translate(-42.5, 17.25);
        assert!((segment.length() - 150.).abs() < 1e-9);
    }

    #[test]
    fn translate_back_and_forth_restores() {
        let mut rng = rand::thread_rng();
        for _ in 0 .. 1000 {
            let original = Segment::new(
                rng.gen_range(-1000., 1000.),
                rng.gen_range(-1000., 1000.),
                rng.gen_range(-1000., 1000.),
                rng.gen_range(-1000., 1000.),
            );
            let dx = rng.gen_range(-500., 500.);
            let dy = rng.gen_range(-500., 500.);
            let mut segment = original;
            segment.translate(dx, dy);
            segment.translate(-dx, -dy);
            for (a, b) in segment.coords().iter().zip(original.coords().iter()) {
                assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
            }
        }
    }
}
