pub mod canvas;
pub mod legacy;
pub mod shape;
pub mod shapes;

pub mod geometry {
    use glam::DVec2;

    /// 二维点，内部以 `glam::DVec2` 表示。
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Point2(pub DVec2);

    impl Point2 {
        #[inline]
        pub fn new(x: f64, y: f64) -> Self {
            Self(DVec2::new(x, y))
        }

        #[inline]
        pub fn from_vec(vec: DVec2) -> Self {
            Self(vec)
        }

        #[inline]
        pub fn x(self) -> f64 {
            self.0.x
        }

        #[inline]
        pub fn y(self) -> f64 {
            self.0.y
        }

        #[inline]
        pub fn translate(self, offset: Vector2) -> Self {
            Self(self.0 + offset.0)
        }

        #[inline]
        pub fn vector_to(self, other: Point2) -> Vector2 {
            Vector2(other.0 - self.0)
        }

        #[inline]
        pub fn as_vec2(self) -> DVec2 {
            self.0
        }
    }

    impl From<DVec2> for Point2 {
        fn from(value: DVec2) -> Self {
            Self::from_vec(value)
        }
    }

    /// 二维向量，用于平移形状。
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Vector2(pub DVec2);

    impl Vector2 {
        #[inline]
        pub fn new(x: f64, y: f64) -> Self {
            Self(DVec2::new(x, y))
        }

        #[inline]
        pub fn x(self) -> f64 {
            self.0.x
        }

        #[inline]
        pub fn y(self) -> f64 {
            self.0.y
        }

        #[inline]
        pub fn as_vec2(self) -> DVec2 {
            self.0
        }
    }

    impl From<DVec2> for Vector2 {
        fn from(value: DVec2) -> Self {
            Self(value)
        }
    }

    /// 轴对齐边界框，用于估算文档/形状范围。
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Bounds2D {
        min: Point2,
        max: Point2,
    }

    impl Bounds2D {
        #[inline]
        pub fn new(min: Point2, max: Point2) -> Self {
            Self { min, max }
        }

        #[inline]
        pub fn empty() -> Self {
            Self {
                min: Point2::new(f64::INFINITY, f64::INFINITY),
                max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
            }
        }

        /// 以单点构造退化的边界框（文字等无尺寸形状使用）。
        #[inline]
        pub fn from_point(point: Point2) -> Self {
            Self {
                min: point,
                max: point,
            }
        }

        #[inline]
        pub fn is_empty(&self) -> bool {
            self.min.x() > self.max.x() || self.min.y() > self.max.y()
        }

        #[inline]
        pub fn min(&self) -> Point2 {
            self.min
        }

        #[inline]
        pub fn max(&self) -> Point2 {
            self.max
        }

        pub fn include_point(&mut self, point: Point2) {
            if self.is_empty() {
                self.min = point;
                self.max = point;
                return;
            }
            let min_vec = self.min.as_vec2().min(point.as_vec2());
            let max_vec = self.max.as_vec2().max(point.as_vec2());
            self.min = Point2::from_vec(min_vec);
            self.max = Point2::from_vec(max_vec);
        }

        pub fn include_bounds(&mut self, other: &Bounds2D) {
            if other.is_empty() {
                return;
            }
            self.include_point(other.min);
            self.include_point(other.max);
        }

        #[inline]
        pub fn center(&self) -> Point2 {
            debug_assert!(!self.is_empty());
            let center = (self.min.as_vec2() + self.max.as_vec2()) * 0.5;
            Point2::from_vec(center)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn bounds_grow_to_cover_points() {
            let mut bounds = Bounds2D::empty();
            assert!(bounds.is_empty());

            bounds.include_point(Point2::new(1.0, 5.0));
            bounds.include_point(Point2::new(-3.0, 2.0));
            assert!(!bounds.is_empty());
            assert_eq!(bounds.min(), Point2::new(-3.0, 2.0));
            assert_eq!(bounds.max(), Point2::new(1.0, 5.0));
            assert_eq!(bounds.center(), Point2::new(-1.0, 3.5));

            let mut merged = Bounds2D::from_point(Point2::new(10.0, 10.0));
            merged.include_bounds(&bounds);
            merged.include_bounds(&Bounds2D::empty());
            assert_eq!(merged.min(), Point2::new(-3.0, 2.0));
            assert_eq!(merged.max(), Point2::new(10.0, 10.0));
        }

        #[test]
        fn translate_moves_point_by_offset() {
            let moved = Point2::new(1.0, 2.0).translate(Vector2::new(-1.0, 3.0));
            assert_eq!(moved, Point2::new(0.0, 5.0));
            let delta = Point2::new(1.0, 1.0).vector_to(Point2::new(4.0, 5.0));
            assert_eq!(delta, Vector2::new(3.0, 4.0));
        }
    }
}
