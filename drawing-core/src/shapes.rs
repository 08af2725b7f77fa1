//! 内建形状种类。

use crate::canvas::Canvas;
use crate::geometry::{Bounds2D, Point2, Vector2};
use crate::legacy::Paragraph;
use crate::shape::{Shape, ShapeKind, ShapeType};

fn corners(origin: Point2, width: f64, height: f64) -> [Point2; 4] {
    [
        origin,
        Point2::new(origin.x() + width, origin.y()),
        Point2::new(origin.x() + width, origin.y() + height),
        Point2::new(origin.x(), origin.y() + height),
    ]
}

fn draw_outline(canvas: &mut dyn Canvas, points: &[Point2; 4]) {
    for (index, start) in points.iter().enumerate() {
        let end = points[(index + 1) % points.len()];
        canvas.draw_segment(*start, end);
    }
}

fn outline_bounds(points: &[Point2; 4]) -> Bounds2D {
    let mut bounds = Bounds2D::empty();
    for point in points {
        bounds.include_point(*point);
    }
    bounds
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rectangle {
    pub origin: Point2,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(origin: Point2, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }
}

impl Shape for Rectangle {
    fn draw(&self, canvas: &mut dyn Canvas) {
        draw_outline(canvas, &corners(self.origin, self.width, self.height));
    }

    fn origin(&self) -> Point2 {
        self.origin
    }

    fn translate(&mut self, offset: Vector2) {
        self.origin = self.origin.translate(offset);
    }

    fn bounds(&self) -> Bounds2D {
        outline_bounds(&corners(self.origin, self.width, self.height))
    }
}

impl ShapeType for Rectangle {
    const KIND: ShapeKind = ShapeKind::new("Rectangle");
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Square {
    pub origin: Point2,
    pub size: f64,
}

impl Square {
    pub fn new(origin: Point2, size: f64) -> Self {
        Self { origin, size }
    }
}

impl Shape for Square {
    fn draw(&self, canvas: &mut dyn Canvas) {
        draw_outline(canvas, &corners(self.origin, self.size, self.size));
    }

    fn origin(&self) -> Point2 {
        self.origin
    }

    fn translate(&mut self, offset: Vector2) {
        self.origin = self.origin.translate(offset);
    }

    fn bounds(&self) -> Bounds2D {
        outline_bounds(&corners(self.origin, self.size, self.size))
    }
}

impl ShapeType for Square {
    const KIND: ShapeKind = ShapeKind::new("Square");
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Shape for Circle {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_circle(self.center, self.radius);
    }

    fn origin(&self) -> Point2 {
        self.center
    }

    fn translate(&mut self, offset: Vector2) {
        self.center = self.center.translate(offset);
    }

    fn bounds(&self) -> Bounds2D {
        let radius = self.radius.abs();
        let center = self.center;
        Bounds2D::new(
            Point2::new(center.x() - radius, center.y() - radius),
            Point2::new(center.x() + radius, center.y() + radius),
        )
    }
}

impl ShapeType for Circle {
    const KIND: ShapeKind = ShapeKind::new("Circle");
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub start: Point2,
    pub end: Point2,
}

impl Line {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }
}

impl Shape for Line {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_segment(self.start, self.end);
    }

    fn origin(&self) -> Point2 {
        self.start
    }

    fn translate(&mut self, offset: Vector2) {
        self.start = self.start.translate(offset);
        self.end = self.end.translate(offset);
    }

    fn bounds(&self) -> Bounds2D {
        let mut bounds = Bounds2D::from_point(self.start);
        bounds.include_point(self.end);
        bounds
    }
}

impl ShapeType for Line {
    const KIND: ShapeKind = ShapeKind::new("Line");
}

/// 文字形状，内容交由既有的 [`Paragraph`] 组件保存与渲染。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub origin: Point2,
    paragraph: Paragraph,
}

impl Text {
    pub fn new(origin: Point2, text: impl Into<String>) -> Self {
        Self {
            origin,
            paragraph: Paragraph::new(text),
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        self.paragraph.paragraph()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.paragraph.set_paragraph(text);
    }
}

impl Shape for Text {
    fn draw(&self, canvas: &mut dyn Canvas) {
        self.paragraph
            .render_at(canvas, self.origin.x(), self.origin.y());
    }

    fn origin(&self) -> Point2 {
        self.origin
    }

    fn translate(&mut self, offset: Vector2) {
        self.origin = self.origin.translate(offset);
    }

    fn bounds(&self) -> Bounds2D {
        Bounds2D::from_point(self.origin)
    }
}

impl ShapeType for Text {
    const KIND: ShapeKind = ShapeKind::new("Text");
}
