//! 既有的段落组件。`Text` 形状以组合方式包装它，只暴露形状接口需要的部分。

use crate::canvas::Canvas;
use crate::geometry::Point2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    text: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[inline]
    pub fn paragraph(&self) -> &str {
        &self.text
    }

    pub fn set_paragraph(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn render_at(&self, canvas: &mut dyn Canvas, x: f64, y: f64) {
        canvas.draw_label(Point2::new(x, y), &self.text);
    }
}
