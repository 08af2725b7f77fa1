use crate::geometry::Point2;

/// 形状绘制的输出端。
pub trait Canvas {
    fn draw_segment(&mut self, start: Point2, end: Point2);
    fn draw_circle(&mut self, center: Point2, radius: f64);
    fn draw_label(&mut self, at: Point2, text: &str);
}

/// 以文本形式记录绘制命令，便于测试与预览。
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<String>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<String> {
        self.commands
    }
}

impl Canvas for RecordingCanvas {
    fn draw_segment(&mut self, start: Point2, end: Point2) {
        self.commands.push(format!(
            "segment ({}, {}) -> ({}, {})",
            start.x(),
            start.y(),
            end.x(),
            end.y()
        ));
    }

    fn draw_circle(&mut self, center: Point2, radius: f64) {
        self.commands.push(format!(
            "circle ({}, {}) r={}",
            center.x(),
            center.y(),
            radius
        ));
    }

    fn draw_label(&mut self, at: Point2, text: &str) {
        self.commands
            .push(format!("label ({}, {}) \"{}\"", at.x(), at.y(), text));
    }
}

/// 直接打印到标准输出的画布。
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleCanvas;

impl Canvas for ConsoleCanvas {
    fn draw_segment(&mut self, start: Point2, end: Point2) {
        println!(
            "  线段 ({:.2}, {:.2}) -> ({:.2}, {:.2})",
            start.x(),
            start.y(),
            end.x(),
            end.y()
        );
    }

    fn draw_circle(&mut self, center: Point2, radius: f64) {
        println!(
            "  圆 圆心=({:.2}, {:.2}), 半径={:.2}",
            center.x(),
            center.y(),
            radius
        );
    }

    fn draw_label(&mut self, at: Point2, text: &str) {
        println!("  文字 ({:.2}, {:.2}): {}", at.x(), at.y(), text);
    }
}
