//! 形状读写器：每个形状种类对应一个，负责该种类字段的文本读写。

use std::io::Write;

use drawing_core::shape::{Shape, ShapeBase, ShapeType, downcast_mut, downcast_ref};
use drawing_core::shapes::{Circle, Line, Rectangle, Square, Text};

use crate::IoError;
use crate::tokens::{TokenReader, encode_text};

/// 单个形状种类的序列化能力。
///
/// `read` 只消费本种类的字段（形状 id 已由调用方读取），使读取位置停在下一条记录开头；
/// `write` 输出完整记录：形状 id、字段与换行。
pub trait ShapeReaderWriter: Send + Sync {
    fn read(&self, shape: &mut dyn Shape, tokens: &mut TokenReader<'_>) -> Result<(), IoError>;
    fn write(&self, shape: &dyn Shape, out: &mut dyn Write) -> Result<(), IoError>;
}

fn expect_mut<T: ShapeType>(shape: &mut dyn Shape) -> Result<&mut T, IoError> {
    let actual = shape.kind();
    downcast_mut::<T>(shape).ok_or(IoError::KindMismatch {
        expected: T::KIND,
        actual,
    })
}

fn expect_ref<T: ShapeType>(shape: &dyn Shape) -> Result<&T, IoError> {
    downcast_ref::<T>(shape).ok_or(IoError::KindMismatch {
        expected: T::KIND,
        actual: shape.kind(),
    })
}

/// 字段顺序：`x y width height`。
#[derive(Debug, Default, Clone, Copy)]
pub struct RectangleReaderWriter;

impl ShapeReaderWriter for RectangleReaderWriter {
    fn read(&self, shape: &mut dyn Shape, tokens: &mut TokenReader<'_>) -> Result<(), IoError> {
        let rect = expect_mut::<Rectangle>(shape)?;
        rect.origin = tokens.expect_point("Rectangle 原点")?;
        rect.width = tokens.expect_f64("Rectangle 宽度")?;
        rect.height = tokens.expect_f64("Rectangle 高度")?;
        Ok(())
    }

    fn write(&self, shape: &dyn Shape, out: &mut dyn Write) -> Result<(), IoError> {
        let rect = expect_ref::<Rectangle>(shape)?;
        writeln!(
            out,
            "{} {} {} {} {}",
            Rectangle::KIND,
            rect.origin.x(),
            rect.origin.y(),
            rect.width,
            rect.height
        )?;
        Ok(())
    }
}

/// 字段顺序：`x y size`。
#[derive(Debug, Default, Clone, Copy)]
pub struct SquareReaderWriter;

impl ShapeReaderWriter for SquareReaderWriter {
    fn read(&self, shape: &mut dyn Shape, tokens: &mut TokenReader<'_>) -> Result<(), IoError> {
        let square = expect_mut::<Square>(shape)?;
        square.origin = tokens.expect_point("Square 原点")?;
        square.size = tokens.expect_f64("Square 边长")?;
        Ok(())
    }

    fn write(&self, shape: &dyn Shape, out: &mut dyn Write) -> Result<(), IoError> {
        let square = expect_ref::<Square>(shape)?;
        writeln!(
            out,
            "{} {} {} {}",
            Square::KIND,
            square.origin.x(),
            square.origin.y(),
            square.size
        )?;
        Ok(())
    }
}

/// 字段顺序：`x y radius`。
#[derive(Debug, Default, Clone, Copy)]
pub struct CircleReaderWriter;

impl ShapeReaderWriter for CircleReaderWriter {
    fn read(&self, shape: &mut dyn Shape, tokens: &mut TokenReader<'_>) -> Result<(), IoError> {
        let circle = expect_mut::<Circle>(shape)?;
        circle.center = tokens.expect_point("Circle 圆心")?;
        circle.radius = tokens.expect_f64("Circle 半径")?;
        Ok(())
    }

    fn write(&self, shape: &dyn Shape, out: &mut dyn Write) -> Result<(), IoError> {
        let circle = expect_ref::<Circle>(shape)?;
        writeln!(
            out,
            "{} {} {} {}",
            Circle::KIND,
            circle.center.x(),
            circle.center.y(),
            circle.radius
        )?;
        Ok(())
    }
}

/// 字段顺序：`x1 y1 x2 y2`。
#[derive(Debug, Default, Clone, Copy)]
pub struct LineReaderWriter;

impl ShapeReaderWriter for LineReaderWriter {
    fn read(&self, shape: &mut dyn Shape, tokens: &mut TokenReader<'_>) -> Result<(), IoError> {
        let line = expect_mut::<Line>(shape)?;
        line.start = tokens.expect_point("Line 起点")?;
        line.end = tokens.expect_point("Line 终点")?;
        Ok(())
    }

    fn write(&self, shape: &dyn Shape, out: &mut dyn Write) -> Result<(), IoError> {
        let line = expect_ref::<Line>(shape)?;
        writeln!(
            out,
            "{} {} {} {} {}",
            Line::KIND,
            line.start.x(),
            line.start.y(),
            line.end.x(),
            line.end.y()
        )?;
        Ok(())
    }
}

/// 字段顺序：`x y text`，文本编码为单个 token。
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReaderWriter;

impl ShapeReaderWriter for TextReaderWriter {
    fn read(&self, shape: &mut dyn Shape, tokens: &mut TokenReader<'_>) -> Result<(), IoError> {
        let text = expect_mut::<Text>(shape)?;
        text.origin = tokens.expect_point("Text 插入点")?;
        let content = tokens.expect_text("Text 内容")?;
        text.set_text(content);
        Ok(())
    }

    fn write(&self, shape: &dyn Shape, out: &mut dyn Write) -> Result<(), IoError> {
        let text = expect_ref::<Text>(shape)?;
        writeln!(
            out,
            "{} {} {} {}",
            Text::KIND,
            text.origin.x(),
            text.origin.y(),
            encode_text(text.text())
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use drawing_core::geometry::Point2;

    use super::*;

    fn write_to_string(rw: &dyn ShapeReaderWriter, shape: &dyn Shape) -> String {
        let mut buffer = Vec::new();
        rw.write(shape, &mut buffer).expect("write record");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn text_record_matches_reference_format() {
        let mut text = Text::default();
        let mut tokens = TokenReader::new("3 4 hello");
        TextReaderWriter.read(&mut text, &mut tokens).unwrap();
        assert_eq!(text.origin, Point2::new(3.0, 4.0));
        assert_eq!(text.text(), "hello");
        assert_eq!(write_to_string(&TextReaderWriter, &text), "Text 3 4 hello\n");
    }

    #[test]
    fn reader_stops_at_next_record() {
        let mut tokens = TokenReader::new("1 2 3 4\nCircle 0 0 1");
        let mut rect = Rectangle::default();
        RectangleReaderWriter.read(&mut rect, &mut tokens).unwrap();
        assert_eq!(rect, Rectangle::new(Point2::new(1.0, 2.0), 3.0, 4.0));
        assert_eq!(tokens.next_token(), Some("Circle"));
    }

    #[test]
    fn fractional_values_are_written_exactly() {
        let line = Line::new(Point2::new(0.1, -2.5), Point2::new(1e-7, 12345.678));
        let written = write_to_string(&LineReaderWriter, &line);
        assert_eq!(written, "Line 0.1 -2.5 0.0000001 12345.678\n");

        let mut tokens = TokenReader::new(&written);
        assert_eq!(tokens.next_token(), Some("Line"));
        let mut parsed = Line::default();
        LineReaderWriter.read(&mut parsed, &mut tokens).unwrap();
        assert_eq!(parsed, line);
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let mut circle = Circle::default();
        let mut tokens = TokenReader::new("1 2 3");
        let err = SquareReaderWriter.read(&mut circle, &mut tokens).unwrap_err();
        assert!(matches!(
            err,
            IoError::KindMismatch { expected, actual }
                if expected == Square::KIND && actual == Circle::KIND
        ));

        let mut buffer = Vec::new();
        assert!(TextReaderWriter.write(&circle, &mut buffer).is_err());
        assert!(buffer.is_empty());
    }

    #[test]
    fn truncated_record_is_invalid() {
        let mut square = Square::default();
        let mut tokens = TokenReader::new("1 2");
        let err = SquareReaderWriter.read(&mut square, &mut tokens).unwrap_err();
        assert!(matches!(err, IoError::InvalidRecord { line: 1, .. }));
    }
}
