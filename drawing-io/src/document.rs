use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use drawing_core::canvas::Canvas;
use drawing_core::geometry::Bounds2D;
use drawing_core::shape::{Shape, ShapeBase, ShapeKind};
use tracing::{debug, info};

use crate::IoError;
use crate::registration::{ShapeFactory, ShapeRwFactory};
use crate::rw::ShapeReaderWriter;
use crate::tokens::TokenReader;

/// 图形文档：按插入顺序独占持有形状，并借助两张注册表完成读写。
///
/// 注册表由构造方注入，文档不关心它们是显式创建的还是进程级单例。
#[derive(Debug)]
pub struct GraphicsDoc<'r> {
    shapes: Vec<Box<dyn Shape>>,
    shape_factory: &'r ShapeFactory,
    rw_factory: &'r ShapeRwFactory,
}

impl<'r> GraphicsDoc<'r> {
    pub fn new(shape_factory: &'r ShapeFactory, rw_factory: &'r ShapeRwFactory) -> Self {
        Self {
            shapes: Vec::new(),
            shape_factory,
            rw_factory,
        }
    }

    pub fn add(&mut self, shape: Box<dyn Shape>) {
        self.shapes.push(shape);
    }

    /// 按集合顺序绘制全部形状。
    pub fn render(&self, canvas: &mut dyn Canvas) {
        for shape in &self.shapes {
            shape.draw(canvas);
        }
    }

    #[inline]
    pub fn shapes(&self) -> impl Iterator<Item = &(dyn Shape + 'static)> + '_ {
        self.shapes.iter().map(|shape| &**shape)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// 全部形状的包围盒，文档为空时返回 `None`。
    pub fn bounds(&self) -> Option<Bounds2D> {
        let mut bounds = Bounds2D::empty();
        for shape in &self.shapes {
            bounds.include_bounds(&shape.bounds());
        }
        if bounds.is_empty() { None } else { Some(bounds) }
    }

    /// 从文件加载记录并追加到文档末尾，返回新增形状数量。
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, IoError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| IoError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let count = self.load_from_str(&data)?;
        info!(path = %path.display(), count, "文档加载完成");
        Ok(count)
    }

    /// 解析全部记录；任一记录失败则整体放弃，文档保持不变。
    pub fn load_from_str(&mut self, source: &str) -> Result<usize, IoError> {
        let mut tokens = TokenReader::new(source);
        let mut staged: Vec<Box<dyn Shape>> = Vec::new();

        while let Some(id) = tokens.next_token() {
            let line = tokens.line();
            debug!(id, line, "读取形状记录");

            let mut shape = self
                .shape_factory
                .create(&id.to_string())
                .map_err(|source| IoError::UnknownShape {
                    id: id.to_string(),
                    line,
                    source,
                })?;
            let rw = self.reader_writer_for(shape.kind())?;
            rw.read(shape.as_mut(), &mut tokens)?;
            staged.push(shape);
        }

        let count = staged.len();
        self.shapes.extend(staged);
        Ok(count)
    }

    /// 覆盖写入文件。
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let path = path.as_ref();
        let write_error = |source: std::io::Error| IoError::WriteError {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(write_error)?;
        let mut out = BufWriter::new(file);
        self.save_to(&mut out)?;
        out.flush().map_err(write_error)?;
        info!(path = %path.display(), count = self.shapes.len(), "文档保存完成");
        Ok(())
    }

    /// 按集合顺序输出每个形状的记录。
    ///
    /// # Panics
    ///
    /// 文档中的形状种类没有注册读写器时 panic：能被构造的形状必须可序列化。
    pub fn save_to(&self, out: &mut dyn Write) -> Result<(), IoError> {
        for shape in &self.shapes {
            let kind = shape.kind();
            let rw = match self.reader_writer_for(kind) {
                Ok(rw) => rw,
                Err(err) => panic!("内部错误：形状种类 {kind} 没有注册读写器（{err}）"),
            };
            rw.write(shape.as_ref(), out)?;
        }
        Ok(())
    }

    /// 以字符串形式返回文档内容，格式与 [`save`](Self::save) 相同。
    pub fn to_text(&self) -> Result<String, IoError> {
        let mut buffer = Vec::new();
        self.save_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn reader_writer_for(&self, kind: ShapeKind) -> Result<Box<dyn ShapeReaderWriter>, IoError> {
        self.rw_factory
            .create(&kind)
            .map_err(|source| IoError::MissingReaderWriter { kind, source })
    }
}
