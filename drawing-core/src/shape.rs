//! 形状抽象：种类标签、绘制能力以及由种类派生注册表键的两条路径。

use std::any::Any;
use std::fmt;

use crate::canvas::Canvas;
use crate::geometry::{Bounds2D, Point2, Vector2};

/// 形状种类的显式标签。字符串形式即持久化文件中的形状 id。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeKind(&'static str);

impl ShapeKind {
    #[inline]
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// 返回写入文件的形状 id。
    #[inline]
    pub const fn id(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// 与具体种类绑定的基础能力，由 [`ShapeType`] 自动实现。
pub trait ShapeBase {
    /// 实例的具体运行时种类（而非引用它的抽象类型）。
    fn kind(&self) -> ShapeKind;
    fn clone_shape(&self) -> Box<dyn Shape>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// 可绘制的多态形状。
pub trait Shape: ShapeBase + fmt::Debug + Send + Sync {
    fn draw(&self, canvas: &mut dyn Canvas);
    fn origin(&self) -> Point2;
    fn translate(&mut self, offset: Vector2);
    fn bounds(&self) -> Bounds2D;
}

/// 具体形状种类：编译期已知其标签，且可构造空白实例供读取器填充。
pub trait ShapeType: Shape + Clone + Default + 'static {
    const KIND: ShapeKind;
}

impl<T: ShapeType> ShapeBase for T {
    #[inline]
    fn kind(&self) -> ShapeKind {
        T::KIND
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_shape()
    }
}

/// 编译期路径：不需要实例即可得到种类键。
#[inline]
pub fn kind_of<T: ShapeType>() -> ShapeKind {
    T::KIND
}

/// 运行期路径：从抽象引用得到实例的具体种类键。
#[inline]
pub fn kind_of_shape(shape: &dyn Shape) -> ShapeKind {
    shape.kind()
}

/// 将抽象形状还原为具体种类，种类不符时返回 `None`。
pub fn downcast_ref<T: ShapeType>(shape: &dyn Shape) -> Option<&T> {
    shape.as_any().downcast_ref::<T>()
}

pub fn downcast_mut<T: ShapeType>(shape: &mut dyn Shape) -> Option<&mut T> {
    shape.as_any_mut().downcast_mut::<T>()
}
