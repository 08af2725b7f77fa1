//! 形状种类的注册表：按 id 构造形状，按种类构造读写器。
//!
//! 所有内建种类集中列在 [`register_builtin_kinds`] 中，新增种类只需追加一行。

use std::sync::Once;

use drawing_core::shape::{Shape, ShapeKind, ShapeType};
use drawing_core::shapes::{Circle, Line, Rectangle, Square, Text};
use drawing_engine::{GenericFactory, SingletonHolder};
use tracing::{info, warn};

use crate::document::GraphicsDoc;
use crate::rw::{
    CircleReaderWriter, LineReaderWriter, RectangleReaderWriter, ShapeReaderWriter,
    SquareReaderWriter, TextReaderWriter,
};

/// 形状 id（文件中的 token）到空白形状的构造器。
pub type ShapeFactory = GenericFactory<dyn Shape, String>;
/// 形状种类到读写器的构造器。
pub type ShapeRwFactory = GenericFactory<dyn ShapeReaderWriter, ShapeKind>;

/// 单个种类的注册结果。任一项为 `false` 说明与已有绑定冲突。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub kind: ShapeKind,
    pub shape_registered: bool,
    pub rw_registered: bool,
}

impl RegistrationOutcome {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.shape_registered && self.rw_registered
    }
}

/// 注册一个形状种类及其读写器。
pub fn register_kind<S, RW>(
    shapes: &mut ShapeFactory,
    rws: &mut ShapeRwFactory,
) -> RegistrationOutcome
where
    S: ShapeType,
    RW: ShapeReaderWriter + Default + 'static,
{
    let shape_registered = shapes.register(
        S::KIND.id().to_string(),
        Box::new(|| -> Box<dyn Shape> { Box::new(S::default()) }),
    );
    let rw_registered = rws.register(
        S::KIND,
        Box::new(|| -> Box<dyn ShapeReaderWriter> { Box::new(RW::default()) }),
    );
    let outcome = RegistrationOutcome {
        kind: S::KIND,
        shape_registered,
        rw_registered,
    };
    if !outcome.is_complete() {
        warn!(
            kind = %S::KIND,
            shape_registered,
            rw_registered,
            "形状种类注册冲突，冲突的绑定不可达"
        );
    }
    outcome
}

/// 注册全部内建形状种类。
pub fn register_builtin_kinds(
    shapes: &mut ShapeFactory,
    rws: &mut ShapeRwFactory,
) -> Vec<RegistrationOutcome> {
    vec![
        register_kind::<Rectangle, RectangleReaderWriter>(shapes, rws),
        register_kind::<Square, SquareReaderWriter>(shapes, rws),
        register_kind::<Circle, CircleReaderWriter>(shapes, rws),
        register_kind::<Line, LineReaderWriter>(shapes, rws),
        register_kind::<Text, TextReaderWriter>(shapes, rws),
    ]
}

/// 由启动流程显式持有的一对注册表。
#[derive(Debug, Default)]
pub struct Registries {
    pub shapes: ShapeFactory,
    pub rws: ShapeRwFactory,
}

impl Registries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin_kinds() -> Self {
        let mut registries = Self::new();
        register_builtin_kinds(&mut registries.shapes, &mut registries.rws);
        registries
    }

    /// 基于这对注册表创建空文档。
    pub fn document(&self) -> GraphicsDoc<'_> {
        GraphicsDoc::new(&self.shapes, &self.rws)
    }
}

static SHAPE_FACTORY: SingletonHolder<ShapeFactory> = SingletonHolder::new(ShapeFactory::new);
static RW_FACTORY: SingletonHolder<ShapeRwFactory> = SingletonHolder::new(ShapeRwFactory::new);
static BUILTIN_REGISTRATION: Once = Once::new();

/// 进程级形状注册表。
pub fn global_shape_factory() -> &'static SingletonHolder<ShapeFactory> {
    &SHAPE_FACTORY
}

/// 进程级读写器注册表。
pub fn global_rw_factory() -> &'static SingletonHolder<ShapeRwFactory> {
    &RW_FACTORY
}

/// 把内建种类注册进进程级注册表，只执行一次。并发读取前应先调用。
pub fn ensure_global_registration() {
    BUILTIN_REGISTRATION.call_once(|| {
        let mut shapes = SHAPE_FACTORY.write();
        let mut rws = RW_FACTORY.write();
        let outcomes = register_builtin_kinds(&mut shapes, &mut rws);
        let complete = outcomes.iter().filter(|o| o.is_complete()).count();
        info!(kinds = outcomes.len(), complete, "进程级形状注册表已就绪");
    });
}

#[cfg(test)]
mod tests {
    use drawing_core::shape::ShapeBase;

    use super::*;

    #[test]
    fn builtin_kinds_register_cleanly() {
        let mut shapes = ShapeFactory::new();
        let mut rws = ShapeRwFactory::new();
        let outcomes = register_builtin_kinds(&mut shapes, &mut rws);
        assert_eq!(outcomes.len(), 5);
        assert!(outcomes.iter().all(RegistrationOutcome::is_complete));
        assert_eq!(shapes.len(), 5);
        assert_eq!(rws.len(), 5);
    }

    #[test]
    fn created_shapes_match_their_reader_writer_key() {
        let registries = Registries::with_builtin_kinds();
        for id in registries.shapes.keys() {
            let shape = registries.shapes.create(id).expect("registered id");
            assert_eq!(shape.kind().id(), id.as_str());
            assert!(registries.rws.contains(&shape.kind()));
        }
    }

    #[test]
    fn second_registration_is_reported_and_ignored() {
        let mut registries = Registries::with_builtin_kinds();
        let again = register_builtin_kinds(&mut registries.shapes, &mut registries.rws);
        assert!(again.iter().all(|o| !o.shape_registered && !o.rw_registered));
        assert_eq!(registries.shapes.len(), 5);
    }

    #[test]
    fn global_registration_is_idempotent() {
        ensure_global_registration();
        ensure_global_registration();
        assert_eq!(global_shape_factory().read().len(), 5);
        assert_eq!(global_rw_factory().read().len(), 5);
        assert!(global_rw_factory().read().contains(&Text::KIND));
    }
}
