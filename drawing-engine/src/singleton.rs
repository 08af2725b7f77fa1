//! 进程级单例持有者：首次访问时构造，之后不再重建。

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::OnceCell;
use tracing::debug;

/// 可作为 `static` 使用的单例持有者。构造在首次访问时完成且线程安全，
/// 调用方无需显式初始化。该类型不可复制。
pub struct SingletonHolder<T> {
    cell: OnceCell<RwLock<T>>,
    init: fn() -> T,
}

impl<T> SingletonHolder<T> {
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            cell: OnceCell::new(),
            init,
        }
    }

    /// 返回唯一实例，必要时先构造。
    pub fn instance(&self) -> &RwLock<T> {
        self.cell.get_or_init(|| {
            debug!(ty = std::any::type_name::<T>(), "构造单例实例");
            RwLock::new((self.init)())
        })
    }

    /// 读锁访问；锁中毒时沿用内部数据，注册表不存在半写入状态。
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.instance()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.instance()
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}
