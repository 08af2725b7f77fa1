//! 通用键控工厂：键到零参数构造闭包的映射。

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use tracing::{debug, warn};

use crate::errors::FactoryError;

/// 默认的构造闭包类型。
pub type Creator<P> = Box<dyn Fn() -> Box<P> + Send + Sync>;

/// 按键保存构造闭包。产品类型、键类型与闭包类型均可替换，
/// 因此同一实现既能按名称构造形状，也能按种类构造读写器。
pub struct GenericFactory<P: ?Sized, K = String, C = Creator<P>> {
    creators: HashMap<K, C>,
    _product: std::marker::PhantomData<fn() -> Box<P>>,
}

impl<P: ?Sized, K, C> GenericFactory<P, K, C>
where
    K: Eq + Hash + Display,
    C: Fn() -> Box<P>,
{
    pub fn new() -> Self {
        Self {
            creators: HashMap::new(),
            _product: std::marker::PhantomData,
        }
    }

    /// 注册构造闭包，返回键此前是否不存在。已有绑定不会被覆盖。
    pub fn register(&mut self, key: K, creator: C) -> bool {
        if self.creators.contains_key(&key) {
            warn!(key = %key, "键已注册，忽略重复注册");
            return false;
        }
        debug!(key = %key, "注册构造器");
        self.creators.insert(key, creator);
        true
    }

    /// 调用键对应的构造闭包，每次返回一个独立的新实例。
    pub fn create(&self, key: &K) -> Result<Box<P>, FactoryError> {
        match self.creators.get(key) {
            Some(creator) => Ok(creator()),
            None => Err(FactoryError::UnknownKey {
                key: key.to_string(),
            }),
        }
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.creators.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.creators.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }

    /// 已注册的键，按显示形式排序以便稳定输出。
    pub fn keys(&self) -> Vec<&K> {
        let mut keys: Vec<&K> = self.creators.keys().collect();
        keys.sort_by_key(|key| key.to_string());
        keys
    }
}

impl<P: ?Sized, K, C> Default for GenericFactory<P, K, C>
where
    K: Eq + Hash + Display,
    C: Fn() -> Box<P>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ?Sized, K, C> std::fmt::Debug for GenericFactory<P, K, C>
where
    K: Eq + Hash + Display,
    C: Fn() -> Box<P>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys: Vec<String> = self.keys().into_iter().map(|key| key.to_string()).collect();
        f.debug_struct("GenericFactory").field("keys", &keys).finish()
    }
}
