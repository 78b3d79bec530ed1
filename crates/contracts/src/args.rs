//! DumpArg - dump 调用的单个参数

use std::fmt;

use crate::{DumpValue, Responder};

/// `dump` / `dd` 调用的一个参数。
///
/// 变体由调用方（或 `dump!` / `dd!` 宏）显式选择，不会根据值的形状推断。
pub enum DumpArg<'a> {
    /// 普通数据
    Value(&'a dyn DumpValue),
    /// 可响应对象；仅在第一个位置时作为输出目标
    Responder(&'a mut dyn Responder),
}

impl<'a> DumpArg<'a> {
    /// 包装普通数据
    pub fn value(value: &'a dyn DumpValue) -> Self {
        Self::Value(value)
    }

    /// 包装 responder
    pub fn responder(responder: &'a mut dyn Responder) -> Self {
        Self::Responder(responder)
    }

    /// 该参数是否具备响应能力
    pub fn is_responder(&self) -> bool {
        matches!(self, Self::Responder(_))
    }
}

impl fmt::Debug for DumpArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(&value.render()).finish(),
            Self::Responder(responder) => f.debug_tuple("Responder").field(responder).finish(),
        }
    }
}

impl<'a, T: DumpValue> From<&'a T> for DumpArg<'a> {
    fn from(value: &'a T) -> Self {
        Self::Value(value)
    }
}
