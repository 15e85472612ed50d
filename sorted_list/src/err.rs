//! Error types
//! 错误类型

use thiserror::Error;

/// Sorted list error
/// 有序列表错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortedListErr {
  /// Index out of range
  /// 索引越界
  #[error("index {idx} out of range (len {len})")]
  OutOfRange { idx: usize, len: usize },

  /// No item equal to the one searched for
  /// 未找到相等元素
  #[error("item not found")]
  NotFound,
}
