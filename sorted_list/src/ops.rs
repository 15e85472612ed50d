//! std trait impls
//! 标准库 trait 实现

use std::ops::Deref;

use crate::SortedList;

/// Read-only view of the backing slice; `DerefMut` is deliberately absent
/// so callers cannot break the order through it
///
/// 底层切片的只读视图；不提供 `DerefMut`，调用方无法借此破坏顺序
impl<T> Deref for SortedList<T> {
  type Target = [T];

  #[inline]
  fn deref(&self) -> &[T] {
    &self.0
  }
}

impl<T> AsRef<[T]> for SortedList<T> {
  #[inline]
  fn as_ref(&self) -> &[T] {
    &self.0
  }
}

impl<T: Ord> From<Vec<T>> for SortedList<T> {
  /// One full stable sort, O(n log n)
  /// 一次完整稳定排序，O(n log n)
  #[inline]
  fn from(mut v: Vec<T>) -> Self {
    v.sort();
    Self(v)
  }
}

impl<T: Ord, const N: usize> From<[T; N]> for SortedList<T> {
  #[inline]
  fn from(arr: [T; N]) -> Self {
    Self::from(Vec::from(arr))
  }
}

impl<T: Ord> FromIterator<T> for SortedList<T> {
  #[inline]
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::from(iter.into_iter().collect::<Vec<_>>())
  }
}

impl<T: Ord> Extend<T> for SortedList<T> {
  /// Append to the tail, then restore order by length delta:
  /// 0 added → no-op, 1 added → pop + binary reinsert,
  /// more → one full stable re-sort
  ///
  /// 先追加到尾部，再按新增数量恢复有序：
  /// 0 个为空操作，1 个弹出后二分重插，多个整体稳定重排
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    let n = self.0.len();
    self.0.extend(iter);
    match self.0.len() - n {
      0 => {}
      1 => {
        if let Some(item) = self.0.pop() {
          self.push(item);
        }
      }
      _ => self.0.sort(),
    }
  }
}

/// Ascending consuming iteration
/// 升序消费迭代
impl<T> IntoIterator for SortedList<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a SortedList<T> {
  type Item = &'a T;
  type IntoIter = std::slice::Iter<'a, T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
