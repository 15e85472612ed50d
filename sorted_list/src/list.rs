//! SortedList - array-backed list that keeps items in ascending order
//! 有序列表 - 基于数组、始终保持升序

use std::ops::{Bound, RangeBounds};

use crate::SortedListErr;

/// Resolve `RangeBounds` to a `[start, end)` pair clamped to `[0, len]`
/// 将 `RangeBounds` 解析为收敛到 `[0, len]` 内的 `[start, end)` 区间
fn clamp_range(range: impl RangeBounds<usize>, len: usize) -> (usize, usize) {
  let start = match range.start_bound() {
    Bound::Included(&s) => s,
    Bound::Excluded(&s) => s.saturating_add(1),
    Bound::Unbounded => 0,
  };
  let end = match range.end_bound() {
    Bound::Included(&e) => e.saturating_add(1),
    Bound::Excluded(&e) => e,
    Bound::Unbounded => len,
  };
  let end = end.min(len);
  (start.min(end), end)
}

/// Array-backed list that keeps items in ascending order
///
/// Only `Ord` comparison is used between items. Insertion is stable: an item
/// equal to existing ones lands after them, matching stable sort ties.
/// Mutations that could break the order (positional insert, sort, reverse,
/// `&mut` element access) are simply not exposed; reads borrow `&[T]` via
/// `Deref`.
///
/// 基于数组的有序列表，元素间仅用 `Ord` 比较。插入是稳定的：
/// 相等元素排在已有元素之后，与稳定排序一致。
/// 可能破坏顺序的操作（按位置插入、排序、反转、可变元素访问）不对外暴露，
/// 读取通过 `Deref` 借用 `&[T]`。
///
/// # Examples
/// ```
/// use sorted_list::SortedList;
///
/// let mut li = SortedList::from(vec![5, 1, 3]);
/// assert_eq!(li.as_slice(), &[1, 3, 5]);
/// li.push(4);
/// assert_eq!(li.as_slice(), &[1, 3, 4, 5]);
/// assert!(li.contains(&4));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedList<T>(pub(crate) Vec<T>);

impl<T> SortedList<T> {
  #[inline]
  pub fn new() -> Self {
    Self(Vec::new())
  }

  #[inline]
  pub fn with_capacity(cap: usize) -> Self {
    Self(Vec::with_capacity(cap))
  }

  #[inline]
  pub fn as_slice(&self) -> &[T] {
    &self.0
  }

  /// Release the backing storage
  /// 释放底层存储
  #[inline]
  pub fn into_vec(self) -> Vec<T> {
    self.0
  }

  /// Fallible positional read
  /// 可失败的按位读取
  #[inline]
  pub fn at(&self, idx: usize) -> Result<&T, SortedListErr> {
    self.0.get(idx).ok_or(SortedListErr::OutOfRange {
      idx,
      len: self.0.len(),
    })
  }

  /// Remove and return the greatest item
  /// 移除并返回最大元素
  #[inline]
  pub fn pop(&mut self) -> Option<T> {
    self.0.pop()
  }

  /// Remove and return the item at `idx`
  /// 移除并返回 `idx` 处元素
  #[inline]
  pub fn pop_at(&mut self, idx: usize) -> Result<T, SortedListErr> {
    if idx < self.0.len() {
      Ok(self.0.remove(idx))
    } else {
      Err(SortedListErr::OutOfRange {
        idx,
        len: self.0.len(),
      })
    }
  }

  /// Drop all items, keep the allocation
  /// 清空元素，保留已分配容量
  #[inline]
  pub fn clear(&mut self) {
    self.0.clear();
  }
}

impl<T: Ord> SortedList<T> {
  /// Leftmost insertion point: first index whose item is not less than `item`
  /// 最左插入点：首个不小于 `item` 的下标
  #[inline]
  pub fn lower_bound(&self, item: &T) -> usize {
    self.0.partition_point(|x| x < item)
  }

  /// Rightmost insertion point: first index whose item is greater than `item`
  /// 最右插入点：首个大于 `item` 的下标
  #[inline]
  pub fn upper_bound(&self, item: &T) -> usize {
    self.0.partition_point(|x| x <= item)
  }

  /// Insert keeping order; equal items land after existing ones
  /// 插入并保持有序；相等元素排在已有元素之后
  pub fn push(&mut self, item: T) {
    // Fast path: empty or item not less than last
    // 快速路径：为空或不小于末尾元素时直接追加
    if self.0.last().is_none_or(|last| *last <= item) {
      self.0.push(item);
    } else {
      let idx = self.upper_bound(&item);
      self.0.insert(idx, item);
    }
  }

  /// Membership test, O(log n)
  /// 成员测试，O(log n)
  #[inline]
  pub fn contains(&self, item: &T) -> bool {
    self.0.get(self.lower_bound(item)) == Some(item)
  }

  /// Leftmost index of an item equal to `item`
  /// 首个相等元素的下标
  #[inline]
  pub fn index_of(&self, item: &T) -> Result<usize, SortedListErr> {
    self.index_of_in(item, ..)
  }

  /// Leftmost index of an item equal to `item` within `range`
  ///
  /// Bounds clamp to `[0, len]`.
  ///
  /// `range` 内首个相等元素的下标，边界收敛到 `[0, len]`
  pub fn index_of_in(
    &self,
    item: &T,
    range: impl RangeBounds<usize>,
  ) -> Result<usize, SortedListErr> {
    let (start, end) = clamp_range(range, self.0.len());
    let idx = start + self.0[start..end].partition_point(|x| x < item);
    if idx < end && self.0[idx] == *item {
      Ok(idx)
    } else {
      Err(SortedListErr::NotFound)
    }
  }

  /// Count items equal to `item`, O(log n)
  ///
  /// Equal items are contiguous, so the count is the distance between the
  /// two insertion points.
  ///
  /// 统计相等元素个数，O(log n)。相等元素连续，个数即两插入点之差。
  #[inline]
  pub fn count(&self, item: &T) -> usize {
    self.upper_bound(item) - self.lower_bound(item)
  }

  /// Remove the leftmost item equal to `item`
  /// 移除首个相等元素
  pub fn remove(&mut self, item: &T) -> Result<T, SortedListErr> {
    let idx = self.lower_bound(item);
    if self.0.get(idx) == Some(item) {
      Ok(self.0.remove(idx))
    } else {
      Err(SortedListErr::NotFound)
    }
  }

  /// Overwrite the item at `idx`, then repair order locally
  ///
  /// Only the written item can be misplaced, so it is moved by one
  /// remove + binary reinsert instead of a full re-sort.
  ///
  /// 覆写 `idx` 处元素后局部修复顺序：仅该元素可能错位，
  /// 用一次移除 + 二分重插代替整体重排。
  pub fn set(&mut self, idx: usize, item: T) -> Result<(), SortedListErr> {
    let len = self.0.len();
    if idx >= len {
      return Err(SortedListErr::OutOfRange { idx, len });
    }
    self.0[idx] = item;
    self.repair(idx);
    Ok(())
  }

  /// Replace the items selected by `range` with `items`, then restore order
  ///
  /// The source is materialized first to know its length: one new item gets
  /// the local repair of [`set`](Self::set), anything else re-sorts.
  /// Bounds clamp to `[0, len]`.
  ///
  /// 用 `items` 替换 `range` 选中的元素并恢复有序。
  /// 先物化来源以得知长度：恰好一个新元素走 [`set`](Self::set) 的局部修复，
  /// 其余情况整体重排。边界收敛到 `[0, len]`。
  pub fn set_range(&mut self, range: impl RangeBounds<usize>, items: impl IntoIterator<Item = T>) {
    let (start, end) = clamp_range(range, self.0.len());
    let src: Vec<T> = items.into_iter().collect();
    let n = src.len();
    self.0.splice(start..end, src);
    if n == 1 {
      self.repair(start);
    } else {
      self.0.sort();
    }
  }

  /// Move the item at `idx` to its order-correct position;
  /// every other item is assumed already sorted
  ///
  /// 将 `idx` 处元素移动到正确位置；其余元素假定已有序
  fn repair(&mut self, idx: usize) {
    if idx > 0 && self.0[idx] < self.0[idx - 1] {
      // Left neighbor violated: reinsert into the sorted prefix
      // 与左邻冲突：二分重插到有序前缀
      let item = self.0.remove(idx);
      let pos = self.0[..idx].partition_point(|x| *x <= item);
      self.0.insert(pos, item);
    } else if idx + 1 < self.0.len() && self.0[idx + 1] < self.0[idx] {
      // Right neighbor violated: reinsert into the sorted suffix
      // 与右邻冲突：二分重插到有序后缀
      let item = self.0.remove(idx);
      let pos = idx + self.0[idx..].partition_point(|x| *x <= item);
      self.0.insert(pos, item);
    }
  }
}

impl<T: Ord + Clone> SortedList<T> {
  /// Copy out the items selected by `range`
  ///
  /// A contiguous subrange of a sorted sequence is sorted, so this is a
  /// structural copy with no re-sort. Bounds clamp to `[0, len]`.
  ///
  /// 拷贝 `range` 选中的元素。有序序列的连续子区间仍有序，
  /// 无需重排。边界收敛到 `[0, len]`。
  pub fn slice(&self, range: impl RangeBounds<usize>) -> Self {
    let (start, end) = clamp_range(range, self.0.len());
    Self(self.0[start..end].to_vec())
  }

  /// Like [`slice`](Self::slice), keeping every `step`-th item
  /// (`step` of 0 is treated as 1)
  ///
  /// 同 [`slice`](Self::slice)，但每 `step` 个取一个（0 视为 1）
  pub fn slice_step(&self, range: impl RangeBounds<usize>, step: usize) -> Self {
    let (start, end) = clamp_range(range, self.0.len());
    Self(self.0[start..end].iter().step_by(step.max(1)).cloned().collect())
  }

  /// Merge with another sequence into a new list
  ///
  /// A one-item `other` is binary-repositioned; more items trigger one full
  /// stable re-sort.
  ///
  /// 与另一序列合并为新列表。单元素走二分重插，多元素整体稳定重排。
  pub fn concat(&self, other: &[T]) -> Self {
    let mut out = self.clone();
    match other {
      [] => {}
      [item] => out.push(item.clone()),
      _ => {
        out.0.extend_from_slice(other);
        out.0.sort();
      }
    }
    out
  }

  /// New list with `n` adjacent copies of every item
  ///
  /// Copies of one item stay adjacent and groups keep their relative order,
  /// so no re-sort is needed. `repeat(0)` is empty.
  ///
  /// 每个元素重复 `n` 次的新列表。同一元素的副本相邻，组间相对顺序不变，
  /// 无需重排。`repeat(0)` 为空。
  pub fn repeat(&self, n: usize) -> Self {
    let mut v = Vec::with_capacity(self.0.len().saturating_mul(n));
    for item in &self.0 {
      v.extend(std::iter::repeat_n(item.clone(), n));
    }
    Self(v)
  }

  /// In-place version of [`repeat`](Self::repeat)
  /// [`repeat`](Self::repeat) 的原地版本
  pub fn repeat_in_place(&mut self, n: usize) {
    match n {
      0 => self.0.clear(),
      1 => {}
      _ => {
        let data = std::mem::take(&mut self.0);
        self.0 = Vec::with_capacity(data.len().saturating_mul(n));
        for item in data {
          self.0.extend(std::iter::repeat_n(item, n));
        }
      }
    }
  }
}
