#![cfg_attr(docsrs, feature(doc_cfg))]

//! SortedList - array-backed list that keeps items in ascending order
//! 有序列表 - 基于数组、始终保持升序
//!
//! Binary search drives lookup, insertion and removal positions; shifting
//! still costs O(n) as with any contiguous array. Construction from a bulk
//! source sorts once instead of inserting one by one.
//!
//! 查找与插入/删除位置由二分查找确定；元素搬移与普通数组一样是 O(n)。
//! 批量构造只排序一次，而非逐个插入。
//!
//! ```
//! use sorted_list::SortedList;
//!
//! let mut li = SortedList::from(vec![5, 1, 3]);
//! assert_eq!(li.as_slice(), &[1, 3, 5]);
//!
//! li.push(4);
//! li.extend([6, 2]);
//! assert_eq!(li.as_slice(), &[1, 2, 3, 4, 5, 6]);
//!
//! assert_eq!(li.index_of(&4), Ok(3));
//! assert_eq!(li.remove(&3), Ok(3));
//! assert!(!li.contains(&3));
//! ```

mod err;
mod list;
mod ops;

pub use err::SortedListErr;
pub use list::SortedList;
