use aok::{OK, Void};
use log::info;
use sorted_list::{SortedList, SortedListErr};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

#[test]
fn test_scenario() -> Void {
  info!("> 整体场景");

  let mut li = SortedList::from(vec![5, 1, 3]);
  assert_eq!(li.as_slice(), &[1, 3, 5]);

  li.push(4);
  assert_eq!(li.as_slice(), &[1, 3, 4, 5]);

  assert_eq!(li.remove(&3), Ok(3));
  assert_eq!(li.as_slice(), &[1, 4, 5]);
  assert_eq!(li.remove(&3), Err(SortedListErr::NotFound));

  assert_eq!(li.index_of(&4), Ok(1));

  let dup = SortedList::from(vec![1, 1, 5, 5, 5]);
  assert_eq!(dup.count(&5), 3);

  let pair = SortedList::from(vec![1, 2]);
  assert_eq!(pair.repeat(2).as_slice(), &[1, 1, 2, 2]);
  assert_eq!(pair.concat(&[0]).as_slice(), &[0, 1, 2]);

  info!("场景测试通过");
  OK
}

#[test]
fn test_construct() -> Void {
  let empty: SortedList<u32> = SortedList::new();
  assert!(empty.is_empty());
  assert_eq!(empty.len(), 0);

  let li: SortedList<u32> = SortedList::with_capacity(8);
  assert!(li.is_empty());

  // Bulk construction sorts once (stable)
  // 批量构造只排序一次（稳定）
  let li = SortedList::from([9u32, 7, 8, 7]);
  assert_eq!(li.as_slice(), &[7, 7, 8, 9]);

  let li: SortedList<i64> = (0..5).rev().collect();
  assert_eq!(li.as_slice(), &[0, 1, 2, 3, 4]);

  let li: SortedList<u8> = SortedList::default();
  assert!(li.is_empty());
  OK
}

#[test]
fn test_at() -> Void {
  let li = SortedList::from(vec![1, 3, 5]);
  assert_eq!(li.at(0), Ok(&1));
  assert_eq!(li.at(2), Ok(&5));
  assert_eq!(li.at(3), Err(SortedListErr::OutOfRange { idx: 3, len: 3 }));

  // Read-only slice view via Deref
  // 通过 Deref 的只读切片视图
  assert_eq!(li[1], 3);
  assert_eq!(li.first(), Some(&1));
  assert_eq!(li.last(), Some(&5));
  OK
}

#[test]
fn test_pop_clear() -> Void {
  let mut li = SortedList::from(vec![2, 1, 3]);
  assert_eq!(li.pop(), Some(3));
  assert_eq!(li.pop_at(0), Ok(1));
  assert_eq!(li.as_slice(), &[2]);
  assert_eq!(
    li.pop_at(5),
    Err(SortedListErr::OutOfRange { idx: 5, len: 1 })
  );

  li.clear();
  assert!(li.is_empty());
  assert_eq!(li.pop(), None);
  OK
}

#[test]
fn test_iter() -> Void {
  let li = SortedList::from(vec![3, 1, 2]);

  // Restartable ascending iteration
  // 可重复的升序迭代
  for _ in 0..2 {
    let v: Vec<_> = li.iter().copied().collect();
    assert_eq!(v, [1, 2, 3]);
  }

  let v: Vec<_> = (&li).into_iter().copied().collect();
  assert_eq!(v, [1, 2, 3]);

  let v: Vec<_> = li.into_iter().collect();
  assert_eq!(v, [1, 2, 3]);
  OK
}

#[test]
fn test_err_display() -> Void {
  assert_eq!(
    SortedListErr::OutOfRange { idx: 7, len: 3 }.to_string(),
    "index 7 out of range (len 3)"
  );
  assert_eq!(SortedListErr::NotFound.to_string(), "item not found");
  OK
}
