use super::{AvlTree, AvlTreeMap, AvlTreeSet, Error};

const N: i32 = 1_000;
const LARGE_N: i32 = 10_000_000;

#[test]
fn test_new() {
    let tree_i32 = AvlTree::<i32>::new();
    assert!(tree_i32.is_empty());
    assert_eq!(tree_i32.height(), 0);
    tree_i32.check_consistency();

    let map_string = AvlTreeMap::<String, String>::new();
    assert!(map_string.is_empty());
    map_string.check_consistency();

    let set_i8 = AvlTreeSet::<i8>::new();
    assert!(set_i8.is_empty());
    set_i8.check_consistency();
}

#[test]
fn test_rebalance() {
    {
        //     3 ->   2
        //    /      / \
        //   2      1   3
        //  /
        // 1
        let mut map = AvlTreeMap::new();
        map.insert(3, ());
        map.insert(2, ());
        map.insert(1, ());
        map.check_consistency();
        assert_eq!(map.height(), 2);
    }
    {
        //     3   ->     3 ->   2
        //    / \        /      / \
        //   2   4      2      1   3
        //  /          /
        // 1          1
        let mut map = AvlTreeMap::new();
        map.insert(3, ());
        map.insert(2, ());
        map.insert(4, ());
        map.insert(1, ());
        map.check_consistency();
        assert_eq!(map.height(), 3);
        map.remove(&4);
        map.check_consistency();
        assert_eq!(map.height(), 2);
    }
    {
        //   3  ->   2
        //  /       / \
        // 1       1   3
        //  \
        //   2
        let mut map = AvlTreeMap::new();
        map.insert(3, ());
        map.insert(1, ());
        map.insert(2, ());
        map.check_consistency();
        assert_eq!(map.height(), 2);
    }
    {
        //   3   ->   3  ->   2
        //  / \      /       / \
        // 1   4    1       1   3
        //  \        \
        //   2        2
        let mut map = AvlTreeMap::new();
        map.insert(3, ());
        map.insert(1, ());
        map.insert(4, ());
        map.insert(2, ());
        map.check_consistency();
        assert_eq!(map.height(), 3);
        map.remove(&4);
        map.check_consistency();
        assert_eq!(map.height(), 2);
    }
    {
        //   1     -> 1     ->    2
        //  / \        \         / \
        // 0   2        2       1   3
        //      \        \
        //       3        3
        let mut map = AvlTreeMap::new();
        map.insert(1, ());
        map.insert(0, ());
        map.insert(2, ());
        map.insert(3, ());
        map.check_consistency();
        assert_eq!(map.height(), 3);
        map.remove(&0);
        map.check_consistency();
        assert_eq!(map.height(), 2);
    }
    {
        //   1   ->  1   ->  2
        //  / \       \     / \
        // 0   3       3   1   3
        //    /       /
        //   2       2
        let mut map = AvlTreeMap::new();
        map.insert(1, ());
        map.insert(0, ());
        map.insert(3, ());
        map.insert(2, ());
        map.check_consistency();
        assert_eq!(map.height(), 3);
        map.remove(&0);
        map.check_consistency();
        assert_eq!(map.height(), 2);
    }
    {
        //     4     ->    3
        //    / \         / \
        //   2   5       2   5
        //  / \         /
        // 1   3       1
        let mut tree = AvlTree::new();
        for value in [4, 2, 5, 1, 3] {
            tree.insert(value);
        }
        tree.remove(&4);
        tree.check_consistency();
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 5]);
    }
}

#[test]
fn test_insert_duplicates() {
    let mut tree = AvlTree::new();
    let inserted: Vec<bool> = [5, 4, 7, 8, 4, 6, 2, 7, 1]
        .into_iter()
        .map(|value| {
            let inserted = tree.insert(value);
            tree.check_consistency();
            inserted
        })
        .collect();
    assert_eq!(
        inserted,
        [true, true, true, true, false, true, true, false, true]
    );
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 4, 5, 6, 7, 8]);
}

#[test]
fn test_remove_in_arbitrary_order() {
    let mut tree: AvlTree<i32> = [5, 4, 7, 8, 6, 2, 1].into_iter().collect();
    let mut remaining = vec![1, 2, 4, 5, 6, 7, 8];
    for value in [6, 1, 8, 2, 5, 4, 7] {
        let len = tree.len();
        assert_eq!(tree.remove(&value), Some(value));
        tree.check_consistency();
        assert_eq!(tree.len(), len - 1);

        remaining.retain(|&other| other != value);
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), remaining);
    }
    assert!(tree.is_empty());
    assert_eq!(tree.remove(&5), None);
    assert!(tree.iter().next().is_none());
}

#[test]
fn test_insert_or_replace() {
    // Order by the first tuple field only
    let mut tree = AvlTree::with_key_fn(|pair: &(i32, &str)| pair.0);
    assert!(tree.insert((1, "one")));
    assert!(tree.insert((2, "two")));

    assert!(!tree.insert((1, "uno")));
    assert_eq!(tree.find(&1), Some(&(1, "one")));

    assert!(!tree.insert_or_replace((1, "uno")));
    assert_eq!(tree.find(&1), Some(&(1, "uno")));
    assert!(tree.insert_or_replace((3, "tres")));
    assert_eq!(tree.len(), 3);
    tree.check_consistency();
}

#[test]
fn test_key_fn() {
    let mut tree = AvlTree::with_key_fn(|word: &String| word.len());
    for word in ["kiwi", "fig", "banana", "plum", "cherry", "apple"] {
        tree.insert(String::from(word));
        tree.check_consistency();
    }
    // "plum" and "cherry" collide with "kiwi" and "banana"
    assert_eq!(tree.len(), 4);
    assert_eq!(
        tree.iter().map(String::as_str).collect::<Vec<_>>(),
        ["fig", "kiwi", "apple", "banana"]
    );
    assert!(tree.contains(&String::from("pear")));
    assert!(tree.contains_key(&6));
    assert_eq!(tree.remove(&4).as_deref(), Some("kiwi"));
    assert!(!tree.contains_key(&4));
    tree.check_consistency();
}

#[test]
fn test_height_bound() {
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).collect();
    values.shuffle(&mut rng);

    let height_bound = |len: usize| 1.44 * ((len + 2) as f64).log2();

    let mut tree = AvlTree::new();
    for value in &values {
        tree.insert(*value);
        assert!(tree.height() as f64 <= height_bound(tree.len()));
    }

    values.shuffle(&mut rng);
    for value in &values {
        tree.remove(value);
        assert!(tree.height() as f64 <= height_bound(tree.len()));
    }
    assert_eq!(tree.height(), 0);
}

#[test]
fn test_first_last() {
    let mut tree: AvlTree<i32> = (0..N).rev().collect();
    assert_eq!(tree.first(), Some(&0));
    assert_eq!(tree.last(), Some(&(N - 1)));

    for value in 0..N / 2 {
        assert_eq!(tree.pop_first(), Some(value));
        assert_eq!(tree.pop_last(), Some(N - 1 - value));
        tree.check_consistency();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.pop_first(), None);
    assert_eq!(tree.last(), None);
}

#[test]
fn test_tree_iter() {
    let tree: AvlTree<i32> = (0..N).collect();
    let mut iter = tree.iter();
    assert_eq!(iter.len(), N as usize);
    assert_eq!(iter.next(), Some(&0));
    assert_eq!(iter.next_back(), Some(&(N - 1)));
    assert_eq!(iter.len(), N as usize - 2);
    assert_eq!(iter.copied().collect::<Vec<_>>(), (1..N - 1).collect::<Vec<_>>());

    let cloned = tree.clone();
    cloned.check_consistency();
    assert_eq!(tree.into_iter().rev().collect::<Vec<_>>(), (0..N).rev().collect::<Vec<_>>());
    assert_eq!(cloned.len(), N as usize);
    assert_eq!(format!("{:?}", cloned.iter().take(3).collect::<Vec<_>>()), "[0, 1, 2]");
}

#[test]
fn test_insert() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();
    values.sort();
    values.dedup();

    let mut map = AvlTreeMap::new();
    for value in &values {
        assert_eq!(map.insert(*value, *value), None);
        map.check_consistency();
    }
    assert!(map.len() == values.len());

    for value in &values {
        assert_eq!(map.insert(*value, value.wrapping_add(1)), Some(*value));
    }
    assert!(map.len() == values.len());
}

#[test]
fn test_insert_sorted_range() {
    let mut map = AvlTreeMap::new();
    for value in 0..N {
        assert!(map.insert(value, value).is_none());
        map.check_consistency();
    }
    assert!(map.len() == N as usize);
    assert!(map.height() > 0);
    assert!(map.height() < N as usize / 2);
    assert!(map.get(&-42).is_none());
}

#[test]
fn test_insert_shuffled_range() {
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    let mut values: Vec<i32> = (0..N).collect();
    let mut rng = StdRng::seed_from_u64(0);
    values.shuffle(&mut rng);

    let mut map = AvlTreeMap::new();
    for value in &values {
        assert!(map.insert(*value, "foo").is_none());
        map.check_consistency();
    }
    assert!(map.len() == values.len());

    for value in &values {
        assert_eq!(map.insert(*value, "bar"), Some("foo"));
    }
    assert!(map.len() == values.len());
    assert!(map.values().all(|&value| value == "bar"));
    assert!(map.get(&-42).is_none());
}

#[test]
fn test_get() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();

    let mut map = AvlTreeMap::new();
    assert!(map.get(&42).is_none());
    for value in &values {
        map.insert(*value, value.wrapping_add(1));
    }

    for value in &values {
        let got = map.get(value);
        assert_eq!(got, Some(&value.wrapping_add(1)));
        let got = map.get_key_value(value);
        assert_eq!(got, Some((value, &(value.wrapping_add(1)))));
        assert_eq!(map[value], value.wrapping_add(1));
    }
}

#[test]
fn test_get_or() {
    let map: AvlTreeMap<&str, i32> = [("one", 1), ("two", 2)].into_iter().collect();
    assert_eq!(*map.get_or("one", &0), 1);
    assert_eq!(*map.get_or("three", &0), 0);
}

#[test]
fn test_get_mut() {
    let mut map: AvlTreeMap<String, i32> = AvlTreeMap::new();
    map.insert(String::from("a"), 1);
    if let Some(value) = map.get_mut("a") {
        *value += 10;
    }
    assert_eq!(map.get("a"), Some(&11));
    assert!(map.get_mut("b").is_none());
}

#[test]
#[should_panic(expected = "key not found")]
fn test_index_missing() {
    let map: AvlTreeMap<i32, i32> = (0..10).map(|value| (value, value)).collect();
    let _ = map[&42];
}

#[test]
fn test_clear() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();
    values.sort();
    values.dedup();

    let mut map = AvlTreeMap::new();
    for value in &values {
        map.insert(*value, String::from("foo"));
    }
    assert!(!map.is_empty());
    assert!(map.len() == values.len());

    map.clear();
    assert!(map.is_empty());
    assert!(map.len() == 0);

    for value in &values {
        assert!(map.insert(*value, String::from("bar")).is_none());
    }
    assert!(!map.is_empty());
    assert!(map.len() == values.len());
    map.check_consistency();
}

#[test]
fn test_remove() {
    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();
    values.sort();
    values.dedup();

    let mut map = AvlTreeMap::new();
    for value in &values {
        map.insert(*value, 42);
    }

    values.shuffle(&mut rng);
    for value in &values {
        assert!(map.get(value).is_some());
        assert_eq!(map.remove(value), Some(42));
        assert!(map.get(value).is_none());
        assert_eq!(map.remove(value), None);
        map.check_consistency();
    }
    assert!(map.is_empty());
    assert!(map.len() == 0);
}

#[test]
fn test_try_remove() {
    let mut map: AvlTreeMap<i32, &str> = [(1, "one"), (2, "two")].into_iter().collect();
    assert_eq!(map.try_remove(&1), Ok("one"));
    assert_eq!(map.try_remove(&1), Err(Error::KeyNotFound));
    assert_eq!(map.remove_entry(&2), Some((2, "two")));
    assert_eq!(map.try_remove(&2), Err(Error::KeyNotFound));
    assert!(map.is_empty());
}

#[test]
fn test_popitem() {
    let mut map: AvlTreeMap<i32, char> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
    assert_eq!(map.first_key_value(), Some((&1, &'a')));
    assert_eq!(map.last_key_value(), Some((&3, &'c')));
    assert_eq!(map.popitem(), Ok((1, 'a')));
    assert_eq!(map.pop_last(), Some((3, 'c')));
    assert_eq!(map.popitem(), Ok((2, 'b')));
    assert_eq!(map.popitem(), Err(Error::Empty));
    assert_eq!(map.pop_first(), None);
}

#[test]
fn test_setdefault() {
    let mut map = AvlTreeMap::new();
    assert_eq!(*map.setdefault("a", 1), 1);
    assert_eq!(*map.setdefault("a", 2), 1);
    *map.setdefault("b", 0) += 5;
    assert_eq!(map.get("b"), Some(&5));

    let mut called = false;
    map.setdefault_with("a", || {
        called = true;
        0
    });
    assert!(!called);
    map.setdefault_with("c", || 3);
    assert_eq!(map.get("c"), Some(&3));
    map.check_consistency();
}

#[test]
fn test_update_and_eq() {
    let mut map: AvlTreeMap<i32, &str> = [(1, "one"), (2, "two")].into_iter().collect();
    map.update([(2, "deux"), (3, "trois")]);
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&2), Some(&"deux"));

    let other: AvlTreeMap<i32, &str> = [(3, "trois"), (2, "deux"), (1, "one")]
        .into_iter()
        .collect();
    assert_eq!(map, other);
    map.insert(1, "un");
    assert_ne!(map, other);
    assert_eq!(format!("{:?}", other), r#"{1: "one", 2: "deux", 3: "trois"}"#);
}

#[test]
fn test_map_iter() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();

    let mut map = AvlTreeMap::new();
    for value in &values {
        map.insert(*value, value.wrapping_add(42));
    }

    values.sort();
    values.dedup();

    let mut map_iter = map.iter();
    for value in &values {
        let kv = map_iter.next();
        assert!(kv.is_some());
        let (&key, &mapped) = kv.unwrap();
        assert_eq!(key, *value);
        assert_eq!(mapped, value.wrapping_add(42));
    }
    assert!(map_iter.next().is_none());

    let mut value_iter = values.iter();
    for (&key, &mapped) in &map {
        let value = value_iter.next();
        assert!(value.is_some());
        let value = value.unwrap();
        assert_eq!(key, *value);
        assert_eq!(mapped, value.wrapping_add(42));
    }
    assert!(value_iter.next().is_none());

    let mut map_iter_mut = map.iter_mut();
    for value in &values {
        let kv = map_iter_mut.next();
        assert!(kv.is_some());
        let (&key, mapped_mut) = kv.unwrap();
        assert_eq!(key, *value);
        assert_eq!(*mapped_mut, value.wrapping_add(42));
        *mapped_mut = value.wrapping_sub(42);
    }
    assert!(map_iter_mut.next().is_none());

    let mut value_iter = values.iter();
    for (&key, mapped_mut) in &mut map {
        let value = value_iter.next();
        assert!(value.is_some());
        let value = value.unwrap();
        assert_eq!(key, *value);
        assert_eq!(*mapped_mut, value.wrapping_sub(42));
        *mapped_mut = 42;
    }
    assert!(value_iter.next().is_none());

    for mapped_mut in map.values_mut() {
        *mapped_mut += 1;
    }
    assert!(map.values().all(|&mapped| mapped == 43));
    assert!(map.keys().copied().eq(values.iter().copied()));
    assert!(map.keys().rev().copied().eq(values.iter().rev().copied()));

    assert!(map.clone().into_keys().eq(values.iter().copied()));
    assert!(map.clone().into_values().all(|mapped| mapped == 43));
    assert!(map.into_iter().map(|(key, _)| key).eq(values.iter().copied()));
}

#[test]
fn test_set() {
    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen_range(0..N)).collect();

    let mut set = AvlTreeSet::new();
    for value in &values {
        set.insert(*value);
    }
    set.check_consistency();

    for value in &values {
        let got = set.get(value);
        assert_eq!(got, Some(value));
    }

    values.shuffle(&mut rng);
    values.resize(values.len() / 2, 0);
    for value in &values {
        set.discard(value);
        assert!(!set.contains(value));
    }
    set.check_consistency();
}

#[test]
fn test_set_remove_discard_pop() {
    let mut set: AvlTreeSet<i32> = [5, 4, 7, 8, 4, 6, 2, 7, 1].into_iter().collect();
    assert_eq!(set.len(), 7);

    assert_eq!(set.remove(&4), Ok(4));
    assert_eq!(set.remove(&4), Err(Error::KeyNotFound));
    assert!(set.discard(&5));
    assert!(!set.discard(&5));
    assert_eq!(set.take(&6), Some(6));
    assert_eq!(set.take(&6), None);

    assert_eq!(set.first(), Some(&1));
    assert_eq!(set.last(), Some(&8));
    assert_eq!(set.pop(), Ok(1));
    assert_eq!(set.pop(), Ok(2));
    assert_eq!(set.pop(), Ok(7));
    assert_eq!(set.pop(), Ok(8));
    assert_eq!(set.pop(), Err(Error::Empty));
    set.check_consistency();
}

#[test]
fn test_set_algebra() {
    let lhs: AvlTreeSet<i32> = [1, 2, 3, 5, 8, 13].into_iter().collect();
    let rhs: AvlTreeSet<i32> = [2, 3, 4, 5, 6, 7].into_iter().collect();

    let union: Vec<i32> = lhs.union(&rhs).copied().collect();
    assert_eq!(union, [1, 2, 3, 4, 5, 6, 7, 8, 13]);
    let intersection: Vec<i32> = lhs.intersection(&rhs).copied().collect();
    assert_eq!(intersection, [2, 3, 5]);
    let difference: Vec<i32> = lhs.difference(&rhs).copied().collect();
    assert_eq!(difference, [1, 8, 13]);
    let difference: Vec<i32> = rhs.difference(&lhs).copied().collect();
    assert_eq!(difference, [4, 6, 7]);
    let symmetric_difference: Vec<i32> = lhs.symmetric_difference(&rhs).copied().collect();
    assert_eq!(symmetric_difference, [1, 4, 6, 7, 8, 13]);

    let empty = AvlTreeSet::new();
    assert!(lhs.union(&empty).eq(lhs.iter()));
    assert!(empty.union(&lhs).eq(lhs.iter()));
    assert!(lhs.intersection(&empty).next().is_none());
    assert!(lhs.difference(&empty).eq(lhs.iter()));
    assert!(empty.symmetric_difference(&rhs).eq(rhs.iter()));
    assert_eq!(format!("{:?}", lhs.intersection(&rhs)), "[2, 3, 5]");
}

#[test]
fn test_set_relations() {
    let set = |values: &[i32]| values.iter().copied().collect::<AvlTreeSet<i32>>();

    assert!(set(&[1, 2]).is_subset(&set(&[1, 2, 3])));
    assert!(set(&[1, 2, 3]).is_subset(&set(&[1, 2, 3])));
    assert!(set(&[]).is_subset(&set(&[1])));
    assert!(set(&[]).is_subset(&set(&[])));
    assert!(!set(&[1, 4]).is_subset(&set(&[1, 2, 3])));
    assert!(!set(&[1, 2, 3]).is_subset(&set(&[1, 2])));

    assert!(set(&[1, 2, 3]).is_superset(&set(&[2, 3])));
    assert!(set(&[1]).is_superset(&set(&[])));
    assert!(!set(&[2, 3]).is_superset(&set(&[1, 2, 3])));

    assert!(set(&[1, 3, 5]).is_disjoint(&set(&[2, 4, 6])));
    assert!(set(&[]).is_disjoint(&set(&[])));
    assert!(!set(&[1, 3, 5]).is_disjoint(&set(&[5, 6])));
}

#[test]
fn test_set_updates() {
    let set = |values: &[i32]| values.iter().copied().collect::<AvlTreeSet<i32>>();
    let values = |set: &AvlTreeSet<i32>| set.iter().copied().collect::<Vec<_>>();
    let rhs = set(&[2, 3, 4, 5, 6, 7]);

    let mut union = set(&[1, 2, 3, 5, 8, 13]);
    union.union_update(&rhs);
    union.check_consistency();
    assert_eq!(values(&union), [1, 2, 3, 4, 5, 6, 7, 8, 13]);

    let mut intersection = set(&[1, 2, 3, 5, 8, 13]);
    intersection.intersection_update(&rhs);
    intersection.check_consistency();
    assert_eq!(values(&intersection), [2, 3, 5]);

    let mut difference = set(&[1, 2, 3, 5, 8, 13]);
    difference.difference_update(&rhs);
    difference.check_consistency();
    assert_eq!(values(&difference), [1, 8, 13]);

    let mut symmetric_difference = set(&[1, 2, 3, 5, 8, 13]);
    symmetric_difference.symmetric_difference_update(&rhs);
    symmetric_difference.check_consistency();
    assert_eq!(values(&symmetric_difference), [1, 4, 6, 7, 8, 13]);

    let mut appended = set(&[1, 2, 3]);
    let mut other = set(&[3, 4]);
    appended.append(&mut other);
    appended.check_consistency();
    assert!(other.is_empty());
    assert_eq!(values(&appended), [1, 2, 3, 4]);

    // The rebuilt tree keeps accepting regular updates
    appended.insert(0);
    assert!(appended.discard(&3));
    appended.check_consistency();
    assert_eq!(values(&appended), [0, 1, 2, 4]);
}

#[test]
fn test_set_iter() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();

    let mut set = AvlTreeSet::new();
    for value in &values {
        set.insert(*value);
    }

    values.sort();
    values.dedup();

    let mut set_iter = set.iter();
    for value in &values {
        let value_in_set = set_iter.next();
        assert!(value_in_set.is_some());
        let &value_in_set = value_in_set.unwrap();
        assert_eq!(value_in_set, *value);
    }
    assert!(set_iter.next().is_none());

    let mut value_iter = values.iter();
    for &value_in_set in &set {
        let value = value_iter.next();
        assert!(value.is_some());
        let value = value.unwrap();
        assert_eq!(value_in_set, *value);
    }
    assert!(value_iter.next().is_none());

    assert_eq!(set.clone(), set);
    assert!(set.into_iter().eq(values.into_iter()));
}

#[test]
#[ignore]
fn test_large() {
    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    let mut values: Vec<i32> = (0..LARGE_N).map(|_| rng.gen_range(0..LARGE_N)).collect();

    let mut map = AvlTreeMap::new();
    for value in &values {
        map.insert(*value, *value);
    }
    map.check_consistency();

    values.shuffle(&mut rng);
    values.resize(values.len() / 2, 0);
    for value in &values {
        map.remove(value);
    }
    map.check_consistency();
}

mod model {
    use std::collections::{BTreeMap, BTreeSet};

    use proptest::prelude::*;

    use crate::{AvlTree, AvlTreeMap, AvlTreeSet, Heap, Order};

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u8),
        Remove(u8),
        PopFirst,
        PopLast,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => any::<u8>().prop_map(Op::Insert),
            3 => any::<u8>().prop_map(Op::Remove),
            1 => Just(Op::PopFirst),
            1 => Just(Op::PopLast),
        ]
    }

    proptest! {
        /// Runs the same operations against a tree and a `BTreeSet`.
        #[test]
        fn prop_tree_equivalence(ops in prop::collection::vec(op_strategy(), 0..200)) {
            let mut tree = AvlTree::new();
            let mut model = BTreeSet::new();
            for op in ops {
                match op {
                    Op::Insert(value) => {
                        prop_assert_eq!(tree.insert(value), model.insert(value));
                    }
                    Op::Remove(value) => {
                        prop_assert_eq!(tree.remove(&value), model.take(&value));
                    }
                    Op::PopFirst => {
                        prop_assert_eq!(tree.pop_first(), model.pop_first());
                    }
                    Op::PopLast => {
                        prop_assert_eq!(tree.pop_last(), model.pop_last());
                    }
                }
                tree.check_consistency();
                prop_assert_eq!(tree.len(), model.len());
            }
            prop_assert!(tree.iter().eq(model.iter()));
        }

        #[test]
        fn prop_map_equivalence(
            entries in prop::collection::vec((any::<u8>(), any::<u16>()), 0..200),
            removals in prop::collection::vec(any::<u8>(), 0..100),
        ) {
            let mut map = AvlTreeMap::new();
            let mut model = BTreeMap::new();
            for (key, value) in entries {
                prop_assert_eq!(map.insert(key, value), model.insert(key, value));
            }
            for key in removals {
                prop_assert_eq!(map.remove(&key), model.remove(&key));
            }
            map.check_consistency();
            prop_assert!(map.iter().eq(model.iter()));
        }

        #[test]
        fn prop_set_algebra(
            lhs in prop::collection::btree_set(any::<u8>(), 0..64),
            rhs in prop::collection::btree_set(any::<u8>(), 0..64),
        ) {
            let lhs_set: AvlTreeSet<u8> = lhs.iter().copied().collect();
            let rhs_set: AvlTreeSet<u8> = rhs.iter().copied().collect();

            prop_assert!(lhs_set.union(&rhs_set).eq(lhs.union(&rhs)));
            prop_assert!(lhs_set.intersection(&rhs_set).eq(lhs.intersection(&rhs)));
            prop_assert!(lhs_set.difference(&rhs_set).eq(lhs.difference(&rhs)));
            prop_assert!(lhs_set
                .symmetric_difference(&rhs_set)
                .eq(lhs.symmetric_difference(&rhs)));
            prop_assert_eq!(lhs_set.is_subset(&rhs_set), lhs.is_subset(&rhs));
            prop_assert_eq!(lhs_set.is_superset(&rhs_set), lhs.is_superset(&rhs));
            prop_assert_eq!(lhs_set.is_disjoint(&rhs_set), lhs.is_disjoint(&rhs));

            let mut updated = lhs_set.clone();
            updated.symmetric_difference_update(&rhs_set);
            updated.check_consistency();
            prop_assert!(updated.iter().eq(lhs.symmetric_difference(&rhs)));
        }

        #[test]
        fn prop_heap_sorts(values in prop::collection::vec(any::<i32>(), 0..200), descending in any::<bool>()) {
            let order = if descending { Order::Descending } else { Order::Ascending };
            let mut heap = Heap::with_order(order);
            for value in &values {
                heap.add(*value);
            }
            let mut popped = Vec::with_capacity(values.len());
            while let Ok(value) = heap.pop() {
                popped.push(value);
            }

            let mut expected = values;
            expected.sort();
            if descending {
                expected.reverse();
            }
            prop_assert_eq!(popped, expected);
        }
    }
}
