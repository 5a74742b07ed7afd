use avl_collections::{AvlTreeMap, AvlTreeSet, Heap, Order};

fn main() {
    let mut map = AvlTreeMap::new();
    map.insert(0, "zero");
    map.insert(1, "one");
    map.insert(2, "two");
    map.insert(2, "two");
    map.insert(3, "three");
    map.insert(4, "four");
    map.insert(5, "five");
    assert_eq!(map.get(&1), Some(&"one"));
    map.remove(&1);
    assert!(map.get(&1).is_none());
    *map.setdefault(6, "six") = "SIX";

    for (k, v) in &map {
        println!("{k} => {v}");
    }

    let mut set = AvlTreeSet::new();
    for x in 0..5 {
        set.insert(x);
    }
    assert!(set.contains(&1));
    set.discard(&1);
    assert!(!set.contains(&1));

    let evens: AvlTreeSet<i32> = (0..10).step_by(2).collect();
    print!("{{ ");
    for x in set.intersection(&evens) {
        print!("{x}, ");
    }
    println!("}}");

    let mut heap = Heap::with_order(Order::Descending);
    heap.update([5, 4, 7, 8, 4, 6, 2, 7, 1]);
    while let Ok(x) = heap.pop() {
        print!("{x} ");
    }
    println!();
}
