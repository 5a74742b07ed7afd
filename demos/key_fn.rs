use avl_collections::{AvlTree, Heap, Order};

#[derive(Debug)]
struct Task {
    name: &'static str,
    priority: u8,
}

fn main() {
    // One task per priority, ordered by priority
    let mut tasks = AvlTree::with_key_fn(|task: &Task| task.priority);
    tasks.insert(Task { name: "write docs", priority: 3 });
    tasks.insert(Task { name: "fix bug", priority: 1 });
    tasks.insert(Task { name: "review", priority: 2 });
    assert!(!tasks.insert(Task { name: "lunch", priority: 2 }));
    tasks.insert_or_replace(Task { name: "release", priority: 3 });

    for task in &tasks {
        println!("{} {}", task.priority, task.name);
    }
    if let Some(task) = tasks.find(&1) {
        println!("most urgent: {task:?}");
    }

    // Longest word first
    let words = vec!["pear", "fig", "banana", "kiwi"];
    let mut heap = Heap::from_vec(words, |word: &&str| word.len(), Order::Descending);
    while let Ok(word) = heap.pop() {
        println!("{word}");
    }
}
