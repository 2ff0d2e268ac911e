use std::cmp::Ordering;

use avl_tree::{AvlNode, AvlTree, Comparator, InvariantError};

fn keys<K: Copy, C: Fn(&K, &K) -> Ordering>(tree: &AvlTree<K, C>) -> Vec<K> {
    tree.pre_order().copied().collect()
}

fn shape(node: Option<&AvlNode<i32>>) -> Option<(i32, Option<i32>, Option<i32>)> {
    node.map(|n| (*n.key(), n.left().map(|l| *l.key()), n.right().map(|r| *r.key())))
}

#[test]
fn reference_sequence_matrix() {
    let mut tree = AvlTree::new();
    for key in [10, 20, 30, 40, 50, 25] {
        assert!(tree.insert(key));
        tree.assert_valid().unwrap();
    }

    let root = tree.root().unwrap();
    assert_eq!(shape(Some(root)), Some((30, Some(20), Some(40))));
    assert_eq!(shape(root.left()), Some((20, Some(10), Some(25))));
    assert_eq!(shape(root.right()), Some((40, None, Some(50))));
    assert_eq!(root.height(), 3);

    assert_eq!(keys(&tree), vec![30, 20, 10, 25, 40, 50]);
    // Restartable.
    assert_eq!(keys(&tree), vec![30, 20, 10, 25, 40, 50]);

    let found = tree.search(&25).unwrap();
    assert_eq!(*found.key(), 25);
    assert!(found.is_leaf());
    assert!(tree.search(&99).is_none());
}

#[test]
fn single_rotation_matrix() {
    let mut ll = AvlTree::new();
    ll.extend([30, 20, 10]);
    assert_eq!(shape(ll.root()), Some((20, Some(10), Some(30))));

    let mut rr = AvlTree::new();
    rr.extend([10, 20, 30]);
    assert_eq!(shape(rr.root()), Some((20, Some(10), Some(30))));
}

#[test]
fn double_rotation_matrix() {
    let mut lr = AvlTree::new();
    lr.extend([30, 10, 20]);
    assert_eq!(shape(lr.root()), Some((20, Some(10), Some(30))));
    lr.assert_valid().unwrap();

    let mut rl = AvlTree::new();
    rl.extend([10, 30, 20]);
    assert_eq!(shape(rl.root()), Some((20, Some(10), Some(30))));
    rl.assert_valid().unwrap();
}

#[test]
fn ladder_insert_matrix() {
    let mut up = AvlTree::new();
    let mut down = AvlTree::new();
    for i in 0..300 {
        up.insert(i);
        up.assert_valid().unwrap();
        down.insert(299 - i);
        down.assert_valid().unwrap();
    }
    assert_eq!(up.len(), 300);
    assert_eq!(down.len(), 300);
    assert_eq!(up.iter().copied().collect::<Vec<_>>(), (0..300).collect::<Vec<_>>());
    assert!(up.height() <= avl_tree::util::height_bound(300));
    assert!(down.height() <= avl_tree::util::height_bound(300));

    for i in 0..300 {
        assert_eq!(up.get(&i), Some(&i));
        assert!(down.contains(&i));
    }
    assert!(!up.contains(&300));
    assert!(!up.contains(&-1));
}

#[test]
fn duplicate_insert_matrix() {
    let mut tree = AvlTree::new();
    tree.extend([5, 3, 8, 1, 4]);
    let before = tree.clone();

    assert!(!tree.insert(3));
    assert!(!tree.insert(5));
    assert!(!tree.insert(1));
    assert_eq!(tree, before);
    assert_eq!(tree.len(), 5);
    tree.assert_valid().unwrap();

    let once: AvlTree<i32> = [7, 2, 9, 7].into_iter().collect();
    let twice: AvlTree<i32> = [7, 2, 9].into_iter().collect();
    assert_eq!(once, twice);
}

#[test]
fn min_max_and_iteration_matrix() {
    let tree: AvlTree<i32> = [50, 20, 80, 10, 30, 70, 90, 60].into_iter().collect();
    assert_eq!(tree.first(), Some(&10));
    assert_eq!(tree.last(), Some(&90));

    let ascending: Vec<i32> = (&tree).into_iter().copied().collect();
    assert_eq!(ascending, vec![10, 20, 30, 50, 60, 70, 80, 90]);
    assert_eq!(tree.iter().len(), 8);

    let mut it = tree.iter();
    it.next();
    assert_eq!(it.len(), 7);
}

#[test]
fn string_keys_matrix() {
    let mut tree = AvlTree::new();
    for word in ["pear", "apple", "fig", "kiwi", "banana", "apple"] {
        tree.insert(word.to_string());
    }
    assert_eq!(tree.len(), 5);
    assert!(tree.contains(&"kiwi".to_string()));
    assert!(!tree.contains(&"grape".to_string()));
    let sorted: Vec<&str> = tree.iter().map(String::as_str).collect();
    assert_eq!(sorted, vec!["apple", "banana", "fig", "kiwi", "pear"]);
    tree.assert_valid().unwrap();
}

#[test]
fn custom_comparator_matrix() {
    let mut desc = AvlTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    desc.extend([10, 20, 30, 40, 50, 25]);
    desc.assert_valid().unwrap();
    assert_eq!(desc.iter().copied().collect::<Vec<_>>(), vec![50, 40, 30, 25, 20, 10]);
    assert_eq!(desc.first(), Some(&50));
    assert!(desc.contains(&25));
    assert!(!desc.contains(&26));

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Pair(i32, i32);

    let by_first: Box<Comparator<Pair>> = Box::new(|a: &Pair, b: &Pair| a.0.cmp(&b.0));
    let mut pairs = AvlTree::with_comparator(by_first);
    assert!(pairs.insert(Pair(1, 100)));
    assert!(pairs.insert(Pair(2, 200)));
    // Equal under the comparator: the stored key is kept.
    assert!(!pairs.insert(Pair(1, 999)));
    assert_eq!(pairs.get(&Pair(1, 0)), Some(&Pair(1, 100)));
    pairs.assert_valid().unwrap();
}

#[test]
fn validation_catches_comparator_mismatch_matrix() {
    let tree: AvlTree<i32> = [1, 2, 3].into_iter().collect();
    let reversed = |a: &i32, b: &i32| b.cmp(a);
    assert_eq!(
        avl_tree::assert_avl_tree(tree.root(), &reversed),
        Err(InvariantError::OrderViolated)
    );
    assert_eq!(avl_tree::assert_avl_tree(tree.root(), &|a: &i32, b: &i32| a.cmp(b)), Ok(3));
}

#[test]
fn free_function_contract_matrix() {
    let cmp = |a: &i32, b: &i32| a.cmp(b);
    let mut root = None;
    for key in [10, 20, 30, 40, 50, 25] {
        root = Some(avl_tree::insert(root, key, &cmp));
    }
    assert_eq!(shape(root.as_deref()), Some((30, Some(20), Some(40))));
    assert_eq!(avl_tree::search(root.as_deref(), &40, &cmp).map(|n| *n.key()), Some(40));
    assert!(avl_tree::search(root.as_deref(), &45, &cmp).is_none());
}

#[test]
fn print_matrix() {
    let tree: AvlTree<i32> = [10, 20, 30, 40, 50, 25].into_iter().collect();
    let expected = "\
30 [h=3]
├─ 20 [h=2]
│  ├─ 10 [h=1]
│  └─ 25 [h=1]
└─ 40 [h=2]
   ├─ ∅
   └─ 50 [h=1]";
    assert_eq!(tree.print(), expected);
}

#[cfg(feature = "serde")]
#[test]
fn serialize_matrix() {
    let tree: AvlTree<i32> = [2, 1].into_iter().collect();
    let json = serde_json::to_value(tree.root()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "key": 2,
            "height": 2,
            "left": { "key": 1, "height": 1 }
        })
    );
}
