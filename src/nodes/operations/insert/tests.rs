use crate::{
    deallocate_tree, insert_term, search_term,
    tests_common::{generate_keys_deep_chain, generate_keys_skewed, setup_tree_from_terms},
    InsertResult, Link, Node,
};

fn follow<'a>(mut node: &'a Node, links: &[Link]) -> &'a Node {
    for link in links {
        node = node
            .child(*link)
            .unwrap_or_else(|| panic!("missing {link} child of {node:?}"));
    }
    node
}

#[test]
fn insert_single_term_builds_equal_chain() {
    let mut root = None;

    let result = insert_term(&mut root, "cat");
    assert_eq!(
        result,
        InsertResult {
            new_word: true,
            allocated_nodes: 3
        }
    );

    let root = root.unwrap();
    assert_eq!(root.character(), 'c');
    assert!(root.lower.is_none() && root.higher.is_none());

    let a = follow(&root, &[Link::Equal]);
    assert_eq!(a.character(), 'a');
    assert!(!a.is_end_of_word());

    let t = follow(&root, &[Link::Equal, Link::Equal]);
    assert_eq!(t.character(), 't');
    assert!(t.is_end_of_word());
    assert!(t.is_leaf());
}

#[test]
fn insert_duplicate_changes_nothing() {
    let mut root = None;

    assert!(insert_term(&mut root, "a").new_word);
    assert_eq!(
        insert_term(&mut root, "a"),
        InsertResult {
            new_word: false,
            allocated_nodes: 0
        }
    );

    let root = root.unwrap();
    assert!(root.is_leaf());
    assert!(root.is_end_of_word());
}

#[test]
fn insert_places_siblings_by_character_order() {
    let root = setup_tree_from_terms(["cat", "car", "dog"]).unwrap();

    assert_eq!(root.character(), 'c');
    assert_eq!(follow(&root, &[Link::Higher]).character(), 'd');
    assert_eq!(follow(&root, &[Link::Higher, Link::Equal]).character(), 'o');
    assert!(follow(&root, &[Link::Higher, Link::Equal, Link::Equal]).is_end_of_word());

    let t = follow(&root, &[Link::Equal, Link::Equal]);
    assert_eq!(t.character(), 't');
    assert!(t.is_end_of_word());

    let r = follow(&root, &[Link::Equal, Link::Equal, Link::Lower]);
    assert_eq!(r.character(), 'r');
    assert!(r.is_end_of_word());
    assert!(r.is_leaf());
}

#[test]
fn insert_overlapping_prefixes_share_equal_chain() {
    let mut root = None;

    assert_eq!(insert_term(&mut root, "abc").allocated_nodes, 3);
    assert_eq!(
        insert_term(&mut root, "ab"),
        InsertResult {
            new_word: true,
            allocated_nodes: 0
        }
    );

    let root = root.unwrap();
    let b = follow(&root, &[Link::Equal]);
    assert!(b.is_end_of_word());
    assert!(follow(b, &[Link::Equal]).is_end_of_word());
}

#[test]
fn insert_empty_term_is_ignored() {
    let mut root = None;
    assert_eq!(insert_term(&mut root, ""), InsertResult::default());
    assert!(root.is_none());

    insert_term(&mut root, "x");
    assert_eq!(insert_term(&mut root, ""), InsertResult::default());
    assert!(root.unwrap().is_leaf());
}

#[test]
fn insert_multibyte_characters_as_single_nodes() {
    let mut root = None;

    assert_eq!(insert_term(&mut root, "héllo").allocated_nodes, 5);
    assert_eq!(insert_term(&mut root, "hello").allocated_nodes, 4);

    let root = root.unwrap();
    let e_acute = follow(&root, &[Link::Equal]);
    assert_eq!(e_acute.character(), 'é');
    assert_eq!(follow(e_acute, &[Link::Lower]).character(), 'e');
}

#[test]
fn insert_skewed_keys_then_search() {
    const KEY_LENGTH_LIMIT: usize = 64;

    let mut root = None;
    for key in generate_keys_skewed(KEY_LENGTH_LIMIT) {
        assert!(insert_term(&mut root, &key).new_word);
    }

    for key in generate_keys_skewed(KEY_LENGTH_LIMIT) {
        let node = search_term(root.as_deref(), &key).unwrap();
        assert!(node.is_end_of_word(), "{key} should end a word");
    }

    assert_eq!(deallocate_tree(root.unwrap()), 2 * KEY_LENGTH_LIMIT - 1);
}

#[test]
fn insert_ascending_characters_builds_higher_chain() {
    const NUM_KEYS: usize = 1_000;

    let mut root = None;
    for key in generate_keys_deep_chain(NUM_KEYS) {
        assert_eq!(insert_term(&mut root, &key).allocated_nodes, 1);
    }

    let mut depth = 0;
    let mut current = root.as_deref();
    while let Some(node) = current {
        assert!(node.lower.is_none() && node.equal.is_none());
        depth += 1;
        current = node.child(Link::Higher);
    }
    assert_eq!(depth, NUM_KEYS);

    assert_eq!(deallocate_tree(root.unwrap()), NUM_KEYS);
}
