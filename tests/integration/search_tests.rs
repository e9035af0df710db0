use crate::library;

#[test]
fn test_deep_learning_query() {
    let library = library();
    let hits = library.search("deep learning").unwrap();
    assert!(matches!(hits[0].id, 3 | 5));

    let rank = |id: i32| hits.iter().position(|h| h.id == id).unwrap_or(usize::MAX);
    assert!(rank(3) < rank(2));
    assert!(rank(5) < rank(2));
}

#[test]
fn test_results_are_capped_and_available() {
    let mut library = library();
    library.authenticate("Alice", "alice123").unwrap();
    library.borrow(3).unwrap();

    for query in ["deep learning", "data", "machine learning ai", "", "zzz"] {
        let hits = library.search(query).unwrap();
        assert!(hits.len() <= 3);
        assert!(hits.iter().all(|h| h.id != 3));
    }
}

#[test]
fn test_scores_non_increasing() {
    let library = library();
    let hits = library.services.catalog.search_scored("learning science").unwrap();
    assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_unrelated_query_falls_back_to_catalog_order() {
    let library = library();
    let ids: Vec<i32> = library.search("cooking").unwrap().iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_new_items_are_searchable() {
    let library = library();
    library.add_item("Reinforcement Learning", "Rich Sutton", "Reinforcement").unwrap();
    assert_eq!(library.search("reinforcement").unwrap()[0].id, 6);
}
