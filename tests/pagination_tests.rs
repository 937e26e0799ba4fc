use casting_agency::pagination::{ROWS_PER_PAGE, paginate};

fn rows(n: usize) -> Vec<usize> {
    (0..n).collect()
}

#[test]
fn test_first_page_holds_up_to_twelve_rows() {
    let data = rows(30);
    let page = paginate(&data, 1);
    assert_eq!(page.len(), ROWS_PER_PAGE);
    assert_eq!(page.first(), Some(&0));
    assert_eq!(page.last(), Some(&11));
}

#[test]
fn test_page_p_covers_the_expected_index_window() {
    let data = rows(30);
    let page = paginate(&data, 2);
    // Page 2 covers indices [12, 24).
    assert_eq!(page.first(), Some(&12));
    assert_eq!(page.last(), Some(&23));
}

#[test]
fn test_last_partial_page() {
    let data = rows(30);
    let page = paginate(&data, 3);
    assert_eq!(page.len(), 6);
    assert_eq!(page.first(), Some(&24));
}

#[test]
fn test_page_beyond_collection_is_empty_not_an_error() {
    let data = rows(30);
    assert!(paginate(&data, 4).is_empty());
    assert!(paginate(&data, 99).is_empty());
}

#[test]
fn test_collection_smaller_than_one_page() {
    let data = rows(5);
    assert_eq!(paginate(&data, 1).len(), 5);
    assert!(paginate(&data, 2).is_empty());
}

#[test]
fn test_page_zero_is_clamped_to_first_page() {
    let data = rows(20);
    assert_eq!(paginate(&data, 0), paginate(&data, 1));
}

#[test]
fn test_empty_collection_yields_empty_page() {
    let data: Vec<usize> = vec![];
    assert!(paginate(&data, 1).is_empty());
}
