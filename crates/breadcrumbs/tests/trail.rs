use breadcrumbs::{Breadcrumb, Breadcrumbs, Variables};

fn texts(trail: &Breadcrumbs) -> Vec<&str> {
    trail
        .iter()
        .map(|crumb| crumb.text().unwrap_or_default())
        .collect()
}

fn seeded() -> Breadcrumbs {
    let mut trail = Breadcrumbs::new();
    trail.add("Home", Some("/"), None);
    trail.add("Shoes", Some("/shoes/"), None);
    trail.add("Vans", None, None);
    trail
}

#[test]
fn insert_at_every_valid_position() {
    for position in 0..=3 {
        let mut trail = seeded();
        let inserted = trail.insert(position, "New", Some("/new/"), None).cloned();

        assert_eq!(trail.len(), 4);
        let stored = trail.get(position).unwrap();
        assert_eq!(stored.text(), Some("New"));
        assert_eq!(stored.link(), Some("/new/"));
        assert_eq!(inserted.as_ref(), Some(stored));
    }
}

#[test]
fn insert_keeps_extra_vars_at_every_position() {
    let mut vars = Variables::new();
    vars.insert("icon".into(), Some("tag".into()));
    vars.insert("title".into(), Some("On sale".into()));

    for position in [0, 1, 3] {
        let mut trail = seeded();
        trail
            .insert(position, "Sale", Some("/sale/"), Some(vars.clone()))
            .unwrap();

        let crumb = trail.get(position).unwrap();
        assert_eq!(crumb.text(), Some("Sale"));
        assert_eq!(crumb.link(), Some("/sale/"));
        for (key, value) in &vars {
            assert_eq!(crumb.var(key), value.as_deref());
        }
    }
}

#[test]
fn insert_shifts_later_items_right() {
    let mut trail = seeded();
    trail.insert(1, "Sale", Some("/sale/"), None).unwrap();
    assert_eq!(texts(&trail), vec!["Home", "Sale", "Shoes", "Vans"]);
}

#[test]
fn insert_past_end_is_rejected_without_change() {
    let mut trail = seeded();
    let before = trail.clone();

    assert!(trail.insert(4, "Nope", None, None).is_none());
    assert!(trail.insert(usize::MAX, "Nope", None, None).is_none());
    assert_eq!(trail, before);
}

#[test]
fn delete_returns_item_and_shifts_neighbours() {
    let mut trail = seeded();
    let removed = trail.delete(1).unwrap();

    assert_eq!(removed.text(), Some("Shoes"));
    assert_eq!(trail.len(), 2);
    assert_eq!(texts(&trail), vec!["Home", "Vans"]);
}

#[test]
fn delete_out_of_range_is_noop() {
    let mut trail = seeded();
    assert!(trail.delete(3).is_none());
    assert!(trail.delete(100).is_none());
    assert_eq!(trail.len(), 3);

    let mut empty = Breadcrumbs::new();
    assert!(empty.delete(0).is_none());
}

#[test]
fn replace_in_range_returns_previous() {
    let mut trail = seeded();
    let old = trail.replace(2, "Converse", Some("/shoes/converse/"), None);

    assert_eq!(old.as_ref().and_then(Breadcrumb::text), Some("Vans"));
    assert_eq!(trail.len(), 3);
    assert_eq!(trail.get(2).and_then(Breadcrumb::link), Some("/shoes/converse/"));
}

#[test]
fn replace_past_end_appends_without_removal() {
    let mut trail = seeded();
    assert!(trail.replace(9, "Extra", None, None).is_none());
    assert_eq!(texts(&trail), vec!["Home", "Shoes", "Vans", "Extra"]);
}

#[test]
fn get_out_of_range_is_none() {
    let trail = seeded();
    assert!(trail.get(3).is_none());
    assert_eq!(trail.items().len(), 3);
}

#[test]
fn added_item_round_trips_extra_vars() {
    let mut trail = Breadcrumbs::new();
    let mut vars = Variables::new();
    vars.insert("icon".into(), Some("bag".into()));
    vars.insert("title".into(), Some("All shoes".into()));
    vars.insert("text".into(), Some("shadowed".into()));

    trail.add("Shoes", Some("/shoes/"), Some(vars.clone()));
    let crumb = trail.get(trail.len() - 1).unwrap();

    assert_eq!(crumb.var("text"), Some("Shoes"));
    assert_eq!(crumb.var("link"), Some("/shoes/"));
    for key in ["icon", "title"] {
        assert_eq!(crumb.var(key), vars[key].as_deref());
    }
}

#[test]
fn add_from_path_builds_cumulative_links() {
    let mut trail = Breadcrumbs::new();
    trail.add_from_path("/shoes/mens/casual/vans/", str::to_owned);

    let links: Vec<Option<&str>> = trail.iter().map(Breadcrumb::link).collect();
    assert_eq!(
        links,
        vec![
            Some("/shoes/"),
            Some("/shoes/mens/"),
            Some("/shoes/mens/casual/"),
            None,
        ]
    );
    assert_eq!(texts(&trail), vec!["shoes", "mens", "casual", "vans"]);
}

#[test]
fn add_from_path_appends_after_existing_items() {
    let mut trail = Breadcrumbs::new();
    trail.add("Home", Some("/"), None);
    trail.add_from_path("blog/2024", |segment| format!("<{segment}>"));

    assert_eq!(texts(&trail), vec!["Home", "<blog>", "<2024>"]);
    assert_eq!(trail.get(1).and_then(Breadcrumb::link), Some("/blog/"));
}
