use subjects_api::types::{PageResult, SubjectId};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_page_full() {
    let json = load_fixture("subjects_page.json");
    let page: PageResult = serde_json::from_str(&json).unwrap();
    assert_eq!(page.subjects.len(), 5);
    assert_eq!(page.total, 12);

    let first = &page.subjects[0];
    assert_eq!(first.id, SubjectId::from("1"));
    assert_eq!(first.name, "Algebra");
    assert_eq!(page.subjects[4].name, "Quimica General");
}

#[test]
fn deserialize_page_with_string_numbers() {
    let json = load_fixture("subjects_page_strings.json");
    let page: PageResult = serde_json::from_str(&json).unwrap();
    assert_eq!(page.total, 12);
    assert_eq!(page.subjects[0].id.as_str(), "11");
    assert_eq!(page.subjects[1].name, "Redes de Datos");
}

#[test]
fn deserialize_page_empty() {
    let json = load_fixture("subjects_empty.json");
    let page: PageResult = serde_json::from_str(&json).unwrap();
    assert!(page.subjects.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn deserialize_page_preserves_order() {
    let json = load_fixture("subjects_page.json");
    let page: PageResult = serde_json::from_str(&json).unwrap();
    let ids: Vec<&str> = page.subjects.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn deserialize_page_missing_total_fails() {
    let result = serde_json::from_str::<PageResult>(r#"{"subjects":[]}"#);
    assert!(result.is_err());
}
