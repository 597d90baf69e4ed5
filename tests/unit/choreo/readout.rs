use super::*;

#[test]
fn standard_chrome_matches_page_fades() {
    let chrome = ChromeTimelines::standard().unwrap();

    let start = chrome.sample(Progress::START);
    assert_eq!(start.title_opacity, 1.0);
    assert_eq!(start.hint_opacity, 1.0);
    assert_eq!(start.bar, 0.0);

    let mid = chrome.sample(Progress::new(0.5));
    assert_eq!(mid.title_opacity, 0.0);
    assert_eq!(mid.hint_opacity, 0.0);
    assert_eq!(mid.percent(), 50.0);

    let end = chrome.sample(Progress::END);
    assert_eq!(end.hint_opacity, 1.0);
    assert_eq!(end.percent(), 100.0);

    let fading = chrome.sample(Progress::new(0.075));
    assert!((fading.title_opacity - 0.5).abs() < 1e-12);
}

#[test]
fn chrome_deserializes_from_keys() {
    let chrome: ChromeTimelines = serde_json::from_str(
        r#"{
            "title_opacity": {"keys": [{"at": 0.0, "value": 1.0}, {"at": 0.2, "value": 0.0}]},
            "hint_opacity": {"keys": [{"at": 0.0, "value": 0.5}]}
        }"#,
    )
    .unwrap();
    assert_eq!(chrome.sample(Progress::new(0.1)).title_opacity, 0.5);
    assert_eq!(chrome.sample(Progress::END).hint_opacity, 0.5);
}

#[test]
fn unordered_chrome_keys_are_rejected() {
    let res: Result<ChromeTimelines, _> = serde_json::from_str(
        r#"{
            "title_opacity": {"keys": [{"at": 0.5, "value": 1.0}, {"at": 0.2, "value": 0.0}]},
            "hint_opacity": {"keys": [{"at": 0.0, "value": 1.0}]}
        }"#,
    );
    assert!(res.is_err());
}
