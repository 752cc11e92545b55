use certigen::certificate::CertificateState;
use certigen::prompt::{
    extract_fields, extract_preferences, process_prompt, Color, ContentFields, Font,
    PreferenceFields, Template,
};

const AWARD_PROMPT: &str = "Create an elegant gold certificate of excellence for John Smith, \
                            issued by Tech Academy on June 1, 2024";

#[test]
fn test_end_to_end_scenario() {
    let fields = extract_fields(AWARD_PROMPT);
    assert_eq!(
        fields,
        ContentFields {
            recipient_name: Some("John Smith".to_string()),
            title: Some("Certificate of excellence".to_string()),
            description: None,
            issuer_name: Some("Tech Academy".to_string()),
            date: Some("June 1, 2024".to_string()),
        }
    );

    let prefs = extract_preferences(AWARD_PROMPT);
    assert_eq!(
        prefs,
        PreferenceFields {
            color: Some(Color::Gold),
            template: Some(Template::Elegant),
            font: None,
        }
    );
}

#[test]
fn test_extraction_is_idempotent() {
    let first = process_prompt(AWARD_PROMPT);
    let second = process_prompt(AWARD_PROMPT);
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_calls_agree() {
    let expected = process_prompt(AWARD_PROMPT);
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| process_prompt(AWARD_PROMPT)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_merge_over_defaults() {
    let processed = process_prompt(AWARD_PROMPT);
    let state = CertificateState::from_prompt(AWARD_PROMPT, &processed);

    assert_eq!(state.recipient_name, "John Smith");
    assert_eq!(state.title, "Certificate of excellence");
    assert_eq!(state.issuer_name, "Tech Academy");
    assert_eq!(state.date, "June 1, 2024");
    // untouched by the prompt
    assert_eq!(state.description, "");
    assert_eq!(state.font, Font::Serif);
    assert_eq!(state.download_stem(), "John-Smith");
}

#[test]
fn test_dated_numeric_falls_through_to_bare_date() {
    let fields = extract_fields("A modern certificate dated 04/09/2023");
    assert_eq!(fields.date.as_deref(), Some("04/09/2023"));
}

#[test]
fn test_cues_in_other_categories_do_not_leak() {
    let prefs = extract_preferences("Create a navy-themed award");
    assert_eq!(prefs.color, Some(Color::Blue));
    assert_eq!(prefs.template, None);
    assert_eq!(prefs.font, None);
}

#[test]
fn test_unusual_input_does_not_panic() {
    let long = "for ".repeat(20_000);
    let inputs = [
        "",
        "   ",
        "für Jürgen Ñoño 🎉 certificate",
        "日本語の証明書",
        "\u{0}\u{1}\u{7f}",
        long.as_str(),
    ];
    for input in inputs {
        let first = process_prompt(input);
        assert_eq!(first, process_prompt(input));
    }
}

#[test]
fn test_absent_fields_are_none_not_empty() {
    let processed = process_prompt("just some words");
    assert_eq!(processed.fields, ContentFields::default());
    assert_eq!(processed.preferences, PreferenceFields::default());
}
