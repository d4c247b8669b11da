//! Workflow and language configuration

use serde_json::json;
use std::time::Duration;
use switchboard_domain::value_objects::{FieldDescriptor, FieldType, LanguageEntry, PhoneNumber};
use switchboard_infrastructure::config::{LanguageConfig, WorkflowConfig, WorkflowInitiateConfig};

fn initiate() -> WorkflowInitiateConfig {
    WorkflowInitiateConfig::new(
        PhoneNumber::parse("+33600000000").unwrap(),
        "Contoso",
        "Amelie",
    )
}

#[test]
fn test_default_language_is_french() {
    let lang = LanguageConfig::default();

    assert_eq!(lang.default_short_code(), "fr-FR");
    assert_eq!(lang.availables().len(), 4);
    assert_eq!(lang.default_lang().short_code, "fr-FR");
    assert_eq!(lang.default_lang().human_name(), "French");
}

#[test]
fn test_default_language_matches_code() {
    let lang = LanguageConfig::new("es-ES", LanguageConfig::default().availables().to_vec()).unwrap();

    assert_eq!(lang.default_lang().voice, "es-ES-XimenaNeural");
    assert_eq!(lang.find("zh-CN").map(LanguageEntry::human_name), Some("Chinese"));
}

#[test]
fn test_unknown_default_falls_back_to_first_entry() {
    let lang = LanguageConfig::new(
        "de-DE",
        vec![
            LanguageEntry::new("en-US", &["English"], "en-US-AvaMultilingualNeural"),
            LanguageEntry::new("fr-FR", &["French"], "fr-FR-VivienneMultilingualNeural"),
        ],
    )
    .unwrap();

    assert_eq!(lang.default_lang().short_code, "en-US");
}

#[test]
fn test_language_list_cannot_be_empty() {
    assert!(LanguageConfig::new("fr-FR", Vec::new()).unwrap_err().is_configuration());
    assert!(
        serde_json::from_value::<LanguageConfig>(json!({"availables": []})).is_err()
    );
}

#[test]
fn test_language_entries_need_a_pronunciation() {
    let result = LanguageConfig::new("fr-FR", vec![LanguageEntry::new("fr-FR", &[], "voice")]);
    assert!(result.is_err());
}

#[test]
fn test_partial_language_section_keeps_default_list() {
    let lang: LanguageConfig = serde_json::from_value(json!({"default_short_code": "en-US"})).unwrap();

    assert_eq!(lang.availables().len(), 4);
    assert_eq!(lang.default_lang().human_name(), "English");
}

#[test]
fn test_claim_schema_appends_policyholder_fields() {
    let schema = initiate().claim_schema().unwrap();

    assert_eq!(schema.name(), "ClaimEntryModel");
    assert_eq!(schema.fields().len(), 12);
    assert_eq!(schema.fields()[0].name, "incident_datetime");
    assert_eq!(schema.fields()[0].field_type, FieldType::DateTime);

    let tail: Vec<_> = schema.fields()[9..]
        .iter()
        .map(|f| (f.name.as_str(), f.field_type))
        .collect();
    assert_eq!(
        tail,
        vec![
            ("policyholder_email", FieldType::Email),
            ("policyholder_name", FieldType::Text),
            ("policyholder_phone", FieldType::PhoneNumber),
        ]
    );
}

#[test]
fn test_claim_schema_rejects_clash_with_policyholder_field() {
    let mut initiate = initiate();
    initiate.claim.push(FieldDescriptor::new(
        "policyholder_email",
        "Email, again",
        FieldType::Email,
    ));

    assert!(initiate.claim_schema().is_err());
}

#[test]
fn test_workflow_defaults_and_durations() {
    let workflow: WorkflowConfig = serde_json::from_value(json!({
        "initiate": {
            "agent_phone_number": "+33600000000",
            "bot_company": "Contoso",
            "bot_name": "Amelie"
        }
    }))
    .unwrap();

    assert_eq!(workflow, WorkflowConfig::new(initiate()));
    assert_eq!(workflow.conversation_timeout(), Duration::from_secs(72 * 3600));
    assert_eq!(workflow.intelligence_hard_timeout(), Duration::from_secs(180));
    assert_eq!(workflow.intelligence_soft_timeout(), Duration::from_secs(30));
    assert_eq!(workflow.voice_timeout_after_silence(), Duration::from_secs(2));
    assert_eq!(workflow.max_voice_recognition_retry, 3);
    assert!(workflow.use_slow_llm_for_chat_as_default);
    assert!(workflow.initiate.task.starts_with("Help the customer"));
}
