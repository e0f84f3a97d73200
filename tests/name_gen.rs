use sorteio::name_gen::{
    parse_response, request_body, spawn_generate, GeminiGenerator, NameGenerator, PendingImport,
};
use sorteio::settings::NameGenSettings;
use std::sync::Arc;
use std::time::Duration;

struct Canned(Vec<&'static str>);

impl NameGenerator for Canned {
    fn generate(&self, _topic: &str) -> anyhow::Result<Vec<String>> {
        Ok(self.0.iter().map(|s| s.to_string()).collect())
    }
}

struct Failing;

impl NameGenerator for Failing {
    fn generate(&self, _topic: &str) -> anyhow::Result<Vec<String>> {
        anyhow::bail!("service unavailable")
    }
}

#[test]
fn parses_generated_array() {
    let body = r#"{
        "candidates": [{
            "content": { "parts": [{ "text": "[\"Ana\", \"Bruno\", \"Carla\"]" }] }
        }]
    }"#;
    assert_eq!(parse_response(body).unwrap(), vec!["Ana", "Bruno", "Carla"]);
}

#[test]
fn joins_split_text_parts() {
    let body = r#"{
        "candidates": [{
            "content": { "parts": [{ "text": "[\"Ana\"," }, { "text": " \"Bia\"]" }] }
        }]
    }"#;
    assert_eq!(parse_response(body).unwrap(), vec!["Ana", "Bia"]);
}

#[test]
fn missing_text_yields_no_names() {
    assert!(parse_response(r#"{ "candidates": [] }"#).unwrap().is_empty());
    assert!(parse_response(r#"{}"#).unwrap().is_empty());
    assert!(parse_response(r#"{ "candidates": [{ "content": { "parts": [] } }] }"#)
        .unwrap()
        .is_empty());
}

#[test]
fn non_array_text_yields_no_names() {
    let body = r#"{ "candidates": [{ "content": { "parts": [{ "text": "{\"name\": \"Ana\"}" }] } }] }"#;
    assert!(parse_response(body).unwrap().is_empty());
}

#[test]
fn non_string_items_are_skipped() {
    let body = r#"{ "candidates": [{ "content": { "parts": [{ "text": "[\"Ana\", 3, null, \"Bia\"]" }] } }] }"#;
    assert_eq!(parse_response(body).unwrap(), vec!["Ana", "Bia"]);
}

#[test]
fn malformed_body_is_an_error() {
    assert!(parse_response("<html>bad gateway</html>").is_err());
    let body = r#"{ "candidates": [{ "content": { "parts": [{ "text": "Ana, Bia" }] } }] }"#;
    assert!(parse_response(body).is_err());
}

#[test]
fn request_asks_for_a_string_array() {
    let body = request_body("frutas", 10);
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("10 frutas"));
    assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    assert_eq!(body["generationConfig"]["responseSchema"]["type"], "ARRAY");
    assert_eq!(body["generationConfig"]["responseSchema"]["items"]["type"], "STRING");
}

#[test]
fn missing_api_key_fails_without_a_request() {
    let settings = NameGenSettings {
        api_key: None,
        api_key_env: "SORTEIO_TEST_NO_SUCH_KEY".into(),
        ..Default::default()
    };
    let generator = GeminiGenerator::new(&settings).unwrap();
    let err = generator.generate("nomes").unwrap_err();
    assert!(err.to_string().contains("API key"));
}

fn wait(pending: &PendingImport) -> anyhow::Result<Vec<String>> {
    for _ in 0..500 {
        if let Some(res) = pending.try_take() {
            return res;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("generation did not finish");
}

#[test]
fn background_generation_delivers_results() {
    let pending = spawn_generate(Arc::new(Canned(vec!["Ana", "Bia"])), "nomes".into());
    assert_eq!(wait(&pending).unwrap(), vec!["Ana", "Bia"]);

    let pending = spawn_generate(Arc::new(Failing), "nomes".into());
    let err = wait(&pending).unwrap_err();
    assert!(err.to_string().contains("service unavailable"));
}
