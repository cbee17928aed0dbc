//! Integration tests for the `idc` binary.
//!
//! Each invocation gets an isolated environment: no config file, no
//! credentials, and a home directory inside a temp dir.

use assert_cmd::assert::{Assert, OutputAssertExt};
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OBJECT_ID: &str = "815a4c04-0be5-44f1-a876-e8ddc11dcf21";

/// An `idc` command that sees only what the test gives it.
fn idc(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("idc").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("xdg"))
        .env("IDC_CONFIG", home.path().join("missing.toml"))
        .env_remove("BASE_URL")
        .env_remove("IDC_USERNAME")
        .env_remove("IDC_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

fn object_document() -> serde_json::Value {
    json!({
        "data": [{
            "type": "node--islandora_object",
            "id": OBJECT_ID,
            "attributes": {"title": "Moonrise, Hernandez, New Mexico"},
            "relationships": {
                "field_subject": {"data": [
                    {"type": "taxonomy_term--subject", "id": "s1"},
                    {"type": "taxonomy_term--subject", "id": "s2"}
                ]},
                "field_model": {"data": null}
            }
        }]
    })
}

fn subject_document(id: &str, name: &str) -> serde_json::Value {
    json!({
        "data": [{
            "type": "taxonomy_term--subject",
            "id": id,
            "attributes": {"name": name}
        }]
    })
}

/// Run `cmd` off the async runtime so the mock server keeps serving.
async fn run(mut cmd: Command) -> Assert {
    let output = tokio::task::spawn_blocking(move || cmd.output())
        .await
        .unwrap()
        .unwrap();
    output.assert()
}

// =============================================================================
// Offline
// =============================================================================

mod offline {
    use super::*;

    #[test]
    fn help_lists_commands() {
        let home = TempDir::new().unwrap();
        idc(&home)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("get"))
            .stdout(predicate::str::contains("related"))
            .stdout(predicate::str::contains("config"));
    }

    #[test]
    fn malformed_type_is_usage_error() {
        let home = TempDir::new().unwrap();
        idc(&home)
            .args(["get", "islandora_object", OBJECT_ID])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--"));
    }

    #[test]
    fn config_shows_defaults() {
        let home = TempDir::new().unwrap();
        idc(&home)
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "base_url = https://islandora-idc.traefik.me",
            ))
            .stdout(predicate::str::contains("auth.password = (not set)"))
            .stderr(predicate::str::contains("IDC_CONFIG names a file that does not exist"));
    }

    #[test]
    fn config_reads_file_and_env() {
        let home = TempDir::new().unwrap();
        let config_path = home.path().join("idc.toml");
        std::fs::write(
            &config_path,
            "base_url = \"http://file.example\"\ntimeout_secs = 30\n\n[auth]\nusername = \"admin\"\n",
        )
        .unwrap();

        idc(&home)
            .env("IDC_CONFIG", &config_path)
            .env("BASE_URL", "http://env.example")
            .env("IDC_PASSWORD", "hunter2")
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("base_url = http://env.example"))
            .stdout(predicate::str::contains("timeout_secs = 30"))
            .stdout(predicate::str::contains("auth.username = admin"))
            .stdout(predicate::str::contains("auth.password = ********"))
            .stdout(predicate::str::contains("hunter2").not());
    }

    #[test]
    fn flag_overrides_env() {
        let home = TempDir::new().unwrap();
        idc(&home)
            .env("BASE_URL", "http://env.example")
            .args(["config", "--base-url", "http://flag.example"])
            .assert()
            .success()
            .stdout(predicate::str::contains("base_url = http://flag.example"));
    }

    #[test]
    fn invalid_base_url_fails() {
        let home = TempDir::new().unwrap();
        idc(&home)
            .args(["config", "--base-url", "ftp://example.org"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error:"));
    }

    #[test]
    fn invalid_config_file_fails() {
        let home = TempDir::new().unwrap();
        let config_path = home.path().join("idc.toml");
        std::fs::write(&config_path, "unknown_key = 1\n").unwrap();

        idc(&home)
            .env("IDC_CONFIG", &config_path)
            .arg("config")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load config"));
    }
}

// =============================================================================
// Against a mock site
// =============================================================================

mod online {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn get_prints_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/jsonapi/node/islandora_object"))
            .and(query_param("filter[id]", OBJECT_ID))
            .and(header("authorization", "Basic YWRtaW46c2VjcmV0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(object_document()))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let home = TempDir::new().unwrap();
        let mut cmd = idc(&home);
        cmd.env("IDC_USERNAME", "admin")
            .env("IDC_PASSWORD", "secret")
            .args(["--base-url", uri.as_str(), "get", "node--islandora_object", OBJECT_ID]);

        run(cmd)
            .await
            .success()
            .stdout(predicate::str::contains("Moonrise, Hernandez, New Mexico"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn username_alone_is_sent_with_empty_password() {
        let server = MockServer::start().await;
        // base64("admin:")
        Mock::given(method("GET"))
            .and(header("authorization", "Basic YWRtaW46"))
            .respond_with(ResponseTemplate::new(200).set_body_json(object_document()))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let home = TempDir::new().unwrap();
        let mut cmd = idc(&home);
        cmd.args([
            "--base-url",
            uri.as_str(),
            "--username",
            "admin",
            "get",
            "node--islandora_object",
            OBJECT_ID,
        ]);

        run(cmd)
            .await
            .success()
            .stderr(predicate::str::contains("No password configured for 'admin'"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn get_missing_resource_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;

        let uri = server.uri();
        let home = TempDir::new().unwrap();
        let mut cmd = idc(&home);
        cmd.args(["--base-url", uri.as_str(), "get", "node--islandora_object", OBJECT_ID]);

        run(cmd)
            .await
            .failure()
            .stderr(predicate::str::contains("expected exactly one resource"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn related_resolves_each_reference() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/jsonapi/node/islandora_object"))
            .respond_with(ResponseTemplate::new(200).set_body_json(object_document()))
            .mount(&server)
            .await;
        for (id, name) in [("s1", "Moon"), ("s2", "Villages")] {
            Mock::given(method("GET"))
                .and(path("/jsonapi/taxonomy_term/subject"))
                .and(query_param("filter[id]", id))
                .respond_with(ResponseTemplate::new(200).set_body_json(subject_document(id, name)))
                .expect(1)
                .mount(&server)
                .await;
        }

        let uri = server.uri();
        let home = TempDir::new().unwrap();
        let mut cmd = idc(&home);
        cmd.args([
            "--base-url",
            uri.as_str(),
            "related",
            "node--islandora_object",
            OBJECT_ID,
            "field_subject",
        ]);

        run(cmd)
            .await
            .success()
            .stdout(predicate::str::contains("Moon"))
            .stdout(predicate::str::contains("Villages"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn related_unknown_field_lists_available() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(object_document()))
            .mount(&server)
            .await;

        let uri = server.uri();
        let home = TempDir::new().unwrap();
        let mut cmd = idc(&home);
        cmd.args([
            "--base-url",
            uri.as_str(),
            "related",
            "node--islandora_object",
            OBJECT_ID,
            "field_creator",
        ]);

        run(cmd)
            .await
            .failure()
            .stderr(predicate::str::contains("field_subject"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn related_empty_field_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(object_document()))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let home = TempDir::new().unwrap();
        let mut cmd = idc(&home);
        cmd.args([
            "--base-url",
            uri.as_str(),
            "related",
            "node--islandora_object",
            OBJECT_ID,
            "field_model",
        ]);

        run(cmd)
            .await
            .success()
            .stderr(predicate::str::contains("no references"));
    }
}
