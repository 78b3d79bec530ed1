//! # Integration Tests
//!
//! 集成测试与端到端测试。
//!
//! 负责：
//! - 控制台路径场景 (dump / dd)
//! - 响应路径场景
//! - 由加载的配置驱动的追加日志行为

#[cfg(test)]
mod console_tests {
    use contracts::{DumpArg, DumperConfig, Outcome};
    use dumper::Dumper;
    use serde_json::json;

    fn console_dumper() -> Dumper<Vec<u8>> {
        Dumper::with_console(DumperConfig::default(), Vec::new())
    }

    fn output(dumper: Dumper<Vec<u8>>) -> String {
        String::from_utf8(dumper.into_console()).unwrap()
    }

    /// dump(1, "a", {x:1}): banner "DUMP", three labeled entries, keeps running
    #[test]
    fn test_dump_three_values() {
        let mut dumper = console_dumper();
        let a = 1;
        let b = "a";
        let c = json!({"x": 1});

        let outcome = dumper
            .dump(vec![DumpArg::from(&a), DumpArg::from(&b), DumpArg::from(&c)])
            .unwrap();
        assert_eq!(outcome, Outcome::Continue);

        let out = output(dumper);
        assert_eq!(out.matches("🔍 DUMP at ").count(), 1);
        for position in 1..=3 {
            assert!(out.contains(&format!("👉 Param {position}:\n")));
        }
        assert!(!out.contains("Param 4"));
        assert!(!out.contains("Execution stopped"));

        let first = out.find("👉 Param 1:").unwrap();
        let second = out.find("👉 Param 2:").unwrap();
        let third = out.find("👉 Param 3:").unwrap();
        assert!(first < second && second < third);
    }

    /// dd({x:1}): banner "DUMP & DIE", one entry, notice last, terminate signal
    #[test]
    fn test_dd_single_value() {
        let mut dumper = console_dumper();
        let value = json!({"x": 1});

        let outcome = dumper.dd(vec![DumpArg::from(&value)]).unwrap();
        assert_eq!(outcome, Outcome::Terminate);
        assert_eq!(outcome.exit_code(), Some(1));

        let out = output(dumper);
        assert_eq!(out.matches("🔍 DUMP & DIE at ").count(), 1);
        assert_eq!(out.matches("👉 Param ").count(), 1);

        let param = out.find("👉 Param 1:").unwrap();
        let stopped = out.find("🚫 Execution stopped.").unwrap();
        assert!(param < stopped);
        assert!(out.trim_end().ends_with("🚫 Execution stopped."));
    }

    #[test]
    fn test_dump_and_dd_write_the_same_params() {
        let value = vec![1, 2, 3];

        let mut dumper = console_dumper();
        let _ = dumper.dump(vec![DumpArg::from(&value)]).unwrap();
        let dump_out = output(dumper);

        let mut dumper = console_dumper();
        let _ = dumper.dd(vec![DumpArg::from(&value)]).unwrap();
        let dd_out = output(dumper);

        let params = |out: &str| {
            let start = out.find("👉 Param 1:").unwrap();
            let end = out.find("🚫").unwrap_or(out.len());
            out[start..end].trim_end().to_string()
        };
        assert_eq!(params(&dump_out), params(&dd_out));
    }
}

#[cfg(test)]
mod response_tests {
    use chrono::DateTime;
    use contracts::{DumpArg, DumperConfig, Outcome, ResponseStatus};
    use dumper::{Dumper, HttpResponder, RecordedResponse};
    use serde_json::json;

    /// dump(res, {user:"bob"}): status(200).json({status:"debug", ...}), console untouched
    #[test]
    fn test_dump_to_responder() {
        let mut dumper = Dumper::with_console(DumperConfig::default(), Vec::new());
        let mut res = RecordedResponse::new("res");
        let user = json!({"user": "bob"});

        let outcome = dumper
            .dump(vec![DumpArg::responder(&mut res), DumpArg::from(&user)])
            .unwrap();
        assert_eq!(outcome, Outcome::Continue);
        assert!(dumper.console().is_empty());

        assert_eq!(res.status_code(), Some(200));
        assert_eq!(res.calls(), 1);
        let body = res.body().unwrap();
        assert_eq!(body.status, ResponseStatus::Debug);
        assert!(DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
        assert!(body.timestamp.ends_with('Z'));
        assert_eq!(body.data, vec![json!({"user": "bob"})]);
    }

    /// dd(res, {user:"bob"}): same payload with "terminated", then terminate signal
    #[test]
    fn test_dd_to_responder() {
        let mut dumper = Dumper::with_console(DumperConfig::default(), Vec::new());
        let mut res = RecordedResponse::new("res");
        let user = json!({"user": "bob"});

        let outcome = dumper
            .dd(vec![DumpArg::responder(&mut res), DumpArg::from(&user)])
            .unwrap();
        assert_eq!(outcome, Outcome::Terminate);
        assert!(dumper.console().is_empty());

        let body = res.body().unwrap();
        assert_eq!(body.status, ResponseStatus::Terminated);
        assert_eq!(body.data, vec![json!({"user": "bob"})]);
    }

    #[test]
    fn test_response_keeps_order_of_remaining_values() {
        let mut dumper = Dumper::with_console(DumperConfig::default(), Vec::new());
        let mut res = RecordedResponse::new("res");
        let (a, b, c) = ("first", 2, json!([3]));

        let _ = dumper
            .dump(vec![
                DumpArg::responder(&mut res),
                DumpArg::from(&a),
                DumpArg::from(&b),
                DumpArg::from(&c),
            ])
            .unwrap();

        let body = res.body().unwrap();
        assert_eq!(body.data, vec![json!("first"), json!(2), json!([3])]);
    }

    #[test]
    fn test_http_response_wire_format() {
        let mut dumper = Dumper::with_console(DumperConfig::default(), Vec::new());
        let mut res = HttpResponder::new("http", Vec::new());
        let user = json!({"user": "bob"});

        let _ = dumper
            .dd(vec![DumpArg::responder(&mut res), DumpArg::from(&user)])
            .unwrap();

        let raw = String::from_utf8(res.into_inner()).unwrap();
        let (head, payload) = raw.split_once("\r\n\r\n").unwrap();
        assert!(head.starts_with("HTTP/1.1 200 OK"));
        assert!(head.contains("Content-Type: application/json"));

        let body: serde_json::Value = serde_json::from_str(payload).unwrap();
        assert_eq!(body["status"], json!("terminated"));
        assert_eq!(body["data"], json!([{"user": "bob"}]));
        assert_eq!(
            body.as_object().unwrap().keys().collect::<Vec<_>>(),
            vec!["status", "timestamp", "data"]
        );
    }
}

#[cfg(test)]
mod log_file_tests {
    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::{DumpArg, DumperConfig, JsonReply, Responder};
    use dumper::{DumpError, Dumper, RecordedResponse};
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_logging_disabled_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = DumperConfig {
            log_to_file: false,
            log_file_path: dir.path().join("debug.log"),
        };
        let mut dumper = Dumper::with_console(config, Vec::new());
        let mut res = RecordedResponse::new("res");

        let _ = dumper.dump(vec![DumpArg::from(&1)]).unwrap();
        let _ = dumper.dd(vec![DumpArg::from(&2)]).unwrap();
        let _ = dumper
            .dump(vec![DumpArg::responder(&mut res), DumpArg::from(&3)])
            .unwrap();

        assert!(!dir.path().join("debug.log").exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_one_record_per_console_call() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("dumper.toml");
        fs::write(
            &config_path,
            "log_to_file = true\nlog_file_path = \"debug.log\"\n",
        )
        .unwrap();
        let config = ConfigLoader::load_from_path(&config_path).unwrap();
        let log_path = config.log_file_path.clone();

        let mut dumper = Dumper::with_console(config, Vec::new());
        let user = json!({"user": "bob"});
        let _ = dumper
            .dump(vec![DumpArg::from(&1), DumpArg::from(&"a")])
            .unwrap();
        let _ = dumper.dd(vec![DumpArg::from(&user)]).unwrap();

        let content = fs::read_to_string(&log_path).unwrap();
        assert_eq!(content.matches("] DUMP:\n").count(), 1);
        assert_eq!(content.matches("] DUMP & DIE:\n").count(), 1);
        assert!(content.contains("Param 1:\n1\n\nParam 2:\n\"a\"\n"));
        assert!(content.contains("Param 1:\n{\n  \"user\": \"bob\"\n}\n"));
        assert!(content.find("] DUMP:").unwrap() < content.find("] DUMP & DIE:").unwrap());
    }

    #[test]
    fn test_response_path_never_logs() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("debug.log");
        let mut dumper = Dumper::with_console(DumperConfig::logging_to(&log_path), Vec::new());
        let mut res = RecordedResponse::new("res");

        let _ = dumper
            .dd(vec![DumpArg::responder(&mut res), DumpArg::from(&1)])
            .unwrap();
        assert!(!log_path.exists());
    }

    #[test]
    fn test_append_failure_propagates() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("missing").join("debug.log");
        let mut dumper = Dumper::with_console(DumperConfig::logging_to(&log_path), Vec::new());

        let err = dumper.dump(vec![DumpArg::from(&1)]).unwrap_err();
        assert!(matches!(err, DumpError::LogFile { .. }));
    }

    #[test]
    fn test_config_from_json_string() {
        let config = ConfigLoader::load_from_str(
            r#"{"log_to_file": true, "log_file_path": "/tmp/dumper-debug.log"}"#,
            ConfigFormat::Json,
        )
        .unwrap();
        assert!(config.log_to_file);
    }

    /// Any Responder is routed as a response; its own failure surfaces as-is
    #[derive(Debug)]
    struct NotReallyHttp;

    impl Responder for NotReallyHttp {
        fn name(&self) -> &str {
            "not_really_http"
        }

        fn status(&mut self, _code: u16) -> &mut dyn JsonReply {
            self
        }
    }

    impl JsonReply for NotReallyHttp {
        fn json(&mut self, _body: &contracts::DumpResponse) -> Result<(), contracts::ContractError> {
            Err(contracts::ContractError::response(
                "not_really_http",
                "no socket behind this object",
            ))
        }
    }

    #[test]
    fn test_misrouted_responder_failure_propagates() {
        let mut dumper = Dumper::with_console(DumperConfig::default(), Vec::new());
        let mut res = NotReallyHttp;

        let err = dumper
            .dump(vec![DumpArg::responder(&mut res), DumpArg::from(&1)])
            .unwrap_err();
        assert!(err.to_string().contains("no socket behind this object"));
        assert!(dumper.console().is_empty());
    }
}
