//! Integration tests for option stringification

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {

    use flagline::command::Command;
    use flagline::operations::stringify_options::stringify_options;
    use flagline::options::OptionsMap;

    fn command(name: &str, flags: &[&str]) -> Command {
        flags
            .iter()
            .fold(Command::new(name), |cmd, spec| cmd.option(spec).unwrap())
    }

    #[test]
    fn string_options_in_order() {
        let build = command(
            "build",
            &[
                "--output <path>",
                "--config <file>",
                "--env <environment>",
                "--target <target>",
            ],
        );
        let options = OptionsMap::new()
            .with("output", "/dist")
            .with("config", "webpack.config.js")
            .with("env", "production")
            .with("target", "es2020");

        assert_eq!(
            stringify_options(&options, Some(&build)),
            "--output /dist --config webpack.config.js --env production --target es2020"
        );
    }

    #[test]
    fn mixed_boolean_and_string_options() {
        let deploy = command(
            "deploy",
            &[
                "--dry-run",
                "--verbose",
                "--environment <env>",
                "--config-file <path>",
                "--force",
                "--timeout <seconds>",
            ],
        );

        let mixed = OptionsMap::new()
            .with("dryRun", true)
            .with("verbose", false)
            .with("environment", "prod")
            .with("configFile", "/app/config.json")
            .with("force", false)
            .with("timeout", "600");
        assert_eq!(
            stringify_options(&mixed, Some(&deploy)),
            "--dry-run --environment prod --config-file /app/config.json --timeout 600"
        );

        let all_true = OptionsMap::new()
            .with("dryRun", true)
            .with("verbose", true)
            .with("environment", "dev")
            .with("configFile", "/dev/config.json")
            .with("force", true)
            .with("timeout", "60");
        assert_eq!(
            stringify_options(&all_true, Some(&deploy)),
            "--dry-run --verbose --environment dev --config-file /dev/config.json --force --timeout 60"
        );
    }

    #[test]
    fn edge_values_pass_through_literally() {
        let test = command(
            "test",
            &[
                "--message <msg>",
                "--path <path>",
                "--enable-feature",
                "--count <number>",
            ],
        );

        let empty = OptionsMap::new()
            .with("message", "")
            .with("path", "/tmp")
            .with("enableFeature", true)
            .with("count", "0");
        assert_eq!(
            stringify_options(&empty, Some(&test)),
            "--message  --path /tmp --enable-feature --count 0"
        );

        let special = OptionsMap::new()
            .with("message", "Hello World!")
            .with("path", "/path/with spaces/file.txt")
            .with("enableFeature", false)
            .with("count", "42");
        assert_eq!(
            stringify_options(&special, Some(&test)),
            "--message Hello World! --path /path/with spaces/file.txt --count 42"
        );

        let boolean_like = OptionsMap::new()
            .with("message", "true")
            .with("path", "false")
            .with("enableFeature", true)
            .with("count", "yes");
        assert_eq!(
            stringify_options(&boolean_like, Some(&test)),
            "--message true --path false --enable-feature --count yes"
        );
    }

    #[test]
    fn lone_empty_value_keeps_trailing_space() {
        let test = command("test", &["--message <msg>"]);
        let options = OptionsMap::new().with("message", "");
        assert_eq!(stringify_options(&options, Some(&test)), "--message ");
    }

    #[test]
    fn short_flags_render_long_names() {
        let build = command(
            "build",
            &[
                "-v, --verbose",
                "-o, --output <dir>",
                "-w, --watch",
                "-m, --minify",
                "-c, --config <file>",
            ],
        );
        let options = OptionsMap::new()
            .with("verbose", true)
            .with("output", "dist")
            .with("watch", false)
            .with("minify", true)
            .with("config", "build.config.js");
        assert_eq!(
            stringify_options(&options, Some(&build)),
            "--verbose --output dist --minify --config build.config.js"
        );

        let by_short = OptionsMap::new().with("o", "out").with("w", true);
        assert_eq!(
            stringify_options(&by_short, Some(&build)),
            "--output out --watch"
        );
    }

    #[test]
    fn acronym_keys_match_declared_kebab_flags() {
        let transform = command(
            "transform",
            &[
                "--xml-http-request",
                "--html-output",
                "--api-key <key>",
                "--i-os-build",
            ],
        );
        let options = OptionsMap::new()
            .with("xmlHttpRequest", true)
            .with("htmlOutput", false)
            .with("apiKey", "secret123")
            .with("iOsBuild", true);
        assert_eq!(
            stringify_options(&options, Some(&transform)),
            "--xml-http-request --api-key secret123 --i-os-build"
        );
    }

    #[test]
    fn mixed_camel_and_kebab_declarations() {
        let mixed = command(
            "mixed",
            &[
                "--includeName",
                "--include-author",
                "--outputPath <path>",
                "--output-dir <dir>",
            ],
        );

        let options = OptionsMap::new()
            .with("includeName", true)
            .with("includeAuthor", false)
            .with("outputPath", "/tmp")
            .with("outputDir", "/dist");
        assert_eq!(
            stringify_options(&options, Some(&mixed)),
            "--includeName --outputPath /tmp --output-dir /dist"
        );

        let all_false = OptionsMap::new()
            .with("includeName", false)
            .with("includeAuthor", false)
            .with("outputPath", "/tmp")
            .with("outputDir", "/dist");
        assert_eq!(
            stringify_options(&all_false, Some(&mixed)),
            "--outputPath /tmp --output-dir /dist"
        );
    }

    #[test]
    fn missing_command_uses_kebab_names_and_values() {
        let options = OptionsMap::new()
            .with("someOption", "value")
            .with("booleanOption", true);
        assert_eq!(
            stringify_options(&options, None),
            "--some-option value --boolean-option true"
        );
    }

    #[test]
    fn json_like_values_are_not_escaped() {
        let process = command(
            "process",
            &[
                "--json-data <data>",
                "--array-values <values>",
                "--enable-parsing",
                "--format <format>",
            ],
        );
        let options = OptionsMap::new()
            .with("jsonData", r#"{"key": "value", "nested": {"prop": true}}"#)
            .with("arrayValues", "[1, 2, 3, 4]")
            .with("enableParsing", true)
            .with("format", "json");
        assert_eq!(
            stringify_options(&options, Some(&process)),
            r#"--json-data {"key": "value", "nested": {"prop": true}} --array-values [1, 2, 3, 4] --enable-parsing --format json"#
        );
    }

    #[test]
    fn options_from_json_keep_object_order() {
        let process = command(
            "process",
            &["--input-file <file>", "--enable-debug", "--max-retries <count>"],
        );
        let options = OptionsMap::from_json_str(
            r#"{"maxRetries": 5, "enableDebug": true, "inputFile": "/path/with-dashes/file.txt"}"#,
        )
        .unwrap();
        assert_eq!(
            stringify_options(&options, Some(&process)),
            "--max-retries 5 --enable-debug --input-file /path/with-dashes/file.txt"
        );
    }

    #[test]
    fn resolution_is_independent_of_other_keys() {
        let build = command("build", &["--dry-run", "--mode <mode>"]);
        let first = OptionsMap::new().with("dryRun", true).with("mode", "a");
        let second = OptionsMap::new().with("mode", "a").with("dryRun", true);
        assert_eq!(stringify_options(&first, Some(&build)), "--dry-run --mode a");
        assert_eq!(stringify_options(&second, Some(&build)), "--mode a --dry-run");
    }

    #[test]
    fn whole_floats_render_without_fraction() {
        let options = OptionsMap::from_json_str(r#"{"timeout": 1e3, "ratio": 2.0, "scale": 0.5}"#)
            .unwrap();
        assert_eq!(
            stringify_options(&options, None),
            "--timeout 1000 --ratio 2 --scale 0.5"
        );
    }
}
