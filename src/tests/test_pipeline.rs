#[cfg(test)]
mod tests {
    use crate::config::GeneratorConfig;
    use crate::errors::{ConfigError, PipelineError};
    use crate::pipeline::{self, classify_corpus, encode_metadata, load_corpus, AbilityCorpus};
    use crate::tests::common::TestAbilityBuilder;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::{tempdir, TempDir};

    fn sample_corpus() -> AbilityCorpus {
        AbilityCorpus {
            abilities: vec![
                TestAbilityBuilder::new("intimidate")
                    .with_id(22)
                    .with_effect("Lowers opposing Pokémon's Attack by one stage when it enters battle.")
                    .build(),
                TestAbilityBuilder::new("limber")
                    .with_id(7)
                    .with_effect("This Pokémon cannot be paralyzed.")
                    .build(),
                TestAbilityBuilder::new("mystery")
                    .with_id(999)
                    .with_effect("Does something never described before.")
                    .build(),
                TestAbilityBuilder::new("multitype")
                    .with_id(121)
                    .with_effect("Changes type to match the held plate.")
                    .build(),
                TestAbilityBuilder::new("chlorophyll")
                    .with_id(34)
                    .with_effect("This Pokémon's Speed is doubled during strong sunlight.")
                    .build(),
            ],
        }
    }

    fn write_corpus(dir: &TempDir, corpus: &AbilityCorpus) -> PathBuf {
        let path = dir.path().join("abilities.json");
        fs::write(&path, serde_json::to_vec(corpus).unwrap()).unwrap();
        path
    }

    fn config_for(input: &Path, output: PathBuf, parallel: bool) -> GeneratorConfig {
        GeneratorConfig {
            input_path: input.to_path_buf(),
            output_path: output,
            parallel,
            summary_examples: 2,
        }
    }

    #[test]
    fn test_run_writes_metadata_in_input_order() {
        let dir = tempdir().unwrap();
        let input = write_corpus(&dir, &sample_corpus());
        let output = dir.path().join("out").join("ability_metadata.json");

        let summary = pipeline::run(&config_for(&input, output.clone(), true)).unwrap();

        let written: Vec<serde_json::Value> =
            serde_json::from_slice(&fs::read(&output).unwrap()).unwrap();
        let names: Vec<&str> = written
            .iter()
            .map(|entry| entry["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["intimidate", "limber", "mystery", "multitype", "chlorophyll"]
        );
        assert_eq!(written[3]["pokemonRestriction"], serde_json::json!(["arceus"]));
        assert!(written[0].get("pokemonRestriction").is_none());

        assert_eq!(summary.abilities, 5);
        assert_eq!(summary.signature_profiles, 2);
        assert_eq!(summary.fallback_only, 1);
        assert_eq!(summary.restricted, 1);
        assert_eq!(summary.output_path, output);
        assert_eq!(summary.examples.len(), 2);
        assert_eq!(summary.examples[0].name, "intimidate");
    }

    #[test]
    fn test_parallel_and_sequential_output_are_identical() {
        let dir = tempdir().unwrap();
        let input = write_corpus(&dir, &sample_corpus());
        let parallel_out = dir.path().join("parallel.json");
        let sequential_out = dir.path().join("sequential.json");

        pipeline::run(&config_for(&input, parallel_out.clone(), true)).unwrap();
        pipeline::run(&config_for(&input, sequential_out.clone(), false)).unwrap();

        assert_eq!(
            fs::read(&parallel_out).unwrap(),
            fs::read(&sequential_out).unwrap()
        );
    }

    #[test]
    fn test_encoding_sorts_keys_and_ends_with_newline() {
        let corpus = AbilityCorpus {
            abilities: vec![TestAbilityBuilder::new("limber")
                .with_effect("This Pokémon cannot be paralyzed.")
                .build()],
        };
        let metadata: Vec<_> = classify_corpus(&corpus, false)
            .into_iter()
            .map(|classified| classified.metadata)
            .collect();
        let bytes = encode_metadata(&metadata).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.ends_with("]\n"));
        let position = |key: &str| text.find(&format!("\"{key}\"")).unwrap();
        let keys = [
            "categories",
            "effect",
            "effectLocalized",
            "effects",
            "id",
            "name",
            "nameLocalized",
            "schemaVersion",
        ];
        for pair in keys.windows(2) {
            assert!(position(pair[0]) < position(pair[1]), "{} before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_decode_failure_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("abilities.json");
        fs::write(&input, "{ not json").unwrap();
        let output = dir.path().join("ability_metadata.json");

        let result = pipeline::run(&config_for(&input, output.clone(), true));
        assert!(matches!(result, Err(PipelineError::DecodeInput { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_input_is_a_read_error() {
        let dir = tempdir().unwrap();
        let result = load_corpus(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(PipelineError::ReadInput { .. })));
    }

    #[test]
    fn test_load_corpus_accepts_legacy_localized_keys() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("abilities.json");
        fs::write(
            &input,
            r#"{"abilities":[{"id":1,"name":"stench","nameJa":"あくしゅう","effect":"Smells.","effectJa":"におう"}]}"#,
        )
        .unwrap();

        let corpus = load_corpus(&input).unwrap();
        assert_eq!(corpus.abilities[0].name_localized, "あくしゅう");
        assert_eq!(corpus.abilities[0].effect_localized, "におう");
    }

    #[test]
    fn test_config_from_ron_fills_defaults() {
        let config = GeneratorConfig::from_ron("(parallel: false)", Path::new("inline")).unwrap();
        assert_eq!(
            config,
            GeneratorConfig {
                parallel: false,
                ..GeneratorConfig::default()
            }
        );
        assert_eq!(
            GeneratorConfig::from_ron("()", Path::new("inline")).unwrap(),
            GeneratorConfig::default()
        );
    }

    #[test]
    fn test_config_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.ron");
        assert!(matches!(
            GeneratorConfig::resolve(Some(&missing)),
            Err(ConfigError::ReadFile { .. })
        ));

        let malformed = dir.path().join("bad.ron");
        fs::write(&malformed, "(parallel: maybe)").unwrap();
        assert!(matches!(
            GeneratorConfig::load(&malformed),
            Err(ConfigError::ParseRon { .. })
        ));
    }

    #[test]
    fn test_config_load_reads_paths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("generator.ron");
        fs::write(
            &path,
            r#"(input_path: "in.json", output_path: "out.json", summary_examples: 0)"#,
        )
        .unwrap();

        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(config.input_path, PathBuf::from("in.json"));
        assert_eq!(config.output_path, PathBuf::from("out.json"));
        assert!(config.parallel);
        assert_eq!(config.summary_examples, 0);
    }
}
