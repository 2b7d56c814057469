#[cfg(test)]
mod tests {

    use std::error::Error;
    use std::path::PathBuf;
    use std::time::Duration;

    use ron;
    use wordle_dictionary::*;

    #[test]
    fn dictionary_config_serde() -> Result<(), Box<dyn Error>> {
        let config = DictionaryConfig {
            source_path: PathBuf::from("/usr/share/dict/words"),
            exclude_path: Some(PathBuf::from("remove.txt")),
            past_answers_url: "http://localhost:8080/answers".to_string(),
            fetch_timeout: Duration::from_secs(5),
            word_length: WORD_LENGTH,
        };

        let ser = ron::to_string(&config)?;
        let deser = ron::from_str::<DictionaryConfig>(&ser)?;

        assert_eq!(deser, config);
        Ok(())
    }

    #[test]
    fn dictionary_config_missing_fields_use_defaults() -> Result<(), Box<dyn Error>> {
        let config = ron::from_str::<DictionaryConfig>(r#"(source_path: "words.txt")"#)?;

        assert_eq!(
            config,
            DictionaryConfig {
                source_path: PathBuf::from("words.txt"),
                ..Default::default()
            }
        );
        assert_eq!(config.past_answers_url, DEFAULT_PAST_ANSWERS_URL);
        assert_eq!(config.fetch_timeout, DEFAULT_FETCH_TIMEOUT);
        assert!(config.exclude_path.is_none());
        Ok(())
    }

    #[test]
    fn word_restrictions_serde() -> Result<(), Box<dyn Error>> {
        let restrictions = parse_command_line("ertios -ag . -a -n .", WORD_LENGTH)?;

        let ser = ron::to_string(&restrictions)?;
        let deser = ron::from_str::<WordRestrictions>(&ser)?;

        assert_eq!(deser, restrictions);
        assert_eq!(
            deser.is_satisfied_by("vegan"),
            restrictions.is_satisfied_by("vegan")
        );
        Ok(())
    }
}
