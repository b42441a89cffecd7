use serde::de::DeserializeOwned;

/// Deserialize one JSON document from a reader, with JSON-path context in
/// error messages. Bytes after the document are left unread.
pub fn from_reader_with_path<T: DeserializeOwned>(
    input: impl std::io::Read,
) -> Result<T, serde_path_to_error::Error<serde_json::Error>> {
    let de = &mut serde_json::Deserializer::from_reader(input);
    serde_path_to_error::deserialize::<_, T>(de)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_exactly_one_document() {
        let value: serde_json::Value =
            from_reader_with_path(&b"{\"a\": 1} trailing"[..]).expect("first document parses");
        assert_eq!(value, serde_json::json!({"a": 1}));
    }

    #[test]
    fn error_carries_the_json_path() {
        let err = from_reader_with_path::<serde_json::Value>(&br#"{"a": [1, 1e999]}"#[..])
            .expect_err("out-of-range number");
        let path = err.path().to_string();
        assert!(path.starts_with('a'), "path = {path}");
    }
}
