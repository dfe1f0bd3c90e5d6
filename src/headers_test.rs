use super::*;
use crate::constants::header;

mod new {
    use super::*;

    #[test]
    fn should_start_with_empty_headers_when_called() {
        // Arrange & Act
        let collection = HeaderCollection::new();

        // Assert
        assert!(collection.into_headers().is_empty());
    }
}

mod push {
    use super::*;

    #[test]
    fn should_store_once_given_header_is_regular() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.push(header::ACCESS_CONTROL_EXPOSE_HEADERS.into(), "X-Trace".into());

        // Assert
        let headers = collection.into_headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_EXPOSE_HEADERS),
            Some(&"X-Trace".to_string())
        );
    }

    #[test]
    fn should_use_deduplicated_value_given_header_is_vary() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.push(header::VARY.to_string(), "Origin".into());
        collection.push("vary".to_string(), "origin".into());

        // Assert
        let headers = collection.into_headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(header::VARY), Some(&"Origin".to_string()));
    }

    #[test]
    fn should_keep_insertion_order_given_several_headers() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.add_vary(header::ORIGIN);
        collection.push(header::ACCESS_CONTROL_ALLOW_ORIGIN.into(), "*".into());
        collection.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS.into(), "true".into());

        // Assert
        let names: Vec<_> = collection.into_headers().into_keys().collect();
        assert_eq!(
            names,
            vec![
                header::VARY,
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS
            ]
        );
    }
}

mod add_vary {
    use super::*;

    #[test]
    fn should_store_unique_entries_given_values_have_mixed_case() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.add_vary("Origin");
        collection.add_vary("Access-Control-Request-Headers");
        collection.add_vary("origin");

        // Assert
        let headers = collection.into_headers();
        assert_eq!(
            headers.get(header::VARY),
            Some(&"Origin, Access-Control-Request-Headers".to_string())
        );
    }

    #[test]
    fn should_split_list_values_given_comma_separated_input() {
        // Arrange
        let mut collection = HeaderCollection::new();
        collection.add_vary("Origin");

        // Act
        collection.add_vary("Access-Control-Request-Method,  origin ,Authorization");

        // Assert
        let headers = collection.into_headers();
        assert_eq!(
            headers.get(header::VARY),
            Some(&"Origin, Access-Control-Request-Method, Authorization".to_string())
        );
    }

    #[test]
    fn should_not_create_header_given_value_is_whitespace() {
        // Arrange
        let mut collection = HeaderCollection::new();

        // Act
        collection.add_vary("   ");

        // Assert
        let headers = collection.into_headers();
        assert!(!headers.contains_key(header::VARY));
    }

    #[test]
    fn should_preserve_them_given_value_is_whitespace_and_existing_entries_present() {
        // Arrange
        let mut collection = HeaderCollection::new();
        collection.add_vary("Origin");

        // Act
        collection.add_vary("   ");

        // Assert
        let headers = collection.into_headers();
        assert_eq!(headers.get(header::VARY), Some(&"Origin".to_string()));
    }
}

mod extend {
    use super::*;

    #[test]
    fn should_combine_and_deduplicate_given_merging_collections() {
        // Arrange
        let mut base = HeaderCollection::new();
        base.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS.into(), "true".into());
        base.add_vary("Origin");
        let mut other = HeaderCollection::new();
        other.push(header::VARY.to_string(), "origin".into());
        other.push(header::ACCESS_CONTROL_EXPOSE_HEADERS.into(), "X-Trace".into());

        // Act
        base.extend(other);

        // Assert
        let headers = base.into_headers();
        assert_eq!(headers.get(header::VARY), Some(&"Origin".to_string()));
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some(&"true".to_string())
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_EXPOSE_HEADERS),
            Some(&"X-Trace".to_string())
        );
    }
}

mod header_sink {
    use super::*;

    #[test]
    fn should_replace_value_given_set_header_called_twice() {
        // Arrange
        let mut headers = Headers::new();

        // Act
        headers.set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "https://a.test");
        headers.set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "https://b.test");

        // Assert
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&"https://b.test".to_string())
        );
    }

    #[test]
    fn should_replace_value_given_existing_key_in_other_case() {
        // Arrange
        let mut headers = Headers::new();
        headers.insert(
            "access-control-allow-origin".into(),
            "http://stale.test".into(),
        );

        // Act
        headers.set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");

        // Assert
        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get("access-control-allow-origin"),
            Some(&"*".to_string())
        );
    }

    #[test]
    fn should_merge_into_existing_vary_given_lowercase_key() {
        // Arrange
        let mut headers = Headers::new();
        headers.insert("vary".into(), "Accept-Encoding".into());

        // Act
        headers.append_vary("Origin, accept-encoding");

        // Assert
        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get("vary"),
            Some(&"Accept-Encoding, Origin".to_string())
        );
    }
}

mod merge_vary {
    use super::*;

    #[test]
    fn should_return_none_given_only_empty_entries() {
        assert_eq!(merge_vary(None, " , ,"), None);
    }

    #[test]
    fn should_keep_first_seen_order_given_existing_value() {
        assert_eq!(
            merge_vary(Some("Origin"), "Authorization, ORIGIN"),
            Some("Origin, Authorization".to_string())
        );
    }
}
