use super::AllowedMethods;
use crate::constants::method;

fn collected(methods: &AllowedMethods) -> Vec<&str> {
    methods.iter().map(String::as_str).collect()
}

mod list {
    use super::*;

    #[test]
    fn should_uppercase_values_given_mixed_case() {
        let methods = ["get", "Post"];

        let result = AllowedMethods::list(methods);

        assert_eq!(collected(&result), vec!["GET", "POST"]);
    }

    #[test]
    fn should_create_empty_list_given_iterator_is_empty() {
        let methods: [&str; 0] = [];

        let result = AllowedMethods::list(methods);

        assert!(result.is_empty());
    }

    #[test]
    fn should_skip_blank_entries_given_values_include_empty_strings() {
        let methods = ["", " ", "GET"];

        let result = AllowedMethods::list(methods);

        assert_eq!(collected(&result), vec!["GET"]);
    }

    #[test]
    fn should_keep_first_instance_given_values_include_case_duplicates() {
        let methods = ["PUT", "put", "DELETE"];

        let result = AllowedMethods::list(methods);

        assert_eq!(collected(&result), vec!["PUT", "DELETE"]);
    }
}

mod default {
    use super::*;

    #[test]
    fn should_allow_get_and_post_given_default() {
        let result = AllowedMethods::default();

        assert_eq!(collected(&result), vec![method::GET, method::POST]);
    }
}

mod is_allowed {
    use super::*;

    #[test]
    fn should_allow_listed_method_given_any_case() {
        let methods = AllowedMethods::list([method::PUT, method::DELETE]);

        assert!(methods.is_allowed("PUT"));
        assert!(methods.is_allowed("delete"));
    }

    #[test]
    fn should_reject_unlisted_method_given_non_empty_list() {
        let methods = AllowedMethods::list([method::PUT, method::DELETE]);

        assert!(!methods.is_allowed(method::PATCH));
        assert!(!methods.is_allowed(method::GET));
        assert!(!methods.is_allowed(""));
    }

    #[test]
    fn should_allow_options_given_it_is_not_listed() {
        let methods = AllowedMethods::list([method::GET]);

        assert!(methods.is_allowed(method::OPTIONS));
        assert!(methods.is_allowed("options"));
    }

    #[test]
    fn should_reject_everything_but_options_given_empty_list() {
        let methods = AllowedMethods::list(Vec::<String>::new());

        assert!(!methods.is_allowed(method::GET));
        assert!(!methods.is_allowed(method::POST));
        assert!(!methods.is_allowed(""));
        assert!(methods.is_allowed(method::OPTIONS));
    }
}
