mod common;

use common::asserts::assert_simple;
use common::builders::{cors, simple_request};
use common::headers::{has_header, header_value, vary_values};
use email_writer_cors::constants::{header, method, origin as known};
use email_writer_cors::{CorsDecision, Origin};

mod check {
    use super::*;

    #[test]
    fn should_echo_origin_when_local_dev_server_calls_api_then_allow() {
        let cors = cors().build();

        let headers = assert_simple(simple_request().origin(known::LOCAL_DEV).check(&cors));

        assert_eq!(
            header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("http://localhost:5173"),
        );
        assert!(vary_values(&headers).contains(header::ORIGIN));
    }

    #[test]
    fn should_echo_origin_when_each_deployed_frontend_calls_api_then_allow() {
        let cors = cors().build();

        for origin in [known::RENDER_DEPLOYMENT, known::VERCEL_DEPLOYMENT] {
            let headers = assert_simple(
                simple_request()
                    .method(method::POST)
                    .path("/api/email/generate")
                    .origin(origin)
                    .check(&cors),
            );

            assert_eq!(
                header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
                Some(origin),
            );
        }
    }

    #[test]
    fn should_omit_allow_origin_when_unknown_site_calls_api_then_leave_blocking_to_browser() {
        let cors = cors().build();

        let decision = simple_request()
            .origin("https://evil.example.com")
            .check(&cors);

        let headers = assert_simple(decision);
        assert!(!has_header(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN));
        assert!(vary_values(&headers).contains(header::ORIGIN));
    }

    #[test]
    fn should_omit_credentials_when_credentials_disabled_then_never_emit() {
        let cors = cors().build();

        for origin in [known::LOCAL_DEV, "https://evil.example.com"] {
            let headers = assert_simple(simple_request().origin(origin).check(&cors));

            assert!(!has_header(&headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS));
        }
    }

    #[test]
    fn should_omit_preflight_only_headers_when_actual_request_then_keep_response_small() {
        let cors = cors().build();

        let headers = assert_simple(
            simple_request()
                .method(method::PUT)
                .origin(known::LOCAL_DEV)
                .check(&cors),
        );

        assert!(!has_header(&headers, header::ACCESS_CONTROL_ALLOW_METHODS));
        assert!(!has_header(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS));
        assert!(!has_header(&headers, header::ACCESS_CONTROL_MAX_AGE));
    }

    #[test]
    fn should_return_not_applicable_when_request_has_no_origin_then_skip() {
        let cors = cors().build();

        let decision = simple_request().check(&cors);

        assert!(matches!(decision, CorsDecision::NotApplicable));
    }

    #[test]
    fn should_decorate_method_outside_allow_list_when_origin_allowed_then_still_echo() {
        let cors = cors().build();

        let headers = assert_simple(
            simple_request()
                .method("PATCH")
                .origin(known::LOCAL_DEV)
                .check(&cors),
        );

        assert_eq!(
            header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(known::LOCAL_DEV),
        );
    }

    #[test]
    fn should_emit_wildcard_when_any_origin_configured_then_skip_vary() {
        let cors = cors().origin(Origin::any()).build();

        let headers = assert_simple(simple_request().origin("https://x.example").check(&cors));

        assert_eq!(
            header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("*"),
        );
        assert!(!has_header(&headers, header::VARY));
    }
}
