#![allow(dead_code)]

use cors_policy::{CorsDecision, CorsResult, Headers};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(result) => result.headers,
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> CorsResult {
    match decision {
        CorsDecision::Preflight(result) => result,
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_terminated(result: &CorsResult, status: u16) {
    assert_eq!(result.status, Some(status));
    assert!(result.end_response, "preflight should end the response");
}
