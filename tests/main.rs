/*!
 * Main test entry point for enkores test suite
 */

// Import common test utilities
pub mod common;

// Import unit tests
mod unit {
    // Spacer and chunker property tests
    pub mod processing_tests;

    // Session orchestration tests
    pub mod orchestrator_tests;
}

// Import integration tests
mod integration {
    // End-to-end translate/summarize session flows
    pub mod pipeline_tests;
}
