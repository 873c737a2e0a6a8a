//! Edge case tests for golex-scan
