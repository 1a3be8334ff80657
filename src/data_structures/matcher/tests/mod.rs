//! Scenario and property-based tests for the pattern matcher.
