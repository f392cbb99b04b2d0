//! Scenario tests over throwaway projects.


mod walker_tests;
