//! Host-side integration tests for the control cycle.

mod control_loop_tests;
mod mock_hw;
