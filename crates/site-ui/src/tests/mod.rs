//! Behavioral tests for UI bindings
//!
//! BDD-style tests using given-when-then naming. They exercise the `site-core`
//! machines exactly the way the components drive them, without a DOM.

mod counter_behaviors;
