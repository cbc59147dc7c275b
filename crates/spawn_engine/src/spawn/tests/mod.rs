//! Multi-tick scenarios across the area and its objects

mod reuse;
